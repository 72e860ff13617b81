use fractal_term::{ArgsError, RunTerminalCommand, USAGE, parse_launch_options};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_launch_options(std::env::args_os()) {
        Ok(options) => options,
        Err(ArgsError::Informational(err)) => err.exit(),
        Err(ArgsError::Usage(err)) => {
            debug!("rejected arguments: {err}");
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match RunTerminalCommand::new(options).execute() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
