use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_term::{
    Complex, Fractal, FrameLoopConfig, FrameLoopController, GridSize, InputPort,
    NavigationCommand, TerminalPresenter,
};
use std::io;
use std::time::Duration;

struct IdleInput;

impl InputPort for IdleInput {
    fn poll_command(&mut self) -> io::Result<Option<NavigationCommand>> {
        Ok(None)
    }
}

fn bench_render_frame(c: &mut Criterion) {
    let config = FrameLoopConfig {
        frame_interval: Duration::ZERO,
        frame_budget: u64::MAX,
        ..FrameLoopConfig::default()
    };
    let fractals = [
        ("mandelbrot", Fractal::Mandelbrot),
        ("julia", Fractal::julia(Complex::new(-0.4, 0.6))),
    ];
    let sizes = [(80, 24), (240, 70)];

    let mut group = c.benchmark_group("render_frame");

    for (name, fractal) in fractals {
        for (width, height) in sizes {
            let grid_size = GridSize::new(width, height).expect("bench grid size is valid");
            let mut controller = FrameLoopController::new(
                fractal,
                grid_size,
                config,
                IdleInput,
                TerminalPresenter::new(io::sink()),
            )
            .expect("bench config is valid");

            group.bench_with_input(
                BenchmarkId::new(name, format!("{width}x{height}")),
                &grid_size,
                |b, _| b.iter(|| black_box(controller.step().expect("frame renders"))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
