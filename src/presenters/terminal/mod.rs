pub mod presenter;
pub mod session;
