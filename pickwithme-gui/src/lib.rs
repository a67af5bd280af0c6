pub mod gui;
pub mod logger;
pub mod login;
pub mod services;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
