#![windows_subsystem = "windows"]

use std::{error::Error, process, str::FromStr, sync::Arc};

use iced::{Pixels, Settings};
use tracing_subscriber::filter::LevelFilter;

use pickwithme_gui::{gui::PickWithMe, logger, services::auth::CloudAuthGateway, VERSION};
use pickwithme_ui::theme::Theme;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: pickwithme [OPTIONS]

Options:
    -v, --version       Display pickwithme version
    -h, --help          Print help

The LOG_LEVEL environment variable selects the log verbosity.
        "#
        );
        process::exit(0);
    }

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        LevelFilter::INFO
    };
    logger::setup_logger(log_level);

    let settings = Settings {
        default_text_size: Pixels(16.0),
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: iced::Size::new(600.0, 700.0),
        ..Default::default()
    };

    iced::application(PickWithMe::title, PickWithMe::update, PickWithMe::view)
        .theme(|_| Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(|| PickWithMe::new(Arc::new(CloudAuthGateway::default())))?;

    Ok(())
}
