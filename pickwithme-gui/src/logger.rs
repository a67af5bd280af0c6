use tracing_subscriber::{
    filter::{self, LevelFilter},
    prelude::*,
};

pub fn setup_logger(log_level: LevelFilter) {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                // Reject spans and events whose targets belong to the
                // renderer and runtime internals.
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("iced_wgpu")
                        && !metadata.target().starts_with("iced_winit")
                        && !metadata.target().starts_with("iced_graphics")
                        && !metadata.target().starts_with("iced_runtime")
                        && !metadata.target().starts_with("iced_core")
                        && !metadata.target().starts_with("wgpu_core")
                        && !metadata.target().starts_with("wgpu_hal")
                        && !metadata.target().starts_with("naga")
                        && !metadata.target().starts_with("winit")
                        && !metadata.target().starts_with("cosmic_text")
                        && !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("tokio")
                })),
        )
        .init();
}
