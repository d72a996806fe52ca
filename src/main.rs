mod app;
mod engine;
mod infra;
mod ui;

use std::process::ExitCode;

use app::controller::ApplicationController;
use engine::codec::ImageCrateCodec;
use infra::config::AppConfig;
use infra::logging;

fn main() -> ExitCode {
    logging::init_logging();
    let config = AppConfig::default();
    let controller = ApplicationController::new(Box::new(ImageCrateCodec));

    tracing::info!(title = %config.window_title, "starting color adjuster");
    match ui::app_shell::launch_window(config, controller) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}
