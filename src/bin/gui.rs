use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match fractal_viewer::ViewerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let command = fractal_viewer::RunViewerCommand::new(config);

    if let Err(e) = command.execute() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Exiting...");
    ExitCode::SUCCESS
}
