use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = lyapunov_explorer::CliArgs::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match lyapunov_explorer::lyapunov_controller(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
