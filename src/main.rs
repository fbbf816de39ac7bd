use std::process::ExitCode;

use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with console replies
    let env = Env::default().filter_or("ATOMIC_CHESS_LOG", "warn");
    env_logger::Builder::from_env(env).init();

    match atomic_chess::console::run_console_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("console terminated: {e}");
            ExitCode::FAILURE
        }
    }
}
