use std::process::ExitCode;

use env_logger::Env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match sentence_check::run(std::env::args().skip(1)).await {
        Ok(verdict) => verdict.into(),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
