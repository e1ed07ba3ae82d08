
use neuroforge::cli::Cli;
use neuroforge::{runner, ExitStatus};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitStatus {
    dotenvy::dotenv().ok();

    let options = Cli::parse_lenient().into_options();
    let status = runner::run(options).await;

    if status != ExitStatus::Success {
        std::process::exit(status.code());
    }
    status
}
