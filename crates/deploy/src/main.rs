#[tokio::main]
async fn main() -> std::process::ExitCode {
    deploy::start(std::env::args()).await
}
