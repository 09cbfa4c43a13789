#[tokio::main]
async fn main() -> std::io::Result<()> {
    territory_server::run_with_config().await
}
