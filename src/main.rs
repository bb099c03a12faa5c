use vibetraffic::config::Config;
use vibetraffic::engine::Engine;
use vibetraffic::error::Error;
use vibetraffic::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let engine = Engine::from_config(&config).await?;

    serve(engine, config.bind_addr).await
}
