use crispy_chicken::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_level))?;
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.features.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    crispy_chicken::server::run(config).await
}
