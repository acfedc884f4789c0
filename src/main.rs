use careguide::config::{self, Settings};

#[tokio::main]
async fn main() {
    careguide::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = Settings::from_env();
    if let Err(e) = careguide::api::server::serve(settings).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
