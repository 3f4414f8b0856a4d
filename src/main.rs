use std::sync::Arc;

use anyhow::Result;
use gallery_pricing::{
    config::config_loader,
    infrastructure::{
        axum_http::http_serve, payments::backend_client::PaymentBackendClient,
        throttle::RequestThrottle,
    },
    observability,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Gallery pricing exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    observability::init_observability("gallery-pricing")?;

    let dotenvy_env = config_loader::load()?;
    info!(stage = %config_loader::get_stage(), "ENV has been loaded");

    let throttle = Arc::new(RequestThrottle::new(
        dotenvy_env.throttle.capacity,
        dotenvy_env.throttle.refill_per_sec,
    )?);
    let backend = Arc::new(PaymentBackendClient::new(
        &dotenvy_env.backend.url,
        dotenvy_env.backend.api_token.clone(),
        throttle,
    ));
    info!(backend_url = %dotenvy_env.backend.url, "Payment backend client is ready");

    http_serve::start(Arc::new(dotenvy_env), backend).await?;

    Ok(())
}
