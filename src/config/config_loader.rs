use anyhow::{Context, Result, bail};
use url::Url;

use crate::config::{
    config_model::{Backend, DotEnvyConfig, Server, Throttle, ZipPoll},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup; `load` passes the process environment.
pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| -> Result<String> {
        lookup(key)
            .filter(|value| !value.trim().is_empty())
            .with_context(|| format!("{key} is invalid"))
    };
    let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let server = Server {
        port: required("SERVER_PORT")?
            .parse::<u16>()
            .context("SERVER_PORT is invalid")?,
        body_limit: required("SERVER_BODY_LIMIT")?
            .parse::<u64>()
            .context("SERVER_BODY_LIMIT is invalid")?,
        timeout: required("SERVER_TIMEOUT")?
            .parse::<u64>()
            .context("SERVER_TIMEOUT is invalid")?,
    };

    let backend_url = required("PAYMENT_BACKEND_URL")?;
    Url::parse(&backend_url).context("PAYMENT_BACKEND_URL is invalid")?;
    let backend = Backend {
        url: backend_url,
        api_token: optional("PAYMENT_BACKEND_TOKEN"),
    };

    let throttle = Throttle {
        capacity: optional("BACKEND_RATE_CAPACITY")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("BACKEND_RATE_CAPACITY is invalid")?
            .unwrap_or(10),
        refill_per_sec: optional("BACKEND_RATE_REFILL_PER_SEC")
            .map(|raw| raw.parse::<f64>())
            .transpose()
            .context("BACKEND_RATE_REFILL_PER_SEC is invalid")?
            .unwrap_or(5.0),
    };
    if throttle.capacity == 0 || throttle.refill_per_sec <= 0.0 {
        bail!("BACKEND_RATE_CAPACITY and BACKEND_RATE_REFILL_PER_SEC must be positive");
    }

    let zip_poll = ZipPoll {
        interval_ms: optional("ZIP_POLL_INTERVAL_MS")
            .map(|raw| raw.parse::<u64>())
            .transpose()
            .context("ZIP_POLL_INTERVAL_MS is invalid")?
            .unwrap_or(1_000),
        max_attempts: optional("ZIP_POLL_MAX_ATTEMPTS")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("ZIP_POLL_MAX_ATTEMPTS is invalid")?
            .unwrap_or(20),
    };

    Ok(DotEnvyConfig {
        server,
        backend,
        throttle,
        zip_poll,
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = std::env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}
