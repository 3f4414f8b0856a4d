#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub backend: Backend,
    pub throttle: Throttle,
    pub zip_poll: ZipPoll,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

/// Gallery/payment backend that owns wallets, charges and ZIP generation.
#[derive(Debug, Clone)]
pub struct Backend {
    pub url: String,
    pub api_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Throttle {
    pub capacity: u32,
    pub refill_per_sec: f64,
}

#[derive(Debug, Clone)]
pub struct ZipPoll {
    pub interval_ms: u64,
    pub max_attempts: u32,
}
