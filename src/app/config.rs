use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    Mock,
    Http,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub gateway_mode: GatewayMode,
    pub gateway_url: String,
    pub gateway_delay_ms: u64,
    pub gateway_timeout_ms: u64,
    pub store_failure_rate: f64,
    pub min_donation_cents: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            gateway_mode: match env::var("GATEWAY_MODE")
                .unwrap_or_else(|_| "mock".to_string())
                .as_str()
            {
                "http" => GatewayMode::Http,
                _ => GatewayMode::Mock,
            },
            gateway_url: env::var("GATEWAY_URL")
                .unwrap_or_else(|_| "http://payment-gateway:8080".to_string()),
            gateway_delay_ms: env::var("GATEWAY_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string())
                .parse()
                .unwrap_or(1500),
            gateway_timeout_ms: env::var("GATEWAY_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            store_failure_rate: env::var("STORE_FAILURE_RATE")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0.0),
            min_donation_cents: env::var("MIN_DONATION_CENTS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        }
    }
}
