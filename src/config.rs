use std::env;

pub const DEFAULT_BOOT_DELAY_MS: u64 = 700;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub boot_delay_ms: u64,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let boot_delay_ms = env::var("BOOT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_BOOT_DELAY_MS);
        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);
        Ok(Self {
            boot_delay_ms,
            seed_demo_data,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            boot_delay_ms: DEFAULT_BOOT_DELAY_MS,
            seed_demo_data: true,
        }
    }
}
