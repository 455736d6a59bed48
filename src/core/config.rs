use std::env;
use std::time::Duration;

// How long a signup outcome message stays visible
const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: String,
    pub api_base_url: String,
    pub message_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = env::var("ACTIVITY_BOARD_HOST").unwrap_or("127.0.0.1".to_string());
        let port = env::var("ACTIVITY_BOARD_PORT").unwrap_or("8000".to_string());
        let api_base_url =
            env::var("ACTIVITY_BOARD_API_URL").unwrap_or(format!("http://{}:{}", host, port));
        let message_timeout_ms = env::var("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MESSAGE_TIMEOUT_MS);

        Self {
            host,
            port,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            message_timeout: Duration::from_millis(message_timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "ACTIVITY_BOARD_HOST",
        "ACTIVITY_BOARD_PORT",
        "ACTIVITY_BOARD_API_URL",
        "ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: env mutation is confined to `#[serial]` tests
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn it_uses_defaults_without_env() {
        clear_env();
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, "8000");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.message_timeout, Duration::from_millis(5000));
    }

    #[test]
    #[serial]
    fn it_reads_overrides_from_env() {
        clear_env();
        unsafe {
            env::set_var("ACTIVITY_BOARD_PORT", "9001");
            env::set_var("ACTIVITY_BOARD_API_URL", "http://school.test/");
            env::set_var("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS", "250");
        }
        let config = AppConfig::default();
        assert_eq!(config.port, "9001");
        assert_eq!(config.api_base_url, "http://school.test");
        assert_eq!(config.message_timeout, Duration::from_millis(250));
        clear_env();
    }

    #[test]
    #[serial]
    fn it_falls_back_on_unparsable_timeout() {
        clear_env();
        unsafe { env::set_var("ACTIVITY_BOARD_MESSAGE_TIMEOUT_MS", "soon") };
        let config = AppConfig::default();
        assert_eq!(config.message_timeout, Duration::from_millis(5000));
        clear_env();
    }
}
