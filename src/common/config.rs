// src/common/config.rs
//! Server configuration read from the environment (and `.env` via dotenv),
//! with a CLI override for the listen port.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001,http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Self { port, cors_origins }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Looks for `--port <n>` or `--port=<n>` in the given arguments
pub fn parse_port_arg<I>(args: I) -> Option<u16>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--port" {
            return args.next().and_then(|p| p.parse().ok());
        }
        if let Some(value) = arg.strip_prefix("--port=") {
            return value.parse().ok();
        }
    }
    None
}

/// Override the port from CLI args
pub fn apply_cli_override(mut config: ServerConfig) -> ServerConfig {
    if let Some(port) = parse_port_arg(env::args().skip(1)) {
        println!("🔧 CLI override: PORT = {}", port);
        config.port = port;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_default_origins_parse() {
        assert_eq!(parse_origins(DEFAULT_CORS_ORIGINS).len(), 3);
    }

    // The only test touching PORT/CORS_ORIGINS, so it cannot race another
    #[test]
    fn test_from_env_defaults_and_overrides() {
        // Save original env vars
        let original_port = env::var("PORT").ok();
        let original_origins = env::var("CORS_ORIGINS").ok();

        env::remove_var("PORT");
        env::remove_var("CORS_ORIGINS");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cors_origins, parse_origins(DEFAULT_CORS_ORIGINS));

        env::set_var("PORT", "9090");
        env::set_var("CORS_ORIGINS", "http://forms.test");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 9090);
        assert_eq!(config.cors_origins, vec!["http://forms.test"]);

        env::set_var("PORT", "not-a-port");
        assert_eq!(ServerConfig::from_env().port, DEFAULT_PORT);

        // Restore
        match original_port {
            Some(val) => env::set_var("PORT", val),
            None => env::remove_var("PORT"),
        }
        match original_origins {
            Some(val) => env::set_var("CORS_ORIGINS", val),
            None => env::remove_var("CORS_ORIGINS"),
        }
    }

    #[test]
    fn test_parse_port_arg() {
        assert_eq!(parse_port_arg(args(&["--port", "9000"])), Some(9000));
        assert_eq!(parse_port_arg(args(&["--verbose", "--port=3030"])), Some(3030));
        assert_eq!(parse_port_arg(args(&["--port"])), None);
        assert_eq!(parse_port_arg(args(&["--port", "nope"])), None);
        assert_eq!(parse_port_arg(args(&[])), None);
    }
}
