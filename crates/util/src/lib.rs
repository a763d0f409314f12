//! Shared constants and runtime utilities for keyward.
//!
//! Defaults used by the server bootstrap live here so the binary, the
//! server crate, and tests agree on them.

// ============================================================================
// SESSION COOKIE
// ============================================================================
/// Cookie carrying the session token when `SESSION_COOKIE` is unset.
pub const SESSION_COOKIE: &str = "session";
/// Path attribute of the issued session cookie.
pub const SESSION_COOKIE_PATH: &str = "/";

// ============================================================================
// SERVER
// ============================================================================
/// Listen address when `BIND_ADDR` is unset.
pub const BIND_ADDR: &str = "127.0.0.1:8080";
/// actix-web worker threads when `WORKERS` is unset.
pub const WORKERS: usize = 4;

// ============================================================================
// PASSWORD HASHING
// ============================================================================
/// Random salt bytes per password hash (encoded into the PHC string).
pub const SALT_BYTES: usize = 16;

// ============================================================================
// LOGGING
// ============================================================================
/// Terminal log level when `LOG_LEVEL` is unset.
pub const LOG_LEVEL: &str = "info";
/// Log file directory when `LOG_DIR` is unset.
pub const LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Terminal level comes from `LOG_LEVEL`; the file under `LOG_DIR` always gets DEBUG.
#[cfg(feature = "server")]
pub fn log() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let dir = std::env::var("LOG_DIR").unwrap_or_else(|_| LOG_DIR.to_string());
    let level = level(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| LOG_LEVEL.to_string()))?;
    std::fs::create_dir_all(&dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(std::path::Path::new(&dir).join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Parse a level name like "debug" or "WARN" into a filter.
#[cfg(feature = "server")]
fn level(name: &str) -> Result<log::LevelFilter, Box<dyn std::error::Error + Send + Sync>> {
    name.trim()
        .parse::<log::LevelFilter>()
        .map_err(|_| format!("unknown log level: {}", name).into())
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(level(" WARN ").unwrap(), log::LevelFilter::Warn);
        assert_eq!(level(LOG_LEVEL).unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(level("loud").is_err());
    }
}
