use anyhow::Context;
use kw_auth::Hasher;

/// Startup configuration, read once from the environment.
///
/// | variable            | default                  |
/// |---------------------|--------------------------|
/// | `BIND_ADDR`         | `127.0.0.1:8080`         |
/// | `WORKERS`           | `4`                      |
/// | `SESSION_COOKIE`    | `session`                |
/// | `ARGON2_MEMORY_KIB` | argon2 recommended value |
/// | `ARGON2_ITERATIONS` | argon2 recommended value |
/// | `ARGON2_LANES`      | argon2 recommended value |
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub workers: usize,
    pub cookie: String,
    pub hasher: Hasher,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: kw_core::BIND_ADDR.to_string(),
            workers: kw_core::WORKERS,
            cookie: kw_core::SESSION_COOKIE.to_string(),
            hasher: Hasher::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let params = defaults.hasher.params();
        let memory = number(&lookup, "ARGON2_MEMORY_KIB", params.m_cost())?;
        let passes = number(&lookup, "ARGON2_ITERATIONS", params.t_cost())?;
        let lanes = number(&lookup, "ARGON2_LANES", params.p_cost())?;
        let workers = number(&lookup, "WORKERS", defaults.workers)?;
        if workers == 0 {
            anyhow::bail!("WORKERS must be greater than 0");
        }
        let cookie = lookup("SESSION_COOKIE").unwrap_or(defaults.cookie);
        if cookie.trim().is_empty() {
            anyhow::bail!("SESSION_COOKIE must not be empty");
        }
        Ok(Self {
            bind: lookup("BIND_ADDR").unwrap_or(defaults.bind),
            workers,
            cookie,
            hasher: Hasher::new(memory, passes, lanes)
                .map_err(|e| anyhow::anyhow!("{:?}", e))
                .context("invalid ARGON2_* settings")?,
        })
    }
}

fn number<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not a number: {:?}", key, raw)),
    }
}
