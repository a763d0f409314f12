//! Keyward Backend Binary
//!
//! Serves registration, login, password change, and the welcome page.
//! Configured from the environment; see [`kw_server::Settings`].

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kw_core::log().map_err(|e| anyhow::anyhow!("initialize logger: {}", e))?;
    let settings = kw_server::Settings::from_env()?;
    log::debug!("settings {:?}", settings);
    kw_server::run(settings).await
}
