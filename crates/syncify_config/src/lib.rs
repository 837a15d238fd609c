// --- File: crates/syncify_config/src/lib.rs ---

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures the dotenv file is loaded into the environment exactly once.
///
/// The path can be overridden with `DOTENV_OVERRIDE`; otherwise `.env`
/// in the working directory is used. Missing files are ignored.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());
    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}

/// Loads the unified application configuration.
///
/// Sources are layered: `config/default`, then `config/{RUN_ENV}`
/// (both optional), then environment variables with the `SYNCIFY`
/// prefix and `__` separator (e.g. `SYNCIFY_SERVER__PORT=8086`,
/// `SYNCIFY_SALESFORCE__CLIENT_ID=...`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "SYNCIFY".to_string());
    let config_dir = env::var("SYNCIFY_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    let builder = Config::builder()
        .add_source(File::with_name(&format!("{config_dir}/default")).required(false))
        .add_source(File::with_name(&format!("{config_dir}/{run_env}")).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}
