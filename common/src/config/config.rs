use config::Config;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Arc;
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub auth: Option<AuthConfig>,
}
impl AppConfig {
    pub fn new(file: &String) -> Self {
        let config = Config::builder()
            .add_source(config::File::with_name(file).required(true))
            .add_source(config::Environment::with_prefix("APP").separator("_"))
            .build()
            .expect("Failed to build configuration");
        let cfg = config.try_deserialize::<AppConfig>().expect("Failed to deserialize configuration");
        return cfg;
    }
    pub fn init(file: &String) {
        let instance = Self::new(&file);
        INSTANCE.set(Arc::new(instance)).expect("INSTANCE already initialized");
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_auth(&self) -> AuthConfig {
        self.auth.clone().unwrap_or_default()
    }
    /// Singleton access, valid after `init`.
    pub fn get() -> Arc<Self> {
        INSTANCE.get().expect("INSTANCE is not initialized").clone()
    }
}
static INSTANCE: OnceCell<Arc<AppConfig>> = OnceCell::new();
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Path of the SQLite file holding the `clienti` table.
    pub path: String,
}
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SysConfig {
    // global log level
    pub log_level: String,
    // destination directory for uploaded assets
    pub upload_path: String,
    // md5 obfuscation key
    pub md5_key: String,
    // cookie-session signing secret, at least 64 chars
    pub session_secret: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Admin account allowed on the internal routes.
    pub admin_user: String,
    /// Keyed MD5 digest of the admin password (see `build_md5_with_key`).
    pub admin_password_hash: String,
}
