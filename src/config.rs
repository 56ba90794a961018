use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig{
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub store: StoreKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig{
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig{
    pub url: Option<String>,
    pub max_connections: u32,
}

/// Where courses are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind{
    #[default]
    Postgres,
    Memory,
}

impl Default for ServerConfig{
    fn default() -> Self {
        ServerConfig{
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig{
    fn default() -> Self {
        DatabaseConfig{
            url: None,
            max_connections: 5,
        }
    }
}

impl AppConfig{
    /// Defaults, then an optional `config` file, then `COURSES_*` variables
    /// (`COURSES_SERVER__PORT=9000`).
    pub fn load() -> Result<Self, config::ConfigError>{
        config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("COURSES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?
            .try_deserialize()
    }

    /// `database.url`, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Option<String>{
        self.database.url.clone().or_else(|| std::env::var("DATABASE_URL").ok())
    }

    pub fn server_address(&self) -> String{
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn test_defaults(){
        let config = AppConfig::default();

        assert_eq!(config.server_address(), "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.store, StoreKind::Postgres);
    }

    #[test]
    fn test_configured_url_wins(){
        let mut config = AppConfig::default();
        config.database.url = Some("postgres://localhost/courses".to_string());

        assert_eq!(config.database_url().as_deref(), Some("postgres://localhost/courses"));
    }

    #[test]
    fn test_load_reads_prefixed_environment(){
        std::env::set_var("COURSES_SERVER__PORT", "9100");
        std::env::set_var("COURSES_STORE", "memory");
        std::env::set_var("COURSES_DATABASE__URL", "postgres://x/y");

        let config = AppConfig::load();

        std::env::remove_var("COURSES_SERVER__PORT");
        std::env::remove_var("COURSES_STORE");
        std::env::remove_var("COURSES_DATABASE__URL");

        let config = config.unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.database.url.as_deref(), Some("postgres://x/y"));
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_database_url_falls_back_to_env(){
        std::env::set_var("DATABASE_URL", "postgres://localhost/fallback");

        let url = AppConfig::default().database_url();

        std::env::remove_var("DATABASE_URL");

        assert_eq!(url.as_deref(), Some("postgres://localhost/fallback"));
    }

    #[test]
    fn test_store_kind_names(){
        assert_eq!(serde_json::from_str::<StoreKind>(r#""memory""#).unwrap(), StoreKind::Memory);
        assert_eq!(serde_json::to_string(&StoreKind::Postgres).unwrap(), r#""postgres""#);
    }
}
