use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_seed_dir")]
    pub seed_dir: String,
}

fn default_database_url() -> String { "warbler.db".into() }
fn default_seed_dir() -> String { "warbler-seed/data".into() }

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("WARBLER").separator("__"))
            .build()?;
        Ok(config.try_deserialize().unwrap_or_else(|_| Self {
            database_url: default_database_url(),
            seed_dir: default_seed_dir(),
        }))
    }
}
