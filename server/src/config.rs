use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}': {1}")]
    InvalidPort(String, ParseIntError),
    #[error("Frontend bundle not found: {0} is missing")]
    MissingBundle(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(raw.clone(), e))?,
            None => DEFAULT_PORT,
        };

        let frontend_dir = lookup("FRONTEND_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_frontend_dir);

        Ok(Self {
            host,
            port,
            frontend_dir,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.frontend_dir.join("index.html")
    }

    /// Checks that the Trunk output is in place.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let index = self.index_file();
        if index.is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingBundle(index))
        }
    }
}

fn default_frontend_dir() -> PathBuf {
    PathBuf::from(format!("{}/../frontend/dist", env!("CARGO_MANIFEST_DIR")))
}
