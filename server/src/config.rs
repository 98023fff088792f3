use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use todo_core::{InMemoryItemStore, Item};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON array of `{"id", "name"}` objects loaded at startup.
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("APP_PORT")
            .unwrap_or_else(|| "4000".to_string())
            .parse::<u16>()
            .context("APP_PORT must be a valid u16")?;

        let seed_file = lookup("TODO_SEED_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            seed_file,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The store the server starts with: seeded from `seed_file` when set,
    /// empty otherwise.
    pub fn build_store(&self) -> Result<InMemoryItemStore> {
        match &self.seed_file {
            Some(path) => load_seed(path),
            None => Ok(InMemoryItemStore::new()),
        }
    }
}

pub fn load_seed(path: &Path) -> Result<InMemoryItemStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&raw)
        .with_context(|| format!("seed file {} is not a JSON array of items", path.display()))?;
    InMemoryItemStore::with_items(items)
        .with_context(|| format!("seed file {} is invalid", path.display()))
}
