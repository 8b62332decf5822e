//! Process configuration loaded from `KIN_GRAPH_*` environment variables.

use serde::Deserialize;

/// Prefix shared by every variable this service reads.
pub const ENV_PREFIX: &str = "KIN_GRAPH_";

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// `KIN_GRAPH_ADDR`: `host:port` to listen on.
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "0.0.0.0:8080".to_owned()
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX).from_env()
    }

    /// Reads configuration from explicit `(name, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(pairs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { addr: default_addr() }
    }
}
