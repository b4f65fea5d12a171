//! Runtime configuration.

use clap::Parser;

use crate::store::MovieStore;

pub const DEFAULT_ADDR: &str = "localhost:8082";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line flags, each with an environment fallback.
#[derive(Clone, Debug, Parser)]
#[command(name = "marquee", version, about = "In-memory movie catalog over HTTP")]
pub struct Config {
    /// Address to listen on; host names are resolved
    #[arg(long, env = "MARQUEE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Log filter directive, e.g. `info` or `marquee=debug`
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    /// Start with an empty catalog instead of the seed movies
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    /// The catalog this configuration starts with.
    pub fn store(&self) -> MovieStore {
        if self.no_seed {
            MovieStore::new()
        } else {
            MovieStore::seeded()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            no_seed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["marquee", "--addr", "127.0.0.1:9000", "--no-seed"]).unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert!(config.no_seed);
        assert!(config.store().is_empty());
    }

    #[test]
    fn default_config_seeds_the_catalog() {
        let config = Config::default();
        assert_eq!(config.addr, "localhost:8082");
        assert_eq!(config.store().len(), 3);
    }
}
