use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    // Where players, teams and scores are kept between runs.
    pub data_dir: PathBuf,
    // Makes draws reproducible. Random when absent.
    pub rng_seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            data_dir: PathBuf::from("team_draw_data"),
            rng_seed: None,
        }
    }
}

impl ConsoleConfig {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'.", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file '{}'.", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> { Ok(serde_yaml::from_str(contents)?) }

    pub fn rng(&self) -> StdRng {
        match self.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_full() {
        let config = ConsoleConfig::parse("data_dir: /tmp/pelada\nrng_seed: 7\n").unwrap();
        assert_eq!(config, ConsoleConfig {
            data_dir: PathBuf::from("/tmp/pelada"),
            rng_seed: Some(7),
        });
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = ConsoleConfig::parse("rng_seed: 1\n").unwrap();
        assert_eq!(config.data_dir, ConsoleConfig::default().data_dir);
        assert!(ConsoleConfig::parse("data_dir: [").is_err());
    }
}
