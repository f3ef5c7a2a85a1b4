use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    /// Fixed bag seed for reproducible games.
    pub seed: Option<u64>,
}

impl Config {
    /// Read settings from the environment (and a `.env` file if present).
    /// A dictionary path given on the command line wins over `DICTIONARY_PATH`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), env::args().nth(1))
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        dictionary_arg: Option<String>,
    ) -> Result<Self> {
        let dictionary_path = dictionary_arg
            .or_else(|| lookup("DICTIONARY_PATH"))
            .unwrap_or_else(|| "./dictionary.txt".to_string());

        let seed = lookup("GAME_SEED")
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .context("GAME_SEED must be a non-negative integer")?;

        Ok(Config {
            game: GameConfig {
                dictionary_path,
                seed,
            },
        })
    }

    pub fn dictionary_path(&self) -> &str {
        &self.game.dictionary_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]), None).unwrap();
        assert_eq!(config.dictionary_path(), "./dictionary.txt");
        assert_eq!(config.game.seed, None);
    }

    #[test]
    fn test_argument_overrides_env() {
        let vars = lookup(&[("DICTIONARY_PATH", "/env/words.txt"), ("GAME_SEED", " 42 ")]);
        let config = Config::from_lookup(vars, Some("ro.txt".to_string())).unwrap();
        assert_eq!(config.dictionary_path(), "ro.txt");
        assert_eq!(config.game.seed, Some(42));

        let vars = lookup(&[("DICTIONARY_PATH", "/env/words.txt")]);
        let config = Config::from_lookup(vars, None).unwrap();
        assert_eq!(config.dictionary_path(), "/env/words.txt");
    }

    #[test]
    fn test_bad_seed_is_an_error() {
        let vars = lookup(&[("GAME_SEED", "soon")]);
        assert!(Config::from_lookup(vars, None).is_err());
    }
}
