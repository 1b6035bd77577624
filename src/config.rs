use std::env;
use std::path::PathBuf;

pub const CATALOG_ENV_VAR: &str = "MEAL_PLANNER_CATALOG";
pub const PROFILES_ENV_VAR: &str = "MEAL_PLANNER_PROFILES";

const DEFAULT_CATALOG_PATH: &str = "recipes.csv";
const DEFAULT_PROFILES_PATH: &str = "profiles.json";

/// File locations used by the command-line front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub profiles_path: PathBuf,
}

impl Config {
    /// Reads paths from the environment (after `.env` has been loaded),
    /// falling back to files in the working directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };
        Self {
            catalog_path: path(CATALOG_ENV_VAR, DEFAULT_CATALOG_PATH),
            profiles_path: path(PROFILES_ENV_VAR, DEFAULT_PROFILES_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.catalog_path, PathBuf::from("recipes.csv"));
        assert_eq!(config.profiles_path, PathBuf::from("profiles.json"));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(|key| match key {
            CATALOG_ENV_VAR => Some("/data/catalog.csv".to_string()),
            PROFILES_ENV_VAR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.catalog_path, PathBuf::from("/data/catalog.csv"));
        assert_eq!(config.profiles_path, PathBuf::from("profiles.json"));
    }
}
