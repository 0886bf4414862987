use anyhow::Error;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const PATH_VAR: &str = "MOVIE_CATALOG_PATH";
pub const FORMAT_VAR: &str = "MOVIE_CATALOG_FORMAT";
pub const LOG_VAR: &str = "MOVIE_CATALOG_LOG";

#[derive(Debug, Copy, Clone, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: PathBuf,
    pub format: SourceFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/movies.json"),
            format: SourceFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReviewConfig {
    pub min_rating: i32,
    pub max_rating: i32,
    pub min_comment_words: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            min_rating: 1,
            max_rating: 5,
            min_comment_words: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub review: ReviewConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: Self = toml::from_str(&contents)?;
        Ok(parsed)
    }

    /// Override values with the environment, unknown formats are ignored
    pub fn with_env(self) -> Self {
        self.with_vars(|key| env::var(key).ok())
    }

    fn with_vars<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var(PATH_VAR) {
            self.catalog.path = PathBuf::from(path);
        }

        if let Some(format) = var(FORMAT_VAR).as_deref().and_then(SourceFormat::parse) {
            self.catalog.format = format;
        }

        if let Some(level) = var(LOG_VAR) {
            self.log.level = level;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;
    use common_macros::hash_map;

    #[test]
    fn load_example_config() -> Result<(), Error> {
        let expected = Config {
            catalog: CatalogConfig {
                path: PathBuf::from("../data/movies.csv"),
                format: SourceFormat::Csv,
            },
            review: ReviewConfig {
                min_rating: 1,
                max_rating: 10,
                min_comment_words: 3,
            },
            log: LogConfig {
                level: "debug".into(),
            },
        };

        let loaded = Config::load("example.toml")?;
        assert_eq!(expected, loaded);

        Ok(())
    }

    #[test]
    fn missing_tables_use_defaults() -> Result<(), Error> {
        let parsed: Config = toml::from_str("[review]\nmax_rating = 10\n")?;

        assert_eq!(parsed.catalog, CatalogConfig::default());
        assert_eq!(parsed.log, LogConfig::default());
        assert_eq!(parsed.review.min_rating, 1);
        assert_eq!(parsed.review.max_rating, 10);
        assert_eq!(parsed.review.min_comment_words, 5);

        Ok(())
    }

    #[test]
    fn unknown_format_is_rejected() {
        let parsed = toml::from_str::<Config>("[catalog]\nformat = \"xml\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn environment_overrides() {
        let vars = hash_map! {
            PATH_VAR => "/srv/movies.csv",
            FORMAT_VAR => "CSV",
            LOG_VAR => "warn",
        };

        let config = Config::default().with_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.path, PathBuf::from("/srv/movies.csv"));
        assert_eq!(config.catalog.format, SourceFormat::Csv);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn invalid_format_variable_is_ignored() {
        let config = Config::default().with_vars(|key| {
            if key == FORMAT_VAR {
                Some("yaml".into())
            } else {
                None
            }
        });

        assert_eq!(config, Config::default());
    }
}
