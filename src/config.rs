use std::{collections::BTreeMap, env};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{error::GameError, utils::letters::LETTER_DISTRIBUTION};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_columns: usize,
    pub num_rows: usize,
    pub max_submission_length: usize,
    /// Seed for the letter bag; drawn at random when absent
    pub seed: Option<u64>,
    pub distribution: BTreeMap<char, u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_columns: 7,
            num_rows: 5,
            max_submission_length: 10,
            seed: None,
            distribution: LETTER_DISTRIBUTION.clone(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let num_columns = match env::var("LETTER_DROP_COLUMNS") {
            Ok(value) => value
                .parse()
                .context("LETTER_DROP_COLUMNS must be a number")?,
            Err(_) => defaults.num_columns,
        };

        let num_rows = match env::var("LETTER_DROP_ROWS") {
            Ok(value) => value.parse().context("LETTER_DROP_ROWS must be a number")?,
            Err(_) => defaults.num_rows,
        };

        let max_submission_length = match env::var("LETTER_DROP_MAX_WORD") {
            Ok(value) => value
                .parse()
                .context("LETTER_DROP_MAX_WORD must be a number")?,
            Err(_) => defaults.max_submission_length,
        };

        let seed: Option<u64> = env::var("LETTER_DROP_SEED")
            .ok()
            .map(|value| value.parse().context("LETTER_DROP_SEED must be a number"))
            .transpose()?;

        let config = GameConfig {
            num_columns,
            num_rows,
            max_submission_length,
            seed,
            distribution: defaults.distribution,
        };
        config.validate()?;

        Ok(config)
    }

    /// Reject dimensions no field can be built from
    pub fn validate(&self) -> std::result::Result<(), GameError> {
        if self.num_columns == 0 {
            return Err(GameError::InvalidConfig(
                "number of columns must be positive".to_string(),
            ));
        }
        if self.num_rows == 0 {
            return Err(GameError::InvalidConfig(
                "number of rows must be positive".to_string(),
            ));
        }
        if self.num_rows.checked_add(1).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} rows is too many",
                self.num_rows
            )));
        }
        if self.max_submission_length == 0 {
            return Err(GameError::InvalidConfig(
                "maximum word length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.distribution.len(), 26);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = GameConfig {
            num_columns: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            num_rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig {
            max_submission_length: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
        let config = GameConfig {
            num_rows: usize::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}
