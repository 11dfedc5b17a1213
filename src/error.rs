use thiserror::Error;

/// Failures reported by the game core.
///
/// `InvalidConfig` is raised at construction time. Every other variant is a
/// broken precondition the caller could have checked with the paired query
/// (`is_full`, `is_empty`, `can_add`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("column {column} does not exist (field has {num_columns} columns)")]
    InvalidColumn { column: usize, num_columns: usize },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("letter bag is empty")]
    EmptyBag,

    #[error("'{0}' is not a valid tile letter")]
    InvalidLetter(char),
}

pub type Result<T> = std::result::Result<T, GameError>;
