#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("board dimension must be at least {min_expected} (found: {found})")]
    InvalidDimension { min_expected: usize, found: usize },
    #[error("invalid column (expected: 0-{max_expected}, found: {found})")]
    InvalidColumn { max_expected: usize, found: usize },
    #[error("column {col} is full")]
    ColumnIsFull { col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
}

impl GameError {
    pub fn invalid_dimension(min_expected: usize, found: usize) -> Self {
        Self::InvalidDimension {
            min_expected,
            found,
        }
    }

    pub fn invalid_column(max_expected: usize, found: usize) -> Self {
        Self::InvalidColumn {
            max_expected,
            found,
        }
    }

    pub fn column_is_full(col: usize) -> Self {
        Self::ColumnIsFull { col }
    }
}
