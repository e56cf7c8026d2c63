//! Error types shared by the board and the dashboard.

use thiserror::Error;

/// A board operation referenced an id that is not on the board.
///
/// Every variant is a "not found" condition; nothing is mutated when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("column {0} not found")]
    ColumnNotFound(String),

    #[error("card {card_id} not found in column {column_id}")]
    CardNotFound { column_id: String, card_id: String },
}

/// Rejected input while building a card or column draft.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("amount must be a finite, non-negative number (got {0})")]
    InvalidAmount(f64),
}

/// Failures talking to the REST backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,

    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_ids() {
        let err = BoardError::CardNotFound {
            column_id: "col".into(),
            card_id: "card".into(),
        };
        assert_eq!(err.to_string(), "card card not found in column col");
        assert_eq!(ApiError::Status(404).to_string(), "server answered with status 404");
    }
}
