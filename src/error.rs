use thiserror::Error;

use crate::grid::Pos;

/// Fail-fast errors raised before any search state is created.
///
/// Exhausting the open set or the expansion budget is not an error; those are
/// reported through [`crate::astar::SearchOutcome`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("Invalid start {pos}: out of bounds or impassable")]
    InvalidStart { pos: Pos },
    #[error("Invalid goal {pos}: out of bounds or impassable")]
    InvalidGoal { pos: Pos },
}
