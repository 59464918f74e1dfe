//! Case store abstraction.

use serde_json::Value;

use crate::domain::Case;
use crate::error::ApiResult;

/// Tally of a mark-as-printed call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkOutcome {
    /// Ids moved from pending to printed by this call.
    pub transitioned: usize,
    /// Ids that were already printed.
    pub already_printed: usize,
    /// Entries that match no stored case, including entries that are not
    /// integer ids at all.
    pub unknown: usize,
}

/// Source of printing cases and sink for print acknowledgements.
///
/// Implementations must make `mark_as_printed` idempotent: repeating an id,
/// or passing one the store does not know, is not an error. Ids arrive as
/// the client sent them; entries that are not integers are not an error
/// either.
pub trait CaseStore: Send + Sync {
    /// All cases currently pending print, ordered by id.
    fn pending_cases(&self) -> ApiResult<Vec<Case>>;

    /// Record the given cases as printed.
    fn mark_as_printed(&self, ids: &[Value]) -> ApiResult<MarkOutcome>;
}
