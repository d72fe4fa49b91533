//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::combo::Combo;

/// Result of resolving a round: the matched rule and who won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The strongest rule any hand satisfied.
    pub combo: Combo,
    /// Seats of the winning players, in seating order.
    pub winners: Vec<usize>,
}
