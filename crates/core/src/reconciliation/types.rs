//! Reconciliation result types.

use serde::Serialize;

use crate::employment::Employment;
use crate::income::Income;

/// An employment with the income matched to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    /// The employment relationship.
    pub employment: Employment,
    /// Matched income, in payer first-seen order.
    pub incomes: Vec<Income>,
}

/// Output of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Reconciliation {
    /// One entry per employment, in input order.
    pub pairs: Vec<MatchedPair>,
    /// Income no employment claimed, in payer first-seen order.
    pub unmatched: Vec<Income>,
}
