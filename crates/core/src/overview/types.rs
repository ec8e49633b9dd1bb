//! Overview result types.

use serde::Serialize;

use crate::income::Income;
use crate::reconciliation::MatchedPair;

/// Employments with their wages, plus income outside employment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EmploymentIncomeOverview {
    /// Employments paired with matched wage income.
    pub employments: Vec<MatchedPair>,
    /// Wage income no employment claimed.
    pub wages_without_employment: Vec<Income>,
    /// Benefits paid by public bodies.
    pub benefits: Vec<Income>,
    /// Pensions and social security.
    pub pensions: Vec<Income>,
    /// Self-employment income.
    pub business: Vec<Income>,
}
