//! Portfolio-style totals over a generated schedule.

use serde::{Deserialize, Serialize};

use crate::pricing::schedule::AmortizationRow;
use crate::types::Money;

/// Nominal and present-value totals of the five income/expense lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_interest_income: Money,
    pub total_interest_expense: Money,
    pub total_non_interest_income: Money,
    pub total_non_interest_expense: Money,
    pub total_net_income: Money,
    pub pv_interest_income: Money,
    pub pv_interest_expense: Money,
    pub pv_non_interest_income: Money,
    pub pv_non_interest_expense: Money,
    pub pv_net_income: Money,
}

/// Reduce a schedule to its ten column totals.
///
/// A pure sum over the full sequence: no filtering, no windowing, and the
/// order of rows is immaterial. Emptiness is rejected upstream by schedule
/// generation; an empty slice here degenerates to all-zero totals.
pub fn summarize(rows: &[AmortizationRow]) -> SummaryMetrics {
    SummaryMetrics {
        total_interest_income: rows.iter().map(|r| r.interest_income).sum(),
        total_interest_expense: rows.iter().map(|r| r.interest_expense).sum(),
        total_non_interest_income: rows.iter().map(|r| r.non_interest_income).sum(),
        total_non_interest_expense: rows.iter().map(|r| r.non_interest_expense).sum(),
        total_net_income: rows.iter().map(|r| r.net_income).sum(),
        pv_interest_income: rows.iter().map(|r| r.pv_interest_income).sum(),
        pv_interest_expense: rows.iter().map(|r| r.pv_interest_expense).sum(),
        pv_non_interest_income: rows.iter().map(|r| r.pv_non_interest_income).sum(),
        pv_non_interest_expense: rows.iter().map(|r| r.pv_non_interest_expense).sum(),
        pv_net_income: rows.iter().map(|r| r.pv_net_income).sum(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
