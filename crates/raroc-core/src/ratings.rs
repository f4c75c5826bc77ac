//! PD and LGD rating scales.
//!
//! Fixed, process-wide lookup tables consumed by the risk-adjustment phases
//! that sit downstream of the cash-flow engine. The cash-flow arithmetic
//! itself never reads them; loan metadata carries the keys through unchanged.
//!
//! All values use `rust_decimal::Decimal`. No `f64`.

use rust_decimal_macros::dec;

use crate::error::RarocError;
use crate::types::Fraction;
use crate::RarocResult;

/// Probability of default by internal rating, 1 (strongest) to 13 (weakest).
/// Strictly increasing in rating.
pub const PD_SCALE: [(u8, Fraction); 13] = [
    (1, dec!(0.0010)),
    (2, dec!(0.0025)),
    (3, dec!(0.0050)),
    (4, dec!(0.0100)),
    (5, dec!(0.0200)),
    (6, dec!(0.0400)),
    (7, dec!(0.0800)),
    (8, dec!(0.1500)),
    (9, dec!(0.2500)),
    (10, dec!(0.4000)),
    (11, dec!(0.6000)),
    (12, dec!(0.8000)),
    (13, dec!(0.9500)),
];

/// Loss given default by collateral grade, A (best secured) to H (unsecured).
/// Strictly increasing from A to H.
pub const LGD_SCALE: [(char, Fraction); 8] = [
    ('A', dec!(0.10)),
    ('B', dec!(0.20)),
    ('C', dec!(0.30)),
    ('D', dec!(0.40)),
    ('E', dec!(0.50)),
    ('F', dec!(0.60)),
    ('G', dec!(0.75)),
    ('H', dec!(0.90)),
];

/// Look up the probability of default for an internal rating.
pub fn pd_for_rating(rating: u8) -> RarocResult<Fraction> {
    PD_SCALE
        .iter()
        .find(|(r, _)| *r == rating)
        .map(|(_, pd)| *pd)
        .ok_or_else(|| RarocError::NotFound {
            table: "PD_SCALE".into(),
            key: rating.to_string(),
        })
}

/// Look up the loss given default for a collateral grade. Case-sensitive.
pub fn lgd_for_grade(grade: char) -> RarocResult<Fraction> {
    LGD_SCALE
        .iter()
        .find(|(g, _)| *g == grade)
        .map(|(_, lgd)| *lgd)
        .ok_or_else(|| RarocError::NotFound {
            table: "LGD_SCALE".into(),
            key: grade.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
