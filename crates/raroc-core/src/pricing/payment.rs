use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::RarocError;
use crate::types::{Money, Rate};
use crate::RarocResult;

/// Fixed monthly principal-and-interest payment for a fully amortizing loan.
///
/// Rates arrive in percent (6.5 = 6.5%/year). A zero rate degenerates to
/// straight-line repayment. Negative rates are mathematically permitted and
/// return a numeric result; only a rate whose annuity denominator lands on
/// exactly zero is rejected.
pub fn monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> RarocResult<Money> {
    if term_months == 0 {
        return Err(RarocError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }
    if principal < Decimal::ZERO {
        return Err(RarocError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be non-negative".into(),
        });
    }

    if annual_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let monthly_rate = annual_rate / dec!(12) / dec!(100);
    let factor = (Decimal::ONE + monthly_rate).powd(Decimal::from(term_months));
    let denominator = factor - Decimal::ONE;

    if denominator.is_zero() {
        return Err(RarocError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annuity factor degenerates to zero at this rate".into(),
        });
    }

    Ok(principal * monthly_rate * factor / denominator)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
