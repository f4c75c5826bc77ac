//! Month-by-month amortization and cash-flow schedule.
//!
//! Covers:
//! 1. **Amortization** -- level-pay principal/interest split with a
//!    clamp-at-zero ending balance.
//! 2. **Funds transfer pricing** -- cost of funds charged on the balance
//!    outstanding during the period.
//! 3. **Fee lines** -- flat non-interest income over a leading window and a
//!    flat non-interest expense every period.
//! 4. **Present values** -- each income/expense line discounted at the
//!    monthly discount rate.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RarocError;
use crate::pricing::payment::monthly_payment;
use crate::types::{Fraction, Money, Rate};
use crate::RarocResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

/// Terms for a single loan, immutable for the duration of one calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Original balance.
    pub principal: Money,
    /// Annual interest rate in percent (6.5 = 6.5%/year).
    pub annual_rate: Rate,
    /// Term in months.
    pub term_months: u32,
    /// Annualized internal funding cost in percent.
    pub ftp_rate: Rate,
    /// Annualized rate used for present-value conversion, in percent.
    pub discount_rate: Rate,
    /// Flat non-interest income collected per period while the window is open.
    pub nii_fee: Money,
    /// Leading periods during which `nii_fee` applies.
    pub nii_months: u32,
    /// Flat non-interest expense charged every period.
    pub nie_amount: Money,

    /// Internal rating (1-13). Opaque metadata; participates in no arithmetic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pd_rating: Option<u8>,
    /// Collateral grade (A-H). Opaque metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lgd_grade: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_id: Option<String>,
}

/// One period of the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based period index.
    pub period: u32,
    pub beginning_balance: Money,
    pub payment: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub ending_balance: Money,
    pub interest_income: Money,
    pub interest_expense: Money,
    pub non_interest_income: Money,
    pub non_interest_expense: Money,
    pub net_income: Money,
    pub pv_interest_income: Money,
    pub pv_interest_expense: Money,
    pub pv_non_interest_income: Money,
    pub pv_non_interest_expense: Money,
    pub pv_net_income: Money,
    pub discount_factor: Fraction,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Build the full amortization and cash-flow schedule for a loan.
///
/// One row per period, in period order. The loop runs exactly `term_months`
/// iterations; a residual balance at maturity is tolerated, not corrected.
pub fn generate_schedule(params: &LoanParameters) -> RarocResult<Vec<AmortizationRow>> {
    validate_parameters(params)?;

    let payment = monthly_payment(params.principal, params.annual_rate, params.term_months)?;

    let monthly_rate = params.annual_rate / dec!(12) / dec!(100);
    let monthly_ftp_rate = params.ftp_rate / dec!(12) / dec!(100);
    let monthly_discount_rate = params.discount_rate / dec!(12) / dec!(100);

    let mut rows = Vec::with_capacity(params.term_months as usize);
    let mut balance = params.principal;

    for period in 1..=params.term_months {
        let interest_paid = balance * monthly_rate;
        let principal_paid = payment - interest_paid;

        let mut ending_balance = balance - principal_paid;
        if ending_balance < Decimal::ZERO {
            ending_balance = Decimal::ZERO;
        }

        let interest_income = interest_paid;

        // FTP cost on the balance outstanding during the period. The opening
        // balance is reconstructed as ending balance plus principal just
        // paid; in a clamped final period this is the reconstruction the
        // exported beginning balance shares, not the pre-clamp balance.
        let interest_expense = (ending_balance + principal_paid) * monthly_ftp_rate;

        let non_interest_income = if period <= params.nii_months {
            params.nii_fee
        } else {
            Decimal::ZERO
        };
        let non_interest_expense = params.nie_amount;

        let discount_factor =
            Decimal::ONE / (Decimal::ONE + monthly_discount_rate).powd(Decimal::from(period));

        let net_income =
            interest_income - interest_expense + non_interest_income - non_interest_expense;

        rows.push(AmortizationRow {
            period,
            beginning_balance: ending_balance + principal_paid,
            payment,
            principal_paid,
            interest_paid,
            ending_balance,
            interest_income,
            interest_expense,
            non_interest_income,
            non_interest_expense,
            net_income,
            pv_interest_income: interest_income * discount_factor,
            pv_interest_expense: interest_expense * discount_factor,
            pv_non_interest_income: non_interest_income * discount_factor,
            pv_non_interest_expense: non_interest_expense * discount_factor,
            pv_net_income: net_income * discount_factor,
            discount_factor,
        });

        balance = ending_balance;
    }

    Ok(rows)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_parameters(params: &LoanParameters) -> RarocResult<()> {
    if params.nii_months > params.term_months {
        return Err(RarocError::InvalidInput {
            field: "nii_months".into(),
            reason: format!(
                "NII window ({} months) extends past the loan term ({} months)",
                params.nii_months, params.term_months
            ),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
