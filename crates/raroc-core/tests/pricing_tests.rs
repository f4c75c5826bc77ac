use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use raroc_core::pricing::payment::monthly_payment;
use raroc_core::pricing::schedule::{generate_schedule, LoanParameters};
use raroc_core::pricing::summary::summarize;
use raroc_core::ratings;
use raroc_core::RarocError;

// ===========================================================================
// Reference loan: the worked example the pricing front end ships with
// ===========================================================================

fn reference_loan() -> LoanParameters {
    LoanParameters {
        principal: dec!(1_000_000),
        annual_rate: dec!(6.5),
        term_months: 100,
        ftp_rate: dec!(2.3),
        discount_rate: dec!(2.5),
        nii_fee: dec!(100),
        nii_months: 50,
        nie_amount: dec!(200),
        pd_rating: Some(5),
        lgd_grade: Some('C'),
        zip_code: Some("45208".into()),
        loan_id: Some("LOAN-001".into()),
    }
}

fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
    (a - b).abs() < eps
}

#[test]
fn test_reference_monthly_payment() {
    let loan = reference_loan();
    let payment = monthly_payment(loan.principal, loan.annual_rate, loan.term_months).unwrap();
    assert!(
        approx_eq(payment, dec!(12_978.06), dec!(0.01)),
        "payment should be ~12,978.06, got {}",
        payment
    );
}

#[test]
fn test_reference_first_period() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    let first = &rows[0];

    assert_eq!(first.period, 1);
    // Interest on the full balance: 1M * 6.5% / 12.
    assert!(approx_eq(first.interest_paid, dec!(5_416.67), dec!(0.01)));
    assert!(approx_eq(first.beginning_balance, dec!(1_000_000), dec!(0.000001)));
    assert_eq!(first.interest_income, first.interest_paid);
    // FTP on the opening balance: 1M * 2.3% / 12.
    assert!(approx_eq(first.interest_expense, dec!(1_916.67), dec!(0.01)));
    assert_eq!(first.non_interest_income, dec!(100));
    assert_eq!(first.non_interest_expense, dec!(200));
}

#[test]
fn test_reference_amortizes_to_zero() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    assert_eq!(rows.len(), 100);

    let last = &rows[99];
    assert!(last.ending_balance >= Decimal::ZERO);
    assert!(
        last.ending_balance < dec!(0.01),
        "final balance should be ~0, got {}",
        last.ending_balance
    );

    let total_principal: Decimal = rows.iter().map(|r| r.principal_paid).sum();
    assert!(
        approx_eq(total_principal, dec!(1_000_000), dec!(0.0001)),
        "principal repaid should equal the original balance, got {}",
        total_principal
    );
}

#[test]
fn test_reference_nii_window_boundary() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    assert_eq!(rows[49].non_interest_income, dec!(100));
    assert_eq!(rows[50].non_interest_income, Decimal::ZERO);
}

#[test]
fn test_reference_discount_factors() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    for pair in rows.windows(2) {
        assert!(pair[1].discount_factor < pair[0].discount_factor);
    }
    // First factor: 1 / (1 + 2.5%/12).
    assert!(approx_eq(rows[0].discount_factor, dec!(0.997921), dec!(0.000001)));
}

#[test]
fn test_reference_per_row_identities() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    for row in &rows {
        assert_eq!(
            row.net_income,
            row.interest_income - row.interest_expense + row.non_interest_income
                - row.non_interest_expense
        );
        assert_eq!(row.pv_interest_income, row.interest_income * row.discount_factor);
        assert_eq!(row.pv_net_income, row.net_income * row.discount_factor);
        assert!(row.ending_balance >= Decimal::ZERO);
    }
}

#[test]
fn test_generate_schedule_is_idempotent() {
    let first = generate_schedule(&reference_loan()).unwrap();
    let second = generate_schedule(&reference_loan()).unwrap();
    assert_eq!(first, second);
}

// ===========================================================================
// Summary aggregation
// ===========================================================================

#[test]
fn test_summary_totals_match_column_sums() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    let metrics = summarize(&rows);

    let interest_income: Decimal = rows.iter().map(|r| r.interest_income).sum();
    let pv_net: Decimal = rows.iter().map(|r| r.pv_net_income).sum();
    assert_eq!(metrics.total_interest_income, interest_income);
    assert_eq!(metrics.pv_net_income, pv_net);

    // NII: 50 months at 100. NIE: 100 months at 200.
    assert_eq!(metrics.total_non_interest_income, dec!(5_000));
    assert_eq!(metrics.total_non_interest_expense, dec!(20_000));
}

#[test]
fn test_summary_order_independent() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    let mut reversed = rows.clone();
    reversed.reverse();

    let forward = summarize(&rows);
    let backward = summarize(&reversed);

    // Bit-equality is not guaranteed when 28-digit intermediate sums round,
    // but any difference sits far below a hundredth of a cent.
    let eps = dec!(0.000000000000001);
    assert!(approx_eq(forward.total_net_income, backward.total_net_income, eps));
    assert!(approx_eq(forward.pv_net_income, backward.pv_net_income, eps));
    assert!(approx_eq(forward.pv_interest_expense, backward.pv_interest_expense, eps));
}

#[test]
fn test_summary_discounting_shrinks_positive_totals() {
    let rows = generate_schedule(&reference_loan()).unwrap();
    let metrics = summarize(&rows);
    assert!(metrics.pv_interest_income < metrics.total_interest_income);
    assert!(metrics.pv_non_interest_expense < metrics.total_non_interest_expense);
}

// ===========================================================================
// Degenerate rates
// ===========================================================================

#[test]
fn test_zero_rate_schedule_is_straight_line() {
    let loan = LoanParameters {
        principal: dec!(120_000),
        annual_rate: Decimal::ZERO,
        term_months: 12,
        ftp_rate: dec!(2.3),
        discount_rate: dec!(2.5),
        nii_fee: Decimal::ZERO,
        nii_months: 0,
        nie_amount: Decimal::ZERO,
        pd_rating: None,
        lgd_grade: None,
        zip_code: None,
        loan_id: None,
    };
    let rows = generate_schedule(&loan).unwrap();
    for row in &rows {
        assert_eq!(row.principal_paid, dec!(10_000));
        assert_eq!(row.interest_paid, Decimal::ZERO);
    }
    assert_eq!(rows[11].ending_balance, Decimal::ZERO);
}

#[test]
fn test_zero_discount_rate_keeps_nominal_values() {
    let mut loan = reference_loan();
    loan.discount_rate = Decimal::ZERO;
    let rows = generate_schedule(&loan).unwrap();
    for row in &rows {
        assert_eq!(row.discount_factor, Decimal::ONE);
        assert_eq!(row.pv_net_income, row.net_income);
    }
}

// ===========================================================================
// Rejected inputs
// ===========================================================================

#[test]
fn test_zero_term_rejected() {
    let mut loan = reference_loan();
    loan.term_months = 0;
    loan.nii_months = 0;
    assert!(matches!(
        generate_schedule(&loan),
        Err(RarocError::InvalidInput { .. })
    ));
}

#[test]
fn test_nii_window_past_term_rejected() {
    let mut loan = reference_loan();
    loan.nii_months = 101;
    assert!(matches!(
        generate_schedule(&loan),
        Err(RarocError::InvalidInput { .. })
    ));
}

// ===========================================================================
// Rating tables
// ===========================================================================

#[test]
fn test_rating_lookups() {
    assert_eq!(ratings::pd_for_rating(5).unwrap(), dec!(0.02));
    assert_eq!(ratings::lgd_for_grade('C').unwrap(), dec!(0.30));
}

#[test]
fn test_rating_lookup_misses() {
    assert!(matches!(
        ratings::pd_for_rating(14),
        Err(RarocError::NotFound { .. })
    ));
    assert!(matches!(
        ratings::lgd_for_grade('Z'),
        Err(RarocError::NotFound { .. })
    ));
}

// ===========================================================================
// Serde surface
// ===========================================================================

#[test]
fn test_loan_parameters_roundtrip() {
    let loan = reference_loan();
    let json = serde_json::to_string(&loan).unwrap();
    let back: LoanParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(generate_schedule(&loan).unwrap(), generate_schedule(&back).unwrap());
}

#[test]
fn test_optional_metadata_omitted_from_json() {
    let mut loan = reference_loan();
    loan.pd_rating = None;
    loan.lgd_grade = None;
    loan.zip_code = None;
    loan.loan_id = None;
    let json = serde_json::to_string(&loan).unwrap();
    assert!(!json.contains("pd_rating"));
    assert!(!json.contains("loan_id"));
}
