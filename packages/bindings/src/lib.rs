use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct PaymentInput {
    principal: Decimal,
    annual_rate: Decimal,
    term_months: u32,
}

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: PaymentInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let payment = raroc_core::pricing::payment::monthly_payment(
        input.principal,
        input.annual_rate,
        input.term_months,
    )
    .map_err(to_napi_error)?;
    Ok(payment.to_string())
}

#[napi]
pub fn generate_schedule(input_json: String) -> NapiResult<String> {
    let input: raroc_core::pricing::schedule::LoanParameters =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rows =
        raroc_core::pricing::schedule::generate_schedule(&input).map_err(to_napi_error)?;
    serde_json::to_string(&rows).map_err(to_napi_error)
}

#[napi]
pub fn summarize_schedule(rows_json: String) -> NapiResult<String> {
    let rows: Vec<raroc_core::pricing::schedule::AmortizationRow> =
        serde_json::from_str(&rows_json).map_err(to_napi_error)?;
    let metrics = raroc_core::pricing::summary::summarize(&rows);
    serde_json::to_string(&metrics).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Ratings
// ---------------------------------------------------------------------------

#[napi]
pub fn pd_for_rating(rating: u32) -> NapiResult<String> {
    let rating = u8::try_from(rating).map_err(to_napi_error)?;
    let pd = raroc_core::ratings::pd_for_rating(rating).map_err(to_napi_error)?;
    Ok(pd.to_string())
}

#[napi]
pub fn lgd_for_grade(grade: String) -> NapiResult<String> {
    let mut chars = grade.chars();
    let grade_char = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(napi::Error::from_reason(format!(
                "Expected a single grade letter, got '{grade}'"
            )))
        }
    };
    let lgd = raroc_core::ratings::lgd_for_grade(grade_char).map_err(to_napi_error)?;
    Ok(lgd.to_string())
}
