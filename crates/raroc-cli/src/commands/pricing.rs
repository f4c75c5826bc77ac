use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use raroc_core::pricing::payment::monthly_payment;
use raroc_core::pricing::schedule::{self, LoanParameters};
use raroc_core::pricing::summary;

use crate::input;

/// Arguments for the fixed-payment calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PaymentArgs {
    /// Original balance
    #[arg(long)]
    pub principal: Decimal,

    /// Annual interest rate in percent (6.5 = 6.5%)
    #[arg(long)]
    pub annual_rate: Decimal,

    /// Term in months
    #[arg(long)]
    pub term_months: u32,
}

/// Loan-term arguments shared by the schedule and summary commands
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Original balance
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (6.5 = 6.5%)
    #[arg(long)]
    pub annual_rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Annualized funds-transfer-pricing cost in percent
    #[arg(long)]
    pub ftp_rate: Option<Decimal>,

    /// Annualized discount rate in percent
    #[arg(long)]
    pub discount_rate: Option<Decimal>,

    /// Flat non-interest income per period (defaults to 0)
    #[arg(long)]
    pub nii_fee: Option<Decimal>,

    /// Leading months during which the NII fee applies (defaults to 0)
    #[arg(long)]
    pub nii_months: Option<u32>,

    /// Flat non-interest expense per period (defaults to 0)
    #[arg(long)]
    pub nie_amount: Option<Decimal>,

    /// Internal rating (1-13), carried through as metadata
    #[arg(long)]
    pub pd_rating: Option<u8>,

    /// Collateral grade (A-H), carried through as metadata
    #[arg(long)]
    pub lgd_grade: Option<char>,

    /// Zip code, carried through as metadata
    #[arg(long)]
    pub zip_code: Option<String>,

    /// Loan identifier, carried through as metadata
    #[arg(long)]
    pub loan_id: Option<String>,
}

/// Arguments for the schedule totals
#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub loan: ScheduleArgs,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment = monthly_payment(args.principal, args.annual_rate, args.term_months)?;
    Ok(json!({ "monthly_payment": payment }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_parameters(&args)?;
    let rows = schedule::generate_schedule(&params)?;
    let payment = monthly_payment(params.principal, params.annual_rate, params.term_months)?;
    Ok(json!({
        "loan_id": params.loan_id,
        "monthly_payment": payment,
        "schedule": rows,
    }))
}

pub fn run_summary(args: SummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_parameters(&args.loan)?;
    let rows = schedule::generate_schedule(&params)?;
    let metrics = summary::summarize(&rows);
    let payment = monthly_payment(params.principal, params.annual_rate, params.term_months)?;
    Ok(json!({
        "loan_id": params.loan_id,
        "monthly_payment": payment,
        "summary": metrics,
    }))
}

/// Resolve loan parameters from file, piped stdin, or individual flags.
fn resolve_parameters(args: &ScheduleArgs) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::read_file(path);
    }
    if let Some(data) = input::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }
    Ok(LoanParameters {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate: args
            .annual_rate
            .ok_or("--annual-rate is required (or provide --input)")?,
        term_months: args
            .term_months
            .ok_or("--term-months is required (or provide --input)")?,
        ftp_rate: args
            .ftp_rate
            .ok_or("--ftp-rate is required (or provide --input)")?,
        discount_rate: args
            .discount_rate
            .ok_or("--discount-rate is required (or provide --input)")?,
        nii_fee: args.nii_fee.unwrap_or_default(),
        nii_months: args.nii_months.unwrap_or_default(),
        nie_amount: args.nie_amount.unwrap_or_default(),
        pd_rating: args.pd_rating,
        lgd_grade: args.lgd_grade,
        zip_code: args.zip_code.clone(),
        loan_id: args.loan_id.clone(),
    })
}
