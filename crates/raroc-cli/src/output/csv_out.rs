//! CSV output. Schedule envelopes get the canonical export layout the
//! pricing front end expects; everything else falls back to field/value
//! records.

use serde_json::Value;
use std::io;

use super::{plain, rounded};

/// Column headers of the schedule export, in order.
const SCHEDULE_HEADERS: [&str; 17] = [
    "Month",
    "Beginning_Balance",
    "Payment",
    "Principal",
    "Interest",
    "Ending_Balance",
    "Interest_Income",
    "Interest_Expense",
    "Non_Interest_Income",
    "Non_Interest_Expense",
    "Net_Income",
    "PV_Interest_Income",
    "PV_Interest_Expense",
    "PV_Non_Interest_Income",
    "PV_Non_Interest_Expense",
    "PV_Net_Income",
    "Discount_Factor",
];

/// Row fields backing each export column, in the same order.
const SCHEDULE_FIELDS: [&str; 17] = [
    "period",
    "beginning_balance",
    "payment",
    "principal_paid",
    "interest_paid",
    "ending_balance",
    "interest_income",
    "interest_expense",
    "non_interest_income",
    "non_interest_expense",
    "net_income",
    "pv_interest_income",
    "pv_interest_expense",
    "pv_non_interest_income",
    "pv_non_interest_expense",
    "pv_net_income",
    "discount_factor",
];

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("schedule") {
                write_schedule(&mut wtr, rows);
            } else if let Some(Value::Object(summary)) = map.get("summary") {
                let _ = wtr.write_record(["field", "value"]);
                if let Some(payment) = map.get("monthly_payment") {
                    let _ = wtr.write_record(["monthly_payment", &rounded(payment, 2)]);
                }
                for (key, val) in summary {
                    let _ = wtr.write_record([key.as_str(), &rounded(val, 2)]);
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &plain(val)]);
                }
            }
        }
        Value::Array(arr) => {
            if arr.first().and_then(|v| v.get("period")).is_some() {
                write_schedule(&mut wtr, arr);
            } else {
                write_generic_rows(&mut wtr, arr);
            }
        }
        _ => {
            let _ = wtr.write_record([&plain(value)]);
        }
    }

    let _ = wtr.flush();
}

/// The canonical export: monetary columns to 2 decimal places, the discount
/// factor to 6.
fn write_schedule(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let _ = wtr.write_record(SCHEDULE_HEADERS);
    for row in rows {
        let record: Vec<String> = SCHEDULE_FIELDS
            .iter()
            .map(|field| {
                let cell = row.get(*field).unwrap_or(&Value::Null);
                match *field {
                    "period" => plain(cell),
                    "discount_factor" => rounded(cell, 6),
                    _ => rounded(cell, 2),
                }
            })
            .collect();
        let _ = wtr.write_record(&record);
    }
}

/// Headers taken from the first object's keys.
fn write_generic_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&plain(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(plain).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
