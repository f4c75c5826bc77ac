//! Table output via `tabled`. Schedules get a head-and-tail preview like the
//! front end's paged view; flat objects get a field/value table.

use serde_json::Value;
use tabled::builder::Builder;
use tabled::Table;

use super::{plain, rounded};

const PREVIEW_HEAD: usize = 24;
const PREVIEW_TAIL: usize = 6;

/// Condensed column set for the terminal preview.
const PREVIEW_COLUMNS: [(&str, &str); 8] = [
    ("Month", "period"),
    ("Beginning", "beginning_balance"),
    ("Payment", "payment"),
    ("Principal", "principal_paid"),
    ("Interest", "interest_paid"),
    ("Ending", "ending_balance"),
    ("Net_Income", "net_income"),
    ("Factor", "discount_factor"),
];

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("schedule") {
                print_scalars(map);
                print_schedule_preview(rows);
            } else if let Some(Value::Object(summary)) = map.get("summary") {
                print_scalars(map);
                print_field_value(summary);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            for item in arr {
                print_flat_object(item);
            }
        }
        _ => println!("{}", value),
    }
}

/// Print the envelope's scalar fields (payment, loan id) above the table.
fn print_scalars(map: &serde_json::Map<String, Value>) {
    for (key, val) in map {
        match val {
            Value::Array(_) | Value::Object(_) | Value::Null => continue,
            _ => println!("{}: {}", key, rounded(val, 2)),
        }
    }
}

fn print_schedule_preview(rows: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(PREVIEW_COLUMNS.map(|(header, _)| header));

    let preview: Vec<&Value> = if rows.len() > PREVIEW_HEAD + PREVIEW_TAIL {
        rows[..PREVIEW_HEAD]
            .iter()
            .chain(rows[rows.len() - PREVIEW_TAIL..].iter())
            .collect()
    } else {
        rows.iter().collect()
    };

    for row in &preview {
        builder.push_record(PREVIEW_COLUMNS.map(|(_, field)| {
            let cell = row.get(field).unwrap_or(&Value::Null);
            match field {
                "period" => plain(cell),
                "discount_factor" => rounded(cell, 6),
                _ => rounded(cell, 2),
            }
        }));
    }

    println!("{}", Table::from(builder));

    if rows.len() > preview.len() {
        println!(
            "Showing first {} and last {} of {} periods; use --output csv for the full schedule",
            PREVIEW_HEAD,
            PREVIEW_TAIL,
            rows.len()
        );
    }
}

fn print_field_value(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &rounded(val, 2)]);
    }
    println!("{}", Table::from(builder));
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        print_field_value(map);
    } else {
        println!("{}", value);
    }
}
