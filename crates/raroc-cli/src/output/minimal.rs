//! Print just the key answer value from the output.

use serde_json::Value;

use super::plain;

/// Priority list of key output fields.
const PRIORITY_KEYS: [&str; 6] = [
    "pv_net_income",
    "monthly_payment",
    "total_net_income",
    "pd",
    "lgd",
    "loan_id",
];

pub fn print_minimal(value: &Value) {
    // Summary envelopes nest the totals one level down.
    let target = value
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(value);

    if let Value::Object(map) = target {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key).or_else(|| value.get(*key)) {
                if !val.is_null() {
                    println!("{}", plain(val));
                    return;
                }
            }
        }

        // Fall back to the first field.
        if let Some((_, val)) = map.iter().next() {
            println!("{}", plain(val));
            return;
        }
    }

    println!("{}", plain(target));
}
