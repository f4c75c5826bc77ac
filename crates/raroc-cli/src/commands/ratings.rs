use clap::Args;
use serde_json::{json, Map, Value};

use raroc_core::ratings::{lgd_for_grade, pd_for_rating, LGD_SCALE, PD_SCALE};

/// Arguments for rating scale lookups
#[derive(Args)]
pub struct RatingsArgs {
    /// Internal rating to look up (1-13)
    #[arg(long)]
    pub pd_rating: Option<u8>,

    /// Collateral grade to look up (A-H)
    #[arg(long)]
    pub lgd_grade: Option<char>,
}

/// Look up a PD rating and/or LGD grade; with no key, dump both scales.
pub fn run_ratings(args: RatingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.pd_rating.is_none() && args.lgd_grade.is_none() {
        let pd_scale: Vec<Value> = PD_SCALE
            .iter()
            .map(|(rating, pd)| json!({ "rating": rating, "pd": pd }))
            .collect();
        let lgd_scale: Vec<Value> = LGD_SCALE
            .iter()
            .map(|(grade, lgd)| json!({ "grade": grade, "lgd": lgd }))
            .collect();
        return Ok(json!({ "pd_scale": pd_scale, "lgd_scale": lgd_scale }));
    }

    let mut result = Map::new();
    if let Some(rating) = args.pd_rating {
        result.insert("rating".into(), json!(rating));
        result.insert("pd".into(), json!(pd_for_rating(rating)?));
    }
    if let Some(grade) = args.lgd_grade {
        result.insert("grade".into(), json!(grade));
        result.insert("lgd".into(), json!(lgd_for_grade(grade)?));
    }
    Ok(Value::Object(result))
}
