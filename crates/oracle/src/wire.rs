//! Oracle wire format.
//!
//! Request: `{"name", "category", "purchasedAt": "YYYY-MM-DD"}`.
//! Response: an object with numeric `shelfLifeDays` and `restockDays`.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use shelfwise_core::{EstimationInput, HorizonPair};

use crate::error::UnavailableReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRequest<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub purchased_at: NaiveDate,
}

impl<'a> From<&'a EstimationInput> for OracleRequest<'a> {
    fn from(input: &'a EstimationInput) -> Self {
        Self {
            name: input.name(),
            category: input.category(),
            purchased_at: input.purchased_at(),
        }
    }
}

/// Map an oracle response body into a horizon.
///
/// Only type coercion is applied: numbers or numeric strings are accepted,
/// fractions truncate toward zero, and out-of-range values saturate into
/// `0..=u32::MAX`. Capping to a sane shelf life is the orchestrator's job.
pub fn parse_horizon(body: &Value) -> Result<HorizonPair, UnavailableReason> {
    let Some(obj) = body.as_object() else {
        return Err(UnavailableReason::Malformed(
            "response body is not a JSON object".to_string(),
        ));
    };

    let field = |key: &str| -> Result<u32, UnavailableReason> {
        let value = obj
            .get(key)
            .ok_or_else(|| UnavailableReason::Malformed(format!("missing field `{key}`")))?;
        coerce_days(value).ok_or_else(|| {
            UnavailableReason::Malformed(format!("field `{key}` is not a day count: {value}"))
        })
    };

    Ok(HorizonPair::new(field("shelfLifeDays")?, field("restockDays")?))
}

fn coerce_days(value: &Value) -> Option<u32> {
    let days = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !days.is_finite() {
        return None;
    }
    // Float → int `as` casts truncate and saturate.
    Some(days as u32)
}
