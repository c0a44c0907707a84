//! Estimation inputs, results, and their ISO-8601 string boundary.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EstimationError, EstimationOutcome};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which path produced the accepted horizon pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Heuristic,
    External,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Heuristic => "heuristic",
            Source::External => "external",
        }
    }
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Source {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heuristic" => Ok(Source::Heuristic),
            "external" => Ok(Source::External),
            other => Err(EstimationError::invalid_input(format!(
                "unknown source tag: {other}"
            ))),
        }
    }
}

/// A validated item to estimate.
///
/// Construction enforces a non-empty name; the category is free-form (unknown
/// categories are handled downstream by the heuristic fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationInput {
    name: String,
    category: String,
    purchased_at: NaiveDate,
}

impl EstimationInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        purchased_at: NaiveDate,
    ) -> EstimationOutcome<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EstimationError::invalid_input("item name must not be empty"));
        }

        Ok(Self {
            name,
            category: category.into(),
            purchased_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn purchased_at(&self) -> NaiveDate {
        self.purchased_at
    }
}

/// Final dated estimate with provenance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub estimated_expiration_at: NaiveDate,
    pub estimated_restock_at: NaiveDate,
    pub source: Source,
}

/// Inbound request as supplied by the item-capture flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRequest {
    pub name: String,
    pub category: String,
    pub purchased_at: String,
}

impl EstimationRequest {
    /// Validate and convert into a typed input.
    ///
    /// `purchased_at` accepts a plain `YYYY-MM-DD` date or a full RFC 3339
    /// timestamp; for the latter only the calendar date as written is kept.
    pub fn into_input(self) -> EstimationOutcome<EstimationInput> {
        let purchased_at = parse_purchase_date(&self.purchased_at)?;
        EstimationInput::new(self.name, self.category, purchased_at)
    }
}

fn parse_purchase_date(raw: &str) -> EstimationOutcome<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.date_naive())
        .map_err(|_| {
            EstimationError::invalid_input(format!("purchasedAt is not an ISO-8601 date: {raw:?}"))
        })
}

/// Outbound response for the item-capture flow, dates rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResponse {
    pub estimated_expiration_at: String,
    pub estimated_restock_at: String,
    pub source: Source,
}

impl From<EstimationResult> for EstimationResponse {
    fn from(result: EstimationResult) -> Self {
        Self {
            estimated_expiration_at: result.estimated_expiration_at.format(DATE_FORMAT).to_string(),
            estimated_restock_at: result.estimated_restock_at.format(DATE_FORMAT).to_string(),
            source: result.source,
        }
    }
}
