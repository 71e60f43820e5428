//! Market-trend parsing with an explicit fallback branch.
//!
//! Grounded search output is best-effort JSON: the model is asked for an
//! array of `{trend, source}` objects but may return prose, a bare object,
//! or nothing. Instead of catching a parse exception, the outcome is a
//! tagged value — `Parsed` for well-formed arrays, `Fallback` for the
//! hard-coded sentinel entry — so the degraded path stays a visible branch.

use serde_json::Value;

use crate::analysis::models::MarketTrend;

/// Sentinel trend substituted when the grounded response is unparseable.
pub const FALLBACK_TREND: &str =
    "Check the search results for the latest industry requirements.";
/// Source label for the sentinel entry.
pub const FALLBACK_SOURCE: &str = "Google Search Grounding";

/// Trend title substituted when an array item carries neither `trend` nor
/// `title`.
pub const DEFAULT_TREND: &str = "Market Trend";
/// Source label substituted when an array item carries no `source`.
pub const DEFAULT_SOURCE: &str = "Google Search";

/// Result of parsing the grounded trend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrendsOutcome {
    /// The response was a JSON array; items mapped field-by-field.
    Parsed(Vec<MarketTrend>),
    /// The response was not a JSON array; the single sentinel entry stands in.
    Fallback(Vec<MarketTrend>),
}

impl TrendsOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, TrendsOutcome::Fallback(_))
    }

    pub fn into_trends(self) -> Vec<MarketTrend> {
        match self {
            TrendsOutcome::Parsed(trends) | TrendsOutcome::Fallback(trends) => trends,
        }
    }
}

/// Parses the raw grounded response text.
///
/// An absent/empty response is a successful empty list, not a failure.
/// A JSON array maps item-by-item with per-field defaults. Anything else
/// (prose, malformed JSON, a non-array value) yields the sentinel.
pub fn parse_trends(text: &str) -> TrendsOutcome {
    if text.is_empty() {
        return TrendsOutcome::Parsed(Vec::new());
    }

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        let trends = items
            .iter()
            .map(|item| MarketTrend {
                trend: field_or(item, "trend", || {
                    field_or(item, "title", || DEFAULT_TREND.to_string())
                }),
                source: field_or(item, "source", || DEFAULT_SOURCE.to_string()),
            })
            .collect();
        return TrendsOutcome::Parsed(trends);
    }

    TrendsOutcome::Fallback(vec![MarketTrend {
        trend: FALLBACK_TREND.to_string(),
        source: FALLBACK_SOURCE.to_string(),
    }])
}

fn field_or(item: &Value, key: &str, default: impl FnOnce() -> String) -> String {
    match item.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => default(),
    }
}
