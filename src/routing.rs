// src/routing.rs

use crate::fields::{CLAIM_TYPE, DESCRIPTION, ESTIMATED_DAMAGE, ExtractedFields};
use serde::Serialize;
use std::fmt;

/// Claims with estimated damage strictly below this are fast-tracked.
pub const FAST_TRACK_LIMIT: f64 = 25_000.0;

/// Description keywords that flag a claim for investigation.
pub const SUSPICIOUS_KEYWORDS: [&str; 3] = ["fraud", "staged", "inconsistent"];

/// Downstream queue a claim is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Investigation Flag")]
    InvestigationFlag,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast-track")]
    FastTrack,
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManualReview => "Manual Review",
            Self::InvestigationFlag => "Investigation Flag",
            Self::SpecialistQueue => "Specialist Queue",
            Self::FastTrack => "Fast-track",
            Self::StandardProcessing => "Standard Processing",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A routing decision and the explanation shown to the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteVerdict {
    pub route: Route,
    pub reasoning: String,
}

struct RoutingRule {
    route: Route,
    applies: fn(&ExtractedFields, &[&str]) -> bool,
    reason: fn(&[&str]) -> String,
}

/// Checked top to bottom; the first rule that applies decides the route.
static RULES: [RoutingRule; 4] = [
    RoutingRule {
        route: Route::ManualReview,
        applies: has_missing_fields,
        reason: missing_fields_reason,
    },
    RoutingRule {
        route: Route::InvestigationFlag,
        applies: has_suspicious_description,
        reason: |_| SUSPICIOUS_REASON.to_string(),
    },
    RoutingRule {
        route: Route::SpecialistQueue,
        applies: is_injury_claim,
        reason: |_| INJURY_REASON.to_string(),
    },
    RoutingRule {
        route: Route::FastTrack,
        applies: is_below_fast_track_limit,
        reason: |_| FAST_TRACK_REASON.to_string(),
    },
];

const SUSPICIOUS_REASON: &str = "Description contains suspicious keywords.";
const INJURY_REASON: &str = "Claim type is injury-related.";
const FAST_TRACK_REASON: &str =
    "Estimated damage is below the fast-track threshold of 25000 (₹25,000).";
const STANDARD_REASON: &str = "Standard claim processing.";

/// Pick the route for a claim. Always returns a verdict.
pub fn route(fields: &ExtractedFields, missing: &[&str]) -> RouteVerdict {
    RULES
        .iter()
        .find(|rule| (rule.applies)(fields, missing))
        .map(|rule| RouteVerdict {
            route: rule.route,
            reasoning: (rule.reason)(missing),
        })
        .unwrap_or_else(|| RouteVerdict {
            route: Route::StandardProcessing,
            reasoning: STANDARD_REASON.to_string(),
        })
}

fn has_missing_fields(_: &ExtractedFields, missing: &[&str]) -> bool {
    !missing.is_empty()
}

fn missing_fields_reason(missing: &[&str]) -> String {
    format!("Missing mandatory fields: {}", missing.join(", "))
}

fn has_suspicious_description(fields: &ExtractedFields, _: &[&str]) -> bool {
    let desc = fields.get(DESCRIPTION).unwrap_or_default().to_lowercase();
    SUSPICIOUS_KEYWORDS.iter().any(|kw| desc.contains(kw))
}

fn is_injury_claim(fields: &ExtractedFields, _: &[&str]) -> bool {
    fields
        .get(CLAIM_TYPE)
        .is_some_and(|t| t.to_lowercase() == "injury")
}

fn is_below_fast_track_limit(fields: &ExtractedFields, _: &[&str]) -> bool {
    fields
        .get(ESTIMATED_DAMAGE)
        .and_then(parse_amount)
        .is_some_and(|amount| amount < FAST_TRACK_LIMIT)
}

/// Read a money amount such as `₹22,500` or `USD 1,200.50`.
///
/// Everything except digits and `.` is dropped, then the longest leading
/// `digits[.digits]` run is parsed. Returns `None` when no digit survives.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let int_len = stripped.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    if stripped[end..].starts_with('.') {
        let frac_len = stripped[end + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if int_len + frac_len == 0 {
            return None;
        }
        end += 1 + frac_len;
    } else if int_len == 0 {
        return None;
    }

    stripped[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
