// src/processor.rs

use crate::completeness::find_missing;
use crate::fields::{ExtractedFields, extract_fields};
use crate::routing::{Route, route};
use serde::Serialize;
use tracing::debug;

/// Everything the pipeline produces for one claim document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReport {
    pub extracted_fields: ExtractedFields,
    pub missing_fields: Vec<&'static str>,
    pub recommended_route: Route,
    pub reasoning: String,
}

/// Run extraction, the completeness check and routing over one document's text.
pub fn process_claim(text: &str) -> ClaimReport {
    let extracted_fields = extract_fields(text);
    let (filled, total) = extracted_fields.coverage();
    debug!(filled, total, fields = ?extracted_fields, "Extracted fields");

    let missing_fields = find_missing(&extracted_fields);
    let verdict = route(&extracted_fields, &missing_fields);
    debug!(
        missing = ?missing_fields,
        route = %verdict.route,
        "Routing decision"
    );

    ClaimReport {
        extracted_fields,
        missing_fields,
        recommended_route: verdict.route,
        reasoning: verdict.reasoning,
    }
}
