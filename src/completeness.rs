// src/completeness.rs

use crate::fields::{
    ATTACHMENTS, CLAIM_TYPE, DESCRIPTION, ExtractedFields, INCIDENT_DATE, INITIAL_ESTIMATE,
    LOCATION, POLICY_NUMBER, POLICYHOLDER_NAME,
};

/// Fields whose absence sends a claim to manual review, in reporting order.
pub const MANDATORY_FIELDS: [&str; 8] = [
    POLICY_NUMBER,
    POLICYHOLDER_NAME,
    INCIDENT_DATE,
    LOCATION,
    DESCRIPTION,
    CLAIM_TYPE,
    ATTACHMENTS,
    INITIAL_ESTIMATE,
];

/// Mandatory fields with no extracted value, in `MANDATORY_FIELDS` order.
///
/// Only absence counts: a label present with an empty value passes.
pub fn find_missing(fields: &ExtractedFields) -> Vec<&'static str> {
    MANDATORY_FIELDS
        .iter()
        .copied()
        .filter(|name| fields.get(name).is_none())
        .collect()
}
