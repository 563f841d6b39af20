use regex::Regex;
use std::sync::LazyLock;

pub const POLICY_NUMBER: &str = "Policy Number";
pub const POLICYHOLDER_NAME: &str = "Policyholder Name";
pub const EFFECTIVE_DATES: &str = "Effective Dates";
pub const INCIDENT_DATE: &str = "Incident Date";
pub const INCIDENT_TIME: &str = "Incident Time";
pub const LOCATION: &str = "Location";
pub const DESCRIPTION: &str = "Description";
pub const CLAIMANT: &str = "Claimant";
pub const THIRD_PARTIES: &str = "Third Parties";
pub const CONTACT_DETAILS: &str = "Contact Details";
pub const ASSET_TYPE: &str = "Asset Type";
pub const ASSET_ID: &str = "Asset ID";
pub const ESTIMATED_DAMAGE: &str = "Estimated Damage";
pub const CLAIM_TYPE: &str = "Claim Type";
pub const ATTACHMENTS: &str = "Attachments";
pub const INITIAL_ESTIMATE: &str = "Initial Estimate";

/// Field name and the label pattern that introduces its value, in output order.
const FIELD_LABELS: [(&str, &str); 16] = [
    (POLICY_NUMBER, r"Policy Number"),
    (POLICYHOLDER_NAME, r"Policyholder Name"),
    (EFFECTIVE_DATES, r"Effective Dates?"),
    (INCIDENT_DATE, r"Incident Date"),
    (INCIDENT_TIME, r"Incident Time"),
    (LOCATION, r"Location"),
    (DESCRIPTION, r"Description"),
    (CLAIMANT, r"Claimant"),
    (THIRD_PARTIES, r"Third Parties"),
    (CONTACT_DETAILS, r"Contact Details"),
    (ASSET_TYPE, r"Asset Type"),
    (ASSET_ID, r"Asset ID"),
    (ESTIMATED_DAMAGE, r"Estimated Damage"),
    (CLAIM_TYPE, r"Claim Type"),
    (ATTACHMENTS, r"Attachments"),
    (INITIAL_ESTIMATE, r"Initial Estimate"),
];

/// Every field name in catalog order.
pub const FIELD_NAMES: [&str; 16] = {
    let mut names = [""; 16];
    let mut i = 0;
    while i < FIELD_LABELS.len() {
        names[i] = FIELD_LABELS[i].0;
        i += 1;
    }
    names
};

/// A catalog entry compiled for matching.
pub(crate) struct FieldPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Label, optional `:`/`-` separator, then the rest of the same line.
/// Only horizontal whitespace is skipped, so a bare label captures an empty
/// value instead of the next line. U+2028/U+2029 also end a line.
pub(crate) static FIELD_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    FIELD_LABELS
        .iter()
        .map(|&(name, label)| FieldPattern {
            name,
            regex: Regex::new(&format!(
                r"(?i){label}[^\S\r\n\x{{2028}}\x{{2029}}]*[:\-]?[^\S\r\n\x{{2028}}\x{{2029}}]*([^\r\n\x{{2028}}\x{{2029}}]*)"
            ))
            .expect("field label patterns are valid regexes"),
        })
        .collect()
});

/// Capture the value for one compiled pattern. First match in the text wins.
pub(crate) fn capture(pattern: &FieldPattern, text: &str) -> Option<String> {
    pattern
        .regex
        .captures(text)
        .map(|c| c[1].trim().to_string())
}
