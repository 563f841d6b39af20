use fnol_router::fields::{CLAIM_TYPE, DESCRIPTION, ESTIMATED_DAMAGE, LOCATION, POLICY_NUMBER};
use fnol_router::{FIELD_NAMES, MANDATORY_FIELDS, Route, process_claim};

const CLEAN_CLAIM: &str = "Policy Number: P1\n\
Policyholder Name: Jane Doe\n\
Incident Date: 2024-01-01\n\
Location: NY\n\
Description: minor fender bender\n\
Claim Type: Auto\n\
Attachments: photo.jpg\n\
Initial Estimate: 500\n\
Estimated Damage: 12000";

fn with_line(label: &str, value: &str) -> String {
    CLEAN_CLAIM
        .lines()
        .map(|line| {
            if line.starts_with(label) {
                format!("{label}: {value}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn clean_claim_is_fast_tracked() {
    let report = process_claim(CLEAN_CLAIM);
    assert!(report.missing_fields.is_empty());
    assert_eq!(report.recommended_route, Route::FastTrack);
    assert!(report.reasoning.contains("25000"));
    assert_eq!(report.extracted_fields.get(POLICY_NUMBER), Some("P1"));
    assert_eq!(report.extracted_fields.get(ESTIMATED_DAMAGE), Some("12000"));
}

#[test]
fn staged_description_overrides_fast_track() {
    let report = process_claim(&with_line(DESCRIPTION, "claim appears staged"));
    assert_eq!(report.recommended_route, Route::InvestigationFlag);
    assert_eq!(report.reasoning, "Description contains suspicious keywords.");
}

#[test]
fn missing_field_beats_fraud_keyword() {
    let text = with_line(DESCRIPTION, "possible fraud")
        .lines()
        .filter(|line| !line.starts_with(LOCATION))
        .collect::<Vec<_>>()
        .join("\n");
    let report = process_claim(&text);
    assert_eq!(report.missing_fields, vec![LOCATION]);
    assert_eq!(report.recommended_route, Route::ManualReview);
    assert_eq!(report.reasoning, "Missing mandatory fields: Location");
}

#[test]
fn injury_claim_type_any_case() {
    for claim_type in ["INJURY", "Injury"] {
        let report = process_claim(&with_line(CLAIM_TYPE, claim_type));
        assert_eq!(report.recommended_route, Route::SpecialistQueue);
    }
}

#[test]
fn damage_boundaries() {
    let cases = [
        ("25000", Route::StandardProcessing),
        ("24999", Route::FastTrack),
        ("₹24,999.50", Route::FastTrack),
        ("₹22,500", Route::FastTrack),
        ("N/A", Route::StandardProcessing),
    ];
    for (damage, expected) in cases {
        let report = process_claim(&with_line(ESTIMATED_DAMAGE, damage));
        assert_eq!(report.recommended_route, expected, "damage {damage:?}");
    }
}

#[test]
fn text_without_labels() {
    for text in ["", "   \n\n", "nothing useful here at all"] {
        let report = process_claim(text);
        assert!(report.extracted_fields.iter().all(|(_, v)| v.is_none()));
        assert_eq!(report.missing_fields, MANDATORY_FIELDS.to_vec());
        assert_eq!(report.recommended_route, Route::ManualReview);
    }
}

#[test]
fn labels_found_anywhere_in_text() {
    let mut text = String::from("FIRST NOTICE OF LOSS\nSubmitted via portal.\n");
    for name in FIELD_NAMES {
        text.push_str(&format!("  {name}: value-{}\n", name.len()));
    }
    let report = process_claim(&text);
    for name in FIELD_NAMES {
        let expected = format!("value-{}", name.len());
        assert_eq!(report.extracted_fields.get(name), Some(expected.as_str()), "{name}");
    }
}

#[test]
fn processing_is_idempotent() {
    let first = process_claim(CLEAN_CLAIM);
    let second = process_claim(CLEAN_CLAIM);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| process_claim(CLEAN_CLAIM)))
        .collect();
    let expected = process_claim(CLEAN_CLAIM);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn report_serializes_with_wire_names() {
    let json = serde_json::to_value(process_claim(CLEAN_CLAIM)).unwrap();
    assert_eq!(json["recommendedRoute"], "Fast-track");
    assert_eq!(json["missingFields"], serde_json::json!([]));
    assert_eq!(json["extractedFields"]["Claim Type"], "Auto");
    assert!(json["extractedFields"]["Third Parties"].is_null());
}
