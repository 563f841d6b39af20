//! Field extraction and routing for First-Notice-of-Loss claim documents.
//!
//! [`process_claim`] turns raw document text into a [`ClaimReport`]: the
//! catalog fields found, the mandatory ones missing, and the recommended
//! processing route with its reasoning. [`document`] turns files into that
//! text.

pub mod batch;
pub mod completeness;
pub mod config;
pub mod document;
pub mod fields;
pub mod processor;
pub mod routing;

pub use batch::{BatchOutcome, run_batch};
pub use completeness::{MANDATORY_FIELDS, find_missing};
pub use fields::{ExtractedFields, FIELD_NAMES, extract_fields};
pub use processor::{ClaimReport, process_claim};
pub use routing::{Route, RouteVerdict, route};
