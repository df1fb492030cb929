//! Boolean filter expressions for vendor search.
//!
//! This crate parses criteria expressions such as
//! `(cybersecurity OR compliance) AND ISO27001 AND NOT banking`, checks them
//! for structural errors and self-contradictions, and evaluates them against
//! vendor records to narrow a candidate set before ranking.
//!
//! The engine is synchronous and free of I/O. Taxonomy data (the table of
//! mutually exclusive criteria) and approximate matching are supplied by the
//! caller.
//!
//! # Example
//!
//! ```
//! use vendor_filter::{FilterEngine, VendorRecord};
//!
//! let records = vec![
//!     VendorRecord::new().with("industry", "cybersecurity").with("certifications", "ISO27001 SOC2"),
//!     VendorRecord::new().with("industry", "cybersecurity").with("certifications", "PCI-DSS"),
//!     VendorRecord::new().with("industry", "banking").with("certifications", "ISO27001"),
//! ];
//!
//! let outcome = FilterEngine::new().filter_records("cybersecurity AND ISO27001", &records);
//! assert_eq!(outcome.matching_indices, vec![0]);
//! ```

pub mod detect;
pub mod filter;
pub mod fuzzy;
pub mod record;
pub mod taxonomy;

pub use detect::looks_like_boolean;
pub use filter::{FilterEngine, FilterOutcome, ParseOutcome};
pub use fuzzy::{FallbackMatcher, SimilarityMatcher, DEFAULT_FUZZY_THRESHOLD};
pub use record::{RecordFields, VendorRecord, MATCH_FIELDS};
pub use taxonomy::{ExclusionTable, TaxonomyError};
