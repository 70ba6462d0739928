// src/store/mod.rs
// =============================================================================
// Per-domain JSON persistence with merge-on-write.
// =============================================================================

mod domain;

pub use domain::{domain_file_name, page_key, DomainStore, SaveOutcome};
