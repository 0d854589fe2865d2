//! core
//!
//! Core domain types for appmanifest.
//!
//! # Modules
//!
//! - [`version`] - Validated version strings and numeric ordering
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - All comparison is deterministic and numeric, never lexicographic

pub mod version;
