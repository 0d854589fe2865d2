//! appmanifest - Typed access to application manifest bundles
//!
//! An application ships with a manifest: a read-only key/value bundle of
//! packaged metadata (names, version strings, URL schemes, capability
//! declarations, privacy usage descriptions). This crate gives typed,
//! infallible-by-default access to that bundle, a derived projection of its
//! well-known fields, and numeric ordering of dot-separated version strings.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the library)
//! - [`core`] - Domain types: the [`core::version::Version`] comparator
//! - [`manifest`] - The manifest bundle, raw typed lookups, and the
//!   [`manifest::schema::BundleInfo`] projection
//!
//! # Correctness Invariants
//!
//! 1. The manifest is immutable after construction; accessors never mutate
//! 2. Absent optional keys are never errors: lookups yield `None`, `""`,
//!    `false`, or an empty collection
//! 3. Required-key access is a caller obligation and fails fast with a
//!    diagnostic naming the key
//! 4. Version comparison is numeric, never lexicographic; malformed
//!    components are explicit errors

pub mod cli;
pub mod core;
pub mod manifest;
