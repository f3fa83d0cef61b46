//! Core domain concepts shared across all subdomains.
//!
//! - [`sentence::Sentence`]: an opaque proposition
//! - [`equality_set::EqualitySet`]: set with structural membership
//! - [`error::DomainError`]: domain-level errors

pub mod equality_set;
pub mod error;
pub mod sentence;
