//! Inference and incompatibility rules
//!
//! Agents reason with two kinds of [`Inference`]:
//!
//! - **Committive** rules pass commitment (and entitlement) from premises
//!   to conclusion.
//! - **Permissive** rules pass only entitlement, and only from premises
//!   that are both committed and entitled.
//!
//! An [`Incompatibility`] is a set of sentences that cannot all be held
//! together.

pub mod incompatibility;
pub mod inference;
pub mod seed;

pub use incompatibility::{Incompatibility, IncompatibilitySet, incompatibility};
pub use inference::{Inference, InferenceSet};
pub use seed::{InferenceSeed, RuleSeed};
