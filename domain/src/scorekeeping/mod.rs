//! Scorekeeping engine
//!
//! Computes, on demand, the commitments, entitlements and incompatibilities
//! one agent attributes to another. Nothing derived is stored: every score
//! is recomputed from the current population.
//!
//! # Attribution
//!
//! ```text
//! commitments(sk, o)  = closure of o.avowed under sk.committive, ≤ sk.intelligence rounds
//! incompatibles(sk, o) = { inc ∈ sk.incompatibilities | inc ⊆ commitments(sk, o) }
//! entitlements(sk, o) = closure of prune(pool) under expand, ≤ o.intelligence rounds
//!     pool   = ⋃ over agents a: a.avowed − sentences anyone challenged a on
//!     expand = prune(step(sk.committive, ents)) ∪ prune(step(sk.permissive, ents ∩ coms))
//! ```

pub mod attribution;
pub mod closure;
pub mod score;

pub use attribution::{
    all_unchallenged_assertions, challenged_sentences_of, commitments, entitlements,
    expand_entitlements, incompatibles, unchallenged_assertions,
};
pub use closure::{
    FixedPoint, compatible_with, consequences_once, consequences_once_and_prune, fixed_point,
    remove_incompatibles,
};
pub use score::{Score, ScoreCard, score_all};
