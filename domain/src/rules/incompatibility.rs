//! Incompatibility sets

use crate::core::{equality_set::EqualitySet, sentence::Sentence};

/// Sentences declared mutually incompatible
///
/// Joint commitment to every member is a violation.
pub type Incompatibility = EqualitySet<Sentence>;

/// The incompatibilities an agent accepts
pub type IncompatibilitySet = EqualitySet<Incompatibility>;

/// Build an [`Incompatibility`] from any collection of sentences
pub fn incompatibility<I, S>(sentences: I) -> Incompatibility
where
    I: IntoIterator<Item = S>,
    S: Into<Sentence>,
{
    sentences.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incompatibility_set_is_order_insensitive() {
        let mut incs = IncompatibilitySet::new();
        incs.add(incompatibility(["A is red", "A is blue"]));
        assert!(incs.contains(&incompatibility(["A is blue", "A is red"])));
        assert!(!incs.add(incompatibility(["A is blue", "A is red"])));
    }
}
