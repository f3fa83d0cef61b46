//! Structural-equality set
//!
//! [`EqualitySet`] is the collection every other set in the scorekeeping
//! model is built on. Membership is decided by `PartialEq` alone, so two
//! inferences with the same premises (in any order) and conclusion are the
//! same member, and sets of sentences nest inside each other without any
//! hashing requirement.
//!
//! Members keep their insertion order. Equality between two sets ignores
//! that order.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An unordered collection of members that are distinct by equality
///
/// # Example
///
/// ```
/// use gogar_domain::EqualitySet;
///
/// let mut set = EqualitySet::new();
/// assert!(set.add("A is red"));
/// assert!(!set.add("A is red"));
/// assert_eq!(set.len(), 1);
///
/// let other: EqualitySet<&str> = ["A is red"].into_iter().collect();
/// assert_eq!(set, other);
/// ```
#[derive(Debug, Clone)]
pub struct EqualitySet<T> {
    items: Vec<T>,
}

impl<T> EqualitySet<T> {
    /// Create an empty set
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over members in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Keep only the members matching the predicate
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) {
        self.items.retain(f);
    }
}

impl<T: PartialEq> EqualitySet<T> {
    /// Add a member. Returns `false` (and leaves the set alone) if an equal
    /// member is already present.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove every member equal to `item`. Returns `true` if anything was
    /// removed.
    pub fn delete(&mut self, item: &T) -> bool {
        let before = self.items.len();
        self.items.retain(|x| x != item);
        self.items.len() != before
    }

    /// Whether an equal member is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|x| x == item)
    }

    /// Whether every member of `self` is a member of `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.items.iter().all(|x| other.contains(x))
    }
}

impl<T: PartialEq + Clone> EqualitySet<T> {
    /// Members of either set; members of `self` come first
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.items.iter().cloned());
        result
    }

    /// Members of both sets, in `self`'s order
    pub fn intersection(&self, other: &Self) -> Self {
        self.items
            .iter()
            .filter(|x| other.contains(x))
            .cloned()
            .collect()
    }

    /// Members of `self` that are not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        self.items
            .iter()
            .filter(|x| !other.contains(x))
            .cloned()
            .collect()
    }

    /// A copy of the set with `item` removed
    pub fn without(&self, item: &T) -> Self {
        self.items.iter().filter(|x| *x != item).cloned().collect()
    }

    /// A copy of the set with `item` added
    pub fn with(&self, item: T) -> Self {
        let mut result = self.clone();
        result.add(item);
        result
    }
}

impl<T> Default for EqualitySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for EqualitySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq> Eq for EqualitySet<T> {}

impl<T: PartialEq> FromIterator<T> for EqualitySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for EqualitySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: PartialEq> From<Vec<T>> for EqualitySet<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T> IntoIterator for EqualitySet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EqualitySet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for EqualitySet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}}")
    }
}

impl<T: Serialize> Serialize for EqualitySet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

// Duplicates in the input collapse on the way in.
impl<'de, T: Deserialize<'de> + PartialEq> Deserialize<'de> for EqualitySet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&'static str]) -> EqualitySet<&'static str> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_add_twice_keeps_one_member() {
        let mut once = EqualitySet::new();
        once.add("A is red");

        let mut twice = EqualitySet::new();
        assert!(twice.add("A is red"));
        assert!(!twice.add("A is red"));

        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut s = set(&["A is red"]);
        assert!(!s.delete(&"A is blue"));
        assert_eq!(s.len(), 1);
        assert!(s.delete(&"A is red"));
        assert!(s.is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        assert_eq!(set(&["a", "b", "c"]), set(&["c", "a", "b"]));
        assert_ne!(set(&["a", "b"]), set(&["a", "b", "c"]));
    }

    #[test]
    fn test_nested_sets_compare_structurally() {
        let mut outer: EqualitySet<EqualitySet<&str>> = EqualitySet::new();
        outer.add(set(&["A is red", "A is blue"]));
        assert!(!outer.add(set(&["A is blue", "A is red"])));
        assert!(outer.delete(&set(&["A is blue", "A is red"])));
        assert!(outer.is_empty());
    }

    #[test]
    fn test_set_algebra() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);

        assert_eq!(a.union(&b), set(&["a", "b", "c", "d"]));
        assert_eq!(a.intersection(&b), set(&["b", "c"]));
        assert_eq!(a.difference(&b), set(&["a"]));
        assert_eq!(a.without(&"b"), set(&["a", "c"]));
        assert_eq!(a.with("z"), set(&["a", "b", "c", "z"]));
    }

    #[test]
    fn test_subset() {
        assert!(set(&[]).is_subset(&set(&["a"])));
        assert!(set(&["a"]).is_subset(&set(&["a", "b"])));
        assert!(!set(&["a", "z"]).is_subset(&set(&["a", "b"])));
    }

    #[test]
    fn test_display() {
        assert_eq!(set(&["A is red", "A is blue"]).to_string(), "{A is red, A is blue}");
        assert_eq!(set(&[]).to_string(), "{}");
    }

    #[test]
    fn test_deserialize_collapses_duplicates() {
        let s: EqualitySet<String> = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["a","b"]"#);
    }
}
