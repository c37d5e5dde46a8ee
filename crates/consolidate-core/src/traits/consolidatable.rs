use std::hash::Hash;

/// An element that declares its own consolidation group and merge rule.
///
/// Two elements belong to the same group when their `group_key`s are equal.
/// During consolidation the running representative of a group is always the
/// receiver: `representative.merged_with(incoming)`. Implementations need not
/// be commutative.
///
/// # Examples
///
/// ```
/// use consolidate_core::Consolidatable;
///
/// struct Line { account: &'static str, cents: i64 }
///
/// impl Consolidatable for Line {
///     type Key = &'static str;
///
///     fn group_key(&self) -> Self::Key {
///         self.account
///     }
///
///     fn merged_with(self, other: Self) -> Self {
///         Line { account: self.account, cents: self.cents + other.cents }
///     }
/// }
///
/// let merged = Line { account: "rent", cents: 100 }
///     .merged_with(Line { account: "rent", cents: 50 });
/// assert_eq!(merged.cents, 150);
/// ```
pub trait Consolidatable: Sized {
    /// Group identity. Must be deterministic for a given element.
    type Key: Hash + Eq;

    /// The group this element belongs to.
    fn group_key(&self) -> Self::Key;

    /// Fold `other` into `self`, returning the new representative.
    fn merged_with(self, other: Self) -> Self;
}
