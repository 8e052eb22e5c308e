//! Insertion-ordered set.
//!
//! Iteration follows insertion order, which makes the first element the head
//! of a FIFO queue. Equality and hashing ignore order so two sets holding the
//! same elements compare equal however they were built.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::hash_map::DefaultHasher;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A set that remembers the order its elements were inserted in.
#[derive(Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    index: HashSet<T>,
}

impl<T> OrderedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The earliest inserted element still present.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    /// Insert an element at the back. Returns false if it was already present;
    /// the existing element keeps its position.
    pub fn insert(&mut self, item: T) -> bool {
        if self.index.contains(&item) {
            return false;
        }
        self.index.insert(item.clone());
        self.items.push(item);
        true
    }

    /// Whether the element is present. Accepts any borrowed form of the
    /// element, as `HashSet::contains` does.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(item)
    }

    /// Remove an element. Returns false if it was not present.
    pub fn remove(&mut self, item: &T) -> bool {
        if !self.index.remove(item) {
            return false;
        }
        if let Some(pos) = self.items.iter().position(|x| x == item) {
            self.items.remove(pos);
        }
        true
    }

    /// Remove and return the earliest inserted element.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let item = self.items.remove(0);
        self.index.remove(&item);
        Some(item)
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().all(|item| other.index.contains(item))
    }
}

impl<T: Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Sum of per-element hashes, so insertion order does not matter.
        let combined = self.items.iter().fold(0u64, |acc, item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        state.write_usize(self.items.len());
        state.write_u64(combined);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut set = OrderedSet::new();
        assert!(set.insert("a"));
        assert!(set.insert("b"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_pop_first_is_fifo() {
        let mut set: OrderedSet<_> = ["c", "a", "b"].into_iter().collect();
        assert_eq!(set.first(), Some(&"c"));
        assert_eq!(set.pop_first(), Some("c"));
        assert_eq!(set.pop_first(), Some("a"));
        assert_eq!(set.pop_first(), Some("b"));
        assert_eq!(set.pop_first(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_reinsert_after_remove_goes_to_back() {
        let mut set: OrderedSet<_> = [1, 2, 3].into_iter().collect();
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(!set.contains(&1));
        set.insert(1);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_contains_by_borrowed_form() {
        let set: OrderedSet<String> = ["alice".to_string()].into_iter().collect();
        assert!(set.contains("alice"));
        assert!(!set.contains("bob"));
    }

    #[test]
    fn test_equality_and_hash_ignore_order() {
        let a: OrderedSet<_> = [1, 2, 3].into_iter().collect();
        let b: OrderedSet<_> = [3, 1, 2].into_iter().collect();
        let c: OrderedSet<_> = [1, 2].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_keeps_order_and_drops_duplicates() {
        let set: OrderedSet<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[3,1,2]");

        let parsed: OrderedSet<i32> = serde_json::from_str("[5,4,5,6]").unwrap();
        assert_eq!(parsed.iter().copied().collect::<Vec<_>>(), vec![5, 4, 6]);
    }
}
