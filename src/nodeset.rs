use std::collections::HashMap;

/// Sentinel parent index marking a seeded source node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A discovered search node: a state plus the parent link and accumulated
/// cost needed for path reconstruction.
///
/// Nodes live in a per-search arena and are never mutated after creation;
/// `parent` is an index into the same arena.
pub(crate) struct PathNode<S> {
    pub(crate) state: S,
    pub(crate) parent: usize,
    pub(crate) distance: i32,
}

/// Frontier / closed set: a hash-keyed map into the node arena plus the same
/// indices kept in insertion order.
///
/// Insertion order is load-bearing: frontier selection breaks f-value ties in
/// favour of the earliest-inserted node, so `remove` must preserve the order
/// of the remaining entries (no swap-remove).
#[derive(Default)]
pub(crate) struct NodeSet {
    map: HashMap<String, usize>,
    order: Vec<usize>,
}

impl NodeSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `idx` under `key`. The first insertion for a key wins: a key
    /// already present leaves the set untouched, even when the new entry
    /// reaches the same state more cheaply.
    pub(crate) fn add(&mut self, key: String, idx: usize) {
        if self.map.contains_key(&key) {
            return;
        }
        self.order.push(idx);
        self.map.insert(key, idx);
    }

    /// Arena index stored under `key`, if any.
    pub(crate) fn fetch(&self, key: &str) -> Option<usize> {
        self.map.get(key).copied()
    }

    pub(crate) fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Remove `key` from both the map and the order list; no-op if absent.
    pub(crate) fn remove(&mut self, key: &str) {
        let Some(idx) = self.map.remove(key) else {
            return;
        };
        if let Some(pos) = self.order.iter().position(|&i| i == idx) {
            self.order.remove(pos);
        }
    }

    /// Arena indices in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insertion_wins() {
        let mut set = NodeSet::new();
        set.add("a".to_string(), 0);
        set.add("a".to_string(), 7);
        assert_eq!(set.fetch("a"), Some(0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn fetch_and_has_track_membership() {
        let mut set = NodeSet::new();
        assert!(!set.has("a"));
        assert_eq!(set.fetch("a"), None);
        set.add("a".to_string(), 3);
        assert!(set.has("a"));
        assert_eq!(set.fetch("a"), Some(3));
    }

    #[test]
    fn remove_is_stable() {
        let mut set = NodeSet::new();
        set.add("a".to_string(), 0);
        set.add("b".to_string(), 1);
        set.add("c".to_string(), 2);
        set.remove("b");
        let order: Vec<usize> = set.iter().collect();
        assert_eq!(order, vec![0, 2]);
        assert!(!set.has("b"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set = NodeSet::new();
        set.add("a".to_string(), 0);
        set.remove("z");
        assert_eq!(set.len(), 1);
        assert!(set.has("a"));
    }
}
