use rustc_hash::FxHashMap as HashMap;
use std::{cmp::Ordering, fmt::Display, hash::Hash};

use crate::error::GraphError;

/// Disjoint sets over arbitrary labels with path compression and union by rank.
///
/// <https://en.wikipedia.org/wiki/Disjoint-set_data_structure>
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: HashMap::default(),
            rank: HashMap::default(),
        }
    }
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Clone + Display,
{
    /// Every label starts as its own singleton set.
    pub fn new<I: IntoIterator<Item = T>>(labels: I) -> Self {
        let mut union_find = Self::default();
        for label in labels {
            union_find.make_set(label);
        }
        union_find
    }

    /// Register `label` as a singleton. No-op if it is already known.
    pub fn make_set(&mut self, label: T) {
        if !self.parent.contains_key(&label) {
            self.rank.insert(label.clone(), 0);
            self.parent.insert(label.clone(), label);
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node visited on the way up is re-parented directly to the root.
    pub fn find(&mut self, x: &T) -> Result<T, GraphError> {
        let mut root = self
            .parent
            .get_key_value(x)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| GraphError::UnknownVertex(x.to_string()))?;
        while let Some(parent) = self.parent.get(&root).filter(|parent| **parent != root) {
            root = parent.clone();
        }

        let mut current = x.clone();
        while current != root {
            let Some(parent) = self.parent.insert(current, root.clone()) else {
                break;
            };
            current = parent;
        }
        Ok(root)
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` if they already share a root. On equal ranks the root of `x` wins.
    pub fn union(&mut self, x: &T, y: &T) -> Result<bool, GraphError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank.get(&root_x).copied().unwrap_or_default();
        let rank_y = self.rank.get(&root_y).copied().unwrap_or_default();
        match rank_x.cmp(&rank_y) {
            Ordering::Less => {
                self.parent.insert(root_x, root_y);
            }
            Ordering::Greater => {
                self.parent.insert(root_y, root_x);
            }
            Ordering::Equal => {
                self.parent.insert(root_y, root_x.clone());
                self.rank.insert(root_x, rank_x + 1);
            }
        }
        Ok(true)
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: &T, y: &T) -> Result<bool, GraphError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    pub fn rank(&self, x: &T) -> Option<u32> {
        self.rank.get(x).copied()
    }

    /// Parent pointer without compressing anything.
    pub fn parent(&self, x: &T) -> Option<&T> {
        self.parent.get(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(["a", "b"]);
        assert_eq!(uf.len(), 2);
        assert_eq!(uf.find(&"a"), Ok("a"));
        assert_eq!(uf.find(&"b"), Ok("b"));
        assert_eq!(uf.rank(&"a"), Some(0));
    }

    #[test]
    fn union_then_find_agrees() {
        let mut uf = UnionFind::new(["a", "b", "c"]);
        assert_eq!(uf.union(&"a", &"b"), Ok(true));
        assert_eq!(uf.find(&"a"), uf.find(&"b"));
        assert_eq!(uf.union(&"a", &"b"), Ok(false));
        assert_eq!(uf.union(&"b", &"a"), Ok(false));
        assert_eq!(uf.connected(&"a", &"c"), Ok(false));
    }

    #[test]
    fn tie_attaches_second_root_under_first() {
        let mut uf = UnionFind::new([1, 2, 3]);
        uf.union(&1, &2).unwrap();
        assert_eq!(uf.parent(&2), Some(&1));
        assert_eq!(uf.rank(&1), Some(1));

        // lower rank root goes under the higher one regardless of argument order
        uf.union(&3, &2).unwrap();
        assert_eq!(uf.parent(&3), Some(&1));
        assert_eq!(uf.rank(&1), Some(1));
    }

    #[test]
    fn find_compresses_path() {
        let mut uf = UnionFind::new(0..8);
        uf.union(&0, &1).unwrap();
        uf.union(&2, &3).unwrap();
        uf.union(&0, &2).unwrap();
        uf.union(&4, &5).unwrap();
        uf.union(&6, &7).unwrap();
        uf.union(&4, &6).unwrap();
        uf.union(&0, &4).unwrap();

        // 7 -> 6 -> 4 -> 0
        assert_eq!(uf.parent(&7), Some(&6));
        assert_eq!(uf.find(&7), Ok(0));
        assert_eq!(uf.parent(&7), Some(&0));
        assert_eq!(uf.parent(&6), Some(&0));
        assert_eq!(uf.parent(&4), Some(&0));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let mut uf = UnionFind::new(["a".to_string()]);
        assert_eq!(
            uf.find(&"z".to_string()),
            Err(GraphError::UnknownVertex("z".into()))
        );
        assert_eq!(
            uf.union(&"a".to_string(), &"z".to_string()),
            Err(GraphError::UnknownVertex("z".into()))
        );
        assert_eq!(uf.find(&"a".to_string()), Ok("a".to_string()));
    }

    #[test]
    fn make_set_is_idempotent() {
        let mut uf = UnionFind::new(["a", "b"]);
        uf.union(&"a", &"b").unwrap();
        uf.make_set("b");
        assert_eq!(uf.len(), 2);
        assert_eq!(uf.connected(&"a", &"b"), Ok(true));
    }

    #[test]
    fn unknown_label_reads_like_other_unknown_vertices() {
        let mut uf = UnionFind::new(["Delhi"]);
        let err = uf.find(&"Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "vertex Atlantis is not registered");
        let mut numbered = UnionFind::new([1]);
        assert_eq!(
            numbered.find(&7).unwrap_err().to_string(),
            "vertex 7 is not registered"
        );
    }
}
