use crate::arena::Arena;
use crate::entry::Entry;
use crate::splay_tree::node::Node;
use crate::splay_tree::tree::SplayTree;
use crate::splay_tree::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

/// An opaque handle to a node of a `SplayMap`.
///
/// A handle is only meaningful for the map that produced it and is invalidated when the node it
/// designates is removed. Using a stale or foreign handle is a contract violation: it yields an
/// unrelated entry or a panic, never memory unsafety.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NodeId(usize);

/// An ordered map implemented using a splay tree over a caller-supplied comparator.
///
/// A splay tree is a self-adjusting binary search tree with the additional property that recently
/// accessed items are quick to access again: inserting a new key splays its node to the root of
/// the tree. Keys are ordered by the comparator given at construction, which must define a total
/// order; there is no default ordering.
///
/// # Examples
///
/// ```
/// use splay_collections::splay_tree::{Error, SplayMap};
///
/// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Ok((0, 2)));
/// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
/// ```
pub struct SplayMap<T, U, C> {
    tree: SplayTree<T, U, C>,
}

impl<T, U, C> SplayMap<T, U, C> {
    /// Constructs a new, empty `SplayMap<T, U, C>` ordered by `comparator`.
    ///
    /// The comparator must be a pure function defining a total order over keys. An
    /// `Ordering::Equal` result is taken to mean true key equality and triggers value replacement
    /// on insertion; a comparator that returns `Equal` for genuinely distinct keys will silently
    /// merge them.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32, _> = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// ```
    pub fn new(comparator: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering,
    {
        SplayMap {
            tree: SplayTree::new(comparator),
        }
    }

    /// Inserts a key-value pair into the map and returns a handle to the resulting node. A newly
    /// inserted key is splayed to the root. If the key already exists in the map, only its value
    /// is replaced: the tree keeps its shape and no splaying happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// let node = map.insert(1, "one");
    /// assert_eq!(map.root(), Some(node));
    ///
    /// map.insert(1, "uno");
    /// assert_eq!(map.get(&1), Some(&"uno"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> NodeId
    where
        C: Fn(&T, &T) -> Ordering,
    {
        NodeId(self.tree.insert(key, value))
    }

    /// Returns a handle to the node holding a particular key, or `None` if the key does not exist
    /// in the map. `find` walks by comparator only and never splays, so lookups cost the depth of
    /// the key's node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, "one");
    /// assert!(map.find(&1).is_some());
    /// assert_eq!(map.find(&2), None);
    /// ```
    pub fn find(&self, key: &T) -> Option<NodeId>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.tree.find(key).map(NodeId)
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map. Note that `get` does not splay the tree
    /// in order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        match self.tree.find(key) {
            Some(node) => Some(self.tree.value(node)),
            None => None,
        }
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist. The accessed node is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        match self.tree.find(key) {
            Some(node) => {
                self.tree.splay(node);
                Some(self.tree.value_mut(node))
            }
            None => None,
        }
    }

    /// Checks if a key exists in the map. Note that `contains_key` does not splay the tree in
    /// order to use a non-mutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool
    where
        C: Fn(&T, &T) -> Ordering,
    {
        self.get(key).is_some()
    }

    /// Removes a key-value pair from the map, returning it. If no node matches the key, the map
    /// is left untouched and `Error::KeyNotFound` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::{Error, SplayMap};
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Ok((1, 1)));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<(T, U)>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        match self.tree.remove(key) {
            Some(entry) => {
                let Entry { key, value } = entry;
                Ok((key, value))
            }
            None => Err(Error::KeyNotFound),
        }
    }

    /// Removes the node behind a handle and returns its key-value pair. The handle must designate
    /// a live node of this map; passing anything else violates the handle contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, "one");
    /// let node = map.find(&1).unwrap();
    /// assert_eq!(map.remove_node(node), (1, "one"));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove_node(&mut self, node: NodeId) -> (T, U) {
        let Entry { key, value } = self.tree.remove_node(node.0);
        (key, value)
    }

    /// Copies every key-value pair of another map into this one, in the other map's in-order key
    /// order, via repeated insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut first = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// first.insert(1, 1);
    /// first.insert(2, 2);
    ///
    /// let mut second = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// second.add_all(&first);
    /// assert_eq!(second.len(), 2);
    /// assert_eq!(second.get(&1), Some(&1));
    /// ```
    pub fn add_all<D>(&mut self, other: &SplayMap<T, U, D>)
    where
        T: Clone,
        U: Clone,
        C: Fn(&T, &T) -> Ordering,
    {
        other.tree.traverse_inorder(|key, value| {
            self.insert(key.clone(), value.clone());
        });
    }

    /// Returns an unordered key-to-value snapshot of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, "one");
    ///
    /// let snapshot = map.to_map();
    /// assert_eq!(snapshot.get(&1), Some(&"one"));
    /// ```
    pub fn to_map(&self) -> HashMap<T, U>
    where
        T: Clone + Eq + Hash,
        U: Clone,
    {
        let mut map = HashMap::with_capacity(self.len());
        self.tree.traverse_inorder(|key, value| {
            map.insert(key.clone(), value.clone());
        });
        map
    }

    /// Applies a visitor to every key-value pair in in-order. Traversal is read-only and a fresh
    /// call re-walks the tree from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(2, 2);
    /// map.insert(1, 1);
    ///
    /// let mut keys = Vec::new();
    /// map.traverse_inorder(|key, _| keys.push(*key));
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn traverse_inorder<F>(&self, visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.tree.traverse_inorder(visitor);
    }

    /// Applies a visitor to every key-value pair in pre-order.
    pub fn traverse_preorder<F>(&self, visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.tree.traverse_preorder(visitor);
    }

    /// Applies a visitor to every key-value pair in post-order.
    pub fn traverse_postorder<F>(&self, visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.tree.traverse_postorder(visitor);
    }

    /// Returns a handle to the root node, or `None` if the map is empty.
    pub fn root(&self) -> Option<NodeId> {
        self.tree.root.map(NodeId)
    }

    /// Returns the key of the node behind a handle.
    pub fn key(&self, node: NodeId) -> &T {
        self.tree.key(node.0)
    }

    /// Returns the value of the node behind a handle.
    pub fn value(&self, node: NodeId) -> &U {
        self.tree.value(node.0)
    }

    /// Returns a handle to the left child of a node, if any.
    pub fn left(&self, node: NodeId) -> Option<NodeId> {
        self.tree.left(node.0).map(NodeId)
    }

    /// Returns a handle to the right child of a node, if any.
    pub fn right(&self, node: NodeId) -> Option<NodeId> {
        self.tree.right(node.0).map(NodeId)
    }

    /// Returns a handle to the parent of a node, if any.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree.parent(node.0).map(NodeId)
    }

    /// Renders the node behind a handle as `[Key: k; Val: v]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// let node = map.insert(1, "one");
    /// assert_eq!(map.node_string(node), "[Key: 1; Val: one]");
    /// ```
    pub fn node_string(&self, node: NodeId) -> String
    where
        T: fmt::Display,
        U: fmt::Display,
    {
        format!("[Key: {}; Val: {}]", self.key(node), self.value(node))
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let map: SplayMap<u32, u32, _> = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_collections::splay_tree::SplayMap;
    ///
    /// let mut map = SplayMap::new(|a: &u32, b: &u32| a.cmp(b));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> SplayMapIter<T, U> {
        SplayMapIter {
            arena: &self.tree.arena,
            current: self.tree.root,
            stack: Vec::new(),
        }
    }
}

impl<T, U, C> IntoIterator for SplayMap<T, U, C> {
    type IntoIter = SplayMapIntoIter<T, U, C>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        let current = self.tree.root;
        SplayMapIntoIter {
            tree: self.tree,
            current,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a SplayMap<T, U, C>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = SplayMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `SplayMap<T, U, C>`.
///
/// This iterator drains the map's arena and yields owned entries using in-order traversal.
pub struct SplayMapIntoIter<T, U, C> {
    tree: SplayTree<T, U, C>,
    current: Option<usize>,
    stack: Vec<usize>,
}

impl<T, U, C> Iterator for SplayMapIntoIter<T, U, C> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = self.tree.arena[node].left;
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = self.tree.arena.free(node);
            self.current = right;
            let Entry { key, value } = entry;
            (key, value)
        })
    }
}

/// An iterator for `SplayMap<T, U, C>`.
///
/// This iterator yields immutable key-value references using in-order traversal.
pub struct SplayMapIter<'a, T, U> {
    arena: &'a Arena<Node<T, U>>,
    current: Option<usize>,
    stack: Vec<usize>,
}

impl<'a, T, U> Iterator for SplayMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = self.arena[node].left;
        }
        self.stack.pop().map(|node| {
            let node = &self.arena[node];
            self.current = node.right;
            (&node.entry.key, &node.entry.value)
        })
    }
}

impl<T, U, C> fmt::Display for SplayMap<T, U, C>
where
    T: fmt::Display,
    U: fmt::Display,
{
    /// Renders the map as `{ [Key: k; Val: v] ... }` with entries in in-order.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        let mut result = Ok(());
        self.tree.traverse_inorder(|key, value| {
            if result.is_ok() {
                result = write!(f, " [Key: {}; Val: {}]", key, value);
            }
        });
        result?;
        write!(f, " }}")
    }
}

impl<'a, T, U, C> Index<&'a T> for SplayMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, C> IndexMut<&'a T> for SplayMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::SplayMap;
    use crate::splay_tree::Error;
    use std::cmp::Ordering;

    fn comparator(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_len_empty() {
        let map: SplayMap<i32, i32, _> = SplayMap::new(comparator);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: SplayMap<i32, i32, _> = SplayMap::new(comparator);
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut map = SplayMap::new(comparator);
        let node = map.insert(1, 1);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.root(), Some(node));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(1, 3);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_insert_duplicate_keeps_shape() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);
        let root = map.root().unwrap();
        assert_eq!(map.key(root), &3);

        let node = map.insert(1, 10);
        assert_eq!(map.len(), 3);
        assert_eq!(map.root(), Some(root));
        assert_eq!(map.key(node), &1);
        assert_eq!(map.get(&1), Some(&10));
    }

    #[test]
    fn test_new_key_splays_to_root() {
        let mut map = SplayMap::new(comparator);
        for key in &[5, 15, 7, 25, 71, 22] {
            let node = map.insert(*key, *key);
            assert_eq!(map.root(), Some(node));
            assert_eq!(map.key(node), key);
        }
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_find_does_not_splay() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);
        let root = map.root();

        let found = map.find(&1).unwrap();
        assert_eq!(map.key(found), &1);
        assert_eq!(map.root(), root);
        assert_eq!(map.find(&4), None);
    }

    #[test]
    fn test_get_mut_splays_to_root() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);

        *map.get_mut(&1).unwrap() = 10;
        let root = map.root().unwrap();
        assert_eq!(map.key(root), &1);
        assert_eq!(map.get(&1), Some(&10));
    }

    #[test]
    fn test_remove() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Ok((1, 1)));
        assert!(!map.contains_key(&1));
        assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_remove_node() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(2, 2);
        let node = map.find(&1).unwrap();
        assert_eq!(map.remove_node(node), (1, 1));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), None);
        assert_eq!(map.get(&2), Some(&2));
    }

    #[test]
    fn test_remove_rejoins_subtrees() {
        let mut map = SplayMap::new(comparator);
        for &key in &[5, 15, 7, 25, 71, 22] {
            map.insert(key, key);
        }
        assert_eq!(map.len(), 6);

        assert_eq!(map.remove(&5), Ok((5, 5)));
        assert_eq!(map.len(), 5);
        let root = map.root().unwrap();
        let left = map.left(root).unwrap();
        let right = map.right(root).unwrap();
        assert_eq!(map.key(root), &22);
        assert_eq!(map.key(left), &7);
        assert_eq!(map.key(map.right(left).unwrap()), &15);
        assert_eq!(map.key(right), &71);
        assert_eq!(map.key(map.left(right).unwrap()), &25);

        assert_eq!(map.remove(&7), Ok((7, 7)));
        assert_eq!(map.remove(&71), Ok((71, 71)));
        let root = map.root().unwrap();
        let left = map.left(root).unwrap();
        assert_eq!(map.key(root), &25);
        assert_eq!(map.key(left), &22);
        assert_eq!(map.key(map.left(left).unwrap()), &15);

        assert_eq!(map.remove(&15), Ok((15, 15)));
        assert_eq!(map.remove(&22), Ok((22, 22)));
        assert_eq!(map.remove(&25), Ok((25, 25)));
        assert!(map.is_empty());
        assert_eq!(map.root(), None);
        assert_eq!(map.remove(&25), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_parent_links_consistent() {
        let mut map = SplayMap::new(comparator);
        for key in 0..50 {
            map.insert(key * 7 % 50, key);
        }

        let root = map.root().unwrap();
        assert_eq!(map.parent(root), None);
        let mut stack = vec![root];
        let mut visited = 0;
        while let Some(node) = stack.pop() {
            visited += 1;
            for child in map.left(node).into_iter().chain(map.right(node)) {
                assert_eq!(map.parent(child), Some(node));
                stack.push(child);
            }
        }
        assert_eq!(visited, map.len());
    }

    #[test]
    fn test_custom_comparator_order() {
        let mut map = SplayMap::new(|a: &i32, b: &i32| b.cmp(a));
        map.insert(1, 1);
        map.insert(2, 2);
        map.insert(3, 3);

        let mut keys = Vec::new();
        map.traverse_inorder(|key, _| keys.push(*key));
        assert_eq!(keys, vec![3, 2, 1]);
    }

    #[test]
    fn test_add_all_preserves_traversal_orders() {
        let cmp = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let mut first = SplayMap::new(cmp);
        for &key in &["a", "aa", "aaa", "aaaa"] {
            first.insert(key, key);
        }

        let mut second = SplayMap::new(cmp);
        second.add_all(&first);
        assert_eq!(second.len(), 4);

        let mut inorder = Vec::new();
        second.traverse_inorder(|key, _| inorder.push(*key));
        assert_eq!(inorder, vec!["a", "aa", "aaa", "aaaa"]);

        let mut preorder = Vec::new();
        second.traverse_preorder(|key, _| preorder.push(*key));
        assert_eq!(preorder, vec!["aaaa", "aaa", "aa", "a"]);

        let mut postorder = Vec::new();
        second.traverse_postorder(|key, _| postorder.push(*key));
        assert_eq!(postorder, vec!["a", "aa", "aaa", "aaaa"]);
    }

    #[test]
    fn test_to_map_snapshot() {
        let mut map = SplayMap::new(comparator);
        map.insert(42, "42");
        map.insert(15, "15");
        map.insert(33, "33");
        map.insert(33, "33x");
        map.insert(15, "15x");
        assert_eq!(map.len(), 3);

        let snapshot = map.to_map();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(&42), Some(&"42"));
        assert_eq!(snapshot.get(&15), Some(&"15x"));
        assert_eq!(snapshot.get(&33), Some(&"33x"));
    }

    #[test]
    fn test_display() {
        let mut map: SplayMap<i32, &str, _> = SplayMap::new(comparator);
        assert_eq!(map.to_string(), "{ }");

        map.insert(2, "b");
        map.insert(1, "a");
        map.insert(3, "c");
        assert_eq!(
            map.to_string(),
            "{ [Key: 1; Val: a] [Key: 2; Val: b] [Key: 3; Val: c] }",
        );

        let node = map.find(&2).unwrap();
        assert_eq!(map.node_string(node), "[Key: 2; Val: b]");
    }

    #[test]
    fn test_index() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        assert_eq!(map[&1], 1);
        map[&1] = 3;
        assert_eq!(map[&1], 3);
    }

    #[test]
    fn test_clear() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.root(), None);
        assert_eq!(map.get(&1), None);
    }

    #[test]
    fn test_iter() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.iter().collect::<Vec<(&i32, &i32)>>(),
            vec![(&1, &2), (&3, &4), (&5, &6)],
        );
    }

    #[test]
    fn test_into_iter() {
        let mut map = SplayMap::new(comparator);
        map.insert(1, 2);
        map.insert(5, 6);
        map.insert(3, 4);

        assert_eq!(
            map.into_iter().collect::<Vec<(i32, i32)>>(),
            vec![(1, 2), (3, 4), (5, 6)],
        );
    }
}
