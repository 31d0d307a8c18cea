use crate::arena::Arena;
use crate::entry::Entry;
use crate::splay_tree::node::Node;
use std::cmp::Ordering;

/// Outcome of a comparator walk from the root.
enum Search {
    /// A node with an equal key.
    Hit(usize),
    /// The walk ran out of children. The node where it stopped would be the parent of the key on
    /// insertion, attached on the side given by the ordering against that node.
    Miss(usize, Ordering),
}

pub struct SplayTree<T, U, C> {
    pub arena: Arena<Node<T, U>>,
    pub root: Option<usize>,
    comparator: C,
}

impl<T, U, C> SplayTree<T, U, C> {
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn key(&self, node: usize) -> &T {
        &self.arena[node].entry.key
    }

    pub fn value(&self, node: usize) -> &U {
        &self.arena[node].entry.value
    }

    pub fn value_mut(&mut self, node: usize) -> &mut U {
        &mut self.arena[node].entry.value
    }

    pub fn left(&self, node: usize) -> Option<usize> {
        self.arena[node].left
    }

    pub fn right(&self, node: usize) -> Option<usize> {
        self.arena[node].right
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.arena[node].parent
    }

    fn is_left_child(&self, node: usize) -> bool {
        match self.arena[node].parent {
            Some(parent) => self.arena[parent].left == Some(node),
            None => false,
        }
    }

    /// Transfers the grandparent link of `parent` to `node` after a rotation, updating the root
    /// when `parent` was the root.
    fn swap_grandparent(&mut self, node: usize, parent: usize) {
        let grandparent = self.arena[parent].parent;
        self.arena[node].parent = grandparent;
        match grandparent {
            Some(grandparent) => {
                if self.arena[grandparent].left == Some(parent) {
                    self.arena[grandparent].left = Some(node);
                } else {
                    self.arena[grandparent].right = Some(node);
                }
            }
            None => self.root = Some(node),
        }
        self.arena[parent].parent = Some(node);
    }

    /// Promotes `node` into its parent's position. `node` must be the left child of its parent.
    fn rotate_right(&mut self, node: usize) {
        let parent = self.arena[node].parent.expect("Expected parent node to be `Some`.");
        let right = self.arena[node].right;
        self.arena[node].right = Some(parent);
        self.arena[parent].left = right;
        if let Some(right) = right {
            self.arena[right].parent = Some(parent);
        }
        self.swap_grandparent(node, parent);
    }

    /// Promotes `node` into its parent's position. `node` must be the right child of its parent.
    fn rotate_left(&mut self, node: usize) {
        let parent = self.arena[node].parent.expect("Expected parent node to be `Some`.");
        let left = self.arena[node].left;
        self.arena[node].left = Some(parent);
        self.arena[parent].right = left;
        if let Some(left) = left {
            self.arena[left].parent = Some(parent);
        }
        self.swap_grandparent(node, parent);
    }

    /// Rotates `node` up to the root, two levels at a time where a grandparent exists. Every step
    /// strictly decreases the node's depth, so the loop terminates once the parent link is empty.
    pub fn splay(&mut self, node: usize) {
        while let Some(parent) = self.arena[node].parent {
            if self.arena[parent].parent.is_none() {
                // Zig step
                if self.is_left_child(node) {
                    self.rotate_right(node);
                } else {
                    self.rotate_left(node);
                }
            } else if self.is_left_child(node) && self.is_left_child(parent) {
                // Zig-zig step
                self.rotate_right(parent);
                self.rotate_right(node);
            } else if !self.is_left_child(node) && !self.is_left_child(parent) {
                // Zig-zig step
                self.rotate_left(parent);
                self.rotate_left(node);
            } else if self.is_left_child(node) {
                // Zig-zag step
                self.rotate_right(node);
                self.rotate_left(node);
            } else {
                // Zig-zag step
                self.rotate_left(node);
                self.rotate_right(node);
            }
        }
    }

    fn rightmost(&self, mut node: usize) -> usize {
        while let Some(right) = self.arena[node].right {
            node = right;
        }
        node
    }

    /// Detaches `node` and rejoins its former subtrees. The node is splayed first so that its
    /// children are exactly the two subtrees to merge; the maximum of the left subtree has a free
    /// right slot once splayed to the top, so the right subtree hangs there.
    pub fn remove_node(&mut self, node: usize) -> Entry<T, U> {
        self.splay(node);
        let Node { entry, left, right, .. } = self.arena.free(node);
        if let Some(child) = left {
            self.arena[child].parent = None;
        }
        if let Some(child) = right {
            self.arena[child].parent = None;
        }
        match left {
            Some(child) => {
                self.root = Some(child);
                let max = self.rightmost(child);
                self.splay(max);
                self.arena[max].right = right;
                if let Some(child) = right {
                    self.arena[child].parent = Some(max);
                }
            }
            None => self.root = right,
        }
        entry
    }

    pub fn traverse_inorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.inorder(self.root, &mut visitor);
    }

    pub fn traverse_preorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.preorder(self.root, &mut visitor);
    }

    pub fn traverse_postorder<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, &U),
    {
        self.postorder(self.root, &mut visitor);
    }

    fn inorder<F>(&self, subtree: Option<usize>, visitor: &mut F)
    where
        F: FnMut(&T, &U),
    {
        if let Some(node) = subtree {
            self.inorder(self.arena[node].left, visitor);
            let entry = &self.arena[node].entry;
            visitor(&entry.key, &entry.value);
            self.inorder(self.arena[node].right, visitor);
        }
    }

    fn preorder<F>(&self, subtree: Option<usize>, visitor: &mut F)
    where
        F: FnMut(&T, &U),
    {
        if let Some(node) = subtree {
            let entry = &self.arena[node].entry;
            visitor(&entry.key, &entry.value);
            self.preorder(self.arena[node].left, visitor);
            self.preorder(self.arena[node].right, visitor);
        }
    }

    fn postorder<F>(&self, subtree: Option<usize>, visitor: &mut F)
    where
        F: FnMut(&T, &U),
    {
        if let Some(node) = subtree {
            self.postorder(self.arena[node].left, visitor);
            self.postorder(self.arena[node].right, visitor);
            let entry = &self.arena[node].entry;
            visitor(&entry.key, &entry.value);
        }
    }
}

impl<T, U, C> SplayTree<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(comparator: C) -> Self {
        SplayTree {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    /// Iterative comparator walk from the root. Returns `None` only on an empty tree.
    fn search(&self, key: &T) -> Option<Search> {
        let mut current = self.root?;
        loop {
            match (self.comparator)(key, &self.arena[current].entry.key) {
                Ordering::Equal => return Some(Search::Hit(current)),
                Ordering::Less => match self.arena[current].left {
                    Some(child) => current = child,
                    None => return Some(Search::Miss(current, Ordering::Less)),
                },
                Ordering::Greater => match self.arena[current].right {
                    Some(child) => current = child,
                    None => return Some(Search::Miss(current, Ordering::Greater)),
                },
            }
        }
    }

    pub fn find(&self, key: &T) -> Option<usize> {
        match self.search(key) {
            Some(Search::Hit(node)) => Some(node),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: T, value: U) -> usize {
        let (parent, side) = match self.search(&key) {
            None => {
                let node = self.arena.allocate(Node::new(key, value, None));
                self.root = Some(node);
                return node;
            }
            Some(Search::Hit(node)) => {
                // Existing keys only have their value replaced; the tree keeps its shape and the
                // node is not splayed.
                self.arena[node].entry.value = value;
                return node;
            }
            Some(Search::Miss(parent, side)) => (parent, side),
        };

        let node = self.arena.allocate(Node::new(key, value, Some(parent)));
        if side == Ordering::Less {
            self.arena[parent].left = Some(node);
        } else {
            self.arena[parent].right = Some(node);
        }
        self.splay(node);
        node
    }

    pub fn remove(&mut self, key: &T) -> Option<Entry<T, U>> {
        self.find(key).map(|node| self.remove_node(node))
    }
}
