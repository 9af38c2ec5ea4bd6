//! Randomized treap over unique, totally ordered keys.
//!
//! A treap is a binary search tree that also keeps a max-heap order on a
//! random priority drawn once per node. The BST order makes lookups work;
//! the heap order on random priorities keeps the shape balanced in
//! expectation, with no explicit balance metadata (heights, colors,
//! weights). In expectation the tree looks like a BST built from a
//! uniformly random insertion order, whatever order the keys arrived in.
//!
//! Structure:
//! - Nodes own their children directly (`Option<Box<Node>>`), no arena
//! - Children sit in a two-slot link array indexed by LEFT/RIGHT, so the
//!   mirrored cases share code via `dir ^ 1`
//! - Each treap owns its priority generator; seeded construction gives
//!   reproducible priorities
//!
//! Operations (all expected O(log n)):
//! - insert: descend to an empty slot, create, rotate the new node up
//!   until heap order holds
//! - delete: locate the key, rotate the larger-priority child up until the
//!   target has at most one child, then splice it out
//! - exist: plain BST descent
//! - search_max_le: greatest stored key not exceeding a probe
//!
//! Mutations operate on the owning link itself (`&mut Link<K>`), so a
//! rotation can replace what the parent points to in place.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Index of the left child in a node's link array.
pub(crate) const LEFT: usize = 0;
/// Index of the right child in a node's link array.
pub(crate) const RIGHT: usize = 1;

/// An owning link to a subtree. `None` is the empty subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A tree node. Key and priority never change after creation; only the
/// links are rewritten, and only by rotation or splicing.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) priority: u64,
    pub(crate) links: [Link<K>; 2],
}

impl<K> Node<K> {
    fn new(key: K, priority: u64) -> Node<K> {
        return Node { key, priority, links: [None, None] };
    }
}

/// An ordered set of unique keys backed by a randomized treap.
#[derive(Clone, Debug)]
pub struct Treap<K> {
    pub(crate) root: Link<K>,
    rng: StdRng,
    len: usize,
}

impl<K: Ord> Treap<K> {
    /// Create an empty treap with priorities seeded from OS entropy.
    pub fn new() -> Treap<K> {
        return Treap {
            root: None,
            rng: StdRng::from_entropy(),
            len: 0,
        };
    }

    /// Create an empty treap with a deterministic priority stream.
    ///
    /// Two treaps built with the same seed and the same call sequence end
    /// up with identical shapes, which makes failures reproducible.
    pub fn with_seed(seed: u64) -> Treap<K> {
        return Treap {
            root: None,
            rng: StdRng::seed_from_u64(seed),
            len: 0,
        };
    }

    /// Number of keys in the treap.
    #[inline]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Whether the treap holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Whether the key is present.
    pub fn exist(&self, key: &K) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => cur = node.links[LEFT].as_deref(),
                Ordering::Greater => cur = node.links[RIGHT].as_deref(),
            }
        }
        return false;
    }

    /// Greatest stored key that is <= `key`, or None if every stored key
    /// is greater (or the treap is empty).
    pub fn search_max_le<'a>(&'a self, key: &K) -> Option<&'a K> {
        return search_max_le_at(&self.root, key);
    }

    /// Add a key, drawing a fresh random priority for it.
    ///
    /// Returns true if the key was newly added. Inserting a key that is
    /// already present is a no-op (no priority is drawn) and returns false.
    pub fn insert(&mut self, key: K) -> bool {
        let created = insert_at(&mut self.root, key, &mut self.rng);
        if created {
            self.len += 1;
        }
        return created;
    }

    /// Remove a key. Returns true if it was present; deleting an absent
    /// key is a no-op and returns false.
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = delete_at(&mut self.root, key);
        if removed {
            self.len -= 1;
        }
        return removed;
    }

    /// Iterate over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        return iter;
    }
}

impl<K: Ord> Default for Treap<K> {
    fn default() -> Self {
        return Treap::new();
    }
}

/// In-order iterator over keys. Holds the left spine of the subtrees still
/// to be visited, so memory use is bounded by tree depth.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut link: &'a Link<K>) {
        while let Some(node) = link.as_deref() {
            self.stack.push(node);
            link = &node.links[LEFT];
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.links[RIGHT]);
        return Some(&node.key);
    }
}

/// Rotate the child of `slot`'s node in direction `dir` up into `slot`.
///
/// The promoted child keeps its old subtree on the `dir` side; the former
/// parent takes over the child's opposite-side subtree and becomes the
/// child's opposite-side child. This is the unique relinking that swaps
/// the parent/child pair while preserving BST order.
///
/// An empty slot or a missing child in `dir` is a defined no-op, which
/// lets the insert/delete fixup loops skip the case analysis. Never
/// allocates; only relinks existing owned subtrees.
fn rotate_up<K>(slot: &mut Link<K>, dir: usize) {
    let Some(mut parent) = slot.take() else {
        return;
    };
    let Some(mut child) = parent.links[dir].take() else {
        *slot = Some(parent);
        return;
    };
    parent.links[dir] = child.links[dir ^ 1].take();
    child.links[dir ^ 1] = Some(parent);
    *slot = Some(child);
}

/// Restore the heap order at `slot` after one of its child subtrees grew a
/// higher-priority root. Checks both directions so it stays correct no
/// matter which side was just modified.
fn heap_fix<K>(slot: &mut Link<K>) {
    for dir in [LEFT, RIGHT] {
        let lift = match slot.as_deref() {
            Some(node) => match node.links[dir].as_deref() {
                Some(child) => child.priority > node.priority,
                None => false,
            },
            None => false,
        };
        if lift {
            rotate_up(slot, dir);
        }
    }
}

fn insert_at<K: Ord>(slot: &mut Link<K>, key: K, rng: &mut StdRng) -> bool {
    let created = match slot.as_deref_mut() {
        None => {
            *slot = Some(Box::new(Node::new(key, rng.next_u64())));
            return true;
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Equal => return false,
            Ordering::Less => insert_at(&mut node.links[LEFT], key, rng),
            Ordering::Greater => insert_at(&mut node.links[RIGHT], key, rng),
        },
    };
    // Unwinding the descent path: bubble the new node up while its
    // priority beats its parent's.
    if created {
        heap_fix(slot);
    }
    return created;
}

fn delete_at<K: Ord>(slot: &mut Link<K>, key: &K) -> bool {
    let node = match slot.as_deref_mut() {
        Some(node) => node,
        None => return false,
    };
    match key.cmp(&node.key) {
        Ordering::Less => return delete_at(&mut node.links[LEFT], key),
        Ordering::Greater => return delete_at(&mut node.links[RIGHT], key),
        Ordering::Equal => {}
    }
    remove_here(slot);
    return true;
}

/// Remove the node held by `slot`, which must be the deletion target.
///
/// While the target has two children, rotate the larger-priority child up
/// (equal priorities prefer the left child) and follow the target down the
/// opposite side; its depth strictly increases, so this terminates. Once
/// at most one child remains, splice that child into the slot.
fn remove_here<K>(mut slot: &mut Link<K>) {
    loop {
        let pick = match slot.as_deref() {
            None => return,
            Some(node) => {
                match (node.links[LEFT].as_deref(), node.links[RIGHT].as_deref()) {
                    (None, _) | (_, None) => None,
                    (Some(left), Some(right)) => {
                        if right.priority > left.priority {
                            Some(RIGHT)
                        } else {
                            Some(LEFT)
                        }
                    }
                }
            }
        };
        match pick {
            None => {
                if let Some(mut node) = slot.take() {
                    *slot = match node.links[LEFT].take() {
                        Some(child) => Some(child),
                        None => node.links[RIGHT].take(),
                    };
                }
                return;
            }
            Some(dir) => {
                rotate_up(slot, dir);
                // The target is now the promoted node's child on the side
                // opposite the rotation.
                slot = match slot {
                    Some(node) => &mut node.links[dir ^ 1],
                    None => return,
                };
            }
        }
    }
}

fn search_max_le_at<'a, K: Ord>(link: &'a Link<K>, key: &K) -> Option<&'a K> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        // Exact hit dominates anything further down.
        Ordering::Equal => return Some(&node.key),
        Ordering::Less => return search_max_le_at(&node.links[LEFT], key),
        // A hit in the right subtree is tighter than this key; if the
        // right subtree has nothing <= key, this key is the answer.
        Ordering::Greater => {
            return search_max_le_at(&node.links[RIGHT], key).or(Some(&node.key));
        }
    }
}
