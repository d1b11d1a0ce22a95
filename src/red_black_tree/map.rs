use crate::entry::Entry;
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use crate::red_black_tree::{Error, Result, Violation};
use log::{debug, trace};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::result;

/// The comparator used by maps whose keys implement `Ord`.
pub type OrdComparator<T> = fn(&T, &T) -> Ordering;

/// An ordered map implemented using a left-leaning red black tree.
///
/// A red black tree is a self-balancing binary search tree where every link is colored either red
/// or black. In a left-leaning red black tree, red links only lean left and no node has two red
/// links attached to it, so every path from the root to a leaf has the same number of black links.
/// The height of the tree is therefore at most `2 * log2(n + 1)`.
///
/// Keys are ordered by a three-way comparator supplied at construction. Maps constructed with
/// `new` use the `Ord` implementation of the key.
///
/// # Examples
///
/// ```
/// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
///
/// let mut map = RedBlackMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), Err(Error::AbsentKey));
/// assert_eq!(map.len(), 2);
///
/// assert_eq!(map.min(), Ok(&0));
/// assert_eq!(map.ceil(&2), Ok(&3));
/// assert_eq!(map.rank(&3), Ok(1));
/// assert_eq!(map.select(0), Ok(&0));
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Ok((0, 2)));
/// assert_eq!(map.remove(&1), Err(Error::AbsentKey));
/// ```
pub struct RedBlackMap<T, U, C = OrdComparator<T>> {
    tree: tree::Tree<T, U>,
    cmp: C,
}

impl<T, U> RedBlackMap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackMap<T, U>` ordered by the `Ord` implementation of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// ```
    pub fn new() -> Self {
        RedBlackMap {
            tree: None,
            cmp: <T as Ord>::cmp,
        }
    }
}

impl<T, U, C> RedBlackMap<T, U, C> {
    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let map: RedBlackMap<u32, u32> = RedBlackMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 1..8 {
    ///     map.insert(key, key);
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Removes the key-value pair with the minimum key from the map. Returns
    /// `Err(Error::EmptyTable)` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_min(), Ok((1, 1)));
    /// assert_eq!(map.remove_min(), Ok((3, 3)));
    /// assert_eq!(map.remove_min(), Err(Error::EmptyTable));
    /// ```
    pub fn remove_min(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            debug!("Rejected removal of the minimum key of an empty map.");
            return Err(Error::EmptyTable);
        }

        tree::redden_root(&mut self.tree);
        let Node { entry, .. } = *tree::remove_min(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        trace!("Removed the minimum node; {} nodes remain.", self.len());
        Ok(entry.into_pair())
    }

    /// Removes the key-value pair with the maximum key from the map. Returns
    /// `Err(Error::EmptyTable)` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.remove_max(), Ok((3, 3)));
    /// assert_eq!(map.remove_max(), Ok((1, 1)));
    /// assert_eq!(map.remove_max(), Err(Error::EmptyTable));
    /// ```
    pub fn remove_max(&mut self) -> Result<(T, U)> {
        if self.is_empty() {
            debug!("Rejected removal of the maximum key of an empty map.");
            return Err(Error::EmptyTable);
        }

        tree::redden_root(&mut self.tree);
        let Node { entry, .. } = *tree::remove_max(&mut self.tree);
        tree::blacken_root(&mut self.tree);
        trace!("Removed the maximum node; {} nodes remain.", self.len());
        Ok(entry.into_pair())
    }

    /// Returns the minimum key of the map. Returns `Err(Error::EmptyTable)` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::EmptyTable)
    }

    /// Returns the maximum key of the map. Returns `Err(Error::EmptyTable)` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.tree)
            .map(|entry| &entry.key)
            .ok_or(Error::EmptyTable)
    }

    /// Returns the key with a particular rank, that is, the key that has exactly `index` keys less
    /// than it. Returns `Err(Error::InvalidRank)` if `index` is not less than the length of the
    /// map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.select(1), Ok(&3));
    /// assert_eq!(map.select(2), Err(Error::InvalidRank));
    /// ```
    pub fn select(&self, index: usize) -> Result<&T> {
        tree::select(&self.tree, index)
            .map(|entry| &entry.key)
            .ok_or(Error::InvalidRank)
    }

    /// Returns an iterator over the map. The iterator will yield key-value pairs using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// let mut iterator = map.iter();
    /// assert_eq!(iterator.next(), Some((&1, &1)));
    /// assert_eq!(iterator.next(), Some((&2, &2)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackMapIter<'_, T, U> {
        let mut iter = RedBlackMapIter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(&self.tree);
        iter
    }

    /// Returns a mutable iterator over the map. The iterator will yield key-value pairs using
    /// in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// for (key, value) in &mut map {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = map.iter_mut();
    /// assert_eq!(iterator.next(), Some((&1, &mut 2)));
    /// assert_eq!(iterator.next(), Some((&2, &mut 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> RedBlackMapIterMut<'_, T, U> {
        RedBlackMapIterMut {
            current: self.tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
        }
    }
}

impl<T, U, C> RedBlackMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Constructs a new, empty `RedBlackMap<T, U, C>` whose keys are ordered by `cmp`. The
    /// comparator must return `Ordering::Less` if its first argument is less than its second,
    /// `Ordering::Greater` if it is greater, and `Ordering::Equal` if they are the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.min(), Ok(&3));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        RedBlackMap { tree: None, cmp }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, its value is
    /// replaced and the old value is returned. The key stored in the map is not replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Ok(&1));
    /// assert_eq!(map.insert(1, 2), Some(1));
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<U> {
        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        let ret = tree::insert(tree, Node::new(key, value), cmp);
        tree::blacken_root(tree);
        if ret.is_none() {
            trace!("Inserted a new node; the tree has {} nodes.", tree::len(tree));
        }
        ret
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `Err(Error::AbsentKey)` and leave the
    /// map unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Ok((1, 1)));
    /// assert_eq!(map.remove(&1), Err(Error::AbsentKey));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<(T, U)> {
        if !self.contains_key(key) {
            debug!("Rejected removal of an absent key.");
            return Err(Error::AbsentKey);
        }

        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        tree::redden_root(tree);
        let entry = tree::remove(tree, key, cmp);
        tree::blacken_root(tree);
        trace!("Removed a node; {} nodes remain.", tree::len(tree));
        Ok(entry.into_pair())
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        tree::get(&self.tree, key, &self.cmp).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `Err(Error::AbsentKey)` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), Err(Error::AbsentKey));
    /// assert_eq!(map.get(&1), Ok(&1));
    /// ```
    pub fn get(&self, key: &T) -> Result<&U> {
        tree::get(&self.tree, key, &self.cmp)
            .map(|entry| &entry.value)
            .ok_or(Error::AbsentKey)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns
    /// `Err(Error::AbsentKey)` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Ok(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Result<&mut U> {
        let RedBlackMap {
            ref mut tree,
            ref cmp,
        } = self;
        tree::get_mut(tree, key, cmp)
            .map(|entry| &mut entry.value)
            .ok_or(Error::AbsentKey)
    }

    /// Returns the greatest key in the map that is less than or equal to a particular key.
    /// Returns `Err(Error::TooSmallFloorKey)` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.floor(&0), Err(Error::TooSmallFloorKey));
    /// assert_eq!(map.floor(&2), Ok(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Result<&T> {
        tree::floor(&self.tree, key, &self.cmp)
            .map(|entry| &entry.key)
            .ok_or(Error::TooSmallFloorKey)
    }

    /// Returns the least key in the map that is greater than or equal to a particular key.
    /// Returns `Err(Error::TooLargeCeilingKey)` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.ceil(&0), Ok(&1));
    /// assert_eq!(map.ceil(&2), Err(Error::TooLargeCeilingKey));
    /// ```
    pub fn ceil(&self, key: &T) -> Result<&T> {
        tree::ceil(&self.tree, key, &self.cmp)
            .map(|entry| &entry.key)
            .ok_or(Error::TooLargeCeilingKey)
    }

    /// Returns the number of keys in the map that are strictly less than a particular key.
    /// Returns `Err(Error::AbsentKey)` if the key does not exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackMap};
    ///
    /// let mut map = RedBlackMap::new();
    /// map.insert(1, 1);
    /// map.insert(3, 3);
    /// assert_eq!(map.rank(&3), Ok(1));
    /// assert_eq!(map.rank(&2), Err(Error::AbsentKey));
    /// ```
    pub fn rank(&self, key: &T) -> Result<usize> {
        match tree::rank(&self.tree, key, &self.cmp) {
            (rank, true) => Ok(rank),
            (_, false) => Err(Error::AbsentKey),
        }
    }

    /// Returns the number of keys in the map that are in the inclusive range `[lo, hi]`. Returns
    /// `0` if `lo` is greater than `hi`. Neither bound has to exist in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in &[1, 3, 5, 7] {
    ///     map.insert(*key, *key);
    /// }
    /// assert_eq!(map.range_len(&2, &7), 3);
    /// assert_eq!(map.range_len(&7, &2), 0);
    /// ```
    pub fn range_len(&self, lo: &T, hi: &T) -> usize {
        if (self.cmp)(lo, hi) == Ordering::Greater {
            return 0;
        }

        let (lo_rank, _) = tree::rank(&self.tree, lo, &self.cmp);
        let (hi_rank, hi_exists) = tree::rank(&self.tree, hi, &self.cmp);
        if hi_exists {
            hi_rank - lo_rank + 1
        } else {
            hi_rank - lo_rank
        }
    }

    /// Returns an iterator over the key-value pairs of the map whose keys are in the inclusive
    /// range `[lo, hi]`. The iterator will yield key-value pairs using in-order traversal and
    /// never visits subtrees whose keys are all outside of the range. The iterator is empty if
    /// `lo` is greater than `hi`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in &[1, 3, 5, 7] {
    ///     map.insert(*key, *key * 10);
    /// }
    ///
    /// let mut iterator = map.range(&2, &5);
    /// assert_eq!(iterator.next(), Some((&3, &30)));
    /// assert_eq!(iterator.next(), Some((&5, &50)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn range(&self, lo: &T, hi: &T) -> RedBlackMapIter<'_, T, U> {
        let mut iter = RedBlackMapIter {
            stack: Vec::new(),
            remaining: self.range_len(lo, hi),
        };

        if iter.remaining > 0 {
            let mut curr = &self.tree;
            while let Some(ref node) = curr {
                if (self.cmp)(&node.entry.key, lo) == Ordering::Less {
                    curr = &node.right;
                } else {
                    iter.stack.push(node);
                    curr = &node.left;
                }
            }
        }

        iter
    }

    /// Walks the entire tree and checks that the keys are in sorted order, that the cached
    /// subtree lengths are consistent, and that the left-leaning red black invariants hold.
    /// Returns the black height of the tree if all invariants hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackMap;
    ///
    /// let mut map = RedBlackMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, key);
    /// }
    /// assert!(map.validate().is_ok());
    /// ```
    pub fn validate(&self) -> result::Result<usize, Violation> {
        tree::validate(&self.tree, &self.cmp)
    }
}

impl<T, U, C> IntoIterator for RedBlackMap<T, U, C> {
    type IntoIter = RedBlackMapIntoIter<T, U>;
    type Item = (T, U);

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, U, C> IntoIterator for &'a RedBlackMap<T, U, C>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIter<'a, T, U>;
    type Item = (&'a T, &'a U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, U, C> IntoIterator for &'a mut RedBlackMap<T, U, C>
where
    T: 'a,
    U: 'a,
{
    type IntoIter = RedBlackMapIterMut<'a, T, U>;
    type Item = (&'a T, &'a mut U);

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields owned entries.
pub struct RedBlackMapIntoIter<T, U> {
    current: tree::Tree<T, U>,
    stack: Vec<Node<T, U>>,
}

impl<T, U> Iterator for RedBlackMapIntoIter<T, U> {
    type Item = (T, U);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry.into_pair()
        })
    }
}

/// An iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map, or of a range of the map, in-order and yields
/// immutable references. Only the path to the next element is kept on the stack, so dropping the
/// iterator early never visits the rest of the tree.
pub struct RedBlackMapIter<'a, T, U> {
    stack: Vec<&'a Node<T, U>>,
    remaining: usize,
}

impl<'a, T, U> RedBlackMapIter<'a, T, U> {
    fn push_left_spine(&mut self, mut curr: &'a tree::Tree<T, U>) {
        while let Some(ref node) = curr {
            self.stack.push(node);
            curr = &node.left;
        }
    }
}

impl<'a, T, U> Iterator for RedBlackMapIter<'a, T, U> {
    type Item = (&'a T, &'a U);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.stack.pop().map(|node| {
            self.remaining -= 1;
            if self.remaining > 0 {
                self.push_left_spine(&node.right);
            }
            (&node.entry.key, &node.entry.value)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, U> ExactSizeIterator for RedBlackMapIter<'a, T, U> {}

type BorrowedIterEntryMut<'a, T, U> = (&'a mut Entry<T, U>, BorrowedTreeMut<'a, T, U>);
type BorrowedTreeMut<'a, T, U> = Option<&'a mut Node<T, U>>;

/// A mutable iterator for `RedBlackMap<T, U, C>`.
///
/// This iterator traverses the elements of the map in-order and yields mutable references to the
/// values.
pub struct RedBlackMapIterMut<'a, T, U> {
    current: BorrowedTreeMut<'a, T, U>,
    stack: Vec<BorrowedIterEntryMut<'a, T, U>>,
}

impl<'a, T, U> Iterator for RedBlackMapIterMut<'a, T, U> {
    type Item = (&'a T, &'a mut U);

    fn next(&mut self) -> Option<Self::Item> {
        let RedBlackMapIterMut {
            ref mut current,
            ref mut stack,
        } = self;
        while let Some(node) = current.take() {
            let Node {
                entry, left, right, ..
            } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((entry, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(entry, right)| {
            *current = right;
            let Entry { key, value } = entry;
            (&*key, value)
        })
    }
}

impl<T, U> Default for RedBlackMap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, C> Extend<(T, U)> for RedBlackMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, U)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T, U> FromIterator<(T, U)> for RedBlackMap<T, U>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
    {
        let mut map = RedBlackMap::new();
        map.extend(iter);
        map
    }
}

impl<T, U, C> fmt::Debug for RedBlackMap<T, U, C>
where
    T: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, U, C> PartialEq for RedBlackMap<T, U, C>
where
    T: PartialEq,
    U: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, C> Eq for RedBlackMap<T, U, C>
where
    T: Eq,
    U: Eq,
{
}

impl<'a, T, U, C> Index<&'a T> for RedBlackMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, C> IndexMut<&'a T> for RedBlackMap<T, U, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

impl<T, U, C> Serialize for RedBlackMap<T, U, C>
where
    T: Serialize,
    U: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

struct RedBlackMapVisitor<T, U> {
    marker: PhantomData<fn() -> RedBlackMap<T, U>>,
}

impl<'de, T, U> Visitor<'de> for RedBlackMapVisitor<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    type Value = RedBlackMap<T, U>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = RedBlackMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, T, U> Deserialize<'de> for RedBlackMap<T, U>
where
    T: Deserialize<'de> + Ord,
    U: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RedBlackMapVisitor {
            marker: PhantomData,
        })
    }
}
