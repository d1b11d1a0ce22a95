use crate::red_black_tree::map::{OrdComparator, RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter};
use crate::red_black_tree::Result;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::result;

/// An ordered set implemented using a red black tree.
///
/// The set is a `RedBlackMap<T, (), C>`, so it supports the same order statistics as the map.
///
/// # Examples
///
/// ```
/// use ordered_symbol_table::red_black_tree::{Error, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Ok(&0));
/// assert_eq!(set.ceil(&2), Ok(&3));
///
/// assert_eq!(set.remove(&0), Ok(0));
/// assert_eq!(set.remove(&1), Err(Error::AbsentKey));
/// ```
pub struct RedBlackSet<T, C = OrdComparator<T>> {
    map: RedBlackMap<T, (), C>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            map: RedBlackMap::new(),
        }
    }
}

impl<T, C> RedBlackSet<T, C> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Removes the minimum key from the set. Returns `Err(Error::EmptyTable)` if the set is
    /// empty.
    pub fn remove_min(&mut self) -> Result<T> {
        self.map.remove_min().map(|pair| pair.0)
    }

    /// Removes the maximum key from the set. Returns `Err(Error::EmptyTable)` if the set is
    /// empty.
    pub fn remove_max(&mut self) -> Result<T> {
        self.map.remove_max().map(|pair| pair.0)
    }

    /// Returns the minimum key of the set. Returns `Err(Error::EmptyTable)` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.map.min()
    }

    /// Returns the maximum key of the set. Returns `Err(Error::EmptyTable)` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.map.max()
    }

    /// Returns the key with a particular rank. Returns `Err(Error::InvalidRank)` if `index` is
    /// not less than the length of the set.
    pub fn select(&self, index: usize) -> Result<&T> {
        self.map.select(index)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            map_iter: self.map.iter(),
        }
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` whose keys are ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Ok(&3));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        RedBlackSet {
            map: RedBlackMap::with_comparator(cmp),
        }
    }

    /// Inserts a key into the set. Returns `true` if the key did not already exist in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.map.insert(key, ()).is_none()
    }

    /// Removes a key from the set. If the key exists in the set, it will return the associated
    /// key. Otherwise it will return `Err(Error::AbsentKey)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(Error::AbsentKey));
    /// ```
    pub fn remove(&mut self, key: &T) -> Result<T> {
        self.map.remove(key).map(|pair| pair.0)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.map.contains_key(key)
    }

    /// Returns the greatest key in the set that is less than or equal to a particular key.
    /// Returns `Err(Error::TooSmallFloorKey)` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), Err(Error::TooSmallFloorKey));
    /// assert_eq!(set.floor(&2), Ok(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Result<&T> {
        self.map.floor(key)
    }

    /// Returns the least key in the set that is greater than or equal to a particular key.
    /// Returns `Err(Error::TooLargeCeilingKey)` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::{Error, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Ok(&1));
    /// assert_eq!(set.ceil(&2), Err(Error::TooLargeCeilingKey));
    /// ```
    pub fn ceil(&self, key: &T) -> Result<&T> {
        self.map.ceil(key)
    }

    /// Returns the number of keys in the set that are strictly less than a particular key.
    /// Returns `Err(Error::AbsentKey)` if the key does not exist in the set.
    pub fn rank(&self, key: &T) -> Result<usize> {
        self.map.rank(key)
    }

    /// Returns the number of keys in the set that are in the inclusive range `[lo, hi]`.
    pub fn range_len(&self, lo: &T, hi: &T) -> usize {
        self.map.range_len(lo, hi)
    }

    /// Returns an iterator over the keys of the set that are in the inclusive range `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_symbol_table::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..10).collect();
    /// assert_eq!(set.range(&3, &5).collect::<Vec<&u32>>(), vec![&3, &4, &5]);
    /// ```
    pub fn range(&self, lo: &T, hi: &T) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            map_iter: self.map.range(lo, hi),
        }
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            map_iter: self.map.into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    map_iter: RedBlackMapIntoIter<T, ()>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }
}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct RedBlackSetIter<'a, T> {
    map_iter: RedBlackMapIter<'a, T, ()>,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.map_iter.next().map(|pair| pair.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.map_iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> {}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Extend<T> for RedBlackSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for RedBlackSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T, C> Eq for RedBlackSet<T, C> where T: Eq {}

impl<T, C> Serialize for RedBlackSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_seq(Some(self.len()))?;
        for key in self.iter() {
            state.serialize_element(key)?;
        }
        state.end()
    }
}

struct RedBlackSetVisitor<T> {
    marker: PhantomData<fn() -> RedBlackSet<T>>,
}

impl<'de, T> Visitor<'de> for RedBlackSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = RedBlackSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = RedBlackSet::new();
        while let Some(key) = access.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for RedBlackSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackSetVisitor {
            marker: PhantomData,
        })
    }
}
