use std::cmp::Ordering;

use crate::error::TreeError;

use super::avl_map::AvlMap;

/// Ordered set backed by [`AvlMap<T, ()>`].
pub struct AvlSet<T, C = fn(&T, &T) -> Ordering>
where
    C: Fn(&T, &T) -> Ordering,
{
    inner: AvlMap<T, (), C>,
}

impl<T: Ord> AvlSet<T, fn(&T, &T) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T: Ord> Default for AvlSet<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: AvlMap::with_comparator(comparator),
        }
    }

    /// Adds `value`; returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// Removes `value`; returns `false` if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.inner.remove(value).is_some()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains_key(value)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first().map(|i| self.inner.key(i))
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last().map(|i| self.inner.key(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.inner.keys()
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        self.inner.assert_valid()
    }
}

impl<T, C> Extend<T> for AvlSet<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
