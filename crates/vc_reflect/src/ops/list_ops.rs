use alloc::boxed::Box;
use core::fmt;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// Access to an ordered collection, such as `Vec<T>`.
///
/// ```
/// use vc_reflect::{Reflect, ops::List};
///
/// let mut list: Vec<u32> = vec![1];
/// list.push_reflect(Box::new(2_u32)).unwrap();
///
/// // Wrong element type, the value is handed back.
/// let rejected = list.push_reflect(Box::new("three".to_string())).unwrap_err();
/// assert!(rejected.is::<String>());
///
/// assert_eq!(List::len(&list), 2);
/// assert_eq!(list, [1, 2]);
/// ```
pub trait List: Reflect {
    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the element at `index` mutably.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Appends an element.
    ///
    /// Returns the value back if it is not of the element type.
    fn push_reflect(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the list has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> dyn List + 'a {
    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

impl fmt::Debug for dyn List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::list_debug(self, f)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates an iterator starting at the first element.
    #[inline]
    pub fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
