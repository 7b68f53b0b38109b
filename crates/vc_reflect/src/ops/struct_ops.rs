use core::fmt;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct

/// Access to the named fields of a struct.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields and for unit structs.
///
/// ```
/// use vc_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: bool }
///
/// let mut foo = Foo { a: 1, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("c").is_none());
///
/// *foo.field_mut("a").unwrap().downcast_mut::<i32>().unwrap() = 42;
/// assert_eq!(foo.a, 42);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name` mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at declaration index `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at declaration index `index` mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at declaration index `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;
}

impl<'a> dyn Struct + 'a {
    /// Returns an iterator over `(name, value)` pairs in declaration order.
    #[inline]
    pub fn fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

impl fmt::Debug for dyn Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::impls::struct_debug(self, f)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`].
pub struct StructFieldIter<'a> {
    inner: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates an iterator starting at the first field.
    #[inline]
    pub fn new(inner: &'a dyn Struct) -> Self {
        Self { inner, index: 0 }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.inner.name_at(self.index)?;
        let value = self.inner.field_at(self.index)?;
        self.index += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.field_len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
