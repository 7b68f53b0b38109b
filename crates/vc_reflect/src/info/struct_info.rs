use alloc::boxed::Box;

use vc_utils::hash::{FixedHashState, HashMap};

use crate::info::{NamedField, Type, TypePath};

/// Compile-time information of a struct with named fields.
///
/// Unit structs are described as structs without fields.
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 1);
/// assert_eq!(info.index_of("val"), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    crate::info::impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// Fields keep the given order, which should be the declaration order.
    pub fn new<T: TypePath>(fields: &[NamedField]) -> Self {
        let mut field_indices =
            HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        for (index, field) in fields.iter().enumerate() {
            field_indices.insert(field.name(), index);
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(self.index_of(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the declaration index of the field named `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
