use crate::Reflect;

/// Access to a value that may be absent, implemented by `Option<T>`.
///
/// ```
/// use vc_reflect::ops::Optional;
///
/// let x: Option<u8> = Some(3);
/// assert!(x.value().unwrap().is::<u8>());
///
/// let y: Option<u8> = None;
/// assert!(!Optional::is_some(&y));
/// ```
pub trait Optional: Reflect {
    /// Returns the inner value if present.
    fn value(&self) -> Option<&dyn Reflect>;

    /// Returns the inner value mutably if present.
    fn value_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns `true` if a value is present.
    #[inline]
    fn is_some(&self) -> bool {
        self.value().is_some()
    }
}
