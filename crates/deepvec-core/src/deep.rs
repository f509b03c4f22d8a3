//! Element-wise deep cloning for lists of primitive value types.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{CloneError, Result};

/// Element-wise deep copy.
///
/// For plain value types this is copy-by-value; for `String` it allocates a
/// fresh buffer with the same contents. A clone never shares mutable state
/// with its source.
pub trait DeepClone {
    /// Returns an independent copy of this value.
    #[must_use]
    fn deep_clone(&self) -> Self;
}

/// Implements `DeepClone` for types where a bitwise copy is a deep copy.
macro_rules! impl_deep_clone_copy {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl DeepClone for $ty {
                #[inline]
                fn deep_clone(&self) -> Self {
                    *self
                }
            }
        )+
    };
}

impl_deep_clone_copy!(
    u8,
    i8,
    u16,
    i16,
    u32,
    i32,
    u64,
    i64,
    f32,
    f64,
    bool,
    char,
    Decimal,
    DateTime<Utc>,
    DateTime<FixedOffset>,
    NaiveDateTime,
    Duration,
);

impl DeepClone for String {
    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Deep-clones a list with the legacy nullable-input calling convention.
///
/// Returns a newly allocated `Vec` with the same length and element order as
/// `source`, each element an independent copy.
///
/// # Errors
/// Fails with [`CloneError::MissingSource`] when `source` is `None`.
pub fn deep_clone_list<T: DeepClone>(source: Option<&[T]>) -> Result<Vec<T>> {
    let source = source.ok_or(CloneError::MissingSource)?;
    Ok(source.iter().map(DeepClone::deep_clone).collect())
}

/// Extension trait for deep-cloning slices directly.
///
/// This is the surface new callers should use: the input cannot be absent, so
/// no error path exists.
pub trait SliceDeepCloneExt<T> {
    /// Returns a newly allocated `Vec` of independent element copies.
    #[must_use]
    fn deep_cloned(&self) -> Vec<T>;
}

impl<T: DeepClone> SliceDeepCloneExt<T> for [T] {
    fn deep_cloned(&self) -> Vec<T> {
        self.iter().map(DeepClone::deep_clone).collect()
    }
}
