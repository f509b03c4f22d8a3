//! Per-type list cloning helpers kept for backward compatibility.
//!
//! Every function here is a one-line delegation to
//! [`deepvec_core::deep_clone_list`]. The per-type names exist only because
//! older callers bound to them; new code should use the generic entry point
//! or [`deepvec_core::SliceDeepCloneExt`].

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use deepvec_core::{Result, deep_clone_list};
use rust_decimal::Decimal;

/// Emits one deprecated forwarding function per supported element type.
macro_rules! forward_deep_clone {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Deep-clones a list of `", stringify!($ty), "` values.")]
            ///
            /// # Errors
            /// Fails with [`MissingSource`](deepvec_core::CloneError::MissingSource)
            /// when `source` is `None`.
            #[deprecated(
                since = "0.1.0",
                note = "use deepvec_core::deep_clone_list or SliceDeepCloneExt::deep_cloned instead"
            )]
            pub fn $name(source: Option<&[$ty]>) -> Result<Vec<$ty>> {
                deep_clone_list(source)
            }
        )+
    };
}

forward_deep_clone! {
    deep_clone_u8 => u8,
    deep_clone_i8 => i8,
    deep_clone_u16 => u16,
    deep_clone_i16 => i16,
    deep_clone_u32 => u32,
    deep_clone_i32 => i32,
    deep_clone_u64 => u64,
    deep_clone_i64 => i64,
    deep_clone_f32 => f32,
    deep_clone_f64 => f64,
    deep_clone_bool => bool,
    deep_clone_char => char,
    deep_clone_string => String,
    deep_clone_decimal => Decimal,
    deep_clone_date_time => DateTime<Utc>,
    deep_clone_date_time_offset => DateTime<FixedOffset>,
    deep_clone_naive_date_time => NaiveDateTime,
    deep_clone_duration => Duration,
}
