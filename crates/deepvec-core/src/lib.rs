//! Deep cloning for lists of primitive value types.
//!
//! This crate is the successor surface for the per-type helpers in
//! `deepvec-compat`: one generic entry point parameterized over the element
//! type, plus a slice extension trait for callers that already hold a real
//! slice.

pub mod deep;
pub mod error;

pub use deep::{DeepClone, SliceDeepCloneExt, deep_clone_list};
pub use error::{CloneError, Result};
