//! Deprecated per-type list cloning surface.
//!
//! This crate is a compatibility shim: one function per supported primitive
//! value type, each forwarding to the generic implementation in
//! `deepvec-core`. It holds no state and adds no behavior; it exists so that
//! callers bound to the old per-type names keep compiling while they migrate.

pub mod list;

#[allow(deprecated)]
pub use list::*;
