//! Internal utilities for the ecpair library
//!
//! Nothing in this crate is part of the stable public surface; it exists so
//! that every crate in the workspace compares secret-adjacent bytes the same way.

pub mod constant_time;
