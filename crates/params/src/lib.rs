//! Constant values for the ecpair library
//!
//! Raw byte constants only; no types and no logic. The lookup structures
//! built on top of them live in `ecpair-keys`.

#![no_std]

pub mod traditional;
