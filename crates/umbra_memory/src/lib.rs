//! # umbra_memory - Transient Staging Memory
//!
//! Scoped scratch memory for hot render paths:
//! - `StagingStack`: fixed-capacity byte stack, no per-claim heap work
//! - `StagingScope`: RAII claim of a region, released on every exit path
//!
//! The decal writer assembles a handful of packed vertices per call and
//! submits them in one push; the staging stack gives it that scratch
//! region without touching the allocator once per frame per entity.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod staging;

pub use staging::{StagingScope, StagingStack};
