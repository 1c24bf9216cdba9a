//! Adapter utilities for the `stagger-transition` crate.
//!
//! The `stagger-transition` crate is UI-agnostic and only sequences class changes. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - An in-memory per-element class store
//! - A host that turns whole list updates into ordered lifecycle hook calls, announcing every
//!   leaving element before any leave begins
//! - A queue of settled elements, so the renderer knows when a leaving element can be removed
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod batch;
mod class_store;
mod group;
mod key;

#[cfg(test)]
mod tests;

pub use batch::{Settled, UpdateBatch};
pub use class_store::ClassStore;
pub use group::TransitionGroup;
pub use key::ElementKey;
