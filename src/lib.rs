//! Staggered enter/leave transitions for dynamically reordered lists.
//!
//! This package bundles the headless controller (`stagger-transition`) with its adapter
//! utilities (`stagger-transition-adapter`). Depend on the individual crates directly if you
//! only need one of them.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use stagger_transition::*;
pub use stagger_transition_adapter::{ClassStore, ElementKey, Settled, TransitionGroup, UpdateBatch};

