//! A headless controller for staggered list transitions.
//!
//! When items join or leave a rendered list, each element runs through begin → active → to
//! class states. This crate sequences those class changes with an index-proportional delay
//! ("stagger"), so a batch of elements animates as a cascade, and completes each element either
//! after a fixed duration or when the platform reports that its transition ended.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - lifecycle hook calls as elements enter, leave, or appear
//! - a [`ClassList`] implementation that mutates element classes
//! - frame and timer ticks (`on_frame`, `tick`) and transition-end signals
//!
//! For an in-memory class store and a batch-level update driver, see the
//! `stagger-transition-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod classes;
mod controller;
mod options;
pub mod resolver;
mod state;
mod types;


pub use classes::{ClassOverrides, DEFAULT_NAME, TransitionClasses};
pub use controller::TransitionController;
pub use options::{
    ExplicitDuration, Stagger, StaggerEntry, StaggerFn, TimingSpec, TimingValue,
    TransitionGroupOptions,
};
pub use state::ControllerState;
pub use types::{ClassList, Direction, DoneCallback, ListenerId, PerDirection};
