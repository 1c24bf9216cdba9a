use alloc::vec::Vec;

use stagger_transition::Direction;

/// The elements affected by one rendering update.
///
/// Deciding membership (diffing) is the caller's job; [`crate::TransitionGroup::update`] only
/// sequences the transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateBatch<K> {
    /// Elements removed by this update, in list order.
    pub leaving: Vec<K>,
    /// Elements inserted by this update, in list order.
    pub entering: Vec<K>,
    /// Elements that were leaving and are back in the list before their leave settled.
    pub reinstated: Vec<K>,
}

impl<K> UpdateBatch<K> {
    pub fn new() -> Self {
        Self {
            leaving: Vec::new(),
            entering: Vec::new(),
            reinstated: Vec::new(),
        }
    }

    pub fn leave(mut self, el: K) -> Self {
        self.leaving.push(el);
        self
    }

    pub fn enter(mut self, el: K) -> Self {
        self.entering.push(el);
        self
    }

    pub fn reinstate(mut self, el: K) -> Self {
        self.reinstated.push(el);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.leaving.is_empty() && self.entering.is_empty() && self.reinstated.is_empty()
    }
}

impl<K> Default for UpdateBatch<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// An element whose transition completed normally.
///
/// For [`Direction::Leave`] the renderer may now remove the element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settled<K> {
    pub el: K,
    pub direction: Direction,
}
