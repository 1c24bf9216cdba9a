/// A lightweight, serializable snapshot of the controller's counters.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerState {
    /// Enter/appear operations started since the last frame boundary.
    pub enter_count: usize,
    /// Leave operations started since the last frame boundary.
    pub leave_count: usize,
    /// Operations that have not yet completed or been cancelled.
    pub in_flight: usize,
    /// Decrements that found a counter already at zero.
    pub clamped_decrements: u64,
}
