/// Which lifecycle phase an operation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Enter,
    Leave,
    /// Initial render of an element that was present when the group mounted.
    Appear,
}

impl Direction {
    /// The direction whose in-flight counter this operation shares.
    ///
    /// Appear operations are sequenced together with enter operations.
    pub fn counter_direction(self) -> Self {
        match self {
            Self::Appear => Self::Enter,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Leave => "leave",
            Self::Appear => "appear",
        }
    }
}

/// A value configured separately for each direction.
///
/// Lookups for [`Direction::Appear`] fall back to the `enter` entry when `appear` is unset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PerDirection<T> {
    pub enter: Option<T>,
    pub leave: Option<T>,
    pub appear: Option<T>,
}

impl<T> PerDirection<T> {
    pub fn new(enter: Option<T>, leave: Option<T>) -> Self {
        Self {
            enter,
            leave,
            appear: None,
        }
    }

    pub fn with_appear(mut self, appear: Option<T>) -> Self {
        self.appear = appear;
        self
    }

    pub fn get(&self, direction: Direction) -> Option<&T> {
        match direction {
            Direction::Enter => self.enter.as_ref(),
            Direction::Leave => self.leave.as_ref(),
            Direction::Appear => self.appear.as_ref().or(self.enter.as_ref()),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> Option<U>) -> PerDirection<U> {
        PerDirection {
            enter: self.enter.and_then(&mut f),
            leave: self.leave.and_then(&mut f),
            appear: self.appear.and_then(&mut f),
        }
    }
}

impl<T> Default for PerDirection<T> {
    fn default() -> Self {
        Self {
            enter: None,
            leave: None,
            appear: None,
        }
    }
}

/// Handle returned when registering a `before-all-leave` listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// Invoked exactly once when an operation completes normally.
pub type DoneCallback = alloc::boxed::Box<dyn FnOnce()>;

/// The class-state primitives the controller drives.
///
/// Implemented by the rendering layer (DOM bindings, a TUI style table, or the in-memory store in
/// `stagger-transition-adapter`). Adding a class that is already present and removing one that is
/// absent must both be no-ops.
pub trait ClassList<K: ?Sized> {
    fn add_class(&mut self, el: &K, class: &str);
    fn remove_class(&mut self, el: &K, class: &str);
}

impl<K: ?Sized, C: ClassList<K> + ?Sized> ClassList<K> for &mut C {
    fn add_class(&mut self, el: &K, class: &str) {
        (**self).add_class(el, class);
    }

    fn remove_class(&mut self, el: &K, class: &str) {
        (**self).remove_class(el, class);
    }
}
