use alloc::string::String;
use alloc::sync::Arc;

use crate::resolver::parse_number;
use crate::{ClassOverrides, PerDirection};

/// A stagger callback: maps a sequence index to a delay in milliseconds, or `None` for "start
/// immediately".
pub type StaggerFn = Arc<dyn Fn(usize) -> Option<u64> + Send + Sync>;

/// One direction's entry in a [`Stagger::PerDirection`] mapping.
#[derive(Clone)]
pub enum StaggerEntry {
    /// Multiplied by the sequence index.
    Fixed(f64),
    Computed(StaggerFn),
}

/// Per-element delay configuration.
#[derive(Clone)]
pub enum Stagger {
    /// The same multiplier for every direction: `delay = value * index`.
    Fixed(f64),
    /// A separate entry per direction. Directions without an entry start immediately.
    PerDirection(PerDirection<StaggerEntry>),
    /// A callback applied to the sequence index for every direction.
    Computed(StaggerFn),
}

impl Stagger {
    pub fn computed(f: impl Fn(usize) -> Option<u64> + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Converts loosely typed configuration (numbers, numeric text, per-direction maps).
    ///
    /// Text without a leading number yields `None`.
    pub fn from_spec(spec: TimingSpec) -> Option<Self> {
        match spec {
            TimingSpec::Number(value) => Some(Self::Fixed(value)),
            TimingSpec::Text(text) => parse_number(&text).map(Self::Fixed),
            TimingSpec::PerDirection(map) => Some(Self::PerDirection(
                map.map(|value| value.to_number().map(StaggerEntry::Fixed)),
            )),
        }
    }
}

impl From<u64> for Stagger {
    fn from(value: u64) -> Self {
        Self::Fixed(value as f64)
    }
}

impl core::fmt::Debug for StaggerEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl core::fmt::Debug for Stagger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::PerDirection(map) => f.debug_tuple("PerDirection").field(map).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Fixed transition length, used instead of waiting for the transition-end signal.
#[derive(Clone, Debug, PartialEq)]
pub enum ExplicitDuration {
    Fixed(f64),
    PerDirection(PerDirection<f64>),
}

impl ExplicitDuration {
    pub fn from_spec(spec: TimingSpec) -> Option<Self> {
        match spec {
            TimingSpec::Number(value) => Some(Self::Fixed(value)),
            TimingSpec::Text(text) => parse_number(&text).map(Self::Fixed),
            TimingSpec::PerDirection(map) => {
                Some(Self::PerDirection(map.map(|value| value.to_number())))
            }
        }
    }
}

impl From<u64> for ExplicitDuration {
    fn from(value: u64) -> Self {
        Self::Fixed(value as f64)
    }
}

/// A single number that may arrive as text (e.g. from markup attributes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TimingValue {
    Number(f64),
    Text(String),
}

impl TimingValue {
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(text) => parse_number(text),
        }
    }
}

/// Untyped timing configuration as supplied by markup or config files.
///
/// With `feature = "serde"`, this deserializes from a number, a string, or a map with optional
/// `enter` / `leave` / `appear` keys.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TimingSpec {
    Number(f64),
    Text(String),
    PerDirection(PerDirection<TimingValue>),
}

/// Configuration for [`crate::TransitionController`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone, Default)]
pub struct TransitionGroupOptions {
    /// Container element tag, passed through to the rendering layer.
    pub tag: Option<String>,
    /// Class applied to elements that move, passed through to the rendering layer.
    pub move_class: Option<String>,
    /// Base name for derived classes (`{name}-enter`, ...). Defaults to `"v"`.
    pub name: Option<String>,
    pub classes: ClassOverrides,
    pub stagger: Option<Stagger>,
    pub duration: Option<ExplicitDuration>,
    /// Whether elements present at mount run an appear transition.
    pub appear: bool,
}

impl TransitionGroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_move_class(mut self, move_class: impl Into<String>) -> Self {
        self.move_class = Some(move_class.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_classes(mut self, classes: ClassOverrides) -> Self {
        self.classes = classes;
        self
    }

    pub fn with_stagger(mut self, stagger: Option<Stagger>) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_stagger_ms(mut self, stagger_ms: u64) -> Self {
        self.stagger = Some(Stagger::from(stagger_ms));
        self
    }

    pub fn with_stagger_fn(
        mut self,
        stagger: impl Fn(usize) -> Option<u64> + Send + Sync + 'static,
    ) -> Self {
        self.stagger = Some(Stagger::computed(stagger));
        self
    }

    pub fn with_duration(mut self, duration: Option<ExplicitDuration>) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration = Some(ExplicitDuration::from(duration_ms));
        self
    }

    pub fn with_appear(mut self, appear: bool) -> Self {
        self.appear = appear;
        self
    }
}

impl core::fmt::Debug for TransitionGroupOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionGroupOptions")
            .field("tag", &self.tag)
            .field("move_class", &self.move_class)
            .field("name", &self.name)
            .field("classes", &self.classes)
            .field("stagger", &self.stagger)
            .field("duration", &self.duration)
            .field("appear", &self.appear)
            .finish()
    }
}
