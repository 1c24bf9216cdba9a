use alloc::format;
use alloc::string::String;

use crate::Direction;

/// Base name used when none is configured.
pub const DEFAULT_NAME: &str = "v";

/// Explicit class names that replace the ones derived from the base name.
///
/// Empty strings are treated the same as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassOverrides {
    pub enter_class: Option<String>,
    pub enter_active_class: Option<String>,
    pub enter_to_class: Option<String>,
    pub leave_class: Option<String>,
    pub leave_active_class: Option<String>,
    pub leave_to_class: Option<String>,
    pub appear_class: Option<String>,
    pub appear_active_class: Option<String>,
    pub appear_to_class: Option<String>,
}

/// The concrete class names applied during each direction's lifecycle.
///
/// This is a pure function of the base name and [`ClassOverrides`]; see
/// [`TransitionClasses::resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionClasses {
    pub enter_class: String,
    pub enter_active_class: String,
    pub enter_to_class: String,
    pub leave_class: String,
    pub leave_active_class: String,
    pub leave_to_class: String,
    pub appear_class: String,
    pub appear_active_class: String,
    pub appear_to_class: String,
}

impl TransitionClasses {
    /// Derives `{name}-enter`, `{name}-enter-active`, ... from a base name.
    ///
    /// Appear classes default to their enter counterparts.
    pub fn from_name(name: &str) -> Self {
        let enter_class = format!("{name}-enter");
        let enter_active_class = format!("{name}-enter-active");
        let enter_to_class = format!("{name}-enter-to");
        Self {
            appear_class: enter_class.clone(),
            appear_active_class: enter_active_class.clone(),
            appear_to_class: enter_to_class.clone(),
            enter_class,
            enter_active_class,
            enter_to_class,
            leave_class: format!("{name}-leave"),
            leave_active_class: format!("{name}-leave-active"),
            leave_to_class: format!("{name}-leave-to"),
        }
    }

    /// Derives the defaults for `name` (or `"v"`), then applies every non-empty override.
    pub fn resolve(name: Option<&str>, overrides: &ClassOverrides) -> Self {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME,
        };
        let mut classes = Self::from_name(name);

        let pairs = [
            (&mut classes.enter_class, &overrides.enter_class),
            (&mut classes.enter_active_class, &overrides.enter_active_class),
            (&mut classes.enter_to_class, &overrides.enter_to_class),
            (&mut classes.leave_class, &overrides.leave_class),
            (&mut classes.leave_active_class, &overrides.leave_active_class),
            (&mut classes.leave_to_class, &overrides.leave_to_class),
            (&mut classes.appear_class, &overrides.appear_class),
            (&mut classes.appear_active_class, &overrides.appear_active_class),
            (&mut classes.appear_to_class, &overrides.appear_to_class),
        ];
        for (slot, explicit) in pairs {
            if let Some(explicit) = explicit.as_deref().filter(|s| !s.is_empty()) {
                *slot = String::from(explicit);
            }
        }
        classes
    }

    /// The begin-state class (`*-enter`, `*-leave`).
    pub fn begin(&self, direction: Direction) -> &str {
        match direction {
            Direction::Enter => &self.enter_class,
            Direction::Leave => &self.leave_class,
            Direction::Appear => &self.appear_class,
        }
    }

    /// The class held for the whole transition (`*-enter-active`).
    pub fn active(&self, direction: Direction) -> &str {
        match direction {
            Direction::Enter => &self.enter_active_class,
            Direction::Leave => &self.leave_active_class,
            Direction::Appear => &self.appear_active_class,
        }
    }

    /// The target-state class whose application starts the visual transition (`*-enter-to`).
    pub fn to(&self, direction: Direction) -> &str {
        match direction {
            Direction::Enter => &self.enter_to_class,
            Direction::Leave => &self.leave_to_class,
            Direction::Appear => &self.appear_to_class,
        }
    }
}

impl Default for TransitionClasses {
    fn default() -> Self {
        Self::from_name(DEFAULT_NAME)
    }
}
