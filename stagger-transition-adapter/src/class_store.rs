use alloc::string::String;
use alloc::vec::Vec;

use stagger_transition::ClassList;

use crate::ElementKey;
use crate::key::KeyMap;

/// An in-memory class list per element.
///
/// Useful for renderers without a native class attribute (TUI/immediate-mode GUIs look up
/// styles by class each frame), and for tests. Tokens keep insertion order and are never
/// duplicated.
#[derive(Clone, Debug)]
pub struct ClassStore<K> {
    classes: KeyMap<K, Vec<String>>,
}

impl<K: ElementKey> ClassStore<K> {
    pub fn new() -> Self {
        Self {
            classes: KeyMap::new(),
        }
    }

    /// The element's current class tokens, in the order they were added.
    pub fn classes(&self, el: &K) -> &[String] {
        self.classes.get(el).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_class(&self, el: &K, class: &str) -> bool {
        self.classes(el).iter().any(|c| c == class)
    }

    /// Forgets an element, e.g. once its leave transition settled and it was removed.
    pub fn remove_element(&mut self, el: &K) -> bool {
        self.classes.remove(el).is_some()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<K: ElementKey> Default for ClassStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ElementKey> ClassList<K> for ClassStore<K> {
    fn add_class(&mut self, el: &K, class: &str) {
        if class.is_empty() {
            return;
        }
        let tokens = self.classes.entry(el.clone()).or_default();
        if !tokens.iter().any(|c| c == class) {
            tokens.push(String::from(class));
        }
    }

    fn remove_class(&mut self, el: &K, class: &str) {
        let Some(tokens) = self.classes.get_mut(el) else {
            return;
        };
        tokens.retain(|c| c != class);
        if tokens.is_empty() {
            self.classes.remove(el);
        }
    }
}
