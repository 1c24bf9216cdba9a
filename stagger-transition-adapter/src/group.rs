use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use stagger_transition::{
    ClassList, Direction, DoneCallback, ListenerId, TransitionController, TransitionGroupOptions,
};

use crate::{ClassStore, ElementKey, Settled, UpdateBatch};

/// A framework-neutral host for [`TransitionController`] that owns the class store and turns
/// whole rendering updates into lifecycle hook calls.
///
/// This type does not decide what changed. Adapters drive it by calling:
/// - `mount` once with the initial elements
/// - `update` with each [`UpdateBatch`]
/// - `on_frame(now_ms)` every display refresh, `tick(now_ms)` on timers, and
///   `transition_ended(el)` on platform signals
/// - `take_settled()` to learn which elements finished (leaving ones can now be removed)
pub struct TransitionGroup<K, C = ClassStore<K>> {
    controller: TransitionController<K>,
    classes: C,
    settled: Rc<RefCell<Vec<Settled<K>>>>,
}

impl<K: ElementKey + 'static> TransitionGroup<K> {
    /// Creates a group backed by an in-memory [`ClassStore`].
    pub fn with_class_store(options: TransitionGroupOptions) -> Self {
        Self::new(options, ClassStore::new())
    }
}

impl<K: ElementKey + 'static, C: ClassList<K>> TransitionGroup<K, C> {
    pub fn new(options: TransitionGroupOptions, classes: C) -> Self {
        Self::from_controller(TransitionController::new(options), classes)
    }

    pub fn from_controller(controller: TransitionController<K>, classes: C) -> Self {
        Self {
            controller,
            classes,
            settled: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn controller(&self) -> &TransitionController<K> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TransitionController<K> {
        &mut self.controller
    }

    pub fn classes(&self) -> &C {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut C {
        &mut self.classes
    }

    pub fn options(&self) -> &TransitionGroupOptions {
        self.controller.options()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn needs_frame(&self) -> bool {
        self.controller.needs_frame()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.controller.next_deadline_ms()
    }

    /// Registers a `before-all-leave` listener.
    ///
    /// Listeners see each leaving element before any leave class is applied in that update, so
    /// this is the place to capture positions (e.g. pin leaving elements where they are).
    pub fn on_before_all_leave(&mut self, f: impl FnMut(&K) + 'static) -> ListenerId {
        self.controller.add_before_all_leave_listener(f)
    }

    /// Runs appear transitions for the initial elements when `appear` is enabled.
    ///
    /// Returns `false` (and does nothing) when appear is disabled.
    pub fn mount(&mut self, initial: &[K]) -> bool {
        if !self.controller.options().appear {
            return false;
        }
        for el in initial {
            self.controller.before_appear(el, &mut self.classes);
            let done = self.done_callback(el.clone(), Direction::Appear);
            self.controller.appear(el.clone(), done);
        }
        true
    }

    /// Applies one rendering update.
    ///
    /// Every leaving element is announced to `before-all-leave` listeners first. Only then do
    /// reinstated elements get their leave cancelled, leaving elements begin their leave, and
    /// entering elements begin their enter, each group in batch order.
    ///
    /// A leaving element that is still entering or appearing has that transition cancelled
    /// before its leave begins. Reinstated elements enter again (ahead of `entering`) unless
    /// they are also listed in `entering`.
    pub fn update(&mut self, batch: &UpdateBatch<K>) {
        for el in &batch.leaving {
            self.controller.before_all_leave(el);
        }

        for el in &batch.reinstated {
            self.controller.leave_cancelled(el, &mut self.classes);
        }
        for el in &batch.leaving {
            if self.controller.is_transitioning(el, Direction::Enter) {
                self.controller.enter_cancelled(el, &mut self.classes);
            }
            if self.controller.is_transitioning(el, Direction::Appear) {
                self.controller.appear_cancelled(el, &mut self.classes);
            }
            self.controller.before_leave(el, &mut self.classes);
            let done = self.done_callback(el.clone(), Direction::Leave);
            self.controller.leave(el.clone(), done);
        }

        let reentering = batch
            .reinstated
            .iter()
            .filter(|el| !batch.entering.contains(el));
        for el in reentering.chain(&batch.entering) {
            self.controller.before_enter(el, &mut self.classes);
            let done = self.done_callback(el.clone(), Direction::Enter);
            self.controller.enter(el.clone(), done);
        }
    }

    pub fn on_frame(&mut self, now_ms: u64) -> usize {
        self.controller.on_frame(now_ms, &mut self.classes)
    }

    pub fn tick(&mut self, now_ms: u64) -> usize {
        self.controller.tick(now_ms, &mut self.classes)
    }

    pub fn transition_ended(&mut self, el: &K) -> bool {
        self.controller.transition_ended(el, &mut self.classes)
    }

    /// Drains elements whose transitions completed, in completion order, running the matching
    /// `after_*` hook for each.
    pub fn take_settled(&mut self) -> Vec<Settled<K>> {
        let settled = core::mem::take(&mut *self.settled.borrow_mut());
        for s in &settled {
            match s.direction {
                Direction::Leave => self.controller.after_leave(&s.el),
                Direction::Enter => self.controller.after_enter(&s.el),
                Direction::Appear => self.controller.after_appear(&s.el),
            }
        }
        settled
    }

    fn done_callback(&self, el: K, direction: Direction) -> DoneCallback {
        let settled = Rc::clone(&self.settled);
        Box::new(move || settled.borrow_mut().push(Settled { el, direction }))
    }
}

impl<K, C: fmt::Debug> fmt::Debug for TransitionGroup<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionGroup")
            .field("controller", &self.controller)
            .field("classes", &self.classes)
            .field("settled", &self.settled.borrow().len())
            .finish()
    }
}
