use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::resolver::{explicit_duration_ms, stagger_delay_ms};
use crate::{
    ClassList, ControllerState, Direction, DoneCallback, ListenerId, TransitionClasses,
    TransitionGroupOptions,
};

type BeforeAllLeaveListener<K> = Box<dyn FnMut(&K)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Begin classes are applied; the operation continues on the next frame.
    AwaitingFrame,
    Staggered {
        start_at_ms: u64,
    },
    Timed {
        end_at_ms: u64,
    },
    AwaitingEndSignal,
    Settled,
}

struct Operation<K> {
    el: K,
    direction: Direction,
    index: usize,
    phase: Phase,
    cancelled: bool,
    done: Option<DoneCallback>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Counters {
    enter: usize,
    leave: usize,
    clamped: u64,
}

impl Counters {
    fn slot(&mut self, direction: Direction) -> &mut usize {
        match direction.counter_direction() {
            Direction::Leave => &mut self.leave,
            _ => &mut self.enter,
        }
    }

    fn get(&self, direction: Direction) -> usize {
        match direction.counter_direction() {
            Direction::Leave => self.leave,
            _ => self.enter,
        }
    }

    fn increment(&mut self, direction: Direction) -> usize {
        let slot = self.slot(direction);
        let index = *slot;
        *slot = slot.saturating_add(1);
        index
    }

    fn decrement(&mut self, direction: Direction) {
        let slot = self.slot(direction);
        if let Some(next) = slot.checked_sub(1) {
            *slot = next;
            return;
        }
        self.clamped = self.clamped.saturating_add(1);
        twarn!(
            direction = direction.as_str(),
            "decrement without a matching increment; clamped at zero"
        );
    }
}

/// A headless controller for staggered enter/leave/appear transitions.
///
/// This type holds no UI objects and runs no event loop. The rendering layer:
/// - calls the lifecycle hooks (`before_leave`, `leave`, `enter_cancelled`, ...) as elements
///   join or leave the list
/// - calls `on_frame(now_ms, ..)` once per display refresh and `tick(now_ms, ..)` when timers
///   may have elapsed
/// - calls `transition_ended(el, ..)` when the platform reports that an element's transition
///   finished
///
/// Class changes are applied through a [`ClassList`] passed to each call. Every operation's
/// `done` callback runs exactly once on normal completion, and never after cancellation.
pub struct TransitionController<K> {
    options: TransitionGroupOptions,
    classes: TransitionClasses,
    counters: Counters,
    operations: Vec<Operation<K>>,
    listeners: Vec<(ListenerId, BeforeAllLeaveListener<K>)>,
    next_listener_id: u64,
}

impl<K: PartialEq> TransitionController<K> {
    pub fn new(options: TransitionGroupOptions) -> Self {
        let classes = TransitionClasses::resolve(options.name.as_deref(), &options.classes);
        tdebug!(
            enter_class = classes.enter_class.as_str(),
            appear = options.appear,
            "TransitionController::new"
        );
        Self {
            options,
            classes,
            counters: Counters::default(),
            operations: Vec::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn options(&self) -> &TransitionGroupOptions {
        &self.options
    }

    /// Replaces the options and re-derives the class names.
    ///
    /// In-flight operations keep running and pick up the new names at their next class change.
    pub fn set_options(&mut self, options: TransitionGroupOptions) {
        self.classes = TransitionClasses::resolve(options.name.as_deref(), &options.classes);
        self.options = options;
        tdebug!(
            enter_class = self.classes.enter_class.as_str(),
            appear = self.options.appear,
            "TransitionController::set_options"
        );
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TransitionGroupOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn classes(&self) -> &TransitionClasses {
        &self.classes
    }

    /// The current value of the counter shared by `direction` (appear shares enter's).
    pub fn count(&self, direction: Direction) -> usize {
        self.counters.get(direction)
    }

    pub fn state(&self) -> ControllerState {
        ControllerState {
            enter_count: self.counters.enter,
            leave_count: self.counters.leave,
            in_flight: self.operations.iter().filter(|op| !op.cancelled).count(),
            clamped_decrements: self.counters.clamped,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.operations.iter().any(|op| !op.cancelled)
    }

    pub fn in_flight(&self, direction: Direction) -> usize {
        self.operations
            .iter()
            .filter(|op| !op.cancelled && op.direction == direction)
            .count()
    }

    /// Whether `el` has a live (not cancelled, not finished) operation in `direction`.
    pub fn is_transitioning(&self, el: &K, direction: Direction) -> bool {
        self.operations.iter().any(|op| {
            !op.cancelled
                && op.direction == direction
                && op.phase != Phase::Settled
                && op.el == *el
        })
    }

    /// Whether some operation is waiting for the next `on_frame` call.
    pub fn needs_frame(&self) -> bool {
        self.operations
            .iter()
            .any(|op| op.phase == Phase::AwaitingFrame)
    }

    /// The earliest pending timer (stagger delay or explicit duration), if any.
    ///
    /// Adapters that don't tick every frame can arm a single host timer for this instant.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.operations
            .iter()
            .filter_map(|op| match op.phase {
                Phase::Staggered { start_at_ms } => Some(start_at_ms),
                Phase::Timed { end_at_ms } => Some(end_at_ms),
                _ => None,
            })
            .min()
    }

    pub fn before_leave(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.begin(el, Direction::Leave, classes);
    }

    pub fn leave(&mut self, el: K, done: impl FnOnce() + 'static) {
        self.schedule(el, Direction::Leave, Box::new(done));
    }

    pub fn after_leave(&mut self, _el: &K) {
        ttrace!("after_leave");
    }

    /// Cancels `el`'s leave without running its `done` callback.
    ///
    /// Strips the leave begin, to and active classes, so an element cancelled while still
    /// staggered doesn't keep its begin styling. Its pending timer or signal wait is dropped.
    pub fn leave_cancelled(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.cancel(el, Direction::Leave, classes);
    }

    pub fn before_enter(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.begin(el, Direction::Enter, classes);
    }

    pub fn enter(&mut self, el: K, done: impl FnOnce() + 'static) {
        self.schedule(el, Direction::Enter, Box::new(done));
    }

    pub fn after_enter(&mut self, _el: &K) {
        ttrace!("after_enter");
    }

    /// Cancels `el`'s enter without running its `done` callback.
    ///
    /// Strips the enter begin, to and active classes, so an element cancelled while still
    /// staggered doesn't keep its begin styling. Its pending timer or signal wait is dropped.
    pub fn enter_cancelled(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.cancel(el, Direction::Enter, classes);
    }

    pub fn before_appear(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.begin(el, Direction::Appear, classes);
    }

    pub fn appear(&mut self, el: K, done: impl FnOnce() + 'static) {
        self.schedule(el, Direction::Appear, Box::new(done));
    }

    pub fn after_appear(&mut self, _el: &K) {
        ttrace!("after_appear");
    }

    /// Cancels `el`'s appear without running its `done` callback.
    ///
    /// Strips the appear begin, to and active classes, so an element cancelled while still
    /// staggered doesn't keep its begin styling. Its pending timer or signal wait is dropped.
    pub fn appear_cancelled(&mut self, el: &K, classes: &mut impl ClassList<K>) {
        self.cancel(el, Direction::Appear, classes);
    }

    /// Decrements the counter used by `direction`, clamped at zero.
    pub fn decrease_counter(&mut self, direction: Direction) {
        self.counters.decrement(direction);
    }

    pub fn add_before_all_leave_listener(&mut self, f: impl FnMut(&K) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push((id, Box::new(f)));
        id
    }

    pub fn remove_before_all_leave_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Relays a `before-all-leave` notification for one element of the current leave batch.
    ///
    /// Must be called for every leaving element before any of them gets `before_leave`, so
    /// listeners can capture layout before classes change.
    pub fn before_all_leave(&mut self, el: &K) {
        for (_, listener) in &mut self.listeners {
            listener(el);
        }
    }

    /// Runs continuations scheduled since the previous frame, then advances timers.
    ///
    /// Returns the number of operations that completed.
    pub fn on_frame(&mut self, now_ms: u64, classes: &mut impl ClassList<K>) -> usize {
        let Self {
            options,
            counters,
            operations,
            ..
        } = self;

        for op in operations
            .iter_mut()
            .filter(|op| op.phase == Phase::AwaitingFrame)
        {
            counters.decrement(op.direction);
            if op.cancelled {
                continue;
            }
            let delay = stagger_delay_ms(options.stagger.as_ref(), op.index, op.direction);
            ttrace!(
                index = op.index,
                direction = op.direction.as_str(),
                delay_ms = delay,
                "frame"
            );
            op.phase = Phase::Staggered {
                start_at_ms: now_ms.saturating_add(delay.unwrap_or(0)),
            };
        }
        operations.retain(|op| !op.cancelled);

        self.tick(now_ms, classes)
    }

    /// Fires every stagger delay and explicit duration that has elapsed by `now_ms`.
    ///
    /// Timers are measured from their scheduled start, so infrequent ticks don't stretch them.
    /// Returns the number of operations that completed.
    pub fn tick(&mut self, now_ms: u64, classes: &mut impl ClassList<K>) -> usize {
        let Self {
            options,
            classes: names,
            operations,
            ..
        } = self;

        for op in operations.iter_mut() {
            if let Phase::Staggered { start_at_ms } = op.phase {
                if now_ms < start_at_ms {
                    continue;
                }
                classes.remove_class(&op.el, names.begin(op.direction));
                classes.add_class(&op.el, names.to(op.direction));
                op.phase = match explicit_duration_ms(options.duration.as_ref(), op.direction) {
                    Some(duration_ms) => Phase::Timed {
                        end_at_ms: start_at_ms.saturating_add(duration_ms),
                    },
                    None => Phase::AwaitingEndSignal,
                };
                ttrace!(
                    index = op.index,
                    direction = op.direction.as_str(),
                    "to-class applied"
                );
            }
            if let Phase::Timed { end_at_ms } = op.phase {
                if now_ms >= end_at_ms {
                    op.phase = Phase::Settled;
                }
            }
        }

        self.settle(classes)
    }

    /// The platform signal that `el`'s transition or animation has ended.
    ///
    /// Completes every operation on `el` that is waiting for this signal. Returns `false` when
    /// there is none (already completed, cancelled, timed by an explicit duration, or not yet
    /// started), in which case nothing changes.
    pub fn transition_ended(&mut self, el: &K, classes: &mut impl ClassList<K>) -> bool {
        let mut matched = false;
        for op in &mut self.operations {
            if op.phase == Phase::AwaitingEndSignal && op.el == *el {
                op.phase = Phase::Settled;
                matched = true;
            }
        }
        if !matched {
            ttrace!("transition_ended: stale signal ignored");
            return false;
        }
        self.settle(classes);
        true
    }

    fn begin(&mut self, el: &K, direction: Direction, classes: &mut impl ClassList<K>) {
        classes.add_class(el, self.classes.active(direction));
        classes.add_class(el, self.classes.begin(direction));
    }

    fn schedule(&mut self, el: K, direction: Direction, done: DoneCallback) {
        let index = self.counters.increment(direction);
        ttrace!(index, direction = direction.as_str(), "schedule");
        self.operations.push(Operation {
            el,
            direction,
            index,
            phase: Phase::AwaitingFrame,
            cancelled: false,
            done: Some(done),
        });
    }

    fn cancel(&mut self, el: &K, direction: Direction, classes: &mut impl ClassList<K>) {
        classes.remove_class(el, self.classes.begin(direction));
        classes.remove_class(el, self.classes.to(direction));
        classes.remove_class(el, self.classes.active(direction));

        // Operations still waiting for their frame stay queued so the frame can release their
        // counter slot; everything else is dropped along with its timer or watcher.
        self.operations.retain_mut(|op| {
            if op.direction != direction || op.el != *el || op.phase == Phase::Settled {
                return true;
            }
            ttrace!(
                index = op.index,
                direction = direction.as_str(),
                "cancelled"
            );
            op.done = None;
            if op.phase == Phase::AwaitingFrame {
                op.cancelled = true;
                return true;
            }
            false
        });
    }

    fn settle(&mut self, classes: &mut impl ClassList<K>) -> usize {
        let names = &self.classes;
        let mut finished = Vec::new();
        self.operations.retain_mut(|op| {
            if op.phase != Phase::Settled {
                return true;
            }
            classes.remove_class(&op.el, names.to(op.direction));
            classes.remove_class(&op.el, names.active(op.direction));
            if let Some(done) = op.done.take() {
                finished.push(done);
            }
            false
        });

        let settled = finished.len();
        for done in finished {
            done();
        }
        settled
    }
}

impl<K> core::fmt::Debug for TransitionController<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionController")
            .field("options", &self.options)
            .field("classes", &self.classes)
            .field("counters", &self.counters)
            .field("operations", &self.operations.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
