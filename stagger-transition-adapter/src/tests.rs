use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use std::cell::RefCell;
use std::rc::Rc;

use stagger_transition::{
    ClassList, Direction, ExplicitDuration, PerDirection, TransitionGroupOptions,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Notified(u32),
    Added(u32, String),
    Removed(u32, String),
}

/// A class list that writes into a shared event log, so listener calls and class changes can be
/// ordered against each other.
#[derive(Clone, Default)]
struct SharedLog(Rc<RefCell<Vec<Event>>>);

impl ClassList<u32> for SharedLog {
    fn add_class(&mut self, el: &u32, class: &str) {
        self.0.borrow_mut().push(Event::Added(*el, class.to_string()));
    }

    fn remove_class(&mut self, el: &u32, class: &str) {
        self.0
            .borrow_mut()
            .push(Event::Removed(*el, class.to_string()));
    }
}

fn settled(el: u32, direction: Direction) -> Settled<u32> {
    Settled { el, direction }
}

#[test]
fn class_store_keeps_ordered_unique_tokens() {
    let mut store = ClassStore::<u32>::new();
    assert!(store.is_empty());
    store.add_class(&1, "a");
    store.add_class(&1, "b");
    store.add_class(&1, "a");
    store.add_class(&1, "");
    assert_eq!(store.classes(&1), ["a".to_string(), "b".to_string()]);
    assert!(store.has_class(&1, "b"));
    assert!(!store.has_class(&2, "b"));

    store.remove_class(&1, "missing");
    store.remove_class(&2, "a");
    store.remove_class(&1, "a");
    assert_eq!(store.classes(&1), ["b".to_string()]);
    store.remove_class(&1, "b");
    assert!(store.classes(&1).is_empty());
    assert_eq!(store.len(), 0);

    store.add_class(&3, "x");
    assert!(store.remove_element(&3));
    assert!(!store.remove_element(&3));
}

#[test]
fn before_all_leave_precedes_every_leave_class() {
    let log = SharedLog::default();
    let mut group = TransitionGroup::<u32, SharedLog>::new(
        TransitionGroupOptions::new().with_name("item"),
        log.clone(),
    );
    group.on_before_all_leave({
        let log = log.clone();
        move |el: &u32| log.0.borrow_mut().push(Event::Notified(*el))
    });

    group.update(&UpdateBatch::new().leave(4).leave(2).leave(7).enter(9));

    let events = log.0.borrow().clone();
    let notified: Vec<u32> = events
        .iter()
        .filter_map(|e| match e {
            Event::Notified(el) => Some(*el),
            _ => None,
        })
        .collect();
    assert_eq!(notified, vec![4, 2, 7]);

    let last_notify = events
        .iter()
        .rposition(|e| matches!(e, Event::Notified(_)))
        .unwrap();
    let first_class = events
        .iter()
        .position(|e| matches!(e, Event::Added(..) | Event::Removed(..)))
        .unwrap();
    assert!(last_notify < first_class);

    assert_eq!(
        events[3..],
        [
            Event::Added(4, "item-leave-active".to_string()),
            Event::Added(4, "item-leave".to_string()),
            Event::Added(2, "item-leave-active".to_string()),
            Event::Added(2, "item-leave".to_string()),
            Event::Added(7, "item-leave-active".to_string()),
            Event::Added(7, "item-leave".to_string()),
            Event::Added(9, "item-enter-active".to_string()),
            Event::Added(9, "item-enter".to_string()),
        ]
    );
}

#[test]
fn staggered_update_with_explicit_durations() {
    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new()
            .with_name("item")
            .with_stagger_ms(100)
            .with_duration(Some(ExplicitDuration::PerDirection(PerDirection::new(
                Some(400.0),
                Some(200.0),
            )))),
    );

    group.update(&UpdateBatch::new().leave(1).leave(2).enter(11));
    assert!(group.classes().has_class(&1, "item-leave"));
    assert!(group.needs_frame());

    group.on_frame(0);
    assert!(group.classes().has_class(&1, "item-leave-to"));
    assert!(group.classes().has_class(&2, "item-leave"));
    assert!(group.classes().has_class(&11, "item-enter-to"));
    // Element 1 finishes at 200, element 2 starts at 100.
    assert_eq!(group.next_deadline_ms(), Some(100));

    group.tick(100);
    assert!(group.classes().has_class(&2, "item-leave-to"));
    group.tick(200);
    assert_eq!(group.take_settled(), vec![settled(1, Direction::Leave)]);

    group.tick(300);
    assert_eq!(group.take_settled(), vec![settled(2, Direction::Leave)]);
    assert!(group.is_animating());

    group.tick(400);
    assert_eq!(group.take_settled(), vec![settled(11, Direction::Enter)]);
    assert!(!group.is_animating());
    assert!(group.classes().is_empty());
    assert!(group.take_settled().is_empty());
}

#[test]
fn signal_driven_completion_reports_settled_elements() {
    let mut group = TransitionGroup::<&'static str>::with_class_store(TransitionGroupOptions::new());
    group.update(&UpdateBatch::new().enter("a").enter("b"));
    assert!(!group.transition_ended(&"a"));

    group.on_frame(16);
    assert!(group.classes().has_class(&"b", "v-enter-to"));
    assert!(group.transition_ended(&"b"));
    assert!(group.transition_ended(&"a"));
    assert!(!group.transition_ended(&"a"));
    assert_eq!(
        group.take_settled(),
        vec![
            Settled {
                el: "b",
                direction: Direction::Enter
            },
            Settled {
                el: "a",
                direction: Direction::Enter
            },
        ]
    );
}

#[test]
fn reinstated_element_cancels_its_leave_and_enters_again() {
    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new().with_stagger_ms(50),
    );
    group.update(&UpdateBatch::new().leave(1).leave(2));
    group.on_frame(0);
    assert!(group.classes().has_class(&1, "v-leave-to"));

    group.update(&UpdateBatch::new().reinstate(1));
    assert_eq!(
        group.classes().classes(&1),
        ["v-enter-active".to_string(), "v-enter".to_string()]
    );
    assert!(!group.transition_ended(&1));

    group.tick(50);
    assert!(group.transition_ended(&2));
    assert_eq!(group.take_settled(), vec![settled(2, Direction::Leave)]);

    group.on_frame(66);
    assert!(group.transition_ended(&1));
    assert_eq!(group.take_settled(), vec![settled(1, Direction::Enter)]);
    assert!(group.classes().is_empty());
    assert_eq!(group.controller().state().clamped_decrements, 0);
}

#[test]
fn reinstated_and_entering_element_enters_once() {
    let mut group = TransitionGroup::<u32>::with_class_store(TransitionGroupOptions::new());
    group.update(&UpdateBatch::new().leave(1));
    group.on_frame(0);

    group.update(&UpdateBatch::new().reinstate(1).enter(1));
    assert_eq!(group.controller().in_flight(Direction::Enter), 1);
    assert_eq!(group.controller().in_flight(Direction::Leave), 0);
    assert_eq!(group.controller().count(Direction::Enter), 1);
}

#[test]
fn leaving_element_cancels_its_enter() {
    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new().with_duration(Some(ExplicitDuration::PerDirection(
            PerDirection::new(Some(400.0), Some(200.0)),
        ))),
    );
    group.update(&UpdateBatch::new().enter(1));
    group.on_frame(0);
    assert!(group.classes().has_class(&1, "v-enter-to"));

    group.update(&UpdateBatch::new().leave(1));
    assert_eq!(
        group.classes().classes(&1),
        ["v-leave-active".to_string(), "v-leave".to_string()]
    );
    assert!(!group.controller().is_transitioning(&1, Direction::Enter));

    group.on_frame(16);
    group.tick(216);
    assert_eq!(group.take_settled(), vec![settled(1, Direction::Leave)]);
    assert!(group.classes().classes(&1).is_empty());

    group.tick(400);
    assert!(!group.transition_ended(&1));
    assert!(group.take_settled().is_empty());
    assert!(!group.is_animating());
    assert_eq!(group.controller().state().clamped_decrements, 0);
}

#[test]
fn leaving_element_cancels_its_appear_before_the_frame() {
    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new().with_appear(true),
    );
    assert!(group.mount(&[1, 2]));

    group.update(&UpdateBatch::new().leave(1));
    assert_eq!(
        group.classes().classes(&1),
        ["v-leave-active".to_string(), "v-leave".to_string()]
    );

    group.on_frame(0);
    assert_eq!(group.controller().count(Direction::Appear), 0);
    assert_eq!(group.controller().count(Direction::Leave), 0);
    assert!(!group.classes().has_class(&1, "v-enter-to"));

    assert!(group.transition_ended(&1));
    assert!(group.transition_ended(&2));
    assert_eq!(
        group.take_settled(),
        vec![settled(1, Direction::Leave), settled(2, Direction::Appear)]
    );
    assert!(group.classes().is_empty());
    assert_eq!(group.controller().state().clamped_decrements, 0);
}

#[test]
fn mount_runs_appear_only_when_enabled() {
    let mut group = TransitionGroup::<u32>::with_class_store(TransitionGroupOptions::new());
    assert!(!group.mount(&[1, 2]));
    assert!(!group.is_animating());

    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new()
            .with_name("list")
            .with_appear(true)
            .with_duration_ms(300),
    );
    assert!(group.mount(&[1, 2]));
    assert!(group.classes().has_class(&1, "list-enter"));
    assert_eq!(group.controller().count(Direction::Appear), 2);

    group.on_frame(0);
    assert_eq!(group.controller().count(Direction::Appear), 0);
    group.tick(300);
    assert_eq!(
        group.take_settled(),
        vec![settled(1, Direction::Appear), settled(2, Direction::Appear)]
    );
}

#[test]
fn passthrough_options_are_exposed() {
    let group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new()
            .with_tag("ul")
            .with_move_class("item-move"),
    );
    assert_eq!(group.options().tag.as_deref(), Some("ul"));
    assert_eq!(group.options().move_class.as_deref(), Some("item-move"));
    assert!(UpdateBatch::<u32>::new().is_empty());
}
