use std::cell::RefCell;
use std::rc::Rc;

use transition_group_x::{
    ExplicitDuration, PerDirection, TransitionGroup, TransitionGroupOptions, UpdateBatch,
};

fn main() {
    // Simulate a list renderer that replaces all seven items at once, with a 100ms cascade and
    // fixed durations (no platform transition-end signals needed).
    let mut items: Vec<u32> = (1..=7).collect();
    let mut group = TransitionGroup::<u32>::with_class_store(
        TransitionGroupOptions::new()
            .with_tag("ul")
            .with_name("item")
            .with_stagger_ms(100)
            .with_duration(Some(ExplicitDuration::PerDirection(PerDirection::new(
                Some(400.0),
                Some(200.0),
            )))),
    );

    // Pin leaving rows where they are before any leave class lands.
    let pinned = Rc::new(RefCell::new(Vec::new()));
    group.on_before_all_leave({
        let pinned = Rc::clone(&pinned);
        move |el: &u32| pinned.borrow_mut().push(*el)
    });

    let replacements: Vec<u32> = (11..=17).collect();
    let mut batch = UpdateBatch::new();
    for &el in &items {
        batch = batch.leave(el);
    }
    for &el in &replacements {
        batch = batch.enter(el);
    }
    group.update(&batch);
    items.extend(&replacements);
    println!("pinned before leave: {:?}", pinned.borrow());

    let mut now_ms = 0u64;
    while group.is_animating() {
        now_ms += 16;
        group.on_frame(now_ms);
        for settled in group.take_settled() {
            println!("t={now_ms} settled {:?} {}", settled.direction, settled.el);
            if settled.direction == transition_group_x::Direction::Leave {
                items.retain(|el| *el != settled.el);
                group.classes_mut().remove_element(&settled.el);
            }
        }
        if now_ms % 160 == 0 {
            println!(
                "t={now_ms} item 17 classes={:?}",
                group.classes().classes(&17)
            );
        }
    }

    println!("done at t={now_ms}: items={items:?}");
}
