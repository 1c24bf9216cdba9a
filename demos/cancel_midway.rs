use transition_group_x::{TransitionGroup, TransitionGroupOptions, UpdateBatch};

fn main() {
    // Without an explicit duration, completion waits for the platform's transition-end signal.
    // Here the first row is toggled out and back in before that signal arrives.
    let mut group = TransitionGroup::<&'static str>::with_class_store(
        TransitionGroupOptions::new().with_name("row").with_stagger_ms(50),
    );

    group.update(&UpdateBatch::new().leave("a").leave("b"));
    group.on_frame(16);
    println!("a: {:?}", group.classes().classes(&"a"));
    println!("b: {:?}", group.classes().classes(&"b"));

    group.update(&UpdateBatch::new().reinstate("a"));
    println!("a after reinstate: {:?}", group.classes().classes(&"a"));
    println!("stale signal for a handled: {}", group.transition_ended(&"a"));

    group.tick(66);
    println!("b: {:?}", group.classes().classes(&"b"));
    group.transition_ended(&"b");
    println!("settled: {:?}", group.take_settled());

    // The reinstated row runs its enter again.
    group.on_frame(82);
    group.transition_ended(&"a");
    println!("settled: {:?}", group.take_settled());
    println!("state: {:?}", group.controller().state());
}
