use stagger_transition::TransitionGroupOptions;
use stagger_transition_adapter::{TransitionGroup, UpdateBatch};

fn main() {
    // Example: a frame loop that only signals transition ends, no explicit durations.
    //
    // An adapter would:
    // - diff its list and hand the result to `update`
    // - call `on_frame(now_ms)` on every display refresh
    // - forward platform transition-end events to `transition_ended`
    // - remove leaving elements once `take_settled` reports them
    let mut group = TransitionGroup::<u64>::with_class_store(
        TransitionGroupOptions::new()
            .with_name("row")
            .with_appear(true)
            .with_stagger_ms(30),
    );
    group.mount(&[1, 2, 3]);

    let mut now_ms = 0u64;
    let mut pending_end: Vec<(u64, u64)> = Vec::new();
    while group.is_animating() {
        now_ms += 16;
        group.on_frame(now_ms);

        // Pretend every CSS transition takes 120ms from its target-class swap.
        for el in 1..=3u64 {
            let swapped = group.classes().has_class(&el, "row-enter-to");
            if swapped && !pending_end.iter().any(|(k, _)| *k == el) {
                pending_end.push((el, now_ms + 120));
            }
        }
        pending_end.retain(|&(el, at)| {
            if now_ms >= at {
                group.transition_ended(&el);
                false
            } else {
                true
            }
        });

        for settled in group.take_settled() {
            println!("t={now_ms} {:?} {}", settled.direction, settled.el);
        }
    }

    group.update(&UpdateBatch::new().leave(2));
    group.on_frame(now_ms + 16);
    println!("row 2 classes: {:?}", group.classes().classes(&2));
}
