use std::collections::BTreeMap;

use stagger_transition::{ClassList, TransitionController, TransitionGroupOptions};

/// Prints every class change instead of touching a real element.
#[derive(Default)]
struct Printer {
    classes: BTreeMap<u32, Vec<String>>,
}

impl ClassList<u32> for Printer {
    fn add_class(&mut self, el: &u32, class: &str) {
        println!("  +{class} on {el}");
        self.classes.entry(*el).or_default().push(class.to_string());
    }

    fn remove_class(&mut self, el: &u32, class: &str) {
        println!("  -{class} on {el}");
        if let Some(tokens) = self.classes.get_mut(el) {
            tokens.retain(|c| c != class);
        }
    }
}

fn main() {
    let mut c = TransitionController::new(
        TransitionGroupOptions::new()
            .with_name("fade")
            .with_stagger_ms(100)
            .with_duration_ms(250),
    );
    let mut dom = Printer::default();

    for el in 1..=3u32 {
        c.before_enter(&el, &mut dom);
        c.enter(el, move || println!("  done: {el}"));
    }

    println!("frame at t=0");
    c.on_frame(0, &mut dom);
    while let Some(deadline) = c.next_deadline_ms() {
        println!("tick at t={deadline}");
        c.tick(deadline, &mut dom);
    }
    println!("state: {:?}", c.state());
}
