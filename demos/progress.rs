//! # Progress Reporting Example
//!
//! A worker exposes a `progress` event with an intentionally empty body:
//! the event exists purely as a notification point. Two independent
//! workers get their own subscriber lists, so each observer greets only
//! the worker it subscribed to.
//!
//! ## Run
//! ```bash
//! cargo run --example progress
//! ```

use evoke::{Event, EventError, Subject};

struct Worker {
    name: String,
    steps_done: u32,
}

// Notification-only event: the body just records the step.
fn progress(worker: &mut Worker, _step: &u32) -> Result<(), EventError> {
    worker.steps_done += 1;
    Ok(())
}

fn do_something(worker: &Subject<Worker>, progress_event: &Event<Worker, u32>) {
    for step in 1..=3 {
        // ... real work would happen here ...
        progress_event
            .bind(worker)
            .fire(step)
            .expect("no handler fails in this demo");
    }
}

fn main() {
    let on_progress = Event::new("progress", progress);

    let foo = Subject::new(Worker {
        name: "Foo".to_string(),
        steps_done: 0,
    });
    let bar = Subject::new(Worker {
        name: "Bar".to_string(),
        steps_done: 0,
    });

    for worker in [&foo, &bar] {
        worker.event(&on_progress).connect_fn(|subject, step| {
            let worker = subject.borrow();
            println!("{} reached step {step}", worker.name);
        });
    }

    do_something(&foo, &on_progress);
    do_something(&bar, &on_progress);

    println!(
        "done: {}={} steps, {}={} steps",
        foo.borrow().name,
        foo.borrow().steps_done,
        bar.borrow().name,
        bar.borrow().steps_done,
    );
}
