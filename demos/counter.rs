//! # Counter Example
//!
//! The smallest complete walkthrough: a counter whose `on_tick` method is
//! an event. Firing it appends to the counter's own log, then a subscribed
//! handler mirrors the value.
//!
//! ## Run
//! ```bash
//! cargo run --example counter
//! ```

use evoke::{Event, EventError, Subject};

struct Counter {
    log: Vec<i32>,
}

fn tick(counter: &mut Counter, n: &i32) -> Result<(), EventError> {
    counter.log.push(*n);
    Ok(())
}

fn main() -> Result<(), EventError> {
    let on_tick = Event::new("on_tick", tick);

    let c = Subject::new(Counter { log: Vec::new() });
    let mirror = c
        .event(&on_tick)
        .connect_fn(|subject, n| subject.borrow_mut().log.push(-*n));

    c.event(&on_tick).fire(5)?;
    c.event(&on_tick).fire(3)?;
    println!("with mirror:    {:?}", c.borrow().log);

    c.event(&on_tick).disconnect(&mirror)?;
    c.event(&on_tick).fire(1)?;
    println!("without mirror: {:?}", c.borrow().log);

    Ok(())
}
