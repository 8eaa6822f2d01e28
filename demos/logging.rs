//! # Logging Handler Example
//!
//! Attaches the prebuilt `tracing`-backed diagnostic handler to an event
//! and wires a `tracing_subscriber` so the firings show up on stderr.
//!
//! ## Run
//! ```bash
//! cargo run --example logging --features logging
//! ```

use evoke::{log_handler, Event, EventError, Subject};

struct Thermostat {
    readings: Vec<f32>,
}

fn record(thermostat: &mut Thermostat, celsius: &f32) -> Result<(), EventError> {
    thermostat.readings.push(*celsius);
    Ok(())
}

fn main() -> Result<(), EventError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let on_reading = Event::new("on_reading", record);

    let t = Subject::new(Thermostat {
        readings: Vec::new(),
    });
    t.event(&on_reading).connect(log_handler("on_reading"));

    t.event(&on_reading).fire(21.5)?;
    t.event(&on_reading).fire(22.0)?;

    println!("recorded {} readings", t.borrow().readings.len());
    Ok(())
}
