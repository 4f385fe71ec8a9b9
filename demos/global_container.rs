//! A process-wide container declared with `define_container!`, with a trace
//! callback printing every operation.
//!
//! Run with: `cargo run --example global_container`

use binding_registry::{define_container, with_name, ContainerError};
use std::sync::Arc;

define_container!(app);

struct Greeter {
    greeting: String,
}

impl Greeter {
    fn greet(&self, who: &str) -> String {
        format!("{}, {who}!", self.greeting)
    }
}

fn wire() -> Result<(), ContainerError> {
    app::singleton(|| "Hello".to_string())?;
    app::singleton_with(|| "world".to_string(), with_name("audience"))?;
    app::singleton(|greeting: String| Arc::new(Greeter { greeting }))?;
    Ok(())
}

fn main() -> Result<(), ContainerError> {
    app::set_trace_callback(|event| println!("  [trace] {event}"));

    println!("Wiring:");
    wire()?;

    println!("\nRunning:");
    let audience: String = app::resolve_with(with_name("audience"))?;
    let message = app::call(|greeter: Arc<Greeter>| greeter.greet(&audience))?;
    println!("\n{message}");

    app::clear_trace_callback();
    Ok(())
}
