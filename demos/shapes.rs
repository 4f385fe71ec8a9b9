//! Trait-object bindings: the binding key is the interface type, not the
//! concrete type behind it.
//!
//! Run with: `cargo run --example shapes`

use binding_registry::{BoxError, Container, ContainerApi, ContainerError};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

trait Shape: Send + Sync {
    fn name(&self) -> &'static str;
    fn area(&self) -> i64;
    fn set_area(&self, area: i64);
}

struct Circle {
    area: AtomicI64,
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> i64 {
        self.area.load(Ordering::SeqCst)
    }

    fn set_area(&self, area: i64) {
        self.area.store(area, Ordering::SeqCst);
    }
}

trait Canvas: Send + Sync {
    fn draw(&self, shape: &dyn Shape) -> String;
}

struct Ascii;

impl Canvas for Ascii {
    fn draw(&self, shape: &dyn Shape) -> String {
        format!("[{} with area {}]", shape.name(), shape.area())
    }
}

fn setup() -> Result<(Arc<dyn Shape>, Arc<dyn Canvas>), BoxError> {
    let shape: Arc<dyn Shape> = Arc::new(Circle {
        area: AtomicI64::new(100),
    });
    let canvas: Arc<dyn Canvas> = Arc::new(Ascii);
    Ok((shape, canvas))
}

fn main() -> Result<(), ContainerError> {
    let container = Container::new();

    // One constructor, two bindings.
    container.singleton(setup)?;

    container.call(|shape: Arc<dyn Shape>| shape.set_area(250))?;

    let picture = container.call(|shape: Arc<dyn Shape>, canvas: Arc<dyn Canvas>| {
        canvas.draw(shape.as_ref())
    })?;
    println!("{picture}");

    // A factory keyed by the same interface replaces the singleton.
    container.factory(|| {
        Arc::new(Circle {
            area: AtomicI64::new(1),
        }) as Arc<dyn Shape>
    })?;
    container.call(|shape: Arc<dyn Shape>| shape.set_area(999))?;
    let fresh: Arc<dyn Shape> = container.resolve()?;
    println!("factory shape area: {}", fresh.area());

    Ok(())
}
