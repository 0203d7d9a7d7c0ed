use fibre_inject::{constructor, implements, Constructor, Container, Injectable};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// 1. Define the abstractions (the traits)
trait Engine: Send + Sync {
  fn start(&self) -> String;
}

trait Vehicle: Send + Sync {
  fn drive(&self) -> String;
}

// 2. Define concrete implementations and describe their constructors
struct V8Engine;
impl Engine for V8Engine {
  fn start(&self) -> String {
    "V8 roaring".to_string()
  }
}
impl Injectable for V8Engine {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| V8Engine)]
  }
}
implements!(V8Engine => dyn Engine);

struct Car {
  engine: Arc<dyn Engine>,
}
impl Vehicle for Car {
  fn drive(&self) -> String {
    format!("Driving with the {}", self.engine.start())
  }
}
impl Injectable for Car {
  fn constructors() -> Vec<Constructor<Self>> {
    // The car never creates its engine; the container hands one in.
    vec![constructor!(#[inject] |engine: dyn Engine| Car { engine })]
  }
}
implements!(Car => dyn Vehicle);

fn main() {
  // Run with RUST_LOG=fibre_inject=trace to watch the container work.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  // --- Registration ---
  let container = Container::new();
  container.bind::<dyn Engine, V8Engine>();
  container.bind_singleton::<dyn Vehicle, Car>();

  // --- Resolution and Usage ---
  let vehicles = container
    .get_provider::<dyn Vehicle>()
    .expect("Car has a usable constructor")
    .expect("dyn Vehicle is bound");

  let first = vehicles.get().expect("the car graph can be built");
  let second = vehicles.get().expect("the car graph can be built");
  println!("{}", first.drive());

  assert!(
    Arc::ptr_eq(&first, &second),
    "The car is a singleton and must be built once"
  );
  println!("Both resolutions returned the same car.");
}
