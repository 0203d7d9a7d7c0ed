use fibre_inject::{constructor, resolve, Constructor, Container, InjectError, Injectable};
use std::panic;
use std::sync::Arc;

trait Database: Send + Sync {}

struct UnregisteredService;

struct ReportService {
  _db: Arc<dyn Database>,
}
impl Injectable for ReportService {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(#[inject] |db: dyn Database| ReportService { _db: db })]
  }
}

fn main() {
  let container = Container::new();

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = resolve!(Container::new(), UnregisteredService);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the non-panicking `get_provider()` method ---
  println!("\nNow, attempting to resolve using the fallible `get_provider()` method...");

  match container.get_provider::<UnregisteredService>() {
    Ok(None) => println!("Correctly received `None` for the missing service."),
    _ => panic!("Should not have found the service!"),
  }

  // --- A bound service whose dependency is missing ---
  container.bind::<ReportService, ReportService>();
  let provider = container.get_provider::<ReportService>().unwrap().unwrap();

  match provider.get() {
    Err(err @ InjectError::BindingNotFound { .. }) => println!("Correctly failed: {}", err),
    _ => panic!("The missing database binding should have been reported!"),
  }
}
