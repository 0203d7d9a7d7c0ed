use fibre_inject::{constructor, implements, Constructor, Container, Injectable};

trait DataSource: Send + Sync {
  fn read(&self) -> String;
}

struct FixtureSource;
impl DataSource for FixtureSource {
  fn read(&self) -> String {
    "test data".to_string()
  }
}
impl Injectable for FixtureSource {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| FixtureSource)]
  }
}
implements!(FixtureSource => dyn DataSource);

// A function that configures dependencies and runs some logic.
// By accepting a `&Container`, it can be tested with a controlled environment.
fn process_data(container: &Container) -> String {
  // Register a data source ONLY within this container.
  container.bind::<dyn DataSource, FixtureSource>();

  let data = container
    .get_provider::<dyn DataSource>()
    .expect("FixtureSource has a default constructor")
    .expect("Data source not bound in container")
    .get()
    .expect("FixtureSource cannot fail to build");
  format!("Processed: {}", data.read().to_uppercase())
}

fn main() {
  println!("--- Running with a dedicated container ---");
  let test_container = Container::new();
  let result = process_data(&test_container);

  println!("Result: {}", result);
  assert_eq!(result, "Processed: TEST DATA");

  // --- Verify Isolation ---
  // The binding registered in `test_container` must not exist anywhere else.
  let other = Container::new();
  assert!(
    other.get_provider::<dyn DataSource>().unwrap().is_none(),
    "Binding should not have leaked into another container!"
  );

  println!("\nVerified that containers are isolated from each other.");
}
