use fibre_inject::{constructor, implements, Constructor, Container, Injectable, Lifetime, TypeKey};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// --- Test Fixtures ---

// The trait must be Send + Sync for the container to accept it.
trait Greeter: Send + Sync {
  fn greet(&self) -> String;
}

struct EnglishGreeter;
impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}
impl Injectable for EnglishGreeter {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| EnglishGreeter)]
  }
}
implements!(EnglishGreeter => dyn Greeter);

struct GermanGreeter;
impl Greeter for GermanGreeter {
  fn greet(&self) -> String {
    "Hallo!".to_string()
  }
}
impl Injectable for GermanGreeter {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| GermanGreeter)]
  }
}
implements!(GermanGreeter => dyn Greeter);

trait Counter: Send + Sync {
  fn id(&self) -> usize;
}
trait Ledger: Send + Sync {
  fn id(&self) -> usize;
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

// A simple struct that gets a unique ID upon creation.
struct SharedCounter {
  id: usize,
}
impl Counter for SharedCounter {
  fn id(&self) -> usize {
    self.id
  }
}
impl Ledger for SharedCounter {
  fn id(&self) -> usize {
    self.id
  }
}
impl Injectable for SharedCounter {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| SharedCounter {
      id: NEXT_ID.fetch_add(1, Ordering::SeqCst),
    })]
  }
}
implements!(SharedCounter => dyn Counter, dyn Ledger);

fn same_object<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
  std::ptr::eq(Arc::as_ptr(a) as *const u8, Arc::as_ptr(b) as *const u8)
}

// --- Basic Tests ---

#[test]
fn test_transient_builds_a_new_instance_per_call() {
  // Arrange
  let container = Container::new();
  container.bind::<dyn Counter, SharedCounter>();
  let provider = container.get_provider::<dyn Counter>().unwrap().unwrap();

  // Act
  let c1 = provider.get().unwrap();
  let c2 = provider.get().unwrap();

  // Assert
  assert_eq!(provider.lifetime(), Lifetime::Transient);
  assert!(!Arc::ptr_eq(&c1, &c2));
  assert_ne!(c1.id(), c2.id());
}

#[test]
fn test_singleton_returns_the_same_instance() {
  // Arrange
  let container = Container::new();
  container.bind_singleton::<dyn Greeter, EnglishGreeter>();
  let provider = container.get_provider::<dyn Greeter>().unwrap().unwrap();

  // Act
  let g1 = provider.get().unwrap();
  let g2 = provider.get().unwrap();
  // A second provider for the same binding serves the same instance too.
  let g3 = container
    .get_provider::<dyn Greeter>()
    .unwrap()
    .unwrap()
    .get()
    .unwrap();

  // Assert
  assert_eq!(provider.lifetime(), Lifetime::Singleton);
  assert_eq!(g1.greet(), "Hello!");
  assert!(Arc::ptr_eq(&g1, &g2));
  assert!(Arc::ptr_eq(&g1, &g3));
}

#[test]
fn test_interfaces_bound_to_one_concrete_type_share_the_singleton() {
  // Arrange
  let container = Container::new();
  container.bind_singleton::<dyn Counter, SharedCounter>();
  container.bind_singleton::<dyn Ledger, SharedCounter>();

  // Act
  let counter = resolve_counter(&container);
  let ledger = container
    .get_provider::<dyn Ledger>()
    .unwrap()
    .unwrap()
    .get()
    .unwrap();

  // Assert
  assert_eq!(counter.id(), ledger.id());
  assert!(same_object(&counter, &ledger));
}

fn resolve_counter(container: &Container) -> Arc<dyn Counter> {
  container
    .get_provider::<dyn Counter>()
    .unwrap()
    .unwrap()
    .get()
    .unwrap()
}

#[test]
fn test_unbound_type_has_no_provider() {
  let container = Container::new();

  assert!(container.get_provider::<dyn Greeter>().unwrap().is_none());
  assert!(container.get_provider::<EnglishGreeter>().unwrap().is_none());
}

#[test]
fn test_lookups_report_the_bound_concrete_type() {
  // Arrange
  let container = Container::new();
  container.bind::<dyn Greeter, EnglishGreeter>();
  container.bind_singleton::<dyn Greeter, GermanGreeter>();

  // Assert: the two lifetimes are kept in independent maps.
  assert_eq!(
    container.lookup_transient::<dyn Greeter>(),
    Some(TypeKey::of::<EnglishGreeter>())
  );
  assert_eq!(
    container.lookup_singleton::<dyn Greeter>(),
    Some(TypeKey::of::<GermanGreeter>())
  );
  assert!(container.lookup_transient::<dyn Counter>().is_none());
  assert!(container.is_bound::<dyn Greeter>(Lifetime::Singleton));
  assert!(!container.is_bound::<dyn Counter>(Lifetime::Transient));

  // A transient binding takes precedence when asking for a provider.
  let provider = container.get_provider::<dyn Greeter>().unwrap().unwrap();
  assert_eq!(provider.lifetime(), Lifetime::Transient);
  assert_eq!(provider.get().unwrap().greet(), "Hello!");
}

#[test]
fn test_rebinding_overwrites_but_existing_providers_keep_their_binding() {
  // Arrange
  let container = Container::new();
  container.bind::<dyn Greeter, EnglishGreeter>();
  let old_provider = container.get_provider::<dyn Greeter>().unwrap().unwrap();

  // Act: overwrite the registration.
  container.bind::<dyn Greeter, GermanGreeter>();
  let new_provider = container.get_provider::<dyn Greeter>().unwrap().unwrap();

  // Assert
  assert_eq!(new_provider.get().unwrap().greet(), "Hallo!");
  assert_eq!(old_provider.get().unwrap().greet(), "Hello!");
  assert_eq!(old_provider.concrete(), TypeKey::of::<EnglishGreeter>());
}

#[test]
fn test_custom_containers_are_isolated() {
  // Arrange
  let first = Container::new();
  let second = Container::new();
  first.bind_singleton::<dyn Greeter, EnglishGreeter>();
  second.bind_singleton::<dyn Greeter, EnglishGreeter>();

  // Act
  let a = first.get_provider::<dyn Greeter>().unwrap().unwrap().get().unwrap();
  let b = second.get_provider::<dyn Greeter>().unwrap().unwrap().get().unwrap();

  // Assert: each container owns its own singleton cache.
  assert!(!Arc::ptr_eq(&a, &b));
  assert!(Container::new().get_provider::<dyn Greeter>().unwrap().is_none());
}
