use fibre_inject::{constructor, Constructor, Container, Injectable};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

impl Injectable for RequestTracker {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(|| {
      println!("Creating RequestTracker...");
      RequestTracker {
        id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
      }
    })]
  }
}

// A dependent that receives the tracker through its constructor.
struct SessionTracker(Arc<RequestTracker>);
impl Injectable for SessionTracker {
  fn constructors() -> Vec<Constructor<Self>> {
    vec![constructor!(#[inject] |tracker: RequestTracker| SessionTracker(tracker))]
  }
}

fn main() {
  let singletons = Container::new();
  let transients = Container::new();

  // --- Singleton Registration ---
  // The tracker's constructor will only be called ONCE in this container.
  singletons.bind_singleton::<RequestTracker, RequestTracker>();
  singletons.bind::<SessionTracker, SessionTracker>();

  // --- Transient Registration ---
  // The tracker's constructor will be called EVERY time it is resolved here.
  transients.bind::<RequestTracker, RequestTracker>();

  println!("--- Resolving Singletons ---");
  let provider = singletons.get_provider::<RequestTracker>().unwrap().unwrap();
  let s1 = provider.get().unwrap();
  let s2 = provider.get().unwrap();
  let session = singletons
    .get_provider::<SessionTracker>()
    .unwrap()
    .unwrap()
    .get()
    .unwrap();
  println!("Singleton 1 ID: {}, Singleton 2 ID: {}", s1.id, s2.id);
  assert!(Arc::ptr_eq(&s1, &s2), "Singleton instances should be identical");
  assert!(
    Arc::ptr_eq(&s1, &session.0),
    "Dependents receive the cached singleton"
  );
  println!("Singleton instances are the same pointer, as expected.\n");

  println!("--- Resolving Transients ---");
  let provider = transients.get_provider::<RequestTracker>().unwrap().unwrap();
  let t1 = provider.get().unwrap();
  let t2 = provider.get().unwrap();
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert!(!Arc::ptr_eq(&t1, &t2), "Transient instances should be different");
  println!("Transient instances are different pointers, as expected.");
}
