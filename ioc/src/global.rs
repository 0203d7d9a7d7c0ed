//! A process-wide container for bootstrap code that has nowhere to keep one.
//!
//! The supported model is an explicit [`Container`] value owned by the
//! application and dropped with it. The global container is never dropped, so
//! its singletons live until the process exits.

use crate::container::Container;
use once_cell::sync::Lazy;

static PROCESS_CONTAINER: Lazy<Container> = Lazy::new(|| {
  tracing::debug!("creating the process-wide container");
  Container::new()
});

/// Returns the process-wide container, creating it on first access.
///
/// Only available with the `global` feature. Bindings made here are visible to
/// every thread; rebinding follows the same last-write-wins rule as any other
/// container.
///
/// # Examples
///
/// ```
/// use fibre_inject::{global, resolve, Constructor, Injectable};
///
/// struct Clock;
/// impl Injectable for Clock {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![Constructor::new(|| Clock)]
///   }
/// }
///
/// global().bind_singleton::<Clock, Clock>();
/// let clock = resolve!(global(), Clock);
/// ```
pub fn global() -> &'static Container {
  &PROCESS_CONTAINER
}
