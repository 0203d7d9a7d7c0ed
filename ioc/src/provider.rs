//! Deferred factories returned by the container.

use crate::container::Shared;
use crate::core::TypeKey;
use crate::descriptor::ConstructorDescriptor;
use crate::error::{InjectError, Result};
use crate::graph::GraphBuilder;
use crate::registry::{Component, Lifetime};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A zero-argument factory for the interface `I`.
///
/// A provider captures the binding and the constructor that were selected when
/// it was created. Re-binding `I` afterwards does not affect it; dependencies
/// of that constructor are still looked up in the live registry on every call.
pub struct Provider<I: ?Sized> {
  shared: Arc<Shared>,
  lifetime: Lifetime,
  component: Component,
  descriptor: ConstructorDescriptor,
  _marker: PhantomData<fn() -> Arc<I>>,
}

impl<I: ?Sized + Send + Sync + 'static> Provider<I> {
  pub(crate) fn new(
    shared: Arc<Shared>,
    lifetime: Lifetime,
    component: Component,
    descriptor: ConstructorDescriptor,
  ) -> Self {
    Self {
      shared,
      lifetime,
      component,
      descriptor,
      _marker: PhantomData,
    }
  }

  /// Builds a fresh instance (transient) or returns the shared one (singleton).
  pub fn get(&self) -> Result<Arc<I>> {
    let graph = GraphBuilder::new(&self.shared.registry, &self.shared.singletons);
    let instance = match self.lifetime {
      Lifetime::Transient => graph.build(&self.descriptor)?,
      Lifetime::Singleton => self.shared.singletons.get_or_create(&self.descriptor, &graph)?,
    };

    self
      .component
      .upcast(instance)?
      .downcast::<Arc<I>>()
      .map(|boxed| *boxed)
      .map_err(|_| InjectError::TypeMismatch {
        expected: type_name::<I>(),
        found: self.component.concrete.name(),
      })
  }

  pub fn lifetime(&self) -> Lifetime {
    self.lifetime
  }

  /// The concrete type this provider constructs.
  pub fn concrete(&self) -> TypeKey {
    self.component.concrete
  }
}

impl<I: ?Sized> Clone for Provider<I> {
  fn clone(&self) -> Self {
    Self {
      shared: Arc::clone(&self.shared),
      lifetime: self.lifetime,
      component: self.component,
      descriptor: self.descriptor.clone(),
      _marker: PhantomData,
    }
  }
}

impl<I: ?Sized> fmt::Debug for Provider<I> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Provider")
      .field("interface", &self.component.interface)
      .field("concrete", &self.component.concrete)
      .field("lifetime", &self.lifetime)
      .field("constructor", &self.descriptor.position)
      .finish()
  }
}
