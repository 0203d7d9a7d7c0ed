//! The main `Container` struct and its associated methods.

use crate::core::TypeKey;
use crate::descriptor::{Constructor, Implements, Injectable};
use crate::error::{InjectError, Result};
use crate::provider::Provider;
use crate::registry::{BindingRegistry, Component, Lifetime};
use crate::singleton::SingletonCache;
use std::any::type_name;
use std::sync::Arc;
use tracing::debug;

/// State shared between a container and every provider it has handed out.
#[derive(Default)]
pub(crate) struct Shared {
  pub(crate) registry: BindingRegistry,
  pub(crate) singletons: SingletonCache,
}

/// The constructor-injection container.
///
/// Holds the transient and singleton bindings plus the singleton instances.
/// It is thread-safe: bindings can be registered and providers requested from
/// any number of threads. Singletons are released once the container and every
/// provider obtained from it have been dropped.
#[derive(Default)]
pub struct Container {
  shared: Arc<Shared>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Registration ---

  /// Binds `I` to `C` as a transient: every request builds a new `C`.
  pub fn bind<I, C>(&self)
  where
    I: ?Sized + Send + Sync + 'static,
    C: Implements<I>,
  {
    debug!(
      interface = type_name::<I>(),
      concrete = type_name::<C>(),
      "registered transient binding"
    );
    self.shared.registry.bind_transient(Component::new::<I, C>());
  }

  /// Binds `I` to `C` as a singleton. Nothing is constructed until the first
  /// request. The instance is shared with every other interface bound as a
  /// singleton to `C`.
  pub fn bind_singleton<I, C>(&self)
  where
    I: ?Sized + Send + Sync + 'static,
    C: Implements<I>,
  {
    debug!(
      interface = type_name::<I>(),
      concrete = type_name::<C>(),
      "registered singleton binding"
    );
    self.shared.registry.bind_singleton(Component::new::<I, C>());
  }

  // --- Lookup ---

  /// The concrete type `I` is bound to as a transient, if any.
  pub fn lookup_transient<I: ?Sized + 'static>(&self) -> Option<TypeKey> {
    self
      .shared
      .registry
      .lookup_transient(&TypeKey::of::<I>())
      .map(|component| component.concrete)
  }

  /// The concrete type `I` is bound to as a singleton, if any.
  pub fn lookup_singleton<I: ?Sized + 'static>(&self) -> Option<TypeKey> {
    self
      .shared
      .registry
      .lookup_singleton(&TypeKey::of::<I>())
      .map(|component| component.concrete)
  }

  // --- Resolution ---

  /// Returns a provider for `I`, or `None` if `I` has no binding.
  ///
  /// The constructor of the bound type is selected right away, so ambiguous or
  /// unusable constructors fail here rather than on the first `get`. A
  /// transient binding takes precedence over a singleton one.
  pub fn get_provider<I: ?Sized + Send + Sync + 'static>(&self) -> Result<Option<Provider<I>>> {
    let Some((lifetime, component)) = self.shared.registry.lookup(&TypeKey::of::<I>()) else {
      return Ok(None);
    };

    let descriptor = component.resolve_constructor()?;
    Ok(Some(Provider::new(
      Arc::clone(&self.shared),
      lifetime,
      component,
      descriptor,
    )))
  }

  /// Like [`get_provider`](Self::get_provider) for a concrete type, but an
  /// unbound `T` that declares an injection-point constructor is reported as
  /// `BindingNotFound` instead of `None`: it was clearly meant to be injected.
  pub fn get_injectable_provider<T: Injectable>(&self) -> Result<Option<Provider<T>>> {
    if let Some(provider) = self.get_provider::<T>()? {
      return Ok(Some(provider));
    }

    if T::constructors()
      .iter()
      .any(Constructor::is_injection_point)
    {
      return Err(InjectError::BindingNotFound {
        ty: type_name::<T>(),
      });
    }
    Ok(None)
  }

  /// Whether `I` has a binding of the given lifetime.
  pub fn is_bound<I: ?Sized + 'static>(&self, lifetime: Lifetime) -> bool {
    match lifetime {
      Lifetime::Transient => self.lookup_transient::<I>().is_some(),
      Lifetime::Singleton => self.lookup_singleton::<I>().is_some(),
    }
  }
}
