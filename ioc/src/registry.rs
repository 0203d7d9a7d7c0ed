//! The binding registry: abstract type to concrete type, per lifetime.

use crate::core::{Instance, TypeKey, Value};
use crate::descriptor::{describe, ConstructorDescriptor, Implements};
use crate::error::{InjectError, Result};
use crate::resolver::select_constructor;
use dashmap::DashMap;
use std::fmt;

/// How long a constructed instance lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lifetime {
  /// A fresh instance for every request.
  Transient,
  /// One instance per concrete type for the lifetime of the container.
  Singleton,
}

impl fmt::Display for Lifetime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Lifetime::Transient => write!(f, "transient"),
      Lifetime::Singleton => write!(f, "singleton"),
    }
  }
}

/// The concrete side of a binding, with everything needed to build it and to
/// serve it as the abstract type it was bound to.
#[derive(Clone, Copy)]
pub(crate) struct Component {
  pub(crate) interface: TypeKey,
  pub(crate) concrete: TypeKey,
  describe: fn() -> Vec<ConstructorDescriptor>,
  upcast: fn(Instance) -> Option<Value>,
}

impl Component {
  pub(crate) fn new<I, C>() -> Self
  where
    I: ?Sized + Send + Sync + 'static,
    C: Implements<I>,
  {
    Self {
      interface: TypeKey::of::<I>(),
      concrete: TypeKey::of::<C>(),
      describe: describe::<C>,
      upcast: upcast::<I, C>,
    }
  }

  /// Applies the constructor-selection policy to the concrete type.
  pub(crate) fn resolve_constructor(&self) -> Result<ConstructorDescriptor> {
    select_constructor(self.concrete, (self.describe)())
  }

  /// Turns an instance of the concrete type into an `Arc` of the interface.
  pub(crate) fn upcast(&self, instance: Instance) -> Result<Value> {
    (self.upcast)(instance).ok_or(InjectError::TypeMismatch {
      expected: self.interface.name(),
      found: self.concrete.name(),
    })
  }
}

fn upcast<I, C>(instance: Instance) -> Option<Value>
where
  I: ?Sized + Send + Sync + 'static,
  C: Implements<I>,
{
  let concrete = instance.downcast::<C>().ok()?;
  Some(Box::new(<C as Implements<I>>::upcast(concrete)))
}

/// Transient and singleton bindings, kept in two independent maps.
///
/// Bindings are never removed. Re-binding an interface overwrites the previous
/// entry of the same lifetime.
#[derive(Default)]
pub(crate) struct BindingRegistry {
  transient: DashMap<TypeKey, Component>,
  singleton: DashMap<TypeKey, Component>,
}

impl BindingRegistry {
  pub(crate) fn bind_transient(&self, component: Component) {
    self.transient.insert(component.interface, component);
  }

  pub(crate) fn bind_singleton(&self, component: Component) {
    self.singleton.insert(component.interface, component);
  }

  pub(crate) fn lookup_transient(&self, interface: &TypeKey) -> Option<Component> {
    self.transient.get(interface).map(|entry| *entry.value())
  }

  pub(crate) fn lookup_singleton(&self, interface: &TypeKey) -> Option<Component> {
    self.singleton.get(interface).map(|entry| *entry.value())
  }

  /// Transient bindings take precedence over singleton ones.
  pub(crate) fn lookup(&self, interface: &TypeKey) -> Option<(Lifetime, Component)> {
    self
      .lookup_transient(interface)
      .map(|component| (Lifetime::Transient, component))
      .or_else(|| {
        self
          .lookup_singleton(interface)
          .map(|component| (Lifetime::Singleton, component))
      })
  }
}
