//! Recursive object-graph construction.

use crate::core::{Instance, ResolutionPath, TypeKey, Value};
use crate::descriptor::ConstructorDescriptor;
use crate::error::{InjectError, Result};
use crate::registry::{BindingRegistry, Lifetime};
use crate::singleton::SingletonCache;

/// Builds one object graph. A new builder is created for every top-level
/// resolution so that it carries its own resolution path.
pub(crate) struct GraphBuilder<'a> {
  registry: &'a BindingRegistry,
  singletons: &'a SingletonCache,
  path: ResolutionPath,
}

impl<'a> GraphBuilder<'a> {
  pub(crate) fn new(registry: &'a BindingRegistry, singletons: &'a SingletonCache) -> Self {
    Self {
      registry,
      singletons,
      path: ResolutionPath::default(),
    }
  }

  /// Resolves every parameter of `descriptor` depth first, left to right, then
  /// invokes the constructor. Never returns a partially built graph.
  pub(crate) fn build(&self, descriptor: &ConstructorDescriptor) -> Result<Instance> {
    let _guard = self.path.enter(descriptor.owner)?;

    let mut values = Vec::with_capacity(descriptor.params.len());
    for param in descriptor.params.iter() {
      values.push(self.resolve_param(*param)?);
    }
    descriptor.instantiate(values)
  }

  fn resolve_param(&self, param: TypeKey) -> Result<Value> {
    if let Some(component) = self.registry.lookup_transient(&param) {
      let descriptor = component.resolve_constructor()?;
      let instance = self.build(&descriptor)?;
      return component.upcast(instance);
    }

    if let Some(component) = self.registry.lookup_singleton(&param) {
      let instance = match self.singletons.get(&component.concrete) {
        Some(instance) => instance,
        None => {
          let descriptor = component.resolve_constructor()?;
          self.singletons.get_or_create(&descriptor, self)?
        }
      };
      return component.upcast(instance);
    }

    Err(InjectError::BindingNotFound { ty: param.name() })
  }

  /// Walks the graph below `descriptor` without constructing anything and
  /// fails if it is circular.
  ///
  /// Run before a singleton's once-cell is entered: two threads building the
  /// two ends of a singleton cycle would otherwise wait on each other's cell.
  /// Missing bindings and unusable constructors are skipped here; `build`
  /// reports them when it reaches them.
  pub(crate) fn verify_acyclic(&self, descriptor: &ConstructorDescriptor) -> Result<()> {
    let _guard = self.path.enter(descriptor.owner)?;

    for param in descriptor.params.iter() {
      let component = match self.registry.lookup(param) {
        Some((Lifetime::Singleton, component))
          if self.singletons.get(&component.concrete).is_some() =>
        {
          continue
        }
        Some((_, component)) => component,
        None => continue,
      };
      if let Ok(child) = component.resolve_constructor() {
        self.verify_acyclic(&child)?;
      }
    }
    Ok(())
  }
}
