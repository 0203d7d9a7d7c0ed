//! Core data structures shared by the registry, the resolver and the graph builder.

use crate::error::{InjectError, Result};
use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A constructed, type-erased instance. Always holds the concrete value itself.
pub(crate) type Instance = Arc<dyn Any + Send + Sync>;

/// A type-erased constructor argument. Always holds an `Arc<I>` for the
/// parameter's abstract type `I`.
pub(crate) type Value = Box<dyn Any + Send + Sync>;

/// Identifies a type used as a binding key or as a concrete implementation.
///
/// Equality and hashing only consider the `TypeId`; the name is carried along
/// for error messages and logs.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  /// Returns the key of `T`. Works for trait objects such as `dyn Engine`.
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
    }
  }

  /// The compiler-provided name of the type.
  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

/// The chain of concrete types currently being built by one resolution.
///
/// Entering a type that is already on the path means the graph is circular.
/// Each `Provider::get` call owns its own path, so concurrent resolutions on
/// other threads never see each other's entries.
#[derive(Default)]
pub(crate) struct ResolutionPath {
  stack: RefCell<Vec<TypeKey>>,
}

impl ResolutionPath {
  pub(crate) fn enter(&self, key: TypeKey) -> Result<PathGuard<'_>> {
    let mut stack = self.stack.borrow_mut();
    if let Some(start) = stack.iter().position(|k| *k == key) {
      let path = stack[start..]
        .iter()
        .chain(std::iter::once(&key))
        .map(TypeKey::name)
        .collect::<Vec<_>>()
        .join(" -> ");
      return Err(InjectError::CyclicDependency { path });
    }
    stack.push(key);
    Ok(PathGuard { path: self })
  }

  #[cfg(test)]
  fn depth(&self) -> usize {
    self.stack.borrow().len()
  }
}

/// Pops its type off the resolution path when dropped.
pub(crate) struct PathGuard<'a> {
  path: &'a ResolutionPath,
}

impl Drop for PathGuard<'_> {
  fn drop(&mut self) {
    self.path.stack.borrow_mut().pop();
  }
}
