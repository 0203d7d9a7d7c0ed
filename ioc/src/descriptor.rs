//! Type descriptors: how a concrete type tells the container about its constructors.

use crate::core::{Instance, TypeKey, Value};
use crate::error::{BoxError, InjectError, Result};
use std::any::{type_name, Any};
use std::marker::PhantomData;
use std::sync::Arc;

/// A concrete type the container can construct.
///
/// `constructors` lists the type's constructors in declaration order. The
/// container picks one of them with the following policy:
///
/// 1. More than one injection point is an error.
/// 2. A single injection point is always chosen.
/// 3. Otherwise the first zero-argument constructor is chosen.
///
/// # Examples
///
/// ```
/// use fibre_inject::{constructor, implements, Constructor, Injectable};
/// use std::sync::Arc;
///
/// trait Engine: Send + Sync {}
/// struct V8Engine;
/// impl Engine for V8Engine {}
///
/// impl Injectable for V8Engine {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![Constructor::new(|| V8Engine)]
///   }
/// }
/// implements!(V8Engine => dyn Engine);
///
/// struct Car {
///   engine: Arc<dyn Engine>,
/// }
///
/// impl Injectable for Car {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![constructor!(#[inject] |engine: dyn Engine| Car { engine })]
///   }
/// }
/// ```
pub trait Injectable: Any + Send + Sync + Sized {
  fn constructors() -> Vec<Constructor<Self>>;
}

/// Declares that a concrete type can be served as the abstract type `I`.
///
/// Every injectable type implements `Implements<Self>`. Use the
/// [`implements!`](crate::implements) macro to serve it as a trait object.
pub trait Implements<I: ?Sized>: Injectable {
  fn upcast(self: Arc<Self>) -> Arc<I>;
}

impl<T: Injectable> Implements<T> for T {
  fn upcast(self: Arc<Self>) -> Arc<T> {
    self
  }
}

type BuildFn<C> = Arc<dyn Fn(&mut Arguments) -> std::result::Result<C, BoxError> + Send + Sync>;

/// One constructor of the concrete type `C`.
pub struct Constructor<C> {
  params: Vec<TypeKey>,
  injection_point: bool,
  build: BuildFn<C>,
}

impl<C: Injectable> Constructor<C> {
  /// A zero-argument constructor without the injection marker.
  pub fn new(build: impl Fn() -> C + Send + Sync + 'static) -> Self {
    Self {
      params: Vec::new(),
      injection_point: false,
      build: Arc::new(move |_: &mut Arguments| Ok::<_, BoxError>(build())),
    }
  }

  /// Starts a constructor carrying the injection marker.
  pub fn inject() -> ConstructorBuilder<C> {
    ConstructorBuilder::new(true)
  }

  /// Starts a constructor without the injection marker.
  ///
  /// Unmarked constructors that take parameters are never selected; they are
  /// still listed so the declaration order is faithful.
  pub fn plain() -> ConstructorBuilder<C> {
    ConstructorBuilder::new(false)
  }

  pub fn params(&self) -> &[TypeKey] {
    &self.params
  }

  pub fn is_injection_point(&self) -> bool {
    self.injection_point
  }

  pub(crate) fn erase(self, position: usize) -> ConstructorDescriptor {
    let build = self.build;
    ConstructorDescriptor {
      owner: TypeKey::of::<C>(),
      position,
      params: self.params.into(),
      injection_point: self.injection_point,
      build: Arc::new(move |args: &mut Arguments| {
        build(args).map(|value| Arc::new(value) as Instance)
      }),
    }
  }
}

/// Collects the parameter types of a constructor before its body is supplied.
pub struct ConstructorBuilder<C> {
  params: Vec<TypeKey>,
  injection_point: bool,
  _marker: PhantomData<fn() -> C>,
}

impl<C: Injectable> ConstructorBuilder<C> {
  fn new(injection_point: bool) -> Self {
    Self {
      params: Vec::new(),
      injection_point,
      _marker: PhantomData,
    }
  }

  /// Appends a parameter. The container resolves it through the binding for `I`.
  pub fn param<I: ?Sized + Any>(mut self) -> Self {
    self.params.push(TypeKey::of::<I>());
    self
  }

  /// Supplies the constructor body. Arguments arrive in the order the
  /// parameters were declared and are read with [`Arguments::take`].
  pub fn build<F>(self, build: F) -> Constructor<C>
  where
    F: Fn(&mut Arguments) -> std::result::Result<C, BoxError> + Send + Sync + 'static,
  {
    Constructor {
      params: self.params,
      injection_point: self.injection_point,
      build: Arc::new(build),
    }
  }
}

/// The resolved argument list handed to a constructor body.
pub struct Arguments {
  owner: TypeKey,
  values: std::vec::IntoIter<Value>,
  position: usize,
}

impl Arguments {
  pub(crate) fn new(owner: TypeKey, values: Vec<Value>) -> Self {
    Self {
      owner,
      values: values.into_iter(),
      position: 0,
    }
  }

  /// Takes the next argument, which must have been declared as `I`.
  pub fn take<I: ?Sized + Send + Sync + 'static>(&mut self) -> Result<Arc<I>> {
    let owner = self.owner;
    let position = self.position;
    self.position += 1;
    let mismatch = || InjectError::ArgumentMismatch {
      ty: owner.name(),
      position,
      expected: type_name::<I>(),
    };

    let value = self.values.next().ok_or_else(mismatch)?;
    value
      .downcast::<Arc<I>>()
      .map(|boxed| *boxed)
      .map_err(|_| mismatch())
  }

  /// Number of arguments not yet taken.
  pub fn remaining(&self) -> usize {
    self.values.len()
  }
}

/// A type-erased constructor, as seen by the resolver and the graph builder.
#[derive(Clone)]
pub(crate) struct ConstructorDescriptor {
  pub(crate) owner: TypeKey,
  /// Index in the owner's declaration order.
  pub(crate) position: usize,
  pub(crate) params: Arc<[TypeKey]>,
  pub(crate) injection_point: bool,
  build: Arc<dyn Fn(&mut Arguments) -> std::result::Result<Instance, BoxError> + Send + Sync>,
}

impl ConstructorDescriptor {
  /// Runs the constructor body with already-resolved arguments.
  pub(crate) fn instantiate(&self, values: Vec<Value>) -> Result<Instance> {
    let mut args = Arguments::new(self.owner, values);
    (self.build)(&mut args).map_err(|source| InjectError::ConstructionFailure {
      ty: self.owner.name(),
      source,
    })
  }
}

/// Lists the erased constructors of `C` in declaration order.
pub(crate) fn describe<C: Injectable>() -> Vec<ConstructorDescriptor> {
  C::constructors()
    .into_iter()
    .enumerate()
    .map(|(position, ctor)| ctor.erase(position))
    .collect()
}
