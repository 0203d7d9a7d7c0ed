//! Public macros for declaring injectable types and resolving them.

/// Declares a [`Constructor`](crate::Constructor) from a typed closure.
///
/// Parameters are written with their *abstract* type; inside the body each
/// one is bound as an `Arc` of that type. Prefix the closure with `#[inject]`
/// to mark the constructor as the injection point.
///
/// # Examples
///
/// ```
/// use fibre_inject::{constructor, Constructor, Injectable};
/// use std::sync::Arc;
///
/// struct Config;
/// impl Injectable for Config {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![constructor!(|| Config)]
///   }
/// }
///
/// struct Server {
///   config: Arc<Config>,
/// }
/// impl Injectable for Server {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![constructor!(#[inject] |config: Config| Server { config })]
///   }
/// }
/// ```
#[macro_export]
macro_rules! constructor {
  // Marked, no parameters: constructor!(#[inject] || MyType::new())
  (#[inject] || $body:expr) => {
    $crate::Constructor::inject().build(|_: &mut $crate::Arguments| {
      ::std::result::Result::Ok($body)
    })
  };

  // Marked: constructor!(#[inject] |a: dyn A, b: B| MyType { a, b })
  (#[inject] |$($arg:ident : $ty:ty),+| $body:expr) => {
    $crate::Constructor::inject()
      $(.param::<$ty>())+
      .build(|args: &mut $crate::Arguments| {
        $(let $arg = args.take::<$ty>()?;)+
        ::std::result::Result::Ok($body)
      })
  };

  // Unmarked, no parameters: the default constructor.
  (|| $body:expr) => {
    $crate::Constructor::new(|| $body)
  };

  // Unmarked with parameters. Listed for completeness; never selected.
  (|$($arg:ident : $ty:ty),+| $body:expr) => {
    $crate::Constructor::plain()
      $(.param::<$ty>())+
      .build(|args: &mut $crate::Arguments| {
        $(let $arg = args.take::<$ty>()?;)+
        ::std::result::Result::Ok($body)
      })
  };
}

/// Lets a concrete type be bound to one or more trait-object interfaces.
///
/// # Examples
///
/// ```
/// use fibre_inject::{implements, Constructor, Container, Injectable};
///
/// trait Engine: Send + Sync {}
/// trait Part: Send + Sync {}
///
/// struct V8Engine;
/// impl Engine for V8Engine {}
/// impl Part for V8Engine {}
/// impl Injectable for V8Engine {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![Constructor::new(|| V8Engine)]
///   }
/// }
/// implements!(V8Engine => dyn Engine, dyn Part);
///
/// let container = Container::new();
/// container.bind::<dyn Engine, V8Engine>();
/// container.bind_singleton::<dyn Part, V8Engine>();
/// ```
#[macro_export]
macro_rules! implements {
  ($concrete:ty => $($interface:ty),+ $(,)?) => {
    $(
      impl $crate::Implements<$interface> for $concrete {
        fn upcast(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<$interface> {
          self
        }
      }
    )+
  };
}

/// Resolves a service from a container, panicking on any failure.
///
/// This is a shorthand for `get_provider` followed by `get`. For a
/// non-panicking version, use those methods directly.
///
/// # Panics
///
/// Panics if the type has no binding or if its graph cannot be built.
///
/// # Examples
///
/// ```
/// use fibre_inject::{implements, resolve, Constructor, Container, Injectable};
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
/// impl Injectable for EnglishGreeter {
///   fn constructors() -> Vec<Constructor<Self>> {
///     vec![Constructor::new(|| EnglishGreeter)]
///   }
/// }
/// implements!(EnglishGreeter => dyn Greeter);
///
/// let container = Container::new();
/// container.bind_singleton::<dyn Greeter, EnglishGreeter>();
///
/// let greeter = resolve!(container, trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Arm for resolving a trait object: resolve!(container, trait MyTrait)
  ($container:expr, trait $trait_ident:ident) => {
    $crate::resolve!($container, dyn $trait_ident)
  };

  // Arm for resolving any bound type: resolve!(container, MyService)
  ($container:expr, $type:ty) => {
    match $container.get_provider::<$type>() {
      ::std::result::Result::Ok(::std::option::Option::Some(provider)) => provider
        .get()
        .unwrap_or_else(|err| {
          panic!(
            "Failed to resolve required service {}: {}",
            ::std::any::type_name::<$type>(),
            err
          )
        }),
      ::std::result::Result::Ok(::std::option::Option::None) => panic!(
        "Failed to resolve required service: {} is not bound",
        ::std::any::type_name::<$type>()
      ),
      ::std::result::Result::Err(err) => panic!(
        "Failed to resolve required service {}: {}",
        ::std::any::type_name::<$type>(),
        err
      ),
    }
  };
}
