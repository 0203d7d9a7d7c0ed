//! # Fibre Inject
//!
//! A thread-safe constructor-injection container for Rust.
//!
//! Concrete types describe their constructors through the [`Injectable`] trait.
//! The container maps interfaces (usually trait objects) to concrete types,
//! picks a constructor for each, and builds the whole object graph on demand,
//! resolving every constructor parameter through its own binding.
//!
//! ## Core Concepts
//!
//! - **Container**: holds the bindings and the singleton instances. Create one
//!   with [`Container::new`] and pass it around explicitly.
//! - **Bindings**: [`Container::bind`] registers a transient (a new instance per
//!   request), [`Container::bind_singleton`] a singleton (one instance per
//!   concrete type, built lazily).
//! - **Constructor selection**: a single `#[inject]` constructor always wins;
//!   otherwise the first zero-argument constructor is used. Two injection
//!   points, or no usable constructor at all, are configuration errors.
//! - **Providers**: [`Container::get_provider`] returns a [`Provider`], a lazy
//!   factory whose [`Provider::get`] builds or fetches the instance.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_inject::{constructor, implements, Constructor, Container, Injectable};
//! use std::sync::Arc;
//!
//! trait Engine: Send + Sync {
//!   fn start(&self) -> &'static str;
//! }
//!
//! struct V8Engine;
//! impl Engine for V8Engine {
//!   fn start(&self) -> &'static str {
//!     "vroom"
//!   }
//! }
//! impl Injectable for V8Engine {
//!   fn constructors() -> Vec<Constructor<Self>> {
//!     vec![constructor!(|| V8Engine)]
//!   }
//! }
//! implements!(V8Engine => dyn Engine);
//!
//! struct Car {
//!   engine: Arc<dyn Engine>,
//! }
//! impl Injectable for Car {
//!   fn constructors() -> Vec<Constructor<Self>> {
//!     vec![constructor!(#[inject] |engine: dyn Engine| Car { engine })]
//!   }
//! }
//!
//! let container = Container::new();
//! container.bind::<dyn Engine, V8Engine>();
//! container.bind_singleton::<Car, Car>();
//!
//! let provider = container.get_provider::<Car>().unwrap().unwrap();
//! let car = provider.get().unwrap();
//! assert_eq!(car.engine.start(), "vroom");
//! assert!(Arc::ptr_eq(&car, &provider.get().unwrap()));
//! ```

mod container;
mod core;
mod descriptor;
mod error;
#[cfg(feature = "global")]
mod global;
mod graph;
mod macros;
mod provider;
mod registry;
mod resolver;
mod singleton;

pub use crate::core::TypeKey;
pub use container::Container;
pub use descriptor::{Arguments, Constructor, ConstructorBuilder, Implements, Injectable};
pub use error::{BoxError, InjectError, Result};
#[cfg(feature = "global")]
pub use global::global;
pub use provider::Provider;
pub use registry::Lifetime;
