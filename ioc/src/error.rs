use thiserror::Error;

/// A boxed error returned by user-supplied constructor bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while resolving an object graph.
#[derive(Debug, Error)]
pub enum InjectError {
  #[error("No binding registered for {ty}")]
  BindingNotFound { ty: &'static str },

  #[error("{ty} declares {count} injection-point constructors, at most one is allowed")]
  AmbiguousConstructor { ty: &'static str, count: usize },

  #[error("{ty} has neither an injection-point constructor nor a zero-argument constructor")]
  NoSuitableConstructor { ty: &'static str },

  #[error("Failed to construct {ty}: {source}")]
  ConstructionFailure {
    ty: &'static str,
    #[source]
    source: BoxError,
  },

  #[error("Circular dependency detected: {path}")]
  CyclicDependency { path: String },

  #[error("Constructor of {ty} requested argument #{position} as {expected}, which its descriptor does not provide")]
  ArgumentMismatch {
    ty: &'static str,
    position: usize,
    expected: &'static str,
  },

  #[error("Instance of {found} cannot be served as {expected}")]
  TypeMismatch {
    expected: &'static str,
    found: &'static str,
  },
}

/// A specialized `Result` type for `fibre_inject` operations.
pub type Result<T, E = InjectError> = std::result::Result<T, E>;
