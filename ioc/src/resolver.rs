//! Constructor selection.

use crate::core::TypeKey;
use crate::descriptor::ConstructorDescriptor;
use crate::error::{InjectError, Result};
use tracing::trace;

/// Picks the constructor the container will use for `concrete`.
///
/// The rules are applied in order:
///
/// 1. Two or more injection points fail with `AmbiguousConstructor`.
/// 2. A single injection point wins, even over a zero-argument constructor.
/// 3. Otherwise the first declared zero-argument constructor is used.
/// 4. Otherwise the type fails with `NoSuitableConstructor`.
pub(crate) fn select_constructor(
  concrete: TypeKey,
  constructors: Vec<ConstructorDescriptor>,
) -> Result<ConstructorDescriptor> {
  let (mut marked, unmarked): (Vec<_>, Vec<_>) = constructors
    .into_iter()
    .partition(|ctor| ctor.injection_point);

  let selected = match marked.len() {
    0 => unmarked.into_iter().find(|ctor| ctor.params.is_empty()),
    1 => marked.pop(),
    count => {
      return Err(InjectError::AmbiguousConstructor {
        ty: concrete.name(),
        count,
      })
    }
  };

  let selected = selected.ok_or(InjectError::NoSuitableConstructor {
    ty: concrete.name(),
  })?;
  trace!(
    concrete = %concrete,
    position = selected.position,
    arity = selected.params.len(),
    injection_point = selected.injection_point,
    "selected constructor"
  );
  Ok(selected)
}
