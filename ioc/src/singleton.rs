//! Lazily constructed singletons, keyed by concrete type.

use crate::core::{Instance, TypeKey};
use crate::descriptor::ConstructorDescriptor;
use crate::error::Result;
use crate::graph::GraphBuilder;
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// One once-only cell per concrete type.
///
/// Two interfaces bound as singletons to the same concrete type share a cell,
/// and therefore an instance. Cells are never removed; an initialized cell is
/// never written again.
#[derive(Default)]
pub(crate) struct SingletonCache {
  cells: DashMap<TypeKey, Arc<OnceCell<Instance>>>,
}

impl SingletonCache {
  /// Returns the instance if it has already been constructed.
  pub(crate) fn get(&self, concrete: &TypeKey) -> Option<Instance> {
    self
      .cells
      .get(concrete)
      .and_then(|cell| cell.get().cloned())
  }

  /// Returns the shared instance for the descriptor's owner, constructing it
  /// on first use.
  ///
  /// Concurrent first callers block on the cell while exactly one of them runs
  /// the graph builder. A failed construction leaves the cell empty so that a
  /// later call can retry.
  pub(crate) fn get_or_create(
    &self,
    descriptor: &ConstructorDescriptor,
    graph: &GraphBuilder<'_>,
  ) -> Result<Instance> {
    let concrete = descriptor.owner;
    if let Some(instance) = self.get(&concrete) {
      trace!(concrete = %concrete, "singleton cache hit");
      return Ok(instance);
    }

    graph.verify_acyclic(descriptor)?;

    // The shard guard must be released before construction: building this
    // singleton may need to insert cells for its own dependencies.
    let cell = self.cells.entry(concrete).or_default().clone();

    cell
      .get_or_try_init(|| {
        debug!(concrete = %concrete, "constructing singleton");
        graph.build(descriptor).map_err(|err| {
          warn!(concrete = %concrete, error = %err, "singleton construction failed");
          err
        })
      })
      .cloned()
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.cells.iter().filter(|cell| cell.get().is_some()).count()
  }
}
