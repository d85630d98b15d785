//! Names and free-form metadata for variables and constraints.
//!
//! Generated names such as `assign[3,2]` are looked up far more often than
//! they are written, so each handle kind keeps a reverse index alongside the
//! forward map. A name given to a second handle points at the newest one.

use std::collections::{BTreeMap, HashMap};

use vargrid_expr::{ConstraintId, VariableId};
use vargrid_solver::SolverError;

use crate::model::Model;

/// Names and JSON metadata for one kind of handle.
#[derive(Debug, Clone)]
pub(crate) struct Labels<K> {
    names: BTreeMap<K, String>,
    by_name: HashMap<String, K>,
    metadata: BTreeMap<K, serde_json::Value>,
}

impl<K> Default for Labels<K> {
    fn default() -> Self {
        Self {
            names: BTreeMap::new(),
            by_name: HashMap::new(),
            metadata: BTreeMap::new(),
        }
    }
}

impl<K: Copy + Ord> Labels<K> {
    fn rename(&mut self, id: K, name: String) {
        if let Some(previous) = self.names.insert(id, name.clone()) {
            if self.by_name.get(&previous) == Some(&id) {
                self.by_name.remove(&previous);
            }
        }
        self.by_name.insert(name, id);
    }

    fn name(&self, id: K) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    fn lookup(&self, name: &str) -> Option<K> {
        self.by_name.get(name).copied()
    }

    fn annotate(&mut self, id: K, value: serde_json::Value) {
        self.metadata.insert(id, value);
    }

    fn annotation(&self, id: K) -> Option<&serde_json::Value> {
        self.metadata.get(&id)
    }
}

impl Model {
    fn ensure_constraint_exists(&self, id: ConstraintId) -> Result<(), SolverError> {
        if (id.inner() as usize) < self.constraints.len() {
            Ok(())
        } else {
            Err(SolverError::InvalidConstraintId(id))
        }
    }

    /// Name a variable, replacing its previous name.
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), SolverError> {
        self.ensure_variable_exists(id)?;
        self.variable_labels.rename(id, name);
        Ok(())
    }

    pub fn get_variable_name(&self, id: VariableId) -> Option<&str> {
        self.variable_labels.name(id)
    }

    /// Most recently named variable called `name`.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_labels.lookup(name)
    }

    pub fn set_variable_metadata(
        &mut self,
        id: VariableId,
        metadata: serde_json::Value,
    ) -> Result<(), SolverError> {
        self.ensure_variable_exists(id)?;
        self.variable_labels.annotate(id, metadata);
        Ok(())
    }

    pub fn get_variable_metadata(&self, id: VariableId) -> Option<&serde_json::Value> {
        self.variable_labels.annotation(id)
    }

    pub fn set_constraint_name(
        &mut self,
        id: ConstraintId,
        name: String,
    ) -> Result<(), SolverError> {
        self.ensure_constraint_exists(id)?;
        self.constraint_labels.rename(id, name);
        Ok(())
    }

    pub fn get_constraint_name(&self, id: ConstraintId) -> Option<&str> {
        self.constraint_labels.name(id)
    }

    pub fn get_constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        self.constraint_labels.lookup(name)
    }

    pub fn set_constraint_metadata(
        &mut self,
        id: ConstraintId,
        metadata: serde_json::Value,
    ) -> Result<(), SolverError> {
        self.ensure_constraint_exists(id)?;
        self.constraint_labels.annotate(id, metadata);
        Ok(())
    }

    pub fn get_constraint_metadata(&self, id: ConstraintId) -> Option<&serde_json::Value> {
        self.constraint_labels.annotation(id)
    }
}
