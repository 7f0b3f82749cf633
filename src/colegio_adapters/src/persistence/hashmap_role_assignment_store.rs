use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use colegio_core::{RoleAssignment, RoleAssignmentId, RoleAssignmentStore, StoreError};

#[derive(Default)]
struct Assignments {
    by_id: HashMap<RoleAssignmentId, RoleAssignment>,
    last_id: i64,
}

#[derive(Default, Clone)]
pub struct HashMapRoleAssignmentStore {
    assignments: Arc<RwLock<Assignments>>,
}

impl HashMapRoleAssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: RoleAssignmentId) -> Option<RoleAssignment> {
        self.assignments.read().await.by_id.get(&id).cloned()
    }
}

#[async_trait::async_trait]
impl RoleAssignmentStore for HashMapRoleAssignmentStore {
    async fn save(&self, mut assignment: RoleAssignment) -> Result<RoleAssignment, StoreError> {
        let mut assignments = self.assignments.write().await;

        let id = match assignment.id {
            Some(id) if assignments.by_id.contains_key(&id) => id,
            Some(_) => return Err(StoreError::NotFound),
            None => {
                assignments.last_id += 1;
                RoleAssignmentId::new(assignments.last_id)
            }
        };

        assignment.id = Some(id);
        assignments.by_id.insert(id, assignment.clone());
        Ok(assignment)
    }

    async fn delete_by_id(&self, id: RoleAssignmentId) -> Result<(), StoreError> {
        let mut assignments = self.assignments.write().await;
        assignments
            .by_id
            .remove(&id)
            .ok_or(StoreError::NotFound)?;
        Ok(())
    }
}
