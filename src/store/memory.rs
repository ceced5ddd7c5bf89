//! In-memory employee store
//!
//! BTreeMap behind a tokio RwLock with an atomic id sequence. Listing is
//! ordered by id.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{EmployeeStore, StoreError, StoreResult};
use crate::models::{Employee, EmployeeId, NewEmployee};

#[derive(Debug)]
pub struct InMemoryEmployeeStore {
    records: RwLock<BTreeMap<EmployeeId, Employee>>,
    /// Next id handed out by `insert`
    next_id: AtomicI64,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Employee::from_new(id, employee);

        let mut records = self.records.write().await;
        if records.contains_key(&id) {
            return Err(StoreError::Constraint(format!("duplicate id {}", id)));
        }
        records.insert(id, stored.clone());
        debug!(id, "inserted employee record");
        Ok(stored)
    }

    async fn save(&self, employee: Employee) -> StoreResult<Employee> {
        if employee.id <= 0 {
            return Err(StoreError::Constraint(format!(
                "invalid id {}",
                employee.id
            )));
        }

        // Keep the sequence ahead of explicitly saved ids
        let next = employee.id.checked_add(1).ok_or_else(|| {
            StoreError::Constraint(format!("id {} out of range", employee.id))
        })?;
        self.next_id.fetch_max(next, Ordering::SeqCst);

        self.records
            .write()
            .await
            .insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<()> {
        if self.records.write().await.remove(&id).is_none() {
            debug!(id, "delete of absent employee record");
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> StoreResult<bool> {
        Ok(self.records.read().await.contains_key(&id))
    }
}
