//! Cached Employee Service
//!
//! Pairs every store call with an explicit, ordered cache step:
//! - reads go cache first, then the store, populating the cache on a store hit
//! - create and update write the store, then publish the stored record
//! - delete writes the store, then invalidates
//!
//! The cache is touched only after the store call has succeeded, so a failed
//! store write leaves the cache exactly as it was. The cache lock is held for
//! a single cache call and never across a store await.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, EmployeeCache};
use crate::models::{Employee, EmployeeId, NewEmployee};
use crate::store::{EmployeeStore, StoreResult};

// == Cached Employee Service ==
#[derive(Clone)]
pub struct CachedEmployeeService {
    store: Arc<dyn EmployeeStore>,
    cache: Arc<RwLock<EmployeeCache>>,
}

impl CachedEmployeeService {
    // == Constructors ==
    /// Creates a service over an explicit store and shared cache.
    pub fn new(store: Arc<dyn EmployeeStore>, cache: Arc<RwLock<EmployeeCache>>) -> Self {
        Self { store, cache }
    }

    /// Creates a service with a fresh cache of the given capacity and ttl.
    pub fn with_cache_config(
        store: Arc<dyn EmployeeStore>,
        max_entries: usize,
        ttl: Duration,
    ) -> Self {
        let cache = EmployeeCache::new(max_entries, ttl);
        Self::new(store, Arc::new(RwLock::new(cache)))
    }

    /// Shared handle to the cache, for the background sweep.
    pub fn cache_handle(&self) -> Arc<RwLock<EmployeeCache>> {
        Arc::clone(&self.cache)
    }

    // == Retrieve All ==
    /// Lists every employee straight from the store. Listings are not cached.
    pub async fn retrieve_all(&self) -> StoreResult<Vec<Employee>> {
        let employees = self.store.find_all().await?;
        info!(count = employees.len(), "Fetching all employees");
        Ok(employees)
    }

    // == Get By Id ==
    /// Read-through lookup. Absence is not cached.
    pub async fn get_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        // Write lock: a hit refreshes access time and LRU order
        let cached = self.cache.write().await.get(id);
        if let Some(employee) = cached {
            debug!(id, "cache hit");
            return Ok(Some(employee));
        }

        info!(id, "Fetching employee by id");
        let found = self.store.find_by_id(id).await?;

        if let Some(employee) = &found {
            self.cache.write().await.put(id, employee.clone());
        }

        Ok(found)
    }

    // == Create ==
    /// Inserts a new employee and publishes it under the store-assigned id.
    pub async fn create(&self, employee: NewEmployee) -> StoreResult<Employee> {
        let stored = self.store.insert(employee).await?;
        self.cache.write().await.put(stored.id, stored.clone());
        info!(id = stored.id, "Add new employee");
        Ok(stored)
    }

    // == Update ==
    /// Saves `employee` under `id` and publishes the saved record.
    ///
    /// Callers check existence first; the store itself upserts.
    pub async fn update(&self, id: EmployeeId, employee: NewEmployee) -> StoreResult<Employee> {
        let saved = self.store.save(Employee::from_new(id, employee)).await?;
        self.cache.write().await.put(id, saved.clone());
        info!(id, "Update employee by id");
        Ok(saved)
    }

    // == Delete ==
    /// Deletes from the store, then drops the cache entry.
    pub async fn delete(&self, id: EmployeeId) -> StoreResult<()> {
        self.store.delete_by_id(id).await?;
        self.cache.write().await.invalidate(id);
        info!(id, "Delete employee by id");
        Ok(())
    }

    // == Exists ==
    /// Existence check against the store only; never consults the cache.
    pub async fn exists(&self, id: EmployeeId) -> StoreResult<bool> {
        let exists = self.store.exists_by_id(id).await?;
        if !exists {
            info!(id, "Employee does not exist");
        }
        Ok(exists)
    }

    // == Cache Stats ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

impl std::fmt::Debug for CachedEmployeeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedEmployeeService").finish_non_exhaustive()
    }
}
