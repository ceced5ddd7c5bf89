//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple reference model.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::{EmployeeCache, DEFAULT_TTL};
use crate::models::{Employee, EmployeeId, NewEmployee};

// == Strategies ==
#[derive(Debug, Clone)]
enum CacheOp {
    Put { id: EmployeeId, salary: i64 },
    Get { id: EmployeeId },
    Invalidate { id: EmployeeId },
}

fn id_strategy() -> impl Strategy<Value = EmployeeId> {
    1i64..40
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (id_strategy(), 0i64..100_000).prop_map(|(id, salary)| CacheOp::Put { id, salary }),
        id_strategy().prop_map(|id| CacheOp::Get { id }),
        id_strategy().prop_map(|id| CacheOp::Invalidate { id }),
    ]
}

fn employee(id: EmployeeId, salary: i64) -> Employee {
    Employee::from_new(id, NewEmployee::new("Prop", salary, "Testing"))
}

// == Reference Model ==
/// Recency list (oldest first) plus values; evicts from the front.
#[derive(Default)]
struct ModelCache {
    order: Vec<EmployeeId>,
    values: HashMap<EmployeeId, Employee>,
}

impl ModelCache {
    fn touch(&mut self, id: EmployeeId) {
        self.order.retain(|&k| k != id);
        self.order.push(id);
    }

    fn put(&mut self, id: EmployeeId, value: Employee, capacity: usize) {
        self.values.insert(id, value);
        self.touch(id);
        while self.values.len() > capacity {
            let victim = self.order.remove(0);
            self.values.remove(&victim);
        }
    }

    fn get(&mut self, id: EmployeeId) -> Option<Employee> {
        let value = self.values.get(&id).cloned();
        if value.is_some() {
            self.touch(id);
        }
        value
    }

    fn invalidate(&mut self, id: EmployeeId) {
        self.values.remove(&id);
        self.order.retain(|&k| k != id);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // The cache agrees with the reference LRU model on every lookup.
    #[test]
    fn prop_matches_lru_model(
        capacity in 1usize..12,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut cache = EmployeeCache::new(capacity, DEFAULT_TTL);
        let mut model = ModelCache::default();

        for op in ops {
            match op {
                CacheOp::Put { id, salary } => {
                    cache.put(id, employee(id, salary));
                    model.put(id, employee(id, salary), capacity);
                }
                CacheOp::Get { id } => {
                    prop_assert_eq!(cache.get(id), model.get(id), "lookup mismatch for id {}", id);
                }
                CacheOp::Invalidate { id } => {
                    cache.invalidate(id);
                    model.invalidate(id);
                }
            }
            prop_assert_eq!(cache.len(), model.values.len());
        }
    }

    // The number of entries never exceeds the capacity.
    #[test]
    fn prop_capacity_enforcement(
        ids in prop::collection::vec(1i64..1000, 1..300)
    ) {
        let capacity = 50;
        let mut cache = EmployeeCache::new(capacity, DEFAULT_TTL);

        for id in ids {
            cache.put(id, employee(id, 1));
            prop_assert!(cache.len() <= capacity, "size {} exceeds {}", cache.len(), capacity);
            prop_assert!(cache.contains(id), "freshly written id {} must be cached", id);
        }
    }

    // Hits plus misses equals the number of lookups performed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut cache = EmployeeCache::new(16, DEFAULT_TTL);
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Put { id, salary } => cache.put(id, employee(id, salary)),
                CacheOp::Get { id } => match cache.get(id) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Invalidate { id } => cache.invalidate(id),
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, cache.len());
    }
}
