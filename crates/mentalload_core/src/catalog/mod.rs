//! Read-only task catalog.
//!
//! # Responsibility
//! - Own the ordered list of task definitions and an id index.
//! - Filter tasks by household applicability.
//!
//! # Invariants
//! - The catalog is never mutated after construction.
//! - Later duplicates of an id are dropped; the first definition wins.

mod standard;

use crate::model::household::HouseholdSetup;
use crate::model::task::Task;
use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STANDARD_CATALOG: Lazy<TaskCatalog> =
    Lazy::new(|| TaskCatalog::from_tasks(standard::standard_tasks()));

/// Immutable task lookup.
#[derive(Debug, Clone, Default)]
pub struct TaskCatalog {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
}

impl TaskCatalog {
    /// Shared built-in catalog of physical and cognitive tasks.
    pub fn standard() -> &'static TaskCatalog {
        &STANDARD_CATALOG
    }

    /// Builds a catalog preserving input order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut kept = Vec::with_capacity(tasks.len());
        let mut index = HashMap::with_capacity(tasks.len());
        for task in tasks {
            if index.contains_key(task.id()) {
                warn!(
                    "event=catalog_duplicate module=catalog status=skipped task_id={}",
                    task.id()
                );
                continue;
            }
            index.insert(task.id().to_string(), kept.len());
            kept.push(task);
        }
        Self { tasks: kept, index }
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.index.get(task_id).map(|position| &self.tasks[*position])
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.index.contains_key(task_id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn physical_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_physical())
    }

    pub fn cognitive_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.is_physical())
    }

    /// Tasks relevant to the household, in catalog order.
    pub fn applicable_for(&self, household: &HouseholdSetup) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.applies_to(household))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskCatalog;
    use crate::model::household::HouseholdSetup;
    use crate::model::task::{TaskCategory, TaskRequirement};
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_ids_are_unique_and_indexed() {
        let catalog = TaskCatalog::standard();
        let ids: HashSet<&str> = catalog.tasks().iter().map(|task| task.id()).collect();
        assert_eq!(ids.len(), catalog.len());
        for id in ids {
            assert_eq!(catalog.get(id).map(|task| task.id()), Some(id));
        }
    }

    #[test]
    fn standard_catalog_has_both_task_kinds() {
        let catalog = TaskCatalog::standard();
        assert!(catalog.physical_tasks().count() > 0);
        assert!(catalog.cognitive_tasks().count() > 0);
        assert!(catalog
            .cognitive_tasks()
            .all(|task| task.mental_load_weight() >= 1.0));
    }

    #[test]
    fn applicable_for_hides_child_and_pet_tasks_when_absent() {
        let catalog = TaskCatalog::standard();
        let household = HouseholdSetup::default();
        let applicable = catalog.applicable_for(&household);
        assert!(applicable.iter().all(|task| !matches!(
            task.requirement(),
            TaskRequirement::Children | TaskRequirement::Pets | TaskRequirement::Garden
        )));

        let with_kids = HouseholdSetup {
            children: 2,
            has_pets: true,
            ..HouseholdSetup::default()
        };
        assert!(catalog.applicable_for(&with_kids).len() > applicable.len());
    }

    #[test]
    fn pet_tasks_need_pets_and_keep_their_category() {
        let catalog = TaskCatalog::standard();
        let feeding = catalog.get("pet_feeding").expect("pet_feeding in catalog");
        assert_eq!(feeding.category(), TaskCategory::Pets);
        assert_eq!(feeding.requirement(), TaskRequirement::Pets);

        let health = catalog.get("pet_health_watch").expect("pet_health_watch in catalog");
        assert_eq!(health.category(), TaskCategory::Monitoring);
        assert_eq!(health.requirement(), TaskRequirement::Pets);

        let with_pets = HouseholdSetup {
            has_pets: true,
            ..HouseholdSetup::default()
        };
        assert!(catalog
            .applicable_for(&with_pets)
            .iter()
            .any(|task| task.id() == "vet_grooming"));
    }

    #[test]
    fn from_tasks_keeps_first_duplicate() {
        let mut tasks = TaskCatalog::standard().tasks()[..2].to_vec();
        tasks.push(tasks[0].clone());
        let catalog = TaskCatalog::from_tasks(tasks);
        assert_eq!(catalog.len(), 2);
    }
}
