use std::path::Path;

use tracing::info;

use crate::command::Command;
use crate::domain::{Category, Priority};
use crate::error::AppError;
use crate::incident::Incident;
use crate::list::IncidentList;
use crate::store::{self, StoreOptions};
use crate::table::{self, IncidentRow};

/// Entry point for a front end: one incident list plus file persistence and table views.
///
/// Owned by the embedding application; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct IncidentManager {
    list: IncidentList,
    store_options: StoreOptions,
}

impl IncidentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store_options(store_options: StoreOptions) -> Self {
        Self {
            list: IncidentList::new(),
            store_options,
        }
    }

    pub fn list(&self) -> &IncidentList {
        &self.list
    }

    pub fn create_new_list(&mut self) {
        self.list.reset();
        info!("started new incident list");
    }

    /// Replace the current list with the incidents saved at `path`.
    ///
    /// Decoding and reconstruction happen on a fresh list; on any error the current list is
    /// left exactly as it was.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, AppError> {
        let records = store::load_records(path)?;
        let mut fresh = IncidentList::new();
        let loaded = fresh.reconstruct_all(&records)?;
        self.list = fresh;
        info!(path = %path.display(), loaded, "loaded incident list");
        Ok(loaded)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), AppError> {
        store::save_records(path, &self.list.to_records(), self.store_options)?;
        info!(path = %path.display(), saved = self.list.len(), "saved incident list");
        Ok(())
    }

    pub fn rows(&self) -> Vec<IncidentRow> {
        table::rows(self.list.incidents())
    }

    pub fn rows_by_category(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<IncidentRow>, AppError> {
        Ok(table::rows(self.list.by_category(category)?))
    }

    pub fn get_by_id(&self, id: i64) -> Option<&Incident> {
        self.list.by_id(id)
    }

    pub fn execute_command(&mut self, id: i64, command: &Command) -> Result<bool, AppError> {
        self.list.dispatch(id, command)
    }

    pub fn delete_by_id(&mut self, id: i64) -> bool {
        self.list.delete_by_id(id)
    }

    pub fn add_incident(
        &mut self,
        caller: &str,
        category: Category,
        priority: Priority,
        name: &str,
        note: &str,
    ) -> Result<i64, AppError> {
        self.list.create(caller, category, priority, name, note)
    }
}
