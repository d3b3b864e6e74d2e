use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cv_core::detail::{DetailError, DetailPhase, DetailSnapshot, DetailState};
use cv_core::fanout::join_all_or_nothing;
use cv_core::{CatalogPort, EntryId};
use tracing::{debug, info, info_span, warn, Instrument};

/// Loads one entry and all of its ability descriptions for the detail view.
///
/// Aggregation is all-or-nothing: either every description arrives and a
/// [`DetailSnapshot`] is published, or the phase becomes `Failed` and no
/// description is exposed.
///
/// 详情加载器：全部成功才发布快照。
pub struct DetailLoader {
    catalog: Arc<dyn CatalogPort>,
    state: Mutex<DetailState>,
}

impl DetailLoader {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            catalog,
            state: Mutex::new(DetailState::new()),
        }
    }

    pub fn phase(&self) -> DetailPhase {
        self.lock().phase().clone()
    }

    /// Load `id`, replacing whatever this loader showed before.
    ///
    /// # Errors
    ///
    /// - [`DetailError::Entry`] when the entry itself cannot be fetched;
    /// - [`DetailError::DescriptionAggregation`] when any description fails;
    /// - [`DetailError::Superseded`] when a newer `load` or a `reset` happened
    ///   while this one was pending. The state then belongs to the newer call.
    pub async fn load(&self, id: EntryId) -> Result<DetailSnapshot, DetailError> {
        let ticket = self.lock().begin(id.clone());

        let span = info_span!("detail.load", entry_id = %id);
        let result = self.fetch_snapshot(&id).instrument(span).await;

        let mut state = self.lock();
        match result {
            Ok(snapshot) => {
                if state.finish(&ticket, snapshot.clone()) {
                    info!(entry_id = %id, abilities = snapshot.descriptions().len(), "Detail ready");
                    Ok(snapshot)
                } else {
                    debug!(entry_id = %id, "Discarding superseded detail result");
                    Err(DetailError::Superseded)
                }
            }
            Err(err) => {
                warn!(entry_id = %id, error = %err, "Detail load failed");
                if state.fail(&ticket, err.user_message()) {
                    Err(err)
                } else {
                    Err(DetailError::Superseded)
                }
            }
        }
    }

    /// Drop the current detail (view unmount). Pending loads become stale.
    pub fn reset(&self) {
        self.lock().reset();
    }

    async fn fetch_snapshot(&self, id: &EntryId) -> Result<DetailSnapshot, DetailError> {
        let entry = self
            .catalog
            .get_entry(id)
            .await
            .map_err(DetailError::Entry)?;

        let names: Vec<String> = entry
            .distinct_ability_names()
            .into_iter()
            .map(str::to_owned)
            .collect();
        debug!(count = names.len(), "Fetching ability descriptions");

        let descriptions = join_all_or_nothing(
            names
                .iter()
                .map(|name| self.catalog.get_ability_description(name)),
        )
        .await
        .map_err(|err| DetailError::DescriptionAggregation {
            failed: err.failed,
            total: err.total,
            first: err.first,
        })?;

        let by_name: HashMap<&str, String> = names
            .iter()
            .map(String::as_str)
            .zip(descriptions)
            .collect();
        let aligned: Vec<String> = entry
            .abilities
            .iter()
            .filter_map(|ability| by_name.get(ability.name.as_str()).cloned())
            .collect();

        Ok(DetailSnapshot::new(entry, aligned)?)
    }

    fn lock(&self) -> MutexGuard<'_, DetailState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
