use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::app::ports::HttpClientPort;
use crate::error::Result;
use crate::observability::metrics;
use crate::search::{
    sort_newest_first, EntityGroup, NormalizationRegistry, SearchFilter, UnifiedRecord,
};
use crate::types::{ApiListResponse, RawEntity};

/// Outcome of one aggregate load
#[derive(Debug, Clone, Default)]
pub struct SearchLoad {
    /// Merged records, newest first
    pub records: Vec<UnifiedRecord>,
    /// Groups whose fetch failed and therefore contributed nothing
    pub failed_groups: Vec<EntityGroup>,
}

/// What the table shows: rows, or the single aggregate error message
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Rows(Vec<UnifiedRecord>),
    Error(String),
}

/// Unified search over players, institutions and technical officials
pub struct UnifiedSearch {
    http: Arc<dyn HttpClientPort>,
    registry: NormalizationRegistry,
}

impl UnifiedSearch {
    pub fn new(http: Arc<dyn HttpClientPort>) -> Self {
        Self { http, registry: NormalizationRegistry::new() }
    }

    pub fn with_registry(http: Arc<dyn HttpClientPort>, registry: NormalizationRegistry) -> Self {
        Self { http, registry }
    }

    /// Fetches one group's list. Any failure yields `None`; siblings are unaffected.
    async fn fetch_group(&self, group: EntityGroup) -> Option<Vec<RawEntity>> {
        let path = group.endpoint();
        let body = match self.http.get_json(path).await {
            Ok(body) => body,
            Err(e) => {
                warn!(group = %group, error = %e, "Fetch failed, continuing without this group");
                metrics::fetch::failed(group);
                return None;
            }
        };
        let entities = serde_json::from_value::<ApiListResponse>(body)
            .ok()
            .and_then(ApiListResponse::into_entities);
        if entities.is_none() {
            warn!(group = %group, path, "Malformed list response, continuing without this group");
            metrics::fetch::failed(group);
        }
        entities
    }

    /// Raw entities of one group whose unified form passes `filter`.
    /// Empty when the fetch fails or the filter excludes the group.
    pub async fn fetch_raw(
        &self,
        group: EntityGroup,
        filter: &SearchFilter,
    ) -> Result<Vec<RawEntity>> {
        let entities = self.fetch_group(group).await.unwrap_or_default();
        let mut kept = Vec::with_capacity(entities.len());
        for entity in entities {
            if filter.matches(&self.registry.normalize(group, &entity)?) {
                kept.push(entity);
            }
        }
        info!(group = %group, kept = kept.len(), "Raw entities selected");
        Ok(kept)
    }

    /// Fetches all groups concurrently, then normalizes, merges and sorts.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<SearchLoad> {
        let (players, institutions, officials) = tokio::join!(
            self.fetch_group(EntityGroup::Player),
            self.fetch_group(EntityGroup::Institution),
            self.fetch_group(EntityGroup::Official),
        );

        let mut load = SearchLoad::default();
        for (group, fetched) in [
            (EntityGroup::Player, players),
            (EntityGroup::Institution, institutions),
            (EntityGroup::Official, officials),
        ] {
            match fetched {
                Some(entities) => {
                    let records = self.registry.normalize_all(group, &entities)?;
                    metrics::fetch::succeeded(group, records.len());
                    load.records.extend(records);
                }
                None => load.failed_groups.push(group),
            }
        }

        sort_newest_first(&mut load.records);
        info!(
            total = load.records.len(),
            failed = load.failed_groups.len(),
            "Unified records loaded"
        );
        Ok(load)
    }

    /// Loads and filters, recovering any aggregate failure into a message.
    pub async fn view(&self, filter: &SearchFilter) -> SearchView {
        match self.load().await {
            Ok(load) => SearchView::Rows(filter.apply(&load.records)),
            Err(e) => SearchView::Error(e.to_string()),
        }
    }
}
