use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::debug;

use crate::application::use_cases::notifier::Notifier;
use crate::domain::error::{AppError, Result};
use crate::domain::job::{JobListing, SearchCriteria};

/// Result of a deferred search completion. A completion overtaken by a newer
/// search or clear delivers nothing: no results, no notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "results")]
pub enum SearchDelivery {
    Delivered(Vec<JobListing>),
    Superseded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub criteria: SearchCriteria,
    pub results: Vec<JobListing>,
    pub loading: bool,
    pub has_searched: bool,
    pub selected: Option<JobListing>,
    pub details_visible: bool,
}

#[derive(Default)]
struct SearchState {
    criteria: SearchCriteria,
    results: Vec<JobListing>,
    loading: bool,
    has_searched: bool,
    selected: Option<JobListing>,
    details_visible: bool,
}

/// Client-side search over the fixed catalog, with simulated latency standing
/// in for a future network call.
pub struct JobSearchUseCase {
    catalog: Arc<Vec<JobListing>>,
    state: Mutex<SearchState>,
    epoch: AtomicU64,
    notifier: Notifier,
    search_latency: Duration,
    clear_latency: Duration,
}

impl JobSearchUseCase {
    pub fn new(
        catalog: Arc<Vec<JobListing>>,
        notifier: Notifier,
        search_latency: Duration,
        clear_latency: Duration,
    ) -> Self {
        Self {
            catalog,
            state: Mutex::new(SearchState::default()),
            epoch: AtomicU64::new(0),
            notifier,
            search_latency,
            clear_latency,
        }
    }

    pub fn view(&self) -> SearchView {
        let state = self.state.lock().unwrap();
        SearchView {
            criteria: state.criteria.clone(),
            results: state.results.clone(),
            loading: state.loading,
            has_searched: state.has_searched,
            selected: state.selected.clone(),
            details_visible: state.details_visible,
        }
    }

    /// Filters the catalog by the given criteria after the configured search
    /// latency. Completion emits a result-count notification unless a newer
    /// operation superseded this one while it was pending.
    pub async fn search(&self, criteria: SearchCriteria) -> Result<SearchDelivery> {
        let epoch = self.begin(|state| {
            state.criteria = criteria.clone();
        });

        sleep(self.search_latency).await;

        if self.superseded(epoch) {
            debug!(epoch, "search completion superseded");
            return Ok(SearchDelivery::Superseded);
        }

        let results: Vec<JobListing> = criteria
            .filter(&self.catalog)
            .into_iter()
            .cloned()
            .collect();

        {
            let mut state = self.state.lock().unwrap();
            state.results = results.clone();
            state.loading = false;
            state.has_searched = true;
        }

        if results.is_empty() {
            self.notifier.info(
                "No jobs match your search criteria. Try adjusting your filters.",
                "Search",
            );
        } else {
            self.notifier
                .success(format!("Found {} matching jobs!", results.len()), "Sparkles");
        }

        Ok(SearchDelivery::Delivered(results))
    }

    /// Resets the criteria. When a prior search has executed this re-issues an
    /// unfiltered search (with its own, shorter latency) instead of merely
    /// clearing the display; otherwise nothing further happens.
    pub async fn clear_filters(&self) -> Result<Option<SearchDelivery>> {
        let rerun = {
            let mut state = self.state.lock().unwrap();
            state.criteria = SearchCriteria::default();
            state.has_searched
        };
        if !rerun {
            return Ok(None);
        }

        let epoch = self.begin(|_| {});

        sleep(self.clear_latency).await;

        if self.superseded(epoch) {
            debug!(epoch, "clear completion superseded");
            return Ok(Some(SearchDelivery::Superseded));
        }

        let results: Vec<JobListing> = self.catalog.as_ref().clone();
        {
            let mut state = self.state.lock().unwrap();
            state.results = results.clone();
            state.loading = false;
        }
        self.notifier.info("All filters cleared", "Refresh");

        Ok(Some(SearchDelivery::Delivered(results)))
    }

    /// Sets the selected listing and shows the detail overlay.
    pub fn open_details(&self, id: u32) -> Result<JobListing> {
        let listing = self.find(id)?;
        let mut state = self.state.lock().unwrap();
        state.selected = Some(listing.clone());
        state.details_visible = true;
        Ok(listing)
    }

    /// Hides the overlay. The selected reference is intentionally retained.
    pub fn close_details(&self) {
        self.state.lock().unwrap().details_visible = false;
    }

    pub fn apply_to_job(&self) {
        self.notifier
            .success("Your application has been submitted!", "Party");
        self.close_details();
    }

    /// Saved status is not tracked anywhere; this is notification-only.
    pub fn save_job(&self, id: u32) -> Result<()> {
        self.find(id)?;
        self.notifier
            .success("Job saved to your favorites!", "Heart");
        Ok(())
    }

    fn find(&self, id: u32) -> Result<JobListing> {
        self.catalog
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No job listing with id {}", id)))
    }

    /// Claims the next epoch and flips the loading flag. The returned epoch
    /// is what the deferred completion must still hold to deliver.
    fn begin(&self, mutate: impl FnOnce(&mut SearchState)) -> u64 {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.state.lock().unwrap();
        state.loading = true;
        mutate(&mut state);
        epoch
    }

    fn superseded(&self, epoch: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) != epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::job::JobType;
    use crate::domain::notification::Severity;
    use crate::infrastructure::catalog;

    fn engine() -> (JobSearchUseCase, Notifier) {
        let notifier = Notifier::default();
        let engine = JobSearchUseCase::new(
            Arc::new(catalog::job_listings()),
            notifier.clone(),
            Duration::ZERO,
            Duration::ZERO,
        );
        (engine, notifier)
    }

    fn titles(delivery: &SearchDelivery) -> Vec<String> {
        match delivery {
            SearchDelivery::Delivered(results) => {
                results.iter().map(|job| job.title.clone()).collect()
            }
            SearchDelivery::Superseded => panic!("expected a delivery"),
        }
    }

    #[tokio::test]
    async fn test_empty_criteria_returns_full_catalog_in_order() {
        let (engine, _) = engine();
        let delivery = engine.search(SearchCriteria::default()).await.unwrap();
        assert_eq!(
            titles(&delivery),
            vec![
                "Senior Frontend Developer",
                "UX/UI Designer",
                "DevOps Engineer",
                "Product Manager",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_matches_title_case_insensitively() {
        let (engine, _) = engine();
        let delivery = engine
            .search(SearchCriteria {
                query: "developer".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(titles(&delivery), vec!["Senior Frontend Developer"]);
    }

    #[tokio::test]
    async fn test_location_filter_is_exact() {
        let (engine, _) = engine();
        let delivery = engine
            .search(SearchCriteria {
                location: "Remote".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(titles(&delivery), vec!["DevOps Engineer"]);
    }

    #[tokio::test]
    async fn test_filters_compose_as_intersection() {
        let (engine, _) = engine();
        // Full-time alone matches three listings; the query narrows to one.
        let delivery = engine
            .search(SearchCriteria {
                query: "design".into(),
                job_type: Some(JobType::FullTime),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(titles(&delivery), vec!["UX/UI Designer"]);

        // Disjoint combination yields the empty intersection.
        let delivery = engine
            .search(SearchCriteria {
                query: "developer".into(),
                location: "Remote".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(delivery, SearchDelivery::Delivered(Vec::new()));
    }

    #[tokio::test]
    async fn test_result_count_notifications() {
        let (engine, notifier) = engine();
        engine
            .search(SearchCriteria {
                query: "developer".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let notifications = notifier.drain();
        assert_eq!(notifications[0].severity, Severity::Success);
        assert_eq!(notifications[0].message, "Found 1 matching jobs!");

        engine
            .search(SearchCriteria {
                query: "astronaut".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let notifications = notifier.drain();
        assert_eq!(notifications[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_clear_without_prior_search_only_resets_criteria() {
        let (engine, notifier) = engine();
        assert!(engine.clear_filters().await.unwrap().is_none());
        assert!(notifier.drain().is_empty());
        assert!(engine.view().criteria.is_unfiltered());
    }

    #[tokio::test]
    async fn test_clear_after_zero_match_restores_full_catalog() {
        let (engine, notifier) = engine();
        engine
            .search(SearchCriteria {
                query: "astronaut".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(engine.view().results.is_empty());
        notifier.drain();

        let delivery = engine.clear_filters().await.unwrap().unwrap();
        assert_eq!(titles(&delivery).len(), 4);
        assert_eq!(engine.view().results.len(), 4);
        assert_eq!(notifier.drain()[0].message, "All filters cleared");
    }

    #[tokio::test]
    async fn test_newer_search_supersedes_pending_completion() {
        let notifier = Notifier::default();
        let engine = Arc::new(JobSearchUseCase::new(
            Arc::new(catalog::job_listings()),
            notifier.clone(),
            Duration::from_millis(50),
            Duration::ZERO,
        ));

        let slow = tokio::spawn({
            let engine = engine.clone();
            async move {
                engine
                    .search(SearchCriteria {
                        query: "developer".into(),
                        ..Default::default()
                    })
                    .await
            }
        });
        // Give the first search time to claim its epoch before the second.
        tokio::time::sleep(Duration::from_millis(5)).await;

        let second = engine
            .search(SearchCriteria {
                query: "design".into(),
                ..Default::default()
            })
            .await
            .unwrap();
        let first = slow.await.unwrap().unwrap();

        assert_eq!(first, SearchDelivery::Superseded);
        assert_eq!(titles(&second), vec!["UX/UI Designer"]);
        // Only the winning completion notified.
        assert_eq!(notifier.drain().len(), 1);
        assert_eq!(engine.view().results.len(), 1);
    }

    #[tokio::test]
    async fn test_detail_view_lifecycle() {
        let (engine, notifier) = engine();
        let listing = engine.open_details(3).unwrap();
        assert_eq!(listing.title, "DevOps Engineer");
        assert!(engine.view().details_visible);

        engine.close_details();
        let view = engine.view();
        assert!(!view.details_visible);
        // Selected reference is retained on close.
        assert_eq!(view.selected.unwrap().id, 3);

        assert!(matches!(
            engine.open_details(99),
            Err(AppError::NotFound(_))
        ));
        notifier.drain();
    }

    #[tokio::test]
    async fn test_apply_notifies_and_closes_details() {
        let (engine, notifier) = engine();
        engine.open_details(1).unwrap();
        engine.apply_to_job();
        assert!(!engine.view().details_visible);
        assert_eq!(
            notifier.drain()[0].message,
            "Your application has been submitted!"
        );
    }

    #[tokio::test]
    async fn test_save_job_is_notification_only() {
        let (engine, notifier) = engine();
        engine.save_job(2).unwrap();
        assert!(engine.save_job(99).is_err());
        let view = engine.view();
        assert!(view.results.is_empty() && view.selected.is_none());
        assert_eq!(notifier.drain().len(), 1);
    }
}
