use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, PoisonError, RwLock,
};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{
    list_filter::{self, is_blank},
    pipeline,
    types::{
        notice::Notice,
        sidebar_error::{InputField, SidebarError},
    },
};
use crate::{services::place_directory::directory::PlaceDirectory, types::marker::Marker};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub token: u64,
    pub markers: Vec<Marker>,
    pub omitted: usize,
    pub notice: Option<Notice>,
    /// False when a later search was dispatched before this one finished.
    pub applied: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarSnapshot {
    pub markers: Vec<Marker>,
    pub filtered_markers: Vec<Marker>,
    pub filter_text: String,
    pub selected: Option<String>,
}

#[derive(Default)]
struct SidebarView {
    markers: Vec<Marker>,
    filtered_markers: Vec<Marker>,
    filter_text: String,
    selected: Option<String>,
}

/// Owns the displayed marker set and serialises updates to it.
///
/// Every search takes a token when dispatched; its results replace the
/// displayed markers only if no newer search has been dispatched since.
#[derive(Clone)]
pub struct SidebarService {
    directory: Arc<dyn PlaceDirectory>,
    latest_token: Arc<AtomicU64>,
    view: Arc<RwLock<SidebarView>>,
}

impl SidebarService {
    pub fn new(directory: Arc<dyn PlaceDirectory>) -> Self {
        Self {
            directory,
            latest_token: Arc::new(AtomicU64::new(0)),
            view: Arc::new(RwLock::new(SidebarView::default())),
        }
    }

    pub async fn submit_search(&self, text: &str) -> Result<SearchReport, SidebarError> {
        if is_blank(text) {
            return Err(SidebarError::Validation(InputField::Search));
        }

        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = pipeline::search(self.directory.as_ref(), text).await?;
        let notice = Notice::for_results(outcome.markers.len(), outcome.omitted);

        let applied = {
            let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);

            // Checked under the lock so two completions cannot both apply.
            if token == self.latest_token.load(Ordering::SeqCst) {
                view.markers = outcome.markers.clone();
                view.filtered_markers = outcome.markers.clone();
                view.filter_text.clear();
                view.selected = None;
                true
            } else {
                false
            }
        };

        if applied {
            info!(
                "Search {} for {} applied with {} markers, {} omitted",
                token,
                text,
                outcome.markers.len(),
                outcome.omitted
            );
        } else {
            warn!("Discarding stale results of search {} for {}", token, text);
        }

        Ok(SearchReport {
            token,
            markers: outcome.markers,
            omitted: outcome.omitted,
            notice,
            applied,
        })
    }

    /// Narrows the displayed list. A rejected filter leaves the view untouched.
    pub fn submit_filter(&self, text: &str) -> Result<Vec<Marker>, SidebarError> {
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);

        let filtered = list_filter::filter(&view.markers, text)?;
        view.filtered_markers = filtered.clone();
        view.filter_text = text.to_string();

        Ok(filtered)
    }

    pub fn pick_item(&self, title: &str) -> Result<Marker, SidebarError> {
        let mut view = self.view.write().unwrap_or_else(PoisonError::into_inner);

        let marker = list_filter::select_by_title(&view.filtered_markers, title)?.clone();
        view.selected = Some(marker.id.clone());

        Ok(marker)
    }

    pub fn snapshot(&self) -> SidebarSnapshot {
        let view = self.view.read().unwrap_or_else(PoisonError::into_inner);

        SidebarSnapshot {
            markers: view.markers.clone(),
            filtered_markers: view.filtered_markers.clone(),
            filter_text: view.filter_text.clone(),
            selected: view.selected.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::services::sidebar::fake_directory::{candidate, FakeDirectory};

    fn cafe_directory() -> FakeDirectory {
        FakeDirectory::new()
            .with_prediction(
                "cafe",
                vec![
                    candidate("a", "Cafe A"),
                    candidate("b", "Cafe B"),
                    candidate("c", "Cafe C"),
                ],
            )
            .with_details("a", "Main Street Cafe")
            .with_details("b", "Harbor Books")
            .with_details("c", "Old Main Station")
    }

    #[tokio::test]
    async fn search_replaces_markers_and_resets_filter() {
        let sidebar = SidebarService::new(Arc::new(cafe_directory()));

        sidebar.submit_search("cafe").await.unwrap();
        sidebar.submit_filter("main").unwrap();
        sidebar.pick_item("Old Main Station").unwrap();

        let report = sidebar.submit_search("cafe").await.unwrap();
        let snapshot = sidebar.snapshot();

        assert!(report.applied);
        assert_eq!(report.notice, None);
        assert_eq!(snapshot.markers.len(), 3);
        assert_eq!(snapshot.filtered_markers, snapshot.markers);
        assert_eq!(snapshot.filter_text, "");
        assert_eq!(snapshot.selected, None);
    }

    #[tokio::test]
    async fn search_reports_partial_results() {
        let directory = FakeDirectory::new()
            .with_prediction("cafe", vec![candidate("a", "Cafe A"), candidate("b", "Cafe B")])
            .with_details("a", "Main Street Cafe");
        let sidebar = SidebarService::new(Arc::new(directory));

        let report = sidebar.submit_search("cafe").await.unwrap();

        assert_eq!(report.markers.len(), 1);
        assert_eq!(report.omitted, 1);
        assert_eq!(report.notice, Some(Notice::PartialResults));
    }

    #[tokio::test]
    async fn search_reports_fetch_error_when_nothing_resolves() {
        let directory = FakeDirectory::new()
            .with_prediction("cafe", vec![candidate("a", "Cafe A")]);
        let sidebar = SidebarService::new(Arc::new(directory));

        let report = sidebar.submit_search("cafe").await.unwrap();

        assert!(report.markers.is_empty());
        assert_eq!(report.notice, Some(Notice::FetchError));
        assert!(report.applied);
    }

    #[tokio::test]
    async fn blank_search_keeps_displayed_markers() {
        let directory = Arc::new(cafe_directory());
        let sidebar = SidebarService::new(directory.clone());
        sidebar.submit_search("cafe").await.unwrap();
        let before = sidebar.snapshot();
        let calls = directory.calls();

        let err = sidebar.submit_search("  ").await.unwrap_err();

        assert_eq!(err, SidebarError::Validation(InputField::Search));
        assert_eq!(sidebar.snapshot(), before);
        assert_eq!(directory.calls(), calls);
    }

    #[tokio::test]
    async fn lookup_error_keeps_displayed_markers() {
        let sidebar = SidebarService::new(Arc::new(cafe_directory()));
        sidebar.submit_search("cafe").await.unwrap();
        let before = sidebar.snapshot();

        let err = sidebar.submit_search("atlantis").await.unwrap_err();

        assert!(matches!(err, SidebarError::Lookup { .. }));
        assert_eq!(sidebar.snapshot(), before);
    }

    #[tokio::test]
    async fn blank_filter_keeps_filtered_view() {
        let sidebar = SidebarService::new(Arc::new(cafe_directory()));
        sidebar.submit_search("cafe").await.unwrap();
        sidebar.submit_filter("main").unwrap();
        let before = sidebar.snapshot();

        let err = sidebar.submit_filter("").unwrap_err();

        assert_eq!(err, SidebarError::Validation(InputField::Filter));
        assert_eq!(sidebar.snapshot(), before);
        assert_eq!(before.filtered_markers.len(), 2);
        assert_eq!(before.filter_text, "main");
    }

    #[tokio::test]
    async fn filter_never_shrinks_marker_set() {
        let sidebar = SidebarService::new(Arc::new(cafe_directory()));
        sidebar.submit_search("cafe").await.unwrap();

        sidebar.submit_filter("books").unwrap();
        let filtered = sidebar.submit_filter("main").unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(sidebar.snapshot().markers.len(), 3);
    }

    #[tokio::test]
    async fn pick_item_only_sees_filtered_view() {
        let sidebar = SidebarService::new(Arc::new(cafe_directory()));
        sidebar.submit_search("cafe").await.unwrap();
        sidebar.submit_filter("main").unwrap();

        let picked = sidebar.pick_item("Main Street Cafe").unwrap();
        let hidden = sidebar.pick_item("Harbor Books").unwrap_err();

        assert_eq!(picked.id, "a");
        assert_eq!(sidebar.snapshot().selected, Some("a".to_string()));
        assert!(matches!(hidden, SidebarError::NotFound { .. }));
    }

    #[tokio::test]
    #[traced_test]
    async fn slow_earlier_search_does_not_overwrite_newer_one() {
        let directory = FakeDirectory::new()
            .with_prediction("slow", vec![candidate("s", "Slow Place")])
            .with_prediction("fast", vec![candidate("f", "Fast Place")])
            .with_details("s", "1 Slow Rd")
            .with_details("f", "2 Fast Ave")
            .with_delay("slow", 50);
        let sidebar = SidebarService::new(Arc::new(directory));

        let (slow, fast) = tokio::join!(sidebar.submit_search("slow"), sidebar.submit_search("fast"));
        let slow = slow.unwrap();
        let fast = fast.unwrap();

        assert!(slow.token < fast.token);
        assert!(fast.applied);
        assert!(!slow.applied);
        assert_eq!(sidebar.snapshot().markers[0].id, "f");
        assert!(logs_contain("Discarding stale results of search 1 for slow"));
    }
}
