use tracing::{debug, info};

use crate::aggregate::{monthly_counts, MonthlyCounts, PublicationGroups};
use crate::normalize::Article;
use crate::state::{filter_articles, Selection, SelectionState};

/// Handle for one load invocation. A load result is applied only if its ticket
/// is still the latest one issued, so a result arriving after a newer load
/// began (or after the widget was recreated) is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// In-memory model behind the dashboard widget: the article collection, the
/// interactive selection state, and the derived groupings the presentation
/// layer renders. Derived state is recomputed whenever its inputs change;
/// reads are cheap.
///
/// Single-threaded by construction: all mutation goes through `&mut self` on
/// one execution context, so no locking is needed beyond the load ticket.
#[derive(Debug, Default)]
pub struct ArticleWidget {
    articles: Vec<Article>,
    groups: PublicationGroups,
    counts: MonthlyCounts,
    state: SelectionState,
    active_load: u64,
}

impl ArticleWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load cycle. Bumping the generation invalidates any ticket from
    /// a load that is still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.active_load += 1;
        LoadTicket(self.active_load)
    }

    /// Replace the article collection with a completed load's result. The
    /// prior collection is fully replaced, never merged, and all derived state
    /// is recomputed before this returns; consumers never observe a partial
    /// update. Returns false if the ticket is stale.
    pub fn apply_load(&mut self, ticket: LoadTicket, articles: Vec<Article>) -> bool {
        if ticket.0 != self.active_load {
            debug!(
                "Discarding stale load result (ticket {} vs active {})",
                ticket.0, self.active_load
            );
            return false;
        }

        info!("Applying load of {} articles", articles.len());
        self.articles = articles;
        self.groups = PublicationGroups::from_articles(&self.articles);
        self.counts = monthly_counts(&self.articles, self.state.selection());
        true
    }

    pub fn select_publication(&mut self, name: &str) {
        self.state.select(name);
        self.counts = monthly_counts(&self.articles, self.state.selection());
    }

    pub fn toggle_expanded(&mut self, key: &str) {
        self.state.toggle(key);
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn groups(&self) -> &PublicationGroups {
        &self.groups
    }

    pub fn selector_list(&self) -> Vec<String> {
        self.groups.selector_list()
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    pub fn expanded_key(&self) -> Option<&str> {
        self.state.expanded_key()
    }

    pub fn filtered_articles(&self) -> Vec<&Article> {
        filter_articles(&self.articles, self.state.selection())
    }

    pub fn monthly_counts(&self) -> &MonthlyCounts {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, RawRecord};

    fn article(publication: &str, collected_at: Option<&str>) -> Article {
        normalize(RawRecord {
            publication: Some(publication.to_string()),
            collected_at: collected_at.map(String::from),
            ..Default::default()
        })
    }

    mod load_tests {
        use super::*;

        #[test]
        fn test_apply_load_replaces_collection() {
            let mut widget = ArticleWidget::new();

            let ticket = widget.begin_load();
            assert!(widget.apply_load(ticket, vec![article("Times", None)]));
            assert_eq!(widget.articles().len(), 1);

            // A reload replaces, never merges
            let ticket = widget.begin_load();
            assert!(widget.apply_load(
                ticket,
                vec![article("Herald", None), article("Gazette", None)]
            ));
            assert_eq!(widget.articles().len(), 2);
            assert_eq!(widget.groups().publications(), ["Herald", "Gazette"]);
        }

        #[test]
        fn test_stale_ticket_discarded() {
            let mut widget = ArticleWidget::new();

            let stale = widget.begin_load();
            let current = widget.begin_load();

            assert!(!widget.apply_load(stale, vec![article("Times", None)]));
            assert!(widget.articles().is_empty());

            assert!(widget.apply_load(current, vec![article("Herald", None)]));
            assert_eq!(widget.articles().len(), 1);
        }

        #[test]
        fn test_late_result_after_newer_load_applied() {
            let mut widget = ArticleWidget::new();

            let first = widget.begin_load();
            let second = widget.begin_load();
            assert!(widget.apply_load(second, vec![article("Herald", None)]));

            // First load finishes late; its result must not clobber the newer one
            assert!(!widget.apply_load(first, vec![article("Times", None)]));
            assert_eq!(widget.groups().publications(), ["Herald"]);
        }

        #[test]
        fn test_derived_state_recomputed_on_apply() {
            let mut widget = ArticleWidget::new();
            let ticket = widget.begin_load();
            widget.apply_load(
                ticket,
                vec![
                    article("Times", Some("2024-03-05")),
                    article("Herald", Some("2024-05-01")),
                ],
            );

            assert_eq!(widget.selector_list(), vec!["All", "Times", "Herald"]);
            assert_eq!(widget.monthly_counts()[2], 1);
            assert_eq!(widget.monthly_counts()[4], 1);
        }

        #[test]
        fn test_empty_load_is_renderable() {
            let mut widget = ArticleWidget::new();
            let ticket = widget.begin_load();
            widget.apply_load(ticket, Vec::new());

            assert!(widget.articles().is_empty());
            assert_eq!(widget.selector_list(), vec!["All"]);
            assert!(widget.filtered_articles().is_empty());
            assert!(widget.monthly_counts().iter().all(|&c| c == 0));
        }
    }

    mod selection_tests {
        use super::*;

        fn loaded_widget() -> ArticleWidget {
            let mut widget = ArticleWidget::new();
            let ticket = widget.begin_load();
            widget.apply_load(
                ticket,
                vec![
                    article("Times", Some("2024-03-05")),
                    article("Herald", Some("2024-03-06")),
                    article("Times", Some("2024-05-01")),
                ],
            );
            widget
        }

        #[test]
        fn test_counts_follow_selection() {
            let mut widget = loaded_widget();
            assert_eq!(widget.monthly_counts()[2], 2);

            widget.select_publication("Times");
            assert_eq!(widget.monthly_counts()[2], 1);
            assert_eq!(widget.monthly_counts()[4], 1);

            widget.select_publication("All");
            assert_eq!(widget.monthly_counts()[2], 2);
        }

        #[test]
        fn test_filtered_articles_follow_selection() {
            let mut widget = loaded_widget();
            assert_eq!(widget.filtered_articles().len(), 3);

            widget.select_publication("Herald");
            assert_eq!(widget.filtered_articles().len(), 1);
        }

        #[test]
        fn test_selecting_absent_publication_is_empty_not_error() {
            let mut widget = loaded_widget();
            widget.select_publication("Nowhere");
            assert!(widget.filtered_articles().is_empty());
            assert!(widget.monthly_counts().iter().all(|&c| c == 0));
        }

        #[test]
        fn test_selection_survives_reload() {
            let mut widget = loaded_widget();
            widget.select_publication("Times");

            let ticket = widget.begin_load();
            widget.apply_load(ticket, vec![article("Times", Some("2024-06-01"))]);

            assert_eq!(widget.selection().name(), "Times");
            assert_eq!(widget.monthly_counts()[5], 1);
        }

        #[test]
        fn test_expansion_is_exclusive() {
            let mut widget = loaded_widget();
            widget.toggle_expanded("Times");
            widget.toggle_expanded("Herald");
            assert_eq!(widget.expanded_key(), Some("Herald"));

            widget.toggle_expanded("Herald");
            assert_eq!(widget.expanded_key(), None);
        }
    }
}
