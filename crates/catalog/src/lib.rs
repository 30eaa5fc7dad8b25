//! Immutable in-memory catalog registry.
//!
//! The backend has no database: every collection is a static table compiled
//! into the binary (see [`seed`]). The [`Registry`] wraps those tables
//! behind read-only accessors so handlers never touch the seed modules
//! directly. Construction cannot fail and nothing mutates after it.

pub mod seed;

use bangumi_core::{CatalogId, CatalogRecord, Feed, FeedKind, ResourceKind};

/// Read-only view over the per-kind catalog collections and home feeds.
///
/// Cheap to construct (all data is `&'static`); shared across requests
/// behind an `Arc` in the API state.
#[derive(Debug, Clone)]
pub struct Registry {
    anime: &'static [CatalogRecord],
    comic: &'static [CatalogRecord],
    novel: &'static [CatalogRecord],
    feeds: [Feed; 4],
}

impl Registry {
    /// Build the registry from the compiled-in seed tables.
    pub fn new() -> Self {
        let registry = Self {
            anime: seed::ANIME,
            comic: seed::COMIC,
            novel: seed::NOVEL,
            feeds: [
                seed::FEED_DOWNLOADS,
                seed::FEED_ANIME,
                seed::FEED_COMIC,
                seed::FEED_NOVEL,
            ],
        };

        // Data-authoring invariants. Violations are seed-table bugs, so
        // they only trip in debug/test builds.
        debug_assert!(registry.feeds.iter().all(Feed::is_aligned));
        debug_assert!(ids_unique(registry.anime));
        debug_assert!(ids_unique(registry.comic));
        debug_assert!(ids_unique(registry.novel));

        registry
    }

    /// Full collection for a resource kind, in authored (insertion) order.
    pub fn records(&self, kind: ResourceKind) -> &'static [CatalogRecord] {
        match kind {
            ResourceKind::Anime => self.anime,
            ResourceKind::Comic => self.comic,
            ResourceKind::Novel => self.novel,
        }
    }

    /// Find a record by id via linear scan.
    ///
    /// Ids are unique within a collection, so the first match is the only
    /// match. Returns `None` when no record carries `id`.
    pub fn by_id(&self, kind: ResourceKind, id: CatalogId) -> Option<&'static CatalogRecord> {
        self.records(kind).iter().find(|record| record.id == id)
    }

    /// The parallel (image URLs, titles) pair for a home-feed channel.
    pub fn feed(&self, kind: FeedKind) -> Feed {
        match kind {
            FeedKind::Downloads => self.feeds[0],
            FeedKind::Anime => self.feeds[1],
            FeedKind::Comic => self.feeds[2],
            FeedKind::Novel => self.feeds[3],
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn ids_unique(records: &[CatalogRecord]) -> bool {
    records
        .iter()
        .all(|a| records.iter().filter(|b| b.id == a.id).count() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_have_expected_sizes() {
        let registry = Registry::new();

        assert_eq!(registry.records(ResourceKind::Anime).len(), 18);
        assert_eq!(registry.records(ResourceKind::Comic).len(), 18);
        assert_eq!(registry.records(ResourceKind::Novel).len(), 18);
    }

    #[test]
    fn ids_are_unique_and_cover_one_to_eighteen() {
        let registry = Registry::new();

        for kind in [ResourceKind::Anime, ResourceKind::Comic, ResourceKind::Novel] {
            let records = registry.records(kind);
            let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids, (1..=18).collect::<Vec<_>>(), "kind {kind:?}");
        }
    }

    #[test]
    fn by_id_returns_the_matching_record() {
        let registry = Registry::new();

        for id in 1..=18 {
            let record = registry
                .by_id(ResourceKind::Anime, id)
                .expect("ids 1..=18 are all present");
            assert_eq!(record.id, id);
        }
    }

    #[test]
    fn by_id_misses_for_absent_ids() {
        let registry = Registry::new();

        assert!(registry.by_id(ResourceKind::Anime, 0).is_none());
        assert!(registry.by_id(ResourceKind::Anime, 19).is_none());
        assert!(registry.by_id(ResourceKind::Anime, u32::MAX).is_none());
    }

    #[test]
    fn feeds_are_aligned_pairs_of_seven() {
        let registry = Registry::new();

        for kind in [
            FeedKind::Downloads,
            FeedKind::Anime,
            FeedKind::Comic,
            FeedKind::Novel,
        ] {
            let feed = registry.feed(kind);
            assert!(feed.is_aligned(), "kind {kind:?}");
            assert_eq!(feed.len(), 7, "kind {kind:?}");
        }
    }

    #[test]
    fn lookups_do_not_disturb_collection_order() {
        let registry = Registry::new();

        let before: Vec<_> = registry.records(ResourceKind::Anime).to_vec();
        let _ = registry.by_id(ResourceKind::Anime, 7);
        let after: Vec<_> = registry.records(ResourceKind::Anime).to_vec();

        assert_eq!(before, after);
    }
}
