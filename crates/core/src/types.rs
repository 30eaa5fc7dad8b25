//! Catalog and feed wire types.
//!
//! Field names follow the front-end's JSON contract (camelCase), so these
//! serialize byte-for-byte like the responses the browsing site already
//! consumes.

use serde::{Serialize, Serializer};

/// Identifier of a catalog record within its collection.
///
/// Assigned at data-authoring time, unique per collection, never generated.
pub type CatalogId = u32;

/// A single listed work (anime / comic / novel).
///
/// All fields reference static seed data; records are never constructed at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Unique within the record's collection.
    pub id: CatalogId,
    /// Display title.
    pub name: &'static str,
    /// Absolute cover image URL. Opaque: never validated or fetched.
    pub picture_url: &'static str,
    /// Latest released episode/chapter number.
    pub latest_episode: u32,
    /// `YYYY-MM-DD` date string, stored as opaque text.
    pub latest_update: &'static str,
    /// Attribution (subtitle/translation team).
    pub subteam: &'static str,
}

/// A home-page update feed: cover image URLs paired positionally with
/// display names (index i of one list belongs to index i of the other).
///
/// Serializes as the two-element array `[urlList, nameList]` the front-end
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feed {
    pub images: &'static [&'static str],
    pub titles: &'static [&'static str],
}

impl Feed {
    /// Whether the two parallel lists line up. Seed data must keep this true.
    pub fn is_aligned(&self) -> bool {
        self.images.len() == self.titles.len()
    }

    /// Number of (image, title) pairs.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Serialize for Feed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.images, self.titles).serialize(serializer)
    }
}

/// The catalog collections the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Anime,
    Comic,
    Novel,
}

impl ResourceKind {
    /// Entity name as it appears in error payloads (`"Anime not found"`).
    pub fn entity_name(self) -> &'static str {
        match self {
            ResourceKind::Anime => "Anime",
            ResourceKind::Comic => "Comic",
            ResourceKind::Novel => "Novel",
        }
    }
}

/// The four home-feed channels, in route order (`update0`..`update3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// `update0`: site download updates.
    Downloads,
    /// `update1`: anime updates.
    Anime,
    /// `update2`: comic updates.
    Comic,
    /// `update3`: novel updates.
    Novel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_record_serializes_with_camel_case_keys() {
        let record = CatalogRecord {
            id: 1,
            name: "全职猎人",
            picture_url: "https://example.com/cover.webp",
            latest_episode: 10,
            latest_update: "2023-10-03",
            subteam: "XX字幕组",
        };

        let json = serde_json::to_value(record).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "全职猎人");
        assert_eq!(json["pictureUrl"], "https://example.com/cover.webp");
        assert_eq!(json["latestEpisode"], 10);
        assert_eq!(json["latestUpdate"], "2023-10-03");
        assert_eq!(json["subteam"], "XX字幕组");
    }

    #[test]
    fn feed_serializes_as_two_element_array() {
        let feed = Feed {
            images: &["http://example.com/a.jpg", "http://example.com/b.jpg"],
            titles: &["甲", "乙"],
        };

        let json = serde_json::to_value(feed).unwrap();

        let outer = json.as_array().expect("feed must serialize to an array");
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[0], serde_json::json!(feed.images));
        assert_eq!(outer[1], serde_json::json!(feed.titles));
    }

    #[test]
    fn entity_names_match_error_payload_wording() {
        assert_eq!(ResourceKind::Anime.entity_name(), "Anime");
        assert_eq!(ResourceKind::Comic.entity_name(), "Comic");
        assert_eq!(ResourceKind::Novel.entity_name(), "Novel");
    }
}
