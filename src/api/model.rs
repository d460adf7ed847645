//! Catalog entities as returned by the remote API.
//!
//! Only the id is mandatory. Every other field decodes leniently so a
//! partially populated record never fails the whole page.

use serde::{Deserialize, Deserializer};

/// The kind of catalog entity an endpoint serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Anime,
    Character,
}

impl EntityKind {
    /// Path segment used by the API for this kind (`anime`, `characters`).
    pub fn path_segment(self) -> &'static str {
        match self {
            EntityKind::Anime => "anime",
            EntityKind::Character => "characters",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Anime => write!(f, "anime"),
            EntityKind::Character => write!(f, "character"),
        }
    }
}

/// Common surface of every catalog entity.
///
/// `display_name` is the sort key used by list controllers.
pub trait CatalogEntity: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    fn display_name(&self) -> &str;

    fn image_url(&self) -> Option<&str>;
}

/// Decodes an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One size family of an entity's artwork.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub jpg: Option<ImageSet>,
    #[serde(default)]
    pub webp: Option<ImageSet>,
}

impl Images {
    /// Preferred image URL: jpg first, webp as fallback.
    pub fn primary_url(&self) -> Option<&str> {
        [&self.jpg, &self.webp]
            .into_iter()
            .flatten()
            .find_map(|set| set.image_url.as_deref())
    }
}

/// Genre used as a list filter value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Genre {
    #[serde(rename = "mal_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Number of entries tagged with this genre (genre listing only).
    #[serde(default)]
    pub count: Option<u32>,
}

impl Genre {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            count: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Studio {
    pub mal_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Anime {
    pub mal_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Images,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub studios: Vec<Studio>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

impl Anime {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(mal_id: i64, title: impl Into<String>) -> Self {
        Self {
            mal_id,
            title: title.into(),
            media_type: None,
            episodes: None,
            score: None,
            images: Images::default(),
            synopsis: None,
            status: None,
            year: None,
            genres: Vec::new(),
            studios: Vec::new(),
            duration: None,
            rating: None,
        }
    }
}

impl CatalogEntity for Anime {
    const KIND: EntityKind = EntityKind::Anime;

    fn id(&self) -> i64 {
        self.mal_id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn image_url(&self) -> Option<&str> {
        self.images.primary_url()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Character {
    pub mal_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Images,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nicknames: Vec<String>,
    #[serde(default)]
    pub favorites: Option<u32>,
}

impl Character {
    pub fn new(mal_id: i64, name: impl Into<String>) -> Self {
        Self {
            mal_id,
            name: name.into(),
            images: Images::default(),
            about: None,
            nicknames: Vec::new(),
            favorites: None,
        }
    }
}

impl CatalogEntity for Character {
    const KIND: EntityKind = EntityKind::Character;

    fn id(&self) -> i64 {
        self.mal_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn image_url(&self) -> Option<&str> {
        self.images.primary_url()
    }
}
