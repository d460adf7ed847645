//! Catalog API capability, its HTTP implementation and the wire model.

mod catalog;
mod error;
mod jikan;
mod model;

pub use catalog::CatalogApi;
pub use error::ApiError;
pub use jikan::JikanClient;
pub use model::{Anime, CatalogEntity, Character, EntityKind, Genre, ImageSet, Images, Studio};
