//! Card system: card values, the catalog, and catalog sources.
//!
//! ## Key Types
//!
//! - `Card`: A target word plus its forbidden words
//! - `Catalog`: The immutable, validated card store for a session
//! - `CatalogSource`: Where cards come from (static list, JSON document)

pub mod card;
pub mod catalog;
pub mod defaults;
pub mod source;

pub use card::{Card, ForbiddenList, MAX_FORBIDDEN};
pub use catalog::Catalog;
pub use defaults::default_cards;
pub use source::{load_catalog_or, CatalogSource, JsonSource, StaticSource};
