//! Catalog sources.
//!
//! A source produces raw cards; the caller decides what to do when it
//! fails. `load_catalog_or` implements the usual policy: fall back on a
//! load error, surface a configuration error.

use tracing::{info, warn};

use super::card::Card;
use super::catalog::Catalog;
use crate::core::{TabooError, TabooResult};

/// Something that can produce the session's cards.
pub trait CatalogSource {
    /// Fetch the cards. Network or parse failures are `TabooError::Load`.
    fn load(&mut self) -> TabooResult<Vec<Card>>;
}

/// A fixed, in-memory list of cards.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    cards: Vec<Card>,
}

impl StaticSource {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl CatalogSource for StaticSource {
    fn load(&mut self) -> TabooResult<Vec<Card>> {
        Ok(self.cards.clone())
    }
}

/// Cards held as a JSON document, e.g. a fetched `cards.json`.
#[derive(Clone, Debug)]
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl CatalogSource for JsonSource {
    fn load(&mut self) -> TabooResult<Vec<Card>> {
        Ok(serde_json::from_str(&self.document)?)
    }
}

/// Load a catalog from `source`, using `fallback` if loading fails.
///
/// Cards that load but fail validation are a configuration error and are
/// returned as such rather than silently replaced.
pub fn load_catalog_or(source: &mut dyn CatalogSource, fallback: Catalog) -> TabooResult<Catalog> {
    match source.load() {
        Ok(cards) => {
            let catalog = Catalog::new(cards)?;
            info!(cards = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        Err(TabooError::Load { message }) => {
            warn!(%message, fallback_cards = fallback.len(), "catalog load failed, using fallback");
            Ok(fallback)
        }
        Err(other) => Err(other),
    }
}
