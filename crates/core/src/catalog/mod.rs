//! Immutable product catalog.
//!
//! A [`Catalog`] is built once at startup from a [`CatalogData`] (the
//! built-in launch catalog, or a file loaded by the CLI or storefront) and
//! validated up front: duplicate keys are authoring defects and fail
//! construction rather than surfacing as ambiguous lookups later.
//!
//! Every query is a pure read. A missing item or an unknown category is an
//! ordinary outcome and is returned as `None` or an empty listing.

mod item;
mod seed;
mod sort;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CategoryId, CurrencyCode, ItemId, Slug};

pub use item::{CatalogItem, Category, Preview, TechDetails};
pub use sort::{SortOrder, UnknownSortOrder};

/// Catalog authoring defects detected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate item id '{0}'")]
    DuplicateItemId(ItemId),
    #[error("duplicate slug '{0}'")]
    DuplicateSlug(Slug),
    #[error("duplicate category id '{0}'")]
    DuplicateCategory(CategoryId),
    #[error("item '{0}' has a negative price")]
    NegativePrice(ItemId),
    #[error("item '{0}' has no thumbnail")]
    MissingThumbnail(ItemId),
    #[error("item '{item}' is priced in {found}, catalog uses {expected}")]
    CurrencyMismatch {
        item: ItemId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

/// Serializable form of a catalog, as authored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub categories: Vec<Category>,
    pub items: Vec<CatalogItem>,
}

/// Validated, indexed catalog.
///
/// Items are held behind `Arc` so carts can keep a shared reference to the
/// listing they were built from without copying it.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Arc<CatalogItem>>,
    by_id: HashMap<ItemId, usize>,
    by_slug: HashMap<Slug, usize>,
}

impl Catalog {
    /// Build a catalog, validating key uniqueness and prices.
    ///
    /// Category references on items are not checked; an item pointing at an
    /// unknown category simply never appears in a category listing.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in declaration order.
    pub fn new(categories: Vec<Category>, items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        validate_categories(&categories)?;

        let currency = items
            .first()
            .map_or_else(CurrencyCode::default, |item| item.price.currency_code);
        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_slug = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateItemId(item.id.clone()));
            }
            if by_slug.insert(item.slug.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSlug(item.slug.clone()));
            }
            if item.price.is_negative() {
                return Err(CatalogError::NegativePrice(item.id.clone()));
            }
            if item.price.currency_code != currency {
                return Err(CatalogError::CurrencyMismatch {
                    item: item.id.clone(),
                    expected: currency,
                    found: item.price.currency_code,
                });
            }
            if item.thumbnail.trim().is_empty() {
                return Err(CatalogError::MissingThumbnail(item.id.clone()));
            }
        }

        Ok(Self {
            categories,
            items: items.into_iter().map(Arc::new).collect(),
            by_id,
            by_slug,
        })
    }

    /// Build a catalog from its serialized form.
    ///
    /// # Errors
    ///
    /// See [`Catalog::new`].
    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        Self::new(data.categories, data.items)
    }

    /// The catalog the store launches with.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in listings are edited into an invalid state.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_data(seed::launch_catalog())
    }

    /// Export the catalog back to its serialized form.
    #[must_use]
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            categories: self.categories.clone(),
            items: self.items.iter().map(|item| (**item).clone()).collect(),
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in catalog order.
    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().map(|item| &**item)
    }

    /// Look up an item by its primary key.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&CatalogItem> {
        self.position_of(id)
            .and_then(|position| self.items.get(position))
            .map(|item| &**item)
    }

    /// Look up an item by its URL slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&CatalogItem> {
        self.by_slug
            .get(slug)
            .and_then(|&position| self.items.get(position))
            .map(|item| &**item)
    }

    /// Shared handle to an item, for holding in a cart.
    #[must_use]
    pub fn shared(&self, id: &str) -> Option<Arc<CatalogItem>> {
        self.position_of(id)
            .and_then(|position| self.items.get(position))
            .cloned()
    }

    /// Items in a category, catalog order. Empty for unknown categories.
    #[must_use]
    pub fn list_by_category(&self, category_id: &str) -> Vec<&CatalogItem> {
        self.items()
            .filter(|item| item.category.as_str() == category_id)
            .collect()
    }

    /// Items flagged as featured, catalog order.
    #[must_use]
    pub fn list_featured(&self) -> Vec<&CatalogItem> {
        self.items().filter(|item| item.featured).collect()
    }

    /// Items flagged as new, catalog order.
    #[must_use]
    pub fn list_new(&self) -> Vec<&CatalogItem> {
        self.items().filter(|item| item.new).collect()
    }

    /// All categories, declaration order.
    #[must_use]
    pub fn list_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by ID.
    #[must_use]
    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id.as_str() == id)
    }

    /// Each category paired with the number of items it holds.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|category| {
                let count = self
                    .items()
                    .filter(|item| item.category == category.id)
                    .count();
                (category, count)
            })
            .collect()
    }

    /// Store listing: optional category filter, then sort.
    ///
    /// Price sorts are stable, so equally priced items keep catalog order.
    #[must_use]
    pub fn browse(&self, category: Option<&str>, sort: SortOrder) -> Vec<&CatalogItem> {
        let mut listing: Vec<&CatalogItem> = match category {
            Some(category_id) => self.list_by_category(category_id),
            None => self.items().collect(),
        };

        match sort {
            SortOrder::Newest => {}
            SortOrder::PriceLowToHigh => {
                listing.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            SortOrder::PriceHighToLow => {
                listing.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
        }

        listing
    }

    /// Other items from the same category, catalog order, at most `limit`.
    #[must_use]
    pub fn related(&self, item: &CatalogItem, limit: usize) -> Vec<&CatalogItem> {
        self.items()
            .filter(|other| other.category == item.category && other.id != item.id)
            .take(limit)
            .collect()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }
}

fn validate_categories(categories: &[Category]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(categories.len());
    for category in categories {
        if !seen.insert(category.id.as_str()) {
            return Err(CatalogError::DuplicateCategory(category.id.clone()));
        }
    }
    Ok(())
}
