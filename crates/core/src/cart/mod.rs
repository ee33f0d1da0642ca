//! Session cart.
//!
//! A [`Cart`] is an ordered set of catalog items a shopper intends to buy.
//! Items are unique digital goods, so every entry has quantity 1 and adding
//! an item that is already present changes nothing.
//!
//! # Observers
//!
//! Views that display cart aggregates subscribe with [`Cart::subscribe`].
//! Listeners run synchronously, in subscription order, after each mutation
//! that changed the cart and before the mutating call returns. Mutations that
//! leave the cart unchanged publish nothing.
//!
//! # Pricing
//!
//! Entries hold the `Arc<CatalogItem>` they were added with. If the catalog
//! is later rebuilt with different prices, existing entries keep the price
//! they were added at until removed and re-added.

mod observer;

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::CatalogItem;
use crate::types::{CurrencyCode, ItemId, Price, Slug};

pub use observer::{CartEvent, CartSummary, SubscriptionId};

use observer::Listeners;

/// One item held in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    item: Arc<CatalogItem>,
    quantity: u32,
}

impl CartEntry {
    /// Quantity of every entry; digital goods are never bought twice.
    pub const QUANTITY: u32 = 1;

    fn new(item: Arc<CatalogItem>) -> Self {
        Self {
            item,
            quantity: Self::QUANTITY,
        }
    }

    /// The catalog listing this entry refers to.
    #[must_use]
    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered, duplicate-free selection of catalog items.
#[derive(Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
    listeners: Listeners,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item at the end of the cart.
    ///
    /// Returns `false` without notifying observers if an item with the same
    /// ID is already present.
    pub fn add(&mut self, item: Arc<CatalogItem>) -> bool {
        if self.contains(item.id.as_str()) {
            return false;
        }

        let id = item.id.clone();
        self.entries.push(CartEntry::new(item));
        self.publish(&CartEvent::Added(id));
        true
    }

    /// Remove the entry for `item_id`.
    ///
    /// Returns `false` if no such entry exists; the cart is left untouched.
    pub fn remove(&mut self, item_id: &str) -> bool {
        let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.item.id.as_str() == item_id)
        else {
            return false;
        };

        let entry = self.entries.remove(position);
        self.publish(&CartEvent::Removed(entry.item.id.clone()));
        true
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.entries.clear();
        self.publish(&CartEvent::Cleared);
    }

    /// Whether an entry for `item_id` exists.
    #[must_use]
    pub fn contains(&self, item_id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.item.id.as_str() == item_id)
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    /// Sum of entry prices.
    ///
    /// An empty cart totals zero in the default currency; otherwise the
    /// currency of the first entry is used, since a validated catalog prices
    /// everything in one currency.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency_code = self
            .entries
            .first()
            .map_or_else(CurrencyCode::default, |entry| {
                entry.item.price.currency_code
            });

        self.entries
            .iter()
            .fold(Price::zero(currency_code), |mut total, entry| {
                total.amount += entry.item.price.amount * Decimal::from(entry.quantity);
                total
            })
    }

    /// Current aggregates.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// Serializable snapshot for display.
    #[must_use]
    pub fn view(&self) -> CartView {
        let total_price = self.total_price();
        CartView {
            entries: self.entries.iter().map(CartEntryView::from).collect(),
            total_items: self.total_items(),
            subtotal: total_price.display(),
            total_price,
        }
    }

    /// Register a listener called after every state-changing mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent, &CartSummary) + Send + Sync + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Drop a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn publish(&self, event: &CartEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let summary = self.summary();
        self.listeners.notify(event, &summary);
    }
}

impl PartialEq for Cart {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Cart {}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Display data for one cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntryView {
    pub item_id: ItemId,
    pub slug: Slug,
    pub name: String,
    pub short_description: String,
    pub thumbnail: String,
    pub price: Price,
    pub quantity: u32,
}

impl From<&CartEntry> for CartEntryView {
    fn from(entry: &CartEntry) -> Self {
        let item = entry.item();
        Self {
            item_id: item.id.clone(),
            slug: item.slug.clone(),
            name: item.name.clone(),
            short_description: item.short_description.clone(),
            thumbnail: item.thumbnail.clone(),
            price: item.price,
            quantity: entry.quantity(),
        }
    }
}

/// Display data for a whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub entries: Vec<CartEntryView>,
    pub total_items: usize,
    pub total_price: Price,
    /// `total_price` formatted for display, e.g. "$69.98".
    pub subtotal: String,
}

impl CartView {
    /// View of a cart that does not exist yet.
    #[must_use]
    pub fn empty() -> Self {
        Cart::new().view()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    fn usd(cents: i64) -> Price {
        Price::from_cents(cents, CurrencyCode::USD)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), usd(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_walkthrough() {
        let catalog = catalog();
        let car = catalog.shared("1").unwrap();
        let sword = catalog.shared("2").unwrap();
        let mut cart = Cart::new();

        assert!(cart.add(Arc::clone(&car)));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), usd(4999));
        assert!(cart.contains("1"));

        assert!(!cart.add(Arc::clone(&car)));
        assert_eq!(cart.total_items(), 1);

        assert!(cart.add(sword));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), usd(6998));

        assert!(cart.remove("1"));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price(), usd(1999));
        assert!(!cart.contains("1"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let catalog = catalog();
        let mut once = Cart::new();
        once.add(catalog.shared("4").unwrap());

        let mut twice = Cart::new();
        twice.add(catalog.shared("4").unwrap());
        twice.add(catalog.shared("4").unwrap());

        assert_eq!(once, twice);
        assert_eq!(twice.entries().first().unwrap().quantity(), 1);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for id in ["8", "3", "5"] {
            cart.add(catalog.shared(id).unwrap());
        }

        let order: Vec<&str> = cart
            .entries()
            .iter()
            .map(|entry| entry.item().id.as_str())
            .collect();
        assert_eq!(order, ["8", "3", "5"]);
    }

    #[test]
    fn test_remove_absent_leaves_cart_unchanged() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.shared("6").unwrap());

        let before = cart.view();
        assert!(!cart.remove("999"));
        assert_eq!(cart.view(), before);
    }

    #[test]
    fn test_clear_resets_totals() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for item in catalog.items() {
            cart.add(catalog.shared(item.id.as_str()).unwrap());
        }
        assert_eq!(cart.total_items(), catalog.len());

        cart.clear();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), usd(0));
    }

    #[test]
    fn test_total_keeps_cent_scale() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.total_price().amount.to_string(), "0.00");

        cart.add(catalog.shared("5").unwrap());
        assert_eq!(cart.total_price().amount.to_string(), "14.99");

        cart.clear();
        let json = serde_json::to_value(cart.summary()).unwrap();
        assert_eq!(json["total_price"]["amount"], "0.00");
    }

    #[test]
    fn test_total_price_matches_entries() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for id in ["2", "5", "7"] {
            cart.add(catalog.shared(id).unwrap());
        }

        let expected: Decimal = cart
            .entries()
            .iter()
            .map(|entry| entry.item().price.amount)
            .sum();
        assert_eq!(cart.total_price().amount, expected);
        assert_eq!(cart.total_price(), usd(6497));
    }

    #[test]
    fn test_listeners_see_completed_mutations() {
        let catalog = catalog();
        let seen: Arc<Mutex<Vec<(CartEvent, CartSummary)>>> = Arc::default();
        let mut cart = Cart::new();

        let sink = Arc::clone(&seen);
        cart.subscribe(move |event, summary| {
            sink.lock().unwrap().push((event.clone(), *summary));
        });

        cart.add(catalog.shared("1").unwrap());
        cart.add(catalog.shared("1").unwrap());
        cart.add(catalog.shared("2").unwrap());
        cart.remove("999");
        cart.remove("1");
        cart.clear();
        cart.clear();

        let seen = seen.lock().unwrap();
        let events: Vec<&CartEvent> = seen.iter().map(|(event, _)| event).collect();
        assert_eq!(
            events,
            [
                &CartEvent::Added(ItemId::new("1")),
                &CartEvent::Added(ItemId::new("2")),
                &CartEvent::Removed(ItemId::new("1")),
                &CartEvent::Cleared,
            ]
        );

        let totals: Vec<usize> = seen.iter().map(|(_, summary)| summary.total_items).collect();
        assert_eq!(totals, [1, 2, 1, 0]);
        assert_eq!(seen.get(1).unwrap().1.total_price, usd(6998));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let catalog = catalog();
        let calls = Arc::new(Mutex::new(0_u32));
        let mut cart = Cart::new();

        let counter = Arc::clone(&calls);
        let id = cart.subscribe(move |_, _| *counter.lock().unwrap() += 1);

        cart.add(catalog.shared("3").unwrap());
        assert!(cart.unsubscribe(id));
        assert!(!cart.unsubscribe(id));
        cart.add(catalog.shared("4").unwrap());

        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_entry_keeps_price_it_was_added_at() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.shared("1").unwrap());

        let mut data = catalog.to_data();
        data.items.first_mut().unwrap().price = usd(100);
        let repriced = Catalog::from_data(data).unwrap();

        assert_eq!(repriced.find_by_id("1").unwrap().price, usd(100));
        assert_eq!(cart.total_price(), usd(4999));
    }

    #[test]
    fn test_view() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(catalog.shared("1").unwrap());
        cart.add(catalog.shared("2").unwrap());

        let view = cart.view();
        assert_eq!(view.total_items, 2);
        assert_eq!(view.subtotal, "$69.98");
        assert_eq!(view.entries.first().unwrap().slug, Slug::new("cyber-sports-car"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["total_price"]["amount"], "69.98");
        assert_eq!(json["entries"][1]["quantity"], 1);

        assert_eq!(CartView::empty().subtotal, "$0.00");
    }
}
