//! Cart change notifications.

use serde::Serialize;

use crate::types::{ItemId, Price};

/// A state change that was applied to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "item_id", rename_all = "snake_case")]
pub enum CartEvent {
    Added(ItemId),
    Removed(ItemId),
    Cleared,
}

/// Cart aggregates after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub total_items: usize,
    pub total_price: Price,
}

/// Handle returned by [`Cart::subscribe`](super::Cart::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(super) type Listener = Box<dyn Fn(&CartEvent, &CartSummary) + Send + Sync>;

#[derive(Default)]
pub(super) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(super) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(super) fn notify(&self, event: &CartEvent, summary: &CartSummary) {
        for (_, listener) in &self.entries {
            listener(event, summary);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
