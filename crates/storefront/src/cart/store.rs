//! The cart store.
//!
//! [`CartStore`] owns the canonical cart snapshot. It is created once by the
//! application root and handed to whatever drives it; there is no global cart.
//!
//! Every mutation runs to completion before returning:
//! 1. the in-memory snapshot is updated
//! 2. the new snapshot is written through [`CartPersistence`] (best effort)
//! 3. every subscriber is called with the new snapshot, in registration order
//!
//! The store takes `&mut self` for mutations and does no locking of its own.
//! Hosts with more than one thread must hold it behind a single-writer lock.

use std::fmt;
use std::num::NonZeroU32;

use hobnail_core::aggregate;
use hobnail_core::{CartEntry, CartTotals, Price, Product, ProductId, Selection};
use tracing::{debug, info};

use super::persistence::{CartPersistence, CartSlot};

type Subscriber = Box<dyn Fn(&[CartEntry]) + Send + Sync>;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// The authoritative in-memory cart.
pub struct CartStore {
    entries: Vec<CartEntry>,
    persistence: CartPersistence,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Open the store, loading whatever was saved in `slot`.
    ///
    /// A missing or corrupted saved cart opens as an empty cart.
    #[must_use]
    pub fn open(slot: impl CartSlot + 'static) -> Self {
        let persistence = CartPersistence::new(slot);
        let entries = persistence.load();
        info!(entries = entries.len(), "Cart loaded");

        Self {
            entries,
            persistence,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current entries in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Entry for `product_id`, if it is in the cart.
    #[must_use]
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Quantity of `product_id` in the cart, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.entry(product_id).map_or(0, |e| e.quantity.get())
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_entries(&self.entries)
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        aggregate::total_items(&self.entries)
    }

    #[must_use]
    pub fn total_price(&self) -> Price {
        aggregate::total_price(&self.entries)
    }

    #[must_use]
    pub fn original_total_price(&self) -> Price {
        aggregate::original_total_price(&self.entries)
    }

    #[must_use]
    pub fn total_discount(&self) -> Price {
        aggregate::total_discount(&self.entries)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity is increased and
    /// the captured price and options are left untouched. Otherwise a new
    /// entry is appended, capturing the current price and `selection`.
    ///
    /// A quantity of zero is a no-op: nothing is saved or published. Stock
    /// limits are not checked here; callers enforce them.
    pub fn add(&mut self, product: &Product, quantity: u32, selection: Selection) {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            debug!(product_id = %product.id, "Ignoring add with zero quantity");
            return;
        };

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product.id) {
            entry.quantity = entry.quantity.saturating_add(quantity.get());
            debug!(product_id = %product.id, quantity = entry.quantity.get(), "Merged into cart entry");
        } else {
            self.entries
                .push(CartEntry::capture(product, quantity, selection));
            debug!(product_id = %product.id, quantity = quantity.get(), "Added cart entry");
        }

        self.commit();
    }

    /// Remove the entry for `product_id`. Absent ids are ignored.
    pub fn remove(&mut self, product_id: ProductId) {
        let before = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        if self.entries.len() != before {
            debug!(product_id = %product_id, "Removed cart entry");
        }
        self.commit();
    }

    /// Set the quantity of `product_id` in place.
    ///
    /// Zero behaves exactly like [`Self::remove`]. Absent ids are ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove(product_id);
            return;
        };

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            entry.quantity = quantity;
            debug!(product_id = %product_id, quantity = quantity.get(), "Updated cart quantity");
        }

        self.commit();
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("Cleared cart");
        self.commit();
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Call `subscriber` with the new snapshot after every mutation.
    ///
    /// Subscribers run synchronously, before the mutating call returns.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&[CartEntry]) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Stop notifying a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn commit(&self) {
        self.persistence.save(&self.entries);
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.entries);
        }
    }
}
