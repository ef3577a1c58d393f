//! Shopping cart: the store, its persistence and shopper-facing limits.

pub mod limits;
pub mod persistence;
pub mod store;

pub use limits::{LimitError, check_add, check_selection, check_set_quantity};
pub use persistence::{CartPersistence, CartSlot, FileSlot, MemorySlot, PersistenceError};
pub use store::{CartStore, SubscriptionId};
