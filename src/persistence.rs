//! Persistence
//!
//! Write-through adapter between the in-memory cart, order log and menu and a
//! [`KeyValueStore`]. Reads never fail: missing or corrupt values fall back to an empty
//! state. Writes are best effort: failures are logged and the in-memory state stays
//! authoritative.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartChange, CartSnapshot},
    catalog::Catalog,
    orders::OrderLog,
    storage::KeyValueStore,
};

/// Key holding the cart snapshot.
pub const CART_KEY: &str = "pizzaCart";

/// Key holding the order history.
pub const ORDERS_KEY: &str = "pizzaOrders";

/// Key holding the menu once a pizza has been added to it.
pub const MENU_KEY: &str = "pizzaMenu";

/// Restore the cart, or an empty cart if nothing usable is stored.
pub fn load_cart(store: &impl KeyValueStore) -> Cart {
    read_json::<CartSnapshot>(store, CART_KEY)
        .map(Cart::from)
        .unwrap_or_default()
}

/// Persist the cart according to what the last mutation did.
///
/// Returns whether the store now reflects the cart.
pub fn sync_cart(store: &mut impl KeyValueStore, cart: &Cart, change: CartChange) -> bool {
    match change {
        CartChange::Updated => write_json(store, CART_KEY, &CartSnapshot::from(cart)),
        CartChange::Cleared => erase(store, CART_KEY),
        CartChange::Unchanged => true,
    }
}

/// Restore the order history, or an empty one if nothing usable is stored.
pub fn load_orders(store: &impl KeyValueStore) -> OrderLog {
    read_json(store, ORDERS_KEY).unwrap_or_default()
}

/// Persist the full order history.
pub fn save_orders(store: &mut impl KeyValueStore, orders: &OrderLog) -> bool {
    write_json(store, ORDERS_KEY, orders)
}

/// Restore the menu, or `None` if it has never been customised.
pub fn load_catalog(store: &impl KeyValueStore) -> Option<Catalog> {
    read_json(store, MENU_KEY)
}

/// Persist the full menu.
pub fn save_catalog(store: &mut impl KeyValueStore, catalog: &Catalog) -> bool {
    write_json(store, MENU_KEY, catalog)
}

fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            warn!(key, %error, "failed to read stored state; starting empty");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, %error, "stored state is malformed; starting empty");
            None
        }
    }
}

fn write_json<T: Serialize>(store: &mut impl KeyValueStore, key: &str, value: &T) -> bool {
    let serialized = match serde_json::to_string(value) {
        Ok(serialized) => serialized,
        Err(error) => {
            warn!(key, %error, "failed to serialize state");
            return false;
        }
    };

    match store.set(key, &serialized) {
        Ok(()) => {
            debug!(key, bytes = serialized.len(), "saved state");
            true
        }
        Err(error) => {
            warn!(key, %error, "failed to save state");
            false
        }
    }
}

fn erase(store: &mut impl KeyValueStore, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => {
            debug!(key, "erased state");
            true
        }
        Err(error) => {
            warn!(key, %error, "failed to erase state");
            false
        }
    }
}
