//! Session
//!
//! The composing application object. A session owns one cart, one order history, one menu
//! and the store they persist into, and turns user actions into ledger operations followed
//! by a write-through to storage.

use std::{num::NonZeroU32, time::Duration};

use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    cart::{Cart, CartChange, CartLine, LineId, NewCartLine},
    catalog::{Catalog, CatalogError, NewProduct},
    orders::{Order, OrderLog},
    persistence,
    products::Product,
    sizes::Size,
    storage::KeyValueStore,
};

/// How long the order confirmation stays up before dismissing itself.
pub const CONFIRMATION_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// No pizza with this id is on the menu.
    #[error("Pizza {0} is not on the menu")]
    UnknownPizza(String),

    /// Menu loading or validation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    /// The order that was placed.
    pub order: Order,

    /// When the confirmation should be dismissed.
    pub dismiss_after: Duration,
}

/// A user's cart, order history and menu bound to a store.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    catalog: Catalog,
    cart: Cart,
    orders: OrderLog,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore a session from `store`, falling back to the seed menu and an empty cart and
    /// history for anything not stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the seed menu cannot be parsed.
    pub fn open(store: S) -> Result<Self, SessionError> {
        let catalog = persistence::load_catalog(&store).map_or_else(Catalog::seed, Ok)?;

        let cart = persistence::load_cart(&store);
        let orders = persistence::load_orders(&store);

        info!(
            products = catalog.len(),
            cart_lines = cart.len(),
            orders = orders.len(),
            "opened session"
        );

        Ok(Self {
            store,
            catalog,
            cart,
            orders,
        })
    }

    /// Add `quantity` of a menu pizza in `size` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPizza`] if the pizza is not on the menu.
    #[instrument(skip(self))]
    pub fn add_to_cart(
        &mut self,
        pizza_id: &str,
        size: Size,
        quantity: NonZeroU32,
    ) -> Result<&CartLine, SessionError> {
        let product = self
            .catalog
            .get(pizza_id)
            .ok_or_else(|| SessionError::UnknownPizza(pizza_id.to_string()))?;

        let request = NewCartLine {
            pizza_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price_for(size),
            quantity,
            size,
            image_url: product.image_url.clone(),
        };

        let change = self.cart.add_line(request);
        self.persist_cart(change);

        let id = LineId::new(pizza_id, size);

        let Some(line) = self.cart.get(&id) else {
            unreachable!("line {id} was just added to the cart")
        };

        Ok(line)
    }

    /// Change a line's quantity; values below one are clamped to one.
    pub fn update_quantity(&mut self, id: &LineId, quantity: i64) -> CartChange {
        let change = self.cart.set_quantity(id, quantity);
        self.persist_cart(change);

        change
    }

    /// Remove a line from the cart.
    pub fn remove_from_cart(&mut self, id: &LineId) -> CartChange {
        let change = self.cart.remove_line(id);
        self.persist_cart(change);

        change
    }

    /// Place an order for the cart contents and empty the cart.
    ///
    /// Returns `None`, leaving everything untouched, if the cart is empty.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Option<Confirmation> {
        let order = self.orders.record_order(&self.cart)?.clone();

        persistence::save_orders(&mut self.store, &self.orders);

        let change = self.cart.clear();
        self.persist_cart(change);

        info!(order = %order.id(), total = %order.total(), "checked out");

        Some(Confirmation {
            order,
            dismiss_after: CONFIRMATION_DISMISS_AFTER,
        })
    }

    /// Validate and append a pizza to the menu.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] if the product fails validation.
    pub fn add_pizza(&mut self, new_product: NewProduct) -> Result<&Product, SessionError> {
        let id = self.catalog.add(new_product)?.id.clone();

        persistence::save_catalog(&mut self.store, &self.catalog);

        let Some(product) = self.catalog.get(&id) else {
            unreachable!("product {id} was just added to the menu")
        };

        Ok(product)
    }

    fn persist_cart(&mut self, change: CartChange) {
        persistence::sync_cart(&mut self.store, &self.cart, change);
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The order history.
    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    /// The menu.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the backing store back.
    pub fn into_store(self) -> S {
        self.store
    }
}
