//! Pizzeria prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartChange, CartLine, CartSnapshot, LineId, NewCartLine},
    catalog::{Catalog, CatalogError, MenuQuery, NewProduct, SortOrder},
    orders::{Order, OrderLog, OrderStats},
    pricing::{BulkDiscount, Totals},
    products::{Category, Product},
    receipt::ReceiptError,
    session::{Confirmation, Session, SessionError},
    sizes::Size,
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
};
