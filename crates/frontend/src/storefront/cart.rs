//! Client-side cart state.
//!
//! One `CartService` owns the reactive line list; every mutation goes through
//! it, persists to localStorage and, for a logged-in shopper, re-pushes the
//! cart to the server mirror. Anonymous carts live only in the browser.

use contracts::cart::CartItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::storefront::api as store_api;
use crate::system::auth::storage;

const CART_STORAGE_KEY: &str = "shoppingCart";

/// One cart line with the product fields needed for display, snapshotted at
/// add time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: i32,
}

// Pure mutation rules, shared by the service and its tests.

/// Add a line, or bump the quantity when the product is already there.
pub fn add_line(lines: &mut Vec<CartEntry>, entry: CartEntry) {
    if let Some(existing) = lines.iter_mut().find(|l| l.id == entry.id) {
        existing.quantity += 1;
    } else {
        lines.push(CartEntry {
            quantity: 1,
            ..entry
        });
    }
}

/// Change a line's quantity by `delta`; dropping to zero or below removes the
/// line entirely, so a present line never has quantity < 1.
pub fn apply_quantity_change(lines: &mut Vec<CartEntry>, id: i32, delta: i32) {
    let mut drop_line = false;
    if let Some(line) = lines.iter_mut().find(|l| l.id == id) {
        line.quantity += delta;
        drop_line = line.quantity <= 0;
    }
    if drop_line {
        lines.retain(|l| l.id != id);
    }
}

pub fn remove_line(lines: &mut Vec<CartEntry>, id: i32) {
    lines.retain(|l| l.id != id);
}

pub fn cart_total(lines: &[CartEntry]) -> f64 {
    lines.iter().map(|l| l.price * l.quantity as f64).sum()
}

pub fn item_count(lines: &[CartEntry]) -> i32 {
    lines.iter().map(|l| l.quantity).sum()
}

#[derive(Clone, Copy)]
pub struct CartService {
    pub lines: RwSignal<Vec<CartEntry>>,
}

impl CartService {
    /// Fresh service with the persisted cart loaded back in.
    pub fn new() -> Self {
        Self {
            lines: RwSignal::new(load_from_storage()),
        }
    }

    pub fn add(&self, entry: CartEntry) {
        self.lines.update(|lines| add_line(lines, entry));
        self.after_mutation();
    }

    pub fn change_quantity(&self, id: i32, delta: i32) {
        self.lines
            .update(|lines| apply_quantity_change(lines, id, delta));
        self.after_mutation();
    }

    pub fn remove(&self, id: i32) {
        self.lines.update(|lines| remove_line(lines, id));
        self.after_mutation();
    }

    pub fn clear(&self) {
        self.lines.set(Vec::new());
        self.after_mutation();
    }

    pub fn total(&self) -> f64 {
        cart_total(&self.lines.get())
    }

    pub fn count(&self) -> i32 {
        item_count(&self.lines.get())
    }

    /// Replace the whole cart (used when adopting the server copy at login).
    pub fn replace(&self, entries: Vec<CartEntry>) {
        self.lines.set(entries);
        save_to_storage(&self.lines.get_untracked());
    }

    /// Push the current lines to the server cart of the logged-in shopper.
    pub fn sync_to_server(&self) {
        let Some(token) = storage::get_user_token() else {
            return;
        };
        let items: Vec<CartItem> = self
            .lines
            .get_untracked()
            .iter()
            .map(|l| CartItem {
                product_id: l.id,
                quantity: l.quantity,
            })
            .collect();
        spawn_local(async move {
            if let Err(e) = store_api::save_server_cart(&token, &items).await {
                log::warn!("cart sync failed: {}", e);
            }
        });
    }

    fn after_mutation(&self) {
        save_to_storage(&self.lines.get_untracked());
        self.sync_to_server();
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartService {
    use_context::<CartService>().expect("CartService not found in context")
}

fn load_from_storage() -> Vec<CartEntry> {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return Vec::new();
    };
    storage
        .get_item(CART_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

fn save_to_storage(lines: &[CartEntry]) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if let Ok(json) = serde_json::to_string(lines) {
        let _ = storage.set_item(CART_STORAGE_KEY, &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i32, price: f64) -> CartEntry {
        CartEntry {
            id,
            name: format!("Produto {}", id),
            price,
            image: String::new(),
            quantity: 1,
        }
    }

    #[test]
    fn adding_twice_bumps_quantity_instead_of_duplicating() {
        let mut lines = Vec::new();
        add_line(&mut lines, entry(1, 10.0));
        add_line(&mut lines, entry(1, 10.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn decrement_at_quantity_one_removes_the_line() {
        let mut lines = Vec::new();
        add_line(&mut lines, entry(1, 10.0));
        apply_quantity_change(&mut lines, 1, -1);
        assert!(lines.is_empty());
    }

    #[test]
    fn quantity_never_drops_below_one_while_present() {
        let mut lines = Vec::new();
        add_line(&mut lines, entry(1, 10.0));
        add_line(&mut lines, entry(1, 10.0));
        apply_quantity_change(&mut lines, 1, -1);
        assert_eq!(lines[0].quantity, 1);
        apply_quantity_change(&mut lines, 1, -1);
        assert!(lines.is_empty());
    }

    #[test]
    fn totals_and_counts_follow_quantities() {
        let mut lines = Vec::new();
        add_line(&mut lines, entry(1, 10.0));
        add_line(&mut lines, entry(2, 5.5));
        apply_quantity_change(&mut lines, 2, 2);
        assert_eq!(item_count(&lines), 4);
        assert!((cart_total(&lines) - 26.5).abs() < 1e-9);
    }

    #[test]
    fn changing_an_absent_line_is_a_no_op() {
        let mut lines = vec![entry(1, 10.0)];
        apply_quantity_change(&mut lines, 99, -1);
        remove_line(&mut lines, 99);
        assert_eq!(lines.len(), 1);
    }
}
