pub mod carts;
pub mod categories;
pub mod orders;
pub mod products;
pub mod stats;
pub mod users;
