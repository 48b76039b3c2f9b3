pub mod admins;
pub mod auth;
pub mod initialization;
pub mod tracing;
