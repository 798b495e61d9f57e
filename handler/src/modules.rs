pub mod core;
pub mod roles;
