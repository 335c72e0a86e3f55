pub mod body;
pub mod config;
pub mod error;
pub mod expiry;
pub mod handler;
pub mod id;
pub mod model;
pub mod response;
pub mod store;
