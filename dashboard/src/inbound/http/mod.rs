//! HTTP inbound adapter serving the dashboard pages and probes.

pub mod cache_control;
pub mod health;
pub mod state;
pub mod users;
pub mod views;
