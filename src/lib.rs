//! Occupancy tracking for a small venue: a server that owns the head count
//! and a watcher that polls it onto a terminal panel.

pub mod config;
pub mod occupancy;
pub mod panel;
pub mod poll;
pub mod routes;
pub mod store;
