//! Homepage - a personal profile page
//!
//! Serves a single page with the owner's profile and their most recent posts,
//! aggregated on every request from a handful of RSS/Atom feeds.

pub mod config;
pub mod entry;
pub mod fetcher;
pub mod page;
pub mod routes;
