//! retrieve-ip: local interface address queries.
//!
//! Reads the host's network interfaces once and returns the addresses
//! matching an address family, interface name, and locality rule.

pub mod config;
pub mod network;
mod query;

pub use network::filter::{MatchCount, SelectionCriteria, Selector};
pub use query::{query, query_with};
