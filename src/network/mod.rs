//! Network layer for reading and selecting interface addresses.
//!
//! This module provides types and traits for:
//! - Representing interface snapshots ([`InterfaceSnapshot`], [`AddressRecord`])
//! - Address family classification ([`AddressFamily`])
//! - Fetching interface information ([`AddressFetcher`])
//! - Selecting addresses by family, name, and locality ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod fetcher;
pub mod filter;
pub mod platform;
mod snapshot;

#[cfg(test)]
mod filter_tests;

pub use fetcher::{AddressFetcher, FetchError, StaticFetcher};
pub use snapshot::{
    AddressFamily, AddressRecord, InterfaceEntry, InterfaceSnapshot, ParseFamilyError,
};
