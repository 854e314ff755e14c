//! Platform interface enumeration.
//!
//! This module provides the [`AddressFetcher`](super::AddressFetcher)
//! implementation backed by the operating system.
//!
//! # Platform Support
//!
//! Interfaces come from `pnet::datalink::interfaces`. Locality is the
//! interface's loopback flag (`IFF_LOOPBACK`), not a property of the address.
//!
//! - **Linux / macOS / BSD**: `getifaddrs`.
//! - **Windows**: requires the Npcap (or WinPcap) SDK at build time.

mod system;

pub use system::SystemFetcher;

// Re-export the platform fetcher as PlatformFetcher for convenience
pub use system::SystemFetcher as PlatformFetcher;
