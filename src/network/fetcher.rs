//! Address fetching trait and error types.

use std::io;

use super::InterfaceSnapshot;
use thiserror::Error;

/// Error type for address fetching operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The matcher never produces these; they come only from the platform.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The OS enumeration call failed.
    #[error("Interface enumeration failed: {0}")]
    Io(#[source] io::Error),

    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

impl From<io::Error> for FetchError {
    fn from(error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                context: error.to_string(),
            }
        } else {
            Self::Io(error)
        }
    }
}

/// Trait for fetching the current interface snapshot.
///
/// # Design
///
/// - Enables dependency injection for testing with fixed snapshots
/// - Platform implementation provided in [`platform`](super::platform)
///
/// # Example
///
/// ```
/// use retrieve_ip::network::{AddressFetcher, AddressRecord, FetchError, InterfaceSnapshot};
///
/// struct OneInterface;
///
/// impl AddressFetcher for OneInterface {
///     fn fetch(&self) -> Result<InterfaceSnapshot, FetchError> {
///         let mut snapshot = InterfaceSnapshot::new();
///         snapshot.push("eth0", AddressRecord::from_address("10.0.0.5".parse().unwrap()));
///         Ok(snapshot)
///     }
/// }
///
/// assert_eq!(OneInterface.fetch().unwrap().len(), 1);
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Reads the interface snapshot as currently configured on this host.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when:
    /// - The platform enumeration call fails (`FetchError::Io`)
    /// - Insufficient permissions to access network information (`FetchError::PermissionDenied`)
    /// - Other platform-specific failures (`FetchError::Platform`)
    ///
    /// # Implementation Notes
    ///
    /// - Return ALL interfaces; selection is done by the caller
    /// - Record order within each interface should follow the platform
    fn fetch(&self) -> Result<InterfaceSnapshot, FetchError>;
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for &T {
    fn fetch(&self) -> Result<InterfaceSnapshot, FetchError> {
        (*self).fetch()
    }
}

impl<T: AddressFetcher + ?Sized> AddressFetcher for Box<T> {
    fn fetch(&self) -> Result<InterfaceSnapshot, FetchError> {
        self.as_ref().fetch()
    }
}

/// A fetcher that always returns the same snapshot.
///
/// Useful for embedding callers that already hold interface data, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    snapshot: InterfaceSnapshot,
}

impl StaticFetcher {
    /// Creates a fetcher returning `snapshot` on every call.
    #[must_use]
    pub const fn new(snapshot: InterfaceSnapshot) -> Self {
        Self { snapshot }
    }

    /// Returns the held snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &InterfaceSnapshot {
        &self.snapshot
    }
}

impl AddressFetcher for StaticFetcher {
    fn fetch(&self) -> Result<InterfaceSnapshot, FetchError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AddressRecord;

    fn eth0() -> InterfaceSnapshot {
        InterfaceSnapshot::new().with_interface(
            "eth0",
            [AddressRecord::from_address("10.0.0.5".parse().unwrap())],
        )
    }

    #[test]
    fn static_fetcher_returns_same_snapshot_every_call() {
        let fetcher = StaticFetcher::new(eth0());

        assert_eq!(fetcher.fetch().unwrap(), eth0());
        assert_eq!(fetcher.fetch().unwrap(), eth0());
        assert_eq!(fetcher.snapshot(), &eth0());
    }

    #[test]
    fn reference_and_box_forward_to_inner() {
        let fetcher = StaticFetcher::new(eth0());
        let by_ref = &fetcher;
        let boxed: Box<dyn AddressFetcher> = Box::new(fetcher.clone());

        assert_eq!(by_ref.fetch().unwrap(), eth0());
        assert_eq!(boxed.fetch().unwrap(), eth0());
    }

    #[test]
    fn io_permission_denied_maps_to_permission_variant() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "netlink socket refused");
        let error = FetchError::from(io);

        assert!(matches!(error, FetchError::PermissionDenied { .. }));
        assert!(error.to_string().contains("netlink socket refused"));
    }

    #[test]
    fn other_io_errors_keep_source() {
        let io = io::Error::other("getifaddrs failed");
        let error = FetchError::from(io);

        assert!(matches!(error, FetchError::Io(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
