//! Public query entry points.
//!
//! [`query`] reads the host's interfaces once and selects addresses;
//! [`query_with`] does the same against any [`AddressFetcher`].

use crate::network::filter::{Matcher, SelectionCriteria};
use crate::network::platform::PlatformFetcher;
use crate::network::{AddressFetcher, FetchError};

/// Reads the host's interfaces and returns the matching addresses.
///
/// Each call performs one fresh OS enumeration; nothing is cached.
///
/// # Errors
///
/// Returns the [`FetchError`] reported by the platform, unmodified.
///
/// # Example
///
/// ```no_run
/// use retrieve_ip::network::AddressFamily;
/// use retrieve_ip::{SelectionCriteria, query};
///
/// let criteria = SelectionCriteria::new().with_family(AddressFamily::V4);
/// let addresses = query(&criteria)?;
/// println!("{addresses:?}");
/// # Ok::<(), retrieve_ip::network::FetchError>(())
/// ```
pub fn query(criteria: &SelectionCriteria) -> Result<Vec<String>, FetchError> {
    query_with(&PlatformFetcher::new(), criteria)
}

/// Fetches a snapshot from `fetcher` and returns the matching addresses.
///
/// # Errors
///
/// Returns the [`FetchError`] reported by `fetcher`, unmodified.
pub fn query_with<F: AddressFetcher + ?Sized>(
    fetcher: &F,
    criteria: &SelectionCriteria,
) -> Result<Vec<String>, FetchError> {
    let snapshot = fetcher.fetch()?;
    Ok(Matcher::new(criteria).select(&snapshot))
}
