//! OS interface enumeration using `pnet` datalink.

use std::net::IpAddr;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use crate::network::{AddressFetcher, AddressRecord, FetchError, InterfaceSnapshot};

/// [`AddressFetcher`] reading the host's interfaces with one OS call.
///
/// Every address on an interface carrying the OS loopback flag is internal,
/// whatever the address itself looks like.
///
/// # Example
///
/// ```no_run
/// use retrieve_ip::network::{AddressFetcher, platform::SystemFetcher};
///
/// let snapshot = SystemFetcher::new().fetch().expect("Failed to enumerate interfaces");
///
/// for entry in &snapshot {
///     println!("{}: {} address(es)", entry.name, entry.records.len());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new system fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn fetch(&self) -> Result<InterfaceSnapshot, FetchError> {
        let snapshot = group_interfaces(datalink::interfaces().into_iter().map(RawInterface::from));

        tracing::debug!(
            "Enumerated {} interface(s) with {} address(es)",
            snapshot.len(),
            snapshot.address_count()
        );

        Ok(snapshot)
    }
}

/// The parts of an OS interface the snapshot needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawInterface {
    name: String,
    loopback: bool,
    addresses: Vec<IpAddr>,
}

impl From<NetworkInterface> for RawInterface {
    fn from(iface: NetworkInterface) -> Self {
        Self {
            loopback: iface.is_loopback(),
            addresses: iface.ips.iter().map(IpNetwork::ip).collect(),
            name: iface.name,
        }
    }
}

/// Flattens interfaces into a snapshot, keeping OS order.
///
/// Interfaces without addresses do not appear.
fn group_interfaces(interfaces: impl IntoIterator<Item = RawInterface>) -> InterfaceSnapshot {
    interfaces
        .into_iter()
        .flat_map(|iface| {
            let RawInterface {
                name,
                loopback,
                addresses,
            } = iface;
            addresses
                .into_iter()
                .map(move |address| (name.clone(), AddressRecord::new(address, loopback)))
        })
        .collect()
}
