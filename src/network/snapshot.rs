//! Core network types for interface snapshots.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family of a single interface address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    /// IPv4 address.
    V4,
    /// IPv6 address.
    V6,
}

impl AddressFamily {
    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// Error returned when a string does not name an address family.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown address family '{0}'")]
pub struct ParseFamilyError(pub String);

impl FromStr for AddressFamily {
    type Err = ParseFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ipv4" | "v4" | "4" => Ok(Self::V4),
            "ipv6" | "v6" | "6" => Ok(Self::V6),
            _ => Err(ParseFamilyError(s.to_string())),
        }
    }
}

/// One address bound to one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// The bound address.
    pub address: IpAddr,
    /// Family of `address`.
    pub family: AddressFamily,
    /// True for loopback/host-local addresses such as `127.0.0.1` or `::1`.
    pub is_internal: bool,
}

impl AddressRecord {
    /// Creates a record, deriving the family from the address.
    #[must_use]
    pub const fn new(address: IpAddr, is_internal: bool) -> Self {
        Self {
            address,
            family: AddressFamily::of(&address),
            is_internal,
        }
    }

    /// Creates a record with the internal flag taken from the address itself.
    ///
    /// Used when the platform does not report locality separately.
    #[must_use]
    pub const fn from_address(address: IpAddr) -> Self {
        Self::new(address, address.is_loopback())
    }
}

/// The addresses of one named interface, in platform order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceEntry {
    /// The interface name (e.g., "eth0", "lo").
    pub name: String,
    /// Records bound to this interface.
    pub records: Vec<AddressRecord>,
}

/// Mapping of interface name to its address records, read once from the OS.
///
/// Iteration follows insertion order. Names are unique: inserting a record
/// for a name already present appends to that interface.
///
/// # Examples
///
/// ```
/// use retrieve_ip::network::{AddressRecord, InterfaceSnapshot};
///
/// let mut snapshot = InterfaceSnapshot::new();
/// snapshot.push("eth0", AddressRecord::from_address("10.0.0.5".parse().unwrap()));
/// snapshot.push("lo", AddressRecord::from_address("127.0.0.1".parse().unwrap()));
/// snapshot.push("eth0", AddressRecord::from_address("fe80::1".parse().unwrap()));
///
/// let names: Vec<_> = snapshot.names().collect();
/// assert_eq!(names, ["eth0", "lo"]);
/// assert_eq!(snapshot.get("eth0").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceSnapshot {
    interfaces: Vec<InterfaceEntry>,
}

impl InterfaceSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interfaces: Vec::new(),
        }
    }

    /// Appends a record to the named interface, creating it if needed.
    pub fn push(&mut self, name: impl Into<String>, record: AddressRecord) {
        let name = name.into();
        if let Some(entry) = self.interfaces.iter_mut().find(|e| e.name == name) {
            entry.records.push(record);
        } else {
            self.interfaces.push(InterfaceEntry {
                name,
                records: vec![record],
            });
        }
    }

    /// Builder form of [`push`](Self::push) for a whole interface.
    #[must_use]
    pub fn with_interface(
        mut self,
        name: impl Into<String>,
        records: impl IntoIterator<Item = AddressRecord>,
    ) -> Self {
        let name = name.into();
        let mut records = records.into_iter().peekable();
        if records.peek().is_none() && !self.contains(&name) {
            self.interfaces.push(InterfaceEntry {
                name,
                records: Vec::new(),
            });
            return self;
        }
        for record in records {
            self.push(name.clone(), record);
        }
        self
    }

    /// Returns the records of the named interface.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[AddressRecord]> {
        self.interfaces
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.records.as_slice())
    }

    /// Returns true if an interface with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.interfaces.iter().any(|e| e.name == name)
    }

    /// Iterates interface names in snapshot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.iter().map(|e| e.name.as_str())
    }

    /// Iterates interfaces in snapshot order.
    pub fn iter(&self) -> std::slice::Iter<'_, InterfaceEntry> {
        self.interfaces.iter()
    }

    /// Number of interfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    /// Returns true if no interfaces are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    /// Total number of address records across all interfaces.
    #[must_use]
    pub fn address_count(&self) -> usize {
        self.interfaces.iter().map(|e| e.records.len()).sum()
    }
}

impl<'a> IntoIterator for &'a InterfaceSnapshot {
    type Item = &'a InterfaceEntry;
    type IntoIter = std::slice::Iter<'a, InterfaceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, AddressRecord)> for InterfaceSnapshot {
    fn from_iter<I: IntoIterator<Item = (N, AddressRecord)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (name, record) in iter {
            snapshot.push(name, record);
        }
        snapshot
    }
}
