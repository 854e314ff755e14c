//! Address selection over an interface snapshot.
//!
//! # Design
//!
//! - **Selector**: [`Selector`] is the single predicate builder shared by the
//!   interface-name and address-family axes (`All`, `Exact`, `AnyOf`).
//! - **Count**: [`MatchCount`] bounds the result; non-positive requests mean
//!   "every match".
//! - **Matcher**: [`Matcher`] walks the snapshot lazily in interface order,
//!   then record order, and stops as soon as the count is reached.

use std::borrow::Borrow;
use std::fmt;
use std::num::NonZeroUsize;

use super::{AddressFamily, AddressRecord, InterfaceSnapshot};

// ============================================================================
// Selector - Shared predicate builder
// ============================================================================

/// Selection criterion for one axis (interface name or address family).
///
/// # Examples
///
/// ```
/// use retrieve_ip::network::filter::Selector;
///
/// let any = Selector::<String>::All;
/// let one = Selector::exact("eth0".to_string());
/// let some = Selector::any_of(["eth0".to_string(), "wlan0".to_string()]);
///
/// assert!(any.matches(&"lo".to_string()));
/// assert!(one.matches(&"eth0".to_string()));
/// assert!(!one.matches(&"eth1".to_string()));
/// assert!(some.matches("wlan0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    /// Every candidate matches.
    All,
    /// Only candidates equal to this value match.
    Exact(T),
    /// Only candidates contained in this list match (empty matches nothing).
    AnyOf(Vec<T>),
}

impl<T: PartialEq> Selector<T> {
    /// Creates an exact-value selector.
    #[must_use]
    pub const fn exact(value: T) -> Self {
        Self::Exact(value)
    }

    /// Creates a membership selector.
    #[must_use]
    pub fn any_of(values: impl IntoIterator<Item = T>) -> Self {
        Self::AnyOf(values.into_iter().collect())
    }

    /// Builds the predicate for this criterion.
    ///
    /// `Q` is the borrowed candidate type, so a `Selector<String>` can test `&str` names.
    pub fn matcher<Q>(&self) -> impl Fn(&Q) -> bool + '_
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        move |candidate: &Q| self.matches(candidate)
    }

    /// Returns true if `candidate` satisfies this criterion.
    #[must_use]
    pub fn matches<Q>(&self, candidate: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self {
            Self::All => true,
            Self::Exact(value) => value.borrow() == candidate,
            Self::AnyOf(values) => values.iter().any(|value| value.borrow() == candidate),
        }
    }

    /// Returns true if this selector matches everything.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> From<Vec<T>> for Selector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::AnyOf(values)
    }
}

impl Selector<String> {
    /// Builds a name selector from a single name, where the literal `"all"` means [`Selector::All`].
    #[must_use]
    pub fn name(name: &str) -> Self {
        if name == ALL {
            Self::All
        } else {
            Self::Exact(name.to_string())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{ALL}"),
            Self::Exact(value) => write!(f, "{value}"),
            Self::AnyOf(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// The wildcard spelling accepted for both selection axes.
pub const ALL: &str = "all";

// ============================================================================
// MatchCount - Result bound
// ============================================================================

/// Maximum number of addresses to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchCount {
    /// At most this many addresses.
    Limited(NonZeroUsize),
    /// Every matching address.
    Unbounded,
}

impl MatchCount {
    /// Converts a requested count; zero and negative values mean [`MatchCount::Unbounded`].
    ///
    /// ```
    /// use retrieve_ip::network::filter::MatchCount;
    ///
    /// assert_eq!(MatchCount::from_requested(0), MatchCount::Unbounded);
    /// assert_eq!(MatchCount::from_requested(-1), MatchCount::Unbounded);
    /// assert_eq!(MatchCount::from_requested(3).limit(), Some(3));
    /// ```
    #[must_use]
    pub fn from_requested(requested: i64) -> Self {
        usize::try_from(requested)
            .ok()
            .and_then(NonZeroUsize::new)
            .map_or(Self::Unbounded, Self::Limited)
    }

    /// Returns the limit, or `None` when unbounded.
    #[must_use]
    pub const fn limit(self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }
}

impl Default for MatchCount {
    fn default() -> Self {
        Self::Limited(NonZeroUsize::MIN)
    }
}

impl fmt::Display for MatchCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

// ============================================================================
// SelectionCriteria - The four query parameters
// ============================================================================

/// The four independent selection criteria of a query.
///
/// Defaults: any family, any interface, local addresses excluded, at most one result.
///
/// # Examples
///
/// ```
/// use retrieve_ip::network::AddressFamily;
/// use retrieve_ip::network::filter::{MatchCount, SelectionCriteria};
///
/// let criteria = SelectionCriteria::new()
///     .with_family(AddressFamily::V4)
///     .with_interfaces(["eth0", "wlan0"])
///     .with_include_local(true)
///     .with_max_count(-1);
///
/// assert_eq!(criteria.max_count, MatchCount::Unbounded);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionCriteria {
    /// Family axis.
    pub family: Selector<AddressFamily>,
    /// Interface-name axis.
    pub interface: Selector<String>,
    /// Accept loopback/host-local addresses too.
    pub include_local: bool,
    /// Result bound.
    pub max_count: MatchCount,
}

impl SelectionCriteria {
    /// Creates criteria with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a single family.
    #[must_use]
    pub fn with_family(mut self, family: AddressFamily) -> Self {
        self.family = Selector::Exact(family);
        self
    }

    /// Sets the family selector.
    #[must_use]
    pub fn with_family_selector(mut self, family: Selector<AddressFamily>) -> Self {
        self.family = family;
        self
    }

    /// Restricts to one interface; `"all"` removes the restriction.
    #[must_use]
    pub fn with_interface(mut self, name: &str) -> Self {
        self.interface = Selector::name(name);
        self
    }

    /// Restricts to any of the given interfaces.
    #[must_use]
    pub fn with_interfaces<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.interface = Selector::any_of(names.into_iter().map(Into::into));
        self
    }

    /// Sets the interface selector.
    #[must_use]
    pub fn with_interface_selector(mut self, interface: Selector<String>) -> Self {
        self.interface = interface;
        self
    }

    /// Sets whether loopback/host-local addresses are accepted.
    #[must_use]
    pub const fn with_include_local(mut self, include_local: bool) -> Self {
        self.include_local = include_local;
        self
    }

    /// Sets the result bound from a requested count (non-positive means unbounded).
    #[must_use]
    pub fn with_max_count(mut self, requested: i64) -> Self {
        self.max_count = MatchCount::from_requested(requested);
        self
    }

    /// Sets the result bound.
    #[must_use]
    pub const fn with_match_count(mut self, max_count: MatchCount) -> Self {
        self.max_count = max_count;
        self
    }

    /// Returns true if the record passes the locality rule.
    #[must_use]
    pub const fn accepts_locality(&self, record: &AddressRecord) -> bool {
        self.include_local || !record.is_internal
    }
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Criteria {{ family: {}, interface: {}, include_local: {}, max_count: {} }}",
            self.family, self.interface, self.include_local, self.max_count
        )
    }
}

// ============================================================================
// Matcher - Single matching pass
// ============================================================================

/// Runs the matching pass of one query.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    criteria: &'a SelectionCriteria,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher for the given criteria.
    #[must_use]
    pub const fn new(criteria: &'a SelectionCriteria) -> Self {
        Self { criteria }
    }

    /// Returns the criteria this matcher applies.
    #[must_use]
    pub const fn criteria(&self) -> &SelectionCriteria {
        self.criteria
    }

    /// Returns the first matching records, in snapshot order, up to the count.
    pub fn records<'s>(
        &self,
        snapshot: &'s InterfaceSnapshot,
    ) -> impl Iterator<Item = &'s AddressRecord> {
        let criteria = self.criteria;
        let name_matches = criteria.interface.matcher::<str>();
        let family_matches = criteria.family.matcher::<AddressFamily>();
        let limit = criteria.max_count.limit().unwrap_or(usize::MAX);

        snapshot
            .iter()
            .filter(move |entry| {
                let keep = name_matches(entry.name.as_str());
                if !keep {
                    tracing::debug!("Skipping interface {}", entry.name);
                }
                keep
            })
            .flat_map(|entry| entry.records.iter())
            .filter(move |record| {
                let keep = family_matches(&record.family) && criteria.accepts_locality(record);
                if !keep {
                    tracing::trace!(
                        "Rejected {} ({}, internal: {})",
                        record.address,
                        record.family,
                        record.is_internal
                    );
                }
                keep
            })
            .take(limit)
    }

    /// Computes the result list for the snapshot.
    #[must_use]
    pub fn select(&self, snapshot: &InterfaceSnapshot) -> Vec<String> {
        let addresses: Vec<String> = self
            .records(snapshot)
            .map(|record| record.address.to_string())
            .collect();

        tracing::debug!(
            "Selected {} address(es) with {}",
            addresses.len(),
            self.criteria
        );

        addresses
    }
}

/// Selects addresses from `snapshot` according to `criteria`.
#[must_use]
pub fn select(snapshot: &InterfaceSnapshot, criteria: &SelectionCriteria) -> Vec<String> {
    Matcher::new(criteria).select(snapshot)
}
