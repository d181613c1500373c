// src/domain/filters.rs

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Lowest selectable price. A minimum at the floor constrains nothing.
pub const PRICE_FLOOR: u64 = 0;

/// Highest selectable price. A maximum at or above the ceiling is unbounded.
pub const PRICE_CEILING: u64 = 2_000_000;

/// Minimum-price choices offered in the filter panel.
pub const PRICE_MIN_OPTIONS: &[(u64, &str)] = &[
    (PRICE_FLOOR, "Any"),
    (500_000, "$500K+"),
    (1_000_000, "$1M+"),
    (1_500_000, "$1.5M+"),
];

/// Maximum-price choices offered in the filter panel.
pub const PRICE_MAX_OPTIONS: &[(u64, &str)] = &[
    (1_000_000, "$1M"),
    (1_500_000, "$1.5M"),
    (PRICE_CEILING, "$2M+"),
];

/// Bedroom counts offered as quick buttons next to "Any".
pub const BED_OPTIONS: &[u32] = &[1, 2, 3, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedsFilter {
    #[default]
    Any,
    Exactly(u32),
}

impl BedsFilter {
    /// Exact-count filter. Zero is not a valid count to filter on.
    pub fn exactly(n: u32) -> Option<Self> {
        (n >= 1).then_some(BedsFilter::Exactly(n))
    }
}

impl fmt::Display for BedsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BedsFilter::Any => write!(f, "any"),
            BedsFilter::Exactly(n) => write!(f, "{n}"),
        }
    }
}

/// Serialized the same way it travels in a query string: `"any"` or the count.
impl Serialize for BedsFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for BedsFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") || s.is_empty() {
            return Ok(BedsFilter::Any);
        }
        let n: u32 = s
            .parse()
            .map_err(|_| format!("invalid bedroom filter: {s}"))?;
        BedsFilter::exactly(n).ok_or_else(|| format!("bedroom filter must be at least 1, got {n}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    #[default]
    All,
    Today,
    Weekend,
    OpenNow,
}

impl TimeFilter {
    pub const ALL_CHOICES: [TimeFilter; 4] = [
        TimeFilter::All,
        TimeFilter::OpenNow,
        TimeFilter::Today,
        TimeFilter::Weekend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::All => "all",
            TimeFilter::Today => "today",
            TimeFilter::Weekend => "weekend",
            TimeFilter::OpenNow => "open-now",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFilter::All => "All Times",
            TimeFilter::Today => "Today",
            TimeFilter::Weekend => "This Weekend",
            TimeFilter::OpenNow => "Open Now",
        }
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(TimeFilter::All),
            "today" => Ok(TimeFilter::Today),
            "weekend" | "this-weekend" => Ok(TimeFilter::Weekend),
            "open-now" => Ok(TimeFilter::OpenNow),
            other => Err(format!("invalid time filter: {other}")),
        }
    }
}

/// The complete set of active constraints. Always fully populated; the
/// default constrains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub price_min: u64,
    pub price_max: u64,
    pub beds: BedsFilter,
    pub time: TimeFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_min: PRICE_FLOOR,
            price_max: PRICE_CEILING,
            beds: BedsFilter::Any,
            time: TimeFilter::All,
        }
    }
}

impl FilterCriteria {
    /// True when any field narrows the catalog compared to the defaults.
    pub fn is_active(&self) -> bool {
        self.beds != BedsFilter::Any
            || self.price_min > PRICE_FLOOR
            || self.price_max < PRICE_CEILING
            || self.time != TimeFilter::All
    }

    /// True when the bounds cannot both hold. A maximum at the ceiling is
    /// unbounded, so no minimum can invert it.
    pub fn is_inverted(&self) -> bool {
        self.price_max < PRICE_CEILING && self.price_min > self.price_max
    }

    /// Merges a partial update; fields the update leaves out keep their value.
    pub fn merged(mut self, update: &FilterUpdate) -> Self {
        if let Some(min) = update.price_min {
            self.price_min = min;
        }
        if let Some(max) = update.price_max {
            self.price_max = max;
        }
        if let Some(beds) = update.beds {
            self.beds = beds;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        self
    }
}

/// A partial change to the criteria, as emitted by a single filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub beds: Option<BedsFilter>,
    pub time: Option<TimeFilter>,
}

impl FilterUpdate {
    pub fn is_empty(&self) -> bool {
        *self == FilterUpdate::default()
    }
}

#[cfg(test)]
impl FilterUpdate {
    pub fn price_range(min: u64, max: u64) -> Self {
        Self {
            price_min: Some(min),
            price_max: Some(max),
            ..Self::default()
        }
    }

    pub fn beds(beds: BedsFilter) -> Self {
        Self {
            beds: Some(beds),
            ..Self::default()
        }
    }

    pub fn time(time: TimeFilter) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }
}
