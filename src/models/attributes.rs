//! Cleaned stratifying attributes
//!
//! Free-text attribute cells are normalised into small enums. Anything that
//! cannot be classified falls into a "not specified"/"not reported" bucket.

use std::fmt;

use serde::Serialize;

/// Label used when funding is not disclosed
pub const NOT_REPORTED: &str = "Not reported";

/// Geographic region of the study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Region {
    North,
    South,
    National,
    NotSpecified,
}

impl Region {
    /// Classify a free-text region cell
    #[must_use]
    pub fn classify(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::NotSpecified;
        };
        let lower = value.to_lowercase();
        if lower.contains("north") {
            Self::North
        } else if lower.contains("south") {
            Self::South
        } else if lower.contains("national") {
            Self::National
        } else {
            Self::NotSpecified
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::National => "National",
            Self::NotSpecified => "Not specified",
        }
    }
}

/// Urban, rural or mixed study setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UrbanRural {
    Urban,
    Rural,
    Both,
    NotSpecified,
}

impl UrbanRural {
    /// Classify a free-text urban/rural cell
    #[must_use]
    pub fn classify(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::NotSpecified;
        };
        let lower = value.to_lowercase();
        if lower.contains("urban") {
            Self::Urban
        } else if lower.contains("rural") {
            Self::Rural
        } else if lower.contains("both") {
            Self::Both
        } else {
            Self::NotSpecified
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urban => "Urban",
            Self::Rural => "Rural",
            Self::Both => "Both",
            Self::NotSpecified => "Not specified",
        }
    }
}

/// Whether the study ran at more than one site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MultiSite {
    Yes,
    No,
    NotReported,
}

impl MultiSite {
    /// Classify a multi-site cell; only an exact yes/no is accepted
    #[must_use]
    pub fn classify(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::NotReported,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NotReported => NOT_REPORTED,
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Region, UrbanRural, MultiSite);

/// Parse a publication year, accepting integral floats such as `2019.0`
#[must_use]
pub fn parse_year(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    let year = value.parse::<f64>().ok()?;
    if year.is_finite() && year.fract() == 0.0 && year.abs() < f64::from(i32::MAX) {
        #[allow(clippy::cast_possible_truncation)]
        Some(year as i32)
    } else {
        None
    }
}
