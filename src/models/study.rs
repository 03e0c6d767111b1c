//! A single study from the scoping review

use itertools::Itertools;

use crate::algorithm::extraction::non_empty_codes;
use crate::models::attributes::{self, MultiSite, NOT_REPORTED, Region, UrbanRural};
use crate::models::category::LimitationCategory;

/// One included study with its limitation annotations and attributes.
///
/// All text is stored trimmed; empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyRecord {
    /// Annotation field per category, indexed by [`LimitationCategory::index`]
    pub limitations: [Option<String>; 5],
    pub region: Option<String>,
    pub setting: Option<String>,
    pub funding: Option<String>,
    pub year: Option<String>,
    pub topic: Option<String>,
    pub journal_type: Option<String>,
    pub multi_site: Option<String>,
    pub urban_rural: Option<String>,
    pub design: Option<String>,
}

impl StudyRecord {
    /// Set the annotation field for a category
    #[must_use]
    pub fn with_limitation(mut self, category: LimitationCategory, text: impl Into<String>) -> Self {
        self.limitations[category.index()] = Some(text.into());
        self
    }

    /// Annotation text for a category, if reported
    #[must_use]
    pub fn limitation(&self, category: LimitationCategory) -> Option<&str> {
        self.limitations[category.index()].as_deref()
    }

    /// Whether the category field is present
    #[must_use]
    pub fn has_category(&self, category: LimitationCategory) -> bool {
        self.limitations[category.index()].is_some()
    }

    /// Whether any of the given category fields is present
    #[must_use]
    pub fn has_any(&self, categories: &[LimitationCategory]) -> bool {
        categories.iter().any(|c| self.has_category(*c))
    }

    /// All non-empty codes across the given categories, in field order
    pub fn codes<'a>(
        &'a self,
        categories: &'a [LimitationCategory],
    ) -> impl Iterator<Item = &'a str> + 'a {
        categories
            .iter()
            .flat_map(move |c| non_empty_codes(self.limitation(*c)))
    }

    /// Codes across the given categories with repeats removed, first occurrence kept
    #[must_use]
    pub fn distinct_codes<'a>(&'a self, categories: &'a [LimitationCategory]) -> Vec<&'a str> {
        self.codes(categories).unique().collect()
    }

    /// Whether any category field carries exactly this code
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.codes(&LimitationCategory::ALL).any(|c| c == code)
    }

    #[must_use]
    pub fn region(&self) -> Region {
        Region::classify(self.region.as_deref())
    }

    #[must_use]
    pub fn urban_rural(&self) -> UrbanRural {
        UrbanRural::classify(self.urban_rural.as_deref())
    }

    #[must_use]
    pub fn multi_site(&self) -> MultiSite {
        MultiSite::classify(self.multi_site.as_deref())
    }

    /// Funding source, `Not reported` when missing
    #[must_use]
    pub fn funding(&self) -> &str {
        self.funding.as_deref().unwrap_or(NOT_REPORTED)
    }

    /// Publication year, when it parses as a number
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        attributes::parse_year(self.year.as_deref())
    }
}
