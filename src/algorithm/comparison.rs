//! Limitation reporting compared across groups of studies
//!
//! Studies are split on one attribute (setting, region, funding, ...) and each
//! group is profiled by how often it reports methodological, contextual or
//! any limitations.

use serde::Serialize;

use crate::algorithm::frequency::{Share, ValueCount, value_counts};
use crate::models::category::{CategoryGroup, LimitationCategory};
use crate::models::study::StudyRecord;

/// Limitation profile of one group of studies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupProfile {
    pub group: String,
    pub n: usize,
    /// Studies with any methodological category reported
    pub methodological: Share,
    /// Studies with any contextual category reported
    pub contextual: Share,
    /// Studies with any category reported
    pub any_limitation: Share,
    /// Studies reporting Analysis & Generalizability
    pub generalizability: Share,
    /// Studies reporting Context & Logistics
    pub logistics: Share,
}

impl GroupProfile {
    /// Profile a group of studies
    pub fn from_records<'a, I>(group: impl Into<String>, records: I) -> Self
    where
        I: IntoIterator<Item = &'a StudyRecord>,
    {
        let methodological = CategoryGroup::Methodological.categories();
        let contextual = CategoryGroup::Contextual.categories();

        let mut n = 0;
        let mut counts = [0usize; 5];
        for record in records {
            n += 1;
            counts[0] += usize::from(record.has_any(&methodological));
            counts[1] += usize::from(record.has_any(&contextual));
            counts[2] += usize::from(record.has_any(&LimitationCategory::ALL));
            counts[3] += usize::from(record.has_category(LimitationCategory::AnalysisGeneralizability));
            counts[4] += usize::from(record.has_category(LimitationCategory::ContextLogistics));
        }

        Self {
            group: group.into(),
            n,
            methodological: Share::of(counts[0], n),
            contextual: Share::of(counts[1], n),
            any_limitation: Share::of(counts[2], n),
            generalizability: Share::of(counts[3], n),
            logistics: Share::of(counts[4], n),
        }
    }
}

/// Comparison of a few groups on one attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparison {
    pub title: String,
    /// Distribution of the attribute over all studies
    pub distribution: Vec<ValueCount>,
    pub groups: Vec<GroupProfile>,
}

impl GroupComparison {
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&GroupProfile> {
        self.groups.iter().find(|g| g.group == name)
    }

    /// Replace the attribute distribution, e.g. with cleaned values
    #[must_use]
    pub fn with_distribution(mut self, distribution: Vec<ValueCount>) -> Self {
        self.distribution = distribution;
        self
    }
}

/// A group to compare: its display name and the attribute value selecting it
#[derive(Debug, Clone, Copy)]
pub struct GroupSelector<'s> {
    pub name: &'s str,
    pub value: &'s str,
}

impl<'s> GroupSelector<'s> {
    #[must_use]
    pub const fn new(name: &'s str, value: &'s str) -> Self {
        Self { name, value }
    }
}

/// Compare groups selected by exact attribute value.
///
/// `key` returns the attribute value of a record; a record joins the group
/// whose `value` equals it. With `skip_empty`, groups without studies are left
/// out of the result.
pub fn compare_groups<'a, K>(
    title: &str,
    records: &'a [StudyRecord],
    groups: &[GroupSelector<'_>],
    skip_empty: bool,
    key: K,
) -> GroupComparison
where
    K: Fn(&'a StudyRecord) -> Option<&'a str>,
{
    let profiles = groups
        .iter()
        .map(|selector| {
            GroupProfile::from_records(
                selector.name,
                records.iter().filter(|r| key(*r) == Some(selector.value)),
            )
        })
        .filter(|profile| !(skip_empty && profile.n == 0))
        .collect();

    GroupComparison {
        title: title.to_string(),
        distribution: value_counts(records, &key),
        groups: profiles,
    }
}

/// Facility-based vs community-based studies
#[must_use]
pub fn setting_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Facility vs Community-Based Studies",
        records,
        &[
            GroupSelector::new("Facility", "Facility-based"),
            GroupSelector::new("Community", "Community-based"),
        ],
        false,
        |r| r.setting.as_deref(),
    )
}

/// Northern vs southern studies
#[must_use]
pub fn region_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Regional Analysis: North vs South",
        records,
        &[GroupSelector::new("North", "North"), GroupSelector::new("South", "South")],
        false,
        |r| Some(r.region().label()),
    )
}

/// Internationally funded studies vs studies stating "Not reported".
///
/// Studies with an empty funding cell join neither group but show up as
/// "Not reported" in the distribution.
#[must_use]
pub fn funding_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Funding Transparency and Limitation Reporting",
        records,
        &[
            GroupSelector::new("International", "International"),
            GroupSelector::new("Not Reported", "Not reported"),
        ],
        false,
        |r| r.funding.as_deref(),
    )
    .with_distribution(value_counts(records, |r| Some(r.funding())))
}

/// Urban, rural and mixed settings; groups without studies are omitted.
///
/// Groups take the recorded value as is, so "Semi-urban" is in none of them;
/// the distribution uses the cleaned setting.
#[must_use]
pub fn urban_rural_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Geographic Setting and Limitation Patterns",
        records,
        &[
            GroupSelector::new("Urban", "Urban"),
            GroupSelector::new("Rural", "Rural"),
            GroupSelector::new("Mixed (Both)", "Both"),
        ],
        true,
        |r| r.urban_rural.as_deref(),
    )
    .with_distribution(value_counts(records, |r| Some(r.urban_rural().label())))
}

/// Multi-site vs single-site designs, on the recorded `Yes`/`No` value
#[must_use]
pub fn multi_site_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Study Design Complexity: Multi-Site vs Single-Site",
        records,
        &[GroupSelector::new("Multi-site", "Yes"), GroupSelector::new("Single-site", "No")],
        false,
        |r| r.multi_site.as_deref(),
    )
    .with_distribution(value_counts(records, |r| Some(r.multi_site().label())))
}

/// International vs local journals
#[must_use]
pub fn journal_type_comparison(records: &[StudyRecord]) -> GroupComparison {
    compare_groups(
        "Publication Venue: International vs Local Journals",
        records,
        &[
            GroupSelector::new("International", "International"),
            GroupSelector::new("Local", "Local"),
        ],
        false,
        |r| r.journal_type.as_deref(),
    )
}
