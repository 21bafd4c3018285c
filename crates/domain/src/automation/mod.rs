//! Automation item: one catalog entry of the gallery.
//!
//! Items are built once from [`RawRecord`]s when the catalog is loaded and
//! never change afterwards. Filtering produces new views over them (see
//! [`crate::filter`]).

mod category;
mod record;

pub use category::{Category, KnownCategory, OTHER_LABEL};
pub use record::{RawRecord, split_list};

use serde::Serialize;

use crate::id::AutomationId;

/// Benefit focuses offered as gallery filters.
pub const KNOWN_BENEFITS: [&str; 3] = ["Productivity", "Sales", "Cost Savings"];

/// A pre-built business-process automation template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationItem {
    pub id: AutomationId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub primary_benefits: Vec<String>,
    /// First of `primary_benefits`, or empty.
    pub primary_benefit: String,
    pub category: Category,
}

impl AutomationItem {
    /// Create a builder for constructing an [`AutomationItem`].
    #[must_use]
    pub fn builder() -> AutomationItemBuilder {
        AutomationItemBuilder::default()
    }

    /// Normalize a raw record, generating a fresh id.
    #[must_use]
    pub fn from_record(record: RawRecord) -> Self {
        let primary_benefits = split_list(record.primary_benefit_focus.as_deref());
        let tags = split_list(record.tags.as_deref());

        Self::builder()
            .title(record.title.unwrap_or_default())
            .description(record.description.unwrap_or_default())
            .tags(tags)
            .benefits(primary_benefits)
            .build()
    }

    /// Whether `benefit` is one of this item's benefit focuses.
    #[must_use]
    pub fn has_benefit(&self, benefit: &str) -> bool {
        self.primary_benefits.iter().any(|b| b == benefit)
    }
}

/// Normalize a whole dataset, preserving input order.
#[must_use]
pub fn normalize(records: Vec<RawRecord>) -> Vec<AutomationItem> {
    records.into_iter().map(AutomationItem::from_record).collect()
}

/// Step-by-step builder for [`AutomationItem`].
///
/// `category` and `primary_benefit` are derived in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct AutomationItemBuilder {
    id: Option<AutomationId>,
    title: String,
    description: String,
    tags: Vec<String>,
    primary_benefits: Vec<String>,
}

impl AutomationItemBuilder {
    #[must_use]
    pub fn id(mut self, id: AutomationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn benefits(mut self, benefits: Vec<String>) -> Self {
        self.primary_benefits = benefits;
        self
    }

    #[must_use]
    pub fn benefit(mut self, benefit: impl Into<String>) -> Self {
        self.primary_benefits.push(benefit.into());
        self
    }

    /// Consume the builder and return an [`AutomationItem`].
    #[must_use]
    pub fn build(self) -> AutomationItem {
        let category = Category::from_tags(&self.tags);
        let primary_benefit = self.primary_benefits.first().cloned().unwrap_or_default();
        AutomationItem {
            id: self.id.unwrap_or_default(),
            title: self.title,
            description: self.description,
            tags: self.tags,
            primary_benefits: self.primary_benefits,
            primary_benefit,
            category,
        }
    }
}
