//! Category: the single coarse classification label of an automation.

use std::fmt;

use serde::{Serialize, Serializer};

/// Label used when an automation has no tags at all.
pub const OTHER_LABEL: &str = "Other";

/// A category the gallery knows about, with its tag key and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCategory {
    SalesCrm,
    Marketing,
    Operations,
    Data,
    It,
    Hr,
    Finance,
    ECommerce,
}

impl KnownCategory {
    /// All known categories in scan priority order.
    ///
    /// When an automation carries several known tags, the one listed first
    /// here decides its category.
    pub const ALL: [Self; 8] = [
        Self::SalesCrm,
        Self::Marketing,
        Self::Operations,
        Self::Data,
        Self::It,
        Self::Hr,
        Self::Finance,
        Self::ECommerce,
    ];

    /// Tag value that selects this category.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::SalesCrm => "Sales & CRM",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Data => "Data",
            Self::It => "IT",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::ECommerce => "E-commerce",
        }
    }

    /// Label displayed to visitors and matched by the category filter.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SalesCrm => "Sales & CRM",
            Self::Marketing => "Marketing & Content Creation",
            Self::Operations => "Operations & Productivity",
            Self::Data => "Data Integration & Management",
            Self::It => "IT",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::ECommerce => "E-commerce",
        }
    }

    /// Look up a known category by its display label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cat| cat.label() == label)
    }
}

/// The category assigned to an automation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// One of the [`KnownCategory`] values matched a tag.
    Known(KnownCategory),
    /// No known tag matched; the first tag is used verbatim.
    Tag(String),
    /// The automation has no tags.
    Other,
}

impl Category {
    /// Derive the category from an ordered tag list.
    ///
    /// First-match scan over [`KnownCategory::ALL`]; falls back to the first
    /// tag, then to [`Category::Other`].
    #[must_use]
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        KnownCategory::ALL
            .into_iter()
            .find(|cat| tags.iter().any(|tag| tag.as_ref() == cat.key()))
            .map(Self::Known)
            .or_else(|| tags.first().map(|tag| Self::Tag(tag.as_ref().to_string())))
            .unwrap_or(Self::Other)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(known) => known.label(),
            Self::Tag(tag) => tag,
            Self::Other => OTHER_LABEL,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
