//! Filter selections and search text.
//!
//! [`FilterState`] holds three independent checkbox groups, each a fixed set of
//! keys mapped to a "selected" flag. The record is `Copy`: every change produces
//! a new value through [`FilterState::with`], which copies the whole record and
//! overrides exactly one `(group, key)` entry. No other group or key can be
//! touched by a single update.
//!
//! String-addressed updates (as issued by checkbox widgets) go through
//! [`FilterState::try_with`], which validates the key against its group first.
//!
//! # Example
//!
//! ```
//! use resource_hub::domain::{FilterGroup, FilterState};
//!
//! let filters = FilterState::default();
//! let updated = filters.try_with(FilterGroup::DocumentType, "link", true)?;
//!
//! assert!(updated.document_type.link);
//! assert_eq!(updated.key_foundational_principles, filters.key_foundational_principles);
//! assert_eq!(updated.categories, filters.categories);
//! # Ok::<(), resource_hub::ResourceHubError>(())
//! ```

use super::error::{ResourceHubError, Result};
use super::resource::ResourceType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three independent checkbox clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterGroup {
    KeyFoundationalPrinciples,
    DocumentType,
    Categories,
}

impl FilterGroup {
    /// All groups in panel order.
    pub const ALL: [Self; 3] = [
        Self::KeyFoundationalPrinciples,
        Self::DocumentType,
        Self::Categories,
    ];

    /// Wire name of the group, as used in serialized state and widget events.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::domain::FilterGroup;
    ///
    /// assert_eq!(FilterGroup::DocumentType.as_str(), "documentType");
    /// assert_eq!("documentType".parse::<FilterGroup>()?, FilterGroup::DocumentType);
    /// # Ok::<(), resource_hub::ResourceHubError>(())
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyFoundationalPrinciples => "keyFoundationalPrinciples",
            Self::DocumentType => "documentType",
            Self::Categories => "categories",
        }
    }

    /// Section heading shown above the group's checkboxes.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::KeyFoundationalPrinciples => "Key Foundational Principles",
            Self::DocumentType => "Document type",
            Self::Categories => "Categories",
        }
    }

    /// Every key of this group, in panel order.
    #[must_use]
    pub fn keys(self) -> Vec<FilterKey> {
        match self {
            Self::KeyFoundationalPrinciples => {
                Principle::ALL.into_iter().map(FilterKey::Principle).collect()
            }
            Self::DocumentType => ResourceType::ALL
                .into_iter()
                .map(FilterKey::DocumentType)
                .collect(),
            Self::Categories => Category::ALL.into_iter().map(FilterKey::Category).collect(),
        }
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterGroup {
    type Err = ResourceHubError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ResourceHubError::UnknownFilterGroup(s.to_string()))
    }
}

/// Keys of the `keyFoundationalPrinciples` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principle {
    SecureBase,
    SenseOfAppreciation,
    LearningOrganisation,
    MissionAndVision,
    Wellbeing,
}

impl Principle {
    /// All principles in panel order.
    pub const ALL: [Self; 5] = [
        Self::SecureBase,
        Self::SenseOfAppreciation,
        Self::LearningOrganisation,
        Self::MissionAndVision,
        Self::Wellbeing,
    ];

    /// Key within `keyFoundationalPrinciples` (camelCase).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecureBase => "secureBase",
            Self::SenseOfAppreciation => "senseOfAppreciation",
            Self::LearningOrganisation => "learningOrganisation",
            Self::MissionAndVision => "missionAndVision",
            Self::Wellbeing => "wellbeing",
        }
    }

    /// Checkbox label.
    ///
    /// For the two gating principles this is also the resource category label
    /// that [`gating_category`](Self::gating_category) maps back.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SecureBase => "Secure Base",
            Self::SenseOfAppreciation => "Sense of Appreciation",
            Self::LearningOrganisation => "Learning Organisation",
            Self::MissionAndVision => "Mission and Vision",
            Self::Wellbeing => "Wellbeing",
        }
    }

    /// Maps a resource category label to the principle that gates it.
    ///
    /// Only "Secure Base" and "Wellbeing" are gated; every other label (and the
    /// remaining three principles) has no effect on filtering.
    #[must_use]
    pub fn gating_category(label: &str) -> Option<Self> {
        match label {
            "Secure Base" => Some(Self::SecureBase),
            "Wellbeing" => Some(Self::Wellbeing),
            _ => None,
        }
    }

    /// Inverse of [`as_str`](Self::as_str). Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

/// Keys of the `categories` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sample1,
    Sample2,
    Sample3,
    Sample4,
    Sample5,
}

impl Category {
    /// All categories in panel order.
    pub const ALL: [Self; 5] = [
        Self::Sample1,
        Self::Sample2,
        Self::Sample3,
        Self::Sample4,
        Self::Sample5,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sample1 => "sample1",
            Self::Sample2 => "sample2",
            Self::Sample3 => "sample3",
            Self::Sample4 => "sample4",
            Self::Sample5 => "sample5",
        }
    }

    /// Checkbox label. All five placeholders share the same one.
    #[must_use]
    pub const fn label(self) -> &'static str {
        "Sample"
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

/// A fully-qualified `(group, key)` address into [`FilterState`].
///
/// Construction through [`FilterKey::parse`] is the only place string keys are
/// checked; once a `FilterKey` exists it is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Principle(Principle),
    DocumentType(ResourceType),
    Category(Category),
}

impl FilterKey {
    /// Resolves a string key within `group`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceHubError::InvalidFilterKey`] if `key` is not one of the
    /// group's fixed keys. Keys of other groups are rejected too.
    pub fn parse(group: FilterGroup, key: &str) -> Result<Self> {
        let parsed = match group {
            FilterGroup::KeyFoundationalPrinciples => Principle::from_key(key).map(Self::Principle),
            FilterGroup::DocumentType => ResourceType::from_key(key).map(Self::DocumentType),
            FilterGroup::Categories => Category::from_key(key).map(Self::Category),
        };

        parsed.ok_or_else(|| ResourceHubError::InvalidFilterKey {
            group,
            key: key.to_string(),
        })
    }

    /// The group this key belongs to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::domain::{FilterGroup, FilterKey};
    ///
    /// let key = FilterKey::parse(FilterGroup::Categories, "sample3")?;
    /// assert_eq!(key.group(), FilterGroup::Categories);
    /// assert_eq!(key.to_string(), "categories.sample3");
    /// # Ok::<(), resource_hub::ResourceHubError>(())
    /// ```
    #[must_use]
    pub const fn group(self) -> FilterGroup {
        match self {
            Self::Principle(_) => FilterGroup::KeyFoundationalPrinciples,
            Self::DocumentType(_) => FilterGroup::DocumentType,
            Self::Category(_) => FilterGroup::Categories,
        }
    }

    /// Key within its group, without the group prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Principle(p) => p.as_str(),
            Self::DocumentType(t) => t.as_str(),
            Self::Category(c) => c.as_str(),
        }
    }

    /// Checkbox label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Principle(p) => p.label(),
            Self::DocumentType(t) => t.label(),
            Self::Category(c) => c.label(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group(), self.as_str())
    }
}

/// Flags of the `keyFoundationalPrinciples` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrincipleFilters {
    pub secure_base: bool,
    pub sense_of_appreciation: bool,
    pub learning_organisation: bool,
    pub mission_and_vision: bool,
    pub wellbeing: bool,
}

impl PrincipleFilters {
    /// Returns the flag for `key`.
    #[must_use]
    pub const fn get(&self, key: Principle) -> bool {
        match key {
            Principle::SecureBase => self.secure_base,
            Principle::SenseOfAppreciation => self.sense_of_appreciation,
            Principle::LearningOrganisation => self.learning_organisation,
            Principle::MissionAndVision => self.mission_and_vision,
            Principle::Wellbeing => self.wellbeing,
        }
    }

    /// Returns a copy with the flag for `key` set to `value`.
    ///
    /// Every other principle keeps its value. `self` is taken by value, so the
    /// original record is never modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::domain::{Principle, PrincipleFilters};
    ///
    /// let defaults = PrincipleFilters::default();
    /// let updated = defaults.with(Principle::Wellbeing, false);
    ///
    /// assert!(defaults.wellbeing);
    /// assert!(!updated.wellbeing);
    /// assert!(updated.secure_base);
    /// ```
    #[must_use]
    pub const fn with(mut self, key: Principle, value: bool) -> Self {
        match key {
            Principle::SecureBase => self.secure_base = value,
            Principle::SenseOfAppreciation => self.sense_of_appreciation = value,
            Principle::LearningOrganisation => self.learning_organisation = value,
            Principle::MissionAndVision => self.mission_and_vision = value,
            Principle::Wellbeing => self.wellbeing = value,
        }
        self
    }
}

impl Default for PrincipleFilters {
    fn default() -> Self {
        Self {
            secure_base: true,
            sense_of_appreciation: false,
            learning_organisation: false,
            mission_and_vision: false,
            wellbeing: true,
        }
    }
}

/// Flags of the `documentType` group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentTypeFilters {
    pub doc: bool,
    pub link: bool,
    pub pdf: bool,
    pub video: bool,
}

impl DocumentTypeFilters {
    /// Returns the flag for `key`.
    #[must_use]
    pub const fn get(&self, key: ResourceType) -> bool {
        match key {
            ResourceType::Doc => self.doc,
            ResourceType::Link => self.link,
            ResourceType::Pdf => self.pdf,
            ResourceType::Video => self.video,
        }
    }

    /// Returns a copy with the flag for `key` set to `value`.
    #[must_use]
    pub const fn with(mut self, key: ResourceType, value: bool) -> Self {
        match key {
            ResourceType::Doc => self.doc = value,
            ResourceType::Link => self.link = value,
            ResourceType::Pdf => self.pdf = value,
            ResourceType::Video => self.video = value,
        }
        self
    }

    /// `true` when at least one type is selected, i.e. the group restricts results.
    #[must_use]
    pub const fn any_selected(&self) -> bool {
        self.doc || self.link || self.pdf || self.video
    }
}

/// Flags of the `categories` group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryFilters {
    pub sample1: bool,
    pub sample2: bool,
    pub sample3: bool,
    pub sample4: bool,
    pub sample5: bool,
}

impl CategoryFilters {
    #[must_use]
    pub const fn get(&self, key: Category) -> bool {
        match key {
            Category::Sample1 => self.sample1,
            Category::Sample2 => self.sample2,
            Category::Sample3 => self.sample3,
            Category::Sample4 => self.sample4,
            Category::Sample5 => self.sample5,
        }
    }

    /// Returns a copy with the flag for `key` set to `value`.
    ///
    /// Category flags are kept and rendered, but no predicate reads them.
    #[must_use]
    pub const fn with(mut self, key: Category, value: bool) -> Self {
        match key {
            Category::Sample1 => self.sample1 = value,
            Category::Sample2 => self.sample2 = value,
            Category::Sample3 => self.sample3 = value,
            Category::Sample4 => self.sample4 = value,
            Category::Sample5 => self.sample5 = value,
        }
        self
    }
}

/// All three filter groups.
///
/// Every key is always present; deserialization rejects partial records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterState {
    pub key_foundational_principles: PrincipleFilters,
    pub document_type: DocumentTypeFilters,
    pub categories: CategoryFilters,
}

impl FilterState {
    /// Returns the flag addressed by `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use resource_hub::domain::{FilterKey, FilterState, Principle};
    ///
    /// let filters = FilterState::default();
    /// assert!(filters.get(FilterKey::Principle(Principle::SecureBase)));
    /// assert!(!filters.get(FilterKey::Principle(Principle::MissionAndVision)));
    /// ```
    #[must_use]
    pub const fn get(&self, key: FilterKey) -> bool {
        match key {
            FilterKey::Principle(p) => self.key_foundational_principles.get(p),
            FilterKey::DocumentType(t) => self.document_type.get(t),
            FilterKey::Category(c) => self.categories.get(c),
        }
    }

    /// Returns a copy of `self` with exactly one entry overridden.
    ///
    /// This is the only way a filter value changes. The result equals `self`
    /// in every entry except `key`, which holds `value`.
    ///
    /// # Parameters
    ///
    /// * `key` - The `(group, key)` entry to set
    /// * `value` - The new "selected" flag
    ///
    /// # Returns
    ///
    /// The updated record. If `self.get(key) == value` the result equals `self`.
    #[must_use]
    pub const fn with(self, key: FilterKey, value: bool) -> Self {
        let mut next = self;
        match key {
            FilterKey::Principle(p) => {
                next.key_foundational_principles = self.key_foundational_principles.with(p, value);
            }
            FilterKey::DocumentType(t) => {
                next.document_type = self.document_type.with(t, value);
            }
            FilterKey::Category(c) => {
                next.categories = self.categories.with(c, value);
            }
        }
        next
    }

    /// String-addressed variant of [`with`](Self::with).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceHubError::InvalidFilterKey`] when `key` does not belong to
    /// `group`. No value is produced in that case.
    pub fn try_with(self, group: FilterGroup, key: &str, value: bool) -> Result<Self> {
        let key = FilterKey::parse(group, key)?;
        Ok(self.with(key, value))
    }

    /// Every `(key, flag)` pair, grouped and ordered as on the filter panel.
    pub fn entries(&self) -> impl Iterator<Item = (FilterKey, bool)> + '_ {
        FilterGroup::ALL
            .into_iter()
            .flat_map(FilterGroup::keys)
            .map(|key| (key, self.get(key)))
    }
}

/// Free-text search input.
///
/// An empty query means "no search restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Whether the search predicate applies at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}
