//! Saved-filter wire types.
//!
//! A saved filter is a named, per-user view over the environment list:
//! which tags to include or exclude, how tag matching combines, and how the
//! list is grouped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How selected tags combine when filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMode {
    /// An environment matches if it carries any selected tag.
    #[default]
    Any,
    /// An environment matches only if it carries all selected tags.
    All,
}

impl TagMode {
    /// Returns the mode as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::All => "all",
        }
    }

    /// Parses a tag mode string. Unknown values fall back to [`TagMode::Any`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "all" => Self::All,
            _ => Self::Any,
        }
    }
}

impl fmt::Display for TagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status restriction applied by a saved filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only environments that are online.
    Online,
    /// Only environments that are offline.
    Offline,
}

impl StatusFilter {
    /// Returns the filter as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    /// Parses a status filter string. Unknown values fall back to
    /// [`StatusFilter::All`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "online" => Self::Online,
            "offline" => Self::Offline,
            _ => Self::All,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the environment list is grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// Flat list, no grouping.
    #[default]
    None,
    /// Grouped by reachability status.
    Status,
    /// Grouped by tag.
    Tag,
}

impl GroupBy {
    /// Returns the grouping as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Status => "status",
            Self::Tag => "tag",
        }
    }

    /// Parses a grouping string. Unknown values fall back to [`GroupBy::None`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "status" => Self::Status,
            "tag" => Self::Tag,
            _ => Self::None,
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A saved, per-user view over the environment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentFilter {
    /// Unique identifier.
    pub id: String,
    /// Owner of the filter.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Whether this is the owner's default view.
    pub is_default: bool,
    /// Tags the view includes.
    pub selected_tags: Vec<String>,
    /// Tags the view excludes.
    pub excluded_tags: Vec<String>,
    /// How selected tags combine.
    pub tag_mode: TagMode,
    /// Status restriction.
    pub status_filter: StatusFilter,
    /// Display grouping.
    pub group_by: GroupBy,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for saving a new filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentFilter {
    /// Display name.
    pub name: String,
    /// Whether this becomes the owner's default view.
    #[serde(default)]
    pub is_default: bool,
    /// Tags the view includes.
    #[serde(default)]
    pub selected_tags: Vec<String>,
    /// Tags the view excludes.
    #[serde(default)]
    pub excluded_tags: Vec<String>,
    /// How selected tags combine.
    #[serde(default)]
    pub tag_mode: TagMode,
    /// Status restriction.
    #[serde(default)]
    pub status_filter: StatusFilter,
    /// Display grouping.
    #[serde(default)]
    pub group_by: GroupBy,
}

/// Payload for updating a saved filter. All fields optional; absent fields
/// are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEnvironmentFilter {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether this becomes the owner's default view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Tags the view includes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_tags: Vec<String>,
    /// Tags the view excludes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_tags: Vec<String>,
    /// How selected tags combine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_mode: Option<TagMode>,
    /// Status restriction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<StatusFilter>,
    /// Display grouping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
}
