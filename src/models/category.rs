use serde::{Deserialize, Serialize};

/// One of the four fixed groupings diagram types are classified into.
///
/// The set is closed: adding a category means adding a variant here, which
/// forces the `info` table and every grouping consumer to be updated at
/// compile time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flow,
    Structure,
    Timeline,
    Other,
}

/// Static display metadata for a category, independent of catalog contents.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Color token consumed by the theme layer.
    pub color: &'static str,
}

const FLOW_INFO: CategoryInfo = CategoryInfo {
    id: Category::Flow,
    name: "Flow Diagrams",
    description: "Process flows, sequences, and user journeys",
    icon: "🔄",
    color: "blue",
};

const STRUCTURE_INFO: CategoryInfo = CategoryInfo {
    id: Category::Structure,
    name: "Structure Diagrams",
    description: "System architecture, relationships, and states",
    icon: "🏗️",
    color: "purple",
};

const TIMELINE_INFO: CategoryInfo = CategoryInfo {
    id: Category::Timeline,
    name: "Timeline Diagrams",
    description: "Time-based planning and historical views",
    icon: "📅",
    color: "green",
};

const OTHER_INFO: CategoryInfo = CategoryInfo {
    id: Category::Other,
    name: "Other Diagrams",
    description: "Specialized and experimental diagram types",
    icon: "✨",
    color: "orange",
};

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Category; 4] = [
        Self::Flow,
        Self::Structure,
        Self::Timeline,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Structure => "structure",
            Self::Timeline => "timeline",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "flow" => Some(Self::Flow),
            "structure" => Some(Self::Structure),
            "timeline" => Some(Self::Timeline),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Display metadata for this category.
    ///
    /// The match is total, so every variant has exactly one entry.
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Self::Flow => &FLOW_INFO,
            Self::Structure => &STRUCTURE_INFO,
            Self::Timeline => &TIMELINE_INFO,
            Self::Other => &OTHER_INFO,
        }
    }
}
