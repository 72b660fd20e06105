use serde::{Deserialize, Serialize};

/// A preset controlling how many examples a consumer should display.
///
/// Modes map to the positions of the contraction slider in the UI, from a
/// deep dive on one or two examples up to showing everything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LearningMode {
    DeepFocus,
    Balanced,
    BroadExploration,
    All,
}

/// Static metadata for a learning mode.
#[derive(Debug, Clone, Serialize)]
pub struct LearningModeInfo {
    pub id: LearningMode,
    pub name: &'static str,
    pub description: &'static str,
    /// How many examples to show. `None` means unbounded (show all).
    pub example_count: Option<usize>,
    /// Slider tension hint in `0..=100`. Purely presentational.
    pub tension: u8,
}

const DEEP_FOCUS_INFO: LearningModeInfo = LearningModeInfo {
    id: LearningMode::DeepFocus,
    name: "Deep Focus",
    description: "1-2 examples for deep understanding",
    example_count: Some(2),
    tension: 25,
};

const BALANCED_INFO: LearningModeInfo = LearningModeInfo {
    id: LearningMode::Balanced,
    name: "Balanced",
    description: "3-4 examples for balanced learning",
    example_count: Some(4),
    tension: 50,
};

const BROAD_EXPLORATION_INFO: LearningModeInfo = LearningModeInfo {
    id: LearningMode::BroadExploration,
    name: "Broad Exploration",
    description: "5+ examples for comprehensive overview",
    example_count: Some(6),
    tension: 75,
};

const ALL_INFO: LearningModeInfo = LearningModeInfo {
    id: LearningMode::All,
    name: "Show All",
    description: "All available examples",
    example_count: None,
    tension: 100,
};

impl LearningMode {
    /// Every mode in slider order, from tightest to widest.
    pub const ALL_MODES: [LearningMode; 4] = [
        Self::DeepFocus,
        Self::Balanced,
        Self::BroadExploration,
        Self::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeepFocus => "deep-focus",
            Self::Balanced => "balanced",
            Self::BroadExploration => "broad-exploration",
            Self::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "deep-focus" => Some(Self::DeepFocus),
            "balanced" => Some(Self::Balanced),
            "broad-exploration" => Some(Self::BroadExploration),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Static metadata for this mode. The match is total.
    pub fn info(&self) -> &'static LearningModeInfo {
        match self {
            Self::DeepFocus => &DEEP_FOCUS_INFO,
            Self::Balanced => &BALANCED_INFO,
            Self::BroadExploration => &BROAD_EXPLORATION_INFO,
            Self::All => &ALL_INFO,
        }
    }
}
