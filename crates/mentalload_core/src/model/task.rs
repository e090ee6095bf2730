//! Task definitions.
//!
//! # Responsibility
//! - Describe one household task as static reference data.
//! - Distinguish physical (visible) from cognitive (invisible) work by variant.
//!
//! # Invariants
//! - `id` is unique within a catalog and never reused.
//! - Cognitive tasks carry `mental_load_weight >= 1.0`.
//! - Physical tasks have an implicit mental-load weight of `1.0`.

use crate::model::household::HouseholdSetup;
use serde::{Deserialize, Serialize};

/// Grouping used for category breakdowns and dominant-category insights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Cooking,
    Cleaning,
    Laundry,
    Shopping,
    Childcare,
    Pets,
    Outdoor,
    Maintenance,
    Finances,
    Planning,
    Monitoring,
    Anticipating,
    EmotionalLabor,
    SocialCoordination,
}

impl TaskCategory {
    /// Stable string id used in wire payloads and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cooking => "cooking",
            Self::Cleaning => "cleaning",
            Self::Laundry => "laundry",
            Self::Shopping => "shopping",
            Self::Childcare => "childcare",
            Self::Pets => "pets",
            Self::Outdoor => "outdoor",
            Self::Maintenance => "maintenance",
            Self::Finances => "finances",
            Self::Planning => "planning",
            Self::Monitoring => "monitoring",
            Self::Anticipating => "anticipating",
            Self::EmotionalLabor => "emotional_labor",
            Self::SocialCoordination => "social_coordination",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cooking => "Cooking & meals",
            Self::Cleaning => "Cleaning",
            Self::Laundry => "Laundry",
            Self::Shopping => "Shopping & errands",
            Self::Childcare => "Childcare",
            Self::Pets => "Pet care",
            Self::Outdoor => "Garden & outdoor",
            Self::Maintenance => "Home maintenance",
            Self::Finances => "Finances & admin",
            Self::Planning => "Planning",
            Self::Monitoring => "Monitoring",
            Self::Anticipating => "Anticipating needs",
            Self::EmotionalLabor => "Emotional labor",
            Self::SocialCoordination => "Social coordination",
        }
    }
}

/// How a task's own intensity score is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Actual-to-typical time ratio.
    Time,
    /// Burden/fairness Likert pair.
    Likert,
}

/// Household condition a task depends on to be applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskRequirement {
    Always,
    Children,
    Pets,
    Garden,
    Employment,
}

impl TaskRequirement {
    /// Returns whether the household satisfies this requirement.
    pub fn is_met_by(self, household: &HouseholdSetup) -> bool {
        match self {
            Self::Always => true,
            Self::Children => household.children > 0,
            Self::Pets => household.has_pets,
            Self::Garden => household.has_garden,
            Self::Employment => household.i_am_employed || household.partner_employed,
        }
    }
}

/// Visible, physically performed task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalTask {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub baseline_minutes_per_week: u32,
    pub requirement: TaskRequirement,
}

/// Invisible planning/monitoring task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveTask {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub baseline_minutes_per_week: u32,
    /// Multiplier applied by the WMLI engine. Always `>= 1.0`.
    pub mental_load_weight: f64,
    pub requirement: TaskRequirement,
}

/// Catalog entry, discriminated by `measurement_type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "measurement_type", rename_all = "snake_case")]
pub enum Task {
    #[serde(rename = "time")]
    Physical(PhysicalTask),
    #[serde(rename = "likert")]
    Cognitive(CognitiveTask),
}

/// Mental weight the person load calculator applies to physical tasks.
pub const AGGREGATOR_PHYSICAL_WEIGHT: f64 = 1.0;
/// Mental weight the person load calculator applies to cognitive tasks.
pub const AGGREGATOR_COGNITIVE_WEIGHT: f64 = 2.0;

impl Task {
    pub fn id(&self) -> &str {
        match self {
            Self::Physical(task) => &task.id,
            Self::Cognitive(task) => &task.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Physical(task) => &task.title,
            Self::Cognitive(task) => &task.title,
        }
    }

    pub fn category(&self) -> TaskCategory {
        match self {
            Self::Physical(task) => task.category,
            Self::Cognitive(task) => task.category,
        }
    }

    pub fn baseline_minutes_per_week(&self) -> u32 {
        match self {
            Self::Physical(task) => task.baseline_minutes_per_week,
            Self::Cognitive(task) => task.baseline_minutes_per_week,
        }
    }

    pub fn requirement(&self) -> TaskRequirement {
        match self {
            Self::Physical(task) => task.requirement,
            Self::Cognitive(task) => task.requirement,
        }
    }

    pub fn measurement_type(&self) -> MeasurementType {
        match self {
            Self::Physical(_) => MeasurementType::Time,
            Self::Cognitive(_) => MeasurementType::Likert,
        }
    }

    /// Catalog-declared weight used by the WMLI engine.
    ///
    /// Values below `1.0` are lifted to `1.0`.
    pub fn mental_load_weight(&self) -> f64 {
        match self {
            Self::Physical(_) => 1.0,
            Self::Cognitive(task) => task.mental_load_weight.max(1.0),
        }
    }

    /// Fixed weight used by the person load calculator.
    pub fn aggregator_weight(&self) -> f64 {
        match self {
            Self::Physical(_) => AGGREGATOR_PHYSICAL_WEIGHT,
            Self::Cognitive(_) => AGGREGATOR_COGNITIVE_WEIGHT,
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, Self::Physical(_))
    }

    /// Returns whether the task applies to this household.
    pub fn applies_to(&self, household: &HouseholdSetup) -> bool {
        self.requirement().is_met_by(household)
    }
}
