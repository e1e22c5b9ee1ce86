//! Quiz answer types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building [`Answers`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswersError {
    /// No priority was selected.
    #[error("select at least one priority")]
    EmptyPriorities,
}

/// What matters most to the visitor when choosing birth control.
///
/// One quiz submission carries one or more of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    /// Low maintenance, set-and-forget methods.
    LowMaintenance,
    /// Methods with no hormones at all.
    HormoneFree,
    /// Help regulating periods.
    RegulatingPeriods,
    /// Help with acne or mood.
    ImprovingAcneMood,
    /// Short-term flexibility, easy to stop.
    ShortTermFlexibility,
    /// Cost and insurance coverage.
    Cost,
}

impl Priority {
    /// All priorities, in quiz display order.
    pub const ALL: [Self; 6] = [
        Self::LowMaintenance,
        Self::HormoneFree,
        Self::RegulatingPeriods,
        Self::ImprovingAcneMood,
        Self::ShortTermFlexibility,
        Self::Cost,
    ];

    /// Stable identifier used in form values and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowMaintenance => "low-maintenance",
            Self::HormoneFree => "hormone-free",
            Self::RegulatingPeriods => "regulating-periods",
            Self::ImprovingAcneMood => "improving-acne-mood",
            Self::ShortTermFlexibility => "short-term-flexibility",
            Self::Cost => "cost",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low-maintenance" => Ok(Self::LowMaintenance),
            "hormone-free" => Ok(Self::HormoneFree),
            "regulating-periods" => Ok(Self::RegulatingPeriods),
            "improving-acne-mood" => Ok(Self::ImprovingAcneMood),
            "short-term-flexibility" => Ok(Self::ShortTermFlexibility),
            "cost" => Ok(Self::Cost),
            _ => Err(format!("invalid priority: {s}")),
        }
    }
}

/// How consistently the visitor can take a pill at the same time every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Lifestyle {
    /// Very consistent, rarely forgets.
    #[default]
    VeryConsistent,
    /// Somewhat consistent, might forget occasionally.
    SomewhatConsistent,
    /// Not consistent, prefers something they don't have to think about.
    NotConsistent,
}

impl Lifestyle {
    /// All lifestyle answers, in quiz display order.
    pub const ALL: [Self; 3] = [
        Self::VeryConsistent,
        Self::SomewhatConsistent,
        Self::NotConsistent,
    ];

    /// Stable identifier used in form values and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryConsistent => "very-consistent",
            Self::SomewhatConsistent => "somewhat-consistent",
            Self::NotConsistent => "not-consistent",
        }
    }
}

impl std::fmt::Display for Lifestyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Lifestyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very-consistent" => Ok(Self::VeryConsistent),
            "somewhat-consistent" => Ok(Self::SomewhatConsistent),
            "not-consistent" => Ok(Self::NotConsistent),
            _ => Err(format!("invalid lifestyle: {s}")),
        }
    }
}

/// Whether the visitor plans to become pregnant in the next 1-2 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PregnancyPlans {
    /// Planning pregnancy within the next year.
    #[default]
    Yes,
    /// Not planning pregnancy within the next year.
    No,
    /// Unsure about pregnancy plans.
    Unsure,
}

impl PregnancyPlans {
    /// All pregnancy-plan answers, in quiz display order.
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Unsure];

    /// Stable identifier used in form values and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Unsure => "unsure",
        }
    }
}

impl std::fmt::Display for PregnancyPlans {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PregnancyPlans {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            "unsure" => Ok(Self::Unsure),
            _ => Err(format!("invalid pregnancy plans answer: {s}")),
        }
    }
}

/// Medical history flags collected in step 3 of the quiz.
///
/// Every flag defaults to `false`; an unchecked box means the condition
/// does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MedicalFlags {
    /// Smokes and is over 35.
    #[serde(default)]
    pub smoker_over_35: bool,
    /// History of migraine with aura.
    #[serde(default)]
    pub migraine_aura: bool,
    /// Personal or family history of blood clots (VTE).
    #[serde(default)]
    pub vte_risk: bool,
    /// BMI of 30 or above.
    #[serde(default)]
    pub bmi_over_30: bool,
}

impl MedicalFlags {
    /// Whether estrogen-containing methods are ruled out.
    ///
    /// BMI does not contraindicate estrogen on its own; it only reduces
    /// patch effectiveness and is handled separately by the rule table.
    #[must_use]
    pub const fn estrogen_contraindicated(self) -> bool {
        self.smoker_over_35 || self.migraine_aura || self.vte_risk
    }
}

/// A complete, validated set of quiz answers.
///
/// ## Constraints
///
/// - At least one [`Priority`] must be selected
/// - Duplicate priorities collapse; selection order is not meaningful
///
/// Values deserialized from session storage were validated when stored.
///
/// ## Examples
///
/// ```
/// use petal_core::{Answers, Lifestyle, MedicalFlags, PregnancyPlans, Priority};
///
/// let answers = Answers::new(
///     &[Priority::HormoneFree],
///     Lifestyle::VeryConsistent,
///     MedicalFlags::default(),
///     PregnancyPlans::No,
/// )
/// .unwrap();
/// assert!(answers.has_priority(Priority::HormoneFree));
///
/// // At least one priority is required
/// assert!(Answers::new(
///     &[],
///     Lifestyle::VeryConsistent,
///     MedicalFlags::default(),
///     PregnancyPlans::No,
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answers {
    priorities: BTreeSet<Priority>,
    lifestyle: Lifestyle,
    medical: MedicalFlags,
    plans: PregnancyPlans,
}

impl Answers {
    /// Build a validated answer set.
    ///
    /// # Errors
    ///
    /// Returns [`AnswersError::EmptyPriorities`] if `priorities` is empty.
    pub fn new(
        priorities: &[Priority],
        lifestyle: Lifestyle,
        medical: MedicalFlags,
        plans: PregnancyPlans,
    ) -> Result<Self, AnswersError> {
        let priorities: BTreeSet<Priority> = priorities.iter().copied().collect();
        if priorities.is_empty() {
            return Err(AnswersError::EmptyPriorities);
        }

        Ok(Self {
            priorities,
            lifestyle,
            medical,
            plans,
        })
    }

    /// Whether the given priority was selected.
    #[must_use]
    pub fn has_priority(&self, priority: Priority) -> bool {
        self.priorities.contains(&priority)
    }

    /// The selected priorities.
    #[must_use]
    pub const fn priorities(&self) -> &BTreeSet<Priority> {
        &self.priorities
    }

    /// The lifestyle answer.
    #[must_use]
    pub const fn lifestyle(&self) -> Lifestyle {
        self.lifestyle
    }

    /// The medical history flags.
    #[must_use]
    pub const fn medical(&self) -> MedicalFlags {
        self.medical
    }

    /// The pregnancy-plans answer.
    #[must_use]
    pub const fn plans(&self) -> PregnancyPlans {
        self.plans
    }

    /// Whether estrogen-containing methods are ruled out for this visitor.
    #[must_use]
    pub const fn estrogen_contraindicated(&self) -> bool {
        self.medical.estrogen_contraindicated()
    }

    /// Whether daily pills are a poor fit.
    ///
    /// True when the visitor asked for low maintenance or reported
    /// anything less than very consistent pill-taking.
    #[must_use]
    pub fn avoid_daily_pills(&self) -> bool {
        self.has_priority(Priority::LowMaintenance)
            || matches!(
                self.lifestyle,
                Lifestyle::SomewhatConsistent | Lifestyle::NotConsistent
            )
    }
}
