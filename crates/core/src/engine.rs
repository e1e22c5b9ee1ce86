//! The recommendation rule table.
//!
//! [`evaluate`] walks a fixed set of rules over one [`Answers`] value and
//! collects product picks in rule order. Later rules may repeat a product
//! an earlier rule already picked; duplicates collapse to the first
//! occurrence so the ordering a visitor sees is stable. When no rule
//! matches, the consultation sentinel stands in so the results page is
//! never empty.
//!
//! The rules are clinical-team copy, reviewed as a table. Keep them as a
//! flat sequence of `if` blocks so a reviewer can diff them against that
//! table rule by rule.

use crate::catalog::{Product, ProductId};
use crate::types::{Answers, Lifestyle, PregnancyPlans, Priority};

/// Display label for the consultation sentinel.
pub const CONSULTATION_LABEL: &str = "🤔 Consultation Recommended";

/// Card description for the consultation sentinel.
pub const CONSULTATION_DESCRIPTION: &str =
    "We recommend scheduling a consultation with a Petal provider to find your best match.";

/// One entry on the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// A catalog product matched by the rule table.
    Product(&'static Product),
    /// No rule matched; suggest talking to a provider instead.
    Consultation,
}

impl Recommendation {
    /// Display label, icon glyph included.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Product(product) => product.label,
            Self::Consultation => CONSULTATION_LABEL,
        }
    }

    /// Card description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Product(product) => product.description,
            Self::Consultation => CONSULTATION_DESCRIPTION,
        }
    }

    /// The product id, or `None` for the consultation sentinel.
    #[must_use]
    pub const fn product_id(self) -> Option<ProductId> {
        match self {
            Self::Product(product) => Some(product.id),
            Self::Consultation => None,
        }
    }
}

/// What the rule table produced for one answer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// True when the medical history rules out estrogen. The results page
    /// shows a safety banner and the rules above suppressed every
    /// estrogen-containing product.
    pub estrogen_warning: bool,
    /// Ordered, de-duplicated recommendations. Never empty.
    pub recommendations: Vec<Recommendation>,
}

/// Run the rule table over one answer set.
#[must_use]
pub fn evaluate(answers: &Answers) -> Evaluation {
    let hormone_free = answers.has_priority(Priority::HormoneFree);
    let estrogen_contraindicated = answers.estrogen_contraindicated();
    let avoid_daily_pills = answers.avoid_daily_pills();
    let medical = answers.medical();

    let mut picks: Vec<ProductId> = Vec::new();

    // Hormone-free preference
    if hormone_free {
        picks.push(ProductId::Paragard);
    }

    // Convenience / low maintenance
    if answers.has_priority(Priority::LowMaintenance)
        || answers.lifestyle() == Lifestyle::NotConsistent
    {
        if !hormone_free && !estrogen_contraindicated {
            picks.push(ProductId::Dmpa);
        }
        picks.push(ProductId::Paragard);
    }

    // Daily consistency users: one pill at most, first matching branch wins
    if answers.lifestyle() == Lifestyle::VeryConsistent && !avoid_daily_pills {
        if answers.has_priority(Priority::ImprovingAcneMood)
            && !estrogen_contraindicated
            && !hormone_free
        {
            picks.push(ProductId::Yaz);
        } else if answers.has_priority(Priority::RegulatingPeriods)
            && !estrogen_contraindicated
            && !hormone_free
        {
            picks.push(ProductId::Aviane);
        } else if !hormone_free {
            picks.push(ProductId::Micronor);
        }
    }

    // Weekly/monthly routine users. High BMI drops the patch but not the
    // ring.
    if answers.lifestyle() == Lifestyle::SomewhatConsistent {
        if !estrogen_contraindicated && !hormone_free {
            picks.push(ProductId::NuvaRing);
            if !medical.bmi_over_30 {
                picks.push(ProductId::Xulane);
            }
        } else if !hormone_free {
            picks.push(ProductId::Dmpa);
        }
    }

    // Pregnancy planned soon, or short-term flexibility wanted. Two
    // independent checks, not an if/else chain; both can append.
    if answers.plans() == PregnancyPlans::Yes
        || answers.has_priority(Priority::ShortTermFlexibility)
    {
        if !avoid_daily_pills && !hormone_free {
            picks.push(ProductId::Micronor);
        }
        if !estrogen_contraindicated && !hormone_free {
            picks.push(ProductId::NuvaRing);
        }
    }

    // Acne/mood fallback, skipped when the daily-consistency rule already
    // picked Yaz
    if answers.has_priority(Priority::ImprovingAcneMood) && !picks.contains(&ProductId::Yaz) {
        if !estrogen_contraindicated && !hormone_free && !avoid_daily_pills {
            picks.push(ProductId::Yaz);
        } else if !avoid_daily_pills && !hormone_free {
            picks.push(ProductId::Micronor);
        }
    }

    // Cost-conscious. The fallback branch checks pill tolerance alone; a
    // hormone-free answer set with a cost priority still gets Micronor.
    if answers.has_priority(Priority::Cost) {
        if !estrogen_contraindicated && !hormone_free && !avoid_daily_pills {
            picks.push(ProductId::Aviane);
        } else if !avoid_daily_pills {
            picks.push(ProductId::Micronor);
        }
    }

    assemble(estrogen_contraindicated, &picks)
}

/// Collapse duplicate picks (first occurrence wins) and substitute the
/// consultation sentinel when nothing was picked.
fn assemble(estrogen_warning: bool, picks: &[ProductId]) -> Evaluation {
    let mut seen: Vec<ProductId> = Vec::with_capacity(picks.len());
    let mut recommendations: Vec<Recommendation> = Vec::with_capacity(picks.len());
    for &id in picks {
        if !seen.contains(&id) {
            seen.push(id);
            recommendations.push(Recommendation::Product(id.product()));
        }
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::Consultation);
    }

    Evaluation {
        estrogen_warning,
        recommendations,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::MedicalFlags;

    const NO_FLAGS: MedicalFlags = MedicalFlags {
        smoker_over_35: false,
        migraine_aura: false,
        vte_risk: false,
        bmi_over_30: false,
    };

    const ESTROGEN_PRODUCTS: [ProductId; 4] = [
        ProductId::Yaz,
        ProductId::Aviane,
        ProductId::NuvaRing,
        ProductId::Xulane,
    ];

    fn answers(
        priorities: &[Priority],
        lifestyle: Lifestyle,
        medical: MedicalFlags,
        plans: PregnancyPlans,
    ) -> Answers {
        Answers::new(priorities, lifestyle, medical, plans).unwrap()
    }

    fn ids(evaluation: &Evaluation) -> Vec<ProductId> {
        evaluation
            .recommendations
            .iter()
            .filter_map(|r| r.product_id())
            .collect()
    }

    #[test]
    fn test_hormone_free_alone_yields_paragard_only() {
        let evaluation = evaluate(&answers(
            &[Priority::HormoneFree],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Paragard]);
        assert!(!evaluation.estrogen_warning);
    }

    #[test]
    fn test_low_maintenance_adds_injection_and_iud() {
        let evaluation = evaluate(&answers(
            &[Priority::LowMaintenance],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Dmpa, ProductId::Paragard]);
    }

    #[test]
    fn test_not_consistent_lifestyle_counts_as_low_maintenance() {
        let evaluation = evaluate(&answers(
            &[Priority::Cost],
            Lifestyle::NotConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Dmpa, ProductId::Paragard]);
    }

    #[test]
    fn test_contraindication_suppresses_the_injection_for_low_maintenance() {
        let evaluation = evaluate(&answers(
            &[Priority::LowMaintenance],
            Lifestyle::NotConsistent,
            MedicalFlags {
                smoker_over_35: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Paragard]);
        assert!(evaluation.estrogen_warning);
    }

    #[test]
    fn test_daily_users_regulating_periods_get_aviane() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Aviane]);
    }

    #[test]
    fn test_daily_users_fall_back_to_the_minipill_when_contraindicated() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::VeryConsistent,
            MedicalFlags {
                migraine_aura: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Micronor]);
        assert!(evaluation.estrogen_warning);
    }

    #[test]
    fn test_somewhat_consistent_gets_ring_and_patch() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::SomewhatConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::NuvaRing, ProductId::Xulane]);
        assert!(!evaluation.estrogen_warning);
    }

    #[test]
    fn test_high_bmi_drops_the_patch_but_keeps_the_ring() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::SomewhatConsistent,
            MedicalFlags {
                bmi_over_30: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::NuvaRing]);
        // BMI alone is not an estrogen contraindication
        assert!(!evaluation.estrogen_warning);
    }

    #[test]
    fn test_somewhat_consistent_contraindicated_gets_the_injection() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::SomewhatConsistent,
            MedicalFlags {
                vte_risk: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Dmpa]);
        assert!(evaluation.estrogen_warning);
    }

    #[test]
    fn test_somewhat_consistent_hormone_free_gets_paragard_only() {
        let evaluation = evaluate(&answers(
            &[Priority::HormoneFree],
            Lifestyle::SomewhatConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Paragard]);
    }

    #[test]
    fn test_pregnancy_plans_add_short_term_options() {
        let evaluation = evaluate(&answers(
            &[Priority::RegulatingPeriods],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::Yes,
        ));
        assert_eq!(
            ids(&evaluation),
            [ProductId::Aviane, ProductId::Micronor, ProductId::NuvaRing]
        );
    }

    #[test]
    fn test_short_term_flexibility_dedups_against_the_daily_pick() {
        let evaluation = evaluate(&answers(
            &[Priority::ShortTermFlexibility],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        // The daily rule and the short-term rule both pick Micronor; the
        // first occurrence wins and the order is preserved.
        assert_eq!(ids(&evaluation), [ProductId::Micronor, ProductId::NuvaRing]);
    }

    #[test]
    fn test_acne_mood_daily_users_get_yaz_exactly_once() {
        let evaluation = evaluate(&answers(
            &[Priority::ImprovingAcneMood],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Yaz]);
    }

    #[test]
    fn test_acne_mood_contraindicated_falls_back_to_the_minipill() {
        let evaluation = evaluate(&answers(
            &[Priority::ImprovingAcneMood],
            Lifestyle::VeryConsistent,
            MedicalFlags {
                vte_risk: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Micronor]);
        assert!(evaluation.estrogen_warning);
    }

    #[test]
    fn test_cost_conscious_daily_users_get_aviane_after_the_daily_pick() {
        let evaluation = evaluate(&answers(
            &[Priority::Cost],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Micronor, ProductId::Aviane]);
    }

    #[test]
    fn test_cost_fallback_fires_even_for_hormone_free_answer_sets() {
        // The cost fallback checks pill tolerance alone, so a hormone-free
        // answer set still picks up the minipill.
        let evaluation = evaluate(&answers(
            &[Priority::HormoneFree, Priority::Cost],
            Lifestyle::VeryConsistent,
            NO_FLAGS,
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Paragard, ProductId::Micronor]);
    }

    #[test]
    fn test_cost_contraindicated_daily_users_get_the_minipill_once() {
        let evaluation = evaluate(&answers(
            &[Priority::Cost],
            Lifestyle::VeryConsistent,
            MedicalFlags {
                smoker_over_35: true,
                ..NO_FLAGS
            },
            PregnancyPlans::No,
        ));
        assert_eq!(ids(&evaluation), [ProductId::Micronor]);
    }

    #[test]
    fn test_assemble_substitutes_the_consultation_sentinel() {
        let evaluation = assemble(false, &[]);
        assert_eq!(evaluation.recommendations, [Recommendation::Consultation]);

        let sentinel = evaluation.recommendations.first().copied().unwrap();
        assert_eq!(sentinel.product_id(), None);
        assert_eq!(sentinel.label(), "🤔 Consultation Recommended");
        assert!(sentinel.description().contains("Petal provider"));
    }

    #[test]
    fn test_assemble_keeps_first_occurrences_in_order() {
        let evaluation = assemble(
            true,
            &[
                ProductId::Micronor,
                ProductId::NuvaRing,
                ProductId::Micronor,
                ProductId::Paragard,
                ProductId::NuvaRing,
            ],
        );
        assert_eq!(
            ids(&evaluation),
            [ProductId::Micronor, ProductId::NuvaRing, ProductId::Paragard]
        );
        assert!(evaluation.estrogen_warning);
    }

    #[test]
    fn test_every_answer_combination_holds_the_invariants() {
        for mask in 1_u32..64 {
            let priorities: Vec<Priority> = Priority::ALL
                .iter()
                .enumerate()
                .filter(|&(i, _)| mask & (1 << i) != 0)
                .map(|(_, &p)| p)
                .collect();
            for lifestyle in Lifestyle::ALL {
                for flag_bits in 0_u32..16 {
                    let medical = MedicalFlags {
                        smoker_over_35: flag_bits & 1 != 0,
                        migraine_aura: flag_bits & 2 != 0,
                        vte_risk: flag_bits & 4 != 0,
                        bmi_over_30: flag_bits & 8 != 0,
                    };
                    for plans in PregnancyPlans::ALL {
                        let a = answers(&priorities, lifestyle, medical, plans);
                        let evaluation = evaluate(&a);

                        assert!(!evaluation.recommendations.is_empty(), "empty for {a:?}");
                        assert_eq!(
                            evaluation.estrogen_warning,
                            medical.estrogen_contraindicated(),
                            "warning mismatch for {a:?}"
                        );

                        let got = ids(&evaluation);
                        let mut unique = got.clone();
                        unique.sort_unstable();
                        unique.dedup();
                        assert_eq!(unique.len(), got.len(), "duplicates for {a:?}");

                        if medical.estrogen_contraindicated() {
                            assert!(
                                got.iter().all(|id| !ESTROGEN_PRODUCTS.contains(id)),
                                "estrogen product recommended for {a:?}"
                            );
                        }
                    }
                }
            }
        }
    }
}
