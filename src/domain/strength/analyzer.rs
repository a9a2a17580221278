//! Five-element strength pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Element, RootTier, Season, SexagenaryChart, Stem};
use crate::domain::tables::{hidden_stem_profile, seasonal_strength};

use super::{
    CombinationAnalyzer, ConflictAnalyzer, DetectedCombination, DetectedConflict, DetectedRoot,
    ElementScores, RelationshipAnalyzer, ScoreBreakdown, TransparencyAnalyzer,
};

/// Points per visible stem in the basic component.
const VISIBLE_STEM_POINTS: f64 = 2.0;

/// Weighted share above which an element escapes seasonal adjustment.
const DOMINANCE_THRESHOLD: f64 = 0.40;

/// Normalized score band before blending.
const RESCALE_MIN: f64 = 15.0;
const RESCALE_SPAN: f64 = 70.0;

/// Blend toward the midpoint to avoid degenerate extremes.
const BLEND_WEIGHT: f64 = 0.8;
const BLEND_MIDPOINT: f64 = 50.0;

/// Final score clamp.
const SCORE_MIN: f64 = 1.0;
const SCORE_MAX: f64 = 95.0;

/// Decimal precision of percentage output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Standard,
    High,
}

impl Precision {
    pub fn decimal_places(&self) -> u32 {
        match self {
            Precision::Standard => 1,
            Precision::High => 2,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::Standard
    }
}

/// Day master classification by percentage share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMasterStrength {
    Strong,
    Weak,
    Balanced,
}

impl DayMasterStrength {
    pub fn name(&self) -> &'static str {
        match self {
            DayMasterStrength::Strong => "strong",
            DayMasterStrength::Weak => "weak",
            DayMasterStrength::Balanced => "balanced",
        }
    }
}

/// How evenly the five shares are spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl BalanceTier {
    fn from_score(score: f64) -> Self {
        if score > 80.0 {
            BalanceTier::Excellent
        } else if score > 60.0 {
            BalanceTier::Good
        } else if score > 40.0 {
            BalanceTier::Fair
        } else {
            BalanceTier::Poor
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BalanceTier::Excellent => "excellent",
            BalanceTier::Good => "good",
            BalanceTier::Fair => "fair",
            BalanceTier::Poor => "poor",
        }
    }
}

/// Compact machine-consumable digest of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSummary {
    pub concise_description: String,
    /// `classification-strongest-weakest` tag.
    pub pattern: String,
    pub critical_factors: Vec<String>,
    pub guidance: Vec<String>,
}

/// Per-stage details, emitted on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthBreakdown {
    pub components: ScoreBreakdown,
    pub combinations: Vec<DetectedCombination>,
    pub conflicts: Vec<DetectedConflict>,
    pub roots: Vec<DetectedRoot>,
}

/// Result of the strength pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub day_master: Stem,
    pub day_master_element: Element,
    pub season: Season,
    /// Raw per-element totals before normalization.
    pub totals: ElementScores,
    /// Normalized integer scores in `[1, 95]`.
    pub scores: ElementScores,
    /// Percentage shares summing to ~100.
    pub percentages: ElementScores,
    pub classification: DayMasterStrength,
    /// Elements by raw total, descending; canonical order breaks ties.
    pub ranking: Vec<Element>,
    pub balance_score: f64,
    pub balance_tier: BalanceTier,
    pub summary: String,
    pub machine_summary: MachineSummary,
    pub breakdown: Option<StrengthBreakdown>,
}

/// Runs the six scoring stages and derives the normalized reading.
///
/// # Algorithm
///
/// Basic, relationship, combination, conflict, transparency, and
/// seasonal components are summed per element. Totals are min-max
/// rescaled into `[15, 85]`, blended 80/20 toward a midpoint of 50,
/// clamped to `[1, 95]`, and rounded. Percentages come from the
/// non-negative totals only.
///
/// # Edge Cases
///
/// - All totals equal: the rescale range collapses; a range of 1 is
///   substituted, so every element lands on the same score.
/// - All totals non-positive: every percentage falls back to 20.
/// - An element holding over 40% of the weighted chart presence skips
///   the seasonal stage entirely.
pub struct StrengthAnalyzer;

impl StrengthAnalyzer {
    pub fn analyze(
        chart: &SexagenaryChart,
        precision: Precision,
        include_breakdown: bool,
    ) -> StrengthAnalysis {
        let day_master = chart.day.stem;
        let day_master_element = day_master.element();
        let season = chart.month.branch.season();
        let stems = chart.stems();
        let branches = chart.branches();

        let basic = basic_scores(chart);
        let relationship = RelationshipAnalyzer::score(stems, season);
        let (combination, combinations) = CombinationAnalyzer::analyze(branches, season);
        let (conflict, conflicts) = ConflictAnalyzer::analyze(branches, season);
        let (transparency, roots) = TransparencyAnalyzer::score(chart);
        let seasonal = seasonal_scores(chart, &basic, season);

        let components = ScoreBreakdown {
            basic,
            relationship,
            combination,
            conflict,
            transparency,
            seasonal,
        };
        let totals = components.totals();

        let scores = normalize(&totals);
        let percentages = percentages(&totals, precision);
        let classification = classify(percentages.get(day_master_element));
        let ranking = rank(&totals);
        let balance_score = balance(&percentages);
        let balance_tier = BalanceTier::from_score(balance_score);

        let summary = render_summary(
            day_master,
            day_master_element,
            classification,
            &percentages,
            &ranking,
            balance_score,
            balance_tier,
        );
        let machine_summary = render_machine_summary(
            day_master_element,
            classification,
            &percentages,
            &ranking,
            balance_tier,
        );

        StrengthAnalysis {
            day_master,
            day_master_element,
            season,
            totals,
            scores,
            percentages,
            classification,
            ranking,
            balance_score,
            balance_tier,
            summary,
            machine_summary,
            breakdown: include_breakdown.then_some(StrengthBreakdown {
                components,
                combinations,
                conflicts,
                roots,
            }),
        }
    }
}

fn basic_scores(chart: &SexagenaryChart) -> ElementScores {
    let mut scores = ElementScores::default();
    for stem in chart.stems() {
        scores.add(stem.element(), VISIBLE_STEM_POINTS);
    }
    for branch in chart.branches() {
        for &(stem, weight) in hidden_stem_profile(branch) {
            let points = match RootTier::from_weight(weight) {
                RootTier::Primary => 2.0,
                RootTier::Secondary => 1.0,
                RootTier::Residual => 0.5,
            };
            scores.add(stem.element(), points);
        }
    }
    scores
}

fn seasonal_scores(chart: &SexagenaryChart, basic: &ElementScores, season: Season) -> ElementScores {
    let mut presence = ElementScores::default();
    for stem in chart.stems() {
        presence.add(stem.element(), 1.0);
    }
    for branch in chart.branches() {
        for &(stem, weight) in hidden_stem_profile(branch) {
            presence.add(stem.element(), weight);
        }
    }
    let total_presence = presence.total();

    let mut scores = ElementScores::default();
    for element in Element::ALL {
        let share = presence.get(element) / total_presence;
        if share > DOMINANCE_THRESHOLD {
            continue;
        }
        let multiplier = seasonal_strength(season, element);
        scores.set(element, basic.get(element) * (multiplier - 1.0));
    }
    scores
}

fn normalize(totals: &ElementScores) -> ElementScores {
    let min = Element::ALL
        .into_iter()
        .map(|e| totals.get(e))
        .fold(f64::INFINITY, f64::min);
    let max = Element::ALL
        .into_iter()
        .map(|e| totals.get(e))
        .fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    totals.map(|t| {
        let rescaled = (t - min) / range * RESCALE_SPAN + RESCALE_MIN;
        let blended = BLEND_WEIGHT * rescaled + (1.0 - BLEND_WEIGHT) * BLEND_MIDPOINT;
        blended.clamp(SCORE_MIN, SCORE_MAX).round()
    })
}

fn percentages(totals: &ElementScores, precision: Precision) -> ElementScores {
    let positive = totals.map(|t| t.max(0.0));
    let sum = positive.total();
    if sum <= 0.0 {
        return ElementScores::uniform(20.0);
    }
    let factor = 10f64.powi(precision.decimal_places() as i32);
    positive.map(|t| (t / sum * 100.0 * factor).round() / factor)
}

fn classify(day_master_share: f64) -> DayMasterStrength {
    if day_master_share > 35.0 {
        DayMasterStrength::Strong
    } else if day_master_share < 20.0 {
        DayMasterStrength::Weak
    } else {
        DayMasterStrength::Balanced
    }
}

fn rank(totals: &ElementScores) -> Vec<Element> {
    let mut order: Vec<Element> = Element::ALL.to_vec();
    order.sort_by(|a, b| {
        totals
            .get(*b)
            .partial_cmp(&totals.get(*a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Population standard deviation based balance in `[0, 100]`.
fn balance(percentages: &ElementScores) -> f64 {
    let mean = percentages.total() / 5.0;
    let variance = Element::ALL
        .into_iter()
        .map(|e| {
            let d = percentages.get(e) - mean;
            d * d
        })
        .sum::<f64>()
        / 5.0;
    (100.0 - 2.0 * variance.sqrt()).max(0.0)
}

fn render_summary(
    day_master: Stem,
    day_master_element: Element,
    classification: DayMasterStrength,
    percentages: &ElementScores,
    ranking: &[Element],
    balance_score: f64,
    balance_tier: BalanceTier,
) -> String {
    format!(
        "Day master {} ({}) is {} at {:.1}% of the chart. Strongest element: {}; weakest: {}. Balance {} ({:.1}).",
        day_master,
        day_master_element,
        classification.name(),
        percentages.get(day_master_element),
        ranking[0],
        ranking[4],
        balance_tier.name(),
        balance_score,
    )
}

fn render_machine_summary(
    day_master_element: Element,
    classification: DayMasterStrength,
    percentages: &ElementScores,
    ranking: &[Element],
    balance_tier: BalanceTier,
) -> MachineSummary {
    let strongest = ranking[0];
    let weakest = ranking[4];

    let concise_description = format!(
        "{} day master, {} leading, {} trailing",
        classification.name(),
        strongest,
        weakest
    );
    let pattern = format!("{}-{}-{}", classification.name(), strongest, weakest);

    let critical_factors = vec![
        format!(
            "day master {} holds {:.1}% of the chart",
            day_master_element,
            percentages.get(day_master_element)
        ),
        format!("{} is the strongest element", strongest),
        format!("{} is the weakest element", weakest),
        format!("element balance rated {}", balance_tier.name()),
    ];

    let guidance = match classification {
        DayMasterStrength::Strong => vec![
            format!("channel excess {} through its output element", day_master_element),
            format!("favor the element that restrains {}", day_master_element),
            format!("avoid further reinforcing {}", day_master_element),
        ],
        DayMasterStrength::Weak => vec![
            format!("reinforce {} with its generating element", day_master_element),
            format!("limit exposure to the element restraining {}", day_master_element),
            format!("build up the under-represented {}", weakest),
        ],
        DayMasterStrength::Balanced => vec![
            "maintain the current elemental spread".to_string(),
            format!("watch the under-represented {}", weakest),
            format!("avoid overloading the dominant {}", strongest),
        ],
    };

    MachineSummary {
        concise_description,
        pattern,
        critical_factors,
        guidance,
    }
}
