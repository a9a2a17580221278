//! Four-pillar assembly from a raw sexagenary chart.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Branch, CalculationStage, ChartError, Element, Pillar, PillarPosition, Season,
    SexagenaryChart, Stem, StemBranch,
};
use crate::domain::strength::ElementScores;
use crate::domain::tables::{hidden_stems, nayin};

/// The assembled natal chart: four pillars plus the attributes every
/// downstream calculator reads off them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// The day stem, reference point for ten gods and strength reading.
    pub day_master: Stem,
    pub day_master_element: Element,
    /// Season commanded by the month branch.
    pub season: Season,
}

impl FourPillars {
    /// Assemble the chart from a calendar provider's sexagenary output.
    ///
    /// # Edge Cases
    ///
    /// - A stem/branch pair with mismatched polarity has no nayin and no
    ///   place in the sixty-cycle; the assembly is rejected.
    pub fn from_sexagenary(chart: &SexagenaryChart) -> Result<Self, ChartError> {
        let year = build_pillar(PillarPosition::Year, chart.year)?;
        let month = build_pillar(PillarPosition::Month, chart.month)?;
        let day = build_pillar(PillarPosition::Day, chart.day)?;
        let hour = build_pillar(PillarPosition::Hour, chart.hour)?;

        let day_master = day.stem;
        let day_master_element = day.element;
        let season = month.branch.season();

        Ok(Self {
            year,
            month,
            day,
            hour,
            day_master,
            day_master_element,
            season,
        })
    }

    /// Pillars in chart order: year, month, day, hour.
    pub fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }

    pub fn stems(&self) -> [Stem; 4] {
        [self.year.stem, self.month.stem, self.day.stem, self.hour.stem]
    }

    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }

    /// Count of visible stems per element, one point each.
    pub fn visible_element_counts(&self) -> ElementScores {
        let mut counts = ElementScores::default();
        for stem in self.stems() {
            counts.add(stem.element(), 1.0);
        }
        counts
    }

    /// Weighted presence per element: one point per visible stem plus the
    /// hidden-stem weights of every branch. Used for dominance detection.
    pub fn weighted_element_counts(&self) -> ElementScores {
        let mut counts = self.visible_element_counts();
        for pillar in self.pillars() {
            for hidden in &pillar.hidden_stems {
                counts.add(hidden.element, hidden.weight);
            }
        }
        counts
    }
}

fn build_pillar(position: PillarPosition, pair: StemBranch) -> Result<Pillar, ChartError> {
    let entry = nayin(pair.stem, pair.branch).ok_or_else(|| {
        ChartError::stage(
            CalculationStage::FourPillars,
            format!(
                "{} pillar {}-{} mixes stem and branch polarity",
                position, pair.stem, pair.branch
            ),
        )
    })?;

    Ok(Pillar {
        position,
        stem: pair.stem,
        branch: pair.branch,
        element: pair.stem.element(),
        branch_element: pair.branch.element(),
        hidden_stems: hidden_stems(pair.branch),
        nayin: entry.name.to_string(),
    })
}
