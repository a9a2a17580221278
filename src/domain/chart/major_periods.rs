//! Major period (decade luck cycle) generation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    Branch, Element, Gender, HiddenStem, Polarity, Stem, TenGod,
};
use crate::domain::tables::{hidden_stems, nayin, period_seasonal_bonus};

use super::FourPillars;

/// Years covered by one major period.
const PERIOD_LENGTH: u32 = 10;

/// Default number of generated periods.
pub const DEFAULT_PERIOD_COUNT: usize = 8;

/// Whether periods step forward or backward through the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

/// How a period's element sits with the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Favorability {
    Favorable,
    Unfavorable,
    Neutral,
}

/// One ten-year luck period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorPeriod {
    /// 1-based period number.
    pub index: u32,
    pub start_age: u32,
    pub end_age: u32,
    pub stem: Stem,
    pub branch: Branch,
    pub element: Element,
    pub nayin: String,
    pub hidden_stems: Vec<HiddenStem>,
    /// Ten god of the period stem relative to the day master.
    pub ten_god: TenGod,
    pub favorability: Favorability,
    /// Overall rating in `[10, 100]`.
    pub strength: u32,
    pub description: String,
}

impl MajorPeriod {
    pub fn covers_age(&self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// The full major-period schedule of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorPeriodCalculation {
    pub direction: Direction,
    pub start_age: u32,
    pub periods: Vec<MajorPeriod>,
}

impl MajorPeriodCalculation {
    /// Period covering the given age, if any.
    pub fn current_for_age(&self, age: u32) -> Option<&MajorPeriod> {
        self.periods.iter().find(|p| p.covers_age(age))
    }

    /// First period starting strictly after the given age.
    pub fn next_after_age(&self, age: u32) -> Option<&MajorPeriod> {
        self.periods.iter().find(|p| p.start_age > age)
    }
}

/// Generates the decade luck schedule from an assembled chart.
///
/// # Algorithm
///
/// Direction: yang year stem with a male subject, or yin with a female
/// one, steps forward; the other two cases step backward. The start age
/// is a coarse approximation (base 3 or 7 by the same parity rule plus
/// one year per elapsed season of the month branch) rather than a solar
/// term distance.
pub struct MajorPeriodGenerator;

impl MajorPeriodGenerator {
    pub fn generate(
        pillars: &FourPillars,
        gender: Gender,
        count: usize,
    ) -> MajorPeriodCalculation {
        let direction = direction(pillars.year.stem, gender);
        let start_age = start_age(pillars, gender);

        let month_stem = pillars.month.stem.index();
        let month_branch = pillars.month.branch.index();

        let mut periods = Vec::with_capacity(count);
        for i in 0..count {
            let step = i + 1;
            let (stem, branch) = match direction {
                Direction::Forward => (
                    Stem::from_index(month_stem + step),
                    Branch::from_index(month_branch + step),
                ),
                Direction::Backward => (
                    Stem::from_index((month_stem as isize - step as isize).rem_euclid(10) as usize),
                    Branch::from_index(
                        (month_branch as isize - step as isize).rem_euclid(12) as usize,
                    ),
                ),
            };
            periods.push(build_period(pillars, i as u32 + 1, start_age, stem, branch));
        }

        MajorPeriodCalculation {
            direction,
            start_age,
            periods,
        }
    }
}

fn direction(year_stem: Stem, gender: Gender) -> Direction {
    let yang_year = year_stem.polarity() == Polarity::Yang;
    match gender {
        Gender::Male if yang_year => Direction::Forward,
        Gender::Male => Direction::Backward,
        Gender::Female if yang_year => Direction::Backward,
        Gender::Female => Direction::Forward,
    }
}

fn start_age(pillars: &FourPillars, gender: Gender) -> u32 {
    let yang_year = pillars.year.stem.polarity() == Polarity::Yang;
    let base: u32 = match gender {
        Gender::Male if yang_year => 3,
        Gender::Male => 7,
        Gender::Female if yang_year => 7,
        Gender::Female => 3,
    };
    let adjustment = (pillars.month.branch.index() / 3) as u32;
    (base + adjustment).max(1)
}

fn build_period(
    pillars: &FourPillars,
    index: u32,
    schedule_start: u32,
    stem: Stem,
    branch: Branch,
) -> MajorPeriod {
    let start_age = schedule_start + (index - 1) * PERIOD_LENGTH;
    let end_age = start_age + PERIOD_LENGTH - 1;
    let element = stem.element();
    let nayin_name = nayin(stem, branch)
        .map(|entry| entry.name.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let favorability = rate_favorability(pillars.day_master_element, element);
    let strength = rate_strength(pillars, element, favorability);
    let description = format!(
        "Period {}: {}-{}, {} element, {} sound.",
        index, stem, branch, element, nayin_name
    );

    MajorPeriod {
        index,
        start_age,
        end_age,
        stem,
        branch,
        element,
        nayin: nayin_name,
        hidden_stems: hidden_stems(branch),
        ten_god: TenGod::relation(pillars.day_master, stem),
        favorability,
        strength,
        description,
    }
}

fn rate_favorability(day_master: Element, period: Element) -> Favorability {
    if period == day_master || period.generates() == day_master {
        Favorability::Favorable
    } else if period.restricts() == day_master {
        Favorability::Unfavorable
    } else {
        Favorability::Neutral
    }
}

fn rate_strength(pillars: &FourPillars, element: Element, favorability: Favorability) -> u32 {
    let mut strength: f64 = 50.0;

    match favorability {
        Favorability::Favorable => strength += 30.0,
        Favorability::Unfavorable => strength -= 20.0,
        Favorability::Neutral => {}
    }

    // Same breath as the month stem.
    if pillars.month.element == element {
        strength += 15.0;
    }

    strength += period_seasonal_bonus(element, pillars.season);

    strength.clamp(10.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SexagenaryChart, StemBranch};

    fn pillars() -> FourPillars {
        // Yang year stem (geng), month ren-wu.
        FourPillars::from_sexagenary(&SexagenaryChart::new(
            StemBranch::new(Stem::Geng, Branch::Wu),
            StemBranch::new(Stem::Ren, Branch::Wu),
            StemBranch::new(Stem::Bing, Branch::Yin),
            StemBranch::new(Stem::Jia, Branch::Wu),
        ))
        .unwrap()
    }

    #[test]
    fn yang_year_male_steps_forward() {
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Male, 8);
        assert_eq!(calc.direction, Direction::Forward);
        // Month ren-wu steps to gui-wei, jia-shen, ...
        assert_eq!(calc.periods[0].stem, Stem::Gui);
        assert_eq!(calc.periods[0].branch, Branch::Wei);
        assert_eq!(calc.periods[1].stem, Stem::Jia);
        assert_eq!(calc.periods[1].branch, Branch::Shen);
    }

    #[test]
    fn yang_year_female_steps_backward() {
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Female, 3);
        assert_eq!(calc.direction, Direction::Backward);
        assert_eq!(calc.periods[0].stem, Stem::Xin);
        assert_eq!(calc.periods[0].branch, Branch::Si);
        assert_eq!(calc.periods[2].stem, Stem::Ji);
        assert_eq!(calc.periods[2].branch, Branch::Mao);
    }

    #[test]
    fn start_age_combines_parity_base_and_month_quarter() {
        // Yang year, male: base 3. Month branch wu has index 6 -> +2.
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Male, 1);
        assert_eq!(calc.start_age, 5);
        // Yang year, female: base 7 -> 9.
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Female, 1);
        assert_eq!(calc.start_age, 9);
    }

    #[test]
    fn periods_tile_ten_year_spans() {
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Male, 8);
        assert_eq!(calc.periods.len(), 8);
        for (i, period) in calc.periods.iter().enumerate() {
            assert_eq!(period.index as usize, i + 1);
            assert_eq!(period.end_age, period.start_age + 9);
            if i > 0 {
                assert_eq!(period.start_age, calc.periods[i - 1].end_age + 1);
            }
        }
    }

    #[test]
    fn strength_stays_in_band_and_rewards_supportive_elements() {
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Male, 8);
        for period in &calc.periods {
            assert!((10..=100).contains(&period.strength));
        }
        // Day master fire in summer: a wood period feeds it.
        let wood = calc
            .periods
            .iter()
            .find(|p| p.element == Element::Wood)
            .unwrap();
        assert_eq!(wood.favorability, Favorability::Favorable);
        let water = calc
            .periods
            .iter()
            .find(|p| p.element == Element::Water)
            .unwrap();
        assert_eq!(water.favorability, Favorability::Unfavorable);
        assert!(wood.strength > water.strength);
    }

    #[test]
    fn current_and_next_lookup_follow_age() {
        let calc = MajorPeriodGenerator::generate(&pillars(), Gender::Male, 8);
        // start_age 5: ages 0-4 precede every period.
        assert!(calc.current_for_age(4).is_none());
        assert_eq!(calc.next_after_age(4).unwrap().index, 1);
        assert_eq!(calc.current_for_age(5).unwrap().index, 1);
        assert_eq!(calc.current_for_age(14).unwrap().index, 1);
        assert_eq!(calc.current_for_age(15).unwrap().index, 2);
        assert_eq!(calc.next_after_age(15).unwrap().index, 3);
        // Beyond the schedule.
        assert!(calc.current_for_age(90).is_none());
        assert!(calc.next_after_age(90).is_none());
    }
}
