//! Nayin (sound element) reading for a chart.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Element;
use crate::domain::tables::nayin_by_name;

use super::FourPillars;

/// How each non-day nayin relates to the day pillar's nayin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NayinCompatibility {
    /// Sounds whose element feeds or matches the day sound.
    pub favorable: Vec<String>,
    /// Sounds that restrict the day sound, or that it must feed.
    pub unfavorable: Vec<String>,
    /// Everything else, including sounds the day sound restricts.
    pub neutral: Vec<String>,
    pub analysis: String,
}

/// Nayin labels of all four pillars plus the day pillar's reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NayinInfo {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub day_element: Element,
    pub day_traits: Vec<String>,
    pub compatibility: NayinCompatibility,
}

/// Reads nayin labels off an assembled chart and rates how the other
/// three sounds sit with the day sound.
pub struct NayinResolver;

impl NayinResolver {
    pub fn resolve(pillars: &FourPillars) -> NayinInfo {
        let day = pillars.day.nayin.clone();
        let entry = nayin_by_name(&day);
        let day_element = entry
            .map(|e| e.element)
            .unwrap_or(pillars.day_master_element);
        let day_traits = entry
            .map(|e| e.traits.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default();

        let others = [
            pillars.year.nayin.clone(),
            pillars.month.nayin.clone(),
            pillars.hour.nayin.clone(),
        ];
        let compatibility = rate_compatibility(day_element, others);

        NayinInfo {
            year: pillars.year.nayin.clone(),
            month: pillars.month.nayin.clone(),
            day,
            hour: pillars.hour.nayin.clone(),
            day_element,
            day_traits,
            compatibility,
        }
    }
}

fn rate_compatibility(day_element: Element, others: [String; 3]) -> NayinCompatibility {
    let mut favorable = Vec::new();
    let mut unfavorable = Vec::new();
    let mut neutral = Vec::new();

    for name in others {
        let Some(entry) = nayin_by_name(&name) else {
            neutral.push(name);
            continue;
        };
        let other = entry.element;
        if other == day_element || other.generates() == day_element {
            favorable.push(name);
        } else if other.restricts() == day_element || day_element.generates() == other {
            unfavorable.push(name);
        } else {
            neutral.push(name);
        }
    }

    let analysis = describe(favorable.len(), unfavorable.len(), neutral.len());

    NayinCompatibility {
        favorable,
        unfavorable,
        neutral,
        analysis,
    }
}

fn describe(favorable: usize, unfavorable: usize, neutral: usize) -> String {
    let mut analysis = if favorable > unfavorable {
        format!(
            "Supportive layout: {} favorable sound(s) against {} unfavorable.",
            favorable, unfavorable
        )
    } else if unfavorable > favorable {
        format!(
            "Strained layout: {} unfavorable sound(s) against {} favorable.",
            unfavorable, favorable
        )
    } else {
        "Balanced layout with supportive and straining sounds in equal measure.".to_string()
    };
    if neutral > 0 {
        analysis.push_str(&format!(" {} neutral sound(s) with little effect.", neutral));
    }
    analysis
}
