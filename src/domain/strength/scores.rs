//! Per-element score containers used throughout the strength pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Element;

/// One `f64` value per element.
///
/// The pipeline accumulates raw component scores, percentages, and
/// normalized values in this shape. Iteration order is always the
/// canonical generation order: wood, fire, earth, metal, water.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementScores {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementScores {
    /// All five values set to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            wood: value,
            fire: value,
            earth: value,
            metal: value,
            water: value,
        }
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn set(&mut self, element: Element, value: f64) {
        *self.slot(element) = value;
    }

    pub fn add(&mut self, element: Element, amount: f64) {
        *self.slot(element) += amount;
    }

    fn slot(&mut self, element: Element) -> &mut f64 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Entries in canonical element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        Element::ALL.into_iter().map(move |e| (e, self.get(e)))
    }

    pub fn total(&self) -> f64 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// New score set with `f` applied to every value.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        let mut out = Self::default();
        for element in Element::ALL {
            out.set(element, f(self.get(element)));
        }
        out
    }

    /// Element with the highest value; canonical order breaks ties.
    pub fn strongest(&self) -> Element {
        let mut best = Element::Wood;
        for element in Element::ALL {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }

    /// Element with the lowest value; canonical order breaks ties.
    pub fn weakest(&self) -> Element {
        let mut worst = Element::Wood;
        for element in Element::ALL {
            if self.get(element) < self.get(worst) {
                worst = element;
            }
        }
        worst
    }
}

/// Raw pipeline components, kept separately so callers can inspect where
/// a score came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub basic: ElementScores,
    pub relationship: ElementScores,
    pub combination: ElementScores,
    pub conflict: ElementScores,
    pub transparency: ElementScores,
    pub seasonal: ElementScores,
}

impl ScoreBreakdown {
    /// Per-element sum of all six components.
    pub fn totals(&self) -> ElementScores {
        let mut totals = ElementScores::default();
        for element in Element::ALL {
            totals.set(
                element,
                self.basic.get(element)
                    + self.relationship.get(element)
                    + self.combination.get(element)
                    + self.conflict.get(element)
                    + self.transparency.get(element)
                    + self.seasonal.get(element),
            );
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get_round_trip() {
        let mut scores = ElementScores::default();
        scores.add(Element::Fire, 2.5);
        scores.add(Element::Fire, 1.0);
        assert_eq!(scores.get(Element::Fire), 3.5);
        assert_eq!(scores.get(Element::Wood), 0.0);
    }

    #[test]
    fn iter_follows_generation_order() {
        let scores = ElementScores::uniform(1.0);
        let order: Vec<Element> = scores.iter().map(|(e, _)| e).collect();
        assert_eq!(order, Element::ALL.to_vec());
    }

    #[test]
    fn strongest_breaks_ties_by_canonical_order() {
        let scores = ElementScores::uniform(3.0);
        assert_eq!(scores.strongest(), Element::Wood);

        let mut scores = scores;
        scores.set(Element::Metal, 9.0);
        assert_eq!(scores.strongest(), Element::Metal);
    }

    #[test]
    fn weakest_finds_minimum() {
        let mut scores = ElementScores::uniform(5.0);
        scores.set(Element::Earth, -2.0);
        assert_eq!(scores.weakest(), Element::Earth);
    }

    #[test]
    fn breakdown_totals_sum_components() {
        let mut breakdown = ScoreBreakdown::default();
        breakdown.basic.add(Element::Water, 4.0);
        breakdown.seasonal.add(Element::Water, 2.0);
        breakdown.conflict.add(Element::Water, -1.5);
        assert_eq!(breakdown.totals().get(Element::Water), 4.5);
        assert_eq!(breakdown.totals().get(Element::Fire), 0.0);
    }
}
