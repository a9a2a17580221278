//! Seasonal strength matrix and major-period seasonal bonuses.

use crate::domain::foundation::{Element, Season};

/// Season-adjusted strength multiplier for an element.
///
/// Four informal bands rotate with the season: peak 1.0, supported 0.7,
/// resting 0.3-0.5, imprisoned or dead 0.2-0.3.
pub fn seasonal_strength(season: Season, element: Element) -> f64 {
    use Element::*;
    match season {
        Season::Spring => match element {
            Wood => 1.0,
            Fire => 0.7,
            Earth => 0.3,
            Metal => 0.2,
            Water => 0.5,
        },
        Season::Summer => match element {
            Wood => 0.5,
            Fire => 1.0,
            Earth => 0.7,
            Metal => 0.3,
            Water => 0.2,
        },
        Season::Autumn => match element {
            Wood => 0.2,
            Fire => 0.3,
            Earth => 0.5,
            Metal => 1.0,
            Water => 0.7,
        },
        Season::Winter => match element {
            Wood => 0.3,
            Fire => 0.2,
            Earth => 0.3,
            Metal => 0.5,
            Water => 1.0,
        },
        Season::EarthMonth => match element {
            Wood => 0.3,
            Fire => 0.5,
            Earth => 1.0,
            Metal => 0.7,
            Water => 0.3,
        },
    }
}

/// Per-element seasonal bonus/penalty applied to major-period strength.
pub fn period_seasonal_bonus(element: Element, season: Season) -> f64 {
    use Element::*;
    use Season::*;
    match element {
        Wood => match season {
            Spring => 20.0,
            Summer => 10.0,
            Autumn => -10.0,
            Winter => 5.0,
            EarthMonth => -5.0,
        },
        Fire => match season {
            Spring => 10.0,
            Summer => 20.0,
            Autumn => -5.0,
            Winter => -10.0,
            EarthMonth => 5.0,
        },
        Earth => match season {
            Spring => -5.0,
            Summer => 5.0,
            Autumn => 10.0,
            Winter => -5.0,
            EarthMonth => 20.0,
        },
        Metal => match season {
            Spring => -10.0,
            Summer => -5.0,
            Autumn => 20.0,
            Winter => 10.0,
            EarthMonth => 5.0,
        },
        Water => match season {
            Spring => 5.0,
            Summer => -10.0,
            Autumn => 10.0,
            Winter => 20.0,
            EarthMonth => -5.0,
        },
    }
}
