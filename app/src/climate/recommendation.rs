use serde::Serialize;

use crate::core::unit::{GramPerCubicMeter, Percent};

use super::{SystemState, rescale_exterior_to_interior_temperature};

// Absolute humidity difference below which inside and outside count as equal (g/m³)
const EQUAL_HUMIDITY_TOLERANCE: f64 = 0.5;
// Share of the interior air that survives a ventilation
const REMAINING_INTERIOR_SHARE: f64 = 0.25;
const MAX_USEFUL_HUMIDITY: Percent = Percent(65.0);
const MAX_BRIEF_HUMIDITY: Percent = Percent(55.0);
const SOMEWHAT_MORE_HUMID: Percent = Percent(5.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "recommendation", rename_all = "kebab-case")]
pub enum Recommendation {
    NotRequired,
    NotUseful,
    ShouldVentilate {
        might_get_more: MightGetMore,
        might_get_more_amount: Amount,
        duration: VentilationDuration,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MightGetMore {
    Humid,
    Warm,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Amount {
    Somewhat,
    ALot,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VentilationDuration {
    Normal,
    Brief,
    VeryBrief,
}

pub fn recommend(system: &SystemState) -> Recommendation {
    let interior = &system.interior;
    let exterior = &system.exterior;

    if is_about_equal(interior.absolute_humidity, exterior.absolute_humidity) {
        tracing::debug!(
            "Absolute humidity inside ({}) and outside ({}) about equal, no ventilation required",
            interior.absolute_humidity,
            exterior.absolute_humidity
        );
        return Recommendation::NotRequired;
    }

    if interior.absolute_humidity > exterior.absolute_humidity {
        tracing::debug!(
            "Drier air outside ({} vs {} inside), ventilate",
            exterior.absolute_humidity,
            interior.absolute_humidity
        );

        let might_get_more = if interior.temperature <= exterior.temperature {
            MightGetMore::Warm
        } else {
            MightGetMore::None
        };

        return Recommendation::ShouldVentilate {
            might_get_more,
            might_get_more_amount: Amount::None,
            duration: VentilationDuration::Normal,
        };
    }

    let rescaled = rescale_exterior_to_interior_temperature(&system.readings());
    let post_ventilation_humidity = post_ventilation_humidity(interior.relative_humidity, rescaled);

    tracing::debug!(
        "Humid air outside, {} at inside temperature, {} expected after ventilation",
        rescaled,
        post_ventilation_humidity
    );

    ventilate_into_humid_air(interior.relative_humidity, post_ventilation_humidity)
}

fn is_about_equal(interior: GramPerCubicMeter, exterior: GramPerCubicMeter) -> bool {
    interior.abs_diff(exterior) <= EQUAL_HUMIDITY_TOLERANCE
}

/// Interior relative humidity after a partial exchange with the rescaled
/// exterior air, rounded to whole percent.
fn post_ventilation_humidity(interior: Percent, rescaled_exterior: Percent) -> Percent {
    let blend = REMAINING_INTERIOR_SHARE * interior + (1.0 - REMAINING_INTERIOR_SHARE) * rescaled_exterior;
    blend.round()
}

fn ventilate_into_humid_air(interior: Percent, post_ventilation: Percent) -> Recommendation {
    if post_ventilation > MAX_USEFUL_HUMIDITY {
        return Recommendation::NotUseful;
    }

    let humidity_delta = post_ventilation - interior;

    let duration = if post_ventilation <= MAX_BRIEF_HUMIDITY {
        VentilationDuration::Brief
    } else {
        VentilationDuration::VeryBrief
    };

    let might_get_more_amount = if humidity_delta <= SOMEWHAT_MORE_HUMID {
        Amount::Somewhat
    } else {
        Amount::ALot
    };

    Recommendation::ShouldVentilate {
        might_get_more: MightGetMore::Humid,
        might_get_more_amount,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::climate::{Reading, ReadingWithAbsoluteHumidity, SystemValues};
    use crate::core::unit::{DegreeCelsius, v};

    fn system(interior: (DegreeCelsius, Percent), exterior: (DegreeCelsius, Percent)) -> SystemState {
        SystemState::from_readings(SystemValues {
            interior: Reading::new(interior.0, interior.1),
            exterior: Reading::new(exterior.0, exterior.1),
        })
    }

    fn humid(amount: Amount, duration: VentilationDuration) -> Recommendation {
        Recommendation::ShouldVentilate {
            might_get_more: MightGetMore::Humid,
            might_get_more_amount: amount,
            duration,
        }
    }

    #[test]
    fn identical_readings_need_no_ventilation() {
        let state = system((v!(20 C), v!(50 %)), (v!(20 C), v!(50 %)));
        assert_eq!(recommend(&state), Recommendation::NotRequired);
    }

    #[test]
    fn recommendation_is_repeatable() {
        let state = system((v!(18 C), v!(40 %)), (v!(20 C), v!(90 %)));
        assert_eq!(recommend(&state), recommend(&state));
    }

    #[test]
    fn humidity_difference_of_half_gram_is_not_required() {
        let reading = |abs: f64| ReadingWithAbsoluteHumidity {
            temperature: v!(20 C),
            relative_humidity: v!(50 %),
            absolute_humidity: GramPerCubicMeter(abs),
        };

        let state = SystemValues {
            interior: reading(8.5),
            exterior: reading(8.0),
        };
        assert_eq!(recommend(&state), Recommendation::NotRequired);

        let state = SystemValues {
            interior: reading(8.0),
            exterior: reading(8.5),
        };
        assert_eq!(recommend(&state), Recommendation::NotRequired);

        let state = SystemValues {
            interior: reading(8.51),
            exterior: reading(8.0),
        };
        assert!(matches!(recommend(&state), Recommendation::ShouldVentilate { .. }));
    }

    #[test]
    fn cold_dry_exterior_air_should_ventilate() {
        let state = system((v!(22 C), v!(60 %)), (v!(5 C), v!(80 %)));

        assert_eq!(
            recommend(&state),
            Recommendation::ShouldVentilate {
                might_get_more: MightGetMore::None,
                might_get_more_amount: Amount::None,
                duration: VentilationDuration::Normal,
            }
        );
    }

    #[test]
    fn warmer_drier_exterior_air_might_get_warm() {
        let state = system((v!(20 C), v!(60 %)), (v!(22 C), v!(40 %)));

        assert_eq!(
            recommend(&state),
            Recommendation::ShouldVentilate {
                might_get_more: MightGetMore::Warm,
                might_get_more_amount: Amount::None,
                duration: VentilationDuration::Normal,
            }
        );
    }

    #[test]
    fn equal_temperatures_with_drier_exterior_might_get_warm() {
        let state = system((v!(20 C), v!(60 %)), (v!(20 C), v!(40 %)));

        assert!(matches!(
            recommend(&state),
            Recommendation::ShouldVentilate {
                might_get_more: MightGetMore::Warm,
                ..
            }
        ));
    }

    #[test]
    fn frosty_exterior_air_should_ventilate() {
        let state = system((v!(20 C), v!(50 %)), (v!(-10 C), v!(80 %)));

        assert!(matches!(
            recommend(&state),
            Recommendation::ShouldVentilate {
                duration: VentilationDuration::Normal,
                might_get_more: MightGetMore::None,
                ..
            }
        ));
    }

    #[test]
    fn very_humid_exterior_air_is_not_useful() {
        // rescaled exterior is ~101.3%, 0.25 * 40 + 0.75 * 101.3 rounds to 86
        let state = system((v!(18 C), v!(40 %)), (v!(20 C), v!(90 %)));
        assert_eq!(recommend(&state), Recommendation::NotUseful);
    }

    #[test]
    fn slightly_more_humid_exterior_air_allows_brief_ventilation() {
        // 0.25 * 50 + 0.75 * 55 = 53.75 -> 54, delta 4
        let state = system((v!(20 C), v!(50 %)), (v!(20 C), v!(55 %)));
        assert_eq!(recommend(&state), humid(Amount::Somewhat, VentilationDuration::Brief));
    }

    #[test]
    fn warmer_humid_exterior_air_allows_very_brief_ventilation() {
        // rescaled exterior is ~67.4%, 0.25 * 50 + 0.75 * 67.4 rounds to 63, delta 13
        let state = system((v!(20 C), v!(50 %)), (v!(22 C), v!(60 %)));
        assert_eq!(recommend(&state), humid(Amount::ALot, VentilationDuration::VeryBrief));
    }

    #[test]
    fn humidity_delta_of_five_is_somewhat() {
        // 0.25 * 40 + 0.75 * 47 = 45.25 -> 45, delta 5
        let state = system((v!(20 C), v!(40 %)), (v!(20 C), v!(47 %)));
        assert_eq!(recommend(&state), humid(Amount::Somewhat, VentilationDuration::Brief));
    }

    #[test]
    fn post_ventilation_humidity_of_55_is_brief() {
        // 0.25 * 40 + 0.75 * 60 = 55
        let state = system((v!(20 C), v!(40 %)), (v!(20 C), v!(60 %)));
        assert_eq!(recommend(&state), humid(Amount::ALot, VentilationDuration::Brief));
    }

    #[test]
    fn post_ventilation_humidity_of_56_is_very_brief() {
        // 0.25 * 20 + 0.75 * 68 = 56
        let state = system((v!(20 C), v!(20 %)), (v!(20 C), v!(68 %)));
        assert_eq!(recommend(&state), humid(Amount::ALot, VentilationDuration::VeryBrief));
    }

    #[test]
    fn post_ventilation_humidity_of_65_still_ventilates() {
        // 0.25 * 20 + 0.75 * 80 = 65
        let state = system((v!(20 C), v!(20 %)), (v!(20 C), v!(80 %)));
        assert_eq!(recommend(&state), humid(Amount::ALot, VentilationDuration::VeryBrief));
    }

    #[test]
    fn post_ventilation_humidity_of_66_is_not_useful() {
        // 0.25 * 24 + 0.75 * 80 = 66
        let state = system((v!(20 C), v!(24 %)), (v!(20 C), v!(80 %)));
        assert_eq!(recommend(&state), Recommendation::NotUseful);
    }

    #[test]
    fn post_ventilation_humidity_rounds_half_up() {
        // 0.25 * 38 + 0.75 * 60 = 54.5 -> 55
        assert_eq!(post_ventilation_humidity(v!(38 %), v!(60 %)), v!(55 %));
        // 0.25 * 42 + 0.75 * 60 = 55.5 -> 56
        assert_eq!(post_ventilation_humidity(v!(42 %), v!(60 %)), v!(56 %));

        let state = system((v!(20 C), v!(42 %)), (v!(20 C), v!(60 %)));
        assert_eq!(recommend(&state), humid(Amount::ALot, VentilationDuration::VeryBrief));
    }

    #[test]
    fn thresholds_on_post_ventilation_humidity() {
        assert_eq!(
            ventilate_into_humid_air(v!(50 %), v!(55 %)),
            humid(Amount::Somewhat, VentilationDuration::Brief)
        );
        assert_eq!(
            ventilate_into_humid_air(v!(50 %), v!(56 %)),
            humid(Amount::ALot, VentilationDuration::VeryBrief)
        );
        assert_eq!(
            ventilate_into_humid_air(v!(60 %), v!(65 %)),
            humid(Amount::Somewhat, VentilationDuration::VeryBrief)
        );
        assert_eq!(ventilate_into_humid_air(v!(60 %), v!(66 %)), Recommendation::NotUseful);
    }
}
