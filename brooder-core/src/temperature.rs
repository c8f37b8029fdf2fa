//! Brooder temperature targets per curriculum week.

use serde::{Deserialize, Serialize};

/// Target at chick arrival, also the pre-warm target during preparation.
pub const ARRIVAL_TEMP_F: i64 = 95;

/// No supplemental heat needed from week 6 on.
pub const ROOM_TEMP_F: i64 = 70;

/// Recommended brooder temperature for a week: 95°F in week 1, dropping
/// 5°F per week, at room temperature from week 6 on. Week 0 (and anything
/// earlier) uses the arrival target so the brooder is warm when the
/// chicks show up.
pub fn recommended_for_week(week_number: i64) -> i64 {
    if week_number <= 0 {
        return ARRIVAL_TEMP_F;
    }
    if week_number >= 6 {
        return ROOM_TEMP_F;
    }
    ARRIVAL_TEMP_F - (week_number - 1) * 5
}

/// Behavioral comfort indicators for the week's target. The chicks are a
/// better thermometer than the thermometer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureGuidance {
    pub temperature: i64,
    pub too_cold: &'static str,
    pub too_hot: &'static str,
    pub just_right: &'static str,
    pub tip: &'static str,
}

pub fn guidance_for_week(week_number: i64) -> TemperatureGuidance {
    let tip = if week_number <= 0 {
        "Pre-warm your brooder 24 hours before chicks arrive to ensure stable temperature."
    } else if week_number >= 6 {
        "Your chicks are fully feathered and can regulate their own temperature. Supplemental heat is only needed if room drops below 65°F."
    } else {
        "Lower the temperature by 5°F each week by raising your heat plate. Chicks grow more feathers and need less heat as they develop."
    };

    TemperatureGuidance {
        temperature: recommended_for_week(week_number),
        too_cold: "Chicks are huddled together under the heat source, piling on top of each other",
        too_hot: "Chicks are spread out along the edges of the brooder, panting, wings held away from body",
        just_right: "Chicks are scattered comfortably throughout the brooder, moving freely between warm and cool areas",
        tip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_five_degrees_per_week() {
        assert_eq!(recommended_for_week(1), 95);
        assert_eq!(recommended_for_week(2), 90);
        assert_eq!(recommended_for_week(3), 85);
        assert_eq!(recommended_for_week(4), 80);
        assert_eq!(recommended_for_week(5), 75);
    }

    #[test]
    fn preparation_weeks_use_the_arrival_target() {
        assert_eq!(recommended_for_week(0), 95);
        assert_eq!(recommended_for_week(-2), 95);
    }

    #[test]
    fn floors_at_room_temperature_from_week_six() {
        assert_eq!(recommended_for_week(6), 70);
        assert_eq!(recommended_for_week(8), 70);
        assert_eq!(recommended_for_week(40), 70);
    }

    #[test]
    fn guidance_tip_tracks_the_flock_stage() {
        assert!(guidance_for_week(0).tip.contains("Pre-warm"));
        assert!(guidance_for_week(3).tip.contains("5°F each week"));
        assert!(guidance_for_week(7).tip.contains("fully feathered"));
        assert_eq!(guidance_for_week(3).temperature, 85);
    }
}
