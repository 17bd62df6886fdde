//! Personalized Risk Annotator
//!
//! Combines a reading with a user's medical profile.
//! Every check runs; any subset of tags may be produced.
//! Tag order: asthma, heart, senior.

use super::rules::PersonalThresholds;
use super::types::{EnvironmentalReading, PersonalizedWarnings, UserProfile, WarningTag};

/// Annotate with the default thresholds
pub fn annotate(reading: &EnvironmentalReading, profile: &UserProfile) -> PersonalizedWarnings {
    annotate_with_thresholds(reading, profile, &PersonalThresholds::default())
}

/// Annotation with custom thresholds
pub fn annotate_with_thresholds(
    reading: &EnvironmentalReading,
    profile: &UserProfile,
    thresholds: &PersonalThresholds,
) -> PersonalizedWarnings {
    let mut warnings = PersonalizedWarnings::safe();

    if profile.has_asthma && reading.pm2_5 > thresholds.asthma_pm2_5 {
        warnings.push(WarningTag::AsthmaRisk);
    }

    if profile.has_heart_disease && reading.no2 > thresholds.heart_no2 {
        warnings.push(WarningTag::HeartRisk);
    }

    if profile.age > thresholds.senior_age && reading.aqi > thresholds.senior_aqi {
        warnings.push(WarningTag::SeniorRisk);
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pm2_5: f64, no2: f64, aqi: u32) -> EnvironmentalReading {
        EnvironmentalReading {
            pm2_5,
            no2,
            aqi,
            ..Default::default()
        }
    }

    fn vulnerable_senior() -> UserProfile {
        UserProfile::new(65).with_asthma(true).with_heart_disease(true)
    }

    #[test]
    fn test_all_tags_in_fixed_order() {
        let warnings = annotate(&reading(95.0, 85.0, 160), &vulnerable_senior());
        assert_eq!(
            warnings.tags(),
            &[WarningTag::AsthmaRisk, WarningTag::HeartRisk, WarningTag::SeniorRisk]
        );
        assert!(!warnings.is_safe());
    }

    #[test]
    fn test_clean_air_is_safe() {
        let warnings = annotate(&reading(10.0, 10.0, 10), &vulnerable_senior());
        assert!(warnings.is_safe());
        assert_eq!(warnings, PersonalizedWarnings::safe());
    }

    #[test]
    fn test_tags_accumulate_independently() {
        // Asthmatic senior, PM2.5 and AQI high, NO2 low
        let profile = UserProfile::new(70).with_asthma(true);
        let warnings = annotate(&reading(120.0, 90.0, 180), &profile);
        assert_eq!(warnings.tags(), &[WarningTag::AsthmaRisk, WarningTag::SeniorRisk]);
        assert!(!warnings.contains(WarningTag::HeartRisk));
    }

    #[test]
    fn test_conditions_require_matching_profile() {
        let healthy_adult = UserProfile::new(35);
        let warnings = annotate(&reading(300.0, 300.0, 300), &healthy_adult);
        assert!(warnings.is_safe());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let warnings = annotate(&reading(90.0, 80.0, 150), &vulnerable_senior());
        assert!(warnings.is_safe());

        let sixty = UserProfile::new(60);
        assert!(annotate(&reading(0.0, 0.0, 300), &sixty).is_safe());
    }

    #[test]
    fn test_heart_only() {
        let profile = UserProfile::new(45).with_heart_disease(true);
        let warnings = annotate(&reading(200.0, 81.0, 300), &profile);
        assert_eq!(warnings.tags(), &[WarningTag::HeartRisk]);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = PersonalThresholds {
            senior_age: 50,
            ..Default::default()
        };
        let profile = UserProfile::new(55);
        let r = reading(0.0, 0.0, 160);
        assert!(annotate(&r, &profile).is_safe());
        assert_eq!(
            annotate_with_thresholds(&r, &profile, &thresholds).tags(),
            &[WarningTag::SeniorRisk]
        );
    }

    #[test]
    fn test_annotate_is_deterministic() {
        let r = reading(95.0, 85.0, 160);
        let p = vulnerable_senior();
        assert_eq!(annotate(&r, &p), annotate(&r, &p));
    }
}
