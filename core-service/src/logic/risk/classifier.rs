//! Threshold Risk Classifier
//!
//! Population-level verdict from pollution levels and local case counts.
//! Input: EnvironmentalReading
//! Output: RiskVerdict
//!
//! Rules are evaluated in order and the first match wins. A reading that
//! satisfies both the asthma rule and the heart rule is reported as
//! `HighRiskAsthma` only; the heart rule is never consulted in that case.

use super::rules::VerdictThresholds;
use super::types::{EnvironmentalReading, RiskVerdict};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify a reading with the default thresholds
pub fn classify(reading: &EnvironmentalReading) -> RiskVerdict {
    classify_with_thresholds(reading, &VerdictThresholds::default())
}

/// Classification with custom thresholds
pub fn classify_with_thresholds(
    reading: &EnvironmentalReading,
    thresholds: &VerdictThresholds,
) -> RiskVerdict {
    if asthma_pollution(reading, thresholds)
        && reading.respiratory_cases > thresholds.respiratory_cases
    {
        return RiskVerdict::HighRiskAsthma;
    }

    if heart_pollution(reading, thresholds)
        && reading.cardiovascular_cases > thresholds.cardiovascular_cases
    {
        return RiskVerdict::HighRiskHeart;
    }

    RiskVerdict::LowOrModerateRisk
}

fn asthma_pollution(reading: &EnvironmentalReading, thresholds: &VerdictThresholds) -> bool {
    reading.pm2_5 > thresholds.asthma_pm2_5 || reading.aqi > thresholds.asthma_aqi
}

fn heart_pollution(reading: &EnvironmentalReading, thresholds: &VerdictThresholds) -> bool {
    reading.no2 > thresholds.heart_no2 || reading.pm10 > thresholds.heart_pm10
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pm2_5: f64, aqi: u32, resp: u32, no2: f64, pm10: f64, cardio: u32) -> EnvironmentalReading {
        EnvironmentalReading {
            pm2_5,
            aqi,
            respiratory_cases: resp,
            no2,
            pm10,
            cardiovascular_cases: cardio,
            ..Default::default()
        }
    }

    #[test]
    fn test_high_pm2_5_with_respiratory_cases() {
        let r = reading(120.0, 0, 8, 0.0, 0.0, 0);
        assert_eq!(classify(&r), RiskVerdict::HighRiskAsthma);
    }

    #[test]
    fn test_high_aqi_alone_triggers_asthma_rule() {
        let r = reading(0.0, 201, 8, 0.0, 0.0, 0);
        assert_eq!(classify(&r), RiskVerdict::HighRiskAsthma);
    }

    #[test]
    fn test_high_no2_with_cardiovascular_cases() {
        let r = reading(0.0, 0, 0, 90.0, 0.0, 6);
        assert_eq!(classify(&r), RiskVerdict::HighRiskHeart);
    }

    #[test]
    fn test_high_pm10_alone_triggers_heart_rule() {
        let r = reading(0.0, 0, 0, 0.0, 121.0, 6);
        assert_eq!(classify(&r), RiskVerdict::HighRiskHeart);
    }

    #[test]
    fn test_asthma_wins_when_both_rules_match() {
        let r = reading(150.0, 250, 10, 90.0, 150.0, 8);
        assert_eq!(classify(&r), RiskVerdict::HighRiskAsthma);
    }

    #[test]
    fn test_pollution_without_cases_is_low_risk() {
        let r = reading(101.0, 0, 0, 0.0, 0.0, 0);
        assert_eq!(classify(&r), RiskVerdict::LowOrModerateRisk);

        let r = reading(0.0, 0, 0, 200.0, 300.0, 5);
        assert_eq!(classify(&r), RiskVerdict::LowOrModerateRisk);
    }

    #[test]
    fn test_cases_without_pollution_is_low_risk() {
        let r = reading(10.0, 50, 100, 10.0, 10.0, 100);
        assert_eq!(classify(&r), RiskVerdict::LowOrModerateRisk);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_limits = reading(100.0, 200, 8, 80.0, 120.0, 6);
        assert_eq!(classify(&at_limits), RiskVerdict::LowOrModerateRisk);

        let cases_at_limits = reading(150.0, 250, 7, 90.0, 150.0, 5);
        assert_eq!(classify(&cases_at_limits), RiskVerdict::LowOrModerateRisk);
    }

    #[test]
    fn test_falls_through_to_heart_rule() {
        // Asthma pollution present but respiratory cases too low
        let r = reading(150.0, 0, 3, 95.0, 0.0, 9);
        assert_eq!(classify(&r), RiskVerdict::HighRiskHeart);
    }

    #[test]
    fn test_below_all_pollution_limits_is_always_low() {
        for pm2_5 in [0.0, 50.0, 100.0] {
            for aqi in [0, 150, 200] {
                for no2 in [0.0, 40.0, 80.0] {
                    for pm10 in [0.0, 60.0, 120.0] {
                        let r = reading(pm2_5, aqi, u32::MAX, no2, pm10, u32::MAX);
                        assert_eq!(classify(&r), RiskVerdict::LowOrModerateRisk);
                    }
                }
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = VerdictThresholds {
            asthma_pm2_5: 50.0,
            ..Default::default()
        };
        let r = reading(60.0, 0, 8, 0.0, 0.0, 0);
        assert_eq!(classify(&r), RiskVerdict::LowOrModerateRisk);
        assert_eq!(classify_with_thresholds(&r, &thresholds), RiskVerdict::HighRiskAsthma);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let r = reading(150.0, 250, 10, 90.0, 150.0, 8);
        assert_eq!(classify(&r), classify(&r));
    }
}
