use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{CrediarioError, Result};

/// charges applied to an installment paid after its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LateFeeConfig {
    /// flat fine over the installment amount, in percent (default 2.0)
    pub fine_percent: Decimal,
    /// late interest per day over the installment amount, in percent (default 0.033)
    pub daily_interest_percent: Decimal,
}

impl LateFeeConfig {
    pub fn new(fine_percent: Decimal, daily_interest_percent: Decimal) -> Self {
        Self {
            fine_percent,
            daily_interest_percent,
        }
    }
}

impl Default for LateFeeConfig {
    fn default() -> Self {
        Self {
            fine_percent: dec!(2.0),
            daily_interest_percent: dec!(0.033),
        }
    }
}

/// bounds a store applies when offering credit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLimits {
    pub min_monthly_rate: Rate,
    pub max_monthly_rate: Rate,
    pub max_term_months: u32,
    /// installment counts offered by the simulation table
    pub term_options: Vec<u32>,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            min_monthly_rate: Rate::from_percentage(1),
            max_monthly_rate: Rate::from_percentage(20),
            max_term_months: 120,
            term_options: vec![2, 3, 4, 6, 10, 12],
        }
    }
}

impl PlanLimits {
    /// check a monthly rate against the allowed band
    pub fn validate_rate(&self, rate: Rate) -> Result<()> {
        if rate < self.min_monthly_rate || rate > self.max_monthly_rate {
            return Err(CrediarioError::RateOutOfRange {
                rate,
                min: self.min_monthly_rate,
                max: self.max_monthly_rate,
            });
        }
        Ok(())
    }

    pub fn validate_term(&self, term_months: u32) -> Result<()> {
        if term_months == 0 || term_months > self.max_term_months {
            return Err(CrediarioError::InvalidTerm { term_months });
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.min_monthly_rate.is_negative() || self.min_monthly_rate > self.max_monthly_rate {
            return Err(CrediarioError::InvalidConfiguration {
                message: format!(
                    "rate band {} to {} is empty or negative",
                    self.min_monthly_rate, self.max_monthly_rate
                ),
            });
        }
        if let Some(term) = self
            .term_options
            .iter()
            .find(|t| **t == 0 || **t > self.max_term_months)
        {
            return Err(CrediarioError::InvalidConfiguration {
                message: format!("term option {} outside 1..={}", term, self.max_term_months),
            });
        }
        Ok(())
    }
}

/// crediario configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CrediarioConfig {
    pub limits: PlanLimits,
    pub late_fees: LateFeeConfig,
}

impl CrediarioConfig {
    /// load from a JSON document; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CrediarioConfig = serde_json::from_str(json)?;
        config.limits.validate()?;
        if config.late_fees.fine_percent.is_sign_negative()
            || config.late_fees.daily_interest_percent.is_sign_negative()
        {
            return Err(CrediarioError::InvalidConfiguration {
                message: "late fee percentages must not be negative".to_string(),
            });
        }
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_fee_defaults() {
        let config = LateFeeConfig::default();
        assert_eq!(config.fine_percent, dec!(2.0));
        assert_eq!(config.daily_interest_percent, dec!(0.033));
    }

    #[test]
    fn test_validate_rate_band() {
        let limits = PlanLimits::default();
        assert!(limits.validate_rate(Rate::from_percent(dec!(11.5))).is_ok());
        assert!(limits.validate_rate(Rate::from_percentage(1)).is_ok());
        assert!(limits.validate_rate(Rate::from_percentage(20)).is_ok());

        let err = limits.validate_rate(Rate::from_percent(dec!(0.5))).unwrap_err();
        assert!(matches!(err, CrediarioError::RateOutOfRange { .. }));
        assert!(limits.validate_rate(Rate::from_percentage(21)).is_err());
    }

    #[test]
    fn test_validate_term() {
        let limits = PlanLimits::default();
        assert!(limits.validate_term(12).is_ok());
        assert_eq!(
            limits.validate_term(0),
            Err(CrediarioError::InvalidTerm { term_months: 0 })
        );
        assert!(limits.validate_term(121).is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CrediarioConfig::from_json_str(r#"{"late_fees":{"fine_percent":"10"}}"#).unwrap();
        assert_eq!(config.late_fees.fine_percent, dec!(10));
        assert_eq!(config.late_fees.daily_interest_percent, dec!(0.033));
        assert_eq!(config.limits, PlanLimits::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = CrediarioConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(CrediarioConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = CrediarioConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CrediarioError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_rejects_inverted_rate_band() {
        let json = r#"{"limits":{"min_monthly_rate":"0.3","max_monthly_rate":"0.2"}}"#;
        assert!(CrediarioConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_term_option_above_cap() {
        let json = r#"{"limits":{"max_term_months":6,"term_options":[3,12]}}"#;
        assert!(CrediarioConfig::from_json_str(json).is_err());
    }
}
