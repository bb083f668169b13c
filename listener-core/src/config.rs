use std::env;

use url::Url;

use crate::error::ConfigError;

pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";
pub const LOOKBACK_HOURS_VAR: &str = "LOOKBACK_HOURS";

const DEFAULT_LOOKBACK_HOURS: i64 = 24;

/// Client identifier sent with every feed request, as Reddit asks of feed
/// consumers.
pub const USER_AGENT: &str = "reddit-listener/0.1 (product social listening digest)";

/// Runtime configuration taken from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub lookback_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = env::var(WEBHOOK_URL_VAR).map_err(|_| {
            ConfigError::MissingEnvironmentVariable {
                var_name: WEBHOOK_URL_VAR.to_string(),
            }
        })?;
        Url::parse(&webhook_url).map_err(|_| ConfigError::InvalidValue {
            field: WEBHOOK_URL_VAR.to_string(),
            value: webhook_url.clone(),
        })?;

        let lookback_hours = parse_lookback(env::var(LOOKBACK_HOURS_VAR).ok().as_deref())?;

        Ok(Self {
            webhook_url,
            lookback_hours,
        })
    }
}

fn parse_lookback(raw: Option<&str>) -> Result<i64, ConfigError> {
    match raw {
        None => Ok(DEFAULT_LOOKBACK_HOURS),
        Some(value) => value
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|hours| *hours > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: LOOKBACK_HOURS_VAR.to_string(),
                value: value.to_string(),
            }),
    }
}

/// One product team's listening profile: the communities it watches and the
/// keyword phrases it cares about. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ProductConfig {
    pub key: String,
    pub name: String,
    pub communities: Vec<String>,
    pub keywords: Vec<String>,
}

impl ProductConfig {
    pub fn new(key: &str, name: &str, communities: &[&str], keywords: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            communities: communities.iter().map(|c| c.to_string()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The two tracked product profiles. Defined in code rather than a config
/// file: the lists change through review, not at deploy time.
pub fn products() -> Vec<ProductConfig> {
    vec![
        ProductConfig::new(
            "alcott",
            "ALCOTT",
            &[
                // Patient communities
                "ChronicIllness",
                "ADHD",
                "HealthAnxiety",
                "Caregivers",
                "Autoimmune",
                "CaregiversOfParents",
                "CaregiverSupport",
                // Provider communities
                "medicine",
                "familymedicine",
                "nursepractitioner",
                "residency",
                "Doctorsofreddit",
                "familydocs",
                "FemalePhysicians",
                "HealthcareAdmins",
                "healthIT",
                "medicalschool",
                "PrimaryCare",
                "Orthopedics",
                // Behavioral health
                "therapists",
                "socialwork",
                "psychiatry",
                "counseling",
                // Health system / value-based care
                "healthcare",
                "healthcareworkers",
                "publichealth",
            ],
            &[
                // Visit prep - patient side
                "doctor appointment",
                "appointment anxiety",
                "forget to ask",
                "forgot to ask",
                "never remember",
                "what to ask",
                "prepare for appointment",
                "preparing for appointment",
                "medical visit",
                "overwhelmed at doctor",
                "rushed appointment",
                "didnt understand",
                "didn't understand",
                "confused after appointment",
                "health information",
                "medical records",
                "patient portal",
                "test results",
                "lab results",
                "diagnosis overwhelm",
                "visit prep",
                "intake forms",
                // Value-based care
                "care coordination",
                "accountable care",
                "value based care",
                "care management",
                "patient engagement",
                "community health",
                "population health",
                // Patient-side forms frustration
                "doctor won't fill out",
                "doctor refused to fill",
                "getting doctor to fill",
                "need forms filled out",
                "doctor to sign forms",
            ],
        ),
        ProductConfig::new(
            "medipen",
            "MEDIPEN",
            &[
                // Provider communities only
                "medicine",
                "familymedicine",
                "nursepractitioner",
                "residency",
                "Doctorsofreddit",
                "familydocs",
                "FemalePhysicians",
                "HealthcareAdmins",
                "healthIT",
                "medicalschool",
                "PrimaryCare",
                "Orthopedics",
                // Behavioral health
                "therapists",
                "socialwork",
                "psychiatry",
                "counseling",
                // Health system
                "healthcare",
                "healthcareworkers",
                "publichealth",
            ],
            &[
                // Provider-side forms pain
                "disability forms",
                "disability paperwork",
                "disability evaluation",
                "FMLA paperwork",
                "FMLA forms",
                "filling out forms",
                "hate filling out",
                "workers comp forms",
                "workers compensation",
                "short term disability",
                "long term disability",
                "leave paperwork",
                "medical leave forms",
                "functional capacity",
                "work restrictions",
                "return to work forms",
                "filling out disability",
                "UNUM",
                "employer forms",
                "insurance disability",
                "so much paperwork",
                "drowning in paperwork",
                "administrative burden",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookback_defaults_when_unset() {
        assert_eq!(parse_lookback(None).unwrap(), 24);
    }

    #[test]
    fn lookback_accepts_integer_hours() {
        assert_eq!(parse_lookback(Some("168")).unwrap(), 168);
        assert_eq!(parse_lookback(Some(" 48 ")).unwrap(), 48);
    }

    #[test]
    fn lookback_rejects_garbage_and_non_positive_values() {
        assert!(parse_lookback(Some("soon")).is_err());
        assert!(parse_lookback(Some("0")).is_err());
        assert!(parse_lookback(Some("-6")).is_err());
    }

    #[test]
    fn both_products_are_configured() {
        let products = products();
        assert_eq!(products.len(), 2);

        let alcott = &products[0];
        assert_eq!(alcott.name, "ALCOTT");
        assert!(alcott.communities.iter().any(|c| c == "ChronicIllness"));
        assert!(alcott.keywords.iter().any(|k| k == "appointment anxiety"));

        let medipen = &products[1];
        assert_eq!(medipen.name, "MEDIPEN");
        // Medipen listens to provider communities only
        assert!(!medipen.communities.iter().any(|c| c == "ChronicIllness"));
        assert!(medipen.keywords.iter().any(|k| k == "FMLA paperwork"));
    }
}
