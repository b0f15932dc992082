//! Eligibility rules for health (internal diagnostic) events.

use serde::{Deserialize, Serialize};

use crate::version::version_to_numeric;
use crate::{Error, Result};

/// Verbosity level at which verbose health logging is enabled. Compared case-insensitively.
pub const MAX_VERBOSITY_LEVEL: &str = "maximum";

/// Sampling buckets are derived as `user_id mod 10`.
const DIVIDING_FACTOR: i32 = 10;

const ALPHA: &str = "alpha";

/// Internal pipeline lifecycle events that are always routed through the primary telemetry
/// channel, regardless of sampling.
///
/// This is a closed set: new lifecycle events must be added here for
/// [`HealthEventConfig::is_routed_to_primary_channel`] to pick them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HealthEventName {
    EventReceived,
    EventObjectCreated,
    EventCached,
    EventBatchCreated,
    BatchSent,
    EventBatchAck,
    FlushOnBackground,
}

impl HealthEventName {
    /// Every lifecycle event name, in pipeline order.
    pub const ALL: [HealthEventName; 7] = [
        HealthEventName::EventReceived,
        HealthEventName::EventObjectCreated,
        HealthEventName::EventCached,
        HealthEventName::EventBatchCreated,
        HealthEventName::BatchSent,
        HealthEventName::EventBatchAck,
        HealthEventName::FlushOnBackground,
    ];

    /// The event name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthEventName::EventReceived => "Clickstream Event Received",
            HealthEventName::EventObjectCreated => "Clickstream Event Object Created",
            HealthEventName::EventCached => "Clickstream Event Cached",
            HealthEventName::EventBatchCreated => "Clickstream Event Batch Created",
            HealthEventName::BatchSent => "Clickstream Batch Sent",
            HealthEventName::EventBatchAck => "Clickstream Event Batch Ack",
            HealthEventName::FlushOnBackground => "Clickstream Flush On Background",
        }
    }
}

impl std::fmt::Display for HealthEventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote configuration deciding whether health events are produced and where they are routed.
///
/// `HealthEventConfig` is an immutable snapshot: when configuration changes, the host swaps the
/// whole value so concurrent evaluators stay consistent. All checks fail closed—an unconfigured
/// or malformed field disables the corresponding eligibility channel instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthEventConfig {
    /// Minimum app version for which health events are tracked. Versions below the floor (or a
    /// blank floor) are never eligible.
    pub min_tracked_version: String,
    /// Sampling buckets (`user_id mod 10`) whose users report health events.
    pub random_user_id_remainder: Vec<i32>,
    /// Routing targets for eligible events. Opaque to the gating logic, passed through to the
    /// host.
    pub destination: Vec<String>,
    /// Health logging verbosity. Only [`MAX_VERBOSITY_LEVEL`] has meaning.
    pub verbosity_level: String,
}

impl HealthEventConfig {
    /// Parse a configuration from its remote-config JSON representation.
    ///
    /// Missing fields default to empty, which evaluates as ineligible.
    pub fn from_json(json: &str) -> Result<HealthEventConfig> {
        serde_json::from_str(json).map_err(Error::InvalidHealthConfig)
    }

    fn app_version_at_least(&self, app_version: &str) -> bool {
        !app_version.trim().is_empty()
            && !self.min_tracked_version.trim().is_empty()
            && version_to_numeric(app_version) >= version_to_numeric(&self.min_tracked_version)
    }

    fn is_sampled_user(&self, user_id: i32) -> bool {
        !self.random_user_id_remainder.is_empty()
            && self
                .random_user_id_remainder
                .contains(&user_id.rem_euclid(DIVIDING_FACTOR))
    }

    fn is_alpha_build(app_version: &str) -> bool {
        app_version.to_ascii_lowercase().contains(ALPHA)
    }

    /// Whether a health event should be produced at all for this app version and user.
    ///
    /// True iff the version floor is met and the user is either in a sampled bucket or on an
    /// alpha build. Alpha builds bypass bucketing but not the version floor.
    pub fn is_eligible(&self, app_version: &str, user_id: i32) -> bool {
        self.app_version_at_least(app_version)
            && (self.is_sampled_user(user_id) || Self::is_alpha_build(app_version))
    }

    /// Whether `event_name` is a pipeline lifecycle event that is forced through the primary
    /// telemetry channel, independent of sampling.
    ///
    /// Exact match against the closed [`HealthEventName`] set; unknown names evaluate false.
    pub fn is_routed_to_primary_channel(&self, event_name: &str) -> bool {
        HealthEventName::ALL
            .iter()
            .any(|name| name.as_str() == event_name)
    }

    /// Whether verbose health logging is enabled ([`MAX_VERBOSITY_LEVEL`], case-insensitive).
    pub fn is_verbose(&self) -> bool {
        self.verbosity_level.eq_ignore_ascii_case(MAX_VERBOSITY_LEVEL)
    }

    /// Routing targets for eligible events.
    pub fn destinations(&self) -> &[String] {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::{HealthEventConfig, HealthEventName};

    fn make_config(min_version: &str, remainders: Vec<i32>) -> HealthEventConfig {
        HealthEventConfig {
            min_tracked_version: min_version.to_owned(),
            random_user_id_remainder: remainders,
            ..HealthEventConfig::default()
        }
    }

    #[test]
    fn default_is_never_eligible() {
        let config = HealthEventConfig::default();
        assert!(!config.is_eligible("1.0.0", 0));
        assert!(!config.is_eligible("1.0-alpha", 5));
        assert!(!config.is_verbose());
    }

    #[test]
    fn blank_version_floor_disables_eligibility() {
        let config = make_config("", vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(!config.is_eligible("9.9.9", 3));
        assert!(!config.is_eligible("9.9.9-alpha", 3));

        let config = make_config("   ", vec![3]);
        assert!(!config.is_eligible("9.9.9", 3));
    }

    #[test]
    fn blank_app_version_is_ineligible() {
        let config = make_config("1.0.0", vec![3]);
        assert!(!config.is_eligible("", 3));
        assert!(!config.is_eligible("  ", 3));
    }

    #[test]
    fn sampled_user_buckets() {
        let config = make_config("1.0.0", vec![3, 7]);
        assert!(config.is_eligible("1.0.0", 13));
        assert!(config.is_eligible("1.0.0", 7));
        assert!(!config.is_eligible("1.0.0", 12));
    }

    #[test]
    fn negative_user_ids_bucket_into_zero_to_nine() {
        for user_id in [-1i32, -10, -13, -999] {
            assert!((0..10).contains(&user_id.rem_euclid(10)));
        }

        // -13 mod 10 is 7, not -3
        let config = make_config("1.0.0", vec![7]);
        assert!(config.is_eligible("1.0.0", -13));
        let config = make_config("1.0.0", vec![3]);
        assert!(!config.is_eligible("1.0.0", -13));
    }

    #[test]
    fn empty_bucket_set_disables_sampling() {
        let config = make_config("1.0.0", vec![]);
        assert!(!config.is_eligible("2.0.0", 0));
        // alpha channel still works without buckets
        assert!(config.is_eligible("2.0.0.alpha", 0));
    }

    #[test]
    fn alpha_matching_is_case_insensitive() {
        assert!(HealthEventConfig::is_alpha_build("1.0-Alpha"));
        assert!(HealthEventConfig::is_alpha_build("1.0-ALPHA"));
        assert!(!HealthEventConfig::is_alpha_build("1.0"));
    }

    #[test]
    fn alpha_builds_bypass_bucketing_but_not_the_version_floor() {
        let config = make_config("2.0", vec![]);
        // "2.5-Alpha" drops the qualifier segment entirely, leaving 2 < 20;
        // the alpha channel never overrides the floor
        assert!(!config.is_eligible("2.5-Alpha", 1));
        assert!(config.is_eligible("2.5.Alpha", 1));
    }

    #[test]
    fn eligibility_grid() {
        // (bucket-match, alpha) x (version-met, version-not-met)
        let config = make_config("2.0.0", vec![5]);

        // version met
        assert!(config.is_eligible("2.1.0", 15)); // bucket only
        assert!(config.is_eligible("2.1.0.alpha", 11)); // alpha only
        assert!(config.is_eligible("2.1.0.alpha", 15)); // both
        assert!(!config.is_eligible("2.1.0", 11)); // neither

        // version not met
        assert!(!config.is_eligible("1.9.0", 15));
        assert!(!config.is_eligible("1.9.0.alpha", 11));
        assert!(!config.is_eligible("1.9.0.alpha", 15));
        assert!(!config.is_eligible("1.9.0", 11));
    }

    #[test]
    fn version_floor_is_inclusive() {
        let config = make_config("2.0.0", vec![5]);
        assert!(config.is_eligible("2.0.0", 5));
    }

    #[test]
    fn lifecycle_events_route_to_primary_channel() {
        let config = HealthEventConfig::default();
        for name in HealthEventName::ALL {
            assert!(
                config.is_routed_to_primary_channel(name.as_str()),
                "{name} should be routed"
            );
        }
    }

    #[test]
    fn unknown_and_near_miss_names_are_not_routed() {
        let config = HealthEventConfig::default();
        assert!(!config.is_routed_to_primary_channel("Some App Event"));
        assert!(!config.is_routed_to_primary_channel(""));
        // near-misses: case variation and whitespace
        assert!(!config.is_routed_to_primary_channel("clickstream event received"));
        assert!(!config.is_routed_to_primary_channel("Clickstream Event Received "));
    }

    #[test]
    fn verbosity_is_case_insensitive_exact_match() {
        let verbose = |level: &str| HealthEventConfig {
            verbosity_level: level.to_owned(),
            ..HealthEventConfig::default()
        };

        assert!(verbose("maximum").is_verbose());
        assert!(verbose("Maximum").is_verbose());
        assert!(verbose("MAXIMUM").is_verbose());
        assert!(!verbose("max").is_verbose());
        assert!(!verbose("").is_verbose());
    }

    #[test]
    fn parses_remote_config_shape() {
        let config = HealthEventConfig::from_json(
            r#"{
                "minTrackedVersion": "4.37.0",
                "randomUserIdRemainder": [2, 5],
                "destination": ["CT", "CS"],
                "verbosityLevel": "maximum"
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_tracked_version, "4.37.0");
        assert_eq!(config.random_user_id_remainder, [2, 5]);
        assert_eq!(config.destinations(), ["CT", "CS"]);
        assert!(config.is_verbose());
    }

    #[test]
    fn missing_fields_default_to_fail_closed() {
        let config = HealthEventConfig::from_json("{}").unwrap();
        assert_eq!(config, HealthEventConfig::default());
        assert!(!config.is_eligible("9.0.0", 0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(HealthEventConfig::from_json("not json").is_err());
    }
}
