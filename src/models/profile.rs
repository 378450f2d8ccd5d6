//! The six-field player profile returned by the model.

use serde::{Deserialize, Serialize};

/// One cricket player as described by the model.
///
/// Every field is required: a reply missing any key fails deserialization,
/// so a `PlayerProfile` is either complete or never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Name of the player.
    pub full_name: String,
    /// Country they play for.
    pub country: String,
    /// Playing role, e.g. "Right-hand Bat / Right-arm Offbreak".
    pub role: String,
    /// Free-text batting summary, e.g. "Matches: 200, Runs: 8000".
    pub batting_stats: String,
    /// Free-text bowling summary, e.g. "Wickets: 150".
    pub bowling_stats: String,
    /// One short, unique fact.
    pub interesting_fact: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_requires_every_key() {
        let missing_fact = json!({
            "full_name": "Rohit Sharma",
            "country": "India",
            "role": "Right-hand Bat",
            "batting_stats": "Matches: 260",
            "bowling_stats": "Wickets: 8"
        });

        assert!(serde_json::from_value::<PlayerProfile>(missing_fact).is_err());
    }

    #[test]
    fn test_profile_rejects_non_string_values() {
        let numeric_stats = json!({
            "full_name": "Rohit Sharma",
            "country": "India",
            "role": "Right-hand Bat",
            "batting_stats": 10000,
            "bowling_stats": "Wickets: 8",
            "interesting_fact": "Three ODI double centuries."
        });

        assert!(serde_json::from_value::<PlayerProfile>(numeric_stats).is_err());
    }

    #[test]
    fn test_profile_ignores_extra_keys() {
        let extra = json!({
            "full_name": "Ellyse Perry",
            "country": "Australia",
            "role": "All-rounder",
            "batting_stats": "Runs: 7000",
            "bowling_stats": "Wickets: 300",
            "interesting_fact": "Played in a football World Cup.",
            "nickname": "Pez"
        });

        let profile: PlayerProfile = serde_json::from_value(extra).unwrap();
        assert_eq!(profile.full_name, "Ellyse Perry");
    }
}
