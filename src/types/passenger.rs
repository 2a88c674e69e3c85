//! Passenger records
//!
//! Display-only rows returned by the backend's recent-passenger listing.

use serde::{Deserialize, Serialize};

/// A passenger as returned by `GET /api/passengers/recent`.
///
/// The feed replaces its whole list on every fetch and never mutates
/// individual records. `id` is stable across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: i64,
    /// Contact fields may be absent on sparse records and default to empty.
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_recent_listing() {
        let json =
            r#"[{"id":1,"full_name":"Sara Ali","phone":"+967771000111","email":"sara@example.com"}]"#;
        let passengers: Vec<Passenger> = serde_json::from_str(json).unwrap();

        assert_eq!(
            passengers,
            vec![Passenger {
                id: 1,
                full_name: "Sara Ali".to_string(),
                phone: "+967771000111".to_string(),
                email: "sara@example.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_contact_fields_default_to_empty() {
        let json = r#"{"id":7,"full_name":"Ammar Yasser"}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();

        assert_eq!(passenger.id, 7);
        assert_eq!(passenger.full_name, "Ammar Yasser");
        assert_eq!(passenger.phone, "");
        assert_eq!(passenger.email, "");
    }

    #[test]
    fn test_rejects_malformed_records() {
        // id must be numeric
        assert!(serde_json::from_str::<Passenger>(r#"{"id":"one"}"#).is_err());
        // the listing must be an array
        assert!(serde_json::from_str::<Vec<Passenger>>(r#"{"status":"ok"}"#).is_err());
    }
}
