//! Mock travel requests
//!
//! Hard-coded example WhatsApp requests shown in the inbox panel while the
//! real ingestion pipeline does not exist yet.

use serde::{Deserialize, Serialize};

/// An incoming travel request as it would arrive from the WhatsApp webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub id: u32,
    pub from_number: String,
    pub sender_name: String,
    pub body: String,
}

/// The example requests rendered by the inbox panel.
///
/// These mirror the messages used to exercise the webhook by hand; the
/// first is Arabic, the second English.
pub fn sample_requests() -> Vec<TravelRequest> {
    vec![
        TravelRequest {
            id: 1,
            from_number: "+967771234567".to_string(),
            sender_name: "Ammar Yasser".to_string(),
            body: "السلام عليكم اريد تذكرة عدن الى القاهرة 25/12".to_string(),
        },
        TravelRequest {
            id: 2,
            from_number: "+967771000111".to_string(),
            sender_name: "Sara".to_string(),
            body: "Hi I need flight Aden to Cairo 2025-12-25".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_requests_are_stable() {
        let requests = sample_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests, sample_requests());
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let requests = sample_requests();
        let mut ids: Vec<u32> = requests.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
    }

    #[test]
    fn test_samples_carry_sender_and_body() {
        for request in sample_requests() {
            assert!(!request.sender_name.is_empty());
            assert!(!request.from_number.is_empty());
            assert!(!request.body.is_empty());
        }
    }
}
