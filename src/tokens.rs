//! Token records and the expiry decision
//!
//! The gate re-reads a token record through a [`TokenSource`] on every
//! decision and asks [`check_expiry`] whether it is still usable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locally held credential whose expiry gates navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Raw token value. A blank value counts as "no token".
    pub token: String,
    /// Expiry as unix seconds. `None` means the token never expires.
    pub expires_at: Option<u64>,
    /// Opaque claims carried alongside the token; never read by the gate.
    #[serde(flatten)]
    pub claims: BTreeMap<String, serde_json::Value>,
}

impl TokenRecord {
    pub fn new(token: impl Into<String>, expires_at: Option<u64>) -> Self {
        Self {
            token: token.into(),
            expires_at,
            claims: BTreeMap::new(),
        }
    }
}

/// Token source capability: look up the currently stored record, if any.
///
/// Unavailability is represented as absence, not as an error. The gate
/// reads fresh on every decision and never mutates or caches the record.
pub trait TokenSource {
    fn get(&self) -> Option<TokenRecord>;
}

/// Pure allow/deny decision for a token record at a clock reading of
/// `now` unix seconds.
///
/// Allows iff the record is present, its token value is non-blank, and
/// `now < expires_at + offset`. The adjusted expiry instant itself is
/// already expired. A positive offset grants a grace period past nominal
/// expiry; a negative offset forces earlier re-authentication. A record
/// without an expiry never expires.
pub fn check_expiry(record: Option<&TokenRecord>, offset: i64, now: u64) -> bool {
    let record = match record {
        Some(r) if !r.token.is_empty() => r,
        _ => return false,
    };
    match record.expires_at {
        Some(exp) => (now as i64) < (exp as i64).saturating_add(offset),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_token_denies() {
        assert!(!check_expiry(None, 0, 0));
        assert!(!check_expiry(None, 1_000_000, 500));
        assert!(!check_expiry(None, -1_000_000, 500));
    }

    #[test]
    fn test_blank_token_denies() {
        let record = TokenRecord::new("", Some(u64::MAX));
        assert!(!check_expiry(Some(&record), 0, 0));
    }

    #[test]
    fn test_zero_offset_boundary() {
        let record = TokenRecord::new("tok", Some(1000));
        assert!(check_expiry(Some(&record), 0, 999));
        // the expiry instant itself is expired
        assert!(!check_expiry(Some(&record), 0, 1000));
        assert!(!check_expiry(Some(&record), 0, 1001));
    }

    #[test]
    fn test_positive_offset_grace() {
        let record = TokenRecord::new("tok", Some(1000));
        assert!(check_expiry(Some(&record), 50, 1020));
        assert!(check_expiry(Some(&record), 50, 1049));
        assert!(!check_expiry(Some(&record), 50, 1050));
        assert!(!check_expiry(Some(&record), 50, 1060));
    }

    #[test]
    fn test_negative_offset_tightens() {
        let record = TokenRecord::new("tok", Some(1000));
        // 950 >= 1000 - 100
        assert!(!check_expiry(Some(&record), -100, 950));
        assert!(check_expiry(Some(&record), -100, 899));
        assert!(!check_expiry(Some(&record), -100, 900));
    }

    #[test]
    fn test_extreme_offset_honored() {
        let record = TokenRecord::new("tok", Some(1000));
        assert!(!check_expiry(Some(&record), i64::MIN, 0));
        assert!(check_expiry(Some(&record), i64::MAX, u64::MAX / 4));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        let record = TokenRecord::new("tok", None);
        assert!(check_expiry(Some(&record), 0, u64::MAX / 2));
        assert!(check_expiry(Some(&record), -1_000_000, u64::MAX / 2));
    }

    #[test]
    fn test_record_claims_are_opaque() {
        let mut record = TokenRecord::new("tok", Some(1000));
        record
            .claims
            .insert("sub".into(), serde_json::json!("user-1"));
        // claims never influence the decision
        assert!(check_expiry(Some(&record), 0, 999));
        assert!(!check_expiry(Some(&record), 0, 1000));
    }

    #[test]
    fn test_record_deserialize_collects_unknown_claims() {
        let record: TokenRecord = serde_json::from_str(
            r#"{"token":"tok","expires_at":1000,"sub":"user-1","aud":"app"}"#,
        )
        .unwrap();
        assert_eq!(record.token, "tok");
        assert_eq!(record.expires_at, Some(1000));
        assert_eq!(record.claims["sub"], serde_json::json!("user-1"));
        assert_eq!(record.claims["aud"], serde_json::json!("app"));
    }
}
