// Request boundary: input normalization and canonical request hashing

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{WalletError, WalletResult};
use crate::models::{TransactRequest, TransactionType, TREASURY_USER_ID};

/// A mutation request that passed boundary validation. Everything downstream
/// of the handler works on this, never on the raw body.
#[derive(Debug, Clone)]
pub struct NormalizedTransact {
    pub user_id: String,
    pub amount: i64,
    pub transaction_type: TransactionType,
    /// Trimmed and uppercased
    pub asset_code: String,
    pub idempotency_key: String,
    /// SHA-256 hex digest of the canonical payload; the equality predicate
    /// for "same request" under one idempotency key
    pub request_hash: String,
}

impl NormalizedTransact {
    /// Validates and normalizes a raw request plus its Idempotency-Key
    /// header. Payload validation failures take precedence over the
    /// header- and actor-level rejections.
    pub fn from_request(
        request: TransactRequest,
        idempotency_key: Option<String>,
    ) -> WalletResult<Self> {
        if request.amount <= 0 {
            return Err(WalletError::Validation(
                "amount must be a positive integer".to_string(),
            ));
        }

        let idempotency_key = idempotency_key
            .filter(|key| !key.is_empty())
            .ok_or(WalletError::MissingIdempotencyKey)?;

        if request.user_id == TREASURY_USER_ID {
            return Err(WalletError::ReservedUser);
        }

        let asset_code = normalize_asset_code(&request.asset_code)?;
        let request_hash = request_hash(
            &request.user_id,
            request.amount,
            request.transaction_type,
            &asset_code,
        )?;

        Ok(Self {
            user_id: request.user_id,
            amount: request.amount,
            transaction_type: request.transaction_type,
            asset_code,
            idempotency_key,
            request_hash,
        })
    }
}

/// Trims and uppercases an asset code; blank codes are a validation error
pub fn normalize_asset_code(code: &str) -> WalletResult<String> {
    let normalized = code.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(WalletError::Validation(
            "asset_code must not be blank".to_string(),
        ));
    }
    Ok(normalized)
}

/// Canonical payload for hashing. The JSON encoding must have its keys in
/// lexicographic order with no insignificant whitespace; serde emits struct
/// fields in declaration order, so the declaration below is that order.
#[derive(Serialize)]
struct CanonicalPayload<'a> {
    amount: i64,
    asset_code: &'a str,
    transaction_type: &'a str,
    user_id: &'a str,
}

/// SHA-256 hex digest over the canonical JSON encoding of a mutation
/// payload. Inputs are post-normalization values.
pub fn request_hash(
    user_id: &str,
    amount: i64,
    transaction_type: TransactionType,
    asset_code: &str,
) -> WalletResult<String> {
    let payload = CanonicalPayload {
        amount,
        asset_code,
        transaction_type: transaction_type.as_str(),
        user_id,
    };
    let encoded = serde_json::to_string(&payload)
        .map_err(|e| WalletError::Internal(format!("canonical payload encoding failed: {}", e)))?;
    Ok(hex::encode(Sha256::digest(encoded.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(user_id: &str, amount: i64, transaction_type: TransactionType, asset_code: &str) -> TransactRequest {
        TransactRequest {
            user_id: user_id.to_string(),
            amount,
            transaction_type,
            asset_code: asset_code.to_string(),
        }
    }

    #[test]
    fn asset_codes_are_trimmed_and_uppercased() {
        assert_eq!(normalize_asset_code("  gold_coin ").unwrap(), "GOLD_COIN");
        assert_eq!(normalize_asset_code("DIAMOND").unwrap(), "DIAMOND");
    }

    #[test]
    fn blank_asset_codes_are_rejected() {
        assert!(matches!(normalize_asset_code("   "), Err(WalletError::Validation(_))));
        assert!(matches!(normalize_asset_code(""), Err(WalletError::Validation(_))));
    }

    #[test]
    fn hash_matches_known_vectors() {
        // sha256 of {"amount":50,"asset_code":"GOLD_COIN","transaction_type":"TOPUP","user_id":"user_123"}
        assert_eq!(
            request_hash("user_123", 50, TransactionType::Topup, "GOLD_COIN").unwrap(),
            "ed77f40edc2dbf6b35d2d4e3c7b012d01fc259cc583ea240d16a81c8aeda60db"
        );
        // sha256 of {"amount":150,"asset_code":"GOLD_COIN","transaction_type":"SPEND","user_id":"user_123"}
        assert_eq!(
            request_hash("user_123", 150, TransactionType::Spend, "GOLD_COIN").unwrap(),
            "b152b2a346ab7205474f1f7de6acfb769694bc77489dcdfb1d7321d6ed328bde"
        );
    }

    #[test]
    fn hash_distinguishes_payloads() {
        let base = request_hash("user_123", 50, TransactionType::Topup, "GOLD_COIN").unwrap();
        assert_ne!(base, request_hash("user_123", 51, TransactionType::Topup, "GOLD_COIN").unwrap());
        assert_ne!(base, request_hash("user_123", 50, TransactionType::Bonus, "GOLD_COIN").unwrap());
        assert_ne!(base, request_hash("user_123", 50, TransactionType::Topup, "DIAMOND").unwrap());
        assert_ne!(base, request_hash("user_124", 50, TransactionType::Topup, "GOLD_COIN").unwrap());
    }

    #[test]
    fn normalization_flows_into_the_hash() {
        let normalized = NormalizedTransact::from_request(
            request("user_123", 50, TransactionType::Topup, " gold_coin "),
            Some("K1".to_string()),
        )
        .unwrap();
        assert_eq!(normalized.asset_code, "GOLD_COIN");
        assert_eq!(
            normalized.request_hash,
            "ed77f40edc2dbf6b35d2d4e3c7b012d01fc259cc583ea240d16a81c8aeda60db"
        );
        assert_eq!(normalized.idempotency_key, "K1");
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [0, -1] {
            let err = NormalizedTransact::from_request(
                request("user_123", amount, TransactionType::Topup, "GOLD_COIN"),
                Some("K1".to_string()),
            )
            .unwrap_err();
            assert!(matches!(err, WalletError::Validation(_)));
        }
    }

    #[test]
    fn amount_validation_precedes_header_checks() {
        let err = NormalizedTransact::from_request(
            request("user_123", 0, TransactionType::Topup, "GOLD_COIN"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, WalletError::Validation(_)));
    }

    #[test]
    fn absent_or_empty_key_is_a_client_error() {
        for key in [None, Some(String::new())] {
            let err = NormalizedTransact::from_request(
                request("user_123", 50, TransactionType::Topup, "GOLD_COIN"),
                key,
            )
            .unwrap_err();
            assert!(matches!(err, WalletError::MissingIdempotencyKey));
        }
    }

    #[test]
    fn treasury_cannot_be_a_client_actor() {
        let err = NormalizedTransact::from_request(
            request(TREASURY_USER_ID, 50, TransactionType::Topup, "GOLD_COIN"),
            Some("K1".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, WalletError::ReservedUser));
    }
}
