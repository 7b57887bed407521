// API request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reserved user id naming the treasury counterparty wallets. Forbidden as a
/// client-supplied user_id.
pub const TREASURY_USER_ID: &str = "SYSTEM_TREASURY";

/// Kind of balance mutation. SPEND debits the user; the other two credit it
/// out of the treasury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Topup,
    Bonus,
    Spend,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Topup => "TOPUP",
            TransactionType::Bonus => "BONUS",
            TransactionType::Spend => "SPEND",
        }
    }

    /// Signed (user, treasury) deltas for a positive amount. The treasury
    /// delta always mirrors the user delta, which is what keeps the two
    /// ledger entries of a transaction summing to zero.
    pub fn signed_deltas(&self, amount: i64) -> (i64, i64) {
        let user_delta = match self {
            TransactionType::Spend => -amount,
            TransactionType::Topup | TransactionType::Bonus => amount,
        };
        (user_delta, -user_delta)
    }
}

/// Request body for POST /transact
#[derive(Debug, Deserialize)]
pub struct TransactRequest {
    pub user_id: String,
    pub amount: i64,
    pub transaction_type: TransactionType,
    pub asset_code: String,
}

/// Success body for POST /transact; also persisted verbatim as the
/// idempotency record's response payload
#[derive(Debug, Serialize)]
pub struct TransactResponse {
    pub tx_id: String,
    pub user_id: String,
    pub transaction_type: TransactionType,
    pub amount: i64,
    pub new_balance: i64,
    pub asset_type_id: i32,
    pub asset_code: String,
}

/// Query string shared by the two read endpoints
#[derive(Debug, Deserialize)]
pub struct AssetCodeQuery {
    pub asset_code: Option<String>,
}

/// Response for GET /balance/{user_id}
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub user_id: String,
    pub balance: i64,
    pub asset_type_id: i32,
    pub asset_code: String,
}

/// One ledger entry in a history response
#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub transaction_id: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub created_at: DateTime<Utc>,
}

/// Response for GET /transactions/{user_id}, newest entry first
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub asset_code: String,
    pub asset_type_id: i32,
    pub current_balance: i64,
    pub transactions: Vec<HistoryEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_uses_wire_names() {
        assert_eq!(serde_json::to_string(&TransactionType::Topup).unwrap(), "\"TOPUP\"");
        assert_eq!(serde_json::to_string(&TransactionType::Bonus).unwrap(), "\"BONUS\"");
        assert_eq!(serde_json::to_string(&TransactionType::Spend).unwrap(), "\"SPEND\"");
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"SPEND\"").unwrap(),
            TransactionType::Spend
        );
    }

    #[test]
    fn unknown_transaction_type_is_rejected() {
        assert!(serde_json::from_str::<TransactionType>("\"REFUND\"").is_err());
        assert!(serde_json::from_str::<TransactionType>("\"topup\"").is_err());
    }

    #[test]
    fn credits_move_value_from_treasury_to_user() {
        assert_eq!(TransactionType::Topup.signed_deltas(50), (50, -50));
        assert_eq!(TransactionType::Bonus.signed_deltas(7), (7, -7));
    }

    #[test]
    fn spends_move_value_from_user_to_treasury() {
        assert_eq!(TransactionType::Spend.signed_deltas(30), (-30, 30));
    }

    #[test]
    fn request_requires_every_field() {
        let missing_amount = r#"{"user_id":"u","transaction_type":"TOPUP","asset_code":"X"}"#;
        assert!(serde_json::from_str::<TransactRequest>(missing_amount).is_err());

        let fractional_amount =
            r#"{"user_id":"u","amount":1.5,"transaction_type":"TOPUP","asset_code":"X"}"#;
        assert!(serde_json::from_str::<TransactRequest>(fractional_amount).is_err());
    }

    #[test]
    fn response_serializes_in_declared_field_order() {
        let response = TransactResponse {
            tx_id: "t".into(),
            user_id: "u".into(),
            transaction_type: TransactionType::Topup,
            amount: 1,
            new_balance: 2,
            asset_type_id: 3,
            asset_code: "A".into(),
        };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"tx_id":"t","user_id":"u","transaction_type":"TOPUP","amount":1,"new_balance":2,"asset_type_id":3,"asset_code":"A"}"#
        );
    }
}
