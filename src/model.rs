// 🏦 Payload Model - SimpleFIN /accounts document
// Tolerant decode: unknown fields ignored, every field optional, wrong types rejected,
// field names matched without regard to case
//
// Monetary values stay as the exact strings the bridge sent (no f64 round-trip).
// `extra` and `holdings` are untyped JSON trees, passed through untouched so the
// optional file output reproduces them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{Error, Result};

// ============================================================================
// DOCUMENT ROOT
// ============================================================================

/// Root of the `/accounts` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialDocument {
    /// Human-readable error notices reported by the bridge
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<Account>,

    /// Auxiliary API messages (`x-api-message`), absent on most responses
    #[serde(rename = "x-api-message", skip_serializing_if = "Option::is_none")]
    pub api_messages: Option<Vec<String>>,
}

// ============================================================================
// ORGANIZATION
// ============================================================================

/// Institution backing an account, embedded by value in every account.
/// Accounts of the "same" organization only share an equal `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub domain: String,
    pub name: String,

    /// Service-identifying URL of the bridge for this institution
    #[serde(rename = "sfin-url")]
    pub sfin_url: String,

    pub url: String,
}

// ============================================================================
// TRANSACTION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: String,

    /// Posting time, seconds since the Unix epoch
    pub posted: i64,

    /// Decimal amount, verbatim (e.g. "-12.50")
    pub amount: String,

    pub description: String,
}

impl Transaction {
    /// Posting time as a UTC timestamp (None if out of range)
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.posted, 0)
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub org: Organization,
    pub id: String,
    pub name: String,

    /// Currency code (ISO 4217 or a bridge-specific URL for custom units)
    pub currency: String,

    /// Current balance, verbatim decimal string
    pub balance: String,

    #[serde(rename = "available-balance")]
    pub available_balance: String,

    /// Balance-as-of time, seconds since the Unix epoch
    #[serde(rename = "balance-date")]
    pub balance_date: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub transactions: Vec<Transaction>,

    /// Institution-specific fields, kept as arbitrary JSON
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "HashMap::is_empty"
    )]
    pub extra: HashMap<String, serde_json::Value>,

    /// Opaque holdings, never interpreted
    #[serde(deserialize_with = "null_as_default")]
    pub holdings: Vec<serde_json::Value>,

    /// Set by the error correlator only; never read from the payload
    #[serde(skip_deserializing, skip_serializing_if = "is_false")]
    pub possible_error: bool,
}

impl Account {
    /// Balance-as-of time as a UTC timestamp (None if out of range)
    pub fn balance_as_of(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.balance_date, 0)
    }
}

// Helper functions for serde
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(val: &bool) -> bool {
    !*val
}

// ============================================================================
// DECODE / SERIALIZE
// ============================================================================

// Spellings the wire names are also sent as, after lowercasing
fn canonical_key(key: &str) -> String {
    let lower = key.to_lowercase();
    let canonical = match lower.as_str() {
        "xapimessage" => "x-api-message",
        "sfinurl" => "sfin-url",
        "availablebalance" => "available-balance",
        "balancedate" => "balance-date",
        "possibleerror" => "possible_error",
        _ => return lower,
    };
    canonical.to_string()
}

/// Lowercase the keys of one object in place. When two keys fold to the
/// same name the later one in the document wins.
fn fold_keys(value: &mut Value) -> Option<&mut Map<String, Value>> {
    let Value::Object(map) = value else {
        return None;
    };
    let folded: Map<String, Value> = std::mem::take(map)
        .into_iter()
        .map(|(key, value)| (canonical_key(&key), value))
        .collect();
    *map = folded;
    Some(map)
}

/// Key matching is case-insensitive for the document's own fields.
/// Keys inside `extra` and `holdings` are left exactly as sent.
fn fold_document_keys(document: &mut Value) {
    let Some(root) = fold_keys(document) else {
        return;
    };
    let Some(Value::Array(accounts)) = root.get_mut("accounts") else {
        return;
    };

    for account in accounts {
        let Some(account) = fold_keys(account) else {
            continue;
        };
        if let Some(org) = account.get_mut("org") {
            fold_keys(org);
        }
        if let Some(Value::Array(transactions)) = account.get_mut("transactions") {
            for transaction in transactions {
                fold_keys(transaction);
            }
        }
    }
}

/// Decode a response body into a [`FinancialDocument`]
pub fn decode_payload(bytes: &[u8]) -> Result<FinancialDocument> {
    let mut value: Value = serde_json::from_slice(bytes).map_err(|source| Error::MalformedPayload {
        path: ".".to_string(),
        source,
    })?;
    fold_document_keys(&mut value);

    serde_path_to_error::deserialize(value).map_err(|err| Error::MalformedPayload {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

/// Pretty-print a document (two-space indent) using the wire field names
pub fn serialize_document(document: &FinancialDocument) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(document)
}
