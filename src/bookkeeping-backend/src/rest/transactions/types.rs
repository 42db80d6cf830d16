// src/rest/transactions/types.rs
use candid::Principal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    core::state::transactions::types::{Transaction, TransactionType},
    rest::types::{validate_icp_principal, ApiResponse, SortDirection, ValidationError},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListTransactionsRequestBody {
    pub principal: String,
    #[serde(default, deserialize_with = "deserialize_transaction_type")]
    pub transaction_type: Option<TransactionType>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub direction: SortDirection,
    pub cursor: Option<String>,
}

fn default_page_size() -> usize {
    50
}

// accepts "cash", "Cash", "CASH" and so on
fn deserialize_transaction_type<'de, D>(deserializer: D) -> Result<Option<TransactionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| value.parse::<TransactionType>().map_err(serde::de::Error::custom))
        .transpose()
}

impl ListTransactionsRequestBody {
    pub fn validate_body(&self) -> Result<Principal, ValidationError> {
        let principal = validate_icp_principal(&self.principal, "principal")?;

        if self.page_size == 0 || self.page_size > 1000 {
            return Err(ValidationError {
                field: "page_size".to_string(),
                message: "Page size must be between 1 and 1000".to_string(),
            });
        }

        if let Some(cursor) = &self.cursor {
            if cursor.parse::<usize>().is_err() {
                return Err(ValidationError {
                    field: "cursor".to_string(),
                    message: "Cursor must be a non-negative integer".to_string(),
                });
            }
        }

        Ok(principal)
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
            .as_deref()
            .and_then(|cursor| cursor.parse::<usize>().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListTransactionsResponseData {
    pub items: Vec<Transaction>,
    pub page_size: usize,
    pub total: usize,
    pub cursor: Option<String>,
}

impl ListTransactionsResponseData {
    /// Slices an already filtered history. The cursor counts positions in the
    /// requested direction, so `Desc` starts from the newest entry.
    pub fn paginate(mut history: Vec<Transaction>, direction: SortDirection, start: usize, page_size: usize) -> Self {
        let total = history.len();
        if direction == SortDirection::Desc {
            history.reverse();
        }
        let items: Vec<Transaction> = history.into_iter().skip(start).take(page_size).collect();
        let next = start + items.len();
        ListTransactionsResponseData {
            page_size: items.len(),
            items,
            total,
            cursor: if next < total { Some(next.to_string()) } else { None },
        }
    }
}

pub type GetTransactionResponse<'a> = ApiResponse<'a, Transaction>;
pub type ListTransactionsResponse<'a> = ApiResponse<'a, ListTransactionsResponseData>;
