// src/core/api/bookkeeping.rs
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        api::uuid::generate_uuidv4,
        state::{
            accounts::{state::state as accounts_state, types::Account},
            config::state::state::get_config,
            transactions::{
                state::state as transactions_state,
                types::{Transaction, TransactionID, TransactionType},
            },
        },
        types::{IDPrefix, LedgerError, UserID},
    },
    debug_log,
    rest::types::{validate_currency, validate_description, ValidationError},
};

const MISSING_ACCOUNT_MESSAGE: &str = "One of the accounts involved in the transaction doesn't exist.";
const INSUFFICIENT_BALANCE_MESSAGE: &str = "Insufficient balance in the sender's account.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct TransferRequest {
    pub from: Principal,
    pub to: Principal,
    pub amount: u64,
    pub currency: String,
    pub description: String,
    pub transaction_type: TransactionType,
}

impl TransferRequest {
    pub fn validate_body(&self) -> Result<(), ValidationError> {
        if self.amount == 0 {
            return Err(ValidationError {
                field: "amount".to_string(),
                message: "Amount must be greater than zero".to_string(),
            });
        }
        if self.from == self.to {
            return Err(ValidationError {
                field: "to".to_string(),
                message: "Sender and receiver must be different accounts".to_string(),
            });
        }
        validate_currency(&self.currency)?;
        validate_description(&self.description, "description")?;
        Ok(())
    }
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::InvalidPayload(format!("{} - {}", err.field, err.message))
    }
}

pub fn register_account(principal: Principal, opening_balance: u64, now_ms: u64) -> Result<Account, LedgerError> {
    if principal == Principal::anonymous() {
        return Err(LedgerError::Unauthorized(
            "Anonymous callers cannot register an account".to_string(),
        ));
    }
    if accounts_state::account_exists(&principal) {
        return Err(LedgerError::AlreadyExists(format!(
            "Account already registered for principal {}",
            principal.to_text()
        )));
    }

    let account = Account {
        id: UserID::from_principal(&principal),
        principal,
        balance: opening_balance,
        created_at: now_ms,
        updated_at: now_ms,
    };
    accounts_state::insert_new_account(&account);
    debug_log!("Registered account {} with opening balance {}", account.id, opening_balance);
    Ok(account)
}

/// Debits `from`, credits `to` and stores the transaction record. Every check
/// runs before the first write, so a failed call leaves no trace.
pub fn record_transaction(caller: Principal, request: TransferRequest, now_ms: u64) -> Result<Transaction, LedgerError> {
    let mut from_account = accounts_state::get_account(&request.from)
        .ok_or_else(|| LedgerError::NotFound(MISSING_ACCOUNT_MESSAGE.to_string()))?;
    let mut to_account = accounts_state::get_account(&request.to)
        .ok_or_else(|| LedgerError::NotFound(MISSING_ACCOUNT_MESSAGE.to_string()))?;

    if caller != request.from {
        return Err(LedgerError::Unauthorized(
            "Only the account owner can move funds out of it".to_string(),
        ));
    }

    request.validate_body()?;

    let debited = from_account
        .balance
        .checked_sub(request.amount)
        .ok_or_else(|| LedgerError::InsufficientFunds(INSUFFICIENT_BALANCE_MESSAGE.to_string()))?;
    let credited = to_account.balance.checked_add(request.amount).ok_or_else(|| {
        LedgerError::InvalidPayload("Amount would overflow the receiver's balance".to_string())
    })?;

    let mut transaction_id = TransactionID(generate_uuidv4(IDPrefix::Transaction, now_ms));
    while transactions_state::transaction_exists(&transaction_id) {
        transaction_id = TransactionID(generate_uuidv4(IDPrefix::Transaction, now_ms));
    }

    from_account.balance = debited;
    from_account.updated_at = now_ms;
    to_account.balance = credited;
    to_account.updated_at = now_ms;
    accounts_state::save_account(&from_account);
    accounts_state::save_account(&to_account);

    let transaction = Transaction {
        id: transaction_id,
        from: request.from,
        to: request.to,
        amount: request.amount,
        currency: request.currency,
        transaction_type: request.transaction_type,
        timestamp_ms: now_ms,
        description: request.description,
    };
    transactions_state::insert_transaction(&transaction);

    debug_log!(
        "Recorded {} transaction {}: {} {} from {} to {}",
        transaction.transaction_type,
        transaction.id,
        transaction.amount,
        transaction.currency,
        transaction.from,
        transaction.to
    );
    Ok(transaction)
}

/// Same as [`record_transaction`] with the configured default currency.
pub fn transfer_funds(
    caller: Principal,
    from: Principal,
    to: Principal,
    amount: u64,
    description: String,
    transaction_type: TransactionType,
    now_ms: u64,
) -> Result<Transaction, LedgerError> {
    let request = TransferRequest {
        from,
        to,
        amount,
        currency: get_config().default_currency,
        description,
        transaction_type,
    };
    record_transaction(caller, request, now_ms)
}

pub fn get_account(principal: &Principal) -> Result<Account, LedgerError> {
    accounts_state::get_account(principal)
        .ok_or_else(|| LedgerError::NotFound("Account not found.".to_string()))
}

pub fn get_account_balance(principal: &Principal) -> Result<u64, LedgerError> {
    get_account(principal).map(|account| account.balance)
}

pub fn get_transaction_details(transaction_id: &str) -> Result<Transaction, LedgerError> {
    transactions_state::get_transaction(&TransactionID(transaction_id.to_string()))
        .ok_or_else(|| LedgerError::NotFound("Transaction not found.".to_string()))
}

/// Transactions where `principal` is either side, oldest first, optionally
/// narrowed to one type.
pub fn get_transaction_history(principal: &Principal, filter: Option<TransactionType>) -> Vec<Transaction> {
    transactions_state::collect_in_order(|transaction| {
        transaction.involves(principal)
            && filter.map_or(true, |kind| transaction.transaction_type == kind)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::config::{state::state::set_config, types::LedgerConfig};
    use pretty_assertions::assert_eq;

    const NOW: u64 = 1_700_000_000_000;

    fn alice() -> Principal {
        Principal::from_slice(&[1; 29])
    }

    fn bob() -> Principal {
        Principal::from_slice(&[2; 29])
    }

    fn carol() -> Principal {
        Principal::from_slice(&[3; 29])
    }

    fn request(from: Principal, to: Principal, amount: u64, kind: TransactionType) -> TransferRequest {
        TransferRequest {
            from,
            to,
            amount,
            currency: "USD".to_string(),
            description: "rent".to_string(),
            transaction_type: kind,
        }
    }

    #[test]
    fn register_creates_account_with_opening_balance() {
        let account = register_account(alice(), 100, NOW).unwrap();
        assert_eq!(account.balance, 100);
        assert_eq!(account.id, UserID::from_principal(&alice()));
        assert_eq!(get_account_balance(&alice()), Ok(100));
        assert_eq!(accounts_state::account_count(), 1);
    }

    #[test]
    fn register_twice_is_rejected_and_keeps_balance() {
        register_account(alice(), 100, NOW).unwrap();
        let err = register_account(alice(), 0, NOW).unwrap_err();
        assert!(matches!(err, LedgerError::AlreadyExists(_)));
        assert_eq!(get_account_balance(&alice()), Ok(100));
    }

    #[test]
    fn anonymous_principal_cannot_register() {
        let err = register_account(Principal::anonymous(), 0, NOW).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
    }

    #[test]
    fn transfer_moves_balance_and_records_transaction() {
        register_account(alice(), 100, NOW).unwrap();
        register_account(bob(), 5, NOW).unwrap();

        let tx = record_transaction(alice(), request(alice(), bob(), 40, TransactionType::Cash), NOW + 1).unwrap();

        assert_eq!(get_account_balance(&alice()), Ok(60));
        assert_eq!(get_account_balance(&bob()), Ok(45));
        assert_eq!(get_transaction_details(&tx.id.0), Ok(tx.clone()));
        assert_eq!(tx.timestamp_ms, NOW + 1);
        assert!(tx.id.0.starts_with("TransactionID_"));
    }

    #[test]
    fn insufficient_balance_leaves_state_untouched() {
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();

        let err = record_transaction(alice(), request(alice(), bob(), 11, TransactionType::Debit), NOW).unwrap_err();

        assert_eq!(err, LedgerError::InsufficientFunds(INSUFFICIENT_BALANCE_MESSAGE.to_string()));
        assert_eq!(get_account_balance(&alice()), Ok(10));
        assert_eq!(get_account_balance(&bob()), Ok(0));
        assert_eq!(transactions_state::transaction_count(), 0);
    }

    #[test]
    fn exact_balance_can_be_spent() {
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();
        record_transaction(alice(), request(alice(), bob(), 10, TransactionType::Bank), NOW).unwrap();
        assert_eq!(get_account_balance(&alice()), Ok(0));
    }

    #[test]
    fn unknown_account_is_not_found() {
        register_account(alice(), 10, NOW).unwrap();
        let err = record_transaction(alice(), request(alice(), carol(), 1, TransactionType::Cash), NOW).unwrap_err();
        assert_eq!(err, LedgerError::NotFound(MISSING_ACCOUNT_MESSAGE.to_string()));
    }

    #[test]
    fn only_the_sender_may_debit() {
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();
        let err = record_transaction(bob(), request(alice(), bob(), 5, TransactionType::Cash), NOW).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized(_)));
        assert_eq!(get_account_balance(&alice()), Ok(10));
    }

    #[test]
    fn self_transfer_and_zero_amount_are_invalid() {
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();

        let err = record_transaction(alice(), request(alice(), alice(), 5, TransactionType::Cash), NOW).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPayload(_)));
        assert_eq!(get_account_balance(&alice()), Ok(10));

        let err = record_transaction(alice(), request(alice(), bob(), 0, TransactionType::Cash), NOW).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPayload(_)));
    }

    #[test]
    fn credit_overflow_is_rejected() {
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), u64::MAX, NOW).unwrap();
        let err = record_transaction(alice(), request(alice(), bob(), 1, TransactionType::Credit), NOW).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidPayload(_)));
        assert_eq!(get_account_balance(&alice()), Ok(10));
    }

    #[test]
    fn transfer_funds_uses_configured_currency() {
        set_config(LedgerConfig { default_currency: "EUR".to_string() });
        register_account(alice(), 10, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();

        let tx = transfer_funds(alice(), alice(), bob(), 3, "lunch".to_string(), TransactionType::Cash, NOW).unwrap();
        assert_eq!(tx.currency, "EUR");
    }

    #[test]
    fn history_is_filtered_by_party_and_type_in_insertion_order() {
        register_account(alice(), 100, NOW).unwrap();
        register_account(bob(), 100, NOW).unwrap();
        register_account(carol(), 100, NOW).unwrap();

        let first = record_transaction(alice(), request(alice(), bob(), 1, TransactionType::Cash), NOW).unwrap();
        let second = record_transaction(bob(), request(bob(), alice(), 2, TransactionType::Bank), NOW).unwrap();
        record_transaction(bob(), request(bob(), carol(), 3, TransactionType::Cash), NOW).unwrap();
        let fourth = record_transaction(carol(), request(carol(), alice(), 4, TransactionType::Cash), NOW).unwrap();

        let history = get_transaction_history(&alice(), None);
        assert_eq!(history, vec![first.clone(), second.clone(), fourth.clone()]);

        let cash = get_transaction_history(&alice(), Some(TransactionType::Cash));
        assert_eq!(cash, vec![first, fourth]);

        assert_eq!(get_transaction_history(&alice(), Some(TransactionType::Credit)), vec![]);
    }

    #[test]
    fn unknown_transaction_and_account_are_not_found() {
        assert!(matches!(get_transaction_details("TransactionID_nope"), Err(LedgerError::NotFound(_))));
        assert!(matches!(get_account_balance(&alice()), Err(LedgerError::NotFound(_))));
    }
}
