use alloy_primitives::TxHash;
use thiserror::Error;

use crate::contracts::ContractKind;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Unsupported contract name: {name}")]
    UnknownContract { name: String },
}

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event {event} is not declared by the {contract} interface")]
    NotDeclared {
        event: &'static str,
        contract: ContractKind,
    },
    #[error("Failed to decode {event} log at position {log_index}: {source}")]
    Decode {
        event: &'static str,
        log_index: usize,
        #[source]
        source: alloy_sol_types::Error,
    },
}

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Transaction {tx_hash} was mined but reverted")]
    Reverted { tx_hash: TxHash },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid signer key at index {index}")]
    InvalidSignerKey { index: usize },
}
