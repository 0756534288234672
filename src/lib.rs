//! Helpers for exercising multi-signature wallet contracts from Rust tests:
//! decoding wallet events out of receipts, building and signing the wallet's
//! approval hash, and predicting where the next forwarder will be deployed.

pub mod contracts;
pub mod deploy;
pub mod logs;
pub mod models;
pub mod network;
pub mod signing;
pub mod utils;

pub use contracts::{ContractHandle, ContractKind, IForwarder, IWallet};
pub use deploy::{create_forwarder_from_wallet, get_next_contract_address};
pub use logs::{
    read_deposited_log, read_event_logs, read_forwarder_deposited_log,
    read_safe_mode_activated_log, read_transacted_log, receipts::ReceiptLogs,
};
pub use models::common::Config;
pub use models::events::{Deposited, ForwarderDeposited, SafeModeActivated, Transacted};
pub use network::{connect, show_balances, wait};
pub use signing::{get_signatures, sign_hash};
pub use utils::{add_hex_prefix, init_tracing, load_config, to_hex_string};
