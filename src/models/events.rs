use alloy_primitives::{Address, Bytes, B256, U256};
use serde::Serialize;

use crate::contracts::IWallet;

////////////////////////////////////// Wallet Events ////////////////////////////////////
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deposited {
    pub from: Address,
    pub value: U256,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transacted {
    pub msg_sender: Address,
    pub other_signer: Address,
    pub operation: B256,
    pub to_address: Address,
    pub value: U256,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeModeActivated {
    pub msg_sender: Address,
}

//////////////////////////////////// Forwarder Events ///////////////////////////////////
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwarderDeposited {
    pub from: Address,
    pub value: U256,
    pub data: Bytes,
}

/////////////////////////////////// Sol Conversions /////////////////////////////////////
impl From<IWallet::Deposited> for Deposited {
    fn from(event: IWallet::Deposited) -> Self {
        Self {
            from: event.from,
            value: event.value,
            data: event.data,
        }
    }
}

impl From<IWallet::Transacted> for Transacted {
    fn from(event: IWallet::Transacted) -> Self {
        Self {
            msg_sender: event.msgSender,
            other_signer: event.otherSigner,
            operation: event.operation,
            to_address: event.toAddress,
            value: event.value,
            data: event.data,
        }
    }
}

impl From<IWallet::SafeModeActivated> for SafeModeActivated {
    fn from(event: IWallet::SafeModeActivated) -> Self {
        Self {
            msg_sender: event.msgSender,
        }
    }
}

impl From<IWallet::ForwarderDeposited> for ForwarderDeposited {
    fn from(event: IWallet::ForwarderDeposited) -> Self {
        Self {
            from: event.from,
            value: event.value,
            data: event.data,
        }
    }
}

