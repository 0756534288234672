use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, B256};
use alloy_sol_types::{sol, SolEvent};

use crate::models::errors::{ContractError, EventError};

sol! {
    /// Multi-signature wallet. Every event is emitted with non-indexed fields only.
    #[sol(rpc)]
    interface IWallet {
        event Deposited(address from, uint256 value, bytes data);
        event SafeModeActivated(address msgSender);
        event Transacted(
            address msgSender,
            address otherSigner,
            bytes32 operation,
            address toAddress,
            uint256 value,
            bytes data
        );
        event ForwarderDeposited(address from, uint256 value, bytes data);

        function createForwarder() external returns (address);
    }

    /// Deposit forwarder created by a wallet.
    #[sol(rpc)]
    interface IForwarder {
        event ForwarderDeposited(address from, uint256 value, bytes data);
    }
}

const WALLET_EVENTS: [B256; 4] = [
    IWallet::Deposited::SIGNATURE_HASH,
    IWallet::SafeModeActivated::SIGNATURE_HASH,
    IWallet::Transacted::SIGNATURE_HASH,
    IWallet::ForwarderDeposited::SIGNATURE_HASH,
];

const FORWARDER_EVENTS: [B256; 1] = [IForwarder::ForwarderDeposited::SIGNATURE_HASH];

/// The contract types the helpers know how to connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Wallet,
    Forwarder,
}

impl ContractKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wallet => "Wallet",
            Self::Forwarder => "Forwarder",
        }
    }

    /// Topic hashes of every event declared by this contract's interface.
    pub fn event_topics(&self) -> &'static [B256] {
        match self {
            Self::Wallet => &WALLET_EVENTS,
            Self::Forwarder => &FORWARDER_EVENTS,
        }
    }

    pub fn declares(&self, topic: B256) -> bool {
        self.event_topics().contains(&topic)
    }

    pub fn connect<P>(self, address: Address, provider: P) -> ContractHandle<P> {
        ContractHandle {
            kind: self,
            address,
            provider,
        }
    }
}

impl FromStr for ContractKind {
    type Err = ContractError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Wallet" => Ok(Self::Wallet),
            "Forwarder" => Ok(Self::Forwarder),
            _ => Err(ContractError::UnknownContract {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A deployed contract of a known kind, bound to the provider used to reach it.
#[derive(Debug, Clone)]
pub struct ContractHandle<P> {
    kind: ContractKind,
    address: Address,
    provider: P,
}

impl<P> ContractHandle<P> {
    pub fn kind(&self) -> ContractKind {
        self.kind
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The provider the caller connected with. Reading logs never touches it; it
    /// rides along so callers can reach the same node through the handle.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolves the topic hash of `E`, failing if this contract's interface does not declare it.
    pub fn event_topic<E: SolEvent>(&self) -> Result<B256, EventError> {
        if self.kind.declares(E::SIGNATURE_HASH) {
            Ok(E::SIGNATURE_HASH)
        } else {
            Err(EventError::NotDeclared {
                event: E::SIGNATURE,
                contract: self.kind,
            })
        }
    }
}
