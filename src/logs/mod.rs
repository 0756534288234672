pub mod receipts;

use alloy_primitives::Address;
use alloy_sol_types::SolEvent;
use anyhow::Result;
use tracing::debug;

use crate::contracts::{ContractHandle, ContractKind, IWallet};
use crate::logs::receipts::ReceiptLogs;
use crate::models::errors::EventError;
use crate::models::events::{Deposited, ForwarderDeposited, SafeModeActivated, Transacted};

/// Decodes every log in `receipt` whose first topic is `E`'s signature hash.
///
/// Logs keep the receipt's order. The emitting address is not checked, so a
/// receipt touching several wallets yields the events of all of them.
pub fn read_event_logs<E, P, R>(handle: &ContractHandle<P>, receipt: &R) -> Result<Vec<E>>
where
    E: SolEvent,
    R: ReceiptLogs + ?Sized,
{
    let event_topic = handle.event_topic::<E>()?;
    let logs = receipt.receipt_logs();

    let events = logs
        .iter()
        .enumerate()
        .filter(|(_, log)| log.topics().first() == Some(&event_topic))
        .map(|(log_index, log)| {
            E::decode_log(&log.inner)
                .map(|decoded| decoded.data)
                .map_err(|source| EventError::Decode {
                    event: E::SIGNATURE,
                    log_index,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Decoded {} {} logs out of {} for {} {}",
        events.len(),
        E::SIGNATURE,
        logs.len(),
        handle.kind(),
        handle.address()
    );

    Ok(events)
}

pub fn read_deposited_log<P, R>(
    kind: ContractKind,
    contract: Address,
    provider: P,
    receipt: &R,
) -> Result<Vec<Deposited>>
where
    R: ReceiptLogs + ?Sized,
{
    let handle = kind.connect(contract, provider);
    let events = read_event_logs::<IWallet::Deposited, _, _>(&handle, receipt)?;
    Ok(events.into_iter().map(Deposited::from).collect())
}

pub fn read_safe_mode_activated_log<P, R>(
    kind: ContractKind,
    contract: Address,
    provider: P,
    receipt: &R,
) -> Result<Vec<SafeModeActivated>>
where
    R: ReceiptLogs + ?Sized,
{
    let handle = kind.connect(contract, provider);
    let events = read_event_logs::<IWallet::SafeModeActivated, _, _>(&handle, receipt)?;
    Ok(events.into_iter().map(SafeModeActivated::from).collect())
}

pub fn read_forwarder_deposited_log<P, R>(
    kind: ContractKind,
    contract: Address,
    provider: P,
    receipt: &R,
) -> Result<Vec<ForwarderDeposited>>
where
    R: ReceiptLogs + ?Sized,
{
    let handle = kind.connect(contract, provider);
    let events = read_event_logs::<IWallet::ForwarderDeposited, _, _>(&handle, receipt)?;
    Ok(events.into_iter().map(ForwarderDeposited::from).collect())
}

pub fn read_transacted_log<P, R>(
    kind: ContractKind,
    contract: Address,
    provider: P,
    receipt: &R,
) -> Result<Vec<Transacted>>
where
    R: ReceiptLogs + ?Sized,
{
    let handle = kind.connect(contract, provider);
    let events = read_event_logs::<IWallet::Transacted, _, _>(&handle, receipt)?;
    Ok(events.into_iter().map(Transacted::from).collect())
}
