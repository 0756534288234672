use alloy_network::{Network, ReceiptResponse};
use alloy_primitives::Address;
use alloy_provider::Provider;
use anyhow::{anyhow, Result};
use tracing::{debug, info, warn};

use crate::contracts::{IForwarder, IWallet};
use crate::models::errors::TransactionError;

/// Returns the address a contract created next by `address` will receive.
///
/// Uses the account's current transaction count as the CREATE nonce, so the
/// prediction only holds until `address` sends or deploys anything else.
pub async fn get_next_contract_address<P, N>(provider: &P, address: Address) -> Result<Address>
where
    P: Provider<N>,
    N: Network,
{
    let nonce = provider
        .get_transaction_count(address)
        .await
        .map_err(|e| anyhow!("RPC error: {}", e))?;

    let next_address = address.create(nonce);
    debug!(
        "Next contract address for {} at nonce {}: {}",
        address, nonce, next_address
    );

    Ok(next_address)
}

/// Calls `createForwarder()` on `wallet` and returns the forwarder it deployed.
///
/// The forwarder address is predicted before the call and trusted afterwards;
/// it is not read back from the transaction.
pub async fn create_forwarder_from_wallet<P, N>(
    wallet: &IWallet::IWalletInstance<P, N>,
) -> Result<IForwarder::IForwarderInstance<P, N>>
where
    P: Provider<N> + Clone,
    N: Network,
{
    let wallet_address = *wallet.address();
    let forwarder_address = get_next_contract_address(wallet.provider(), wallet_address).await?;

    let pending = wallet.createForwarder().send().await?;
    let receipt = pending.get_receipt().await?;

    if !receipt.status() {
        warn!(
            "createForwarder on wallet {} reverted in {}",
            wallet_address,
            receipt.transaction_hash()
        );
        return Err(TransactionError::Reverted {
            tx_hash: receipt.transaction_hash(),
        }
        .into());
    }

    info!(
        "Forwarder created by wallet {} at {}",
        wallet_address, forwarder_address
    );

    Ok(IForwarder::new(forwarder_address, wallet.provider().clone()))
}
