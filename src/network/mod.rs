use std::time::Duration;

use alloy_network::{EthereumWallet, Network};
use alloy_primitives::{utils::format_ether, Address, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use anyhow::{anyhow, Result};
use tracing::info;
use url::Url;

use crate::models::common::Config;

/// Builds an HTTP provider for the configured node.
///
/// When signer keys are configured the first one signs outgoing transactions;
/// otherwise sends rely on the node's unlocked accounts.
pub fn connect(config: &Config) -> Result<DynProvider> {
    let rpc_url: Url = config.rpc_url.parse()?;
    info!("RPC URL: {}", rpc_url);

    let signers = config.signers()?;
    let provider = match signers.into_iter().next() {
        Some(signer) => {
            info!("Signing transactions locally as {}", signer.address());
            ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect_http(rpc_url)
                .erased()
        }
        None => ProviderBuilder::new().connect_http(rpc_url).erased(),
    };

    Ok(provider)
}

/// Logs the balance of every account the node manages and returns them in account order.
pub async fn show_balances<P, N>(provider: &P) -> Result<Vec<(Address, U256)>>
where
    P: Provider<N>,
    N: Network,
{
    let accounts = provider
        .get_accounts()
        .await
        .map_err(|e| anyhow!("RPC error: {}", e))?;

    let mut balances = Vec::with_capacity(accounts.len());
    for account in accounts {
        let balance = provider
            .get_balance(account)
            .await
            .map_err(|e| anyhow!("RPC error: {}", e))?;
        info!("{}: {} ether", account, format_ether(balance));
        balances.push((account, balance));
    }

    Ok(balances)
}

pub async fn wait(duration: Duration) {
    info!("Waiting");
    tokio::time::sleep(duration).await;
}
