use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub rpc_url: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
    // Hex-encoded private keys, with or without the 0x prefix
    #[serde(default)]
    pub signer_keys: Vec<String>,
}

impl Config {
    /// Parses every configured key into a local signer, in the order listed.
    pub fn signers(&self) -> Result<Vec<PrivateKeySigner>> {
        self.signer_keys
            .iter()
            .enumerate()
            .map(|(index, key)| -> Result<PrivateKeySigner> {
                let mut signer = key
                    .trim_start_matches("0x")
                    .parse::<PrivateKeySigner>()
                    .map_err(|_| ConfigError::InvalidSignerKey { index })?;
                if let Some(chain_id) = self.chain_id {
                    signer = signer.with_chain_id(Some(chain_id));
                }
                Ok(signer)
            })
            .collect()
    }
}
