use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use alloy_signer::Signer;
use anyhow::{Context, Result};
use tracing::debug;

const EIP191_PREFIX: u8 = 0x19;
const EIP191_VERSION: u8 = 0x00;
// Appended to every signature when asking for deliberately broken ones
const BAD_SIGNATURE_SUFFIX: u8 = 0xa1;

/// Hash a wallet signer approves before `sendMultiSig` executes.
///
/// Pre-image layout, byte for byte:
/// `0x19 || 0x00 || destination || value (32 bytes) || data || nonce (32 bytes)`,
/// with both integers big-endian and left-padded with zeros.
pub fn sign_hash(destination: Address, value: U256, data: &[u8], nonce: U256) -> B256 {
    let mut input = Vec::with_capacity(2 + 20 + 32 + data.len() + 32);
    input.push(EIP191_PREFIX);
    input.push(EIP191_VERSION);
    input.extend_from_slice(destination.as_slice());
    input.extend_from_slice(&value.to_be_bytes::<32>());
    input.extend_from_slice(data);
    input.extend_from_slice(&nonce.to_be_bytes::<32>());

    keccak256(&input)
}

/// Collects a personal-message signature over `message_hash` from each signer
/// and concatenates them.
///
/// Signers are used in the order given; nothing here sorts them. Each
/// signature is the 65-byte `r || s || v` form. With `return_bad_signatures`
/// set, every signature gets one extra trailing byte so the wallet rejects it.
pub async fn get_signatures<S>(
    message_hash: B256,
    signers: &[S],
    return_bad_signatures: bool,
) -> Result<Bytes>
where
    S: Signer + Sync,
{
    let mut signatures = Vec::with_capacity(signers.len() * 66);

    for (index, signer) in signers.iter().enumerate() {
        let signature = signer
            .sign_message(message_hash.as_slice())
            .await
            .with_context(|| format!("signer {} ({}) failed to sign", index, signer.address()))?;

        signatures.extend_from_slice(&signature.as_bytes());
        if return_bad_signatures {
            signatures.push(BAD_SIGNATURE_SUFFIX);
        }
    }

    debug!(
        "Collected {} signatures over {} (bad: {})",
        signers.len(),
        message_hash,
        return_bad_signatures
    );

    Ok(Bytes::from(signatures))
}
