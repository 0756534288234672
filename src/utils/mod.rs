use alloy_primitives::hex;
use anyhow::{Context, Result};
use config::{Environment, File, FileFormat};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use crate::models::common::Config;

const ENV_PREFIX: &str = "WALLET_HELPERS";

pub fn add_hex_prefix(value: &str) -> String {
    if value.starts_with("0x") {
        value.to_string()
    } else {
        format!("0x{}", value)
    }
}

/// Lowercase hex with a `0x` prefix; an empty input renders as `"0x"`.
pub fn to_hex_string<T: AsRef<[u8]>>(bytes: T) -> String {
    hex::encode_prefixed(bytes)
}

pub fn load_config<P: AsRef<Path>>(file_name: P) -> Result<Config> {
    load_config_with_env(file_name, Environment::with_prefix(ENV_PREFIX))
}

fn load_config_with_env<P: AsRef<Path>>(file_name: P, environment: Environment) -> Result<Config> {
    // Build the path to the config file
    let manifest_dir = env!("CARGO_MANIFEST_DIR").to_string();
    let config_path = Path::new(&manifest_dir).join(file_name);
    info!("Config path: {}", config_path.to_string_lossy());

    // YAML file first, then WALLET_HELPERS_* environment variables on top
    let settings = config::Config::builder()
        .add_source(File::from(config_path.as_path()).format(FileFormat::Yaml).required(true))
        .add_source(
            environment
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("signer_keys"),
        )
        .build()
        .context("failed to read config file")?;

    let config: Config = settings
        .try_deserialize()
        .context("failed to parse config")?;

    Ok(config)
}

/// Installs the fmt subscriber used by the helpers. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_add_hex_prefix() {
        assert_eq!(add_hex_prefix("abcd"), "0xabcd");
        assert_eq!(add_hex_prefix("0xabcd"), "0xabcd");
        assert_eq!(add_hex_prefix(&add_hex_prefix("abcd")), "0xabcd");
        assert_eq!(add_hex_prefix(""), "0x");
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(to_hex_string([0u8, 255, 16]), "0x00ff10");
        assert_eq!(to_hex_string(Vec::<u8>::new()), "0x");
        assert_eq!(to_hex_string(b"\xAB"), "0xab");
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "{}", contents).unwrap();
        file
    }

    /// Environment overlay fed from fixed variables instead of the process environment
    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn test_load_config_from_yaml() {
        let file = write_config(
            "rpc_url: \"http://127.0.0.1:8545\"\nchain_id: 31337\nsigner_keys:\n  - \"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\"",
        );

        let config = load_config_with_env(file.path(), env_source(&[])).unwrap();

        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.chain_id, Some(31337));

        let signers = config.signers().unwrap();
        assert_eq!(signers.len(), 1);
        assert_eq!(
            signers[0].address(),
            alloy_primitives::address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let environment = env_source(&[("WALLET_HELPERS_RPC_URL", "http://10.0.0.1:8545")]);

        let err = load_config_with_env("/nonexistent/typo.yml", environment).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_environment_overrides_yaml() {
        let file = write_config("rpc_url: \"http://127.0.0.1:8545\"\nchain_id: 31337");
        let environment = env_source(&[
            ("WALLET_HELPERS_RPC_URL", "http://10.0.0.1:8545"),
            ("WALLET_HELPERS_CHAIN_ID", "1"),
            ("UNRELATED_RPC_URL", "http://ignored"),
        ]);

        let config = load_config_with_env(file.path(), environment).unwrap();

        assert_eq!(config.rpc_url, "http://10.0.0.1:8545");
        assert_eq!(config.chain_id, Some(1));
        assert!(config.signer_keys.is_empty());
    }

    #[test]
    fn test_invalid_signer_key_is_reported() {
        let config = Config {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            chain_id: None,
            signer_keys: vec!["not-a-key".to_string()],
        };

        let err = config.signers().unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }
}
