use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Marks a transaction wrapping a signed Ethereum transaction.
pub const ETHEREUM_TX_TYPE_URL: &str = "/ethermint.evm.v1.ExtensionOptionsEthereumTx";

/// Marks a native transaction signed over its EIP-712 typed-data encoding.
pub const WEB3_TX_TYPE_URL: &str = "/ethermint.types.v1.ExtensionOptionsWeb3Tx";

/// Typed transaction metadata selecting a non-default pipeline.
#[cw_serde]
pub struct ExtensionOption {
    pub type_url: String,
    pub value: Binary,
}

impl ExtensionOption {
    pub fn new(type_url: impl Into<String>, value: impl Into<Binary>) -> Self {
        ExtensionOption {
            type_url: type_url.into(),
            value: value.into(),
        }
    }
}

/// JSON body of a [`WEB3_TX_TYPE_URL`] extension.
#[cw_serde]
pub struct Web3Extension {
    /// EIP-155 chain id the typed data was signed for
    pub typed_data_chain_id: u64,
    #[serde(default)]
    pub fee_payer: String,
    #[serde(default)]
    pub fee_payer_sig: Binary,
}

/// What the router needs to know about an inbound transaction.
pub trait Tx {
    /// Dynamic type description, used when the transaction is rejected.
    fn type_name(&self) -> String;

    /// `None` when this kind of transaction cannot carry extension options;
    /// `Some(&[])` when it can but carries none.
    fn extension_options(&self) -> Option<&[ExtensionOption]> {
        None
    }

    /// Whether this is a well-formed native transaction (messages, fee,
    /// signatures) that the native pipeline can process.
    fn is_standard(&self) -> bool;

    /// Stateless checks; an error carries the reason.
    fn validate_basic(&self) -> Result<(), String> {
        Ok(())
    }
}
