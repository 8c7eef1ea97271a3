use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnteError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Hard rejection; the transaction never reaches a pipeline.
    #[error("rejecting tx with unsupported extension option: {type_url}")]
    UnknownExtensionOption { type_url: String },

    #[error("invalid transaction type: {type_name}")]
    UnknownRequest { type_name: String },

    /// A pipeline step refused the transaction.
    #[error("{decorator}: {reason}")]
    Rejected { decorator: String, reason: String },

    /// A pipeline panicked; the payload is carried here.
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
