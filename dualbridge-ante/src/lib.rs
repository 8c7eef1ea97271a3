pub mod decorators;
pub mod error;
pub mod handler;
pub mod router;
pub mod tx;

pub use decorators::{Eip712ChainIdDecorator, ValidateBasicDecorator};
pub use error::AnteError;
pub use handler::{chain_decorators, AnteContext, AnteDecorator, AnteHandler, DecoratorChain};
pub use router::{classify, AnteRouter, Route};
pub use tx::{ExtensionOption, Tx, Web3Extension, ETHEREUM_TX_TYPE_URL, WEB3_TX_TYPE_URL};
