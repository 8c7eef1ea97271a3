use cosmwasm_std::from_json;
use log::debug;

use crate::error::AnteError;
use crate::handler::{AnteContext, AnteDecorator, AnteHandler};
use crate::tx::{Tx, Web3Extension, WEB3_TX_TYPE_URL};

/// Runs the transaction's stateless checks.
pub struct ValidateBasicDecorator;

impl AnteDecorator for ValidateBasicDecorator {
    fn ante_handle(
        &self,
        mut ctx: AnteContext,
        tx: &dyn Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<AnteContext, AnteError> {
        tx.validate_basic().map_err(|reason| AnteError::Rejected {
            decorator: "validate_basic".to_string(),
            reason,
        })?;
        ctx.trail.push("validate_basic".to_string());
        next.handle(ctx, tx, simulate)
    }
}

/// Requires the chain id inside the Web3 extension to be the chain id the
/// context runs under, so typed data signed for another chain is refused.
pub struct Eip712ChainIdDecorator;

impl AnteDecorator for Eip712ChainIdDecorator {
    fn ante_handle(
        &self,
        mut ctx: AnteContext,
        tx: &dyn Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<AnteContext, AnteError> {
        let reject = |reason: String| AnteError::Rejected {
            decorator: "eip712_chain_id".to_string(),
            reason,
        };

        let option = tx
            .extension_options()
            .and_then(|opts| opts.iter().find(|opt| opt.type_url == WEB3_TX_TYPE_URL))
            .ok_or_else(|| reject("missing web3 extension".to_string()))?;
        let extension: Web3Extension =
            from_json(&option.value).map_err(|err| reject(format!("malformed web3 extension: {err}")))?;
        let expected = ctx
            .eip155_chain_id()
            .ok_or_else(|| reject(format!("chain id {} has no eip155 component", ctx.chain_id)))?;
        if extension.typed_data_chain_id != expected {
            return Err(reject(format!(
                "typed data signed for chain {}, expected {expected}",
                extension.typed_data_chain_id
            )));
        }
        debug!("eip712 typed data chain id {expected} accepted");

        ctx.trail.push("eip712_chain_id".to_string());
        next.handle(ctx, tx, simulate)
    }
}
