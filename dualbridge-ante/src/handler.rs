use cosmwasm_schema::cw_serde;

use crate::error::AnteError;
use crate::tx::Tx;

/// Execution context threaded through a pipeline. Each step returns the
/// context the next step sees.
#[cw_serde]
#[derive(Default)]
pub struct AnteContext {
    /// `<name>_<eip155 id>-<version>`, e.g. `dualbridge_9000-1`
    pub chain_id: String,
    pub block_height: u64,
    pub gas_wanted: u64,
    pub priority: i64,
    /// Decorators that ran, in order
    pub trail: Vec<String>,
}

impl AnteContext {
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        AnteContext {
            chain_id: chain_id.into(),
            block_height,
            ..AnteContext::default()
        }
    }

    /// The EIP-155 chain id embedded in [`Self::chain_id`].
    pub fn eip155_chain_id(&self) -> Option<u64> {
        let (_, rest) = self.chain_id.rsplit_once('_')?;
        let (number, _) = rest.split_once('-')?;
        number.parse().ok()
    }
}

/// A complete validation pipeline.
pub trait AnteHandler {
    fn handle(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError>;
}

impl<F> AnteHandler for F
where
    F: Fn(AnteContext, &dyn Tx, bool) -> Result<AnteContext, AnteError>,
{
    fn handle(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        self(ctx, tx, simulate)
    }
}

/// One step of a pipeline. A decorator either rejects, or calls `next` with
/// the (possibly updated) context and returns what it returns.
pub trait AnteDecorator {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &dyn Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<AnteContext, AnteError>;
}

/// Pipeline built from decorators run front to back.
pub struct DecoratorChain {
    decorators: Vec<Box<dyn AnteDecorator>>,
}

pub fn chain_decorators(decorators: Vec<Box<dyn AnteDecorator>>) -> DecoratorChain {
    DecoratorChain { decorators }
}

struct Rest<'a> {
    decorators: &'a [Box<dyn AnteDecorator>],
}

impl AnteHandler for Rest<'_> {
    fn handle(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        match self.decorators.split_first() {
            Some((first, rest)) => first.ante_handle(ctx, tx, simulate, &Rest { decorators: rest }),
            None => Ok(ctx),
        }
    }
}

impl AnteHandler for DecoratorChain {
    fn handle(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        Rest {
            decorators: &self.decorators,
        }
        .handle(ctx, tx, simulate)
    }
}
