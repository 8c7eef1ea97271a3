use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error};

use crate::error::AnteError;
use crate::handler::{AnteContext, AnteHandler};
use crate::tx::{Tx, ETHEREUM_TX_TYPE_URL, WEB3_TX_TYPE_URL};

/// Pipeline a transaction is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Native,
    Ethereum,
    Eip712,
}

/// Pick the pipeline for `tx`. Only the first extension option counts; an
/// unrecognised one is a hard rejection.
pub fn classify(tx: &dyn Tx) -> Result<Route, AnteError> {
    if let Some(first) = tx.extension_options().and_then(|opts| opts.first()) {
        return match first.type_url.as_str() {
            ETHEREUM_TX_TYPE_URL => Ok(Route::Ethereum),
            WEB3_TX_TYPE_URL => Ok(Route::Eip712),
            other => Err(AnteError::UnknownExtensionOption {
                type_url: other.to_string(),
            }),
        };
    }
    if tx.is_standard() {
        return Ok(Route::Native);
    }
    Err(AnteError::UnknownRequest {
        type_name: tx.type_name(),
    })
}

/// Stateless front door of transaction validation: classifies each
/// transaction once and hands it to one of three pipelines. A panic inside
/// a pipeline comes back as [`AnteError::Internal`].
pub struct AnteRouter {
    native: Box<dyn AnteHandler>,
    ethereum: Box<dyn AnteHandler>,
    eip712: Box<dyn AnteHandler>,
}

impl AnteRouter {
    pub fn new(
        native: impl AnteHandler + 'static,
        ethereum: impl AnteHandler + 'static,
        eip712: impl AnteHandler + 'static,
    ) -> Self {
        AnteRouter {
            native: Box::new(native),
            ethereum: Box::new(ethereum),
            eip712: Box::new(eip712),
        }
    }

    fn pipeline(&self, route: Route) -> &dyn AnteHandler {
        match route {
            Route::Native => self.native.as_ref(),
            Route::Ethereum => self.ethereum.as_ref(),
            Route::Eip712 => self.eip712.as_ref(),
        }
    }

    fn dispatch(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        let route = classify(tx)?;
        debug!("routing {} through the {route:?} pipeline (simulate={simulate})", tx.type_name());
        self.pipeline(route).handle(ctx, tx, simulate)
    }
}

impl AnteHandler for AnteRouter {
    fn handle(&self, ctx: AnteContext, tx: &dyn Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        match catch_unwind(AssertUnwindSafe(|| self.dispatch(ctx, tx, simulate))) {
            Ok(result) => result,
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                error!("ante pipeline panicked on {}: {msg}", tx.type_name());
                Err(AnteError::Internal { msg })
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(&message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
