use std::error::Error as StdError;

use thiserror::Error;

use crate::atmo::Quantity;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum AtmoError {
    /// A trigger addressed to another adapter.
    #[error("{name} received a trigger intended for {target}")]
    RoutingMismatch { name: String, target: String },

    /// The driver failed to read a quantity; cached state is unchanged.
    #[error("failed to read {quantity}: {source}")]
    Read {
        quantity: Quantity,
        #[source]
        source: BoxError,
    },

    #[error("unrecognized action {action:?}")]
    UnrecognizedAction { action: String },
}

impl AtmoError {
    pub fn read(quantity: Quantity, source: impl Into<BoxError>) -> Self {
        Self::Read {
            quantity,
            source: source.into(),
        }
    }
}
