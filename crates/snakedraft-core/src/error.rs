// Error types for the draft core.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("no supply left for contestant `{contestant}`")]
    DepletedSupply { contestant: String },
}
