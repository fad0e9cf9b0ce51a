pub mod direction;
pub mod dto;
pub mod threshold;

pub use direction::AlertDirection;
pub use dto::*;
pub use threshold::{AlertThreshold, ThresholdError};
