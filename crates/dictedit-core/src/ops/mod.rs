pub mod buffer;

pub use buffer::{StagedBuffer, DEFAULT_ORDER_STEP};
