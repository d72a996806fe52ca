pub mod adjustments;
pub mod codec;
pub mod pipeline;
