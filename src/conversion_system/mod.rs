pub mod pipeline;
pub mod validation;
