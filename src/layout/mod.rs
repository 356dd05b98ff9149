pub mod anchor;
pub mod placement;
pub mod scaler;
