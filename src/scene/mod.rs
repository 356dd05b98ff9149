pub mod surface;
pub mod template;
pub mod tree;
