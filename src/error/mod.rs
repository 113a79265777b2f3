pub mod args;
pub mod cause;
pub mod error;
pub mod kind;
pub mod tree;
