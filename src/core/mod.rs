pub mod builder;
pub mod chain;
pub mod consts;
pub mod filter;
pub mod mipmap;
pub mod mirror;
pub mod observer;
pub mod options;
pub mod source;
pub mod types;
pub mod validate;
