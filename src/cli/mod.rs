pub mod args;
pub mod command;
pub mod resolve_out_dir;
