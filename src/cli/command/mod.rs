pub mod build_mips;
