pub mod is_pow2;
pub mod next_pow2;
