/// Nearest power of two that is greater than or equal to `x`; `0` maps to `1`.
#[inline]
pub fn next_pow2(x: u32) -> u32 {
    x.max(1).next_power_of_two()
}
