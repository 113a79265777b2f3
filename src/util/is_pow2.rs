#[inline]
pub fn is_pow2(x: u32) -> bool {
    x != 0 && (x & (x - 1)) == 0
}
