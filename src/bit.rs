/// Trait to extract a value between two given bit positions.
pub trait Bit {
    /// Extract a range of bits. Both positions are inclusive.
    #[must_use]
    fn bit_range(self, ls: u32, ms: u32) -> Self;
}

impl Bit for u32 {
    fn bit_range(self, ls: u32, ms: u32) -> Self {
        let mask = ((1_u64 << (ms - ls + 1)) - 1) as u32;
        (self >> ls) & mask
    }
}

#[test]
fn test_bit_range() {
    let a = 0b1100_u32.bit_range(2, 3);
    assert_eq!(0b11, a);

    let a = 0xdeadbeef_u32.bit_range(0, 31);
    assert_eq!(0xdeadbeef, a);

    let a = 0xffff0000_u32.bit_range(16, 31);
    assert_eq!(0xffff, a);

    let a = 0x00000093_u32.bit_range(7, 11);
    assert_eq!(1, a);
}
