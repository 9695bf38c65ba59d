use crate::FLAG_COUNT;

pub struct FlagBits;
impl FlagBits {
    pub fn is_bit_active(flag: u8, index: u8) -> bool {
        ((flag >> index) & 1) == 1
    }

    /// Packs one bool per bit, index 0 into the least significant bit.
    /// Values past the eighth are ignored; callers validate length first.
    pub fn pack(flags: &[bool]) -> u8 {
        let mut byte = 0u8;
        for (i, set) in flags.iter().take(FLAG_COUNT).enumerate() {
            if *set {
                byte |= 1 << i;
            }
        }
        byte
    }

    pub fn unpack(byte: u8) -> [bool; FLAG_COUNT] {
        let mut flags = [false; FLAG_COUNT];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = Self::is_bit_active(byte, i as u8);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bit_active() {
        assert!(FlagBits::is_bit_active(0b0000_0001, 0));
        assert!(!FlagBits::is_bit_active(0b0000_0001, 1));
        assert!(FlagBits::is_bit_active(0b1000_0000, 7));
    }

    #[test]
    fn test_pack_lsb_first() {
        let flags = [true, false, true, true, false, false, true, false];
        assert_eq!(0b0100_1101, FlagBits::pack(&flags));
        assert_eq!(77, FlagBits::pack(&flags));

        assert_eq!(0, FlagBits::pack(&[false; 8]));
        assert_eq!(0xff, FlagBits::pack(&[true; 8]));
        assert_eq!(0b1000_0000, FlagBits::pack(&[false, false, false, false, false, false, false, true]));
    }

    #[test]
    fn test_unpack_inverts_pack() {
        for byte in 0..=u8::MAX {
            assert_eq!(byte, FlagBits::pack(&FlagBits::unpack(byte)));
        }
        assert_eq!(
            [true, false, true, true, false, false, true, false],
            FlagBits::unpack(77)
        );
    }
}
