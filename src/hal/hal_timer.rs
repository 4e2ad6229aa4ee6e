#![allow(dead_code)]

/// Accessor contract for the 32-bit countdown register.
///
/// The register is one word of hardware storage, also addressable as two
/// half-words and four bytes. All five views alias the same bits: a write
/// through any view is immediately visible through every other one. Byte 0
/// is the least significant lane, byte 3 the most significant.
///
/// Every method is exactly one hardware transaction. Calls are issued in
/// program order and must never be coalesced, reordered or elided; repeated
/// reads of an unchanged address may still return different values because
/// the hardware decrements the count on its own.
///
/// `read_word` takes `&mut self` so that test fakes can record the access
/// and model the autonomous decrement.
pub trait Countdown {
    /// Store `value` into byte lane 0 (bits 0..=7); other lanes keep their bits.
    fn write_byte0(&mut self, value: u8);
    /// Store `value` into byte lane 1 (bits 8..=15).
    fn write_byte1(&mut self, value: u8);
    /// Store `value` into byte lane 2 (bits 16..=23).
    fn write_byte2(&mut self, value: u8);
    /// Store `value` into byte lane 3 (bits 24..=31).
    fn write_byte3(&mut self, value: u8);

    /// Store `value` into the low half-word (bits 0..=15).
    fn write_half0(&mut self, value: u16);
    /// Store `value` into the high half-word (bits 16..=31).
    fn write_half2(&mut self, value: u16);

    /// Store `value` into the full 32-bit register.
    fn write_word(&mut self, value: u32);

    /// Return the current contents of the register.
    fn read_word(&mut self) -> u32;

    /// Arm the counter with `value` and spin until a read observes zero.
    ///
    /// This busy-waits: no yield, no timeout, no work between polls. The
    /// hardware decrements the count at its own device-defined rate, so the
    /// wall-clock duration is a property of the board, not of this code.
    /// `delay(0)` returns on the very first poll. If another execution
    /// context keeps rearming the register the loop never terminates; the
    /// caller owns that exclusion (there are no interrupts here).
    fn delay(&mut self, value: u32) {
        self.write_word(value);
        while self.read_word() != 0 {}
    }
}

#[cfg(test)]
mod tests {
    use super::Countdown;

    /// Software model of the counter register: four little-endian byte
    /// lanes backing all five views, a log of every word read, and an
    /// optional decrement-by-one applied after each read.
    struct FakeCounter {
        lanes: [u8; 4],
        reads: Vec<u32>,
        ticking: bool,
    }

    impl FakeCounter {
        fn new(ticking: bool) -> Self {
            FakeCounter {
                lanes: [0; 4],
                reads: Vec::new(),
                ticking,
            }
        }

        fn word(&self) -> u32 {
            u32::from_le_bytes(self.lanes)
        }

        fn set_word(&mut self, value: u32) {
            self.lanes = value.to_le_bytes();
        }
    }

    impl Countdown for FakeCounter {
        fn write_byte0(&mut self, value: u8) {
            self.lanes[0] = value;
        }

        fn write_byte1(&mut self, value: u8) {
            self.lanes[1] = value;
        }

        fn write_byte2(&mut self, value: u8) {
            self.lanes[2] = value;
        }

        fn write_byte3(&mut self, value: u8) {
            self.lanes[3] = value;
        }

        fn write_half0(&mut self, value: u16) {
            self.lanes[0..2].copy_from_slice(&value.to_le_bytes());
        }

        fn write_half2(&mut self, value: u16) {
            self.lanes[2..4].copy_from_slice(&value.to_le_bytes());
        }

        fn write_word(&mut self, value: u32) {
            self.set_word(value);
        }

        fn read_word(&mut self) -> u32 {
            let value = self.word();
            self.reads.push(value);
            if self.ticking && value > 0 {
                self.set_word(value - 1);
            }
            value
        }
    }

    #[test]
    fn word_write_read_round_trip() {
        let mut cdt = FakeCounter::new(false);
        for value in [0, 1, 0xDEAD_BEEF, 0x8000_0000, u32::MAX] {
            cdt.write_word(value);
            assert_eq!(cdt.read_word(), value);
        }
    }

    #[test]
    fn byte_writes_touch_only_their_lane() {
        let mut cdt = FakeCounter::new(false);
        cdt.write_word(0xDEAD_BEEF);

        cdt.write_byte0(0x11);
        assert_eq!(cdt.read_word(), 0xDEAD_BE11);
        cdt.write_byte1(0x22);
        assert_eq!(cdt.read_word(), 0xDEAD_2211);
        cdt.write_byte2(0x33);
        assert_eq!(cdt.read_word(), 0xDE33_2211);
        cdt.write_byte3(0x44);
        assert_eq!(cdt.read_word(), 0x4433_2211);
    }

    #[test]
    fn half_writes_touch_only_their_half() {
        let mut cdt = FakeCounter::new(false);
        cdt.write_word(0x1122_3344);

        cdt.write_half0(0xAABB);
        assert_eq!(cdt.read_word(), 0x1122_AABB);
        cdt.write_half2(0xCCDD);
        assert_eq!(cdt.read_word(), 0xCCDD_AABB);
    }

    #[test]
    fn byte1_lands_in_bits_8_to_15() {
        let mut cdt = FakeCounter::new(false);
        cdt.write_word(0x0000_0000);
        cdt.write_byte1(0xAB);
        assert_eq!(cdt.read_word(), 0x0000_AB00);
    }

    #[test]
    fn half_writes_compose_full_word() {
        let mut cdt = FakeCounter::new(false);
        cdt.write_half0(0xBEEF);
        cdt.write_half2(0xDEAD);
        assert_eq!(cdt.read_word(), 0xDEAD_BEEF);
    }

    #[test]
    fn delay_zero_returns_on_first_poll() {
        let mut cdt = FakeCounter::new(true);
        cdt.delay(0);
        assert_eq!(cdt.reads, vec![0]);
    }

    #[test]
    fn delay_three_polls_down_to_zero() {
        let mut cdt = FakeCounter::new(true);
        cdt.delay(3);
        assert_eq!(cdt.reads, vec![3, 2, 1, 0]);
    }

    #[test]
    fn delay_performs_value_plus_one_reads() {
        let value = 10;
        let mut cdt = FakeCounter::new(true);
        cdt.delay(value);

        assert_eq!(cdt.reads.len() as u32, value + 1);
        assert!(cdt.reads.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*cdt.reads.last().unwrap(), 0);
    }
}
