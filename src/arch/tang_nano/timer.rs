// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Diego Asanza <f.asanza@gmail.com>

use core::ptr::{read_volatile, write_volatile};

#[cfg(feature = "qemu")]
use cortex_m_semihosting::hprintln;

use crate::hal::hal_timer::Countdown as CountdownTrait;

// Countdown timer register map. A single 32-bit register that the hardware
// decrements on its own once armed, addressable as a word, two half-words
// and four byte lanes (byte 0 = least significant).
const CDT_BASE: u32 = 0x8000_0010;

const CDT_COUNTER: *mut u32 = CDT_BASE as *mut u32;
const CDT_COUNTER_H0: *mut u16 = CDT_BASE as *mut u16;
const CDT_COUNTER_H2: *mut u16 = (CDT_BASE + 2) as *mut u16;
const CDT_COUNTER_B0: *mut u8 = CDT_BASE as *mut u8;
const CDT_COUNTER_B1: *mut u8 = (CDT_BASE + 1) as *mut u8;
const CDT_COUNTER_B2: *mut u8 = (CDT_BASE + 2) as *mut u8;
const CDT_COUNTER_B3: *mut u8 = (CDT_BASE + 3) as *mut u8;

/// Driver handle for the countdown timer. Zero-sized; every accessor is a
/// single volatile transaction on the register above, nothing is cached.
pub struct CountdownTimer {
    _private: (),
}

impl CountdownTimer {
    pub(crate) const fn new() -> Self {
        CountdownTimer { _private: () }
    }
}

// Generate the four byte-lane writers against the CDT_COUNTER_B* aliases.
macro_rules! byte_writers {
    ($($idx:literal),*) => {
        paste::paste! {
            $(
                fn [<write_byte $idx>](&mut self, value: u8) {
                    unsafe { write_volatile([<CDT_COUNTER_B $idx>], value) }
                }
            )*
        }
    };
}

impl CountdownTrait for CountdownTimer {
    byte_writers!(0, 1, 2, 3);

    fn write_half0(&mut self, value: u16) {
        unsafe { write_volatile(CDT_COUNTER_H0, value) }
    }

    fn write_half2(&mut self, value: u16) {
        unsafe { write_volatile(CDT_COUNTER_H2, value) }
    }

    fn write_word(&mut self, value: u32) {
        #[cfg(feature = "qemu")]
        {
            let _ = hprintln!("CDT <- {:#010x}", value);
        }
        unsafe { write_volatile(CDT_COUNTER, value) }
    }

    fn read_word(&mut self) -> u32 {
        unsafe { read_volatile(CDT_COUNTER) }
    }
}
