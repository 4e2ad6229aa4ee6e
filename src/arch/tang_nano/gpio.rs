// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Diego Asanza <f.asanza@gmail.com>

use core::ptr::{read_volatile, write_volatile};

#[cfg(feature = "qemu")]
use cortex_m_semihosting::hprintln;

use crate::hal::hal_gpio::GpioPort as GpioPortTrait;

// GPIO port 0: data latch and direction mask, two consecutive 32-bit words.
const GPIO0_BASE: u32 = 0x8000_0020;

const GPIO0_DATA: *mut u32 = GPIO0_BASE as *mut u32;
const GPIO0_DIR: *mut u32 = (GPIO0_BASE + 4) as *mut u32;

/// Driver handle for GPIO port 0.
pub struct Gpio0 {
    _private: (),
}

impl Gpio0 {
    pub(crate) const fn new() -> Self {
        Gpio0 { _private: () }
    }
}

impl GpioPortTrait for Gpio0 {
    fn set_dir(&mut self, mask: u32) {
        unsafe { write_volatile(GPIO0_DIR, mask) }
    }

    fn get_dir(&mut self) -> u32 {
        unsafe { read_volatile(GPIO0_DIR) }
    }

    fn set_data(&mut self, data: u32) {
        #[cfg(feature = "qemu")]
        {
            let _ = hprintln!("GPIO0 <- {:#010x}", data);
        }
        unsafe { write_volatile(GPIO0_DATA, data) }
    }

    fn get_data(&mut self) -> u32 {
        unsafe { read_volatile(GPIO0_DATA) }
    }
}
