// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Diego Asanza <f.asanza@gmail.com>

mod gpio;
mod timer;

pub use gpio::Gpio0;
pub use timer::CountdownTimer;

use cortex_m::interrupt;

// Tracks whether the singletons have already been moved out. Guarded by a
// critical section when mutated.
static mut TAKEN: bool = false;

/// The board's peripheral singletons.
///
/// Both drivers are zero-sized handles over fixed register addresses.
/// Acquire the collection once with `take`, then move the fields out;
/// unique ownership of each peripheral is enforced at compile time from
/// there on.
pub struct Peripherals {
    pub cdt: CountdownTimer,
    pub gpio0: Gpio0,
}

impl Peripherals {
    /// Acquire the peripherals. Returns `None` on every call after the first.
    pub fn take() -> Option<Self> {
        interrupt::free(|_| unsafe {
            if TAKEN {
                return None;
            }
            TAKEN = true;
            Some(Peripherals {
                cdt: CountdownTimer::new(),
                gpio0: Gpio0::new(),
            })
        })
    }
}
