#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;

use soc_hal::arch::Peripherals;
use soc_hal::hal::{Countdown, GpioPort};

// LED on port 0, pin 0. The delay is in counter ticks, so the blink rate
// follows the board's countdown clock.
const LED_MASK: u32 = 0x0000_0001;
const BLINK_TICKS: u32 = 500_000;

#[entry]
fn main() -> ! {
    let p = Peripherals::take().unwrap();
    let mut cdt = p.cdt;
    let mut gpio = p.gpio0;

    gpio.set_dir(LED_MASK);

    let mut state = false;
    loop {
        state = !state;
        gpio.set_data(if state { LED_MASK } else { 0 });
        cdt.delay(BLINK_TICKS);
    }
}
