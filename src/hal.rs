#![allow(dead_code)]

pub mod hal_gpio;
pub mod hal_timer;

pub use hal_gpio::GpioPort;
pub use hal_timer::Countdown;
