#[cfg(feature = "tangnano")]
pub mod tang_nano;

#[cfg(feature = "tangnano")]
pub use tang_nano::{CountdownTimer as TimerImpl, Gpio0 as GpioImpl, Peripherals};
