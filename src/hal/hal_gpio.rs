#![allow(dead_code)]

/// Word-wide GPIO port contract: a data register and a direction register,
/// each accessed as one unconditional 32-bit transaction with the same
/// ordering rules as the countdown accessors.
pub trait GpioPort {
    /// Set the direction mask (1 = output) for the whole port.
    fn set_dir(&mut self, mask: u32);

    /// Read back the direction mask.
    fn get_dir(&mut self) -> u32;

    /// Write the output latch for the whole port.
    fn set_data(&mut self, data: u32);

    /// Read the input/latch data for the whole port.
    fn get_data(&mut self) -> u32;
}
