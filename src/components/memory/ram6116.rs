//! 2K x 8 static RAM modeled after the 6116.
//!
//! Hardware architecture:
//! - 11 address lines, 8 bidirectional data lines
//! - `-CS` LOW selects the chip; `-WE` LOW writes, HIGH reads
//! - Reads additionally require `-OE` LOW before the chip drives the
//!   data bus
//!
//! Hardware deviations:
//! - Writes are level-triggered: while write mode is asserted every
//!   change on the data bus lands in the addressed cell
//! - Losing power clears the array, as real static RAM would

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

/// Cells in the array; 11 address bits cover it exactly.
pub const RAM_SIZE: usize = 2048;

const PIN_NAMES: &[&str] = &[
    "A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10", "-CS", "-WE", "-OE", "GND",
    "VCC", "IO0", "IO1", "IO2", "IO3", "IO4", "IO5", "IO6", "IO7",
];

const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput, // A0
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput, // A10
    PinFunction::RequiredInput, // -CS
    PinFunction::RequiredInput, // -WE
    PinFunction::Input,         // -OE
    PinFunction::Ground,
    PinFunction::Power,
    PinFunction::Bidirectional, // IO0
    PinFunction::Bidirectional,
    PinFunction::Bidirectional,
    PinFunction::Bidirectional,
    PinFunction::Bidirectional,
    PinFunction::Bidirectional,
    PinFunction::Bidirectional,
    PinFunction::Bidirectional, // IO7
];

const ADDRESS_BITS: usize = 11;
const PIN_CS: usize = 11;
const PIN_WE: usize = 12;
const PIN_OE: usize = 13;
const PIN_IO: [usize; 8] = [16, 17, 18, 19, 20, 21, 22, 23];

pub struct Ram6116 {
    base: BaseComponent,
    memory: Vec<u8>,
    driving: bool,
}

impl Ram6116 {
    pub fn new() -> Self {
        Ram6116 {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
            memory: vec![0u8; RAM_SIZE],
            driving: false,
        }
    }

    /// Preload a block of cells, e.g. a program image for a bench.
    pub fn load(&mut self, offset: usize, data: &[u8]) -> Result<(), String> {
        if offset + data.len() > self.memory.len() {
            return Err(format!(
                "data exceeds RAM capacity: offset {} + length {} > size {}",
                offset,
                data.len(),
                self.memory.len()
            ));
        }
        self.memory[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Read a cell without touching the pins.
    pub fn peek(&self, address: usize) -> Option<u8> {
        self.memory.get(address).copied()
    }

    /// Decoded address bus; `None` while any line floats. `A0` sits at
    /// pin 0, so pin index and bit index coincide.
    fn address(&self) -> Option<usize> {
        let mut address = 0usize;
        for pin in 0..ADDRESS_BITS {
            match self.base.value(pin).to_bool() {
                Some(true) => address |= 1 << pin,
                Some(false) => {}
                None => return None,
            }
        }
        Some(address)
    }

    /// Float the data bus once after owning it, then leave it to peers.
    fn release(&mut self) {
        if !self.driving {
            return;
        }
        for pin in PIN_IO {
            self.base.drive(pin, PinValue::Floating);
        }
        self.driving = false;
    }
}

impl Component for Ram6116 {
    fn type_name(&self) -> &'static str {
        "RAM6116"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {
        let Some(address) = self.address() else {
            return;
        };
        if self.base.value(PIN_CS) != PinValue::Low {
            self.release();
            return;
        }
        match self.base.value(PIN_WE) {
            PinValue::Low => {
                // Write mode: get off the bus first, then latch whatever
                // the external driver has put there
                self.release();
                if let Some(byte) = self.base.read_byte(&PIN_IO) {
                    self.memory[address] = byte;
                }
            }
            PinValue::High => {
                if self.base.value(PIN_OE) == PinValue::Low {
                    let byte = self.memory[address];
                    self.base.drive_byte(&PIN_IO, byte);
                    self.driving = true;
                } else {
                    self.release();
                }
            }
            PinValue::Floating => {}
        }
    }

    /// Static RAM forgets on power loss.
    fn reset(&mut self) {
        self.base.reset();
        self.memory.fill(0);
        self.driving = false;
    }
}

impl Default for Ram6116 {
    fn default() -> Self {
        Ram6116::new()
    }
}
