//! 8-bit synchronous counter modeled after the 74LS163.
//!
//! Hardware architecture:
//! - Clear, parallel load and count are all synchronous, sampled on the
//!   rising edge of `CP`
//! - Mode priority on each edge: clear, then load, then count
//! - Counting requires both enables `ENP` and `ENT` HIGH
//!
//! Hardware deviations:
//! - Widened from the 4-bit original to 8 bits; `E..H` and `QE..QH`
//!   extend the data and output buses
//! - `RCO` reports HIGH whenever the part ends the edge at 255, for
//!   loads as well as counts

use crate::component::{BaseComponent, Component, PendingOperation};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &[
    "-CR", "CP", "D", "C", "B", "A", "H", "G", "F", "E", "ENP", "ENT", "GND", "VCC", "-LD", "QA",
    "QB", "QC", "QD", "QE", "QF", "QG", "QH", "RCO",
];

const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput, // -CR
    PinFunction::Input,         // CP
    PinFunction::Input,         // D
    PinFunction::Input,         // C
    PinFunction::Input,         // B
    PinFunction::Input,         // A
    PinFunction::Input,         // H
    PinFunction::Input,         // G
    PinFunction::Input,         // F
    PinFunction::Input,         // E
    PinFunction::Input,         // ENP
    PinFunction::Input,         // ENT
    PinFunction::Ground,
    PinFunction::Power,
    PinFunction::Input, // -LD
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output, // RCO
];

const PIN_CLEAR: usize = 0;
const PIN_CP: usize = 1;
const PIN_ENP: usize = 10;
const PIN_ENT: usize = 11;
const PIN_LOAD: usize = 14;
const PIN_RCO: usize = 23;
/// Data bus in bit order, so `PIN_DATA[0]` is `A` and `PIN_DATA[7]` is `H`.
const PIN_DATA: [usize; 8] = [5, 4, 3, 2, 9, 8, 7, 6];
/// Output bus `QA..QH` in bit order.
const PIN_Q: [usize; 8] = [15, 16, 17, 18, 19, 20, 21, 22];

pub struct Ls163 {
    base: BaseComponent,
}

impl Ls163 {
    pub fn new() -> Self {
        Ls163 {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }

    /// Current count, once the outputs have been established by a clear
    /// or load.
    pub fn count(&self) -> Option<u8> {
        self.base.read_byte(&PIN_Q)
    }
}

impl Component for Ls163 {
    fn type_name(&self) -> &'static str {
        "74LS163"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    /// Latch a mode on the rising clock edge; every other pin write is
    /// plain storage.
    fn input(&mut self, pin: usize, value: PinValue) -> bool {
        let previous = self.base.value(pin);
        if !self.base.store(pin, value) {
            return false;
        }
        if pin != PIN_CP || previous != PinValue::Low || value != PinValue::High {
            return false;
        }

        let clear = self.base.value(PIN_CLEAR);
        if clear == PinValue::Low {
            self.base.set_pending(PendingOperation::Clear);
            return true;
        }
        if clear == PinValue::High && self.base.value(PIN_LOAD) == PinValue::Low {
            // A load with any data pin floating is dropped, not latched
            if self.base.read_byte(&PIN_DATA).is_none() {
                return false;
            }
            self.base.set_pending(PendingOperation::Load);
            return true;
        }
        if clear == PinValue::High
            && self.base.value(PIN_LOAD) == PinValue::High
            && self.base.value(PIN_ENP) == PinValue::High
            && self.base.value(PIN_ENT) == PinValue::High
        {
            // Cannot count before a clear or load established the outputs
            if self.base.read_byte(&PIN_Q).is_none() {
                return false;
            }
            self.base.set_pending(PendingOperation::CountUp);
            return true;
        }
        false
    }

    fn work(&mut self) {
        match self.base.take_pending() {
            PendingOperation::Clear => {
                self.base.drive_byte(&PIN_Q, 0);
                self.base.drive_bit(PIN_RCO, false);
            }
            PendingOperation::Load => {
                let Some(value) = self.base.read_byte(&PIN_DATA) else {
                    return;
                };
                self.base.drive_byte(&PIN_Q, value);
                self.base.drive_bit(PIN_RCO, value == u8::MAX);
            }
            PendingOperation::CountUp => {
                let Some(current) = self.base.read_byte(&PIN_Q) else {
                    return;
                };
                let next = current.wrapping_add(1);
                self.base.drive_byte(&PIN_Q, next);
                self.base.drive_bit(PIN_RCO, next == u8::MAX);
            }
            _ => {}
        }
    }
}

impl Default for Ls163 {
    fn default() -> Self {
        Ls163::new()
    }
}
