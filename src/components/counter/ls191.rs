//! 8-bit up/down counter modeled after the 74LS191.
//!
//! Hardware architecture:
//! - One clock `CP`, direction selected by `D/U` (LOW counts up)
//! - Parallel load on `-LOAD` LOW takes priority over counting
//! - `CTEN` LOW enables counting
//! - `MAX/MIN` flags the terminal count, `RCO` pulses on the edge that
//!   wraps the counter
//!
//! Hardware deviations:
//! - Widened from the 4-bit original to 8 bits
//! - Load is sampled on the clock edge instead of being asynchronous
//! - A floating `D/U` drops the edge instead of picking a direction

use crate::component::{BaseComponent, Component, PendingOperation};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &[
    "D/U", "CP", "-LOAD", "D", "C", "B", "A", "H", "G", "F", "E", "CTEN", "GND", "VCC", "QA", "QB",
    "QC", "QD", "QE", "QF", "QG", "QH", "MAX/MIN", "RCO",
];

const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput, // D/U
    PinFunction::Input,         // CP
    PinFunction::Input,         // -LOAD
    PinFunction::Input,         // D
    PinFunction::Input,         // C
    PinFunction::Input,         // B
    PinFunction::Input,         // A
    PinFunction::Input,         // H
    PinFunction::Input,         // G
    PinFunction::Input,         // F
    PinFunction::Input,         // E
    PinFunction::Input,         // CTEN
    PinFunction::Ground,
    PinFunction::Power,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output, // MAX/MIN
    PinFunction::Output, // RCO
];

const PIN_DIRECTION: usize = 0;
const PIN_CP: usize = 1;
const PIN_LOAD: usize = 2;
const PIN_CTEN: usize = 11;
const PIN_MAX_MIN: usize = 22;
const PIN_RCO: usize = 23;
/// Data bus in bit order, `A` first.
const PIN_DATA: [usize; 8] = [6, 5, 4, 3, 10, 9, 8, 7];
/// Output bus `QA..QH` in bit order.
const PIN_Q: [usize; 8] = [14, 15, 16, 17, 18, 19, 20, 21];

pub struct Ls191 {
    base: BaseComponent,
}

impl Ls191 {
    pub fn new() -> Self {
        Ls191 {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }

    pub fn count(&self) -> Option<u8> {
        self.base.read_byte(&PIN_Q)
    }
}

impl Component for Ls191 {
    fn type_name(&self) -> &'static str {
        "74LS191"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn input(&mut self, pin: usize, value: PinValue) -> bool {
        let previous = self.base.value(pin);
        if !self.base.store(pin, value) {
            return false;
        }
        if pin != PIN_CP || previous != PinValue::Low || value != PinValue::High {
            return false;
        }

        if self.base.value(PIN_LOAD) == PinValue::Low {
            if self.base.read_byte(&PIN_DATA).is_none() {
                return false;
            }
            self.base.set_pending(PendingOperation::Load);
            return true;
        }
        if self.base.value(PIN_LOAD) == PinValue::High && self.base.value(PIN_CTEN) == PinValue::Low
        {
            if self.base.read_byte(&PIN_Q).is_none() {
                return false;
            }
            // Direction must be pinned down before the edge means anything
            let operation = match self.base.value(PIN_DIRECTION) {
                PinValue::Low => PendingOperation::CountUp,
                PinValue::High => PendingOperation::CountDown,
                PinValue::Floating => return false,
            };
            self.base.set_pending(operation);
            return true;
        }
        false
    }

    fn work(&mut self) {
        match self.base.take_pending() {
            PendingOperation::Load => {
                let Some(value) = self.base.read_byte(&PIN_DATA) else {
                    return;
                };
                self.base.drive_byte(&PIN_Q, value);
                self.base
                    .drive_bit(PIN_MAX_MIN, value == 0 || value == u8::MAX);
                self.base.drive_bit(PIN_RCO, false);
            }
            PendingOperation::CountUp => {
                let Some(current) = self.base.read_byte(&PIN_Q) else {
                    return;
                };
                let at_max = current == u8::MAX;
                let next = current.wrapping_add(1);
                self.base.drive_byte(&PIN_Q, next);
                self.base.drive_bit(PIN_MAX_MIN, next == u8::MAX);
                self.base.drive_bit(PIN_RCO, at_max);
            }
            PendingOperation::CountDown => {
                let Some(current) = self.base.read_byte(&PIN_Q) else {
                    return;
                };
                let at_min = current == 0;
                let next = current.wrapping_sub(1);
                self.base.drive_byte(&PIN_Q, next);
                self.base.drive_bit(PIN_MAX_MIN, next == 0);
                self.base.drive_bit(PIN_RCO, at_min);
            }
            _ => {}
        }
    }
}

impl Default for Ls191 {
    fn default() -> Self {
        Ls191::new()
    }
}
