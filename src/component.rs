use std::mem;

use crate::pin::{PinFunction, PinValue};

/// Operation latched by a clocked part between the qualifying clock edge
/// and the `work()` call that commits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingOperation {
    #[default]
    None,
    Clear,
    Load,
    CountUp,
    CountDown,
}

/// Pin bookkeeping embedded in every concrete component.
///
/// Holds the three index-aligned pin sequences (name, function, value)
/// plus the pending-operation latch. The name and function tables are
/// static per part type; only the values move at runtime.
pub struct BaseComponent {
    names: &'static [&'static str],
    functions: &'static [PinFunction],
    values: Vec<PinValue>,
    pending: PendingOperation,
}

impl BaseComponent {
    /// Build the pin table for a part. Supply pins come up at their
    /// fixed level, everything else starts floating.
    pub fn new(names: &'static [&'static str], functions: &'static [PinFunction]) -> Self {
        debug_assert_eq!(names.len(), functions.len());
        let values = functions
            .iter()
            .map(|function| match function {
                PinFunction::Ground => PinValue::Low,
                PinFunction::Power => PinValue::High,
                _ => PinValue::Floating,
            })
            .collect();
        BaseComponent {
            names,
            functions,
            values,
            pending: PendingOperation::None,
        }
    }

    pub fn pin_count(&self) -> usize {
        self.values.len()
    }

    pub fn pin_name(&self, pin: usize) -> &'static str {
        self.names[pin]
    }

    pub fn pin_function(&self, pin: usize) -> PinFunction {
        self.functions[pin]
    }

    pub fn value(&self, pin: usize) -> PinValue {
        self.values[pin]
    }

    pub fn values(&self) -> &[PinValue] {
        &self.values
    }

    /// Store a received value. Returns false when the write is a no-op:
    /// the same value again, or a supply pin that never changes.
    pub fn store(&mut self, pin: usize, value: PinValue) -> bool {
        if self.functions[pin].is_fixed() || self.values[pin] == value {
            return false;
        }
        self.values[pin] = value;
        true
    }

    /// Write an output pin from `work()`.
    pub fn drive(&mut self, pin: usize, value: PinValue) {
        self.values[pin] = value;
    }

    pub fn drive_bit(&mut self, pin: usize, bit: bool) {
        self.values[pin] = PinValue::from_bool(bit);
    }

    /// Read a pin group as a little-endian byte; `None` while any of the
    /// eight floats.
    pub fn read_byte(&self, pins: &[usize; 8]) -> Option<u8> {
        let mut byte = 0u8;
        for (bit, pin) in pins.iter().enumerate() {
            if self.values[*pin].to_bool()? {
                byte |= 1 << bit;
            }
        }
        Some(byte)
    }

    /// Drive a pin group with a little-endian byte.
    pub fn drive_byte(&mut self, pins: &[usize; 8], byte: u8) {
        for (bit, pin) in pins.iter().enumerate() {
            self.values[*pin] = PinValue::from_bool(byte & (1 << bit) != 0);
        }
    }

    /// True when every required input is driven.
    pub fn required_inputs_ready(&self) -> bool {
        self.functions
            .iter()
            .zip(&self.values)
            .all(|(function, value)| !function.is_required() || !value.is_floating())
    }

    pub fn pending(&self) -> PendingOperation {
        self.pending
    }

    pub fn set_pending(&mut self, operation: PendingOperation) {
        self.pending = operation;
    }

    /// Consume the latched operation, leaving `None` behind.
    pub fn take_pending(&mut self) -> PendingOperation {
        mem::take(&mut self.pending)
    }

    /// Drop every non-supply pin back to floating and cancel any pending
    /// operation.
    pub fn reset(&mut self) {
        for (function, value) in self.functions.iter().zip(&mut self.values) {
            if !function.is_fixed() {
                *value = PinValue::Floating;
            }
        }
        self.pending = PendingOperation::None;
    }

    /// Resolve a pin reference: exact name first, then case-insensitive
    /// name, then bare pin index.
    pub fn resolve_pin(&self, reference: &str) -> Option<usize> {
        if let Some(pin) = self.names.iter().position(|name| *name == reference) {
            return Some(pin);
        }
        if let Some(pin) = self
            .names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(reference))
        {
            return Some(pin);
        }
        reference
            .parse::<usize>()
            .ok()
            .filter(|pin| *pin < self.values.len())
    }
}

/// Behavioral contract shared by every part in the catalog.
///
/// The dispatcher talks to parts exclusively through [`Component::input`]
/// and [`Component::work`]; everything else is bookkeeping around that
/// pair.
pub trait Component {
    /// Catalog name of the part, e.g. `"74LS163"`.
    fn type_name(&self) -> &'static str;

    fn base(&self) -> &BaseComponent;

    fn base_mut(&mut self) -> &mut BaseComponent;

    /// Receive a value on one pin and report whether `work()` must run.
    ///
    /// The default covers combinational parts: swallow no-op writes,
    /// then ask for evaluation once every required input is driven.
    /// Clocked parts override this with edge detection and mode decode.
    fn input(&mut self, pin: usize, value: PinValue) -> bool {
        if !self.base_mut().store(pin, value) {
            return false;
        }
        self.is_ready()
    }

    /// Evaluate the part and write its output pins. Must be idempotent
    /// when inputs are unchanged and nothing is pending.
    fn work(&mut self);

    /// True once every required input is driven.
    fn is_ready(&self) -> bool {
        self.base().required_inputs_ready()
    }

    /// Drop all non-supply pins to floating and cancel pending work.
    fn reset(&mut self) {
        self.base_mut().reset();
    }

    fn pin_count(&self) -> usize {
        self.base().pin_count()
    }

    fn pin_name(&self, pin: usize) -> &'static str {
        self.base().pin_name(pin)
    }

    fn pin_function(&self, pin: usize) -> PinFunction {
        self.base().pin_function(pin)
    }

    fn pin_value(&self, pin: usize) -> PinValue {
        self.base().value(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["A", "B", "GND", "VCC", "Y"];
    const FUNCTIONS: &[PinFunction] = &[
        PinFunction::RequiredInput,
        PinFunction::Input,
        PinFunction::Ground,
        PinFunction::Power,
        PinFunction::Output,
    ];

    fn base() -> BaseComponent {
        BaseComponent::new(NAMES, FUNCTIONS)
    }

    #[test]
    fn test_initial_pin_values() {
        let base = base();
        assert_eq!(base.value(0), PinValue::Floating);
        assert_eq!(base.value(1), PinValue::Floating);
        assert_eq!(base.value(2), PinValue::Low);
        assert_eq!(base.value(3), PinValue::High);
        assert_eq!(base.value(4), PinValue::Floating);
    }

    #[test]
    fn test_store_rejects_no_op_writes() {
        let mut base = base();
        assert!(base.store(0, PinValue::High));
        // Same value again is a no-op
        assert!(!base.store(0, PinValue::High));
        assert!(base.store(0, PinValue::Low));
    }

    #[test]
    fn test_store_never_moves_supply_pins() {
        let mut base = base();
        assert!(!base.store(2, PinValue::High));
        assert!(!base.store(3, PinValue::Low));
        assert_eq!(base.value(2), PinValue::Low);
        assert_eq!(base.value(3), PinValue::High);
    }

    #[test]
    fn test_required_inputs_gate_readiness() {
        let mut base = base();
        assert!(!base.required_inputs_ready());
        // The plain input does not matter
        base.store(1, PinValue::High);
        assert!(!base.required_inputs_ready());
        base.store(0, PinValue::Low);
        assert!(base.required_inputs_ready());
    }

    #[test]
    fn test_reset_floats_everything_but_supplies() {
        let mut base = base();
        base.store(0, PinValue::High);
        base.drive(4, PinValue::Low);
        base.set_pending(PendingOperation::Load);
        base.reset();
        assert_eq!(base.value(0), PinValue::Floating);
        assert_eq!(base.value(4), PinValue::Floating);
        assert_eq!(base.value(2), PinValue::Low);
        assert_eq!(base.value(3), PinValue::High);
        assert_eq!(base.pending(), PendingOperation::None);
    }

    #[test]
    fn test_take_pending_clears_the_latch() {
        let mut base = base();
        base.set_pending(PendingOperation::CountUp);
        assert_eq!(base.take_pending(), PendingOperation::CountUp);
        assert_eq!(base.pending(), PendingOperation::None);
    }

    #[test]
    fn test_byte_helpers() {
        const BUS_NAMES: &[&str] = &["D0", "D1", "D2", "D3", "D4", "D5", "D6", "D7"];
        const BUS_FUNCTIONS: &[PinFunction] = &[PinFunction::Input; 8];
        let mut base = BaseComponent::new(BUS_NAMES, BUS_FUNCTIONS);
        let pins = [0, 1, 2, 3, 4, 5, 6, 7];

        // Any floating pin poisons the read
        assert_eq!(base.read_byte(&pins), None);

        base.drive_byte(&pins, 0xA5);
        assert_eq!(base.read_byte(&pins), Some(0xA5));
        assert_eq!(base.value(0), PinValue::High);
        assert_eq!(base.value(1), PinValue::Low);
        assert_eq!(base.value(7), PinValue::High);
    }

    #[test]
    fn test_resolve_pin_prefers_exact_then_case_then_index() {
        let base = base();
        assert_eq!(base.resolve_pin("A"), Some(0));
        assert_eq!(base.resolve_pin("gnd"), Some(2));
        assert_eq!(base.resolve_pin("4"), Some(4));
        assert_eq!(base.resolve_pin("5"), None);
        assert_eq!(base.resolve_pin("nope"), None);
    }
}
