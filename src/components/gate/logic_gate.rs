//! Discrete two-input and single-input gates.
//!
//! Quad packages are modeled one gate at a time, so every instance is a
//! single boolean function with its own pins.

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

const BINARY_NAMES: &[&str] = &["A", "B", "Y"];
const BINARY_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::Output,
];

const UNARY_NAMES: &[&str] = &["A", "Y"];
const UNARY_FUNCTIONS: &[PinFunction] = &[PinFunction::RequiredInput, PinFunction::Output];

/// Boolean function computed by a [`LogicGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    And,
    Or,
    Nand,
    Xor,
    Not,
    Buffer,
}

impl GateKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            GateKind::And => "ANDgate",
            GateKind::Or => "ORgate",
            GateKind::Nand => "NANDgate",
            GateKind::Xor => "XORgate",
            GateKind::Not => "NOTgate",
            GateKind::Buffer => "Buffer",
        }
    }

    fn is_unary(&self) -> bool {
        matches!(self, GateKind::Not | GateKind::Buffer)
    }

    fn apply(&self, a: bool, b: bool) -> bool {
        match self {
            GateKind::And => a && b,
            GateKind::Or => a || b,
            GateKind::Nand => !(a && b),
            GateKind::Xor => a ^ b,
            GateKind::Not => !a,
            GateKind::Buffer => a,
        }
    }
}

/// All inputs are required, so `Y` keeps floating until the gate sees a
/// defined level on every input.
pub struct LogicGate {
    base: BaseComponent,
    kind: GateKind,
}

impl LogicGate {
    pub fn new(kind: GateKind) -> Self {
        let (names, functions) = if kind.is_unary() {
            (UNARY_NAMES, UNARY_FUNCTIONS)
        } else {
            (BINARY_NAMES, BINARY_FUNCTIONS)
        };
        LogicGate {
            base: BaseComponent::new(names, functions),
            kind,
        }
    }

    pub fn kind(&self) -> GateKind {
        self.kind
    }

    fn output_pin(&self) -> usize {
        if self.kind.is_unary() {
            1
        } else {
            2
        }
    }
}

impl Component for LogicGate {
    fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {
        let Some(a) = self.base.value(0).to_bool() else {
            return;
        };
        let out = if self.kind.is_unary() {
            self.kind.apply(a, a)
        } else {
            match self.base.value(1).to_bool() {
                Some(b) => self.kind.apply(a, b),
                None => return,
            }
        };
        let pin = self.output_pin();
        self.base.drive_bit(pin, out);
    }
}
