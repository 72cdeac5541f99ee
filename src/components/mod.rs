//! Fixed catalog of bench parts.
//!
//! The catalog is closed: a type string resolves to one variant here,
//! and after `build()` the bench only ever talks to the part through
//! the [`Component`] trait.

use std::fmt;
use std::str::FromStr;

use crate::component::Component;
use crate::error::SimError;

pub mod alu;
pub mod counter;
pub mod gate;
pub mod io;
pub mod memory;

// Re-export the concrete parts
pub use alu::Ls181;
pub use counter::{Ls163, Ls191};
pub use gate::{GateKind, LogicGate, TristateGate};
pub use io::{Led, SinglePulse, Switch};
pub use memory::{Ls273, Ram6116};

/// Every part the bench can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Alu181,
    Counter163,
    Counter191,
    Register273,
    Ram6116,
    And,
    Or,
    Not,
    Nand,
    Xor,
    Buffer,
    Tristate,
    Switch,
    Led,
    SinglePulse,
}

impl ComponentType {
    pub const ALL: [ComponentType; 15] = [
        ComponentType::Alu181,
        ComponentType::Counter163,
        ComponentType::Counter191,
        ComponentType::Register273,
        ComponentType::Ram6116,
        ComponentType::And,
        ComponentType::Or,
        ComponentType::Not,
        ComponentType::Nand,
        ComponentType::Xor,
        ComponentType::Buffer,
        ComponentType::Tristate,
        ComponentType::Switch,
        ComponentType::Led,
        ComponentType::SinglePulse,
    ];

    /// Catalog name as shown to users and written into netlists.
    pub fn type_name(&self) -> &'static str {
        match self {
            ComponentType::Alu181 => "74LS181",
            ComponentType::Counter163 => "74LS163",
            ComponentType::Counter191 => "74LS191",
            ComponentType::Register273 => "74LS273",
            ComponentType::Ram6116 => "RAM6116",
            ComponentType::And => "ANDgate",
            ComponentType::Or => "ORgate",
            ComponentType::Not => "NOTgate",
            ComponentType::Nand => "NANDgate",
            ComponentType::Xor => "XORgate",
            ComponentType::Buffer => "Buffer",
            ComponentType::Tristate => "TristateGate",
            ComponentType::Switch => "Switch",
            ComponentType::Led => "Led",
            ComponentType::SinglePulse => "SinglePulse",
        }
    }

    /// Instantiate the part behind this catalog entry.
    pub fn build(&self) -> Box<dyn Component> {
        match self {
            ComponentType::Alu181 => Box::new(Ls181::new()),
            ComponentType::Counter163 => Box::new(Ls163::new()),
            ComponentType::Counter191 => Box::new(Ls191::new()),
            ComponentType::Register273 => Box::new(Ls273::new()),
            ComponentType::Ram6116 => Box::new(Ram6116::new()),
            ComponentType::And => Box::new(LogicGate::new(GateKind::And)),
            ComponentType::Or => Box::new(LogicGate::new(GateKind::Or)),
            ComponentType::Not => Box::new(LogicGate::new(GateKind::Not)),
            ComponentType::Nand => Box::new(LogicGate::new(GateKind::Nand)),
            ComponentType::Xor => Box::new(LogicGate::new(GateKind::Xor)),
            ComponentType::Buffer => Box::new(LogicGate::new(GateKind::Buffer)),
            ComponentType::Tristate => Box::new(TristateGate::new()),
            ComponentType::Switch => Box::new(Switch::new()),
            ComponentType::Led => Box::new(Led::new()),
            ComponentType::SinglePulse => Box::new(SinglePulse::new()),
        }
    }
}

impl FromStr for ComponentType {
    type Err = SimError;

    /// Case-insensitive, with a few common aliases per part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let kind = match normalized.as_str() {
            "74ls181" | "74ls181_8bit" | "74181" | "alu" => ComponentType::Alu181,
            "74ls163" | "74ls163_8bit" | "74163" => ComponentType::Counter163,
            "74ls191" | "74ls191_8bit" | "74191" => ComponentType::Counter191,
            "74ls273" | "74273" => ComponentType::Register273,
            "ram6116" | "6116" => ComponentType::Ram6116,
            "andgate" | "and" => ComponentType::And,
            "orgate" | "or" => ComponentType::Or,
            "notgate" | "not" | "inverter" => ComponentType::Not,
            "nandgate" | "nand" => ComponentType::Nand,
            "xorgate" | "xor" => ComponentType::Xor,
            "buffer" => ComponentType::Buffer,
            "tristategate" | "tristate" | "triplegate" => ComponentType::Tristate,
            "switch" => ComponentType::Switch,
            "led" => ComponentType::Led,
            "singlepulse" | "pulse" => ComponentType::SinglePulse,
            _ => return Err(SimError::UnknownComponentType(s.to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
