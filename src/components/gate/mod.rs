// Gate components module
pub mod logic_gate;
pub mod tristate;

// Re-export the gate types
pub use logic_gate::{GateKind, LogicGate};
pub use tristate::TristateGate;
