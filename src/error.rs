use thiserror::Error;

use crate::circuit::ComponentId;

/// Everything that can go wrong while editing or driving a bench.
///
/// None of these are fatal to the process: wiring errors reject the
/// request before any graph mutation, and an unpowered stimulus simply
/// reports itself so the caller can ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The requested type string is not in the fixed catalog.
    #[error("unknown component type `{0}`")]
    UnknownComponentType(String),

    /// No component with this id exists in the circuit.
    #[error("component {0} does not exist")]
    ComponentNotFound(ComponentId),

    /// A pin reference did not resolve on the named component.
    #[error("pin `{pin}` not found on component {component}")]
    PinNotFound {
        component: ComponentId,
        pin: String,
    },

    /// The requested wiring pairs pin roles that cannot carry a signal.
    #[error("invalid connection: {0}")]
    InvalidConnection(String),

    /// A stimulus arrived while the bench power was off.
    #[error("simulation is not powered on")]
    NotPowered,

    /// A netlist could not be read, parsed or replayed.
    #[error("netlist error: {0}")]
    Netlist(String),
}
