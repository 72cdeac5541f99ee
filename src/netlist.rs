//! JSON netlists.
//!
//! A netlist is the persistent form of a bench: the parts, where they
//! sit, and the wires between named pins. Building one produces a fresh
//! [`Workbench`] plus a label-to-id map so callers can keep talking
//! about parts by the names used in the file.
//!
//! File format:
//!
//! ```json
//! {
//!   "name": "counter-demo",
//!   "description": "Push button clocking a counter",
//!   "components": [
//!     {"label": "CLK", "component_type": "SinglePulse", "position": {"x": 0, "y": 0}},
//!     {"label": "CNT", "component_type": "74LS163", "position": {"x": 120, "y": 0}}
//!   ],
//!   "connections": [
//!     {"from": {"component": "CLK", "pin": "OUT"}, "to": {"component": "CNT", "pin": "CP"}}
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::circuit::{ComponentId, Position};
use crate::error::SimError;
use crate::workbench::Workbench;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Netlist {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub components: Vec<ComponentEntry>,
    pub connections: Vec<ConnectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub label: String,
    pub component_type: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub from: PinRef,
    pub to: PinRef,
}

/// One endpoint of a wire, by component label and pin reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinRef {
    pub component: String,
    pub pin: String,
}

impl Netlist {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        serde_json::from_str(json).map_err(|err| SimError::Netlist(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self).map_err(|err| SimError::Netlist(err.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let json = fs::read_to_string(path).map_err(|err| SimError::Netlist(err.to_string()))?;
        Self::from_json(&json)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|err| SimError::Netlist(err.to_string()))
    }

    /// Replay the netlist onto a fresh, unpowered bench.
    ///
    /// All-or-nothing: the first unknown type, duplicate label or bad
    /// wire aborts the build and nothing is returned.
    pub fn build(&self) -> Result<(Workbench, HashMap<String, ComponentId>), SimError> {
        let mut bench = Workbench::new();
        let mut labels: HashMap<String, ComponentId> = HashMap::new();

        for entry in &self.components {
            if labels.contains_key(&entry.label) {
                return Err(SimError::Netlist(format!(
                    "duplicate component label `{}`",
                    entry.label
                )));
            }
            let id = bench.create_component(&entry.component_type, entry.position)?;
            labels.insert(entry.label.clone(), id);
        }

        for wire in &self.connections {
            let from = Self::lookup(&labels, &wire.from.component)?;
            let to = Self::lookup(&labels, &wire.to.component)?;
            bench.connect((from, &wire.from.pin), (to, &wire.to.pin))?;
        }

        log::debug!(
            "built netlist `{}`: {} components, {} wires",
            self.name,
            self.components.len(),
            self.connections.len()
        );
        Ok((bench, labels))
    }

    /// Snapshot a live bench into a netlist, labeling each part with
    /// its component id.
    pub fn capture(name: &str, bench: &Workbench) -> Self {
        let mut components = Vec::new();
        for id in bench.components() {
            components.push(ComponentEntry {
                label: id.to_string(),
                component_type: bench
                    .component_type(id)
                    .unwrap_or("unknown")
                    .to_string(),
                position: bench.position(id).unwrap_or_default(),
            });
        }

        let mut connections = Vec::new();
        for wire in bench.connections() {
            let (a, b) = wire.endpoints();
            connections.push(ConnectionEntry {
                from: Self::pin_ref(bench, a),
                to: Self::pin_ref(bench, b),
            });
        }

        Netlist {
            name: name.to_string(),
            description: String::new(),
            components,
            connections,
        }
    }

    fn lookup(labels: &HashMap<String, ComponentId>, label: &str) -> Result<ComponentId, SimError> {
        labels
            .get(label)
            .copied()
            .ok_or_else(|| SimError::Netlist(format!("unknown component label `{}`", label)))
    }

    fn pin_ref(bench: &Workbench, pin: crate::circuit::PinId) -> PinRef {
        // Unnamed pins are stored by index, which resolve_pin accepts back
        let name = match bench.pin_name(pin) {
            Ok(name) if !name.is_empty() => name.to_string(),
            _ => pin.pin.to_string(),
        };
        PinRef {
            component: pin.component.to_string(),
            pin: name,
        }
    }
}
