//! High-level bench facade.
//!
//! Joins the circuit, the dispatcher and the catalog behind one API
//! where components are addressed by id and pins by name, which is the
//! shape UI and scripting layers want to talk to.

use std::str::FromStr;

use crate::circuit::{Circuit, ComponentId, Connection, PinId, Position};
use crate::components::ComponentType;
use crate::dispatcher::{Dispatcher, Wave};
use crate::error::SimError;
use crate::pin::{PinFunction, PinValue};

/// Snapshot of one pin for display layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinState {
    pub name: &'static str,
    pub function: PinFunction,
    pub value: PinValue,
}

pub struct Workbench {
    circuit: Circuit,
    dispatcher: Dispatcher,
}

impl Workbench {
    pub fn new() -> Self {
        Workbench {
            circuit: Circuit::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Place a part by its catalog name.
    pub fn create_component(
        &mut self,
        type_name: &str,
        position: Position,
    ) -> Result<ComponentId, SimError> {
        let kind = ComponentType::from_str(type_name)?;
        Ok(self.circuit.add(kind, position))
    }

    /// Place a part whose catalog entry is already known.
    pub fn add(&mut self, kind: ComponentType, position: Position) -> ComponentId {
        self.circuit.add(kind, position)
    }

    /// Resolve a pin reference: exact name, then case-insensitive name,
    /// then bare pin index.
    pub fn resolve_pin(&self, id: ComponentId, pin: &str) -> Result<PinId, SimError> {
        let component = self.circuit.component(id)?;
        let index = component
            .base()
            .resolve_pin(pin)
            .ok_or_else(|| SimError::PinNotFound {
                component: id,
                pin: pin.to_string(),
            })?;
        Ok(PinId::new(id, index))
    }

    pub fn connect(
        &mut self,
        from: (ComponentId, &str),
        to: (ComponentId, &str),
    ) -> Result<Connection, SimError> {
        let a = self.resolve_pin(from.0, from.1)?;
        let b = self.resolve_pin(to.0, to.1)?;
        self.circuit.connect(a, b)
    }

    pub fn disconnect(&mut self, connection: Connection) -> bool {
        self.circuit.disconnect(connection)
    }

    pub fn remove_component(&mut self, id: ComponentId) -> Result<(), SimError> {
        self.circuit.remove(id)
    }

    /// Apply a level to a named pin and let the wave settle.
    pub fn stimulate(
        &mut self,
        id: ComponentId,
        pin: &str,
        value: PinValue,
    ) -> Result<Wave, SimError> {
        let target = self.resolve_pin(id, pin)?;
        self.dispatcher.stimulate(&mut self.circuit, target, value)
    }

    /// Drive a named pin HIGH and back LOW as two settled waves.
    pub fn pulse(&mut self, id: ComponentId, pin: &str) -> Result<(Wave, Wave), SimError> {
        let target = self.resolve_pin(id, pin)?;
        self.dispatcher.pulse(&mut self.circuit, target)
    }

    pub fn power_on(&mut self) {
        self.dispatcher.power_on(&mut self.circuit);
    }

    pub fn power_off(&mut self) {
        self.dispatcher.power_off(&mut self.circuit);
    }

    pub fn is_powered(&self) -> bool {
        self.circuit.is_powered()
    }

    pub fn pin_value(&self, id: ComponentId, pin: &str) -> Result<PinValue, SimError> {
        let target = self.resolve_pin(id, pin)?;
        self.circuit.pin_value(target)
    }

    /// Per-pin snapshot of one component, index-aligned with its pins.
    pub fn pin_states(&self, id: ComponentId) -> Result<Vec<PinState>, SimError> {
        let component = self.circuit.component(id)?;
        Ok((0..component.pin_count())
            .map(|pin| PinState {
                name: component.pin_name(pin),
                function: component.pin_function(pin),
                value: component.pin_value(pin),
            })
            .collect())
    }

    /// Read eight named pins as a little-endian byte; `Ok(None)` while
    /// any of the eight floats.
    pub fn read_byte(&self, id: ComponentId, pins: &[&str; 8]) -> Result<Option<u8>, SimError> {
        let mut byte = 0u8;
        for (bit, name) in pins.iter().enumerate() {
            let target = self.resolve_pin(id, name)?;
            match self.circuit.pin_value(target)?.to_bool() {
                Some(true) => byte |= 1 << bit,
                Some(false) => {}
                None => return Ok(None),
            }
        }
        Ok(Some(byte))
    }

    pub fn component_type(&self, id: ComponentId) -> Result<&'static str, SimError> {
        Ok(self.circuit.component(id)?.type_name())
    }

    pub fn pin_name(&self, pin: PinId) -> Result<&'static str, SimError> {
        let component = self.circuit.component(pin.component)?;
        if pin.pin >= component.pin_count() {
            return Err(SimError::PinNotFound {
                component: pin.component,
                pin: pin.pin.to_string(),
            });
        }
        Ok(component.pin_name(pin.pin))
    }

    pub fn position(&self, id: ComponentId) -> Result<Position, SimError> {
        self.circuit.position(id)
    }

    pub fn set_position(&mut self, id: ComponentId, position: Position) -> Result<(), SimError> {
        self.circuit.set_position(id, position)
    }

    /// Component ids in creation order.
    pub fn components(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.circuit.ids()
    }

    pub fn connections(&self) -> Vec<Connection> {
        self.circuit.connections()
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Workbench::new()
    }
}
