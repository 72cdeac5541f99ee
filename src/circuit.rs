use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::components::ComponentType;
use crate::error::SimError;
use crate::pin::{PinFunction, PinValue};

/// Stable identity of a component within one circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CP{}", self.0)
    }
}

/// Addresses one pin of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId {
    pub component: ComponentId,
    pub pin: usize,
}

impl PinId {
    pub fn new(component: ComponentId, pin: usize) -> Self {
        PinId { component, pin }
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.component, self.pin)
    }
}

/// Where the UI drew a part. Opaque to the simulation, carried so a
/// saved bench reopens with the same arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// One wire between two pins. Normalized so the smaller endpoint comes
/// first, making the pair an identity regardless of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    a: PinId,
    b: PinId,
}

impl Connection {
    pub fn new(a: PinId, b: PinId) -> Self {
        if b < a {
            Connection { a: b, b: a }
        } else {
            Connection { a, b }
        }
    }

    pub fn endpoints(&self) -> (PinId, PinId) {
        (self.a, self.b)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.a, self.b)
    }
}

struct Slot {
    component: Box<dyn Component>,
    /// Peers wired to each pin, in the order the wires were made.
    links: Vec<Vec<PinId>>,
    position: Position,
}

/// Owns every component and wire on the bench.
///
/// Components live in an id-keyed arena and wires are (id, pin-index)
/// pairs recorded on both endpoints, so cascade deletes and propagation
/// walk plain indices instead of object references.
pub struct Circuit {
    slots: HashMap<ComponentId, Slot>,
    /// Creation order; keeps reset sweeps and saves deterministic.
    order: Vec<ComponentId>,
    next_id: u32,
    powered: bool,
}

impl Circuit {
    pub fn new() -> Self {
        Circuit {
            slots: HashMap::new(),
            order: Vec::new(),
            next_id: 0,
            powered: false,
        }
    }

    /// Instantiate a catalog part and take ownership of it.
    pub fn add(&mut self, kind: ComponentType, position: Position) -> ComponentId {
        let component = kind.build();
        let id = ComponentId(self.next_id);
        self.next_id += 1;
        log::debug!("placed {} as {}", component.type_name(), id);
        let links = vec![Vec::new(); component.pin_count()];
        self.slots.insert(
            id,
            Slot {
                component,
                links,
                position,
            },
        );
        self.order.push(id);
        id
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Component ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.order.iter().copied()
    }

    pub fn component(&self, id: ComponentId) -> Result<&dyn Component, SimError> {
        self.slots
            .get(&id)
            .map(|slot| slot.component.as_ref())
            .ok_or(SimError::ComponentNotFound(id))
    }

    pub fn component_mut(&mut self, id: ComponentId) -> Result<&mut dyn Component, SimError> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(SimError::ComponentNotFound(id))?;
        Ok(slot.component.as_mut())
    }

    pub fn position(&self, id: ComponentId) -> Result<Position, SimError> {
        self.slots
            .get(&id)
            .map(|slot| slot.position)
            .ok_or(SimError::ComponentNotFound(id))
    }

    pub fn set_position(&mut self, id: ComponentId, position: Position) -> Result<(), SimError> {
        let slot = self
            .slots
            .get_mut(&id)
            .ok_or(SimError::ComponentNotFound(id))?;
        slot.position = position;
        Ok(())
    }

    pub fn pin_value(&self, pin: PinId) -> Result<PinValue, SimError> {
        let slot = self.slot_pin(pin)?;
        Ok(slot.component.pin_value(pin.pin))
    }

    pub fn pin_function(&self, pin: PinId) -> Result<PinFunction, SimError> {
        let slot = self.slot_pin(pin)?;
        Ok(slot.component.pin_function(pin.pin))
    }

    /// Wire two pins together.
    ///
    /// Accepted exactly when the pairing can carry a signal: one side
    /// able to drive and the opposite side able to receive. Everything
    /// is validated before any mutation, and repeating a request for an
    /// existing wire changes nothing.
    pub fn connect(&mut self, a: PinId, b: PinId) -> Result<Connection, SimError> {
        let function_a = self.pin_function(a)?;
        let function_b = self.pin_function(b)?;
        if a == b {
            return Err(SimError::InvalidConnection(format!(
                "{} cannot be wired to itself",
                a
            )));
        }
        let carries_signal = (function_a.can_drive() && function_b.can_receive())
            || (function_b.can_drive() && function_a.can_receive());
        if !carries_signal {
            return Err(SimError::InvalidConnection(format!(
                "{} ({}) cannot be wired to {} ({})",
                a, function_a, b, function_b
            )));
        }
        if !self.linked(a, b) {
            self.push_link(a, b);
            self.push_link(b, a);
            log::debug!("wired {} to {}", a, b);
        }
        Ok(Connection::new(a, b))
    }

    /// Remove one wire. Returns true when it existed.
    pub fn disconnect(&mut self, connection: Connection) -> bool {
        let (a, b) = connection.endpoints();
        let forward = self.drop_link(a, b);
        let backward = self.drop_link(b, a);
        if forward || backward {
            log::debug!("unwired {}", connection);
        }
        forward || backward
    }

    /// Delete a component and every wire touching any of its pins.
    pub fn remove(&mut self, id: ComponentId) -> Result<(), SimError> {
        let slot = self.slots.remove(&id).ok_or(SimError::ComponentNotFound(id))?;
        self.order.retain(|other| *other != id);
        for (pin, peers) in slot.links.iter().enumerate() {
            let own = PinId::new(id, pin);
            for peer in peers {
                self.drop_link(*peer, own);
            }
        }
        log::debug!("removed {} {}", slot.component.type_name(), id);
        Ok(())
    }

    /// Pins wired to `pin`, in wiring order. Empty for unknown pins.
    pub fn links(&self, pin: PinId) -> &[PinId] {
        self.slots
            .get(&pin.component)
            .and_then(|slot| slot.links.get(pin.pin))
            .map(|peers| peers.as_slice())
            .unwrap_or(&[])
    }

    /// Every wire on the bench, one entry per pair, in the creation
    /// order of the owning components and the wiring order per pin.
    pub fn connections(&self) -> Vec<Connection> {
        let mut wires = Vec::new();
        for id in &self.order {
            let Some(slot) = self.slots.get(id) else {
                continue;
            };
            for (pin, peers) in slot.links.iter().enumerate() {
                let own = PinId::new(*id, pin);
                for peer in peers {
                    let wire = Connection::new(own, *peer);
                    if !wires.contains(&wire) {
                        wires.push(wire);
                    }
                }
            }
        }
        wires
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub(crate) fn set_powered(&mut self, powered: bool) {
        self.powered = powered;
    }

    /// Reset every component to its power-on state, in creation order.
    pub(crate) fn reset_all(&mut self) {
        for id in &self.order {
            if let Some(slot) = self.slots.get_mut(id) {
                slot.component.reset();
            }
        }
    }

    fn slot_pin(&self, pin: PinId) -> Result<&Slot, SimError> {
        let slot = self
            .slots
            .get(&pin.component)
            .ok_or(SimError::ComponentNotFound(pin.component))?;
        if pin.pin >= slot.component.pin_count() {
            return Err(SimError::PinNotFound {
                component: pin.component,
                pin: pin.pin.to_string(),
            });
        }
        Ok(slot)
    }

    fn linked(&self, a: PinId, b: PinId) -> bool {
        self.links(a).contains(&b)
    }

    fn push_link(&mut self, from: PinId, to: PinId) {
        if let Some(slot) = self.slots.get_mut(&from.component) {
            slot.links[from.pin].push(to);
        }
    }

    fn drop_link(&mut self, from: PinId, to: PinId) -> bool {
        let Some(peers) = self
            .slots
            .get_mut(&from.component)
            .and_then(|slot| slot.links.get_mut(from.pin))
        else {
            return false;
        };
        let before = peers.len();
        peers.retain(|peer| *peer != to);
        peers.len() != before
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Circuit::new()
    }
}
