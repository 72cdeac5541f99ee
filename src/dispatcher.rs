//! Signal propagation.
//!
//! A stimulus is delivered to one pin and the resulting edits spread
//! breadth-first along the wiring until no component reports a change.
//! Real propagation delay is not modeled; a wave is an instantaneous
//! settling of the whole bench.

use std::collections::VecDeque;

use crate::circuit::{Circuit, PinId};
use crate::error::SimError;
use crate::pin::PinValue;

/// Deliveries processed before a wave is declared oscillating.
pub const DEFAULT_STEP_LIMIT: usize = 10_000;

/// One pin edit observed during a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinChange {
    pub pin: PinId,
    pub value: PinValue,
}

/// Everything that happened in response to a single stimulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wave {
    /// Changed pins in first-change order, each holding its final value.
    pub changes: Vec<PinChange>,
    /// Deliveries processed.
    pub steps: usize,
    /// False when the step limit cut the wave short.
    pub settled: bool,
}

impl Wave {
    /// Final value a pin took during this wave, if it changed at all.
    pub fn change_for(&self, pin: PinId) -> Option<PinValue> {
        self.changes
            .iter()
            .find(|change| change.pin == pin)
            .map(|change| change.value)
    }
}

/// Walks waves across a circuit.
///
/// Stateless apart from the step limit, so one dispatcher can serve any
/// number of circuits.
pub struct Dispatcher {
    step_limit: usize,
}

impl Dispatcher {
    pub fn new() -> Self {
        Dispatcher {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }

    /// A dispatcher that gives up earlier than the default. Used to keep
    /// deliberately oscillating benches cheap.
    pub fn with_step_limit(step_limit: usize) -> Self {
        Dispatcher { step_limit }
    }

    /// Apply `value` to `pin` and propagate until the bench settles.
    ///
    /// Feedback loops that never settle are cut off at the step limit;
    /// the wave comes back with `settled == false` rather than an error,
    /// since an oscillator is a legal thing to build.
    pub fn stimulate(
        &self,
        circuit: &mut Circuit,
        pin: PinId,
        value: PinValue,
    ) -> Result<Wave, SimError> {
        if !circuit.is_powered() {
            return Err(SimError::NotPowered);
        }
        // Reject stimuli aimed at nothing before touching the queue.
        circuit.pin_value(pin)?;

        let mut wave = Wave {
            changes: Vec::new(),
            steps: 0,
            settled: true,
        };
        let mut queue: VecDeque<(PinId, PinValue)> = VecDeque::new();
        queue.push_back((pin, value));

        while let Some((target, signal)) = queue.pop_front() {
            if wave.steps >= self.step_limit {
                wave.settled = false;
                log::warn!(
                    "wave stopped after {} deliveries, bench looks oscillating",
                    self.step_limit
                );
                break;
            }
            wave.steps += 1;

            for change in self.deliver(circuit, target, signal) {
                Self::record(&mut wave.changes, change);
                let Ok(function) = circuit.pin_function(change.pin) else {
                    continue;
                };
                if function.can_drive() {
                    for peer in circuit.links(change.pin) {
                        queue.push_back((*peer, change.value));
                    }
                }
            }
        }

        log::debug!(
            "wave from {}: {} deliveries, {} pins changed, settled={}",
            pin,
            wave.steps,
            wave.changes.len(),
            wave.settled
        );
        Ok(wave)
    }

    /// Drive a pin HIGH and back LOW, as a debounced push button would.
    pub fn pulse(&self, circuit: &mut Circuit, pin: PinId) -> Result<(Wave, Wave), SimError> {
        let rise = self.stimulate(circuit, pin, PinValue::High)?;
        let fall = self.stimulate(circuit, pin, PinValue::Low)?;
        Ok((rise, fall))
    }

    pub fn power_on(&self, circuit: &mut Circuit) {
        if circuit.is_powered() {
            return;
        }
        circuit.set_powered(true);
        log::info!("bench powered on");
    }

    /// Cut power. Every component falls back to its power-on state, so
    /// registers and counters lose their contents.
    pub fn power_off(&self, circuit: &mut Circuit) {
        if !circuit.is_powered() {
            return;
        }
        circuit.reset_all();
        circuit.set_powered(false);
        log::info!("bench powered off");
    }

    /// Hand one signal to one component and report which of its pins
    /// moved. The receiving component runs `work` only when it accepted
    /// the signal, but pin edits are collected either way because a
    /// stored input counts as a change even when the part is not ready.
    fn deliver(&self, circuit: &mut Circuit, pin: PinId, value: PinValue) -> Vec<PinChange> {
        let component = match circuit.component_mut(pin.component) {
            Ok(component) => component,
            Err(_) => {
                log::warn!("dropping signal for vanished component {}", pin.component);
                return Vec::new();
            }
        };
        let before: Vec<PinValue> = (0..component.pin_count())
            .map(|index| component.pin_value(index))
            .collect();

        if component.input(pin.pin, value) {
            component.work();
        }

        let mut changes = Vec::new();
        for (index, old) in before.iter().enumerate() {
            let new = component.pin_value(index);
            if new != *old {
                changes.push(PinChange {
                    pin: PinId::new(pin.component, index),
                    value: new,
                });
            }
        }
        changes
    }

    /// Keep one entry per pin, first-change order, latest value.
    fn record(changes: &mut Vec<PinChange>, change: PinChange) {
        if let Some(existing) = changes.iter_mut().find(|entry| entry.pin == change.pin) {
            existing.value = change.value;
        } else {
            changes.push(change);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::new()
    }
}
