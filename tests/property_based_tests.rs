//! Property-based tests
//!
//! Random stimulus programs checked against plain arithmetic models of
//! the parts, plus a couple of invariants every part has to honor.

use proptest::prelude::*;
use ttl_lab::{ComponentId, ComponentType, Netlist, PinValue, Position, Workbench};

const OUTPUTS: [&str; 8] = ["QA", "QB", "QC", "QD", "QE", "QF", "QG", "QH"];
const DATA: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];
const RESULT: [&str; 8] = ["F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7"];

fn powered() -> Workbench {
    let mut bench = Workbench::new();
    bench.power_on();
    bench
}

fn set_named_bus(bench: &mut Workbench, id: ComponentId, pins: &[&str], byte: u8) {
    for (bit, pin) in pins.iter().enumerate() {
        let value = PinValue::from_bool(byte & (1 << bit) != 0);
        bench.stimulate(id, pin, value).unwrap();
    }
}

fn set_prefixed_bus(bench: &mut Workbench, id: ComponentId, prefix: &str, width: u8, byte: u8) {
    for bit in 0..width {
        let pin = format!("{}{}", prefix, bit);
        let value = PinValue::from_bool(byte & (1 << bit) != 0);
        bench.stimulate(id, &pin, value).unwrap();
    }
}

#[cfg(test)]
mod counter_properties {
    use super::*;

    /// A 74LS163 holding `start`, enabled, clock parked LOW.
    fn loaded_163(bench: &mut Workbench, start: u8) -> ComponentId {
        let counter = bench.add(ComponentType::Counter163, Position::default());
        bench.stimulate(counter, "CP", PinValue::Low).unwrap();
        bench.stimulate(counter, "-CR", PinValue::High).unwrap();
        bench.stimulate(counter, "ENP", PinValue::High).unwrap();
        bench.stimulate(counter, "ENT", PinValue::High).unwrap();
        set_named_bus(bench, counter, &DATA, start);
        bench.stimulate(counter, "-LD", PinValue::Low).unwrap();
        bench.pulse(counter, "CP").unwrap();
        bench.stimulate(counter, "-LD", PinValue::High).unwrap();
        counter
    }

    proptest! {
        #[test]
        fn test_sync_counter_is_modular_addition(start: u8, steps in 0usize..24) {
            let mut bench = powered();
            let counter = loaded_163(&mut bench, start);
            for _ in 0..steps {
                bench.pulse(counter, "CP").unwrap();
            }
            let expected = start.wrapping_add(steps as u8);
            prop_assert_eq!(bench.read_byte(counter, &OUTPUTS).unwrap(), Some(expected));
        }

        #[test]
        fn test_carry_high_exactly_at_terminal_count(start: u8) {
            let mut bench = powered();
            let counter = loaded_163(&mut bench, start);
            bench.pulse(counter, "CP").unwrap();
            let count = bench.read_byte(counter, &OUTPUTS).unwrap().unwrap();
            let carry = bench.pin_value(counter, "RCO").unwrap();
            prop_assert_eq!(carry == PinValue::High, count == 0xFF);
        }

        #[test]
        fn test_updown_counter_walks_both_ways(start: u8, steps in 1usize..16, down: bool) {
            let mut bench = powered();
            let counter = bench.add(ComponentType::Counter191, Position::default());
            bench.stimulate(counter, "CP", PinValue::Low).unwrap();
            let direction = PinValue::from_bool(down);
            bench.stimulate(counter, "D/U", direction).unwrap();
            set_named_bus(&mut bench, counter, &DATA, start);
            bench.stimulate(counter, "-LOAD", PinValue::Low).unwrap();
            bench.pulse(counter, "CP").unwrap();
            bench.stimulate(counter, "-LOAD", PinValue::High).unwrap();
            bench.stimulate(counter, "CTEN", PinValue::Low).unwrap();

            for _ in 0..steps {
                bench.pulse(counter, "CP").unwrap();
            }
            let expected = if down {
                start.wrapping_sub(steps as u8)
            } else {
                start.wrapping_add(steps as u8)
            };
            prop_assert_eq!(bench.read_byte(counter, &OUTPUTS).unwrap(), Some(expected));
        }
    }
}

#[cfg(test)]
mod alu_properties {
    use super::*;

    fn alu_bench() -> (Workbench, ComponentId) {
        let mut bench = powered();
        let alu = bench.add(ComponentType::Alu181, Position::default());
        (bench, alu)
    }

    proptest! {
        #[test]
        fn test_addition_matches_wide_arithmetic(a: u8, b: u8, carry: bool) {
            let (mut bench, alu) = alu_bench();
            set_prefixed_bus(&mut bench, alu, "A", 8, a);
            set_prefixed_bus(&mut bench, alu, "B", 8, b);
            set_prefixed_bus(&mut bench, alu, "S", 4, 0b1001);
            bench.stimulate(alu, "M", PinValue::Low).unwrap();
            bench.stimulate(alu, "Cn", PinValue::from_bool(carry)).unwrap();

            let sum = a as u16 + b as u16 + carry as u16;
            prop_assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(sum as u8));
            let carry_out = bench.pin_value(alu, "Cn+8").unwrap();
            prop_assert_eq!(carry_out == PinValue::High, sum > 0xFF);
        }

        #[test]
        fn test_logic_selects_match_bitwise_operators(a: u8, b: u8) {
            let (mut bench, alu) = alu_bench();
            set_prefixed_bus(&mut bench, alu, "A", 8, a);
            set_prefixed_bus(&mut bench, alu, "B", 8, b);
            bench.stimulate(alu, "M", PinValue::High).unwrap();
            bench.stimulate(alu, "Cn", PinValue::Low).unwrap();

            for (select, expected) in [(0b1011u8, a & b), (0b1110, a | b), (0b0110, a ^ b)] {
                set_prefixed_bus(&mut bench, alu, "S", 4, select);
                prop_assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(expected));
            }
        }

        #[test]
        fn test_subtraction_matches_wrapping_model(a: u8, b: u8) {
            let (mut bench, alu) = alu_bench();
            set_prefixed_bus(&mut bench, alu, "A", 8, a);
            set_prefixed_bus(&mut bench, alu, "B", 8, b);
            set_prefixed_bus(&mut bench, alu, "S", 4, 0b0110);
            bench.stimulate(alu, "M", PinValue::Low).unwrap();
            bench.stimulate(alu, "Cn", PinValue::High).unwrap();

            prop_assert_eq!(
                bench.read_byte(alu, &RESULT).unwrap(),
                Some(a.wrapping_sub(b))
            );
            // Carry-out doubles as NOT borrow
            let no_borrow = bench.pin_value(alu, "Cn+8").unwrap();
            prop_assert_eq!(no_borrow == PinValue::High, a >= b);
        }
    }
}

#[cfg(test)]
mod bench_invariants {
    use super::*;

    proptest! {
        /// Driving any pin of any part twice with the same level must
        /// be absorbed: the second wave carries no changes.
        #[test]
        fn test_repeated_stimulus_is_absorbed(
            kind_index in 0usize..ComponentType::ALL.len(),
            pin_seed: usize,
            level_seed in 0usize..3,
        ) {
            let kind = ComponentType::ALL[kind_index];
            let mut bench = powered();
            let part = bench.add(kind, Position::default());
            let pin_count = bench.pin_states(part).unwrap().len();
            let pin = (pin_seed % pin_count).to_string();
            let level = [PinValue::Low, PinValue::High, PinValue::Floating][level_seed];

            bench.stimulate(part, &pin, level).unwrap();
            let echo = bench.stimulate(part, &pin, level).unwrap();
            prop_assert!(echo.settled);
            prop_assert!(echo.changes.is_empty());
        }

        /// Capturing a rebuilt capture reproduces the same netlist.
        #[test]
        fn test_capture_is_stable_over_rebuild(count in 1usize..6, seed: u8) {
            let mut bench = Workbench::new();
            for step in 0..count {
                let kind_index = (seed as usize + step) % ComponentType::ALL.len();
                let position = Position::new(step as i32 * 40, seed as i32);
                bench.add(ComponentType::ALL[kind_index], position);
            }

            let first = Netlist::capture("snapshot", &bench);
            let (rebuilt, _) = first.build().unwrap();
            let second = Netlist::capture("snapshot", &rebuilt);
            prop_assert_eq!(first, second);
        }
    }
}
