//! Bench-level tests for the 74LS181
//!
//! The unit tests sweep the full function tables, so these stay at the
//! bench surface: pins addressed by name, combinational re-evaluation,
//! status flags landing on real output pins.

use ttl_lab::{ComponentId, ComponentType, PinValue, Position, Workbench};

const RESULT: [&str; 8] = ["F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7"];

fn alu_bench() -> (Workbench, ComponentId) {
    let mut bench = Workbench::new();
    bench.power_on();
    let alu = bench.add(ComponentType::Alu181, Position::default());
    (bench, alu)
}

/// Drive `A0..`/`B0..`/`S0..` style pin groups from a byte, bit 0 first.
fn set_bus(bench: &mut Workbench, alu: ComponentId, prefix: &str, width: u8, byte: u8) {
    for bit in 0..width {
        let pin = format!("{}{}", prefix, bit);
        let value = PinValue::from_bool(byte & (1 << bit) != 0);
        bench.stimulate(alu, &pin, value).unwrap();
    }
}

fn set_controls(bench: &mut Workbench, alu: ComponentId, select: u8, mode: PinValue, carry: PinValue) {
    set_bus(bench, alu, "S", 4, select);
    bench.stimulate(alu, "M", mode).unwrap();
    bench.stimulate(alu, "Cn", carry).unwrap();
}

#[test]
fn test_logic_functions_by_select_code() {
    let (mut bench, alu) = alu_bench();
    set_bus(&mut bench, alu, "A", 8, 0x0F);
    set_bus(&mut bench, alu, "B", 8, 0xF0);

    // 1011 is AND, 1110 is OR, 0110 is XOR
    set_controls(&mut bench, alu, 0b1011, PinValue::High, PinValue::Low);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x00));

    set_controls(&mut bench, alu, 0b1110, PinValue::High, PinValue::Low);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0xFF));

    set_bus(&mut bench, alu, "A", 8, 0xC3);
    set_bus(&mut bench, alu, "B", 8, 0x5A);
    set_controls(&mut bench, alu, 0b0110, PinValue::High, PinValue::Low);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x99));
}

#[test]
fn test_addition_and_the_carry_chain() {
    let (mut bench, alu) = alu_bench();
    set_bus(&mut bench, alu, "A", 8, 0x2B);
    set_bus(&mut bench, alu, "B", 8, 0x14);
    set_controls(&mut bench, alu, 0b1001, PinValue::Low, PinValue::Low);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x3F));
    assert_eq!(bench.pin_value(alu, "Cn+8").unwrap(), PinValue::Low);

    bench.stimulate(alu, "Cn", PinValue::High).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x40));

    set_bus(&mut bench, alu, "A", 8, 0xFF);
    set_bus(&mut bench, alu, "B", 8, 0x01);
    bench.stimulate(alu, "Cn", PinValue::Low).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x00));
    assert_eq!(bench.pin_value(alu, "Cn+8").unwrap(), PinValue::High);
}

#[test]
fn test_subtraction_with_borrow() {
    let (mut bench, alu) = alu_bench();
    // 0110 with carry-in is A minus B; carry-out HIGH means no borrow
    set_bus(&mut bench, alu, "A", 8, 0x40);
    set_bus(&mut bench, alu, "B", 8, 0x10);
    set_controls(&mut bench, alu, 0b0110, PinValue::Low, PinValue::High);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x30));
    assert_eq!(bench.pin_value(alu, "Cn+8").unwrap(), PinValue::High);

    // Without the carry the difference comes up one short
    bench.stimulate(alu, "Cn", PinValue::Low).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x2F));

    set_bus(&mut bench, alu, "A", 8, 0x10);
    set_bus(&mut bench, alu, "B", 8, 0x40);
    bench.stimulate(alu, "Cn", PinValue::High).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0xD0));
    assert_eq!(bench.pin_value(alu, "Cn+8").unwrap(), PinValue::Low);
}

#[test]
fn test_result_tracks_every_input_edit() {
    let (mut bench, alu) = alu_bench();
    set_bus(&mut bench, alu, "A", 8, 0x2B);
    set_bus(&mut bench, alu, "B", 8, 0x14);
    set_controls(&mut bench, alu, 0b1001, PinValue::Low, PinValue::Low);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x3F));

    // No clock anywhere: one operand bit re-evaluates the whole part
    let wave = bench.stimulate(alu, "A0", PinValue::Low).unwrap();
    assert!(wave.settled);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x3E));
}

#[test]
fn test_outputs_float_until_the_last_control_arrives() {
    let (mut bench, alu) = alu_bench();
    set_bus(&mut bench, alu, "A", 8, 0x55);
    set_bus(&mut bench, alu, "B", 8, 0xAA);
    set_bus(&mut bench, alu, "S", 4, 0b1001);
    bench.stimulate(alu, "M", PinValue::Low).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), None);

    bench.stimulate(alu, "Cn", PinValue::Low).unwrap();
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0xFF));
}

#[test]
fn test_status_flags_on_their_pins() {
    let (mut bench, alu) = alu_bench();
    // Complementary operands propagate through every bit
    set_bus(&mut bench, alu, "A", 8, 0x55);
    set_bus(&mut bench, alu, "B", 8, 0xAA);
    set_controls(&mut bench, alu, 0b1001, PinValue::Low, PinValue::Low);
    assert_eq!(bench.pin_value(alu, "P").unwrap(), PinValue::High);
    assert_eq!(bench.pin_value(alu, "G").unwrap(), PinValue::Low);
    assert_eq!(bench.pin_value(alu, "A=B").unwrap(), PinValue::High);

    // Overlapping top bits generate a carry outright
    set_bus(&mut bench, alu, "A", 8, 0x80);
    set_bus(&mut bench, alu, "B", 8, 0x80);
    assert_eq!(bench.pin_value(alu, "G").unwrap(), PinValue::High);
    assert_eq!(bench.pin_value(alu, "Cn+8").unwrap(), PinValue::High);
    assert_eq!(bench.pin_value(alu, "P").unwrap(), PinValue::Low);

    // A sum sharing a bit with neither operand's XOR drops the flag
    set_bus(&mut bench, alu, "A", 8, 0x01);
    set_bus(&mut bench, alu, "B", 8, 0x01);
    assert_eq!(bench.read_byte(alu, &RESULT).unwrap(), Some(0x02));
    assert_eq!(bench.pin_value(alu, "A=B").unwrap(), PinValue::Low);
}
