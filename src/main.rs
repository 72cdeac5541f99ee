use std::process;

use ttl_lab::{ComponentType, Netlist, PinValue, Position, SimError, Workbench};

const COUNTER_OUTPUTS: [&str; 8] = ["QA", "QB", "QC", "QD", "QE", "QF", "QG", "QH"];
const ALU_RESULT: [&str; 8] = ["F0", "F1", "F2", "F3", "F4", "F5", "F6", "F7"];

/// Push button clocking an 8-bit counter, with the carry on an LED.
const COUNTER_BENCH: &str = r#"{
    "name": "counter-demo",
    "description": "Push button clocking a 74LS163, carry output on an LED",
    "components": [
        {"label": "CLK", "component_type": "SinglePulse", "position": {"x": 0, "y": 40}},
        {"label": "CNT", "component_type": "74LS163", "position": {"x": 140, "y": 0}},
        {"label": "CARRY", "component_type": "Led", "position": {"x": 420, "y": 40}}
    ],
    "connections": [
        {"from": {"component": "CLK", "pin": "OUT"}, "to": {"component": "CNT", "pin": "CP"}},
        {"from": {"component": "CNT", "pin": "RCO"}, "to": {"component": "CARRY", "pin": "IN"}}
    ]
}"#;

fn main() {
    env_logger::init();

    println!("TTL Lab - digital logic workbench");
    println!("=================================");

    if let Err(err) = counter_demo() {
        eprintln!("counter demo failed: {}", err);
        process::exit(1);
    }
    if let Err(err) = alu_demo() {
        eprintln!("ALU demo failed: {}", err);
        process::exit(1);
    }
}

fn counter_demo() -> Result<(), SimError> {
    let netlist = Netlist::from_json(COUNTER_BENCH)?;
    let (mut bench, labels) = netlist.build()?;
    let clock = labels["CLK"];
    let counter = labels["CNT"];
    let carry_led = labels["CARRY"];

    bench.power_on();

    // Park the clock LOW and clear once so the outputs are defined
    bench.stimulate(counter, "CP", PinValue::Low)?;
    bench.stimulate(counter, "-CR", PinValue::Low)?;
    bench.pulse(clock, "OUT")?;
    bench.stimulate(counter, "-CR", PinValue::High)?;
    bench.stimulate(counter, "ENP", PinValue::High)?;
    bench.stimulate(counter, "ENT", PinValue::High)?;

    // Preload 250 so the carry shows up within a few steps
    for (bit, pin) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().enumerate() {
        bench.stimulate(counter, pin, PinValue::from_bool(250 & (1 << bit) != 0))?;
    }
    bench.stimulate(counter, "-LD", PinValue::Low)?;
    bench.pulse(clock, "OUT")?;
    bench.stimulate(counter, "-LD", PinValue::High)?;

    println!();
    println!("74LS163 loaded with 250, pulsing the clock:");
    println!("step   count   RCO    carry LED");
    for step in 1..=8 {
        bench.pulse(clock, "OUT")?;
        let count = bench
            .read_byte(counter, &COUNTER_OUTPUTS)?
            .map_or_else(|| "---".to_string(), |value| value.to_string());
        let carry = bench.pin_value(counter, "RCO")?;
        let led = bench.pin_value(carry_led, "IN")?;
        let lamp = if led == PinValue::High { "on" } else { "off" };
        println!("{:>4}   {:>5}   {:<5}  {}", step, count, carry, lamp);
    }
    Ok(())
}

fn alu_demo() -> Result<(), SimError> {
    let mut bench = Workbench::new();
    let alu = bench.add(ComponentType::Alu181, Position::default());
    bench.power_on();

    let a = 0x2Bu8;
    let b = 0x14u8;
    for bit in 0..8 {
        bench.stimulate(alu, &format!("A{}", bit), PinValue::from_bool(a & (1 << bit) != 0))?;
        bench.stimulate(alu, &format!("B{}", bit), PinValue::from_bool(b & (1 << bit) != 0))?;
    }
    // Select 1001 with M LOW is "A plus B"
    bench.stimulate(alu, "S0", PinValue::High)?;
    bench.stimulate(alu, "S1", PinValue::Low)?;
    bench.stimulate(alu, "S2", PinValue::Low)?;
    bench.stimulate(alu, "S3", PinValue::High)?;
    bench.stimulate(alu, "M", PinValue::Low)?;
    bench.stimulate(alu, "Cn", PinValue::Low)?;

    let sum = bench.read_byte(alu, &ALU_RESULT)?;
    let carry = bench.pin_value(alu, "Cn+8")?;
    println!();
    println!("74LS181 spot check:");
    match sum {
        Some(value) => println!(
            "0x{:02X} plus 0x{:02X} = 0x{:02X}, carry out {}",
            a, b, value, carry
        ),
        None => println!("result bus is floating"),
    }
    Ok(())
}
