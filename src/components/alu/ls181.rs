//! 8-bit arithmetic logic unit modeled after the 74LS181.
//!
//! Hardware architecture:
//! - Two cascaded 4-bit slices joined by carry lookahead, not by
//!   rippling the lower slice's last internal carry
//! - 16 logic functions (`M` HIGH) and 16 arithmetic functions
//!   (`M` LOW) selected by `S3..S0`
//! - Aggregate propagate and generate outputs for cascading into a
//!   wider lookahead unit
//!
//! Hardware deviations:
//! - Carry-in and carry-out are active HIGH for active-high operands,
//!   where the real part runs them inverted
//! - `A=B` reports whether the result equals `A XOR B` bit for bit; it
//!   is not a magnitude comparator

use crate::component::{BaseComponent, Component};
use crate::pin::{PinFunction, PinValue};

const PIN_NAMES: &[&str] = &[
    "A7", "A6", "A5", "A4", "A3", "A2", "A1", "A0", "B7", "B6", "B5", "B4", "B3", "B2", "B1", "B0",
    "S3", "S2", "S1", "S0", "M", "Cn", "GND", "VCC", "F0", "F1", "F2", "F3", "F4", "F5", "F6",
    "F7", "A=B", "P", "G", "Cn+8",
];

const PIN_FUNCTIONS: &[PinFunction] = &[
    PinFunction::RequiredInput, // A7
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput, // A0
    PinFunction::RequiredInput, // B7
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput, // B0
    PinFunction::RequiredInput, // S3
    PinFunction::RequiredInput,
    PinFunction::RequiredInput,
    PinFunction::RequiredInput, // S0
    PinFunction::RequiredInput, // M
    PinFunction::RequiredInput, // Cn
    PinFunction::Ground,
    PinFunction::Power,
    PinFunction::Output, // F0
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output,
    PinFunction::Output, // F7
    PinFunction::Output, // A=B
    PinFunction::Output, // P
    PinFunction::Output, // G
    PinFunction::Output, // Cn+8
];

/// Operand buses in bit order, so `PIN_A[0]` is `A0`.
const PIN_A: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const PIN_B: [usize; 8] = [15, 14, 13, 12, 11, 10, 9, 8];
/// Select bus in bit order, `S0` first.
const PIN_S: [usize; 4] = [19, 18, 17, 16];
const PIN_M: usize = 20;
const PIN_CN: usize = 21;
const PIN_F: [usize; 8] = [24, 25, 26, 27, 28, 29, 30, 31];
const PIN_EQ: usize = 32;
const PIN_P: usize = 33;
const PIN_G: usize = 34;
const PIN_CN8: usize = 35;

struct AluResult {
    function: u8,
    equality: bool,
    propagate: bool,
    generate: bool,
    carry_out: bool,
}

pub struct Ls181 {
    base: BaseComponent,
}

impl Ls181 {
    pub fn new() -> Self {
        Ls181 {
            base: BaseComponent::new(PIN_NAMES, PIN_FUNCTIONS),
        }
    }

    /// Current result bus, once every input has been driven.
    pub fn result(&self) -> Option<u8> {
        self.base.read_byte(&PIN_F)
    }

    /// The slice equations. Per bit, `x` is the propagate term and `y`
    /// the generate term; `y` is always a subset of `x`, which is what
    /// makes `x`/`y` usable directly in the lookahead expansion. The
    /// arithmetic result is exactly `x + y + carry`, the logic result
    /// pins every internal carry HIGH, collapsing to `!(x ^ y)`.
    fn evaluate(a: u8, b: u8, select: u8, logic_mode: bool, carry_in: bool) -> AluResult {
        let s0 = select & 0b0001 != 0;
        let s1 = select & 0b0010 != 0;
        let s2 = select & 0b0100 != 0;
        let s3 = select & 0b1000 != 0;

        let x = a | (if s0 { b } else { 0 }) | (if s1 { !b } else { 0 });
        let y = a & ((if s2 { !b } else { 0 }) | (if s3 { b } else { 0 }));

        let function = if logic_mode {
            !(x ^ y)
        } else {
            // Ripple the internal carries; bit i of `carries` is the
            // carry into bit i
            let mut carries = 0u8;
            let mut carry = carry_in;
            for bit in 0..8 {
                if carry {
                    carries |= 1 << bit;
                }
                let xi = x & (1 << bit) != 0;
                let yi = y & (1 << bit) != 0;
                carry = yi || (xi && carry);
            }
            x ^ y ^ carries
        };

        let bit = |value: u8, index: u8| value & (1 << index) != 0;
        let propagate_low = x & 0x0F == 0x0F;
        let generate_low = bit(y, 3)
            || (bit(y, 2) && bit(x, 3))
            || (bit(y, 1) && bit(x, 2) && bit(x, 3))
            || (bit(y, 0) && bit(x, 1) && bit(x, 2) && bit(x, 3));
        let propagate_high = x & 0xF0 == 0xF0;
        let generate_high = bit(y, 7)
            || (bit(y, 6) && bit(x, 7))
            || (bit(y, 5) && bit(x, 6) && bit(x, 7))
            || (bit(y, 4) && bit(x, 5) && bit(x, 6) && bit(x, 7));

        // Lookahead carry into the upper slice and out of the part
        let slice_carry = generate_low || (propagate_low && carry_in);
        let carry_out = generate_high || (propagate_high && slice_carry);

        AluResult {
            function,
            equality: function == (a ^ b),
            propagate: propagate_low && propagate_high,
            generate: generate_high || (propagate_high && generate_low),
            carry_out,
        }
    }
}

impl Component for Ls181 {
    fn type_name(&self) -> &'static str {
        "74LS181"
    }

    fn base(&self) -> &BaseComponent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseComponent {
        &mut self.base
    }

    fn work(&mut self) {
        let Some(a) = self.base.read_byte(&PIN_A) else {
            return;
        };
        let Some(b) = self.base.read_byte(&PIN_B) else {
            return;
        };
        let mut select = 0u8;
        for (bit, pin) in PIN_S.iter().enumerate() {
            match self.base.value(*pin).to_bool() {
                Some(true) => select |= 1 << bit,
                Some(false) => {}
                None => return,
            }
        }
        let Some(logic_mode) = self.base.value(PIN_M).to_bool() else {
            return;
        };
        let Some(carry_in) = self.base.value(PIN_CN).to_bool() else {
            return;
        };

        let out = Self::evaluate(a, b, select, logic_mode, carry_in);
        self.base.drive_byte(&PIN_F, out.function);
        self.base.drive_bit(PIN_EQ, out.equality);
        self.base.drive_bit(PIN_P, out.propagate);
        self.base.drive_bit(PIN_G, out.generate);
        self.base.drive_bit(PIN_CN8, out.carry_out);
    }
}

impl Default for Ls181 {
    fn default() -> Self {
        Ls181::new()
    }
}
