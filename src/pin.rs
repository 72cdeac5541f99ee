use std::fmt;

/// Tri-state level carried by a single pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinValue {
    Low,
    High,
    /// Not driven by anything.
    Floating,
}

impl PinValue {
    pub fn to_str(&self) -> &'static str {
        match self {
            PinValue::Low => "LOW",
            PinValue::High => "HIGH",
            PinValue::Floating => "FLOATING",
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            PinValue::Low => '0',
            PinValue::High => '1',
            PinValue::Floating => 'Z',
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            PinValue::High
        } else {
            PinValue::Low
        }
    }

    /// Logic level of a driven pin; `None` while floating.
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            PinValue::Low => Some(false),
            PinValue::High => Some(true),
            PinValue::Floating => None,
        }
    }

    pub fn is_floating(&self) -> bool {
        matches!(self, PinValue::Floating)
    }
}

impl fmt::Display for PinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Electrical role of a pin within its component.
///
/// The role decides which side of a connection a pin may sit on and
/// whether the component blocks evaluation while the pin floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinFunction {
    /// Plain input; may float without blocking evaluation.
    Input,
    /// Input that must be driven before the component may evaluate.
    RequiredInput,
    Output,
    /// Drives and receives, e.g. a pin on a shared data bus.
    Bidirectional,
    /// Supply pin tied LOW at construction.
    Ground,
    /// Supply pin tied HIGH at construction.
    Power,
}

impl PinFunction {
    /// Pins that may sit on the driving side of a connection.
    pub fn can_drive(&self) -> bool {
        matches!(self, PinFunction::Output | PinFunction::Bidirectional)
    }

    /// Pins that may sit on the receiving side of a connection. Supply
    /// pins accept wires but ignore whatever arrives on them.
    pub fn can_receive(&self) -> bool {
        !matches!(self, PinFunction::Output)
    }

    /// Supply pins whose level never changes after construction.
    pub fn is_fixed(&self) -> bool {
        matches!(self, PinFunction::Ground | PinFunction::Power)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, PinFunction::RequiredInput)
    }
}

impl fmt::Display for PinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PinFunction::Input => "input",
            PinFunction::RequiredInput => "required input",
            PinFunction::Output => "output",
            PinFunction::Bidirectional => "bidirectional",
            PinFunction::Ground => "ground",
            PinFunction::Power => "power",
        };
        write!(f, "{}", label)
    }
}
