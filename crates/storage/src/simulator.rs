//! In-memory simulation of a single contract storage slot.
//!
//! Models the `HelloContract` demo: two operands, one `sum` slot, and an
//! `add_two_numbers` call that writes their sum. Nothing is persisted and
//! no operation here can fail.

use crate::labels::{AddressLabel, SUM_SLOT};
use crate::view::{PendingWrite, SlotVariant, StorageViewModel};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors raised while interpreting learner commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("unknown operand '{0}' (expected 'a' or 'b')")]
    UnknownOperand(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Value held by a simulated slot. Wide enough that any operand sum fits.
pub type SlotValue = i128;

pub const DEFAULT_A: i64 = 5;
pub const DEFAULT_B: i64 = 7;

/// Which of the two demo inputs to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operand {
    A,
    B,
}

impl FromStr for Operand {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            _ => Err(StorageError::UnknownOperand(s.to_string())),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

/// The two learner-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
}

impl Default for Operands {
    fn default() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
        }
    }
}

impl Operands {
    pub fn get(&self, which: Operand) -> i64 {
        match which {
            Operand::A => self.a,
            Operand::B => self.b,
        }
    }

    fn set(&mut self, which: Operand, value: i64) {
        match which {
            Operand::A => self.a = value,
            Operand::B => self.b = value,
        }
    }

    /// The value `add_two_numbers` would store for these operands.
    ///
    /// Both the write itself and the pending-write preview go through here.
    pub fn sum(&self) -> SlotValue {
        SlotValue::from(self.a) + SlotValue::from(self.b)
    }
}

/// Parse learner input the way a numeric text field does.
///
/// Leading whitespace is skipped, an optional sign and the leading run of
/// digits are read, and anything after them is ignored (`"12abc"` is 12).
/// Input with no leading digits, or outside the `i64` range, becomes 0.
pub fn parse_operand(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        debug!(input = raw, "non-numeric operand, using 0");
        return 0;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };

    parsed.unwrap_or_else(|_| {
        debug!(input = raw, "operand out of range, using 0");
        0
    })
}

/// A simulated storage variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageSlot {
    name: String,
    address: AddressLabel,
    value: SlotValue,
    has_been_written: bool,
}

impl StorageSlot {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            address: AddressLabel::for_slot(&name),
            name,
            value: 0,
            has_been_written: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &AddressLabel {
        &self.address
    }

    pub fn has_been_written(&self) -> bool {
        self.has_been_written
    }
}

/// Owns one simulated slot and the operands feeding it.
#[derive(Debug, Clone)]
pub struct StorageSimulator {
    slot: StorageSlot,
    operands: Operands,
}

impl Default for StorageSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageSimulator {
    /// Simulator for the `sum` slot with the default operands.
    pub fn new() -> Self {
        Self::with_slot(SUM_SLOT)
    }

    /// Simulator for a slot with a custom name.
    pub fn with_slot(name: impl Into<String>) -> Self {
        Self {
            slot: StorageSlot::new(name),
            operands: Operands::default(),
        }
    }

    /// Replace one operand from raw learner input. Never touches the slot.
    pub fn set_operand(&mut self, which: Operand, raw: &str) {
        let value = parse_operand(raw);
        self.operands.set(which, value);
        debug!(operand = %which, value, "operand set");
    }

    /// Store `a + b` in the slot, capturing the current operands.
    pub fn write(&mut self) {
        self.slot.value = self.operands.sum();
        self.slot.has_been_written = true;
        debug!(slot = %self.slot.name, value = %self.slot.value, "slot written");
    }

    /// The slot's value, or 0 if it was never written.
    pub fn read(&self) -> SlotValue {
        if self.slot.has_been_written {
            self.slot.value
        } else {
            0
        }
    }

    /// Clear the slot. Operands keep their last values.
    pub fn reset(&mut self) {
        self.slot.value = 0;
        self.slot.has_been_written = false;
        debug!(slot = %self.slot.name, "slot reset");
    }

    pub fn operand(&self, which: Operand) -> i64 {
        self.operands.get(which)
    }

    pub fn operands(&self) -> Operands {
        self.operands
    }

    pub fn slot(&self) -> &StorageSlot {
        &self.slot
    }

    pub fn has_been_written(&self) -> bool {
        self.slot.has_been_written
    }

    /// Snapshot everything the demo displays.
    ///
    /// Every surface (status line, layout table, syscall trace, tree
    /// diagram, state root) must be rendered from this snapshot.
    pub fn derive_view_model(&self) -> StorageViewModel {
        let variant = if self.slot.has_been_written {
            SlotVariant::PostWrite {
                value: self.slot.value,
            }
        } else {
            SlotVariant::PreWrite
        };

        StorageViewModel {
            slot_name: self.slot.name.clone(),
            address: self.slot.address.clone(),
            value: self.read(),
            state_root: variant.state_root(),
            variant,
            pending: PendingWrite {
                a: self.operands.a,
                b: self.operands.b,
                sum: self.operands.sum(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("5"), 5);
        assert_eq!(parse_operand("  -12"), -12);
        assert_eq!(parse_operand("+3"), 3);
        assert_eq!(parse_operand("42abc"), 42);
        assert_eq!(parse_operand("3.9"), 3);
        assert_eq!(parse_operand("abc"), 0);
        assert_eq!(parse_operand(""), 0);
        assert_eq!(parse_operand("-"), 0);
        assert_eq!(parse_operand("99999999999999999999"), 0);
    }

    #[test]
    fn test_operand_from_str() {
        assert_eq!("a".parse::<Operand>(), Ok(Operand::A));
        assert_eq!(" B ".parse::<Operand>(), Ok(Operand::B));
        assert_eq!(
            "c".parse::<Operand>(),
            Err(StorageError::UnknownOperand("c".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let sim = StorageSimulator::new();
        assert_eq!(sim.operands(), Operands { a: 5, b: 7 });
        assert_eq!(sim.read(), 0);
        assert!(!sim.has_been_written());
        assert_eq!(sim.slot().name(), "sum");
    }

    #[test]
    fn test_set_operand_does_not_write() {
        let mut sim = StorageSimulator::new();
        sim.set_operand(Operand::A, "100");

        assert_eq!(sim.operand(Operand::A), 100);
        assert_eq!(sim.read(), 0);
        assert!(!sim.has_been_written());
    }

    #[test]
    fn test_write_and_read() {
        let mut sim = StorageSimulator::new();
        sim.set_operand(Operand::A, "5");
        sim.set_operand(Operand::B, "7");
        sim.write();

        assert_eq!(sim.read(), 12);
        assert!(sim.has_been_written());
    }

    #[test]
    fn test_write_freezes_operands() {
        let mut sim = StorageSimulator::new();
        sim.write();
        sim.set_operand(Operand::A, "20");

        assert_eq!(sim.read(), 12);
        assert_eq!(sim.operands().sum(), 27);
    }

    #[test]
    fn test_reset_keeps_operands() {
        let mut sim = StorageSimulator::new();
        sim.set_operand(Operand::A, "1");
        sim.set_operand(Operand::B, "2");
        sim.write();
        sim.reset();

        assert_eq!(sim.read(), 0);
        assert!(!sim.has_been_written());
        assert_eq!(sim.operands(), Operands { a: 1, b: 2 });
    }

    #[test]
    fn test_sum_does_not_overflow() {
        let mut sim = StorageSimulator::new();
        sim.set_operand(Operand::A, &i64::MAX.to_string());
        sim.set_operand(Operand::B, &i64::MAX.to_string());
        sim.write();

        assert_eq!(sim.read(), 2 * i64::MAX as i128);
    }

    #[test]
    fn test_custom_slot_name() {
        let sim = StorageSimulator::with_slot("stored_data");
        assert_eq!(sim.slot().name(), "stored_data");
        assert_eq!(sim.slot().address().expr, "H(\"stored_data\")");
    }
}
