//! View-model of the storage demo and the surfaces rendered from it.
//!
//! Each surface below is a pure function of a [`StorageViewModel`]; none of
//! them look at the simulator, so they cannot disagree with each other.

use crate::labels::{AddressLabel, StateRootLabel, CONTRACT_ROOT};
use crate::simulator::SlotValue;
use serde::Serialize;

/// Which version of the visualisation to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotVariant {
    /// The slot has not been written since the demo started or was reset.
    PreWrite,
    /// The slot holds the sum captured at the last write.
    PostWrite { value: SlotValue },
}

impl SlotVariant {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::PostWrite { .. })
    }

    pub fn state_root(&self) -> StateRootLabel {
        match self {
            Self::PreWrite => StateRootLabel::ORIGINAL,
            Self::PostWrite { .. } => StateRootLabel::UPDATED,
        }
    }
}

/// What the next `add_two_numbers` call would do with the live operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PendingWrite {
    pub a: i64,
    pub b: i64,
    pub sum: SlotValue,
}

impl PendingWrite {
    /// The contract call, e.g. `add_two_numbers(5, 7)`.
    pub fn call(&self) -> String {
        format!("add_two_numbers({}, {})", self.a, self.b)
    }
}

/// Snapshot of the storage demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageViewModel {
    pub slot_name: String,
    pub address: AddressLabel,
    /// Readable value: the stored sum after a write, 0 before.
    pub value: SlotValue,
    pub variant: SlotVariant,
    pub state_root: StateRootLabel,
    pub pending: PendingWrite,
}

/// `sum = 12` line with the activity dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub active: bool,
}

/// Row of the storage layout table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRow {
    pub name: String,
    pub address: String,
    pub value: SlotValue,
    pub highlighted: bool,
}

/// One column of the syscall panel: Cairo code, syscall, result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyscallTrace {
    pub cairo: String,
    pub syscall: String,
    pub result: String,
}

/// Contract root -> storage address -> leaf, plus the state root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeDiagram {
    pub root: &'static str,
    pub address: String,
    pub leaf: String,
    pub leaf_filled: bool,
    pub address_hash: &'static str,
    pub state_root: StateRootLabel,
}

impl StorageViewModel {
    pub fn is_written(&self) -> bool {
        self.variant.is_written()
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine {
            text: format!("{} = {}", self.slot_name, self.value),
            active: self.is_written(),
        }
    }

    pub fn layout_row(&self) -> LayoutRow {
        LayoutRow {
            name: self.slot_name.clone(),
            address: self.address.to_string(),
            value: self.value,
            highlighted: self.is_written(),
        }
    }

    /// Trace of the write the next call would perform.
    pub fn write_trace(&self) -> SyscallTrace {
        SyscallTrace {
            cairo: format!(
                "self.{}.write({} + {})",
                self.slot_name, self.pending.a, self.pending.b
            ),
            syscall: format!(
                "storage_write_syscall(address={}, value={})",
                self.address.expr, self.pending.sum
            ),
            result: format!("Storage slot updated with value: {}", self.pending.sum),
        }
    }

    pub fn read_trace(&self) -> SyscallTrace {
        SyscallTrace {
            cairo: format!("self.{}.read()", self.slot_name),
            syscall: format!("storage_read_syscall(address={})", self.address.expr),
            result: format!("Returns value: {}", self.value),
        }
    }

    pub fn tree(&self) -> TreeDiagram {
        TreeDiagram {
            root: CONTRACT_ROOT,
            address: format!("Storage Address: {}", self.address.expr),
            leaf: format!("Value: {}", self.value),
            leaf_filled: self.is_written(),
            address_hash: self.address.hash,
            state_root: self.state_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::simulator::{Operand, StorageSimulator};

    #[test]
    fn test_pre_write_surfaces() {
        let view = StorageSimulator::new().derive_view_model();

        assert_eq!(view.status_line().text, "sum = 0");
        assert!(!view.status_line().active);
        assert!(!view.layout_row().highlighted);
        assert_eq!(view.read_trace().result, "Returns value: 0");

        let tree = view.tree();
        assert_eq!(tree.leaf, "Value: 0");
        assert!(!tree.leaf_filled);
        assert_eq!(tree.state_root.root, "0x1234567...abcdef");
        assert_eq!(tree.state_root.caption, "(Original state)");
    }

    #[test]
    fn test_post_write_surfaces() {
        let mut sim = StorageSimulator::new();
        sim.write();
        let view = sim.derive_view_model();

        assert_eq!(view.status_line().text, "sum = 12");
        assert!(view.layout_row().highlighted);
        assert_eq!(
            view.layout_row().address,
            "H(\"sum\") = 0x0366a9b2b62c...3d2e1f"
        );
        assert_eq!(view.read_trace().result, "Returns value: 12");

        let tree = view.tree();
        assert_eq!(tree.leaf, "Value: 12");
        assert!(tree.leaf_filled);
        assert_eq!(tree.state_root.root, "0x9fa3c2b1...7e8d4f");
    }

    #[test]
    fn test_write_trace_uses_live_operands() {
        let mut sim = StorageSimulator::new();
        sim.write();
        sim.set_operand(Operand::B, "30");
        let view = sim.derive_view_model();

        let write = view.write_trace();
        assert_eq!(write.cairo, "self.sum.write(5 + 30)");
        assert_eq!(
            write.syscall,
            "storage_write_syscall(address=H(\"sum\"), value=35)"
        );

        // the stored value is still the one captured by the last write
        assert_eq!(view.read_trace().result, "Returns value: 12");
        assert_eq!(view.pending.call(), "add_two_numbers(5, 30)");
    }

    #[test]
    fn test_read_trace_syscall() {
        let view = StorageSimulator::new().derive_view_model();
        assert_eq!(view.read_trace().cairo, "self.sum.read()");
        assert_eq!(
            view.read_trace().syscall,
            "storage_read_syscall(address=H(\"sum\"))"
        );
    }
}
