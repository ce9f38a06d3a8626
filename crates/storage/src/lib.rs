//! Simulated contract storage for starkviz.
//!
//! This crate backs the interactive storage demo:
//! - A single simulated storage slot fed by two operands
//! - The view-model every demo surface is rendered from
//! - Static illustrative labels for addresses and state roots
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Presentation Layer                       │
//! │     (status line, layout table, syscalls, tree)          │
//! └────────────────────────┬────────────────────────────────┘
//!                          │ reads
//! ┌────────────────────────▼────────────────────────────────┐
//! │                  StorageViewModel                        │
//! │        (one snapshot, derived on demand)                 │
//! └────────────────────────┬────────────────────────────────┘
//!                          │ derive_view_model()
//! ┌────────────────────────▼────────────────────────────────┐
//! │                  StorageSimulator                        │
//! │  ┌─────────────┐  ┌──────────────────────────────────┐  │
//! │  │  Operands   │  │  StorageSlot                     │  │
//! │  │   - a, b    │  │   - name, address label          │  │
//! │  │             │  │   - value, has_been_written      │  │
//! │  └─────────────┘  └──────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use starkviz_storage::{Operand, StorageSimulator};
//!
//! let mut sim = StorageSimulator::new();
//! sim.set_operand(Operand::A, "5");
//! sim.set_operand(Operand::B, "7");
//! sim.write();
//!
//! let view = sim.derive_view_model();
//! assert_eq!(view.value, 12);
//! assert!(view.is_written());
//! ```

pub mod labels;
pub mod simulator;
pub mod view;

// Re-export commonly used types
pub use labels::{AddressLabel, StateRootLabel};
pub use simulator::{
    parse_operand, Operand, Operands, Result, SlotValue, StorageError, StorageSimulator,
    StorageSlot,
};
pub use view::{
    LayoutRow, PendingWrite, SlotVariant, StatusLine, StorageViewModel, SyscallTrace, TreeDiagram,
};
