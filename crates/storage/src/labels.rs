//! Illustrative display labels.
//!
//! None of these strings are computed. They stand in for `sn_keccak`
//! storage addresses and Patricia Merkle roots so the demo can show what
//! the values look like without hashing anything.

use serde::Serialize;
use std::fmt;

/// Name of the storage variable written by `add_two_numbers`.
pub const SUM_SLOT: &str = "sum";

/// Address the demo contract is said to be deployed at.
pub const CONTRACT_ADDRESS: &str = "0x07b3e42fb1...";

pub const CONTRACT_ROOT: &str = "Contract Root";

pub const PRE_WRITE_STATE_ROOT: &str = "0x1234567...abcdef";
pub const POST_WRITE_STATE_ROOT: &str = "0x9fa3c2b1...7e8d4f";

pub const PRE_WRITE_CAPTION: &str = "(Original state)";
pub const POST_WRITE_CAPTION: &str = "(Updated after write)";

/// Shown for slot names with no illustrative hash.
pub const UNKNOWN_ADDRESS_HASH: &str = "0x????...????";

const ADDRESS_HASHES: &[(&str, &str)] = &[(SUM_SLOT, "0x0366a9b2b62c...3d2e1f")];

/// Display label for a storage variable's address, `H("name") = 0x...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressLabel {
    /// The hash expression, e.g. `H("sum")`.
    pub expr: String,
    /// Abbreviated hash shown next to the expression.
    pub hash: &'static str,
}

impl AddressLabel {
    pub fn for_slot(name: &str) -> Self {
        let hash = ADDRESS_HASHES
            .iter()
            .find(|(slot, _)| *slot == name)
            .map_or(UNKNOWN_ADDRESS_HASH, |(_, hash)| *hash);

        Self {
            expr: format!("H(\"{name}\")"),
            hash,
        }
    }
}

impl fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expr, self.hash)
    }
}

/// The state root shown under the tree diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateRootLabel {
    pub root: &'static str,
    pub caption: &'static str,
}

impl StateRootLabel {
    pub const ORIGINAL: Self = Self {
        root: PRE_WRITE_STATE_ROOT,
        caption: PRE_WRITE_CAPTION,
    };

    pub const UPDATED: Self = Self {
        root: POST_WRITE_STATE_ROOT,
        caption: POST_WRITE_CAPTION,
    };
}

impl fmt::Display for StateRootLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_address_label() {
        let label = AddressLabel::for_slot("sum");
        assert_eq!(label.expr, "H(\"sum\")");
        assert_eq!(label.to_string(), "H(\"sum\") = 0x0366a9b2b62c...3d2e1f");
    }

    #[test]
    fn test_unknown_slot_label() {
        let label = AddressLabel::for_slot("balance");
        assert_eq!(label.expr, "H(\"balance\")");
        assert_eq!(label.hash, UNKNOWN_ADDRESS_HASH);
    }

    #[test]
    fn test_state_root_display() {
        assert_eq!(
            StateRootLabel::UPDATED.to_string(),
            "0x9fa3c2b1...7e8d4f (Updated after write)"
        );
    }
}
