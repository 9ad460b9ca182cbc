//! # Static Cycle Counting
//!
//! Best/worst case cycle costs that can be worked out without running the
//! code. Method after Nick Bensema's guide to cycle counting on the Atari 2600.

use std::fmt;

use crate::opcodes::{CyclePenalties, OpcodeMetadata};

/// Cycle cost of one instruction, as a best/worst case pair.
///
/// Displays as `"4"` when both bounds agree and `"4/5"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCount {
    pub best: u8,
    pub worst: u8,
}

impl CycleCount {
    pub const fn fixed(cycles: u8) -> Self {
        Self {
            best: cycles,
            worst: cycles,
        }
    }

    pub const fn range(best: u8, worst: u8) -> Self {
        Self { best, worst }
    }

    /// True when the cost may vary at runtime.
    pub const fn is_variable(&self) -> bool {
        self.best != self.worst
    }
}

impl fmt::Display for CycleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variable() {
            write!(f, "{}/{}", self.best, self.worst)
        } else {
            write!(f, "{}", self.best)
        }
    }
}

/// Two addresses cross a page iff their high bytes differ.
pub const fn crosses_page(a: u16, b: u16) -> bool {
    (a >> 8) != (b >> 8)
}

/// Computes the static cycle cost of an instruction.
///
/// * `next_address` - address of the byte right after the instruction
/// * `target` - resolved branch target; only looked at for branches
///
/// Branches carry both penalty flags and their page crossing is known
/// statically, so a crossing branch costs at least one extra cycle and one more
/// if taken. With a single flag the crossing depends on a register value, so
/// the result is always `base/base+1`.
pub fn count_cycles(meta: &OpcodeMetadata, next_address: u16, target: Option<u16>) -> CycleCount {
    let base = meta.base_cycles;
    let branch = CyclePenalties::PAGE_CROSS | CyclePenalties::BRANCH_TAKEN;

    if meta.penalties.is_empty() {
        CycleCount::fixed(base)
    } else if meta.penalties.contains(branch) {
        let crosses = target.is_some_and(|target| crosses_page(next_address, target));
        if crosses {
            CycleCount::range(base + 1, base + 2)
        } else {
            CycleCount::range(base, base + 1)
        }
    } else {
        CycleCount::range(base, base + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::classify;

    #[test]
    fn test_display() {
        assert_eq!(CycleCount::fixed(2).to_string(), "2");
        assert_eq!(CycleCount::range(4, 5).to_string(), "4/5");
    }

    #[test]
    fn test_crosses_page() {
        assert!(!crosses_page(0x80FF, 0x8000));
        assert!(crosses_page(0x80FF, 0x8100));
        assert!(crosses_page(0x0000, 0xFFFF));
    }

    #[test]
    fn test_no_penalty() {
        assert_eq!(count_cycles(&classify(0x69), 0x8002, None), CycleCount::fixed(2));
    }

    #[test]
    fn test_single_penalty_ignores_target() {
        let lda = classify(0xBD);
        assert_eq!(count_cycles(&lda, 0x8003, Some(0x1234)), CycleCount::range(4, 5));
        assert_eq!(count_cycles(&lda, 0x8003, None), CycleCount::range(4, 5));
    }

    #[test]
    fn test_branch() {
        let beq = classify(0xF0);
        assert_eq!(count_cycles(&beq, 0x8002, Some(0x8010)), CycleCount::range(2, 3));
        assert_eq!(count_cycles(&beq, 0x8002, Some(0x7FF0)), CycleCount::range(3, 4));
    }
}
