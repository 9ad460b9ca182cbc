//! Static cycle counting tests
//!
//! Cover the three penalty cases: none, a single page-cross penalty, and
//! conditional branches where the page crossing is known from the target.

use disasm6502::{CycleCount, Image};

fn cycles_at(code: &[u8], origin: u16) -> CycleCount {
    let image = Image::load(code, origin, usize::MAX);
    image.decode_at(origin as usize).0.cycles
}

#[test]
fn test_adc_immediate_is_fixed() {
    for origin in [0x0000, 0x80FE, 0xFFFE] {
        let cycles = cycles_at(&[0x69, 0x01], origin);
        assert_eq!(cycles, CycleCount::fixed(2));
        assert_eq!(cycles.to_string(), "2");
    }
}

#[test]
fn test_indexed_read_is_always_ambiguous() {
    // LDA $1234,X and LDA $12FF,X both report 4/5; X is unknown
    assert_eq!(cycles_at(&[0xBD, 0x34, 0x12], 0x8000).to_string(), "4/5");
    assert_eq!(cycles_at(&[0xBD, 0xFF, 0x12], 0x8000).to_string(), "4/5");
    assert_eq!(cycles_at(&[0xB1, 0x40], 0x8000).to_string(), "5/6");
}

#[test]
fn test_conservative_single_penalty_entries() {
    // EOR ($zp,X) never crosses a page but keeps its historical flag
    assert_eq!(cycles_at(&[0x41, 0x10], 0x8000).to_string(), "6/7");
    assert_eq!(cycles_at(&[0x9D, 0x00, 0x02], 0x8000).to_string(), "4/5");
}

#[test]
fn test_branch_same_page() {
    // BEQ at $8000 to $8012: next address $8002, same page
    assert_eq!(cycles_at(&[0xF0, 0x10], 0x8000).to_string(), "2/3");
}

#[test]
fn test_branch_crossing_page() {
    // BEQ at $8000 back to $7FF2: next address $8002, page $7F vs $80
    assert_eq!(cycles_at(&[0xF0, 0xF0], 0x8000).to_string(), "3/4");
}

#[test]
fn test_branch_page_is_measured_from_next_instruction() {
    // BNE at $80FE: next address is $8100, target $80F0 is on the previous page
    assert_eq!(cycles_at(&[0xD0, 0xF0], 0x80FE).to_string(), "3/4");
    // BNE at $80FE to $8105 stays on page $81 with the next address
    assert_eq!(cycles_at(&[0xD0, 0x05], 0x80FE).to_string(), "2/3");
}

#[test]
fn test_read_modify_write_has_no_penalty() {
    assert_eq!(cycles_at(&[0xFE, 0xFF, 0x20], 0x8000).to_string(), "7");
}

#[test]
fn test_undefined_opcode_costs_nothing() {
    assert_eq!(cycles_at(&[0x02], 0x8000), CycleCount::fixed(0));
}
