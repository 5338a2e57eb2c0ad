//! Resolution of a raw source line to at most one instruction record.

use crate::instruction_table::{InstructionRecord, InstructionTable};

/// Resolve the line under the cursor to its instruction record, if any.
///
/// The candidate mnemonic is the first space-delimited token of the trimmed,
/// uppercased line. Comments, labels, blank lines, and operand-only
/// continuation lines all resolve to `None`; absence is the expected outcome
/// for most lines, not an error.
pub fn resolve<'a>(table: &'a InstructionTable, line: &str) -> Option<&'a InstructionRecord> {
    let normalized = line.trim().to_uppercase();
    let candidate = normalized.split(' ').next().unwrap_or("");
    if candidate.is_empty() {
        return None;
    }
    table.get(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> InstructionTable {
        InstructionTable::load(
            br#"{
                "LD": {"usage": "Load", "instructions": [["LD A,B"], ["LD A,C"]]},
                "ADD": {"usage": "Add", "instructions": [["ADD A,r"]]}
            }"#,
        )
        .expect("test table")
    }

    #[test]
    fn resolves_exact_mnemonic() {
        let table = table();
        let record = resolve(&table, "LD").expect("match");
        assert_eq!(record.mnemonic, "LD");
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let table = table();
        let upper = resolve(&table, "LD").expect("upper");
        let lower = resolve(&table, "ld").expect("lower");
        let mixed = resolve(&table, "Ld").expect("mixed");
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn operands_and_surrounding_whitespace_are_tolerated() {
        let table = table();
        let bare = resolve(&table, "LD").expect("bare");
        let with_operands = resolve(&table, "  ld a,b  ").expect("operands");
        assert_eq!(bare, with_operands);
    }

    #[test]
    fn non_matching_lines_resolve_to_none() {
        let table = table();
        assert!(resolve(&table, "").is_none());
        assert!(resolve(&table, "   ").is_none());
        assert!(resolve(&table, "; comment").is_none());
        assert!(resolve(&table, "LABEL:").is_none());
        assert!(resolve(&table, "XYZZY").is_none());
    }

    #[test]
    fn label_form_of_a_mnemonic_does_not_match() {
        // `LD:` is a label, and the colon stays part of the first token.
        let table = table();
        assert!(resolve(&table, "LD:").is_none());
    }

    #[test]
    fn only_the_first_token_is_considered() {
        let table = table();
        assert!(resolve(&table, "loop: LD A,B").is_none());
        assert!(resolve(&table, "add ld").is_some());
        assert_eq!(resolve(&table, "add ld").unwrap().mnemonic, "ADD");
    }
}
