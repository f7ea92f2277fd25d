//! Field extraction: named integer values for one (pattern, opcode) pair.

use crate::{EncodingPattern, FieldRole};

/// Field values of one opcode under one pattern.
///
/// Register fields keep their own slots. `imm*` fields fold into `imm` and
/// `off*`/`simm` into `offs`; when several fields fold into the same slot the
/// one declared last (in MSB-to-LSB order of first appearance) wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues<'p> {
    pub(crate) fields: Vec<(&'p str, u32)>,
    pub rd: Option<u32>,
    pub rn: Option<u32>,
    pub rm: Option<u32>,
    pub rt: Option<u32>,
    pub imm: Option<u32>,
    pub offs: Option<u32>,
    pub sh: Option<u32>,
}

impl<'p> FieldValues<'p> {
    /// Every named field with its raw value, in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[(&'p str, u32)] {
        &self.fields
    }

    /// Raw value of a named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| *value)
    }
}

/// Extract all field values of `opcode` under `pattern`.
///
/// If the pattern has `CRm` and `op2` fields and no `imm*` field, the
/// immediate is synthesized as `(CRm << 3) | op2` (hint instructions).
#[must_use]
pub fn extract(pattern: &EncodingPattern, opcode: u32) -> FieldValues<'_> {
    let mut values = FieldValues::default();
    let mut crm = None;
    let mut op2 = None;

    for field in pattern.fields() {
        let value = field.read(opcode);
        values.fields.push((field.name(), value));
        match field.role() {
            FieldRole::Destination => values.rd = Some(value),
            FieldRole::Base => values.rn = Some(value),
            FieldRole::Secondary => values.rm = Some(value),
            FieldRole::Transfer => values.rt = Some(value),
            FieldRole::Immediate => values.imm = Some(value),
            FieldRole::Offset => values.offs = Some(value),
            FieldRole::Shift => values.sh = Some(value),
            FieldRole::HintCrm => crm = Some(value),
            FieldRole::HintOp2 => op2 = Some(value),
            FieldRole::Other => {}
        }
    }

    if values.imm.is_none() {
        if let (Some(crm), Some(op2)) = (crm, op2) {
            values.imm = Some((crm << 3) | op2);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(layout: &[(&str, usize)]) -> EncodingPattern {
        let tags: Vec<String> = layout
            .iter()
            .flat_map(|(tag, width)| std::iter::repeat_n((*tag).to_string(), *width))
            .collect();
        let mut mask = 0u32;
        let mut bits = 0u32;
        for (bit, tag) in (0..32u32).rev().zip(&tags) {
            if tag == "0" || tag == "1" {
                mask |= 1 << bit;
                if tag == "1" {
                    bits |= 1 << bit;
                }
            }
        }
        EncodingPattern::new("T", "T", mask, bits, tags, "T").unwrap()
    }

    #[test]
    fn test_extract_add_immediate() {
        let add = pattern(&[
            ("1", 1),
            ("0", 2),
            ("1", 1),
            ("0", 3),
            ("1", 1),
            ("0", 1),
            ("sh", 1),
            ("imm12", 12),
            ("Rn", 5),
            ("Rd", 5),
        ]);
        // add x3, x2, #0x123, lsl #12
        let values = extract(&add, 0x9100_0000 | 1 << 22 | 0x123 << 10 | 2 << 5 | 3);
        assert_eq!(values.rd, Some(3));
        assert_eq!(values.rn, Some(2));
        assert_eq!(values.imm, Some(0x123));
        assert_eq!(values.sh, Some(1));
        assert_eq!(values.rm, None);
        assert_eq!(values.get("imm12"), Some(0x123));
        let names: Vec<&str> = values.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["sh", "imm12", "Rn", "Rd"]);
    }

    #[test]
    fn test_extract_hint_immediate_from_crm_op2() {
        let hint = pattern(&[("1", 8), ("0", 12), ("CRm", 4), ("op2", 3), ("1", 5)]);
        let values = extract(&hint, 0xFF00_0000 | 0b1010 << 8 | 0b011 << 5 | 0x1F);
        assert_eq!(values.imm, Some(0b101_0011));
        assert_eq!(values.get("CRm"), Some(0b1010));
        assert_eq!(values.get("op2"), Some(0b011));
    }

    #[test]
    fn test_extract_real_imm_beats_hint_synthesis() {
        let p = pattern(&[("CRm", 4), ("op2", 3), ("imm5", 5), ("0", 20)]);
        let values = extract(&p, 0xFFF0_0000);
        assert_eq!(values.imm, Some(0x1F));
    }

    #[test]
    fn test_extract_offset_fold() {
        let p = pattern(&[("offset", 8), ("Rt", 5), ("0", 19)]);
        let values = extract(&p, 0x8108_0000);
        assert_eq!(values.offs, Some(0x81));
        assert_eq!(values.rt, Some(1));
        assert_eq!(values.imm, None);

        let p = pattern(&[("simm", 9), ("0", 23)]);
        assert_eq!(extract(&p, 0xFF80_0000).offs, Some(0x1FF));
    }

    #[test]
    fn test_extract_last_declared_wins() {
        // immlo appears first, immhi second.
        let p = pattern(&[("0", 1), ("immlo", 2), ("0", 6), ("immhi", 19), ("0", 4)]);
        let values = extract(&p, 0x6000_0000 | 0x5 << 4);
        assert_eq!(values.get("immlo"), Some(0b11));
        assert_eq!(values.get("immhi"), Some(0x5));
        assert_eq!(values.imm, Some(0x5));
    }

    #[test]
    fn test_extract_no_fields() {
        let p = pattern(&[("1", 32)]);
        let values = extract(&p, u32::MAX);
        assert!(values.fields().is_empty());
        assert_eq!(values, FieldValues::default());
    }
}
