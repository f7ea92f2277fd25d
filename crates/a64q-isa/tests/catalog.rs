//! Built-in catalog decode table and invariants.

use a64q_isa::{Catalog, Decoder, FieldRole, OPCODE_BITS, builtin, decode, is_fixed_tag};

fn texts(catalog: &Catalog, opcode: u32) -> Vec<String> {
    decode(catalog, opcode)
        .texts()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_builtin_catalog_is_consistent() {
    let catalog = Catalog::builtin().unwrap();
    catalog.validate().unwrap();
    let total: usize = builtin::PARTITIONS.iter().map(|p| p.len()).sum();
    assert_eq!(catalog.len(), total);

    for pattern in &catalog {
        assert_eq!(pattern.tags().len(), OPCODE_BITS, "{}", pattern.encoding());
        for (bit, tag) in (0..32).rev().zip(pattern.tags()) {
            let masked = (pattern.fixed_mask() >> bit) & 1 == 1;
            assert_eq!(masked, is_fixed_tag(tag), "{} bit {bit}", pattern.encoding());
        }
    }
}

#[test]
fn test_builtin_catalog_has_one_field_per_slot() {
    let catalog = Catalog::builtin().unwrap();
    for pattern in &catalog {
        for role in [
            FieldRole::Destination,
            FieldRole::Base,
            FieldRole::Secondary,
            FieldRole::Transfer,
            FieldRole::Immediate,
            FieldRole::Offset,
            FieldRole::Shift,
        ] {
            let count = pattern.fields().iter().filter(|f| f.role() == role).count();
            assert!(count <= 1, "{} has {count} {role:?} fields", pattern.encoding());
        }
    }
}

#[test]
fn test_builtin_partitions_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let first: Vec<&str> = builtin::PARTITIONS
        .iter()
        .map(|p| p[0].encoding)
        .collect();
    assert_eq!(
        first,
        [
            "ADD_32_addsub_imm",
            "SVC_EX_exception",
            "STUR_32_ldst_unscaled",
            "ADD_32_addsub_shift",
        ]
    );
    assert_eq!(catalog.get(0).unwrap().encoding(), "ADD_32_addsub_imm");
}

#[test]
fn test_decode_table() {
    let catalog = Catalog::builtin().unwrap();
    let cases: &[(u32, &[&str])] = &[
        (0x9100_03E0, &["ADD x0, sp, #0x0", "MOV x0, sp"]),
        (0x9140_0000, &["ADD x0, x0, #0x0, lsl #12"]),
        (0x1100_0420, &["ADD w0, w1, #0x1"]),
        (0xD503_201F, &["NOP", "HINT #0x0"]),
        (0xD503_207F, &["WFI", "HINT #0x3"]),
        (0xD503_221F, &["HINT #0x10"]),
        (0xD400_0001, &["SVC #0x0"]),
        (0xD61F_0020, &["BR x1"]),
        (0xAA01_03E0, &["ORR x0, sp, x1", "MOV x0, x1"]),
        (0x8B02_0020, &["ADD x0, x1, x2"]),
        (0x9AC2_0820, &["UDIV x0, x1, x2"]),
        (0xF840_83E1, &["LDUR x1, [sp, #0x8]"]),
        (0xB800_0041, &["STUR w1, [x2, #0x0]"]),
    ];
    for (opcode, expected) in cases {
        assert_eq!(texts(&catalog, *opcode), *expected, "opcode {opcode:#010x}");
    }
}

#[test]
fn test_decode_compare_aliases() {
    let catalog = Catalog::builtin().unwrap();
    // subs xzr, x1, #0x10
    let lines = texts(&catalog, 0xF100_403F);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "CMP x1, #0x10");
}

#[test]
fn test_lsl_alias_of_lslv() {
    let catalog = Catalog::builtin().unwrap();
    let decoded = Decoder::new(&catalog).decode(0x9AC0_2000);
    let encodings: Vec<&str> = decoded.iter().map(|l| l.pattern.encoding()).collect();
    assert_eq!(encodings, ["LSLV_64_dp_2src", "LSL_LSLV_64_dp_2src"]);
}

#[test]
fn test_unknown_opcode_decodes_to_nothing() {
    let catalog = Catalog::builtin().unwrap();
    assert!(texts(&catalog, 0x0000_0000).is_empty());
    assert!(texts(&catalog, 0xFFFF_FFFF).is_empty());
}
