//! Data processing (immediate): add/subtract and their aliases.

use crate::RawEncoding;

pub(super) const DATA_PROCESSING_IMM: &[RawEncoding] = &[
    RawEncoding {
        mnemonic: "ADD",
        encoding: "ADD_32_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0x1100_0000,
        bits: [
            "0", "0", "0", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADD  <Wd|WSP>, <Wn|WSP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "ADD",
        encoding: "ADD_64_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0x9100_0000,
        bits: [
            "1", "0", "0", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADD  <Xd|SP>, <Xn|SP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "MOV",
        encoding: "MOV_ADD_64_addsub_imm",
        fixed_mask: 0xffff_fc00,
        fixed_bits: 0x9100_0000,
        bits: [
            "1", "0", "0", "1", "0", "0", "0", "1",
            "0", "0", "0", "0", "0", "0", "0", "0",
            "0", "0", "0", "0", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "MOV  <Xd|SP>, <Xn|SP>",
    },
    RawEncoding {
        mnemonic: "ADDS",
        encoding: "ADDS_64S_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0xb100_0000,
        bits: [
            "1", "0", "1", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADDS  <Xd>, <Xn|SP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "CMN",
        encoding: "CMN_ADDS_64S_addsub_imm",
        fixed_mask: 0xff80_001f,
        fixed_bits: 0xb100_001f,
        bits: [
            "1", "0", "1", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "1", "1", "1", "1", "1",
        ],
        template: "CMN  <Xn|SP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "SUB",
        encoding: "SUB_32_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0x5100_0000,
        bits: [
            "0", "1", "0", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "SUB  <Wd|WSP>, <Wn|WSP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "SUB",
        encoding: "SUB_64_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0xd100_0000,
        bits: [
            "1", "1", "0", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "SUB  <Xd|SP>, <Xn|SP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "SUBS",
        encoding: "SUBS_64S_addsub_imm",
        fixed_mask: 0xff80_0000,
        fixed_bits: 0xf100_0000,
        bits: [
            "1", "1", "1", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "SUBS  <Xd>, <Xn|SP>, #<imm>{, <shift>}",
    },
    RawEncoding {
        mnemonic: "CMP",
        encoding: "CMP_SUBS_64S_addsub_imm",
        fixed_mask: 0xff80_001f,
        fixed_bits: 0xf100_001f,
        bits: [
            "1", "1", "1", "1", "0", "0", "0", "1",
            "0", "sh", "imm12", "imm12", "imm12", "imm12", "imm12", "imm12",
            "imm12", "imm12", "imm12", "imm12", "imm12", "imm12", "Rn", "Rn",
            "Rn", "Rn", "Rn", "1", "1", "1", "1", "1",
        ],
        template: "CMP  <Xn|SP>, #<imm>{, <shift>}",
    },
];
