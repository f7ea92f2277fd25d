//! Data processing (register): shifted and extended add/subtract, logical, multiply, divide, shifts.

use crate::RawEncoding;

pub(super) const DATA_PROCESSING_REG: &[RawEncoding] = &[
    RawEncoding {
        mnemonic: "ADD",
        encoding: "ADD_32_addsub_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0x0b00_0000,
        bits: [
            "0", "0", "0", "0", "1", "0", "1", "1",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADD  <Wd>, <Wn>, <Wm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "ADD",
        encoding: "ADD_64_addsub_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0x8b00_0000,
        bits: [
            "1", "0", "0", "0", "1", "0", "1", "1",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADD  <Xd>, <Xn>, <Xm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "SUB",
        encoding: "SUB_64_addsub_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0xcb00_0000,
        bits: [
            "1", "1", "0", "0", "1", "0", "1", "1",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "SUB  <Xd>, <Xn>, <Xm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "ADD",
        encoding: "ADD_64_addsub_ext",
        fixed_mask: 0xffe0_0000,
        fixed_bits: 0x8b20_0000,
        bits: [
            "1", "0", "0", "0", "1", "0", "1", "1",
            "0", "0", "1", "Rm", "Rm", "Rm", "Rm", "Rm",
            "option", "option", "option", "imm3", "imm3", "imm3", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ADD  <Xd|SP>, <Xn|SP>, <R><m>{, <extend> {#<amount>}}",
    },
    RawEncoding {
        mnemonic: "AND",
        encoding: "AND_64_log_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0x8a00_0000,
        bits: [
            "1", "0", "0", "0", "1", "0", "1", "0",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "AND  <Xd>, <Xn>, <Xm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "ORR",
        encoding: "ORR_64_log_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0xaa00_0000,
        bits: [
            "1", "0", "1", "0", "1", "0", "1", "0",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "ORR  <Xd>, <Xn>, <Xm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "MOV",
        encoding: "MOV_ORR_64_log_shift",
        fixed_mask: 0xffe0_ffe0,
        fixed_bits: 0xaa00_03e0,
        bits: [
            "1", "0", "1", "0", "1", "0", "1", "0",
            "0", "0", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "1", "1", "1", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "MOV  <Xd>, <Xm>",
    },
    RawEncoding {
        mnemonic: "EOR",
        encoding: "EOR_64_log_shift",
        fixed_mask: 0xff20_0000,
        fixed_bits: 0xca00_0000,
        bits: [
            "1", "1", "0", "0", "1", "0", "1", "0",
            "shift", "shift", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "imm6", "imm6", "imm6", "imm6", "imm6", "imm6", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "EOR  <Xd>, <Xn>, <Xm>{, <shift> #<amount>}",
    },
    RawEncoding {
        mnemonic: "MUL",
        encoding: "MUL_MADD_64A_dp_3src",
        fixed_mask: 0xffe0_fc00,
        fixed_bits: 0x9b00_7c00,
        bits: [
            "1", "0", "0", "1", "1", "0", "1", "1",
            "0", "0", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "1", "1", "1", "1", "1", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "MUL  <Xd>, <Xn>, <Xm>",
    },
    RawEncoding {
        mnemonic: "UDIV",
        encoding: "UDIV_64_dp_2src",
        fixed_mask: 0xffe0_fc00,
        fixed_bits: 0x9ac0_0800,
        bits: [
            "1", "0", "0", "1", "1", "0", "1", "0",
            "1", "1", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "0", "0", "0", "1", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "UDIV  <Xd>, <Xn>, <Xm>",
    },
    RawEncoding {
        mnemonic: "SDIV",
        encoding: "SDIV_64_dp_2src",
        fixed_mask: 0xffe0_fc00,
        fixed_bits: 0x9ac0_0c00,
        bits: [
            "1", "0", "0", "1", "1", "0", "1", "0",
            "1", "1", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "0", "0", "0", "1", "1", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "SDIV  <Xd>, <Xn>, <Xm>",
    },
    RawEncoding {
        mnemonic: "LSLV",
        encoding: "LSLV_64_dp_2src",
        fixed_mask: 0xffe0_fc00,
        fixed_bits: 0x9ac0_2000,
        bits: [
            "1", "0", "0", "1", "1", "0", "1", "0",
            "1", "1", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "0", "1", "0", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "LSLV  <Xd>, <Xn>, <Xm>",
    },
    RawEncoding {
        mnemonic: "LSL",
        encoding: "LSL_LSLV_64_dp_2src",
        fixed_mask: 0xffe0_fc00,
        fixed_bits: 0x9ac0_2000,
        bits: [
            "1", "0", "0", "1", "1", "0", "1", "0",
            "1", "1", "0", "Rm", "Rm", "Rm", "Rm", "Rm",
            "0", "0", "1", "0", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rd", "Rd", "Rd", "Rd", "Rd",
        ],
        template: "LSL  <Xd>, <Xn>, <Xm>",
    },
];
