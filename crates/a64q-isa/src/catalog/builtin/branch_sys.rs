//! Exception generation, hints, and register branches.

use crate::RawEncoding;

pub(super) const BRANCH_SYSTEM: &[RawEncoding] = &[
    RawEncoding {
        mnemonic: "SVC",
        encoding: "SVC_EX_exception",
        fixed_mask: 0xffe0_001f,
        fixed_bits: 0xd400_0001,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "0",
            "0", "0", "0", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "0", "0", "0", "0", "1",
        ],
        template: "SVC  #<imm>",
    },
    RawEncoding {
        mnemonic: "HVC",
        encoding: "HVC_EX_exception",
        fixed_mask: 0xffe0_001f,
        fixed_bits: 0xd400_0002,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "0",
            "0", "0", "0", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "0", "0", "0", "1", "0",
        ],
        template: "HVC  #<imm>",
    },
    RawEncoding {
        mnemonic: "SMC",
        encoding: "SMC_EX_exception",
        fixed_mask: 0xffe0_001f,
        fixed_bits: 0xd400_0003,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "0",
            "0", "0", "0", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "0", "0", "0", "1", "1",
        ],
        template: "SMC  #<imm>",
    },
    RawEncoding {
        mnemonic: "BRK",
        encoding: "BRK_EX_exception",
        fixed_mask: 0xffe0_001f,
        fixed_bits: 0xd420_0000,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "0",
            "0", "0", "1", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "0", "0", "0", "0", "0",
        ],
        template: "BRK  #<imm>",
    },
    RawEncoding {
        mnemonic: "HLT",
        encoding: "HLT_EX_exception",
        fixed_mask: 0xffe0_001f,
        fixed_bits: 0xd440_0000,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "0",
            "0", "1", "0", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16", "imm16",
            "imm16", "imm16", "imm16", "0", "0", "0", "0", "0",
        ],
        template: "HLT  #<imm>",
    },
    RawEncoding {
        mnemonic: "NOP",
        encoding: "NOP_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_201f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "0", "0", "0", "1", "1", "1", "1", "1",
        ],
        template: "NOP",
    },
    RawEncoding {
        mnemonic: "YIELD",
        encoding: "YIELD_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_203f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "0", "0", "1", "1", "1", "1", "1", "1",
        ],
        template: "YIELD",
    },
    RawEncoding {
        mnemonic: "WFE",
        encoding: "WFE_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_205f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "0", "1", "0", "1", "1", "1", "1", "1",
        ],
        template: "WFE",
    },
    RawEncoding {
        mnemonic: "WFI",
        encoding: "WFI_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_207f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "0", "1", "1", "1", "1", "1", "1", "1",
        ],
        template: "WFI",
    },
    RawEncoding {
        mnemonic: "SEV",
        encoding: "SEV_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_209f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "1", "0", "0", "1", "1", "1", "1", "1",
        ],
        template: "SEV",
    },
    RawEncoding {
        mnemonic: "SEVL",
        encoding: "SEVL_HI_hints",
        fixed_mask: 0xffff_ffff,
        fixed_bits: 0xd503_20bf,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "0", "0", "0", "0",
            "1", "0", "1", "1", "1", "1", "1", "1",
        ],
        template: "SEVL",
    },
    RawEncoding {
        mnemonic: "HINT",
        encoding: "HINT_HM_hints",
        fixed_mask: 0xffff_f01f,
        fixed_bits: 0xd503_201f,
        bits: [
            "1", "1", "0", "1", "0", "1", "0", "1",
            "0", "0", "0", "0", "0", "0", "1", "1",
            "0", "0", "1", "0", "CRm", "CRm", "CRm", "CRm",
            "op2", "op2", "op2", "1", "1", "1", "1", "1",
        ],
        template: "HINT  #<imm>",
    },
    RawEncoding {
        mnemonic: "BR",
        encoding: "BR_64_branch_reg",
        fixed_mask: 0xffff_fc1f,
        fixed_bits: 0xd61f_0000,
        bits: [
            "1", "1", "0", "1", "0", "1", "1", "0",
            "0", "0", "0", "1", "1", "1", "1", "1",
            "0", "0", "0", "0", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "0", "0", "0", "0", "0",
        ],
        template: "BR  <Xn>",
    },
    RawEncoding {
        mnemonic: "BLR",
        encoding: "BLR_64_branch_reg",
        fixed_mask: 0xffff_fc1f,
        fixed_bits: 0xd63f_0000,
        bits: [
            "1", "1", "0", "1", "0", "1", "1", "0",
            "0", "0", "1", "1", "1", "1", "1", "1",
            "0", "0", "0", "0", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "0", "0", "0", "0", "0",
        ],
        template: "BLR  <Xn>",
    },
];
