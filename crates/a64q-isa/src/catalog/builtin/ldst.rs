//! Loads and stores, unscaled signed offset.

use crate::RawEncoding;

pub(super) const LOADS_STORES: &[RawEncoding] = &[
    RawEncoding {
        mnemonic: "STUR",
        encoding: "STUR_32_ldst_unscaled",
        fixed_mask: 0xffe0_0c00,
        fixed_bits: 0xb800_0000,
        bits: [
            "1", "0", "1", "1", "1", "0", "0", "0",
            "0", "0", "0", "simm", "simm", "simm", "simm", "simm",
            "simm", "simm", "simm", "simm", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rt", "Rt", "Rt", "Rt", "Rt",
        ],
        template: "STUR  <Wt>, [<Xn|SP>, #<simm>]",
    },
    RawEncoding {
        mnemonic: "LDUR",
        encoding: "LDUR_32_ldst_unscaled",
        fixed_mask: 0xffe0_0c00,
        fixed_bits: 0xb840_0000,
        bits: [
            "1", "0", "1", "1", "1", "0", "0", "0",
            "0", "1", "0", "simm", "simm", "simm", "simm", "simm",
            "simm", "simm", "simm", "simm", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rt", "Rt", "Rt", "Rt", "Rt",
        ],
        template: "LDUR  <Wt>, [<Xn|SP>, #<simm>]",
    },
    RawEncoding {
        mnemonic: "STUR",
        encoding: "STUR_64_ldst_unscaled",
        fixed_mask: 0xffe0_0c00,
        fixed_bits: 0xf800_0000,
        bits: [
            "1", "1", "1", "1", "1", "0", "0", "0",
            "0", "0", "0", "simm", "simm", "simm", "simm", "simm",
            "simm", "simm", "simm", "simm", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rt", "Rt", "Rt", "Rt", "Rt",
        ],
        template: "STUR  <Xt>, [<Xn|SP>, #<simm>]",
    },
    RawEncoding {
        mnemonic: "LDUR",
        encoding: "LDUR_64_ldst_unscaled",
        fixed_mask: 0xffe0_0c00,
        fixed_bits: 0xf840_0000,
        bits: [
            "1", "1", "1", "1", "1", "0", "0", "0",
            "0", "1", "0", "simm", "simm", "simm", "simm", "simm",
            "simm", "simm", "simm", "simm", "0", "0", "Rn", "Rn",
            "Rn", "Rn", "Rn", "Rt", "Rt", "Rt", "Rt", "Rt",
        ],
        template: "LDUR  <Xt>, [<Xn|SP>, #<simm>]",
    },
];
