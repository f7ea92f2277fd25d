//! Built-in encoding catalog.
//!
//! The tables are split by instruction class. The logical catalog is their
//! union in the order listed in [`PARTITIONS`].

mod branch_sys;
mod dp_imm;
mod dp_reg;
mod ldst;

use crate::RawEncoding;

/// Catalog partitions in declared order.
pub const PARTITIONS: &[&[RawEncoding]] = &[
    dp_imm::DATA_PROCESSING_IMM,
    branch_sys::BRANCH_SYSTEM,
    ldst::LOADS_STORES,
    dp_reg::DATA_PROCESSING_REG,
];
