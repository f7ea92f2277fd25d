//! Opcode literal parsing.
//!
//! Literals are `0x`/`0X` hex or `0b`/`0B` binary. `_` and `:` may appear
//! anywhere as visual separators (`0x91_00_00_00`, `0x91:00:00:00`) and are
//! stripped before the prefix is examined.

use std::fmt;

use crate::OpcodeError;

/// Separator characters ignored anywhere in a literal.
const SEPARATORS: [char; 2] = ['_', ':'];

/// Handling of literals whose value needs more than 32 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Fail with [`OpcodeError::OutOfRange`].
    #[default]
    Reject,
    /// Keep the low 32 bits and drop the rest.
    Truncate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Radix {
    Hex,
    Binary,
}

impl Radix {
    const fn base(self) -> u32 {
        match self {
            Self::Hex => 16,
            Self::Binary => 2,
        }
    }

    const fn bits_per_digit(self) -> u32 {
        match self {
            Self::Hex => 4,
            Self::Binary => 1,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Hex => "0x",
            Self::Binary => "0b",
        }
    }
}

fn strip_separators(literal: &str) -> String {
    literal.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Split a separator-free literal into its radix and digit string.
fn split_prefix<'a>(cleaned: &'a str, literal: &str) -> Result<(Radix, &'a str), OpcodeError> {
    if let Some(digits) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        return Ok((Radix::Hex, digits));
    }
    if let Some(digits) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        return Ok((Radix::Binary, digits));
    }
    Err(OpcodeError::InvalidFormat(literal.to_string()))
}

/// Parse an opcode literal into a 32-bit value.
///
/// # Errors
///
/// Returns [`OpcodeError::InvalidFormat`] when the literal has no `0x`/`0b`
/// prefix, [`OpcodeError::MissingDigits`] or [`OpcodeError::InvalidDigit`] for
/// a bad digit string, and [`OpcodeError::OutOfRange`] when the value needs
/// more than 32 bits and `policy` is [`OverflowPolicy::Reject`].
pub fn parse_opcode(literal: &str, policy: OverflowPolicy) -> Result<u32, OpcodeError> {
    let cleaned = strip_separators(literal);
    let (radix, digits) = split_prefix(&cleaned, literal)?;
    if digits.is_empty() {
        return Err(OpcodeError::MissingDigits(radix.prefix()));
    }

    let shift = radix.bits_per_digit();
    let mut value: u32 = 0;
    let mut overflowed = false;
    for c in digits.chars() {
        let digit = c.to_digit(radix.base()).ok_or(OpcodeError::InvalidDigit {
            digit: c,
            radix_name: radix.name(),
        })?;
        // Any set bit in the top `shift` bits is about to be shifted out.
        if value >> (32 - shift) != 0 {
            overflowed = true;
        }
        value = (value << shift) | digit;
    }

    if overflowed && policy == OverflowPolicy::Reject {
        return Err(OpcodeError::OutOfRange(literal.to_string()));
    }
    Ok(value)
}

/// A partially specified opcode: bits outside `care_mask` are "don't care".
///
/// In hex literals `X`/`x` stands for four don't-care bits, in binary
/// literals for one. Short literals are zero-extended on the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartialOpcode {
    /// Known bit values (don't-care positions are zero).
    pub value: u32,
    /// Set for every bit whose value is known.
    pub care_mask: u32,
}

impl PartialOpcode {
    /// Parse a partial opcode literal such as `0x91_00_XX_XX` or `0b1001xxxx`.
    ///
    /// # Errors
    ///
    /// Returns [`OpcodeError::InvalidFormat`] for a missing prefix,
    /// [`OpcodeError::InvalidDigit`] for characters that are neither digits
    /// nor `X`/`x`, and [`OpcodeError::TooManyBits`] when more than 32
    /// significant bits are given.
    pub fn parse(literal: &str) -> Result<Self, OpcodeError> {
        let cleaned = strip_separators(literal);
        let (radix, digits) = split_prefix(&cleaned, literal)?;
        if digits.is_empty() {
            return Err(OpcodeError::MissingDigits(radix.prefix()));
        }

        // `None` marks a don't-care bit, MSB first.
        let mut bits: Vec<Option<bool>> = Vec::with_capacity(32);
        let width = radix.bits_per_digit();
        for c in digits.chars() {
            if c == 'x' || c == 'X' {
                bits.extend((0..width).map(|_| None));
                continue;
            }
            let digit = c.to_digit(radix.base()).ok_or(OpcodeError::InvalidDigit {
                digit: c,
                radix_name: radix.name(),
            })?;
            bits.extend((0..width).rev().map(|i| Some((digit >> i) & 1 == 1)));
        }

        let leading_zeros = bits
            .iter()
            .take_while(|bit| **bit == Some(false))
            .count()
            .min(bits.len().saturating_sub(32));
        let significant = &bits[leading_zeros..];
        if significant.len() > 32 {
            return Err(OpcodeError::TooManyBits(bits.len()));
        }

        let mut value = 0u32;
        let mut care_mask = 0u32;
        for (i, bit) in significant.iter().rev().enumerate() {
            if let Some(set) = bit {
                care_mask |= 1 << i;
                if *set {
                    value |= 1 << i;
                }
            }
        }
        // Zero padding on the left is cared-for.
        if significant.len() < 32 {
            care_mask |= !0u32 << significant.len();
        }
        Ok(Self { value, care_mask })
    }

    /// True when a pattern's fixed bits agree with every cared-for bit.
    #[must_use]
    pub const fn admits(&self, fixed_mask: u32, fixed_bits: u32) -> bool {
        fixed_mask & self.care_mask & (self.value ^ fixed_bits) == 0
    }

    /// Binary rendering, MSB first, `X` for don't-care bits.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        (0..32)
            .rev()
            .map(|bit| {
                if (self.care_mask >> bit) & 1 == 0 {
                    'X'
                } else if (self.value >> bit) & 1 == 1 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

/// Displays a 32-bit word as `0x` followed by eight lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexWord(pub u32);

impl fmt::Display for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Split a bit string into space-separated groups of four.
#[must_use]
pub fn group_nibbles(bits: &str) -> String {
    let chars: Vec<char> = bits.chars().collect();
    chars
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(literal: &str) -> Result<u32, OpcodeError> {
        parse_opcode(literal, OverflowPolicy::Reject)
    }

    #[test]
    fn test_parse_hex_and_binary() {
        assert_eq!(parse("0x91000000"), Ok(0x9100_0000));
        assert_eq!(parse("0X91000000"), Ok(0x9100_0000));
        assert_eq!(parse("0xd503201f"), Ok(0xD503_201F));
        assert_eq!(parse("0b10010001000000000000000000000000"), Ok(0x9100_0000));
        assert_eq!(parse("0B101"), Ok(5));
    }

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse("0x91_00_00_00"), Ok(0x9100_0000));
        assert_eq!(parse("0x91:00:00:00"), Ok(0x9100_0000));
        assert_eq!(parse("0b1001_0001:0000_0000_0000_0000_0000_0000"), Ok(0x9100_0000));
        // Separators are stripped before the prefix is checked.
        assert_eq!(parse("0_x91"), Ok(0x91));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq!(
            parse("91000000"),
            Err(OpcodeError::InvalidFormat("91000000".to_string()))
        );
        assert!(matches!(parse("x91"), Err(OpcodeError::InvalidFormat(_))));
        // No whitespace trimming.
        assert!(matches!(parse(" 0x91"), Err(OpcodeError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_bad_digits() {
        assert_eq!(parse("0x"), Err(OpcodeError::MissingDigits("0x")));
        assert_eq!(
            parse("0x12zz"),
            Err(OpcodeError::InvalidDigit {
                digit: 'z',
                radix_name: "hex"
            })
        );
        assert_eq!(
            parse("0b102"),
            Err(OpcodeError::InvalidDigit {
                digit: '2',
                radix_name: "binary"
            })
        );
    }

    #[test]
    fn test_parse_overflow_policy() {
        assert!(matches!(parse("0x1_0000_0000"), Err(OpcodeError::OutOfRange(_))));
        assert_eq!(
            parse_opcode("0x1_2345_6789", OverflowPolicy::Truncate),
            Ok(0x2345_6789)
        );
        assert_eq!(
            parse_opcode("0xFFFF_FFFF_FFFF_FFFF_0000_0001", OverflowPolicy::Truncate),
            Ok(1)
        );
        // Leading zeros never overflow.
        assert_eq!(parse("0x0000_0000_9100_0000"), Ok(0x9100_0000));
        assert_eq!(parse("0xFFFFFFFF"), Ok(u32::MAX));
    }

    #[test]
    fn test_partial_hex_dont_care() {
        let partial = PartialOpcode::parse("0x91_00_XX_XX").unwrap();
        assert_eq!(partial.value, 0x9100_0000);
        assert_eq!(partial.care_mask, 0xFFFF_0000);

        let mixed = PartialOpcode::parse("0x9x00xxxx").unwrap();
        assert_eq!(mixed.care_mask, 0xF0FF_0000);
    }

    #[test]
    fn test_partial_binary_dont_care() {
        let partial = PartialOpcode::parse("0b1001xxxx_0000xxxx_xxxxxxxx_xxxxxxxx").unwrap();
        assert_eq!(partial.value, 0x9000_0000);
        assert_eq!(partial.care_mask, 0xF0F0_0000);
        assert_eq!(
            group_nibbles(&partial.to_binary_string()),
            "1001 XXXX 0000 XXXX XXXX XXXX XXXX XXXX"
        );
    }

    #[test]
    fn test_partial_short_literal_zero_extends() {
        let partial = PartialOpcode::parse("0xXX").unwrap();
        assert_eq!(partial.value, 0);
        assert_eq!(partial.care_mask, 0xFFFF_FF00);
    }

    #[test]
    fn test_partial_too_long() {
        assert_eq!(
            PartialOpcode::parse("0x1XXXXXXXX"),
            Err(OpcodeError::TooManyBits(36))
        );
        // Leading zero digits are not significant.
        assert!(PartialOpcode::parse("0x0XXXXXXXX").is_ok());
    }

    #[test]
    fn test_partial_admits() {
        let partial = PartialOpcode::parse("0x9XXXXXXX").unwrap();
        // ADD (immediate, 64-bit): fixed 0x91000000 under 0xFF800000.
        assert!(partial.admits(0xFF80_0000, 0x9100_0000));
        // ADD (immediate, 32-bit): top nibble 0x1.
        assert!(!partial.admits(0xFF80_0000, 0x1100_0000));
    }

    #[test]
    fn test_hex_word_display() {
        assert_eq!(HexWord(0xD503_201F).to_string(), "0xd503201f");
        assert_eq!(HexWord(1).to_string(), "0x00000001");
    }
}
