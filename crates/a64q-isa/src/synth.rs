//! Assembly text synthesis from a template and extracted field values.
//!
//! Rendering is a fixed sequence of pure passes over the template text. Each
//! pass owns a disjoint set of tokens, except that the destination pass also
//! claims `<Wt>`, so it must run before the transfer pass. Immediate and
//! offset substitution must precede shift handling, which strips braces, and
//! whitespace normalization runs last.

use crate::FieldValues;

/// Literal substituted for a nonzero `sh` field. Only valid for the
/// add/subtract (immediate) family, whose single nonzero shift is 12.
pub const SHIFT_LSL_12: &str = "lsl #12";

/// Optional shift clause of add/subtract (immediate).
pub const SHIFT_CLAUSE: &str = "{, <shift>}";

/// Optional clauses deleted when still present after substitution.
pub const RESIDUAL_CLAUSES: [&str; 3] = [
    "{, <shift>}",
    "{, <extend> {#<amount>}}",
    "{, <shift> #<amount>}",
];

/// One rendering pass.
pub type Pass = fn(String, &FieldValues<'_>) -> String;

/// The rendering pipeline, in execution order.
pub const PASSES: [(&str, Pass); 9] = [
    ("destination", substitute_destination),
    ("base", substitute_base),
    ("secondary", substitute_secondary),
    ("transfer", substitute_transfer),
    ("immediate", substitute_immediate),
    ("offset", substitute_offset),
    ("shift", apply_shift),
    ("residual", remove_residual_clauses),
    ("whitespace", collapse_spaces),
];

/// Render `template` with `values`.
#[must_use]
pub fn render(template: &str, values: &FieldValues<'_>) -> String {
    PASSES
        .iter()
        .fold(template.to_string(), |text, (_, pass)| pass(text, values))
}

/// Register width class of a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Width {
    X,
    W,
}

/// Register name where 31 means the stack pointer.
fn sp_register(n: u32, width: Width) -> String {
    match (n, width) {
        (31, Width::X) => "sp".to_string(),
        (31, Width::W) => "wsp".to_string(),
        (n, width) => general_register(n, width),
    }
}

fn general_register(n: u32, width: Width) -> String {
    match width {
        Width::X => format!("x{n}"),
        Width::W => format!("w{n}"),
    }
}

fn replace_all(text: String, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(text, |text, (token, value)| text.replace(token, value))
}

/// `Rd`: `<Xd|SP>`, `<Xd>`, `<Wd|WSP>`, `<Wd>` and `<Wt>`; 31 is `sp`/`wsp`.
fn substitute_destination(text: String, values: &FieldValues<'_>) -> String {
    let Some(rd) = values.rd else {
        return text;
    };
    let x = sp_register(rd, Width::X);
    let w = sp_register(rd, Width::W);
    replace_all(
        text,
        &[
            ("<Xd|SP>", x.as_str()),
            ("<Xd>", x.as_str()),
            ("<Wd|WSP>", w.as_str()),
            ("<Wd>", w.as_str()),
            ("<Wt>", w.as_str()),
        ],
    )
}

/// `Rn`: `<Xn|SP>`, `<Xn>`, `<Wn|WSP>`, `<Wn>`; 31 is `sp`/`wsp`.
fn substitute_base(text: String, values: &FieldValues<'_>) -> String {
    let Some(rn) = values.rn else {
        return text;
    };
    let x = sp_register(rn, Width::X);
    let w = sp_register(rn, Width::W);
    replace_all(
        text,
        &[
            ("<Xn|SP>", x.as_str()),
            ("<Xn>", x.as_str()),
            ("<Wn|WSP>", w.as_str()),
            ("<Wn>", w.as_str()),
        ],
    )
}

/// `Rm`: `<Xm>`, `<R><m>`, `<Wm>`; no stack pointer alias.
fn substitute_secondary(text: String, values: &FieldValues<'_>) -> String {
    let Some(rm) = values.rm else {
        return text;
    };
    let x = general_register(rm, Width::X);
    let w = general_register(rm, Width::W);
    replace_all(
        text,
        &[
            ("<Xm>", x.as_str()),
            ("<R><m>", x.as_str()),
            ("<Wm>", w.as_str()),
        ],
    )
}

/// `Rt`: `<Xt>`, `<Wt>`; no stack pointer alias.
fn substitute_transfer(text: String, values: &FieldValues<'_>) -> String {
    let Some(rt) = values.rt else {
        return text;
    };
    let x = general_register(rt, Width::X);
    let w = general_register(rt, Width::W);
    replace_all(text, &[("<Xt>", x.as_str()), ("<Wt>", w.as_str())])
}

/// `imm`: `#<imm>` then bare `<imm>`, lowercase hex.
fn substitute_immediate(text: String, values: &FieldValues<'_>) -> String {
    let Some(imm) = values.imm else {
        return text;
    };
    let hashed = format!("#0x{imm:x}");
    let bare = format!("0x{imm:x}");
    replace_all(text, &[("#<imm>", hashed.as_str()), ("<imm>", bare.as_str())])
}

/// `offs`: `<offs>` and `<simm>`, lowercase hex.
fn substitute_offset(text: String, values: &FieldValues<'_>) -> String {
    let Some(offs) = values.offs else {
        return text;
    };
    let hex = format!("0x{offs:x}");
    replace_all(text, &[("<offs>", hex.as_str()), ("<simm>", hex.as_str())])
}

/// `sh`: zero drops the shift clause, nonzero unwraps it as `lsl #12`.
fn apply_shift(text: String, values: &FieldValues<'_>) -> String {
    match values.sh {
        None => text,
        Some(0) => text.replace(SHIFT_CLAUSE, ""),
        Some(_) => replace_all(
            text,
            &[("<shift>", SHIFT_LSL_12), ("{, ", ", "), ("}", "")],
        ),
    }
}

/// Drop optional clauses whose governing field was never filled in.
fn remove_residual_clauses(text: String, _values: &FieldValues<'_>) -> String {
    RESIDUAL_CLAUSES
        .iter()
        .fold(text, |text, clause| text.replace(clause, ""))
}

fn collapse_spaces(text: String, _values: &FieldValues<'_>) -> String {
    normalize_whitespace(&text)
}

/// Collapse runs of spaces into one and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
