//! Renders decoded fields as fixed-width, bordered table rows.
//!
//! The layout mimics the field tables used in encoding references: a header
//! row of `high:low` labels, a row of spaced binary digits and a combined
//! hex/decimal row, separated by dashed lines, with an 8 character label
//! column at the left edge.

use crate::field::{self, FieldSpec};

use itertools::Itertools;

/// Width of the label column at the left edge of every row.
const LABEL_WIDTH: usize = 8;

/// Display width of the column for a given field.
///
/// The default leaves room for the spaced binary string plus one space of
/// padding on each side. The columns shared between the two layouts are
/// pinned to fixed widths so both tables line up: `6:0` to 14, and the
/// merged `31:20` to 27, which makes it exactly as wide as the two columns
/// it replaces plus their separator.
fn column_width(spec: &FieldSpec) -> usize {
    match spec.label {
        "6:0" => 14,
        "31:20" => 27,
        _ => 2 * spec.bits() as usize + 1,
    }
}

/// Center `text` in a field exactly `width` characters wide. When the
/// padding doesn't split evenly, the extra space goes on the left, not the
/// right. If `text` is already wider than `width` it is returned unpadded.
fn center(text: &str, width: usize) -> String {
    let total = width.saturating_sub(text.len());
    let left = (total + 1) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(total - left))
}

/// Format the low `bits` bits of `value` as zero-padded binary with a single
/// space between adjacent digits. The result is `2 * bits - 1` characters.
fn spaced_binary(value: u32, bits: u32) -> String {
    let value = value & (((1_u64 << bits) - 1) as u32);
    format!("{value:0width$b}", width = bits as usize)
        .chars()
        .join(" ")
}

/// The combined hex/decimal cell, fx `0x13,19`. No zero padding on either
/// representation.
fn hex_dec(value: u32) -> String {
    format!("0x{value:X},{value}")
}

/// Center each cell in its column width and join with `sep`.
fn build_row(cells: &[String], widths: &[usize], sep: &str) -> String {
    assert_eq!(cells.len(), widths.len());
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| center(cell, width))
        .join(sep)
}

/// A row of dashes matching the column widths, joined by `sep`.
fn build_dashed_row(widths: &[usize], sep: &str) -> String {
    widths.iter().map(|&width| "-".repeat(width)).join(sep)
}

/// The standard six-field table: header, binary and hex/decimal rows with
/// dashed separators between them.
fn render_standard(word: u32) -> Vec<String> {
    let fields = field::extract(word, &field::STANDARD);
    let widths: Vec<usize> = field::STANDARD.iter().map(column_width).collect();

    let headers: Vec<String> = fields
        .iter()
        .map(|field| field.spec.label.to_string())
        .collect();
    let binary: Vec<String> = fields
        .iter()
        .map(|field| spaced_binary(field.value, field.spec.bits()))
        .collect();
    let hexdec: Vec<String> = fields.iter().map(|field| hex_dec(field.value)).collect();

    let blank = " ".repeat(LABEL_WIDTH);
    let dashed = format!(
        "{}+{}",
        "-".repeat(LABEL_WIDTH),
        build_dashed_row(&widths, "+")
    );

    vec![
        format!("{blank}|{}", build_row(&headers, &widths, "|")),
        dashed.clone(),
        format!("{blank}|{}", build_row(&binary, &widths, "|")),
        dashed.clone(),
        format!("{}|{}", hex_dec_label(), build_row(&hexdec, &widths, "|")),
        dashed,
    ]
}

/// The custom five-field table. Abbreviated on purpose: only the hex/decimal
/// row is shown, the header and binary rows of the standard table above it
/// already locate the shared columns.
fn render_custom(word: u32) -> Vec<String> {
    let fields = field::extract(word, &field::CUSTOM);
    let widths: Vec<usize> = field::CUSTOM.iter().map(column_width).collect();
    let hexdec: Vec<String> = fields.iter().map(|field| hex_dec(field.value)).collect();

    vec![format!(
        "{}|{}",
        hex_dec_label(),
        build_row(&hexdec, &widths, "|")
    )]
}

fn hex_dec_label() -> String {
    format!("{:<width$}", "hex,dec", width = LABEL_WIDTH)
}

/// All seven output lines for `word`: the six standard-layout lines followed
/// by the custom layout's hex/decimal line.
pub fn render(word: u32) -> Vec<String> {
    let mut lines = render_standard(word);
    lines.extend(render_custom(word));
    lines
}

#[test]
fn test_center_pads_left_first() {
    assert_eq!(" abc", center("abc", 4));
    assert_eq!(" abc ", center("abc", 5));
    assert_eq!("  abc ", center("abc", 6));
    assert_eq!("abc", center("abc", 3));
}

#[test]
fn test_center_clamps_short_widths() {
    // Content wider than the column comes back unpadded.
    assert_eq!("abcdef", center("abcdef", 3));
    assert_eq!("abcdef", center("abcdef", 0));
}

#[test]
fn test_center_length_and_bias() {
    for width in 0..24 {
        let out = center("xyz", width);
        assert_eq!(out.len(), width.max(3));

        let left = out.chars().take_while(|c| *c == ' ').count();
        let right = out.chars().rev().take_while(|c| *c == ' ').count();
        if (width.max(3) - 3) % 2 == 1 {
            assert_eq!(left, right + 1);
        } else {
            assert_eq!(left, right);
        }
    }
}

#[test]
fn test_spaced_binary() {
    assert_eq!("0 0 1 0 0 1 1", spaced_binary(0x13, 7));
    assert_eq!("0", spaced_binary(0, 1));
    assert_eq!("1 1 1", spaced_binary(7, 3));

    // Oversized values truncate to the low bits.
    assert_eq!("1 1 1", spaced_binary(0xff, 3));

    for bits in 1..=32 {
        let out = spaced_binary(u32::MAX, bits);
        assert_eq!(out.len(), 2 * bits as usize - 1);
        assert!(out.chars().step_by(2).all(|c| c == '0' || c == '1'));
        assert!(out.chars().skip(1).step_by(2).all(|c| c == ' '));
    }
}

#[test]
fn test_hex_dec_round_trips() {
    for value in [0, 1, 19, 0xabc, u32::MAX] {
        let cell = hex_dec(value);
        let (hex, dec) = cell.split_once(',').unwrap();
        assert_eq!(value, u32::from_str_radix(&hex[2..], 16).unwrap());
        assert_eq!(value, dec.parse().unwrap());
    }
}

#[test]
fn test_build_row() {
    let cells = vec!["a".to_string(), "bc".to_string()];
    assert_eq!(" a |bc ", build_row(&cells, &[3, 3], "|"));
    assert_eq!("---+--", build_dashed_row(&[3, 2], "+"));
}

#[test]
#[should_panic]
fn test_build_row_length_mismatch() {
    build_row(&["a".to_string()], &[3, 3], "|");
}

#[test]
fn test_render_addi() {
    let lines = render(0x00000093);
    let dashed = "--------+---------------+-----------+-----------+-------+-----------+--------------";

    assert_eq!(lines.len(), 7);
    assert_eq!(
        lines[0],
        "        |     31:25     |   24:20   |   19:15   | 14:12 |    11:7   |      6:0     "
    );
    assert_eq!(lines[1], dashed);
    assert_eq!(
        lines[2],
        "        | 0 0 0 0 0 0 0 | 0 0 0 0 0 | 0 0 0 0 0 | 0 0 0 | 0 0 0 0 1 | 0 0 1 0 0 1 1"
    );
    assert_eq!(lines[3], dashed);
    assert_eq!(
        lines[4],
        "hex,dec |     0x0,0     |   0x0,0   |   0x0,0   | 0x0,0 |   0x1,1   |    0x13,19   "
    );
    assert_eq!(lines[5], dashed);
    assert_eq!(
        lines[6],
        "hex,dec |           0x0,0           |   0x0,0   | 0x0,0 |   0x1,1   |    0x13,19   "
    );
}

#[test]
fn test_render_rows_align() {
    for word in [0, 0x00000093, 0xdeadbeef, u32::MAX] {
        let lines = render(word);
        assert_eq!(lines.len(), 7);

        // The six standard rows all share one length, and the custom row
        // lines up with them.
        for line in &lines {
            assert_eq!(line.len(), lines[0].len());
        }
    }
}
