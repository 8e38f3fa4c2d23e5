//! Output writers for aligned sequence pairs.
//!
//! Both writers refuse unequal-length inputs: a correct engine never
//! produces them, so unequal lengths signal an invariant violation.

use std::io::Write;

use colored::Colorize;
use nereus_align::GAP;
use nereus_core::{NereusError, Result};

/// Write the aligned pair in `seq1:`/`seq2:` blocks wrapped at `line_length`.
pub fn write_default(
    w: &mut impl Write,
    line_length: usize,
    a: &[u8],
    b: &[u8],
) -> Result<()> {
    if a.len() != b.len() {
        return Err(NereusError::NotAligned);
    }
    if a.is_empty() {
        return Ok(());
    }

    let len = a.len();
    let (mut l, mut r) = (0usize, len.min(line_length.max(1)));
    while l < len {
        w.write_all(b"seq1: ")?;
        w.write_all(&a[l..r])?;
        w.write_all(b"\nseq2: ")?;
        w.write_all(&b[l..r])?;
        w.write_all(b"\n")?;
        l = r;
        r = len.min(r + line_length.max(1));
    }

    Ok(())
}

/// Marker for one alignment column: `*` match, `|` mismatch, space for gaps.
fn marker(a: u8, b: u8) -> u8 {
    if a == GAP || b == GAP {
        b' '
    } else if a == b {
        b'*'
    } else {
        b'|'
    }
}

/// One symbol, colored by its column: green for a match, red for a
/// mismatch, unstyled opposite a gap. Color is stripped automatically
/// when stdout is not a terminal.
fn paint(sym: u8, other: u8) -> String {
    let s = (sym as char).to_string();
    if sym == GAP || other == GAP {
        s
    } else if sym == other {
        s.green().to_string()
    } else {
        s.red().to_string()
    }
}

/// Write the aligned pair as three lines with a marker line in between,
/// match/mismatch columns colored.
pub fn write_pretty(w: &mut impl Write, a: &[u8], b: &[u8]) -> Result<()> {
    if a.len() != b.len() {
        return Err(NereusError::NotAligned);
    }
    if a.is_empty() {
        return Ok(());
    }

    w.write_all(b"seq1: ")?;
    for (&x, &y) in a.iter().zip(b) {
        w.write_all(paint(x, y).as_bytes())?;
    }
    w.write_all(b"\n      ")?;
    let markers: Vec<u8> = a.iter().zip(b).map(|(&x, &y)| marker(x, y)).collect();
    w.write_all(&markers)?;
    w.write_all(b"\nseq2: ")?;
    for (&x, &y) in b.iter().zip(a) {
        w.write_all(paint(x, y).as_bytes())?;
    }
    w.write_all(b"\n")?;

    Ok(())
}
