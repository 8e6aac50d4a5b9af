use std::fmt;

const ROW: usize = 16;

/// Canonical hex+ASCII view, as `hexdump -C` prints it. Runs of identical
/// rows are squeezed into a single `*`.
pub struct Hexdump<'a>(pub &'a [u8]);

impl fmt::Display for Hexdump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&[u8]> = None;
        let mut squeezed = false;

        for (i, row) in self.0.chunks(ROW).enumerate() {
            if prev == Some(row) {
                if !squeezed {
                    writeln!(f, "*")?;
                    squeezed = true;
                }
                continue;
            }
            squeezed = false;
            prev = Some(row);
            write_row(f, i * ROW, row)?;
        }

        if !self.0.is_empty() {
            writeln!(f, "{:08x}", self.0.len())?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, offset: usize, row: &[u8]) -> fmt::Result {
    write!(f, "{offset:08x} ")?;
    for i in 0..ROW {
        if i % 8 == 0 {
            write!(f, " ")?;
        }
        match row.get(i) {
            Some(b) => write!(f, "{b:02x} ")?,
            None => write!(f, "   ")?,
        }
    }

    write!(f, " |")?;
    for &b in row {
        let c = if (0x20..0x7f).contains(&b) { b as char } else { '.' };
        write!(f, "{c}")?;
    }
    writeln!(f, "|")
}
