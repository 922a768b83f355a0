use std::fmt::{self, Write as _};

struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                fmt.write_char(' ')?;
            }
            write!(fmt, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Makes trailing whitespace visible.
struct Visible<'a>(&'a str);

impl fmt::Display for Visible<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let text = self.0.trim_end();
        fmt.write_str(text)?;
        for c in self.0[text.len()..].chars() {
            match c {
                '\t' => fmt.write_char('→')?,
                ' ' => fmt.write_char('•')?,
                _ => fmt.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Line diff between an expected and an actual dump.
pub struct Diff<'a> {
    file: &'a str,
    line: usize,
    bytes: &'a [u8],
    expect: &'a str,
    result: &'a str,
}

impl<'a> Diff<'a> {
    pub fn new(
        file: &'a str,
        line: usize,
        bytes: &'a [u8],
        expect: &'a str,
        result: &'a str,
    ) -> Self {
        Self {
            file,
            line,
            bytes,
            expect,
            result,
        }
    }
}

impl fmt::Display for Diff<'_> {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        use diff::Result as E;
        let w = 5;
        if !self.file.is_empty() {
            writeln!(out, "{:w$}--> {}:{}", ' ', self.file, self.line)?;
        }
        if !self.bytes.is_empty() {
            writeln!(out, "{:>8}{}", "raw | ", Hex(self.bytes))?;
            writeln!(out, "{:7}{:-<24}", ' ', ' ')?;
        }
        for diff in diff::lines(self.expect, self.result) {
            match diff {
                E::Left(l) => writeln!(out, "{:w$} - {}", ' ', Visible(l))?,
                E::Both(l, _) => writeln!(out, "{:w$} | {}", ' ', Visible(l))?,
                E::Right(r) => writeln!(out, "{:w$} + {}", ' ', Visible(r))?,
            }
        }
        Ok(())
    }
}

/// Compares two strings and prints a diff on mismatch.
pub fn check(file: &str, line: usize, left: &str, right: &str) -> Result<(), String> {
    if left != right {
        let err = "invalid result";
        eprintln!("error: {err}");
        eprintln!("{}", Diff::new(file, line, &[], left, right));
        return Err(err.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_trailing_whitespace() {
        assert_eq!(Visible("a b \t").to_string(), "a b•→");
        assert_eq!(Visible("ab").to_string(), "ab");
    }

    #[test]
    fn hex() {
        assert_eq!(Hex(&[0x0f, 0xa2]).to_string(), "0f a2");
    }
}
