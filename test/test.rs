//! Parser and runner for `.test` fixture files.
//!
//! Each line holds an optional `address:`, the instruction bytes as hex groups and the expected
//! dump separated from the bytes by at least two spaces. A trailing `# comment` may carry
//! `+flag`/`-flag` words for the runner. A decode error is expected as `(message)`.

use std::{
    fmt::{self, Write},
    str::Lines,
};

use xdec_core::ArchDecoder;

use super::utils::Diff;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ParserError {
    file: String,
    line: usize,
    msg: String,
}

impl ParserError {
    fn new(file: &str, line: usize, msg: String) -> Self {
        Self {
            file: file.to_owned(),
            line,
            msg,
        }
    }
}

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "error: {}, {}:{}", self.msg, self.file, self.line)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Test<'a> {
    pub line: usize,
    pub comment: &'a str,
    pub address: u64,
    pub bytes: Vec<u8>,
    pub expect: &'a str,
}

pub struct Parser<'a> {
    file: String,
    lines: Lines<'a>,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(file: &str, input: &'a str) -> Self {
        Self {
            file: file.to_owned(),
            lines: input.lines(),
            line: 0,
        }
    }

    fn error<T>(&self, msg: String) -> Result<T, String> {
        Err(ParserError::new(&self.file, self.line, msg).to_string())
    }

    fn parse_bytes(&self, mut cur: &'a str, out: &mut Vec<u8>) -> Result<&'a str, String> {
        while !cur.is_empty() {
            let stop = cur.chars().take_while(|c| c.is_whitespace()).count() > 1;
            cur = cur.trim_start();
            if stop {
                break;
            }
            let end = cur.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(cur.len());
            if end == 0 {
                break;
            }
            let (head, tail) = cur.split_at(end);
            if head.len() % 2 != 0 {
                return self.error(format!("odd number of digits in \"{head}\""));
            }
            for i in (0..head.len()).step_by(2) {
                match u8::from_str_radix(&head[i..i + 2], 16) {
                    Ok(byte) => out.push(byte),
                    Err(_) => return self.error(format!("invalid byte \"{head}\"")),
                }
            }
            cur = tail;
        }
        Ok(cur)
    }

    pub fn parse(&mut self, output: &mut Test<'a>) -> Result<bool, String> {
        output.bytes.clear();
        output.expect = "";

        while let Some(line) = self.lines.next().map(|l| l.trim()) {
            self.line += 1;

            let (line, comment) = line.split_once('#').unwrap_or((line, ""));
            let mut cur = line.trim();
            if cur.is_empty() {
                continue;
            }

            output.line = self.line;
            output.comment = comment.trim();

            output.address = 0;
            if let Some((head, tail)) = cur.split_once(':') {
                if head.len() < 17 && head.chars().all(|c| c.is_ascii_hexdigit()) {
                    match u64::from_str_radix(head, 16) {
                        Ok(i) => output.address = i,
                        Err(_) => return self.error(format!("invalid address \"{head}\"")),
                    }
                    cur = tail.trim_start();
                }
            }

            cur = self.parse_bytes(cur, &mut output.bytes)?;
            if output.bytes.is_empty() {
                return self.error("no instruction bytes".to_owned());
            }
            output.expect = cur.trim();
            return Ok(true);
        }

        Ok(false)
    }

    /// Concatenates the bytes of all tests, returns the first address and the code.
    pub fn parse_all(src: &str) -> Result<(u64, Vec<u8>), String> {
        let mut parser = Parser::new("input", src);
        let mut test = Test::default();
        let mut start = None;
        let mut data = vec![];
        while parser.parse(&mut test)? {
            start.get_or_insert(test.address);
            data.extend_from_slice(&test.bytes);
        }
        Ok((start.unwrap_or(0), data))
    }
}

pub fn parse_flags(s: &str) -> impl Iterator<Item = (&str, bool)> {
    s.split_whitespace().filter_map(|i| {
        let state = match i.chars().next() {
            Some('+') => true,
            Some('-') => false,
            _ => return None,
        };
        let name = &i[1..];
        Some((name, state))
    })
}

fn push_insn(out: &mut String, s: &str) {
    for (i, s) in s.split_whitespace().enumerate() {
        if i != 0 {
            out.push(' ');
        }
        out.push_str(s);
    }
}

pub trait Runner {
    type Insn: Default + fmt::Display;

    fn create(&mut self, test: &Test) -> Box<dyn ArchDecoder<Insn = Self::Insn>>;

    fn run(&mut self, file: &str, tests: &str) -> Result<(), String> {
        let mut insn = Self::Insn::default();
        let mut test = Test::default();
        let mut parser = Parser::new(file, tests);
        let mut buf = String::new();
        let mut failed = 0;
        while parser.parse(&mut test)? {
            let mut decoder = self.create(&test);
            buf.clear();
            let len = match decoder.decode(test.address, &test.bytes, &mut insn) {
                Ok(len) => {
                    write!(&mut buf, "{insn}").map_err(|e| e.to_string())?;
                    Some(len)
                }
                Err(err) => {
                    write!(&mut buf, "({err})").map_err(|e| e.to_string())?;
                    None
                }
            };

            let mut result = String::new();
            push_insn(&mut result, &buf);
            let mut expect = String::new();
            push_insn(&mut expect, test.expect);

            let expect_len = test.bytes.len();
            let bad_len = len.map_or(false, |len| len != expect_len);
            if bad_len || result != expect {
                failed += 1;

                if let Some(len) = len.filter(|_| bad_len) {
                    eprintln!("error: invalid length, {}:{}", file, test.line);
                    eprintln!("  expect: {expect_len}");
                    eprintln!("  result: {len}");
                }
                if result != expect {
                    eprintln!("error: invalid output, {}:{}", file, test.line);
                }

                let diff = Diff::new(file, test.line, &test.bytes, &expect, &result);
                eprintln!("{diff}");
            }
        }
        if failed == 0 {
            Ok(())
        } else {
            Err(format!("failed {failed} tests"))
        }
    }
}
