use core::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Need more bytes to decode an instruction.
    ///
    /// Holds the instruction length in bytes known so far.
    More(usize),
    /// There is no instruction for the opcode.
    InvalidOpcode,
    /// The opcode exists but the prefixes or fields used with it are not allowed.
    InvalidEncoding,
    /// The instruction exceeds the maximum instruction length.
    TooLong,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::More(_) => fmt.write_str("need more bytes"),
            Self::InvalidOpcode => fmt.write_str("invalid opcode"),
            Self::InvalidEncoding => fmt.write_str("invalid encoding"),
            Self::TooLong => fmt.write_str("instruction too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
