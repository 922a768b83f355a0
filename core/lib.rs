#![cfg_attr(not(feature = "std"), no_std)]

pub mod bytes;
pub mod error;
pub mod flags;
pub mod macros;
pub mod utils;

use crate::error::Error;

/// Decodes one instruction at a time from a byte slice.
pub trait ArchDecoder {
    /// Decoded instruction record.
    type Insn;

    /// Decodes an instruction located at `address` from the start of `bytes`.
    ///
    /// Returns the length of the instruction in bytes.
    fn decode(&mut self, address: u64, bytes: &[u8], out: &mut Self::Insn) -> Result<usize, Error>;
}
