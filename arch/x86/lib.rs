//! x86 and x86-64 instruction decoder.
//!
//! ```
//! use xdec_x86::{Code, Decoder, Options, Register, Operand};
//!
//! let mut decoder = Decoder::new(&[0x48, 0x91], Options::default());
//! let insn = decoder.decode().unwrap();
//! assert_eq!(insn.code(), Code::Xchg_r64_RAX);
//! assert_eq!(insn.operand(0), Operand::Register(Register::RCX));
//! assert_eq!(insn.len(), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod code;
mod decoder;
mod instruction;
mod memory_size;
mod register;
mod table;

#[cfg(feature = "print")]
mod print;

use xdec_core::ArchDecoder;

use self::decoder::Inner;

pub use xdec_core::error::Error;

pub use self::{
    code::Code,
    decoder::INSN_MAX_LEN,
    instruction::{
        ConstantOffsets, EncodingKind, Immediate, Instruction, Memory, Operand, RoundingControl,
        MAX_OPERANDS,
    },
    memory_size::MemorySize,
    register::{Register, RegisterClass},
};

type Result<T = (), E = Error> = core::result::Result<T, E>;

/// CPU mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bitness {
    Bits16,
    Bits32,
    #[default]
    Bits64,
}

impl Bitness {
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            16 => Some(Self::Bits16),
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub bitness: Bitness,
    /// Instruction pointer of the first byte.
    pub ip: u64,
    /// Accept encodings that decode unambiguously but raise #UD on hardware.
    pub no_invalid_check: bool,
    /// Near branches with 66 use a 16-bit operand size in 64-bit mode.
    pub amd_branches: bool,
    /// Decode `0F 0D` and `0F 18..0F 1F` as reserved NOPs even where a real instruction exists.
    pub force_reserved_nop: bool,
}

/// Decoder over a byte buffer.
pub struct Decoder<'a> {
    data: &'a [u8],
    position: usize,
    ip: u64,
    opts: Options,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], opts: Options) -> Self {
        Self {
            data,
            position: 0,
            ip: opts.ip,
            opts,
        }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Offset of the next instruction in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Instruction pointer of the next instruction.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip;
    }

    pub fn can_decode(&self) -> bool {
        self.position < self.data.len()
    }

    /// Decodes the next instruction.
    ///
    /// On error the position and the instruction pointer stay at the failed instruction.
    pub fn decode(&mut self) -> Result<Instruction> {
        let mut insn = Instruction::default();
        self.decode_out(&mut insn)?;
        Ok(insn)
    }

    /// Same as [`Decoder::decode`] but reuses `out`.
    pub fn decode_out(&mut self, out: &mut Instruction) -> Result {
        let data = self.data.get(self.position..).unwrap_or_default();
        let len = Inner::new(&self.opts, self.ip, data).decode(out)?;
        self.position += len;
        self.ip = self.ip.wrapping_add(len as u64);
        Ok(())
    }
}

/// Yields instructions until the end of the buffer, a byte that fails to decode is skipped.
impl Iterator for Decoder<'_> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.can_decode() {
            return None;
        }
        let result = self.decode();
        if result.is_err() {
            self.position += 1;
            self.ip = self.ip.wrapping_add(1);
        }
        Some(result)
    }
}

/// [`ArchDecoder`] for x86.
#[derive(Clone, Debug, Default)]
pub struct X86Decoder {
    opts: Options,
}

impl X86Decoder {
    pub fn new(opts: &Options) -> Self {
        Self { opts: *opts }
    }
}

impl ArchDecoder for X86Decoder {
    type Insn = Instruction;

    fn decode(&mut self, address: u64, bytes: &[u8], out: &mut Instruction) -> Result<usize> {
        Inner::new(&self.opts, address, bytes).decode(out)
    }
}
