use xdec_core::flags::{Field, Flags};

use crate::{code::Code, memory_size::MemorySize, register::Register};

pub(crate) const REPE: u32 = 1 << 0;
pub(crate) const REPNE: u32 = 1 << 1;
pub(crate) const LOCK: u32 = 1 << 2;
pub(crate) const XACQUIRE: u32 = 1 << 3;
pub(crate) const XRELEASE: u32 = 1 << 4;
pub(crate) const ZEROING: u32 = 1 << 5;
pub(crate) const SAE: u32 = 1 << 6;
pub(crate) const BROADCAST: u32 = 1 << 7;

pub(crate) const FIELD_ENCODING: Field = Field::new(8, 3);
pub(crate) const FIELD_ROUNDING: Field = Field::new(11, 3);
pub(crate) const FIELD_OPMASK: Field = Field::new(14, 3);

/// Maximum number of explicit operands.
pub const MAX_OPERANDS: usize = 4;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EncodingKind {
    #[default]
    Legacy,
    Vex,
    Evex,
    Xop,
    /// `0F 0F` with the opcode in a trailing imm8.
    D3now,
}

impl EncodingKind {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::Vex,
            2 => Self::Evex,
            3 => Self::Xop,
            4 => Self::D3now,
            _ => Self::Legacy,
        }
    }
}

/// EVEX embedded rounding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::RoundToNearest,
            2 => Self::RoundDown,
            3 => Self::RoundUp,
            4 => Self::RoundTowardZero,
            _ => Self::None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Immediate {
    /// Value extended to `size` bytes.
    pub value: u64,
    /// Operand size in bytes.
    pub size: u8,
    /// Number of bytes in the instruction stream, zero for implicit constants.
    pub encoded_size: u8,
}

/// Positions of the displacement and the immediates inside the instruction bytes, for
/// relocation lookups. A size of zero means the constant is absent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstantOffsets {
    pub displacement_offset: u8,
    pub displacement_size: u8,
    pub immediate_offset: u8,
    pub immediate_size: u8,
    /// Second immediate of ENTER and the selector of a far pointer.
    pub immediate_offset2: u8,
    pub immediate_size2: u8,
}

impl ConstantOffsets {
    pub fn has_displacement(&self) -> bool {
        self.displacement_size != 0
    }

    pub fn has_immediate(&self) -> bool {
        self.immediate_size != 0
    }

    pub fn has_immediate2(&self) -> bool {
        self.immediate_size2 != 0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Memory {
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    /// 1, 2, 4 or 8, meaningful only with an index register.
    pub scale: u8,
    /// Sign-extended displacement, scaled for EVEX compressed displacements.
    pub displacement: i64,
    /// Size of the encoded displacement in bytes, 0 when absent.
    pub displ_size: u8,
    pub size: MemorySize,
}

impl Memory {
    pub fn is_ip_relative(&self) -> bool {
        matches!(self.base, Register::RIP | Register::EIP)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operand {
    #[default]
    None,
    Register(Register),
    Memory(Memory),
    Immediate(Immediate),
    /// Absolute target of a relative branch, `size` is the operand size in bytes.
    NearBranch { target: u64, size: u8 },
    /// Far pointer, `size` is the offset size in bytes.
    FarBranch { selector: u16, offset: u32, size: u8 },
}

impl Operand {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn register(&self) -> Option<Register> {
        match self {
            Self::Register(reg) => Some(*reg),
            _ => None,
        }
    }

    pub fn memory(&self) -> Option<&Memory> {
        match self {
            Self::Memory(mem) => Some(mem),
            _ => None,
        }
    }

    pub fn immediate(&self) -> Option<&Immediate> {
        match self {
            Self::Immediate(imm) => Some(imm),
            _ => None,
        }
    }

    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory(_))
    }
}

/// Decoded instruction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub(crate) ip: u64,
    pub(crate) code: Code,
    pub(crate) len: u8,
    pub(crate) op_count: u8,
    pub(crate) operands: [Operand; MAX_OPERANDS],
    pub(crate) flags: Flags,
    pub(crate) segment_prefix: Register,
    pub(crate) offsets: ConstantOffsets,
}

impl Instruction {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn push_operand(&mut self, operand: Operand) {
        self.operands[self.op_count as usize] = operand;
        self.op_count += 1;
    }

    pub fn code(&self) -> Code {
        self.code
    }

    #[cfg(feature = "mnemonic")]
    pub fn mnemonic(&self) -> &'static str {
        self.code.mnemonic()
    }

    /// Instruction pointer of the first byte.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    /// Instruction pointer of the following instruction.
    pub fn next_ip(&self) -> u64 {
        self.ip.wrapping_add(self.len as u64)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` for a record that holds no decoded instruction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn op_count(&self) -> usize {
        self.op_count as usize
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.op_count as usize]
    }

    /// Returns [`Operand::None`] past the operand count.
    pub fn operand(&self, index: usize) -> Operand {
        self.operands().get(index).copied().unwrap_or_default()
    }

    /// The first memory operand.
    pub fn memory(&self) -> Option<&Memory> {
        self.operands().iter().find_map(Operand::memory)
    }

    /// Absolute address of a RIP/EIP-relative memory operand.
    pub fn ip_rel_memory_address(&self) -> Option<u64> {
        let mem = self.memory().filter(|mem| mem.is_ip_relative())?;
        let address = self.next_ip().wrapping_add(mem.displacement as u64);
        Some(match mem.base {
            Register::EIP => address & u32::MAX as u64,
            _ => address,
        })
    }

    pub fn constant_offsets(&self) -> ConstantOffsets {
        self.offsets
    }

    pub fn segment_prefix(&self) -> Register {
        self.segment_prefix
    }

    pub fn has_repe_prefix(&self) -> bool {
        self.flags.any(REPE)
    }

    pub fn has_repne_prefix(&self) -> bool {
        self.flags.any(REPNE)
    }

    pub fn has_lock_prefix(&self) -> bool {
        self.flags.any(LOCK)
    }

    pub fn has_xacquire_prefix(&self) -> bool {
        self.flags.any(XACQUIRE)
    }

    pub fn has_xrelease_prefix(&self) -> bool {
        self.flags.any(XRELEASE)
    }

    pub fn encoding(&self) -> EncodingKind {
        EncodingKind::from_raw(self.flags.field(FIELD_ENCODING))
    }

    /// EVEX opmask register, [`Register::None`] without masking.
    pub fn opmask(&self) -> Register {
        match self.flags.field(FIELD_OPMASK) {
            0 => Register::None,
            k => Register::k(k as u8),
        }
    }

    pub fn zeroing_masking(&self) -> bool {
        self.flags.any(ZEROING)
    }

    pub fn rounding_control(&self) -> RoundingControl {
        RoundingControl::from_raw(self.flags.field(FIELD_ROUNDING))
    }

    /// Set only for an explicit `{sae}`. Embedded rounding implies it but
    /// is reported through [`Instruction::rounding_control`] alone.
    pub fn suppress_all_exceptions(&self) -> bool {
        self.flags.any(SAE)
    }

    pub fn is_broadcast(&self) -> bool {
        self.flags.any(BROADCAST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let mut insn = Instruction::new();
        insn.flags
            .set(ZEROING)
            .field_set(FIELD_ENCODING, 2)
            .field_set(FIELD_ROUNDING, 4)
            .field_set(FIELD_OPMASK, 3);
        assert_eq!(insn.encoding(), EncodingKind::Evex);
        assert_eq!(insn.rounding_control(), RoundingControl::RoundTowardZero);
        assert_eq!(insn.opmask(), Register::K3);
        assert!(insn.zeroing_masking());
        assert!(!insn.suppress_all_exceptions());
        assert!(!insn.is_broadcast());

        insn.flags.field_set(FIELD_ENCODING, 4);
        assert_eq!(insn.encoding(), EncodingKind::D3now);
        assert_eq!(insn.opmask(), Register::K3);
    }

    #[test]
    fn ip_relative() {
        let mut insn = Instruction::new();
        insn.ip = 0x1000;
        insn.len = 7;
        insn.push_operand(Operand::Register(Register::RAX));
        insn.push_operand(Operand::Memory(Memory {
            segment: Register::DS,
            base: Register::RIP,
            displacement: -0x10,
            displ_size: 4,
            size: MemorySize::UInt64,
            ..Memory::default()
        }));
        assert_eq!(insn.next_ip(), 0x1007);
        assert_eq!(insn.ip_rel_memory_address(), Some(0xff7));
        assert_eq!(insn.operand(3), Operand::None);
    }
}
