//! Decoding of a single instruction.
//!
//! [`Inner`] lives for one instruction: it scans the prefixes, walks the opcode tables down to
//! a [`Template`], resolves the operands and fills the [`Instruction`] record.

mod modrm;
mod operand;
mod prefix;
mod vex;

use core::ops::{Deref, DerefMut};

use log::trace;
use xdec_core::{bytes::Bytes, error::Error};

use crate::{
    code::Code,
    instruction::{self, ConstantOffsets, EncodingKind, Instruction, Operand, MAX_OPERANDS},
    register::{Register, RegisterClass},
    table::{self, Entry, Op, Template},
    Bitness, Options, Result,
};

/// Maximum instruction length in bytes.
pub const INSN_MAX_LEN: usize = 15;

/// Mandatory prefix selector, the order matches [`Entry::Prefix`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Mandatory {
    #[default]
    None,
    P66,
    PF3,
    PF2,
}

impl Mandatory {
    fn from_pp(pp: u8) -> Self {
        match pp & 3 {
            0 => Self::None,
            1 => Self::P66,
            2 => Self::PF3,
            _ => Self::PF2,
        }
    }
}

#[derive(Default)]
pub(crate) struct State {
    segment: Register,
    lock: bool,
    repe: bool,
    repne: bool,
    has_66: bool,
    has_67: bool,
    mandatory: Mandatory,
    // last REX byte, zero if absent
    rex: u8,

    encoding: EncodingKind,
    w: bool,
    // register extensions already shifted into place
    r: u8,
    x: u8,
    b: u8,
    // EVEX.X as bit 4 of a vector ModRM.rm
    vx: u8,
    // EVEX.V' as bit 4 of a VSIB index
    vsib_hi: u8,
    // vector length of the VSIB index while the memory operand is decoded
    vsib: Option<u8>,
    vvvv: u8,
    vl: u8,
    aaa: u8,
    z: bool,
    bcst: bool,

    // operand and address size in bits
    osz: u8,
    asz: u8,

    opcode: u8,
    modrm: Option<u8>,
    // EVEX disp8 waiting for the memory operand size
    disp8: bool,
    offsets: ConstantOffsets,
}

pub(crate) struct Inner<'a> {
    opts: &'a Options,
    bytes: Bytes<'a>,
    ip: u64,
    state: State,
}

impl<'a> Deref for Inner<'a> {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl<'a> DerefMut for Inner<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.state
    }
}

impl<'a> Inner<'a> {
    pub(crate) fn new(opts: &'a Options, ip: u64, data: &'a [u8]) -> Self {
        Self {
            opts,
            bytes: Bytes::with_limit(data, INSN_MAX_LEN),
            ip,
            state: State::default(),
        }
    }

    #[inline(always)]
    fn is64(&self) -> bool {
        self.opts.bitness == Bitness::Bits64
    }

    #[inline(always)]
    fn default_osz(&self) -> u8 {
        match self.opts.bitness {
            Bitness::Bits16 => 16,
            _ => 32,
        }
    }

    /// Fails with [`Error::InvalidEncoding`] unless `valid` or the check is disabled.
    fn check(&self, valid: bool, what: &str) -> Result {
        if valid || self.opts.no_invalid_check {
            Ok(())
        } else {
            Err(self.reject(what))
        }
    }

    fn reject(&self, what: &str) -> Error {
        trace!("invalid encoding at byte {}: {what}", self.bytes.offset());
        Error::InvalidEncoding
    }

    /// Decodes one instruction into `out` and returns its length.
    pub(crate) fn decode(mut self, out: &mut Instruction) -> Result<usize> {
        out.clear();
        match self.decode_insn(out) {
            Ok(()) => Ok(out.len()),
            Err(err) => {
                out.clear();
                Err(match err {
                    Error::More(len) if len > INSN_MAX_LEN => Error::TooLong,
                    err => err,
                })
            }
        }
    }

    fn decode_insn(&mut self, out: &mut Instruction) -> Result {
        let byte = self.scan_prefixes()?;
        let entry = match byte {
            0x0f => self.escape_0f()?,
            0xc4 | 0xc5 | 0x62 if self.is_vex_introducer()? => self.decode_vex_prefix(byte)?,
            0x8f if self.is_xop_introducer()? => self.decode_xop_prefix()?,
            _ => {
                self.opcode = byte;
                &table::ONE_BYTE[byte as usize]
            }
        };
        let template = self.walk(entry)?;
        self.assemble(template, out)
    }

    /// C4, C5 and 62 are LES, LDS and BOUND outside of 64-bit mode unless ModRM.mod is 11.
    fn is_vex_introducer(&self) -> Result<bool> {
        if self.is64() {
            return Ok(true);
        }
        match self.bytes.peek_u8() {
            Some(next) => Ok(next >= 0xc0),
            None => Err(Error::More(self.bytes.offset() + 1)),
        }
    }

    /// 8F is POP Ev unless the low 5 bits of the next byte select an XOP map.
    fn is_xop_introducer(&self) -> Result<bool> {
        match self.bytes.peek_u8() {
            Some(next) => Ok(next & 0x1f >= 8),
            None => Err(Error::More(self.bytes.offset() + 1)),
        }
    }

    fn escape_0f(&mut self) -> Result<&'static Entry> {
        let entry = match self.bytes.read_u8()? {
            0x38 => {
                self.opcode = self.bytes.read_u8()?;
                &table::MAP_0F38[self.opcode as usize]
            }
            0x3a => {
                self.opcode = self.bytes.read_u8()?;
                &table::MAP_0F3A[self.opcode as usize]
            }
            opcode => {
                self.opcode = opcode;
                &table::MAP_0F[opcode as usize]
            }
        };
        Ok(entry)
    }

    /// Removes a legacy mandatory prefix used to select the template.
    fn consume_mandatory(&mut self, mandatory: Mandatory) {
        match mandatory {
            Mandatory::None => {}
            Mandatory::P66 => {
                self.has_66 = false;
                self.osz = if self.w { 64 } else { self.default_osz() };
            }
            // the other of F2/F3 is ignored
            Mandatory::PF3 | Mandatory::PF2 => {
                self.repe = false;
                self.repne = false;
            }
        }
    }

    fn walk(&mut self, mut entry: &'static Entry) -> Result<&'static Template> {
        loop {
            entry = match *entry {
                Entry::Invalid => {
                    trace!("invalid opcode {:02x}", self.opcode);
                    return Err(Error::InvalidOpcode);
                }
                Entry::Insn(template) => return Ok(template),
                Entry::Group(group) => &group[(self.modrm()? >> 3) as usize & 7],
                Entry::Mod(reg, mem) => {
                    if self.modrm()? >> 6 == 3 {
                        reg
                    } else {
                        mem
                    }
                }
                Entry::Rm(rm) => &rm[self.modrm()? as usize & 7],
                Entry::Prefix(entries) => {
                    let mandatory = self.mandatory;
                    if self.encoding == EncodingKind::Legacy {
                        self.consume_mandatory(mandatory);
                    }
                    &entries[mandatory as usize]
                }
                Entry::Rep(entries) => {
                    let mandatory = self.mandatory;
                    let index = match mandatory {
                        Mandatory::PF3 => 1,
                        Mandatory::PF2 => 2,
                        _ => 0,
                    };
                    if index != 0 {
                        self.consume_mandatory(mandatory);
                    }
                    &entries[index]
                }
                Entry::W(w0, w1) => {
                    if self.w {
                        w1
                    } else {
                        w0
                    }
                }
                Entry::ReservedNop(nop, other) => {
                    if self.opts.force_reserved_nop {
                        nop
                    } else {
                        other
                    }
                }
                Entry::Mode(legacy, long) => {
                    if self.is64() {
                        long
                    } else {
                        legacy
                    }
                }
                Entry::Asz(entries) => match self.asz {
                    16 => &entries[0],
                    32 => &entries[1],
                    _ => &entries[2],
                },
                Entry::Nop => {
                    if self.b != 0 {
                        &table::XCHG_ACC
                    } else if self.repe {
                        self.repe = false;
                        &table::PAUSE
                    } else {
                        &table::NOP
                    }
                }
            };
        }
    }

    /// Operand size overrides of the template in 64-bit mode.
    fn fix_operand_size(&mut self, template: &Template) {
        if !self.is64() {
            return;
        }
        if template.has(table::FORCE64) {
            self.osz = 64;
        } else if template.has(table::DEF64) {
            if self.osz != 16 {
                self.osz = 64;
            }
        } else if template.has(table::BRANCH64) {
            let amd16 = self.opts.amd_branches && self.has_66 && !self.w;
            self.osz = if amd16 { 16 } else { 64 };
        }
    }

    /// EVEX.b on a register form selects rounding or SAE and forces 512-bit vectors.
    fn evex_reg_rounding(&mut self, template: &Template) -> Result<bool> {
        Ok(self.encoding == EncodingKind::Evex
            && self.bcst
            && template.has(table::ER | table::SAE)
            && (self.w || !template.has(table::ERW1))
            && self.modrm()? >> 6 == 3)
    }

    fn assemble(&mut self, template: &'static Template, out: &mut Instruction) -> Result {
        if template.has(table::NO64) && self.is64() {
            trace!("opcode {:02x} is not valid in 64-bit mode", self.opcode);
            return Err(Error::InvalidOpcode);
        }
        self.fix_operand_size(template);

        let ll = self.vl;
        let reg_rounding = self.evex_reg_rounding(template)?;
        if reg_rounding {
            self.vl = 2;
        }

        let variant = if template.has(table::VLX) {
            if self.vl > 2 {
                return Err(self.reject("vector length"));
            }
            self.vl as usize
        } else {
            match self.osz {
                16 => 0,
                32 => 1,
                _ => 2,
            }
        };
        let mut code = template.codes[variant];
        if code == Code::INVALID && !template.has(table::SUFFIX) {
            return Err(if template.has(table::VLX) {
                self.reject("vector length")
            } else {
                Error::InvalidOpcode
            });
        }

        match self.encoding {
            EncodingKind::Legacy | EncodingKind::D3now => {}
            EncodingKind::Vex | EncodingKind::Xop => {
                self.check(!template.has(table::L0) || self.vl == 0, "VEX.L must be 0")?;
                self.check(!template.has(table::L1) || self.vl == 1, "VEX.L must be 1")?;
            }
            EncodingKind::Evex => {
                self.check(self.aaa == 0 || template.has(table::MASK), "opmask")?;
                self.check(!self.z || template.has(table::ZERO), "zeroing")?;
                if self.bcst {
                    if reg_rounding {
                        if template.has(table::ER) {
                            out.flags.field_set(instruction::FIELD_ROUNDING, ll as u32 + 1);
                        } else {
                            out.flags.set(instruction::SAE);
                        }
                    } else if self.modrm()? >> 6 == 3 {
                        self.check(template.has(table::ERW1), "EVEX.b on a register")?;
                    } else if !template.has(table::BCST) {
                        return Err(self.reject("broadcast"));
                    }
                }
            }
        }

        // the imm8 of Is4 follows the ModRM operand even when it is listed first
        let mut operands = [Operand::None; MAX_OPERANDS];
        for trailing in [false, true] {
            for (position, op) in template.ops.iter().enumerate() {
                if matches!(op, Op::Is4 | Op::Is4x) == trailing {
                    operands[position] = self.decode_operand(template, variant, *op, position)?;
                }
            }
        }
        for operand in &operands[..template.ops.len()] {
            out.push_operand(*operand);
        }
        if template.has(table::SUFFIX) {
            code = self.d3now_suffix(out)?;
        }

        if self.encoding != EncodingKind::Legacy {
            let uses_vvvv = template.ops.iter().any(|op| op.uses_vvvv());
            // EVEX.V' belongs to the VSIB index
            let vvvv = if template.ops.iter().any(|op| op.is_vsib()) {
                self.vvvv & 15
            } else {
                self.vvvv
            };
            self.check(uses_vvvv || vvvv == 0, "vvvv must be 1111")?;
        }

        let first = out.operand(0);
        if self.z {
            let mask = first.register().map(Register::class) == Some(RegisterClass::Mask);
            self.check(!first.is_memory() && !mask, "zeroing with this destination")?;
        }
        if self.lock {
            let lockable = template.has(table::LOCK) && first.is_memory();
            self.check(lockable, "lock prefix")?;
        }
        if self.encoding == EncodingKind::Legacy && first.is_memory() {
            self.hle(template, out);
        }
        if self.disp8 {
            self.scale_disp8(out, template.has(table::T1S));
        }

        out.ip = self.ip;
        out.code = code;
        out.len = self.bytes.offset() as u8;
        out.segment_prefix = self.segment;
        out.offsets = self.offsets;
        let broadcast = self.bcst && out.operands().iter().any(Operand::is_memory);
        out.flags
            .set_if(instruction::REPE, self.repe)
            .set_if(instruction::REPNE, self.repne)
            .set_if(instruction::LOCK, self.lock)
            .set_if(instruction::ZEROING, self.z)
            .set_if(instruction::BROADCAST, broadcast)
            .field_set(instruction::FIELD_ENCODING, self.encoding as u32)
            .field_set(instruction::FIELD_OPMASK, self.aaa as u32);
        Ok(())
    }

    /// 3DNow! opcode in the imm8 after the operands, it also sets the memory operand size.
    fn d3now_suffix(&mut self, out: &mut Instruction) -> Result<Code> {
        let suffix = self.bytes.read_u8()?;
        let index = table::D3NOW_SUFFIX
            .binary_search_by_key(&suffix, |(suffix, ..)| *suffix)
            .map_err(|_| {
                trace!("invalid 3DNow! suffix {suffix:02x}");
                Error::InvalidOpcode
            })?;
        let (_, code, size) = table::D3NOW_SUFFIX[index];
        if let Operand::Memory(mem) = &mut out.operands[1] {
            mem.size = size;
        }
        self.encoding = EncodingKind::D3now;
        Ok(code)
    }

    /// F2/F3 become XACQUIRE/XRELEASE on HLE-capable memory forms.
    fn hle(&mut self, template: &Template, out: &mut Instruction) {
        let hle = template.has(table::HLE) && (self.lock || template.has(table::HLE_NOLOCK));
        if self.repne && hle {
            self.repne = false;
            out.flags.set(instruction::XACQUIRE);
        }
        if self.repe && (hle || template.has(table::XRELEASE_NOLOCK)) {
            self.repe = false;
            out.flags.set(instruction::XRELEASE);
        }
    }

    /// EVEX compressed displacement: disp8 * N.
    fn scale_disp8(&self, out: &mut Instruction, by_element: bool) {
        let op_count = out.op_count();
        for operand in &mut out.operands[..op_count] {
            if let Operand::Memory(mem) = operand {
                let n = if by_element || mem.size.is_broadcast() {
                    mem.size.element_size()
                } else {
                    mem.size.size()
                };
                mem.displacement *= n.max(1) as i64;
            }
        }
    }
}
