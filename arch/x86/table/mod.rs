//! Static opcode tables.
//!
//! Every opcode map is an array of 256 [`Entry`] values. An entry is either a leaf
//! [`Template`] or a selector that picks the next entry from the ModRM byte, the mandatory
//! prefix, `W`, the CPU mode or the address size.

mod d3now;
mod evex;
mod map0f;
mod map0f38;
mod one_byte;
mod vex;
mod xop;

use crate::{code::Code, memory_size::MemorySize};

pub(crate) use self::{
    d3now::{D3NOW, D3NOW_SUFFIX},
    evex::{EVEX_0F, EVEX_0F38, EVEX_0F3A},
    map0f::MAP_0F,
    map0f38::{MAP_0F38, MAP_0F3A},
    one_byte::ONE_BYTE,
    vex::{VEX_0F, VEX_0F38, VEX_0F3A},
    xop::{XOP_8, XOP_9, XOP_A},
};

/// Accepts the LOCK prefix in the memory form.
pub(crate) const LOCK: u32 = 1 << 0;
/// F2/F3 become XACQUIRE/XRELEASE together with LOCK.
pub(crate) const HLE: u32 = 1 << 1;
/// F2/F3 become XACQUIRE/XRELEASE even without LOCK.
pub(crate) const HLE_NOLOCK: u32 = 1 << 2;
/// F3 becomes XRELEASE without LOCK.
pub(crate) const XRELEASE_NOLOCK: u32 = 1 << 3;
/// 64-bit operand size in 64-bit mode unless 66 is used without W.
pub(crate) const DEF64: u32 = 1 << 4;
/// 64-bit operand size in 64-bit mode.
pub(crate) const FORCE64: u32 = 1 << 5;
/// Near branch, see `Options::amd_branches`.
pub(crate) const BRANCH64: u32 = 1 << 6;
/// Invalid in 64-bit mode.
pub(crate) const NO64: u32 = 1 << 7;
/// Codes are selected by the vector length instead of the operand size.
pub(crate) const VLX: u32 = 1 << 8;
/// EVEX opmask allowed.
pub(crate) const MASK: u32 = 1 << 9;
/// EVEX zeroing allowed.
pub(crate) const ZERO: u32 = 1 << 10;
/// EVEX embedded broadcast allowed.
pub(crate) const BCST: u32 = 1 << 11;
/// EVEX embedded rounding allowed.
pub(crate) const ER: u32 = 1 << 12;
/// EVEX suppress all exceptions allowed.
pub(crate) const SAE: u32 = 1 << 13;
/// VEX.L must be 0.
pub(crate) const L0: u32 = 1 << 14;
/// VEX.L must be 1.
pub(crate) const L1: u32 = 1 << 15;
/// The code is picked by an imm8 that follows the operands.
pub(crate) const SUFFIX: u32 = 1 << 16;
/// EVEX disp8 is scaled by the element size of a packed operand.
pub(crate) const T1S: u32 = 1 << 17;
/// [`ER`] applies to the W1 form only, EVEX.b of a W0 register form is ignored.
pub(crate) const ERW1: u32 = 1 << 18;

/// Operand descriptor.
///
/// Letters follow the usual opcode map notation: `G` is ModRM.reg, `E` is ModRM.rm, `V`, `W`
/// and `H` are vector registers in ModRM.reg, ModRM.rm and `vvvv`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Gb,
    Gw,
    Gd,
    Gq,
    /// Operand size.
    Gv,
    /// 32 or 64 bits.
    Gy,
    Eb,
    Ew,
    Ed,
    Ev,
    Ey,
    /// Operand size capped at 32 bits.
    Ez,
    /// Register only ModRM.rm.
    Rv,
    Ry,
    /// Register of the native mode width, ModRM.mod is ignored.
    Rn,
    /// Memory only ModRM.rm.
    M,
    /// General purpose register in `vvvv`, 32 or 64 bits.
    By,
    Sw,
    Cr,
    Dr,
    /// Register in the low 3 bits of the opcode.
    Zb,
    Zv,
    AL,
    AX,
    CL,
    DX,
    /// Accumulator of the operand size.
    Acc,
    /// Accumulator capped at 32 bits.
    Accz,
    ES,
    CS,
    SS,
    DS,
    FS,
    GS,
    /// Implicit constant 1.
    One,
    Ib,
    /// imm8 sign-extended to the operand size.
    Ibs,
    Iw,
    /// imm16 or imm32, sign-extended to 64 bits.
    Iz,
    /// imm16, imm32 or imm64.
    Iv,
    /// Second imm8 of ENTER.
    Ib2,
    /// imm32 that is not extended.
    Id,
    Jb,
    Jz,
    /// Absolute branch target of JMPE, 16 or 32 bits.
    Jabs,
    /// Far pointer.
    Ap,
    /// Memory offset without ModRM.
    Ob,
    Ov,
    /// DS:rSI string operands.
    Xb,
    Xv,
    Xz,
    /// ES:rDI string operands.
    Yb,
    Yv,
    Yz,
    /// DS:[rDI] of MASKMOVQ, the segment can be overridden.
    Xdi,
    /// DS:[rBX+AL].
    Xlat,
    St0,
    Sti,
    /// MPX bound register in ModRM.reg.
    Bnd,
    /// Bound register or memory.
    Bndm,
    /// MMX register in ModRM.reg.
    P,
    /// MMX register or memory.
    Q,
    /// MMX register in ModRM.rm.
    N,
    V,
    /// XMM register in ModRM.reg.
    Vx,
    /// Half width vector register in ModRM.reg.
    Vh,
    H,
    Hx,
    W,
    Wx,
    Wh,
    /// YMM register or memory.
    Wy,
    /// VSIB memory, the index has the vector length.
    Vsib,
    /// VSIB memory with a half width index, at least XMM.
    Vsibh,
    /// VSIB memory with an XMM index.
    Vsibx,
    /// Register only ModRM.rm.
    U,
    Ux,
    /// Vector register in imm8[7:4].
    Is4,
    /// XMM register in imm8[7:4].
    Is4x,
    /// Opmask register in ModRM.reg.
    Kr,
    /// Opmask register in `vvvv`.
    Kh,
    /// Opmask register in ModRM.rm.
    Krm,
    /// Opmask register or memory.
    Km,
}

impl Op {
    /// Operand is encoded in `vvvv`.
    pub(crate) fn uses_vvvv(self) -> bool {
        matches!(self, Self::By | Self::H | Self::Hx | Self::Kh)
    }

    pub(crate) fn is_vsib(self) -> bool {
        matches!(self, Self::Vsib | Self::Vsibh | Self::Vsibx)
    }
}

/// Instruction template.
#[derive(Debug)]
pub(crate) struct Template {
    /// Code per operand size (16/32/64) or per vector length (128/256/512) with [`VLX`].
    pub(crate) codes: [Code; 3],
    pub(crate) ops: &'static [Op],
    /// Memory operand size per variant, [`MemorySize::Unknown`] derives it from the operand.
    pub(crate) mem: [MemorySize; 3],
    /// Memory operand size per variant with EVEX broadcast.
    pub(crate) bcst: [MemorySize; 3],
    pub(crate) flags: u32,
}

impl Template {
    #[inline(always)]
    pub(crate) fn has(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum Entry {
    Invalid,
    Insn(&'static Template),
    /// Selected by ModRM.reg.
    Group(&'static [Entry; 8]),
    /// Register and memory forms.
    Mod(&'static Entry, &'static Entry),
    /// Selected by ModRM.rm of the register form.
    Rm(&'static [Entry; 8]),
    /// Selected by the mandatory prefix: none, 66, F3, F2.
    Prefix(&'static [Entry; 4]),
    /// Selected by a repeat prefix only: none, F3, F2.
    Rep(&'static [Entry; 3]),
    W(&'static Entry, &'static Entry),
    /// 16/32-bit mode and 64-bit mode.
    Mode(&'static Entry, &'static Entry),
    /// Reserved NOP and the regular entry, see `Options::force_reserved_nop`.
    ReservedNop(&'static Entry, &'static Entry),
    /// Selected by the address size.
    Asz(&'static [Entry; 3]),
    /// Opcode 90.
    Nop,
}

macro_rules! op {
    ($code:ident $(, $op:ident)* $(; $flags:expr)?) => {
        Entry::Insn(&Template {
            codes: [Code::$code, Code::$code, Code::$code],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            bcst: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            flags: 0 $(| $flags)?,
        })
    };
}

macro_rules! osz {
    ([$c16:ident, $c32:ident, $c64:ident] $(, $op:ident)* $(; $flags:expr)?) => {
        Entry::Insn(&Template {
            codes: [Code::$c16, Code::$c32, Code::$c64],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            bcst: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            flags: 0 $(| $flags)?,
        })
    };
}

macro_rules! mem {
    ($code:ident, $mem:ident $(, $op:ident)* $(; $flags:expr)?) => {
        Entry::Insn(&Template {
            codes: [Code::$code, Code::$code, Code::$code],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::$mem, MemorySize::$mem, MemorySize::$mem],
            bcst: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            flags: 0 $(| $flags)?,
        })
    };
}

macro_rules! osz_mem {
    (
        [$c16:ident, $c32:ident, $c64:ident],
        [$m16:ident, $m32:ident, $m64:ident]
        $(, $op:ident)* $(; $flags:expr)?
    ) => {
        Entry::Insn(&Template {
            codes: [Code::$c16, Code::$c32, Code::$c64],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::$m16, MemorySize::$m32, MemorySize::$m64],
            bcst: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            flags: 0 $(| $flags)?,
        })
    };
}

macro_rules! vl {
    (
        [$c128:ident, $c256:ident, $c512:ident],
        [$m128:ident, $m256:ident, $m512:ident]
        $(, $op:ident)* $(; $flags:expr)?
    ) => {
        Entry::Insn(&Template {
            codes: [Code::$c128, Code::$c256, Code::$c512],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::$m128, MemorySize::$m256, MemorySize::$m512],
            bcst: [MemorySize::Unknown, MemorySize::Unknown, MemorySize::Unknown],
            flags: VLX $(| $flags)?,
        })
    };
}

macro_rules! vlb {
    (
        [$c128:ident, $c256:ident, $c512:ident],
        [$m128:ident, $m256:ident, $m512:ident],
        [$b128:ident, $b256:ident, $b512:ident]
        $(, $op:ident)* $(; $flags:expr)?
    ) => {
        Entry::Insn(&Template {
            codes: [Code::$c128, Code::$c256, Code::$c512],
            ops: &[$(Op::$op),*],
            mem: [MemorySize::$m128, MemorySize::$m256, MemorySize::$m512],
            bcst: [MemorySize::$b128, MemorySize::$b256, MemorySize::$b512],
            flags: VLX | BCST $(| $flags)?,
        })
    };
}

pub(crate) use {mem, op, osz, osz_mem, vl, vlb};

/// Opcode 90 without REX.B.
pub(crate) static NOP: Entry = osz!([Nopw, Nopd, Nopq]);
/// Opcode 90 with F3 and without REX.B.
pub(crate) static PAUSE: Entry = op!(Pause);
/// Opcode 90 with REX.B.
pub(crate) static XCHG_ACC: Entry = osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc);

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(entry: &Entry, leaves: &mut usize) {
        match entry {
            Entry::Invalid | Entry::Nop => {}
            Entry::Insn(template) => {
                *leaves += 1;
                assert!(template.ops.len() <= 4, "{:?}", template.codes);
                if !template.has(VLX | SUFFIX) {
                    assert!(template.codes.iter().all(|c| *c != Code::INVALID));
                }
                if template.has(BCST) {
                    assert!(template.bcst.iter().zip(template.codes.iter()).all(|(b, c)| {
                        *c == Code::INVALID || b.is_broadcast()
                    }));
                }
                let vvvv = template.ops.iter().filter(|op| op.uses_vvvv()).count();
                assert!(vvvv <= 1, "{:?}", template.codes);
            }
            Entry::Group(e) | Entry::Rm(e) => e.iter().for_each(|e| walk(e, leaves)),
            Entry::Prefix(e) => e.iter().for_each(|e| walk(e, leaves)),
            Entry::Rep(e) | Entry::Asz(e) => e.iter().for_each(|e| walk(e, leaves)),
            Entry::Mod(a, b) | Entry::W(a, b) | Entry::Mode(a, b) | Entry::ReservedNop(a, b) => {
                walk(a, leaves);
                walk(b, leaves);
            }
        }
    }

    #[test]
    fn tables() {
        let maps: [&[Entry; 256]; 13] = [
            &ONE_BYTE, &MAP_0F, &MAP_0F38, &MAP_0F3A, &VEX_0F, &VEX_0F38, &VEX_0F3A, &EVEX_0F,
            &EVEX_0F38, &EVEX_0F3A, &XOP_8, &XOP_9, &XOP_A,
        ];
        let mut leaves = 0;
        for map in maps {
            map.iter().for_each(|e| walk(e, &mut leaves));
        }
        assert!(leaves > 1000);
    }

    #[test]
    fn d3now_suffixes_are_sorted() {
        assert!(D3NOW_SUFFIX.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(matches!(MAP_0F[0x0f], Entry::Insn(t) if t.has(SUFFIX)));
    }

    #[test]
    fn escapes_are_not_in_the_one_byte_map() {
        assert!(matches!(ONE_BYTE[0x0f], Entry::Invalid));
        assert!(matches!(ONE_BYTE[0x90], Entry::Nop));
        for prefix in [0x26, 0x2e, 0x36, 0x3e, 0x64, 0x65, 0x66, 0x67, 0xf0, 0xf2, 0xf3] {
            assert!(matches!(ONE_BYTE[prefix], Entry::Invalid), "{prefix:02x}");
        }
    }
}
