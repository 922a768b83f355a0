//! Diagnostic dump of decoded instructions.
//!
//! The format is `[prefixes ]Code op, op, ...` and is meant for tests and debugging, not as an
//! assembler syntax.

use core::fmt::{self, Display, Formatter};

use xdec_core::utils::truncate;

use crate::{
    instruction::{Instruction, Memory, Operand, RoundingControl},
    register::Register,
};

impl Display for Memory {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{} {}:[", self.size, self.segment)?;
        let mut empty = true;
        if !self.base.is_none() {
            write!(fmt, "{}", self.base)?;
            empty = false;
        }
        if !self.index.is_none() {
            if !empty {
                fmt.write_str("+")?;
            }
            write!(fmt, "{}", self.index)?;
            if self.scale > 1 {
                write!(fmt, "*{}", self.scale)?;
            }
            empty = false;
        }
        if empty {
            let bits = match self.displ_size {
                0 | 8 => 64,
                n => n as u32 * 8,
            };
            write!(fmt, "{:#X}", truncate(self.displacement as u64, bits))?;
        } else if self.displ_size != 0 {
            if self.displacement < 0 {
                write!(fmt, "-{:#X}", self.displacement.unsigned_abs())?;
            } else {
                write!(fmt, "+{:#X}", self.displacement)?;
            }
        }
        fmt.write_str("]")?;
        if self.size.is_broadcast() {
            write!(fmt, "{{1to{}}}", self.size.broadcast_count())?;
        }
        Ok(())
    }
}

impl Display for Operand {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Register(reg) => Display::fmt(reg, fmt),
            Self::Memory(mem) => Display::fmt(mem, fmt),
            Self::Immediate(imm) => write!(fmt, "{:#X}", imm.value),
            Self::NearBranch { target, .. } => write!(fmt, "{target:#X}"),
            Self::FarBranch {
                selector, offset, ..
            } => write!(fmt, "{selector:#X}:{offset:#X}"),
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let prefixes = [
            (self.has_xacquire_prefix(), "xacquire "),
            (self.has_xrelease_prefix(), "xrelease "),
            (self.has_lock_prefix(), "lock "),
            (self.has_repe_prefix(), "repe "),
            (self.has_repne_prefix(), "repne "),
        ];
        for (_, prefix) in prefixes.iter().filter(|(set, _)| *set) {
            fmt.write_str(prefix)?;
        }
        fmt.write_str(self.code().name())?;

        for (i, operand) in self.operands().iter().enumerate() {
            fmt.write_str(if i == 0 { " " } else { ", " })?;
            write!(fmt, "{operand}")?;
            if i == 0 {
                if self.opmask() != Register::None {
                    write!(fmt, "{{{}}}", self.opmask())?;
                }
                if self.zeroing_masking() {
                    fmt.write_str("{z}")?;
                }
            }
        }

        match self.rounding_control() {
            RoundingControl::None if self.suppress_all_exceptions() => fmt.write_str(" {sae}"),
            RoundingControl::None => Ok(()),
            RoundingControl::RoundToNearest => fmt.write_str(" {rn-sae}"),
            RoundingControl::RoundDown => fmt.write_str(" {rd-sae}"),
            RoundingControl::RoundUp => fmt.write_str(" {ru-sae}"),
            RoundingControl::RoundTowardZero => fmt.write_str(" {rz-sae}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decoder, Options};

    fn dump(bytes: &[u8]) -> String {
        let mut decoder = Decoder::new(bytes, Options::default());
        decoder.decode().unwrap().to_string()
    }

    #[test]
    fn operands() {
        assert_eq!(dump(&[0x48, 0x91]), "Xchg_r64_RAX RCX, RAX");
        assert_eq!(dump(&[0x8b, 0x44, 0x88, 0xf0]), "Mov_r32_rm32 EAX, UInt32 DS:[RAX+RCX*4-0x10]");
        assert_eq!(dump(&[0x83, 0xc0, 0xff]), "Add_rm32_imm8 EAX, 0xFFFFFFFF");
        assert_eq!(dump(&[0xeb, 0xfe]), "Jmp_rel8_64 0x0");
    }

    #[test]
    fn prefixes() {
        assert_eq!(dump(&[0xf3, 0xa4]), "repe Movsb_m8_m8 UInt8 ES:[RDI], UInt8 DS:[RSI]");
        assert_eq!(
            dump(&[0xf2, 0xf0, 0x01, 0x08]),
            "xacquire lock Add_rm32_r32 UInt32 DS:[RAX], ECX"
        );
    }

    #[test]
    fn evex() {
        assert_eq!(
            dump(&[0x62, 0xf1, 0x7c, 0xdb, 0x51, 0xd3]),
            "EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er ZMM2{K3}{z}, ZMM3 {ru-sae}"
        );
    }
}
