use core::fmt;

macro_rules! define_registers {
    ($($reg:ident),+ $(,)?) => (
        /// Register identifier.
        #[repr(u8)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Register {
            #[default]
            $($reg),+
        }

        impl Register {
            pub const ALL: &'static [Register] = &[$(Register::$reg),+];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$reg => stringify!($reg),)+
                }
            }
        }
    );
}

define_registers! {
        None, AL, CL, DL, BL, AH, CH, DH,
        BH, SPL, BPL, SIL, DIL, R8L, R9L, R10L,
        R11L, R12L, R13L, R14L, R15L, AX, CX, DX,
        BX, SP, BP, SI, DI, R8W, R9W, R10W,
        R11W, R12W, R13W, R14W, R15W, EAX, ECX, EDX,
        EBX, ESP, EBP, ESI, EDI, R8D, R9D, R10D,
        R11D, R12D, R13D, R14D, R15D, RAX, RCX, RDX,
        RBX, RSP, RBP, RSI, RDI, R8, R9, R10,
        R11, R12, R13, R14, R15, EIP, RIP, ES,
        CS, SS, DS, FS, GS, XMM0, XMM1, XMM2,
        XMM3, XMM4, XMM5, XMM6, XMM7, XMM8, XMM9, XMM10,
        XMM11, XMM12, XMM13, XMM14, XMM15, XMM16, XMM17, XMM18,
        XMM19, XMM20, XMM21, XMM22, XMM23, XMM24, XMM25, XMM26,
        XMM27, XMM28, XMM29, XMM30, XMM31, YMM0, YMM1, YMM2,
        YMM3, YMM4, YMM5, YMM6, YMM7, YMM8, YMM9, YMM10,
        YMM11, YMM12, YMM13, YMM14, YMM15, YMM16, YMM17, YMM18,
        YMM19, YMM20, YMM21, YMM22, YMM23, YMM24, YMM25, YMM26,
        YMM27, YMM28, YMM29, YMM30, YMM31, ZMM0, ZMM1, ZMM2,
        ZMM3, ZMM4, ZMM5, ZMM6, ZMM7, ZMM8, ZMM9, ZMM10,
        ZMM11, ZMM12, ZMM13, ZMM14, ZMM15, ZMM16, ZMM17, ZMM18,
        ZMM19, ZMM20, ZMM21, ZMM22, ZMM23, ZMM24, ZMM25, ZMM26,
        ZMM27, ZMM28, ZMM29, ZMM30, ZMM31, K0, K1, K2,
        K3, K4, K5, K6, K7, CR0, CR1, CR2,
        CR3, CR4, CR5, CR6, CR7, CR8, CR9, CR10,
        CR11, CR12, CR13, CR14, CR15, DR0, DR1, DR2,
        DR3, DR4, DR5, DR6, DR7, DR8, DR9, DR10,
        DR11, DR12, DR13, DR14, DR15, ST0, ST1, ST2,
        ST3, ST4, ST5, ST6, ST7, MM0, MM1, MM2,
        MM3, MM4, MM5, MM6, MM7, BND0, BND1, BND2,
        BND3,}

/// Register file of a [`Register`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    None,
    Gpr8,
    Gpr16,
    Gpr32,
    Gpr64,
    Ip,
    Segment,
    Xmm,
    Ymm,
    Zmm,
    Mask,
    Control,
    Debug,
    St,
    Mm,
    Bound,
}

impl Register {
    #[inline]
    fn offset(self, index: u8) -> Register {
        Self::ALL[self as usize + index as usize]
    }

    /// 8-bit register, `rex` selects SPL..DIL instead of AH..BH.
    pub(crate) fn gpr8(index: u8, rex: bool) -> Register {
        debug_assert!(index < 16);
        if rex && index >= 4 {
            Self::AL.offset(index + 4)
        } else {
            Self::AL.offset(index)
        }
    }

    pub(crate) fn gpr16(index: u8) -> Register {
        debug_assert!(index < 16);
        Self::AX.offset(index)
    }

    pub(crate) fn gpr32(index: u8) -> Register {
        debug_assert!(index < 16);
        Self::EAX.offset(index)
    }

    pub(crate) fn gpr64(index: u8) -> Register {
        debug_assert!(index < 16);
        Self::RAX.offset(index)
    }

    /// General purpose register of `size` bytes.
    pub(crate) fn gpr(size: u8, index: u8, rex: bool) -> Register {
        match size {
            1 => Self::gpr8(index, rex),
            2 => Self::gpr16(index),
            4 => Self::gpr32(index),
            _ => Self::gpr64(index),
        }
    }

    pub(crate) fn xmm(index: u8) -> Register {
        debug_assert!(index < 32);
        Self::XMM0.offset(index)
    }

    pub(crate) fn ymm(index: u8) -> Register {
        debug_assert!(index < 32);
        Self::YMM0.offset(index)
    }

    pub(crate) fn zmm(index: u8) -> Register {
        debug_assert!(index < 32);
        Self::ZMM0.offset(index)
    }

    /// Vector register, `vl` is 0 for XMM, 1 for YMM and 2 for ZMM.
    pub(crate) fn vector(vl: u8, index: u8) -> Register {
        match vl {
            0 => Self::xmm(index),
            1 => Self::ymm(index),
            _ => Self::zmm(index),
        }
    }

    pub(crate) fn k(index: u8) -> Register {
        debug_assert!(index < 8);
        Self::K0.offset(index)
    }

    pub(crate) fn mm(index: u8) -> Register {
        Self::MM0.offset(index & 7)
    }

    pub(crate) fn st(index: u8) -> Register {
        Self::ST0.offset(index & 7)
    }

    pub(crate) fn cr(index: u8) -> Register {
        debug_assert!(index < 16);
        Self::CR0.offset(index)
    }

    pub(crate) fn dr(index: u8) -> Register {
        debug_assert!(index < 16);
        Self::DR0.offset(index)
    }

    /// MPX bound register, only BND0..BND3 exist.
    pub(crate) fn bnd(index: u8) -> Option<Register> {
        (index < 4).then(|| Self::BND0.offset(index))
    }

    /// Segment register encoded in ModRM.reg, values 6 and 7 are reserved.
    pub(crate) fn segment(index: u8) -> Option<Register> {
        (index < 6).then(|| Self::ES.offset(index))
    }

    #[inline]
    fn within(self, first: Register, last: Register) -> bool {
        (first as u8..=last as u8).contains(&(self as u8))
    }

    pub fn class(self) -> RegisterClass {
        use Register as R;

        const CLASSES: &[(Register, Register, RegisterClass)] = &[
            (R::AL, R::R15L, RegisterClass::Gpr8),
            (R::AX, R::R15W, RegisterClass::Gpr16),
            (R::EAX, R::R15D, RegisterClass::Gpr32),
            (R::RAX, R::R15, RegisterClass::Gpr64),
            (R::EIP, R::RIP, RegisterClass::Ip),
            (R::ES, R::GS, RegisterClass::Segment),
            (R::XMM0, R::XMM31, RegisterClass::Xmm),
            (R::YMM0, R::YMM31, RegisterClass::Ymm),
            (R::ZMM0, R::ZMM31, RegisterClass::Zmm),
            (R::K0, R::K7, RegisterClass::Mask),
            (R::CR0, R::CR15, RegisterClass::Control),
            (R::DR0, R::DR15, RegisterClass::Debug),
            (R::ST0, R::ST7, RegisterClass::St),
            (R::MM0, R::MM7, RegisterClass::Mm),
            (R::BND0, R::BND3, RegisterClass::Bound),
        ];

        CLASSES
            .iter()
            .find(|(first, last, _)| self.within(*first, *last))
            .map_or(RegisterClass::None, |(_, _, class)| *class)
    }

    /// Register number inside its register file.
    pub fn number(self) -> u8 {
        use Register as R;

        let base = match self.class() {
            RegisterClass::None => R::None,
            RegisterClass::Gpr8 => {
                return if self.within(R::AH, R::BH) {
                    self as u8 - R::AH as u8 + 4
                } else if self.within(R::SPL, R::R15L) {
                    self as u8 - R::SPL as u8 + 4
                } else {
                    self as u8 - R::AL as u8
                };
            }
            RegisterClass::Gpr16 => R::AX,
            RegisterClass::Gpr32 => R::EAX,
            RegisterClass::Gpr64 => R::RAX,
            RegisterClass::Ip => R::EIP,
            RegisterClass::Segment => R::ES,
            RegisterClass::Xmm => R::XMM0,
            RegisterClass::Ymm => R::YMM0,
            RegisterClass::Zmm => R::ZMM0,
            RegisterClass::Mask => R::K0,
            RegisterClass::Control => R::CR0,
            RegisterClass::Debug => R::DR0,
            RegisterClass::St => R::ST0,
            RegisterClass::Mm => R::MM0,
            RegisterClass::Bound => R::BND0,
        };
        self as u8 - base as u8
    }

    /// Size of the register in bytes, zero for [`Register::None`].
    pub fn size(self) -> usize {
        match self.class() {
            RegisterClass::None => 0,
            RegisterClass::Gpr8 => 1,
            RegisterClass::Gpr16 | RegisterClass::Segment => 2,
            RegisterClass::Gpr32 => 4,
            RegisterClass::Gpr64 | RegisterClass::Mm | RegisterClass::Mask => 8,
            RegisterClass::Ip => match self {
                Self::EIP => 4,
                _ => 8,
            },
            RegisterClass::Xmm | RegisterClass::Bound => 16,
            RegisterClass::Ymm => 32,
            RegisterClass::Zmm => 64,
            RegisterClass::Control | RegisterClass::Debug => 8,
            RegisterClass::St => 10,
        }
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}

impl fmt::Display for Register {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpr8() {
        assert_eq!(Register::gpr8(4, false), Register::AH);
        assert_eq!(Register::gpr8(7, false), Register::BH);
        assert_eq!(Register::gpr8(4, true), Register::SPL);
        assert_eq!(Register::gpr8(7, true), Register::DIL);
        assert_eq!(Register::gpr8(8, true), Register::R8L);
        assert_eq!(Register::gpr8(15, true), Register::R15L);
        assert_eq!(Register::gpr8(3, true), Register::BL);
    }

    #[test]
    fn extended() {
        for i in 0..16 {
            assert_eq!(Register::gpr64(i).number(), i);
            assert_eq!(Register::gpr64(i).class(), RegisterClass::Gpr64);
            assert_eq!(Register::gpr8(i, true).number(), i);
            assert_eq!(Register::cr(i).class(), RegisterClass::Control);
        }
        for i in 0..32 {
            assert_eq!(Register::xmm(i).number(), i);
            assert_eq!(Register::ymm(i).class(), RegisterClass::Ymm);
            assert_eq!(Register::vector(2, i), Register::zmm(i));
        }
        assert_eq!(Register::gpr8(5, false).number(), 5);
    }

    #[test]
    fn segments() {
        assert_eq!(Register::segment(0), Some(Register::ES));
        assert_eq!(Register::segment(5), Some(Register::GS));
        assert_eq!(Register::segment(6), None);
        assert_eq!(Register::GS.size(), 2);
    }

    #[test]
    fn bound() {
        assert_eq!(Register::bnd(3), Some(Register::BND3));
        assert_eq!(Register::bnd(4), None);
        assert_eq!(Register::BND2.class(), RegisterClass::Bound);
        assert_eq!(Register::BND2.number(), 2);
        assert_eq!(Register::BND0.size(), 16);
    }
}
