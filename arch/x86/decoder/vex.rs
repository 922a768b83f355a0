use xdec_core::{error::Error, macros::impl_field};

use super::{Inner, Mandatory};
use crate::{
    instruction::EncodingKind,
    table::{self, Entry},
    Result,
};

fn inv(x: u32) -> u32 {
    x ^ 1
}

fn inv4(x: u32) -> u32 {
    x ^ 15
}

/// VEX prefix in the 3-byte layout, fields are returned un-inverted. XOP uses the same
/// layout with maps 8 to 10.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Vex(u32);

impl Vex {
    pub(super) fn new(b1: u8, b2: u8) -> Self {
        Self(b1 as u32 | (b2 as u32) << 8)
    }

    /// Expands the single payload byte of C5 into the C4 layout.
    pub(super) fn from_vex2(b: u8) -> Self {
        Self::new((b & 0x80) | 0x61, b & 0x7f)
    }

    fn raw(&self) -> u32 {
        self.0
    }

    impl_field! {
        pub(super) r = 7, 1, u8, inv;
        pub(super) x = 6, 1, u8, inv;
        pub(super) b = 5, 1, u8, inv;
        pub(super) map = 0, 5, u8;
        pub(super) w = 15, 1, bool;
        pub(super) vvvv = 11, 4, u8, inv4;
        pub(super) l = 10, 1, u8;
        pub(super) pp = 8, 2, u8;
    }
}

/// EVEX payload P0..P2, fields are returned un-inverted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct Evex(u32);

impl Evex {
    pub(super) fn new(p: [u8; 3]) -> Self {
        Self(u32::from_le_bytes([p[0], p[1], p[2], 0]))
    }

    fn raw(&self) -> u32 {
        self.0
    }

    impl_field! {
        pub(super) r = 7, 1, u8, inv;
        pub(super) x = 6, 1, u8, inv;
        pub(super) b = 5, 1, u8, inv;
        pub(super) r2 = 4, 1, u8, inv;
        pub(super) reserved = 2, 2, u8;
        pub(super) map = 0, 2, u8;
        pub(super) w = 15, 1, bool;
        pub(super) vvvv = 11, 4, u8, inv4;
        pub(super) fixed = 10, 1, bool;
        pub(super) pp = 8, 2, u8;
        pub(super) z = 23, 1, bool;
        pub(super) ll = 21, 2, u8;
        pub(super) bcst = 20, 1, bool;
        pub(super) v2 = 19, 1, u8, inv;
        pub(super) aaa = 16, 3, u8;
    }
}

impl Inner<'_> {
    /// Parses the prefix introduced by C4, C5 or 62 and looks up the opcode.
    pub(super) fn decode_vex_prefix(&mut self, byte: u8) -> Result<&'static Entry> {
        let map = match byte {
            0xc5 => {
                let b = self.bytes.read_u8()?;
                self.set_vex(Vex::from_vex2(b))?
            }
            0xc4 => {
                let [b1, b2] = self.bytes.read_array()?;
                self.set_vex(Vex::new(b1, b2))?
            }
            _ => {
                let p = self.bytes.read_array()?;
                self.set_evex(Evex::new(p))?
            }
        };
        self.opcode = self.bytes.read_u8()?;
        Ok(&map[self.opcode as usize])
    }

    /// Parses the three byte XOP prefix after 8F and looks up the opcode.
    pub(super) fn decode_xop_prefix(&mut self) -> Result<&'static Entry> {
        let [b1, b2] = self.bytes.read_array()?;
        let map = self.set_xop(Vex::new(b1, b2))?;
        self.opcode = self.bytes.read_u8()?;
        Ok(&map[self.opcode as usize])
    }

    fn check_legacy_before_vex(&self) -> Result {
        self.check(
            self.rex == 0 && self.mandatory == Mandatory::None,
            "REX or mandatory prefix before VEX/EVEX",
        )
    }

    fn set_vex(&mut self, vex: Vex) -> Result<&'static [Entry; 256]> {
        self.check_legacy_before_vex()?;
        let map = match vex.map() {
            1 => &table::VEX_0F,
            2 => &table::VEX_0F38,
            3 => &table::VEX_0F3A,
            _ => return Err(Error::InvalidOpcode),
        };
        self.encoding = EncodingKind::Vex;
        self.set_vex_fields(vex);
        Ok(map)
    }

    fn set_xop(&mut self, xop: Vex) -> Result<&'static [Entry; 256]> {
        self.check_legacy_before_vex()?;
        let map = match xop.map() {
            8 => &table::XOP_8,
            9 => &table::XOP_9,
            10 => &table::XOP_A,
            _ => return Err(Error::InvalidOpcode),
        };
        self.encoding = EncodingKind::Xop;
        self.set_vex_fields(xop);
        Ok(map)
    }

    fn set_vex_fields(&mut self, vex: Vex) {
        self.w = vex.w();
        if self.is64() {
            self.r = vex.r() << 3;
            self.x = vex.x() << 3;
            self.b = vex.b() << 3;
            self.vvvv = vex.vvvv();
        } else {
            self.vvvv = vex.vvvv() & 7;
        }
        self.vl = vex.l();
        self.mandatory = Mandatory::from_pp(vex.pp());
        self.set_vector_operand_size();
    }

    fn set_evex(&mut self, evex: Evex) -> Result<&'static [Entry; 256]> {
        self.check_legacy_before_vex()?;
        if !evex.fixed() {
            return Err(self.reject("MVEX"));
        }
        if evex.reserved() != 0 {
            return Err(self.reject("EVEX reserved bits"));
        }
        let map = match evex.map() {
            1 => &table::EVEX_0F,
            2 => &table::EVEX_0F38,
            3 => &table::EVEX_0F3A,
            _ => return Err(Error::InvalidOpcode),
        };
        self.check(!evex.z() || evex.aaa() != 0, "zeroing without opmask")?;
        self.encoding = EncodingKind::Evex;
        self.w = evex.w();
        if self.is64() {
            self.r = evex.r() << 3 | evex.r2() << 4;
            self.x = evex.x() << 3;
            self.b = evex.b() << 3;
            self.vx = evex.x() << 4;
            self.vsib_hi = evex.v2() << 4;
            self.vvvv = evex.v2() << 4 | evex.vvvv();
        } else {
            self.check(evex.v2() == 0, "EVEX.V' outside of 64-bit mode")?;
            self.vvvv = evex.vvvv() & 7;
        }
        self.vl = evex.ll();
        self.aaa = evex.aaa();
        self.z = evex.z();
        self.bcst = evex.bcst();
        self.mandatory = Mandatory::from_pp(evex.pp());
        self.set_vector_operand_size();
        Ok(map)
    }

    /// VEX/EVEX.W selects 64-bit operands only in 64-bit mode.
    fn set_vector_operand_size(&mut self) {
        self.osz = if self.w && self.is64() {
            64
        } else {
            self.default_osz()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vex3() {
        let vex = Vex::new(0xe2, 0x49);
        assert_eq!((vex.r(), vex.x(), vex.b()), (0, 0, 0));
        assert_eq!(vex.map(), 2);
        assert!(!vex.w());
        assert_eq!(vex.vvvv(), 6);
        assert_eq!(vex.l(), 0);
        assert_eq!(vex.pp(), 1);

        let vex = Vex::new(0x41, 0xfd);
        assert_eq!((vex.r(), vex.x(), vex.b()), (1, 0, 1));
        assert!(vex.w());
        assert_eq!(vex.vvvv(), 0);
        assert_eq!(vex.l(), 1);
    }

    #[test]
    fn vex2() {
        let vex = Vex::from_vex2(0x7c);
        assert_eq!(vex, Vex::new(0x61, 0x7c));
        assert_eq!((vex.r(), vex.x(), vex.b()), (1, 0, 0));
        assert_eq!(vex.map(), 1);
        assert!(!vex.w());
        assert_eq!(vex.vvvv(), 0);
        assert_eq!(vex.l(), 1);
        assert_eq!(vex.pp(), 0);
    }

    #[test]
    fn xop() {
        let xop = Vex::new(0xe8, 0x48);
        assert_eq!((xop.r(), xop.x(), xop.b()), (0, 0, 0));
        assert_eq!(xop.map(), 8);
        assert!(!xop.w());
        assert_eq!(xop.vvvv(), 6);
        assert_eq!(xop.l(), 0);
        assert_eq!(xop.pp(), 0);
    }

    #[test]
    fn evex() {
        let evex = Evex::new([0xf1, 0x4d, 0x0b]);
        assert_eq!((evex.r(), evex.x(), evex.b(), evex.r2()), (0, 0, 0, 0));
        assert_eq!(evex.reserved(), 0);
        assert_eq!(evex.map(), 1);
        assert!(!evex.w());
        assert_eq!(evex.vvvv(), 6);
        assert!(evex.fixed());
        assert_eq!(evex.pp(), 1);
        assert!(!evex.z());
        assert_eq!(evex.ll(), 0);
        assert!(!evex.bcst());
        assert_eq!(evex.v2(), 0);
        assert_eq!(evex.aaa(), 3);

        let evex = Evex::new([0x01, 0x7c, 0xdb]);
        assert_eq!((evex.r(), evex.x(), evex.b(), evex.r2()), (1, 1, 1, 1));
        assert!(evex.z());
        assert_eq!(evex.ll(), 2);
        assert!(evex.bcst());
        assert_eq!(evex.v2(), 0);
    }
}
