use super::{Inner, Mandatory};
use crate::{register::Register, Bitness, Result};

const PREFIX_ES: u8 = 0x26;
const PREFIX_CS: u8 = 0x2e;
const PREFIX_SS: u8 = 0x36;
const PREFIX_DS: u8 = 0x3e;
const PREFIX_FS: u8 = 0x64;
const PREFIX_GS: u8 = 0x65;
const PREFIX_OPERAND_SIZE: u8 = 0x66;
const PREFIX_ADDRESS_SIZE: u8 = 0x67;
const PREFIX_LOCK: u8 = 0xf0;
const PREFIX_REPNZ: u8 = 0xf2;
const PREFIX_REPZ: u8 = 0xf3;
const PREFIX_REX: u8 = 0x40;
const PREFIX_REX_MASK: u8 = 0xf0;

impl Inner<'_> {
    /// Consumes legacy and REX prefixes and returns the first byte after them.
    pub(super) fn scan_prefixes(&mut self) -> Result<u8> {
        let is64 = self.is64();
        let mut rex = 0;
        let byte = loop {
            let byte = self.bytes.read_u8()?;
            match byte {
                PREFIX_ES | PREFIX_CS | PREFIX_SS | PREFIX_DS => {
                    // ignored after FS/GS in 64-bit mode
                    if !(is64 && matches!(self.segment, Register::FS | Register::GS)) {
                        self.segment = match byte {
                            PREFIX_ES => Register::ES,
                            PREFIX_CS => Register::CS,
                            PREFIX_SS => Register::SS,
                            _ => Register::DS,
                        };
                    }
                }
                PREFIX_FS => self.segment = Register::FS,
                PREFIX_GS => self.segment = Register::GS,
                PREFIX_OPERAND_SIZE => {
                    self.has_66 = true;
                    if self.mandatory == Mandatory::None {
                        self.mandatory = Mandatory::P66;
                    }
                }
                PREFIX_ADDRESS_SIZE => self.has_67 = true,
                PREFIX_LOCK => self.lock = true,
                PREFIX_REPNZ => {
                    self.repne = true;
                    self.mandatory = Mandatory::PF2;
                }
                PREFIX_REPZ => {
                    self.repe = true;
                    self.mandatory = Mandatory::PF3;
                }
                _ if is64 && byte & PREFIX_REX_MASK == PREFIX_REX => {
                    rex = byte;
                    continue;
                }
                _ => break byte,
            }
            // REX must immediately precede the opcode
            rex = 0;
        };

        self.set_rex(rex);
        self.osz = match (self.w, self.has_66, self.opts.bitness) {
            (true, _, _) => 64,
            (false, true, Bitness::Bits16) => 32,
            (false, true, _) => 16,
            (false, false, _) => self.default_osz(),
        };
        self.asz = match (self.opts.bitness, self.has_67) {
            (Bitness::Bits16, false) | (Bitness::Bits32, true) => 16,
            (Bitness::Bits16, true) | (Bitness::Bits32, false) | (Bitness::Bits64, true) => 32,
            (Bitness::Bits64, false) => 64,
        };
        Ok(byte)
    }

    fn set_rex(&mut self, rex: u8) {
        self.rex = rex;
        self.w = rex & 8 != 0;
        self.r = (rex & 4) << 1;
        self.x = (rex & 2) << 2;
        self.b = (rex & 1) << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn scan(bitness: Bitness, bytes: &[u8]) -> (u8, u8, u8, u8, Register) {
        let opts = Options {
            bitness,
            ..Options::default()
        };
        let mut inner = Inner::new(&opts, 0, bytes);
        let byte = inner.scan_prefixes().unwrap();
        (byte, inner.osz, inner.asz, inner.rex, inner.segment)
    }

    #[test]
    fn sizes() {
        assert_eq!(scan(Bitness::Bits64, &[0x90]), (0x90, 32, 64, 0, Register::None));
        assert_eq!(scan(Bitness::Bits64, &[0x66, 0x67, 0x90]).1, 16);
        assert_eq!(scan(Bitness::Bits64, &[0x66, 0x67, 0x90]).2, 32);
        assert_eq!(scan(Bitness::Bits32, &[0x66, 0x67, 0x90]).1, 16);
        assert_eq!(scan(Bitness::Bits32, &[0x67, 0x90]).2, 16);
        assert_eq!(scan(Bitness::Bits16, &[0x66, 0x67, 0x90]).1, 32);
        assert_eq!(scan(Bitness::Bits16, &[0x67, 0x90]).2, 32);
        assert_eq!(scan(Bitness::Bits16, &[0x90]).2, 16);
    }

    #[test]
    fn rex() {
        assert_eq!(scan(Bitness::Bits64, &[0x66, 0x48, 0x01]).1, 64);
        assert_eq!(scan(Bitness::Bits64, &[0x48, 0x66, 0x01]).1, 16);
        assert_eq!(scan(Bitness::Bits64, &[0x4f, 0x48, 0x01]).3, 0x48);
        assert_eq!(scan(Bitness::Bits32, &[0x48, 0x01]), (0x48, 32, 32, 0, Register::None));
    }

    #[test]
    fn segments() {
        assert_eq!(scan(Bitness::Bits64, &[0x64, 0x2e, 0x90]).4, Register::FS);
        assert_eq!(scan(Bitness::Bits32, &[0x64, 0x2e, 0x90]).4, Register::CS);
        assert_eq!(scan(Bitness::Bits64, &[0x2e, 0x65, 0x90]).4, Register::GS);
        assert_eq!(scan(Bitness::Bits16, &[0x26, 0x36, 0x90]).4, Register::SS);
    }

    #[test]
    fn mandatory() {
        let opts = Options::default();
        let mut inner = Inner::new(&opts, 0, &[0xf2, 0x66, 0xf3, 0x0f]);
        assert_eq!(inner.scan_prefixes(), Ok(0x0f));
        assert_eq!(inner.mandatory, Mandatory::PF3);
        assert!(inner.repe && inner.repne);

        let mut inner = Inner::new(&opts, 0, &[0x66, 0xf2, 0x0f]);
        inner.scan_prefixes().unwrap();
        assert_eq!(inner.mandatory, Mandatory::PF2);

        let mut inner = Inner::new(&opts, 0, &[0x66, 0x66]);
        assert_eq!(inner.scan_prefixes(), Err(xdec_core::error::Error::More(3)));
    }
}
