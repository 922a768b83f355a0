use super::Inner;
use crate::{
    instruction::{EncodingKind, Memory},
    memory_size::MemorySize,
    register::Register,
    Result,
};

const MODE_REGISTER_DIRECT: u8 = 3;

/// Base and index of the 16-bit ModRM.rm forms.
const RM16: [(Register, Register); 8] = [
    (Register::BX, Register::SI),
    (Register::BX, Register::DI),
    (Register::BP, Register::SI),
    (Register::BP, Register::DI),
    (Register::SI, Register::None),
    (Register::DI, Register::None),
    (Register::BP, Register::None),
    (Register::BX, Register::None),
];

impl Inner<'_> {
    /// Returns the ModRM byte, reading it on first use.
    pub(super) fn modrm(&mut self) -> Result<u8> {
        match self.modrm {
            Some(modrm) => Ok(modrm),
            None => {
                let modrm = self.bytes.read_u8()?;
                self.modrm = Some(modrm);
                Ok(modrm)
            }
        }
    }

    pub(super) fn is_register_form(&mut self) -> Result<bool> {
        Ok(self.modrm()? >> 6 == MODE_REGISTER_DIRECT)
    }

    /// Default segment of a memory operand.
    fn segment_for(&self, base: Register) -> Register {
        if !self.segment.is_none() {
            return self.segment;
        }
        match base {
            Register::BP | Register::EBP | Register::RBP => Register::SS,
            Register::SP | Register::ESP | Register::RSP => Register::SS,
            _ => Register::DS,
        }
    }

    /// Address register of the current address size.
    fn address_gpr(&self, index: u8) -> Register {
        Register::gpr(self.asz / 8, index, false)
    }

    /// Reads a sign-extended displacement and records where it is.
    fn read_displ(&mut self, size: u8) -> Result<i64> {
        self.offsets.displacement_offset = self.bytes.offset() as u8;
        self.offsets.displacement_size = size;
        Ok(match size {
            1 => self.bytes.read_i8()? as i64,
            2 => self.bytes.read_i16()? as i64,
            _ => self.bytes.read_i32()? as i64,
        })
    }

    /// Decodes a VSIB memory operand, the SIB index selects a vector register of length `vl`.
    pub(super) fn decode_vsib(&mut self, size: MemorySize, vl: u8) -> Result<Memory> {
        let modrm = self.modrm()?;
        self.check(self.asz != 16 && modrm & 7 == 4, "VSIB without a SIB byte")?;
        self.vsib = Some(vl);
        let mem = self.decode_mem(size);
        self.vsib = None;
        mem
    }

    /// Decodes the memory form of ModRM.rm.
    pub(super) fn decode_mem(&mut self, size: MemorySize) -> Result<Memory> {
        let modrm = self.modrm()?;
        let mode = modrm >> 6;
        let rm = modrm & 7;
        debug_assert!(mode != MODE_REGISTER_DIRECT);
        let mut mem = if self.asz == 16 {
            self.decode_mem16(mode, rm)?
        } else {
            self.decode_mem32(mode, rm)?
        };
        mem.segment = self.segment_for(mem.base);
        mem.size = size;
        if self.encoding == EncodingKind::Evex && mem.displ_size == 1 {
            self.disp8 = true;
        }
        Ok(mem)
    }

    fn decode_mem16(&mut self, mode: u8, rm: u8) -> Result<Memory> {
        let (base, index) = RM16[rm as usize];
        let mut mem = Memory {
            base,
            index,
            scale: 1,
            ..Memory::default()
        };
        match mode {
            0 if rm == 6 => {
                mem.base = Register::None;
                mem.displacement = self.read_displ(2)?;
                mem.displ_size = 2;
            }
            0 => {}
            1 => {
                mem.displacement = self.read_displ(1)?;
                mem.displ_size = 1;
            }
            _ => {
                mem.displacement = self.read_displ(2)?;
                mem.displ_size = 2;
            }
        }
        Ok(mem)
    }

    fn decode_mem32(&mut self, mode: u8, rm: u8) -> Result<Memory> {
        let mut mem = Memory {
            scale: 1,
            ..Memory::default()
        };
        if rm == 4 {
            let sib = self.bytes.read_u8()?;
            let index = (sib >> 3) & 7 | self.x;
            match self.vsib {
                Some(vl) => {
                    mem.index = Register::vector(vl, index | self.vsib_hi);
                    mem.scale = 1 << (sib >> 6);
                }
                None if index != 4 => {
                    mem.index = self.address_gpr(index);
                    mem.scale = 1 << (sib >> 6);
                }
                None => {}
            }
            if mode == 0 && sib & 7 == 5 {
                mem.displacement = self.read_displ(4)?;
                mem.displ_size = 4;
                return Ok(mem);
            }
            mem.base = self.address_gpr(sib & 7 | self.b);
        } else if mode == 0 && rm == 5 {
            mem.base = match (self.is64(), self.asz) {
                (false, _) => Register::None,
                (true, 32) => Register::EIP,
                (true, _) => Register::RIP,
            };
            mem.displacement = self.read_displ(4)?;
            mem.displ_size = 4;
            return Ok(mem);
        } else {
            mem.base = self.address_gpr(rm | self.b);
        }

        match mode {
            1 => {
                mem.displacement = self.read_displ(1)?;
                mem.displ_size = 1;
            }
            2 => {
                mem.displacement = self.read_displ(4)?;
                mem.displ_size = 4;
            }
            _ => {}
        }
        Ok(mem)
    }

    /// Memory offset operand of A0-A3, the displacement has the address size.
    pub(super) fn decode_moffs(&mut self, size: MemorySize) -> Result<Memory> {
        self.offsets.displacement_offset = self.bytes.offset() as u8;
        self.offsets.displacement_size = self.asz / 8;
        let displacement = match self.asz {
            16 => self.bytes.read_u16()? as i64,
            32 => self.bytes.read_u32()? as i64,
            _ => self.bytes.read_u64()? as i64,
        };
        Ok(Memory {
            segment: self.segment_for(Register::None),
            scale: 1,
            displacement,
            displ_size: self.asz / 8,
            size,
            ..Memory::default()
        })
    }

    /// String operand DS:rSI or ES:rDI.
    pub(super) fn string_mem(&self, destination: bool, size: MemorySize) -> Memory {
        let (segment, base) = if destination {
            (Register::ES, self.address_gpr(7))
        } else {
            (self.segment_for(Register::None), self.address_gpr(6))
        };
        Memory {
            segment,
            base,
            scale: 1,
            size,
            ..Memory::default()
        }
    }

    /// MASKMOVQ/MASKMOVDQU destination DS:[rDI].
    pub(super) fn xdi_mem(&self, size: MemorySize) -> Memory {
        Memory {
            segment: self.segment_for(Register::None),
            base: self.address_gpr(7),
            scale: 1,
            size,
            ..Memory::default()
        }
    }

    /// XLAT operand DS:[rBX+AL].
    pub(super) fn xlat_mem(&self) -> Memory {
        Memory {
            segment: self.segment_for(Register::None),
            base: self.address_gpr(3),
            index: Register::AL,
            scale: 1,
            size: MemorySize::UInt8,
            ..Memory::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bitness, Error, Options};

    fn mem(bitness: Bitness, prefix: &[u8], bytes: &[u8]) -> (Memory, usize) {
        let opts = Options {
            bitness,
            ..Options::default()
        };
        let mut data = prefix.to_vec();
        data.push(0x8b);
        data.extend_from_slice(bytes);
        let mut inner = Inner::new(&opts, 0, &data);
        assert_eq!(inner.scan_prefixes(), Ok(0x8b));
        let mem = inner.decode_mem(MemorySize::UInt32).unwrap();
        (mem, inner.bytes.offset())
    }

    #[test]
    fn addressing16() {
        let (m, len) = mem(Bitness::Bits16, &[], &[0x42, 0xfe]);
        assert_eq!((m.base, m.index), (Register::BP, Register::SI));
        assert_eq!((m.displacement, m.displ_size), (-2, 1));
        assert_eq!(m.segment, Register::SS);
        assert_eq!(len, 3);

        let (m, len) = mem(Bitness::Bits16, &[], &[0x06, 0x34, 0x12]);
        assert_eq!((m.base, m.index), (Register::None, Register::None));
        assert_eq!((m.displacement, m.displ_size), (0x1234, 2));
        assert_eq!(m.segment, Register::DS);
        assert_eq!(len, 4);

        let (m, _) = mem(Bitness::Bits32, &[0x67], &[0x00]);
        assert_eq!((m.base, m.index), (Register::BX, Register::SI));
    }

    #[test]
    fn sib() {
        // [rax+rcx*4+0x10]
        let (m, len) = mem(Bitness::Bits64, &[], &[0x44, 0x88, 0x10]);
        assert_eq!((m.base, m.index, m.scale), (Register::RAX, Register::RCX, 4));
        assert_eq!((m.displacement, m.displ_size), (0x10, 1));
        assert_eq!(len, 4);

        // [r12] with REX.B, index 100 is none
        let (m, _) = mem(Bitness::Bits64, &[0x41], &[0x04, 0x24]);
        assert_eq!((m.base, m.index), (Register::R12, Register::None));
        assert_eq!(m.segment, Register::DS);

        // [r12*1+...] with REX.X
        let (m, _) = mem(Bitness::Bits64, &[0x42], &[0x04, 0x24]);
        assert_eq!((m.base, m.index), (Register::RSP, Register::R12));
        assert_eq!(m.segment, Register::SS);

        // no base, disp32
        let (m, len) = mem(Bitness::Bits32, &[], &[0x04, 0x8d, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!((m.base, m.index, m.scale), (Register::None, Register::ECX, 4));
        assert_eq!((m.displacement, m.displ_size), (-0x8000_0000, 4));
        assert_eq!(len, 7);
    }

    #[test]
    fn ip_relative() {
        let (m, len) = mem(Bitness::Bits64, &[], &[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!((m.base, m.displacement, m.displ_size), (Register::RIP, 0x10, 4));
        assert_eq!(len, 6);

        let (m, _) = mem(Bitness::Bits64, &[0x67], &[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(m.base, Register::EIP);

        let (m, _) = mem(Bitness::Bits32, &[], &[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(m.base, Register::None);
    }

    #[test]
    fn displacement_offset() {
        let opts = Options::default();
        // mov eax, [rax+rcx*4+0x10]
        let mut inner = Inner::new(&opts, 0, &[0x8b, 0x44, 0x88, 0x10]);
        inner.scan_prefixes().unwrap();
        inner.decode_mem(MemorySize::UInt32).unwrap();
        assert_eq!(inner.offsets.displacement_offset, 3);
        assert_eq!(inner.offsets.displacement_size, 1);
    }

    #[test]
    fn vsib_index() {
        let opts = Options::default();
        let mut inner = Inner::new(&opts, 0, &[0x8b, 0x04, 0xa9]);
        inner.scan_prefixes().unwrap();
        inner.x = 8;
        inner.vsib_hi = 16;
        let m = inner.decode_vsib(MemorySize::Float32, 2).unwrap();
        assert_eq!((m.base, m.index, m.scale), (Register::RCX, Register::ZMM29, 4));

        let opts = Options {
            bitness: Bitness::Bits16,
            ..Options::default()
        };
        let mut inner = Inner::new(&opts, 0, &[0x8b, 0x04, 0xa9]);
        inner.scan_prefixes().unwrap();
        assert_eq!(inner.decode_vsib(MemorySize::Float32, 0), Err(Error::InvalidEncoding));
    }

    #[test]
    fn segment_override() {
        let (m, _) = mem(Bitness::Bits64, &[0x65], &[0x45, 0x00]);
        assert_eq!((m.segment, m.base), (Register::GS, Register::RBP));
    }
}
