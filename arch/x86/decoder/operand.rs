//! Operand and size resolution.

use xdec_core::utils::{sign_extend, truncate};

use super::Inner;
use crate::{
    instruction::{EncodingKind, Immediate, Operand},
    memory_size::MemorySize,
    register::Register,
    table::{Op, Template},
    Result,
};

fn reg(reg: Register) -> Operand {
    Operand::Register(reg)
}

fn imm(value: u64, size: u8, encoded_size: u8) -> Operand {
    Operand::Immediate(Immediate {
        value,
        size,
        encoded_size,
    })
}

fn uint(bytes: u8) -> MemorySize {
    match bytes {
        1 => MemorySize::UInt8,
        2 => MemorySize::UInt16,
        4 => MemorySize::UInt32,
        8 => MemorySize::UInt64,
        16 => MemorySize::UInt128,
        32 => MemorySize::UInt256,
        _ => MemorySize::UInt512,
    }
}

impl Inner<'_> {
    /// Operand size in bytes.
    fn v(&self) -> u8 {
        self.osz / 8
    }

    /// 32 or 64 bits in bytes.
    fn y(&self) -> u8 {
        if self.osz == 64 {
            8
        } else {
            4
        }
    }

    /// Operand size capped at 32 bits, in bytes.
    fn z(&self) -> u8 {
        if self.osz == 64 {
            4
        } else {
            self.v()
        }
    }

    fn has_rex(&self) -> bool {
        self.rex != 0
    }

    /// Vector length used by the full width vector operands.
    fn vector_len(&self) -> u8 {
        match self.encoding {
            EncodingKind::Legacy => 0,
            _ => self.vl,
        }
    }

    fn reg_index(&mut self) -> Result<u8> {
        Ok((self.modrm()? >> 3) & 7 | (self.r & 8))
    }

    fn vector_reg_index(&mut self) -> Result<u8> {
        Ok((self.modrm()? >> 3) & 7 | self.r)
    }

    fn rm_index(&mut self) -> Result<u8> {
        Ok(self.modrm()? & 7 | self.b)
    }

    fn vector_rm_index(&mut self) -> Result<u8> {
        Ok(self.modrm()? & 7 | self.b | self.vx)
    }

    fn memory_size(&self, template: &Template, variant: usize, default: MemorySize) -> MemorySize {
        if self.bcst && self.encoding == EncodingKind::Evex {
            return template.bcst[variant];
        }
        match template.mem[variant] {
            MemorySize::Unknown => default,
            size => size,
        }
    }

    /// Register or memory operand in ModRM.rm.
    fn rm(
        &mut self,
        template: &Template,
        variant: usize,
        default: MemorySize,
        reg: impl FnOnce(&mut Self) -> Result<Register>,
    ) -> Result<Operand> {
        if self.is_register_form()? {
            reg(self).map(Operand::Register)
        } else {
            let size = self.memory_size(template, variant, default);
            self.decode_mem(size).map(Operand::Memory)
        }
    }

    fn rm_gpr(&mut self, template: &Template, variant: usize, size: u8) -> Result<Operand> {
        self.rm(template, variant, uint(size), |s| {
            Ok(Register::gpr(size, s.rm_index()?, s.has_rex()))
        })
    }

    fn rm_vector(&mut self, template: &Template, variant: usize, vl: u8) -> Result<Operand> {
        self.rm(template, variant, uint(16 << vl), |s| {
            Ok(Register::vector(vl, s.vector_rm_index()?))
        })
    }

    /// ModRM.rm that must be a register.
    fn rm_register(&mut self) -> Result<u8> {
        if !self.is_register_form()? {
            return Err(self.reject("memory operand in a register only form"));
        }
        self.rm_index()
    }

    fn bound_register(&self, index: u8) -> Result<Register> {
        Register::bnd(index).ok_or_else(|| self.reject("bound register above BND3"))
    }

    fn mask_register(&self, index: u8) -> Result<Register> {
        if index > 7 {
            return Err(self.reject("opmask register above K7"));
        }
        Ok(Register::k(index))
    }

    /// Reads an immediate of `size` bytes and records where it is.
    fn read_imm(&mut self, size: u8) -> Result<u64> {
        let offset = self.bytes.offset() as u8;
        let value = match size {
            1 => self.bytes.read_u8()? as u64,
            2 => self.bytes.read_u16()? as u64,
            4 => self.bytes.read_u32()? as u64,
            _ => self.bytes.read_u64()?,
        };
        let offsets = &mut self.offsets;
        if offsets.immediate_size == 0 {
            offsets.immediate_offset = offset;
            offsets.immediate_size = size;
        } else {
            offsets.immediate_offset2 = offset;
            offsets.immediate_size2 = size;
        }
        Ok(value)
    }

    /// Vector length of a VSIB index.
    fn vsib_len(&self, op: Op) -> u8 {
        match op {
            Op::Vsib => self.vector_len(),
            Op::Vsibh => self.vector_len().saturating_sub(1),
            _ => 0,
        }
    }

    /// Relative branch target, the displacement is the last field of the instruction.
    fn near_branch(&self, rel: i64) -> Operand {
        let next_ip = self.ip.wrapping_add(self.bytes.offset() as u64);
        Operand::NearBranch {
            target: truncate(next_ip.wrapping_add(rel as u64), self.osz as u32),
            size: self.v(),
        }
    }

    pub(super) fn decode_operand(
        &mut self,
        template: &Template,
        variant: usize,
        op: Op,
        position: usize,
    ) -> Result<Operand> {
        let operand = match op {
            Op::Gb => reg(Register::gpr8(self.reg_index()?, self.has_rex())),
            Op::Gw => reg(Register::gpr16(self.reg_index()?)),
            Op::Gd => reg(Register::gpr32(self.reg_index()?)),
            Op::Gq => reg(Register::gpr64(self.reg_index()?)),
            Op::Gv => reg(Register::gpr(self.v(), self.reg_index()?, false)),
            Op::Gy => reg(Register::gpr(self.y(), self.reg_index()?, false)),
            Op::Eb => self.rm_gpr(template, variant, 1)?,
            Op::Ew => self.rm_gpr(template, variant, 2)?,
            Op::Ed => self.rm_gpr(template, variant, 4)?,
            Op::Ev => self.rm_gpr(template, variant, self.v())?,
            Op::Ey => self.rm_gpr(template, variant, self.y())?,
            Op::Ez => self.rm_gpr(template, variant, self.z())?,
            Op::Rv => reg(Register::gpr(self.v(), self.rm_register()?, false)),
            Op::Ry => reg(Register::gpr(self.y(), self.rm_register()?, false)),
            Op::Rn => {
                let size = if self.is64() { 8 } else { 4 };
                reg(Register::gpr(size, self.rm_index()?, false))
            }
            Op::M => {
                if self.is_register_form()? {
                    return Err(self.reject("register operand in a memory only form"));
                }
                let size = self.memory_size(template, variant, MemorySize::Unknown);
                Operand::Memory(self.decode_mem(size)?)
            }
            Op::By => reg(Register::gpr(self.y(), self.vvvv & 15, false)),
            Op::Sw => {
                let index = (self.modrm()? >> 3) & 7;
                let sreg = match Register::segment(index) {
                    Some(sreg) => sreg,
                    None => return Err(self.reject("reserved segment register")),
                };
                if position == 0 {
                    self.check(sreg != Register::CS, "CS destination")?;
                }
                reg(sreg)
            }
            Op::Cr => reg(Register::cr(self.reg_index()?)),
            Op::Dr => reg(Register::dr(self.reg_index()?)),
            Op::Zb => reg(Register::gpr8(self.opcode & 7 | self.b, self.has_rex())),
            Op::Zv => reg(Register::gpr(self.v(), self.opcode & 7 | self.b, false)),
            Op::AL => reg(Register::AL),
            Op::AX => reg(Register::AX),
            Op::CL => reg(Register::CL),
            Op::DX => reg(Register::DX),
            Op::Acc => reg(Register::gpr(self.v(), 0, false)),
            Op::Accz => reg(Register::gpr(self.z(), 0, false)),
            Op::ES => reg(Register::ES),
            Op::CS => reg(Register::CS),
            Op::SS => reg(Register::SS),
            Op::DS => reg(Register::DS),
            Op::FS => reg(Register::FS),
            Op::GS => reg(Register::GS),
            Op::One => imm(1, 1, 0),
            Op::Ib | Op::Ib2 => imm(self.read_imm(1)?, 1, 1),
            Op::Ibs => {
                let value = sign_extend(self.read_imm(1)?, 8);
                imm(truncate(value, self.osz as u32), self.v(), 1)
            }
            Op::Iw => imm(self.read_imm(2)?, 2, 2),
            Op::Id => imm(self.read_imm(4)?, 4, 4),
            Op::Iz => match self.osz {
                16 => imm(self.read_imm(2)?, 2, 2),
                32 => imm(self.read_imm(4)?, 4, 4),
                _ => imm(sign_extend(self.read_imm(4)?, 32), 8, 4),
            },
            Op::Iv => match self.osz {
                16 => imm(self.read_imm(2)?, 2, 2),
                32 => imm(self.read_imm(4)?, 4, 4),
                _ => imm(self.read_imm(8)?, 8, 8),
            },
            Op::Jb => {
                let rel = sign_extend(self.read_imm(1)?, 8) as i64;
                self.near_branch(rel)
            }
            Op::Jz => {
                let rel = match self.osz {
                    16 => sign_extend(self.read_imm(2)?, 16),
                    _ => sign_extend(self.read_imm(4)?, 32),
                };
                self.near_branch(rel as i64)
            }
            Op::Jabs => {
                let (target, size) = match self.osz {
                    16 => (self.read_imm(2)?, 2),
                    _ => (self.read_imm(4)?, 4),
                };
                Operand::NearBranch { target, size }
            }
            Op::Ap => {
                let (offset, size) = match self.osz {
                    16 => (self.read_imm(2)? as u32, 2),
                    _ => (self.read_imm(4)? as u32, 4),
                };
                let selector = self.read_imm(2)? as u16;
                Operand::FarBranch {
                    selector,
                    offset,
                    size,
                }
            }
            Op::Ob => Operand::Memory(self.decode_moffs(MemorySize::UInt8)?),
            Op::Ov => Operand::Memory(self.decode_moffs(uint(self.v()))?),
            Op::Xb => Operand::Memory(self.string_mem(false, MemorySize::UInt8)),
            Op::Xv => Operand::Memory(self.string_mem(false, uint(self.v()))),
            Op::Xz => Operand::Memory(self.string_mem(false, uint(self.z()))),
            Op::Yb => Operand::Memory(self.string_mem(true, MemorySize::UInt8)),
            Op::Yv => Operand::Memory(self.string_mem(true, uint(self.v()))),
            Op::Yz => Operand::Memory(self.string_mem(true, uint(self.z()))),
            Op::Xdi => {
                let size = self.memory_size(template, variant, MemorySize::UInt64);
                Operand::Memory(self.xdi_mem(size))
            }
            Op::Xlat => Operand::Memory(self.xlat_mem()),
            Op::St0 => reg(Register::ST0),
            Op::Sti => reg(Register::st(self.modrm()?)),
            Op::Bnd => {
                let index = self.reg_index()?;
                reg(self.bound_register(index)?)
            }
            Op::Bndm => self.rm(template, variant, MemorySize::Unknown, |s| {
                let index = s.rm_index()?;
                s.bound_register(index)
            })?,
            Op::P => reg(Register::mm(self.modrm()? >> 3)),
            Op::Q => self.rm(template, variant, MemorySize::UInt64, |s| {
                Ok(Register::mm(s.modrm()?))
            })?,
            Op::N => {
                let index = self.rm_register()?;
                reg(Register::mm(index))
            }
            Op::V => {
                let vl = self.vector_len();
                reg(Register::vector(vl, self.vector_reg_index()?))
            }
            Op::Vx => reg(Register::xmm(self.vector_reg_index()?)),
            Op::Vh => {
                let vl = self.vector_len().saturating_sub(1);
                reg(Register::vector(vl, self.vector_reg_index()?))
            }
            Op::H => reg(Register::vector(self.vector_len(), self.vvvv)),
            Op::Hx => reg(Register::xmm(self.vvvv)),
            Op::W => self.rm_vector(template, variant, self.vector_len())?,
            Op::Wx => self.rm_vector(template, variant, 0)?,
            Op::Wh => {
                let vl = self.vector_len().saturating_sub(1);
                self.rm_vector(template, variant, vl)?
            }
            Op::Wy => self.rm_vector(template, variant, 1)?,
            Op::Vsib | Op::Vsibh | Op::Vsibx => {
                if self.is_register_form()? {
                    return Err(self.reject("register operand in a VSIB form"));
                }
                let size = self.memory_size(template, variant, MemorySize::Unknown);
                Operand::Memory(self.decode_vsib(size, self.vsib_len(op))?)
            }
            Op::U | Op::Ux => {
                if !self.is_register_form()? {
                    return Err(self.reject("memory operand in a register only form"));
                }
                let vl = if op == Op::U { self.vector_len() } else { 0 };
                reg(Register::vector(vl, self.vector_rm_index()?))
            }
            Op::Is4 | Op::Is4x => {
                let mut index = self.bytes.read_u8()? >> 4;
                if !self.is64() {
                    index &= 7;
                }
                let vl = if op == Op::Is4 { self.vector_len() } else { 0 };
                reg(Register::vector(vl, index))
            }
            Op::Kr => {
                let index = self.vector_reg_index()?;
                reg(self.mask_register(index)?)
            }
            Op::Kh => reg(self.mask_register(self.vvvv)?),
            Op::Krm => {
                let index = self.rm_register()?;
                reg(self.mask_register(index)?)
            }
            Op::Km => {
                if self.is_register_form()? {
                    let index = self.rm_index()?;
                    reg(self.mask_register(index)?)
                } else {
                    let size = self.memory_size(template, variant, MemorySize::UInt64);
                    Operand::Memory(self.decode_mem(size)?)
                }
            }
        };
        Ok(operand)
    }
}
