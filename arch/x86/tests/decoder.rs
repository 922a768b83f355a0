use xdec_x86::{
    Bitness, Code, ConstantOffsets, Decoder, EncodingKind, Error, Instruction, MemorySize,
    Operand, Options, Register, RegisterClass, RoundingControl,
};

fn opts(bitness: Bitness) -> Options {
    Options {
        bitness,
        ..Options::default()
    }
}

fn decode(bitness: Bitness, bytes: &[u8]) -> Result<Instruction, Error> {
    Decoder::new(bytes, opts(bitness)).decode()
}

const ALL_MODES: [Bitness; 3] = [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64];

#[test]
fn nop() {
    let insn = decode(Bitness::Bits32, &[0x90]).unwrap();
    assert_eq!(insn.code(), Code::Nopd);
    assert_eq!(insn.op_count(), 0);
    assert_eq!(insn.len(), 1);

    let insn = decode(Bitness::Bits16, &[0x66, 0x90]).unwrap();
    assert_eq!(insn.code(), Code::Nopd);
    assert_eq!(insn.len(), 2);
}

#[test]
fn pause() {
    for bitness in ALL_MODES {
        let insn = decode(bitness, &[0xf3, 0x90]).unwrap();
        assert_eq!(insn.code(), Code::Pause);
        assert_eq!(insn.len(), 2);
        assert!(!insn.has_repe_prefix());
    }
}

#[test]
fn xchg() {
    let insn = decode(Bitness::Bits64, &[0x48, 0x91]).unwrap();
    assert_eq!(insn.code(), Code::Xchg_r64_RAX);
    assert_eq!(insn.operands(), &[
        Operand::Register(Register::RCX),
        Operand::Register(Register::RAX)
    ]);
    assert_eq!(insn.len(), 2);
}

#[test]
fn evex_vpavgb() {
    let bytes = [0x62, 0xf1, 0x4d, 0x0b, 0xe0, 0x50, 0x01];
    let bases = [Register::BX, Register::EAX, Register::RAX];
    for (bitness, base) in ALL_MODES.into_iter().zip(bases) {
        let insn = decode(bitness, &bytes).unwrap();
        assert_eq!(insn.code(), Code::EVEX_Vpavgb_xmm_k1z_xmm_xmmm128);
        assert_eq!(insn.encoding(), EncodingKind::Evex);
        assert_eq!(insn.len(), 7);
        assert_eq!(insn.opmask(), Register::K3);
        assert!(!insn.zeroing_masking());
        assert_eq!(insn.operand(0), Operand::Register(Register::XMM2));
        assert_eq!(insn.operand(1), Operand::Register(Register::XMM6));
        let mem = insn.operand(2).memory().copied().unwrap();
        assert_eq!(mem.base, base);
        assert_eq!(mem.displacement, 0x10);
        assert_eq!(mem.displ_size, 1);
        assert_eq!(mem.size, MemorySize::Packed128_UInt8);
    }
}

#[test]
fn vex_vpsignb() {
    let insn = decode(Bitness::Bits64, &[0xc4, 0xe2, 0x49, 0x08, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::VEX_Vpsignb_xmm_xmm_xmmm128);
    assert_eq!(insn.encoding(), EncodingKind::Vex);
    assert_eq!(insn.operands(), &[
        Operand::Register(Register::XMM2),
        Operand::Register(Register::XMM6),
        Operand::Register(Register::XMM3),
    ]);
    assert_eq!(insn.len(), 5);
}

#[test]
fn immediates() {
    let insn = decode(Bitness::Bits64, &[0x48, 0x83, 0xc0, 0xff]).unwrap();
    let imm = *insn.operand(1).immediate().unwrap();
    assert_eq!(imm.value, u64::MAX);
    assert_eq!(imm.size, 8);
    assert_eq!(imm.encoded_size, 1);

    let insn = decode(Bitness::Bits64, &[0xd1, 0xe0]).unwrap();
    let imm = *insn.operand(1).immediate().unwrap();
    assert_eq!((imm.value, imm.encoded_size), (1, 0));
}

#[test]
fn branches() {
    let mut decoder = Decoder::new(&[0xeb, 0xfe, 0xe8, 0x00, 0x00, 0x00, 0x00], Options {
        ip: 0x1000,
        ..Options::default()
    });
    let insn = decoder.decode().unwrap();
    assert_eq!(insn.ip(), 0x1000);
    assert_eq!(insn.operand(0), Operand::NearBranch {
        target: 0x1000,
        size: 8
    });
    let insn = decoder.decode().unwrap();
    assert_eq!(insn.ip(), 0x1002);
    assert_eq!(insn.next_ip(), 0x1007);
    assert_eq!(insn.operand(0), Operand::NearBranch {
        target: 0x1007,
        size: 8
    });

    // 16-bit targets wrap
    let insn = decode(Bitness::Bits16, &[0xeb, 0x80]).unwrap();
    assert_eq!(insn.operand(0), Operand::NearBranch {
        target: 0xff82,
        size: 2
    });

    let insn = decode(Bitness::Bits32, &[0x9a, 0x78, 0x56, 0x34, 0x12, 0x08, 0x00]).unwrap();
    assert_eq!(insn.code(), Code::Call_ptr1632);
    assert_eq!(insn.operand(0), Operand::FarBranch {
        selector: 8,
        offset: 0x12345678,
        size: 4
    });
}

#[test]
fn rip_relative() {
    let mut decoder = Decoder::new(&[0x48, 0x8b, 0x05, 0xf9, 0xff, 0xff, 0xff], Options {
        ip: 0x2000,
        ..Options::default()
    });
    let insn = decoder.decode().unwrap();
    let mem = insn.memory().unwrap();
    assert!(mem.is_ip_relative());
    assert_eq!(mem.base, Register::RIP);
    assert_eq!(insn.ip_rel_memory_address(), Some(0x2000));
}

#[test]
fn evex_rounding() {
    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0x7c, 0xdb, 0x51, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er);
    assert_eq!(insn.rounding_control(), RoundingControl::RoundUp);
    assert!(!insn.suppress_all_exceptions());
    assert!(insn.zeroing_masking());
    assert!(!insn.is_broadcast());

    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0x7c, 0x1b, 0x51, 0xd3]).unwrap();
    assert_eq!(insn.rounding_control(), RoundingControl::RoundToNearest);
    assert!(!insn.suppress_all_exceptions());
    assert_eq!(insn.opmask(), Register::K3);
    assert!(!insn.zeroing_masking());

    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0x7c, 0x18, 0x2e, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::EVEX_Vucomiss_xmm_xmmm32_sae);
    assert_eq!(insn.rounding_control(), RoundingControl::None);
    assert!(insn.suppress_all_exceptions());

    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0x74, 0x58, 0x58, 0x40, 0x7f]).unwrap();
    assert!(insn.is_broadcast());
    assert_eq!(insn.rounding_control(), RoundingControl::None);
    let mem = insn.memory().unwrap();
    assert_eq!(mem.size, MemorySize::Broadcast512_Float32);
    assert_eq!(mem.displacement, 0x7f * 4);

    // only the 64-bit integer source of vcvtsi2sd can be inexact
    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0x4f, 0x78, 0x2a, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::EVEX_Vcvtsi2sd_xmm_xmm_rm32);
    assert_eq!(insn.rounding_control(), RoundingControl::None);
    assert!(!insn.suppress_all_exceptions());
    let insn = decode(Bitness::Bits64, &[0x62, 0xf1, 0xcf, 0x78, 0x2a, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::EVEX_Vcvtsi2sd_xmm_xmm_rm64_er);
    assert_eq!(insn.rounding_control(), RoundingControl::RoundTowardZero);
}

#[test]
fn prefixes() {
    let insn = decode(Bitness::Bits64, &[0xf2, 0xf0, 0x01, 0x08]).unwrap();
    assert!(insn.has_lock_prefix());
    assert!(insn.has_xacquire_prefix());
    assert!(!insn.has_repne_prefix());

    let insn = decode(Bitness::Bits64, &[0x64, 0x8b, 0x00]).unwrap();
    assert_eq!(insn.segment_prefix(), Register::FS);
    assert_eq!(insn.memory().unwrap().segment, Register::FS);
}

#[test]
fn errors() {
    assert_eq!(decode(Bitness::Bits64, &[]), Err(Error::More(1)));
    assert_eq!(decode(Bitness::Bits64, &[0xc4, 0xe2]), Err(Error::More(3)));
    assert_eq!(decode(Bitness::Bits64, &[0x8b, 0x04]), Err(Error::More(3)));
    assert_eq!(decode(Bitness::Bits64, &[0x06]), Err(Error::InvalidOpcode));
    assert_eq!(decode(Bitness::Bits64, &[0xf0, 0x01, 0xc8]), Err(Error::InvalidEncoding));
    assert_eq!(decode(Bitness::Bits64, &[0x66; 16]), Err(Error::TooLong));
    // the 15 byte limit holds for complete instructions too
    let mut long = vec![0x66; 10];
    long.extend_from_slice(&[0x48, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(decode(Bitness::Bits64, &long), Err(Error::TooLong));
}

#[test]
fn no_invalid_check() {
    let relaxed = Options {
        no_invalid_check: true,
        ..Options::default()
    };
    let insn = Decoder::new(&[0xf0, 0x01, 0xc8], relaxed).decode().unwrap();
    assert!(insn.has_lock_prefix());
    assert_eq!(Decoder::new(&[0x8e, 0xf8], relaxed).decode(), Err(Error::InvalidEncoding));

    let bytes = [0x66, 0xc5, 0xf8, 0x77];
    assert_eq!(decode(Bitness::Bits64, &bytes), Err(Error::InvalidEncoding));
    let insn = Decoder::new(&bytes, relaxed).decode().unwrap();
    assert_eq!(insn.code(), Code::VEX_Vzeroupper);
    assert_eq!(insn.len(), 4);
}

#[test]
fn constant_offsets() {
    let insn = decode(Bitness::Bits64, &[0xc8, 0x34, 0x12, 0x56]).unwrap();
    assert_eq!(insn.code(), Code::Enterq_imm16_imm8);
    assert_eq!(insn.constant_offsets(), ConstantOffsets {
        immediate_offset: 1,
        immediate_size: 2,
        immediate_offset2: 3,
        immediate_size2: 1,
        ..ConstantOffsets::default()
    });

    // add dword [rsp+8], 0x12345678
    let insn = decode(Bitness::Bits64, &[0x81, 0x44, 0x24, 0x08, 0x78, 0x56, 0x34, 0x12]).unwrap();
    let offsets = insn.constant_offsets();
    assert_eq!((offsets.displacement_offset, offsets.displacement_size), (3, 1));
    assert_eq!((offsets.immediate_offset, offsets.immediate_size), (4, 4));
    assert!(!offsets.has_immediate2());

    // the 3DNow! suffix selects the opcode, it is not an immediate
    let insn = decode(Bitness::Bits64, &[0x0f, 0x0f, 0x48, 0x10, 0x9e]).unwrap();
    let offsets = insn.constant_offsets();
    assert_eq!((offsets.displacement_offset, offsets.displacement_size), (3, 1));
    assert!(!offsets.has_immediate());

    let insn = decode(Bitness::Bits64, &[0x90]).unwrap();
    assert_eq!(insn.constant_offsets(), ConstantOffsets::default());
}

#[test]
fn xop_and_3dnow() {
    let insn = decode(Bitness::Bits64, &[0x8f, 0xe8, 0x48, 0xa2, 0xd3, 0x40]).unwrap();
    assert_eq!(insn.code(), Code::XOP_Vpcmov_xmm_xmm_xmmm128_xmm);
    assert_eq!(insn.encoding(), EncodingKind::Xop);
    assert_eq!(insn.operands(), &[
        Operand::Register(Register::XMM2),
        Operand::Register(Register::XMM6),
        Operand::Register(Register::XMM3),
        Operand::Register(Register::XMM4),
    ]);
    assert_eq!(insn.len(), 6);

    // map select below 8 keeps the POP reading
    let insn = decode(Bitness::Bits64, &[0x8f, 0xc0]).unwrap();
    assert_eq!(insn.code(), Code::Pop_rm64);
    assert_eq!(insn.encoding(), EncodingKind::Legacy);

    let insn = decode(Bitness::Bits64, &[0x0f, 0x0f, 0xd3, 0x9e]).unwrap();
    assert_eq!(insn.code(), Code::D3NOW_Pfadd_mm_mmm64);
    assert_eq!(insn.encoding(), EncodingKind::D3now);
    assert_eq!(insn.operands(), &[
        Operand::Register(Register::MM2),
        Operand::Register(Register::MM3),
    ]);
    assert_eq!(insn.len(), 4);

    let insn = decode(Bitness::Bits64, &[0x0f, 0x0f, 0x48, 0x10, 0x9e]).unwrap();
    assert_eq!(insn.memory().unwrap().size, MemorySize::Packed64_Float32);
    assert_eq!(insn.len(), 5);

    assert_eq!(decode(Bitness::Bits64, &[0x0f, 0x0f, 0xd3, 0x00]), Err(Error::InvalidOpcode));
}

#[test]
fn fma4_scalar_is4() {
    // the imm8[7:4] register stays XMM with VEX.L set
    for bytes in [[0xc4, 0xe3, 0x49, 0x6a, 0xd3, 0x40], [0xc4, 0xe3, 0x4d, 0x6a, 0xd3, 0x40]] {
        let insn = decode(Bitness::Bits64, &bytes).unwrap();
        assert_eq!(insn.code(), Code::VEX_Vfmaddss_xmm_xmm_xmmm32_xmm);
        assert_eq!(insn.operand(3), Operand::Register(Register::XMM4));
    }

    // W1 swaps the last two sources
    let insn = decode(Bitness::Bits64, &[0xc4, 0xe3, 0xc9, 0x6a, 0xd3, 0x40]).unwrap();
    assert_eq!(insn.code(), Code::VEX_Vfmaddss_xmm_xmm_xmm_xmmm32);
    assert_eq!(insn.operand(2), Operand::Register(Register::XMM4));
    assert_eq!(insn.operand(3), Operand::Register(Register::XMM3));

    let insn = decode(Bitness::Bits64, &[0xc4, 0xe3, 0x4d, 0x68, 0xd3, 0x40]).unwrap();
    assert_eq!(insn.code(), Code::VEX_Vfmaddps_ymm_ymm_ymmm256_ymm);
    assert_eq!(insn.operand(3), Operand::Register(Register::YMM4));
}

#[test]
fn evex_disp8_element_scaled() {
    let cases: [(&[u8], Code, i64); 4] = [
        (&[0x62, 0xf2, 0xfd, 0x08, 0x62, 0x50, 0x01], Code::EVEX_Vpexpandw_xmm_k1z_xmmm128, 2),
        (&[0x62, 0xf2, 0x7d, 0x08, 0x89, 0x50, 0x01], Code::EVEX_Vpexpandd_xmm_k1z_xmmm128, 4),
        (&[0x62, 0xf2, 0xfd, 0x08, 0x8a, 0x50, 0x01], Code::EVEX_Vcompresspd_xmmm128_k1z_xmm, 8),
        (&[0x62, 0xf1, 0x7e, 0x08, 0x6f, 0x50, 0x01], Code::EVEX_Vmovdqu32_xmm_k1z_xmmm128, 16),
    ];
    for (bytes, code, displacement) in cases {
        let insn = decode(Bitness::Bits64, bytes).unwrap();
        assert_eq!(insn.code(), code);
        let mem = insn.memory().unwrap();
        assert_eq!(mem.displacement, displacement);
        assert_eq!(mem.displ_size, 1);
    }
}

#[test]
fn maskmov_implicit_destination() {
    let insn = decode(Bitness::Bits64, &[0x0f, 0xf7, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::Maskmovq_rDI_mm_mm);
    let mem = insn.operand(0).memory().copied().unwrap();
    assert_eq!((mem.segment, mem.base, mem.size), (Register::DS, Register::RDI, MemorySize::UInt64));

    let bases = [Register::DI, Register::EDI, Register::RDI];
    for (bitness, base) in ALL_MODES.into_iter().zip(bases) {
        let insn = decode(bitness, &[0xc5, 0xf9, 0xf7, 0xd3]).unwrap();
        assert_eq!(insn.code(), Code::VEX_Vmaskmovdqu_rDI_xmm_xmm);
        assert_eq!(insn.memory().unwrap().base, base);
        assert_eq!(insn.operand(1), Operand::Register(Register::XMM2));
        assert_eq!(insn.operand(2), Operand::Register(Register::XMM3));
    }

    let insn = decode(Bitness::Bits64, &[0x67, 0x66, 0x0f, 0xf7, 0xd3]).unwrap();
    assert_eq!(insn.code(), Code::Maskmovdqu_rDI_xmm_xmm);
    assert_eq!(insn.memory().unwrap().base, Register::EDI);
}

#[test]
fn debug_registers() {
    let insn = decode(Bitness::Bits64, &[0x44, 0x0f, 0x21, 0x31]).unwrap();
    assert_eq!(insn.code(), Code::Mov_r64_dr);
    assert_eq!(insn.operand(0), Operand::Register(Register::RCX));
    assert_eq!(insn.operand(1), Operand::Register(Register::DR14));

    let insn = decode(Bitness::Bits64, &[0x44, 0x0f, 0x23, 0xc7]).unwrap();
    assert_eq!(insn.operand(0), Operand::Register(Register::DR8));
    assert_eq!(insn.operand(1), Operand::Register(Register::RDI));
}

#[test]
fn determinism() {
    let samples: &[&[u8]] = &[
        &[0x8b, 0x44, 0x88, 0xf0],
        &[0x62, 0xf1, 0x7c, 0xdb, 0x51, 0xd3],
        &[0xc4, 0xe3, 0x71, 0x4a, 0xc3, 0x40],
        &[0xf2, 0xf0, 0x0f, 0xb1, 0x08],
    ];
    for bytes in samples {
        let first = decode(Bitness::Bits64, bytes);
        let second = decode(Bitness::Bits64, bytes);
        assert_eq!(first, second);
        assert!(first.is_ok());
    }
}

#[test]
fn length_exactness() {
    let samples: &[&[u8]] = &[
        &[0x90],
        &[0x48, 0xb8, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
        &[0x8b, 0x04, 0xcd, 0x00, 0x00, 0x00, 0x00],
        &[0x62, 0xf1, 0x74, 0x48, 0x58, 0x80, 0xf0, 0xff, 0xff, 0xff],
        &[0xc5, 0xf8, 0x77],
    ];
    for bytes in samples {
        let mut padded = bytes.to_vec();
        padded.extend_from_slice(&[0xcc; 8]);
        let exact = decode(Bitness::Bits64, bytes).unwrap();
        let longer = decode(Bitness::Bits64, &padded).unwrap();
        assert_eq!(exact, longer);
        assert_eq!(exact.len(), bytes.len());
        // one byte short
        let short = decode(Bitness::Bits64, &bytes[..bytes.len() - 1]);
        assert!(matches!(short, Err(Error::More(_))), "{bytes:02x?}");
    }
}

#[test]
fn prefix_redundancy() {
    let once = decode(Bitness::Bits64, &[0x66, 0x90]).unwrap();
    let twice = decode(Bitness::Bits64, &[0x66, 0x66, 0x90]).unwrap();
    assert_eq!(twice.len(), once.len() + 1);
    assert_eq!(twice.code(), once.code());
    assert_eq!(twice.operands(), once.operands());

    let once = decode(Bitness::Bits64, &[0x2e, 0x8b, 0x00]).unwrap();
    let twice = decode(Bitness::Bits64, &[0x2e, 0x2e, 0x8b, 0x00]).unwrap();
    assert_eq!(twice.operands(), once.operands());
    assert_eq!(twice.segment_prefix(), Register::CS);
}

#[test]
fn register_extension() {
    let mut gprs = vec![];
    for rex in [0x48, 0x49] {
        for rm in 0..8 {
            let insn = decode(Bitness::Bits64, &[rex, 0x89, 0xc0 | rm]).unwrap();
            gprs.push(insn.operand(0).register().unwrap());
        }
    }
    assert!(gprs.iter().all(|r| r.class() == RegisterClass::Gpr64));
    assert_distinct(&gprs);

    // EVEX.R' and EVEX.R extend ModRM.reg to 32 vector registers
    let mut zmms = vec![];
    for p0 in [0xf1, 0x71, 0xe1, 0x61] {
        for reg in 0..8 {
            let bytes = [0x62, p0, 0x7c, 0x48, 0x10, 0xc0 | reg << 3];
            let insn = decode(Bitness::Bits64, &bytes).unwrap();
            zmms.push(insn.operand(0).register().unwrap());
        }
    }
    assert!(zmms.iter().all(|r| r.class() == RegisterClass::Zmm));
    assert_eq!(zmms.len(), 32);
    assert_distinct(&zmms);
}

fn assert_distinct(regs: &[Register]) {
    for (i, a) in regs.iter().enumerate() {
        for b in &regs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn iterator() {
    let code = [0x90, 0x06, 0x48, 0x91, 0xc3];
    let mut decoder = Decoder::new(&code, Options::default());
    let codes: Vec<_> = decoder.by_ref().map(|r| r.map(|i| i.code())).collect();
    assert_eq!(codes, [
        Ok(Code::Nopd),
        Err(Error::InvalidOpcode),
        Ok(Code::Xchg_r64_RAX),
        Ok(Code::Retnq),
    ]);
    assert_eq!(decoder.position(), code.len());
    assert_eq!(decoder.ip(), code.len() as u64);
}

#[test]
fn cursor_on_error() {
    let mut decoder = Decoder::new(&[0x90, 0x06], Options::default());
    decoder.decode().unwrap();
    assert_eq!(decoder.decode(), Err(Error::InvalidOpcode));
    assert_eq!(decoder.position(), 1);
    assert_eq!(decoder.ip(), 1);
}
