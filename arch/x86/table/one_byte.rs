//! One-byte opcode map, x87 escapes included.

use super::*;

/// Opcodes without an escape byte.
pub(crate) static ONE_BYTE: [Entry; 256] = [
    // 00
    op!(Add_rm8_r8, Eb, Gb; LOCK | HLE),
    // 01
    osz!([Add_rm16_r16, Add_rm32_r32, Add_rm64_r64], Ev, Gv; LOCK | HLE),
    // 02
    op!(Add_r8_rm8, Gb, Eb),
    // 03
    osz!([Add_r16_rm16, Add_r32_rm32, Add_r64_rm64], Gv, Ev),
    // 04
    op!(Add_AL_imm8, AL, Ib),
    // 05
    osz!([Add_AX_imm16, Add_EAX_imm32, Add_RAX_imm32], Acc, Iz),
    // 06
    osz!([Pushw_ES, Pushd_ES, Pushd_ES], ES; NO64),
    // 07
    osz!([Popw_ES, Popd_ES, Popd_ES], ES; NO64),
    // 08
    op!(Or_rm8_r8, Eb, Gb; LOCK | HLE),
    // 09
    osz!([Or_rm16_r16, Or_rm32_r32, Or_rm64_r64], Ev, Gv; LOCK | HLE),
    // 0A
    op!(Or_r8_rm8, Gb, Eb),
    // 0B
    osz!([Or_r16_rm16, Or_r32_rm32, Or_r64_rm64], Gv, Ev),
    // 0C
    op!(Or_AL_imm8, AL, Ib),
    // 0D
    osz!([Or_AX_imm16, Or_EAX_imm32, Or_RAX_imm32], Acc, Iz),
    // 0E
    osz!([Pushw_CS, Pushd_CS, Pushd_CS], CS; NO64),
    // 0F
    Entry::Invalid,
    // 10
    op!(Adc_rm8_r8, Eb, Gb; LOCK | HLE),
    // 11
    osz!([Adc_rm16_r16, Adc_rm32_r32, Adc_rm64_r64], Ev, Gv; LOCK | HLE),
    // 12
    op!(Adc_r8_rm8, Gb, Eb),
    // 13
    osz!([Adc_r16_rm16, Adc_r32_rm32, Adc_r64_rm64], Gv, Ev),
    // 14
    op!(Adc_AL_imm8, AL, Ib),
    // 15
    osz!([Adc_AX_imm16, Adc_EAX_imm32, Adc_RAX_imm32], Acc, Iz),
    // 16
    osz!([Pushw_SS, Pushd_SS, Pushd_SS], SS; NO64),
    // 17
    osz!([Popw_SS, Popd_SS, Popd_SS], SS; NO64),
    // 18
    op!(Sbb_rm8_r8, Eb, Gb; LOCK | HLE),
    // 19
    osz!([Sbb_rm16_r16, Sbb_rm32_r32, Sbb_rm64_r64], Ev, Gv; LOCK | HLE),
    // 1A
    op!(Sbb_r8_rm8, Gb, Eb),
    // 1B
    osz!([Sbb_r16_rm16, Sbb_r32_rm32, Sbb_r64_rm64], Gv, Ev),
    // 1C
    op!(Sbb_AL_imm8, AL, Ib),
    // 1D
    osz!([Sbb_AX_imm16, Sbb_EAX_imm32, Sbb_RAX_imm32], Acc, Iz),
    // 1E
    osz!([Pushw_DS, Pushd_DS, Pushd_DS], DS; NO64),
    // 1F
    osz!([Popw_DS, Popd_DS, Popd_DS], DS; NO64),
    // 20
    op!(And_rm8_r8, Eb, Gb; LOCK | HLE),
    // 21
    osz!([And_rm16_r16, And_rm32_r32, And_rm64_r64], Ev, Gv; LOCK | HLE),
    // 22
    op!(And_r8_rm8, Gb, Eb),
    // 23
    osz!([And_r16_rm16, And_r32_rm32, And_r64_rm64], Gv, Ev),
    // 24
    op!(And_AL_imm8, AL, Ib),
    // 25
    osz!([And_AX_imm16, And_EAX_imm32, And_RAX_imm32], Acc, Iz),
    // 26
    Entry::Invalid,
    // 27
    op!(Daa; NO64),
    // 28
    op!(Sub_rm8_r8, Eb, Gb; LOCK | HLE),
    // 29
    osz!([Sub_rm16_r16, Sub_rm32_r32, Sub_rm64_r64], Ev, Gv; LOCK | HLE),
    // 2A
    op!(Sub_r8_rm8, Gb, Eb),
    // 2B
    osz!([Sub_r16_rm16, Sub_r32_rm32, Sub_r64_rm64], Gv, Ev),
    // 2C
    op!(Sub_AL_imm8, AL, Ib),
    // 2D
    osz!([Sub_AX_imm16, Sub_EAX_imm32, Sub_RAX_imm32], Acc, Iz),
    // 2E
    Entry::Invalid,
    // 2F
    op!(Das; NO64),
    // 30
    op!(Xor_rm8_r8, Eb, Gb; LOCK | HLE),
    // 31
    osz!([Xor_rm16_r16, Xor_rm32_r32, Xor_rm64_r64], Ev, Gv; LOCK | HLE),
    // 32
    op!(Xor_r8_rm8, Gb, Eb),
    // 33
    osz!([Xor_r16_rm16, Xor_r32_rm32, Xor_r64_rm64], Gv, Ev),
    // 34
    op!(Xor_AL_imm8, AL, Ib),
    // 35
    osz!([Xor_AX_imm16, Xor_EAX_imm32, Xor_RAX_imm32], Acc, Iz),
    // 36
    Entry::Invalid,
    // 37
    op!(Aaa; NO64),
    // 38
    op!(Cmp_rm8_r8, Eb, Gb),
    // 39
    osz!([Cmp_rm16_r16, Cmp_rm32_r32, Cmp_rm64_r64], Ev, Gv),
    // 3A
    op!(Cmp_r8_rm8, Gb, Eb),
    // 3B
    osz!([Cmp_r16_rm16, Cmp_r32_rm32, Cmp_r64_rm64], Gv, Ev),
    // 3C
    op!(Cmp_AL_imm8, AL, Ib),
    // 3D
    osz!([Cmp_AX_imm16, Cmp_EAX_imm32, Cmp_RAX_imm32], Acc, Iz),
    // 3E
    Entry::Invalid,
    // 3F
    op!(Aas; NO64),
    // 40
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 41
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 42
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 43
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 44
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 45
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 46
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 47
    osz!([Inc_r16, Inc_r32, Inc_r32], Zv; NO64),
    // 48
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 49
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4A
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4B
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4C
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4D
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4E
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 4F
    osz!([Dec_r16, Dec_r32, Dec_r32], Zv; NO64),
    // 50
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 51
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 52
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 53
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 54
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 55
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 56
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 57
    osz!([Push_r16, Push_r32, Push_r64], Zv; DEF64),
    // 58
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 59
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5A
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5B
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5C
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5D
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5E
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 5F
    osz!([Pop_r16, Pop_r32, Pop_r64], Zv; DEF64),
    // 60
    osz!([Pushaw, Pushad, Pushad]; NO64),
    // 61
    osz!([Popaw, Popad, Popad]; NO64),
    // 62
    osz_mem!(
        [Bound_r16_m1616, Bound_r32_m3232, Bound_r32_m3232],
        [Bound16_WordWord, Bound32_DwordDword, Bound32_DwordDword],
        Gv, M; NO64
    ),
    // 63
    Entry::Mode(
        &op!(Arpl_rm16_r16, Ew, Gw),
        &osz!([Movsxd_r16_rm16, Movsxd_r32_rm32, Movsxd_r64_rm32], Gv, Ez),
    ),
    // 64
    Entry::Invalid,
    // 65
    Entry::Invalid,
    // 66
    Entry::Invalid,
    // 67
    Entry::Invalid,
    // 68
    osz!([Push_imm16, Pushd_imm32, Pushq_imm32], Iz; DEF64),
    // 69
    osz_mem!(
        [Imul_r16_rm16_imm16, Imul_r32_rm32_imm32, Imul_r64_rm64_imm32],
        [Int16, Int32, Int64],
        Gv, Ev, Iz
    ),
    // 6A
    osz!([Pushw_imm8, Pushd_imm8, Pushq_imm8], Ibs; DEF64),
    // 6B
    osz_mem!(
        [Imul_r16_rm16_imm8, Imul_r32_rm32_imm8, Imul_r64_rm64_imm8],
        [Int16, Int32, Int64],
        Gv, Ev, Ibs
    ),
    // 6C
    op!(Insb_m8_DX, Yb, DX),
    // 6D
    osz!([Insw_m16_DX, Insd_m32_DX, Insd_m32_DX], Yz, DX),
    // 6E
    op!(Outsb_DX_m8, DX, Xb),
    // 6F
    osz!([Outsw_DX_m16, Outsd_DX_m32, Outsd_DX_m32], DX, Xz),
    // 70
    osz!([Jo_rel8_16, Jo_rel8_32, Jo_rel8_64], Jb; BRANCH64),
    // 71
    osz!([Jno_rel8_16, Jno_rel8_32, Jno_rel8_64], Jb; BRANCH64),
    // 72
    osz!([Jb_rel8_16, Jb_rel8_32, Jb_rel8_64], Jb; BRANCH64),
    // 73
    osz!([Jae_rel8_16, Jae_rel8_32, Jae_rel8_64], Jb; BRANCH64),
    // 74
    osz!([Je_rel8_16, Je_rel8_32, Je_rel8_64], Jb; BRANCH64),
    // 75
    osz!([Jne_rel8_16, Jne_rel8_32, Jne_rel8_64], Jb; BRANCH64),
    // 76
    osz!([Jbe_rel8_16, Jbe_rel8_32, Jbe_rel8_64], Jb; BRANCH64),
    // 77
    osz!([Ja_rel8_16, Ja_rel8_32, Ja_rel8_64], Jb; BRANCH64),
    // 78
    osz!([Js_rel8_16, Js_rel8_32, Js_rel8_64], Jb; BRANCH64),
    // 79
    osz!([Jns_rel8_16, Jns_rel8_32, Jns_rel8_64], Jb; BRANCH64),
    // 7A
    osz!([Jp_rel8_16, Jp_rel8_32, Jp_rel8_64], Jb; BRANCH64),
    // 7B
    osz!([Jnp_rel8_16, Jnp_rel8_32, Jnp_rel8_64], Jb; BRANCH64),
    // 7C
    osz!([Jl_rel8_16, Jl_rel8_32, Jl_rel8_64], Jb; BRANCH64),
    // 7D
    osz!([Jge_rel8_16, Jge_rel8_32, Jge_rel8_64], Jb; BRANCH64),
    // 7E
    osz!([Jle_rel8_16, Jle_rel8_32, Jle_rel8_64], Jb; BRANCH64),
    // 7F
    osz!([Jg_rel8_16, Jg_rel8_32, Jg_rel8_64], Jb; BRANCH64),
    // 80
    Entry::Group(&[
        op!(Add_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Or_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Adc_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Sbb_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(And_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Sub_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Xor_rm8_imm8, Eb, Ib; LOCK | HLE),
        op!(Cmp_rm8_imm8, Eb, Ib),
    ]),
    // 81
    Entry::Group(&[
        osz!([Add_rm16_imm16, Add_rm32_imm32, Add_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Or_rm16_imm16, Or_rm32_imm32, Or_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Adc_rm16_imm16, Adc_rm32_imm32, Adc_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Sbb_rm16_imm16, Sbb_rm32_imm32, Sbb_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([And_rm16_imm16, And_rm32_imm32, And_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Sub_rm16_imm16, Sub_rm32_imm32, Sub_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Xor_rm16_imm16, Xor_rm32_imm32, Xor_rm64_imm32], Ev, Iz; LOCK | HLE),
        osz!([Cmp_rm16_imm16, Cmp_rm32_imm32, Cmp_rm64_imm32], Ev, Iz),
    ]),
    // 82
    Entry::Group(&[
        op!(Add_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Or_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Adc_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Sbb_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(And_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Sub_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Xor_rm8_imm8_82, Eb, Ib; NO64 | LOCK | HLE),
        op!(Cmp_rm8_imm8_82, Eb, Ib; NO64),
    ]),
    // 83
    Entry::Group(&[
        osz!([Add_rm16_imm8, Add_rm32_imm8, Add_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Or_rm16_imm8, Or_rm32_imm8, Or_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Adc_rm16_imm8, Adc_rm32_imm8, Adc_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Sbb_rm16_imm8, Sbb_rm32_imm8, Sbb_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([And_rm16_imm8, And_rm32_imm8, And_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Sub_rm16_imm8, Sub_rm32_imm8, Sub_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Xor_rm16_imm8, Xor_rm32_imm8, Xor_rm64_imm8], Ev, Ibs; LOCK | HLE),
        osz!([Cmp_rm16_imm8, Cmp_rm32_imm8, Cmp_rm64_imm8], Ev, Ibs),
    ]),
    // 84
    op!(Test_rm8_r8, Eb, Gb),
    // 85
    osz!([Test_rm16_r16, Test_rm32_r32, Test_rm64_r64], Ev, Gv),
    // 86
    op!(Xchg_rm8_r8, Eb, Gb; LOCK | HLE | HLE_NOLOCK),
    // 87
    osz!([Xchg_rm16_r16, Xchg_rm32_r32, Xchg_rm64_r64], Ev, Gv; LOCK | HLE | HLE_NOLOCK),
    // 88
    op!(Mov_rm8_r8, Eb, Gb; XRELEASE_NOLOCK),
    // 89
    osz!([Mov_rm16_r16, Mov_rm32_r32, Mov_rm64_r64], Ev, Gv; XRELEASE_NOLOCK),
    // 8A
    op!(Mov_r8_rm8, Gb, Eb),
    // 8B
    osz!([Mov_r16_rm16, Mov_r32_rm32, Mov_r64_rm64], Gv, Ev),
    // 8C
    osz_mem!([Mov_rm16_Sreg, Mov_r32m16_Sreg, Mov_r64m16_Sreg], [UInt16, UInt16, UInt16], Ev, Sw),
    // 8D
    osz!([Lea_r16_m, Lea_r32_m, Lea_r64_m], Gv, M),
    // 8E
    osz_mem!([Mov_Sreg_rm16, Mov_Sreg_r32m16, Mov_Sreg_r64m16], [UInt16, UInt16, UInt16], Sw, Ev),
    // 8F
    Entry::Group(&[
        osz!([Pop_rm16, Pop_rm32, Pop_rm64], Ev; DEF64),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 90
    Entry::Nop,
    // 91
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 92
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 93
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 94
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 95
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 96
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 97
    osz!([Xchg_r16_AX, Xchg_r32_EAX, Xchg_r64_RAX], Zv, Acc),
    // 98
    osz!([Cbw, Cwde, Cdqe]),
    // 99
    osz!([Cwd, Cdq, Cqo]),
    // 9A
    osz!([Call_ptr1616, Call_ptr1632, Call_ptr1632], Ap; NO64),
    // 9B
    op!(Wait),
    // 9C
    osz!([Pushfw, Pushfd, Pushfq]; DEF64),
    // 9D
    osz!([Popfw, Popfd, Popfq]; DEF64),
    // 9E
    op!(Sahf),
    // 9F
    op!(Lahf),
    // A0
    op!(Mov_AL_moffs8, AL, Ob),
    // A1
    osz!([Mov_AX_moffs16, Mov_EAX_moffs32, Mov_RAX_moffs64], Acc, Ov),
    // A2
    op!(Mov_moffs8_AL, Ob, AL),
    // A3
    osz!([Mov_moffs16_AX, Mov_moffs32_EAX, Mov_moffs64_RAX], Ov, Acc),
    // A4
    op!(Movsb_m8_m8, Yb, Xb),
    // A5
    osz!([Movsw_m16_m16, Movsd_m32_m32, Movsq_m64_m64], Yv, Xv),
    // A6
    op!(Cmpsb_m8_m8, Xb, Yb),
    // A7
    osz!([Cmpsw_m16_m16, Cmpsd_m32_m32, Cmpsq_m64_m64], Xv, Yv),
    // A8
    op!(Test_AL_imm8, AL, Ib),
    // A9
    osz!([Test_AX_imm16, Test_EAX_imm32, Test_RAX_imm32], Acc, Iz),
    // AA
    op!(Stosb_m8_AL, Yb, AL),
    // AB
    osz!([Stosw_m16_AX, Stosd_m32_EAX, Stosq_m64_RAX], Yv, Acc),
    // AC
    op!(Lodsb_AL_m8, AL, Xb),
    // AD
    osz!([Lodsw_AX_m16, Lodsd_EAX_m32, Lodsq_RAX_m64], Acc, Xv),
    // AE
    op!(Scasb_AL_m8, AL, Yb),
    // AF
    osz!([Scasw_AX_m16, Scasd_EAX_m32, Scasq_RAX_m64], Acc, Yv),
    // B0
    op!(Mov_r8_imm8, Zb, Ib),
    // B1
    op!(Mov_r8_imm8, Zb, Ib),
    // B2
    op!(Mov_r8_imm8, Zb, Ib),
    // B3
    op!(Mov_r8_imm8, Zb, Ib),
    // B4
    op!(Mov_r8_imm8, Zb, Ib),
    // B5
    op!(Mov_r8_imm8, Zb, Ib),
    // B6
    op!(Mov_r8_imm8, Zb, Ib),
    // B7
    op!(Mov_r8_imm8, Zb, Ib),
    // B8
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // B9
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BA
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BB
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BC
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BD
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BE
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // BF
    osz!([Mov_r16_imm16, Mov_r32_imm32, Mov_r64_imm64], Zv, Iv),
    // C0
    Entry::Group(&[
        op!(Rol_rm8_imm8, Eb, Ib),
        op!(Ror_rm8_imm8, Eb, Ib),
        op!(Rcl_rm8_imm8, Eb, Ib),
        op!(Rcr_rm8_imm8, Eb, Ib),
        op!(Shl_rm8_imm8, Eb, Ib),
        op!(Shr_rm8_imm8, Eb, Ib),
        op!(Sal_rm8_imm8, Eb, Ib),
        mem!(Sar_rm8_imm8, Int8, Eb, Ib),
    ]),
    // C1
    Entry::Group(&[
        osz!([Rol_rm16_imm8, Rol_rm32_imm8, Rol_rm64_imm8], Ev, Ib),
        osz!([Ror_rm16_imm8, Ror_rm32_imm8, Ror_rm64_imm8], Ev, Ib),
        osz!([Rcl_rm16_imm8, Rcl_rm32_imm8, Rcl_rm64_imm8], Ev, Ib),
        osz!([Rcr_rm16_imm8, Rcr_rm32_imm8, Rcr_rm64_imm8], Ev, Ib),
        osz!([Shl_rm16_imm8, Shl_rm32_imm8, Shl_rm64_imm8], Ev, Ib),
        osz!([Shr_rm16_imm8, Shr_rm32_imm8, Shr_rm64_imm8], Ev, Ib),
        osz!([Sal_rm16_imm8, Sal_rm32_imm8, Sal_rm64_imm8], Ev, Ib),
        osz_mem!([Sar_rm16_imm8, Sar_rm32_imm8, Sar_rm64_imm8], [Int16, Int32, Int64], Ev, Ib),
    ]),
    // C2
    osz!([Retnw_imm16, Retnd_imm16, Retnq_imm16], Iw; BRANCH64),
    // C3
    osz!([Retnw, Retnd, Retnq]; BRANCH64),
    // C4
    osz_mem!(
        [Les_r16_m1616, Les_r32_m1632, Les_r32_m1632],
        [SegPtr16, SegPtr32, SegPtr32],
        Gv, M; NO64
    ),
    // C5
    osz_mem!(
        [Lds_r16_m1616, Lds_r32_m1632, Lds_r32_m1632],
        [SegPtr16, SegPtr32, SegPtr32],
        Gv, M; NO64
    ),
    // C6
    Entry::Group(&[
        op!(Mov_rm8_imm8, Eb, Ib; XRELEASE_NOLOCK),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Mod(
            &Entry::Rm(&[
                op!(Xabort_imm8, Ib),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            &Entry::Invalid,
        ),
    ]),
    // C7
    Entry::Group(&[
        osz!([Mov_rm16_imm16, Mov_rm32_imm32, Mov_rm64_imm32], Ev, Iz; XRELEASE_NOLOCK),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Mod(
            &Entry::Rm(&[
                osz!([Xbegin_rel16, Xbegin_rel32, Xbegin_rel32], Jz),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            &Entry::Invalid,
        ),
    ]),
    // C8
    osz!([Enterw_imm16_imm8, Enterd_imm16_imm8, Enterq_imm16_imm8], Iw, Ib2; DEF64),
    // C9
    osz!([Leavew, Leaved, Leaveq]; DEF64),
    // CA
    osz!([Retfw_imm16, Retfd_imm16, Retfq_imm16], Iw),
    // CB
    osz!([Retfw, Retfd, Retfq]),
    // CC
    op!(Int3),
    // CD
    op!(Int_imm8, Ib),
    // CE
    op!(Into; NO64),
    // CF
    osz!([Iretw, Iretd, Iretq]),
    // D0
    Entry::Group(&[
        op!(Rol_rm8_1, Eb, One),
        op!(Ror_rm8_1, Eb, One),
        op!(Rcl_rm8_1, Eb, One),
        op!(Rcr_rm8_1, Eb, One),
        op!(Shl_rm8_1, Eb, One),
        op!(Shr_rm8_1, Eb, One),
        op!(Sal_rm8_1, Eb, One),
        mem!(Sar_rm8_1, Int8, Eb, One),
    ]),
    // D1
    Entry::Group(&[
        osz!([Rol_rm16_1, Rol_rm32_1, Rol_rm64_1], Ev, One),
        osz!([Ror_rm16_1, Ror_rm32_1, Ror_rm64_1], Ev, One),
        osz!([Rcl_rm16_1, Rcl_rm32_1, Rcl_rm64_1], Ev, One),
        osz!([Rcr_rm16_1, Rcr_rm32_1, Rcr_rm64_1], Ev, One),
        osz!([Shl_rm16_1, Shl_rm32_1, Shl_rm64_1], Ev, One),
        osz!([Shr_rm16_1, Shr_rm32_1, Shr_rm64_1], Ev, One),
        osz!([Sal_rm16_1, Sal_rm32_1, Sal_rm64_1], Ev, One),
        osz_mem!([Sar_rm16_1, Sar_rm32_1, Sar_rm64_1], [Int16, Int32, Int64], Ev, One),
    ]),
    // D2
    Entry::Group(&[
        op!(Rol_rm8_CL, Eb, CL),
        op!(Ror_rm8_CL, Eb, CL),
        op!(Rcl_rm8_CL, Eb, CL),
        op!(Rcr_rm8_CL, Eb, CL),
        op!(Shl_rm8_CL, Eb, CL),
        op!(Shr_rm8_CL, Eb, CL),
        op!(Sal_rm8_CL, Eb, CL),
        mem!(Sar_rm8_CL, Int8, Eb, CL),
    ]),
    // D3
    Entry::Group(&[
        osz!([Rol_rm16_CL, Rol_rm32_CL, Rol_rm64_CL], Ev, CL),
        osz!([Ror_rm16_CL, Ror_rm32_CL, Ror_rm64_CL], Ev, CL),
        osz!([Rcl_rm16_CL, Rcl_rm32_CL, Rcl_rm64_CL], Ev, CL),
        osz!([Rcr_rm16_CL, Rcr_rm32_CL, Rcr_rm64_CL], Ev, CL),
        osz!([Shl_rm16_CL, Shl_rm32_CL, Shl_rm64_CL], Ev, CL),
        osz!([Shr_rm16_CL, Shr_rm32_CL, Shr_rm64_CL], Ev, CL),
        osz!([Sal_rm16_CL, Sal_rm32_CL, Sal_rm64_CL], Ev, CL),
        osz_mem!([Sar_rm16_CL, Sar_rm32_CL, Sar_rm64_CL], [Int16, Int32, Int64], Ev, CL),
    ]),
    // D4
    op!(Aam_imm8, Ib; NO64),
    // D5
    op!(Aad_imm8, Ib; NO64),
    // D6
    op!(Salc; NO64),
    // D7
    op!(Xlat_m8, Xlat),
    // D8
    Entry::Mod(
        &Entry::Group(&[
            op!(Fadd_st0_sti, St0, Sti),
            op!(Fmul_st0_sti, St0, Sti),
            op!(Fcom_st0_sti, St0, Sti),
            op!(Fcomp_st0_sti, St0, Sti),
            op!(Fsub_st0_sti, St0, Sti),
            op!(Fsubr_st0_sti, St0, Sti),
            op!(Fdiv_st0_sti, St0, Sti),
            op!(Fdivr_st0_sti, St0, Sti),
        ]),
        &Entry::Group(&[
            mem!(Fadd_m32fp, Float32, M),
            mem!(Fmul_m32fp, Float32, M),
            mem!(Fcom_m32fp, Float32, M),
            mem!(Fcomp_m32fp, Float32, M),
            mem!(Fsub_m32fp, Float32, M),
            mem!(Fsubr_m32fp, Float32, M),
            mem!(Fdiv_m32fp, Float32, M),
            mem!(Fdivr_m32fp, Float32, M),
        ]),
    ),
    // D9
    Entry::Mod(
        &Entry::Group(&[
            op!(Fld_st0_sti, St0, Sti),
            op!(Fxch_st0_sti, St0, Sti),
            Entry::Rm(&[
                op!(Fnop),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            op!(Fstpnce_sti, Sti),
            Entry::Rm(&[
                op!(Fchs),
                op!(Fabs),
                Entry::Invalid,
                Entry::Invalid,
                op!(Ftst),
                op!(Fxam),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Rm(&[
                op!(Fld1),
                op!(Fldl2t),
                op!(Fldl2e),
                op!(Fldpi),
                op!(Fldlg2),
                op!(Fldln2),
                op!(Fldz),
                Entry::Invalid,
            ]),
            Entry::Rm(&[
                op!(F2xm1),
                op!(Fyl2x),
                op!(Fptan),
                op!(Fpatan),
                op!(Fxtract),
                op!(Fprem1),
                op!(Fdecstp),
                op!(Fincstp),
            ]),
            Entry::Rm(&[
                op!(Fprem),
                op!(Fyl2xp1),
                op!(Fsqrt),
                op!(Fsincos),
                op!(Frndint),
                op!(Fscale),
                op!(Fsin),
                op!(Fcos),
            ]),
        ]),
        &Entry::Group(&[
            mem!(Fld_m32fp, Float32, M),
            Entry::Invalid,
            mem!(Fst_m32fp, Float32, M),
            mem!(Fstp_m32fp, Float32, M),
            osz_mem!(
                [Fldenv_m14byte, Fldenv_m28byte, Fldenv_m28byte],
                [FpuEnv14, FpuEnv28, FpuEnv28],
                M
            ),
            mem!(Fldcw_m2byte, UInt16, M),
            osz_mem!(
                [Fnstenv_m14byte, Fnstenv_m28byte, Fnstenv_m28byte],
                [FpuEnv14, FpuEnv28, FpuEnv28],
                M
            ),
            mem!(Fnstcw_m2byte, UInt16, M),
        ]),
    ),
    // DA
    Entry::Mod(
        &Entry::Group(&[
            op!(Fcmovb_st0_sti, St0, Sti),
            op!(Fcmove_st0_sti, St0, Sti),
            op!(Fcmovbe_st0_sti, St0, Sti),
            op!(Fcmovu_st0_sti, St0, Sti),
            Entry::Invalid,
            Entry::Rm(&[
                Entry::Invalid,
                op!(Fucompp),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        &Entry::Group(&[
            mem!(Fiadd_m32int, Int32, M),
            mem!(Fimul_m32int, Int32, M),
            mem!(Ficom_m32int, Int32, M),
            mem!(Ficomp_m32int, Int32, M),
            mem!(Fisub_m32int, Int32, M),
            mem!(Fisubr_m32int, Int32, M),
            mem!(Fidiv_m32int, Int32, M),
            mem!(Fidivr_m32int, Int32, M),
        ]),
    ),
    // DB
    Entry::Mod(
        &Entry::Group(&[
            op!(Fcmovnb_st0_sti, St0, Sti),
            op!(Fcmovne_st0_sti, St0, Sti),
            op!(Fcmovnbe_st0_sti, St0, Sti),
            op!(Fcmovnu_st0_sti, St0, Sti),
            Entry::Rm(&[
                op!(Fneni),
                op!(Fndisi),
                op!(Fnclex),
                op!(Fninit),
                op!(Fnsetpm),
                op!(Frstpm),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            op!(Fucomi_st0_sti, St0, Sti),
            op!(Fcomi_st0_sti, St0, Sti),
            Entry::Invalid,
        ]),
        &Entry::Group(&[
            mem!(Fild_m32int, Int32, M),
            mem!(Fisttp_m32int, Int32, M),
            mem!(Fist_m32int, Int32, M),
            mem!(Fistp_m32int, Int32, M),
            Entry::Invalid,
            mem!(Fld_m80fp, Float80, M),
            Entry::Invalid,
            mem!(Fstp_m80fp, Float80, M),
        ]),
    ),
    // DC
    Entry::Mod(
        &Entry::Group(&[
            op!(Fadd_sti_st0, Sti, St0),
            op!(Fmul_sti_st0, Sti, St0),
            op!(Fcom_st0_sti_DCD0, St0, Sti),
            op!(Fcomp_st0_sti_DCD8, St0, Sti),
            op!(Fsubr_sti_st0, Sti, St0),
            op!(Fsub_sti_st0, Sti, St0),
            op!(Fdivr_sti_st0, Sti, St0),
            op!(Fdiv_sti_st0, Sti, St0),
        ]),
        &Entry::Group(&[
            mem!(Fadd_m64fp, Float64, M),
            mem!(Fmul_m64fp, Float64, M),
            mem!(Fcom_m64fp, Float64, M),
            mem!(Fcomp_m64fp, Float64, M),
            mem!(Fsub_m64fp, Float64, M),
            mem!(Fsubr_m64fp, Float64, M),
            mem!(Fdiv_m64fp, Float64, M),
            mem!(Fdivr_m64fp, Float64, M),
        ]),
    ),
    // DD
    Entry::Mod(
        &Entry::Group(&[
            op!(Ffree_sti, Sti),
            op!(Fxch_st0_sti_DDC8, St0, Sti),
            op!(Fst_sti, Sti),
            op!(Fstp_sti, Sti),
            op!(Fucom_st0_sti, St0, Sti),
            op!(Fucomp_st0_sti, St0, Sti),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        &Entry::Group(&[
            mem!(Fld_m64fp, Float64, M),
            mem!(Fisttp_m64int, Float64, M),
            mem!(Fst_m64fp, Float64, M),
            mem!(Fstp_m64fp, Float64, M),
            osz_mem!(
                [Frstor_m94byte, Frstor_m108byte, Frstor_m108byte],
                [FpuState94, FpuState108, FpuState108],
                M
            ),
            Entry::Invalid,
            osz_mem!(
                [Fnsave_m94byte, Fnsave_m108byte, Fnsave_m108byte],
                [FpuState94, FpuState108, FpuState108],
                M
            ),
            mem!(Fnstsw_m2byte, UInt16, M),
        ]),
    ),
    // DE
    Entry::Mod(
        &Entry::Group(&[
            op!(Faddp_sti_st0, Sti, St0),
            op!(Fmulp_sti_st0, Sti, St0),
            op!(Fcomp_st0_sti_DED0, St0, Sti),
            Entry::Rm(&[
                Entry::Invalid,
                op!(Fcompp),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            op!(Fsubrp_sti_st0, Sti, St0),
            op!(Fsubp_sti_st0, Sti, St0),
            op!(Fdivrp_sti_st0, Sti, St0),
            op!(Fdivp_sti_st0, Sti, St0),
        ]),
        &Entry::Group(&[
            mem!(Fiadd_m16int, Int16, M),
            mem!(Fimul_m16int, Int16, M),
            mem!(Ficom_m16int, Int16, M),
            mem!(Ficomp_m16int, Int16, M),
            mem!(Fisub_m16int, Int16, M),
            mem!(Fisubr_m16int, Int16, M),
            mem!(Fidiv_m16int, Int16, M),
            mem!(Fidivr_m16int, Int16, M),
        ]),
    ),
    // DF
    Entry::Mod(
        &Entry::Group(&[
            op!(Ffreep_sti, Sti),
            op!(Fxch_st0_sti_DFC8, St0, Sti),
            op!(Fstp_sti_DFD0, Sti),
            op!(Fstp_sti_DFD8, Sti),
            Entry::Rm(&[
                op!(Fnstsw_AX, AX),
                op!(Fstdw_AX, AX),
                op!(Fstsg_AX, AX),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            op!(Fucomip_st0_sti, St0, Sti),
            op!(Fcomip_st0_sti, St0, Sti),
            Entry::Invalid,
        ]),
        &Entry::Group(&[
            mem!(Fild_m16int, Int16, M),
            mem!(Fisttp_m16int, Int16, M),
            mem!(Fist_m16int, Int16, M),
            mem!(Fistp_m16int, Int16, M),
            mem!(Fbld_m80bcd, Bcd, M),
            mem!(Fild_m64int, Int64, M),
            mem!(Fbstp_m80bcd, Bcd, M),
            mem!(Fistp_m64int, Int64, M),
        ]),
    ),
    // E0
    Entry::Asz(&[
        osz!([Loopne_rel8_16_CX, Loopne_rel8_32_CX, Loopne_rel8_32_CX], Jb; BRANCH64),
        osz!([Loopne_rel8_16_ECX, Loopne_rel8_32_ECX, Loopne_rel8_64_ECX], Jb; BRANCH64),
        osz!([Loopne_rel8_16_RCX, Loopne_rel8_64_RCX, Loopne_rel8_64_RCX], Jb; BRANCH64),
    ]),
    // E1
    Entry::Asz(&[
        osz!([Loope_rel8_16_CX, Loope_rel8_32_CX, Loope_rel8_32_CX], Jb; BRANCH64),
        osz!([Loope_rel8_16_ECX, Loope_rel8_32_ECX, Loope_rel8_64_ECX], Jb; BRANCH64),
        osz!([Loope_rel8_16_RCX, Loope_rel8_64_RCX, Loope_rel8_64_RCX], Jb; BRANCH64),
    ]),
    // E2
    Entry::Asz(&[
        osz!([Loop_rel8_16_CX, Loop_rel8_32_CX, Loop_rel8_32_CX], Jb; BRANCH64),
        osz!([Loop_rel8_16_ECX, Loop_rel8_32_ECX, Loop_rel8_64_ECX], Jb; BRANCH64),
        osz!([Loop_rel8_16_RCX, Loop_rel8_64_RCX, Loop_rel8_64_RCX], Jb; BRANCH64),
    ]),
    // E3
    Entry::Asz(&[
        osz!([Jcxz_rel8_16, Jcxz_rel8_32, Jcxz_rel8_32], Jb; BRANCH64),
        osz!([Jecxz_rel8_16, Jecxz_rel8_32, Jecxz_rel8_64], Jb; BRANCH64),
        osz!([Jrcxz_rel8_16, Jrcxz_rel8_64, Jrcxz_rel8_64], Jb; BRANCH64),
    ]),
    // E4
    op!(In_AL_imm8, AL, Ib),
    // E5
    osz!([In_AX_imm8, In_EAX_imm8, In_EAX_imm8], Accz, Ib),
    // E6
    op!(Out_imm8_AL, Ib, AL),
    // E7
    osz!([Out_imm8_AX, Out_imm8_EAX, Out_imm8_EAX], Ib, Accz),
    // E8
    osz!([Call_rel16, Call_rel32_32, Call_rel32_64], Jz; BRANCH64),
    // E9
    osz!([Jmp_rel16, Jmp_rel32_32, Jmp_rel32_64], Jz; BRANCH64),
    // EA
    osz!([Jmp_ptr1616, Jmp_ptr1632, Jmp_ptr1632], Ap; NO64),
    // EB
    osz!([Jmp_rel8_16, Jmp_rel8_32, Jmp_rel8_64], Jb; BRANCH64),
    // EC
    op!(In_AL_DX, AL, DX),
    // ED
    osz!([In_AX_DX, In_EAX_DX, In_EAX_DX], Accz, DX),
    // EE
    op!(Out_DX_AL, DX, AL),
    // EF
    osz!([Out_DX_AX, Out_DX_EAX, Out_DX_EAX], DX, Accz),
    // F0
    Entry::Invalid,
    // F1
    op!(Int1),
    // F2
    Entry::Invalid,
    // F3
    Entry::Invalid,
    // F4
    op!(Hlt),
    // F5
    op!(Cmc),
    // F6
    Entry::Group(&[
        op!(Test_rm8_imm8, Eb, Ib),
        op!(Test_rm8_imm8_F6r1, Eb, Ib),
        op!(Not_rm8, Eb; LOCK | HLE),
        mem!(Neg_rm8, Int8, Eb; LOCK | HLE),
        op!(Mul_rm8, Eb),
        mem!(Imul_rm8, Int8, Eb),
        op!(Div_rm8, Eb),
        mem!(Idiv_rm8, Int8, Eb),
    ]),
    // F7
    Entry::Group(&[
        osz!([Test_rm16_imm16, Test_rm32_imm32, Test_rm64_imm32], Ev, Iz),
        osz!([Test_rm16_imm16_F7r1, Test_rm32_imm32_F7r1, Test_rm64_imm32_F7r1], Ev, Iz),
        osz!([Not_rm16, Not_rm32, Not_rm64], Ev; LOCK | HLE),
        osz_mem!([Neg_rm16, Neg_rm32, Neg_rm64], [Int16, Int32, Int64], Ev; LOCK | HLE),
        osz!([Mul_rm16, Mul_rm32, Mul_rm64], Ev),
        osz_mem!([Imul_rm16, Imul_rm32, Imul_rm64], [Int16, Int32, Int64], Ev),
        osz!([Div_rm16, Div_rm32, Div_rm64], Ev),
        osz_mem!([Idiv_rm16, Idiv_rm32, Idiv_rm64], [Int16, Int32, Int64], Ev),
    ]),
    // F8
    op!(Clc),
    // F9
    op!(Stc),
    // FA
    op!(Cli),
    // FB
    op!(Sti),
    // FC
    op!(Cld),
    // FD
    op!(Std),
    // FE
    Entry::Group(&[
        op!(Inc_rm8, Eb; LOCK | HLE),
        op!(Dec_rm8, Eb; LOCK | HLE),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FF
    Entry::Group(&[
        osz!([Inc_rm16, Inc_rm32, Inc_rm64], Ev; LOCK | HLE),
        osz!([Dec_rm16, Dec_rm32, Dec_rm64], Ev; LOCK | HLE),
        osz_mem!(
            [Call_rm16, Call_rm32, Call_rm64],
            [WordOffset, DwordOffset, QwordOffset],
            Ev; BRANCH64
        ),
        osz_mem!([Call_m1616, Call_m1632, Call_m1664], [SegPtr16, SegPtr32, SegPtr64], M),
        osz_mem!(
            [Jmp_rm16, Jmp_rm32, Jmp_rm64],
            [WordOffset, DwordOffset, QwordOffset],
            Ev; BRANCH64
        ),
        osz_mem!([Jmp_m1616, Jmp_m1632, Jmp_m1664], [SegPtr16, SegPtr32, SegPtr64], M),
        osz!([Push_rm16, Push_rm32, Push_rm64], Ev; DEF64),
        Entry::Invalid,
    ]),
];
