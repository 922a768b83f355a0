//! Three-byte opcode maps.

use super::*;

/// Opcodes following `0F 38`.
pub(crate) static MAP_0F38: [Entry; 256] = [
    // 00
    Entry::Prefix(&[
        mem!(Pshufb_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Pshufb_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 01
    Entry::Prefix(&[
        mem!(Phaddw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Phaddw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 02
    Entry::Prefix(&[
        mem!(Phaddd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Phaddd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 03
    Entry::Prefix(&[
        mem!(Phaddsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Phaddsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 04
    Entry::Prefix(&[
        mem!(Pmaddubsw_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Pmaddubsw_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 05
    Entry::Prefix(&[
        mem!(Phsubw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Phsubw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 06
    Entry::Prefix(&[
        mem!(Phsubd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Phsubd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 07
    Entry::Prefix(&[
        mem!(Phsubsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Phsubsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 08
    Entry::Prefix(&[
        mem!(Psignb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Psignb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 09
    Entry::Prefix(&[
        mem!(Psignw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Psignw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0A
    Entry::Prefix(&[
        mem!(Psignd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Psignd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0B
    Entry::Prefix(&[
        mem!(Pmulhrsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pmulhrsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0C
    Entry::Invalid,
    // 0D
    Entry::Invalid,
    // 0E
    Entry::Invalid,
    // 0F
    Entry::Invalid,
    // 10
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pblendvb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 11
    Entry::Invalid,
    // 12
    Entry::Invalid,
    // 13
    Entry::Invalid,
    // 14
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Blendvps_xmm_xmmm128, Packed128_Float32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Blendvpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Invalid,
    // 17
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Ptest_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::Invalid,
    // 19
    Entry::Invalid,
    // 1A
    Entry::Invalid,
    // 1B
    Entry::Invalid,
    // 1C
    Entry::Prefix(&[
        mem!(Pabsb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Pabsb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1D
    Entry::Prefix(&[
        mem!(Pabsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pabsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1E
    Entry::Prefix(&[
        mem!(Pabsd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Pabsd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1F
    Entry::Invalid,
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxbw_xmm_xmmm64, Packed64_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxbd_xmm_xmmm32, UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxbq_xmm_xmmm16, UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 23
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxwd_xmm_xmmm64, Packed64_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 24
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxwq_xmm_xmmm32, UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 25
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovsxdq_xmm_xmmm64, Packed64_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 26
    Entry::Invalid,
    // 27
    Entry::Invalid,
    // 28
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmuldq_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpeqq_xmm_xmmm128, Packed128_Int64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(&Entry::Invalid, &mem!(Movntdqa_xmm_m128, UInt128, V, M)),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2B
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Packusdw_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2C
    Entry::Invalid,
    // 2D
    Entry::Invalid,
    // 2E
    Entry::Invalid,
    // 2F
    Entry::Invalid,
    // 30
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxbw_xmm_xmmm64, Packed64_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 31
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxbd_xmm_xmmm32, UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 32
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxbq_xmm_xmmm16, UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 33
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxwd_xmm_xmmm64, Packed64_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 34
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxwq_xmm_xmmm32, UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 35
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmovzxdq_xmm_xmmm64, Packed64_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 36
    Entry::Invalid,
    // 37
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpgtq_xmm_xmmm128, Packed128_Int64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 38
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pminsb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 39
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pminsd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3A
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pminuw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3B
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pminud_xmm_xmmm128, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3C
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmaxsb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3D
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmaxsd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3E
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmaxuw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3F
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmaxud_xmm_xmmm128, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 40
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pmulld_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 41
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Phminposuw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 42
    Entry::Invalid,
    // 43
    Entry::Invalid,
    // 44
    Entry::Invalid,
    // 45
    Entry::Invalid,
    // 46
    Entry::Invalid,
    // 47
    Entry::Invalid,
    // 48
    Entry::Invalid,
    // 49
    Entry::Invalid,
    // 4A
    Entry::Invalid,
    // 4B
    Entry::Invalid,
    // 4C
    Entry::Invalid,
    // 4D
    Entry::Invalid,
    // 4E
    Entry::Invalid,
    // 4F
    Entry::Invalid,
    // 50
    Entry::Invalid,
    // 51
    Entry::Invalid,
    // 52
    Entry::Invalid,
    // 53
    Entry::Invalid,
    // 54
    Entry::Invalid,
    // 55
    Entry::Invalid,
    // 56
    Entry::Invalid,
    // 57
    Entry::Invalid,
    // 58
    Entry::Invalid,
    // 59
    Entry::Invalid,
    // 5A
    Entry::Invalid,
    // 5B
    Entry::Invalid,
    // 5C
    Entry::Invalid,
    // 5D
    Entry::Invalid,
    // 5E
    Entry::Invalid,
    // 5F
    Entry::Invalid,
    // 60
    Entry::Invalid,
    // 61
    Entry::Invalid,
    // 62
    Entry::Invalid,
    // 63
    Entry::Invalid,
    // 64
    Entry::Invalid,
    // 65
    Entry::Invalid,
    // 66
    Entry::Invalid,
    // 67
    Entry::Invalid,
    // 68
    Entry::Invalid,
    // 69
    Entry::Invalid,
    // 6A
    Entry::Invalid,
    // 6B
    Entry::Invalid,
    // 6C
    Entry::Invalid,
    // 6D
    Entry::Invalid,
    // 6E
    Entry::Invalid,
    // 6F
    Entry::Invalid,
    // 70
    Entry::Invalid,
    // 71
    Entry::Invalid,
    // 72
    Entry::Invalid,
    // 73
    Entry::Invalid,
    // 74
    Entry::Invalid,
    // 75
    Entry::Invalid,
    // 76
    Entry::Invalid,
    // 77
    Entry::Invalid,
    // 78
    Entry::Invalid,
    // 79
    Entry::Invalid,
    // 7A
    Entry::Invalid,
    // 7B
    Entry::Invalid,
    // 7C
    Entry::Invalid,
    // 7D
    Entry::Invalid,
    // 7E
    Entry::Invalid,
    // 7F
    Entry::Invalid,
    // 80
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Invept_Gd_M, Invept_Gd_M, Invept_Gq_M],
            [UInt128, UInt128, UInt128],
            Gy, M; FORCE64
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 81
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Invvpid_Gd_M, Invvpid_Gd_M, Invvpid_Gq_M],
            [UInt128, UInt128, UInt128],
            Gy, M; FORCE64
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 82
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Invpcid_Gd_M, Invpcid_Gd_M, Invpcid_Gq_M],
            [UInt128, UInt128, UInt128],
            Gy, M; FORCE64
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 83
    Entry::Invalid,
    // 84
    Entry::Invalid,
    // 85
    Entry::Invalid,
    // 86
    Entry::Invalid,
    // 87
    Entry::Invalid,
    // 88
    Entry::Invalid,
    // 89
    Entry::Invalid,
    // 8A
    Entry::Invalid,
    // 8B
    Entry::Invalid,
    // 8C
    Entry::Invalid,
    // 8D
    Entry::Invalid,
    // 8E
    Entry::Invalid,
    // 8F
    Entry::Invalid,
    // 90
    Entry::Invalid,
    // 91
    Entry::Invalid,
    // 92
    Entry::Invalid,
    // 93
    Entry::Invalid,
    // 94
    Entry::Invalid,
    // 95
    Entry::Invalid,
    // 96
    Entry::Invalid,
    // 97
    Entry::Invalid,
    // 98
    Entry::Invalid,
    // 99
    Entry::Invalid,
    // 9A
    Entry::Invalid,
    // 9B
    Entry::Invalid,
    // 9C
    Entry::Invalid,
    // 9D
    Entry::Invalid,
    // 9E
    Entry::Invalid,
    // 9F
    Entry::Invalid,
    // A0
    Entry::Invalid,
    // A1
    Entry::Invalid,
    // A2
    Entry::Invalid,
    // A3
    Entry::Invalid,
    // A4
    Entry::Invalid,
    // A5
    Entry::Invalid,
    // A6
    Entry::Invalid,
    // A7
    Entry::Invalid,
    // A8
    Entry::Invalid,
    // A9
    Entry::Invalid,
    // AA
    Entry::Invalid,
    // AB
    Entry::Invalid,
    // AC
    Entry::Invalid,
    // AD
    Entry::Invalid,
    // AE
    Entry::Invalid,
    // AF
    Entry::Invalid,
    // B0
    Entry::Invalid,
    // B1
    Entry::Invalid,
    // B2
    Entry::Invalid,
    // B3
    Entry::Invalid,
    // B4
    Entry::Invalid,
    // B5
    Entry::Invalid,
    // B6
    Entry::Invalid,
    // B7
    Entry::Invalid,
    // B8
    Entry::Invalid,
    // B9
    Entry::Invalid,
    // BA
    Entry::Invalid,
    // BB
    Entry::Invalid,
    // BC
    Entry::Invalid,
    // BD
    Entry::Invalid,
    // BE
    Entry::Invalid,
    // BF
    Entry::Invalid,
    // C0
    Entry::Invalid,
    // C1
    Entry::Invalid,
    // C2
    Entry::Invalid,
    // C3
    Entry::Invalid,
    // C4
    Entry::Invalid,
    // C5
    Entry::Invalid,
    // C6
    Entry::Invalid,
    // C7
    Entry::Invalid,
    // C8
    Entry::Prefix(&[
        mem!(Sha1nexte_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C9
    Entry::Prefix(&[
        mem!(Sha1msg1_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CA
    Entry::Prefix(&[
        mem!(Sha1msg2_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CB
    Entry::Prefix(&[
        mem!(Sha256rnds2_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CC
    Entry::Prefix(&[
        mem!(Sha256msg1_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CD
    Entry::Prefix(&[
        mem!(Sha256msg2_VX_WX, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CE
    Entry::Invalid,
    // CF
    Entry::Invalid,
    // D0
    Entry::Invalid,
    // D1
    Entry::Invalid,
    // D2
    Entry::Invalid,
    // D3
    Entry::Invalid,
    // D4
    Entry::Invalid,
    // D5
    Entry::Invalid,
    // D6
    Entry::Invalid,
    // D7
    Entry::Invalid,
    // D8
    Entry::Invalid,
    // D9
    Entry::Invalid,
    // DA
    Entry::Invalid,
    // DB
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aesimc_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aesenc_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DD
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aesenclast_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DE
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aesdec_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DF
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aesdeclast_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E0
    Entry::Invalid,
    // E1
    Entry::Invalid,
    // E2
    Entry::Invalid,
    // E3
    Entry::Invalid,
    // E4
    Entry::Invalid,
    // E5
    Entry::Invalid,
    // E6
    Entry::Invalid,
    // E7
    Entry::Invalid,
    // E8
    Entry::Invalid,
    // E9
    Entry::Invalid,
    // EA
    Entry::Invalid,
    // EB
    Entry::Invalid,
    // EC
    Entry::Invalid,
    // ED
    Entry::Invalid,
    // EE
    Entry::Invalid,
    // EF
    Entry::Invalid,
    // F0
    Entry::Rep(&[
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!([Movbe_r16_m16, Movbe_r32_m32, Movbe_r64_m64], [UInt16, UInt32, UInt64], Gv, M),
        ),
        Entry::Invalid,
        osz!([Crc32_r32_rm8, Crc32_r32_rm8, Crc32_r64_rm8], Gy, Eb),
    ]),
    // F1
    Entry::Rep(&[
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!([Movbe_m16_r16, Movbe_m32_r32, Movbe_m64_r64], [UInt16, UInt32, UInt64], M, Gv),
        ),
        Entry::Invalid,
        osz!([Crc32_r32_rm16, Crc32_r32_rm32, Crc32_r64_rm64], Gy, Ev),
    ]),
    // F2
    Entry::Invalid,
    // F3
    Entry::Invalid,
    // F4
    Entry::Invalid,
    // F5
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!(
                [Wrussd_m32_r32, Wrussd_m32_r32, Wrussq_m64_r64],
                [UInt32, UInt32, UInt64],
                M, Gy
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F6
    Entry::Prefix(&[
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!([Wrssd_m32_r32, Wrssd_m32_r32, Wrssq_m64_r64], [UInt32, UInt32, UInt64], M, Gy),
        ),
        osz!([Adcx_r32_rm32, Adcx_r32_rm32, Adcx_r64_rm64], Gy, Ey),
        osz!([Adox_r32_rm32, Adox_r32_rm32, Adox_r64_rm64], Gy, Ey),
        Entry::Invalid,
    ]),
    // F7
    Entry::Invalid,
    // F8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::Asz(&[
                mem!(Movdir64b_r16_m512, UInt512, Gw, M),
                mem!(Movdir64b_r32_m512, UInt512, Gd, M),
                mem!(Movdir64b_r64_m512, UInt512, Gq, M),
            ]),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F9
    Entry::Prefix(&[
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!(
                [Movdiri_m32_r32, Movdiri_m32_r32, Movdiri_m64_r64],
                [UInt32, UInt32, UInt64],
                M, Gy
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FA
    Entry::Invalid,
    // FB
    Entry::Invalid,
    // FC
    Entry::Invalid,
    // FD
    Entry::Invalid,
    // FE
    Entry::Invalid,
    // FF
    Entry::Invalid,
];

/// Opcodes following `0F 3A`, all of them take an imm8.
pub(crate) static MAP_0F3A: [Entry; 256] = [
    // 00
    Entry::Invalid,
    // 01
    Entry::Invalid,
    // 02
    Entry::Invalid,
    // 03
    Entry::Invalid,
    // 04
    Entry::Invalid,
    // 05
    Entry::Invalid,
    // 06
    Entry::Invalid,
    // 07
    Entry::Invalid,
    // 08
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Roundps_xmm_xmmm128_imm8, Packed128_Float32, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 09
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Roundpd_xmm_xmmm128_imm8, Packed128_Float64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0A
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Roundss_xmm_xmmm32_imm8, Float32, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0B
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Roundsd_xmm_xmmm64_imm8, Float64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0C
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Blendps_xmm_xmmm128_imm8, Packed128_Float32, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0D
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Blendpd_xmm_xmmm128_imm8, Packed128_Float64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0E
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pblendw_xmm_xmmm128_imm8, Packed128_Int16, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0F
    Entry::Prefix(&[
        mem!(Palignr_mm_mmm64_imm8, Packed64_Int8, P, Q, Ib),
        mem!(Palignr_xmm_xmmm128_imm8, Packed128_Int8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 10
    Entry::Invalid,
    // 11
    Entry::Invalid,
    // 12
    Entry::Invalid,
    // 13
    Entry::Invalid,
    // 14
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Pextrb_r32m8_xmm_imm8, Pextrb_r32m8_xmm_imm8, Pextrb_r64m8_xmm_imm8],
            [UInt8, UInt8, UInt8],
            Ey, V, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Pextrw_r32m16_xmm_imm8, Pextrw_r32m16_xmm_imm8, Pextrw_r64m16_xmm_imm8],
            [UInt16, UInt16, UInt16],
            Ey, V, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Pextrd_rm32_xmm_imm8, Pextrd_rm32_xmm_imm8, Pextrq_rm64_xmm_imm8],
            [UInt32, UInt32, UInt64],
            Ey, V, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Extractps_rm32_xmm_imm8, Extractps_rm32_xmm_imm8, Extractps_r64m32_xmm_imm8],
            [Float32, Float32, Float32],
            Ey, V, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::Invalid,
    // 19
    Entry::Invalid,
    // 1A
    Entry::Invalid,
    // 1B
    Entry::Invalid,
    // 1C
    Entry::Invalid,
    // 1D
    Entry::Invalid,
    // 1E
    Entry::Invalid,
    // 1F
    Entry::Invalid,
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Pinsrb_xmm_r32m8_imm8, Pinsrb_xmm_r32m8_imm8, Pinsrb_xmm_r64m8_imm8],
            [UInt8, UInt8, UInt8],
            V, Ey, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Insertps_xmm_xmmm32_imm8, Float32, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [Pinsrd_xmm_rm32_imm8, Pinsrd_xmm_rm32_imm8, Pinsrq_xmm_rm64_imm8],
            [UInt32, UInt32, UInt64],
            V, Ey, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 23
    Entry::Invalid,
    // 24
    Entry::Invalid,
    // 25
    Entry::Invalid,
    // 26
    Entry::Invalid,
    // 27
    Entry::Invalid,
    // 28
    Entry::Invalid,
    // 29
    Entry::Invalid,
    // 2A
    Entry::Invalid,
    // 2B
    Entry::Invalid,
    // 2C
    Entry::Invalid,
    // 2D
    Entry::Invalid,
    // 2E
    Entry::Invalid,
    // 2F
    Entry::Invalid,
    // 30
    Entry::Invalid,
    // 31
    Entry::Invalid,
    // 32
    Entry::Invalid,
    // 33
    Entry::Invalid,
    // 34
    Entry::Invalid,
    // 35
    Entry::Invalid,
    // 36
    Entry::Invalid,
    // 37
    Entry::Invalid,
    // 38
    Entry::Invalid,
    // 39
    Entry::Invalid,
    // 3A
    Entry::Invalid,
    // 3B
    Entry::Invalid,
    // 3C
    Entry::Invalid,
    // 3D
    Entry::Invalid,
    // 3E
    Entry::Invalid,
    // 3F
    Entry::Invalid,
    // 40
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Dpps_xmm_xmmm128_imm8, Packed128_Float32, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 41
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Dppd_xmm_xmmm128_imm8, Packed128_Float64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 42
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Mpsadbw_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 43
    Entry::Invalid,
    // 44
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pclmulqdq_xmm_xmmm128_imm8, Packed128_UInt64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 45
    Entry::Invalid,
    // 46
    Entry::Invalid,
    // 47
    Entry::Invalid,
    // 48
    Entry::Invalid,
    // 49
    Entry::Invalid,
    // 4A
    Entry::Invalid,
    // 4B
    Entry::Invalid,
    // 4C
    Entry::Invalid,
    // 4D
    Entry::Invalid,
    // 4E
    Entry::Invalid,
    // 4F
    Entry::Invalid,
    // 50
    Entry::Invalid,
    // 51
    Entry::Invalid,
    // 52
    Entry::Invalid,
    // 53
    Entry::Invalid,
    // 54
    Entry::Invalid,
    // 55
    Entry::Invalid,
    // 56
    Entry::Invalid,
    // 57
    Entry::Invalid,
    // 58
    Entry::Invalid,
    // 59
    Entry::Invalid,
    // 5A
    Entry::Invalid,
    // 5B
    Entry::Invalid,
    // 5C
    Entry::Invalid,
    // 5D
    Entry::Invalid,
    // 5E
    Entry::Invalid,
    // 5F
    Entry::Invalid,
    // 60
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpestrm_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 61
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpestri_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 62
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpistrm_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Pcmpistri_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 64
    Entry::Invalid,
    // 65
    Entry::Invalid,
    // 66
    Entry::Invalid,
    // 67
    Entry::Invalid,
    // 68
    Entry::Invalid,
    // 69
    Entry::Invalid,
    // 6A
    Entry::Invalid,
    // 6B
    Entry::Invalid,
    // 6C
    Entry::Invalid,
    // 6D
    Entry::Invalid,
    // 6E
    Entry::Invalid,
    // 6F
    Entry::Invalid,
    // 70
    Entry::Invalid,
    // 71
    Entry::Invalid,
    // 72
    Entry::Invalid,
    // 73
    Entry::Invalid,
    // 74
    Entry::Invalid,
    // 75
    Entry::Invalid,
    // 76
    Entry::Invalid,
    // 77
    Entry::Invalid,
    // 78
    Entry::Invalid,
    // 79
    Entry::Invalid,
    // 7A
    Entry::Invalid,
    // 7B
    Entry::Invalid,
    // 7C
    Entry::Invalid,
    // 7D
    Entry::Invalid,
    // 7E
    Entry::Invalid,
    // 7F
    Entry::Invalid,
    // 80
    Entry::Invalid,
    // 81
    Entry::Invalid,
    // 82
    Entry::Invalid,
    // 83
    Entry::Invalid,
    // 84
    Entry::Invalid,
    // 85
    Entry::Invalid,
    // 86
    Entry::Invalid,
    // 87
    Entry::Invalid,
    // 88
    Entry::Invalid,
    // 89
    Entry::Invalid,
    // 8A
    Entry::Invalid,
    // 8B
    Entry::Invalid,
    // 8C
    Entry::Invalid,
    // 8D
    Entry::Invalid,
    // 8E
    Entry::Invalid,
    // 8F
    Entry::Invalid,
    // 90
    Entry::Invalid,
    // 91
    Entry::Invalid,
    // 92
    Entry::Invalid,
    // 93
    Entry::Invalid,
    // 94
    Entry::Invalid,
    // 95
    Entry::Invalid,
    // 96
    Entry::Invalid,
    // 97
    Entry::Invalid,
    // 98
    Entry::Invalid,
    // 99
    Entry::Invalid,
    // 9A
    Entry::Invalid,
    // 9B
    Entry::Invalid,
    // 9C
    Entry::Invalid,
    // 9D
    Entry::Invalid,
    // 9E
    Entry::Invalid,
    // 9F
    Entry::Invalid,
    // A0
    Entry::Invalid,
    // A1
    Entry::Invalid,
    // A2
    Entry::Invalid,
    // A3
    Entry::Invalid,
    // A4
    Entry::Invalid,
    // A5
    Entry::Invalid,
    // A6
    Entry::Invalid,
    // A7
    Entry::Invalid,
    // A8
    Entry::Invalid,
    // A9
    Entry::Invalid,
    // AA
    Entry::Invalid,
    // AB
    Entry::Invalid,
    // AC
    Entry::Invalid,
    // AD
    Entry::Invalid,
    // AE
    Entry::Invalid,
    // AF
    Entry::Invalid,
    // B0
    Entry::Invalid,
    // B1
    Entry::Invalid,
    // B2
    Entry::Invalid,
    // B3
    Entry::Invalid,
    // B4
    Entry::Invalid,
    // B5
    Entry::Invalid,
    // B6
    Entry::Invalid,
    // B7
    Entry::Invalid,
    // B8
    Entry::Invalid,
    // B9
    Entry::Invalid,
    // BA
    Entry::Invalid,
    // BB
    Entry::Invalid,
    // BC
    Entry::Invalid,
    // BD
    Entry::Invalid,
    // BE
    Entry::Invalid,
    // BF
    Entry::Invalid,
    // C0
    Entry::Invalid,
    // C1
    Entry::Invalid,
    // C2
    Entry::Invalid,
    // C3
    Entry::Invalid,
    // C4
    Entry::Invalid,
    // C5
    Entry::Invalid,
    // C6
    Entry::Invalid,
    // C7
    Entry::Invalid,
    // C8
    Entry::Invalid,
    // C9
    Entry::Invalid,
    // CA
    Entry::Invalid,
    // CB
    Entry::Invalid,
    // CC
    Entry::Invalid,
    // CD
    Entry::Invalid,
    // CE
    Entry::Invalid,
    // CF
    Entry::Invalid,
    // D0
    Entry::Invalid,
    // D1
    Entry::Invalid,
    // D2
    Entry::Invalid,
    // D3
    Entry::Invalid,
    // D4
    Entry::Invalid,
    // D5
    Entry::Invalid,
    // D6
    Entry::Invalid,
    // D7
    Entry::Invalid,
    // D8
    Entry::Invalid,
    // D9
    Entry::Invalid,
    // DA
    Entry::Invalid,
    // DB
    Entry::Invalid,
    // DC
    Entry::Invalid,
    // DD
    Entry::Invalid,
    // DE
    Entry::Invalid,
    // DF
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Aeskeygenassist_xmm_xmmm128_imm8, UInt128, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E0
    Entry::Invalid,
    // E1
    Entry::Invalid,
    // E2
    Entry::Invalid,
    // E3
    Entry::Invalid,
    // E4
    Entry::Invalid,
    // E5
    Entry::Invalid,
    // E6
    Entry::Invalid,
    // E7
    Entry::Invalid,
    // E8
    Entry::Invalid,
    // E9
    Entry::Invalid,
    // EA
    Entry::Invalid,
    // EB
    Entry::Invalid,
    // EC
    Entry::Invalid,
    // ED
    Entry::Invalid,
    // EE
    Entry::Invalid,
    // EF
    Entry::Invalid,
    // F0
    Entry::Invalid,
    // F1
    Entry::Invalid,
    // F2
    Entry::Invalid,
    // F3
    Entry::Invalid,
    // F4
    Entry::Invalid,
    // F5
    Entry::Invalid,
    // F6
    Entry::Invalid,
    // F7
    Entry::Invalid,
    // F8
    Entry::Invalid,
    // F9
    Entry::Invalid,
    // FA
    Entry::Invalid,
    // FB
    Entry::Invalid,
    // FC
    Entry::Invalid,
    // FD
    Entry::Invalid,
    // FE
    Entry::Invalid,
    // FF
    Entry::Invalid,
];
