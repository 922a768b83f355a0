//! XOP encoded opcode maps.

use super::*;

/// XOP map 8, all of them take an `is4` or imm8 operand.
pub(crate) static XOP_8: [Entry; 256] = [
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
    Entry::Invalid,
    // 09
    Entry::Invalid,
    // 0A
    Entry::Invalid,
    // 0B
    Entry::Invalid,
    // 0C
    Entry::Invalid,
    // 0D
    Entry::Invalid,
    // 0E
    Entry::Invalid,
    // 0F
    Entry::Invalid,
    // 10
    Entry::Invalid,
    // 11
    Entry::Invalid,
    // 12
    Entry::Invalid,
    // 13
    Entry::Invalid,
    // 14
    Entry::Invalid,
    // 15
    Entry::Invalid,
    // 16
    Entry::Invalid,
    // 17
    Entry::Invalid,
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
    Entry::Invalid,
    // 21
    Entry::Invalid,
    // 22
    Entry::Invalid,
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
    Entry::Invalid,
    // 41
    Entry::Invalid,
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacssww_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 86
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacsswd_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 87
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacssdql_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacssdd_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8F
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacssdqh_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacsww_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 96
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacswd_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 97
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacsdql_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacsdd_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9F
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmacsdqh_xmm_xmm_xmmm128_xmm, Packed128_Int32, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A0
    Entry::Invalid,
    // A1
    Entry::Invalid,
    // A2
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [XOP_Vpcmov_xmm_xmm_xmmm128_xmm, XOP_Vpcmov_ymm_ymm_ymmm256_ymm, INVALID],
                [UInt128, UInt256, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [XOP_Vpcmov_xmm_xmm_xmm_xmmm128, XOP_Vpcmov_ymm_ymm_ymm_ymmm256, INVALID],
                [UInt128, UInt256, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A3
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpperm_xmm_xmm_xmmm128_xmm, Packed128_UInt8, V, H, W, Is4; L0),
            &mem!(XOP_Vpperm_xmm_xmm_xmm_xmmm128, Packed128_UInt8, V, H, Is4, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A4
    Entry::Invalid,
    // A5
    Entry::Invalid,
    // A6
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmadcsswd_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpmadcswd_xmm_xmm_xmmm128_xmm, Packed128_Int16, V, H, W, Is4; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotb_xmm_xmmm128_imm8, Packed128_UInt8, V, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C1
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotw_xmm_xmmm128_imm8, Packed128_UInt16, V, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C2
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotd_xmm_xmmm128_imm8, Packed128_UInt32, V, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C3
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotq_xmm_xmmm128_imm8, Packed128_UInt64, V, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomb_xmm_xmm_xmmm128_imm8, Packed128_Int8, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CD
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomw_xmm_xmm_xmmm128_imm8, Packed128_Int16, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CE
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomd_xmm_xmm_xmmm128_imm8, Packed128_Int32, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CF
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomq_xmm_xmm_xmmm128_imm8, Packed128_Int64, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Invalid,
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomub_xmm_xmm_xmmm128_imm8, Packed128_UInt8, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // ED
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomuw_xmm_xmm_xmmm128_imm8, Packed128_UInt16, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EE
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomud_xmm_xmm_xmmm128_imm8, Packed128_UInt32, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EF
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpcomuq_xmm_xmm_xmmm128_imm8, Packed128_UInt64, V, H, W, Ib; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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

/// XOP map 9.
pub(crate) static XOP_9: [Entry; 256] = [
    // 00
    Entry::Invalid,
    // 01
    Entry::Group(&[
        Entry::Invalid,
        Entry::Prefix(&[
            osz!([XOP_Blcfill_r32_rm32, XOP_Blcfill_r32_rm32, XOP_Blcfill_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Blsfill_r32_rm32, XOP_Blsfill_r32_rm32, XOP_Blsfill_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Blcs_r32_rm32, XOP_Blcs_r32_rm32, XOP_Blcs_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Tzmsk_r32_rm32, XOP_Tzmsk_r32_rm32, XOP_Tzmsk_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Blcic_r32_rm32, XOP_Blcic_r32_rm32, XOP_Blcic_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Blsic_r32_rm32, XOP_Blsic_r32_rm32, XOP_Blsic_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_T1mskc_r32_rm32, XOP_T1mskc_r32_rm32, XOP_T1mskc_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
    ]),
    // 02
    Entry::Group(&[
        Entry::Invalid,
        Entry::Prefix(&[
            osz!([XOP_Blcmsk_r32_rm32, XOP_Blcmsk_r32_rm32, XOP_Blcmsk_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            osz!([XOP_Blci_r32_rm32, XOP_Blci_r32_rm32, XOP_Blci_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
    ]),
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
    Entry::Invalid,
    // 09
    Entry::Invalid,
    // 0A
    Entry::Invalid,
    // 0B
    Entry::Invalid,
    // 0C
    Entry::Invalid,
    // 0D
    Entry::Invalid,
    // 0E
    Entry::Invalid,
    // 0F
    Entry::Invalid,
    // 10
    Entry::Invalid,
    // 11
    Entry::Invalid,
    // 12
    Entry::Group(&[
        Entry::Prefix(&[
            osz!([XOP_Llwpcb_r32, XOP_Llwpcb_r32, XOP_Llwpcb_r64], Ry; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!([XOP_Slwpcb_r32, XOP_Slwpcb_r32, XOP_Slwpcb_r64], Ry; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 13
    Entry::Invalid,
    // 14
    Entry::Invalid,
    // 15
    Entry::Invalid,
    // 16
    Entry::Invalid,
    // 17
    Entry::Invalid,
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
    Entry::Invalid,
    // 21
    Entry::Invalid,
    // 22
    Entry::Invalid,
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
    Entry::Invalid,
    // 41
    Entry::Invalid,
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
        Entry::W(
            &vl!(
                [XOP_Vfrczps_xmm_xmmm128, XOP_Vfrczps_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 81
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [XOP_Vfrczpd_xmm_xmmm128, XOP_Vfrczpd_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 82
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vfrczss_xmm_xmmm32, Float32, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 83
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vfrczsd_xmm_xmmm64, Float64, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotb_xmm_xmmm128_xmm, Packed128_UInt8, V, W, H; L0),
            &mem!(XOP_Vprotb_xmm_xmm_xmmm128, Packed128_UInt8, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 91
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotw_xmm_xmmm128_xmm, Packed128_UInt16, V, W, H; L0),
            &mem!(XOP_Vprotw_xmm_xmm_xmmm128, Packed128_UInt16, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 92
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotd_xmm_xmmm128_xmm, Packed128_UInt32, V, W, H; L0),
            &mem!(XOP_Vprotd_xmm_xmm_xmmm128, Packed128_UInt32, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 93
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vprotq_xmm_xmmm128_xmm, Packed128_UInt64, V, W, H; L0),
            &mem!(XOP_Vprotq_xmm_xmm_xmmm128, Packed128_UInt64, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 94
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshlb_xmm_xmmm128_xmm, Packed128_UInt8, V, W, H; L0),
            &mem!(XOP_Vpshlb_xmm_xmm_xmmm128, Packed128_UInt8, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 95
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshlw_xmm_xmmm128_xmm, Packed128_UInt16, V, W, H; L0),
            &mem!(XOP_Vpshlw_xmm_xmm_xmmm128, Packed128_UInt16, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 96
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshld_xmm_xmmm128_xmm, Packed128_UInt32, V, W, H; L0),
            &mem!(XOP_Vpshld_xmm_xmm_xmmm128, Packed128_UInt32, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 97
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshlq_xmm_xmmm128_xmm, Packed128_UInt64, V, W, H; L0),
            &mem!(XOP_Vpshlq_xmm_xmm_xmmm128, Packed128_UInt64, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 98
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshab_xmm_xmmm128_xmm, Packed128_Int8, V, W, H; L0),
            &mem!(XOP_Vpshab_xmm_xmm_xmmm128, Packed128_Int8, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 99
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshaw_xmm_xmmm128_xmm, Packed128_Int16, V, W, H; L0),
            &mem!(XOP_Vpshaw_xmm_xmm_xmmm128, Packed128_Int16, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9A
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshad_xmm_xmmm128_xmm, Packed128_Int32, V, W, H; L0),
            &mem!(XOP_Vpshad_xmm_xmm_xmmm128, Packed128_Int32, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9B
    Entry::Prefix(&[
        Entry::W(
            &mem!(XOP_Vpshaq_xmm_xmmm128_xmm, Packed128_Int64, V, W, H; L0),
            &mem!(XOP_Vpshaq_xmm_xmm_xmmm128, Packed128_Int64, V, H, W; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddbw_xmm_xmmm128, Packed128_Int8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C2
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddbd_xmm_xmmm128, Packed128_Int8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C3
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddbq_xmm_xmmm128, Packed128_Int8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C4
    Entry::Invalid,
    // C5
    Entry::Invalid,
    // C6
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddwd_xmm_xmmm128, Packed128_Int16, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C7
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddwq_xmm_xmmm128, Packed128_Int16, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C8
    Entry::Invalid,
    // C9
    Entry::Invalid,
    // CA
    Entry::Invalid,
    // CB
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphadddq_xmm_xmmm128, Packed128_Int32, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddubw_xmm_xmmm128, Packed128_UInt8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D2
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddubd_xmm_xmmm128, Packed128_UInt8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D3
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddubq_xmm_xmmm128, Packed128_UInt8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D4
    Entry::Invalid,
    // D5
    Entry::Invalid,
    // D6
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphadduwd_xmm_xmmm128, Packed128_UInt16, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D7
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphadduwq_xmm_xmmm128, Packed128_UInt16, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D8
    Entry::Invalid,
    // D9
    Entry::Invalid,
    // DA
    Entry::Invalid,
    // DB
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphaddudq_xmm_xmmm128, Packed128_UInt32, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Invalid,
    // DD
    Entry::Invalid,
    // DE
    Entry::Invalid,
    // DF
    Entry::Invalid,
    // E0
    Entry::Invalid,
    // E1
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphsubbw_xmm_xmmm128, Packed128_Int8, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E2
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphsubwd_xmm_xmmm128, Packed128_Int16, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E3
    Entry::Prefix(&[
        Entry::W(&mem!(XOP_Vphsubdq_xmm_xmmm128, Packed128_Int32, V, W; L0), &Entry::Invalid),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
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

/// XOP map 10.
pub(crate) static XOP_A: [Entry; 256] = [
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
    Entry::Invalid,
    // 09
    Entry::Invalid,
    // 0A
    Entry::Invalid,
    // 0B
    Entry::Invalid,
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
        osz!(
            [XOP_Bextr_r32_rm32_imm32, XOP_Bextr_r32_rm32_imm32, XOP_Bextr_r64_rm64_imm32],
            Gy, Ey, Id; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 11
    Entry::Invalid,
    // 12
    Entry::Group(&[
        Entry::Prefix(&[
            osz!(
                [XOP_Lwpins_r32_rm32_imm32, XOP_Lwpins_r32_rm32_imm32, XOP_Lwpins_r64_rm32_imm32],
                By, Ed, Id; L0
            ),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            osz!(
                [XOP_Lwpval_r32_rm32_imm32, XOP_Lwpval_r32_rm32_imm32, XOP_Lwpval_r64_rm32_imm32],
                By, Ed, Id; L0
            ),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 13
    Entry::Invalid,
    // 14
    Entry::Invalid,
    // 15
    Entry::Invalid,
    // 16
    Entry::Invalid,
    // 17
    Entry::Invalid,
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
    Entry::Invalid,
    // 21
    Entry::Invalid,
    // 22
    Entry::Invalid,
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
    Entry::Invalid,
    // 41
    Entry::Invalid,
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
    Entry::Invalid,
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
