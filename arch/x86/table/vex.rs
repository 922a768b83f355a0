//! VEX encoded opcode maps.

use super::*;

/// VEX map 1.
pub(crate) static VEX_0F: [Entry; 256] = [
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
        vl!(
            [VEX_Vmovups_xmm_xmmm128, VEX_Vmovups_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vmovupd_xmm_xmmm128, VEX_Vmovupd_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, W
        ),
        Entry::Mod(
            &op!(VEX_Vmovss_xmm_xmm_xmm, Vx, Hx, Ux),
            &mem!(VEX_Vmovss_xmm_m32, Float32, Vx, M),
        ),
        Entry::Mod(
            &op!(VEX_Vmovsd_xmm_xmm_xmm, Vx, Hx, Ux),
            &mem!(VEX_Vmovsd_xmm_m64, Float64, Vx, M),
        ),
    ]),
    // 11
    Entry::Prefix(&[
        vl!(
            [VEX_Vmovups_xmmm128_xmm, VEX_Vmovups_ymmm256_ymm, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            W, V
        ),
        vl!(
            [VEX_Vmovupd_xmmm128_xmm, VEX_Vmovupd_ymmm256_ymm, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            W, V
        ),
        Entry::Mod(
            &op!(VEX_Vmovss_xmm_xmm_xmm_0F11, Ux, Hx, Vx),
            &mem!(VEX_Vmovss_m32_xmm, Float32, M, Vx),
        ),
        Entry::Mod(
            &op!(VEX_Vmovsd_xmm_xmm_xmm_0F11, Ux, Hx, Vx),
            &mem!(VEX_Vmovsd_m64_xmm, Float64, M, Vx),
        ),
    ]),
    // 12
    Entry::Prefix(&[
        Entry::Mod(
            &op!(VEX_Vmovhlps_xmm_xmm_xmm, Vx, Hx, Ux; L0),
            &mem!(VEX_Vmovlps_xmm_xmm_m64, UInt64, Vx, Hx, M; L0),
        ),
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovlpd_xmm_xmm_m64, UInt64, Vx, Hx, M; L0)),
        vl!(
            [VEX_Vmovsldup_xmm_xmmm128, VEX_Vmovsldup_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vmovddup_xmm_xmmm64, VEX_Vmovddup_ymm_ymmm256, INVALID],
            [Float64, Packed256_Float64, Unknown],
            V, W
        ),
    ]),
    // 13
    Entry::Prefix(&[
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovlps_m64_xmm, UInt64, M, Vx; L0)),
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovlpd_m64_xmm, UInt64, M, Vx; L0)),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 14
    Entry::Prefix(&[
        vl!(
            [VEX_Vunpcklps_xmm_xmm_xmmm128, VEX_Vunpcklps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vunpcklpd_xmm_xmm_xmmm128, VEX_Vunpcklpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        vl!(
            [VEX_Vunpckhps_xmm_xmm_xmmm128, VEX_Vunpckhps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vunpckhpd_xmm_xmm_xmmm128, VEX_Vunpckhpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Mod(
            &op!(VEX_Vmovlhps_xmm_xmm_xmm, Vx, Hx, Ux; L0),
            &mem!(VEX_Vmovhps_xmm_xmm_m64, UInt64, Vx, Hx, M; L0),
        ),
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovhpd_xmm_xmm_m64, UInt64, Vx, Hx, M; L0)),
        vl!(
            [VEX_Vmovshdup_xmm_xmmm128, VEX_Vmovshdup_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovhps_m64_xmm, UInt64, M, Vx; L0)),
        Entry::Mod(&Entry::Invalid, &mem!(VEX_Vmovhpd_m64_xmm, UInt64, M, Vx; L0)),
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
    Entry::Prefix(&[
        vl!(
            [VEX_Vmovaps_xmm_xmmm128, VEX_Vmovaps_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vmovapd_xmm_xmmm128, VEX_Vmovapd_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        vl!(
            [VEX_Vmovaps_xmmm128_xmm, VEX_Vmovaps_ymmm256_ymm, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            W, V
        ),
        vl!(
            [VEX_Vmovapd_xmmm128_xmm, VEX_Vmovapd_ymmm256_ymm, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            W, V
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        osz_mem!(
            [VEX_Vcvtsi2ss_xmm_xmm_rm32, VEX_Vcvtsi2ss_xmm_xmm_rm32, VEX_Vcvtsi2ss_xmm_xmm_rm64],
            [Int32, Int32, Int64],
            Vx, Hx, Ey
        ),
        osz_mem!(
            [VEX_Vcvtsi2sd_xmm_xmm_rm32, VEX_Vcvtsi2sd_xmm_xmm_rm32, VEX_Vcvtsi2sd_xmm_xmm_rm64],
            [Int32, Int32, Int64],
            Vx, Hx, Ey
        ),
    ]),
    // 2B
    Entry::Prefix(&[
        Entry::Mod(
            &Entry::Invalid,
            &vl!(
                [VEX_Vmovntps_m128_xmm, VEX_Vmovntps_m256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                M, V
            ),
        ),
        Entry::Mod(
            &Entry::Invalid,
            &vl!(
                [VEX_Vmovntpd_m128_xmm, VEX_Vmovntpd_m256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                M, V
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        osz_mem!(
            [VEX_Vcvttss2si_r32_xmmm32, VEX_Vcvttss2si_r32_xmmm32, VEX_Vcvttss2si_r64_xmmm32],
            [Float32, Float32, Float32],
            Gy, Wx
        ),
        osz_mem!(
            [VEX_Vcvttsd2si_r32_xmmm64, VEX_Vcvttsd2si_r32_xmmm64, VEX_Vcvttsd2si_r64_xmmm64],
            [Float64, Float64, Float64],
            Gy, Wx
        ),
    ]),
    // 2D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        osz_mem!(
            [VEX_Vcvtss2si_r32_xmmm32, VEX_Vcvtss2si_r32_xmmm32, VEX_Vcvtss2si_r64_xmmm32],
            [Float32, Float32, Float32],
            Gy, Wx
        ),
        osz_mem!(
            [VEX_Vcvtsd2si_r32_xmmm64, VEX_Vcvtsd2si_r32_xmmm64, VEX_Vcvtsd2si_r64_xmmm64],
            [Float64, Float64, Float64],
            Gy, Wx
        ),
    ]),
    // 2E
    Entry::Prefix(&[
        mem!(VEX_Vucomiss_xmm_xmmm32, Float32, Vx, Wx),
        mem!(VEX_Vucomisd_xmm_xmmm64, Float64, Vx, Wx),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2F
    Entry::Prefix(&[
        mem!(VEX_Vcomiss_xmm_xmmm32, Float32, Vx, Wx),
        mem!(VEX_Vcomisd_xmm_xmmm64, Float64, Vx, Wx),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kandw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kandq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kandb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kandd_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 42
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kandnw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kandnq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kandnb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kandnd_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 43
    Entry::Invalid,
    // 44
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Knotw_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Knotq_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Knotb_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Knotd_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 45
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Korw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Korq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Korb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kord_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 46
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kxnorw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kxnorq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kxnorb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kxnord_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 47
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kxorw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kxorq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kxorb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kxord_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 48
    Entry::Invalid,
    // 49
    Entry::Invalid,
    // 4A
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kaddw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kaddq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kaddb_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kaddd_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4B
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kunpckwd_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kunpckdq_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kunpckbw_kr_kr_kr, Kr, Kh, Krm; L1), &Entry::Invalid),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4C
    Entry::Invalid,
    // 4D
    Entry::Invalid,
    // 4E
    Entry::Invalid,
    // 4F
    Entry::Invalid,
    // 50
    Entry::Prefix(&[
        Entry::Mod(
            &Entry::Mode(
                &vl!(
                    [VEX_Vmovmskps_r32_xmm, VEX_Vmovmskps_r32_ymm, INVALID],
                    [Unknown, Unknown, Unknown],
                    Gd, U
                ),
                &Entry::W(
                    &vl!(
                        [VEX_Vmovmskps_r32_xmm, VEX_Vmovmskps_r32_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gd, U
                    ),
                    &vl!(
                        [VEX_Vmovmskps_r64_xmm, VEX_Vmovmskps_r64_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gq, U
                    ),
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Mod(
            &Entry::Mode(
                &vl!(
                    [VEX_Vmovmskpd_r32_xmm, VEX_Vmovmskpd_r32_ymm, INVALID],
                    [Unknown, Unknown, Unknown],
                    Gd, U
                ),
                &Entry::W(
                    &vl!(
                        [VEX_Vmovmskpd_r32_xmm, VEX_Vmovmskpd_r32_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gd, U
                    ),
                    &vl!(
                        [VEX_Vmovmskpd_r64_xmm, VEX_Vmovmskpd_r64_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gq, U
                    ),
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 51
    Entry::Prefix(&[
        vl!(
            [VEX_Vsqrtps_xmm_xmmm128, VEX_Vsqrtps_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vsqrtpd_xmm_xmmm128, VEX_Vsqrtpd_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, W
        ),
        mem!(VEX_Vsqrtss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vsqrtsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 52
    Entry::Prefix(&[
        vl!(
            [VEX_Vrsqrtps_xmm_xmmm128, VEX_Vrsqrtps_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        Entry::Invalid,
        mem!(VEX_Vrsqrtss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        Entry::Invalid,
    ]),
    // 53
    Entry::Prefix(&[
        vl!(
            [VEX_Vrcpps_xmm_xmmm128, VEX_Vrcpps_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        Entry::Invalid,
        mem!(VEX_Vrcpss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        Entry::Invalid,
    ]),
    // 54
    Entry::Prefix(&[
        vl!(
            [VEX_Vandps_xmm_xmm_xmmm128, VEX_Vandps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vandpd_xmm_xmm_xmmm128, VEX_Vandpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 55
    Entry::Prefix(&[
        vl!(
            [VEX_Vandnps_xmm_xmm_xmmm128, VEX_Vandnps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vandnpd_xmm_xmm_xmmm128, VEX_Vandnpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 56
    Entry::Prefix(&[
        vl!(
            [VEX_Vorps_xmm_xmm_xmmm128, VEX_Vorps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vorpd_xmm_xmm_xmmm128, VEX_Vorpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 57
    Entry::Prefix(&[
        vl!(
            [VEX_Vxorps_xmm_xmm_xmmm128, VEX_Vxorps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vxorpd_xmm_xmm_xmmm128, VEX_Vxorpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 58
    Entry::Prefix(&[
        vl!(
            [VEX_Vaddps_xmm_xmm_xmmm128, VEX_Vaddps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vaddpd_xmm_xmm_xmmm128, VEX_Vaddpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vaddss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vaddsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 59
    Entry::Prefix(&[
        vl!(
            [VEX_Vmulps_xmm_xmm_xmmm128, VEX_Vmulps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vmulpd_xmm_xmm_xmmm128, VEX_Vmulpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vmulss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vmulsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 5A
    Entry::Prefix(&[
        vl!(
            [VEX_Vcvtps2pd_xmm_xmmm64, VEX_Vcvtps2pd_ymm_xmmm128, INVALID],
            [Packed64_Float32, Packed128_Float32, Unknown],
            V, Wh
        ),
        vl!(
            [VEX_Vcvtpd2ps_xmm_xmmm128, VEX_Vcvtpd2ps_xmm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            Vx, W
        ),
        mem!(VEX_Vcvtss2sd_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vcvtsd2ss_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 5B
    Entry::Prefix(&[
        vl!(
            [VEX_Vcvtdq2ps_xmm_xmmm128, VEX_Vcvtdq2ps_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vcvtps2dq_xmm_xmmm128, VEX_Vcvtps2dq_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vcvttps2dq_xmm_xmmm128, VEX_Vcvttps2dq_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W
        ),
        Entry::Invalid,
    ]),
    // 5C
    Entry::Prefix(&[
        vl!(
            [VEX_Vsubps_xmm_xmm_xmmm128, VEX_Vsubps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vsubpd_xmm_xmm_xmmm128, VEX_Vsubpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vsubss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vsubsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 5D
    Entry::Prefix(&[
        vl!(
            [VEX_Vminps_xmm_xmm_xmmm128, VEX_Vminps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vminpd_xmm_xmm_xmmm128, VEX_Vminpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vminss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vminsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 5E
    Entry::Prefix(&[
        vl!(
            [VEX_Vdivps_xmm_xmm_xmmm128, VEX_Vdivps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vdivpd_xmm_xmm_xmmm128, VEX_Vdivpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vdivss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vdivsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 5F
    Entry::Prefix(&[
        vl!(
            [VEX_Vmaxps_xmm_xmm_xmmm128, VEX_Vmaxps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
        vl!(
            [VEX_Vmaxpd_xmm_xmm_xmmm128, VEX_Vmaxpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        mem!(VEX_Vmaxss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
        mem!(VEX_Vmaxsd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
    ]),
    // 60
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpcklbw_xmm_xmm_xmmm128, VEX_Vpunpcklbw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 61
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpcklwd_xmm_xmm_xmmm128, VEX_Vpunpcklwd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 62
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpckldq_xmm_xmm_xmmm128, VEX_Vpunpckldq_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpacksswb_xmm_xmm_xmmm128, VEX_Vpacksswb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 64
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpgtb_xmm_xmm_xmmm128, VEX_Vpcmpgtb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 65
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpgtw_xmm_xmm_xmmm128, VEX_Vpcmpgtw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 66
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpgtd_xmm_xmm_xmmm128, VEX_Vpcmpgtd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 67
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpackuswb_xmm_xmm_xmmm128, VEX_Vpackuswb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 68
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpckhbw_xmm_xmm_xmmm128, VEX_Vpunpckhbw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 69
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpckhwd_xmm_xmm_xmmm128, VEX_Vpunpckhwd_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6A
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpckhdq_xmm_xmm_xmmm128, VEX_Vpunpckhdq_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6B
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpackssdw_xmm_xmm_xmmm128, VEX_Vpackssdw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpcklqdq_xmm_xmm_xmmm128, VEX_Vpunpcklqdq_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpunpckhqdq_xmm_xmm_xmmm128, VEX_Vpunpckhqdq_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6E
    Entry::Prefix(&[
        Entry::Invalid,
        osz!([VEX_Vmovd_xmm_rm32, VEX_Vmovd_xmm_rm32, VEX_Vmovq_xmm_rm64], Vx, Ey; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6F
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vmovdqa_xmm_xmmm128, VEX_Vmovdqa_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, W
        ),
        vl!(
            [VEX_Vmovdqu_xmm_xmmm128, VEX_Vmovdqu_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, W
        ),
        Entry::Invalid,
    ]),
    // 70
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpshufd_xmm_xmmm128_imm8, VEX_Vpshufd_ymm_ymmm256_imm8, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, W, Ib
        ),
        vl!(
            [VEX_Vpshufhw_xmm_xmmm128_imm8, VEX_Vpshufhw_ymm_ymmm256_imm8, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, W, Ib
        ),
        vl!(
            [VEX_Vpshuflw_xmm_xmmm128_imm8, VEX_Vpshuflw_ymm_ymmm256_imm8, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, W, Ib
        ),
    ]),
    // 71
    Entry::Mod(
        &Entry::Group(&[
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsrlw_xmm_xmm_imm8, VEX_Vpsrlw_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsraw_xmm_xmm_imm8, VEX_Vpsraw_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsllw_xmm_xmm_imm8, VEX_Vpsllw_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
        ]),
        &Entry::Invalid,
    ),
    // 72
    Entry::Mod(
        &Entry::Group(&[
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsrld_xmm_xmm_imm8, VEX_Vpsrld_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsrad_xmm_xmm_imm8, VEX_Vpsrad_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpslld_xmm_xmm_imm8, VEX_Vpslld_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
        ]),
        &Entry::Invalid,
    ),
    // 73
    Entry::Mod(
        &Entry::Group(&[
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsrlq_xmm_xmm_imm8, VEX_Vpsrlq_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsrldq_xmm_xmm_imm8, VEX_Vpsrldq_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpsllq_xmm_xmm_imm8, VEX_Vpsllq_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                Entry::Invalid,
                vl!(
                    [VEX_Vpslldq_xmm_xmm_imm8, VEX_Vpslldq_ymm_ymm_imm8, INVALID],
                    [Unknown, Unknown, Unknown],
                    H, U, Ib
                ),
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ]),
        &Entry::Invalid,
    ),
    // 74
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpeqb_xmm_xmm_xmmm128, VEX_Vpcmpeqb_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 75
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpeqw_xmm_xmm_xmmm128, VEX_Vpcmpeqw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 76
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpeqd_xmm_xmm_xmmm128, VEX_Vpcmpeqd_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 77
    Entry::Prefix(&[
        vl!([VEX_Vzeroupper, VEX_Vzeroall, INVALID], [Unknown, Unknown, Unknown]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 78
    Entry::Invalid,
    // 79
    Entry::Invalid,
    // 7A
    Entry::Invalid,
    // 7B
    Entry::Invalid,
    // 7C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vhaddpd_xmm_xmm_xmmm128, VEX_Vhaddpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        vl!(
            [VEX_Vhaddps_xmm_xmm_xmmm128, VEX_Vhaddps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
    ]),
    // 7D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vhsubpd_xmm_xmm_xmmm128, VEX_Vhsubpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        vl!(
            [VEX_Vhsubps_xmm_xmm_xmmm128, VEX_Vhsubps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
    ]),
    // 7E
    Entry::Prefix(&[
        Entry::Invalid,
        osz!([VEX_Vmovd_rm32_xmm, VEX_Vmovd_rm32_xmm, VEX_Vmovq_rm64_xmm], Ey, Vx; L0),
        mem!(VEX_Vmovq_xmm_xmmm64, UInt64, Vx, Wx; L0),
        Entry::Invalid,
    ]),
    // 7F
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vmovdqa_xmmm128_xmm, VEX_Vmovdqa_ymmm256_ymm, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            W, V
        ),
        vl!(
            [VEX_Vmovdqu_xmmm128_xmm, VEX_Vmovdqu_ymmm256_ymm, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            W, V
        ),
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::W(
            &mem!(VEX_Kmovw_kr_km16, UInt16, Kr, Km; L0),
            &mem!(VEX_Kmovq_kr_km64, UInt64, Kr, Km; L0),
        ),
        Entry::W(
            &mem!(VEX_Kmovb_kr_km8, UInt8, Kr, Km; L0),
            &mem!(VEX_Kmovd_kr_km32, UInt32, Kr, Km; L0),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 91
    Entry::Mod(
        &Entry::Invalid,
        &Entry::Prefix(&[
            Entry::W(
                &mem!(VEX_Kmovw_m16_kr, UInt16, M, Kr; L0),
                &mem!(VEX_Kmovq_m64_kr, UInt64, M, Kr; L0),
            ),
            Entry::W(
                &mem!(VEX_Kmovb_m8_kr, UInt8, M, Kr; L0),
                &mem!(VEX_Kmovd_m32_kr, UInt32, M, Kr; L0),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
    ),
    // 92
    Entry::Mod(
        &Entry::Prefix(&[
            Entry::W(&op!(VEX_Kmovw_kr_r32, Kr, Ry; L0), &Entry::Invalid),
            Entry::W(&op!(VEX_Kmovb_kr_r32, Kr, Ry; L0), &Entry::Invalid),
            Entry::Invalid,
            Entry::W(&op!(VEX_Kmovd_kr_r32, Kr, Ry; L0), &op!(VEX_Kmovq_kr_r64, Kr, Ry; L0)),
        ]),
        &Entry::Invalid,
    ),
    // 93
    Entry::Mod(
        &Entry::Prefix(&[
            Entry::W(&op!(VEX_Kmovw_r32_kr, Gd, Krm; L0), &Entry::Invalid),
            Entry::W(&op!(VEX_Kmovb_r32_kr, Gd, Krm; L0), &Entry::Invalid),
            Entry::Invalid,
            Entry::W(&op!(VEX_Kmovd_r32_kr, Gd, Krm; L0), &op!(VEX_Kmovq_r64_kr, Gq, Krm; L0)),
        ]),
        &Entry::Invalid,
    ),
    // 94
    Entry::Invalid,
    // 95
    Entry::Invalid,
    // 96
    Entry::Invalid,
    // 97
    Entry::Invalid,
    // 98
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Kortestw_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kortestq_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Kortestb_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kortestd_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 99
    Entry::Prefix(&[
        Entry::W(
            &Entry::Mod(&op!(VEX_Ktestw_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Ktestq_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::W(
            &Entry::Mod(&op!(VEX_Ktestb_kr_kr, Kr, Krm; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Ktestd_kr_kr, Kr, Krm; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Mod(
        &Entry::Invalid,
        &Entry::Prefix(&[
            Entry::Group(&[
                Entry::Invalid,
                Entry::Invalid,
                mem!(VEX_Vldmxcsr_m32, UInt32, M; L0),
                mem!(VEX_Vstmxcsr_m32, UInt32, M; L0),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
    ),
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
    Entry::Prefix(&[
        vl!(
            [VEX_Vcmpps_xmm_xmm_xmmm128_imm8, VEX_Vcmpps_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W, Ib
        ),
        vl!(
            [VEX_Vcmppd_xmm_xmm_xmmm128_imm8, VEX_Vcmppd_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W, Ib
        ),
        mem!(VEX_Vcmpss_xmm_xmm_xmmm32_imm8, Float32, Vx, Hx, Wx, Ib),
        mem!(VEX_Vcmpsd_xmm_xmm_xmmm64_imm8, Float64, Vx, Hx, Wx, Ib),
    ]),
    // C3
    Entry::Invalid,
    // C4
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vpinsrw_xmm_xmm_r32m16_imm8, VEX_Vpinsrw_xmm_xmm_r32m16_imm8, VEX_Vpinsrw_xmm_xmm_r64m16_imm8],
            [UInt16, UInt16, UInt16],
            Vx, Hx, Ey, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C5
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &osz!(
                [VEX_Vpextrw_r32_xmm_imm8, VEX_Vpextrw_r32_xmm_imm8, VEX_Vpextrw_r64_xmm_imm8],
                Gy, Ux, Ib; L0
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C6
    Entry::Prefix(&[
        vl!(
            [VEX_Vshufps_xmm_xmm_xmmm128_imm8, VEX_Vshufps_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W, Ib
        ),
        vl!(
            [VEX_Vshufpd_xmm_xmm_xmmm128_imm8, VEX_Vshufpd_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vaddsubpd_xmm_xmm_xmmm128, VEX_Vaddsubpd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        vl!(
            [VEX_Vaddsubps_xmm_xmm_xmmm128, VEX_Vaddsubps_ymm_ymm_ymmm256, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W
        ),
    ]),
    // D1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsrlw_xmm_xmm_xmmm128, VEX_Vpsrlw_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D2
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsrld_xmm_xmm_xmmm128, VEX_Vpsrld_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D3
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsrlq_xmm_xmm_xmmm128, VEX_Vpsrlq_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D4
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddq_xmm_xmm_xmmm128, VEX_Vpaddq_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmullw_xmm_xmm_xmmm128, VEX_Vpmullw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D6
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vmovq_xmmm64_xmm, UInt64, Wx, Vx; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Mode(
                &vl!(
                    [VEX_Vpmovmskb_r32_xmm, VEX_Vpmovmskb_r32_ymm, INVALID],
                    [Unknown, Unknown, Unknown],
                    Gd, U
                ),
                &Entry::W(
                    &vl!(
                        [VEX_Vpmovmskb_r32_xmm, VEX_Vpmovmskb_r32_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gd, U
                    ),
                    &vl!(
                        [VEX_Vpmovmskb_r64_xmm, VEX_Vpmovmskb_r64_ymm, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gq, U
                    ),
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubusb_xmm_xmm_xmmm128, VEX_Vpsubusb_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubusw_xmm_xmm_xmmm128, VEX_Vpsubusw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DA
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminub_xmm_xmm_xmmm128, VEX_Vpminub_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DB
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpand_xmm_xmm_xmmm128, VEX_Vpand_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddusb_xmm_xmm_xmmm128, VEX_Vpaddusb_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DD
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddusw_xmm_xmm_xmmm128, VEX_Vpaddusw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DE
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxub_xmm_xmm_xmmm128, VEX_Vpmaxub_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DF
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpandn_xmm_xmm_xmmm128, VEX_Vpandn_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E0
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpavgb_xmm_xmm_xmmm128, VEX_Vpavgb_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsraw_xmm_xmm_xmmm128, VEX_Vpsraw_ymm_ymm_xmmm128, INVALID],
            [UInt128, UInt128, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E2
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsrad_xmm_xmm_xmmm128, VEX_Vpsrad_ymm_ymm_xmmm128, INVALID],
            [UInt128, UInt128, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E3
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpavgw_xmm_xmm_xmmm128, VEX_Vpavgw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E4
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmulhuw_xmm_xmm_xmmm128, VEX_Vpmulhuw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmulhw_xmm_xmm_xmmm128, VEX_Vpmulhw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E6
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vcvttpd2dq_xmm_xmmm128, VEX_Vcvttpd2dq_xmm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            Vx, W
        ),
        vl!(
            [VEX_Vcvtdq2pd_xmm_xmmm64, VEX_Vcvtdq2pd_ymm_xmmm128, INVALID],
            [Packed64_Int32, Packed128_Int32, Unknown],
            V, Wh
        ),
        vl!(
            [VEX_Vcvtpd2dq_xmm_xmmm128, VEX_Vcvtpd2dq_xmm_ymmm256, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            Vx, W
        ),
    ]),
    // E7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &vl!(
                [VEX_Vmovntdq_m128_xmm, VEX_Vmovntdq_m256_ymm, INVALID],
                [UInt128, UInt256, Unknown],
                M, V
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubsb_xmm_xmm_xmmm128, VEX_Vpsubsb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubsw_xmm_xmm_xmmm128, VEX_Vpsubsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EA
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminsw_xmm_xmm_xmmm128, VEX_Vpminsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EB
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpor_xmm_xmm_xmmm128, VEX_Vpor_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddsb_xmm_xmm_xmmm128, VEX_Vpaddsb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // ED
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddsw_xmm_xmm_xmmm128, VEX_Vpaddsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EE
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxsw_xmm_xmm_xmmm128, VEX_Vpmaxsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EF
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpxor_xmm_xmm_xmmm128, VEX_Vpxor_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F0
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &vl!(
                [VEX_Vlddqu_xmm_m128, VEX_Vlddqu_ymm_m256, INVALID],
                [UInt128, UInt256, Unknown],
                V, M
            ),
        ),
    ]),
    // F1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsllw_xmm_xmm_xmmm128, VEX_Vpsllw_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F2
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpslld_xmm_xmm_xmmm128, VEX_Vpslld_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F3
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsllq_xmm_xmm_xmmm128, VEX_Vpsllq_ymm_ymm_xmmm128, INVALID],
            [Packed128_UInt64, Packed128_UInt64, Unknown],
            V, H, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F4
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmuludq_xmm_xmm_xmmm128, VEX_Vpmuludq_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaddwd_xmm_xmm_xmmm128, VEX_Vpmaddwd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F6
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsadbw_xmm_xmm_xmmm128, VEX_Vpsadbw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &mem!(VEX_Vmaskmovdqu_rDI_xmm_xmm, UInt128, Xdi, Vx, Ux; L0),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubb_xmm_xmm_xmmm128, VEX_Vpsubb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubw_xmm_xmm_xmmm128, VEX_Vpsubw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FA
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubd_xmm_xmm_xmmm128, VEX_Vpsubd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FB
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsubq_xmm_xmm_xmmm128, VEX_Vpsubq_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int64, Packed256_Int64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddb_xmm_xmm_xmmm128, VEX_Vpaddb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FD
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddw_xmm_xmm_xmmm128, VEX_Vpaddw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FE
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpaddd_xmm_xmm_xmmm128, VEX_Vpaddd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FF
    Entry::Invalid,
];

/// VEX map 2.
pub(crate) static VEX_0F38: [Entry; 256] = [
    // 00
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpshufb_xmm_xmm_xmmm128, VEX_Vpshufb_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 01
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphaddw_xmm_xmm_xmmm128, VEX_Vphaddw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 02
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphaddd_xmm_xmm_xmmm128, VEX_Vphaddd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 03
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphaddsw_xmm_xmm_xmmm128, VEX_Vphaddsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 04
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaddubsw_xmm_xmm_xmmm128, VEX_Vpmaddubsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 05
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphsubw_xmm_xmm_xmmm128, VEX_Vphsubw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 06
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphsubd_xmm_xmm_xmmm128, VEX_Vphsubd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 07
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vphsubsw_xmm_xmm_xmmm128, VEX_Vphsubsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 08
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsignb_xmm_xmm_xmmm128, VEX_Vpsignb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 09
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsignw_xmm_xmm_xmmm128, VEX_Vpsignw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0A
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpsignd_xmm_xmm_xmmm128, VEX_Vpsignd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0B
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmulhrsw_xmm_xmm_xmmm128, VEX_Vpmulhrsw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpermilps_xmm_xmm_xmmm128, VEX_Vpermilps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpermilpd_xmm_xmm_xmmm128, VEX_Vpermilpd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vtestps_xmm_xmmm128, VEX_Vtestps_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vtestpd_xmm_xmmm128, VEX_Vtestpd_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, W
            ),
            &Entry::Invalid,
        ),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vcvtph2ps_xmm_xmmm64, VEX_Vcvtph2ps_ymm_xmmm128, INVALID],
                [Packed64_Float16, Packed128_Float16, Unknown],
                V, Wh
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 14
    Entry::Invalid,
    // 15
    Entry::Invalid,
    // 16
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vpermps_ymm_ymm_ymmm256, INVALID],
                [Unknown, Packed256_Float32, Unknown],
                V, H, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vptest_xmm_xmmm128, VEX_Vptest_ymm_ymmm256, INVALID],
            [UInt128, UInt256, Unknown],
            V, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vbroadcastss_xmm_xmmm32, VEX_Vbroadcastss_ymm_xmmm32, INVALID],
                [Float32, Float32, Unknown],
                V, Wx
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 19
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!([INVALID, VEX_Vbroadcastsd_ymm_xmmm64, INVALID], [Unknown, Float64, Unknown], V, Wx),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [INVALID, VEX_Vbroadcastf128_ymm_m128, INVALID],
                    [Unknown, Float128, Unknown],
                    V, M
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1B
    Entry::Invalid,
    // 1C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpabsb_xmm_xmmm128, VEX_Vpabsb_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpabsw_xmm_xmmm128, VEX_Vpabsw_ymm_ymmm256, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1E
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpabsd_xmm_xmmm128, VEX_Vpabsd_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1F
    Entry::Invalid,
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxbw_xmm_xmmm64, VEX_Vpmovsxbw_ymm_xmmm128, INVALID],
            [Packed64_Int8, Packed128_Int8, Unknown],
            V, Wh
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxbd_xmm_xmmm32, VEX_Vpmovsxbd_ymm_xmmm64, INVALID],
            [UInt32, Packed64_Int8, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxbq_xmm_xmmm16, VEX_Vpmovsxbq_ymm_xmmm32, INVALID],
            [UInt16, UInt32, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 23
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxwd_xmm_xmmm64, VEX_Vpmovsxwd_ymm_xmmm128, INVALID],
            [Packed64_Int16, Packed128_Int16, Unknown],
            V, Wh
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 24
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxwq_xmm_xmmm32, VEX_Vpmovsxwq_ymm_xmmm64, INVALID],
            [UInt32, Packed64_Int16, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 25
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovsxdq_xmm_xmmm64, VEX_Vpmovsxdq_ymm_xmmm128, INVALID],
            [Packed64_Int32, Packed128_Int32, Unknown],
            V, Wh
        ),
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
        vl!(
            [VEX_Vpmuldq_xmm_xmm_xmmm128, VEX_Vpmuldq_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpeqq_xmm_xmm_xmmm128, VEX_Vpcmpeqq_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int64, Packed256_Int64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &vl!(
                [VEX_Vmovntdqa_xmm_m128, VEX_Vmovntdqa_ymm_m256, INVALID],
                [UInt128, UInt256, Unknown],
                V, M
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2B
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpackusdw_xmm_xmm_xmmm128, VEX_Vpackusdw_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [VEX_Vmaskmovps_xmm_xmm_m128, VEX_Vmaskmovps_ymm_ymm_m256, INVALID],
                    [Packed128_Float32, Packed256_Float32, Unknown],
                    V, H, M
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [VEX_Vmaskmovpd_xmm_xmm_m128, VEX_Vmaskmovpd_ymm_ymm_m256, INVALID],
                    [Packed128_Float64, Packed256_Float64, Unknown],
                    V, H, M
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [VEX_Vmaskmovps_m128_xmm_xmm, VEX_Vmaskmovps_m256_ymm_ymm, INVALID],
                    [Packed128_Float32, Packed256_Float32, Unknown],
                    M, H, V
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [VEX_Vmaskmovpd_m128_xmm_xmm, VEX_Vmaskmovpd_m256_ymm_ymm, INVALID],
                    [Packed128_Float64, Packed256_Float64, Unknown],
                    M, H, V
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 30
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxbw_xmm_xmmm64, VEX_Vpmovzxbw_ymm_xmmm128, INVALID],
            [Packed64_Int8, Packed128_Int8, Unknown],
            V, Wh
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 31
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxbd_xmm_xmmm32, VEX_Vpmovzxbd_ymm_xmmm64, INVALID],
            [UInt32, Packed64_Int8, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 32
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxbq_xmm_xmmm16, VEX_Vpmovzxbq_ymm_xmmm32, INVALID],
            [UInt16, UInt32, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 33
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxwd_xmm_xmmm64, VEX_Vpmovzxwd_ymm_xmmm128, INVALID],
            [Packed64_Int16, Packed128_Int16, Unknown],
            V, Wh
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 34
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxwq_xmm_xmmm32, VEX_Vpmovzxwq_ymm_xmmm64, INVALID],
            [UInt32, Packed64_Int16, Unknown],
            V, Wx
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 35
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmovzxdq_xmm_xmmm64, VEX_Vpmovzxdq_ymm_xmmm128, INVALID],
            [Packed64_Int32, Packed128_Int32, Unknown],
            V, Wh
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 36
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vpermd_ymm_ymm_ymmm256, INVALID],
                [Unknown, Packed256_UInt32, Unknown],
                V, H, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 37
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpcmpgtq_xmm_xmm_xmmm128, VEX_Vpcmpgtq_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int64, Packed256_Int64, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 38
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminsb_xmm_xmm_xmmm128, VEX_Vpminsb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 39
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminsd_xmm_xmm_xmmm128, VEX_Vpminsd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3A
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminuw_xmm_xmm_xmmm128, VEX_Vpminuw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3B
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpminud_xmm_xmm_xmmm128, VEX_Vpminud_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxsb_xmm_xmm_xmmm128, VEX_Vpmaxsb_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxsd_xmm_xmm_xmmm128, VEX_Vpmaxsd_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3E
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxuw_xmm_xmm_xmmm128, VEX_Vpmaxuw_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt16, Packed256_UInt16, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3F
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmaxud_xmm_xmm_xmmm128, VEX_Vpmaxud_ymm_ymm_ymmm256, INVALID],
            [Packed128_UInt32, Packed256_UInt32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 40
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpmulld_xmm_xmm_xmmm128, VEX_Vpmulld_ymm_ymm_ymmm256, INVALID],
            [Packed128_Int32, Packed256_Int32, Unknown],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 41
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vphminposuw_xmm_xmmm128, Packed128_UInt16, V, W; L0),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpsrlvd_xmm_xmm_xmmm128, VEX_Vpsrlvd_ymm_ymm_ymmm256, INVALID],
                [Packed128_UInt32, Packed256_UInt32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vpsrlvq_xmm_xmm_xmmm128, VEX_Vpsrlvq_ymm_ymm_ymmm256, INVALID],
                [Packed128_UInt64, Packed256_UInt64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 46
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpsravd_xmm_xmm_xmmm128, VEX_Vpsravd_ymm_ymm_ymmm256, INVALID],
                [Packed128_UInt32, Packed256_UInt32, Unknown],
                V, H, W
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 47
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpsllvd_xmm_xmm_xmmm128, VEX_Vpsllvd_ymm_ymm_ymmm256, INVALID],
                [Packed128_UInt32, Packed256_UInt32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vpsllvq_xmm_xmm_xmmm128, VEX_Vpsllvq_ymm_ymm_ymmm256, INVALID],
                [Packed128_UInt64, Packed256_UInt64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpbroadcastd_xmm_xmmm32, VEX_Vpbroadcastd_ymm_xmmm32, INVALID],
                [Int32, Int32, Unknown],
                V, Wx
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 59
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpbroadcastq_xmm_xmmm64, VEX_Vpbroadcastq_ymm_xmmm64, INVALID],
                [Int64, Int64, Unknown],
                V, Wx
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(
                &Entry::Invalid,
                &vl!(
                    [INVALID, VEX_Vbroadcasti128_ymm_m128, INVALID],
                    [Unknown, Int128, Unknown],
                    V, M
                ),
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpbroadcastb_xmm_xmmm8, VEX_Vpbroadcastb_ymm_xmmm8, INVALID],
                [Int8, Int8, Unknown],
                V, Wx
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 79
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpbroadcastw_xmm_xmmm16, VEX_Vpbroadcastw_ymm_xmmm16, INVALID],
                [Int16, Int16, Unknown],
                V, Wx
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vpmaskmovd_xmm_xmm_m128, VEX_Vpmaskmovd_ymm_ymm_m256, INVALID],
                    [Packed128_Int32, Packed256_Int32, Unknown],
                    V, H, M
                ),
                &vl!(
                    [VEX_Vpmaskmovq_xmm_xmm_m128, VEX_Vpmaskmovq_ymm_ymm_m256, INVALID],
                    [Packed128_Int64, Packed256_Int64, Unknown],
                    V, H, M
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8D
    Entry::Invalid,
    // 8E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vpmaskmovd_m128_xmm_xmm, VEX_Vpmaskmovd_m256_ymm_ymm, INVALID],
                    [Packed128_Int32, Packed256_Int32, Unknown],
                    M, H, V
                ),
                &vl!(
                    [VEX_Vpmaskmovq_m128_xmm_xmm, VEX_Vpmaskmovq_m256_ymm_ymm, INVALID],
                    [Packed128_Int64, Packed256_Int64, Unknown],
                    M, H, V
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8F
    Entry::Invalid,
    // 90
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vpgatherdd_xmm_vm32x_xmm, VEX_Vpgatherdd_ymm_vm32y_ymm, INVALID],
                    [Int32, Int32, Unknown],
                    V, Vsib, H
                ),
                &vl!(
                    [VEX_Vpgatherdq_xmm_vm32x_xmm, VEX_Vpgatherdq_ymm_vm32x_ymm, INVALID],
                    [Int64, Int64, Unknown],
                    V, Vsibh, H
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 91
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vpgatherqd_xmm_vm64x_xmm, VEX_Vpgatherqd_xmm_vm64y_xmm, INVALID],
                    [Int32, Int32, Unknown],
                    Vx, Vsib, Hx
                ),
                &vl!(
                    [VEX_Vpgatherqq_xmm_vm64x_xmm, VEX_Vpgatherqq_ymm_vm64y_ymm, INVALID],
                    [Int64, Int64, Unknown],
                    V, Vsib, H
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 92
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vgatherdps_xmm_vm32x_xmm, VEX_Vgatherdps_ymm_vm32y_ymm, INVALID],
                    [Float32, Float32, Unknown],
                    V, Vsib, H
                ),
                &vl!(
                    [VEX_Vgatherdpd_xmm_vm32x_xmm, VEX_Vgatherdpd_ymm_vm32x_ymm, INVALID],
                    [Float64, Float64, Unknown],
                    V, Vsibh, H
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 93
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mod(
            &Entry::Invalid,
            &Entry::W(
                &vl!(
                    [VEX_Vgatherqps_xmm_vm64x_xmm, VEX_Vgatherqps_xmm_vm64y_xmm, INVALID],
                    [Float32, Float32, Unknown],
                    Vx, Vsib, Hx
                ),
                &vl!(
                    [VEX_Vgatherqpd_xmm_vm64x_xmm, VEX_Vgatherqpd_ymm_vm64y_ymm, INVALID],
                    [Float64, Float64, Unknown],
                    V, Vsib, H
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 94
    Entry::Invalid,
    // 95
    Entry::Invalid,
    // 96
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddsub132ps_xmm_xmm_xmmm128, VEX_Vfmaddsub132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmaddsub132pd_xmm_xmm_xmmm128, VEX_Vfmaddsub132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 97
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubadd132ps_xmm_xmm_xmmm128, VEX_Vfmsubadd132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsubadd132pd_xmm_xmm_xmmm128, VEX_Vfmsubadd132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 98
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmadd132ps_xmm_xmm_xmmm128, VEX_Vfmadd132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmadd132pd_xmm_xmm_xmmm128, VEX_Vfmadd132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 99
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmadd132ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmadd132sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsub132ps_xmm_xmm_xmmm128, VEX_Vfmsub132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsub132pd_xmm_xmm_xmmm128, VEX_Vfmsub132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmsub132ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmsub132sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmadd132ps_xmm_xmm_xmmm128, VEX_Vfnmadd132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmadd132pd_xmm_xmm_xmmm128, VEX_Vfnmadd132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmadd132ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmadd132sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmsub132ps_xmm_xmm_xmmm128, VEX_Vfnmsub132ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmsub132pd_xmm_xmm_xmmm128, VEX_Vfnmsub132pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmsub132ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmsub132sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddsub213ps_xmm_xmm_xmmm128, VEX_Vfmaddsub213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmaddsub213pd_xmm_xmm_xmmm128, VEX_Vfmaddsub213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubadd213ps_xmm_xmm_xmmm128, VEX_Vfmsubadd213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsubadd213pd_xmm_xmm_xmmm128, VEX_Vfmsubadd213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmadd213ps_xmm_xmm_xmmm128, VEX_Vfmadd213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmadd213pd_xmm_xmm_xmmm128, VEX_Vfmadd213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A9
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmadd213ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmadd213sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsub213ps_xmm_xmm_xmmm128, VEX_Vfmsub213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsub213pd_xmm_xmm_xmmm128, VEX_Vfmsub213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmsub213ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmsub213sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AC
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmadd213ps_xmm_xmm_xmmm128, VEX_Vfnmadd213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmadd213pd_xmm_xmm_xmmm128, VEX_Vfnmadd213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AD
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmadd213ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmadd213sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AE
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmsub213ps_xmm_xmm_xmmm128, VEX_Vfnmsub213ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmsub213pd_xmm_xmm_xmmm128, VEX_Vfnmsub213pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmsub213ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmsub213sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddsub231ps_xmm_xmm_xmmm128, VEX_Vfmaddsub231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmaddsub231pd_xmm_xmm_xmmm128, VEX_Vfmaddsub231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubadd231ps_xmm_xmm_xmmm128, VEX_Vfmsubadd231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsubadd231pd_xmm_xmm_xmmm128, VEX_Vfmsubadd231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmadd231ps_xmm_xmm_xmmm128, VEX_Vfmadd231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmadd231pd_xmm_xmm_xmmm128, VEX_Vfmadd231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B9
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmadd231ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmadd231sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsub231ps_xmm_xmm_xmmm128, VEX_Vfmsub231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfmsub231pd_xmm_xmm_xmmm128, VEX_Vfmsub231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmsub231ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfmsub231sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BC
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmadd231ps_xmm_xmm_xmmm128, VEX_Vfnmadd231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmadd231pd_xmm_xmm_xmmm128, VEX_Vfnmadd231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BD
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmadd231ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmadd231sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BE
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmsub231ps_xmm_xmm_xmmm128, VEX_Vfnmsub231ps_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W
            ),
            &vl!(
                [VEX_Vfnmsub231pd_xmm_xmm_xmmm128, VEX_Vfnmsub231pd_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmsub231ss_xmm_xmm_xmmm32, Float32, Vx, Hx, Wx),
            &mem!(VEX_Vfnmsub231sd_xmm_xmm_xmmm64, Float64, Vx, Hx, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vaesimc_xmm_xmmm128, UInt128, V, W; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vaesenc_xmm_xmm_xmmm128, UInt128, V, H, W; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DD
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vaesenclast_xmm_xmm_xmmm128, UInt128, V, H, W; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DE
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vaesdec_xmm_xmm_xmmm128, UInt128, V, H, W; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DF
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vaesdeclast_xmm_xmm_xmmm128, UInt128, V, H, W; L0),
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
    Entry::Prefix(&[
        osz!([VEX_Andn_r32_r32_rm32, VEX_Andn_r32_r32_rm32, VEX_Andn_r64_r64_rm64], Gy, By, Ey; L0),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F3
    Entry::Prefix(&[
        Entry::Group(&[
            Entry::Invalid,
            osz!([VEX_Blsr_r32_rm32, VEX_Blsr_r32_rm32, VEX_Blsr_r64_rm64], By, Ey; L0),
            osz!([VEX_Blsmsk_r32_rm32, VEX_Blsmsk_r32_rm32, VEX_Blsmsk_r64_rm64], By, Ey; L0),
            osz!([VEX_Blsi_r32_rm32, VEX_Blsi_r32_rm32, VEX_Blsi_r64_rm64], By, Ey; L0),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F4
    Entry::Invalid,
    // F5
    Entry::Prefix(&[
        osz!([VEX_Bzhi_r32_rm32_r32, VEX_Bzhi_r32_rm32_r32, VEX_Bzhi_r64_rm64_r64], Gy, Ey, By; L0),
        Entry::Invalid,
        osz!([VEX_Pext_r32_r32_rm32, VEX_Pext_r32_r32_rm32, VEX_Pext_r64_r64_rm64], Gy, By, Ey; L0),
        osz!([VEX_Pdep_r32_r32_rm32, VEX_Pdep_r32_r32_rm32, VEX_Pdep_r64_r64_rm64], Gy, By, Ey; L0),
    ]),
    // F6
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        osz!([VEX_Mulx_r32_r32_rm32, VEX_Mulx_r32_r32_rm32, VEX_Mulx_r64_r64_rm64], Gy, By, Ey; L0),
    ]),
    // F7
    Entry::Prefix(&[
        osz!(
            [VEX_Bextr_r32_rm32_r32, VEX_Bextr_r32_rm32_r32, VEX_Bextr_r64_rm64_r64],
            Gy, Ey, By; L0
        ),
        osz!([VEX_Shlx_r32_rm32_r32, VEX_Shlx_r32_rm32_r32, VEX_Shlx_r64_rm64_r64], Gy, Ey, By; L0),
        osz_mem!(
            [VEX_Sarx_r32_rm32_r32, VEX_Sarx_r32_rm32_r32, VEX_Sarx_r64_rm64_r64],
            [Int32, Int32, Int64],
            Gy, Ey, By; L0
        ),
        osz!([VEX_Shrx_r32_rm32_r32, VEX_Shrx_r32_rm32_r32, VEX_Shrx_r64_rm64_r64], Gy, Ey, By; L0),
    ]),
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

/// VEX map 3.
pub(crate) static VEX_0F3A: [Entry; 256] = [
    // 00
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [INVALID, VEX_Vpermq_ymm_ymmm256_imm8, INVALID],
                [Unknown, Packed256_Int64, Unknown],
                V, W, Ib
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 01
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [INVALID, VEX_Vpermpd_ymm_ymmm256_imm8, INVALID],
                [Unknown, Packed256_Float64, Unknown],
                V, W, Ib
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 02
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpblendd_xmm_xmm_xmmm128_imm8, VEX_Vpblendd_ymm_ymm_ymmm256_imm8, INVALID],
                [Packed128_Int32, Packed256_Int32, Unknown],
                V, H, W, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 03
    Entry::Invalid,
    // 04
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpermilps_xmm_xmmm128_imm8, VEX_Vpermilps_ymm_ymmm256_imm8, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, W, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 05
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpermilpd_xmm_xmmm128_imm8, VEX_Vpermilpd_ymm_ymmm256_imm8, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, W, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 06
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vperm2f128_ymm_ymm_ymmm256_imm8, INVALID],
                [Unknown, Packed256_Float128, Unknown],
                V, H, W, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 07
    Entry::Invalid,
    // 08
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vroundps_xmm_xmmm128_imm8, VEX_Vroundps_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 09
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vroundpd_xmm_xmmm128_imm8, VEX_Vroundpd_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0A
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vroundss_xmm_xmm_xmmm32_imm8, Float32, Vx, Hx, Wx, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0B
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vroundsd_xmm_xmm_xmmm64_imm8, Float64, Vx, Hx, Wx, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vblendps_xmm_xmm_xmmm128_imm8, VEX_Vblendps_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vblendpd_xmm_xmm_xmmm128_imm8, VEX_Vblendpd_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float64, Packed256_Float64, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0E
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpblendw_xmm_xmm_xmmm128_imm8, VEX_Vpblendw_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Int16, Packed256_Int16, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0F
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpalignr_xmm_xmm_xmmm128_imm8, VEX_Vpalignr_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Int8, Packed256_Int8, Unknown],
            V, H, W, Ib
        ),
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
            [VEX_Vpextrb_r32m8_xmm_imm8, VEX_Vpextrb_r32m8_xmm_imm8, VEX_Vpextrb_r64m8_xmm_imm8],
            [UInt8, UInt8, UInt8],
            Ey, Vx, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vpextrw_r32m16_xmm_imm8, VEX_Vpextrw_r32m16_xmm_imm8, VEX_Vpextrw_r64m16_xmm_imm8],
            [UInt16, UInt16, UInt16],
            Ey, Vx, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vpextrd_rm32_xmm_imm8, VEX_Vpextrd_rm32_xmm_imm8, VEX_Vpextrq_rm64_xmm_imm8],
            [UInt32, UInt32, UInt64],
            Ey, Vx, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vextractps_rm32_xmm_imm8, VEX_Vextractps_rm32_xmm_imm8, VEX_Vextractps_r64m32_xmm_imm8],
            [Float32, Float32, Float32],
            Ey, Vx, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, INVALID],
                [Unknown, Float128, Unknown],
                V, H, Wx, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 19
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vextractf128_xmmm128_ymm_imm8, INVALID],
                [Unknown, Float128, Unknown],
                Wx, V, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1A
    Entry::Invalid,
    // 1B
    Entry::Invalid,
    // 1C
    Entry::Invalid,
    // 1D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vcvtps2ph_xmmm64_xmm_imm8, VEX_Vcvtps2ph_xmmm128_ymm_imm8, INVALID],
                [Packed64_Float16, Packed128_Float16, Unknown],
                Wh, V, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1E
    Entry::Invalid,
    // 1F
    Entry::Invalid,
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vpinsrb_xmm_xmm_r32m8_imm8, VEX_Vpinsrb_xmm_xmm_r32m8_imm8, VEX_Vpinsrb_xmm_xmm_r64m8_imm8],
            [UInt8, UInt8, UInt8],
            Vx, Hx, Ey, Ib; L0
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vinsertps_xmm_xmm_xmmm32_imm8, Float32, Vx, Hx, Wx, Ib; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        osz_mem!(
            [VEX_Vpinsrd_xmm_xmm_rm32_imm8, VEX_Vpinsrd_xmm_xmm_rm32_imm8, VEX_Vpinsrq_xmm_xmm_rm64_imm8],
            [UInt32, UInt32, UInt64],
            Vx, Hx, Ey, Ib; L0
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(&op!(VEX_Kshiftrb_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kshiftrw_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 31
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(&op!(VEX_Kshiftrd_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kshiftrq_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 32
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(&op!(VEX_Kshiftlb_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kshiftlw_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 33
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mod(&op!(VEX_Kshiftld_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
            &Entry::Mod(&op!(VEX_Kshiftlq_kr_kr_imm8, Kr, Krm, Ib; L0), &Entry::Invalid),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 34
    Entry::Invalid,
    // 35
    Entry::Invalid,
    // 36
    Entry::Invalid,
    // 37
    Entry::Invalid,
    // 38
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vinserti128_ymm_ymm_xmmm128_imm8, INVALID],
                [Unknown, Int128, Unknown],
                V, H, Wx, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 39
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vextracti128_xmmm128_ymm_imm8, INVALID],
                [Unknown, Int128, Unknown],
                Wx, V, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
        vl!(
            [VEX_Vdpps_xmm_xmm_xmmm128_imm8, VEX_Vdpps_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_Float32, Packed256_Float32, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 41
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vdppd_xmm_xmm_xmmm128_imm8, Packed128_Float64, V, H, W, Ib; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 42
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vmpsadbw_xmm_xmm_xmmm128_imm8, VEX_Vmpsadbw_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_UInt8, Packed256_UInt8, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 43
    Entry::Invalid,
    // 44
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8, INVALID],
            [Packed128_UInt64, Packed256_UInt64, Unknown],
            V, H, W, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 45
    Entry::Invalid,
    // 46
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, VEX_Vperm2i128_ymm_ymm_ymmm256_imm8, INVALID],
                [Unknown, Packed256_Int128, Unknown],
                V, H, W, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 47
    Entry::Invalid,
    // 48
    Entry::Invalid,
    // 49
    Entry::Invalid,
    // 4A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vblendvps_xmm_xmm_xmmm128_xmm, VEX_Vblendvps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vblendvpd_xmm_xmm_xmmm128_xmm, VEX_Vblendvpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vpblendvb_xmm_xmm_xmmm128_xmm, VEX_Vpblendvb_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Int8, Packed256_Int8, Unknown],
                V, H, W, Is4
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddsubps_xmm_xmm_xmmm128_xmm, VEX_Vfmaddsubps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmaddsubps_xmm_xmm_xmm_xmmm128, VEX_Vfmaddsubps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfmaddsubpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmaddsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfmaddsubpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubaddps_xmm_xmm_xmmm128_xmm, VEX_Vfmsubaddps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmsubaddps_xmm_xmm_xmm_xmmm128, VEX_Vfmsubaddps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfmsubaddpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmsubaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfmsubaddpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 60
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vpcmpestrm_xmm_xmmm128_imm8, Packed128_UInt8, Vx, Wx, Ib; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 61
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vpcmpestri_xmm_xmmm128_imm8, Packed128_UInt8, Vx, Wx, Ib; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 62
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vpcmpistrm_xmm_xmmm128_imm8, Packed128_UInt8, Vx, Wx, Ib; L0),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(VEX_Vpcmpistri_xmm_xmmm128_imm8, Packed128_UInt8, Vx, Wx, Ib; L0),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddps_xmm_xmm_xmmm128_xmm, VEX_Vfmaddps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmaddps_xmm_xmm_xmm_xmmm128, VEX_Vfmaddps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 69
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfmaddpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfmaddpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmaddss_xmm_xmm_xmmm32_xmm, Float32, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfmaddss_xmm_xmm_xmm_xmmm32, Float32, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmaddsd_xmm_xmm_xmmm64_xmm, Float64, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfmaddsd_xmm_xmm_xmm_xmmm64, Float64, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubps_xmm_xmm_xmmm128_xmm, VEX_Vfmsubps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmsubps_xmm_xmm_xmm_xmmm128, VEX_Vfmsubps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfmsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfmsubpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfmsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfmsubpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmsubss_xmm_xmm_xmmm32_xmm, Float32, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfmsubss_xmm_xmm_xmm_xmmm32, Float32, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfmsubsd_xmm_xmm_xmmm64_xmm, Float64, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfmsubsd_xmm_xmm_xmm_xmmm64, Float64, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmaddps_xmm_xmm_xmmm128_xmm, VEX_Vfnmaddps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfnmaddps_xmm_xmm_xmm_xmmm128, VEX_Vfnmaddps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 79
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmaddpd_xmm_xmm_xmmm128_xmm, VEX_Vfnmaddpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfnmaddpd_xmm_xmm_xmm_xmmm128, VEX_Vfnmaddpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmaddss_xmm_xmm_xmmm32_xmm, Float32, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfnmaddss_xmm_xmm_xmm_xmmm32, Float32, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmaddsd_xmm_xmm_xmmm64_xmm, Float64, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfnmaddsd_xmm_xmm_xmm_xmmm64, Float64, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmsubps_xmm_xmm_xmmm128_xmm, VEX_Vfnmsubps_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfnmsubps_xmm_xmm_xmm_xmmm128, VEX_Vfnmsubps_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float32, Packed256_Float32, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [VEX_Vfnmsubpd_xmm_xmm_xmmm128_xmm, VEX_Vfnmsubpd_ymm_ymm_ymmm256_ymm, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, W, Is4
            ),
            &vl!(
                [VEX_Vfnmsubpd_xmm_xmm_xmm_xmmm128, VEX_Vfnmsubpd_ymm_ymm_ymm_ymmm256, INVALID],
                [Packed128_Float64, Packed256_Float64, Unknown],
                V, H, Is4, W
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmsubss_xmm_xmm_xmmm32_xmm, Float32, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfnmsubss_xmm_xmm_xmm_xmmm32, Float32, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(VEX_Vfnmsubsd_xmm_xmm_xmmm64_xmm, Float64, Vx, Hx, Wx, Is4x),
            &mem!(VEX_Vfnmsubsd_xmm_xmm_xmm_xmmm64, Float64, Vx, Hx, Is4x, Wx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
        mem!(VEX_Vaeskeygenassist_xmm_xmmm128_imm8, UInt128, V, W, Ib; L0),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        osz!(
            [VEX_Rorx_r32_rm32_imm8, VEX_Rorx_r32_rm32_imm8, VEX_Rorx_r64_rm64_imm8],
            Gy, Ey, Ib; L0
        ),
    ]),
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
