//! EVEX encoded opcode maps.

use super::*;

/// EVEX map 1.
pub(crate) static EVEX_0F: [Entry; 256] = [
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
        Entry::W(
            &vl!(
                [EVEX_Vmovups_xmm_k1z_xmmm128, EVEX_Vmovups_ymm_k1z_ymmm256, EVEX_Vmovups_zmm_k1z_zmmm512],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                V, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovupd_xmm_k1z_xmmm128, EVEX_Vmovupd_ymm_k1z_ymmm256, EVEX_Vmovupd_zmm_k1z_zmmm512],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &Entry::Mod(
                &mem!(EVEX_Vmovss_xmm_k1z_xmm_xmm, Float32, Vx, Hx, Ux; MASK | ZERO),
                &mem!(EVEX_Vmovss_xmm_k1z_m32, Float32, Vx, M; MASK | ZERO),
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &Entry::Mod(
                &mem!(EVEX_Vmovsd_xmm_k1z_xmm_xmm, Float64, Vx, Hx, Ux; MASK | ZERO),
                &mem!(EVEX_Vmovsd_xmm_k1z_m64, Float64, Vx, M; MASK | ZERO),
            ),
        ),
    ]),
    // 11
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovups_xmmm128_k1z_xmm, EVEX_Vmovups_ymmm256_k1z_ymm, EVEX_Vmovups_zmmm512_k1z_zmm],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                W, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovupd_xmmm128_k1z_xmm, EVEX_Vmovupd_ymmm256_k1z_ymm, EVEX_Vmovupd_zmmm512_k1z_zmm],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                W, V; MASK | ZERO
            ),
        ),
        Entry::W(
            &Entry::Mod(
                &mem!(EVEX_Vmovss_xmm_k1z_xmm_xmm, Float32, Ux, Hx, Vx; MASK | ZERO),
                &mem!(EVEX_Vmovss_m32_k1_xmm, Float32, M, Vx; MASK),
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &Entry::Mod(
                &mem!(EVEX_Vmovsd_xmm_k1z_xmm_xmm, Float64, Ux, Hx, Vx; MASK | ZERO),
                &mem!(EVEX_Vmovsd_m64_k1_xmm, Float64, M, Vx; MASK),
            ),
        ),
    ]),
    // 12
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovhlps_xmm_xmm_xmm, INVALID, INVALID],
                [Packed64_Float32, Unknown, Unknown],
                Vx, Hx, Ux
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovlpd_xmm_xmm_m64, INVALID, INVALID],
                [Float64, Unknown, Unknown],
                Vx, Hx, M
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovsldup_xmm_k1z_xmmm128, EVEX_Vmovsldup_ymm_k1z_ymmm256, EVEX_Vmovsldup_zmm_k1z_zmmm512],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                V, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovddup_xmm_k1z_xmmm64, EVEX_Vmovddup_ymm_k1z_ymmm256, EVEX_Vmovddup_zmm_k1z_zmmm512],
                [Float64, Packed256_Float64, Packed512_Float64],
                V, W; MASK | ZERO
            ),
        ),
    ]),
    // 13
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovlps_m64_xmm, INVALID, INVALID],
                [Packed64_Float32, Unknown, Unknown],
                M, Vx
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!([EVEX_Vmovlpd_m64_xmm, INVALID, INVALID], [Float64, Unknown, Unknown], M, Vx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 14
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vunpcklps_xmm_k1z_xmm_xmmm128b32, EVEX_Vunpcklps_ymm_k1z_ymm_ymmm256b32, EVEX_Vunpcklps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vunpcklpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vunpcklpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vunpcklpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vunpckhps_xmm_k1z_xmm_xmmm128b32, EVEX_Vunpckhps_ymm_k1z_ymm_ymmm256b32, EVEX_Vunpckhps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vunpckhpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vunpckhpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vunpckhpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovlhps_xmm_xmm_xmm, INVALID, INVALID],
                [Packed64_Float32, Unknown, Unknown],
                Vx, Hx, Ux
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovhpd_xmm_xmm_m64, INVALID, INVALID],
                [Float64, Unknown, Unknown],
                Vx, Hx, M
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovshdup_xmm_k1z_xmmm128, EVEX_Vmovshdup_ymm_k1z_ymmm256, EVEX_Vmovshdup_zmm_k1z_zmmm512],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                V, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovhps_m64_xmm, INVALID, INVALID],
                [Packed64_Float32, Unknown, Unknown],
                M, Vx
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!([EVEX_Vmovhpd_m64_xmm, INVALID, INVALID], [Float64, Unknown, Unknown], M, Vx),
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
        Entry::W(
            &vl!(
                [EVEX_Vmovaps_xmm_k1z_xmmm128, EVEX_Vmovaps_ymm_k1z_ymmm256, EVEX_Vmovaps_zmm_k1z_zmmm512],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                V, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovapd_xmm_k1z_xmmm128, EVEX_Vmovapd_ymm_k1z_ymmm256, EVEX_Vmovapd_zmm_k1z_zmmm512],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovaps_xmmm128_k1z_xmm, EVEX_Vmovaps_ymmm256_k1z_ymm, EVEX_Vmovaps_zmmm512_k1z_zmm],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                W, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovapd_xmmm128_k1z_xmm, EVEX_Vmovapd_ymmm256_k1z_ymm, EVEX_Vmovapd_zmmm512_k1z_zmm],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                W, V; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        osz_mem!(
            [EVEX_Vcvtsi2ss_xmm_xmm_rm32_er, EVEX_Vcvtsi2ss_xmm_xmm_rm32_er, EVEX_Vcvtsi2ss_xmm_xmm_rm64_er],
            [Int32, Int32, Int64],
            Vx, Hx, Ey; ER
        ),
        osz_mem!(
            [EVEX_Vcvtsi2sd_xmm_xmm_rm32, EVEX_Vcvtsi2sd_xmm_xmm_rm32, EVEX_Vcvtsi2sd_xmm_xmm_rm64_er],
            [Int32, Int32, Int64],
            Vx, Hx, Ey; ER | ERW1
        ),
    ]),
    // 2B
    Entry::Prefix(&[
        Entry::W(
            &vl!(
                [EVEX_Vmovntps_m128_xmm, EVEX_Vmovntps_m256_ymm, EVEX_Vmovntps_m512_zmm],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                M, V
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vmovntpd_m128_xmm, EVEX_Vmovntpd_m256_ymm, EVEX_Vmovntpd_m512_zmm],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
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
            [EVEX_Vcvttss2si_r32_xmmm32_sae, EVEX_Vcvttss2si_r32_xmmm32_sae, EVEX_Vcvttss2si_r64_xmmm32_sae],
            [Float32, Float32, Float32],
            Gy, Wx; SAE
        ),
        osz_mem!(
            [EVEX_Vcvttsd2si_r32_xmmm64_sae, EVEX_Vcvttsd2si_r32_xmmm64_sae, EVEX_Vcvttsd2si_r64_xmmm64_sae],
            [Float64, Float64, Float64],
            Gy, Wx; SAE
        ),
    ]),
    // 2D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        osz_mem!(
            [EVEX_Vcvtss2si_r32_xmmm32_er, EVEX_Vcvtss2si_r32_xmmm32_er, EVEX_Vcvtss2si_r64_xmmm32_er],
            [Float32, Float32, Float32],
            Gy, Wx; ER
        ),
        osz_mem!(
            [EVEX_Vcvtsd2si_r32_xmmm64_er, EVEX_Vcvtsd2si_r32_xmmm64_er, EVEX_Vcvtsd2si_r64_xmmm64_er],
            [Float64, Float64, Float64],
            Gy, Wx; ER
        ),
    ]),
    // 2E
    Entry::Prefix(&[
        Entry::W(&mem!(EVEX_Vucomiss_xmm_xmmm32_sae, Float32, Vx, Wx; SAE), &Entry::Invalid),
        Entry::W(&Entry::Invalid, &mem!(EVEX_Vucomisd_xmm_xmmm64_sae, Float64, Vx, Wx; SAE)),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2F
    Entry::Prefix(&[
        Entry::W(&mem!(EVEX_Vcomiss_xmm_xmmm32_sae, Float32, Vx, Wx; SAE), &Entry::Invalid),
        Entry::W(&Entry::Invalid, &mem!(EVEX_Vcomisd_xmm_xmmm64_sae, Float64, Vx, Wx; SAE)),
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
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vsqrtps_xmm_k1z_xmmm128b32, EVEX_Vsqrtps_ymm_k1z_ymmm256b32, EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vsqrtpd_xmm_k1z_xmmm128b64, EVEX_Vsqrtpd_ymm_k1z_ymmm256b64, EVEX_Vsqrtpd_zmm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vsqrtss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vsqrtsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 52
    Entry::Invalid,
    // 53
    Entry::Invalid,
    // 54
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vandps_xmm_k1z_xmm_xmmm128b32, EVEX_Vandps_ymm_k1z_ymm_ymmm256b32, EVEX_Vandps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vandpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vandpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vandpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 55
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vandnps_xmm_k1z_xmm_xmmm128b32, EVEX_Vandnps_ymm_k1z_ymm_ymmm256b32, EVEX_Vandnps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vandnpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vandnpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vandnpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 56
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vorps_xmm_k1z_xmm_xmmm128b32, EVEX_Vorps_ymm_k1z_ymm_ymmm256b32, EVEX_Vorps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vorpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vorpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vorpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 57
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vxorps_xmm_k1z_xmm_xmmm128b32, EVEX_Vxorps_ymm_k1z_ymm_ymmm256b32, EVEX_Vxorps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vxorpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vxorpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vxorpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 58
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32, EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32, EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 59
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vmulss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vmulsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 5A
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vcvtps2pd_xmm_k1z_xmmm64b32, EVEX_Vcvtps2pd_ymm_k1z_xmmm128b32, EVEX_Vcvtps2pd_zmm_k1z_ymmm256b32_sae],
                [Packed64_Float32, Packed128_Float32, Packed256_Float32],
                [Broadcast64_Float32, Broadcast128_Float32, Broadcast256_Float32],
                V, Wh; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vcvtpd2ps_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2ps_xmm_k1z_ymmm256b64, EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Vh, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vcvtss2sd_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vcvtsd2ss_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 5B
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vcvtdq2ps_xmm_k1z_xmmm128b32, EVEX_Vcvtdq2ps_ymm_k1z_ymmm256b32, EVEX_Vcvtdq2ps_zmm_k1z_zmmm512b32_er],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vcvtqq2ps_xmm_k1z_xmmm128b64, EVEX_Vcvtqq2ps_xmm_k1z_ymmm256b64, EVEX_Vcvtqq2ps_ymm_k1z_zmmm512b64_er],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                Vh, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvtps2dq_xmm_k1z_xmmm128b32, EVEX_Vcvtps2dq_ymm_k1z_ymmm256b32, EVEX_Vcvtps2dq_zmm_k1z_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvttps2dq_xmm_k1z_xmmm128b32, EVEX_Vcvttps2dq_ymm_k1z_ymmm256b32, EVEX_Vcvttps2dq_zmm_k1z_zmmm512b32_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 5C
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32, EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32, EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vsubss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vsubsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 5D
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vminps_xmm_k1z_xmm_xmmm128b32, EVEX_Vminps_ymm_k1z_ymm_ymmm256b32, EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | SAE
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vminss_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vminsd_xmm_k1z_xmm_xmmm64_sae, Float64, Vx, Hx, Wx; MASK | ZERO | SAE),
        ),
    ]),
    // 5E
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32, EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32, EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vdivss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vdivsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
    ]),
    // 5F
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32, EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32, EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | SAE
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vmaxss_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vmaxsd_xmm_k1z_xmm_xmmm64_sae, Float64, Vx, Hx, Wx; MASK | ZERO | SAE),
        ),
    ]),
    // 60
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpunpcklbw_xmm_k1z_xmm_xmmm128, EVEX_Vpunpcklbw_ymm_k1z_ymm_ymmm256, EVEX_Vpunpcklbw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 61
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpunpcklwd_xmm_k1z_xmm_xmmm128, EVEX_Vpunpcklwd_ymm_k1z_ymm_ymmm256, EVEX_Vpunpcklwd_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 62
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpunpckldq_xmm_k1z_xmm_xmmm128b32, EVEX_Vpunpckldq_ymm_k1z_ymm_ymmm256b32, EVEX_Vpunpckldq_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpacksswb_xmm_k1z_xmm_xmmm128, EVEX_Vpacksswb_ymm_k1z_ymm_ymmm256, EVEX_Vpacksswb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 64
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpcmpgtb_kr_k1_xmm_xmmm128, EVEX_Vpcmpgtb_kr_k1_ymm_ymmm256, EVEX_Vpcmpgtb_kr_k1_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            Kr, H, W; MASK
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 65
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpcmpgtw_kr_k1_xmm_xmmm128, EVEX_Vpcmpgtw_kr_k1_ymm_ymmm256, EVEX_Vpcmpgtw_kr_k1_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            Kr, H, W; MASK
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 66
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpcmpgtd_kr_k1_xmm_xmmm128b32, EVEX_Vpcmpgtd_kr_k1_ymm_ymmm256b32, EVEX_Vpcmpgtd_kr_k1_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                Kr, H, W; MASK
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 67
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpackuswb_xmm_k1z_xmm_xmmm128, EVEX_Vpackuswb_ymm_k1z_ymm_ymmm256, EVEX_Vpackuswb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 68
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpunpckhbw_xmm_k1z_xmm_xmmm128, EVEX_Vpunpckhbw_ymm_k1z_ymm_ymmm256, EVEX_Vpunpckhbw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 69
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpunpckhwd_xmm_k1z_xmm_xmmm128, EVEX_Vpunpckhwd_ymm_k1z_ymm_ymmm256, EVEX_Vpunpckhwd_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpunpckhdq_xmm_k1z_xmm_xmmm128b32, EVEX_Vpunpckhdq_ymm_k1z_ymm_ymmm256b32, EVEX_Vpunpckhdq_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpackssdw_xmm_k1z_xmm_xmmm128b32, EVEX_Vpackssdw_ymm_k1z_ymm_ymmm256b32, EVEX_Vpackssdw_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpunpcklqdq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpunpcklqdq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpunpcklqdq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpunpckhqdq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpunpckhqdq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpunpckhqdq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!([EVEX_Vmovd_xmm_rm32, INVALID, INVALID], [Unknown, Unknown, Unknown], Vx, Ey),
            &Entry::W(
                &vl!([EVEX_Vmovd_xmm_rm32, INVALID, INVALID], [Unknown, Unknown, Unknown], Vx, Ey),
                &vl!([EVEX_Vmovq_xmm_rm64, INVALID, INVALID], [Unknown, Unknown, Unknown], Vx, Ey),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vmovdqa32_xmm_k1z_xmmm128, EVEX_Vmovdqa32_ymm_k1z_ymmm256, EVEX_Vmovdqa32_zmm_k1z_zmmm512],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                V, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqa64_xmm_k1z_xmmm128, EVEX_Vmovdqa64_ymm_k1z_ymmm256, EVEX_Vmovdqa64_zmm_k1z_zmmm512],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                V, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovdqu32_xmm_k1z_xmmm128, EVEX_Vmovdqu32_ymm_k1z_ymmm256, EVEX_Vmovdqu32_zmm_k1z_zmmm512],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                V, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqu64_xmm_k1z_xmmm128, EVEX_Vmovdqu64_ymm_k1z_ymmm256, EVEX_Vmovdqu64_zmm_k1z_zmmm512],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovdqu8_xmm_k1z_xmmm128, EVEX_Vmovdqu8_ymm_k1z_ymmm256, EVEX_Vmovdqu8_zmm_k1z_zmmm512],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                V, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqu16_xmm_k1z_xmmm128, EVEX_Vmovdqu16_ymm_k1z_ymmm256, EVEX_Vmovdqu16_zmm_k1z_zmmm512],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                V, W; MASK | ZERO
            ),
        ),
    ]),
    // 70
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpshufd_xmm_k1z_xmmm128b32_imm8, EVEX_Vpshufd_ymm_k1z_ymmm256b32_imm8, EVEX_Vpshufd_zmm_k1z_zmmm512b32_imm8],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, W, Ib; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        vl!(
            [EVEX_Vpshufhw_xmm_k1z_xmmm128_imm8, EVEX_Vpshufhw_ymm_k1z_ymmm256_imm8, EVEX_Vpshufhw_zmm_k1z_zmmm512_imm8],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, W, Ib; MASK | ZERO
        ),
        vl!(
            [EVEX_Vpshuflw_xmm_k1z_xmmm128_imm8, EVEX_Vpshuflw_ymm_k1z_ymmm256_imm8, EVEX_Vpshuflw_zmm_k1z_zmmm512_imm8],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, W, Ib; MASK | ZERO
        ),
    ]),
    // 71
    Entry::Group(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            vl!(
                [EVEX_Vpsrlw_xmm_k1z_xmmm128_imm8, EVEX_Vpsrlw_ymm_k1z_ymmm256_imm8, EVEX_Vpsrlw_zmm_k1z_zmmm512_imm8],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                H, W, Ib; MASK | ZERO
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            vl!(
                [EVEX_Vpsraw_xmm_k1z_xmmm128_imm8, EVEX_Vpsraw_ymm_k1z_ymmm256_imm8, EVEX_Vpsraw_zmm_k1z_zmmm512_imm8],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                H, W, Ib; MASK | ZERO
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            vl!(
                [EVEX_Vpsllw_xmm_k1z_xmmm128_imm8, EVEX_Vpsllw_ymm_k1z_ymmm256_imm8, EVEX_Vpsllw_zmm_k1z_zmmm512_imm8],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                H, W, Ib; MASK | ZERO
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
    ]),
    // 72
    Entry::Group(&[
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vlb!(
                    [EVEX_Vprord_xmm_k1z_xmmm128b32_imm8, EVEX_Vprord_ymm_k1z_ymmm256b32_imm8, EVEX_Vprord_zmm_k1z_zmmm512b32_imm8],
                    [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                    [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                    H, W, Ib; MASK | ZERO
                ),
                &vlb!(
                    [EVEX_Vprorq_xmm_k1z_xmmm128b64_imm8, EVEX_Vprorq_ymm_k1z_ymmm256b64_imm8, EVEX_Vprorq_zmm_k1z_zmmm512b64_imm8],
                    [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                    [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                    H, W, Ib; MASK | ZERO
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vlb!(
                    [EVEX_Vprold_xmm_k1z_xmmm128b32_imm8, EVEX_Vprold_ymm_k1z_ymmm256b32_imm8, EVEX_Vprold_zmm_k1z_zmmm512b32_imm8],
                    [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                    [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                    H, W, Ib; MASK | ZERO
                ),
                &vlb!(
                    [EVEX_Vprolq_xmm_k1z_xmmm128b64_imm8, EVEX_Vprolq_ymm_k1z_ymmm256b64_imm8, EVEX_Vprolq_zmm_k1z_zmmm512b64_imm8],
                    [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                    [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                    H, W, Ib; MASK | ZERO
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vlb!(
                    [EVEX_Vpsrld_xmm_k1z_xmmm128b32_imm8, EVEX_Vpsrld_ymm_k1z_ymmm256b32_imm8, EVEX_Vpsrld_zmm_k1z_zmmm512b32_imm8],
                    [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                    [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                    H, W, Ib; MASK | ZERO
                ),
                &Entry::Invalid,
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vlb!(
                    [EVEX_Vpsrad_xmm_k1z_xmmm128b32_imm8, EVEX_Vpsrad_ymm_k1z_ymmm256b32_imm8, EVEX_Vpsrad_zmm_k1z_zmmm512b32_imm8],
                    [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                    [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                    H, W, Ib; MASK | ZERO
                ),
                &vlb!(
                    [EVEX_Vpsraq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsraq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsraq_zmm_k1z_zmmm512b64_imm8],
                    [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                    [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                    H, W, Ib; MASK | ZERO
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vlb!(
                    [EVEX_Vpslld_xmm_k1z_xmmm128b32_imm8, EVEX_Vpslld_ymm_k1z_ymmm256b32_imm8, EVEX_Vpslld_zmm_k1z_zmmm512b32_imm8],
                    [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                    [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                    H, W, Ib; MASK | ZERO
                ),
                &Entry::Invalid,
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
    ]),
    // 73
    Entry::Group(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &Entry::Invalid,
                &vlb!(
                    [EVEX_Vpsrlq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsrlq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsrlq_zmm_k1z_zmmm512b64_imm8],
                    [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                    [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                    H, W, Ib; MASK | ZERO
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            vl!(
                [EVEX_Vpsrldq_xmm_xmmm128_imm8, EVEX_Vpsrldq_ymm_ymmm256_imm8, EVEX_Vpsrldq_zmm_zmmm512_imm8],
                [UInt128, Packed256_UInt128, Packed512_UInt128],
                H, W, Ib
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &Entry::Invalid,
                &vlb!(
                    [EVEX_Vpsllq_xmm_k1z_xmmm128b64_imm8, EVEX_Vpsllq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpsllq_zmm_k1z_zmmm512b64_imm8],
                    [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                    [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                    H, W, Ib; MASK | ZERO
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            vl!(
                [EVEX_Vpslldq_xmm_xmmm128_imm8, EVEX_Vpslldq_ymm_ymmm256_imm8, EVEX_Vpslldq_zmm_zmmm512_imm8],
                [UInt128, Packed256_UInt128, Packed512_UInt128],
                H, W, Ib
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
    ]),
    // 74
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpcmpeqb_kr_k1_xmm_xmmm128, EVEX_Vpcmpeqb_kr_k1_ymm_ymmm256, EVEX_Vpcmpeqb_kr_k1_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            Kr, H, W; MASK
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 75
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpcmpeqw_kr_k1_xmm_xmmm128, EVEX_Vpcmpeqw_kr_k1_ymm_ymmm256, EVEX_Vpcmpeqw_kr_k1_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            Kr, H, W; MASK
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 76
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32, EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32, EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                Kr, H, W; MASK
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 77
    Entry::Invalid,
    // 78
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vcvttps2udq_xmm_k1z_xmmm128b32, EVEX_Vcvttps2udq_ymm_k1z_ymmm256b32, EVEX_Vcvttps2udq_zmm_k1z_zmmm512b32_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vcvttpd2udq_xmm_k1z_xmmm128b64, EVEX_Vcvttpd2udq_xmm_k1z_ymmm256b64, EVEX_Vcvttpd2udq_ymm_k1z_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Vh, W; MASK | ZERO | SAE
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvttps2uqq_xmm_k1z_xmmm64b32, EVEX_Vcvttps2uqq_ymm_k1z_xmmm128b32, EVEX_Vcvttps2uqq_zmm_k1z_ymmm256b32_sae],
                [Packed64_Float32, Packed128_Float32, Packed256_Float32],
                [Broadcast64_Float32, Broadcast128_Float32, Broadcast256_Float32],
                V, Wh; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vcvttpd2uqq_xmm_k1z_xmmm128b64, EVEX_Vcvttpd2uqq_ymm_k1z_ymmm256b64, EVEX_Vcvttpd2uqq_zmm_k1z_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        osz_mem!(
            [EVEX_Vcvttss2usi_r32_xmmm32_sae, EVEX_Vcvttss2usi_r32_xmmm32_sae, EVEX_Vcvttss2usi_r64_xmmm32_sae],
            [Float32, Float32, Float32],
            Gy, Wx; SAE
        ),
        osz_mem!(
            [EVEX_Vcvttsd2usi_r32_xmmm64_sae, EVEX_Vcvttsd2usi_r32_xmmm64_sae, EVEX_Vcvttsd2usi_r64_xmmm64_sae],
            [Float64, Float64, Float64],
            Gy, Wx; SAE
        ),
    ]),
    // 79
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vcvtps2udq_xmm_k1z_xmmm128b32, EVEX_Vcvtps2udq_ymm_k1z_ymmm256b32, EVEX_Vcvtps2udq_zmm_k1z_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vcvtpd2udq_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2udq_xmm_k1z_ymmm256b64, EVEX_Vcvtpd2udq_ymm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Vh, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvtps2uqq_xmm_k1z_xmmm64b32, EVEX_Vcvtps2uqq_ymm_k1z_xmmm128b32, EVEX_Vcvtps2uqq_zmm_k1z_ymmm256b32_er],
                [Packed64_Float32, Packed128_Float32, Packed256_Float32],
                [Broadcast64_Float32, Broadcast128_Float32, Broadcast256_Float32],
                V, Wh; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vcvtpd2uqq_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2uqq_ymm_k1z_ymmm256b64, EVEX_Vcvtpd2uqq_zmm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | ER
            ),
        ),
        osz_mem!(
            [EVEX_Vcvtss2usi_r32_xmmm32_er, EVEX_Vcvtss2usi_r32_xmmm32_er, EVEX_Vcvtss2usi_r64_xmmm32_er],
            [Float32, Float32, Float32],
            Gy, Wx; ER
        ),
        osz_mem!(
            [EVEX_Vcvtsd2usi_r32_xmmm64_er, EVEX_Vcvtsd2usi_r32_xmmm64_er, EVEX_Vcvtsd2usi_r64_xmmm64_er],
            [Float64, Float64, Float64],
            Gy, Wx; ER
        ),
    ]),
    // 7A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vcvttps2qq_xmm_k1z_xmmm64b32, EVEX_Vcvttps2qq_ymm_k1z_xmmm128b32, EVEX_Vcvttps2qq_zmm_k1z_ymmm256b32_sae],
                [Packed64_Float32, Packed128_Float32, Packed256_Float32],
                [Broadcast64_Float32, Broadcast128_Float32, Broadcast256_Float32],
                V, Wh; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vcvttpd2qq_xmm_k1z_xmmm128b64, EVEX_Vcvttpd2qq_ymm_k1z_ymmm256b64, EVEX_Vcvttpd2qq_zmm_k1z_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvtudq2pd_xmm_k1z_xmmm64b0, EVEX_Vcvtudq2pd_ymm_k1z_xmmm128b32, EVEX_Vcvtudq2pd_zmm_k1z_ymmm256b32],
                [Packed64_UInt32, Packed128_UInt32, Packed256_UInt32],
                [Broadcast64_UInt32, Broadcast128_UInt32, Broadcast256_UInt32],
                V, Wh; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vcvtuqq2pd_xmm_k1z_xmmm128b64, EVEX_Vcvtuqq2pd_ymm_k1z_ymmm256b64, EVEX_Vcvtuqq2pd_zmm_k1z_zmmm512b64_er],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvtudq2ps_xmm_k1z_xmmm128b32, EVEX_Vcvtudq2ps_ymm_k1z_ymmm256b32, EVEX_Vcvtudq2ps_zmm_k1z_zmmm512b32_er],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vcvtuqq2ps_xmm_k1z_xmmm128b64, EVEX_Vcvtuqq2ps_xmm_k1z_ymmm256b64, EVEX_Vcvtuqq2ps_ymm_k1z_zmmm512b64_er],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                Vh, W; MASK | ZERO | ER
            ),
        ),
    ]),
    // 7B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vcvtps2qq_xmm_k1z_xmmm64b32, EVEX_Vcvtps2qq_ymm_k1z_xmmm128b32, EVEX_Vcvtps2qq_zmm_k1z_ymmm256b32_er],
                [Packed64_Float32, Packed128_Float32, Packed256_Float32],
                [Broadcast64_Float32, Broadcast128_Float32, Broadcast256_Float32],
                V, Wh; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vcvtpd2qq_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2qq_ymm_k1z_ymmm256b64, EVEX_Vcvtpd2qq_zmm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | ER
            ),
        ),
        osz_mem!(
            [EVEX_Vcvtusi2ss_xmm_xmm_rm32_er, EVEX_Vcvtusi2ss_xmm_xmm_rm32_er, EVEX_Vcvtusi2ss_xmm_xmm_rm64_er],
            [UInt32, UInt32, UInt64],
            Vx, Hx, Ey; ER
        ),
        osz_mem!(
            [EVEX_Vcvtusi2sd_xmm_xmm_rm32, EVEX_Vcvtusi2sd_xmm_xmm_rm32, EVEX_Vcvtusi2sd_xmm_xmm_rm64_er],
            [UInt32, UInt32, UInt64],
            Vx, Hx, Ey; ER | ERW1
        ),
    ]),
    // 7C
    Entry::Invalid,
    // 7D
    Entry::Invalid,
    // 7E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!([EVEX_Vmovd_rm32_xmm, INVALID, INVALID], [Unknown, Unknown, Unknown], Ey, Vx),
            &Entry::W(
                &vl!([EVEX_Vmovd_rm32_xmm, INVALID, INVALID], [Unknown, Unknown, Unknown], Ey, Vx),
                &vl!([EVEX_Vmovq_rm64_xmm, INVALID, INVALID], [Unknown, Unknown, Unknown], Ey, Vx),
            ),
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!([EVEX_Vmovq_xmm_xmmm64, INVALID, INVALID], [UInt64, Unknown, Unknown], Vx, Wx),
        ),
        Entry::Invalid,
    ]),
    // 7F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vmovdqa32_xmmm128_k1z_xmm, EVEX_Vmovdqa32_ymmm256_k1z_ymm, EVEX_Vmovdqa32_zmmm512_k1z_zmm],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                W, V; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqa64_xmmm128_k1z_xmm, EVEX_Vmovdqa64_ymmm256_k1z_ymm, EVEX_Vmovdqa64_zmmm512_k1z_zmm],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                W, V; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovdqu32_xmmm128_k1z_xmm, EVEX_Vmovdqu32_ymmm256_k1z_ymm, EVEX_Vmovdqu32_zmmm512_k1z_zmm],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                W, V; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqu64_xmmm128_k1z_xmm, EVEX_Vmovdqu64_ymmm256_k1z_ymm, EVEX_Vmovdqu64_zmmm512_k1z_zmm],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                W, V; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vmovdqu8_xmmm128_k1z_xmm, EVEX_Vmovdqu8_ymmm256_k1z_ymm, EVEX_Vmovdqu8_zmmm512_k1z_zmm],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                W, V; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vmovdqu16_xmmm128_k1z_xmm, EVEX_Vmovdqu16_ymmm256_k1z_ymm, EVEX_Vmovdqu16_zmmm512_k1z_zmm],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                W, V; MASK | ZERO
            ),
        ),
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
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vcmpps_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vcmpps_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                Kr, H, W, Ib; MASK | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vcmppd_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vcmppd_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Kr, H, W, Ib; MASK | SAE
            ),
        ),
        Entry::W(
            &mem!(EVEX_Vcmpss_kr_k1_xmm_xmmm32_imm8_sae, Float32, Kr, Hx, Wx, Ib; MASK | SAE),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &mem!(EVEX_Vcmpsd_kr_k1_xmm_xmmm64_imm8_sae, Float64, Kr, Hx, Wx, Ib; MASK | SAE),
        ),
    ]),
    // C3
    Entry::Invalid,
    // C4
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mode(
                &vl!(
                    [EVEX_Vpinsrw_xmm_xmm_r32m16_imm8, INVALID, INVALID],
                    [UInt16, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
                &Entry::W(
                    &vl!(
                        [EVEX_Vpinsrw_xmm_xmm_r32m16_imm8, INVALID, INVALID],
                        [UInt16, Unknown, Unknown],
                        Vx, Hx, Ey, Ib
                    ),
                    &vl!(
                        [EVEX_Vpinsrw_xmm_xmm_r64m16_imm8, INVALID, INVALID],
                        [UInt16, Unknown, Unknown],
                        Vx, Hx, Ey, Ib
                    ),
                ),
            ),
            &Entry::Mode(
                &vl!(
                    [EVEX_Vpinsrw_xmm_xmm_r32m16_imm8, INVALID, INVALID],
                    [UInt16, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
                &Entry::W(
                    &vl!(
                        [EVEX_Vpinsrw_xmm_xmm_r32m16_imm8, INVALID, INVALID],
                        [UInt16, Unknown, Unknown],
                        Vx, Hx, Ey, Ib
                    ),
                    &vl!(
                        [EVEX_Vpinsrw_xmm_xmm_r64m16_imm8, INVALID, INVALID],
                        [UInt16, Unknown, Unknown],
                        Vx, Hx, Ey, Ib
                    ),
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C5
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Mode(
                &vl!(
                    [EVEX_Vpextrw_r32_xmm_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Gy, Ux, Ib
                ),
                &Entry::W(
                    &vl!(
                        [EVEX_Vpextrw_r32_xmm_imm8, INVALID, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gy, Ux, Ib
                    ),
                    &vl!(
                        [EVEX_Vpextrw_r64_xmm_imm8, INVALID, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gy, Ux, Ib
                    ),
                ),
            ),
            &Entry::Mode(
                &vl!(
                    [EVEX_Vpextrw_r32_xmm_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Gy, Ux, Ib
                ),
                &Entry::W(
                    &vl!(
                        [EVEX_Vpextrw_r32_xmm_imm8, INVALID, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gy, Ux, Ib
                    ),
                    &vl!(
                        [EVEX_Vpextrw_r64_xmm_imm8, INVALID, INVALID],
                        [Unknown, Unknown, Unknown],
                        Gy, Ux, Ib
                    ),
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C6
    Entry::Prefix(&[
        Entry::W(
            &vlb!(
                [EVEX_Vshufps_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vshufps_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshufps_zmm_k1z_zmm_zmmm512b32_imm8],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W, Ib; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vshufpd_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vshufpd_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshufpd_zmm_k1z_zmm_zmmm512b64_imm8],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W, Ib; MASK | ZERO
            ),
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
    Entry::Invalid,
    // D1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsrlw_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlw_ymm_k1z_ymm_xmmm128, EVEX_Vpsrlw_zmm_k1z_zmm_xmmm128],
            [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
            V, H, Wx; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D2
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpsrld_xmm_k1z_xmm_xmmm128, EVEX_Vpsrld_ymm_k1z_ymm_xmmm128, EVEX_Vpsrld_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D3
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpsrlq_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlq_ymm_k1z_ymm_xmmm128, EVEX_Vpsrlq_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D4
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmullw_xmm_k1z_xmm_xmmm128, EVEX_Vpmullw_ymm_k1z_ymm_ymmm256, EVEX_Vpmullw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D6
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!([EVEX_Vmovq_xmmm64_xmm, INVALID, INVALID], [UInt64, Unknown, Unknown], Wx, Vx),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D7
    Entry::Invalid,
    // D8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubusb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubusb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubusb_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubusw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubusw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubusw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DA
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpminub_xmm_k1z_xmm_xmmm128, EVEX_Vpminub_ymm_k1z_ymm_ymmm256, EVEX_Vpminub_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpandd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpandd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpandd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpandq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpandq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpandq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddusb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddusb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddusb_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DD
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddusw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddusw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddusw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DE
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaxub_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxub_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxub_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpandnd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpandnd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpandnd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpandnq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpandnq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpandnq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E0
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpavgb_xmm_k1z_xmm_xmmm128, EVEX_Vpavgb_ymm_k1z_ymm_ymmm256, EVEX_Vpavgb_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsraw_xmm_k1z_xmm_xmmm128, EVEX_Vpsraw_ymm_k1z_ymm_xmmm128, EVEX_Vpsraw_zmm_k1z_zmm_xmmm128],
            [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
            V, H, Wx; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E2
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpsrad_xmm_k1z_xmm_xmmm128, EVEX_Vpsrad_ymm_k1z_ymm_xmmm128, EVEX_Vpsrad_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpsraq_xmm_k1z_xmm_xmmm128, EVEX_Vpsraq_ymm_k1z_ymm_xmmm128, EVEX_Vpsraq_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E3
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpavgw_xmm_k1z_xmm_xmmm128, EVEX_Vpavgw_ymm_k1z_ymm_ymmm256, EVEX_Vpavgw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E4
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmulhuw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhuw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhuw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmulhw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E6
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vcvttpd2dq_xmm_k1z_xmmm128b64, EVEX_Vcvttpd2dq_xmm_k1z_ymmm256b64, EVEX_Vcvttpd2dq_ymm_k1z_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Vh, W; MASK | ZERO | SAE
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vcvtdq2pd_xmm_k1z_xmmm64b32, EVEX_Vcvtdq2pd_ymm_k1z_xmmm128b32, EVEX_Vcvtdq2pd_zmm_k1z_ymmm256b32],
                [Packed64_Int32, Packed128_Int32, Packed256_Int32],
                [Broadcast64_Int32, Broadcast128_Int32, Broadcast256_Int32],
                V, Wh; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vcvtqq2pd_xmm_k1z_xmmm128b64, EVEX_Vcvtqq2pd_ymm_k1z_ymmm256b64, EVEX_Vcvtqq2pd_zmm_k1z_zmmm512b64_er],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, W; MASK | ZERO | ER
            ),
        ),
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vcvtpd2dq_xmm_k1z_xmmm128b64, EVEX_Vcvtpd2dq_xmm_k1z_ymmm256b64, EVEX_Vcvtpd2dq_ymm_k1z_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Vh, W; MASK | ZERO | ER
            ),
        ),
    ]),
    // E7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vmovntdq_m128_xmm, EVEX_Vmovntdq_m256_ymm, EVEX_Vmovntdq_m512_zmm],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                M, V
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubsb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubsb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubsb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubsw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubsw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EA
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpminsw_xmm_k1z_xmm_xmmm128, EVEX_Vpminsw_ymm_k1z_ymm_ymmm256, EVEX_Vpminsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpord_xmm_k1z_xmm_xmmm128b32, EVEX_Vpord_ymm_k1z_ymm_ymmm256b32, EVEX_Vpord_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vporq_xmm_k1z_xmm_xmmm128b64, EVEX_Vporq_ymm_k1z_ymm_ymmm256b64, EVEX_Vporq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddsb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddsb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddsb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // ED
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddsw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddsw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EE
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaxsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32, EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32, EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F0
    Entry::Invalid,
    // F1
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsllw_xmm_k1z_xmm_xmmm128, EVEX_Vpsllw_ymm_k1z_ymm_xmmm128, EVEX_Vpsllw_zmm_k1z_zmm_xmmm128],
            [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
            V, H, Wx; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F2
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpslld_xmm_k1z_xmm_xmmm128, EVEX_Vpslld_ymm_k1z_ymm_xmmm128, EVEX_Vpslld_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F3
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpsllq_xmm_k1z_xmm_xmmm128, EVEX_Vpsllq_ymm_k1z_ymm_xmmm128, EVEX_Vpsllq_zmm_k1z_zmm_xmmm128],
                [Packed128_UInt64, Packed128_UInt64, Packed128_UInt64],
                V, H, Wx; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F4
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpmuludq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmuludq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmuludq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_2xUInt32, Broadcast256_2xUInt32, Broadcast512_2xUInt32],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F5
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaddwd_xmm_k1z_xmm_xmmm128, EVEX_Vpmaddwd_ymm_k1z_ymm_ymmm256, EVEX_Vpmaddwd_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F6
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsadbw_xmm_xmm_xmmm128, EVEX_Vpsadbw_ymm_ymm_ymmm256, EVEX_Vpsadbw_zmm_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F7
    Entry::Invalid,
    // F8
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubb_xmm_k1z_xmm_xmmm128, EVEX_Vpsubb_ymm_k1z_ymm_ymmm256, EVEX_Vpsubb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F9
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpsubw_xmm_k1z_xmm_xmmm128, EVEX_Vpsubw_ymm_k1z_ymm_ymmm256, EVEX_Vpsubw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpsubd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsubd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsubd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpsubq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsubq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsubq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FC
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddb_xmm_k1z_xmm_xmmm128, EVEX_Vpaddb_ymm_k1z_ymm_ymmm256, EVEX_Vpaddb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FD
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpaddw_xmm_k1z_xmm_xmmm128, EVEX_Vpaddw_ymm_k1z_ymm_ymmm256, EVEX_Vpaddw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FE
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FF
    Entry::Invalid,
];

/// EVEX map 2.
pub(crate) static EVEX_0F38: [Entry; 256] = [
    // 00
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpshufb_xmm_k1z_xmm_xmmm128, EVEX_Vpshufb_ymm_k1z_ymm_ymmm256, EVEX_Vpshufb_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 01
    Entry::Invalid,
    // 02
    Entry::Invalid,
    // 03
    Entry::Invalid,
    // 04
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaddubsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaddubsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaddubsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmulhrsw_xmm_k1z_xmm_xmmm128, EVEX_Vpmulhrsw_ymm_k1z_ymm_ymmm256, EVEX_Vpmulhrsw_zmm_k1z_zmm_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermilps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermilps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermilps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
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
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpermilpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermilpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermilpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0E
    Entry::Invalid,
    // 0F
    Entry::Invalid,
    // 10
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpsrlvw_xmm_k1z_xmm_xmmm128, EVEX_Vpsrlvw_ymm_k1z_ymm_ymmm256, EVEX_Vpsrlvw_zmm_k1z_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovuswb_xmmm64_k1z_xmm, EVEX_Vpmovuswb_xmmm128_k1z_ymm, EVEX_Vpmovuswb_ymmm256_k1z_zmm],
                [Packed64_UInt8, Packed128_UInt8, Packed256_UInt8],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 11
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpsravw_xmm_k1z_xmm_xmmm128, EVEX_Vpsravw_ymm_k1z_ymm_ymmm256, EVEX_Vpsravw_zmm_k1z_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovusdb_xmmm32_k1z_xmm, EVEX_Vpmovusdb_xmmm64_k1z_ymm, EVEX_Vpmovusdb_xmmm128_k1z_zmm],
                [Packed32_UInt8, Packed64_UInt8, Packed128_UInt8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 12
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpsllvw_xmm_k1z_xmm_xmmm128, EVEX_Vpsllvw_ymm_k1z_ymm_ymmm256, EVEX_Vpsllvw_zmm_k1z_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovusqb_xmmm16_k1z_xmm, EVEX_Vpmovusqb_xmmm32_k1z_ymm, EVEX_Vpmovusqb_xmmm64_k1z_zmm],
                [Packed16_UInt8, Packed32_UInt8, Packed64_UInt8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 13
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vcvtph2ps_xmm_k1z_xmmm64, EVEX_Vcvtph2ps_ymm_k1z_xmmm128, EVEX_Vcvtph2ps_zmm_k1z_ymmm256_sae],
                [Packed64_Float16, Packed128_Float16, Packed256_Float16],
                V, Wh; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovusdw_xmmm64_k1z_xmm, EVEX_Vpmovusdw_xmmm128_k1z_ymm, EVEX_Vpmovusdw_ymmm256_k1z_zmm],
                [Packed64_UInt16, Packed128_UInt16, Packed256_UInt16],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 14
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vprorvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vprorvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vprorvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vprorvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vprorvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vprorvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovusqw_xmmm32_k1z_xmm, EVEX_Vpmovusqw_xmmm64_k1z_ymm, EVEX_Vpmovusqw_xmmm128_k1z_zmm],
                [Packed32_UInt16, Packed64_UInt16, Packed128_UInt16],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vprolvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vprolvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vprolvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vprolvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vprolvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vprolvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovusqd_xmmm64_k1z_xmm, EVEX_Vpmovusqd_xmmm128_k1z_ymm, EVEX_Vpmovusqd_ymmm256_k1z_zmm],
                [Packed64_UInt32, Packed128_UInt32, Packed256_UInt32],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, EVEX_Vpermps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermps_zmm_k1z_zmm_zmmm512b32],
                [Unknown, Packed256_Float32, Packed512_Float32],
                [Unknown, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [INVALID, EVEX_Vpermpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermpd_zmm_k1z_zmm_zmmm512b64],
                [Unknown, Packed256_Float64, Packed512_Float64],
                [Unknown, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 17
    Entry::Invalid,
    // 18
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vbroadcastss_xmm_k1z_xmmm32, EVEX_Vbroadcastss_ymm_k1z_xmmm32, EVEX_Vbroadcastss_zmm_k1z_xmmm32],
                [Float32, Float32, Float32],
                V, Wx; MASK | ZERO
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
                [INVALID, EVEX_Vbroadcastf32x2_ymm_k1z_xmmm64, EVEX_Vbroadcastf32x2_zmm_k1z_xmmm64],
                [Unknown, Packed64_Float32, Packed64_Float32],
                V, Wx; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vbroadcastsd_ymm_k1z_xmmm64, EVEX_Vbroadcastsd_zmm_k1z_xmmm64],
                [Unknown, Float64, Float64],
                V, Wx; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vbroadcastf32x4_ymm_k1z_m128, EVEX_Vbroadcastf32x4_zmm_k1z_m128],
                [Unknown, Packed128_Float32, Packed128_Float32],
                V, M; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vbroadcastf64x2_ymm_k1z_m128, EVEX_Vbroadcastf64x2_zmm_k1z_m128],
                [Unknown, Packed128_Float64, Packed128_Float64],
                V, M; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vbroadcastf32x8_zmm_k1z_m256],
                [Unknown, Unknown, Packed256_Float32],
                V, M; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vbroadcastf64x4_zmm_k1z_m256],
                [Unknown, Unknown, Packed256_Float64],
                V, M; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpabsb_xmm_k1z_xmmm128, EVEX_Vpabsb_ymm_k1z_ymmm256, EVEX_Vpabsb_zmm_k1z_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1D
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpabsw_xmm_k1z_xmmm128, EVEX_Vpabsw_ymm_k1z_ymmm256, EVEX_Vpabsw_zmm_k1z_zmmm512],
            [Packed128_Int16, Packed256_Int16, Packed512_Int16],
            V, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpabsd_xmm_k1z_xmmm128b32, EVEX_Vpabsd_ymm_k1z_ymmm256b32, EVEX_Vpabsd_zmm_k1z_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpabsq_xmm_k1z_xmmm128b64, EVEX_Vpabsq_ymm_k1z_ymmm256b64, EVEX_Vpabsq_zmm_k1z_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovsxbw_xmm_k1z_xmmm64, EVEX_Vpmovsxbw_ymm_k1z_xmmm128, EVEX_Vpmovsxbw_zmm_k1z_ymmm256],
            [Packed64_Int8, Packed128_Int8, Packed256_Int8],
            V, Wh; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovswb_xmmm64_k1z_xmm, EVEX_Vpmovswb_xmmm128_k1z_ymm, EVEX_Vpmovswb_ymmm256_k1z_zmm],
                [Packed64_Int8, Packed128_Int8, Packed256_Int8],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovsxbd_xmm_k1z_xmmm32, EVEX_Vpmovsxbd_ymm_k1z_xmmm64, EVEX_Vpmovsxbd_zmm_k1z_xmmm128],
            [Packed32_Int8, Packed64_Int8, Packed128_Int8],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovsdb_xmmm32_k1z_xmm, EVEX_Vpmovsdb_xmmm64_k1z_ymm, EVEX_Vpmovsdb_xmmm128_k1z_zmm],
                [Packed32_Int8, Packed64_Int8, Packed128_Int8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovsxbq_xmm_k1z_xmmm16, EVEX_Vpmovsxbq_ymm_k1z_xmmm32, EVEX_Vpmovsxbq_zmm_k1z_xmmm64],
            [Packed16_Int8, Packed32_Int8, Packed64_Int8],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovsqb_xmmm16_k1z_xmm, EVEX_Vpmovsqb_xmmm32_k1z_ymm, EVEX_Vpmovsqb_xmmm64_k1z_zmm],
                [Packed16_Int8, Packed32_Int8, Packed64_Int8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 23
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovsxwd_xmm_k1z_xmmm64, EVEX_Vpmovsxwd_ymm_k1z_xmmm128, EVEX_Vpmovsxwd_zmm_k1z_ymmm256],
            [Packed64_Int16, Packed128_Int16, Packed256_Int16],
            V, Wh; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovsdw_xmmm64_k1z_xmm, EVEX_Vpmovsdw_xmmm128_k1z_ymm, EVEX_Vpmovsdw_ymmm256_k1z_zmm],
                [Packed64_Int16, Packed128_Int16, Packed256_Int16],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 24
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovsxwq_xmm_k1z_xmmm32, EVEX_Vpmovsxwq_ymm_k1z_xmmm64, EVEX_Vpmovsxwq_zmm_k1z_xmmm128],
            [Packed32_Int16, Packed64_Int16, Packed128_Int16],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovsqw_xmmm32_k1z_xmm, EVEX_Vpmovsqw_xmmm64_k1z_ymm, EVEX_Vpmovsqw_xmmm128_k1z_zmm],
                [Packed32_Int16, Packed64_Int16, Packed128_Int16],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 25
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpmovsxdq_xmm_k1z_xmmm64, EVEX_Vpmovsxdq_ymm_k1z_xmmm128, EVEX_Vpmovsxdq_zmm_k1z_ymmm256],
                [Packed64_Int32, Packed128_Int32, Packed256_Int32],
                V, Wh; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovsqd_xmmm64_k1z_xmm, EVEX_Vpmovsqd_xmmm128_k1z_ymm, EVEX_Vpmovsqd_ymmm256_k1z_zmm],
                [Packed64_Int32, Packed128_Int32, Packed256_Int32],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 26
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vptestmb_kr_k1_xmm_xmmm128, EVEX_Vptestmb_kr_k1_ymm_ymmm256, EVEX_Vptestmb_kr_k1_zmm_zmmm512],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                Kr, H, W; MASK
            ),
            &vl!(
                [EVEX_Vptestmw_kr_k1_xmm_xmmm128, EVEX_Vptestmw_kr_k1_ymm_ymmm256, EVEX_Vptestmw_kr_k1_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                Kr, H, W; MASK
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vptestnmb_kr_k1_xmm_xmmm128, EVEX_Vptestnmb_kr_k1_ymm_ymmm256, EVEX_Vptestnmb_kr_k1_zmm_zmmm512],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                Kr, H, W; MASK
            ),
            &vl!(
                [EVEX_Vptestnmw_kr_k1_xmm_xmmm128, EVEX_Vptestnmw_kr_k1_ymm_ymmm256, EVEX_Vptestnmw_kr_k1_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                Kr, H, W; MASK
            ),
        ),
        Entry::Invalid,
    ]),
    // 27
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vptestmd_kr_k1_xmm_xmmm128b32, EVEX_Vptestmd_kr_k1_ymm_ymmm256b32, EVEX_Vptestmd_kr_k1_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                Kr, H, W; MASK
            ),
            &vlb!(
                [EVEX_Vptestmq_kr_k1_xmm_xmmm128b64, EVEX_Vptestmq_kr_k1_ymm_ymmm256b64, EVEX_Vptestmq_kr_k1_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                Kr, H, W; MASK
            ),
        ),
        Entry::W(
            &vlb!(
                [EVEX_Vptestnmd_kr_k1_xmm_xmmm128b32, EVEX_Vptestnmd_kr_k1_ymm_ymmm256b32, EVEX_Vptestnmd_kr_k1_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                Kr, H, W; MASK
            ),
            &vlb!(
                [EVEX_Vptestnmq_kr_k1_xmm_xmmm128b64, EVEX_Vptestnmq_kr_k1_ymm_ymmm256b64, EVEX_Vptestnmq_kr_k1_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                Kr, H, W; MASK
            ),
        ),
        Entry::Invalid,
    ]),
    // 28
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_2xInt32, Broadcast256_2xInt32, Broadcast512_2xInt32],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovm2b_xmm_kr, EVEX_Vpmovm2b_ymm_kr, EVEX_Vpmovm2b_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
            &vl!(
                [EVEX_Vpmovm2w_xmm_kr, EVEX_Vpmovm2w_ymm_kr, EVEX_Vpmovm2w_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
        ),
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpcmpeqq_kr_k1_xmm_xmmm128b64, EVEX_Vpcmpeqq_kr_k1_ymm_ymmm256b64, EVEX_Vpcmpeqq_kr_k1_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                Kr, H, W; MASK
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovb2m_kr_xmm, EVEX_Vpmovb2m_kr_ymm, EVEX_Vpmovb2m_kr_zmm],
                [Unknown, Unknown, Unknown],
                Kr, U
            ),
            &vl!(
                [EVEX_Vpmovw2m_kr_xmm, EVEX_Vpmovw2m_kr_ymm, EVEX_Vpmovw2m_kr_zmm],
                [Unknown, Unknown, Unknown],
                Kr, U
            ),
        ),
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vmovntdqa_xmm_m128, EVEX_Vmovntdqa_ymm_m256, EVEX_Vmovntdqa_zmm_m512],
                [UInt128, UInt256, UInt512],
                V, M
            ),
            &Entry::Invalid,
        ),
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpbroadcastmb2q_xmm_kr, EVEX_Vpbroadcastmb2q_ymm_kr, EVEX_Vpbroadcastmb2q_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
        ),
        Entry::Invalid,
    ]),
    // 2B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpackusdw_xmm_k1z_xmm_xmmm128b32, EVEX_Vpackusdw_ymm_k1z_ymm_ymmm256b32, EVEX_Vpackusdw_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32, EVEX_Vscalefps_ymm_k1z_ymm_ymmm256b32, EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vscalefpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vscalefpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vscalefpd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vscalefss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vscalefsd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2E
    Entry::Invalid,
    // 2F
    Entry::Invalid,
    // 30
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxbw_xmm_k1z_xmmm64, EVEX_Vpmovzxbw_ymm_k1z_xmmm128, EVEX_Vpmovzxbw_zmm_k1z_ymmm256],
            [Packed64_UInt8, Packed128_UInt8, Packed256_UInt8],
            V, Wh; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovwb_xmmm64_k1z_xmm, EVEX_Vpmovwb_xmmm128_k1z_ymm, EVEX_Vpmovwb_ymmm256_k1z_zmm],
                [Packed64_Int8, Packed128_Int8, Packed256_Int8],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 31
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxbd_xmm_k1z_xmmm32, EVEX_Vpmovzxbd_ymm_k1z_xmmm64, EVEX_Vpmovzxbd_zmm_k1z_xmmm128],
            [Packed32_UInt8, Packed64_UInt8, Packed128_UInt8],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovdb_xmmm32_k1z_xmm, EVEX_Vpmovdb_xmmm64_k1z_ymm, EVEX_Vpmovdb_xmmm128_k1z_zmm],
                [Packed32_Int8, Packed64_Int8, Packed128_Int8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 32
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxbq_xmm_k1z_xmmm16, EVEX_Vpmovzxbq_ymm_k1z_xmmm32, EVEX_Vpmovzxbq_zmm_k1z_xmmm64],
            [Packed16_UInt8, Packed32_UInt8, Packed64_UInt8],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovqb_xmmm16_k1z_xmm, EVEX_Vpmovqb_xmmm32_k1z_ymm, EVEX_Vpmovqb_xmmm64_k1z_zmm],
                [Packed16_Int8, Packed32_Int8, Packed64_Int8],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 33
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxwd_xmm_k1z_xmmm64, EVEX_Vpmovzxwd_ymm_k1z_xmmm128, EVEX_Vpmovzxwd_zmm_k1z_ymmm256],
            [Packed64_UInt16, Packed128_UInt16, Packed256_UInt16],
            V, Wh; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovdw_xmmm64_k1z_xmm, EVEX_Vpmovdw_xmmm128_k1z_ymm, EVEX_Vpmovdw_ymmm256_k1z_zmm],
                [Packed64_Int16, Packed128_Int16, Packed256_Int16],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 34
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxwq_xmm_k1z_xmmm32, EVEX_Vpmovzxwq_ymm_k1z_xmmm64, EVEX_Vpmovzxwq_zmm_k1z_xmmm128],
            [Packed32_UInt16, Packed64_UInt16, Packed128_UInt16],
            V, Wx; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovqw_xmmm32_k1z_xmm, EVEX_Vpmovqw_xmmm64_k1z_ymm, EVEX_Vpmovqw_xmmm128_k1z_zmm],
                [Packed32_Int16, Packed64_Int16, Packed128_Int16],
                Wx, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 35
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmovzxdq_xmm_k1z_xmmm64, EVEX_Vpmovzxdq_ymm_k1z_xmmm128, EVEX_Vpmovzxdq_zmm_k1z_ymmm256],
            [Packed64_UInt32, Packed128_UInt32, Packed256_UInt32],
            V, Wh; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovqd_xmmm64_k1z_xmm, EVEX_Vpmovqd_xmmm128_k1z_ymm, EVEX_Vpmovqd_ymmm256_k1z_zmm],
                [Packed64_Int32, Packed128_Int32, Packed256_Int32],
                Wh, V; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 36
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, EVEX_Vpermd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermd_zmm_k1z_zmm_zmmm512b32],
                [Unknown, Packed256_Int32, Packed512_Int32],
                [Unknown, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [INVALID, EVEX_Vpermq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermq_zmm_k1z_zmm_zmmm512b64],
                [Unknown, Packed256_Int64, Packed512_Int64],
                [Unknown, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 37
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpcmpgtq_kr_k1_xmm_xmmm128b64, EVEX_Vpcmpgtq_kr_k1_ymm_ymmm256b64, EVEX_Vpcmpgtq_kr_k1_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                Kr, H, W; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 38
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpminsb_xmm_k1z_xmm_xmmm128, EVEX_Vpminsb_ymm_k1z_ymm_ymmm256, EVEX_Vpminsb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovm2d_xmm_kr, EVEX_Vpmovm2d_ymm_kr, EVEX_Vpmovm2d_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
            &vl!(
                [EVEX_Vpmovm2q_xmm_kr, EVEX_Vpmovm2q_ymm_kr, EVEX_Vpmovm2q_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
        ),
        Entry::Invalid,
    ]),
    // 39
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpminsd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpminsd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpminsd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpminsq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpminsq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpminsq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpmovd2m_kr_xmm, EVEX_Vpmovd2m_kr_ymm, EVEX_Vpmovd2m_kr_zmm],
                [Unknown, Unknown, Unknown],
                Kr, U
            ),
            &vl!(
                [EVEX_Vpmovq2m_kr_xmm, EVEX_Vpmovq2m_kr_ymm, EVEX_Vpmovq2m_kr_zmm],
                [Unknown, Unknown, Unknown],
                Kr, U
            ),
        ),
        Entry::Invalid,
    ]),
    // 3A
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpminuw_xmm_k1z_xmm_xmmm128, EVEX_Vpminuw_ymm_k1z_ymm_ymmm256, EVEX_Vpminuw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::W(
            &vl!(
                [EVEX_Vpbroadcastmw2d_xmm_kr, EVEX_Vpbroadcastmw2d_ymm_kr, EVEX_Vpbroadcastmw2d_zmm_kr],
                [Unknown, Unknown, Unknown],
                V, Krm
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
    ]),
    // 3B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpminud_xmm_k1z_xmm_xmmm128b32, EVEX_Vpminud_ymm_k1z_ymm_ymmm256b32, EVEX_Vpminud_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpminuq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpminuq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpminuq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3C
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaxsb_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxsb_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxsb_zmm_k1z_zmm_zmmm512],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpmaxsd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmaxsd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmaxsd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpmaxsq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmaxsq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmaxsq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3E
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpmaxuw_xmm_k1z_xmm_xmmm128, EVEX_Vpmaxuw_ymm_k1z_ymm_ymmm256, EVEX_Vpmaxuw_zmm_k1z_zmm_zmmm512],
            [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
            V, H, W; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpmaxud_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmaxud_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmaxud_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpmaxuq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmaxuq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmaxuq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 40
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpmulld_xmm_k1z_xmm_xmmm128b32, EVEX_Vpmulld_ymm_k1z_ymm_ymmm256b32, EVEX_Vpmulld_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpmullq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmullq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmullq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 41
    Entry::Invalid,
    // 42
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vgetexpps_xmm_k1z_xmmm128b32, EVEX_Vgetexpps_ymm_k1z_ymmm256b32, EVEX_Vgetexpps_zmm_k1z_zmmm512b32_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vgetexppd_xmm_k1z_xmmm128b64, EVEX_Vgetexppd_ymm_k1z_ymmm256b64, EVEX_Vgetexppd_zmm_k1z_zmmm512b64_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 43
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vgetexpss_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &mem!(EVEX_Vgetexpsd_xmm_k1z_xmm_xmmm64_sae, Float64, Vx, Hx, Wx; MASK | ZERO | SAE),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 44
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vplzcntd_xmm_k1z_xmmm128b32, EVEX_Vplzcntd_ymm_k1z_ymmm256b32, EVEX_Vplzcntd_zmm_k1z_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vplzcntq_xmm_k1z_xmmm128b64, EVEX_Vplzcntq_ymm_k1z_ymmm256b64, EVEX_Vplzcntq_zmm_k1z_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 45
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpsrlvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsrlvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsrlvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpsrlvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsrlvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsrlvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 46
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpsravd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsravd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsravd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpsravq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsravq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsravq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 47
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpsllvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpsllvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpsllvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpsllvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpsllvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpsllvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vrcp14ps_xmm_k1z_xmmm128b32, EVEX_Vrcp14ps_ymm_k1z_ymmm256b32, EVEX_Vrcp14ps_zmm_k1z_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vrcp14pd_xmm_k1z_xmmm128b64, EVEX_Vrcp14pd_ymm_k1z_ymmm256b64, EVEX_Vrcp14pd_zmm_k1z_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vrcp14ss_xmm_k1z_xmm_xmmm32, Float32, Vx, Hx, Wx; MASK | ZERO),
            &mem!(EVEX_Vrcp14sd_xmm_k1z_xmm_xmmm64, Float64, Vx, Hx, Wx; MASK | ZERO),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vrsqrt14ps_xmm_k1z_xmmm128b32, EVEX_Vrsqrt14ps_ymm_k1z_ymmm256b32, EVEX_Vrsqrt14ps_zmm_k1z_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vrsqrt14pd_xmm_k1z_xmmm128b64, EVEX_Vrsqrt14pd_ymm_k1z_ymmm256b64, EVEX_Vrsqrt14pd_zmm_k1z_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 4F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vrsqrt14ss_xmm_k1z_xmm_xmmm32, Float32, Vx, Hx, Wx; MASK | ZERO),
            &mem!(EVEX_Vrsqrt14sd_xmm_k1z_xmm_xmmm64, Float64, Vx, Hx, Wx; MASK | ZERO),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 50
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpdpbusd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpdpbusd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpdpbusd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 51
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpdpbusds_xmm_k1z_xmm_xmmm128b32, EVEX_Vpdpbusds_ymm_k1z_ymm_ymmm256b32, EVEX_Vpdpbusds_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 52
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpdpwssd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpdpwssd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpdpwssd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vp4dpwssd_zmm_k1z_zmmp3_m128],
                [Unknown, Unknown, Packed128_Int16],
                V, H, M; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
    ]),
    // 53
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpdpwssds_xmm_k1z_xmm_xmmm128b32, EVEX_Vpdpwssds_ymm_k1z_ymm_ymmm256b32, EVEX_Vpdpwssds_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vp4dpwssds_zmm_k1z_zmmp3_m128],
                [Unknown, Unknown, Packed128_Int16],
                V, H, M; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
    ]),
    // 54
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpopcntb_xmm_k1z_xmmm128, EVEX_Vpopcntb_ymm_k1z_ymmm256, EVEX_Vpopcntb_zmm_k1z_zmmm512],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                V, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpopcntw_xmm_k1z_xmmm128, EVEX_Vpopcntw_ymm_k1z_ymmm256, EVEX_Vpopcntw_zmm_k1z_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 55
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpopcntd_xmm_k1z_xmmm128b32, EVEX_Vpopcntd_ymm_k1z_ymmm256b32, EVEX_Vpopcntd_zmm_k1z_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpopcntq_xmm_k1z_xmmm128b64, EVEX_Vpopcntq_ymm_k1z_ymmm256b64, EVEX_Vpopcntq_zmm_k1z_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 56
    Entry::Invalid,
    // 57
    Entry::Invalid,
    // 58
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpbroadcastd_xmm_k1z_xmmm32, EVEX_Vpbroadcastd_ymm_k1z_xmmm32, EVEX_Vpbroadcastd_zmm_k1z_xmmm32],
                [Int32, Int32, Int32],
                V, Wx; MASK | ZERO
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
                [EVEX_Vbroadcasti32x2_xmm_k1z_xmmm64, EVEX_Vbroadcasti32x2_ymm_k1z_xmmm64, EVEX_Vbroadcasti32x2_zmm_k1z_xmmm64],
                [Packed64_Int32, Packed64_Int32, Packed64_Int32],
                V, Wx; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpbroadcastq_xmm_k1z_xmmm64, EVEX_Vpbroadcastq_ymm_k1z_xmmm64, EVEX_Vpbroadcastq_zmm_k1z_xmmm64],
                [Int64, Int64, Int64],
                V, Wx; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vbroadcasti32x4_ymm_k1z_m128, EVEX_Vbroadcasti32x4_zmm_k1z_m128],
                [Unknown, Packed128_Int32, Packed128_Int32],
                V, M; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vbroadcasti64x2_ymm_k1z_m128, EVEX_Vbroadcasti64x2_zmm_k1z_m128],
                [Unknown, Packed128_Int64, Packed128_Int64],
                V, M; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 5B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vbroadcasti32x8_zmm_k1z_m256],
                [Unknown, Unknown, Packed256_Int32],
                V, M; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vbroadcasti64x4_zmm_k1z_m256],
                [Unknown, Unknown, Packed256_Int64],
                V, M; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpexpandb_xmm_k1z_xmmm128, EVEX_Vpexpandb_ymm_k1z_ymmm256, EVEX_Vpexpandb_zmm_k1z_zmmm512],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                V, W; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vpexpandw_xmm_k1z_xmmm128, EVEX_Vpexpandw_ymm_k1z_ymmm256, EVEX_Vpexpandw_zmm_k1z_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, W; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpcompressb_xmmm128_k1z_xmm, EVEX_Vpcompressb_ymmm256_k1z_ymm, EVEX_Vpcompressb_zmmm512_k1z_zmm],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                W, V; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vpcompressw_xmmm128_k1z_xmm, EVEX_Vpcompressw_ymmm256_k1z_ymm, EVEX_Vpcompressw_zmmm512_k1z_zmm],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                W, V; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 64
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpblendmd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpblendmd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpblendmd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpblendmq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpblendmq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpblendmq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 65
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vblendmps_xmm_k1z_xmm_xmmm128b32, EVEX_Vblendmps_ymm_k1z_ymm_ymmm256b32, EVEX_Vblendmps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vblendmpd_xmm_k1z_xmm_xmmm128b64, EVEX_Vblendmpd_ymm_k1z_ymm_ymmm256b64, EVEX_Vblendmpd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 66
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpblendmb_xmm_k1z_xmm_xmmm128, EVEX_Vpblendmb_ymm_k1z_ymm_ymmm256, EVEX_Vpblendmb_zmm_k1z_zmm_zmmm512],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                V, H, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpblendmw_xmm_k1z_xmm_xmmm128, EVEX_Vpblendmw_ymm_k1z_ymm_ymmm256, EVEX_Vpblendmw_zmm_k1z_zmm_zmmm512],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpshldvw_xmm_k1z_xmm_xmmm128, EVEX_Vpshldvw_ymm_k1z_ymm_ymmm256, EVEX_Vpshldvw_zmm_k1z_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 71
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpshldvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpshldvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpshldvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpshldvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpshldvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpshldvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 72
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpshrdvw_xmm_k1z_xmm_xmmm128, EVEX_Vpshrdvw_ymm_k1z_ymm_ymmm256, EVEX_Vpshrdvw_zmm_k1z_zmm_zmmm512],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 73
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpshrdvd_xmm_k1z_xmm_xmmm128b32, EVEX_Vpshrdvd_ymm_k1z_ymm_ymmm256b32, EVEX_Vpshrdvd_zmm_k1z_zmm_zmmm512b32],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpshrdvq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpshrdvq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpshrdvq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 74
    Entry::Invalid,
    // 75
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpermi2b_xmm_k1z_xmm_xmmm128, EVEX_Vpermi2b_ymm_k1z_ymm_ymmm256, EVEX_Vpermi2b_zmm_k1z_zmm_zmmm512],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                V, H, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpermi2w_xmm_k1z_xmm_xmmm128, EVEX_Vpermi2w_ymm_k1z_ymm_ymmm256, EVEX_Vpermi2w_zmm_k1z_zmm_zmmm512],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 76
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermi2d_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermi2d_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermi2d_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpermi2q_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermi2q_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermi2q_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 77
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermi2ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermi2ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermi2ps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpermi2pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermi2pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermi2pd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 78
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpbroadcastb_xmm_k1z_xmmm8, EVEX_Vpbroadcastb_ymm_k1z_xmmm8, EVEX_Vpbroadcastb_zmm_k1z_xmmm8],
                [Int8, Int8, Int8],
                V, Wx; MASK | ZERO
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
                [EVEX_Vpbroadcastw_xmm_k1z_xmmm16, EVEX_Vpbroadcastw_ymm_k1z_xmmm16, EVEX_Vpbroadcastw_zmm_k1z_xmmm16],
                [Int16, Int16, Int16],
                V, Wx; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7A
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpbroadcastb_xmm_k1z_r32, EVEX_Vpbroadcastb_ymm_k1z_r32, EVEX_Vpbroadcastb_zmm_k1z_r32],
            [Unknown, Unknown, Unknown],
            V, Ry; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7B
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpbroadcastw_xmm_k1z_r32, EVEX_Vpbroadcastw_ymm_k1z_r32, EVEX_Vpbroadcastw_zmm_k1z_r32],
            [Unknown, Unknown, Unknown],
            V, Ry; MASK | ZERO
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vpbroadcastd_xmm_k1z_r32, EVEX_Vpbroadcastd_ymm_k1z_r32, EVEX_Vpbroadcastd_zmm_k1z_r32],
                [Unknown, Unknown, Unknown],
                V, Ry; MASK | ZERO
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpbroadcastd_xmm_k1z_r32, EVEX_Vpbroadcastd_ymm_k1z_r32, EVEX_Vpbroadcastd_zmm_k1z_r32],
                    [Unknown, Unknown, Unknown],
                    V, Ry; MASK | ZERO
                ),
                &vl!(
                    [EVEX_Vpbroadcastq_xmm_k1z_r64, EVEX_Vpbroadcastq_ymm_k1z_r64, EVEX_Vpbroadcastq_zmm_k1z_r64],
                    [Unknown, Unknown, Unknown],
                    V, Ry; MASK | ZERO
                ),
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
                [EVEX_Vpermt2b_xmm_k1z_xmm_xmmm128, EVEX_Vpermt2b_ymm_k1z_ymm_ymmm256, EVEX_Vpermt2b_zmm_k1z_zmm_zmmm512],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                V, H, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpermt2w_xmm_k1z_xmm_xmmm128, EVEX_Vpermt2w_ymm_k1z_ymm_ymmm256, EVEX_Vpermt2w_zmm_k1z_zmm_zmmm512],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermt2d_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermt2d_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermt2d_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpermt2q_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermt2q_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermt2q_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 7F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermt2ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vpermt2ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vpermt2ps_zmm_k1z_zmm_zmmm512b32],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpermt2pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vpermt2pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vpermt2pd_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO
            ),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpmultishiftqb_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmultishiftqb_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmultishiftqb_zmm_k1z_zmm_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W; MASK | ZERO
            ),
        ),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vexpandps_xmm_k1z_xmmm128, EVEX_Vexpandps_ymm_k1z_ymmm256, EVEX_Vexpandps_zmm_k1z_zmmm512],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                V, W; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vexpandpd_xmm_k1z_xmmm128, EVEX_Vexpandpd_ymm_k1z_ymmm256, EVEX_Vexpandpd_zmm_k1z_zmmm512],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                V, W; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 89
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpexpandd_xmm_k1z_xmmm128, EVEX_Vpexpandd_ymm_k1z_ymmm256, EVEX_Vpexpandd_zmm_k1z_zmmm512],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                V, W; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vpexpandq_xmm_k1z_xmmm128, EVEX_Vpexpandq_ymm_k1z_ymmm256, EVEX_Vpexpandq_zmm_k1z_zmmm512],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                V, W; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vcompressps_xmmm128_k1z_xmm, EVEX_Vcompressps_ymmm256_k1z_ymm, EVEX_Vcompressps_zmmm512_k1z_zmm],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                W, V; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vcompresspd_xmmm128_k1z_xmm, EVEX_Vcompresspd_ymmm256_k1z_ymm, EVEX_Vcompresspd_zmmm512_k1z_zmm],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                W, V; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpcompressd_xmmm128_k1z_xmm, EVEX_Vpcompressd_ymmm256_k1z_ymm, EVEX_Vpcompressd_zmmm512_k1z_zmm],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                W, V; MASK | ZERO | T1S
            ),
            &vl!(
                [EVEX_Vpcompressq_xmmm128_k1z_xmm, EVEX_Vpcompressq_ymmm256_k1z_ymm, EVEX_Vpcompressq_zmmm512_k1z_zmm],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                W, V; MASK | ZERO | T1S
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8C
    Entry::Invalid,
    // 8D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpermb_xmm_k1z_xmm_xmmm128, EVEX_Vpermb_ymm_k1z_ymm_ymmm256, EVEX_Vpermb_zmm_k1z_zmm_zmmm512],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                V, H, W; MASK | ZERO
            ),
            &vl!(
                [EVEX_Vpermw_xmm_k1z_xmm_xmmm128, EVEX_Vpermw_ymm_k1z_ymm_ymmm256, EVEX_Vpermw_zmm_k1z_zmm_zmmm512],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 8E
    Entry::Invalid,
    // 8F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpshufbitqmb_kr_k1_xmm_xmmm128, EVEX_Vpshufbitqmb_kr_k1_ymm_ymmm256, EVEX_Vpshufbitqmb_kr_k1_zmm_zmmm512],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                Kr, H, W; MASK
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 90
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpgatherdd_xmm_k1_vm32x, EVEX_Vpgatherdd_ymm_k1_vm32y, EVEX_Vpgatherdd_zmm_k1_vm32z],
                [Int32, Int32, Int32],
                V, Vsib; MASK
            ),
            &vl!(
                [EVEX_Vpgatherdq_xmm_k1_vm32x, EVEX_Vpgatherdq_ymm_k1_vm32x, EVEX_Vpgatherdq_zmm_k1_vm32y],
                [Int64, Int64, Int64],
                V, Vsibh; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 91
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpgatherqd_xmm_k1_vm64x, EVEX_Vpgatherqd_xmm_k1_vm64y, EVEX_Vpgatherqd_ymm_k1_vm64z],
                [Int32, Int32, Int32],
                Vh, Vsib; MASK
            ),
            &vl!(
                [EVEX_Vpgatherqq_xmm_k1_vm64x, EVEX_Vpgatherqq_ymm_k1_vm64y, EVEX_Vpgatherqq_zmm_k1_vm64z],
                [Int64, Int64, Int64],
                V, Vsib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 92
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vgatherdps_xmm_k1_vm32x, EVEX_Vgatherdps_ymm_k1_vm32y, EVEX_Vgatherdps_zmm_k1_vm32z],
                [Float32, Float32, Float32],
                V, Vsib; MASK
            ),
            &vl!(
                [EVEX_Vgatherdpd_xmm_k1_vm32x, EVEX_Vgatherdpd_ymm_k1_vm32x, EVEX_Vgatherdpd_zmm_k1_vm32y],
                [Float64, Float64, Float64],
                V, Vsibh; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 93
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vgatherqps_xmm_k1_vm64x, EVEX_Vgatherqps_xmm_k1_vm64y, EVEX_Vgatherqps_ymm_k1_vm64z],
                [Float32, Float32, Float32],
                Vh, Vsib; MASK
            ),
            &vl!(
                [EVEX_Vgatherqpd_xmm_k1_vm64x, EVEX_Vgatherqpd_ymm_k1_vm64y, EVEX_Vgatherqpd_zmm_k1_vm64z],
                [Float64, Float64, Float64],
                V, Vsib; MASK
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
            &vlb!(
                [EVEX_Vfmaddsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmaddsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 97
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsubadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsubadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 98
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 99
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmadd132ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmadd132sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_V4fmaddps_zmm_k1z_zmmp3_m128],
                [Unknown, Unknown, Packed128_Float32],
                V, H, M; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
    ]),
    // 9B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmsub132ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmsub132sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_V4fmaddss_xmm_k1z_xmmp3_m128, Packed128_Float32, Vx, Hx, M; MASK | ZERO),
            &Entry::Invalid,
        ),
    ]),
    // 9C
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmadd132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmadd132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmadd132ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmadd132sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmsub132ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub132ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub132ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmsub132pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub132pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub132pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 9F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmsub132ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmsub132sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A0
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpscatterdd_vm32x_k1_xmm, EVEX_Vpscatterdd_vm32y_k1_ymm, EVEX_Vpscatterdd_vm32z_k1_zmm],
                [Int32, Int32, Int32],
                Vsib, V; MASK
            ),
            &vl!(
                [EVEX_Vpscatterdq_vm32x_k1_xmm, EVEX_Vpscatterdq_vm32x_k1_ymm, EVEX_Vpscatterdq_vm32y_k1_zmm],
                [Int64, Int64, Int64],
                Vsibh, V; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A1
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpscatterqd_vm64x_k1_xmm, EVEX_Vpscatterqd_vm64y_k1_xmm, EVEX_Vpscatterqd_vm64z_k1_ymm],
                [Int32, Int32, Int32],
                Vsib, Vh; MASK
            ),
            &vl!(
                [EVEX_Vpscatterqq_vm64x_k1_xmm, EVEX_Vpscatterqq_vm64y_k1_ymm, EVEX_Vpscatterqq_vm64z_k1_zmm],
                [Int64, Int64, Int64],
                Vsib, V; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A2
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vscatterdps_vm32x_k1_xmm, EVEX_Vscatterdps_vm32y_k1_ymm, EVEX_Vscatterdps_vm32z_k1_zmm],
                [Float32, Float32, Float32],
                Vsib, V; MASK
            ),
            &vl!(
                [EVEX_Vscatterdpd_vm32x_k1_xmm, EVEX_Vscatterdpd_vm32x_k1_ymm, EVEX_Vscatterdpd_vm32y_k1_zmm],
                [Float64, Float64, Float64],
                Vsibh, V; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A3
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vscatterqps_vm64x_k1_xmm, EVEX_Vscatterqps_vm64y_k1_xmm, EVEX_Vscatterqps_vm64z_k1_ymm],
                [Float32, Float32, Float32],
                Vsib, Vh; MASK
            ),
            &vl!(
                [EVEX_Vscatterqpd_vm64x_k1_xmm, EVEX_Vscatterqpd_vm64y_k1_ymm, EVEX_Vscatterqpd_vm64z_k1_zmm],
                [Float64, Float64, Float64],
                Vsib, V; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A4
    Entry::Invalid,
    // A5
    Entry::Invalid,
    // A6
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmaddsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmaddsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsubadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsubadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // A9
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmadd213ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmadd213sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_V4fnmaddps_zmm_k1z_zmmp3_m128],
                [Unknown, Unknown, Packed128_Float32],
                V, H, M; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
    ]),
    // AB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmsub213ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmsub213sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_V4fnmaddss_xmm_k1z_xmmp3_m128, Packed128_Float32, Vx, Hx, M; MASK | ZERO),
            &Entry::Invalid,
        ),
    ]),
    // AC
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmadd213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmadd213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AD
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmadd213ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmadd213sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AE
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmsub213ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub213ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub213ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmsub213pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub213pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub213pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // AF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmsub213ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmsub213sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpmadd52luq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmadd52luq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmadd52luq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt52, Packed256_UInt52, Packed512_UInt52],
                [Broadcast128_UInt52, Broadcast256_UInt52, Broadcast512_UInt52],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B5
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpmadd52huq_xmm_k1z_xmm_xmmm128b64, EVEX_Vpmadd52huq_ymm_k1z_ymm_ymmm256b64, EVEX_Vpmadd52huq_zmm_k1z_zmm_zmmm512b64],
                [Packed128_UInt52, Packed256_UInt52, Packed512_UInt52],
                [Broadcast128_UInt52, Broadcast256_UInt52, Broadcast512_UInt52],
                V, H, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B6
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmaddsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmaddsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmaddsub231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmaddsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmaddsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmaddsub231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B7
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsubadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsubadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsubadd231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsubadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsubadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsubadd231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmadd231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmadd231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // B9
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmadd231ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmadd231sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfmsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfmsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfmsub231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfmsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfmsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfmsub231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfmsub231ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfmsub231sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BC
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmadd231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmadd231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmadd231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmadd231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmadd231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmadd231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BD
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmadd231ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmadd231sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BE
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfnmsub231ps_xmm_k1z_xmm_xmmm128b32, EVEX_Vfnmsub231ps_ymm_k1z_ymm_ymmm256b32, EVEX_Vfnmsub231ps_zmm_k1z_zmm_zmmm512b32_er],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W; MASK | ZERO | ER
            ),
            &vlb!(
                [EVEX_Vfnmsub231pd_xmm_k1z_xmm_xmmm128b64, EVEX_Vfnmsub231pd_ymm_k1z_ymm_ymmm256b64, EVEX_Vfnmsub231pd_zmm_k1z_zmm_zmmm512b64_er],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W; MASK | ZERO | ER
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // BF
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfnmsub231ss_xmm_k1z_xmm_xmmm32_er, Float32, Vx, Hx, Wx; MASK | ZERO | ER),
            &mem!(EVEX_Vfnmsub231sd_xmm_k1z_xmm_xmmm64_er, Float64, Vx, Hx, Wx; MASK | ZERO | ER),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpconflictd_xmm_k1z_xmmm128b32, EVEX_Vpconflictd_ymm_k1z_ymmm256b32, EVEX_Vpconflictd_zmm_k1z_zmmm512b32],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, W; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpconflictq_xmm_k1z_xmmm128b64, EVEX_Vpconflictq_ymm_k1z_ymmm256b64, EVEX_Vpconflictq_zmm_k1z_zmmm512b64],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, W; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C5
    Entry::Invalid,
    // C6
    Entry::Group(&[
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf0dps_vm32z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf0dpd_vm32y_k1],
                    [Unknown, Unknown, Float64],
                    Vsibh; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf1dps_vm32z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf1dpd_vm32y_k1],
                    [Unknown, Unknown, Float64],
                    Vsibh; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf0dps_vm32z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf0dpd_vm32y_k1],
                    [Unknown, Unknown, Float64],
                    Vsibh; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf1dps_vm32z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf1dpd_vm32y_k1],
                    [Unknown, Unknown, Float64],
                    Vsibh; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
    ]),
    // C7
    Entry::Group(&[
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf0qps_vm64z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf0qpd_vm64z_k1],
                    [Unknown, Unknown, Float64],
                    Vsib; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf1qps_vm64z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vgatherpf1qpd_vm64z_k1],
                    [Unknown, Unknown, Float64],
                    Vsib; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf0qps_vm64z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf0qpd_vm64z_k1],
                    [Unknown, Unknown, Float64],
                    Vsib; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Prefix(&[
            Entry::Invalid,
            Entry::W(
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf1qps_vm64z_k1],
                    [Unknown, Unknown, Float32],
                    Vsib; MASK
                ),
                &vl!(
                    [INVALID, INVALID, EVEX_Vscatterpf1qpd_vm64z_k1],
                    [Unknown, Unknown, Float64],
                    Vsib; MASK
                ),
            ),
            Entry::Invalid,
            Entry::Invalid,
        ]),
        Entry::Invalid,
    ]),
    // C8
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, INVALID, EVEX_Vexp2ps_zmm_k1z_zmmm512b32_sae],
                [Unknown, Unknown, Packed512_Float32],
                [Unknown, Unknown, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &vlb!(
                [INVALID, INVALID, EVEX_Vexp2pd_zmm_k1z_zmmm512b64_sae],
                [Unknown, Unknown, Packed512_Float64],
                [Unknown, Unknown, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C9
    Entry::Invalid,
    // CA
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, INVALID, EVEX_Vrcp28ps_zmm_k1z_zmmm512b32_sae],
                [Unknown, Unknown, Packed512_Float32],
                [Unknown, Unknown, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &vlb!(
                [INVALID, INVALID, EVEX_Vrcp28pd_zmm_k1z_zmmm512b64_sae],
                [Unknown, Unknown, Packed512_Float64],
                [Unknown, Unknown, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CB
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vrcp28ss_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &mem!(EVEX_Vrcp28sd_xmm_k1z_xmm_xmmm64_sae, Float64, Vx, Hx, Wx; MASK | ZERO | SAE),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CC
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, INVALID, EVEX_Vrsqrt28ps_zmm_k1z_zmmm512b32_sae],
                [Unknown, Unknown, Packed512_Float32],
                [Unknown, Unknown, Broadcast512_Float32],
                V, W; MASK | ZERO | SAE
            ),
            &vlb!(
                [INVALID, INVALID, EVEX_Vrsqrt28pd_zmm_k1z_zmmm512b64_sae],
                [Unknown, Unknown, Packed512_Float64],
                [Unknown, Unknown, Broadcast512_Float64],
                V, W; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // CD
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vrsqrt28ss_xmm_k1z_xmm_xmmm32_sae, Float32, Vx, Hx, Wx; MASK | ZERO | SAE),
            &mem!(EVEX_Vrsqrt28sd_xmm_k1z_xmm_xmmm64_sae, Float64, Vx, Hx, Wx; MASK | ZERO | SAE),
        ),
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

/// EVEX map 3.
pub(crate) static EVEX_0F3A: [Entry; 256] = [
    // 00
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [INVALID, EVEX_Vpermq_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermq_zmm_k1z_zmmm512b64_imm8],
                [Unknown, Packed256_Int64, Packed512_Int64],
                [Unknown, Broadcast256_Int64, Broadcast512_Int64],
                V, W, Ib; MASK | ZERO
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
            &vlb!(
                [INVALID, EVEX_Vpermpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermpd_zmm_k1z_zmmm512b64_imm8],
                [Unknown, Packed256_Float64, Packed512_Float64],
                [Unknown, Broadcast256_Float64, Broadcast512_Float64],
                V, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 02
    Entry::Invalid,
    // 03
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 04
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpermilps_xmm_k1z_xmmm128b32_imm8, EVEX_Vpermilps_ymm_k1z_ymmm256b32_imm8, EVEX_Vpermilps_zmm_k1z_zmmm512b32_imm8],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W, Ib; MASK | ZERO
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
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vpermilpd_xmm_k1z_xmmm128b64_imm8, EVEX_Vpermilpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vpermilpd_zmm_k1z_zmmm512b64_imm8],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 06
    Entry::Invalid,
    // 07
    Entry::Invalid,
    // 08
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8, EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8, EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W, Ib; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 09
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vlb!(
                [EVEX_Vrndscalepd_xmm_k1z_xmmm128b64_imm8, EVEX_Vrndscalepd_ymm_k1z_ymmm256b64_imm8, EVEX_Vrndscalepd_zmm_k1z_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(
                EVEX_Vrndscaless_xmm_k1z_xmm_xmmm32_imm8_sae, Float32, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 0B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &mem!(
                EVEX_Vrndscalesd_xmm_k1z_xmm_xmmm64_imm8_sae, Float64, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
        ),
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
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpalignr_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vpalignr_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vpalignr_zmm_k1z_zmm_zmmm512_imm8],
            [Packed128_Int8, Packed256_Int8, Packed512_Int8],
            V, H, W, Ib; MASK | ZERO
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
        Entry::Mode(
            &vl!(
                [EVEX_Vpextrb_r32m8_xmm_imm8, INVALID, INVALID],
                [UInt8, Unknown, Unknown],
                Ey, Vx, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpextrb_r32m8_xmm_imm8, INVALID, INVALID],
                    [UInt8, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
                &vl!(
                    [EVEX_Vpextrb_r64m8_xmm_imm8, INVALID, INVALID],
                    [UInt8, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vpextrw_r32m16_xmm_imm8, INVALID, INVALID],
                [UInt16, Unknown, Unknown],
                Ey, Vx, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpextrw_r32m16_xmm_imm8, INVALID, INVALID],
                    [UInt16, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
                &vl!(
                    [EVEX_Vpextrw_r64m16_xmm_imm8, INVALID, INVALID],
                    [UInt16, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vpextrd_rm32_xmm_imm8, INVALID, INVALID],
                [Unknown, Unknown, Unknown],
                Ey, Vx, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpextrd_rm32_xmm_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
                &vl!(
                    [EVEX_Vpextrq_rm64_xmm_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vextractps_rm32_xmm_imm8, INVALID, INVALID],
                [Float32, Unknown, Unknown],
                Ey, Vx, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vextractps_rm32_xmm_imm8, INVALID, INVALID],
                    [Float32, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
                &vl!(
                    [EVEX_Vextractps_rm64_xmm_imm8, INVALID, INVALID],
                    [Float32, Unknown, Unknown],
                    Ey, Vx, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vinsertf32x4_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinsertf32x4_zmm_k1z_zmm_xmmm128_imm8],
                [Unknown, Packed128_Float32, Packed128_Float32],
                V, H, Wx, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vinsertf64x2_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinsertf64x2_zmm_k1z_zmm_xmmm128_imm8],
                [Unknown, Packed128_Float64, Packed128_Float64],
                V, H, Wx, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 19
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vextractf32x4_xmmm128_k1z_ymm_imm8, EVEX_Vextractf32x4_xmmm128_k1z_zmm_imm8],
                [Unknown, Packed128_Float32, Packed128_Float32],
                Wx, V, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vextractf64x2_xmmm128_k1z_ymm_imm8, EVEX_Vextractf64x2_xmmm128_k1z_zmm_imm8],
                [Unknown, Packed128_Float64, Packed128_Float64],
                Wx, V, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vinsertf32x8_zmm_k1z_zmm_ymmm256_imm8],
                [Unknown, Unknown, Packed256_Float32],
                V, H, Wh, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vinsertf64x4_zmm_k1z_zmm_ymmm256_imm8],
                [Unknown, Unknown, Packed256_Float64],
                V, H, Wh, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vextractf32x8_ymmm256_k1z_zmm_imm8],
                [Unknown, Unknown, Packed256_Float32],
                Wh, V, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vextractf64x4_ymmm256_k1z_zmm_imm8],
                [Unknown, Unknown, Packed256_Float64],
                Wh, V, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1C
    Entry::Invalid,
    // 1D
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vcvtps2ph_xmmm64_k1z_xmm_imm8, EVEX_Vcvtps2ph_xmmm128_k1z_ymm_imm8, EVEX_Vcvtps2ph_ymmm256_k1z_zmm_imm8_sae],
                [Packed64_Float16, Packed128_Float16, Packed256_Float16],
                Wh, V, Ib; MASK | ZERO | SAE
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpcmpud_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vpcmpud_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                Kr, H, W, Ib; MASK
            ),
            &vlb!(
                [EVEX_Vpcmpuq_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vpcmpuq_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vpcmpuq_kr_k1_zmm_zmmm512b64_imm8],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                Kr, H, W, Ib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 1F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpcmpd_kr_k1_xmm_xmmm128b32_imm8, EVEX_Vpcmpd_kr_k1_ymm_ymmm256b32_imm8, EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                Kr, H, W, Ib; MASK
            ),
            &vlb!(
                [EVEX_Vpcmpq_kr_k1_xmm_xmmm128b64_imm8, EVEX_Vpcmpq_kr_k1_ymm_ymmm256b64_imm8, EVEX_Vpcmpq_kr_k1_zmm_zmmm512b64_imm8],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                Kr, H, W, Ib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 20
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vpinsrb_xmm_xmm_r32m8_imm8, INVALID, INVALID],
                [UInt8, Unknown, Unknown],
                Vx, Hx, Ey, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpinsrb_xmm_xmm_r32m8_imm8, INVALID, INVALID],
                    [UInt8, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
                &vl!(
                    [EVEX_Vpinsrb_xmm_xmm_r64m8_imm8, INVALID, INVALID],
                    [UInt8, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 21
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vinsertps_xmm_xmm_xmmm32_imm8, INVALID, INVALID],
                [Float32, Unknown, Unknown],
                Vx, Hx, Wx, Ib
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 22
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Mode(
            &vl!(
                [EVEX_Vpinsrd_xmm_xmm_rm32_imm8, INVALID, INVALID],
                [Unknown, Unknown, Unknown],
                Vx, Hx, Ey, Ib
            ),
            &Entry::W(
                &vl!(
                    [EVEX_Vpinsrd_xmm_xmm_rm32_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
                &vl!(
                    [EVEX_Vpinsrq_xmm_xmm_rm64_imm8, INVALID, INVALID],
                    [Unknown, Unknown, Unknown],
                    Vx, Hx, Ey, Ib
                ),
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 23
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, EVEX_Vshuff32x4_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshuff32x4_zmm_k1z_zmm_zmmm512b32_imm8],
                [Unknown, Packed256_Float32, Packed512_Float32],
                [Unknown, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [INVALID, EVEX_Vshuff64x2_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshuff64x2_zmm_k1z_zmm_zmmm512b64_imm8],
                [Unknown, Packed256_Float64, Packed512_Float64],
                [Unknown, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 24
    Entry::Invalid,
    // 25
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpternlogd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vpternlogd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vpternlogd_zmm_k1z_zmm_zmmm512b32_imm8],
                [Packed128_Int32, Packed256_Int32, Packed512_Int32],
                [Broadcast128_Int32, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpternlogq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vpternlogq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vpternlogq_zmm_k1z_zmm_zmmm512b64_imm8],
                [Packed128_Int64, Packed256_Int64, Packed512_Int64],
                [Broadcast128_Int64, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 26
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vgetmantps_xmm_k1z_xmmm128b32_imm8, EVEX_Vgetmantps_ymm_k1z_ymmm256b32_imm8, EVEX_Vgetmantps_zmm_k1z_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W, Ib; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vgetmantpd_xmm_k1z_xmmm128b64_imm8, EVEX_Vgetmantpd_ymm_k1z_ymmm256b64_imm8, EVEX_Vgetmantpd_zmm_k1z_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 27
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(
                EVEX_Vgetmantss_xmm_k1z_xmm_xmmm32_imm8_sae, Float32, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
            &mem!(
                EVEX_Vgetmantsd_xmm_k1z_xmm_xmmm64_imm8_sae, Float64, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vinserti32x4_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinserti32x4_zmm_k1z_zmm_xmmm128_imm8],
                [Unknown, Packed128_Int32, Packed128_Int32],
                V, H, Wx, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vinserti64x2_ymm_k1z_ymm_xmmm128_imm8, EVEX_Vinserti64x2_zmm_k1z_zmm_xmmm128_imm8],
                [Unknown, Packed128_Int64, Packed128_Int64],
                V, H, Wx, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 39
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, EVEX_Vextracti32x4_xmmm128_k1z_ymm_imm8, EVEX_Vextracti32x4_xmmm128_k1z_zmm_imm8],
                [Unknown, Packed128_Int32, Packed128_Int32],
                Wx, V, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, EVEX_Vextracti64x2_xmmm128_k1z_ymm_imm8, EVEX_Vextracti64x2_xmmm128_k1z_zmm_imm8],
                [Unknown, Packed128_Int64, Packed128_Int64],
                Wx, V, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3A
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vinserti32x8_zmm_k1z_zmm_ymmm256_imm8],
                [Unknown, Unknown, Packed256_Int32],
                V, H, Wh, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vinserti64x4_zmm_k1z_zmm_ymmm256_imm8],
                [Unknown, Unknown, Packed256_Int64],
                V, H, Wh, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3B
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [INVALID, INVALID, EVEX_Vextracti32x8_ymmm256_k1z_zmm_imm8],
                [Unknown, Unknown, Packed256_Int32],
                Wh, V, Ib; MASK | ZERO
            ),
            &vl!(
                [INVALID, INVALID, EVEX_Vextracti64x4_ymmm256_k1z_zmm_imm8],
                [Unknown, Unknown, Packed256_Int64],
                Wh, V, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3C
    Entry::Invalid,
    // 3D
    Entry::Invalid,
    // 3E
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpcmpub_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpub_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpub_kr_k1_zmm_zmmm512_imm8],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                Kr, H, W, Ib; MASK
            ),
            &vl!(
                [EVEX_Vpcmpuw_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpuw_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpuw_kr_k1_zmm_zmmm512_imm8],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                Kr, H, W, Ib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 3F
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vpcmpb_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpb_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpb_kr_k1_zmm_zmmm512_imm8],
                [Packed128_Int8, Packed256_Int8, Packed512_Int8],
                Kr, H, W, Ib; MASK
            ),
            &vl!(
                [EVEX_Vpcmpw_kr_k1_xmm_xmmm128_imm8, EVEX_Vpcmpw_kr_k1_ymm_ymmm256_imm8, EVEX_Vpcmpw_kr_k1_zmm_zmmm512_imm8],
                [Packed128_Int16, Packed256_Int16, Packed512_Int16],
                Kr, H, W, Ib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 40
    Entry::Invalid,
    // 41
    Entry::Invalid,
    // 42
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vl!(
                [EVEX_Vdbpsadbw_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vdbpsadbw_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vdbpsadbw_zmm_k1z_zmm_zmmm512_imm8],
                [Packed128_UInt8, Packed256_UInt8, Packed512_UInt8],
                V, H, W, Ib; MASK | ZERO
            ),
            &Entry::Invalid,
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 43
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [INVALID, EVEX_Vshufi32x4_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vshufi32x4_zmm_k1z_zmm_zmmm512b32_imm8],
                [Unknown, Packed256_Int32, Packed512_Int32],
                [Unknown, Broadcast256_Int32, Broadcast512_Int32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [INVALID, EVEX_Vshufi64x2_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vshufi64x2_zmm_k1z_zmm_zmmm512b64_imm8],
                [Unknown, Packed256_Int64, Packed512_Int64],
                [Unknown, Broadcast256_Int64, Broadcast512_Int64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 44
    Entry::Prefix(&[
        Entry::Invalid,
        vl!(
            [EVEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8, EVEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8, EVEX_Vpclmulqdq_zmm_zmm_zmmm512_imm8],
            [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
            V, H, W, Ib
        ),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vrangeps_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vrangeps_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vrangeps_zmm_k1z_zmm_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W, Ib; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vrangepd_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vrangepd_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vrangepd_zmm_k1z_zmm_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 51
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(
                EVEX_Vrangess_xmm_k1z_xmm_xmmm32_imm8_sae, Float32, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
            &mem!(
                EVEX_Vrangesd_xmm_k1z_xmm_xmmm64_imm8_sae, Float64, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 52
    Entry::Invalid,
    // 53
    Entry::Invalid,
    // 54
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfixupimmps_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vfixupimmps_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vfixupimmps_zmm_k1z_zmm_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, H, W, Ib; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vfixupimmpd_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vfixupimmpd_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vfixupimmpd_zmm_k1z_zmm_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, H, W, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 55
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(
                EVEX_Vfixupimmss_xmm_k1z_xmm_xmmm32_imm8_sae, Float32, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
            &mem!(
                EVEX_Vfixupimmsd_xmm_k1z_xmm_xmmm64_imm8_sae, Float64, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 56
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vreduceps_xmm_k1z_xmmm128b32_imm8, EVEX_Vreduceps_ymm_k1z_ymmm256b32_imm8, EVEX_Vreduceps_zmm_k1z_zmmm512b32_imm8_sae],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                V, W, Ib; MASK | ZERO | SAE
            ),
            &vlb!(
                [EVEX_Vreducepd_xmm_k1z_xmmm128b64_imm8, EVEX_Vreducepd_ymm_k1z_ymmm256b64_imm8, EVEX_Vreducepd_zmm_k1z_zmmm512b64_imm8_sae],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                V, W, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 57
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(
                EVEX_Vreducess_xmm_k1z_xmm_xmmm32_imm8_sae, Float32, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
            &mem!(
                EVEX_Vreducesd_xmm_k1z_xmm_xmmm64_imm8_sae, Float64, Vx, Hx, Wx, Ib; MASK | ZERO | SAE
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vfpclassps_kr_k1_xmmm128b32_imm8, EVEX_Vfpclassps_kr_k1_ymmm256b32_imm8, EVEX_Vfpclassps_kr_k1_zmmm512b32_imm8],
                [Packed128_Float32, Packed256_Float32, Packed512_Float32],
                [Broadcast128_Float32, Broadcast256_Float32, Broadcast512_Float32],
                Kr, W, Ib; MASK
            ),
            &vlb!(
                [EVEX_Vfpclasspd_kr_k1_xmmm128b64_imm8, EVEX_Vfpclasspd_kr_k1_ymmm256b64_imm8, EVEX_Vfpclasspd_kr_k1_zmmm512b64_imm8],
                [Packed128_Float64, Packed256_Float64, Packed512_Float64],
                [Broadcast128_Float64, Broadcast256_Float64, Broadcast512_Float64],
                Kr, W, Ib; MASK
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 67
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &mem!(EVEX_Vfpclassss_kr_k1_xmmm32_imm8, Float32, Kr, Wx, Ib; MASK),
            &mem!(EVEX_Vfpclasssd_kr_k1_xmmm64_imm8, Float64, Kr, Wx, Ib; MASK),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpshldw_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vpshldw_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vpshldw_zmm_k1z_zmm_zmmm512_imm8],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 71
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpshldd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vpshldd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vpshldd_zmm_k1z_zmm_zmmm512b32_imm8],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpshldq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vpshldq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vpshldq_zmm_k1z_zmm_zmmm512b64_imm8],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 72
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &Entry::Invalid,
            &vl!(
                [EVEX_Vpshrdw_xmm_k1z_xmm_xmmm128_imm8, EVEX_Vpshrdw_ymm_k1z_ymm_ymmm256_imm8, EVEX_Vpshrdw_zmm_k1z_zmm_zmmm512_imm8],
                [Packed128_UInt16, Packed256_UInt16, Packed512_UInt16],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 73
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::W(
            &vlb!(
                [EVEX_Vpshrdd_xmm_k1z_xmm_xmmm128b32_imm8, EVEX_Vpshrdd_ymm_k1z_ymm_ymmm256b32_imm8, EVEX_Vpshrdd_zmm_k1z_zmm_zmmm512b32_imm8],
                [Packed128_UInt32, Packed256_UInt32, Packed512_UInt32],
                [Broadcast128_UInt32, Broadcast256_UInt32, Broadcast512_UInt32],
                V, H, W, Ib; MASK | ZERO
            ),
            &vlb!(
                [EVEX_Vpshrdq_xmm_k1z_xmm_xmmm128b64_imm8, EVEX_Vpshrdq_ymm_k1z_ymm_ymmm256b64_imm8, EVEX_Vpshrdq_zmm_k1z_zmm_zmmm512b64_imm8],
                [Packed128_UInt64, Packed256_UInt64, Packed512_UInt64],
                [Broadcast128_UInt64, Broadcast256_UInt64, Broadcast512_UInt64],
                V, H, W, Ib; MASK | ZERO
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
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
