//! Instruction codes.

use xdec_core::macros::define_codes;

define_codes! {
    /// Instruction form: the mnemonic together with its operand layout.
    pub enum Code {
        INVALID = "(bad)",
        EVEX_Vmovups_xmm_k1z_xmmm128 = "vmovups",
        EVEX_Vmovups_ymm_k1z_ymmm256 = "vmovups",
        EVEX_Vmovups_zmm_k1z_zmmm512 = "vmovups",
        EVEX_Vmovupd_xmm_k1z_xmmm128 = "vmovupd",
        EVEX_Vmovupd_ymm_k1z_ymmm256 = "vmovupd",
        EVEX_Vmovupd_zmm_k1z_zmmm512 = "vmovupd",
        EVEX_Vmovss_xmm_k1z_xmm_xmm = "vmovss",
        EVEX_Vmovss_xmm_k1z_m32 = "vmovss",
        EVEX_Vmovsd_xmm_k1z_xmm_xmm = "vmovsd",
        EVEX_Vmovsd_xmm_k1z_m64 = "vmovsd",
        EVEX_Vmovups_xmmm128_k1z_xmm = "vmovups",
        EVEX_Vmovups_ymmm256_k1z_ymm = "vmovups",
        EVEX_Vmovups_zmmm512_k1z_zmm = "vmovups",
        EVEX_Vmovupd_xmmm128_k1z_xmm = "vmovupd",
        EVEX_Vmovupd_ymmm256_k1z_ymm = "vmovupd",
        EVEX_Vmovupd_zmmm512_k1z_zmm = "vmovupd",
        EVEX_Vmovss_m32_k1_xmm = "vmovss",
        EVEX_Vmovsd_m64_k1_xmm = "vmovsd",
        EVEX_Vmovhlps_xmm_xmm_xmm = "vmovhlps",
        EVEX_Vmovlpd_xmm_xmm_m64 = "vmovlpd",
        EVEX_Vmovsldup_xmm_k1z_xmmm128 = "vmovsldup",
        EVEX_Vmovsldup_ymm_k1z_ymmm256 = "vmovsldup",
        EVEX_Vmovsldup_zmm_k1z_zmmm512 = "vmovsldup",
        EVEX_Vmovddup_xmm_k1z_xmmm64 = "vmovddup",
        EVEX_Vmovddup_ymm_k1z_ymmm256 = "vmovddup",
        EVEX_Vmovddup_zmm_k1z_zmmm512 = "vmovddup",
        EVEX_Vmovlps_m64_xmm = "vmovlps",
        EVEX_Vmovlpd_m64_xmm = "vmovlpd",
        EVEX_Vunpcklps_xmm_k1z_xmm_xmmm128b32 = "vunpcklps",
        EVEX_Vunpcklps_ymm_k1z_ymm_ymmm256b32 = "vunpcklps",
        EVEX_Vunpcklps_zmm_k1z_zmm_zmmm512b32 = "vunpcklps",
        EVEX_Vunpcklpd_xmm_k1z_xmm_xmmm128b64 = "vunpcklpd",
        EVEX_Vunpcklpd_ymm_k1z_ymm_ymmm256b64 = "vunpcklpd",
        EVEX_Vunpcklpd_zmm_k1z_zmm_zmmm512b64 = "vunpcklpd",
        EVEX_Vunpckhps_xmm_k1z_xmm_xmmm128b32 = "vunpckhps",
        EVEX_Vunpckhps_ymm_k1z_ymm_ymmm256b32 = "vunpckhps",
        EVEX_Vunpckhps_zmm_k1z_zmm_zmmm512b32 = "vunpckhps",
        EVEX_Vunpckhpd_xmm_k1z_xmm_xmmm128b64 = "vunpckhpd",
        EVEX_Vunpckhpd_ymm_k1z_ymm_ymmm256b64 = "vunpckhpd",
        EVEX_Vunpckhpd_zmm_k1z_zmm_zmmm512b64 = "vunpckhpd",
        EVEX_Vmovlhps_xmm_xmm_xmm = "vmovlhps",
        EVEX_Vmovhpd_xmm_xmm_m64 = "vmovhpd",
        EVEX_Vmovshdup_xmm_k1z_xmmm128 = "vmovshdup",
        EVEX_Vmovshdup_ymm_k1z_ymmm256 = "vmovshdup",
        EVEX_Vmovshdup_zmm_k1z_zmmm512 = "vmovshdup",
        EVEX_Vmovhps_m64_xmm = "vmovhps",
        EVEX_Vmovhpd_m64_xmm = "vmovhpd",
        EVEX_Vmovaps_xmm_k1z_xmmm128 = "vmovaps",
        EVEX_Vmovaps_ymm_k1z_ymmm256 = "vmovaps",
        EVEX_Vmovaps_zmm_k1z_zmmm512 = "vmovaps",
        EVEX_Vmovapd_xmm_k1z_xmmm128 = "vmovapd",
        EVEX_Vmovapd_ymm_k1z_ymmm256 = "vmovapd",
        EVEX_Vmovapd_zmm_k1z_zmmm512 = "vmovapd",
        EVEX_Vmovaps_xmmm128_k1z_xmm = "vmovaps",
        EVEX_Vmovaps_ymmm256_k1z_ymm = "vmovaps",
        EVEX_Vmovaps_zmmm512_k1z_zmm = "vmovaps",
        EVEX_Vmovapd_xmmm128_k1z_xmm = "vmovapd",
        EVEX_Vmovapd_ymmm256_k1z_ymm = "vmovapd",
        EVEX_Vmovapd_zmmm512_k1z_zmm = "vmovapd",
        EVEX_Vcvtsi2ss_xmm_xmm_rm32_er = "vcvtsi2ss",
        EVEX_Vcvtsi2ss_xmm_xmm_rm64_er = "vcvtsi2ss",
        EVEX_Vcvtsi2sd_xmm_xmm_rm32 = "vcvtsi2sd",
        EVEX_Vcvtsi2sd_xmm_xmm_rm64_er = "vcvtsi2sd",
        EVEX_Vmovntps_m128_xmm = "vmovntps",
        EVEX_Vmovntps_m256_ymm = "vmovntps",
        EVEX_Vmovntps_m512_zmm = "vmovntps",
        EVEX_Vmovntpd_m128_xmm = "vmovntpd",
        EVEX_Vmovntpd_m256_ymm = "vmovntpd",
        EVEX_Vmovntpd_m512_zmm = "vmovntpd",
        EVEX_Vcvttss2si_r32_xmmm32_sae = "vcvttss2si",
        EVEX_Vcvttss2si_r64_xmmm32_sae = "vcvttss2si",
        EVEX_Vcvttsd2si_r32_xmmm64_sae = "vcvttsd2si",
        EVEX_Vcvttsd2si_r64_xmmm64_sae = "vcvttsd2si",
        EVEX_Vcvtss2si_r32_xmmm32_er = "vcvtss2si",
        EVEX_Vcvtss2si_r64_xmmm32_er = "vcvtss2si",
        EVEX_Vcvtsd2si_r32_xmmm64_er = "vcvtsd2si",
        EVEX_Vcvtsd2si_r64_xmmm64_er = "vcvtsd2si",
        EVEX_Vucomiss_xmm_xmmm32_sae = "vucomiss",
        EVEX_Vucomisd_xmm_xmmm64_sae = "vucomisd",
        EVEX_Vcomiss_xmm_xmmm32_sae = "vcomiss",
        EVEX_Vcomisd_xmm_xmmm64_sae = "vcomisd",
        EVEX_Vsqrtps_xmm_k1z_xmmm128b32 = "vsqrtps",
        EVEX_Vsqrtps_ymm_k1z_ymmm256b32 = "vsqrtps",
        EVEX_Vsqrtps_zmm_k1z_zmmm512b32_er = "vsqrtps",
        EVEX_Vsqrtpd_xmm_k1z_xmmm128b64 = "vsqrtpd",
        EVEX_Vsqrtpd_ymm_k1z_ymmm256b64 = "vsqrtpd",
        EVEX_Vsqrtpd_zmm_k1z_zmmm512b64_er = "vsqrtpd",
        EVEX_Vsqrtss_xmm_k1z_xmm_xmmm32_er = "vsqrtss",
        EVEX_Vsqrtsd_xmm_k1z_xmm_xmmm64_er = "vsqrtsd",
        EVEX_Vandps_xmm_k1z_xmm_xmmm128b32 = "vandps",
        EVEX_Vandps_ymm_k1z_ymm_ymmm256b32 = "vandps",
        EVEX_Vandps_zmm_k1z_zmm_zmmm512b32 = "vandps",
        EVEX_Vandpd_xmm_k1z_xmm_xmmm128b64 = "vandpd",
        EVEX_Vandpd_ymm_k1z_ymm_ymmm256b64 = "vandpd",
        EVEX_Vandpd_zmm_k1z_zmm_zmmm512b64 = "vandpd",
        EVEX_Vandnps_xmm_k1z_xmm_xmmm128b32 = "vandnps",
        EVEX_Vandnps_ymm_k1z_ymm_ymmm256b32 = "vandnps",
        EVEX_Vandnps_zmm_k1z_zmm_zmmm512b32 = "vandnps",
        EVEX_Vandnpd_xmm_k1z_xmm_xmmm128b64 = "vandnpd",
        EVEX_Vandnpd_ymm_k1z_ymm_ymmm256b64 = "vandnpd",
        EVEX_Vandnpd_zmm_k1z_zmm_zmmm512b64 = "vandnpd",
        EVEX_Vorps_xmm_k1z_xmm_xmmm128b32 = "vorps",
        EVEX_Vorps_ymm_k1z_ymm_ymmm256b32 = "vorps",
        EVEX_Vorps_zmm_k1z_zmm_zmmm512b32 = "vorps",
        EVEX_Vorpd_xmm_k1z_xmm_xmmm128b64 = "vorpd",
        EVEX_Vorpd_ymm_k1z_ymm_ymmm256b64 = "vorpd",
        EVEX_Vorpd_zmm_k1z_zmm_zmmm512b64 = "vorpd",
        EVEX_Vxorps_xmm_k1z_xmm_xmmm128b32 = "vxorps",
        EVEX_Vxorps_ymm_k1z_ymm_ymmm256b32 = "vxorps",
        EVEX_Vxorps_zmm_k1z_zmm_zmmm512b32 = "vxorps",
        EVEX_Vxorpd_xmm_k1z_xmm_xmmm128b64 = "vxorpd",
        EVEX_Vxorpd_ymm_k1z_ymm_ymmm256b64 = "vxorpd",
        EVEX_Vxorpd_zmm_k1z_zmm_zmmm512b64 = "vxorpd",
        EVEX_Vaddps_xmm_k1z_xmm_xmmm128b32 = "vaddps",
        EVEX_Vaddps_ymm_k1z_ymm_ymmm256b32 = "vaddps",
        EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er = "vaddps",
        EVEX_Vaddpd_xmm_k1z_xmm_xmmm128b64 = "vaddpd",
        EVEX_Vaddpd_ymm_k1z_ymm_ymmm256b64 = "vaddpd",
        EVEX_Vaddpd_zmm_k1z_zmm_zmmm512b64_er = "vaddpd",
        EVEX_Vaddss_xmm_k1z_xmm_xmmm32_er = "vaddss",
        EVEX_Vaddsd_xmm_k1z_xmm_xmmm64_er = "vaddsd",
        EVEX_Vmulps_xmm_k1z_xmm_xmmm128b32 = "vmulps",
        EVEX_Vmulps_ymm_k1z_ymm_ymmm256b32 = "vmulps",
        EVEX_Vmulps_zmm_k1z_zmm_zmmm512b32_er = "vmulps",
        EVEX_Vmulpd_xmm_k1z_xmm_xmmm128b64 = "vmulpd",
        EVEX_Vmulpd_ymm_k1z_ymm_ymmm256b64 = "vmulpd",
        EVEX_Vmulpd_zmm_k1z_zmm_zmmm512b64_er = "vmulpd",
        EVEX_Vmulss_xmm_k1z_xmm_xmmm32_er = "vmulss",
        EVEX_Vmulsd_xmm_k1z_xmm_xmmm64_er = "vmulsd",
        EVEX_Vcvtps2pd_xmm_k1z_xmmm64b32 = "vcvtps2pd",
        EVEX_Vcvtps2pd_ymm_k1z_xmmm128b32 = "vcvtps2pd",
        EVEX_Vcvtps2pd_zmm_k1z_ymmm256b32_sae = "vcvtps2pd",
        EVEX_Vcvtpd2ps_xmm_k1z_xmmm128b64 = "vcvtpd2ps",
        EVEX_Vcvtpd2ps_xmm_k1z_ymmm256b64 = "vcvtpd2ps",
        EVEX_Vcvtpd2ps_ymm_k1z_zmmm512b64_er = "vcvtpd2ps",
        EVEX_Vcvtss2sd_xmm_k1z_xmm_xmmm32_sae = "vcvtss2sd",
        EVEX_Vcvtsd2ss_xmm_k1z_xmm_xmmm64_er = "vcvtsd2ss",
        EVEX_Vcvtdq2ps_xmm_k1z_xmmm128b32 = "vcvtdq2ps",
        EVEX_Vcvtdq2ps_ymm_k1z_ymmm256b32 = "vcvtdq2ps",
        EVEX_Vcvtdq2ps_zmm_k1z_zmmm512b32_er = "vcvtdq2ps",
        EVEX_Vcvtqq2ps_xmm_k1z_xmmm128b64 = "vcvtqq2ps",
        EVEX_Vcvtqq2ps_xmm_k1z_ymmm256b64 = "vcvtqq2ps",
        EVEX_Vcvtqq2ps_ymm_k1z_zmmm512b64_er = "vcvtqq2ps",
        EVEX_Vcvtps2dq_xmm_k1z_xmmm128b32 = "vcvtps2dq",
        EVEX_Vcvtps2dq_ymm_k1z_ymmm256b32 = "vcvtps2dq",
        EVEX_Vcvtps2dq_zmm_k1z_zmmm512b32_er = "vcvtps2dq",
        EVEX_Vcvttps2dq_xmm_k1z_xmmm128b32 = "vcvttps2dq",
        EVEX_Vcvttps2dq_ymm_k1z_ymmm256b32 = "vcvttps2dq",
        EVEX_Vcvttps2dq_zmm_k1z_zmmm512b32_sae = "vcvttps2dq",
        EVEX_Vsubps_xmm_k1z_xmm_xmmm128b32 = "vsubps",
        EVEX_Vsubps_ymm_k1z_ymm_ymmm256b32 = "vsubps",
        EVEX_Vsubps_zmm_k1z_zmm_zmmm512b32_er = "vsubps",
        EVEX_Vsubpd_xmm_k1z_xmm_xmmm128b64 = "vsubpd",
        EVEX_Vsubpd_ymm_k1z_ymm_ymmm256b64 = "vsubpd",
        EVEX_Vsubpd_zmm_k1z_zmm_zmmm512b64_er = "vsubpd",
        EVEX_Vsubss_xmm_k1z_xmm_xmmm32_er = "vsubss",
        EVEX_Vsubsd_xmm_k1z_xmm_xmmm64_er = "vsubsd",
        EVEX_Vminps_xmm_k1z_xmm_xmmm128b32 = "vminps",
        EVEX_Vminps_ymm_k1z_ymm_ymmm256b32 = "vminps",
        EVEX_Vminps_zmm_k1z_zmm_zmmm512b32_sae = "vminps",
        EVEX_Vminpd_xmm_k1z_xmm_xmmm128b64 = "vminpd",
        EVEX_Vminpd_ymm_k1z_ymm_ymmm256b64 = "vminpd",
        EVEX_Vminpd_zmm_k1z_zmm_zmmm512b64_sae = "vminpd",
        EVEX_Vminss_xmm_k1z_xmm_xmmm32_sae = "vminss",
        EVEX_Vminsd_xmm_k1z_xmm_xmmm64_sae = "vminsd",
        EVEX_Vdivps_xmm_k1z_xmm_xmmm128b32 = "vdivps",
        EVEX_Vdivps_ymm_k1z_ymm_ymmm256b32 = "vdivps",
        EVEX_Vdivps_zmm_k1z_zmm_zmmm512b32_er = "vdivps",
        EVEX_Vdivpd_xmm_k1z_xmm_xmmm128b64 = "vdivpd",
        EVEX_Vdivpd_ymm_k1z_ymm_ymmm256b64 = "vdivpd",
        EVEX_Vdivpd_zmm_k1z_zmm_zmmm512b64_er = "vdivpd",
        EVEX_Vdivss_xmm_k1z_xmm_xmmm32_er = "vdivss",
        EVEX_Vdivsd_xmm_k1z_xmm_xmmm64_er = "vdivsd",
        EVEX_Vmaxps_xmm_k1z_xmm_xmmm128b32 = "vmaxps",
        EVEX_Vmaxps_ymm_k1z_ymm_ymmm256b32 = "vmaxps",
        EVEX_Vmaxps_zmm_k1z_zmm_zmmm512b32_sae = "vmaxps",
        EVEX_Vmaxpd_xmm_k1z_xmm_xmmm128b64 = "vmaxpd",
        EVEX_Vmaxpd_ymm_k1z_ymm_ymmm256b64 = "vmaxpd",
        EVEX_Vmaxpd_zmm_k1z_zmm_zmmm512b64_sae = "vmaxpd",
        EVEX_Vmaxss_xmm_k1z_xmm_xmmm32_sae = "vmaxss",
        EVEX_Vmaxsd_xmm_k1z_xmm_xmmm64_sae = "vmaxsd",
        EVEX_Vpunpcklbw_xmm_k1z_xmm_xmmm128 = "vpunpcklbw",
        EVEX_Vpunpcklbw_ymm_k1z_ymm_ymmm256 = "vpunpcklbw",
        EVEX_Vpunpcklbw_zmm_k1z_zmm_zmmm512 = "vpunpcklbw",
        EVEX_Vpunpcklwd_xmm_k1z_xmm_xmmm128 = "vpunpcklwd",
        EVEX_Vpunpcklwd_ymm_k1z_ymm_ymmm256 = "vpunpcklwd",
        EVEX_Vpunpcklwd_zmm_k1z_zmm_zmmm512 = "vpunpcklwd",
        EVEX_Vpunpckldq_xmm_k1z_xmm_xmmm128b32 = "vpunpckldq",
        EVEX_Vpunpckldq_ymm_k1z_ymm_ymmm256b32 = "vpunpckldq",
        EVEX_Vpunpckldq_zmm_k1z_zmm_zmmm512b32 = "vpunpckldq",
        EVEX_Vpacksswb_xmm_k1z_xmm_xmmm128 = "vpacksswb",
        EVEX_Vpacksswb_ymm_k1z_ymm_ymmm256 = "vpacksswb",
        EVEX_Vpacksswb_zmm_k1z_zmm_zmmm512 = "vpacksswb",
        EVEX_Vpcmpgtb_kr_k1_xmm_xmmm128 = "vpcmpgtb",
        EVEX_Vpcmpgtb_kr_k1_ymm_ymmm256 = "vpcmpgtb",
        EVEX_Vpcmpgtb_kr_k1_zmm_zmmm512 = "vpcmpgtb",
        EVEX_Vpcmpgtw_kr_k1_xmm_xmmm128 = "vpcmpgtw",
        EVEX_Vpcmpgtw_kr_k1_ymm_ymmm256 = "vpcmpgtw",
        EVEX_Vpcmpgtw_kr_k1_zmm_zmmm512 = "vpcmpgtw",
        EVEX_Vpcmpgtd_kr_k1_xmm_xmmm128b32 = "vpcmpgtd",
        EVEX_Vpcmpgtd_kr_k1_ymm_ymmm256b32 = "vpcmpgtd",
        EVEX_Vpcmpgtd_kr_k1_zmm_zmmm512b32 = "vpcmpgtd",
        EVEX_Vpackuswb_xmm_k1z_xmm_xmmm128 = "vpackuswb",
        EVEX_Vpackuswb_ymm_k1z_ymm_ymmm256 = "vpackuswb",
        EVEX_Vpackuswb_zmm_k1z_zmm_zmmm512 = "vpackuswb",
        EVEX_Vpunpckhbw_xmm_k1z_xmm_xmmm128 = "vpunpckhbw",
        EVEX_Vpunpckhbw_ymm_k1z_ymm_ymmm256 = "vpunpckhbw",
        EVEX_Vpunpckhbw_zmm_k1z_zmm_zmmm512 = "vpunpckhbw",
        EVEX_Vpunpckhwd_xmm_k1z_xmm_xmmm128 = "vpunpckhwd",
        EVEX_Vpunpckhwd_ymm_k1z_ymm_ymmm256 = "vpunpckhwd",
        EVEX_Vpunpckhwd_zmm_k1z_zmm_zmmm512 = "vpunpckhwd",
        EVEX_Vpunpckhdq_xmm_k1z_xmm_xmmm128b32 = "vpunpckhdq",
        EVEX_Vpunpckhdq_ymm_k1z_ymm_ymmm256b32 = "vpunpckhdq",
        EVEX_Vpunpckhdq_zmm_k1z_zmm_zmmm512b32 = "vpunpckhdq",
        EVEX_Vpackssdw_xmm_k1z_xmm_xmmm128b32 = "vpackssdw",
        EVEX_Vpackssdw_ymm_k1z_ymm_ymmm256b32 = "vpackssdw",
        EVEX_Vpackssdw_zmm_k1z_zmm_zmmm512b32 = "vpackssdw",
        EVEX_Vpunpcklqdq_xmm_k1z_xmm_xmmm128b64 = "vpunpcklqdq",
        EVEX_Vpunpcklqdq_ymm_k1z_ymm_ymmm256b64 = "vpunpcklqdq",
        EVEX_Vpunpcklqdq_zmm_k1z_zmm_zmmm512b64 = "vpunpcklqdq",
        EVEX_Vpunpckhqdq_xmm_k1z_xmm_xmmm128b64 = "vpunpckhqdq",
        EVEX_Vpunpckhqdq_ymm_k1z_ymm_ymmm256b64 = "vpunpckhqdq",
        EVEX_Vpunpckhqdq_zmm_k1z_zmm_zmmm512b64 = "vpunpckhqdq",
        EVEX_Vmovd_xmm_rm32 = "vmovd",
        EVEX_Vmovq_xmm_rm64 = "vmovq",
        EVEX_Vmovdqa32_xmm_k1z_xmmm128 = "vmovdqa32",
        EVEX_Vmovdqa32_ymm_k1z_ymmm256 = "vmovdqa32",
        EVEX_Vmovdqa32_zmm_k1z_zmmm512 = "vmovdqa32",
        EVEX_Vmovdqa64_xmm_k1z_xmmm128 = "vmovdqa64",
        EVEX_Vmovdqa64_ymm_k1z_ymmm256 = "vmovdqa64",
        EVEX_Vmovdqa64_zmm_k1z_zmmm512 = "vmovdqa64",
        EVEX_Vmovdqu32_xmm_k1z_xmmm128 = "vmovdqu32",
        EVEX_Vmovdqu32_ymm_k1z_ymmm256 = "vmovdqu32",
        EVEX_Vmovdqu32_zmm_k1z_zmmm512 = "vmovdqu32",
        EVEX_Vmovdqu64_xmm_k1z_xmmm128 = "vmovdqu64",
        EVEX_Vmovdqu64_ymm_k1z_ymmm256 = "vmovdqu64",
        EVEX_Vmovdqu64_zmm_k1z_zmmm512 = "vmovdqu64",
        EVEX_Vmovdqu8_xmm_k1z_xmmm128 = "vmovdqu8",
        EVEX_Vmovdqu8_ymm_k1z_ymmm256 = "vmovdqu8",
        EVEX_Vmovdqu8_zmm_k1z_zmmm512 = "vmovdqu8",
        EVEX_Vmovdqu16_xmm_k1z_xmmm128 = "vmovdqu16",
        EVEX_Vmovdqu16_ymm_k1z_ymmm256 = "vmovdqu16",
        EVEX_Vmovdqu16_zmm_k1z_zmmm512 = "vmovdqu16",
        EVEX_Vpshufd_xmm_k1z_xmmm128b32_imm8 = "vpshufd",
        EVEX_Vpshufd_ymm_k1z_ymmm256b32_imm8 = "vpshufd",
        EVEX_Vpshufd_zmm_k1z_zmmm512b32_imm8 = "vpshufd",
        EVEX_Vpshufhw_xmm_k1z_xmmm128_imm8 = "vpshufhw",
        EVEX_Vpshufhw_ymm_k1z_ymmm256_imm8 = "vpshufhw",
        EVEX_Vpshufhw_zmm_k1z_zmmm512_imm8 = "vpshufhw",
        EVEX_Vpshuflw_xmm_k1z_xmmm128_imm8 = "vpshuflw",
        EVEX_Vpshuflw_ymm_k1z_ymmm256_imm8 = "vpshuflw",
        EVEX_Vpshuflw_zmm_k1z_zmmm512_imm8 = "vpshuflw",
        EVEX_Vpsrlw_xmm_k1z_xmmm128_imm8 = "vpsrlw",
        EVEX_Vpsrlw_ymm_k1z_ymmm256_imm8 = "vpsrlw",
        EVEX_Vpsrlw_zmm_k1z_zmmm512_imm8 = "vpsrlw",
        EVEX_Vpsraw_xmm_k1z_xmmm128_imm8 = "vpsraw",
        EVEX_Vpsraw_ymm_k1z_ymmm256_imm8 = "vpsraw",
        EVEX_Vpsraw_zmm_k1z_zmmm512_imm8 = "vpsraw",
        EVEX_Vpsllw_xmm_k1z_xmmm128_imm8 = "vpsllw",
        EVEX_Vpsllw_ymm_k1z_ymmm256_imm8 = "vpsllw",
        EVEX_Vpsllw_zmm_k1z_zmmm512_imm8 = "vpsllw",
        EVEX_Vprord_xmm_k1z_xmmm128b32_imm8 = "vprord",
        EVEX_Vprord_ymm_k1z_ymmm256b32_imm8 = "vprord",
        EVEX_Vprord_zmm_k1z_zmmm512b32_imm8 = "vprord",
        EVEX_Vprorq_xmm_k1z_xmmm128b64_imm8 = "vprorq",
        EVEX_Vprorq_ymm_k1z_ymmm256b64_imm8 = "vprorq",
        EVEX_Vprorq_zmm_k1z_zmmm512b64_imm8 = "vprorq",
        EVEX_Vprold_xmm_k1z_xmmm128b32_imm8 = "vprold",
        EVEX_Vprold_ymm_k1z_ymmm256b32_imm8 = "vprold",
        EVEX_Vprold_zmm_k1z_zmmm512b32_imm8 = "vprold",
        EVEX_Vprolq_xmm_k1z_xmmm128b64_imm8 = "vprolq",
        EVEX_Vprolq_ymm_k1z_ymmm256b64_imm8 = "vprolq",
        EVEX_Vprolq_zmm_k1z_zmmm512b64_imm8 = "vprolq",
        EVEX_Vpsrld_xmm_k1z_xmmm128b32_imm8 = "vpsrld",
        EVEX_Vpsrld_ymm_k1z_ymmm256b32_imm8 = "vpsrld",
        EVEX_Vpsrld_zmm_k1z_zmmm512b32_imm8 = "vpsrld",
        EVEX_Vpsrad_xmm_k1z_xmmm128b32_imm8 = "vpsrad",
        EVEX_Vpsrad_ymm_k1z_ymmm256b32_imm8 = "vpsrad",
        EVEX_Vpsrad_zmm_k1z_zmmm512b32_imm8 = "vpsrad",
        EVEX_Vpsraq_xmm_k1z_xmmm128b64_imm8 = "vpsraq",
        EVEX_Vpsraq_ymm_k1z_ymmm256b64_imm8 = "vpsraq",
        EVEX_Vpsraq_zmm_k1z_zmmm512b64_imm8 = "vpsraq",
        EVEX_Vpslld_xmm_k1z_xmmm128b32_imm8 = "vpslld",
        EVEX_Vpslld_ymm_k1z_ymmm256b32_imm8 = "vpslld",
        EVEX_Vpslld_zmm_k1z_zmmm512b32_imm8 = "vpslld",
        EVEX_Vpsrlq_xmm_k1z_xmmm128b64_imm8 = "vpsrlq",
        EVEX_Vpsrlq_ymm_k1z_ymmm256b64_imm8 = "vpsrlq",
        EVEX_Vpsrlq_zmm_k1z_zmmm512b64_imm8 = "vpsrlq",
        EVEX_Vpsrldq_xmm_xmmm128_imm8 = "vpsrldq",
        EVEX_Vpsrldq_ymm_ymmm256_imm8 = "vpsrldq",
        EVEX_Vpsrldq_zmm_zmmm512_imm8 = "vpsrldq",
        EVEX_Vpsllq_xmm_k1z_xmmm128b64_imm8 = "vpsllq",
        EVEX_Vpsllq_ymm_k1z_ymmm256b64_imm8 = "vpsllq",
        EVEX_Vpsllq_zmm_k1z_zmmm512b64_imm8 = "vpsllq",
        EVEX_Vpslldq_xmm_xmmm128_imm8 = "vpslldq",
        EVEX_Vpslldq_ymm_ymmm256_imm8 = "vpslldq",
        EVEX_Vpslldq_zmm_zmmm512_imm8 = "vpslldq",
        EVEX_Vpcmpeqb_kr_k1_xmm_xmmm128 = "vpcmpeqb",
        EVEX_Vpcmpeqb_kr_k1_ymm_ymmm256 = "vpcmpeqb",
        EVEX_Vpcmpeqb_kr_k1_zmm_zmmm512 = "vpcmpeqb",
        EVEX_Vpcmpeqw_kr_k1_xmm_xmmm128 = "vpcmpeqw",
        EVEX_Vpcmpeqw_kr_k1_ymm_ymmm256 = "vpcmpeqw",
        EVEX_Vpcmpeqw_kr_k1_zmm_zmmm512 = "vpcmpeqw",
        EVEX_Vpcmpeqd_kr_k1_xmm_xmmm128b32 = "vpcmpeqd",
        EVEX_Vpcmpeqd_kr_k1_ymm_ymmm256b32 = "vpcmpeqd",
        EVEX_Vpcmpeqd_kr_k1_zmm_zmmm512b32 = "vpcmpeqd",
        EVEX_Vcvttps2udq_xmm_k1z_xmmm128b32 = "vcvttps2udq",
        EVEX_Vcvttps2udq_ymm_k1z_ymmm256b32 = "vcvttps2udq",
        EVEX_Vcvttps2udq_zmm_k1z_zmmm512b32_sae = "vcvttps2udq",
        EVEX_Vcvttpd2udq_xmm_k1z_xmmm128b64 = "vcvttpd2udq",
        EVEX_Vcvttpd2udq_xmm_k1z_ymmm256b64 = "vcvttpd2udq",
        EVEX_Vcvttpd2udq_ymm_k1z_zmmm512b64_sae = "vcvttpd2udq",
        EVEX_Vcvttps2uqq_xmm_k1z_xmmm64b32 = "vcvttps2uqq",
        EVEX_Vcvttps2uqq_ymm_k1z_xmmm128b32 = "vcvttps2uqq",
        EVEX_Vcvttps2uqq_zmm_k1z_ymmm256b32_sae = "vcvttps2uqq",
        EVEX_Vcvttpd2uqq_xmm_k1z_xmmm128b64 = "vcvttpd2uqq",
        EVEX_Vcvttpd2uqq_ymm_k1z_ymmm256b64 = "vcvttpd2uqq",
        EVEX_Vcvttpd2uqq_zmm_k1z_zmmm512b64_sae = "vcvttpd2uqq",
        EVEX_Vcvttss2usi_r32_xmmm32_sae = "vcvttss2usi",
        EVEX_Vcvttss2usi_r64_xmmm32_sae = "vcvttss2usi",
        EVEX_Vcvttsd2usi_r32_xmmm64_sae = "vcvttsd2usi",
        EVEX_Vcvttsd2usi_r64_xmmm64_sae = "vcvttsd2usi",
        EVEX_Vcvtps2udq_xmm_k1z_xmmm128b32 = "vcvtps2udq",
        EVEX_Vcvtps2udq_ymm_k1z_ymmm256b32 = "vcvtps2udq",
        EVEX_Vcvtps2udq_zmm_k1z_zmmm512b32_er = "vcvtps2udq",
        EVEX_Vcvtpd2udq_xmm_k1z_xmmm128b64 = "vcvtpd2udq",
        EVEX_Vcvtpd2udq_xmm_k1z_ymmm256b64 = "vcvtpd2udq",
        EVEX_Vcvtpd2udq_ymm_k1z_zmmm512b64_er = "vcvtpd2udq",
        EVEX_Vcvtps2uqq_xmm_k1z_xmmm64b32 = "vcvtps2uqq",
        EVEX_Vcvtps2uqq_ymm_k1z_xmmm128b32 = "vcvtps2uqq",
        EVEX_Vcvtps2uqq_zmm_k1z_ymmm256b32_er = "vcvtps2uqq",
        EVEX_Vcvtpd2uqq_xmm_k1z_xmmm128b64 = "vcvtpd2uqq",
        EVEX_Vcvtpd2uqq_ymm_k1z_ymmm256b64 = "vcvtpd2uqq",
        EVEX_Vcvtpd2uqq_zmm_k1z_zmmm512b64_er = "vcvtpd2uqq",
        EVEX_Vcvtss2usi_r32_xmmm32_er = "vcvtss2usi",
        EVEX_Vcvtss2usi_r64_xmmm32_er = "vcvtss2usi",
        EVEX_Vcvtsd2usi_r32_xmmm64_er = "vcvtsd2usi",
        EVEX_Vcvtsd2usi_r64_xmmm64_er = "vcvtsd2usi",
        EVEX_Vcvttps2qq_xmm_k1z_xmmm64b32 = "vcvttps2qq",
        EVEX_Vcvttps2qq_ymm_k1z_xmmm128b32 = "vcvttps2qq",
        EVEX_Vcvttps2qq_zmm_k1z_ymmm256b32_sae = "vcvttps2qq",
        EVEX_Vcvttpd2qq_xmm_k1z_xmmm128b64 = "vcvttpd2qq",
        EVEX_Vcvttpd2qq_ymm_k1z_ymmm256b64 = "vcvttpd2qq",
        EVEX_Vcvttpd2qq_zmm_k1z_zmmm512b64_sae = "vcvttpd2qq",
        EVEX_Vcvtudq2pd_xmm_k1z_xmmm64b0 = "vcvtudq2pd",
        EVEX_Vcvtudq2pd_ymm_k1z_xmmm128b32 = "vcvtudq2pd",
        EVEX_Vcvtudq2pd_zmm_k1z_ymmm256b32 = "vcvtudq2pd",
        EVEX_Vcvtuqq2pd_xmm_k1z_xmmm128b64 = "vcvtuqq2pd",
        EVEX_Vcvtuqq2pd_ymm_k1z_ymmm256b64 = "vcvtuqq2pd",
        EVEX_Vcvtuqq2pd_zmm_k1z_zmmm512b64_er = "vcvtuqq2pd",
        EVEX_Vcvtudq2ps_xmm_k1z_xmmm128b32 = "vcvtudq2ps",
        EVEX_Vcvtudq2ps_ymm_k1z_ymmm256b32 = "vcvtudq2ps",
        EVEX_Vcvtudq2ps_zmm_k1z_zmmm512b32_er = "vcvtudq2ps",
        EVEX_Vcvtuqq2ps_xmm_k1z_xmmm128b64 = "vcvtuqq2ps",
        EVEX_Vcvtuqq2ps_xmm_k1z_ymmm256b64 = "vcvtuqq2ps",
        EVEX_Vcvtuqq2ps_ymm_k1z_zmmm512b64_er = "vcvtuqq2ps",
        EVEX_Vcvtps2qq_xmm_k1z_xmmm64b32 = "vcvtps2qq",
        EVEX_Vcvtps2qq_ymm_k1z_xmmm128b32 = "vcvtps2qq",
        EVEX_Vcvtps2qq_zmm_k1z_ymmm256b32_er = "vcvtps2qq",
        EVEX_Vcvtpd2qq_xmm_k1z_xmmm128b64 = "vcvtpd2qq",
        EVEX_Vcvtpd2qq_ymm_k1z_ymmm256b64 = "vcvtpd2qq",
        EVEX_Vcvtpd2qq_zmm_k1z_zmmm512b64_er = "vcvtpd2qq",
        EVEX_Vcvtusi2ss_xmm_xmm_rm32_er = "vcvtusi2ss",
        EVEX_Vcvtusi2ss_xmm_xmm_rm64_er = "vcvtusi2ss",
        EVEX_Vcvtusi2sd_xmm_xmm_rm32 = "vcvtusi2sd",
        EVEX_Vcvtusi2sd_xmm_xmm_rm64_er = "vcvtusi2sd",
        EVEX_Vmovd_rm32_xmm = "vmovd",
        EVEX_Vmovq_rm64_xmm = "vmovq",
        EVEX_Vmovq_xmm_xmmm64 = "vmovq",
        EVEX_Vmovdqa32_xmmm128_k1z_xmm = "vmovdqa32",
        EVEX_Vmovdqa32_ymmm256_k1z_ymm = "vmovdqa32",
        EVEX_Vmovdqa32_zmmm512_k1z_zmm = "vmovdqa32",
        EVEX_Vmovdqa64_xmmm128_k1z_xmm = "vmovdqa64",
        EVEX_Vmovdqa64_ymmm256_k1z_ymm = "vmovdqa64",
        EVEX_Vmovdqa64_zmmm512_k1z_zmm = "vmovdqa64",
        EVEX_Vmovdqu32_xmmm128_k1z_xmm = "vmovdqu32",
        EVEX_Vmovdqu32_ymmm256_k1z_ymm = "vmovdqu32",
        EVEX_Vmovdqu32_zmmm512_k1z_zmm = "vmovdqu32",
        EVEX_Vmovdqu64_xmmm128_k1z_xmm = "vmovdqu64",
        EVEX_Vmovdqu64_ymmm256_k1z_ymm = "vmovdqu64",
        EVEX_Vmovdqu64_zmmm512_k1z_zmm = "vmovdqu64",
        EVEX_Vmovdqu8_xmmm128_k1z_xmm = "vmovdqu8",
        EVEX_Vmovdqu8_ymmm256_k1z_ymm = "vmovdqu8",
        EVEX_Vmovdqu8_zmmm512_k1z_zmm = "vmovdqu8",
        EVEX_Vmovdqu16_xmmm128_k1z_xmm = "vmovdqu16",
        EVEX_Vmovdqu16_ymmm256_k1z_ymm = "vmovdqu16",
        EVEX_Vmovdqu16_zmmm512_k1z_zmm = "vmovdqu16",
        EVEX_Vcmpps_kr_k1_xmm_xmmm128b32_imm8 = "vcmpps",
        EVEX_Vcmpps_kr_k1_ymm_ymmm256b32_imm8 = "vcmpps",
        EVEX_Vcmpps_kr_k1_zmm_zmmm512b32_imm8_sae = "vcmpps",
        EVEX_Vcmppd_kr_k1_xmm_xmmm128b64_imm8 = "vcmppd",
        EVEX_Vcmppd_kr_k1_ymm_ymmm256b64_imm8 = "vcmppd",
        EVEX_Vcmppd_kr_k1_zmm_zmmm512b64_imm8_sae = "vcmppd",
        EVEX_Vcmpss_kr_k1_xmm_xmmm32_imm8_sae = "vcmpss",
        EVEX_Vcmpsd_kr_k1_xmm_xmmm64_imm8_sae = "vcmpsd",
        EVEX_Vpinsrw_xmm_xmm_r32m16_imm8 = "vpinsrw",
        EVEX_Vpinsrw_xmm_xmm_r64m16_imm8 = "vpinsrw",
        EVEX_Vpextrw_r32_xmm_imm8 = "vpextrw",
        EVEX_Vpextrw_r64_xmm_imm8 = "vpextrw",
        EVEX_Vshufps_xmm_k1z_xmm_xmmm128b32_imm8 = "vshufps",
        EVEX_Vshufps_ymm_k1z_ymm_ymmm256b32_imm8 = "vshufps",
        EVEX_Vshufps_zmm_k1z_zmm_zmmm512b32_imm8 = "vshufps",
        EVEX_Vshufpd_xmm_k1z_xmm_xmmm128b64_imm8 = "vshufpd",
        EVEX_Vshufpd_ymm_k1z_ymm_ymmm256b64_imm8 = "vshufpd",
        EVEX_Vshufpd_zmm_k1z_zmm_zmmm512b64_imm8 = "vshufpd",
        EVEX_Vpsrlw_xmm_k1z_xmm_xmmm128 = "vpsrlw",
        EVEX_Vpsrlw_ymm_k1z_ymm_xmmm128 = "vpsrlw",
        EVEX_Vpsrlw_zmm_k1z_zmm_xmmm128 = "vpsrlw",
        EVEX_Vpsrld_xmm_k1z_xmm_xmmm128 = "vpsrld",
        EVEX_Vpsrld_ymm_k1z_ymm_xmmm128 = "vpsrld",
        EVEX_Vpsrld_zmm_k1z_zmm_xmmm128 = "vpsrld",
        EVEX_Vpsrlq_xmm_k1z_xmm_xmmm128 = "vpsrlq",
        EVEX_Vpsrlq_ymm_k1z_ymm_xmmm128 = "vpsrlq",
        EVEX_Vpsrlq_zmm_k1z_zmm_xmmm128 = "vpsrlq",
        EVEX_Vpaddq_xmm_k1z_xmm_xmmm128b64 = "vpaddq",
        EVEX_Vpaddq_ymm_k1z_ymm_ymmm256b64 = "vpaddq",
        EVEX_Vpaddq_zmm_k1z_zmm_zmmm512b64 = "vpaddq",
        EVEX_Vpmullw_xmm_k1z_xmm_xmmm128 = "vpmullw",
        EVEX_Vpmullw_ymm_k1z_ymm_ymmm256 = "vpmullw",
        EVEX_Vpmullw_zmm_k1z_zmm_zmmm512 = "vpmullw",
        EVEX_Vmovq_xmmm64_xmm = "vmovq",
        EVEX_Vpsubusb_xmm_k1z_xmm_xmmm128 = "vpsubusb",
        EVEX_Vpsubusb_ymm_k1z_ymm_ymmm256 = "vpsubusb",
        EVEX_Vpsubusb_zmm_k1z_zmm_zmmm512 = "vpsubusb",
        EVEX_Vpsubusw_xmm_k1z_xmm_xmmm128 = "vpsubusw",
        EVEX_Vpsubusw_ymm_k1z_ymm_ymmm256 = "vpsubusw",
        EVEX_Vpsubusw_zmm_k1z_zmm_zmmm512 = "vpsubusw",
        EVEX_Vpminub_xmm_k1z_xmm_xmmm128 = "vpminub",
        EVEX_Vpminub_ymm_k1z_ymm_ymmm256 = "vpminub",
        EVEX_Vpminub_zmm_k1z_zmm_zmmm512 = "vpminub",
        EVEX_Vpandd_xmm_k1z_xmm_xmmm128b32 = "vpandd",
        EVEX_Vpandd_ymm_k1z_ymm_ymmm256b32 = "vpandd",
        EVEX_Vpandd_zmm_k1z_zmm_zmmm512b32 = "vpandd",
        EVEX_Vpandq_xmm_k1z_xmm_xmmm128b64 = "vpandq",
        EVEX_Vpandq_ymm_k1z_ymm_ymmm256b64 = "vpandq",
        EVEX_Vpandq_zmm_k1z_zmm_zmmm512b64 = "vpandq",
        EVEX_Vpaddusb_xmm_k1z_xmm_xmmm128 = "vpaddusb",
        EVEX_Vpaddusb_ymm_k1z_ymm_ymmm256 = "vpaddusb",
        EVEX_Vpaddusb_zmm_k1z_zmm_zmmm512 = "vpaddusb",
        EVEX_Vpaddusw_xmm_k1z_xmm_xmmm128 = "vpaddusw",
        EVEX_Vpaddusw_ymm_k1z_ymm_ymmm256 = "vpaddusw",
        EVEX_Vpaddusw_zmm_k1z_zmm_zmmm512 = "vpaddusw",
        EVEX_Vpmaxub_xmm_k1z_xmm_xmmm128 = "vpmaxub",
        EVEX_Vpmaxub_ymm_k1z_ymm_ymmm256 = "vpmaxub",
        EVEX_Vpmaxub_zmm_k1z_zmm_zmmm512 = "vpmaxub",
        EVEX_Vpandnd_xmm_k1z_xmm_xmmm128b32 = "vpandnd",
        EVEX_Vpandnd_ymm_k1z_ymm_ymmm256b32 = "vpandnd",
        EVEX_Vpandnd_zmm_k1z_zmm_zmmm512b32 = "vpandnd",
        EVEX_Vpandnq_xmm_k1z_xmm_xmmm128b64 = "vpandnq",
        EVEX_Vpandnq_ymm_k1z_ymm_ymmm256b64 = "vpandnq",
        EVEX_Vpandnq_zmm_k1z_zmm_zmmm512b64 = "vpandnq",
        EVEX_Vpavgb_xmm_k1z_xmm_xmmm128 = "vpavgb",
        EVEX_Vpavgb_ymm_k1z_ymm_ymmm256 = "vpavgb",
        EVEX_Vpavgb_zmm_k1z_zmm_zmmm512 = "vpavgb",
        EVEX_Vpsraw_xmm_k1z_xmm_xmmm128 = "vpsraw",
        EVEX_Vpsraw_ymm_k1z_ymm_xmmm128 = "vpsraw",
        EVEX_Vpsraw_zmm_k1z_zmm_xmmm128 = "vpsraw",
        EVEX_Vpsrad_xmm_k1z_xmm_xmmm128 = "vpsrad",
        EVEX_Vpsrad_ymm_k1z_ymm_xmmm128 = "vpsrad",
        EVEX_Vpsrad_zmm_k1z_zmm_xmmm128 = "vpsrad",
        EVEX_Vpsraq_xmm_k1z_xmm_xmmm128 = "vpsraq",
        EVEX_Vpsraq_ymm_k1z_ymm_xmmm128 = "vpsraq",
        EVEX_Vpsraq_zmm_k1z_zmm_xmmm128 = "vpsraq",
        EVEX_Vpavgw_xmm_k1z_xmm_xmmm128 = "vpavgw",
        EVEX_Vpavgw_ymm_k1z_ymm_ymmm256 = "vpavgw",
        EVEX_Vpavgw_zmm_k1z_zmm_zmmm512 = "vpavgw",
        EVEX_Vpmulhuw_xmm_k1z_xmm_xmmm128 = "vpmulhuw",
        EVEX_Vpmulhuw_ymm_k1z_ymm_ymmm256 = "vpmulhuw",
        EVEX_Vpmulhuw_zmm_k1z_zmm_zmmm512 = "vpmulhuw",
        EVEX_Vpmulhw_xmm_k1z_xmm_xmmm128 = "vpmulhw",
        EVEX_Vpmulhw_ymm_k1z_ymm_ymmm256 = "vpmulhw",
        EVEX_Vpmulhw_zmm_k1z_zmm_zmmm512 = "vpmulhw",
        EVEX_Vcvttpd2dq_xmm_k1z_xmmm128b64 = "vcvttpd2dq",
        EVEX_Vcvttpd2dq_xmm_k1z_ymmm256b64 = "vcvttpd2dq",
        EVEX_Vcvttpd2dq_ymm_k1z_zmmm512b64_sae = "vcvttpd2dq",
        EVEX_Vcvtdq2pd_xmm_k1z_xmmm64b32 = "vcvtdq2pd",
        EVEX_Vcvtdq2pd_ymm_k1z_xmmm128b32 = "vcvtdq2pd",
        EVEX_Vcvtdq2pd_zmm_k1z_ymmm256b32 = "vcvtdq2pd",
        EVEX_Vcvtqq2pd_xmm_k1z_xmmm128b64 = "vcvtqq2pd",
        EVEX_Vcvtqq2pd_ymm_k1z_ymmm256b64 = "vcvtqq2pd",
        EVEX_Vcvtqq2pd_zmm_k1z_zmmm512b64_er = "vcvtqq2pd",
        EVEX_Vcvtpd2dq_xmm_k1z_xmmm128b64 = "vcvtpd2dq",
        EVEX_Vcvtpd2dq_xmm_k1z_ymmm256b64 = "vcvtpd2dq",
        EVEX_Vcvtpd2dq_ymm_k1z_zmmm512b64_er = "vcvtpd2dq",
        EVEX_Vmovntdq_m128_xmm = "vmovntdq",
        EVEX_Vmovntdq_m256_ymm = "vmovntdq",
        EVEX_Vmovntdq_m512_zmm = "vmovntdq",
        EVEX_Vpsubsb_xmm_k1z_xmm_xmmm128 = "vpsubsb",
        EVEX_Vpsubsb_ymm_k1z_ymm_ymmm256 = "vpsubsb",
        EVEX_Vpsubsb_zmm_k1z_zmm_zmmm512 = "vpsubsb",
        EVEX_Vpsubsw_xmm_k1z_xmm_xmmm128 = "vpsubsw",
        EVEX_Vpsubsw_ymm_k1z_ymm_ymmm256 = "vpsubsw",
        EVEX_Vpsubsw_zmm_k1z_zmm_zmmm512 = "vpsubsw",
        EVEX_Vpminsw_xmm_k1z_xmm_xmmm128 = "vpminsw",
        EVEX_Vpminsw_ymm_k1z_ymm_ymmm256 = "vpminsw",
        EVEX_Vpminsw_zmm_k1z_zmm_zmmm512 = "vpminsw",
        EVEX_Vpord_xmm_k1z_xmm_xmmm128b32 = "vpord",
        EVEX_Vpord_ymm_k1z_ymm_ymmm256b32 = "vpord",
        EVEX_Vpord_zmm_k1z_zmm_zmmm512b32 = "vpord",
        EVEX_Vporq_xmm_k1z_xmm_xmmm128b64 = "vporq",
        EVEX_Vporq_ymm_k1z_ymm_ymmm256b64 = "vporq",
        EVEX_Vporq_zmm_k1z_zmm_zmmm512b64 = "vporq",
        EVEX_Vpaddsb_xmm_k1z_xmm_xmmm128 = "vpaddsb",
        EVEX_Vpaddsb_ymm_k1z_ymm_ymmm256 = "vpaddsb",
        EVEX_Vpaddsb_zmm_k1z_zmm_zmmm512 = "vpaddsb",
        EVEX_Vpaddsw_xmm_k1z_xmm_xmmm128 = "vpaddsw",
        EVEX_Vpaddsw_ymm_k1z_ymm_ymmm256 = "vpaddsw",
        EVEX_Vpaddsw_zmm_k1z_zmm_zmmm512 = "vpaddsw",
        EVEX_Vpmaxsw_xmm_k1z_xmm_xmmm128 = "vpmaxsw",
        EVEX_Vpmaxsw_ymm_k1z_ymm_ymmm256 = "vpmaxsw",
        EVEX_Vpmaxsw_zmm_k1z_zmm_zmmm512 = "vpmaxsw",
        EVEX_Vpxord_xmm_k1z_xmm_xmmm128b32 = "vpxord",
        EVEX_Vpxord_ymm_k1z_ymm_ymmm256b32 = "vpxord",
        EVEX_Vpxord_zmm_k1z_zmm_zmmm512b32 = "vpxord",
        EVEX_Vpxorq_xmm_k1z_xmm_xmmm128b64 = "vpxorq",
        EVEX_Vpxorq_ymm_k1z_ymm_ymmm256b64 = "vpxorq",
        EVEX_Vpxorq_zmm_k1z_zmm_zmmm512b64 = "vpxorq",
        EVEX_Vpsllw_xmm_k1z_xmm_xmmm128 = "vpsllw",
        EVEX_Vpsllw_ymm_k1z_ymm_xmmm128 = "vpsllw",
        EVEX_Vpsllw_zmm_k1z_zmm_xmmm128 = "vpsllw",
        EVEX_Vpslld_xmm_k1z_xmm_xmmm128 = "vpslld",
        EVEX_Vpslld_ymm_k1z_ymm_xmmm128 = "vpslld",
        EVEX_Vpslld_zmm_k1z_zmm_xmmm128 = "vpslld",
        EVEX_Vpsllq_xmm_k1z_xmm_xmmm128 = "vpsllq",
        EVEX_Vpsllq_ymm_k1z_ymm_xmmm128 = "vpsllq",
        EVEX_Vpsllq_zmm_k1z_zmm_xmmm128 = "vpsllq",
        EVEX_Vpmuludq_xmm_k1z_xmm_xmmm128b64 = "vpmuludq",
        EVEX_Vpmuludq_ymm_k1z_ymm_ymmm256b64 = "vpmuludq",
        EVEX_Vpmuludq_zmm_k1z_zmm_zmmm512b64 = "vpmuludq",
        EVEX_Vpmaddwd_xmm_k1z_xmm_xmmm128 = "vpmaddwd",
        EVEX_Vpmaddwd_ymm_k1z_ymm_ymmm256 = "vpmaddwd",
        EVEX_Vpmaddwd_zmm_k1z_zmm_zmmm512 = "vpmaddwd",
        EVEX_Vpsadbw_xmm_xmm_xmmm128 = "vpsadbw",
        EVEX_Vpsadbw_ymm_ymm_ymmm256 = "vpsadbw",
        EVEX_Vpsadbw_zmm_zmm_zmmm512 = "vpsadbw",
        EVEX_Vpsubb_xmm_k1z_xmm_xmmm128 = "vpsubb",
        EVEX_Vpsubb_ymm_k1z_ymm_ymmm256 = "vpsubb",
        EVEX_Vpsubb_zmm_k1z_zmm_zmmm512 = "vpsubb",
        EVEX_Vpsubw_xmm_k1z_xmm_xmmm128 = "vpsubw",
        EVEX_Vpsubw_ymm_k1z_ymm_ymmm256 = "vpsubw",
        EVEX_Vpsubw_zmm_k1z_zmm_zmmm512 = "vpsubw",
        EVEX_Vpsubd_xmm_k1z_xmm_xmmm128b32 = "vpsubd",
        EVEX_Vpsubd_ymm_k1z_ymm_ymmm256b32 = "vpsubd",
        EVEX_Vpsubd_zmm_k1z_zmm_zmmm512b32 = "vpsubd",
        EVEX_Vpsubq_xmm_k1z_xmm_xmmm128b64 = "vpsubq",
        EVEX_Vpsubq_ymm_k1z_ymm_ymmm256b64 = "vpsubq",
        EVEX_Vpsubq_zmm_k1z_zmm_zmmm512b64 = "vpsubq",
        EVEX_Vpaddb_xmm_k1z_xmm_xmmm128 = "vpaddb",
        EVEX_Vpaddb_ymm_k1z_ymm_ymmm256 = "vpaddb",
        EVEX_Vpaddb_zmm_k1z_zmm_zmmm512 = "vpaddb",
        EVEX_Vpaddw_xmm_k1z_xmm_xmmm128 = "vpaddw",
        EVEX_Vpaddw_ymm_k1z_ymm_ymmm256 = "vpaddw",
        EVEX_Vpaddw_zmm_k1z_zmm_zmmm512 = "vpaddw",
        EVEX_Vpaddd_xmm_k1z_xmm_xmmm128b32 = "vpaddd",
        EVEX_Vpaddd_ymm_k1z_ymm_ymmm256b32 = "vpaddd",
        EVEX_Vpaddd_zmm_k1z_zmm_zmmm512b32 = "vpaddd",
        EVEX_Vpshufb_xmm_k1z_xmm_xmmm128 = "vpshufb",
        EVEX_Vpshufb_ymm_k1z_ymm_ymmm256 = "vpshufb",
        EVEX_Vpshufb_zmm_k1z_zmm_zmmm512 = "vpshufb",
        EVEX_Vpmaddubsw_xmm_k1z_xmm_xmmm128 = "vpmaddubsw",
        EVEX_Vpmaddubsw_ymm_k1z_ymm_ymmm256 = "vpmaddubsw",
        EVEX_Vpmaddubsw_zmm_k1z_zmm_zmmm512 = "vpmaddubsw",
        EVEX_Vpmulhrsw_xmm_k1z_xmm_xmmm128 = "vpmulhrsw",
        EVEX_Vpmulhrsw_ymm_k1z_ymm_ymmm256 = "vpmulhrsw",
        EVEX_Vpmulhrsw_zmm_k1z_zmm_zmmm512 = "vpmulhrsw",
        EVEX_Vpermilps_xmm_k1z_xmm_xmmm128b32 = "vpermilps",
        EVEX_Vpermilps_ymm_k1z_ymm_ymmm256b32 = "vpermilps",
        EVEX_Vpermilps_zmm_k1z_zmm_zmmm512b32 = "vpermilps",
        EVEX_Vpermilpd_xmm_k1z_xmm_xmmm128b64 = "vpermilpd",
        EVEX_Vpermilpd_ymm_k1z_ymm_ymmm256b64 = "vpermilpd",
        EVEX_Vpermilpd_zmm_k1z_zmm_zmmm512b64 = "vpermilpd",
        EVEX_Vpsrlvw_xmm_k1z_xmm_xmmm128 = "vpsrlvw",
        EVEX_Vpsrlvw_ymm_k1z_ymm_ymmm256 = "vpsrlvw",
        EVEX_Vpsrlvw_zmm_k1z_zmm_zmmm512 = "vpsrlvw",
        EVEX_Vpmovuswb_xmmm64_k1z_xmm = "vpmovuswb",
        EVEX_Vpmovuswb_xmmm128_k1z_ymm = "vpmovuswb",
        EVEX_Vpmovuswb_ymmm256_k1z_zmm = "vpmovuswb",
        EVEX_Vpsravw_xmm_k1z_xmm_xmmm128 = "vpsravw",
        EVEX_Vpsravw_ymm_k1z_ymm_ymmm256 = "vpsravw",
        EVEX_Vpsravw_zmm_k1z_zmm_zmmm512 = "vpsravw",
        EVEX_Vpmovusdb_xmmm32_k1z_xmm = "vpmovusdb",
        EVEX_Vpmovusdb_xmmm64_k1z_ymm = "vpmovusdb",
        EVEX_Vpmovusdb_xmmm128_k1z_zmm = "vpmovusdb",
        EVEX_Vpsllvw_xmm_k1z_xmm_xmmm128 = "vpsllvw",
        EVEX_Vpsllvw_ymm_k1z_ymm_ymmm256 = "vpsllvw",
        EVEX_Vpsllvw_zmm_k1z_zmm_zmmm512 = "vpsllvw",
        EVEX_Vpmovusqb_xmmm16_k1z_xmm = "vpmovusqb",
        EVEX_Vpmovusqb_xmmm32_k1z_ymm = "vpmovusqb",
        EVEX_Vpmovusqb_xmmm64_k1z_zmm = "vpmovusqb",
        EVEX_Vcvtph2ps_xmm_k1z_xmmm64 = "vcvtph2ps",
        EVEX_Vcvtph2ps_ymm_k1z_xmmm128 = "vcvtph2ps",
        EVEX_Vcvtph2ps_zmm_k1z_ymmm256_sae = "vcvtph2ps",
        EVEX_Vpmovusdw_xmmm64_k1z_xmm = "vpmovusdw",
        EVEX_Vpmovusdw_xmmm128_k1z_ymm = "vpmovusdw",
        EVEX_Vpmovusdw_ymmm256_k1z_zmm = "vpmovusdw",
        EVEX_Vprorvd_xmm_k1z_xmm_xmmm128b32 = "vprorvd",
        EVEX_Vprorvd_ymm_k1z_ymm_ymmm256b32 = "vprorvd",
        EVEX_Vprorvd_zmm_k1z_zmm_zmmm512b32 = "vprorvd",
        EVEX_Vprorvq_xmm_k1z_xmm_xmmm128b64 = "vprorvq",
        EVEX_Vprorvq_ymm_k1z_ymm_ymmm256b64 = "vprorvq",
        EVEX_Vprorvq_zmm_k1z_zmm_zmmm512b64 = "vprorvq",
        EVEX_Vpmovusqw_xmmm32_k1z_xmm = "vpmovusqw",
        EVEX_Vpmovusqw_xmmm64_k1z_ymm = "vpmovusqw",
        EVEX_Vpmovusqw_xmmm128_k1z_zmm = "vpmovusqw",
        EVEX_Vprolvd_xmm_k1z_xmm_xmmm128b32 = "vprolvd",
        EVEX_Vprolvd_ymm_k1z_ymm_ymmm256b32 = "vprolvd",
        EVEX_Vprolvd_zmm_k1z_zmm_zmmm512b32 = "vprolvd",
        EVEX_Vprolvq_xmm_k1z_xmm_xmmm128b64 = "vprolvq",
        EVEX_Vprolvq_ymm_k1z_ymm_ymmm256b64 = "vprolvq",
        EVEX_Vprolvq_zmm_k1z_zmm_zmmm512b64 = "vprolvq",
        EVEX_Vpmovusqd_xmmm64_k1z_xmm = "vpmovusqd",
        EVEX_Vpmovusqd_xmmm128_k1z_ymm = "vpmovusqd",
        EVEX_Vpmovusqd_ymmm256_k1z_zmm = "vpmovusqd",
        EVEX_Vpermps_ymm_k1z_ymm_ymmm256b32 = "vpermps",
        EVEX_Vpermps_zmm_k1z_zmm_zmmm512b32 = "vpermps",
        EVEX_Vpermpd_ymm_k1z_ymm_ymmm256b64 = "vpermpd",
        EVEX_Vpermpd_zmm_k1z_zmm_zmmm512b64 = "vpermpd",
        EVEX_Vbroadcastss_xmm_k1z_xmmm32 = "vbroadcastss",
        EVEX_Vbroadcastss_ymm_k1z_xmmm32 = "vbroadcastss",
        EVEX_Vbroadcastss_zmm_k1z_xmmm32 = "vbroadcastss",
        EVEX_Vbroadcastf32x2_ymm_k1z_xmmm64 = "vbroadcastf32x2",
        EVEX_Vbroadcastf32x2_zmm_k1z_xmmm64 = "vbroadcastf32x2",
        EVEX_Vbroadcastsd_ymm_k1z_xmmm64 = "vbroadcastsd",
        EVEX_Vbroadcastsd_zmm_k1z_xmmm64 = "vbroadcastsd",
        EVEX_Vbroadcastf32x4_ymm_k1z_m128 = "vbroadcastf32x4",
        EVEX_Vbroadcastf32x4_zmm_k1z_m128 = "vbroadcastf32x4",
        EVEX_Vbroadcastf64x2_ymm_k1z_m128 = "vbroadcastf64x2",
        EVEX_Vbroadcastf64x2_zmm_k1z_m128 = "vbroadcastf64x2",
        EVEX_Vbroadcastf32x8_zmm_k1z_m256 = "vbroadcastf32x8",
        EVEX_Vbroadcastf64x4_zmm_k1z_m256 = "vbroadcastf64x4",
        EVEX_Vpabsb_xmm_k1z_xmmm128 = "vpabsb",
        EVEX_Vpabsb_ymm_k1z_ymmm256 = "vpabsb",
        EVEX_Vpabsb_zmm_k1z_zmmm512 = "vpabsb",
        EVEX_Vpabsw_xmm_k1z_xmmm128 = "vpabsw",
        EVEX_Vpabsw_ymm_k1z_ymmm256 = "vpabsw",
        EVEX_Vpabsw_zmm_k1z_zmmm512 = "vpabsw",
        EVEX_Vpabsd_xmm_k1z_xmmm128b32 = "vpabsd",
        EVEX_Vpabsd_ymm_k1z_ymmm256b32 = "vpabsd",
        EVEX_Vpabsd_zmm_k1z_zmmm512b32 = "vpabsd",
        EVEX_Vpabsq_xmm_k1z_xmmm128b64 = "vpabsq",
        EVEX_Vpabsq_ymm_k1z_ymmm256b64 = "vpabsq",
        EVEX_Vpabsq_zmm_k1z_zmmm512b64 = "vpabsq",
        EVEX_Vpmovsxbw_xmm_k1z_xmmm64 = "vpmovsxbw",
        EVEX_Vpmovsxbw_ymm_k1z_xmmm128 = "vpmovsxbw",
        EVEX_Vpmovsxbw_zmm_k1z_ymmm256 = "vpmovsxbw",
        EVEX_Vpmovswb_xmmm64_k1z_xmm = "vpmovswb",
        EVEX_Vpmovswb_xmmm128_k1z_ymm = "vpmovswb",
        EVEX_Vpmovswb_ymmm256_k1z_zmm = "vpmovswb",
        EVEX_Vpmovsxbd_xmm_k1z_xmmm32 = "vpmovsxbd",
        EVEX_Vpmovsxbd_ymm_k1z_xmmm64 = "vpmovsxbd",
        EVEX_Vpmovsxbd_zmm_k1z_xmmm128 = "vpmovsxbd",
        EVEX_Vpmovsdb_xmmm32_k1z_xmm = "vpmovsdb",
        EVEX_Vpmovsdb_xmmm64_k1z_ymm = "vpmovsdb",
        EVEX_Vpmovsdb_xmmm128_k1z_zmm = "vpmovsdb",
        EVEX_Vpmovsxbq_xmm_k1z_xmmm16 = "vpmovsxbq",
        EVEX_Vpmovsxbq_ymm_k1z_xmmm32 = "vpmovsxbq",
        EVEX_Vpmovsxbq_zmm_k1z_xmmm64 = "vpmovsxbq",
        EVEX_Vpmovsqb_xmmm16_k1z_xmm = "vpmovsqb",
        EVEX_Vpmovsqb_xmmm32_k1z_ymm = "vpmovsqb",
        EVEX_Vpmovsqb_xmmm64_k1z_zmm = "vpmovsqb",
        EVEX_Vpmovsxwd_xmm_k1z_xmmm64 = "vpmovsxwd",
        EVEX_Vpmovsxwd_ymm_k1z_xmmm128 = "vpmovsxwd",
        EVEX_Vpmovsxwd_zmm_k1z_ymmm256 = "vpmovsxwd",
        EVEX_Vpmovsdw_xmmm64_k1z_xmm = "vpmovsdw",
        EVEX_Vpmovsdw_xmmm128_k1z_ymm = "vpmovsdw",
        EVEX_Vpmovsdw_ymmm256_k1z_zmm = "vpmovsdw",
        EVEX_Vpmovsxwq_xmm_k1z_xmmm32 = "vpmovsxwq",
        EVEX_Vpmovsxwq_ymm_k1z_xmmm64 = "vpmovsxwq",
        EVEX_Vpmovsxwq_zmm_k1z_xmmm128 = "vpmovsxwq",
        EVEX_Vpmovsqw_xmmm32_k1z_xmm = "vpmovsqw",
        EVEX_Vpmovsqw_xmmm64_k1z_ymm = "vpmovsqw",
        EVEX_Vpmovsqw_xmmm128_k1z_zmm = "vpmovsqw",
        EVEX_Vpmovsxdq_xmm_k1z_xmmm64 = "vpmovsxdq",
        EVEX_Vpmovsxdq_ymm_k1z_xmmm128 = "vpmovsxdq",
        EVEX_Vpmovsxdq_zmm_k1z_ymmm256 = "vpmovsxdq",
        EVEX_Vpmovsqd_xmmm64_k1z_xmm = "vpmovsqd",
        EVEX_Vpmovsqd_xmmm128_k1z_ymm = "vpmovsqd",
        EVEX_Vpmovsqd_ymmm256_k1z_zmm = "vpmovsqd",
        EVEX_Vptestmb_kr_k1_xmm_xmmm128 = "vptestmb",
        EVEX_Vptestmb_kr_k1_ymm_ymmm256 = "vptestmb",
        EVEX_Vptestmb_kr_k1_zmm_zmmm512 = "vptestmb",
        EVEX_Vptestmw_kr_k1_xmm_xmmm128 = "vptestmw",
        EVEX_Vptestmw_kr_k1_ymm_ymmm256 = "vptestmw",
        EVEX_Vptestmw_kr_k1_zmm_zmmm512 = "vptestmw",
        EVEX_Vptestnmb_kr_k1_xmm_xmmm128 = "vptestnmb",
        EVEX_Vptestnmb_kr_k1_ymm_ymmm256 = "vptestnmb",
        EVEX_Vptestnmb_kr_k1_zmm_zmmm512 = "vptestnmb",
        EVEX_Vptestnmw_kr_k1_xmm_xmmm128 = "vptestnmw",
        EVEX_Vptestnmw_kr_k1_ymm_ymmm256 = "vptestnmw",
        EVEX_Vptestnmw_kr_k1_zmm_zmmm512 = "vptestnmw",
        EVEX_Vptestmd_kr_k1_xmm_xmmm128b32 = "vptestmd",
        EVEX_Vptestmd_kr_k1_ymm_ymmm256b32 = "vptestmd",
        EVEX_Vptestmd_kr_k1_zmm_zmmm512b32 = "vptestmd",
        EVEX_Vptestmq_kr_k1_xmm_xmmm128b64 = "vptestmq",
        EVEX_Vptestmq_kr_k1_ymm_ymmm256b64 = "vptestmq",
        EVEX_Vptestmq_kr_k1_zmm_zmmm512b64 = "vptestmq",
        EVEX_Vptestnmd_kr_k1_xmm_xmmm128b32 = "vptestnmd",
        EVEX_Vptestnmd_kr_k1_ymm_ymmm256b32 = "vptestnmd",
        EVEX_Vptestnmd_kr_k1_zmm_zmmm512b32 = "vptestnmd",
        EVEX_Vptestnmq_kr_k1_xmm_xmmm128b64 = "vptestnmq",
        EVEX_Vptestnmq_kr_k1_ymm_ymmm256b64 = "vptestnmq",
        EVEX_Vptestnmq_kr_k1_zmm_zmmm512b64 = "vptestnmq",
        EVEX_Vpmuldq_xmm_k1z_xmm_xmmm128b64 = "vpmuldq",
        EVEX_Vpmuldq_ymm_k1z_ymm_ymmm256b64 = "vpmuldq",
        EVEX_Vpmuldq_zmm_k1z_zmm_zmmm512b64 = "vpmuldq",
        EVEX_Vpmovm2b_xmm_kr = "vpmovm2b",
        EVEX_Vpmovm2b_ymm_kr = "vpmovm2b",
        EVEX_Vpmovm2b_zmm_kr = "vpmovm2b",
        EVEX_Vpmovm2w_xmm_kr = "vpmovm2w",
        EVEX_Vpmovm2w_ymm_kr = "vpmovm2w",
        EVEX_Vpmovm2w_zmm_kr = "vpmovm2w",
        EVEX_Vpcmpeqq_kr_k1_xmm_xmmm128b64 = "vpcmpeqq",
        EVEX_Vpcmpeqq_kr_k1_ymm_ymmm256b64 = "vpcmpeqq",
        EVEX_Vpcmpeqq_kr_k1_zmm_zmmm512b64 = "vpcmpeqq",
        EVEX_Vpmovb2m_kr_xmm = "vpmovb2m",
        EVEX_Vpmovb2m_kr_ymm = "vpmovb2m",
        EVEX_Vpmovb2m_kr_zmm = "vpmovb2m",
        EVEX_Vpmovw2m_kr_xmm = "vpmovw2m",
        EVEX_Vpmovw2m_kr_ymm = "vpmovw2m",
        EVEX_Vpmovw2m_kr_zmm = "vpmovw2m",
        EVEX_Vmovntdqa_xmm_m128 = "vmovntdqa",
        EVEX_Vmovntdqa_ymm_m256 = "vmovntdqa",
        EVEX_Vmovntdqa_zmm_m512 = "vmovntdqa",
        EVEX_Vpbroadcastmb2q_xmm_kr = "vpbroadcastmb2q",
        EVEX_Vpbroadcastmb2q_ymm_kr = "vpbroadcastmb2q",
        EVEX_Vpbroadcastmb2q_zmm_kr = "vpbroadcastmb2q",
        EVEX_Vpackusdw_xmm_k1z_xmm_xmmm128b32 = "vpackusdw",
        EVEX_Vpackusdw_ymm_k1z_ymm_ymmm256b32 = "vpackusdw",
        EVEX_Vpackusdw_zmm_k1z_zmm_zmmm512b32 = "vpackusdw",
        EVEX_Vscalefps_xmm_k1z_xmm_xmmm128b32 = "vscalefps",
        EVEX_Vscalefps_ymm_k1z_ymm_ymmm256b32 = "vscalefps",
        EVEX_Vscalefps_zmm_k1z_zmm_zmmm512b32_er = "vscalefps",
        EVEX_Vscalefpd_xmm_k1z_xmm_xmmm128b64 = "vscalefpd",
        EVEX_Vscalefpd_ymm_k1z_ymm_ymmm256b64 = "vscalefpd",
        EVEX_Vscalefpd_zmm_k1z_zmm_zmmm512b64_er = "vscalefpd",
        EVEX_Vscalefss_xmm_k1z_xmm_xmmm32_er = "vscalefss",
        EVEX_Vscalefsd_xmm_k1z_xmm_xmmm64_er = "vscalefsd",
        EVEX_Vpmovzxbw_xmm_k1z_xmmm64 = "vpmovzxbw",
        EVEX_Vpmovzxbw_ymm_k1z_xmmm128 = "vpmovzxbw",
        EVEX_Vpmovzxbw_zmm_k1z_ymmm256 = "vpmovzxbw",
        EVEX_Vpmovwb_xmmm64_k1z_xmm = "vpmovwb",
        EVEX_Vpmovwb_xmmm128_k1z_ymm = "vpmovwb",
        EVEX_Vpmovwb_ymmm256_k1z_zmm = "vpmovwb",
        EVEX_Vpmovzxbd_xmm_k1z_xmmm32 = "vpmovzxbd",
        EVEX_Vpmovzxbd_ymm_k1z_xmmm64 = "vpmovzxbd",
        EVEX_Vpmovzxbd_zmm_k1z_xmmm128 = "vpmovzxbd",
        EVEX_Vpmovdb_xmmm32_k1z_xmm = "vpmovdb",
        EVEX_Vpmovdb_xmmm64_k1z_ymm = "vpmovdb",
        EVEX_Vpmovdb_xmmm128_k1z_zmm = "vpmovdb",
        EVEX_Vpmovzxbq_xmm_k1z_xmmm16 = "vpmovzxbq",
        EVEX_Vpmovzxbq_ymm_k1z_xmmm32 = "vpmovzxbq",
        EVEX_Vpmovzxbq_zmm_k1z_xmmm64 = "vpmovzxbq",
        EVEX_Vpmovqb_xmmm16_k1z_xmm = "vpmovqb",
        EVEX_Vpmovqb_xmmm32_k1z_ymm = "vpmovqb",
        EVEX_Vpmovqb_xmmm64_k1z_zmm = "vpmovqb",
        EVEX_Vpmovzxwd_xmm_k1z_xmmm64 = "vpmovzxwd",
        EVEX_Vpmovzxwd_ymm_k1z_xmmm128 = "vpmovzxwd",
        EVEX_Vpmovzxwd_zmm_k1z_ymmm256 = "vpmovzxwd",
        EVEX_Vpmovdw_xmmm64_k1z_xmm = "vpmovdw",
        EVEX_Vpmovdw_xmmm128_k1z_ymm = "vpmovdw",
        EVEX_Vpmovdw_ymmm256_k1z_zmm = "vpmovdw",
        EVEX_Vpmovzxwq_xmm_k1z_xmmm32 = "vpmovzxwq",
        EVEX_Vpmovzxwq_ymm_k1z_xmmm64 = "vpmovzxwq",
        EVEX_Vpmovzxwq_zmm_k1z_xmmm128 = "vpmovzxwq",
        EVEX_Vpmovqw_xmmm32_k1z_xmm = "vpmovqw",
        EVEX_Vpmovqw_xmmm64_k1z_ymm = "vpmovqw",
        EVEX_Vpmovqw_xmmm128_k1z_zmm = "vpmovqw",
        EVEX_Vpmovzxdq_xmm_k1z_xmmm64 = "vpmovzxdq",
        EVEX_Vpmovzxdq_ymm_k1z_xmmm128 = "vpmovzxdq",
        EVEX_Vpmovzxdq_zmm_k1z_ymmm256 = "vpmovzxdq",
        EVEX_Vpmovqd_xmmm64_k1z_xmm = "vpmovqd",
        EVEX_Vpmovqd_xmmm128_k1z_ymm = "vpmovqd",
        EVEX_Vpmovqd_ymmm256_k1z_zmm = "vpmovqd",
        EVEX_Vpermd_ymm_k1z_ymm_ymmm256b32 = "vpermd",
        EVEX_Vpermd_zmm_k1z_zmm_zmmm512b32 = "vpermd",
        EVEX_Vpermq_ymm_k1z_ymm_ymmm256b64 = "vpermq",
        EVEX_Vpermq_zmm_k1z_zmm_zmmm512b64 = "vpermq",
        EVEX_Vpcmpgtq_kr_k1_xmm_xmmm128b64 = "vpcmpgtq",
        EVEX_Vpcmpgtq_kr_k1_ymm_ymmm256b64 = "vpcmpgtq",
        EVEX_Vpcmpgtq_kr_k1_zmm_zmmm512b64 = "vpcmpgtq",
        EVEX_Vpminsb_xmm_k1z_xmm_xmmm128 = "vpminsb",
        EVEX_Vpminsb_ymm_k1z_ymm_ymmm256 = "vpminsb",
        EVEX_Vpminsb_zmm_k1z_zmm_zmmm512 = "vpminsb",
        EVEX_Vpmovm2d_xmm_kr = "vpmovm2d",
        EVEX_Vpmovm2d_ymm_kr = "vpmovm2d",
        EVEX_Vpmovm2d_zmm_kr = "vpmovm2d",
        EVEX_Vpmovm2q_xmm_kr = "vpmovm2q",
        EVEX_Vpmovm2q_ymm_kr = "vpmovm2q",
        EVEX_Vpmovm2q_zmm_kr = "vpmovm2q",
        EVEX_Vpminsd_xmm_k1z_xmm_xmmm128b32 = "vpminsd",
        EVEX_Vpminsd_ymm_k1z_ymm_ymmm256b32 = "vpminsd",
        EVEX_Vpminsd_zmm_k1z_zmm_zmmm512b32 = "vpminsd",
        EVEX_Vpminsq_xmm_k1z_xmm_xmmm128b64 = "vpminsq",
        EVEX_Vpminsq_ymm_k1z_ymm_ymmm256b64 = "vpminsq",
        EVEX_Vpminsq_zmm_k1z_zmm_zmmm512b64 = "vpminsq",
        EVEX_Vpmovd2m_kr_xmm = "vpmovd2m",
        EVEX_Vpmovd2m_kr_ymm = "vpmovd2m",
        EVEX_Vpmovd2m_kr_zmm = "vpmovd2m",
        EVEX_Vpmovq2m_kr_xmm = "vpmovq2m",
        EVEX_Vpmovq2m_kr_ymm = "vpmovq2m",
        EVEX_Vpmovq2m_kr_zmm = "vpmovq2m",
        EVEX_Vpminuw_xmm_k1z_xmm_xmmm128 = "vpminuw",
        EVEX_Vpminuw_ymm_k1z_ymm_ymmm256 = "vpminuw",
        EVEX_Vpminuw_zmm_k1z_zmm_zmmm512 = "vpminuw",
        EVEX_Vpbroadcastmw2d_xmm_kr = "vpbroadcastmw2d",
        EVEX_Vpbroadcastmw2d_ymm_kr = "vpbroadcastmw2d",
        EVEX_Vpbroadcastmw2d_zmm_kr = "vpbroadcastmw2d",
        EVEX_Vpminud_xmm_k1z_xmm_xmmm128b32 = "vpminud",
        EVEX_Vpminud_ymm_k1z_ymm_ymmm256b32 = "vpminud",
        EVEX_Vpminud_zmm_k1z_zmm_zmmm512b32 = "vpminud",
        EVEX_Vpminuq_xmm_k1z_xmm_xmmm128b64 = "vpminuq",
        EVEX_Vpminuq_ymm_k1z_ymm_ymmm256b64 = "vpminuq",
        EVEX_Vpminuq_zmm_k1z_zmm_zmmm512b64 = "vpminuq",
        EVEX_Vpmaxsb_xmm_k1z_xmm_xmmm128 = "vpmaxsb",
        EVEX_Vpmaxsb_ymm_k1z_ymm_ymmm256 = "vpmaxsb",
        EVEX_Vpmaxsb_zmm_k1z_zmm_zmmm512 = "vpmaxsb",
        EVEX_Vpmaxsd_xmm_k1z_xmm_xmmm128b32 = "vpmaxsd",
        EVEX_Vpmaxsd_ymm_k1z_ymm_ymmm256b32 = "vpmaxsd",
        EVEX_Vpmaxsd_zmm_k1z_zmm_zmmm512b32 = "vpmaxsd",
        EVEX_Vpmaxsq_xmm_k1z_xmm_xmmm128b64 = "vpmaxsq",
        EVEX_Vpmaxsq_ymm_k1z_ymm_ymmm256b64 = "vpmaxsq",
        EVEX_Vpmaxsq_zmm_k1z_zmm_zmmm512b64 = "vpmaxsq",
        EVEX_Vpmaxuw_xmm_k1z_xmm_xmmm128 = "vpmaxuw",
        EVEX_Vpmaxuw_ymm_k1z_ymm_ymmm256 = "vpmaxuw",
        EVEX_Vpmaxuw_zmm_k1z_zmm_zmmm512 = "vpmaxuw",
        EVEX_Vpmaxud_xmm_k1z_xmm_xmmm128b32 = "vpmaxud",
        EVEX_Vpmaxud_ymm_k1z_ymm_ymmm256b32 = "vpmaxud",
        EVEX_Vpmaxud_zmm_k1z_zmm_zmmm512b32 = "vpmaxud",
        EVEX_Vpmaxuq_xmm_k1z_xmm_xmmm128b64 = "vpmaxuq",
        EVEX_Vpmaxuq_ymm_k1z_ymm_ymmm256b64 = "vpmaxuq",
        EVEX_Vpmaxuq_zmm_k1z_zmm_zmmm512b64 = "vpmaxuq",
        EVEX_Vpmulld_xmm_k1z_xmm_xmmm128b32 = "vpmulld",
        EVEX_Vpmulld_ymm_k1z_ymm_ymmm256b32 = "vpmulld",
        EVEX_Vpmulld_zmm_k1z_zmm_zmmm512b32 = "vpmulld",
        EVEX_Vpmullq_xmm_k1z_xmm_xmmm128b64 = "vpmullq",
        EVEX_Vpmullq_ymm_k1z_ymm_ymmm256b64 = "vpmullq",
        EVEX_Vpmullq_zmm_k1z_zmm_zmmm512b64 = "vpmullq",
        EVEX_Vgetexpps_xmm_k1z_xmmm128b32 = "vgetexpps",
        EVEX_Vgetexpps_ymm_k1z_ymmm256b32 = "vgetexpps",
        EVEX_Vgetexpps_zmm_k1z_zmmm512b32_sae = "vgetexpps",
        EVEX_Vgetexppd_xmm_k1z_xmmm128b64 = "vgetexppd",
        EVEX_Vgetexppd_ymm_k1z_ymmm256b64 = "vgetexppd",
        EVEX_Vgetexppd_zmm_k1z_zmmm512b64_sae = "vgetexppd",
        EVEX_Vgetexpss_xmm_k1z_xmm_xmmm32_sae = "vgetexpss",
        EVEX_Vgetexpsd_xmm_k1z_xmm_xmmm64_sae = "vgetexpsd",
        EVEX_Vplzcntd_xmm_k1z_xmmm128b32 = "vplzcntd",
        EVEX_Vplzcntd_ymm_k1z_ymmm256b32 = "vplzcntd",
        EVEX_Vplzcntd_zmm_k1z_zmmm512b32 = "vplzcntd",
        EVEX_Vplzcntq_xmm_k1z_xmmm128b64 = "vplzcntq",
        EVEX_Vplzcntq_ymm_k1z_ymmm256b64 = "vplzcntq",
        EVEX_Vplzcntq_zmm_k1z_zmmm512b64 = "vplzcntq",
        EVEX_Vpsrlvd_xmm_k1z_xmm_xmmm128b32 = "vpsrlvd",
        EVEX_Vpsrlvd_ymm_k1z_ymm_ymmm256b32 = "vpsrlvd",
        EVEX_Vpsrlvd_zmm_k1z_zmm_zmmm512b32 = "vpsrlvd",
        EVEX_Vpsrlvq_xmm_k1z_xmm_xmmm128b64 = "vpsrlvq",
        EVEX_Vpsrlvq_ymm_k1z_ymm_ymmm256b64 = "vpsrlvq",
        EVEX_Vpsrlvq_zmm_k1z_zmm_zmmm512b64 = "vpsrlvq",
        EVEX_Vpsravd_xmm_k1z_xmm_xmmm128b32 = "vpsravd",
        EVEX_Vpsravd_ymm_k1z_ymm_ymmm256b32 = "vpsravd",
        EVEX_Vpsravd_zmm_k1z_zmm_zmmm512b32 = "vpsravd",
        EVEX_Vpsravq_xmm_k1z_xmm_xmmm128b64 = "vpsravq",
        EVEX_Vpsravq_ymm_k1z_ymm_ymmm256b64 = "vpsravq",
        EVEX_Vpsravq_zmm_k1z_zmm_zmmm512b64 = "vpsravq",
        EVEX_Vpsllvd_xmm_k1z_xmm_xmmm128b32 = "vpsllvd",
        EVEX_Vpsllvd_ymm_k1z_ymm_ymmm256b32 = "vpsllvd",
        EVEX_Vpsllvd_zmm_k1z_zmm_zmmm512b32 = "vpsllvd",
        EVEX_Vpsllvq_xmm_k1z_xmm_xmmm128b64 = "vpsllvq",
        EVEX_Vpsllvq_ymm_k1z_ymm_ymmm256b64 = "vpsllvq",
        EVEX_Vpsllvq_zmm_k1z_zmm_zmmm512b64 = "vpsllvq",
        EVEX_Vrcp14ps_xmm_k1z_xmmm128b32 = "vrcp14ps",
        EVEX_Vrcp14ps_ymm_k1z_ymmm256b32 = "vrcp14ps",
        EVEX_Vrcp14ps_zmm_k1z_zmmm512b32 = "vrcp14ps",
        EVEX_Vrcp14pd_xmm_k1z_xmmm128b64 = "vrcp14pd",
        EVEX_Vrcp14pd_ymm_k1z_ymmm256b64 = "vrcp14pd",
        EVEX_Vrcp14pd_zmm_k1z_zmmm512b64 = "vrcp14pd",
        EVEX_Vrcp14ss_xmm_k1z_xmm_xmmm32 = "vrcp14ss",
        EVEX_Vrcp14sd_xmm_k1z_xmm_xmmm64 = "vrcp14sd",
        EVEX_Vrsqrt14ps_xmm_k1z_xmmm128b32 = "vrsqrt14ps",
        EVEX_Vrsqrt14ps_ymm_k1z_ymmm256b32 = "vrsqrt14ps",
        EVEX_Vrsqrt14ps_zmm_k1z_zmmm512b32 = "vrsqrt14ps",
        EVEX_Vrsqrt14pd_xmm_k1z_xmmm128b64 = "vrsqrt14pd",
        EVEX_Vrsqrt14pd_ymm_k1z_ymmm256b64 = "vrsqrt14pd",
        EVEX_Vrsqrt14pd_zmm_k1z_zmmm512b64 = "vrsqrt14pd",
        EVEX_Vrsqrt14ss_xmm_k1z_xmm_xmmm32 = "vrsqrt14ss",
        EVEX_Vrsqrt14sd_xmm_k1z_xmm_xmmm64 = "vrsqrt14sd",
        EVEX_Vp4dpwssd_zmm_k1z_zmmp3_m128 = "vp4dpwssd",
        EVEX_Vp4dpwssds_zmm_k1z_zmmp3_m128 = "vp4dpwssds",
        EVEX_Vpbroadcastd_xmm_k1z_xmmm32 = "vpbroadcastd",
        EVEX_Vpbroadcastd_ymm_k1z_xmmm32 = "vpbroadcastd",
        EVEX_Vpbroadcastd_zmm_k1z_xmmm32 = "vpbroadcastd",
        EVEX_Vbroadcasti32x2_xmm_k1z_xmmm64 = "vbroadcasti32x2",
        EVEX_Vbroadcasti32x2_ymm_k1z_xmmm64 = "vbroadcasti32x2",
        EVEX_Vbroadcasti32x2_zmm_k1z_xmmm64 = "vbroadcasti32x2",
        EVEX_Vpbroadcastq_xmm_k1z_xmmm64 = "vpbroadcastq",
        EVEX_Vpbroadcastq_ymm_k1z_xmmm64 = "vpbroadcastq",
        EVEX_Vpbroadcastq_zmm_k1z_xmmm64 = "vpbroadcastq",
        EVEX_Vbroadcasti32x4_ymm_k1z_m128 = "vbroadcasti32x4",
        EVEX_Vbroadcasti32x4_zmm_k1z_m128 = "vbroadcasti32x4",
        EVEX_Vbroadcasti64x2_ymm_k1z_m128 = "vbroadcasti64x2",
        EVEX_Vbroadcasti64x2_zmm_k1z_m128 = "vbroadcasti64x2",
        EVEX_Vbroadcasti32x8_zmm_k1z_m256 = "vbroadcasti32x8",
        EVEX_Vbroadcasti64x4_zmm_k1z_m256 = "vbroadcasti64x4",
        EVEX_Vpblendmd_xmm_k1z_xmm_xmmm128b32 = "vpblendmd",
        EVEX_Vpblendmd_ymm_k1z_ymm_ymmm256b32 = "vpblendmd",
        EVEX_Vpblendmd_zmm_k1z_zmm_zmmm512b32 = "vpblendmd",
        EVEX_Vpblendmq_xmm_k1z_xmm_xmmm128b64 = "vpblendmq",
        EVEX_Vpblendmq_ymm_k1z_ymm_ymmm256b64 = "vpblendmq",
        EVEX_Vpblendmq_zmm_k1z_zmm_zmmm512b64 = "vpblendmq",
        EVEX_Vblendmps_xmm_k1z_xmm_xmmm128b32 = "vblendmps",
        EVEX_Vblendmps_ymm_k1z_ymm_ymmm256b32 = "vblendmps",
        EVEX_Vblendmps_zmm_k1z_zmm_zmmm512b32 = "vblendmps",
        EVEX_Vblendmpd_xmm_k1z_xmm_xmmm128b64 = "vblendmpd",
        EVEX_Vblendmpd_ymm_k1z_ymm_ymmm256b64 = "vblendmpd",
        EVEX_Vblendmpd_zmm_k1z_zmm_zmmm512b64 = "vblendmpd",
        EVEX_Vpblendmb_xmm_k1z_xmm_xmmm128 = "vpblendmb",
        EVEX_Vpblendmb_ymm_k1z_ymm_ymmm256 = "vpblendmb",
        EVEX_Vpblendmb_zmm_k1z_zmm_zmmm512 = "vpblendmb",
        EVEX_Vpblendmw_xmm_k1z_xmm_xmmm128 = "vpblendmw",
        EVEX_Vpblendmw_ymm_k1z_ymm_ymmm256 = "vpblendmw",
        EVEX_Vpblendmw_zmm_k1z_zmm_zmmm512 = "vpblendmw",
        EVEX_Vpermi2b_xmm_k1z_xmm_xmmm128 = "vpermi2b",
        EVEX_Vpermi2b_ymm_k1z_ymm_ymmm256 = "vpermi2b",
        EVEX_Vpermi2b_zmm_k1z_zmm_zmmm512 = "vpermi2b",
        EVEX_Vpermi2w_xmm_k1z_xmm_xmmm128 = "vpermi2w",
        EVEX_Vpermi2w_ymm_k1z_ymm_ymmm256 = "vpermi2w",
        EVEX_Vpermi2w_zmm_k1z_zmm_zmmm512 = "vpermi2w",
        EVEX_Vpermi2d_xmm_k1z_xmm_xmmm128b32 = "vpermi2d",
        EVEX_Vpermi2d_ymm_k1z_ymm_ymmm256b32 = "vpermi2d",
        EVEX_Vpermi2d_zmm_k1z_zmm_zmmm512b32 = "vpermi2d",
        EVEX_Vpermi2q_xmm_k1z_xmm_xmmm128b64 = "vpermi2q",
        EVEX_Vpermi2q_ymm_k1z_ymm_ymmm256b64 = "vpermi2q",
        EVEX_Vpermi2q_zmm_k1z_zmm_zmmm512b64 = "vpermi2q",
        EVEX_Vpermi2ps_xmm_k1z_xmm_xmmm128b32 = "vpermi2ps",
        EVEX_Vpermi2ps_ymm_k1z_ymm_ymmm256b32 = "vpermi2ps",
        EVEX_Vpermi2ps_zmm_k1z_zmm_zmmm512b32 = "vpermi2ps",
        EVEX_Vpermi2pd_xmm_k1z_xmm_xmmm128b64 = "vpermi2pd",
        EVEX_Vpermi2pd_ymm_k1z_ymm_ymmm256b64 = "vpermi2pd",
        EVEX_Vpermi2pd_zmm_k1z_zmm_zmmm512b64 = "vpermi2pd",
        EVEX_Vpbroadcastb_xmm_k1z_xmmm8 = "vpbroadcastb",
        EVEX_Vpbroadcastb_ymm_k1z_xmmm8 = "vpbroadcastb",
        EVEX_Vpbroadcastb_zmm_k1z_xmmm8 = "vpbroadcastb",
        EVEX_Vpbroadcastw_xmm_k1z_xmmm16 = "vpbroadcastw",
        EVEX_Vpbroadcastw_ymm_k1z_xmmm16 = "vpbroadcastw",
        EVEX_Vpbroadcastw_zmm_k1z_xmmm16 = "vpbroadcastw",
        EVEX_Vpbroadcastb_xmm_k1z_r32 = "vpbroadcastb",
        EVEX_Vpbroadcastb_ymm_k1z_r32 = "vpbroadcastb",
        EVEX_Vpbroadcastb_zmm_k1z_r32 = "vpbroadcastb",
        EVEX_Vpbroadcastw_xmm_k1z_r32 = "vpbroadcastw",
        EVEX_Vpbroadcastw_ymm_k1z_r32 = "vpbroadcastw",
        EVEX_Vpbroadcastw_zmm_k1z_r32 = "vpbroadcastw",
        EVEX_Vpbroadcastd_xmm_k1z_r32 = "vpbroadcastd",
        EVEX_Vpbroadcastd_ymm_k1z_r32 = "vpbroadcastd",
        EVEX_Vpbroadcastd_zmm_k1z_r32 = "vpbroadcastd",
        EVEX_Vpbroadcastq_xmm_k1z_r64 = "vpbroadcastq",
        EVEX_Vpbroadcastq_ymm_k1z_r64 = "vpbroadcastq",
        EVEX_Vpbroadcastq_zmm_k1z_r64 = "vpbroadcastq",
        EVEX_Vpermt2b_xmm_k1z_xmm_xmmm128 = "vpermt2b",
        EVEX_Vpermt2b_ymm_k1z_ymm_ymmm256 = "vpermt2b",
        EVEX_Vpermt2b_zmm_k1z_zmm_zmmm512 = "vpermt2b",
        EVEX_Vpermt2w_xmm_k1z_xmm_xmmm128 = "vpermt2w",
        EVEX_Vpermt2w_ymm_k1z_ymm_ymmm256 = "vpermt2w",
        EVEX_Vpermt2w_zmm_k1z_zmm_zmmm512 = "vpermt2w",
        EVEX_Vpermt2d_xmm_k1z_xmm_xmmm128b32 = "vpermt2d",
        EVEX_Vpermt2d_ymm_k1z_ymm_ymmm256b32 = "vpermt2d",
        EVEX_Vpermt2d_zmm_k1z_zmm_zmmm512b32 = "vpermt2d",
        EVEX_Vpermt2q_xmm_k1z_xmm_xmmm128b64 = "vpermt2q",
        EVEX_Vpermt2q_ymm_k1z_ymm_ymmm256b64 = "vpermt2q",
        EVEX_Vpermt2q_zmm_k1z_zmm_zmmm512b64 = "vpermt2q",
        EVEX_Vpermt2ps_xmm_k1z_xmm_xmmm128b32 = "vpermt2ps",
        EVEX_Vpermt2ps_ymm_k1z_ymm_ymmm256b32 = "vpermt2ps",
        EVEX_Vpermt2ps_zmm_k1z_zmm_zmmm512b32 = "vpermt2ps",
        EVEX_Vpermt2pd_xmm_k1z_xmm_xmmm128b64 = "vpermt2pd",
        EVEX_Vpermt2pd_ymm_k1z_ymm_ymmm256b64 = "vpermt2pd",
        EVEX_Vpermt2pd_zmm_k1z_zmm_zmmm512b64 = "vpermt2pd",
        EVEX_Vpmultishiftqb_xmm_k1z_xmm_xmmm128b64 = "vpmultishiftqb",
        EVEX_Vpmultishiftqb_ymm_k1z_ymm_ymmm256b64 = "vpmultishiftqb",
        EVEX_Vpmultishiftqb_zmm_k1z_zmm_zmmm512b64 = "vpmultishiftqb",
        EVEX_Vexpandps_xmm_k1z_xmmm128 = "vexpandps",
        EVEX_Vexpandps_ymm_k1z_ymmm256 = "vexpandps",
        EVEX_Vexpandps_zmm_k1z_zmmm512 = "vexpandps",
        EVEX_Vexpandpd_xmm_k1z_xmmm128 = "vexpandpd",
        EVEX_Vexpandpd_ymm_k1z_ymmm256 = "vexpandpd",
        EVEX_Vexpandpd_zmm_k1z_zmmm512 = "vexpandpd",
        EVEX_Vpexpandd_xmm_k1z_xmmm128 = "vpexpandd",
        EVEX_Vpexpandd_ymm_k1z_ymmm256 = "vpexpandd",
        EVEX_Vpexpandd_zmm_k1z_zmmm512 = "vpexpandd",
        EVEX_Vpexpandq_xmm_k1z_xmmm128 = "vpexpandq",
        EVEX_Vpexpandq_ymm_k1z_ymmm256 = "vpexpandq",
        EVEX_Vpexpandq_zmm_k1z_zmmm512 = "vpexpandq",
        EVEX_Vcompressps_xmmm128_k1z_xmm = "vcompressps",
        EVEX_Vcompressps_ymmm256_k1z_ymm = "vcompressps",
        EVEX_Vcompressps_zmmm512_k1z_zmm = "vcompressps",
        EVEX_Vcompresspd_xmmm128_k1z_xmm = "vcompresspd",
        EVEX_Vcompresspd_ymmm256_k1z_ymm = "vcompresspd",
        EVEX_Vcompresspd_zmmm512_k1z_zmm = "vcompresspd",
        EVEX_Vpcompressd_xmmm128_k1z_xmm = "vpcompressd",
        EVEX_Vpcompressd_ymmm256_k1z_ymm = "vpcompressd",
        EVEX_Vpcompressd_zmmm512_k1z_zmm = "vpcompressd",
        EVEX_Vpcompressq_xmmm128_k1z_xmm = "vpcompressq",
        EVEX_Vpcompressq_ymmm256_k1z_ymm = "vpcompressq",
        EVEX_Vpcompressq_zmmm512_k1z_zmm = "vpcompressq",
        EVEX_Vpermb_xmm_k1z_xmm_xmmm128 = "vpermb",
        EVEX_Vpermb_ymm_k1z_ymm_ymmm256 = "vpermb",
        EVEX_Vpermb_zmm_k1z_zmm_zmmm512 = "vpermb",
        EVEX_Vpermw_xmm_k1z_xmm_xmmm128 = "vpermw",
        EVEX_Vpermw_ymm_k1z_ymm_ymmm256 = "vpermw",
        EVEX_Vpermw_zmm_k1z_zmm_zmmm512 = "vpermw",
        EVEX_Vpgatherdd_xmm_k1_vm32x = "vpgatherdd",
        EVEX_Vpgatherdd_ymm_k1_vm32y = "vpgatherdd",
        EVEX_Vpgatherdd_zmm_k1_vm32z = "vpgatherdd",
        EVEX_Vpgatherdq_xmm_k1_vm32x = "vpgatherdq",
        EVEX_Vpgatherdq_ymm_k1_vm32x = "vpgatherdq",
        EVEX_Vpgatherdq_zmm_k1_vm32y = "vpgatherdq",
        EVEX_Vpgatherqd_xmm_k1_vm64x = "vpgatherqd",
        EVEX_Vpgatherqd_xmm_k1_vm64y = "vpgatherqd",
        EVEX_Vpgatherqd_ymm_k1_vm64z = "vpgatherqd",
        EVEX_Vpgatherqq_xmm_k1_vm64x = "vpgatherqq",
        EVEX_Vpgatherqq_ymm_k1_vm64y = "vpgatherqq",
        EVEX_Vpgatherqq_zmm_k1_vm64z = "vpgatherqq",
        EVEX_Vgatherdps_xmm_k1_vm32x = "vgatherdps",
        EVEX_Vgatherdps_ymm_k1_vm32y = "vgatherdps",
        EVEX_Vgatherdps_zmm_k1_vm32z = "vgatherdps",
        EVEX_Vgatherdpd_xmm_k1_vm32x = "vgatherdpd",
        EVEX_Vgatherdpd_ymm_k1_vm32x = "vgatherdpd",
        EVEX_Vgatherdpd_zmm_k1_vm32y = "vgatherdpd",
        EVEX_Vgatherqps_xmm_k1_vm64x = "vgatherqps",
        EVEX_Vgatherqps_xmm_k1_vm64y = "vgatherqps",
        EVEX_Vgatherqps_ymm_k1_vm64z = "vgatherqps",
        EVEX_Vgatherqpd_xmm_k1_vm64x = "vgatherqpd",
        EVEX_Vgatherqpd_ymm_k1_vm64y = "vgatherqpd",
        EVEX_Vgatherqpd_zmm_k1_vm64z = "vgatherqpd",
        EVEX_Vfmaddsub132ps_xmm_k1z_xmm_xmmm128b32 = "vfmaddsub132ps",
        EVEX_Vfmaddsub132ps_ymm_k1z_ymm_ymmm256b32 = "vfmaddsub132ps",
        EVEX_Vfmaddsub132ps_zmm_k1z_zmm_zmmm512b32_er = "vfmaddsub132ps",
        EVEX_Vfmaddsub132pd_xmm_k1z_xmm_xmmm128b64 = "vfmaddsub132pd",
        EVEX_Vfmaddsub132pd_ymm_k1z_ymm_ymmm256b64 = "vfmaddsub132pd",
        EVEX_Vfmaddsub132pd_zmm_k1z_zmm_zmmm512b64_er = "vfmaddsub132pd",
        EVEX_Vfmsubadd132ps_xmm_k1z_xmm_xmmm128b32 = "vfmsubadd132ps",
        EVEX_Vfmsubadd132ps_ymm_k1z_ymm_ymmm256b32 = "vfmsubadd132ps",
        EVEX_Vfmsubadd132ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsubadd132ps",
        EVEX_Vfmsubadd132pd_xmm_k1z_xmm_xmmm128b64 = "vfmsubadd132pd",
        EVEX_Vfmsubadd132pd_ymm_k1z_ymm_ymmm256b64 = "vfmsubadd132pd",
        EVEX_Vfmsubadd132pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsubadd132pd",
        EVEX_Vfmadd132ps_xmm_k1z_xmm_xmmm128b32 = "vfmadd132ps",
        EVEX_Vfmadd132ps_ymm_k1z_ymm_ymmm256b32 = "vfmadd132ps",
        EVEX_Vfmadd132ps_zmm_k1z_zmm_zmmm512b32_er = "vfmadd132ps",
        EVEX_Vfmadd132pd_xmm_k1z_xmm_xmmm128b64 = "vfmadd132pd",
        EVEX_Vfmadd132pd_ymm_k1z_ymm_ymmm256b64 = "vfmadd132pd",
        EVEX_Vfmadd132pd_zmm_k1z_zmm_zmmm512b64_er = "vfmadd132pd",
        EVEX_Vfmadd132ss_xmm_k1z_xmm_xmmm32_er = "vfmadd132ss",
        EVEX_Vfmadd132sd_xmm_k1z_xmm_xmmm64_er = "vfmadd132sd",
        EVEX_Vfmsub132ps_xmm_k1z_xmm_xmmm128b32 = "vfmsub132ps",
        EVEX_Vfmsub132ps_ymm_k1z_ymm_ymmm256b32 = "vfmsub132ps",
        EVEX_Vfmsub132ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsub132ps",
        EVEX_Vfmsub132pd_xmm_k1z_xmm_xmmm128b64 = "vfmsub132pd",
        EVEX_Vfmsub132pd_ymm_k1z_ymm_ymmm256b64 = "vfmsub132pd",
        EVEX_Vfmsub132pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsub132pd",
        EVEX_V4fmaddps_zmm_k1z_zmmp3_m128 = "v4fmaddps",
        EVEX_Vfmsub132ss_xmm_k1z_xmm_xmmm32_er = "vfmsub132ss",
        EVEX_Vfmsub132sd_xmm_k1z_xmm_xmmm64_er = "vfmsub132sd",
        EVEX_V4fmaddss_xmm_k1z_xmmp3_m128 = "v4fmaddss",
        EVEX_Vfnmadd132ps_xmm_k1z_xmm_xmmm128b32 = "vfnmadd132ps",
        EVEX_Vfnmadd132ps_ymm_k1z_ymm_ymmm256b32 = "vfnmadd132ps",
        EVEX_Vfnmadd132ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmadd132ps",
        EVEX_Vfnmadd132pd_xmm_k1z_xmm_xmmm128b64 = "vfnmadd132pd",
        EVEX_Vfnmadd132pd_ymm_k1z_ymm_ymmm256b64 = "vfnmadd132pd",
        EVEX_Vfnmadd132pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmadd132pd",
        EVEX_Vfnmadd132ss_xmm_k1z_xmm_xmmm32_er = "vfnmadd132ss",
        EVEX_Vfnmadd132sd_xmm_k1z_xmm_xmmm64_er = "vfnmadd132sd",
        EVEX_Vfnmsub132ps_xmm_k1z_xmm_xmmm128b32 = "vfnmsub132ps",
        EVEX_Vfnmsub132ps_ymm_k1z_ymm_ymmm256b32 = "vfnmsub132ps",
        EVEX_Vfnmsub132ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmsub132ps",
        EVEX_Vfnmsub132pd_xmm_k1z_xmm_xmmm128b64 = "vfnmsub132pd",
        EVEX_Vfnmsub132pd_ymm_k1z_ymm_ymmm256b64 = "vfnmsub132pd",
        EVEX_Vfnmsub132pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmsub132pd",
        EVEX_Vfnmsub132ss_xmm_k1z_xmm_xmmm32_er = "vfnmsub132ss",
        EVEX_Vfnmsub132sd_xmm_k1z_xmm_xmmm64_er = "vfnmsub132sd",
        EVEX_Vpscatterdd_vm32x_k1_xmm = "vpscatterdd",
        EVEX_Vpscatterdd_vm32y_k1_ymm = "vpscatterdd",
        EVEX_Vpscatterdd_vm32z_k1_zmm = "vpscatterdd",
        EVEX_Vpscatterdq_vm32x_k1_xmm = "vpscatterdq",
        EVEX_Vpscatterdq_vm32x_k1_ymm = "vpscatterdq",
        EVEX_Vpscatterdq_vm32y_k1_zmm = "vpscatterdq",
        EVEX_Vpscatterqd_vm64x_k1_xmm = "vpscatterqd",
        EVEX_Vpscatterqd_vm64y_k1_xmm = "vpscatterqd",
        EVEX_Vpscatterqd_vm64z_k1_ymm = "vpscatterqd",
        EVEX_Vpscatterqq_vm64x_k1_xmm = "vpscatterqq",
        EVEX_Vpscatterqq_vm64y_k1_ymm = "vpscatterqq",
        EVEX_Vpscatterqq_vm64z_k1_zmm = "vpscatterqq",
        EVEX_Vscatterdps_vm32x_k1_xmm = "vscatterdps",
        EVEX_Vscatterdps_vm32y_k1_ymm = "vscatterdps",
        EVEX_Vscatterdps_vm32z_k1_zmm = "vscatterdps",
        EVEX_Vscatterdpd_vm32x_k1_xmm = "vscatterdpd",
        EVEX_Vscatterdpd_vm32x_k1_ymm = "vscatterdpd",
        EVEX_Vscatterdpd_vm32y_k1_zmm = "vscatterdpd",
        EVEX_Vscatterqps_vm64x_k1_xmm = "vscatterqps",
        EVEX_Vscatterqps_vm64y_k1_xmm = "vscatterqps",
        EVEX_Vscatterqps_vm64z_k1_ymm = "vscatterqps",
        EVEX_Vscatterqpd_vm64x_k1_xmm = "vscatterqpd",
        EVEX_Vscatterqpd_vm64y_k1_ymm = "vscatterqpd",
        EVEX_Vscatterqpd_vm64z_k1_zmm = "vscatterqpd",
        EVEX_Vfmaddsub213ps_xmm_k1z_xmm_xmmm128b32 = "vfmaddsub213ps",
        EVEX_Vfmaddsub213ps_ymm_k1z_ymm_ymmm256b32 = "vfmaddsub213ps",
        EVEX_Vfmaddsub213ps_zmm_k1z_zmm_zmmm512b32_er = "vfmaddsub213ps",
        EVEX_Vfmaddsub213pd_xmm_k1z_xmm_xmmm128b64 = "vfmaddsub213pd",
        EVEX_Vfmaddsub213pd_ymm_k1z_ymm_ymmm256b64 = "vfmaddsub213pd",
        EVEX_Vfmaddsub213pd_zmm_k1z_zmm_zmmm512b64_er = "vfmaddsub213pd",
        EVEX_Vfmsubadd213ps_xmm_k1z_xmm_xmmm128b32 = "vfmsubadd213ps",
        EVEX_Vfmsubadd213ps_ymm_k1z_ymm_ymmm256b32 = "vfmsubadd213ps",
        EVEX_Vfmsubadd213ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsubadd213ps",
        EVEX_Vfmsubadd213pd_xmm_k1z_xmm_xmmm128b64 = "vfmsubadd213pd",
        EVEX_Vfmsubadd213pd_ymm_k1z_ymm_ymmm256b64 = "vfmsubadd213pd",
        EVEX_Vfmsubadd213pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsubadd213pd",
        EVEX_Vfmadd213ps_xmm_k1z_xmm_xmmm128b32 = "vfmadd213ps",
        EVEX_Vfmadd213ps_ymm_k1z_ymm_ymmm256b32 = "vfmadd213ps",
        EVEX_Vfmadd213ps_zmm_k1z_zmm_zmmm512b32_er = "vfmadd213ps",
        EVEX_Vfmadd213pd_xmm_k1z_xmm_xmmm128b64 = "vfmadd213pd",
        EVEX_Vfmadd213pd_ymm_k1z_ymm_ymmm256b64 = "vfmadd213pd",
        EVEX_Vfmadd213pd_zmm_k1z_zmm_zmmm512b64_er = "vfmadd213pd",
        EVEX_Vfmadd213ss_xmm_k1z_xmm_xmmm32_er = "vfmadd213ss",
        EVEX_Vfmadd213sd_xmm_k1z_xmm_xmmm64_er = "vfmadd213sd",
        EVEX_Vfmsub213ps_xmm_k1z_xmm_xmmm128b32 = "vfmsub213ps",
        EVEX_Vfmsub213ps_ymm_k1z_ymm_ymmm256b32 = "vfmsub213ps",
        EVEX_Vfmsub213ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsub213ps",
        EVEX_Vfmsub213pd_xmm_k1z_xmm_xmmm128b64 = "vfmsub213pd",
        EVEX_Vfmsub213pd_ymm_k1z_ymm_ymmm256b64 = "vfmsub213pd",
        EVEX_Vfmsub213pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsub213pd",
        EVEX_V4fnmaddps_zmm_k1z_zmmp3_m128 = "v4fnmaddps",
        EVEX_Vfmsub213ss_xmm_k1z_xmm_xmmm32_er = "vfmsub213ss",
        EVEX_Vfmsub213sd_xmm_k1z_xmm_xmmm64_er = "vfmsub213sd",
        EVEX_V4fnmaddss_xmm_k1z_xmmp3_m128 = "v4fnmaddss",
        EVEX_Vfnmadd213ps_xmm_k1z_xmm_xmmm128b32 = "vfnmadd213ps",
        EVEX_Vfnmadd213ps_ymm_k1z_ymm_ymmm256b32 = "vfnmadd213ps",
        EVEX_Vfnmadd213ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmadd213ps",
        EVEX_Vfnmadd213pd_xmm_k1z_xmm_xmmm128b64 = "vfnmadd213pd",
        EVEX_Vfnmadd213pd_ymm_k1z_ymm_ymmm256b64 = "vfnmadd213pd",
        EVEX_Vfnmadd213pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmadd213pd",
        EVEX_Vfnmadd213ss_xmm_k1z_xmm_xmmm32_er = "vfnmadd213ss",
        EVEX_Vfnmadd213sd_xmm_k1z_xmm_xmmm64_er = "vfnmadd213sd",
        EVEX_Vfnmsub213ps_xmm_k1z_xmm_xmmm128b32 = "vfnmsub213ps",
        EVEX_Vfnmsub213ps_ymm_k1z_ymm_ymmm256b32 = "vfnmsub213ps",
        EVEX_Vfnmsub213ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmsub213ps",
        EVEX_Vfnmsub213pd_xmm_k1z_xmm_xmmm128b64 = "vfnmsub213pd",
        EVEX_Vfnmsub213pd_ymm_k1z_ymm_ymmm256b64 = "vfnmsub213pd",
        EVEX_Vfnmsub213pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmsub213pd",
        EVEX_Vfnmsub213ss_xmm_k1z_xmm_xmmm32_er = "vfnmsub213ss",
        EVEX_Vfnmsub213sd_xmm_k1z_xmm_xmmm64_er = "vfnmsub213sd",
        EVEX_Vpmadd52luq_xmm_k1z_xmm_xmmm128b64 = "vpmadd52luq",
        EVEX_Vpmadd52luq_ymm_k1z_ymm_ymmm256b64 = "vpmadd52luq",
        EVEX_Vpmadd52luq_zmm_k1z_zmm_zmmm512b64 = "vpmadd52luq",
        EVEX_Vpmadd52huq_xmm_k1z_xmm_xmmm128b64 = "vpmadd52huq",
        EVEX_Vpmadd52huq_ymm_k1z_ymm_ymmm256b64 = "vpmadd52huq",
        EVEX_Vpmadd52huq_zmm_k1z_zmm_zmmm512b64 = "vpmadd52huq",
        EVEX_Vfmaddsub231ps_xmm_k1z_xmm_xmmm128b32 = "vfmaddsub231ps",
        EVEX_Vfmaddsub231ps_ymm_k1z_ymm_ymmm256b32 = "vfmaddsub231ps",
        EVEX_Vfmaddsub231ps_zmm_k1z_zmm_zmmm512b32_er = "vfmaddsub231ps",
        EVEX_Vfmaddsub231pd_xmm_k1z_xmm_xmmm128b64 = "vfmaddsub231pd",
        EVEX_Vfmaddsub231pd_ymm_k1z_ymm_ymmm256b64 = "vfmaddsub231pd",
        EVEX_Vfmaddsub231pd_zmm_k1z_zmm_zmmm512b64_er = "vfmaddsub231pd",
        EVEX_Vfmsubadd231ps_xmm_k1z_xmm_xmmm128b32 = "vfmsubadd231ps",
        EVEX_Vfmsubadd231ps_ymm_k1z_ymm_ymmm256b32 = "vfmsubadd231ps",
        EVEX_Vfmsubadd231ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsubadd231ps",
        EVEX_Vfmsubadd231pd_xmm_k1z_xmm_xmmm128b64 = "vfmsubadd231pd",
        EVEX_Vfmsubadd231pd_ymm_k1z_ymm_ymmm256b64 = "vfmsubadd231pd",
        EVEX_Vfmsubadd231pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsubadd231pd",
        EVEX_Vfmadd231ps_xmm_k1z_xmm_xmmm128b32 = "vfmadd231ps",
        EVEX_Vfmadd231ps_ymm_k1z_ymm_ymmm256b32 = "vfmadd231ps",
        EVEX_Vfmadd231ps_zmm_k1z_zmm_zmmm512b32_er = "vfmadd231ps",
        EVEX_Vfmadd231pd_xmm_k1z_xmm_xmmm128b64 = "vfmadd231pd",
        EVEX_Vfmadd231pd_ymm_k1z_ymm_ymmm256b64 = "vfmadd231pd",
        EVEX_Vfmadd231pd_zmm_k1z_zmm_zmmm512b64_er = "vfmadd231pd",
        EVEX_Vfmadd231ss_xmm_k1z_xmm_xmmm32_er = "vfmadd231ss",
        EVEX_Vfmadd231sd_xmm_k1z_xmm_xmmm64_er = "vfmadd231sd",
        EVEX_Vfmsub231ps_xmm_k1z_xmm_xmmm128b32 = "vfmsub231ps",
        EVEX_Vfmsub231ps_ymm_k1z_ymm_ymmm256b32 = "vfmsub231ps",
        EVEX_Vfmsub231ps_zmm_k1z_zmm_zmmm512b32_er = "vfmsub231ps",
        EVEX_Vfmsub231pd_xmm_k1z_xmm_xmmm128b64 = "vfmsub231pd",
        EVEX_Vfmsub231pd_ymm_k1z_ymm_ymmm256b64 = "vfmsub231pd",
        EVEX_Vfmsub231pd_zmm_k1z_zmm_zmmm512b64_er = "vfmsub231pd",
        EVEX_Vfmsub231ss_xmm_k1z_xmm_xmmm32_er = "vfmsub231ss",
        EVEX_Vfmsub231sd_xmm_k1z_xmm_xmmm64_er = "vfmsub231sd",
        EVEX_Vfnmadd231ps_xmm_k1z_xmm_xmmm128b32 = "vfnmadd231ps",
        EVEX_Vfnmadd231ps_ymm_k1z_ymm_ymmm256b32 = "vfnmadd231ps",
        EVEX_Vfnmadd231ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmadd231ps",
        EVEX_Vfnmadd231pd_xmm_k1z_xmm_xmmm128b64 = "vfnmadd231pd",
        EVEX_Vfnmadd231pd_ymm_k1z_ymm_ymmm256b64 = "vfnmadd231pd",
        EVEX_Vfnmadd231pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmadd231pd",
        EVEX_Vfnmadd231ss_xmm_k1z_xmm_xmmm32_er = "vfnmadd231ss",
        EVEX_Vfnmadd231sd_xmm_k1z_xmm_xmmm64_er = "vfnmadd231sd",
        EVEX_Vfnmsub231ps_xmm_k1z_xmm_xmmm128b32 = "vfnmsub231ps",
        EVEX_Vfnmsub231ps_ymm_k1z_ymm_ymmm256b32 = "vfnmsub231ps",
        EVEX_Vfnmsub231ps_zmm_k1z_zmm_zmmm512b32_er = "vfnmsub231ps",
        EVEX_Vfnmsub231pd_xmm_k1z_xmm_xmmm128b64 = "vfnmsub231pd",
        EVEX_Vfnmsub231pd_ymm_k1z_ymm_ymmm256b64 = "vfnmsub231pd",
        EVEX_Vfnmsub231pd_zmm_k1z_zmm_zmmm512b64_er = "vfnmsub231pd",
        EVEX_Vfnmsub231ss_xmm_k1z_xmm_xmmm32_er = "vfnmsub231ss",
        EVEX_Vfnmsub231sd_xmm_k1z_xmm_xmmm64_er = "vfnmsub231sd",
        EVEX_Vpconflictd_xmm_k1z_xmmm128b32 = "vpconflictd",
        EVEX_Vpconflictd_ymm_k1z_ymmm256b32 = "vpconflictd",
        EVEX_Vpconflictd_zmm_k1z_zmmm512b32 = "vpconflictd",
        EVEX_Vpconflictq_xmm_k1z_xmmm128b64 = "vpconflictq",
        EVEX_Vpconflictq_ymm_k1z_ymmm256b64 = "vpconflictq",
        EVEX_Vpconflictq_zmm_k1z_zmmm512b64 = "vpconflictq",
        EVEX_Vgatherpf0dps_vm32z_k1 = "vgatherpf0dps",
        EVEX_Vgatherpf0dpd_vm32y_k1 = "vgatherpf0dpd",
        EVEX_Vgatherpf1dps_vm32z_k1 = "vgatherpf1dps",
        EVEX_Vgatherpf1dpd_vm32y_k1 = "vgatherpf1dpd",
        EVEX_Vscatterpf0dps_vm32z_k1 = "vscatterpf0dps",
        EVEX_Vscatterpf0dpd_vm32y_k1 = "vscatterpf0dpd",
        EVEX_Vscatterpf1dps_vm32z_k1 = "vscatterpf1dps",
        EVEX_Vscatterpf1dpd_vm32y_k1 = "vscatterpf1dpd",
        EVEX_Vgatherpf0qps_vm64z_k1 = "vgatherpf0qps",
        EVEX_Vgatherpf0qpd_vm64z_k1 = "vgatherpf0qpd",
        EVEX_Vgatherpf1qps_vm64z_k1 = "vgatherpf1qps",
        EVEX_Vgatherpf1qpd_vm64z_k1 = "vgatherpf1qpd",
        EVEX_Vscatterpf0qps_vm64z_k1 = "vscatterpf0qps",
        EVEX_Vscatterpf0qpd_vm64z_k1 = "vscatterpf0qpd",
        EVEX_Vscatterpf1qps_vm64z_k1 = "vscatterpf1qps",
        EVEX_Vscatterpf1qpd_vm64z_k1 = "vscatterpf1qpd",
        EVEX_Vexp2ps_zmm_k1z_zmmm512b32_sae = "vexp2ps",
        EVEX_Vexp2pd_zmm_k1z_zmmm512b64_sae = "vexp2pd",
        EVEX_Vrcp28ps_zmm_k1z_zmmm512b32_sae = "vrcp28ps",
        EVEX_Vrcp28pd_zmm_k1z_zmmm512b64_sae = "vrcp28pd",
        EVEX_Vrcp28ss_xmm_k1z_xmm_xmmm32_sae = "vrcp28ss",
        EVEX_Vrcp28sd_xmm_k1z_xmm_xmmm64_sae = "vrcp28sd",
        EVEX_Vrsqrt28ps_zmm_k1z_zmmm512b32_sae = "vrsqrt28ps",
        EVEX_Vrsqrt28pd_zmm_k1z_zmmm512b64_sae = "vrsqrt28pd",
        EVEX_Vrsqrt28ss_xmm_k1z_xmm_xmmm32_sae = "vrsqrt28ss",
        EVEX_Vrsqrt28sd_xmm_k1z_xmm_xmmm64_sae = "vrsqrt28sd",
        EVEX_Vpermq_ymm_k1z_ymmm256b64_imm8 = "vpermq",
        EVEX_Vpermq_zmm_k1z_zmmm512b64_imm8 = "vpermq",
        EVEX_Vpermpd_ymm_k1z_ymmm256b64_imm8 = "vpermpd",
        EVEX_Vpermpd_zmm_k1z_zmmm512b64_imm8 = "vpermpd",
        EVEX_Valignd_xmm_k1z_xmm_xmmm128b32_imm8 = "valignd",
        EVEX_Valignd_ymm_k1z_ymm_ymmm256b32_imm8 = "valignd",
        EVEX_Valignd_zmm_k1z_zmm_zmmm512b32_imm8 = "valignd",
        EVEX_Valignq_xmm_k1z_xmm_xmmm128b64_imm8 = "valignq",
        EVEX_Valignq_ymm_k1z_ymm_ymmm256b64_imm8 = "valignq",
        EVEX_Valignq_zmm_k1z_zmm_zmmm512b64_imm8 = "valignq",
        EVEX_Vpermilps_xmm_k1z_xmmm128b32_imm8 = "vpermilps",
        EVEX_Vpermilps_ymm_k1z_ymmm256b32_imm8 = "vpermilps",
        EVEX_Vpermilps_zmm_k1z_zmmm512b32_imm8 = "vpermilps",
        EVEX_Vpermilpd_xmm_k1z_xmmm128b64_imm8 = "vpermilpd",
        EVEX_Vpermilpd_ymm_k1z_ymmm256b64_imm8 = "vpermilpd",
        EVEX_Vpermilpd_zmm_k1z_zmmm512b64_imm8 = "vpermilpd",
        EVEX_Vrndscaleps_xmm_k1z_xmmm128b32_imm8 = "vrndscaleps",
        EVEX_Vrndscaleps_ymm_k1z_ymmm256b32_imm8 = "vrndscaleps",
        EVEX_Vrndscaleps_zmm_k1z_zmmm512b32_imm8_sae = "vrndscaleps",
        EVEX_Vrndscalepd_xmm_k1z_xmmm128b64_imm8 = "vrndscalepd",
        EVEX_Vrndscalepd_ymm_k1z_ymmm256b64_imm8 = "vrndscalepd",
        EVEX_Vrndscalepd_zmm_k1z_zmmm512b64_imm8_sae = "vrndscalepd",
        EVEX_Vrndscaless_xmm_k1z_xmm_xmmm32_imm8_sae = "vrndscaless",
        EVEX_Vrndscalesd_xmm_k1z_xmm_xmmm64_imm8_sae = "vrndscalesd",
        EVEX_Vpalignr_xmm_k1z_xmm_xmmm128_imm8 = "vpalignr",
        EVEX_Vpalignr_ymm_k1z_ymm_ymmm256_imm8 = "vpalignr",
        EVEX_Vpalignr_zmm_k1z_zmm_zmmm512_imm8 = "vpalignr",
        EVEX_Vpextrb_r32m8_xmm_imm8 = "vpextrb",
        EVEX_Vpextrb_r64m8_xmm_imm8 = "vpextrb",
        EVEX_Vpextrw_r32m16_xmm_imm8 = "vpextrw",
        EVEX_Vpextrw_r64m16_xmm_imm8 = "vpextrw",
        EVEX_Vpextrd_rm32_xmm_imm8 = "vpextrd",
        EVEX_Vpextrq_rm64_xmm_imm8 = "vpextrq",
        EVEX_Vextractps_rm32_xmm_imm8 = "vextractps",
        EVEX_Vextractps_rm64_xmm_imm8 = "vextractps",
        EVEX_Vinsertf32x4_ymm_k1z_ymm_xmmm128_imm8 = "vinsertf32x4",
        EVEX_Vinsertf32x4_zmm_k1z_zmm_xmmm128_imm8 = "vinsertf32x4",
        EVEX_Vinsertf64x2_ymm_k1z_ymm_xmmm128_imm8 = "vinsertf64x2",
        EVEX_Vinsertf64x2_zmm_k1z_zmm_xmmm128_imm8 = "vinsertf64x2",
        EVEX_Vextractf32x4_xmmm128_k1z_ymm_imm8 = "vextractf32x4",
        EVEX_Vextractf32x4_xmmm128_k1z_zmm_imm8 = "vextractf32x4",
        EVEX_Vextractf64x2_xmmm128_k1z_ymm_imm8 = "vextractf64x2",
        EVEX_Vextractf64x2_xmmm128_k1z_zmm_imm8 = "vextractf64x2",
        EVEX_Vinsertf32x8_zmm_k1z_zmm_ymmm256_imm8 = "vinsertf32x8",
        EVEX_Vinsertf64x4_zmm_k1z_zmm_ymmm256_imm8 = "vinsertf64x4",
        EVEX_Vextractf32x8_ymmm256_k1z_zmm_imm8 = "vextractf32x8",
        EVEX_Vextractf64x4_ymmm256_k1z_zmm_imm8 = "vextractf64x4",
        EVEX_Vcvtps2ph_xmmm64_k1z_xmm_imm8 = "vcvtps2ph",
        EVEX_Vcvtps2ph_xmmm128_k1z_ymm_imm8 = "vcvtps2ph",
        EVEX_Vcvtps2ph_ymmm256_k1z_zmm_imm8_sae = "vcvtps2ph",
        EVEX_Vpcmpud_kr_k1_xmm_xmmm128b32_imm8 = "vpcmpud",
        EVEX_Vpcmpud_kr_k1_ymm_ymmm256b32_imm8 = "vpcmpud",
        EVEX_Vpcmpud_kr_k1_zmm_zmmm512b32_imm8 = "vpcmpud",
        EVEX_Vpcmpuq_kr_k1_xmm_xmmm128b64_imm8 = "vpcmpuq",
        EVEX_Vpcmpuq_kr_k1_ymm_ymmm256b64_imm8 = "vpcmpuq",
        EVEX_Vpcmpuq_kr_k1_zmm_zmmm512b64_imm8 = "vpcmpuq",
        EVEX_Vpcmpd_kr_k1_xmm_xmmm128b32_imm8 = "vpcmpd",
        EVEX_Vpcmpd_kr_k1_ymm_ymmm256b32_imm8 = "vpcmpd",
        EVEX_Vpcmpd_kr_k1_zmm_zmmm512b32_imm8 = "vpcmpd",
        EVEX_Vpcmpq_kr_k1_xmm_xmmm128b64_imm8 = "vpcmpq",
        EVEX_Vpcmpq_kr_k1_ymm_ymmm256b64_imm8 = "vpcmpq",
        EVEX_Vpcmpq_kr_k1_zmm_zmmm512b64_imm8 = "vpcmpq",
        EVEX_Vpinsrb_xmm_xmm_r32m8_imm8 = "vpinsrb",
        EVEX_Vpinsrb_xmm_xmm_r64m8_imm8 = "vpinsrb",
        EVEX_Vinsertps_xmm_xmm_xmmm32_imm8 = "vinsertps",
        EVEX_Vpinsrd_xmm_xmm_rm32_imm8 = "vpinsrd",
        EVEX_Vpinsrq_xmm_xmm_rm64_imm8 = "vpinsrq",
        EVEX_Vshuff32x4_ymm_k1z_ymm_ymmm256b32_imm8 = "vshuff32x4",
        EVEX_Vshuff32x4_zmm_k1z_zmm_zmmm512b32_imm8 = "vshuff32x4",
        EVEX_Vshuff64x2_ymm_k1z_ymm_ymmm256b64_imm8 = "vshuff64x2",
        EVEX_Vshuff64x2_zmm_k1z_zmm_zmmm512b64_imm8 = "vshuff64x2",
        EVEX_Vpternlogd_xmm_k1z_xmm_xmmm128b32_imm8 = "vpternlogd",
        EVEX_Vpternlogd_ymm_k1z_ymm_ymmm256b32_imm8 = "vpternlogd",
        EVEX_Vpternlogd_zmm_k1z_zmm_zmmm512b32_imm8 = "vpternlogd",
        EVEX_Vpternlogq_xmm_k1z_xmm_xmmm128b64_imm8 = "vpternlogq",
        EVEX_Vpternlogq_ymm_k1z_ymm_ymmm256b64_imm8 = "vpternlogq",
        EVEX_Vpternlogq_zmm_k1z_zmm_zmmm512b64_imm8 = "vpternlogq",
        EVEX_Vgetmantps_xmm_k1z_xmmm128b32_imm8 = "vgetmantps",
        EVEX_Vgetmantps_ymm_k1z_ymmm256b32_imm8 = "vgetmantps",
        EVEX_Vgetmantps_zmm_k1z_zmmm512b32_imm8_sae = "vgetmantps",
        EVEX_Vgetmantpd_xmm_k1z_xmmm128b64_imm8 = "vgetmantpd",
        EVEX_Vgetmantpd_ymm_k1z_ymmm256b64_imm8 = "vgetmantpd",
        EVEX_Vgetmantpd_zmm_k1z_zmmm512b64_imm8_sae = "vgetmantpd",
        EVEX_Vgetmantss_xmm_k1z_xmm_xmmm32_imm8_sae = "vgetmantss",
        EVEX_Vgetmantsd_xmm_k1z_xmm_xmmm64_imm8_sae = "vgetmantsd",
        EVEX_Vinserti32x4_ymm_k1z_ymm_xmmm128_imm8 = "vinserti32x4",
        EVEX_Vinserti32x4_zmm_k1z_zmm_xmmm128_imm8 = "vinserti32x4",
        EVEX_Vinserti64x2_ymm_k1z_ymm_xmmm128_imm8 = "vinserti64x2",
        EVEX_Vinserti64x2_zmm_k1z_zmm_xmmm128_imm8 = "vinserti64x2",
        EVEX_Vextracti32x4_xmmm128_k1z_ymm_imm8 = "vextracti32x4",
        EVEX_Vextracti32x4_xmmm128_k1z_zmm_imm8 = "vextracti32x4",
        EVEX_Vextracti64x2_xmmm128_k1z_ymm_imm8 = "vextracti64x2",
        EVEX_Vextracti64x2_xmmm128_k1z_zmm_imm8 = "vextracti64x2",
        EVEX_Vinserti32x8_zmm_k1z_zmm_ymmm256_imm8 = "vinserti32x8",
        EVEX_Vinserti64x4_zmm_k1z_zmm_ymmm256_imm8 = "vinserti64x4",
        EVEX_Vextracti32x8_ymmm256_k1z_zmm_imm8 = "vextracti32x8",
        EVEX_Vextracti64x4_ymmm256_k1z_zmm_imm8 = "vextracti64x4",
        EVEX_Vpcmpub_kr_k1_xmm_xmmm128_imm8 = "vpcmpub",
        EVEX_Vpcmpub_kr_k1_ymm_ymmm256_imm8 = "vpcmpub",
        EVEX_Vpcmpub_kr_k1_zmm_zmmm512_imm8 = "vpcmpub",
        EVEX_Vpcmpuw_kr_k1_xmm_xmmm128_imm8 = "vpcmpuw",
        EVEX_Vpcmpuw_kr_k1_ymm_ymmm256_imm8 = "vpcmpuw",
        EVEX_Vpcmpuw_kr_k1_zmm_zmmm512_imm8 = "vpcmpuw",
        EVEX_Vpcmpb_kr_k1_xmm_xmmm128_imm8 = "vpcmpb",
        EVEX_Vpcmpb_kr_k1_ymm_ymmm256_imm8 = "vpcmpb",
        EVEX_Vpcmpb_kr_k1_zmm_zmmm512_imm8 = "vpcmpb",
        EVEX_Vpcmpw_kr_k1_xmm_xmmm128_imm8 = "vpcmpw",
        EVEX_Vpcmpw_kr_k1_ymm_ymmm256_imm8 = "vpcmpw",
        EVEX_Vpcmpw_kr_k1_zmm_zmmm512_imm8 = "vpcmpw",
        EVEX_Vdbpsadbw_xmm_k1z_xmm_xmmm128_imm8 = "vdbpsadbw",
        EVEX_Vdbpsadbw_ymm_k1z_ymm_ymmm256_imm8 = "vdbpsadbw",
        EVEX_Vdbpsadbw_zmm_k1z_zmm_zmmm512_imm8 = "vdbpsadbw",
        EVEX_Vshufi32x4_ymm_k1z_ymm_ymmm256b32_imm8 = "vshufi32x4",
        EVEX_Vshufi32x4_zmm_k1z_zmm_zmmm512b32_imm8 = "vshufi32x4",
        EVEX_Vshufi64x2_ymm_k1z_ymm_ymmm256b64_imm8 = "vshufi64x2",
        EVEX_Vshufi64x2_zmm_k1z_zmm_zmmm512b64_imm8 = "vshufi64x2",
        EVEX_Vrangeps_xmm_k1z_xmm_xmmm128b32_imm8 = "vrangeps",
        EVEX_Vrangeps_ymm_k1z_ymm_ymmm256b32_imm8 = "vrangeps",
        EVEX_Vrangeps_zmm_k1z_zmm_zmmm512b32_imm8_sae = "vrangeps",
        EVEX_Vrangepd_xmm_k1z_xmm_xmmm128b64_imm8 = "vrangepd",
        EVEX_Vrangepd_ymm_k1z_ymm_ymmm256b64_imm8 = "vrangepd",
        EVEX_Vrangepd_zmm_k1z_zmm_zmmm512b64_imm8_sae = "vrangepd",
        EVEX_Vrangess_xmm_k1z_xmm_xmmm32_imm8_sae = "vrangess",
        EVEX_Vrangesd_xmm_k1z_xmm_xmmm64_imm8_sae = "vrangesd",
        EVEX_Vfixupimmps_xmm_k1z_xmm_xmmm128b32_imm8 = "vfixupimmps",
        EVEX_Vfixupimmps_ymm_k1z_ymm_ymmm256b32_imm8 = "vfixupimmps",
        EVEX_Vfixupimmps_zmm_k1z_zmm_zmmm512b32_imm8_sae = "vfixupimmps",
        EVEX_Vfixupimmpd_xmm_k1z_xmm_xmmm128b64_imm8 = "vfixupimmpd",
        EVEX_Vfixupimmpd_ymm_k1z_ymm_ymmm256b64_imm8 = "vfixupimmpd",
        EVEX_Vfixupimmpd_zmm_k1z_zmm_zmmm512b64_imm8_sae = "vfixupimmpd",
        EVEX_Vfixupimmss_xmm_k1z_xmm_xmmm32_imm8_sae = "vfixupimmss",
        EVEX_Vfixupimmsd_xmm_k1z_xmm_xmmm64_imm8_sae = "vfixupimmsd",
        EVEX_Vreduceps_xmm_k1z_xmmm128b32_imm8 = "vreduceps",
        EVEX_Vreduceps_ymm_k1z_ymmm256b32_imm8 = "vreduceps",
        EVEX_Vreduceps_zmm_k1z_zmmm512b32_imm8_sae = "vreduceps",
        EVEX_Vreducepd_xmm_k1z_xmmm128b64_imm8 = "vreducepd",
        EVEX_Vreducepd_ymm_k1z_ymmm256b64_imm8 = "vreducepd",
        EVEX_Vreducepd_zmm_k1z_zmmm512b64_imm8_sae = "vreducepd",
        EVEX_Vreducess_xmm_k1z_xmm_xmmm32_imm8_sae = "vreducess",
        EVEX_Vreducesd_xmm_k1z_xmm_xmmm64_imm8_sae = "vreducesd",
        EVEX_Vfpclassps_kr_k1_xmmm128b32_imm8 = "vfpclassps",
        EVEX_Vfpclassps_kr_k1_ymmm256b32_imm8 = "vfpclassps",
        EVEX_Vfpclassps_kr_k1_zmmm512b32_imm8 = "vfpclassps",
        EVEX_Vfpclasspd_kr_k1_xmmm128b64_imm8 = "vfpclasspd",
        EVEX_Vfpclasspd_kr_k1_ymmm256b64_imm8 = "vfpclasspd",
        EVEX_Vfpclasspd_kr_k1_zmmm512b64_imm8 = "vfpclasspd",
        EVEX_Vfpclassss_kr_k1_xmmm32_imm8 = "vfpclassss",
        EVEX_Vfpclasssd_kr_k1_xmmm64_imm8 = "vfpclasssd",
        EVEX_Vpdpbusd_xmm_k1z_xmm_xmmm128b32 = "vpdpbusd",
        EVEX_Vpdpbusd_ymm_k1z_ymm_ymmm256b32 = "vpdpbusd",
        EVEX_Vpdpbusd_zmm_k1z_zmm_zmmm512b32 = "vpdpbusd",
        EVEX_Vpdpbusds_xmm_k1z_xmm_xmmm128b32 = "vpdpbusds",
        EVEX_Vpdpbusds_ymm_k1z_ymm_ymmm256b32 = "vpdpbusds",
        EVEX_Vpdpbusds_zmm_k1z_zmm_zmmm512b32 = "vpdpbusds",
        EVEX_Vpdpwssd_xmm_k1z_xmm_xmmm128b32 = "vpdpwssd",
        EVEX_Vpdpwssd_ymm_k1z_ymm_ymmm256b32 = "vpdpwssd",
        EVEX_Vpdpwssd_zmm_k1z_zmm_zmmm512b32 = "vpdpwssd",
        EVEX_Vpdpwssds_xmm_k1z_xmm_xmmm128b32 = "vpdpwssds",
        EVEX_Vpdpwssds_ymm_k1z_ymm_ymmm256b32 = "vpdpwssds",
        EVEX_Vpdpwssds_zmm_k1z_zmm_zmmm512b32 = "vpdpwssds",
        EVEX_Vpopcntb_xmm_k1z_xmmm128 = "vpopcntb",
        EVEX_Vpopcntb_ymm_k1z_ymmm256 = "vpopcntb",
        EVEX_Vpopcntb_zmm_k1z_zmmm512 = "vpopcntb",
        EVEX_Vpopcntw_xmm_k1z_xmmm128 = "vpopcntw",
        EVEX_Vpopcntw_ymm_k1z_ymmm256 = "vpopcntw",
        EVEX_Vpopcntw_zmm_k1z_zmmm512 = "vpopcntw",
        EVEX_Vpopcntd_xmm_k1z_xmmm128b32 = "vpopcntd",
        EVEX_Vpopcntd_ymm_k1z_ymmm256b32 = "vpopcntd",
        EVEX_Vpopcntd_zmm_k1z_zmmm512b32 = "vpopcntd",
        EVEX_Vpopcntq_xmm_k1z_xmmm128b64 = "vpopcntq",
        EVEX_Vpopcntq_ymm_k1z_ymmm256b64 = "vpopcntq",
        EVEX_Vpopcntq_zmm_k1z_zmmm512b64 = "vpopcntq",
        EVEX_Vpexpandb_xmm_k1z_xmmm128 = "vpexpandb",
        EVEX_Vpexpandb_ymm_k1z_ymmm256 = "vpexpandb",
        EVEX_Vpexpandb_zmm_k1z_zmmm512 = "vpexpandb",
        EVEX_Vpexpandw_xmm_k1z_xmmm128 = "vpexpandw",
        EVEX_Vpexpandw_ymm_k1z_ymmm256 = "vpexpandw",
        EVEX_Vpexpandw_zmm_k1z_zmmm512 = "vpexpandw",
        EVEX_Vpcompressb_xmmm128_k1z_xmm = "vpcompressb",
        EVEX_Vpcompressb_ymmm256_k1z_ymm = "vpcompressb",
        EVEX_Vpcompressb_zmmm512_k1z_zmm = "vpcompressb",
        EVEX_Vpcompressw_xmmm128_k1z_xmm = "vpcompressw",
        EVEX_Vpcompressw_ymmm256_k1z_ymm = "vpcompressw",
        EVEX_Vpcompressw_zmmm512_k1z_zmm = "vpcompressw",
        EVEX_Vpshldvw_xmm_k1z_xmm_xmmm128 = "vpshldvw",
        EVEX_Vpshldvw_ymm_k1z_ymm_ymmm256 = "vpshldvw",
        EVEX_Vpshldvw_zmm_k1z_zmm_zmmm512 = "vpshldvw",
        EVEX_Vpshldvd_xmm_k1z_xmm_xmmm128b32 = "vpshldvd",
        EVEX_Vpshldvd_ymm_k1z_ymm_ymmm256b32 = "vpshldvd",
        EVEX_Vpshldvd_zmm_k1z_zmm_zmmm512b32 = "vpshldvd",
        EVEX_Vpshldvq_xmm_k1z_xmm_xmmm128b64 = "vpshldvq",
        EVEX_Vpshldvq_ymm_k1z_ymm_ymmm256b64 = "vpshldvq",
        EVEX_Vpshldvq_zmm_k1z_zmm_zmmm512b64 = "vpshldvq",
        EVEX_Vpshrdvw_xmm_k1z_xmm_xmmm128 = "vpshrdvw",
        EVEX_Vpshrdvw_ymm_k1z_ymm_ymmm256 = "vpshrdvw",
        EVEX_Vpshrdvw_zmm_k1z_zmm_zmmm512 = "vpshrdvw",
        EVEX_Vpshrdvd_xmm_k1z_xmm_xmmm128b32 = "vpshrdvd",
        EVEX_Vpshrdvd_ymm_k1z_ymm_ymmm256b32 = "vpshrdvd",
        EVEX_Vpshrdvd_zmm_k1z_zmm_zmmm512b32 = "vpshrdvd",
        EVEX_Vpshrdvq_xmm_k1z_xmm_xmmm128b64 = "vpshrdvq",
        EVEX_Vpshrdvq_ymm_k1z_ymm_ymmm256b64 = "vpshrdvq",
        EVEX_Vpshrdvq_zmm_k1z_zmm_zmmm512b64 = "vpshrdvq",
        EVEX_Vpshufbitqmb_kr_k1_xmm_xmmm128 = "vpshufbitqmb",
        EVEX_Vpshufbitqmb_kr_k1_ymm_ymmm256 = "vpshufbitqmb",
        EVEX_Vpshufbitqmb_kr_k1_zmm_zmmm512 = "vpshufbitqmb",
        EVEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 = "vpclmulqdq",
        EVEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8 = "vpclmulqdq",
        EVEX_Vpclmulqdq_zmm_zmm_zmmm512_imm8 = "vpclmulqdq",
        EVEX_Vpshldw_xmm_k1z_xmm_xmmm128_imm8 = "vpshldw",
        EVEX_Vpshldw_ymm_k1z_ymm_ymmm256_imm8 = "vpshldw",
        EVEX_Vpshldw_zmm_k1z_zmm_zmmm512_imm8 = "vpshldw",
        EVEX_Vpshldd_xmm_k1z_xmm_xmmm128b32_imm8 = "vpshldd",
        EVEX_Vpshldd_ymm_k1z_ymm_ymmm256b32_imm8 = "vpshldd",
        EVEX_Vpshldd_zmm_k1z_zmm_zmmm512b32_imm8 = "vpshldd",
        EVEX_Vpshldq_xmm_k1z_xmm_xmmm128b64_imm8 = "vpshldq",
        EVEX_Vpshldq_ymm_k1z_ymm_ymmm256b64_imm8 = "vpshldq",
        EVEX_Vpshldq_zmm_k1z_zmm_zmmm512b64_imm8 = "vpshldq",
        EVEX_Vpshrdw_xmm_k1z_xmm_xmmm128_imm8 = "vpshrdw",
        EVEX_Vpshrdw_ymm_k1z_ymm_ymmm256_imm8 = "vpshrdw",
        EVEX_Vpshrdw_zmm_k1z_zmm_zmmm512_imm8 = "vpshrdw",
        EVEX_Vpshrdd_xmm_k1z_xmm_xmmm128b32_imm8 = "vpshrdd",
        EVEX_Vpshrdd_ymm_k1z_ymm_ymmm256b32_imm8 = "vpshrdd",
        EVEX_Vpshrdd_zmm_k1z_zmm_zmmm512b32_imm8 = "vpshrdd",
        EVEX_Vpshrdq_xmm_k1z_xmm_xmmm128b64_imm8 = "vpshrdq",
        EVEX_Vpshrdq_ymm_k1z_ymm_ymmm256b64_imm8 = "vpshrdq",
        EVEX_Vpshrdq_zmm_k1z_zmm_zmmm512b64_imm8 = "vpshrdq",
        Nopw = "nop",
        Nopd = "nop",
        Nopq = "nop",
        Pause = "pause",
        Add_rm8_r8 = "add",
        Add_rm16_r16 = "add",
        Add_rm32_r32 = "add",
        Add_rm64_r64 = "add",
        Add_r8_rm8 = "add",
        Add_r16_rm16 = "add",
        Add_r32_rm32 = "add",
        Add_r64_rm64 = "add",
        Add_AL_imm8 = "add",
        Add_AX_imm16 = "add",
        Add_EAX_imm32 = "add",
        Add_RAX_imm32 = "add",
        Or_rm8_r8 = "or",
        Or_rm16_r16 = "or",
        Or_rm32_r32 = "or",
        Or_rm64_r64 = "or",
        Or_r8_rm8 = "or",
        Or_r16_rm16 = "or",
        Or_r32_rm32 = "or",
        Or_r64_rm64 = "or",
        Or_AL_imm8 = "or",
        Or_AX_imm16 = "or",
        Or_EAX_imm32 = "or",
        Or_RAX_imm32 = "or",
        Adc_rm8_r8 = "adc",
        Adc_rm16_r16 = "adc",
        Adc_rm32_r32 = "adc",
        Adc_rm64_r64 = "adc",
        Adc_r8_rm8 = "adc",
        Adc_r16_rm16 = "adc",
        Adc_r32_rm32 = "adc",
        Adc_r64_rm64 = "adc",
        Adc_AL_imm8 = "adc",
        Adc_AX_imm16 = "adc",
        Adc_EAX_imm32 = "adc",
        Adc_RAX_imm32 = "adc",
        Sbb_rm8_r8 = "sbb",
        Sbb_rm16_r16 = "sbb",
        Sbb_rm32_r32 = "sbb",
        Sbb_rm64_r64 = "sbb",
        Sbb_r8_rm8 = "sbb",
        Sbb_r16_rm16 = "sbb",
        Sbb_r32_rm32 = "sbb",
        Sbb_r64_rm64 = "sbb",
        Sbb_AL_imm8 = "sbb",
        Sbb_AX_imm16 = "sbb",
        Sbb_EAX_imm32 = "sbb",
        Sbb_RAX_imm32 = "sbb",
        And_rm8_r8 = "and",
        And_rm16_r16 = "and",
        And_rm32_r32 = "and",
        And_rm64_r64 = "and",
        And_r8_rm8 = "and",
        And_r16_rm16 = "and",
        And_r32_rm32 = "and",
        And_r64_rm64 = "and",
        And_AL_imm8 = "and",
        And_AX_imm16 = "and",
        And_EAX_imm32 = "and",
        And_RAX_imm32 = "and",
        Sub_rm8_r8 = "sub",
        Sub_rm16_r16 = "sub",
        Sub_rm32_r32 = "sub",
        Sub_rm64_r64 = "sub",
        Sub_r8_rm8 = "sub",
        Sub_r16_rm16 = "sub",
        Sub_r32_rm32 = "sub",
        Sub_r64_rm64 = "sub",
        Sub_AL_imm8 = "sub",
        Sub_AX_imm16 = "sub",
        Sub_EAX_imm32 = "sub",
        Sub_RAX_imm32 = "sub",
        Xor_rm8_r8 = "xor",
        Xor_rm16_r16 = "xor",
        Xor_rm32_r32 = "xor",
        Xor_rm64_r64 = "xor",
        Xor_r8_rm8 = "xor",
        Xor_r16_rm16 = "xor",
        Xor_r32_rm32 = "xor",
        Xor_r64_rm64 = "xor",
        Xor_AL_imm8 = "xor",
        Xor_AX_imm16 = "xor",
        Xor_EAX_imm32 = "xor",
        Xor_RAX_imm32 = "xor",
        Cmp_rm8_r8 = "cmp",
        Cmp_rm16_r16 = "cmp",
        Cmp_rm32_r32 = "cmp",
        Cmp_rm64_r64 = "cmp",
        Cmp_r8_rm8 = "cmp",
        Cmp_r16_rm16 = "cmp",
        Cmp_r32_rm32 = "cmp",
        Cmp_r64_rm64 = "cmp",
        Cmp_AL_imm8 = "cmp",
        Cmp_AX_imm16 = "cmp",
        Cmp_EAX_imm32 = "cmp",
        Cmp_RAX_imm32 = "cmp",
        Pushw_ES = "push",
        Pushd_ES = "push",
        Popw_ES = "pop",
        Popd_ES = "pop",
        Pushw_CS = "push",
        Pushd_CS = "push",
        Pushw_SS = "push",
        Pushd_SS = "push",
        Popw_SS = "pop",
        Popd_SS = "pop",
        Pushw_DS = "push",
        Pushd_DS = "push",
        Popw_DS = "pop",
        Popd_DS = "pop",
        Daa = "daa",
        Das = "das",
        Aaa = "aaa",
        Aas = "aas",
        Inc_r16 = "inc",
        Inc_r32 = "inc",
        Dec_r16 = "dec",
        Dec_r32 = "dec",
        Push_r16 = "push",
        Push_r32 = "push",
        Push_r64 = "push",
        Pop_r16 = "pop",
        Pop_r32 = "pop",
        Pop_r64 = "pop",
        Pushaw = "pusha",
        Pushad = "pushad",
        Popaw = "popa",
        Popad = "popad",
        Bound_r16_m1616 = "bound",
        Bound_r32_m3232 = "bound",
        Arpl_rm16_r16 = "arpl",
        Movsxd_r16_rm16 = "movsxd",
        Movsxd_r32_rm32 = "movsxd",
        Movsxd_r64_rm32 = "movsxd",
        Push_imm16 = "push",
        Pushd_imm32 = "push",
        Pushq_imm32 = "push",
        Imul_r16_rm16_imm16 = "imul",
        Imul_r32_rm32_imm32 = "imul",
        Imul_r64_rm64_imm32 = "imul",
        Pushw_imm8 = "push",
        Pushd_imm8 = "push",
        Pushq_imm8 = "push",
        Imul_r16_rm16_imm8 = "imul",
        Imul_r32_rm32_imm8 = "imul",
        Imul_r64_rm64_imm8 = "imul",
        Insb_m8_DX = "insb",
        Insw_m16_DX = "insw",
        Insd_m32_DX = "insd",
        Outsb_DX_m8 = "outsb",
        Outsw_DX_m16 = "outsw",
        Outsd_DX_m32 = "outsd",
        Jo_rel8_16 = "jo",
        Jo_rel8_32 = "jo",
        Jo_rel8_64 = "jo",
        Jno_rel8_16 = "jno",
        Jno_rel8_32 = "jno",
        Jno_rel8_64 = "jno",
        Jb_rel8_16 = "jb",
        Jb_rel8_32 = "jb",
        Jb_rel8_64 = "jb",
        Jae_rel8_16 = "jae",
        Jae_rel8_32 = "jae",
        Jae_rel8_64 = "jae",
        Je_rel8_16 = "je",
        Je_rel8_32 = "je",
        Je_rel8_64 = "je",
        Jne_rel8_16 = "jne",
        Jne_rel8_32 = "jne",
        Jne_rel8_64 = "jne",
        Jbe_rel8_16 = "jbe",
        Jbe_rel8_32 = "jbe",
        Jbe_rel8_64 = "jbe",
        Ja_rel8_16 = "ja",
        Ja_rel8_32 = "ja",
        Ja_rel8_64 = "ja",
        Js_rel8_16 = "js",
        Js_rel8_32 = "js",
        Js_rel8_64 = "js",
        Jns_rel8_16 = "jns",
        Jns_rel8_32 = "jns",
        Jns_rel8_64 = "jns",
        Jp_rel8_16 = "jp",
        Jp_rel8_32 = "jp",
        Jp_rel8_64 = "jp",
        Jnp_rel8_16 = "jnp",
        Jnp_rel8_32 = "jnp",
        Jnp_rel8_64 = "jnp",
        Jl_rel8_16 = "jl",
        Jl_rel8_32 = "jl",
        Jl_rel8_64 = "jl",
        Jge_rel8_16 = "jge",
        Jge_rel8_32 = "jge",
        Jge_rel8_64 = "jge",
        Jle_rel8_16 = "jle",
        Jle_rel8_32 = "jle",
        Jle_rel8_64 = "jle",
        Jg_rel8_16 = "jg",
        Jg_rel8_32 = "jg",
        Jg_rel8_64 = "jg",
        Add_rm8_imm8 = "add",
        Or_rm8_imm8 = "or",
        Adc_rm8_imm8 = "adc",
        Sbb_rm8_imm8 = "sbb",
        And_rm8_imm8 = "and",
        Sub_rm8_imm8 = "sub",
        Xor_rm8_imm8 = "xor",
        Cmp_rm8_imm8 = "cmp",
        Add_rm16_imm16 = "add",
        Add_rm32_imm32 = "add",
        Add_rm64_imm32 = "add",
        Or_rm16_imm16 = "or",
        Or_rm32_imm32 = "or",
        Or_rm64_imm32 = "or",
        Adc_rm16_imm16 = "adc",
        Adc_rm32_imm32 = "adc",
        Adc_rm64_imm32 = "adc",
        Sbb_rm16_imm16 = "sbb",
        Sbb_rm32_imm32 = "sbb",
        Sbb_rm64_imm32 = "sbb",
        And_rm16_imm16 = "and",
        And_rm32_imm32 = "and",
        And_rm64_imm32 = "and",
        Sub_rm16_imm16 = "sub",
        Sub_rm32_imm32 = "sub",
        Sub_rm64_imm32 = "sub",
        Xor_rm16_imm16 = "xor",
        Xor_rm32_imm32 = "xor",
        Xor_rm64_imm32 = "xor",
        Cmp_rm16_imm16 = "cmp",
        Cmp_rm32_imm32 = "cmp",
        Cmp_rm64_imm32 = "cmp",
        Add_rm8_imm8_82 = "add",
        Or_rm8_imm8_82 = "or",
        Adc_rm8_imm8_82 = "adc",
        Sbb_rm8_imm8_82 = "sbb",
        And_rm8_imm8_82 = "and",
        Sub_rm8_imm8_82 = "sub",
        Xor_rm8_imm8_82 = "xor",
        Cmp_rm8_imm8_82 = "cmp",
        Add_rm16_imm8 = "add",
        Add_rm32_imm8 = "add",
        Add_rm64_imm8 = "add",
        Or_rm16_imm8 = "or",
        Or_rm32_imm8 = "or",
        Or_rm64_imm8 = "or",
        Adc_rm16_imm8 = "adc",
        Adc_rm32_imm8 = "adc",
        Adc_rm64_imm8 = "adc",
        Sbb_rm16_imm8 = "sbb",
        Sbb_rm32_imm8 = "sbb",
        Sbb_rm64_imm8 = "sbb",
        And_rm16_imm8 = "and",
        And_rm32_imm8 = "and",
        And_rm64_imm8 = "and",
        Sub_rm16_imm8 = "sub",
        Sub_rm32_imm8 = "sub",
        Sub_rm64_imm8 = "sub",
        Xor_rm16_imm8 = "xor",
        Xor_rm32_imm8 = "xor",
        Xor_rm64_imm8 = "xor",
        Cmp_rm16_imm8 = "cmp",
        Cmp_rm32_imm8 = "cmp",
        Cmp_rm64_imm8 = "cmp",
        Test_rm8_r8 = "test",
        Test_rm16_r16 = "test",
        Test_rm32_r32 = "test",
        Test_rm64_r64 = "test",
        Xchg_rm8_r8 = "xchg",
        Xchg_rm16_r16 = "xchg",
        Xchg_rm32_r32 = "xchg",
        Xchg_rm64_r64 = "xchg",
        Mov_rm8_r8 = "mov",
        Mov_rm16_r16 = "mov",
        Mov_rm32_r32 = "mov",
        Mov_rm64_r64 = "mov",
        Mov_r8_rm8 = "mov",
        Mov_r16_rm16 = "mov",
        Mov_r32_rm32 = "mov",
        Mov_r64_rm64 = "mov",
        Mov_rm16_Sreg = "mov",
        Mov_r32m16_Sreg = "mov",
        Mov_r64m16_Sreg = "mov",
        Lea_r16_m = "lea",
        Lea_r32_m = "lea",
        Lea_r64_m = "lea",
        Mov_Sreg_rm16 = "mov",
        Mov_Sreg_r32m16 = "mov",
        Mov_Sreg_r64m16 = "mov",
        Pop_rm16 = "pop",
        Pop_rm32 = "pop",
        Pop_rm64 = "pop",
        Xchg_r16_AX = "xchg",
        Xchg_r32_EAX = "xchg",
        Xchg_r64_RAX = "xchg",
        Cbw = "cbw",
        Cwde = "cwde",
        Cdqe = "cdqe",
        Cwd = "cwd",
        Cdq = "cdq",
        Cqo = "cqo",
        Call_ptr1616 = "call",
        Call_ptr1632 = "call",
        Wait = "wait",
        Pushfw = "pushf",
        Pushfd = "pushfd",
        Pushfq = "pushfq",
        Popfw = "popf",
        Popfd = "popfd",
        Popfq = "popfq",
        Sahf = "sahf",
        Lahf = "lahf",
        Mov_AL_moffs8 = "mov",
        Mov_AX_moffs16 = "mov",
        Mov_EAX_moffs32 = "mov",
        Mov_RAX_moffs64 = "mov",
        Mov_moffs8_AL = "mov",
        Mov_moffs16_AX = "mov",
        Mov_moffs32_EAX = "mov",
        Mov_moffs64_RAX = "mov",
        Movsb_m8_m8 = "movsb",
        Movsw_m16_m16 = "movsw",
        Movsd_m32_m32 = "movsd",
        Movsq_m64_m64 = "movsq",
        Cmpsb_m8_m8 = "cmpsb",
        Cmpsw_m16_m16 = "cmpsw",
        Cmpsd_m32_m32 = "cmpsd",
        Cmpsq_m64_m64 = "cmpsq",
        Test_AL_imm8 = "test",
        Test_AX_imm16 = "test",
        Test_EAX_imm32 = "test",
        Test_RAX_imm32 = "test",
        Stosb_m8_AL = "stosb",
        Stosw_m16_AX = "stosw",
        Stosd_m32_EAX = "stosd",
        Stosq_m64_RAX = "stosq",
        Lodsb_AL_m8 = "lodsb",
        Lodsw_AX_m16 = "lodsw",
        Lodsd_EAX_m32 = "lodsd",
        Lodsq_RAX_m64 = "lodsq",
        Scasb_AL_m8 = "scasb",
        Scasw_AX_m16 = "scasw",
        Scasd_EAX_m32 = "scasd",
        Scasq_RAX_m64 = "scasq",
        Mov_r8_imm8 = "mov",
        Mov_r16_imm16 = "mov",
        Mov_r32_imm32 = "mov",
        Mov_r64_imm64 = "mov",
        Rol_rm8_imm8 = "rol",
        Ror_rm8_imm8 = "ror",
        Rcl_rm8_imm8 = "rcl",
        Rcr_rm8_imm8 = "rcr",
        Shl_rm8_imm8 = "shl",
        Shr_rm8_imm8 = "shr",
        Sal_rm8_imm8 = "sal",
        Sar_rm8_imm8 = "sar",
        Rol_rm16_imm8 = "rol",
        Rol_rm32_imm8 = "rol",
        Rol_rm64_imm8 = "rol",
        Ror_rm16_imm8 = "ror",
        Ror_rm32_imm8 = "ror",
        Ror_rm64_imm8 = "ror",
        Rcl_rm16_imm8 = "rcl",
        Rcl_rm32_imm8 = "rcl",
        Rcl_rm64_imm8 = "rcl",
        Rcr_rm16_imm8 = "rcr",
        Rcr_rm32_imm8 = "rcr",
        Rcr_rm64_imm8 = "rcr",
        Shl_rm16_imm8 = "shl",
        Shl_rm32_imm8 = "shl",
        Shl_rm64_imm8 = "shl",
        Shr_rm16_imm8 = "shr",
        Shr_rm32_imm8 = "shr",
        Shr_rm64_imm8 = "shr",
        Sal_rm16_imm8 = "sal",
        Sal_rm32_imm8 = "sal",
        Sal_rm64_imm8 = "sal",
        Sar_rm16_imm8 = "sar",
        Sar_rm32_imm8 = "sar",
        Sar_rm64_imm8 = "sar",
        Retnw_imm16 = "ret",
        Retnd_imm16 = "ret",
        Retnq_imm16 = "ret",
        Retnw = "ret",
        Retnd = "ret",
        Retnq = "ret",
        Les_r16_m1616 = "les",
        Les_r32_m1632 = "les",
        Lds_r16_m1616 = "lds",
        Lds_r32_m1632 = "lds",
        Mov_rm8_imm8 = "mov",
        Xabort_imm8 = "xabort",
        Mov_rm16_imm16 = "mov",
        Mov_rm32_imm32 = "mov",
        Mov_rm64_imm32 = "mov",
        Xbegin_rel16 = "xbegin",
        Xbegin_rel32 = "xbegin",
        Enterw_imm16_imm8 = "enter",
        Enterd_imm16_imm8 = "enter",
        Enterq_imm16_imm8 = "enter",
        Leavew = "leave",
        Leaved = "leave",
        Leaveq = "leave",
        Retfw_imm16 = "retf",
        Retfd_imm16 = "retf",
        Retfq_imm16 = "retf",
        Retfw = "retf",
        Retfd = "retf",
        Retfq = "retf",
        Int3 = "int3",
        Int_imm8 = "int",
        Into = "into",
        Iretw = "iret",
        Iretd = "iretd",
        Iretq = "iretq",
        Rol_rm8_1 = "rol",
        Ror_rm8_1 = "ror",
        Rcl_rm8_1 = "rcl",
        Rcr_rm8_1 = "rcr",
        Shl_rm8_1 = "shl",
        Shr_rm8_1 = "shr",
        Sal_rm8_1 = "sal",
        Sar_rm8_1 = "sar",
        Rol_rm16_1 = "rol",
        Rol_rm32_1 = "rol",
        Rol_rm64_1 = "rol",
        Ror_rm16_1 = "ror",
        Ror_rm32_1 = "ror",
        Ror_rm64_1 = "ror",
        Rcl_rm16_1 = "rcl",
        Rcl_rm32_1 = "rcl",
        Rcl_rm64_1 = "rcl",
        Rcr_rm16_1 = "rcr",
        Rcr_rm32_1 = "rcr",
        Rcr_rm64_1 = "rcr",
        Shl_rm16_1 = "shl",
        Shl_rm32_1 = "shl",
        Shl_rm64_1 = "shl",
        Shr_rm16_1 = "shr",
        Shr_rm32_1 = "shr",
        Shr_rm64_1 = "shr",
        Sal_rm16_1 = "sal",
        Sal_rm32_1 = "sal",
        Sal_rm64_1 = "sal",
        Sar_rm16_1 = "sar",
        Sar_rm32_1 = "sar",
        Sar_rm64_1 = "sar",
        Rol_rm8_CL = "rol",
        Ror_rm8_CL = "ror",
        Rcl_rm8_CL = "rcl",
        Rcr_rm8_CL = "rcr",
        Shl_rm8_CL = "shl",
        Shr_rm8_CL = "shr",
        Sal_rm8_CL = "sal",
        Sar_rm8_CL = "sar",
        Rol_rm16_CL = "rol",
        Rol_rm32_CL = "rol",
        Rol_rm64_CL = "rol",
        Ror_rm16_CL = "ror",
        Ror_rm32_CL = "ror",
        Ror_rm64_CL = "ror",
        Rcl_rm16_CL = "rcl",
        Rcl_rm32_CL = "rcl",
        Rcl_rm64_CL = "rcl",
        Rcr_rm16_CL = "rcr",
        Rcr_rm32_CL = "rcr",
        Rcr_rm64_CL = "rcr",
        Shl_rm16_CL = "shl",
        Shl_rm32_CL = "shl",
        Shl_rm64_CL = "shl",
        Shr_rm16_CL = "shr",
        Shr_rm32_CL = "shr",
        Shr_rm64_CL = "shr",
        Sal_rm16_CL = "sal",
        Sal_rm32_CL = "sal",
        Sal_rm64_CL = "sal",
        Sar_rm16_CL = "sar",
        Sar_rm32_CL = "sar",
        Sar_rm64_CL = "sar",
        Aam_imm8 = "aam",
        Aad_imm8 = "aad",
        Salc = "salc",
        Xlat_m8 = "xlatb",
        Loopne_rel8_16_CX = "loopne",
        Loopne_rel8_32_CX = "loopne",
        Loopne_rel8_16_ECX = "loopne",
        Loopne_rel8_32_ECX = "loopne",
        Loopne_rel8_64_ECX = "loopne",
        Loopne_rel8_16_RCX = "loopne",
        Loopne_rel8_64_RCX = "loopne",
        Loope_rel8_16_CX = "loope",
        Loope_rel8_32_CX = "loope",
        Loope_rel8_16_ECX = "loope",
        Loope_rel8_32_ECX = "loope",
        Loope_rel8_64_ECX = "loope",
        Loope_rel8_16_RCX = "loope",
        Loope_rel8_64_RCX = "loope",
        Loop_rel8_16_CX = "loop",
        Loop_rel8_32_CX = "loop",
        Loop_rel8_16_ECX = "loop",
        Loop_rel8_32_ECX = "loop",
        Loop_rel8_64_ECX = "loop",
        Loop_rel8_16_RCX = "loop",
        Loop_rel8_64_RCX = "loop",
        Jcxz_rel8_16 = "jcxz",
        Jcxz_rel8_32 = "jcxz",
        Jecxz_rel8_16 = "jecxz",
        Jecxz_rel8_32 = "jecxz",
        Jecxz_rel8_64 = "jecxz",
        Jrcxz_rel8_16 = "jrcxz",
        Jrcxz_rel8_64 = "jrcxz",
        In_AL_imm8 = "in",
        In_AX_imm8 = "in",
        In_EAX_imm8 = "in",
        Out_imm8_AL = "out",
        Out_imm8_AX = "out",
        Out_imm8_EAX = "out",
        Call_rel16 = "call",
        Call_rel32_32 = "call",
        Call_rel32_64 = "call",
        Jmp_rel16 = "jmp",
        Jmp_rel32_32 = "jmp",
        Jmp_rel32_64 = "jmp",
        Jmp_ptr1616 = "jmp",
        Jmp_ptr1632 = "jmp",
        Jmp_rel8_16 = "jmp",
        Jmp_rel8_32 = "jmp",
        Jmp_rel8_64 = "jmp",
        In_AL_DX = "in",
        In_AX_DX = "in",
        In_EAX_DX = "in",
        Out_DX_AL = "out",
        Out_DX_AX = "out",
        Out_DX_EAX = "out",
        Int1 = "int1",
        Hlt = "hlt",
        Cmc = "cmc",
        Test_rm8_imm8 = "test",
        Test_rm8_imm8_F6r1 = "test",
        Not_rm8 = "not",
        Neg_rm8 = "neg",
        Mul_rm8 = "mul",
        Imul_rm8 = "imul",
        Div_rm8 = "div",
        Idiv_rm8 = "idiv",
        Test_rm16_imm16 = "test",
        Test_rm32_imm32 = "test",
        Test_rm64_imm32 = "test",
        Test_rm16_imm16_F7r1 = "test",
        Test_rm32_imm32_F7r1 = "test",
        Test_rm64_imm32_F7r1 = "test",
        Not_rm16 = "not",
        Not_rm32 = "not",
        Not_rm64 = "not",
        Neg_rm16 = "neg",
        Neg_rm32 = "neg",
        Neg_rm64 = "neg",
        Mul_rm16 = "mul",
        Mul_rm32 = "mul",
        Mul_rm64 = "mul",
        Imul_rm16 = "imul",
        Imul_rm32 = "imul",
        Imul_rm64 = "imul",
        Div_rm16 = "div",
        Div_rm32 = "div",
        Div_rm64 = "div",
        Idiv_rm16 = "idiv",
        Idiv_rm32 = "idiv",
        Idiv_rm64 = "idiv",
        Clc = "clc",
        Stc = "stc",
        Cli = "cli",
        Sti = "sti",
        Cld = "cld",
        Std = "std",
        Inc_rm8 = "inc",
        Dec_rm8 = "dec",
        Inc_rm16 = "inc",
        Inc_rm32 = "inc",
        Inc_rm64 = "inc",
        Dec_rm16 = "dec",
        Dec_rm32 = "dec",
        Dec_rm64 = "dec",
        Call_rm16 = "call",
        Call_rm32 = "call",
        Call_rm64 = "call",
        Call_m1616 = "call",
        Call_m1632 = "call",
        Call_m1664 = "call",
        Jmp_rm16 = "jmp",
        Jmp_rm32 = "jmp",
        Jmp_rm64 = "jmp",
        Jmp_m1616 = "jmp",
        Jmp_m1632 = "jmp",
        Jmp_m1664 = "jmp",
        Push_rm16 = "push",
        Push_rm32 = "push",
        Push_rm64 = "push",
        Fadd_st0_sti = "fadd",
        Fmul_st0_sti = "fmul",
        Fcom_st0_sti = "fcom",
        Fcomp_st0_sti = "fcomp",
        Fsub_st0_sti = "fsub",
        Fsubr_st0_sti = "fsubr",
        Fdiv_st0_sti = "fdiv",
        Fdivr_st0_sti = "fdivr",
        Fadd_m32fp = "fadd",
        Fmul_m32fp = "fmul",
        Fcom_m32fp = "fcom",
        Fcomp_m32fp = "fcomp",
        Fsub_m32fp = "fsub",
        Fsubr_m32fp = "fsubr",
        Fdiv_m32fp = "fdiv",
        Fdivr_m32fp = "fdivr",
        Fld_st0_sti = "fld",
        Fxch_st0_sti = "fxch",
        Fnop = "fnop",
        Fstpnce_sti = "fstpnce",
        Fchs = "fchs",
        Fabs = "fabs",
        Ftst = "ftst",
        Fxam = "fxam",
        Fld1 = "fld1",
        Fldl2t = "fldl2t",
        Fldl2e = "fldl2e",
        Fldpi = "fldpi",
        Fldlg2 = "fldlg2",
        Fldln2 = "fldln2",
        Fldz = "fldz",
        F2xm1 = "f2xm1",
        Fyl2x = "fyl2x",
        Fptan = "fptan",
        Fpatan = "fpatan",
        Fxtract = "fxtract",
        Fprem1 = "fprem1",
        Fdecstp = "fdecstp",
        Fincstp = "fincstp",
        Fprem = "fprem",
        Fyl2xp1 = "fyl2xp1",
        Fsqrt = "fsqrt",
        Fsincos = "fsincos",
        Frndint = "frndint",
        Fscale = "fscale",
        Fsin = "fsin",
        Fcos = "fcos",
        Fld_m32fp = "fld",
        Fst_m32fp = "fst",
        Fstp_m32fp = "fstp",
        Fldenv_m14byte = "fldenv",
        Fldenv_m28byte = "fldenv",
        Fldcw_m2byte = "fldcw",
        Fnstenv_m14byte = "fnstenv",
        Fnstenv_m28byte = "fnstenv",
        Fnstcw_m2byte = "fnstcw",
        Fcmovb_st0_sti = "fcmovb",
        Fcmove_st0_sti = "fcmove",
        Fcmovbe_st0_sti = "fcmovbe",
        Fcmovu_st0_sti = "fcmovu",
        Fucompp = "fucompp",
        Fiadd_m32int = "fiadd",
        Fimul_m32int = "fimul",
        Ficom_m32int = "ficom",
        Ficomp_m32int = "ficomp",
        Fisub_m32int = "fisub",
        Fisubr_m32int = "fisubr",
        Fidiv_m32int = "fidiv",
        Fidivr_m32int = "fidivr",
        Fcmovnb_st0_sti = "fcmovnb",
        Fcmovne_st0_sti = "fcmovne",
        Fcmovnbe_st0_sti = "fcmovnbe",
        Fcmovnu_st0_sti = "fcmovnu",
        Fneni = "fneni",
        Fndisi = "fndisi",
        Fnclex = "fnclex",
        Fninit = "fninit",
        Fnsetpm = "fnsetpm",
        Frstpm = "frstpm",
        Fucomi_st0_sti = "fucomi",
        Fcomi_st0_sti = "fcomi",
        Fild_m32int = "fild",
        Fisttp_m32int = "fisttp",
        Fist_m32int = "fist",
        Fistp_m32int = "fistp",
        Fld_m80fp = "fld",
        Fstp_m80fp = "fstp",
        Fadd_sti_st0 = "fadd",
        Fmul_sti_st0 = "fmul",
        Fcom_st0_sti_DCD0 = "fcom",
        Fcomp_st0_sti_DCD8 = "fcomp",
        Fsubr_sti_st0 = "fsubr",
        Fsub_sti_st0 = "fsub",
        Fdivr_sti_st0 = "fdivr",
        Fdiv_sti_st0 = "fdiv",
        Fadd_m64fp = "fadd",
        Fmul_m64fp = "fmul",
        Fcom_m64fp = "fcom",
        Fcomp_m64fp = "fcomp",
        Fsub_m64fp = "fsub",
        Fsubr_m64fp = "fsubr",
        Fdiv_m64fp = "fdiv",
        Fdivr_m64fp = "fdivr",
        Ffree_sti = "ffree",
        Fxch_st0_sti_DDC8 = "fxch",
        Fst_sti = "fst",
        Fstp_sti = "fstp",
        Fucom_st0_sti = "fucom",
        Fucomp_st0_sti = "fucomp",
        Fld_m64fp = "fld",
        Fisttp_m64int = "fisttp",
        Fst_m64fp = "fst",
        Fstp_m64fp = "fstp",
        Frstor_m94byte = "frstor",
        Frstor_m108byte = "frstor",
        Fnsave_m94byte = "fnsave",
        Fnsave_m108byte = "fnsave",
        Fnstsw_m2byte = "fnstsw",
        Faddp_sti_st0 = "faddp",
        Fmulp_sti_st0 = "fmulp",
        Fcomp_st0_sti_DED0 = "fcomp",
        Fcompp = "fcompp",
        Fsubrp_sti_st0 = "fsubrp",
        Fsubp_sti_st0 = "fsubp",
        Fdivrp_sti_st0 = "fdivrp",
        Fdivp_sti_st0 = "fdivp",
        Fiadd_m16int = "fiadd",
        Fimul_m16int = "fimul",
        Ficom_m16int = "ficom",
        Ficomp_m16int = "ficomp",
        Fisub_m16int = "fisub",
        Fisubr_m16int = "fisubr",
        Fidiv_m16int = "fidiv",
        Fidivr_m16int = "fidivr",
        Ffreep_sti = "ffreep",
        Fxch_st0_sti_DFC8 = "fxch",
        Fstp_sti_DFD0 = "fstp",
        Fstp_sti_DFD8 = "fstp",
        Fnstsw_AX = "fnstsw",
        Fstdw_AX = "fstdw",
        Fstsg_AX = "fstsg",
        Fucomip_st0_sti = "fucomip",
        Fcomip_st0_sti = "fcomip",
        Fild_m16int = "fild",
        Fisttp_m16int = "fisttp",
        Fist_m16int = "fist",
        Fistp_m16int = "fistp",
        Fbld_m80bcd = "fbld",
        Fild_m64int = "fild",
        Fbstp_m80bcd = "fbstp",
        Fistp_m64int = "fistp",
        Sldt_rm16 = "sldt",
        Sldt_r32m16 = "sldt",
        Sldt_r64m16 = "sldt",
        Str_rm16 = "str",
        Str_r32m16 = "str",
        Str_r64m16 = "str",
        Lldt_rm16 = "lldt",
        Lldt_r32m16 = "lldt",
        Lldt_r64m16 = "lldt",
        Ltr_rm16 = "ltr",
        Ltr_r32m16 = "ltr",
        Ltr_r64m16 = "ltr",
        Verr_rm16 = "verr",
        Verr_r32m16 = "verr",
        Verr_r64m16 = "verr",
        Verw_rm16 = "verw",
        Verw_r32m16 = "verw",
        Verw_r64m16 = "verw",
        Smsw_rm16 = "smsw",
        Smsw_r32m16 = "smsw",
        Smsw_r64m16 = "smsw",
        Lmsw_rm16 = "lmsw",
        Lmsw_r32m16 = "lmsw",
        Lmsw_r64m16 = "lmsw",
        Enclv = "enclv",
        Vmcall = "vmcall",
        Vmlaunch = "vmlaunch",
        Vmresume = "vmresume",
        Vmxoff = "vmxoff",
        Monitorw = "monitor",
        Monitord = "monitor",
        Monitorq = "monitor",
        Mwait = "mwait",
        Clac = "clac",
        Stac = "stac",
        Encls = "encls",
        Xgetbv = "xgetbv",
        Xsetbv = "xsetbv",
        Vmfunc = "vmfunc",
        Xend = "xend",
        Xtest = "xtest",
        Enclu = "enclu",
        Rdpkru = "rdpkru",
        Wrpkru = "wrpkru",
        Swapgs = "swapgs",
        Rdtscp = "rdtscp",
        Sgdt_m1632_16 = "sgdt",
        Sgdt_m1632 = "sgdt",
        Sgdt_m1664 = "sgdt",
        Sidt_m1632_16 = "sidt",
        Sidt_m1632 = "sidt",
        Sidt_m1664 = "sidt",
        Lgdt_m1632_16 = "lgdt",
        Lgdt_m1632 = "lgdt",
        Lgdt_m1664 = "lgdt",
        Lidt_m1632_16 = "lidt",
        Lidt_m1632 = "lidt",
        Lidt_m1664 = "lidt",
        Invlpg_m = "invlpg",
        Lar_r16_rm16 = "lar",
        Lar_r32_r32m16 = "lar",
        Lar_r64_r64m16 = "lar",
        Lsl_r16_rm16 = "lsl",
        Lsl_r32_r32m16 = "lsl",
        Lsl_r64_r64m16 = "lsl",
        Syscall = "syscall",
        Clts = "clts",
        Sysretd = "sysret",
        Sysretq = "sysretq",
        Invd = "invd",
        Wbinvd = "wbinvd",
        Ud2 = "ud2",
        ReservedNop_rm16_r16_0F0D = "reservednop",
        ReservedNop_rm32_r32_0F0D = "reservednop",
        ReservedNop_rm64_r64_0F0D = "reservednop",
        Prefetchw_m8 = "prefetchw",
        Prefetchwt1_m8 = "prefetchwt1",
        Movups_xmm_xmmm128 = "movups",
        Movupd_xmm_xmmm128 = "movupd",
        Movss_xmm_xmmm32 = "movss",
        Movsd_xmm_xmmm64 = "movsd",
        Movups_xmmm128_xmm = "movups",
        Movupd_xmmm128_xmm = "movupd",
        Movss_xmmm32_xmm = "movss",
        Movsd_xmmm64_xmm = "movsd",
        Movhlps_xmm_xmm = "movhlps",
        Movlps_xmm_m64 = "movlps",
        Movlpd_xmm_m64 = "movlpd",
        Movsldup_xmm_xmmm128 = "movsldup",
        Movddup_xmm_xmmm64 = "movddup",
        Movlps_m64_xmm = "movlps",
        Movlpd_m64_xmm = "movlpd",
        Unpcklps_xmm_xmmm128 = "unpcklps",
        Unpcklpd_xmm_xmmm128 = "unpcklpd",
        Unpckhps_xmm_xmmm128 = "unpckhps",
        Unpckhpd_xmm_xmmm128 = "unpckhpd",
        Movlhps_xmm_xmm = "movlhps",
        Movhps_xmm_m64 = "movhps",
        Movhpd_xmm_m64 = "movhpd",
        Movshdup_xmm_xmmm128 = "movshdup",
        Movhps_m64_xmm = "movhps",
        Movhpd_m64_xmm = "movhpd",
        ReservedNop_rm16_r16_0F18 = "reservednop",
        ReservedNop_rm32_r32_0F18 = "reservednop",
        ReservedNop_rm64_r64_0F18 = "reservednop",
        Prefetchnta_m8 = "prefetchnta",
        Prefetcht0_m8 = "prefetcht0",
        Prefetcht1_m8 = "prefetcht1",
        Prefetcht2_m8 = "prefetcht2",
        ReservedNop_rm16_r16_0F19 = "reservednop",
        ReservedNop_rm32_r32_0F19 = "reservednop",
        ReservedNop_rm64_r64_0F19 = "reservednop",
        ReservedNop_rm16_r16_0F1A = "reservednop",
        ReservedNop_rm32_r32_0F1A = "reservednop",
        ReservedNop_rm64_r64_0F1A = "reservednop",
        Bndldx_bnd_mib = "bndldx",
        Bndmov_bnd_bndm64 = "bndmov",
        Bndmov_bnd_bndm128 = "bndmov",
        Bndcl_bnd_rm32 = "bndcl",
        Bndcl_bnd_rm64 = "bndcl",
        Bndcu_bnd_rm32 = "bndcu",
        Bndcu_bnd_rm64 = "bndcu",
        ReservedNop_rm16_r16_0F1B = "reservednop",
        ReservedNop_rm32_r32_0F1B = "reservednop",
        ReservedNop_rm64_r64_0F1B = "reservednop",
        Bndstx_mib_bnd = "bndstx",
        Bndmov_bndm64_bnd = "bndmov",
        Bndmov_bndm128_bnd = "bndmov",
        Bndmk_bnd_m32 = "bndmk",
        Bndmk_bnd_m64 = "bndmk",
        Bndcn_bnd_rm32 = "bndcn",
        Bndcn_bnd_rm64 = "bndcn",
        ReservedNop_rm16_r16_0F1C = "reservednop",
        ReservedNop_rm32_r32_0F1C = "reservednop",
        ReservedNop_rm64_r64_0F1C = "reservednop",
        Cldemote_m8 = "cldemote",
        ReservedNop_rm16_r16_0F1D = "reservednop",
        ReservedNop_rm32_r32_0F1D = "reservednop",
        ReservedNop_rm64_r64_0F1D = "reservednop",
        ReservedNop_rm16_r16_0F1E = "reservednop",
        ReservedNop_rm32_r32_0F1E = "reservednop",
        ReservedNop_rm64_r64_0F1E = "reservednop",
        Rdsspd_r32 = "rdsspd",
        Rdsspq_r64 = "rdsspq",
        Endbr64 = "endbr64",
        Endbr32 = "endbr32",
        ReservedNop_rm16_r16_0F1F = "reservednop",
        ReservedNop_rm32_r32_0F1F = "reservednop",
        ReservedNop_rm64_r64_0F1F = "reservednop",
        Nop_rm16 = "nop",
        Nop_rm32 = "nop",
        Nop_rm64 = "nop",
        Mov_r32_cr = "mov",
        Mov_r64_cr = "mov",
        Mov_r32_dr = "mov",
        Mov_r64_dr = "mov",
        Mov_cr_r32 = "mov",
        Mov_cr_r64 = "mov",
        Mov_dr_r32 = "mov",
        Mov_dr_r64 = "mov",
        Movaps_xmm_xmmm128 = "movaps",
        Movapd_xmm_xmmm128 = "movapd",
        Movaps_xmmm128_xmm = "movaps",
        Movapd_xmmm128_xmm = "movapd",
        Cvtpi2ps_xmm_mmm64 = "cvtpi2ps",
        Cvtpi2pd_xmm_mmm64 = "cvtpi2pd",
        Cvtsi2ss_xmm_rm32 = "cvtsi2ss",
        Cvtsi2ss_xmm_rm64 = "cvtsi2ss",
        Cvtsi2sd_xmm_rm32 = "cvtsi2sd",
        Cvtsi2sd_xmm_rm64 = "cvtsi2sd",
        Movntps_m128_xmm = "movntps",
        Movntpd_m128_xmm = "movntpd",
        Movntss_m32_xmm = "movntss",
        Movntsd_m64_xmm = "movntsd",
        Cvttps2pi_mm_xmmm64 = "cvttps2pi",
        Cvttpd2pi_mm_xmmm128 = "cvttpd2pi",
        Cvttss2si_r32_xmmm32 = "cvttss2si",
        Cvttss2si_r64_xmmm32 = "cvttss2si",
        Cvttsd2si_r32_xmmm64 = "cvttsd2si",
        Cvttsd2si_r64_xmmm64 = "cvttsd2si",
        Cvtps2pi_mm_xmmm64 = "cvtps2pi",
        Cvtpd2pi_mm_xmmm128 = "cvtpd2pi",
        Cvtss2si_r32_xmmm32 = "cvtss2si",
        Cvtss2si_r64_xmmm32 = "cvtss2si",
        Cvtsd2si_r32_xmmm64 = "cvtsd2si",
        Cvtsd2si_r64_xmmm64 = "cvtsd2si",
        Ucomiss_xmm_xmmm32 = "ucomiss",
        Ucomisd_xmm_xmmm64 = "ucomisd",
        Comiss_xmm_xmmm32 = "comiss",
        Comisd_xmm_xmmm64 = "comisd",
        Wrmsr = "wrmsr",
        Rdtsc = "rdtsc",
        Rdmsr = "rdmsr",
        Rdpmc = "rdpmc",
        Sysenter = "sysenter",
        Sysexitd = "sysexit",
        Sysexitq = "sysexitq",
        Getsec = "getsec",
        Cmovo_r16_rm16 = "cmovo",
        Cmovo_r32_rm32 = "cmovo",
        Cmovo_r64_rm64 = "cmovo",
        Cmovno_r16_rm16 = "cmovno",
        Cmovno_r32_rm32 = "cmovno",
        Cmovno_r64_rm64 = "cmovno",
        Cmovb_r16_rm16 = "cmovb",
        Cmovb_r32_rm32 = "cmovb",
        Cmovb_r64_rm64 = "cmovb",
        Cmovae_r16_rm16 = "cmovae",
        Cmovae_r32_rm32 = "cmovae",
        Cmovae_r64_rm64 = "cmovae",
        Cmove_r16_rm16 = "cmove",
        Cmove_r32_rm32 = "cmove",
        Cmove_r64_rm64 = "cmove",
        Cmovne_r16_rm16 = "cmovne",
        Cmovne_r32_rm32 = "cmovne",
        Cmovne_r64_rm64 = "cmovne",
        Cmovbe_r16_rm16 = "cmovbe",
        Cmovbe_r32_rm32 = "cmovbe",
        Cmovbe_r64_rm64 = "cmovbe",
        Cmova_r16_rm16 = "cmova",
        Cmova_r32_rm32 = "cmova",
        Cmova_r64_rm64 = "cmova",
        Cmovs_r16_rm16 = "cmovs",
        Cmovs_r32_rm32 = "cmovs",
        Cmovs_r64_rm64 = "cmovs",
        Cmovns_r16_rm16 = "cmovns",
        Cmovns_r32_rm32 = "cmovns",
        Cmovns_r64_rm64 = "cmovns",
        Cmovp_r16_rm16 = "cmovp",
        Cmovp_r32_rm32 = "cmovp",
        Cmovp_r64_rm64 = "cmovp",
        Cmovnp_r16_rm16 = "cmovnp",
        Cmovnp_r32_rm32 = "cmovnp",
        Cmovnp_r64_rm64 = "cmovnp",
        Cmovl_r16_rm16 = "cmovl",
        Cmovl_r32_rm32 = "cmovl",
        Cmovl_r64_rm64 = "cmovl",
        Cmovge_r16_rm16 = "cmovge",
        Cmovge_r32_rm32 = "cmovge",
        Cmovge_r64_rm64 = "cmovge",
        Cmovle_r16_rm16 = "cmovle",
        Cmovle_r32_rm32 = "cmovle",
        Cmovle_r64_rm64 = "cmovle",
        Cmovg_r16_rm16 = "cmovg",
        Cmovg_r32_rm32 = "cmovg",
        Cmovg_r64_rm64 = "cmovg",
        Movmskps_r32_xmm = "movmskps",
        Movmskps_r64_xmm = "movmskps",
        Movmskpd_r32_xmm = "movmskpd",
        Movmskpd_r64_xmm = "movmskpd",
        Sqrtps_xmm_xmmm128 = "sqrtps",
        Sqrtpd_xmm_xmmm128 = "sqrtpd",
        Sqrtss_xmm_xmmm32 = "sqrtss",
        Sqrtsd_xmm_xmmm64 = "sqrtsd",
        Rsqrtps_xmm_xmmm128 = "rsqrtps",
        Rsqrtss_xmm_xmmm32 = "rsqrtss",
        Rcpps_xmm_xmmm128 = "rcpps",
        Rcpss_xmm_xmmm32 = "rcpss",
        Andps_xmm_xmmm128 = "andps",
        Andpd_xmm_xmmm128 = "andpd",
        Andnps_xmm_xmmm128 = "andnps",
        Andnpd_xmm_xmmm128 = "andnpd",
        Orps_xmm_xmmm128 = "orps",
        Orpd_xmm_xmmm128 = "orpd",
        Xorps_xmm_xmmm128 = "xorps",
        Xorpd_xmm_xmmm128 = "xorpd",
        Addps_xmm_xmmm128 = "addps",
        Addpd_xmm_xmmm128 = "addpd",
        Addss_xmm_xmmm32 = "addss",
        Addsd_xmm_xmmm64 = "addsd",
        Mulps_xmm_xmmm128 = "mulps",
        Mulpd_xmm_xmmm128 = "mulpd",
        Mulss_xmm_xmmm32 = "mulss",
        Mulsd_xmm_xmmm64 = "mulsd",
        Cvtps2pd_xmm_xmmm64 = "cvtps2pd",
        Cvtpd2ps_xmm_xmmm128 = "cvtpd2ps",
        Cvtss2sd_xmm_xmmm32 = "cvtss2sd",
        Cvtsd2ss_xmm_xmmm64 = "cvtsd2ss",
        Cvtdq2ps_xmm_xmmm128 = "cvtdq2ps",
        Cvtps2dq_xmm_xmmm128 = "cvtps2dq",
        Cvttps2dq_xmm_xmmm128 = "cvttps2dq",
        Subps_xmm_xmmm128 = "subps",
        Subpd_xmm_xmmm128 = "subpd",
        Subss_xmm_xmmm32 = "subss",
        Subsd_xmm_xmmm64 = "subsd",
        Minps_xmm_xmmm128 = "minps",
        Minpd_xmm_xmmm128 = "minpd",
        Minss_xmm_xmmm32 = "minss",
        Minsd_xmm_xmmm64 = "minsd",
        Divps_xmm_xmmm128 = "divps",
        Divpd_xmm_xmmm128 = "divpd",
        Divss_xmm_xmmm32 = "divss",
        Divsd_xmm_xmmm64 = "divsd",
        Maxps_xmm_xmmm128 = "maxps",
        Maxpd_xmm_xmmm128 = "maxpd",
        Maxss_xmm_xmmm32 = "maxss",
        Maxsd_xmm_xmmm64 = "maxsd",
        Punpcklbw_mm_mmm32 = "punpcklbw",
        Punpcklbw_xmm_xmmm128 = "punpcklbw",
        Punpcklwd_mm_mmm32 = "punpcklwd",
        Punpcklwd_xmm_xmmm128 = "punpcklwd",
        Punpckldq_mm_mmm32 = "punpckldq",
        Punpckldq_xmm_xmmm128 = "punpckldq",
        Packsswb_mm_mmm64 = "packsswb",
        Packsswb_xmm_xmmm128 = "packsswb",
        Pcmpgtb_mm_mmm64 = "pcmpgtb",
        Pcmpgtb_xmm_xmmm128 = "pcmpgtb",
        Pcmpgtw_mm_mmm64 = "pcmpgtw",
        Pcmpgtw_xmm_xmmm128 = "pcmpgtw",
        Pcmpgtd_mm_mmm64 = "pcmpgtd",
        Pcmpgtd_xmm_xmmm128 = "pcmpgtd",
        Packuswb_mm_mmm64 = "packuswb",
        Packuswb_xmm_xmmm128 = "packuswb",
        Punpckhbw_mm_mmm64 = "punpckhbw",
        Punpckhbw_xmm_xmmm128 = "punpckhbw",
        Punpckhwd_mm_mmm64 = "punpckhwd",
        Punpckhwd_xmm_xmmm128 = "punpckhwd",
        Punpckhdq_mm_mmm64 = "punpckhdq",
        Punpckhdq_xmm_xmmm128 = "punpckhdq",
        Packssdw_mm_mmm64 = "packssdw",
        Packssdw_xmm_xmmm128 = "packssdw",
        Punpcklqdq_xmm_xmmm128 = "punpcklqdq",
        Punpckhqdq_xmm_xmmm128 = "punpckhqdq",
        Movd_mm_rm32 = "movd",
        Movq_mm_rm64 = "movq",
        Movd_xmm_rm32 = "movd",
        Movq_xmm_rm64 = "movq",
        Movq_mm_mmm64 = "movq",
        Movdqa_xmm_xmmm128 = "movdqa",
        Movdqu_xmm_xmmm128 = "movdqu",
        Pshufw_mm_mmm64_imm8 = "pshufw",
        Pshufd_xmm_xmmm128_imm8 = "pshufd",
        Pshufhw_xmm_xmmm128_imm8 = "pshufhw",
        Pshuflw_xmm_xmmm128_imm8 = "pshuflw",
        Psrlw_mm_imm8 = "psrlw",
        Psrlw_xmm_imm8 = "psrlw",
        Psraw_mm_imm8 = "psraw",
        Psraw_xmm_imm8 = "psraw",
        Psllw_mm_imm8 = "psllw",
        Psllw_xmm_imm8 = "psllw",
        Psrld_mm_imm8 = "psrld",
        Psrld_xmm_imm8 = "psrld",
        Psrad_mm_imm8 = "psrad",
        Psrad_xmm_imm8 = "psrad",
        Pslld_mm_imm8 = "pslld",
        Pslld_xmm_imm8 = "pslld",
        Psrlq_mm_imm8 = "psrlq",
        Psrlq_xmm_imm8 = "psrlq",
        Psrldq_xmm_imm8 = "psrldq",
        Psllq_mm_imm8 = "psllq",
        Psllq_xmm_imm8 = "psllq",
        Pslldq_xmm_imm8 = "pslldq",
        Pcmpeqb_mm_mmm64 = "pcmpeqb",
        Pcmpeqb_xmm_xmmm128 = "pcmpeqb",
        Pcmpeqw_mm_mmm64 = "pcmpeqw",
        Pcmpeqw_xmm_xmmm128 = "pcmpeqw",
        Pcmpeqd_mm_mmm64 = "pcmpeqd",
        Pcmpeqd_xmm_xmmm128 = "pcmpeqd",
        Emms = "emms",
        Haddpd_xmm_xmmm128 = "haddpd",
        Haddps_xmm_xmmm128 = "haddps",
        Hsubpd_xmm_xmmm128 = "hsubpd",
        Hsubps_xmm_xmmm128 = "hsubps",
        Movd_rm32_mm = "movd",
        Movq_rm64_mm = "movq",
        Movd_rm32_xmm = "movd",
        Movq_rm64_xmm = "movq",
        Movq_xmm_xmmm64 = "movq",
        Movq_mmm64_mm = "movq",
        Movdqa_xmmm128_xmm = "movdqa",
        Movdqu_xmmm128_xmm = "movdqu",
        Jo_rel16 = "jo",
        Jo_rel32_32 = "jo",
        Jo_rel32_64 = "jo",
        Seto_rm8 = "seto",
        Jno_rel16 = "jno",
        Jno_rel32_32 = "jno",
        Jno_rel32_64 = "jno",
        Setno_rm8 = "setno",
        Jb_rel16 = "jb",
        Jb_rel32_32 = "jb",
        Jb_rel32_64 = "jb",
        Setb_rm8 = "setb",
        Jae_rel16 = "jae",
        Jae_rel32_32 = "jae",
        Jae_rel32_64 = "jae",
        Setae_rm8 = "setae",
        Je_rel16 = "je",
        Je_rel32_32 = "je",
        Je_rel32_64 = "je",
        Sete_rm8 = "sete",
        Jne_rel16 = "jne",
        Jne_rel32_32 = "jne",
        Jne_rel32_64 = "jne",
        Setne_rm8 = "setne",
        Jbe_rel16 = "jbe",
        Jbe_rel32_32 = "jbe",
        Jbe_rel32_64 = "jbe",
        Setbe_rm8 = "setbe",
        Ja_rel16 = "ja",
        Ja_rel32_32 = "ja",
        Ja_rel32_64 = "ja",
        Seta_rm8 = "seta",
        Js_rel16 = "js",
        Js_rel32_32 = "js",
        Js_rel32_64 = "js",
        Sets_rm8 = "sets",
        Jns_rel16 = "jns",
        Jns_rel32_32 = "jns",
        Jns_rel32_64 = "jns",
        Setns_rm8 = "setns",
        Jp_rel16 = "jp",
        Jp_rel32_32 = "jp",
        Jp_rel32_64 = "jp",
        Setp_rm8 = "setp",
        Jnp_rel16 = "jnp",
        Jnp_rel32_32 = "jnp",
        Jnp_rel32_64 = "jnp",
        Setnp_rm8 = "setnp",
        Jl_rel16 = "jl",
        Jl_rel32_32 = "jl",
        Jl_rel32_64 = "jl",
        Setl_rm8 = "setl",
        Jge_rel16 = "jge",
        Jge_rel32_32 = "jge",
        Jge_rel32_64 = "jge",
        Setge_rm8 = "setge",
        Jle_rel16 = "jle",
        Jle_rel32_32 = "jle",
        Jle_rel32_64 = "jle",
        Setle_rm8 = "setle",
        Jg_rel16 = "jg",
        Jg_rel32_32 = "jg",
        Jg_rel32_64 = "jg",
        Setg_rm8 = "setg",
        Pushw_FS = "push",
        Pushd_FS = "push",
        Pushq_FS = "push",
        Popw_FS = "pop",
        Popd_FS = "pop",
        Popq_FS = "pop",
        Cpuid = "cpuid",
        Bt_rm16_r16 = "bt",
        Bt_rm32_r32 = "bt",
        Bt_rm64_r64 = "bt",
        Shld_rm16_r16_imm8 = "shld",
        Shld_rm32_r32_imm8 = "shld",
        Shld_rm64_r64_imm8 = "shld",
        Shld_rm16_r16_CL = "shld",
        Shld_rm32_r32_CL = "shld",
        Shld_rm64_r64_CL = "shld",
        Pushw_GS = "push",
        Pushd_GS = "push",
        Pushq_GS = "push",
        Popw_GS = "pop",
        Popd_GS = "pop",
        Popq_GS = "pop",
        Rsm = "rsm",
        Bts_rm16_r16 = "bts",
        Bts_rm32_r32 = "bts",
        Bts_rm64_r64 = "bts",
        Shrd_rm16_r16_imm8 = "shrd",
        Shrd_rm32_r32_imm8 = "shrd",
        Shrd_rm64_r64_imm8 = "shrd",
        Shrd_rm16_r16_CL = "shrd",
        Shrd_rm32_r32_CL = "shrd",
        Shrd_rm64_r64_CL = "shrd",
        Ptwrite_Ed = "ptwrite",
        Ptwrite_Eq = "ptwrite",
        Lfence = "lfence",
        Mfence = "mfence",
        Sfence = "sfence",
        Rdfsbase_r32 = "rdfsbase",
        Rdfsbase_r64 = "rdfsbase",
        Rdgsbase_r32 = "rdgsbase",
        Rdgsbase_r64 = "rdgsbase",
        Wrfsbase_r32 = "wrfsbase",
        Wrfsbase_r64 = "wrfsbase",
        Wrgsbase_r32 = "wrgsbase",
        Wrgsbase_r64 = "wrgsbase",
        Fxsave_m512byte = "fxsave",
        Fxsave64_m512byte = "fxsave64",
        Fxrstor_m512byte = "fxrstor",
        Fxrstor64_m512byte = "fxrstor64",
        Ldmxcsr_m32 = "ldmxcsr",
        Stmxcsr_m32 = "stmxcsr",
        Xsave_mem = "xsave",
        Xsave64_mem = "xsave64",
        Xrstor_mem = "xrstor",
        Xrstor64_mem = "xrstor64",
        Xsaveopt_mem = "xsaveopt",
        Xsaveopt64_mem = "xsaveopt64",
        Clwb_m8 = "clwb",
        Clflush_m8 = "clflush",
        Clflushopt_m8 = "clflushopt",
        Imul_r16_rm16 = "imul",
        Imul_r32_rm32 = "imul",
        Imul_r64_rm64 = "imul",
        Cmpxchg_rm8_r8 = "cmpxchg",
        Cmpxchg_rm16_r16 = "cmpxchg",
        Cmpxchg_rm32_r32 = "cmpxchg",
        Cmpxchg_rm64_r64 = "cmpxchg",
        Lss_r16_m1616 = "lss",
        Lss_r32_m1632 = "lss",
        Lss_r64_m1664 = "lss",
        Lfs_r16_m1616 = "lfs",
        Lfs_r32_m1632 = "lfs",
        Lfs_r64_m1664 = "lfs",
        Lgs_r16_m1616 = "lgs",
        Lgs_r32_m1632 = "lgs",
        Lgs_r64_m1664 = "lgs",
        Btr_rm16_r16 = "btr",
        Btr_rm32_r32 = "btr",
        Btr_rm64_r64 = "btr",
        Movzx_r16_rm8 = "movzx",
        Movzx_r32_rm8 = "movzx",
        Movzx_r64_rm8 = "movzx",
        Movzx_r16_rm16 = "movzx",
        Movzx_r32_rm16 = "movzx",
        Movzx_r64_rm16 = "movzx",
        Jmpe_disp16 = "jmpe",
        Jmpe_disp32 = "jmpe",
        Popcnt_r16_rm16 = "popcnt",
        Popcnt_r32_rm32 = "popcnt",
        Popcnt_r64_rm64 = "popcnt",
        Ud1_r16_rm16 = "ud1",
        Ud1_r32_rm32 = "ud1",
        Ud1_r64_rm64 = "ud1",
        Bt_rm16_imm8 = "bt",
        Bt_rm32_imm8 = "bt",
        Bt_rm64_imm8 = "bt",
        Bts_rm16_imm8 = "bts",
        Bts_rm32_imm8 = "bts",
        Bts_rm64_imm8 = "bts",
        Btr_rm16_imm8 = "btr",
        Btr_rm32_imm8 = "btr",
        Btr_rm64_imm8 = "btr",
        Btc_rm16_imm8 = "btc",
        Btc_rm32_imm8 = "btc",
        Btc_rm64_imm8 = "btc",
        Btc_rm16_r16 = "btc",
        Btc_rm32_r32 = "btc",
        Btc_rm64_r64 = "btc",
        Bsf_r16_rm16 = "bsf",
        Bsf_r32_rm32 = "bsf",
        Bsf_r64_rm64 = "bsf",
        Bsr_r16_rm16 = "bsr",
        Bsr_r32_rm32 = "bsr",
        Bsr_r64_rm64 = "bsr",
        Tzcnt_r16_rm16 = "tzcnt",
        Tzcnt_r32_rm32 = "tzcnt",
        Tzcnt_r64_rm64 = "tzcnt",
        Lzcnt_r16_rm16 = "lzcnt",
        Lzcnt_r32_rm32 = "lzcnt",
        Lzcnt_r64_rm64 = "lzcnt",
        Movsx_r16_rm8 = "movsx",
        Movsx_r32_rm8 = "movsx",
        Movsx_r64_rm8 = "movsx",
        Movsx_r16_rm16 = "movsx",
        Movsx_r32_rm16 = "movsx",
        Movsx_r64_rm16 = "movsx",
        Xadd_rm8_r8 = "xadd",
        Xadd_rm16_r16 = "xadd",
        Xadd_rm32_r32 = "xadd",
        Xadd_rm64_r64 = "xadd",
        Cmpps_xmm_xmmm128_imm8 = "cmpps",
        Cmppd_xmm_xmmm128_imm8 = "cmppd",
        Cmpss_xmm_xmmm32_imm8 = "cmpss",
        Cmpsd_xmm_xmmm64_imm8 = "cmpsd",
        Movnti_m32_r32 = "movnti",
        Movnti_m64_r64 = "movnti",
        Pinsrw_mm_r32m16_imm8 = "pinsrw",
        Pinsrw_mm_r64m16_imm8 = "pinsrw",
        Pinsrw_xmm_r32m16_imm8 = "pinsrw",
        Pinsrw_xmm_r64m16_imm8 = "pinsrw",
        Pextrw_r32_mm_imm8 = "pextrw",
        Pextrw_r64_mm_imm8 = "pextrw",
        Pextrw_r32_xmm_imm8 = "pextrw",
        Pextrw_r64_xmm_imm8 = "pextrw",
        Shufps_xmm_xmmm128_imm8 = "shufps",
        Shufpd_xmm_xmmm128_imm8 = "shufpd",
        Rdrand_r16 = "rdrand",
        Rdrand_r32 = "rdrand",
        Rdrand_r64 = "rdrand",
        Rdseed_r16 = "rdseed",
        Rdseed_r32 = "rdseed",
        Rdseed_r64 = "rdseed",
        Rdpid_r32 = "rdpid",
        Rdpid_r64 = "rdpid",
        Cmpxchg8b_m64 = "cmpxchg8b",
        Cmpxchg16b_m128 = "cmpxchg16b",
        Xrstors_m0 = "xrstors",
        Xrstors64_m0 = "xrstors64",
        Xsavec_m0 = "xsavec",
        Xsavec64_m0 = "xsavec64",
        Xsaves_m0 = "xsaves",
        Xsaves64_m0 = "xsaves64",
        Vmptrld_m64 = "vmptrld",
        Vmclear_m64 = "vmclear",
        Vmxon_m64 = "vmxon",
        Vmptrst_m64 = "vmptrst",
        Bswap_r16 = "bswap",
        Bswap_r32 = "bswap",
        Bswap_r64 = "bswap",
        Addsubpd_xmm_xmmm128 = "addsubpd",
        Addsubps_xmm_xmmm128 = "addsubps",
        Psrlw_mm_mmm64 = "psrlw",
        Psrlw_xmm_xmmm128 = "psrlw",
        Psrld_mm_mmm64 = "psrld",
        Psrld_xmm_xmmm128 = "psrld",
        Psrlq_mm_mmm64 = "psrlq",
        Psrlq_xmm_xmmm128 = "psrlq",
        Paddq_mm_mmm64 = "paddq",
        Paddq_xmm_xmmm128 = "paddq",
        Pmullw_mm_mmm64 = "pmullw",
        Pmullw_xmm_xmmm128 = "pmullw",
        Movq_xmmm64_xmm = "movq",
        Movq2dq_xmm_mm = "movq2dq",
        Movdq2q_mm_xmm = "movdq2q",
        Pmovmskb_r32_mm = "pmovmskb",
        Pmovmskb_r64_mm = "pmovmskb",
        Pmovmskb_r32_xmm = "pmovmskb",
        Pmovmskb_r64_xmm = "pmovmskb",
        Psubusb_mm_mmm64 = "psubusb",
        Psubusb_xmm_xmmm128 = "psubusb",
        Psubusw_mm_mmm64 = "psubusw",
        Psubusw_xmm_xmmm128 = "psubusw",
        Pminub_mm_mmm64 = "pminub",
        Pminub_xmm_xmmm128 = "pminub",
        Pand_mm_mmm64 = "pand",
        Pand_xmm_xmmm128 = "pand",
        Paddusb_mm_mmm64 = "paddusb",
        Paddusb_xmm_xmmm128 = "paddusb",
        Paddusw_mm_mmm64 = "paddusw",
        Paddusw_xmm_xmmm128 = "paddusw",
        Pmaxub_mm_mmm64 = "pmaxub",
        Pmaxub_xmm_xmmm128 = "pmaxub",
        Pandn_mm_mmm64 = "pandn",
        Pandn_xmm_xmmm128 = "pandn",
        Pavgb_mm_mmm64 = "pavgb",
        Pavgb_xmm_xmmm128 = "pavgb",
        Pavgw_mm_mmm64 = "pavgw",
        Pavgw_xmm_xmmm128 = "pavgw",
        Pmulhuw_mm_mmm64 = "pmulhuw",
        Pmulhuw_xmm_xmmm128 = "pmulhuw",
        Pmulhw_mm_mmm64 = "pmulhw",
        Pmulhw_xmm_xmmm128 = "pmulhw",
        Psubsb_mm_mmm64 = "psubsb",
        Psubsb_xmm_xmmm128 = "psubsb",
        Psubsw_mm_mmm64 = "psubsw",
        Psubsw_xmm_xmmm128 = "psubsw",
        Pminsw_mm_mmm64 = "pminsw",
        Pminsw_xmm_xmmm128 = "pminsw",
        Por_mm_mmm64 = "por",
        Por_xmm_xmmm128 = "por",
        Paddsb_mm_mmm64 = "paddsb",
        Paddsb_xmm_xmmm128 = "paddsb",
        Paddsw_mm_mmm64 = "paddsw",
        Paddsw_xmm_xmmm128 = "paddsw",
        Pmaxsw_mm_mmm64 = "pmaxsw",
        Pmaxsw_xmm_xmmm128 = "pmaxsw",
        Pxor_mm_mmm64 = "pxor",
        Pxor_xmm_xmmm128 = "pxor",
        Pmuludq_mm_mmm64 = "pmuludq",
        Pmuludq_xmm_xmmm128 = "pmuludq",
        Pmaddwd_mm_mmm64 = "pmaddwd",
        Pmaddwd_xmm_xmmm128 = "pmaddwd",
        Psadbw_mm_mmm64 = "psadbw",
        Psadbw_xmm_xmmm128 = "psadbw",
        Psubb_mm_mmm64 = "psubb",
        Psubb_xmm_xmmm128 = "psubb",
        Psubw_mm_mmm64 = "psubw",
        Psubw_xmm_xmmm128 = "psubw",
        Psubd_mm_mmm64 = "psubd",
        Psubd_xmm_xmmm128 = "psubd",
        Psubq_mm_mmm64 = "psubq",
        Psubq_xmm_xmmm128 = "psubq",
        Paddb_mm_mmm64 = "paddb",
        Paddb_xmm_xmmm128 = "paddb",
        Paddw_mm_mmm64 = "paddw",
        Paddw_xmm_xmmm128 = "paddw",
        Paddd_mm_mmm64 = "paddd",
        Paddd_xmm_xmmm128 = "paddd",
        Psraw_mm_mmm64 = "psraw",
        Psraw_xmm_xmmm128 = "psraw",
        Psrad_mm_mmm64 = "psrad",
        Psrad_xmm_xmmm128 = "psrad",
        Cvttpd2dq_xmm_xmmm128 = "cvttpd2dq",
        Cvtdq2pd_xmm_xmmm64 = "cvtdq2pd",
        Cvtpd2dq_xmm_xmmm128 = "cvtpd2dq",
        Movntq_m64_mm = "movntq",
        Movntdq_m128_xmm = "movntdq",
        Lddqu_xmm_m128 = "lddqu",
        Psllw_mm_mmm64 = "psllw",
        Psllw_xmm_xmmm128 = "psllw",
        Pslld_mm_mmm64 = "pslld",
        Pslld_xmm_xmmm128 = "pslld",
        Psllq_mm_mmm64 = "psllq",
        Psllq_xmm_xmmm128 = "psllq",
        Maskmovq_rDI_mm_mm = "maskmovq",
        Maskmovdqu_rDI_xmm_xmm = "maskmovdqu",
        Ud0_r16_rm16 = "ud0",
        Ud0_r32_rm32 = "ud0",
        Ud0_r64_rm64 = "ud0",
        Pshufb_mm_mmm64 = "pshufb",
        Pshufb_xmm_xmmm128 = "pshufb",
        Phaddw_mm_mmm64 = "phaddw",
        Phaddw_xmm_xmmm128 = "phaddw",
        Phaddd_mm_mmm64 = "phaddd",
        Phaddd_xmm_xmmm128 = "phaddd",
        Phaddsw_mm_mmm64 = "phaddsw",
        Phaddsw_xmm_xmmm128 = "phaddsw",
        Pmaddubsw_mm_mmm64 = "pmaddubsw",
        Pmaddubsw_xmm_xmmm128 = "pmaddubsw",
        Phsubw_mm_mmm64 = "phsubw",
        Phsubw_xmm_xmmm128 = "phsubw",
        Phsubd_mm_mmm64 = "phsubd",
        Phsubd_xmm_xmmm128 = "phsubd",
        Phsubsw_mm_mmm64 = "phsubsw",
        Phsubsw_xmm_xmmm128 = "phsubsw",
        Psignb_mm_mmm64 = "psignb",
        Psignb_xmm_xmmm128 = "psignb",
        Psignw_mm_mmm64 = "psignw",
        Psignw_xmm_xmmm128 = "psignw",
        Psignd_mm_mmm64 = "psignd",
        Psignd_xmm_xmmm128 = "psignd",
        Pmulhrsw_mm_mmm64 = "pmulhrsw",
        Pmulhrsw_xmm_xmmm128 = "pmulhrsw",
        Pabsb_mm_mmm64 = "pabsb",
        Pabsb_xmm_xmmm128 = "pabsb",
        Pabsw_mm_mmm64 = "pabsw",
        Pabsw_xmm_xmmm128 = "pabsw",
        Pabsd_mm_mmm64 = "pabsd",
        Pabsd_xmm_xmmm128 = "pabsd",
        Pblendvb_xmm_xmmm128 = "pblendvb",
        Blendvps_xmm_xmmm128 = "blendvps",
        Blendvpd_xmm_xmmm128 = "blendvpd",
        Ptest_xmm_xmmm128 = "ptest",
        Pmovsxbw_xmm_xmmm64 = "pmovsxbw",
        Pmovsxbd_xmm_xmmm32 = "pmovsxbd",
        Pmovsxbq_xmm_xmmm16 = "pmovsxbq",
        Pmovsxwd_xmm_xmmm64 = "pmovsxwd",
        Pmovsxwq_xmm_xmmm32 = "pmovsxwq",
        Pmovsxdq_xmm_xmmm64 = "pmovsxdq",
        Pmovzxbw_xmm_xmmm64 = "pmovzxbw",
        Pmovzxbd_xmm_xmmm32 = "pmovzxbd",
        Pmovzxbq_xmm_xmmm16 = "pmovzxbq",
        Pmovzxwd_xmm_xmmm64 = "pmovzxwd",
        Pmovzxwq_xmm_xmmm32 = "pmovzxwq",
        Pmovzxdq_xmm_xmmm64 = "pmovzxdq",
        Pmuldq_xmm_xmmm128 = "pmuldq",
        Pcmpeqq_xmm_xmmm128 = "pcmpeqq",
        Packusdw_xmm_xmmm128 = "packusdw",
        Pcmpgtq_xmm_xmmm128 = "pcmpgtq",
        Pminsb_xmm_xmmm128 = "pminsb",
        Pminsd_xmm_xmmm128 = "pminsd",
        Pminuw_xmm_xmmm128 = "pminuw",
        Pminud_xmm_xmmm128 = "pminud",
        Pmaxsb_xmm_xmmm128 = "pmaxsb",
        Pmaxsd_xmm_xmmm128 = "pmaxsd",
        Pmaxuw_xmm_xmmm128 = "pmaxuw",
        Pmaxud_xmm_xmmm128 = "pmaxud",
        Pmulld_xmm_xmmm128 = "pmulld",
        Phminposuw_xmm_xmmm128 = "phminposuw",
        Movntdqa_xmm_m128 = "movntdqa",
        Aesimc_xmm_xmmm128 = "aesimc",
        Aesenc_xmm_xmmm128 = "aesenc",
        Aesenclast_xmm_xmmm128 = "aesenclast",
        Aesdec_xmm_xmmm128 = "aesdec",
        Aesdeclast_xmm_xmmm128 = "aesdeclast",
        Invept_Gd_M = "invept",
        Invept_Gq_M = "invept",
        Invvpid_Gd_M = "invvpid",
        Invvpid_Gq_M = "invvpid",
        Invpcid_Gd_M = "invpcid",
        Invpcid_Gq_M = "invpcid",
        Sha1nexte_VX_WX = "sha1nexte",
        Sha1msg1_VX_WX = "sha1msg1",
        Sha1msg2_VX_WX = "sha1msg2",
        Sha256rnds2_VX_WX = "sha256rnds2",
        Sha256msg1_VX_WX = "sha256msg1",
        Sha256msg2_VX_WX = "sha256msg2",
        Wrussd_m32_r32 = "wrussd",
        Wrussq_m64_r64 = "wrussq",
        Wrssd_m32_r32 = "wrssd",
        Wrssq_m64_r64 = "wrssq",
        Adcx_r32_rm32 = "adcx",
        Adcx_r64_rm64 = "adcx",
        Adox_r32_rm32 = "adox",
        Adox_r64_rm64 = "adox",
        Movdir64b_r16_m512 = "movdir64b",
        Movdir64b_r32_m512 = "movdir64b",
        Movdir64b_r64_m512 = "movdir64b",
        Movdiri_m32_r32 = "movdiri",
        Movdiri_m64_r64 = "movdiri",
        Movbe_r16_m16 = "movbe",
        Movbe_r32_m32 = "movbe",
        Movbe_r64_m64 = "movbe",
        Crc32_r32_rm8 = "crc32",
        Crc32_r64_rm8 = "crc32",
        Movbe_m16_r16 = "movbe",
        Movbe_m32_r32 = "movbe",
        Movbe_m64_r64 = "movbe",
        Crc32_r32_rm16 = "crc32",
        Crc32_r32_rm32 = "crc32",
        Crc32_r64_rm64 = "crc32",
        Roundps_xmm_xmmm128_imm8 = "roundps",
        Roundpd_xmm_xmmm128_imm8 = "roundpd",
        Roundss_xmm_xmmm32_imm8 = "roundss",
        Roundsd_xmm_xmmm64_imm8 = "roundsd",
        Blendps_xmm_xmmm128_imm8 = "blendps",
        Blendpd_xmm_xmmm128_imm8 = "blendpd",
        Pblendw_xmm_xmmm128_imm8 = "pblendw",
        Palignr_mm_mmm64_imm8 = "palignr",
        Palignr_xmm_xmmm128_imm8 = "palignr",
        Pextrb_r32m8_xmm_imm8 = "pextrb",
        Pextrb_r64m8_xmm_imm8 = "pextrb",
        Pextrw_r32m16_xmm_imm8 = "pextrw",
        Pextrw_r64m16_xmm_imm8 = "pextrw",
        Pextrd_rm32_xmm_imm8 = "pextrd",
        Pextrq_rm64_xmm_imm8 = "pextrq",
        Extractps_rm32_xmm_imm8 = "extractps",
        Extractps_r64m32_xmm_imm8 = "extractps",
        Pinsrb_xmm_r32m8_imm8 = "pinsrb",
        Pinsrb_xmm_r64m8_imm8 = "pinsrb",
        Insertps_xmm_xmmm32_imm8 = "insertps",
        Pinsrd_xmm_rm32_imm8 = "pinsrd",
        Pinsrq_xmm_rm64_imm8 = "pinsrq",
        Dpps_xmm_xmmm128_imm8 = "dpps",
        Dppd_xmm_xmmm128_imm8 = "dppd",
        Mpsadbw_xmm_xmmm128_imm8 = "mpsadbw",
        Pclmulqdq_xmm_xmmm128_imm8 = "pclmulqdq",
        Pcmpestrm_xmm_xmmm128_imm8 = "pcmpestrm",
        Pcmpestri_xmm_xmmm128_imm8 = "pcmpestri",
        Pcmpistrm_xmm_xmmm128_imm8 = "pcmpistrm",
        Pcmpistri_xmm_xmmm128_imm8 = "pcmpistri",
        Aeskeygenassist_xmm_xmmm128_imm8 = "aeskeygenassist",
        VEX_Vmovups_xmm_xmmm128 = "vmovups",
        VEX_Vmovups_ymm_ymmm256 = "vmovups",
        VEX_Vmovupd_xmm_xmmm128 = "vmovupd",
        VEX_Vmovupd_ymm_ymmm256 = "vmovupd",
        VEX_Vmovss_xmm_xmm_xmm = "vmovss",
        VEX_Vmovss_xmm_m32 = "vmovss",
        VEX_Vmovsd_xmm_xmm_xmm = "vmovsd",
        VEX_Vmovsd_xmm_m64 = "vmovsd",
        VEX_Vmovups_xmmm128_xmm = "vmovups",
        VEX_Vmovups_ymmm256_ymm = "vmovups",
        VEX_Vmovupd_xmmm128_xmm = "vmovupd",
        VEX_Vmovupd_ymmm256_ymm = "vmovupd",
        VEX_Vmovss_xmm_xmm_xmm_0F11 = "vmovss",
        VEX_Vmovss_m32_xmm = "vmovss",
        VEX_Vmovsd_xmm_xmm_xmm_0F11 = "vmovsd",
        VEX_Vmovsd_m64_xmm = "vmovsd",
        VEX_Vmovhlps_xmm_xmm_xmm = "vmovhlps",
        VEX_Vmovlps_xmm_xmm_m64 = "vmovlps",
        VEX_Vmovlpd_xmm_xmm_m64 = "vmovlpd",
        VEX_Vmovsldup_xmm_xmmm128 = "vmovsldup",
        VEX_Vmovsldup_ymm_ymmm256 = "vmovsldup",
        VEX_Vmovddup_xmm_xmmm64 = "vmovddup",
        VEX_Vmovddup_ymm_ymmm256 = "vmovddup",
        VEX_Vmovlps_m64_xmm = "vmovlps",
        VEX_Vmovlpd_m64_xmm = "vmovlpd",
        VEX_Vunpcklps_xmm_xmm_xmmm128 = "vunpcklps",
        VEX_Vunpcklps_ymm_ymm_ymmm256 = "vunpcklps",
        VEX_Vunpcklpd_xmm_xmm_xmmm128 = "vunpcklpd",
        VEX_Vunpcklpd_ymm_ymm_ymmm256 = "vunpcklpd",
        VEX_Vunpckhps_xmm_xmm_xmmm128 = "vunpckhps",
        VEX_Vunpckhps_ymm_ymm_ymmm256 = "vunpckhps",
        VEX_Vunpckhpd_xmm_xmm_xmmm128 = "vunpckhpd",
        VEX_Vunpckhpd_ymm_ymm_ymmm256 = "vunpckhpd",
        VEX_Vmovlhps_xmm_xmm_xmm = "vmovlhps",
        VEX_Vmovhps_xmm_xmm_m64 = "vmovhps",
        VEX_Vmovhpd_xmm_xmm_m64 = "vmovhpd",
        VEX_Vmovshdup_xmm_xmmm128 = "vmovshdup",
        VEX_Vmovshdup_ymm_ymmm256 = "vmovshdup",
        VEX_Vmovhps_m64_xmm = "vmovhps",
        VEX_Vmovhpd_m64_xmm = "vmovhpd",
        VEX_Vmovaps_xmm_xmmm128 = "vmovaps",
        VEX_Vmovaps_ymm_ymmm256 = "vmovaps",
        VEX_Vmovapd_xmm_xmmm128 = "vmovapd",
        VEX_Vmovapd_ymm_ymmm256 = "vmovapd",
        VEX_Vmovaps_xmmm128_xmm = "vmovaps",
        VEX_Vmovaps_ymmm256_ymm = "vmovaps",
        VEX_Vmovapd_xmmm128_xmm = "vmovapd",
        VEX_Vmovapd_ymmm256_ymm = "vmovapd",
        VEX_Vcvtsi2ss_xmm_xmm_rm32 = "vcvtsi2ss",
        VEX_Vcvtsi2ss_xmm_xmm_rm64 = "vcvtsi2ss",
        VEX_Vcvtsi2sd_xmm_xmm_rm32 = "vcvtsi2sd",
        VEX_Vcvtsi2sd_xmm_xmm_rm64 = "vcvtsi2sd",
        VEX_Vmovntps_m128_xmm = "vmovntps",
        VEX_Vmovntps_m256_ymm = "vmovntps",
        VEX_Vmovntpd_m128_xmm = "vmovntpd",
        VEX_Vmovntpd_m256_ymm = "vmovntpd",
        VEX_Vcvttss2si_r32_xmmm32 = "vcvttss2si",
        VEX_Vcvttss2si_r64_xmmm32 = "vcvttss2si",
        VEX_Vcvttsd2si_r32_xmmm64 = "vcvttsd2si",
        VEX_Vcvttsd2si_r64_xmmm64 = "vcvttsd2si",
        VEX_Vcvtss2si_r32_xmmm32 = "vcvtss2si",
        VEX_Vcvtss2si_r64_xmmm32 = "vcvtss2si",
        VEX_Vcvtsd2si_r32_xmmm64 = "vcvtsd2si",
        VEX_Vcvtsd2si_r64_xmmm64 = "vcvtsd2si",
        VEX_Vucomiss_xmm_xmmm32 = "vucomiss",
        VEX_Vucomisd_xmm_xmmm64 = "vucomisd",
        VEX_Vcomiss_xmm_xmmm32 = "vcomiss",
        VEX_Vcomisd_xmm_xmmm64 = "vcomisd",
        VEX_Kandw_kr_kr_kr = "kandw",
        VEX_Kandq_kr_kr_kr = "kandq",
        VEX_Kandb_kr_kr_kr = "kandb",
        VEX_Kandd_kr_kr_kr = "kandd",
        VEX_Kandnw_kr_kr_kr = "kandnw",
        VEX_Kandnq_kr_kr_kr = "kandnq",
        VEX_Kandnb_kr_kr_kr = "kandnb",
        VEX_Kandnd_kr_kr_kr = "kandnd",
        VEX_Knotw_kr_kr = "knotw",
        VEX_Knotq_kr_kr = "knotq",
        VEX_Knotb_kr_kr = "knotb",
        VEX_Knotd_kr_kr = "knotd",
        VEX_Korw_kr_kr_kr = "korw",
        VEX_Korq_kr_kr_kr = "korq",
        VEX_Korb_kr_kr_kr = "korb",
        VEX_Kord_kr_kr_kr = "kord",
        VEX_Kxnorw_kr_kr_kr = "kxnorw",
        VEX_Kxnorq_kr_kr_kr = "kxnorq",
        VEX_Kxnorb_kr_kr_kr = "kxnorb",
        VEX_Kxnord_kr_kr_kr = "kxnord",
        VEX_Kxorw_kr_kr_kr = "kxorw",
        VEX_Kxorq_kr_kr_kr = "kxorq",
        VEX_Kxorb_kr_kr_kr = "kxorb",
        VEX_Kxord_kr_kr_kr = "kxord",
        VEX_Kaddw_kr_kr_kr = "kaddw",
        VEX_Kaddq_kr_kr_kr = "kaddq",
        VEX_Kaddb_kr_kr_kr = "kaddb",
        VEX_Kaddd_kr_kr_kr = "kaddd",
        VEX_Kunpckwd_kr_kr_kr = "kunpckwd",
        VEX_Kunpckdq_kr_kr_kr = "kunpckdq",
        VEX_Kunpckbw_kr_kr_kr = "kunpckbw",
        VEX_Vmovmskps_r32_xmm = "vmovmskps",
        VEX_Vmovmskps_r32_ymm = "vmovmskps",
        VEX_Vmovmskps_r64_xmm = "vmovmskps",
        VEX_Vmovmskps_r64_ymm = "vmovmskps",
        VEX_Vmovmskpd_r32_xmm = "vmovmskpd",
        VEX_Vmovmskpd_r32_ymm = "vmovmskpd",
        VEX_Vmovmskpd_r64_xmm = "vmovmskpd",
        VEX_Vmovmskpd_r64_ymm = "vmovmskpd",
        VEX_Vsqrtps_xmm_xmmm128 = "vsqrtps",
        VEX_Vsqrtps_ymm_ymmm256 = "vsqrtps",
        VEX_Vsqrtpd_xmm_xmmm128 = "vsqrtpd",
        VEX_Vsqrtpd_ymm_ymmm256 = "vsqrtpd",
        VEX_Vsqrtss_xmm_xmm_xmmm32 = "vsqrtss",
        VEX_Vsqrtsd_xmm_xmm_xmmm64 = "vsqrtsd",
        VEX_Vrsqrtps_xmm_xmmm128 = "vrsqrtps",
        VEX_Vrsqrtps_ymm_ymmm256 = "vrsqrtps",
        VEX_Vrsqrtss_xmm_xmm_xmmm32 = "vrsqrtss",
        VEX_Vrcpps_xmm_xmmm128 = "vrcpps",
        VEX_Vrcpps_ymm_ymmm256 = "vrcpps",
        VEX_Vrcpss_xmm_xmm_xmmm32 = "vrcpss",
        VEX_Vandps_xmm_xmm_xmmm128 = "vandps",
        VEX_Vandps_ymm_ymm_ymmm256 = "vandps",
        VEX_Vandpd_xmm_xmm_xmmm128 = "vandpd",
        VEX_Vandpd_ymm_ymm_ymmm256 = "vandpd",
        VEX_Vandnps_xmm_xmm_xmmm128 = "vandnps",
        VEX_Vandnps_ymm_ymm_ymmm256 = "vandnps",
        VEX_Vandnpd_xmm_xmm_xmmm128 = "vandnpd",
        VEX_Vandnpd_ymm_ymm_ymmm256 = "vandnpd",
        VEX_Vorps_xmm_xmm_xmmm128 = "vorps",
        VEX_Vorps_ymm_ymm_ymmm256 = "vorps",
        VEX_Vorpd_xmm_xmm_xmmm128 = "vorpd",
        VEX_Vorpd_ymm_ymm_ymmm256 = "vorpd",
        VEX_Vxorps_xmm_xmm_xmmm128 = "vxorps",
        VEX_Vxorps_ymm_ymm_ymmm256 = "vxorps",
        VEX_Vxorpd_xmm_xmm_xmmm128 = "vxorpd",
        VEX_Vxorpd_ymm_ymm_ymmm256 = "vxorpd",
        VEX_Vaddps_xmm_xmm_xmmm128 = "vaddps",
        VEX_Vaddps_ymm_ymm_ymmm256 = "vaddps",
        VEX_Vaddpd_xmm_xmm_xmmm128 = "vaddpd",
        VEX_Vaddpd_ymm_ymm_ymmm256 = "vaddpd",
        VEX_Vaddss_xmm_xmm_xmmm32 = "vaddss",
        VEX_Vaddsd_xmm_xmm_xmmm64 = "vaddsd",
        VEX_Vmulps_xmm_xmm_xmmm128 = "vmulps",
        VEX_Vmulps_ymm_ymm_ymmm256 = "vmulps",
        VEX_Vmulpd_xmm_xmm_xmmm128 = "vmulpd",
        VEX_Vmulpd_ymm_ymm_ymmm256 = "vmulpd",
        VEX_Vmulss_xmm_xmm_xmmm32 = "vmulss",
        VEX_Vmulsd_xmm_xmm_xmmm64 = "vmulsd",
        VEX_Vcvtps2pd_xmm_xmmm64 = "vcvtps2pd",
        VEX_Vcvtps2pd_ymm_xmmm128 = "vcvtps2pd",
        VEX_Vcvtpd2ps_xmm_xmmm128 = "vcvtpd2ps",
        VEX_Vcvtpd2ps_xmm_ymmm256 = "vcvtpd2ps",
        VEX_Vcvtss2sd_xmm_xmm_xmmm32 = "vcvtss2sd",
        VEX_Vcvtsd2ss_xmm_xmm_xmmm64 = "vcvtsd2ss",
        VEX_Vcvtdq2ps_xmm_xmmm128 = "vcvtdq2ps",
        VEX_Vcvtdq2ps_ymm_ymmm256 = "vcvtdq2ps",
        VEX_Vcvtps2dq_xmm_xmmm128 = "vcvtps2dq",
        VEX_Vcvtps2dq_ymm_ymmm256 = "vcvtps2dq",
        VEX_Vcvttps2dq_xmm_xmmm128 = "vcvttps2dq",
        VEX_Vcvttps2dq_ymm_ymmm256 = "vcvttps2dq",
        VEX_Vsubps_xmm_xmm_xmmm128 = "vsubps",
        VEX_Vsubps_ymm_ymm_ymmm256 = "vsubps",
        VEX_Vsubpd_xmm_xmm_xmmm128 = "vsubpd",
        VEX_Vsubpd_ymm_ymm_ymmm256 = "vsubpd",
        VEX_Vsubss_xmm_xmm_xmmm32 = "vsubss",
        VEX_Vsubsd_xmm_xmm_xmmm64 = "vsubsd",
        VEX_Vminps_xmm_xmm_xmmm128 = "vminps",
        VEX_Vminps_ymm_ymm_ymmm256 = "vminps",
        VEX_Vminpd_xmm_xmm_xmmm128 = "vminpd",
        VEX_Vminpd_ymm_ymm_ymmm256 = "vminpd",
        VEX_Vminss_xmm_xmm_xmmm32 = "vminss",
        VEX_Vminsd_xmm_xmm_xmmm64 = "vminsd",
        VEX_Vdivps_xmm_xmm_xmmm128 = "vdivps",
        VEX_Vdivps_ymm_ymm_ymmm256 = "vdivps",
        VEX_Vdivpd_xmm_xmm_xmmm128 = "vdivpd",
        VEX_Vdivpd_ymm_ymm_ymmm256 = "vdivpd",
        VEX_Vdivss_xmm_xmm_xmmm32 = "vdivss",
        VEX_Vdivsd_xmm_xmm_xmmm64 = "vdivsd",
        VEX_Vmaxps_xmm_xmm_xmmm128 = "vmaxps",
        VEX_Vmaxps_ymm_ymm_ymmm256 = "vmaxps",
        VEX_Vmaxpd_xmm_xmm_xmmm128 = "vmaxpd",
        VEX_Vmaxpd_ymm_ymm_ymmm256 = "vmaxpd",
        VEX_Vmaxss_xmm_xmm_xmmm32 = "vmaxss",
        VEX_Vmaxsd_xmm_xmm_xmmm64 = "vmaxsd",
        VEX_Vpunpcklbw_xmm_xmm_xmmm128 = "vpunpcklbw",
        VEX_Vpunpcklbw_ymm_ymm_ymmm256 = "vpunpcklbw",
        VEX_Vpunpcklwd_xmm_xmm_xmmm128 = "vpunpcklwd",
        VEX_Vpunpcklwd_ymm_ymm_ymmm256 = "vpunpcklwd",
        VEX_Vpunpckldq_xmm_xmm_xmmm128 = "vpunpckldq",
        VEX_Vpunpckldq_ymm_ymm_ymmm256 = "vpunpckldq",
        VEX_Vpacksswb_xmm_xmm_xmmm128 = "vpacksswb",
        VEX_Vpacksswb_ymm_ymm_ymmm256 = "vpacksswb",
        VEX_Vpcmpgtb_xmm_xmm_xmmm128 = "vpcmpgtb",
        VEX_Vpcmpgtb_ymm_ymm_ymmm256 = "vpcmpgtb",
        VEX_Vpcmpgtw_xmm_xmm_xmmm128 = "vpcmpgtw",
        VEX_Vpcmpgtw_ymm_ymm_ymmm256 = "vpcmpgtw",
        VEX_Vpcmpgtd_xmm_xmm_xmmm128 = "vpcmpgtd",
        VEX_Vpcmpgtd_ymm_ymm_ymmm256 = "vpcmpgtd",
        VEX_Vpackuswb_xmm_xmm_xmmm128 = "vpackuswb",
        VEX_Vpackuswb_ymm_ymm_ymmm256 = "vpackuswb",
        VEX_Vpunpckhbw_xmm_xmm_xmmm128 = "vpunpckhbw",
        VEX_Vpunpckhbw_ymm_ymm_ymmm256 = "vpunpckhbw",
        VEX_Vpunpckhwd_xmm_xmm_xmmm128 = "vpunpckhwd",
        VEX_Vpunpckhwd_ymm_ymm_ymmm256 = "vpunpckhwd",
        VEX_Vpunpckhdq_xmm_xmm_xmmm128 = "vpunpckhdq",
        VEX_Vpunpckhdq_ymm_ymm_ymmm256 = "vpunpckhdq",
        VEX_Vpackssdw_xmm_xmm_xmmm128 = "vpackssdw",
        VEX_Vpackssdw_ymm_ymm_ymmm256 = "vpackssdw",
        VEX_Vpunpcklqdq_xmm_xmm_xmmm128 = "vpunpcklqdq",
        VEX_Vpunpcklqdq_ymm_ymm_ymmm256 = "vpunpcklqdq",
        VEX_Vpunpckhqdq_xmm_xmm_xmmm128 = "vpunpckhqdq",
        VEX_Vpunpckhqdq_ymm_ymm_ymmm256 = "vpunpckhqdq",
        VEX_Vpcmpeqb_xmm_xmm_xmmm128 = "vpcmpeqb",
        VEX_Vpcmpeqb_ymm_ymm_ymmm256 = "vpcmpeqb",
        VEX_Vpcmpeqw_xmm_xmm_xmmm128 = "vpcmpeqw",
        VEX_Vpcmpeqw_ymm_ymm_ymmm256 = "vpcmpeqw",
        VEX_Vpcmpeqd_xmm_xmm_xmmm128 = "vpcmpeqd",
        VEX_Vpcmpeqd_ymm_ymm_ymmm256 = "vpcmpeqd",
        VEX_Vpaddq_xmm_xmm_xmmm128 = "vpaddq",
        VEX_Vpaddq_ymm_ymm_ymmm256 = "vpaddq",
        VEX_Vpmullw_xmm_xmm_xmmm128 = "vpmullw",
        VEX_Vpmullw_ymm_ymm_ymmm256 = "vpmullw",
        VEX_Vpsubusb_xmm_xmm_xmmm128 = "vpsubusb",
        VEX_Vpsubusb_ymm_ymm_ymmm256 = "vpsubusb",
        VEX_Vpsubusw_xmm_xmm_xmmm128 = "vpsubusw",
        VEX_Vpsubusw_ymm_ymm_ymmm256 = "vpsubusw",
        VEX_Vpminub_xmm_xmm_xmmm128 = "vpminub",
        VEX_Vpminub_ymm_ymm_ymmm256 = "vpminub",
        VEX_Vpand_xmm_xmm_xmmm128 = "vpand",
        VEX_Vpand_ymm_ymm_ymmm256 = "vpand",
        VEX_Vpaddusb_xmm_xmm_xmmm128 = "vpaddusb",
        VEX_Vpaddusb_ymm_ymm_ymmm256 = "vpaddusb",
        VEX_Vpaddusw_xmm_xmm_xmmm128 = "vpaddusw",
        VEX_Vpaddusw_ymm_ymm_ymmm256 = "vpaddusw",
        VEX_Vpmaxub_xmm_xmm_xmmm128 = "vpmaxub",
        VEX_Vpmaxub_ymm_ymm_ymmm256 = "vpmaxub",
        VEX_Vpandn_xmm_xmm_xmmm128 = "vpandn",
        VEX_Vpandn_ymm_ymm_ymmm256 = "vpandn",
        VEX_Vpavgb_xmm_xmm_xmmm128 = "vpavgb",
        VEX_Vpavgb_ymm_ymm_ymmm256 = "vpavgb",
        VEX_Vpavgw_xmm_xmm_xmmm128 = "vpavgw",
        VEX_Vpavgw_ymm_ymm_ymmm256 = "vpavgw",
        VEX_Vpmulhuw_xmm_xmm_xmmm128 = "vpmulhuw",
        VEX_Vpmulhuw_ymm_ymm_ymmm256 = "vpmulhuw",
        VEX_Vpmulhw_xmm_xmm_xmmm128 = "vpmulhw",
        VEX_Vpmulhw_ymm_ymm_ymmm256 = "vpmulhw",
        VEX_Vpsubsb_xmm_xmm_xmmm128 = "vpsubsb",
        VEX_Vpsubsb_ymm_ymm_ymmm256 = "vpsubsb",
        VEX_Vpsubsw_xmm_xmm_xmmm128 = "vpsubsw",
        VEX_Vpsubsw_ymm_ymm_ymmm256 = "vpsubsw",
        VEX_Vpminsw_xmm_xmm_xmmm128 = "vpminsw",
        VEX_Vpminsw_ymm_ymm_ymmm256 = "vpminsw",
        VEX_Vpor_xmm_xmm_xmmm128 = "vpor",
        VEX_Vpor_ymm_ymm_ymmm256 = "vpor",
        VEX_Vpaddsb_xmm_xmm_xmmm128 = "vpaddsb",
        VEX_Vpaddsb_ymm_ymm_ymmm256 = "vpaddsb",
        VEX_Vpaddsw_xmm_xmm_xmmm128 = "vpaddsw",
        VEX_Vpaddsw_ymm_ymm_ymmm256 = "vpaddsw",
        VEX_Vpmaxsw_xmm_xmm_xmmm128 = "vpmaxsw",
        VEX_Vpmaxsw_ymm_ymm_ymmm256 = "vpmaxsw",
        VEX_Vpxor_xmm_xmm_xmmm128 = "vpxor",
        VEX_Vpxor_ymm_ymm_ymmm256 = "vpxor",
        VEX_Vpmuludq_xmm_xmm_xmmm128 = "vpmuludq",
        VEX_Vpmuludq_ymm_ymm_ymmm256 = "vpmuludq",
        VEX_Vpmaddwd_xmm_xmm_xmmm128 = "vpmaddwd",
        VEX_Vpmaddwd_ymm_ymm_ymmm256 = "vpmaddwd",
        VEX_Vpsadbw_xmm_xmm_xmmm128 = "vpsadbw",
        VEX_Vpsadbw_ymm_ymm_ymmm256 = "vpsadbw",
        VEX_Vpsubb_xmm_xmm_xmmm128 = "vpsubb",
        VEX_Vpsubb_ymm_ymm_ymmm256 = "vpsubb",
        VEX_Vpsubw_xmm_xmm_xmmm128 = "vpsubw",
        VEX_Vpsubw_ymm_ymm_ymmm256 = "vpsubw",
        VEX_Vpsubd_xmm_xmm_xmmm128 = "vpsubd",
        VEX_Vpsubd_ymm_ymm_ymmm256 = "vpsubd",
        VEX_Vpsubq_xmm_xmm_xmmm128 = "vpsubq",
        VEX_Vpsubq_ymm_ymm_ymmm256 = "vpsubq",
        VEX_Vpaddb_xmm_xmm_xmmm128 = "vpaddb",
        VEX_Vpaddb_ymm_ymm_ymmm256 = "vpaddb",
        VEX_Vpaddw_xmm_xmm_xmmm128 = "vpaddw",
        VEX_Vpaddw_ymm_ymm_ymmm256 = "vpaddw",
        VEX_Vpaddd_xmm_xmm_xmmm128 = "vpaddd",
        VEX_Vpaddd_ymm_ymm_ymmm256 = "vpaddd",
        VEX_Vmovd_xmm_rm32 = "vmovd",
        VEX_Vmovq_xmm_rm64 = "vmovq",
        VEX_Vmovdqa_xmm_xmmm128 = "vmovdqa",
        VEX_Vmovdqa_ymm_ymmm256 = "vmovdqa",
        VEX_Vmovdqu_xmm_xmmm128 = "vmovdqu",
        VEX_Vmovdqu_ymm_ymmm256 = "vmovdqu",
        VEX_Vpshufd_xmm_xmmm128_imm8 = "vpshufd",
        VEX_Vpshufd_ymm_ymmm256_imm8 = "vpshufd",
        VEX_Vpshufhw_xmm_xmmm128_imm8 = "vpshufhw",
        VEX_Vpshufhw_ymm_ymmm256_imm8 = "vpshufhw",
        VEX_Vpshuflw_xmm_xmmm128_imm8 = "vpshuflw",
        VEX_Vpshuflw_ymm_ymmm256_imm8 = "vpshuflw",
        VEX_Vpsrlw_xmm_xmm_imm8 = "vpsrlw",
        VEX_Vpsrlw_ymm_ymm_imm8 = "vpsrlw",
        VEX_Vpsraw_xmm_xmm_imm8 = "vpsraw",
        VEX_Vpsraw_ymm_ymm_imm8 = "vpsraw",
        VEX_Vpsllw_xmm_xmm_imm8 = "vpsllw",
        VEX_Vpsllw_ymm_ymm_imm8 = "vpsllw",
        VEX_Vpsrld_xmm_xmm_imm8 = "vpsrld",
        VEX_Vpsrld_ymm_ymm_imm8 = "vpsrld",
        VEX_Vpsrad_xmm_xmm_imm8 = "vpsrad",
        VEX_Vpsrad_ymm_ymm_imm8 = "vpsrad",
        VEX_Vpslld_xmm_xmm_imm8 = "vpslld",
        VEX_Vpslld_ymm_ymm_imm8 = "vpslld",
        VEX_Vpsrlq_xmm_xmm_imm8 = "vpsrlq",
        VEX_Vpsrlq_ymm_ymm_imm8 = "vpsrlq",
        VEX_Vpsrldq_xmm_xmm_imm8 = "vpsrldq",
        VEX_Vpsrldq_ymm_ymm_imm8 = "vpsrldq",
        VEX_Vpsllq_xmm_xmm_imm8 = "vpsllq",
        VEX_Vpsllq_ymm_ymm_imm8 = "vpsllq",
        VEX_Vpslldq_xmm_xmm_imm8 = "vpslldq",
        VEX_Vpslldq_ymm_ymm_imm8 = "vpslldq",
        VEX_Vzeroupper = "vzeroupper",
        VEX_Vzeroall = "vzeroall",
        VEX_Vhaddpd_xmm_xmm_xmmm128 = "vhaddpd",
        VEX_Vhaddpd_ymm_ymm_ymmm256 = "vhaddpd",
        VEX_Vhaddps_xmm_xmm_xmmm128 = "vhaddps",
        VEX_Vhaddps_ymm_ymm_ymmm256 = "vhaddps",
        VEX_Vhsubpd_xmm_xmm_xmmm128 = "vhsubpd",
        VEX_Vhsubpd_ymm_ymm_ymmm256 = "vhsubpd",
        VEX_Vhsubps_xmm_xmm_xmmm128 = "vhsubps",
        VEX_Vhsubps_ymm_ymm_ymmm256 = "vhsubps",
        VEX_Vmovd_rm32_xmm = "vmovd",
        VEX_Vmovq_rm64_xmm = "vmovq",
        VEX_Vmovq_xmm_xmmm64 = "vmovq",
        VEX_Vmovdqa_xmmm128_xmm = "vmovdqa",
        VEX_Vmovdqa_ymmm256_ymm = "vmovdqa",
        VEX_Vmovdqu_xmmm128_xmm = "vmovdqu",
        VEX_Vmovdqu_ymmm256_ymm = "vmovdqu",
        VEX_Kmovw_kr_km16 = "kmovw",
        VEX_Kmovq_kr_km64 = "kmovq",
        VEX_Kmovb_kr_km8 = "kmovb",
        VEX_Kmovd_kr_km32 = "kmovd",
        VEX_Kmovw_m16_kr = "kmovw",
        VEX_Kmovq_m64_kr = "kmovq",
        VEX_Kmovb_m8_kr = "kmovb",
        VEX_Kmovd_m32_kr = "kmovd",
        VEX_Kmovw_kr_r32 = "kmovw",
        VEX_Kmovb_kr_r32 = "kmovb",
        VEX_Kmovd_kr_r32 = "kmovd",
        VEX_Kmovq_kr_r64 = "kmovq",
        VEX_Kmovw_r32_kr = "kmovw",
        VEX_Kmovb_r32_kr = "kmovb",
        VEX_Kmovd_r32_kr = "kmovd",
        VEX_Kmovq_r64_kr = "kmovq",
        VEX_Kortestw_kr_kr = "kortestw",
        VEX_Kortestq_kr_kr = "kortestq",
        VEX_Kortestb_kr_kr = "kortestb",
        VEX_Kortestd_kr_kr = "kortestd",
        VEX_Ktestw_kr_kr = "ktestw",
        VEX_Ktestq_kr_kr = "ktestq",
        VEX_Ktestb_kr_kr = "ktestb",
        VEX_Ktestd_kr_kr = "ktestd",
        VEX_Vldmxcsr_m32 = "vldmxcsr",
        VEX_Vstmxcsr_m32 = "vstmxcsr",
        VEX_Vcmpps_xmm_xmm_xmmm128_imm8 = "vcmpps",
        VEX_Vcmpps_ymm_ymm_ymmm256_imm8 = "vcmpps",
        VEX_Vcmppd_xmm_xmm_xmmm128_imm8 = "vcmppd",
        VEX_Vcmppd_ymm_ymm_ymmm256_imm8 = "vcmppd",
        VEX_Vcmpss_xmm_xmm_xmmm32_imm8 = "vcmpss",
        VEX_Vcmpsd_xmm_xmm_xmmm64_imm8 = "vcmpsd",
        VEX_Vpinsrw_xmm_xmm_r32m16_imm8 = "vpinsrw",
        VEX_Vpinsrw_xmm_xmm_r64m16_imm8 = "vpinsrw",
        VEX_Vpextrw_r32_xmm_imm8 = "vpextrw",
        VEX_Vpextrw_r64_xmm_imm8 = "vpextrw",
        VEX_Vshufps_xmm_xmm_xmmm128_imm8 = "vshufps",
        VEX_Vshufps_ymm_ymm_ymmm256_imm8 = "vshufps",
        VEX_Vshufpd_xmm_xmm_xmmm128_imm8 = "vshufpd",
        VEX_Vshufpd_ymm_ymm_ymmm256_imm8 = "vshufpd",
        VEX_Vaddsubpd_xmm_xmm_xmmm128 = "vaddsubpd",
        VEX_Vaddsubpd_ymm_ymm_ymmm256 = "vaddsubpd",
        VEX_Vaddsubps_xmm_xmm_xmmm128 = "vaddsubps",
        VEX_Vaddsubps_ymm_ymm_ymmm256 = "vaddsubps",
        VEX_Vpsrlw_xmm_xmm_xmmm128 = "vpsrlw",
        VEX_Vpsrlw_ymm_ymm_xmmm128 = "vpsrlw",
        VEX_Vpsrld_xmm_xmm_xmmm128 = "vpsrld",
        VEX_Vpsrld_ymm_ymm_xmmm128 = "vpsrld",
        VEX_Vpsrlq_xmm_xmm_xmmm128 = "vpsrlq",
        VEX_Vpsrlq_ymm_ymm_xmmm128 = "vpsrlq",
        VEX_Vpsraw_xmm_xmm_xmmm128 = "vpsraw",
        VEX_Vpsraw_ymm_ymm_xmmm128 = "vpsraw",
        VEX_Vpsrad_xmm_xmm_xmmm128 = "vpsrad",
        VEX_Vpsrad_ymm_ymm_xmmm128 = "vpsrad",
        VEX_Vpsllw_xmm_xmm_xmmm128 = "vpsllw",
        VEX_Vpsllw_ymm_ymm_xmmm128 = "vpsllw",
        VEX_Vpslld_xmm_xmm_xmmm128 = "vpslld",
        VEX_Vpslld_ymm_ymm_xmmm128 = "vpslld",
        VEX_Vpsllq_xmm_xmm_xmmm128 = "vpsllq",
        VEX_Vpsllq_ymm_ymm_xmmm128 = "vpsllq",
        VEX_Vmovq_xmmm64_xmm = "vmovq",
        VEX_Vpmovmskb_r32_xmm = "vpmovmskb",
        VEX_Vpmovmskb_r32_ymm = "vpmovmskb",
        VEX_Vpmovmskb_r64_xmm = "vpmovmskb",
        VEX_Vpmovmskb_r64_ymm = "vpmovmskb",
        VEX_Vcvttpd2dq_xmm_xmmm128 = "vcvttpd2dq",
        VEX_Vcvttpd2dq_xmm_ymmm256 = "vcvttpd2dq",
        VEX_Vcvtdq2pd_xmm_xmmm64 = "vcvtdq2pd",
        VEX_Vcvtdq2pd_ymm_xmmm128 = "vcvtdq2pd",
        VEX_Vcvtpd2dq_xmm_xmmm128 = "vcvtpd2dq",
        VEX_Vcvtpd2dq_xmm_ymmm256 = "vcvtpd2dq",
        VEX_Vmovntdq_m128_xmm = "vmovntdq",
        VEX_Vmovntdq_m256_ymm = "vmovntdq",
        VEX_Vlddqu_xmm_m128 = "vlddqu",
        VEX_Vlddqu_ymm_m256 = "vlddqu",
        VEX_Vmaskmovdqu_rDI_xmm_xmm = "vmaskmovdqu",
        VEX_Vpshufb_xmm_xmm_xmmm128 = "vpshufb",
        VEX_Vpshufb_ymm_ymm_ymmm256 = "vpshufb",
        VEX_Vphaddw_xmm_xmm_xmmm128 = "vphaddw",
        VEX_Vphaddw_ymm_ymm_ymmm256 = "vphaddw",
        VEX_Vphaddd_xmm_xmm_xmmm128 = "vphaddd",
        VEX_Vphaddd_ymm_ymm_ymmm256 = "vphaddd",
        VEX_Vphaddsw_xmm_xmm_xmmm128 = "vphaddsw",
        VEX_Vphaddsw_ymm_ymm_ymmm256 = "vphaddsw",
        VEX_Vpmaddubsw_xmm_xmm_xmmm128 = "vpmaddubsw",
        VEX_Vpmaddubsw_ymm_ymm_ymmm256 = "vpmaddubsw",
        VEX_Vphsubw_xmm_xmm_xmmm128 = "vphsubw",
        VEX_Vphsubw_ymm_ymm_ymmm256 = "vphsubw",
        VEX_Vphsubd_xmm_xmm_xmmm128 = "vphsubd",
        VEX_Vphsubd_ymm_ymm_ymmm256 = "vphsubd",
        VEX_Vphsubsw_xmm_xmm_xmmm128 = "vphsubsw",
        VEX_Vphsubsw_ymm_ymm_ymmm256 = "vphsubsw",
        VEX_Vpsignb_xmm_xmm_xmmm128 = "vpsignb",
        VEX_Vpsignb_ymm_ymm_ymmm256 = "vpsignb",
        VEX_Vpsignw_xmm_xmm_xmmm128 = "vpsignw",
        VEX_Vpsignw_ymm_ymm_ymmm256 = "vpsignw",
        VEX_Vpsignd_xmm_xmm_xmmm128 = "vpsignd",
        VEX_Vpsignd_ymm_ymm_ymmm256 = "vpsignd",
        VEX_Vpmulhrsw_xmm_xmm_xmmm128 = "vpmulhrsw",
        VEX_Vpmulhrsw_ymm_ymm_ymmm256 = "vpmulhrsw",
        VEX_Vpmuldq_xmm_xmm_xmmm128 = "vpmuldq",
        VEX_Vpmuldq_ymm_ymm_ymmm256 = "vpmuldq",
        VEX_Vpcmpeqq_xmm_xmm_xmmm128 = "vpcmpeqq",
        VEX_Vpcmpeqq_ymm_ymm_ymmm256 = "vpcmpeqq",
        VEX_Vpackusdw_xmm_xmm_xmmm128 = "vpackusdw",
        VEX_Vpackusdw_ymm_ymm_ymmm256 = "vpackusdw",
        VEX_Vpcmpgtq_xmm_xmm_xmmm128 = "vpcmpgtq",
        VEX_Vpcmpgtq_ymm_ymm_ymmm256 = "vpcmpgtq",
        VEX_Vpminsb_xmm_xmm_xmmm128 = "vpminsb",
        VEX_Vpminsb_ymm_ymm_ymmm256 = "vpminsb",
        VEX_Vpminsd_xmm_xmm_xmmm128 = "vpminsd",
        VEX_Vpminsd_ymm_ymm_ymmm256 = "vpminsd",
        VEX_Vpminuw_xmm_xmm_xmmm128 = "vpminuw",
        VEX_Vpminuw_ymm_ymm_ymmm256 = "vpminuw",
        VEX_Vpminud_xmm_xmm_xmmm128 = "vpminud",
        VEX_Vpminud_ymm_ymm_ymmm256 = "vpminud",
        VEX_Vpmaxsb_xmm_xmm_xmmm128 = "vpmaxsb",
        VEX_Vpmaxsb_ymm_ymm_ymmm256 = "vpmaxsb",
        VEX_Vpmaxsd_xmm_xmm_xmmm128 = "vpmaxsd",
        VEX_Vpmaxsd_ymm_ymm_ymmm256 = "vpmaxsd",
        VEX_Vpmaxuw_xmm_xmm_xmmm128 = "vpmaxuw",
        VEX_Vpmaxuw_ymm_ymm_ymmm256 = "vpmaxuw",
        VEX_Vpmaxud_xmm_xmm_xmmm128 = "vpmaxud",
        VEX_Vpmaxud_ymm_ymm_ymmm256 = "vpmaxud",
        VEX_Vpmulld_xmm_xmm_xmmm128 = "vpmulld",
        VEX_Vpmulld_ymm_ymm_ymmm256 = "vpmulld",
        VEX_Vpermilps_xmm_xmm_xmmm128 = "vpermilps",
        VEX_Vpermilps_ymm_ymm_ymmm256 = "vpermilps",
        VEX_Vpermilpd_xmm_xmm_xmmm128 = "vpermilpd",
        VEX_Vpermilpd_ymm_ymm_ymmm256 = "vpermilpd",
        VEX_Vtestps_xmm_xmmm128 = "vtestps",
        VEX_Vtestps_ymm_ymmm256 = "vtestps",
        VEX_Vtestpd_xmm_xmmm128 = "vtestpd",
        VEX_Vtestpd_ymm_ymmm256 = "vtestpd",
        VEX_Vcvtph2ps_xmm_xmmm64 = "vcvtph2ps",
        VEX_Vcvtph2ps_ymm_xmmm128 = "vcvtph2ps",
        VEX_Vpermps_ymm_ymm_ymmm256 = "vpermps",
        VEX_Vptest_xmm_xmmm128 = "vptest",
        VEX_Vptest_ymm_ymmm256 = "vptest",
        VEX_Vbroadcastss_xmm_xmmm32 = "vbroadcastss",
        VEX_Vbroadcastss_ymm_xmmm32 = "vbroadcastss",
        VEX_Vbroadcastsd_ymm_xmmm64 = "vbroadcastsd",
        VEX_Vbroadcastf128_ymm_m128 = "vbroadcastf128",
        VEX_Vpabsb_xmm_xmmm128 = "vpabsb",
        VEX_Vpabsb_ymm_ymmm256 = "vpabsb",
        VEX_Vpabsw_xmm_xmmm128 = "vpabsw",
        VEX_Vpabsw_ymm_ymmm256 = "vpabsw",
        VEX_Vpabsd_xmm_xmmm128 = "vpabsd",
        VEX_Vpabsd_ymm_ymmm256 = "vpabsd",
        VEX_Vpmovsxbw_xmm_xmmm64 = "vpmovsxbw",
        VEX_Vpmovsxbw_ymm_xmmm128 = "vpmovsxbw",
        VEX_Vpmovsxbd_xmm_xmmm32 = "vpmovsxbd",
        VEX_Vpmovsxbd_ymm_xmmm64 = "vpmovsxbd",
        VEX_Vpmovsxbq_xmm_xmmm16 = "vpmovsxbq",
        VEX_Vpmovsxbq_ymm_xmmm32 = "vpmovsxbq",
        VEX_Vpmovsxwd_xmm_xmmm64 = "vpmovsxwd",
        VEX_Vpmovsxwd_ymm_xmmm128 = "vpmovsxwd",
        VEX_Vpmovsxwq_xmm_xmmm32 = "vpmovsxwq",
        VEX_Vpmovsxwq_ymm_xmmm64 = "vpmovsxwq",
        VEX_Vpmovsxdq_xmm_xmmm64 = "vpmovsxdq",
        VEX_Vpmovsxdq_ymm_xmmm128 = "vpmovsxdq",
        VEX_Vpmovzxbw_xmm_xmmm64 = "vpmovzxbw",
        VEX_Vpmovzxbw_ymm_xmmm128 = "vpmovzxbw",
        VEX_Vpmovzxbd_xmm_xmmm32 = "vpmovzxbd",
        VEX_Vpmovzxbd_ymm_xmmm64 = "vpmovzxbd",
        VEX_Vpmovzxbq_xmm_xmmm16 = "vpmovzxbq",
        VEX_Vpmovzxbq_ymm_xmmm32 = "vpmovzxbq",
        VEX_Vpmovzxwd_xmm_xmmm64 = "vpmovzxwd",
        VEX_Vpmovzxwd_ymm_xmmm128 = "vpmovzxwd",
        VEX_Vpmovzxwq_xmm_xmmm32 = "vpmovzxwq",
        VEX_Vpmovzxwq_ymm_xmmm64 = "vpmovzxwq",
        VEX_Vpmovzxdq_xmm_xmmm64 = "vpmovzxdq",
        VEX_Vpmovzxdq_ymm_xmmm128 = "vpmovzxdq",
        VEX_Vmovntdqa_xmm_m128 = "vmovntdqa",
        VEX_Vmovntdqa_ymm_m256 = "vmovntdqa",
        VEX_Vmaskmovps_xmm_xmm_m128 = "vmaskmovps",
        VEX_Vmaskmovps_ymm_ymm_m256 = "vmaskmovps",
        VEX_Vmaskmovpd_xmm_xmm_m128 = "vmaskmovpd",
        VEX_Vmaskmovpd_ymm_ymm_m256 = "vmaskmovpd",
        VEX_Vmaskmovps_m128_xmm_xmm = "vmaskmovps",
        VEX_Vmaskmovps_m256_ymm_ymm = "vmaskmovps",
        VEX_Vmaskmovpd_m128_xmm_xmm = "vmaskmovpd",
        VEX_Vmaskmovpd_m256_ymm_ymm = "vmaskmovpd",
        VEX_Vpermd_ymm_ymm_ymmm256 = "vpermd",
        VEX_Vphminposuw_xmm_xmmm128 = "vphminposuw",
        VEX_Vpsrlvd_xmm_xmm_xmmm128 = "vpsrlvd",
        VEX_Vpsrlvd_ymm_ymm_ymmm256 = "vpsrlvd",
        VEX_Vpsrlvq_xmm_xmm_xmmm128 = "vpsrlvq",
        VEX_Vpsrlvq_ymm_ymm_ymmm256 = "vpsrlvq",
        VEX_Vpsravd_xmm_xmm_xmmm128 = "vpsravd",
        VEX_Vpsravd_ymm_ymm_ymmm256 = "vpsravd",
        VEX_Vpsllvd_xmm_xmm_xmmm128 = "vpsllvd",
        VEX_Vpsllvd_ymm_ymm_ymmm256 = "vpsllvd",
        VEX_Vpsllvq_xmm_xmm_xmmm128 = "vpsllvq",
        VEX_Vpsllvq_ymm_ymm_ymmm256 = "vpsllvq",
        VEX_Vpbroadcastd_xmm_xmmm32 = "vpbroadcastd",
        VEX_Vpbroadcastd_ymm_xmmm32 = "vpbroadcastd",
        VEX_Vpbroadcastq_xmm_xmmm64 = "vpbroadcastq",
        VEX_Vpbroadcastq_ymm_xmmm64 = "vpbroadcastq",
        VEX_Vbroadcasti128_ymm_m128 = "vbroadcasti128",
        VEX_Vpbroadcastb_xmm_xmmm8 = "vpbroadcastb",
        VEX_Vpbroadcastb_ymm_xmmm8 = "vpbroadcastb",
        VEX_Vpbroadcastw_xmm_xmmm16 = "vpbroadcastw",
        VEX_Vpbroadcastw_ymm_xmmm16 = "vpbroadcastw",
        VEX_Vpmaskmovd_xmm_xmm_m128 = "vpmaskmovd",
        VEX_Vpmaskmovd_ymm_ymm_m256 = "vpmaskmovd",
        VEX_Vpmaskmovq_xmm_xmm_m128 = "vpmaskmovq",
        VEX_Vpmaskmovq_ymm_ymm_m256 = "vpmaskmovq",
        VEX_Vpmaskmovd_m128_xmm_xmm = "vpmaskmovd",
        VEX_Vpmaskmovd_m256_ymm_ymm = "vpmaskmovd",
        VEX_Vpmaskmovq_m128_xmm_xmm = "vpmaskmovq",
        VEX_Vpmaskmovq_m256_ymm_ymm = "vpmaskmovq",
        VEX_Vpgatherdd_xmm_vm32x_xmm = "vpgatherdd",
        VEX_Vpgatherdd_ymm_vm32y_ymm = "vpgatherdd",
        VEX_Vpgatherdq_xmm_vm32x_xmm = "vpgatherdq",
        VEX_Vpgatherdq_ymm_vm32x_ymm = "vpgatherdq",
        VEX_Vpgatherqd_xmm_vm64x_xmm = "vpgatherqd",
        VEX_Vpgatherqd_xmm_vm64y_xmm = "vpgatherqd",
        VEX_Vpgatherqq_xmm_vm64x_xmm = "vpgatherqq",
        VEX_Vpgatherqq_ymm_vm64y_ymm = "vpgatherqq",
        VEX_Vgatherdps_xmm_vm32x_xmm = "vgatherdps",
        VEX_Vgatherdps_ymm_vm32y_ymm = "vgatherdps",
        VEX_Vgatherdpd_xmm_vm32x_xmm = "vgatherdpd",
        VEX_Vgatherdpd_ymm_vm32x_ymm = "vgatherdpd",
        VEX_Vgatherqps_xmm_vm64x_xmm = "vgatherqps",
        VEX_Vgatherqps_xmm_vm64y_xmm = "vgatherqps",
        VEX_Vgatherqpd_xmm_vm64x_xmm = "vgatherqpd",
        VEX_Vgatherqpd_ymm_vm64y_ymm = "vgatherqpd",
        VEX_Vfmaddsub132ps_xmm_xmm_xmmm128 = "vfmaddsub132ps",
        VEX_Vfmaddsub132ps_ymm_ymm_ymmm256 = "vfmaddsub132ps",
        VEX_Vfmaddsub132pd_xmm_xmm_xmmm128 = "vfmaddsub132pd",
        VEX_Vfmaddsub132pd_ymm_ymm_ymmm256 = "vfmaddsub132pd",
        VEX_Vfmaddsub213ps_xmm_xmm_xmmm128 = "vfmaddsub213ps",
        VEX_Vfmaddsub213ps_ymm_ymm_ymmm256 = "vfmaddsub213ps",
        VEX_Vfmaddsub213pd_xmm_xmm_xmmm128 = "vfmaddsub213pd",
        VEX_Vfmaddsub213pd_ymm_ymm_ymmm256 = "vfmaddsub213pd",
        VEX_Vfmaddsub231ps_xmm_xmm_xmmm128 = "vfmaddsub231ps",
        VEX_Vfmaddsub231ps_ymm_ymm_ymmm256 = "vfmaddsub231ps",
        VEX_Vfmaddsub231pd_xmm_xmm_xmmm128 = "vfmaddsub231pd",
        VEX_Vfmaddsub231pd_ymm_ymm_ymmm256 = "vfmaddsub231pd",
        VEX_Vfmsubadd132ps_xmm_xmm_xmmm128 = "vfmsubadd132ps",
        VEX_Vfmsubadd132ps_ymm_ymm_ymmm256 = "vfmsubadd132ps",
        VEX_Vfmsubadd132pd_xmm_xmm_xmmm128 = "vfmsubadd132pd",
        VEX_Vfmsubadd132pd_ymm_ymm_ymmm256 = "vfmsubadd132pd",
        VEX_Vfmsubadd213ps_xmm_xmm_xmmm128 = "vfmsubadd213ps",
        VEX_Vfmsubadd213ps_ymm_ymm_ymmm256 = "vfmsubadd213ps",
        VEX_Vfmsubadd213pd_xmm_xmm_xmmm128 = "vfmsubadd213pd",
        VEX_Vfmsubadd213pd_ymm_ymm_ymmm256 = "vfmsubadd213pd",
        VEX_Vfmsubadd231ps_xmm_xmm_xmmm128 = "vfmsubadd231ps",
        VEX_Vfmsubadd231ps_ymm_ymm_ymmm256 = "vfmsubadd231ps",
        VEX_Vfmsubadd231pd_xmm_xmm_xmmm128 = "vfmsubadd231pd",
        VEX_Vfmsubadd231pd_ymm_ymm_ymmm256 = "vfmsubadd231pd",
        VEX_Vfmadd132ps_xmm_xmm_xmmm128 = "vfmadd132ps",
        VEX_Vfmadd132ps_ymm_ymm_ymmm256 = "vfmadd132ps",
        VEX_Vfmadd132pd_xmm_xmm_xmmm128 = "vfmadd132pd",
        VEX_Vfmadd132pd_ymm_ymm_ymmm256 = "vfmadd132pd",
        VEX_Vfmadd132ss_xmm_xmm_xmmm32 = "vfmadd132ss",
        VEX_Vfmadd132sd_xmm_xmm_xmmm64 = "vfmadd132sd",
        VEX_Vfmadd213ps_xmm_xmm_xmmm128 = "vfmadd213ps",
        VEX_Vfmadd213ps_ymm_ymm_ymmm256 = "vfmadd213ps",
        VEX_Vfmadd213pd_xmm_xmm_xmmm128 = "vfmadd213pd",
        VEX_Vfmadd213pd_ymm_ymm_ymmm256 = "vfmadd213pd",
        VEX_Vfmadd213ss_xmm_xmm_xmmm32 = "vfmadd213ss",
        VEX_Vfmadd213sd_xmm_xmm_xmmm64 = "vfmadd213sd",
        VEX_Vfmadd231ps_xmm_xmm_xmmm128 = "vfmadd231ps",
        VEX_Vfmadd231ps_ymm_ymm_ymmm256 = "vfmadd231ps",
        VEX_Vfmadd231pd_xmm_xmm_xmmm128 = "vfmadd231pd",
        VEX_Vfmadd231pd_ymm_ymm_ymmm256 = "vfmadd231pd",
        VEX_Vfmadd231ss_xmm_xmm_xmmm32 = "vfmadd231ss",
        VEX_Vfmadd231sd_xmm_xmm_xmmm64 = "vfmadd231sd",
        VEX_Vfmsub132ps_xmm_xmm_xmmm128 = "vfmsub132ps",
        VEX_Vfmsub132ps_ymm_ymm_ymmm256 = "vfmsub132ps",
        VEX_Vfmsub132pd_xmm_xmm_xmmm128 = "vfmsub132pd",
        VEX_Vfmsub132pd_ymm_ymm_ymmm256 = "vfmsub132pd",
        VEX_Vfmsub132ss_xmm_xmm_xmmm32 = "vfmsub132ss",
        VEX_Vfmsub132sd_xmm_xmm_xmmm64 = "vfmsub132sd",
        VEX_Vfmsub213ps_xmm_xmm_xmmm128 = "vfmsub213ps",
        VEX_Vfmsub213ps_ymm_ymm_ymmm256 = "vfmsub213ps",
        VEX_Vfmsub213pd_xmm_xmm_xmmm128 = "vfmsub213pd",
        VEX_Vfmsub213pd_ymm_ymm_ymmm256 = "vfmsub213pd",
        VEX_Vfmsub213ss_xmm_xmm_xmmm32 = "vfmsub213ss",
        VEX_Vfmsub213sd_xmm_xmm_xmmm64 = "vfmsub213sd",
        VEX_Vfmsub231ps_xmm_xmm_xmmm128 = "vfmsub231ps",
        VEX_Vfmsub231ps_ymm_ymm_ymmm256 = "vfmsub231ps",
        VEX_Vfmsub231pd_xmm_xmm_xmmm128 = "vfmsub231pd",
        VEX_Vfmsub231pd_ymm_ymm_ymmm256 = "vfmsub231pd",
        VEX_Vfmsub231ss_xmm_xmm_xmmm32 = "vfmsub231ss",
        VEX_Vfmsub231sd_xmm_xmm_xmmm64 = "vfmsub231sd",
        VEX_Vfnmadd132ps_xmm_xmm_xmmm128 = "vfnmadd132ps",
        VEX_Vfnmadd132ps_ymm_ymm_ymmm256 = "vfnmadd132ps",
        VEX_Vfnmadd132pd_xmm_xmm_xmmm128 = "vfnmadd132pd",
        VEX_Vfnmadd132pd_ymm_ymm_ymmm256 = "vfnmadd132pd",
        VEX_Vfnmadd132ss_xmm_xmm_xmmm32 = "vfnmadd132ss",
        VEX_Vfnmadd132sd_xmm_xmm_xmmm64 = "vfnmadd132sd",
        VEX_Vfnmadd213ps_xmm_xmm_xmmm128 = "vfnmadd213ps",
        VEX_Vfnmadd213ps_ymm_ymm_ymmm256 = "vfnmadd213ps",
        VEX_Vfnmadd213pd_xmm_xmm_xmmm128 = "vfnmadd213pd",
        VEX_Vfnmadd213pd_ymm_ymm_ymmm256 = "vfnmadd213pd",
        VEX_Vfnmadd213ss_xmm_xmm_xmmm32 = "vfnmadd213ss",
        VEX_Vfnmadd213sd_xmm_xmm_xmmm64 = "vfnmadd213sd",
        VEX_Vfnmadd231ps_xmm_xmm_xmmm128 = "vfnmadd231ps",
        VEX_Vfnmadd231ps_ymm_ymm_ymmm256 = "vfnmadd231ps",
        VEX_Vfnmadd231pd_xmm_xmm_xmmm128 = "vfnmadd231pd",
        VEX_Vfnmadd231pd_ymm_ymm_ymmm256 = "vfnmadd231pd",
        VEX_Vfnmadd231ss_xmm_xmm_xmmm32 = "vfnmadd231ss",
        VEX_Vfnmadd231sd_xmm_xmm_xmmm64 = "vfnmadd231sd",
        VEX_Vfnmsub132ps_xmm_xmm_xmmm128 = "vfnmsub132ps",
        VEX_Vfnmsub132ps_ymm_ymm_ymmm256 = "vfnmsub132ps",
        VEX_Vfnmsub132pd_xmm_xmm_xmmm128 = "vfnmsub132pd",
        VEX_Vfnmsub132pd_ymm_ymm_ymmm256 = "vfnmsub132pd",
        VEX_Vfnmsub132ss_xmm_xmm_xmmm32 = "vfnmsub132ss",
        VEX_Vfnmsub132sd_xmm_xmm_xmmm64 = "vfnmsub132sd",
        VEX_Vfnmsub213ps_xmm_xmm_xmmm128 = "vfnmsub213ps",
        VEX_Vfnmsub213ps_ymm_ymm_ymmm256 = "vfnmsub213ps",
        VEX_Vfnmsub213pd_xmm_xmm_xmmm128 = "vfnmsub213pd",
        VEX_Vfnmsub213pd_ymm_ymm_ymmm256 = "vfnmsub213pd",
        VEX_Vfnmsub213ss_xmm_xmm_xmmm32 = "vfnmsub213ss",
        VEX_Vfnmsub213sd_xmm_xmm_xmmm64 = "vfnmsub213sd",
        VEX_Vfnmsub231ps_xmm_xmm_xmmm128 = "vfnmsub231ps",
        VEX_Vfnmsub231ps_ymm_ymm_ymmm256 = "vfnmsub231ps",
        VEX_Vfnmsub231pd_xmm_xmm_xmmm128 = "vfnmsub231pd",
        VEX_Vfnmsub231pd_ymm_ymm_ymmm256 = "vfnmsub231pd",
        VEX_Vfnmsub231ss_xmm_xmm_xmmm32 = "vfnmsub231ss",
        VEX_Vfnmsub231sd_xmm_xmm_xmmm64 = "vfnmsub231sd",
        VEX_Vaesimc_xmm_xmmm128 = "vaesimc",
        VEX_Vaesenc_xmm_xmm_xmmm128 = "vaesenc",
        VEX_Vaesenclast_xmm_xmm_xmmm128 = "vaesenclast",
        VEX_Vaesdec_xmm_xmm_xmmm128 = "vaesdec",
        VEX_Vaesdeclast_xmm_xmm_xmmm128 = "vaesdeclast",
        VEX_Andn_r32_r32_rm32 = "andn",
        VEX_Andn_r64_r64_rm64 = "andn",
        VEX_Blsr_r32_rm32 = "blsr",
        VEX_Blsr_r64_rm64 = "blsr",
        VEX_Blsmsk_r32_rm32 = "blsmsk",
        VEX_Blsmsk_r64_rm64 = "blsmsk",
        VEX_Blsi_r32_rm32 = "blsi",
        VEX_Blsi_r64_rm64 = "blsi",
        VEX_Bzhi_r32_rm32_r32 = "bzhi",
        VEX_Bzhi_r64_rm64_r64 = "bzhi",
        VEX_Pext_r32_r32_rm32 = "pext",
        VEX_Pext_r64_r64_rm64 = "pext",
        VEX_Pdep_r32_r32_rm32 = "pdep",
        VEX_Pdep_r64_r64_rm64 = "pdep",
        VEX_Mulx_r32_r32_rm32 = "mulx",
        VEX_Mulx_r64_r64_rm64 = "mulx",
        VEX_Bextr_r32_rm32_r32 = "bextr",
        VEX_Bextr_r64_rm64_r64 = "bextr",
        VEX_Shlx_r32_rm32_r32 = "shlx",
        VEX_Shlx_r64_rm64_r64 = "shlx",
        VEX_Sarx_r32_rm32_r32 = "sarx",
        VEX_Sarx_r64_rm64_r64 = "sarx",
        VEX_Shrx_r32_rm32_r32 = "shrx",
        VEX_Shrx_r64_rm64_r64 = "shrx",
        VEX_Vpermq_ymm_ymmm256_imm8 = "vpermq",
        VEX_Vpermpd_ymm_ymmm256_imm8 = "vpermpd",
        VEX_Vpblendd_xmm_xmm_xmmm128_imm8 = "vpblendd",
        VEX_Vpblendd_ymm_ymm_ymmm256_imm8 = "vpblendd",
        VEX_Vpermilps_xmm_xmmm128_imm8 = "vpermilps",
        VEX_Vpermilps_ymm_ymmm256_imm8 = "vpermilps",
        VEX_Vpermilpd_xmm_xmmm128_imm8 = "vpermilpd",
        VEX_Vpermilpd_ymm_ymmm256_imm8 = "vpermilpd",
        VEX_Vperm2f128_ymm_ymm_ymmm256_imm8 = "vperm2f128",
        VEX_Vroundps_xmm_xmmm128_imm8 = "vroundps",
        VEX_Vroundps_ymm_ymmm256_imm8 = "vroundps",
        VEX_Vroundpd_xmm_xmmm128_imm8 = "vroundpd",
        VEX_Vroundpd_ymm_ymmm256_imm8 = "vroundpd",
        VEX_Vroundss_xmm_xmm_xmmm32_imm8 = "vroundss",
        VEX_Vroundsd_xmm_xmm_xmmm64_imm8 = "vroundsd",
        VEX_Vblendps_xmm_xmm_xmmm128_imm8 = "vblendps",
        VEX_Vblendps_ymm_ymm_ymmm256_imm8 = "vblendps",
        VEX_Vblendpd_xmm_xmm_xmmm128_imm8 = "vblendpd",
        VEX_Vblendpd_ymm_ymm_ymmm256_imm8 = "vblendpd",
        VEX_Vpblendw_xmm_xmm_xmmm128_imm8 = "vpblendw",
        VEX_Vpblendw_ymm_ymm_ymmm256_imm8 = "vpblendw",
        VEX_Vpalignr_xmm_xmm_xmmm128_imm8 = "vpalignr",
        VEX_Vpalignr_ymm_ymm_ymmm256_imm8 = "vpalignr",
        VEX_Vpextrb_r32m8_xmm_imm8 = "vpextrb",
        VEX_Vpextrb_r64m8_xmm_imm8 = "vpextrb",
        VEX_Vpextrw_r32m16_xmm_imm8 = "vpextrw",
        VEX_Vpextrw_r64m16_xmm_imm8 = "vpextrw",
        VEX_Vpextrd_rm32_xmm_imm8 = "vpextrd",
        VEX_Vpextrq_rm64_xmm_imm8 = "vpextrq",
        VEX_Vextractps_rm32_xmm_imm8 = "vextractps",
        VEX_Vextractps_r64m32_xmm_imm8 = "vextractps",
        VEX_Vinsertf128_ymm_ymm_xmmm128_imm8 = "vinsertf128",
        VEX_Vextractf128_xmmm128_ymm_imm8 = "vextractf128",
        VEX_Vcvtps2ph_xmmm64_xmm_imm8 = "vcvtps2ph",
        VEX_Vcvtps2ph_xmmm128_ymm_imm8 = "vcvtps2ph",
        VEX_Vpinsrb_xmm_xmm_r32m8_imm8 = "vpinsrb",
        VEX_Vpinsrb_xmm_xmm_r64m8_imm8 = "vpinsrb",
        VEX_Vinsertps_xmm_xmm_xmmm32_imm8 = "vinsertps",
        VEX_Vpinsrd_xmm_xmm_rm32_imm8 = "vpinsrd",
        VEX_Vpinsrq_xmm_xmm_rm64_imm8 = "vpinsrq",
        VEX_Kshiftrb_kr_kr_imm8 = "kshiftrb",
        VEX_Kshiftrw_kr_kr_imm8 = "kshiftrw",
        VEX_Kshiftrd_kr_kr_imm8 = "kshiftrd",
        VEX_Kshiftrq_kr_kr_imm8 = "kshiftrq",
        VEX_Kshiftlb_kr_kr_imm8 = "kshiftlb",
        VEX_Kshiftlw_kr_kr_imm8 = "kshiftlw",
        VEX_Kshiftld_kr_kr_imm8 = "kshiftld",
        VEX_Kshiftlq_kr_kr_imm8 = "kshiftlq",
        VEX_Vinserti128_ymm_ymm_xmmm128_imm8 = "vinserti128",
        VEX_Vextracti128_xmmm128_ymm_imm8 = "vextracti128",
        VEX_Vdpps_xmm_xmm_xmmm128_imm8 = "vdpps",
        VEX_Vdpps_ymm_ymm_ymmm256_imm8 = "vdpps",
        VEX_Vdppd_xmm_xmm_xmmm128_imm8 = "vdppd",
        VEX_Vmpsadbw_xmm_xmm_xmmm128_imm8 = "vmpsadbw",
        VEX_Vmpsadbw_ymm_ymm_ymmm256_imm8 = "vmpsadbw",
        VEX_Vpclmulqdq_xmm_xmm_xmmm128_imm8 = "vpclmulqdq",
        VEX_Vpclmulqdq_ymm_ymm_ymmm256_imm8 = "vpclmulqdq",
        VEX_Vperm2i128_ymm_ymm_ymmm256_imm8 = "vperm2i128",
        VEX_Vblendvps_xmm_xmm_xmmm128_xmm = "vblendvps",
        VEX_Vblendvps_ymm_ymm_ymmm256_ymm = "vblendvps",
        VEX_Vblendvpd_xmm_xmm_xmmm128_xmm = "vblendvpd",
        VEX_Vblendvpd_ymm_ymm_ymmm256_ymm = "vblendvpd",
        VEX_Vpblendvb_xmm_xmm_xmmm128_xmm = "vpblendvb",
        VEX_Vpblendvb_ymm_ymm_ymmm256_ymm = "vpblendvb",
        VEX_Vpcmpestrm_xmm_xmmm128_imm8 = "vpcmpestrm",
        VEX_Vpcmpestri_xmm_xmmm128_imm8 = "vpcmpestri",
        VEX_Vpcmpistrm_xmm_xmmm128_imm8 = "vpcmpistrm",
        VEX_Vpcmpistri_xmm_xmmm128_imm8 = "vpcmpistri",
        VEX_Vfmaddsubps_xmm_xmm_xmmm128_xmm = "vfmaddsubps",
        VEX_Vfmaddsubps_ymm_ymm_ymmm256_ymm = "vfmaddsubps",
        VEX_Vfmaddsubps_xmm_xmm_xmm_xmmm128 = "vfmaddsubps",
        VEX_Vfmaddsubps_ymm_ymm_ymm_ymmm256 = "vfmaddsubps",
        VEX_Vfmaddsubpd_xmm_xmm_xmmm128_xmm = "vfmaddsubpd",
        VEX_Vfmaddsubpd_ymm_ymm_ymmm256_ymm = "vfmaddsubpd",
        VEX_Vfmaddsubpd_xmm_xmm_xmm_xmmm128 = "vfmaddsubpd",
        VEX_Vfmaddsubpd_ymm_ymm_ymm_ymmm256 = "vfmaddsubpd",
        VEX_Vfmsubaddps_xmm_xmm_xmmm128_xmm = "vfmsubaddps",
        VEX_Vfmsubaddps_ymm_ymm_ymmm256_ymm = "vfmsubaddps",
        VEX_Vfmsubaddps_xmm_xmm_xmm_xmmm128 = "vfmsubaddps",
        VEX_Vfmsubaddps_ymm_ymm_ymm_ymmm256 = "vfmsubaddps",
        VEX_Vfmsubaddpd_xmm_xmm_xmmm128_xmm = "vfmsubaddpd",
        VEX_Vfmsubaddpd_ymm_ymm_ymmm256_ymm = "vfmsubaddpd",
        VEX_Vfmsubaddpd_xmm_xmm_xmm_xmmm128 = "vfmsubaddpd",
        VEX_Vfmsubaddpd_ymm_ymm_ymm_ymmm256 = "vfmsubaddpd",
        VEX_Vfmaddps_xmm_xmm_xmmm128_xmm = "vfmaddps",
        VEX_Vfmaddps_ymm_ymm_ymmm256_ymm = "vfmaddps",
        VEX_Vfmaddps_xmm_xmm_xmm_xmmm128 = "vfmaddps",
        VEX_Vfmaddps_ymm_ymm_ymm_ymmm256 = "vfmaddps",
        VEX_Vfmaddpd_xmm_xmm_xmmm128_xmm = "vfmaddpd",
        VEX_Vfmaddpd_ymm_ymm_ymmm256_ymm = "vfmaddpd",
        VEX_Vfmaddpd_xmm_xmm_xmm_xmmm128 = "vfmaddpd",
        VEX_Vfmaddpd_ymm_ymm_ymm_ymmm256 = "vfmaddpd",
        VEX_Vfmaddss_xmm_xmm_xmmm32_xmm = "vfmaddss",
        VEX_Vfmaddss_xmm_xmm_xmm_xmmm32 = "vfmaddss",
        VEX_Vfmaddsd_xmm_xmm_xmmm64_xmm = "vfmaddsd",
        VEX_Vfmaddsd_xmm_xmm_xmm_xmmm64 = "vfmaddsd",
        VEX_Vfmsubps_xmm_xmm_xmmm128_xmm = "vfmsubps",
        VEX_Vfmsubps_ymm_ymm_ymmm256_ymm = "vfmsubps",
        VEX_Vfmsubps_xmm_xmm_xmm_xmmm128 = "vfmsubps",
        VEX_Vfmsubps_ymm_ymm_ymm_ymmm256 = "vfmsubps",
        VEX_Vfmsubpd_xmm_xmm_xmmm128_xmm = "vfmsubpd",
        VEX_Vfmsubpd_ymm_ymm_ymmm256_ymm = "vfmsubpd",
        VEX_Vfmsubpd_xmm_xmm_xmm_xmmm128 = "vfmsubpd",
        VEX_Vfmsubpd_ymm_ymm_ymm_ymmm256 = "vfmsubpd",
        VEX_Vfmsubss_xmm_xmm_xmmm32_xmm = "vfmsubss",
        VEX_Vfmsubss_xmm_xmm_xmm_xmmm32 = "vfmsubss",
        VEX_Vfmsubsd_xmm_xmm_xmmm64_xmm = "vfmsubsd",
        VEX_Vfmsubsd_xmm_xmm_xmm_xmmm64 = "vfmsubsd",
        VEX_Vfnmaddps_xmm_xmm_xmmm128_xmm = "vfnmaddps",
        VEX_Vfnmaddps_ymm_ymm_ymmm256_ymm = "vfnmaddps",
        VEX_Vfnmaddps_xmm_xmm_xmm_xmmm128 = "vfnmaddps",
        VEX_Vfnmaddps_ymm_ymm_ymm_ymmm256 = "vfnmaddps",
        VEX_Vfnmaddpd_xmm_xmm_xmmm128_xmm = "vfnmaddpd",
        VEX_Vfnmaddpd_ymm_ymm_ymmm256_ymm = "vfnmaddpd",
        VEX_Vfnmaddpd_xmm_xmm_xmm_xmmm128 = "vfnmaddpd",
        VEX_Vfnmaddpd_ymm_ymm_ymm_ymmm256 = "vfnmaddpd",
        VEX_Vfnmaddss_xmm_xmm_xmmm32_xmm = "vfnmaddss",
        VEX_Vfnmaddss_xmm_xmm_xmm_xmmm32 = "vfnmaddss",
        VEX_Vfnmaddsd_xmm_xmm_xmmm64_xmm = "vfnmaddsd",
        VEX_Vfnmaddsd_xmm_xmm_xmm_xmmm64 = "vfnmaddsd",
        VEX_Vfnmsubps_xmm_xmm_xmmm128_xmm = "vfnmsubps",
        VEX_Vfnmsubps_ymm_ymm_ymmm256_ymm = "vfnmsubps",
        VEX_Vfnmsubps_xmm_xmm_xmm_xmmm128 = "vfnmsubps",
        VEX_Vfnmsubps_ymm_ymm_ymm_ymmm256 = "vfnmsubps",
        VEX_Vfnmsubpd_xmm_xmm_xmmm128_xmm = "vfnmsubpd",
        VEX_Vfnmsubpd_ymm_ymm_ymmm256_ymm = "vfnmsubpd",
        VEX_Vfnmsubpd_xmm_xmm_xmm_xmmm128 = "vfnmsubpd",
        VEX_Vfnmsubpd_ymm_ymm_ymm_ymmm256 = "vfnmsubpd",
        VEX_Vfnmsubss_xmm_xmm_xmmm32_xmm = "vfnmsubss",
        VEX_Vfnmsubss_xmm_xmm_xmm_xmmm32 = "vfnmsubss",
        VEX_Vfnmsubsd_xmm_xmm_xmmm64_xmm = "vfnmsubsd",
        VEX_Vfnmsubsd_xmm_xmm_xmm_xmmm64 = "vfnmsubsd",
        VEX_Vaeskeygenassist_xmm_xmmm128_imm8 = "vaeskeygenassist",
        VEX_Rorx_r32_rm32_imm8 = "rorx",
        VEX_Rorx_r64_rm64_imm8 = "rorx",
        XOP_Vpmacssww_xmm_xmm_xmmm128_xmm = "vpmacssww",
        XOP_Vpmacsswd_xmm_xmm_xmmm128_xmm = "vpmacsswd",
        XOP_Vpmacssdql_xmm_xmm_xmmm128_xmm = "vpmacssdql",
        XOP_Vpmacssdd_xmm_xmm_xmmm128_xmm = "vpmacssdd",
        XOP_Vpmacssdqh_xmm_xmm_xmmm128_xmm = "vpmacssdqh",
        XOP_Vpmacsww_xmm_xmm_xmmm128_xmm = "vpmacsww",
        XOP_Vpmacswd_xmm_xmm_xmmm128_xmm = "vpmacswd",
        XOP_Vpmacsdql_xmm_xmm_xmmm128_xmm = "vpmacsdql",
        XOP_Vpmacsdd_xmm_xmm_xmmm128_xmm = "vpmacsdd",
        XOP_Vpmacsdqh_xmm_xmm_xmmm128_xmm = "vpmacsdqh",
        XOP_Vpmadcsswd_xmm_xmm_xmmm128_xmm = "vpmadcsswd",
        XOP_Vpmadcswd_xmm_xmm_xmmm128_xmm = "vpmadcswd",
        XOP_Vpcmov_xmm_xmm_xmmm128_xmm = "vpcmov",
        XOP_Vpcmov_ymm_ymm_ymmm256_ymm = "vpcmov",
        XOP_Vpcmov_xmm_xmm_xmm_xmmm128 = "vpcmov",
        XOP_Vpcmov_ymm_ymm_ymm_ymmm256 = "vpcmov",
        XOP_Vpperm_xmm_xmm_xmmm128_xmm = "vpperm",
        XOP_Vpperm_xmm_xmm_xmm_xmmm128 = "vpperm",
        XOP_Vprotb_xmm_xmmm128_imm8 = "vprotb",
        XOP_Vpcomb_xmm_xmm_xmmm128_imm8 = "vpcomb",
        XOP_Vpcomub_xmm_xmm_xmmm128_imm8 = "vpcomub",
        XOP_Vprotw_xmm_xmmm128_imm8 = "vprotw",
        XOP_Vpcomw_xmm_xmm_xmmm128_imm8 = "vpcomw",
        XOP_Vpcomuw_xmm_xmm_xmmm128_imm8 = "vpcomuw",
        XOP_Vprotd_xmm_xmmm128_imm8 = "vprotd",
        XOP_Vpcomd_xmm_xmm_xmmm128_imm8 = "vpcomd",
        XOP_Vpcomud_xmm_xmm_xmmm128_imm8 = "vpcomud",
        XOP_Vprotq_xmm_xmmm128_imm8 = "vprotq",
        XOP_Vpcomq_xmm_xmm_xmmm128_imm8 = "vpcomq",
        XOP_Vpcomuq_xmm_xmm_xmmm128_imm8 = "vpcomuq",
        XOP_Blcfill_r32_rm32 = "blcfill",
        XOP_Blcfill_r64_rm64 = "blcfill",
        XOP_Blsfill_r32_rm32 = "blsfill",
        XOP_Blsfill_r64_rm64 = "blsfill",
        XOP_Blcs_r32_rm32 = "blcs",
        XOP_Blcs_r64_rm64 = "blcs",
        XOP_Tzmsk_r32_rm32 = "tzmsk",
        XOP_Tzmsk_r64_rm64 = "tzmsk",
        XOP_Blcic_r32_rm32 = "blcic",
        XOP_Blcic_r64_rm64 = "blcic",
        XOP_Blsic_r32_rm32 = "blsic",
        XOP_Blsic_r64_rm64 = "blsic",
        XOP_T1mskc_r32_rm32 = "t1mskc",
        XOP_T1mskc_r64_rm64 = "t1mskc",
        XOP_Blcmsk_r32_rm32 = "blcmsk",
        XOP_Blcmsk_r64_rm64 = "blcmsk",
        XOP_Blci_r32_rm32 = "blci",
        XOP_Blci_r64_rm64 = "blci",
        XOP_Llwpcb_r32 = "llwpcb",
        XOP_Llwpcb_r64 = "llwpcb",
        XOP_Slwpcb_r32 = "slwpcb",
        XOP_Slwpcb_r64 = "slwpcb",
        XOP_Vfrczps_xmm_xmmm128 = "vfrczps",
        XOP_Vfrczps_ymm_ymmm256 = "vfrczps",
        XOP_Vfrczpd_xmm_xmmm128 = "vfrczpd",
        XOP_Vfrczpd_ymm_ymmm256 = "vfrczpd",
        XOP_Vfrczss_xmm_xmmm32 = "vfrczss",
        XOP_Vfrczsd_xmm_xmmm64 = "vfrczsd",
        XOP_Vprotb_xmm_xmmm128_xmm = "vprotb",
        XOP_Vprotb_xmm_xmm_xmmm128 = "vprotb",
        XOP_Vpshlb_xmm_xmmm128_xmm = "vpshlb",
        XOP_Vpshlb_xmm_xmm_xmmm128 = "vpshlb",
        XOP_Vpshab_xmm_xmmm128_xmm = "vpshab",
        XOP_Vpshab_xmm_xmm_xmmm128 = "vpshab",
        XOP_Vprotw_xmm_xmmm128_xmm = "vprotw",
        XOP_Vprotw_xmm_xmm_xmmm128 = "vprotw",
        XOP_Vpshlw_xmm_xmmm128_xmm = "vpshlw",
        XOP_Vpshlw_xmm_xmm_xmmm128 = "vpshlw",
        XOP_Vpshaw_xmm_xmmm128_xmm = "vpshaw",
        XOP_Vpshaw_xmm_xmm_xmmm128 = "vpshaw",
        XOP_Vprotd_xmm_xmmm128_xmm = "vprotd",
        XOP_Vprotd_xmm_xmm_xmmm128 = "vprotd",
        XOP_Vpshld_xmm_xmmm128_xmm = "vpshld",
        XOP_Vpshld_xmm_xmm_xmmm128 = "vpshld",
        XOP_Vpshad_xmm_xmmm128_xmm = "vpshad",
        XOP_Vpshad_xmm_xmm_xmmm128 = "vpshad",
        XOP_Vprotq_xmm_xmmm128_xmm = "vprotq",
        XOP_Vprotq_xmm_xmm_xmmm128 = "vprotq",
        XOP_Vpshlq_xmm_xmmm128_xmm = "vpshlq",
        XOP_Vpshlq_xmm_xmm_xmmm128 = "vpshlq",
        XOP_Vpshaq_xmm_xmmm128_xmm = "vpshaq",
        XOP_Vpshaq_xmm_xmm_xmmm128 = "vpshaq",
        XOP_Vphaddbw_xmm_xmmm128 = "vphaddbw",
        XOP_Vphaddbd_xmm_xmmm128 = "vphaddbd",
        XOP_Vphaddbq_xmm_xmmm128 = "vphaddbq",
        XOP_Vphaddwd_xmm_xmmm128 = "vphaddwd",
        XOP_Vphaddwq_xmm_xmmm128 = "vphaddwq",
        XOP_Vphadddq_xmm_xmmm128 = "vphadddq",
        XOP_Vphaddubw_xmm_xmmm128 = "vphaddubw",
        XOP_Vphaddubd_xmm_xmmm128 = "vphaddubd",
        XOP_Vphaddubq_xmm_xmmm128 = "vphaddubq",
        XOP_Vphadduwd_xmm_xmmm128 = "vphadduwd",
        XOP_Vphadduwq_xmm_xmmm128 = "vphadduwq",
        XOP_Vphaddudq_xmm_xmmm128 = "vphaddudq",
        XOP_Vphsubbw_xmm_xmmm128 = "vphsubbw",
        XOP_Vphsubwd_xmm_xmmm128 = "vphsubwd",
        XOP_Vphsubdq_xmm_xmmm128 = "vphsubdq",
        XOP_Bextr_r32_rm32_imm32 = "bextr",
        XOP_Bextr_r64_rm64_imm32 = "bextr",
        XOP_Lwpins_r32_rm32_imm32 = "lwpins",
        XOP_Lwpins_r64_rm32_imm32 = "lwpins",
        XOP_Lwpval_r32_rm32_imm32 = "lwpval",
        XOP_Lwpval_r64_rm32_imm32 = "lwpval",
        D3NOW_Pi2fw_mm_mmm64 = "pi2fw",
        D3NOW_Pi2fd_mm_mmm64 = "pi2fd",
        D3NOW_Pf2iw_mm_mmm64 = "pf2iw",
        D3NOW_Pf2id_mm_mmm64 = "pf2id",
        D3NOW_Pfrcpv_mm_mmm64 = "pfrcpv",
        D3NOW_Pfrsqrtv_mm_mmm64 = "pfrsqrtv",
        D3NOW_Pfnacc_mm_mmm64 = "pfnacc",
        D3NOW_Pfpnacc_mm_mmm64 = "pfpnacc",
        D3NOW_Pfcmpge_mm_mmm64 = "pfcmpge",
        D3NOW_Pfmin_mm_mmm64 = "pfmin",
        D3NOW_Pfrcp_mm_mmm64 = "pfrcp",
        D3NOW_Pfrsqrt_mm_mmm64 = "pfrsqrt",
        D3NOW_Pfsub_mm_mmm64 = "pfsub",
        D3NOW_Pfadd_mm_mmm64 = "pfadd",
        D3NOW_Pfcmpgt_mm_mmm64 = "pfcmpgt",
        D3NOW_Pfmax_mm_mmm64 = "pfmax",
        D3NOW_Pfrcpit1_mm_mmm64 = "pfrcpit1",
        D3NOW_Pfrsqit1_mm_mmm64 = "pfrsqit1",
        D3NOW_Pfsubr_mm_mmm64 = "pfsubr",
        D3NOW_Pfacc_mm_mmm64 = "pfacc",
        D3NOW_Pfcmpeq_mm_mmm64 = "pfcmpeq",
        D3NOW_Pfmul_mm_mmm64 = "pfmul",
        D3NOW_Pfrcpit2_mm_mmm64 = "pfrcpit2",
        D3NOW_Pmulhrw_mm_mmm64 = "pmulhrw",
        D3NOW_Pswapd_mm_mmm64 = "pswapd",
        D3NOW_Pavgusb_mm_mmm64 = "pavgusb",
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::INVALID
    }
}
