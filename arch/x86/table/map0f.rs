//! Two-byte opcode map.

use super::*;

/// Opcodes following `0F`.
pub(crate) static MAP_0F: [Entry; 256] = [
    // 00
    Entry::Group(&[
        osz_mem!([Sldt_rm16, Sldt_r32m16, Sldt_r64m16], [UInt16, UInt16, UInt16], Ev),
        osz_mem!([Str_rm16, Str_r32m16, Str_r64m16], [UInt16, UInt16, UInt16], Ev),
        osz_mem!([Lldt_rm16, Lldt_r32m16, Lldt_r64m16], [UInt16, UInt16, UInt16], Ev),
        osz_mem!([Ltr_rm16, Ltr_r32m16, Ltr_r64m16], [UInt16, UInt16, UInt16], Ev),
        osz_mem!([Verr_rm16, Verr_r32m16, Verr_r64m16], [UInt16, UInt16, UInt16], Ev),
        osz_mem!([Verw_rm16, Verw_r32m16, Verw_r64m16], [UInt16, UInt16, UInt16], Ev),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 01
    Entry::Mod(
        &Entry::Group(&[
            Entry::Rm(&[
                op!(Enclv),
                op!(Vmcall),
                op!(Vmlaunch),
                op!(Vmresume),
                op!(Vmxoff),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Rm(&[
                Entry::Asz(&[op!(Monitorw), op!(Monitord), op!(Monitorq)]),
                op!(Mwait),
                op!(Clac),
                op!(Stac),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                op!(Encls),
            ]),
            Entry::Rm(&[
                op!(Xgetbv),
                op!(Xsetbv),
                Entry::Invalid,
                Entry::Invalid,
                op!(Vmfunc),
                op!(Xend),
                op!(Xtest),
                op!(Enclu),
            ]),
            Entry::Invalid,
            osz_mem!([Smsw_rm16, Smsw_r32m16, Smsw_r64m16], [UInt16, UInt16, UInt16], Ev),
            Entry::Rm(&[
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                op!(Rdpkru),
                op!(Wrpkru),
            ]),
            osz_mem!([Lmsw_rm16, Lmsw_r32m16, Lmsw_r64m16], [UInt16, UInt16, UInt16], Ev),
            Entry::Rm(&[
                Entry::Mode(&Entry::Invalid, &op!(Swapgs)),
                op!(Rdtscp),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ]),
        &Entry::Group(&[
            osz_mem!([Sgdt_m1632_16, Sgdt_m1632, Sgdt_m1664], [Fword5, Fword6, Fword10], M; FORCE64),
            osz_mem!([Sidt_m1632_16, Sidt_m1632, Sidt_m1664], [Fword5, Fword6, Fword10], M; FORCE64),
            osz_mem!([Lgdt_m1632_16, Lgdt_m1632, Lgdt_m1664], [Fword5, Fword6, Fword10], M; FORCE64),
            osz_mem!([Lidt_m1632_16, Lidt_m1632, Lidt_m1664], [Fword5, Fword6, Fword10], M; FORCE64),
            osz_mem!([Smsw_rm16, Smsw_r32m16, Smsw_r64m16], [UInt16, UInt16, UInt16], Ev),
            Entry::Invalid,
            osz_mem!([Lmsw_rm16, Lmsw_r32m16, Lmsw_r64m16], [UInt16, UInt16, UInt16], Ev),
            mem!(Invlpg_m, Unknown, M),
        ]),
    ),
    // 02
    osz_mem!([Lar_r16_rm16, Lar_r32_r32m16, Lar_r64_r64m16], [UInt16, UInt16, UInt16], Gv, Ev),
    // 03
    osz_mem!([Lsl_r16_rm16, Lsl_r32_r32m16, Lsl_r64_r64m16], [UInt16, UInt16, UInt16], Gv, Ev),
    // 04
    Entry::Invalid,
    // 05
    op!(Syscall),
    // 06
    op!(Clts),
    // 07
    osz!([Sysretd, Sysretd, Sysretq]),
    // 08
    op!(Invd),
    // 09
    op!(Wbinvd),
    // 0A
    Entry::Invalid,
    // 0B
    op!(Ud2),
    // 0C
    Entry::Invalid,
    // 0D
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F0D, ReservedNop_rm32_r32_0F0D, ReservedNop_rm64_r64_0F0D],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Mod(
            &Entry::Invalid,
            &Entry::Group(&[
                Entry::Invalid,
                mem!(Prefetchw_m8, UInt8, M),
                mem!(Prefetchwt1_m8, UInt8, M),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ),
    ),
    // 0E
    Entry::Invalid,
    // 0F
    Entry::Insn(&D3NOW),
    // 10
    Entry::Prefix(&[
        mem!(Movups_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Movupd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Movss_xmm_xmmm32, Float32, V, W),
        mem!(Movsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 11
    Entry::Prefix(&[
        mem!(Movups_xmmm128_xmm, Packed128_Float32, W, V),
        mem!(Movupd_xmmm128_xmm, Packed128_Float64, W, V),
        mem!(Movss_xmmm32_xmm, Float32, W, V),
        mem!(Movsd_xmmm64_xmm, Float64, W, V),
    ]),
    // 12
    Entry::Prefix(&[
        Entry::Mod(&op!(Movhlps_xmm_xmm, V, U), &mem!(Movlps_xmm_m64, UInt64, V, M)),
        mem!(Movlpd_xmm_m64, UInt64, V, M),
        mem!(Movsldup_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Movddup_xmm_xmmm64, Float64, V, W),
    ]),
    // 13
    Entry::Prefix(&[
        mem!(Movlps_m64_xmm, UInt64, M, V),
        mem!(Movlpd_m64_xmm, UInt64, M, V),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 14
    Entry::Prefix(&[
        mem!(Unpcklps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Unpcklpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 15
    Entry::Prefix(&[
        mem!(Unpckhps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Unpckhpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 16
    Entry::Prefix(&[
        Entry::Mod(&op!(Movlhps_xmm_xmm, V, U), &mem!(Movhps_xmm_m64, UInt64, V, M)),
        mem!(Movhpd_xmm_m64, UInt64, V, M),
        mem!(Movshdup_xmm_xmmm128, Packed128_Float32, V, W),
        Entry::Invalid,
    ]),
    // 17
    Entry::Prefix(&[
        mem!(Movhps_m64_xmm, UInt64, M, V),
        mem!(Movhpd_m64_xmm, UInt64, M, V),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 18
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Mod(
            &osz_mem!(
                [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            &Entry::Group(&[
                mem!(Prefetchnta_m8, UInt8, M),
                mem!(Prefetcht0_m8, UInt8, M),
                mem!(Prefetcht1_m8, UInt8, M),
                mem!(Prefetcht2_m8, UInt8, M),
                osz_mem!(
                    [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                osz_mem!(
                    [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                osz_mem!(
                    [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                osz_mem!(
                    [ReservedNop_rm16_r16_0F18, ReservedNop_rm32_r32_0F18, ReservedNop_rm64_r64_0F18],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
            ]),
        ),
    ),
    // 19
    osz_mem!(
        [ReservedNop_rm16_r16_0F19, ReservedNop_rm32_r32_0F19, ReservedNop_rm64_r64_0F19],
        [UInt16, UInt32, UInt64],
        Ev, Gv
    ),
    // 1A
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F1A, ReservedNop_rm32_r32_0F1A, ReservedNop_rm64_r64_0F1A],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Prefix(&[
            Entry::Mod(
                &osz_mem!(
                    [ReservedNop_rm16_r16_0F1A, ReservedNop_rm32_r32_0F1A, ReservedNop_rm64_r64_0F1A],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                &mem!(Bndldx_bnd_mib, Unknown, Bnd, M),
            ),
            osz_mem!(
                [Bndmov_bnd_bndm64, Bndmov_bnd_bndm64, Bndmov_bnd_bndm128],
                [Bnd32, Bnd32, Bnd64],
                Bnd, Bndm; FORCE64
            ),
            osz_mem!(
                [Bndcl_bnd_rm32, Bndcl_bnd_rm32, Bndcl_bnd_rm64],
                [UInt32, UInt32, UInt64],
                Bnd, Ey; FORCE64
            ),
            osz_mem!(
                [Bndcu_bnd_rm32, Bndcu_bnd_rm32, Bndcu_bnd_rm64],
                [UInt32, UInt32, UInt64],
                Bnd, Ey; FORCE64
            ),
        ]),
    ),
    // 1B
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F1B, ReservedNop_rm32_r32_0F1B, ReservedNop_rm64_r64_0F1B],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Prefix(&[
            Entry::Mod(
                &osz_mem!(
                    [ReservedNop_rm16_r16_0F1B, ReservedNop_rm32_r32_0F1B, ReservedNop_rm64_r64_0F1B],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                &mem!(Bndstx_mib_bnd, Unknown, M, Bnd),
            ),
            osz_mem!(
                [Bndmov_bndm64_bnd, Bndmov_bndm64_bnd, Bndmov_bndm128_bnd],
                [Bnd32, Bnd32, Bnd64],
                Bndm, Bnd; FORCE64
            ),
            Entry::Mod(
                &osz_mem!(
                    [ReservedNop_rm16_r16_0F1B, ReservedNop_rm32_r32_0F1B, ReservedNop_rm64_r64_0F1B],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                &osz_mem!(
                    [Bndmk_bnd_m32, Bndmk_bnd_m32, Bndmk_bnd_m64],
                    [UInt32, UInt32, UInt64],
                    Bnd, M; FORCE64
                ),
            ),
            osz_mem!(
                [Bndcn_bnd_rm32, Bndcn_bnd_rm32, Bndcn_bnd_rm64],
                [UInt32, UInt32, UInt64],
                Bnd, Ey; FORCE64
            ),
        ]),
    ),
    // 1C
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Prefix(&[
            Entry::Mod(
                &osz_mem!(
                    [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
                &Entry::Group(&[
                    mem!(Cldemote_m8, UInt8, M),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                ]),
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1C, ReservedNop_rm32_r32_0F1C, ReservedNop_rm64_r64_0F1C],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
        ]),
    ),
    // 1D
    osz_mem!(
        [ReservedNop_rm16_r16_0F1D, ReservedNop_rm32_r32_0F1D, ReservedNop_rm64_r64_0F1D],
        [UInt16, UInt32, UInt64],
        Ev, Gv
    ),
    // 1E
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Rep(&[
            osz_mem!(
                [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            Entry::Mod(
                &Entry::Group(&[
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz!([Rdsspd_r32, Rdsspd_r32, Rdsspq_r64], Ry),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    osz_mem!(
                        [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                        [UInt16, UInt32, UInt64],
                        Ev, Gv
                    ),
                    Entry::Rm(&[
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                        op!(Endbr64),
                        op!(Endbr32),
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                        osz_mem!(
                            [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                            [UInt16, UInt32, UInt64],
                            Ev, Gv
                        ),
                    ]),
                ]),
                &osz_mem!(
                    [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                    [UInt16, UInt32, UInt64],
                    Ev, Gv
                ),
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1E, ReservedNop_rm32_r32_0F1E, ReservedNop_rm64_r64_0F1E],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
        ]),
    ),
    // 1F
    Entry::ReservedNop(
        &osz_mem!(
            [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
            [UInt16, UInt32, UInt64],
            Ev, Gv
        ),
        &Entry::Group(&[
            osz!([Nop_rm16, Nop_rm32, Nop_rm64], Ev),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
            osz_mem!(
                [ReservedNop_rm16_r16_0F1F, ReservedNop_rm32_r32_0F1F, ReservedNop_rm64_r64_0F1F],
                [UInt16, UInt32, UInt64],
                Ev, Gv
            ),
        ]),
    ),
    // 20
    Entry::Mode(&op!(Mov_r32_cr, Rn, Cr), &op!(Mov_r64_cr, Rn, Cr)),
    // 21
    Entry::Mode(&op!(Mov_r32_dr, Rn, Dr), &op!(Mov_r64_dr, Rn, Dr)),
    // 22
    Entry::Mode(&op!(Mov_cr_r32, Cr, Rn), &op!(Mov_cr_r64, Cr, Rn)),
    // 23
    Entry::Mode(&op!(Mov_dr_r32, Dr, Rn), &op!(Mov_dr_r64, Dr, Rn)),
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
        mem!(Movaps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Movapd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 29
    Entry::Prefix(&[
        mem!(Movaps_xmmm128_xmm, Packed128_Float32, W, V),
        mem!(Movapd_xmmm128_xmm, Packed128_Float64, W, V),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2A
    Entry::Prefix(&[
        mem!(Cvtpi2ps_xmm_mmm64, Packed64_Int32, V, Q),
        mem!(Cvtpi2pd_xmm_mmm64, Packed64_Int32, V, Q),
        osz_mem!(
            [Cvtsi2ss_xmm_rm32, Cvtsi2ss_xmm_rm32, Cvtsi2ss_xmm_rm64],
            [Int32, Int32, Int64],
            V, Ey
        ),
        osz_mem!(
            [Cvtsi2sd_xmm_rm32, Cvtsi2sd_xmm_rm32, Cvtsi2sd_xmm_rm64],
            [Int32, Int32, Int64],
            V, Ey
        ),
    ]),
    // 2B
    Entry::Prefix(&[
        mem!(Movntps_m128_xmm, Packed128_Float32, M, V),
        mem!(Movntpd_m128_xmm, Packed128_Float64, M, V),
        mem!(Movntss_m32_xmm, Float32, M, V),
        mem!(Movntsd_m64_xmm, Float64, M, V),
    ]),
    // 2C
    Entry::Prefix(&[
        mem!(Cvttps2pi_mm_xmmm64, Packed64_Float32, P, W),
        mem!(Cvttpd2pi_mm_xmmm128, Packed128_Float64, P, W),
        osz_mem!(
            [Cvttss2si_r32_xmmm32, Cvttss2si_r32_xmmm32, Cvttss2si_r64_xmmm32],
            [Float32, Float32, Float32],
            Gy, W
        ),
        osz_mem!(
            [Cvttsd2si_r32_xmmm64, Cvttsd2si_r32_xmmm64, Cvttsd2si_r64_xmmm64],
            [Float64, Float64, Float64],
            Gy, W
        ),
    ]),
    // 2D
    Entry::Prefix(&[
        mem!(Cvtps2pi_mm_xmmm64, Packed64_Float32, P, W),
        mem!(Cvtpd2pi_mm_xmmm128, Packed128_Float64, P, W),
        osz_mem!(
            [Cvtss2si_r32_xmmm32, Cvtss2si_r32_xmmm32, Cvtss2si_r64_xmmm32],
            [Float32, Float32, Float32],
            Gy, W
        ),
        osz_mem!(
            [Cvtsd2si_r32_xmmm64, Cvtsd2si_r32_xmmm64, Cvtsd2si_r64_xmmm64],
            [Float64, Float64, Float64],
            Gy, W
        ),
    ]),
    // 2E
    Entry::Prefix(&[
        mem!(Ucomiss_xmm_xmmm32, Float32, V, W),
        mem!(Ucomisd_xmm_xmmm64, Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 2F
    Entry::Prefix(&[
        mem!(Comiss_xmm_xmmm32, Float32, V, W),
        mem!(Comisd_xmm_xmmm64, Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 30
    op!(Wrmsr),
    // 31
    op!(Rdtsc),
    // 32
    op!(Rdmsr),
    // 33
    op!(Rdpmc),
    // 34
    op!(Sysenter),
    // 35
    osz!([Sysexitd, Sysexitd, Sysexitq]),
    // 36
    Entry::Invalid,
    // 37
    op!(Getsec),
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
    osz!([Cmovo_r16_rm16, Cmovo_r32_rm32, Cmovo_r64_rm64], Gv, Ev),
    // 41
    osz!([Cmovno_r16_rm16, Cmovno_r32_rm32, Cmovno_r64_rm64], Gv, Ev),
    // 42
    osz!([Cmovb_r16_rm16, Cmovb_r32_rm32, Cmovb_r64_rm64], Gv, Ev),
    // 43
    osz!([Cmovae_r16_rm16, Cmovae_r32_rm32, Cmovae_r64_rm64], Gv, Ev),
    // 44
    osz!([Cmove_r16_rm16, Cmove_r32_rm32, Cmove_r64_rm64], Gv, Ev),
    // 45
    osz!([Cmovne_r16_rm16, Cmovne_r32_rm32, Cmovne_r64_rm64], Gv, Ev),
    // 46
    osz!([Cmovbe_r16_rm16, Cmovbe_r32_rm32, Cmovbe_r64_rm64], Gv, Ev),
    // 47
    osz!([Cmova_r16_rm16, Cmova_r32_rm32, Cmova_r64_rm64], Gv, Ev),
    // 48
    osz!([Cmovs_r16_rm16, Cmovs_r32_rm32, Cmovs_r64_rm64], Gv, Ev),
    // 49
    osz!([Cmovns_r16_rm16, Cmovns_r32_rm32, Cmovns_r64_rm64], Gv, Ev),
    // 4A
    osz!([Cmovp_r16_rm16, Cmovp_r32_rm32, Cmovp_r64_rm64], Gv, Ev),
    // 4B
    osz!([Cmovnp_r16_rm16, Cmovnp_r32_rm32, Cmovnp_r64_rm64], Gv, Ev),
    // 4C
    osz!([Cmovl_r16_rm16, Cmovl_r32_rm32, Cmovl_r64_rm64], Gv, Ev),
    // 4D
    osz!([Cmovge_r16_rm16, Cmovge_r32_rm32, Cmovge_r64_rm64], Gv, Ev),
    // 4E
    osz!([Cmovle_r16_rm16, Cmovle_r32_rm32, Cmovle_r64_rm64], Gv, Ev),
    // 4F
    osz!([Cmovg_r16_rm16, Cmovg_r32_rm32, Cmovg_r64_rm64], Gv, Ev),
    // 50
    Entry::Prefix(&[
        osz!([Movmskps_r32_xmm, Movmskps_r32_xmm, Movmskps_r64_xmm], Gy, U),
        osz!([Movmskpd_r32_xmm, Movmskpd_r32_xmm, Movmskpd_r64_xmm], Gy, U),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 51
    Entry::Prefix(&[
        mem!(Sqrtps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Sqrtpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Sqrtss_xmm_xmmm32, Float32, V, W),
        mem!(Sqrtsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 52
    Entry::Prefix(&[
        mem!(Rsqrtps_xmm_xmmm128, Packed128_Float32, V, W),
        Entry::Invalid,
        mem!(Rsqrtss_xmm_xmmm32, Float32, V, W),
        Entry::Invalid,
    ]),
    // 53
    Entry::Prefix(&[
        mem!(Rcpps_xmm_xmmm128, Packed128_Float32, V, W),
        Entry::Invalid,
        mem!(Rcpss_xmm_xmmm32, Float32, V, W),
        Entry::Invalid,
    ]),
    // 54
    Entry::Prefix(&[
        mem!(Andps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Andpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 55
    Entry::Prefix(&[
        mem!(Andnps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Andnpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 56
    Entry::Prefix(&[
        mem!(Orps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Orpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 57
    Entry::Prefix(&[
        mem!(Xorps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Xorpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 58
    Entry::Prefix(&[
        mem!(Addps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Addpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Addss_xmm_xmmm32, Float32, V, W),
        mem!(Addsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 59
    Entry::Prefix(&[
        mem!(Mulps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Mulpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Mulss_xmm_xmmm32, Float32, V, W),
        mem!(Mulsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 5A
    Entry::Prefix(&[
        mem!(Cvtps2pd_xmm_xmmm64, Packed64_Float32, V, W),
        mem!(Cvtpd2ps_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Cvtss2sd_xmm_xmmm32, Float32, V, W),
        mem!(Cvtsd2ss_xmm_xmmm64, Float64, V, W),
    ]),
    // 5B
    Entry::Prefix(&[
        mem!(Cvtdq2ps_xmm_xmmm128, Packed128_Int32, V, W),
        mem!(Cvtps2dq_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Cvttps2dq_xmm_xmmm128, Packed128_Float32, V, W),
        Entry::Invalid,
    ]),
    // 5C
    Entry::Prefix(&[
        mem!(Subps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Subpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Subss_xmm_xmmm32, Float32, V, W),
        mem!(Subsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 5D
    Entry::Prefix(&[
        mem!(Minps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Minpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Minss_xmm_xmmm32, Float32, V, W),
        mem!(Minsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 5E
    Entry::Prefix(&[
        mem!(Divps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Divpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Divss_xmm_xmmm32, Float32, V, W),
        mem!(Divsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 5F
    Entry::Prefix(&[
        mem!(Maxps_xmm_xmmm128, Packed128_Float32, V, W),
        mem!(Maxpd_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Maxss_xmm_xmmm32, Float32, V, W),
        mem!(Maxsd_xmm_xmmm64, Float64, V, W),
    ]),
    // 60
    Entry::Prefix(&[
        mem!(Punpcklbw_mm_mmm32, Packed32_Int8, P, Q),
        mem!(Punpcklbw_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 61
    Entry::Prefix(&[
        mem!(Punpcklwd_mm_mmm32, Packed32_Int16, P, Q),
        mem!(Punpcklwd_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 62
    Entry::Prefix(&[
        mem!(Punpckldq_mm_mmm32, Int32, P, Q),
        mem!(Punpckldq_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 63
    Entry::Prefix(&[
        mem!(Packsswb_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Packsswb_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 64
    Entry::Prefix(&[
        mem!(Pcmpgtb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Pcmpgtb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 65
    Entry::Prefix(&[
        mem!(Pcmpgtw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pcmpgtw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 66
    Entry::Prefix(&[
        mem!(Pcmpgtd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Pcmpgtd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 67
    Entry::Prefix(&[
        mem!(Packuswb_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Packuswb_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 68
    Entry::Prefix(&[
        mem!(Punpckhbw_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Punpckhbw_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 69
    Entry::Prefix(&[
        mem!(Punpckhwd_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Punpckhwd_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6A
    Entry::Prefix(&[
        mem!(Punpckhdq_mm_mmm64, Packed64_UInt32, P, Q),
        mem!(Punpckhdq_xmm_xmmm128, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6B
    Entry::Prefix(&[
        mem!(Packssdw_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Packssdw_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6C
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Punpcklqdq_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6D
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Punpckhqdq_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6E
    Entry::Prefix(&[
        osz!([Movd_mm_rm32, Movd_mm_rm32, Movq_mm_rm64], P, Ey),
        osz!([Movd_xmm_rm32, Movd_xmm_rm32, Movq_xmm_rm64], V, Ey),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 6F
    Entry::Prefix(&[
        mem!(Movq_mm_mmm64, UInt64, P, Q),
        mem!(Movdqa_xmm_xmmm128, UInt128, V, W),
        mem!(Movdqu_xmm_xmmm128, UInt128, V, W),
        Entry::Invalid,
    ]),
    // 70
    Entry::Prefix(&[
        mem!(Pshufw_mm_mmm64_imm8, Packed64_UInt16, P, Q, Ib),
        mem!(Pshufd_xmm_xmmm128_imm8, Packed128_UInt32, V, W, Ib),
        mem!(Pshufhw_xmm_xmmm128_imm8, Packed128_UInt16, V, W, Ib),
        mem!(Pshuflw_xmm_xmmm128_imm8, Packed128_UInt16, V, W, Ib),
    ]),
    // 71
    Entry::Mod(
        &Entry::Group(&[
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Psrlw_mm_imm8, N, Ib),
                op!(Psrlw_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Psraw_mm_imm8, N, Ib),
                op!(Psraw_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Psllw_mm_imm8, N, Ib),
                op!(Psllw_xmm_imm8, U, Ib),
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
                op!(Psrld_mm_imm8, N, Ib),
                op!(Psrld_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Psrad_mm_imm8, N, Ib),
                op!(Psrad_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Pslld_mm_imm8, N, Ib),
                op!(Pslld_xmm_imm8, U, Ib),
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
                op!(Psrlq_mm_imm8, N, Ib),
                op!(Psrlq_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                Entry::Invalid,
                op!(Psrldq_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
            Entry::Invalid,
            Entry::Prefix(&[
                op!(Psllq_mm_imm8, N, Ib),
                op!(Psllq_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                Entry::Invalid,
                op!(Pslldq_xmm_imm8, U, Ib),
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ]),
        &Entry::Invalid,
    ),
    // 74
    Entry::Prefix(&[
        mem!(Pcmpeqb_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Pcmpeqb_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 75
    Entry::Prefix(&[
        mem!(Pcmpeqw_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Pcmpeqw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 76
    Entry::Prefix(&[
        mem!(Pcmpeqd_mm_mmm64, Packed64_UInt32, P, Q),
        mem!(Pcmpeqd_xmm_xmmm128, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // 77
    op!(Emms),
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
        mem!(Haddpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        mem!(Haddps_xmm_xmmm128, Packed128_Float32, V, W),
    ]),
    // 7D
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Hsubpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        mem!(Hsubps_xmm_xmmm128, Packed128_Float32, V, W),
    ]),
    // 7E
    Entry::Prefix(&[
        osz!([Movd_rm32_mm, Movd_rm32_mm, Movq_rm64_mm], Ey, P),
        osz!([Movd_rm32_xmm, Movd_rm32_xmm, Movq_rm64_xmm], Ey, V),
        mem!(Movq_xmm_xmmm64, UInt64, V, W),
        Entry::Invalid,
    ]),
    // 7F
    Entry::Prefix(&[
        mem!(Movq_mmm64_mm, UInt64, Q, P),
        mem!(Movdqa_xmmm128_xmm, UInt128, W, V),
        mem!(Movdqu_xmmm128_xmm, UInt128, W, V),
        Entry::Invalid,
    ]),
    // 80
    osz!([Jo_rel16, Jo_rel32_32, Jo_rel32_64], Jz; BRANCH64),
    // 81
    osz!([Jno_rel16, Jno_rel32_32, Jno_rel32_64], Jz; BRANCH64),
    // 82
    osz!([Jb_rel16, Jb_rel32_32, Jb_rel32_64], Jz; BRANCH64),
    // 83
    osz!([Jae_rel16, Jae_rel32_32, Jae_rel32_64], Jz; BRANCH64),
    // 84
    osz!([Je_rel16, Je_rel32_32, Je_rel32_64], Jz; BRANCH64),
    // 85
    osz!([Jne_rel16, Jne_rel32_32, Jne_rel32_64], Jz; BRANCH64),
    // 86
    osz!([Jbe_rel16, Jbe_rel32_32, Jbe_rel32_64], Jz; BRANCH64),
    // 87
    osz!([Ja_rel16, Ja_rel32_32, Ja_rel32_64], Jz; BRANCH64),
    // 88
    osz!([Js_rel16, Js_rel32_32, Js_rel32_64], Jz; BRANCH64),
    // 89
    osz!([Jns_rel16, Jns_rel32_32, Jns_rel32_64], Jz; BRANCH64),
    // 8A
    osz!([Jp_rel16, Jp_rel32_32, Jp_rel32_64], Jz; BRANCH64),
    // 8B
    osz!([Jnp_rel16, Jnp_rel32_32, Jnp_rel32_64], Jz; BRANCH64),
    // 8C
    osz!([Jl_rel16, Jl_rel32_32, Jl_rel32_64], Jz; BRANCH64),
    // 8D
    osz!([Jge_rel16, Jge_rel32_32, Jge_rel32_64], Jz; BRANCH64),
    // 8E
    osz!([Jle_rel16, Jle_rel32_32, Jle_rel32_64], Jz; BRANCH64),
    // 8F
    osz!([Jg_rel16, Jg_rel32_32, Jg_rel32_64], Jz; BRANCH64),
    // 90
    op!(Seto_rm8, Eb),
    // 91
    op!(Setno_rm8, Eb),
    // 92
    op!(Setb_rm8, Eb),
    // 93
    op!(Setae_rm8, Eb),
    // 94
    op!(Sete_rm8, Eb),
    // 95
    op!(Setne_rm8, Eb),
    // 96
    op!(Setbe_rm8, Eb),
    // 97
    op!(Seta_rm8, Eb),
    // 98
    op!(Sets_rm8, Eb),
    // 99
    op!(Setns_rm8, Eb),
    // 9A
    op!(Setp_rm8, Eb),
    // 9B
    op!(Setnp_rm8, Eb),
    // 9C
    op!(Setl_rm8, Eb),
    // 9D
    op!(Setge_rm8, Eb),
    // 9E
    op!(Setle_rm8, Eb),
    // 9F
    op!(Setg_rm8, Eb),
    // A0
    osz!([Pushw_FS, Pushd_FS, Pushq_FS], FS; DEF64),
    // A1
    osz!([Popw_FS, Popd_FS, Popq_FS], FS; DEF64),
    // A2
    op!(Cpuid),
    // A3
    osz!([Bt_rm16_r16, Bt_rm32_r32, Bt_rm64_r64], Ev, Gv),
    // A4
    osz!([Shld_rm16_r16_imm8, Shld_rm32_r32_imm8, Shld_rm64_r64_imm8], Ev, Gv, Ib),
    // A5
    osz!([Shld_rm16_r16_CL, Shld_rm32_r32_CL, Shld_rm64_r64_CL], Ev, Gv, CL),
    // A6
    Entry::Invalid,
    // A7
    Entry::Invalid,
    // A8
    osz!([Pushw_GS, Pushd_GS, Pushq_GS], GS; DEF64),
    // A9
    osz!([Popw_GS, Popd_GS, Popq_GS], GS; DEF64),
    // AA
    op!(Rsm),
    // AB
    osz!([Bts_rm16_r16, Bts_rm32_r32, Bts_rm64_r64], Ev, Gv; LOCK | HLE),
    // AC
    osz!([Shrd_rm16_r16_imm8, Shrd_rm32_r32_imm8, Shrd_rm64_r64_imm8], Ev, Gv, Ib),
    // AD
    osz!([Shrd_rm16_r16_CL, Shrd_rm32_r32_CL, Shrd_rm64_r64_CL], Ev, Gv, CL),
    // AE
    Entry::Mod(
        &Entry::Prefix(&[
            Entry::Group(&[
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
                op!(Lfence),
                op!(Mfence),
                op!(Sfence),
            ]),
            Entry::Invalid,
            Entry::Group(&[
                Entry::Mode(
                    &Entry::Invalid,
                    &osz!([Rdfsbase_r32, Rdfsbase_r32, Rdfsbase_r64], Ry),
                ),
                Entry::Mode(
                    &Entry::Invalid,
                    &osz!([Rdgsbase_r32, Rdgsbase_r32, Rdgsbase_r64], Ry),
                ),
                Entry::Mode(
                    &Entry::Invalid,
                    &osz!([Wrfsbase_r32, Wrfsbase_r32, Wrfsbase_r64], Ry),
                ),
                Entry::Mode(
                    &Entry::Invalid,
                    &osz!([Wrgsbase_r32, Wrgsbase_r32, Wrgsbase_r64], Ry),
                ),
                osz_mem!([Ptwrite_Ed, Ptwrite_Ed, Ptwrite_Eq], [UInt32, UInt32, UInt64], Ey),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Invalid,
        ]),
        &Entry::Group(&[
            Entry::W(
                &mem!(Fxsave_m512byte, Fxsave_512Byte, M),
                &mem!(Fxsave64_m512byte, Fxsave64_512Byte, M),
            ),
            Entry::W(
                &mem!(Fxrstor_m512byte, Fxsave_512Byte, M),
                &mem!(Fxrstor64_m512byte, Fxsave64_512Byte, M),
            ),
            mem!(Ldmxcsr_m32, UInt32, M),
            mem!(Stmxcsr_m32, UInt32, M),
            Entry::Rep(&[
                Entry::W(&mem!(Xsave_mem, Xsave, M), &mem!(Xsave64_mem, Xsave64, M)),
                osz_mem!([Ptwrite_Ed, Ptwrite_Ed, Ptwrite_Eq], [UInt32, UInt32, UInt64], Ey),
                Entry::Invalid,
            ]),
            Entry::W(&mem!(Xrstor_mem, Xsave, M), &mem!(Xrstor64_mem, Xsave64, M)),
            Entry::Prefix(&[
                Entry::W(&mem!(Xsaveopt_mem, Xsave, M), &mem!(Xsaveopt64_mem, Xsave64, M)),
                mem!(Clwb_m8, UInt8, M),
                Entry::Invalid,
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                mem!(Clflush_m8, UInt8, M),
                mem!(Clflushopt_m8, UInt8, M),
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ]),
    ),
    // AF
    osz_mem!([Imul_r16_rm16, Imul_r32_rm32, Imul_r64_rm64], [Int16, Int32, Int64], Gv, Ev),
    // B0
    op!(Cmpxchg_rm8_r8, Eb, Gb; LOCK | HLE),
    // B1
    osz!([Cmpxchg_rm16_r16, Cmpxchg_rm32_r32, Cmpxchg_rm64_r64], Ev, Gv; LOCK | HLE),
    // B2
    osz_mem!([Lss_r16_m1616, Lss_r32_m1632, Lss_r64_m1664], [SegPtr16, SegPtr32, SegPtr64], Gv, M),
    // B3
    osz!([Btr_rm16_r16, Btr_rm32_r32, Btr_rm64_r64], Ev, Gv; LOCK | HLE),
    // B4
    osz_mem!([Lfs_r16_m1616, Lfs_r32_m1632, Lfs_r64_m1664], [SegPtr16, SegPtr32, SegPtr64], Gv, M),
    // B5
    osz_mem!([Lgs_r16_m1616, Lgs_r32_m1632, Lgs_r64_m1664], [SegPtr16, SegPtr32, SegPtr64], Gv, M),
    // B6
    osz!([Movzx_r16_rm8, Movzx_r32_rm8, Movzx_r64_rm8], Gv, Eb),
    // B7
    osz!([Movzx_r16_rm16, Movzx_r32_rm16, Movzx_r64_rm16], Gv, Ew),
    // B8
    Entry::Rep(&[
        osz!([Jmpe_disp16, Jmpe_disp32, Jmpe_disp32], Jabs; NO64),
        osz!([Popcnt_r16_rm16, Popcnt_r32_rm32, Popcnt_r64_rm64], Gv, Ev),
        Entry::Invalid,
    ]),
    // B9
    osz!([Ud1_r16_rm16, Ud1_r32_rm32, Ud1_r64_rm64], Gv, Ev),
    // BA
    Entry::Group(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        osz!([Bt_rm16_imm8, Bt_rm32_imm8, Bt_rm64_imm8], Ev, Ib),
        osz!([Bts_rm16_imm8, Bts_rm32_imm8, Bts_rm64_imm8], Ev, Ib; LOCK | HLE),
        osz!([Btr_rm16_imm8, Btr_rm32_imm8, Btr_rm64_imm8], Ev, Ib; LOCK | HLE),
        osz!([Btc_rm16_imm8, Btc_rm32_imm8, Btc_rm64_imm8], Ev, Ib; LOCK | HLE),
    ]),
    // BB
    osz!([Btc_rm16_r16, Btc_rm32_r32, Btc_rm64_r64], Ev, Gv; LOCK | HLE),
    // BC
    Entry::Rep(&[
        osz!([Bsf_r16_rm16, Bsf_r32_rm32, Bsf_r64_rm64], Gv, Ev),
        osz!([Tzcnt_r16_rm16, Tzcnt_r32_rm32, Tzcnt_r64_rm64], Gv, Ev),
        osz!([Bsf_r16_rm16, Bsf_r32_rm32, Bsf_r64_rm64], Gv, Ev),
    ]),
    // BD
    Entry::Rep(&[
        osz!([Bsr_r16_rm16, Bsr_r32_rm32, Bsr_r64_rm64], Gv, Ev),
        osz!([Lzcnt_r16_rm16, Lzcnt_r32_rm32, Lzcnt_r64_rm64], Gv, Ev),
        osz!([Bsr_r16_rm16, Bsr_r32_rm32, Bsr_r64_rm64], Gv, Ev),
    ]),
    // BE
    osz_mem!([Movsx_r16_rm8, Movsx_r32_rm8, Movsx_r64_rm8], [Int8, Int8, Int8], Gv, Eb),
    // BF
    osz_mem!([Movsx_r16_rm16, Movsx_r32_rm16, Movsx_r64_rm16], [Int16, Int16, Int16], Gv, Ew),
    // C0
    op!(Xadd_rm8_r8, Eb, Gb; LOCK | HLE),
    // C1
    osz!([Xadd_rm16_r16, Xadd_rm32_r32, Xadd_rm64_r64], Ev, Gv; LOCK | HLE),
    // C2
    Entry::Prefix(&[
        mem!(Cmpps_xmm_xmmm128_imm8, Packed128_Float32, V, W, Ib),
        mem!(Cmppd_xmm_xmmm128_imm8, Packed128_Float64, V, W, Ib),
        mem!(Cmpss_xmm_xmmm32_imm8, Float32, V, W, Ib),
        mem!(Cmpsd_xmm_xmmm64_imm8, Float64, V, W, Ib),
    ]),
    // C3
    Entry::Prefix(&[
        Entry::Mod(
            &Entry::Invalid,
            &osz_mem!(
                [Movnti_m32_r32, Movnti_m32_r32, Movnti_m64_r64],
                [UInt32, UInt32, UInt64],
                M, Gy
            ),
        ),
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C4
    Entry::Prefix(&[
        osz_mem!(
            [Pinsrw_mm_r32m16_imm8, Pinsrw_mm_r32m16_imm8, Pinsrw_mm_r64m16_imm8],
            [UInt16, UInt16, UInt16],
            P, Ey, Ib
        ),
        osz_mem!(
            [Pinsrw_xmm_r32m16_imm8, Pinsrw_xmm_r32m16_imm8, Pinsrw_xmm_r64m16_imm8],
            [UInt16, UInt16, UInt16],
            V, Ey, Ib
        ),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C5
    Entry::Prefix(&[
        osz!([Pextrw_r32_mm_imm8, Pextrw_r32_mm_imm8, Pextrw_r64_mm_imm8], Gy, N, Ib),
        osz!([Pextrw_r32_xmm_imm8, Pextrw_r32_xmm_imm8, Pextrw_r64_xmm_imm8], Gy, U, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C6
    Entry::Prefix(&[
        mem!(Shufps_xmm_xmmm128_imm8, Packed128_Float32, V, W, Ib),
        mem!(Shufpd_xmm_xmmm128_imm8, Packed128_Float64, V, W, Ib),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // C7
    Entry::Mod(
        &Entry::Group(&[
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            Entry::Invalid,
            osz!([Rdrand_r16, Rdrand_r32, Rdrand_r64], Rv),
            Entry::Rep(&[
                osz!([Rdseed_r16, Rdseed_r32, Rdseed_r64], Rv),
                Entry::Mode(&op!(Rdpid_r32, Rn), &op!(Rdpid_r64, Rn)),
                Entry::Invalid,
            ]),
        ]),
        &Entry::Group(&[
            Entry::Invalid,
            Entry::W(
                &mem!(Cmpxchg8b_m64, UInt64, M; LOCK | HLE),
                &mem!(Cmpxchg16b_m128, UInt128, M; LOCK | HLE),
            ),
            Entry::Invalid,
            Entry::W(&mem!(Xrstors_m0, Xsave, M), &mem!(Xrstors64_m0, Xsave64, M)),
            Entry::W(&mem!(Xsavec_m0, Xsave, M), &mem!(Xsavec64_m0, Xsave64, M)),
            Entry::W(&mem!(Xsaves_m0, Xsave, M), &mem!(Xsaves64_m0, Xsave64, M)),
            Entry::Prefix(&[
                mem!(Vmptrld_m64, UInt64, M),
                mem!(Vmclear_m64, UInt64, M),
                mem!(Vmxon_m64, UInt64, M),
                Entry::Invalid,
            ]),
            Entry::Prefix(&[
                mem!(Vmptrst_m64, UInt64, M),
                Entry::Invalid,
                Entry::Invalid,
                Entry::Invalid,
            ]),
        ]),
    ),
    // C8
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // C9
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CA
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CB
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CC
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CD
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CE
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // CF
    osz!([Bswap_r16, Bswap_r32, Bswap_r64], Zv),
    // D0
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Addsubpd_xmm_xmmm128, Packed128_Float64, V, W),
        Entry::Invalid,
        mem!(Addsubps_xmm_xmmm128, Packed128_Float32, V, W),
    ]),
    // D1
    Entry::Prefix(&[
        mem!(Psrlw_mm_mmm64, UInt64, P, Q),
        mem!(Psrlw_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D2
    Entry::Prefix(&[
        mem!(Psrld_mm_mmm64, UInt64, P, Q),
        mem!(Psrld_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D3
    Entry::Prefix(&[
        mem!(Psrlq_mm_mmm64, UInt64, P, Q),
        mem!(Psrlq_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D4
    Entry::Prefix(&[
        mem!(Paddq_mm_mmm64, UInt64, P, Q),
        mem!(Paddq_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D5
    Entry::Prefix(&[
        mem!(Pmullw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pmullw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D6
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Movq_xmmm64_xmm, UInt64, W, V),
        op!(Movq2dq_xmm_mm, V, N),
        op!(Movdq2q_mm_xmm, P, U),
    ]),
    // D7
    Entry::Prefix(&[
        osz!([Pmovmskb_r32_mm, Pmovmskb_r32_mm, Pmovmskb_r64_mm], Gy, N),
        osz!([Pmovmskb_r32_xmm, Pmovmskb_r32_xmm, Pmovmskb_r64_xmm], Gy, U),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D8
    Entry::Prefix(&[
        mem!(Psubusb_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Psubusb_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // D9
    Entry::Prefix(&[
        mem!(Psubusw_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Psubusw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DA
    Entry::Prefix(&[
        mem!(Pminub_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Pminub_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DB
    Entry::Prefix(&[
        mem!(Pand_mm_mmm64, UInt64, P, Q),
        mem!(Pand_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DC
    Entry::Prefix(&[
        mem!(Paddusb_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Paddusb_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DD
    Entry::Prefix(&[
        mem!(Paddusw_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Paddusw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DE
    Entry::Prefix(&[
        mem!(Pmaxub_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Pmaxub_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // DF
    Entry::Prefix(&[
        mem!(Pandn_mm_mmm64, UInt64, P, Q),
        mem!(Pandn_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E0
    Entry::Prefix(&[
        mem!(Pavgb_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Pavgb_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E1
    Entry::Prefix(&[
        mem!(Psraw_mm_mmm64, UInt64, P, Q),
        mem!(Psraw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E2
    Entry::Prefix(&[
        mem!(Psrad_mm_mmm64, UInt64, P, Q),
        mem!(Psrad_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E3
    Entry::Prefix(&[
        mem!(Pavgw_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Pavgw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E4
    Entry::Prefix(&[
        mem!(Pmulhuw_mm_mmm64, Packed64_UInt16, P, Q),
        mem!(Pmulhuw_xmm_xmmm128, Packed128_UInt16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E5
    Entry::Prefix(&[
        mem!(Pmulhw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pmulhw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E6
    Entry::Prefix(&[
        Entry::Invalid,
        mem!(Cvttpd2dq_xmm_xmmm128, Packed128_Float64, V, W),
        mem!(Cvtdq2pd_xmm_xmmm64, Packed64_Int32, V, W),
        mem!(Cvtpd2dq_xmm_xmmm128, Packed128_Float64, V, W),
    ]),
    // E7
    Entry::Prefix(&[
        mem!(Movntq_m64_mm, UInt64, M, P),
        mem!(Movntdq_m128_xmm, UInt128, M, V),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E8
    Entry::Prefix(&[
        mem!(Psubsb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Psubsb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // E9
    Entry::Prefix(&[
        mem!(Psubsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Psubsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EA
    Entry::Prefix(&[
        mem!(Pminsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pminsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EB
    Entry::Prefix(&[
        mem!(Por_mm_mmm64, UInt64, P, Q),
        mem!(Por_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EC
    Entry::Prefix(&[
        mem!(Paddsb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Paddsb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // ED
    Entry::Prefix(&[
        mem!(Paddsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Paddsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EE
    Entry::Prefix(&[
        mem!(Pmaxsw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pmaxsw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // EF
    Entry::Prefix(&[
        mem!(Pxor_mm_mmm64, UInt64, P, Q),
        mem!(Pxor_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F0
    Entry::Prefix(&[
        Entry::Invalid,
        Entry::Invalid,
        Entry::Invalid,
        mem!(Lddqu_xmm_m128, UInt128, V, M),
    ]),
    // F1
    Entry::Prefix(&[
        mem!(Psllw_mm_mmm64, UInt64, P, Q),
        mem!(Psllw_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F2
    Entry::Prefix(&[
        mem!(Pslld_mm_mmm64, UInt64, P, Q),
        mem!(Pslld_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F3
    Entry::Prefix(&[
        mem!(Psllq_mm_mmm64, UInt64, P, Q),
        mem!(Psllq_xmm_xmmm128, Packed128_UInt64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F4
    Entry::Prefix(&[
        mem!(Pmuludq_mm_mmm64, Packed64_UInt32, P, Q),
        mem!(Pmuludq_xmm_xmmm128, Packed128_UInt32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F5
    Entry::Prefix(&[
        mem!(Pmaddwd_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Pmaddwd_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F6
    Entry::Prefix(&[
        mem!(Psadbw_mm_mmm64, Packed64_UInt8, P, Q),
        mem!(Psadbw_xmm_xmmm128, Packed128_UInt8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F7
    Entry::Prefix(&[
        mem!(Maskmovq_rDI_mm_mm, UInt64, Xdi, P, N),
        mem!(Maskmovdqu_rDI_xmm_xmm, UInt128, Xdi, V, U),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F8
    Entry::Prefix(&[
        mem!(Psubb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Psubb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // F9
    Entry::Prefix(&[
        mem!(Psubw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Psubw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FA
    Entry::Prefix(&[
        mem!(Psubd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Psubd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FB
    Entry::Prefix(&[
        mem!(Psubq_mm_mmm64, Int64, P, Q),
        mem!(Psubq_xmm_xmmm128, Packed128_Int64, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FC
    Entry::Prefix(&[
        mem!(Paddb_mm_mmm64, Packed64_Int8, P, Q),
        mem!(Paddb_xmm_xmmm128, Packed128_Int8, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FD
    Entry::Prefix(&[
        mem!(Paddw_mm_mmm64, Packed64_Int16, P, Q),
        mem!(Paddw_xmm_xmmm128, Packed128_Int16, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FE
    Entry::Prefix(&[
        mem!(Paddd_mm_mmm64, Packed64_Int32, P, Q),
        mem!(Paddd_xmm_xmmm128, Packed128_Int32, V, W),
        Entry::Invalid,
        Entry::Invalid,
    ]),
    // FF
    osz!([Ud0_r16_rm16, Ud0_r32_rm32, Ud0_r64_rm64], Gv, Ev),
];
