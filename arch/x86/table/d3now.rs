//! 3DNow! instructions: `0F 0F /r ib` with the opcode in the trailing imm8.

use super::*;

/// Template of `0F 0F`, the code comes from [`D3NOW_SUFFIX`].
pub(crate) static D3NOW: Template = Template {
    codes: [Code::INVALID; 3],
    ops: &[Op::P, Op::Q],
    mem: [MemorySize::Unknown; 3],
    bcst: [MemorySize::Unknown; 3],
    flags: SUFFIX,
};

/// Suffix, code and memory operand size, sorted by the suffix.
pub(crate) static D3NOW_SUFFIX: [(u8, Code, MemorySize); 26] = [
    (0x0c, Code::D3NOW_Pi2fw_mm_mmm64, MemorySize::Packed64_Int16),
    (0x0d, Code::D3NOW_Pi2fd_mm_mmm64, MemorySize::Packed64_Int32),
    (0x1c, Code::D3NOW_Pf2iw_mm_mmm64, MemorySize::Packed64_Float32),
    (0x1d, Code::D3NOW_Pf2id_mm_mmm64, MemorySize::Packed64_Float32),
    (0x86, Code::D3NOW_Pfrcpv_mm_mmm64, MemorySize::Packed64_Float32),
    (0x87, Code::D3NOW_Pfrsqrtv_mm_mmm64, MemorySize::Packed64_Float32),
    (0x8a, Code::D3NOW_Pfnacc_mm_mmm64, MemorySize::Packed64_Float32),
    (0x8e, Code::D3NOW_Pfpnacc_mm_mmm64, MemorySize::Packed64_Float32),
    (0x90, Code::D3NOW_Pfcmpge_mm_mmm64, MemorySize::Packed64_Float32),
    (0x94, Code::D3NOW_Pfmin_mm_mmm64, MemorySize::Packed64_Float32),
    (0x96, Code::D3NOW_Pfrcp_mm_mmm64, MemorySize::Packed64_Float32),
    (0x97, Code::D3NOW_Pfrsqrt_mm_mmm64, MemorySize::Packed64_Float32),
    (0x9a, Code::D3NOW_Pfsub_mm_mmm64, MemorySize::Packed64_Float32),
    (0x9e, Code::D3NOW_Pfadd_mm_mmm64, MemorySize::Packed64_Float32),
    (0xa0, Code::D3NOW_Pfcmpgt_mm_mmm64, MemorySize::Packed64_Float32),
    (0xa4, Code::D3NOW_Pfmax_mm_mmm64, MemorySize::Packed64_Float32),
    (0xa6, Code::D3NOW_Pfrcpit1_mm_mmm64, MemorySize::Packed64_Float32),
    (0xa7, Code::D3NOW_Pfrsqit1_mm_mmm64, MemorySize::Packed64_Float32),
    (0xaa, Code::D3NOW_Pfsubr_mm_mmm64, MemorySize::Packed64_Float32),
    (0xae, Code::D3NOW_Pfacc_mm_mmm64, MemorySize::Packed64_Float32),
    (0xb0, Code::D3NOW_Pfcmpeq_mm_mmm64, MemorySize::Packed64_Float32),
    (0xb4, Code::D3NOW_Pfmul_mm_mmm64, MemorySize::Packed64_Float32),
    (0xb6, Code::D3NOW_Pfrcpit2_mm_mmm64, MemorySize::Packed64_Float32),
    (0xb7, Code::D3NOW_Pmulhrw_mm_mmm64, MemorySize::Packed64_Int16),
    (0xbb, Code::D3NOW_Pswapd_mm_mmm64, MemorySize::Packed64_UInt32),
    (0xbf, Code::D3NOW_Pavgusb_mm_mmm64, MemorySize::Packed64_UInt8),
];
