#![cfg(feature = "print")]

use xdec_core::ArchDecoder;
use xdec_test::test::{self, Runner, Test};
use xdec_x86::{self as x86, Bitness, Instruction, X86Decoder};

#[derive(Default)]
struct X86 {
    flags: &'static str,
}

impl Runner for X86 {
    type Insn = Instruction;

    fn create(&mut self, test: &Test) -> Box<dyn ArchDecoder<Insn = Instruction>> {
        let mut opts = x86::Options::default();

        let flags = test::parse_flags(self.flags).chain(test::parse_flags(test.comment));
        for (name, state) in flags {
            match name {
                "bits16" if state => opts.bitness = Bitness::Bits16,
                "bits32" if state => opts.bitness = Bitness::Bits32,
                "bits64" if state => opts.bitness = Bitness::Bits64,
                "amd-branches" => opts.amd_branches = state,
                "no-invalid-check" => opts.no_invalid_check = state,
                "force-reserved-nop" => opts.force_reserved_nop = state,
                _ => panic!("unexpected flag {name}"),
            }
        }

        Box::new(X86Decoder::new(&opts))
    }
}

macro_rules! test {
    ($name:ident, $file:expr, $flags:expr) => {
        #[test]
        fn $name() -> Result<(), String> {
            X86 { flags: $flags }.run($file, include_str!($file))
        }
    };
}

test!(legacy, "legacy.test", "+bits64");
test!(prefixes, "prefixes.test", "+bits64");
test!(x87, "x87.test", "+bits64");
test!(sse, "sse.test", "+bits64");
test!(vex, "vex.test", "+bits64");
test!(evex, "evex.test", "+bits64");
test!(invalid, "invalid.test", "+bits64");
test!(relaxed, "relaxed.test", "+bits64 +no-invalid-check");
test!(avx, "avx.test", "+bits64");
test!(avx512, "avx512.test", "+bits64");
test!(xop, "xop.test", "+bits64");
test!(d3now, "d3now.test", "+bits64");
test!(general64, "general64.test", "+bits64");

test!(bits32, "bits32.test", "+bits32");
test!(general32, "general32.test", "+bits32");
test!(bits16, "bits16.test", "+bits16");
test!(general16, "general16.test", "+bits16");
