#[cfg(feature = "print")]
use std::io::{Cursor, Write};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xdec_test::test::Parser;
use xdec_x86::{Decoder, Instruction, Options};

const SOURCES: &[(&str, &str)] = &[
    (
        "legacy",
        concat!(
            include_str!("../tests/legacy.test"),
            include_str!("../tests/prefixes.test"),
            include_str!("../tests/x87.test"),
        ),
    ),
    ("sse", include_str!("../tests/sse.test")),
    ("vex", include_str!("../tests/vex.test")),
    ("evex", include_str!("../tests/evex.test")),
];

fn bench_impl<const PRINT: bool>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(name);
    for (name, source) in SOURCES {
        let (_, code) = Parser::parse_all(source).unwrap();
        let opts = Options::default();
        #[cfg(feature = "print")]
        let mut buffer = Cursor::new(Vec::new());
        let mut insn = Instruction::default();

        group.throughput(Throughput::Bytes(code.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &code, |b, code| {
            b.iter(|| {
                let mut decoder = Decoder::new(code, opts);
                let mut count = 0;
                while decoder.can_decode() {
                    match decoder.decode_out(&mut insn) {
                        Ok(()) => {
                            count += 1;

                            #[cfg(feature = "print")]
                            if PRINT {
                                buffer.set_position(0);
                                write!(&mut buffer, "{insn}").unwrap();
                            }
                        }
                        // some samples only decode with their fixture flags
                        Err(_) => decoder.set_position(decoder.position() + 1),
                    }
                }
                count
            })
        });
    }
}

fn x86_bench(c: &mut Criterion) {
    bench_impl::<false>(c, "decode");
    #[cfg(feature = "print")]
    bench_impl::<true>(c, "print");
}

criterion_group!(benches, x86_bench);
criterion_main!(benches);
