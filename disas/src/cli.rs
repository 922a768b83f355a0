use std::{cmp, num::ParseIntError, str::FromStr};

use bpaf::*;
use xdec_x86::Bitness;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Off,
    On,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Demangle {
    None,
    Auto,
    Gnuv3,
    Rust,
}

impl FromStr for Demangle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Demangle::None),
            "auto" => Ok(Demangle::Auto),
            "gnu-v3" => Ok(Demangle::Gnuv3),
            "rust" => Ok(Demangle::Rust),
            _ => Err("invalid demangle style"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cli {
    pub bitness: Option<Bitness>,
    pub raw: bool,
    pub hex: Option<String>,
    pub amd_branches: bool,
    pub no_invalid_check: bool,
    pub force_reserved_nop: bool,
    pub sections: Vec<String>,
    pub color: Color,
    pub demangle: Demangle,
    pub start_address: u64,
    pub stop_address: u64,
    pub threads: usize,
    pub threads_block_size: usize,
    pub path: String,
}

fn parse_address(s: &str) -> Result<u64, ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

pub fn parse_cli() -> Cli {
    let bitness = short('b')
        .long("bitness")
        .help("Decode as 16, 32 or 64-bit code [default: from the file, 64 for raw input]")
        .argument::<u32>("BITS")
        .parse(|bits| Bitness::from_bits(bits).ok_or(format!("invalid bitness {bits}")))
        .optional();

    let raw = long("raw")
        .help("Treat FILE as a flat binary instead of an object file")
        .switch();

    let hex = long("hex")
        .help("Decode hex encoded BYTES instead of reading a file")
        .argument::<String>("BYTES")
        .optional();

    let amd_branches = long("amd-branches")
        .help("Near branches with an operand size prefix are 16-bit in 64-bit mode")
        .switch();

    let no_invalid_check = long("no-invalid-check")
        .help("Accept encodings that are undefined on hardware but decode unambiguously")
        .switch();

    let force_reserved_nop = long("force-reserved-nop")
        .help("Decode 0F 0D and 0F 18..0F 1F as reserved NOPs")
        .switch();

    #[cfg(feature = "color")]
    let auto_color =
        supports_color::on(supports_color::Stream::Stdout).map_or(Color::Off, |_| Color::On);

    #[cfg(not(feature = "color"))]
    let auto_color = Color::Off;

    let color = long("color")
        .help("Enable or disable color output [default: auto, valid modes: off, on, auto]")
        .argument::<String>("MODE")
        .parse(move |s| match s.as_str() {
            "off" => Ok(Color::Off),
            "on" => Ok(Color::On),
            "auto" => Ok(auto_color),
            _ => Err(format!("invalid color {s}")),
        })
        .fallback(auto_color);

    let demangle_flag = short('C')
        .long("demangle")
        .switch()
        .hide()
        .map(|_| Demangle::Auto);
    let demangle_arg = short('C')
        .long("demangle")
        .help("Decode mangled symbol names [default: auto, valid styles: none, auto, gnu-v3, rust]")
        .argument::<Demangle>("STYLE");
    let demangle = construct!([demangle_arg, demangle_flag])
        .last()
        .fallback(Demangle::Auto);

    let sections = short('j')
        .long("section")
        .help("Only disassemble section NAME")
        .argument("NAME")
        .many();

    let start_address = long("start-address")
        .help("Skip code below ADDR")
        .argument::<String>("ADDR")
        .parse(move |s| parse_address(&s))
        .fallback(0);

    let stop_address = long("stop-address")
        .help("Stop at ADDR, exclusive")
        .argument::<String>("ADDR")
        .parse(move |s| parse_address(&s))
        .fallback(u64::MAX);

    let num_cpus = std::thread::available_parallelism()
        .map(|i| i.get())
        .unwrap_or(1);

    #[cfg(feature = "parallel")]
    let threads_help = &*format!("Set the number of threads to use [default: {num_cpus}]");

    #[cfg(not(feature = "parallel"))]
    let threads_help = "Set the number of threads to use [disabled at compile]";

    let threads = long("threads")
        .help(threads_help)
        .argument("NUM")
        .map(move |i| match i {
            0 => num_cpus,
            _ => i,
        })
        .fallback(cmp::min(4, num_cpus));

    let threads_block_size = long("threads-block-size")
        .help("Approximate size of a block decoded by one thread [default: 4096]")
        .argument("BYTES")
        .map(|i: usize| i.clamp(256, 1024 * 1024))
        .fallback(4096);

    let path = positional("FILE")
        .help("Object file or flat binary to disassemble")
        .fallback("a.out".into());

    construct!(Cli {
        bitness,
        raw,
        hex,
        amd_branches,
        no_invalid_check,
        force_reserved_nop,
        sections,
        color,
        demangle,
        start_address,
        stop_address,
        threads,
        threads_block_size,
        path,
    })
    .to_options()
    .version(env!("CARGO_PKG_VERSION"))
    .descr("Disassemble x86 code from object files, flat binaries or hex strings")
    .run()
}

/// Parses hex encoded bytes, whitespace between groups is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits in {s:?}"));
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid hex byte {:?}", String::from_utf8_lossy(pair)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex() {
        assert_eq!(parse_hex("4891 c3"), Ok(vec![0x48, 0x91, 0xc3]));
        assert_eq!(parse_hex(""), Ok(vec![]));
        assert!(parse_hex("489").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn address() {
        assert_eq!(parse_address("0x1000"), Ok(0x1000));
        assert_eq!(parse_address("4096"), Ok(4096));
        assert!(parse_address("0xg").is_err());
    }
}
