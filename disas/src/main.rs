#[macro_use]
extern crate log;

mod cli;

#[cfg(feature = "parallel")]
mod parallel;

use std::{
    error::Error,
    fmt::{self, Display},
    fs,
    io::{self, BufWriter, Write},
    process,
};

use object::{Object, ObjectSection, SymbolMap, SymbolMapName};
use xdec_x86::{Bitness, Decoder, Instruction, Options, INSN_MAX_LEN};

use crate::cli::{Cli, Color, Demangle};

fn unsupported_arch() -> ! {
    eprintln!("error: unsupported architecture");
    process::exit(1);
}

#[cfg(feature = "demangle")]
enum DemangledSymbol<'a> {
    Cpp(cpp_demangle::Symbol<&'a str>),
    Rust(rustc_demangle::Demangle<'a>),
}

#[cfg(feature = "demangle")]
impl fmt::Display for DemangledSymbol<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cpp(s) => s.fmt(fmt),
            Self::Rust(s) => s.fmt(fmt),
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Style {
    Address,
    Symbol,
    Error,
}

struct Styled<T> {
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    color: Color,
    #[cfg_attr(not(feature = "color"), allow(dead_code))]
    style: Style,
    value: T,
}

impl<T: Display> Display for Styled<T> {
    #[cfg(feature = "color")]
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use owo_colors::OwoColorize;

        match self.color {
            Color::Off => self.value.fmt(fmt),
            Color::On => match self.style {
                Style::Address => self.value.magenta().fmt(fmt),
                Style::Symbol => self.value.green().fmt(fmt),
                Style::Error => self.value.red().fmt(fmt),
            },
        }
    }

    #[cfg(not(feature = "color"))]
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(fmt)
    }
}

struct Hex<'a>(&'a [u8]);

impl Display for Hex<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for byte in self.0 {
            write!(fmt, "{byte:02x}")?;
        }
        Ok(())
    }
}

// ignore broken pipe error
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

struct App<'a> {
    opts: Options,
    symbols: Option<SymbolMap<SymbolMapName<'a>>>,

    color: Color,

    #[cfg_attr(not(feature = "demangle"), allow(dead_code))]
    demangle: Demangle,

    start_address: u64,
    stop_address: u64,

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    threads: usize,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    threads_block_size: usize,
}

impl<'a> App<'a> {
    fn new(cli: &Cli, bitness: Bitness, symbols: Option<SymbolMap<SymbolMapName<'a>>>) -> Self {
        let opts = Options {
            bitness,
            amd_branches: cli.amd_branches,
            no_invalid_check: cli.no_invalid_check,
            force_reserved_nop: cli.force_reserved_nop,
            ..Options::default()
        };
        Self {
            opts,
            symbols,
            color: cli.color,
            demangle: cli.demangle,
            start_address: cli.start_address,
            stop_address: cli.stop_address,
            threads: cli.threads,
            threads_block_size: cli.threads_block_size,
        }
    }

    fn styled<T: Display>(&self, style: Style, value: T) -> Styled<T> {
        Styled {
            color: self.color,
            style,
            value,
        }
    }

    fn create_decoder<'d>(&self, address: u64, data: &'d [u8]) -> Decoder<'d> {
        let opts = Options {
            ip: address,
            ..self.opts
        };
        Decoder::new(data, opts)
    }

    #[cfg(feature = "demangle")]
    fn demangle<'s>(&self, symbol: &'s str) -> Option<DemangledSymbol<'s>> {
        let rust = || rustc_demangle::try_demangle(symbol).ok().map(DemangledSymbol::Rust);
        let cpp = || {
            cpp_demangle::Symbol::new(symbol)
                .ok()
                .map(DemangledSymbol::Cpp)
        };
        match self.demangle {
            Demangle::None => None,
            Demangle::Auto => rust().or_else(cpp),
            Demangle::Gnuv3 => cpp(),
            Demangle::Rust => rust(),
        }
    }

    fn write_label(&self, out: &mut dyn Write, address: u64) -> io::Result<()> {
        let name = match self.symbols.as_ref().and_then(|s| s.get(address)) {
            Some(symbol) if symbol.address() == address => symbol.name(),
            _ => return Ok(()),
        };
        write!(out, "\n{:016x} <", address)?;
        #[cfg(feature = "demangle")]
        if let Some(demangled) = self.demangle(name) {
            return writeln!(out, "{}>:", self.styled(Style::Symbol, demangled));
        }
        writeln!(out, "{}>:", self.styled(Style::Symbol, name))
    }

    /// Number of bytes of whole instructions starting at `address` that cover at least `size`
    /// bytes of `data`.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn block_len(&self, address: u64, data: &[u8], size: usize) -> usize {
        let mut decoder = self.create_decoder(address, data);
        while decoder.position() < size && decoder.next().is_some() {}
        decoder.position()
    }

    fn write_line(
        &self,
        out: &mut dyn Write,
        address: u64,
        bytes: &[u8],
        text: impl Display,
    ) -> io::Result<()> {
        let address = format!("{address:8x}");
        let bytes = Hex(bytes).to_string();
        writeln!(
            out,
            "{}:  {bytes:<width$}  {text}",
            self.styled(Style::Address, address),
            width = INSN_MAX_LEN * 2
        )
    }

    /// Prints every instruction in `data` and returns the number of bytes that failed to decode.
    fn write_code(&self, out: &mut dyn Write, address: u64, data: &[u8]) -> io::Result<usize> {
        let mut decoder = self.create_decoder(address, data);
        let mut insn = Instruction::default();
        let mut invalid = 0;
        while decoder.can_decode() {
            let start = decoder.position();
            let ip = decoder.ip();
            self.write_label(out, ip)?;
            match decoder.decode_out(&mut insn) {
                Ok(()) => self.write_line(out, ip, &data[start..decoder.position()], insn)?,
                Err(err) => {
                    debug!("{ip:#x}: {err}");
                    let text = self.styled(Style::Error, format!("({err})"));
                    self.write_line(out, ip, &data[start..start + 1], text)?;
                    decoder.set_position(start + 1);
                    decoder.set_ip(ip.wrapping_add(1));
                    invalid += 1;
                }
            }
        }
        Ok(invalid)
    }

    fn disassemble_code(&self, address: u64, data: &[u8]) -> io::Result<usize> {
        let mut out = BufWriter::new(io::stdout().lock());
        let invalid = self.write_code(&mut out, address, data)?;
        out.flush()?;
        Ok(invalid)
    }

    fn disassemble_section(&self, name: &str, address: u64, data: &[u8]) -> io::Result<()> {
        let mut data = data;
        let mut start_address = address;
        let stop_address = start_address + data.len() as u64;

        if start_address >= self.stop_address || stop_address <= self.start_address {
            return Ok(());
        }

        if self.stop_address < stop_address {
            data = &data[..(self.stop_address - start_address) as usize];
        }

        if start_address < self.start_address {
            data = &data[(self.start_address - start_address) as usize..];
            start_address = self.start_address;
        }

        ignore_broken_pipe({
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "\nDisassembly of section {name}:")
        })?;

        debug!("section {name}: {start_address:#x}, {} bytes", data.len());

        #[cfg(feature = "parallel")]
        if self.threads > 1 && data.len() >= 1024 * 64 {
            return parallel::disassemble_code(self, start_address, data);
        }

        match self.disassemble_code(start_address, data) {
            Ok(0) => Ok(()),
            Ok(invalid) => {
                warn!("section {name}: {invalid} bytes failed to decode");
                Ok(())
            }
            Err(err) => ignore_broken_pipe(Err(err)),
        }
    }
}

fn file_bitness(file: &object::File) -> Bitness {
    use object::Architecture as A;

    match file.architecture() {
        A::I386 => Bitness::Bits32,
        A::X86_64 | A::X86_64_X32 => Bitness::Bits64,
        _ => unsupported_arch(),
    }
}

fn file_format(file: &object::File) -> String {
    use object::{Architecture as A, BinaryFormat as F};

    let format = match file.format() {
        F::Elf if file.is_64() => "elf64",
        F::Elf => "elf32",
        F::Pe => "pe",
        F::Coff => "coff",
        F::MachO => "mach-o",
        _ => "unknown",
    };
    let arch = match file.architecture() {
        A::I386 => "i386",
        _ => "x86-64",
    };
    format!("{format}-{arch}")
}

fn disassemble_object(cli: &Cli, data: &[u8]) -> Result<(), Box<dyn Error>> {
    let file = object::File::parse(data)?;
    let bitness = cli.bitness.unwrap_or_else(|| file_bitness(&file));

    println!();
    println!("{}:     file format {}", cli.path, file_format(&file));

    let app = App::new(cli, bitness, Some(file.symbol_map()));
    if cli.sections.is_empty() {
        for section in file.sections() {
            if section.kind() == object::SectionKind::Text {
                app.disassemble_section(section.name()?, section.address(), section.data()?)?;
            }
        }
    } else {
        for name in &cli.sections {
            match file.section_by_name(name) {
                Some(section) => {
                    app.disassemble_section(name, section.address(), section.data()?)?
                }
                None => warn!("section {name} not found"),
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = cli::parse_cli();
    let bitness = cli.bitness.unwrap_or_default();

    if let Some(hex) = &cli.hex {
        let data = cli::parse_hex(hex)?;
        App::new(&cli, bitness, None).disassemble_section("hex", 0, &data)?;
        return Ok(());
    }

    let data = fs::read(&cli.path)?;
    if cli.raw {
        App::new(&cli, bitness, None).disassemble_section("raw", 0, &data)?;
        return Ok(());
    }

    disassemble_object(&cli, &data)
}
