use crate::DeltaRecord;
use std::io::{self, Write};
use std::str::FromStr;

/// Consumes records as they're encoded.
pub trait Sink {
    fn emit(&mut self, record: &DeltaRecord) -> io::Result<()>;
}

impl Sink for Vec<DeltaRecord> {
    fn emit(&mut self, record: &DeltaRecord) -> io::Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One `DEFB` directive per record.
    Asm,
    /// A single `PROGMEM` byte array.
    C,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asm" => Ok(Self::Asm),
            "c" => Ok(Self::C),
            _ => Err(format!("unknown format `{}` (expected `asm` or `c`)", s)),
        }
    }
}

/// Writes records out as program data.
pub struct Listing<W: Write> {
    out: W,
    format: Format,
    column: usize,
}

impl<W: Write> Listing<W> {
    const BYTES_PER_LINE: usize = 25;

    /// `label` names the array in the C format and is ignored otherwise.
    pub fn new(mut out: W, format: Format, label: &str) -> io::Result<Self> {
        if format == Format::C {
            writeln!(out, "const uint8_t {}[] PROGMEM = {{", label)?;
        }

        Ok(Self {
            out,
            format,
            column: 0,
        })
    }

    pub fn finish(mut self) -> io::Result<W> {
        if self.format == Format::C {
            if self.column > 0 {
                writeln!(self.out)?;
            }

            writeln!(self.out, "}};")?;
        }

        self.out.flush()?;

        Ok(self.out)
    }

    fn emit_asm(&mut self, record: &DeltaRecord) -> io::Result<()> {
        write!(self.out, "DEFB {:#04x}", record.mask())?;

        for byte in record.body() {
            write!(self.out, ",{:#04x}", byte)?;
        }

        writeln!(self.out)
    }

    fn emit_c(&mut self, record: &DeltaRecord) -> io::Result<()> {
        for byte in record.serialize() {
            if self.column == 0 {
                write!(self.out, "  ")?;
            }

            write!(self.out, "{:#04x}, ", byte)?;

            self.column += 1;

            if self.column == Self::BYTES_PER_LINE {
                writeln!(self.out)?;
                self.column = 0;
            }
        }

        Ok(())
    }
}

impl<W: Write> Sink for Listing<W> {
    fn emit(&mut self, record: &DeltaRecord) -> io::Result<()> {
        match self.format {
            Format::Asm => self.emit_asm(record),
            Format::C => self.emit_c(record),
        }
    }
}
