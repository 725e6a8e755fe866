use std::fmt::Display;
use std::io::{self, Stdout, Write};

use colored::*;
use ouilookup_common::lookup::{LookupResult, Manufacturer};
use ouilookup_common::network::mac::MacAddress;

use crate::terminal::colors;

const USAGE: &[(&str, &str)] = &[
    ("--mac", "MAC a consultar. Ej: aa:bb:cc:00:00:00."),
    ("--arp", "Muestra los fabricantes de los host disponibles en la tabla ARP."),
    ("--help", "Muestra este mensaje y termina."),
    ("-v", "Aumenta el detalle del registro en stderr (-v, -vv, -vvv)."),
];

/// Renders everything the user reads on stdout.
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print<T: AsRef<str>>(&mut self, msg: T) -> io::Result<()> {
        writeln!(self.out, "{}", msg.as_ref())
    }

    pub fn usage(&mut self) -> io::Result<()> {
        self.print(format!(
            "{} {} --mac <mac> | --arp | [--help]",
            "Uso:".color(colors::PRIMARY),
            crate::BIN_NAME
        ))?;
        for (flag, text) in USAGE {
            self.print(format!("{}{} {}", flag.color(colors::PRIMARY), ":".color(colors::SEPARATOR), text))?;
        }
        Ok(())
    }

    pub fn parse_error(&mut self, err: &impl Display) -> io::Result<()> {
        self.print(err.to_string().trim_end())
    }

    /// The three line report of a `--mac` lookup. The timing line only appears when the
    /// service actually answered.
    pub fn lookup_report(&mut self, mac: &str, result: &LookupResult) -> io::Result<()> {
        self.labeled("Dirección MAC", mac.color(colors::MAC_ADDR))?;
        self.labeled("Fabricante", manufacturer(result))?;
        if let Ok(resolved) = result {
            let ms: ColoredString = format!("{} ms", resolved.elapsed_ms()).color(colors::TIMING);
            self.labeled("Tiempo de respuesta", ms)?;
        }
        Ok(())
    }

    pub fn arp_header(&mut self) -> io::Result<()> {
        self.print(format!("{}", "MAC/Fabricante:".color(colors::PRIMARY)))
    }

    pub fn arp_row(&mut self, mac: &MacAddress, result: &LookupResult) -> io::Result<()> {
        self.print(format!(
            "{} {} {}",
            mac.as_str().color(colors::MAC_ADDR),
            "/".color(colors::SEPARATOR),
            manufacturer(result)
        ))
    }

    pub fn no_addresses(&mut self) -> io::Result<()> {
        self.print("No se encontraron direcciones MAC en la tabla ARP.")
    }

    pub fn unsupported_platform(&mut self, os: &str) -> io::Result<()> {
        self.print(format!("La lectura de la tabla ARP no está soportada en {os}."))
    }

    pub fn arp_failure(&mut self, err: &impl Display) -> io::Result<()> {
        self.print(format!(
            "{} {err}",
            "No se pudo leer la tabla ARP:".color(colors::ERROR)
        ))
    }

    fn labeled(&mut self, key: &str, value: ColoredString) -> io::Result<()> {
        self.print(format!("{}{} {}", key.color(colors::TEXT_DEFAULT), ":".color(colors::SEPARATOR), value))
    }
}

fn manufacturer(result: &LookupResult) -> ColoredString {
    match result {
        Ok(resolved) => match &resolved.manufacturer {
            Manufacturer::Known(name) => name.as_str().color(colors::MANUFACTURER),
            unknown => unknown.to_string().color(colors::NOT_FOUND),
        },
        Err(err) => err.to_string().color(colors::ERROR),
    }
}
