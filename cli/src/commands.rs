pub mod arp;
pub mod lookup;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use ouilookup_common::config::{Config, DEFAULT_API_URL};
use ouilookup_common::lookup::ManufacturerLookup;
use ouilookup_common::system::ArpRepository;
use tracing::info;

use crate::terminal::print::Printer;

#[derive(Parser, Debug)]
#[command(name = "ouilookup")]
#[command(about = "Look up the manufacturer of MAC addresses.")]
#[command(disable_help_flag = true, disable_version_flag = true, infer_long_args = true)]
pub struct CommandLine {
    /// MAC address to look up, e.g. aa:bb:cc:00:00:00
    #[arg(
        long,
        value_name = "MAC",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub mac: Vec<String>,
    /// Look up every host in the local ARP table
    #[arg(long, overrides_with = "arp")]
    pub arp: bool,
    /// Print usage and exit
    #[arg(long, overrides_with = "help")]
    pub help: bool,
    /// Raise log verbosity on stderr
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Base URL of the lookup service; each address is appended to it
    #[arg(long, hide = true, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub endpoint: String,
    /// Parsing stops at the first operand; everything after it is an operand too.
    #[arg(hide = true, trailing_var_arg = true)]
    pub operands: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Lookup(String),
    Arp,
}

/// A parsed command line with its actions in the order they were given.
#[derive(Debug)]
pub struct Invocation {
    pub help: bool,
    pub actions: Vec<Action>,
    pub verbose: u8,
    /// The first positional argument and everything after it; ignored.
    pub operands: Vec<String>,
    pub config: Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The ARP table could not be read or was empty.
    NoAddresses,
    Usage,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NoAddresses => 1,
            Self::Usage => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

impl CommandLine {
    pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches: ArgMatches = Self::command().try_get_matches_from(args)?;
        let cli: Self = Self::from_arg_matches(&matches)?;

        let mut positioned: Vec<(usize, Action)> = Vec::new();
        if let Some(indices) = matches.indices_of("mac") {
            positioned.extend(indices.zip(cli.mac).map(|(idx, mac)| (idx, Action::Lookup(mac))));
        }
        if cli.arp {
            let idx: usize = matches.index_of("arp").unwrap_or(usize::MAX);
            positioned.push((idx, Action::Arp));
        }
        positioned.sort_by_key(|(idx, _)| *idx);

        Ok(Invocation {
            help: cli.help,
            actions: positioned.into_iter().map(|(_, action)| action).collect(),
            verbose: cli.verbose,
            operands: cli.operands,
            config: Config {
                api_url: cli.endpoint,
            },
        })
    }
}

/// Runs every action of `invocation` in order and reports the resulting exit status.
///
/// `--help` wins over everything else. An ARP failure stops the remaining actions.
pub async fn dispatch<W: Write>(
    invocation: &Invocation,
    resolver: &dyn ManufacturerLookup,
    arp_repo: &dyn ArpRepository,
    printer: &mut Printer<W>,
) -> io::Result<Status> {
    if !invocation.operands.is_empty() {
        info!("Ignoring operands {:?}", invocation.operands);
    }

    if invocation.help {
        printer.usage()?;
        return Ok(Status::Success);
    }

    if invocation.actions.is_empty() {
        printer.usage()?;
        return Ok(Status::Usage);
    }

    for action in &invocation.actions {
        match action {
            Action::Lookup(mac) => lookup::lookup(mac, resolver, printer).await?,
            Action::Arp => {
                let status: Status = arp::arp(resolver, arp_repo, printer).await?;
                if status != Status::Success {
                    return Ok(status);
                }
            }
        }
    }

    Ok(Status::Success)
}
