use std::process::ExitCode;

use ouilookup_cli::commands::{self, CommandLine, Invocation, Status};
use ouilookup_cli::terminal::{logging, print::Printer};
use ouilookup_core::arp::SystemArp;
use ouilookup_core::resolver::MacLookupApi;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let invocation: Invocation = match CommandLine::parse_invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            Printer::stdout().parse_error(&err).ok();
            return Status::Usage.into();
        }
    };

    logging::init_logging(invocation.verbose);

    match run(&invocation).await {
        Ok(status) => status.into(),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(invocation: &Invocation) -> anyhow::Result<Status> {
    let resolver: MacLookupApi = MacLookupApi::new(&invocation.config)?;
    let arp: SystemArp = SystemArp::default();
    let mut printer = Printer::stdout();

    Ok(commands::dispatch(invocation, &resolver, &arp, &mut printer).await?)
}
