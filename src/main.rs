use carwash::application::tunnel::WashTunnel;
use carwash::domain::options::WashOptions;
use carwash::domain::order::{CycleReport, WashOrder};
use carwash::domain::ports::{CycleObserverBox, NoopObserver};
use carwash::interfaces::csv::order_reader::OrderReader;
use carwash::interfaces::csv::report_writer::ReportWriter;
use carwash::interfaces::presenter::ConsolePresenter;
use carwash::telemetry;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Orders CSV file (order,prewash,dry,wax). Without it a single order is
    /// built from the flags below.
    input: Option<PathBuf>,

    /// Hand prewash before rinsing
    #[arg(long)]
    prewash: bool,

    /// Hand drying instead of automatic drying
    #[arg(long)]
    dry: bool,

    /// Hand waxing after hand drying
    #[arg(long)]
    wax: bool,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Print every phase and a status block per cycle to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let observer: CycleObserverBox = if cli.verbose {
        Box::new(ConsolePresenter::new(io::stderr()))
    } else {
        Box::new(NoopObserver)
    };
    let tunnel = WashTunnel::new(observer);

    let orders: Box<dyn Iterator<Item = carwash::error::Result<WashOrder>>> = match cli.input {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            Box::new(OrderReader::new(file).orders())
        }
        None => {
            let options = WashOptions::new(cli.prewash, cli.dry, cli.wax);
            Box::new(std::iter::once(Ok(WashOrder::new(1, options))))
        }
    };

    let mut reports: Vec<CycleReport> = Vec::new();
    for order_result in orders {
        match order_result {
            Ok(order) => match tunnel.process_order(order).await {
                Ok(report) => reports.push(report),
                Err(e) if e.is_recoverable() => {
                    eprintln!("Order {} rejected: {}", order.order, e);
                }
                Err(e) => return Err(e).into_diagnostic(),
            },
            Err(e) => {
                eprintln!("Error reading order: {}", e);
            }
        }
    }

    let stdout = io::stdout();
    match cli.format {
        Format::Csv => {
            let mut writer = ReportWriter::new(stdout.lock());
            writer.write_reports(&reports).into_diagnostic()?;
        }
        Format::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &reports).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    tracing::info!(revenue = %tunnel.into_revenue(), "All orders processed");
    Ok(())
}
