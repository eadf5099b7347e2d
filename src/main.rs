use anyhow::Result;
use clap::Parser;
use convert_icon::report;

#[derive(Parser)]
#[command(name = "convert-icon")]
#[command(about = "List the PNG renditions required for the macOS app icon", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    report::print_report()
}
