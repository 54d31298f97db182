use clap::Parser;
use stringsheet::{Direction, convert};
use stringsheet_cli::{Args, logging, report};
use tracing::info;

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    logging::init(args.verbose)?;
    let config = args.to_config()?;

    info!("Processing ...");
    let result = convert(&config).map_err(|e| match config.direction {
        Direction::TableToBundles => {
            format!("converting to .lproj bundles failed: {}", e)
        }
        Direction::BundlesToTable => format!("converting to a table failed: {}", e),
    })?;

    println!("✅ {}", report::summary(&result));

    if let Some(path) = &args.report_json {
        report::write_report(path, &config, &result)?;
        println!("Report JSON written: {}", path.display());
    }
    Ok(())
}
