use anyhow::Result;
use numfilter::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments; usage errors exit here
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize and validate configuration
    let config = Config::from_args(&args)?;

    // Filter and print, or print usage
    cli::execute_command(&config)
}
