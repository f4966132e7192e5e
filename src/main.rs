use color_eyre::Result;

use conrelay::cli;
use conrelay::logging;

fn main() -> Result<()> {
    // Handle --version flag early, before any other setup
    if std::env::args().any(|arg| arg == "--version" || arg == "-V") {
        println!("conrelay {}", cli::VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    let verbose = std::env::args().any(|arg| arg == "--verbose");
    logging::init(verbose);

    let command = cli::parse_args(std::env::args());

    // One runtime for the whole run; relay chains spawn onto it
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(cli::run(command))
}
