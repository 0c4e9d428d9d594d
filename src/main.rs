//! Command-line entry point.
//!
//! Loads the user list once and prints the dashboard table to stdout.
//!
//! # Lifecycle
//!
//! 1. **Configure**: Parse the command line, resolve `USERDECK_*` variables, initialize tracing
//! 2. **Fetch**: Load users through the primary transport, falling back once
//! 3. **Render**: Build the table view model and print it
//!
//! # Usage
//!
//! ```text
//! USERDECK_API_BASE_URL=https://jsonplaceholder.typicode.com \
//! USERDECK_USERS_ENDPOINT=/users \
//! USERDECK_API_TIMEOUT=10000 \
//!     userdeck [--cols N] [SEARCH]...
//! ```

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use userdeck::app::UserStore;
use userdeck::observability::init_tracing;
use userdeck::ui::MAX_COLUMNS;
use userdeck::{load_theme, Config, HttpUserGateway};

#[derive(Parser, Debug)]
#[command(name = "userdeck")]
#[command(about = "Fetch users from the configured API and print them as a table")]
#[command(version)]
struct Cli {
    #[arg(help = "Only show users whose name, email or username contains these words")]
    search: Vec<String>,

    #[arg(
        long,
        env = "COLUMNS",
        default_value_t = 100,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Table width in characters"
    )]
    cols: usize,
}

impl Cli {
    fn search_term(&self) -> String {
        self.search.join(" ")
    }

    fn width(&self) -> usize {
        self.cols.min(MAX_COLUMNS)
    }
}

#[tokio::main]
async fn main() -> userdeck::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    for problem in config.validate() {
        tracing::warn!(%problem, "configuration problem");
    }

    let gateway = HttpUserGateway::new(&config)?;
    let mut store = UserStore::new();
    store.load_users(&gateway).await;

    let cols = cli.width();
    let theme = load_theme(&config);
    let vm = store.state().compute_viewmodel(&cli.search_term(), cols);
    print!("{}", userdeck::ui::render(&vm, &theme, cols));

    Ok(())
}
