use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::path::PathBuf;

const ROLLEX_AUTHOR: &str = crate_authors!();
const ROLLEX_VERSION: &str = crate_version!();
const ROLLEX_ABOUT: &str = crate_description!();
const ROLLEX_FLAG_D_SHORT: char = 'd';
const ROLLEX_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLEX_FLAG_S_SHORT: char = 's';
const ROLLEX_FLAG_S_HELP: &str = "Seed every roll of the session from this value";
const ROLLEX_FLAG_HISTORY_HELP: &str = "Line history file";
const ROLLEX_HISTORY_DEFAULT: &str = "history";

#[derive(Parser, Debug)]
#[command(author = ROLLEX_AUTHOR, version = ROLLEX_VERSION, about = ROLLEX_ABOUT)]
pub struct Args {
    #[arg(short = ROLLEX_FLAG_D_SHORT, long, help = ROLLEX_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = ROLLEX_FLAG_S_SHORT, long, help = ROLLEX_FLAG_S_HELP)]
    pub seed: Option<u64>,
    #[arg(long, help = ROLLEX_FLAG_HISTORY_HELP, default_value = ROLLEX_HISTORY_DEFAULT)]
    pub history: PathBuf,
}
