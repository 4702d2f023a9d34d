use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// The path to an existing JSON-formatted question file.
    #[clap(default_value = "questions.json")]
    pub inpath: PathBuf,

    /// Path to the progress file.
    /// Read at startup when it exists, created otherwise;
    ///   overwritten wholesale at the end of the session.
    #[clap(short, long, default_value = "progress.json")]
    pub progress: PathBuf,

    /// Replay only the previously missed questions,
    ///   then clear the missed list.
    #[clap(short, long)]
    pub review: bool,
}
