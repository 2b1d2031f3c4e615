//! Find command
//!
//! Usage: trilog find <FOLDER> --ext <EXT> [--prefix <PREFIX>]...

use clap::Args;
use std::path::PathBuf;
use trilog_core::utilities::find_files;

#[derive(Debug, Args)]
pub struct FindArgs {
    /// Folder to search (not recursive)
    pub folder: PathBuf,

    /// Extension to match, with or without the leading dot
    #[arg(long)]
    pub ext: String,

    /// Keep only names starting with this prefix; repeatable
    #[arg(long = "prefix")]
    pub prefixes: Vec<String>,
}

/// Execute find command, printing one path per line
pub fn execute(args: FindArgs) -> Result<(), Box<dyn std::error::Error>> {
    for path in find_files(&args.folder, &args.ext, args.prefixes.as_slice())? {
        println!("{}", path.display());
    }
    Ok(())
}
