use clap::Parser;
use std::path::PathBuf;

use crate::docx::ExtractOptions;

/// Decorative banner printed on every start.
pub const BANNER: &str = "
░█▀▄░▄▀▀▄░█▀▄░█░█░▀▀█▀▀░▒█▀▀▄░█▀▀▄░▒█▀▀▄░▀▀█▀▀
░█░█░█░░█░█░░░▄▀▄░░▒█░░░▒█▄▄▀▒█▄▄█░▒█░░░░░▒█░░
░▀▀░░░▀▀░░▀▀▀░▀░▀░░▒█░░░▒█░▒█▒█░▒█░▒█▄▄▀░░▒█░░
";

#[derive(Parser, Debug)]
#[command(name = "docxTRACT")]
#[command(version = "0.1")]
#[command(about = "docxTRACT version 0.1", long_about = None)]
#[command(after_help = "docxTRACT comes with ABSOLUTELY NO WARRANTY!")]
pub struct Cli {
    /// the DOCX file to extract files from
    #[arg(value_name = "FILENAME")]
    pub filename: PathBuf,

    /// extract files (by default to current dir)
    #[arg(short = 'x', long = "xtract")]
    pub xtract: bool,

    /// extract only images
    #[arg(short = 'i', long = "img_only")]
    pub img_only: bool,

    /// display extracted file SHA1 hash
    #[arg(short = 's', long = "sha1")]
    pub sha1: bool,

    /// define destination directory
    #[arg(short = 'd', long = "destdir", value_name = "DESTDIR")]
    pub destdir: Option<PathBuf>,
}

impl Cli {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            images_only: self.img_only,
            sha1: self.sha1,
            dest_dir: self.destdir.clone(),
        }
    }
}
