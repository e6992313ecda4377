//! # docxtract
//!
//! Recover the raw parts of a DOCX document for inspection.
//!
//! A DOCX is a ZIP container. This crate walks its entries in stored order,
//! optionally keeps only the embedded media (`word/media/`), writes each part
//! either in place or flattened into a destination folder, and can record a
//! SHA1 digest of every file it wrote, on the console and in a `hashes.txt`
//! sidecar.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//! use docxtract::{ExtractOptions, extract_docx};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let options = ExtractOptions {
//!         images_only: true,
//!         sha1: true,
//!         dest_dir: Some(PathBuf::from("artifacts")),
//!     };
//!     let files = extract_docx(Path::new("report.docx"), &options).await?;
//!     println!("{} files", files.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod digest;
pub mod docx;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use digest::sha1_hex;
pub use docx::{ExtractOptions, Target, extract_docx, extract_docx_to};
pub use io::{LocalFileReader, ReadAt};
pub use zip::{ZipExtractor, ZipFileEntry};
