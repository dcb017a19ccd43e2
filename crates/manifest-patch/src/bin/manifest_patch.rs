//! `manifest-patch`: apply a patch file to a manifest.
//!
//! Usage:
//!   manifest-patch <patch-file> < manifest.json > patched.json
//!
//! The manifest is read from stdin. The patch file holds either a patch list
//! (`[[path, value], ...]`) or a patch object shaped like the manifest.
//! Set `MANIFEST_PATCH_LOG=debug` to see every coerced write.

use std::io::{self, Read, Write};

use manifest_patch::cli::{log_level, patch_manifest, CliError, LOG_ENV};

fn run() -> Result<(), CliError> {
    let patch_file = std::env::args().nth(1).ok_or(CliError::Usage)?;
    let patch = std::fs::read_to_string(patch_file)?;

    let mut manifest = String::new();
    io::stdin().read_to_string(&mut manifest)?;

    let result = patch_manifest(&manifest, &patch)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn main() {
    let level = log_level(std::env::var(LOG_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
