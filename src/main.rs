use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use iconfix::config;
use iconfix::error::IconError;
use iconfix::export;
use iconfix::logger::{log_error, log_line};
use iconfix::pipeline;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            log_error("iconfix", &e);
            ExitCode::FAILURE
        }
    }
}

// Usage: iconfix [SOURCE] [OUT_DIR]
// Paths default to the spec (iconspec.json or the built-in iOS table).
fn run() -> Result<(), IconError> {
    let mut spec = config::load_spec()?;
    let mut args = env::args().skip(1);
    if let Some(src) = args.next() {
        spec.source = src;
    }
    if let Some(dir) = args.next() {
        spec.out_dir = dir;
    }

    let source = PathBuf::from(&spec.source);
    let out_dir = PathBuf::from(&spec.out_dir);
    println!("Source: {}", source.display());
    println!("Output: {}", out_dir.display());
    log_line(&format!("run: {} -> {}", source.display(), out_dir.display()));

    let src = pipeline::load_source(&source)?;
    println!(
        "Building {}x{} composite (scale {}, inset {})...",
        spec.canonical_px, spec.canonical_px, spec.scale_factor, spec.edge_inset
    );
    let canonical = pipeline::remove_rounded_corners(&src, &spec, spec.canonical_px)?;

    let written = export::export_all(&canonical, &spec, &out_dir)?;
    for (entry, path) in spec.sizes.iter().zip(&written) {
        println!("  saved {} ({}x{})", path.display(), entry.px, entry.px);
    }

    let defects = export::verify(&spec, &out_dir);
    if !defects.is_empty() {
        for d in &defects {
            eprintln!("  {}: {}", d.file, d.reason);
        }
        return Err(IconError::Verify(defects.len()));
    }

    println!("All {} icons written and verified.", written.len());
    log_line(&format!("done: {} icons", written.len()));
    Ok(())
}
