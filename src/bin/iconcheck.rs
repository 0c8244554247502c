use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use iconfix::config;
use iconfix::export;

// Audit an existing appiconset against the size table without
// regenerating anything. Usage: iconcheck [OUT_DIR]
fn main() -> ExitCode {
    let spec = match config::load_spec() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };
    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&spec.out_dir));

    let defects = export::verify(&spec, &out_dir);
    if defects.is_empty() {
        println!("{}: {} icons OK", out_dir.display(), spec.sizes.len());
        ExitCode::SUCCESS
    } else {
        for d in &defects {
            println!("{}: {}", d.file, d.reason);
        }
        eprintln!("{} defect(s) in {}", defects.len(), out_dir.display());
        ExitCode::FAILURE
    }
}
