//! CLI for acroscan: scan a directory tree for acropalypse-style data
//! remnants in PNG and JPEG files.

#![cfg(feature = "cli")]

use acroscan::{analyze, detect_file_type, AnalysisResult, FileType};
use clap::Parser;
use indexmap::IndexMap;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "acroscan")]
#[command(about = "Detect acropalypse-style data remnants in cropped PNG/JPEG files", long_about = None)]
struct Args {
    /// Directory to scan recursively
    directory: String,

    /// File extensions to scan (comma-separated, case-insensitive)
    #[arg(short, long, default_value = "png,jpg,jpeg")]
    extensions: String,

    /// Output JSON per scanned file (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print potentially vulnerable paths and the summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let args = Args::parse();
    let exts: HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().trim_start_matches('.').to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let dir = Path::new(&args.directory);
    if !dir.is_dir() {
        eprintln!("Error: {} is not a valid directory", dir.display());
        std::process::exit(1);
    }

    let candidates = collect_image_files(dir, &exts);
    if candidates.is_empty() {
        println!("No images to check; quitting.");
        std::process::exit(1);
    }

    let mut vuln_count = 0usize;
    for path in &candidates {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(_) => continue,
        };

        if detect_file_type(&bytes) == FileType::Unknown {
            if args.json {
                if let Ok(result) = analyze(&bytes) {
                    print_json(path, &result, &args, &bytes)?;
                }
            } else if !args.quiet {
                println!("File doesn't appear to be jpeg or png.");
            }
            continue;
        }

        // Corrupt or non-conforming files are skipped, never fatal to the run.
        let result = match analyze(&bytes) {
            Ok(r) => r,
            Err(_) => continue,
        };

        if result.is_vulnerable() {
            vuln_count += 1;
        }
        if args.json {
            print_json(path, &result, &args, &bytes)?;
        } else if result.is_vulnerable() {
            println!("Potentially vulnerable: {}", path.display());
        }
    }

    println!(
        "Found {} vulnerable images out of a scanned total of {}.",
        vuln_count,
        candidates.len()
    );
    println!(
        "Total time to execute: {:.2} seconds",
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Hidden directories are not descended into; the root itself is exempt so
/// scanning "." works.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

/// Recursively collect regular files whose extension is in `exts`.
fn collect_image_files(dir: &Path, exts: &HashSet<String>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !is_hidden_dir(e))
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if exts.contains(&ext) {
            files.push(entry.into_path());
        }
    }
    files
}

fn print_json(
    path: &Path,
    result: &AnalysisResult,
    args: &Args,
    bytes: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && !result.is_vulnerable() {
        return Ok(());
    }
    let mut out = IndexMap::<String, serde_json::Value>::new();
    out.insert(
        "sha256".to_string(),
        serde_json::Value::String(sha256_hex(bytes)),
    );
    out.insert(
        "path".to_string(),
        serde_json::Value::String(path.display().to_string()),
    );
    out.insert(
        "verdict".to_string(),
        serde_json::Value::String(format!("{:?}", result.verdict)),
    );
    out.insert("threats".to_string(), serde_json::to_value(&result.threats)?);
    out.insert(
        "size_bytes".to_string(),
        serde_json::to_value(result.size_bytes)?,
    );
    out.insert(
        "format".to_string(),
        serde_json::Value::String(result.comprehension.format.clone()),
    );
    out.insert(
        "trailer".to_string(),
        serde_json::to_value(result.comprehension.trailer)?,
    );
    out.insert(
        "details".to_string(),
        serde_json::to_value(&result.comprehension.details)?,
    );
    out.insert(
        "warnings".to_string(),
        serde_json::to_value(&result.comprehension.warnings)?,
    );
    let json_str = if args.pretty {
        serde_json::to_string_pretty(&out)?
    } else {
        serde_json::to_string(&out)?
    };
    println!("{}", json_str);
    Ok(())
}
