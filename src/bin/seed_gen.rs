//! Blank seed generator.
//!
//! Writes a `rows x cols` block of the fill character, ready to be edited by
//! hand into a starting layout for `multicell`.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use multicell::core::blank_seed;
use multicell::types::{DEFAULT_DEAD_CHAR, DEFAULT_SEED_COLS, DEFAULT_SEED_FILE, DEFAULT_SEED_ROWS};

#[derive(Debug, Parser)]
#[command(name = "multicell-seed", version, about = "Write a blank Multicell seed file")]
struct Args {
    /// Name of output file.
    #[arg(short, long, default_value = DEFAULT_SEED_FILE)]
    out: PathBuf,

    /// Number of rows to fill.
    #[arg(short, long, default_value_t = DEFAULT_SEED_ROWS, allow_negative_numbers = true)]
    rows: usize,

    /// Number of columns to fill.
    #[arg(short, long, default_value_t = DEFAULT_SEED_COLS, allow_negative_numbers = true)]
    cols: usize,

    /// Character to fill with.
    #[arg(short, long, default_value_t = DEFAULT_DEAD_CHAR, value_parser = single_char)]
    fill: char,

    /// Overwrite an existing file without asking.
    #[arg(long)]
    force: bool,
}

fn single_char(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_control() => Ok(ch),
        _ => Err("--fill must only be a single printable character".to_string()),
    }
}

/// Ask whether to overwrite `path`. Anything but `y`/`yes` declines.
fn confirm_overwrite(path: &Path, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{} already exists. Overwrite? [y/N] ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.out.exists() && !args.force {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        if !confirm_overwrite(&args.out, &mut stdin.lock(), &mut stdout)? {
            println!("Not overwriting {}.", args.out.display());
            return Ok(());
        }
    }

    fs::write(&args.out, blank_seed(args.rows, args.cols, args.fill))
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    log::info!(
        "wrote {}x{} blank seed to {}",
        args.rows,
        args.cols,
        args.out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_20x20_dots_in_seed_txt() {
        let args = Args::try_parse_from(["multicell-seed"]).unwrap();
        assert_eq!(args.out, PathBuf::from("seed.txt"));
        assert_eq!((args.rows, args.cols), (20, 20));
        assert_eq!(args.fill, '.');
        assert!(!args.force);
    }

    #[test]
    fn multi_char_fill_rejected() {
        let err = Args::try_parse_from(["multicell-seed", "-f", "ab"]).unwrap_err();
        assert!(err.to_string().contains("single"));
    }

    #[test]
    fn negative_rows_rejected() {
        assert!(Args::try_parse_from(["multicell-seed", "-r", "-3"]).is_err());
        assert!(Args::try_parse_from(["multicell-seed", "-c", "-1"]).is_err());
    }

    #[test]
    fn confirm_accepts_yes_only() {
        let path = Path::new("seed.txt");
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("n\n", false), ("\n", false)] {
            let mut out = Vec::new();
            let ok = confirm_overwrite(path, &mut answer.as_bytes(), &mut out).unwrap();
            assert_eq!(ok, expected, "answer {:?}", answer);
            assert!(String::from_utf8(out).unwrap().contains("Overwrite?"));
        }
    }
}
