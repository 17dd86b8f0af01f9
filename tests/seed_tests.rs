//! Seed loading tests - files on disk, validation errors, blank seeds

use std::fs;
use std::path::PathBuf;

use multicell::core::{blank_seed, Alphabet, FirstTieBreaker, Grid, IdentitySet, Seed, SeedError};
use multicell::engine::step;
use multicell::term::render_text;
use multicell::types::{Cell, SimConfig};

fn temp_seed(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "multicell-{}-{}.txt",
        name,
        std::process::id()
    ));
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_load_from_file() {
    let path = temp_seed("load", "..A\nB..\n");
    let seed = Seed::load(&path, &Alphabet::default()).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!((seed.rows(), seed.cols()), (2, 3));
    assert_eq!(seed.cell(0, 2), Cell::Alive('A'));
    assert_eq!(seed.cell(1, 0), Cell::Alive('B'));
}

#[test]
fn test_missing_file_is_read_error() {
    let path = std::env::temp_dir().join("multicell-definitely-missing-seed.txt");
    let err = Seed::load(&path, &Alphabet::default()).unwrap_err();
    assert!(matches!(err, SeedError::Read { .. }));
    assert!(err.to_string().contains("multicell-definitely-missing-seed.txt"));
}

#[test]
fn test_short_line_rejected_before_grid() {
    let path = temp_seed("ragged", "....\n...\n....\n");
    let err = Seed::load(&path, &Alphabet::default()).unwrap_err();
    fs::remove_file(&path).ok();

    assert!(matches!(
        err,
        SeedError::Ragged {
            line: 2,
            expected: 4,
            found: 3
        }
    ));
}

#[test]
fn test_blank_seed_round_trip() {
    let path = temp_seed("blank", &blank_seed(4, 7, '.'));
    let seed = Seed::load(&path, &Alphabet::default()).unwrap();
    fs::remove_file(&path).ok();

    assert!(seed.identities().is_empty());
    let mut grid = Grid::from_seed(&seed, 5);
    let board = "+-------+\n".to_string() + &"|       |\n".repeat(4) + "+-------+\n";
    assert_eq!(render_text(&grid, ' '), board);

    for _ in 0..20 {
        grid = step(&grid, &mut FirstTieBreaker);
        assert!(grid.is_extinct());
        assert_eq!(render_text(&grid, ' '), board);
    }
}

#[test]
fn test_custom_dead_token() {
    let config = SimConfig::default().with_glyphs('-', ' ').unwrap();
    let alphabet = Alphabet::from_config(&config);
    let seed = Seed::parse("-x-\n...\n", &alphabet).unwrap();
    // With '-' as the dead token, '.' is an ordinary identity.
    assert_eq!(seed.cell(0, 1), Cell::Alive('x'));
    assert_eq!(seed.cell(1, 0), Cell::Alive('.'));
    assert_eq!(seed.identities().len(), 2);
}

#[test]
fn test_restricted_alphabet() {
    let alphabet = Alphabet::default().restricted_to("AB");
    assert_eq!(
        alphabet.identities(),
        &IdentitySet::Only(['A', 'B'].into_iter().collect())
    );
    assert!(Seed::parse("AB.\n", &alphabet).is_ok());
    assert!(matches!(
        Seed::parse("ABC\n", &alphabet),
        Err(SeedError::UnknownIdentity { column: 3, .. })
    ));
}

#[test]
fn test_tab_is_invalid() {
    assert!(matches!(
        Seed::parse("A\t.\n", &Alphabet::default()),
        Err(SeedError::InvalidChar { ch: '\t', .. })
    ));
}

#[test]
fn test_columns_count_chars_not_bytes() {
    let seed = Seed::parse("é.\n.ü\n", &Alphabet::default()).unwrap();
    assert_eq!(seed.cols(), 2);
    assert_eq!(seed.cell(0, 0), Cell::Alive('é'));
}
