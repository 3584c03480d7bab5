use rlifesim_lib::{
    lif,
    load::{self, Format},
    rules::Life,
    Config, Error, Grid, LifeState,
};
use std::{fs, path::PathBuf};

fn alive_cells(grid: &Grid<LifeState>) -> Vec<(isize, isize)> {
    grid.iter()
        .filter(|&(_, s)| s == LifeState::Alive)
        .map(|(coord, _)| coord)
        .collect()
}

/// A file in the temporary directory, removed when dropped.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!("rlifesim-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        TempFile(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn lif_is_additive() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(4, 4)?;
    grid.set((0, 0), LifeState::Alive)?;
    let count = lif::read("#Life 1.06\n1 1\n2 2 3 1\n", &mut grid)?;
    assert_eq!(count, 3);
    assert_eq!(alive_cells(&grid), vec![(0, 0), (1, 1), (3, 1), (2, 2)]);
    Ok(())
}

#[test]
fn lif_first_line_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(4, 4)?;
    let count = lif::read("0 1\n2 3\n", &mut grid)?;
    assert_eq!(count, 1);
    assert_eq!(alive_cells(&grid), vec![(2, 3)]);
    Ok(())
}

#[test]
fn lif_out_of_bounds() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(3, 3)?;
    assert_eq!(
        lif::read("#Life 1.06\n0 0\n5 5\n1 1\n", &mut grid),
        Err(Error::OutOfBoundsWrite((5, 5)))
    );
    assert_eq!(alive_cells(&grid), vec![(0, 0)]);

    let mut grid = Grid::new(3, 3)?;
    assert_eq!(
        lif::read("#Life 1.06\n-1 0\n", &mut grid),
        Err(Error::OutOfBoundsWrite((-1, 0)))
    );
    Ok(())
}

#[test]
fn lif_stops_at_non_integer() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(3, 3)?;
    let count = lif::read("#Life 1.06\n0 0\n1 x\n2 2\n", &mut grid)?;
    assert_eq!(count, 1);
    assert_eq!(alive_cells(&grid), vec![(0, 0)]);
    Ok(())
}

#[test]
fn format_from_path() {
    assert_eq!(Format::from_path("glider.rle"), Ok(Format::Rle));
    assert_eq!(Format::from_path("patterns/GLIDER.RLE"), Ok(Format::Rle));
    assert_eq!(Format::from_path("acorn.Lif"), Ok(Format::Lif));
    assert_eq!(
        Format::from_path("acorn.txt"),
        Err(Error::UnsupportedFormat(String::from("acorn.txt")))
    );
    assert_eq!(
        Format::from_path("acorn"),
        Err(Error::UnsupportedFormat(String::from("acorn")))
    );
    assert_eq!("LIF".parse::<Format>(), Ok(Format::Lif));
    assert_eq!(Format::Rle.to_string(), "rle");
}

#[test]
fn load_from_reader() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(5, 5)?;
    let decoded = load::load(
        "x = 1, y = 1, rule = B36/S23\no!".as_bytes(),
        Format::Rle,
        &mut grid,
        Life::default(),
    )?;
    assert_eq!(decoded.rule.to_string(), "B36/S23");
    assert_eq!(alive_cells(&grid), vec![(0, 0)]);

    // Lists of cells never change the rule.
    let highlife: Life = "B36/S23".parse()?;
    let decoded = load::load("#Life 1.06\n4 4".as_bytes(), Format::Lif, &mut grid, highlife)?;
    assert_eq!(decoded.rule, highlife);
    assert!(decoded.warnings.is_empty());
    assert_eq!(alive_cells(&grid), vec![(0, 0), (4, 4)]);
    Ok(())
}

#[test]
fn load_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut grid = Grid::new(5, 5)?;
    let path = std::env::temp_dir().join("rlifesim-no-such-dir/missing.rle");
    assert!(matches!(
        load::load_file(&path, &mut grid, Life::default()),
        Err(Error::IoUnavailable(_))
    ));
    Ok(())
}

#[test]
fn load_files() -> Result<(), Box<dyn std::error::Error>> {
    let rle_file = TempFile::new("glider.rle", "#C A glider.\nx = 3, y = 3\nbo$2bo$3o!\n");
    let lif_file = TempFile::new("glider.lif", "#Life 1.06\n1 0\n2 1\n0 2\n1 2\n2 2\n");

    let mut from_rle = Grid::new(6, 6)?;
    let decoded = load::load_file(&rle_file.0, &mut from_rle, Life::default())?;
    assert_eq!(decoded.rule, Life::default());

    let mut from_lif = Grid::new(6, 6)?;
    load::load_file(&lif_file.0, &mut from_lif, Life::default())?;
    assert_eq!(from_rle, from_lif);
    Ok(())
}

#[test]
fn config_with_pattern() -> Result<(), Box<dyn std::error::Error>> {
    let file = TempFile::new("blinker.rle", "x = 3, y = 1, rule = B36/S23\n#P 1 2\n3o!\n");

    let config = Config::new(5, 5).set_pattern(file.0.clone());
    let mut world = config.life_world()?;
    assert_eq!(world.rule().to_string(), "B36/S23");
    assert_eq!(alive_cells(world.grid()), vec![(1, 2), (2, 2), (3, 2)]);
    world.step();
    assert_eq!(alive_cells(world.grid()), vec![(2, 1), (2, 2), (2, 3)]);

    let config = Config::new(2, 2).set_pattern(file.0.clone());
    assert_eq!(
        config.world().err(),
        Some(Error::OutOfBoundsWrite((1, 2)))
    );
    Ok(())
}
