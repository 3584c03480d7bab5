use rand::{rngs::StdRng, SeedableRng};
use rlifesim_lib::{advance, rle, rules::Life, seed, Config, Grid, LifeState, Simulation, World};
use std::error::Error;

/// Living cells of a grid, in row-major order.
fn alive_cells(grid: &Grid<LifeState>) -> Vec<(isize, isize)> {
    grid.iter()
        .filter(|&(_, s)| s == LifeState::Alive)
        .map(|(coord, _)| coord)
        .collect()
}

fn grid_with(width: usize, height: usize, cells: &[(isize, isize)]) -> Grid<LifeState> {
    let mut grid = Grid::new(width, height).unwrap();
    for &coord in cells {
        grid.set(coord, LifeState::Alive).unwrap();
    }
    grid
}

/// A straightforward generation step, written independently of the library.
fn manual_step(grid: &Grid<LifeState>, born: &[usize], survive: &[usize]) -> Grid<LifeState> {
    let mut next = Grid::new(grid.width(), grid.height()).unwrap();
    for y in 0..grid.height() as isize {
        for x in 0..grid.width() as isize {
            let mut alives = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && grid.get((x + dx, y + dy)) == Ok(LifeState::Alive) {
                        alives += 1;
                    }
                }
            }
            let alive = match grid.get((x, y)).unwrap() {
                LifeState::Alive => survive.contains(&alives),
                LifeState::Dead => born.contains(&alives),
            };
            if alive {
                next.set((x, y), LifeState::Alive).unwrap();
            }
        }
    }
    next
}

#[test]
fn default_rule() -> Result<(), Box<dyn Error>> {
    let rule = Life::default();
    assert_eq!(rule, "B3/S23".parse()?);
    assert_eq!(rule, Life::new(&[3], &[2, 3])?);
    assert_eq!(rule.to_string(), "B3/S23");
    assert!(rule.is_born(3)?);
    assert!(!rule.is_born(2)?);
    assert!(rule.is_survivor(2)?);
    assert!(rule.is_survivor(3)?);
    assert!(!rule.is_survivor(4)?);
    Ok(())
}

#[test]
fn neighbor_count_out_of_range() {
    let rule = Life::default();
    assert_eq!(
        rule.is_born(9),
        Err(rlifesim_lib::Error::NeighborCountOutOfRange(9))
    );
    assert_eq!(
        rule.is_survivor(42),
        Err(rlifesim_lib::Error::NeighborCountOutOfRange(42))
    );
    assert_eq!(
        Life::new(&[3], &[2, 9]),
        Err(rlifesim_lib::Error::NeighborCountOutOfRange(9))
    );
}

#[test]
fn invalid_rule_string() {
    assert!(matches!(
        "foo".parse::<Life>(),
        Err(rlifesim_lib::Error::ParseRuleError(_))
    ));
}

#[test]
fn rule_display() -> Result<(), Box<dyn Error>> {
    let rule: Life = "B36/S23".parse()?;
    assert_eq!(rule.to_string(), "B36/S23");
    assert!(rule.is_born(6)?);
    let rule = Life::new(&[], &[])?;
    assert_eq!(rule.to_string(), "B/S");
    Ok(())
}

#[test]
fn classic_transitions() {
    let rule = Life::default();

    // A dead cell with 3 living neighbors becomes alive.
    let grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
    assert_eq!(advance(&grid, &rule).get((1, 1)), Ok(LifeState::Alive));

    // A living cell with 2 living neighbors stays alive.
    let grid = grid_with(3, 3, &[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(advance(&grid, &rule).get((1, 1)), Ok(LifeState::Alive));

    // A living cell with 4 living neighbors dies.
    let grid = grid_with(3, 3, &[(0, 0), (2, 0), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(advance(&grid, &rule).get((1, 1)), Ok(LifeState::Dead));
}

#[test]
fn blinker() {
    let rule = Life::default();
    let grid = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let next = advance(&grid, &rule);
    assert_eq!(alive_cells(&next), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(rule.next_generation(&next), grid);
    assert_eq!(advance(&next, &rule), grid);
}

#[test]
fn no_wrap_around() {
    let rule = Life::default();
    let grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
    let next = advance(&grid, &rule);
    // On a torus, (1, 2) would be born as well.
    assert_eq!(alive_cells(&next), vec![(1, 0), (1, 1)]);
}

#[test]
fn block_in_corner() {
    let rule = Life::default();
    let grid = grid_with(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(advance(&grid, &rule), grid);
}

#[test]
fn advance_is_deterministic() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(20);
    for rule_string in ["B3/S23", "B36/S23", "B3678/S34678"] {
        let rule: Life = rule_string.parse()?;
        let (born, survive): (Vec<usize>, Vec<usize>) = (
            (0..=8).filter(|&n| rule.is_born(n).unwrap()).collect(),
            (0..=8).filter(|&n| rule.is_survivor(n).unwrap()).collect(),
        );

        let mut grid = Grid::new(12, 9)?;
        seed::random_life(&mut grid, 0.4, &mut rng)?;

        let twice = advance(&advance(&grid, &rule), &rule);
        let manual = manual_step(&manual_step(&grid, &born, &survive), &born, &survive);
        assert_eq!(twice, manual);

        let mut world = World::new(grid, rule);
        world.run(2);
        assert_eq!(world.grid(), &twice);
        assert_eq!(world.generation(), 2);
    }
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(10, 10)?;
    let src = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n";
    let decoded = rle::read(src, &mut grid, Life::default())?;
    let mut world = World::new(grid, decoded.rule);
    world.run(4);

    let mut expected = Grid::new(10, 10)?;
    rle::read("#P 1 1\nbo$2bo$3o!\n", &mut expected, Life::default())?;
    assert_eq!(world.grid(), &expected);
    Ok(())
}

#[test]
fn glider_dies_at_the_edge() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(6, 6)?;
    let decoded = rle::read("bo$2bo$3o!", &mut grid, Life::default())?;
    let mut world = World::new(grid, decoded.rule);
    world.run(40);
    // The glider turns into a block in the corner.
    assert_eq!(
        alive_cells(world.grid()),
        vec![(4, 4), (5, 4), (4, 5), (5, 5)]
    );
    Ok(())
}

#[test]
fn grid_bounds() -> Result<(), Box<dyn Error>> {
    assert_eq!(
        Grid::<LifeState>::new(0, 3),
        Err(rlifesim_lib::Error::NonPositiveError)
    );

    let mut grid = Grid::new(3, 2)?;
    assert_eq!(grid.get((2, 1)), Ok(LifeState::Dead));
    assert_eq!(
        grid.get((3, 0)),
        Err(rlifesim_lib::Error::OutOfBounds((3, 0)))
    );
    assert_eq!(
        grid.get((0, -1)),
        Err(rlifesim_lib::Error::OutOfBounds((0, -1)))
    );
    assert_eq!(
        grid.set((0, 2), LifeState::Alive),
        Err(rlifesim_lib::Error::OutOfBounds((0, 2)))
    );
    assert_eq!(grid.count(LifeState::Alive), 0);

    grid.set((1, 1), LifeState::Alive)?;
    assert_eq!(grid.counts(), vec![5, 1]);
    assert_eq!(grid.plaintext(), "...\n.o.\n");

    grid.clear();
    assert_eq!(grid.count(LifeState::Dead), 6);
    Ok(())
}

#[test]
fn grid_too_large() {
    assert_eq!(
        Grid::<LifeState>::new(usize::MAX / 2, 4),
        Err(rlifesim_lib::Error::GridTooLarge {
            width: usize::MAX / 2,
            height: 4
        })
    );
    assert_eq!(
        Config::new(usize::MAX, 2).world().err(),
        Some(rlifesim_lib::Error::GridTooLarge {
            width: usize::MAX,
            height: 2
        })
    );
}

#[test]
fn summary() {
    let grid = grid_with(3, 3, &[(0, 0), (1, 0), (2, 0)]);
    let mut world: Box<dyn Simulation> = Box::new(World::new(grid, Life::default()));
    assert_eq!(world.summary(), "generation = 0, dead:alive = 6:3");
    assert_eq!(world.rule_string(), "B3/S23");
    world.step();
    assert_eq!(world.summary(), "generation = 1, dead:alive = 7:2");
    assert_eq!(world.plaintext(), ".o.\n.o.\n...\n");
}

#[test]
fn config_random() -> Result<(), Box<dyn Error>> {
    let config = Config::new(16, 8).set_seed(7).set_density(0.3);
    let world1 = config.life_world()?;
    let world2 = config.life_world()?;
    assert_eq!(world1.grid(), world2.grid());
    assert_eq!(world1.grid().width(), 16);
    assert_eq!(world1.grid().height(), 8);

    let config = Config::new(16, 8).set_density(0.0);
    assert_eq!(config.life_world()?.grid().count(LifeState::Alive), 0);

    let config = Config::new(16, 8).set_density(1.5);
    assert_eq!(
        config.life_world().err(),
        Some(rlifesim_lib::Error::InvalidDensity(1.5))
    );
    Ok(())
}

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.width, 70);
    assert_eq!(config.height, 40);
    assert_eq!(config.rule_string, "B3/S23");
    assert_eq!(config.density, 0.1);
    assert_eq!(config.pattern, None);
}

#[test]
fn config_invalid() {
    let config = Config::new(10, 10).set_rule_string(String::from("Q"));
    assert!(matches!(
        config.world().err(),
        Some(rlifesim_lib::Error::ParseRuleError(_))
    ));

    let config = Config::new(10, 10).set_rates(u32::MAX, 0);
    assert_eq!(
        config.world().err(),
        Some(rlifesim_lib::Error::InvalidRate(u32::MAX))
    );

    let config = Config::new(0, 10);
    assert_eq!(
        config.world().err(),
        Some(rlifesim_lib::Error::NonPositiveError)
    );
}
