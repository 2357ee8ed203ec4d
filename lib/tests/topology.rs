use lifeboard_lib::{Board, Error, LifeState, Position, Topology, TopologyKind};
use proptest::prelude::*;
use std::{collections::HashSet, error::Error as StdError};

fn cuboid(width: u32, height: u32, depth: u32) -> Result<Board, Error> {
    Board::new(
        Topology::Cuboid {
            width,
            height,
            depth,
        },
        [],
    )
}

#[test]
fn zero_dimension() {
    for kind in [
        TopologyKind::Rectangular,
        TopologyKind::Toroidal,
        TopologyKind::Cuboid,
    ] {
        assert_eq!(
            Topology::new(kind, 0, 3, 3),
            Err(Error::InvalidDimension("width"))
        );
        assert_eq!(
            Topology::new(kind, 3, 0, 3),
            Err(Error::InvalidDimension("height"))
        );
    }
    assert_eq!(
        Topology::new(TopologyKind::Cuboid, 3, 3, 0),
        Err(Error::InvalidDimension("depth"))
    );
    assert!(Topology::new(TopologyKind::Toroidal, 3, 3, 0).is_ok());
    assert_eq!(cuboid(2, 2, 0), Err(Error::InvalidDimension("depth")));
}

#[test]
fn cuboid_too_large() {
    assert_eq!(
        Topology::new(TopologyKind::Cuboid, 1 << 31, 1, 1),
        Err(Error::InvalidDimension("width"))
    );
    assert_eq!(
        Topology::new(TopologyKind::Cuboid, 1, 1, 1 << 31),
        Err(Error::InvalidDimension("width"))
    );
    assert_eq!(
        Topology::new(TopologyKind::Cuboid, 1, u32::MAX - 3, 1),
        Err(Error::InvalidDimension("height"))
    );
    assert_eq!(
        cuboid(u32::MAX, 1, 1),
        Err(Error::InvalidDimension("width"))
    );
    // The largest width whose storage grid and virtual ring still fit.
    let width = (u32::MAX - 2) / 2 - 1;
    assert!(Topology::new(TopologyKind::Cuboid, width, 1, 1).is_ok());
    assert!(Topology::new(TopologyKind::Cuboid, width + 1, 1, 1).is_err());
    // Planar boards have no virtual ring.
    assert!(Topology::new(TopologyKind::Toroidal, u32::MAX, 1, 1).is_ok());
}

#[test]
fn rectangular_clipping() -> Result<(), Box<dyn StdError>> {
    let board = Board::new(Topology::Rectangular { width: 4, height: 3 }, [])?;
    assert_eq!(board.neighbor_positions(Position::new(0, 0))?.len(), 3);
    assert_eq!(board.neighbor_positions(Position::new(1, 0))?.len(), 5);
    assert_eq!(board.neighbor_positions(Position::new(0, 1))?.len(), 5);
    assert_eq!(board.neighbor_positions(Position::new(1, 1))?.len(), 8);
    assert_eq!(board.neighbor_positions(Position::new(3, 2))?.len(), 3);
    assert_eq!(
        board.neighbor_positions(Position::new(1, 1))?,
        &[
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(0, 2),
            Position::new(0, 1),
            Position::new(0, 0),
        ]
    );
    Ok(())
}

#[test]
fn toroidal_wrapping() -> Result<(), Box<dyn StdError>> {
    let board = Board::new(Topology::Toroidal { width: 4, height: 3 }, [])?;
    assert_eq!(
        board.neighbor_positions(Position::new(0, 0))?,
        &[
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(1, 0),
            Position::new(1, 1),
            Position::new(0, 1),
            Position::new(3, 1),
            Position::new(3, 0),
            Position::new(3, 2),
        ]
    );
    Ok(())
}

#[test]
fn toroidal_duplicates() -> Result<(), Box<dyn StdError>> {
    let board = Board::new(
        Topology::Toroidal { width: 2, height: 2 },
        [Position::new(1, 1)],
    )?;
    let neighbors = board.neighbor_positions(Position::new(0, 0))?;
    assert_eq!(neighbors.len(), 8);
    let alive = board
        .neighbors(Position::new(0, 0))?
        .into_iter()
        .filter(|state| state.is_alive())
        .count();
    assert_eq!(alive, 4);
    Ok(())
}

#[test]
fn cuboid_layout() -> Result<(), Box<dyn StdError>> {
    let board = cuboid(3, 2, 1)?;
    assert_eq!((board.width(), board.height()), (8, 4));
    assert_eq!(
        board.plaintext(),
        " ...    \n\
         ........\n\
         ........\n \
         ...    \n"
    );
    assert_eq!(
        board.get(Position::new(0, 0))?,
        LifeState::NoLifePossible
    );
    assert_eq!(board.get(Position::new(1, 0))?, LifeState::Dead);
    assert_eq!(
        board.get(Position::new(8, 0)),
        Err(Error::PositionOutOfRange(Position::new(8, 0)))
    );
    assert!(board.neighbor_positions(Position::new(0, 0))?.is_empty());
    Ok(())
}

#[test]
fn cuboid_counts() -> Result<(), Box<dyn StdError>> {
    let board = cuboid(3, 3, 3)?;
    for &position in board.habitable_positions() {
        let len = board.neighbor_positions(position)?.len();
        assert!((7..=8).contains(&len), "{} has {} neighbors", position, len);
    }
    // A corner of the front face.
    assert_eq!(board.neighbor_positions(Position::new(3, 3))?.len(), 7);
    // The center of the front face.
    assert_eq!(board.neighbor_positions(Position::new(4, 4))?.len(), 8);

    let board = cuboid(1, 1, 1)?;
    for &position in board.habitable_positions() {
        assert_eq!(board.neighbor_positions(position)?.len(), 4);
    }
    Ok(())
}

#[test]
fn cuboid_front_corner() -> Result<(), Box<dyn StdError>> {
    let board = cuboid(5, 5, 5)?;
    assert_eq!(
        board.neighbor_positions(Position::new(5, 5))?,
        &[
            Position::new(5, 4),
            Position::new(6, 4),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
            Position::new(4, 6),
            Position::new(4, 5),
        ]
    );
    Ok(())
}

#[test]
fn initial_cells_off_the_cross_are_ignored() -> Result<(), Box<dyn StdError>> {
    let board = Board::new(
        Topology::Cuboid {
            width: 2,
            height: 2,
            depth: 2,
        },
        [Position::new(0, 0), Position::new(2, 0), Position::new(100, 100)],
    )?;
    assert_eq!(board.alive_positions(), vec![Position::new(2, 0)]);
    assert_eq!(board.get(Position::new(0, 0))?, LifeState::NoLifePossible);
    Ok(())
}

proptest! {
    #[test]
    fn toroidal_always_eight(width in 1_u32..7, height in 1_u32..7) {
        let board = Board::new(Topology::Toroidal { width, height }, []).unwrap();
        for &position in board.habitable_positions() {
            prop_assert_eq!(board.neighbor_positions(position).unwrap().len(), 8);
        }
    }

    #[test]
    fn never_self(width in 2_u32..7, height in 2_u32..7, depth in 1_u32..5, kind in 0..3) {
        let topology = match kind {
            0 => Topology::Rectangular { width, height },
            1 => Topology::Toroidal { width, height },
            _ => Topology::Cuboid { width, height, depth },
        };
        let board = Board::new(topology, []).unwrap();
        for &position in board.habitable_positions() {
            prop_assert!(!board.neighbor_positions(position).unwrap().contains(&position));
        }
    }

    #[test]
    fn cuboid_habitable_count(width in 1_u32..8, height in 1_u32..8, depth in 1_u32..8) {
        let board = cuboid(width, height, depth).unwrap();
        let expected = 2 * (width * height + width * depth + height * depth) as usize;
        prop_assert_eq!(board.habitable_count(), expected);
        prop_assert_eq!(
            board.plaintext().chars().filter(|&c| c == '.').count(),
            expected
        );
    }

    #[test]
    fn cuboid_adjacency(width in 1_u32..5, height in 1_u32..5, depth in 1_u32..5) {
        let board = cuboid(width, height, depth).unwrap();
        for &position in board.habitable_positions() {
            let neighbors = board.neighbor_positions(position).unwrap();
            let distinct: HashSet<_> = neighbors.iter().collect();
            prop_assert_eq!(distinct.len(), neighbors.len());
            prop_assert!(neighbors.len() <= 8);
            for &neighbor in neighbors {
                prop_assert!(board.get(neighbor).unwrap().is_habitable());
                prop_assert!(board.neighbor_positions(neighbor).unwrap().contains(&position));
            }
        }
    }
}
