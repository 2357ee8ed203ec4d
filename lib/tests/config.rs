use lifeboard_lib::{
    CancelToken, Config, Error, Position, Save, Topology, TopologyKind,
};
use std::error::Error as StdError;

#[test]
fn default() -> Result<(), Box<dyn StdError>> {
    let config = Config::default();
    assert_eq!(config.kind, TopologyKind::Toroidal);
    assert_eq!((config.width, config.height, config.depth), (16, 16, 16));
    assert_eq!(config.rule_string, "23/3");
    assert_eq!(
        config.topology()?,
        Topology::Toroidal {
            width: 16,
            height: 16
        }
    );
    let engine = config.engine()?;
    assert_eq!(engine.board().alive_count(), 0);
    assert_eq!(engine.workers(), None);
    Ok(())
}

#[test]
fn rule_notations() -> Result<(), Box<dyn StdError>> {
    let config = Config::default().set_rule_string("B36/S23");
    assert_eq!(config.rule()?.description(), "23/36");
    let config = config.set_rule_string("223/3");
    assert_eq!(
        config.engine().map(|_| ()),
        Err(Error::InvalidRuleDescription(String::from("223/3")))
    );
    Ok(())
}

#[test]
fn invalid_dimension() {
    let config = Config::new(TopologyKind::Cuboid, 3, 3).set_depth(0);
    assert_eq!(config.board(), Err(Error::InvalidDimension("depth")));
}

#[test]
fn soup() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(TopologyKind::Cuboid, 6, 5)
        .set_depth(4)
        .set_soup(0.5, 7_u64);
    let board = config.board()?;
    assert_eq!(board, config.board()?);
    assert!(board.alive_count() > 0);
    assert!(board.alive_count() < board.habitable_count());

    let full = config.clone().set_soup(1.0, None).board()?;
    assert_eq!(full.alive_count(), full.habitable_count());
    let empty = config.clone().set_soup(0.0, None).board()?;
    assert_eq!(empty.alive_count(), 0);

    assert_eq!(
        config.set_soup(1.5, None).board(),
        Err(Error::InvalidDensity(1.5))
    );
    Ok(())
}

#[test]
fn worker_pool() -> Result<(), Box<dyn StdError>> {
    let engine = Config::default().set_workers(Some(2)).engine()?;
    assert_eq!(engine.workers(), Some(2));
    Ok(())
}

#[test]
fn save() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(TopologyKind::Cuboid, 4, 3)
        .set_depth(2)
        .set_rule_string("B36/S23")
        .set_soup(0.3, 11_u64);
    let engine = config.engine()?;
    engine.advance_by(3, &CancelToken::new())?;

    let save = engine.save();
    assert_eq!(save.generation, 3);
    assert_eq!(save.config.rule_string, "23/36");
    assert_eq!(save.config.alive, engine.board().alive_positions());

    let json = serde_json::to_string(&save)?;
    let save: Save = serde_json::from_str(&json)?;
    let restored = save.engine()?;
    assert_eq!(restored.generation(), 3);
    assert_eq!(*restored.rule(), *engine.rule());
    assert_eq!(*restored.board(), *engine.board());

    let cancel = CancelToken::new();
    assert_eq!(restored.advance(&cancel)?, engine.advance(&cancel)?);
    Ok(())
}

#[test]
fn missing_fields_take_defaults() -> Result<(), Box<dyn StdError>> {
    let config: Config = serde_json::from_str(
        r#"{ "kind": "cuboid", "width": 3, "alive": [{ "x": 3, "y": 0 }] }"#,
    )?;
    assert_eq!(config.height, 16);
    assert_eq!(config.depth, 16);
    assert_eq!(config.rule_string, "23/3");
    assert_eq!(config.alive, vec![Position::new(3, 0)]);
    assert_eq!(config.board()?.alive_count(), 0);
    Ok(())
}
