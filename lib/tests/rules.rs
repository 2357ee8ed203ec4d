use lifeboard_lib::{Error, RuleSet};
use std::error::Error as StdError;

#[test]
fn conway() -> Result<(), Box<dyn StdError>> {
    let rule = RuleSet::parse("23/3")?;
    assert_eq!(rule.survive(), &[2, 3]);
    assert_eq!(rule.birth(), &[3]);
    assert_eq!(rule.description(), "23/3");
    assert_eq!(rule, RuleSet::default());
    Ok(())
}

#[test]
fn canonical_order() -> Result<(), Box<dyn StdError>> {
    let rule: RuleSet = "32/3".parse()?;
    assert_eq!(rule.description(), "23/3");
    assert_eq!(rule.to_string(), "23/3");
    let rule = RuleSet::parse("8531/7620")?;
    assert_eq!(rule.description(), "1358/0267");
    Ok(())
}

#[test]
fn counts() -> Result<(), Box<dyn StdError>> {
    let rule = RuleSet::parse("23/36")?;
    assert!(rule.survives(2));
    assert!(rule.survives(3));
    assert!(!rule.survives(6));
    assert!(rule.born(3));
    assert!(rule.born(6));
    assert!(!rule.born(2));
    assert!(!rule.born(9));
    Ok(())
}

#[test]
fn invalid() {
    for description in [
        "", "/", "/3", "23/", "223/3", "23/33", "23-3", "23/3/3", "2a/3", " 23/3", "9/3", "23/9",
        "23/3 ", "B3/S23",
    ] {
        assert!(!RuleSet::is_valid(description), "{:?}", description);
        assert_eq!(
            RuleSet::parse(description),
            Err(Error::InvalidRuleDescription(description.to_owned()))
        );
    }
}

#[test]
fn valid() {
    for description in ["23/3", "0/0", "012345678/012345678", "1/2", "45678/3"] {
        assert!(RuleSet::is_valid(description), "{:?}", description);
    }
}

#[test]
fn bs_notation() -> Result<(), Box<dyn StdError>> {
    let rule = RuleSet::parse_notation("B3/S23")?;
    assert_eq!(rule.description(), "23/3");
    let rule = RuleSet::parse_notation("B36/S23")?;
    assert_eq!(rule.description(), "23/36");
    let rule = RuleSet::parse_notation("34/34")?;
    assert_eq!(rule.description(), "34/34");
    assert!(RuleSet::parse_notation("B3/S2a").is_err());
    Ok(())
}
