//! Tests for configuration system

use plateplan::{Config, Planner, config::LogFormat};
use plateplan_shared::mealplan::MealType;
use std::fs;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() -> anyhow::Result<()> {
    let config = Config::load(None)?;

    assert_eq!(config.planner.budget, 400.0);
    assert_eq!(config.planner.pantry.len(), 8);
    assert_eq!(config.planner.recipes.len(), 6);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    config.validate()?;

    Ok(())
}

#[test]
fn test_config_loads_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("plateplan.toml");
    fs::write(
        &path,
        r#"
[planner]
budget = 120.5
pantry = ["rice", "soy sauce"]

[[planner.recipes]]
id = 10
name = "Fried Rice"
type = "dinner"
ingredients = ["rice", "eggs", "soy sauce"]
cost = 4.5

[[planner.recipes]]
id = 11
name = "Porridge"
type = "breakfast"
ingredients = ["oats", "milk"]
cost = 1.25
favorite = true

[logging]
level = "debug"
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;
    config.validate()?;

    assert_eq!(config.planner.budget, 120.5);
    assert_eq!(config.planner.pantry, vec!["rice", "soy sauce"]);
    assert_eq!(config.planner.recipes.len(), 2);
    assert_eq!(config.planner.recipes[1].meal_type, MealType::Breakfast);
    assert!(config.planner.recipes[1].favorite);
    assert_eq!(config.planner.expense_history.len(), 8);
    assert_eq!(config.logging.format, LogFormat::Json);

    let planner = Planner::from_config(&config.planner)?;
    let suggested: Vec<_> = planner
        .suggestions()
        .iter()
        .map(|s| s.recipe.name.as_str())
        .collect();

    assert_eq!(suggested, vec!["Fried Rice"]);
    assert_eq!(planner.budget_summary().remaining, 120.5);

    Ok(())
}

#[test]
fn test_config_rejects_duplicate_recipe_ids() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("plateplan.toml");
    fs::write(
        &path,
        r#"
[[planner.recipes]]
id = 1
name = "Toast"
type = "breakfast"
cost = 1.0

[[planner.recipes]]
id = 1
name = "More Toast"
type = "breakfast"
cost = 2.0
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;
    let err = config.validate().unwrap_err();

    assert!(err.is_invalid_input());
    assert_eq!(err.to_string(), "invalid input: duplicate recipe id 1");

    Ok(())
}

#[test]
fn test_config_rejects_negative_cost() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("plateplan.toml");
    fs::write(
        &path,
        r#"
[[planner.recipes]]
id = 1
name = "Refund"
type = "lunch"
cost = -3.0
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(matches!(
        config.validate(),
        Err(plateplan_shared::Error::Validate(_))
    ));

    Ok(())
}

#[test]
fn test_config_rejects_non_finite_costs() -> anyhow::Result<()> {
    for cost in ["nan", "inf", "-inf"] {
        let dir = TempDir::new()?;
        let path = dir.child("plateplan.toml");
        fs::write(
            &path,
            format!(
                r#"
[[planner.recipes]]
id = 1
name = "Mystery Stew"
type = "dinner"
ingredients = ["water"]
cost = {cost}
"#
            ),
        )?;

        let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

        assert!(
            matches!(config.validate(), Err(plateplan_shared::Error::Validate(_))),
            "cost = {cost} accepted"
        );
    }

    Ok(())
}

#[test]
fn test_config_rejects_non_finite_history() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("plateplan.toml");
    fs::write(
        &path,
        r#"
[[planner.expense_history]]
week = 1
amount = nan
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(matches!(
        config.validate(),
        Err(plateplan_shared::Error::Validate(_))
    ));

    Ok(())
}

#[test]
fn test_config_rejects_blank_pantry_item() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("plateplan.toml");
    fs::write(
        &path,
        r#"
[planner]
pantry = ["rice", "   "]
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(matches!(
        config.validate(),
        Err(plateplan_shared::Error::Validate(_))
    ));

    Ok(())
}
