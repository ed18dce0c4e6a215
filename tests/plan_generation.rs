use pickmeal::config::Config;
use pickmeal_mealplan::generate_plan;
use pickmeal_recipe::MealCatalog;
use temp_dir::TempDir;

const CATALOG: &str = r#"{
    "Meals": {
        "Breakfast": [
            { "Name": "Overnight oats", "Servings": 2 },
            { "Name": "Shakshuka", "Servings": 4 },
            { "Name": "Banana pancakes", "Servings": 4 },
            { "Name": "Breakfast burritos", "Servings": 6 }
        ],
        "Lunch": [
            { "Name": "Leek soup", "Servings": 6 },
            { "Name": "Caprese sandwich", "Servings": 2 },
            { "Name": "Falafel wraps", "Servings": 4 }
        ],
        "Dinner": [
            { "Name": "Chickpea curry", "Servings": 4 },
            { "Name": "Beef stew", "Servings": 6 },
            { "Name": "Mushroom risotto", "Servings": 4 }
        ],
        "Snacks": [
            { "Name": "Trail mix" },
            { "Name": "Energy balls", "Servings": 12 },
            { "Name": "Hummus and carrots" }
        ]
    }
}"#;

#[test]
fn end_to_end_plan_from_catalog_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("meals.json");
    std::fs::write(&path, CATALOG)?;

    let catalog = MealCatalog::load(&path)?;
    let config = Config::load(Some("/nonexistent/pickmeal.toml".to_string()))?;
    let plan = generate_plan(&catalog, &config.plan, Some(11))?;

    // Sections render in the configured order.
    let rendered = plan.to_string();
    let breakfast = rendered.find("Breakfast\n").unwrap();
    let lunch = rendered.find("\nLunch\n").unwrap();
    let dinner = rendered.find("\nDinner\n").unwrap();
    let snacks = rendered.find("\nSnacks\n").unwrap();
    assert!(breakfast < lunch && lunch < dinner && dinner < snacks);

    // Every selection stays within its configured count and the catalog.
    for (selection, mealtime) in plan.selections().iter().zip(&config.plan.mealtimes) {
        assert_eq!(selection.mealtime, mealtime.name);
        assert!(selection.recipes.len() <= mealtime.recipes as usize);
        for recipe in &selection.recipes {
            assert!(catalog.recipes(&mealtime.name).unwrap().contains(recipe));
        }
    }
    Ok(())
}

#[test]
fn seeded_runs_are_reproducible_end_to_end() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("meals.json");
    std::fs::write(&path, CATALOG)?;

    let catalog = MealCatalog::load(&path)?;
    let config = Config::load(Some("/nonexistent/pickmeal.toml".to_string()))?;

    let first = generate_plan(&catalog, &config.plan, Some(99))?;
    let second = generate_plan(&catalog, &config.plan, Some(99))?;
    assert_eq!(first.to_string(), second.to_string());
    Ok(())
}
