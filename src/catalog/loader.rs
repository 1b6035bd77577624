use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use super::recipe::{DietType, MealType, Recipe, RecipeId};

// Define expected column headers
const ID_COL: &str = "id";
const TITLE_COL: &str = "title";
const DIET_COL: &str = "diet_type";
const MEAL_COL: &str = "meal_type";
const KCAL_COL: &str = "calories";
const PROTEIN_COL: &str = "protein";
const FAT_COL: &str = "fat";
const CARB_COL: &str = "carbs";
const DESCRIPTION_COL: &str = "description";
const IMAGE_COL: &str = "image_url";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow!("Column '{}' not found", name))
}

/// Loads the recipe catalog from a CSV file with named headers.
///
/// Rows with an empty title are skipped. Unknown diet or meal types and
/// unparseable ids or calories are reported with their row number. Missing
/// macro values default to 0 and the image column is optional.
pub fn load_recipe_catalog(csv_path: &Path) -> Result<Vec<Recipe>> {
    if !csv_path.exists() {
        return Err(anyhow!("Recipe catalog not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open recipe catalog at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();

    let id_idx = column_index(&headers, ID_COL)?;
    let title_idx = column_index(&headers, TITLE_COL)?;
    let diet_idx = column_index(&headers, DIET_COL)?;
    let meal_idx = column_index(&headers, MEAL_COL)?;
    let kcal_idx = column_index(&headers, KCAL_COL)?;
    let protein_idx = column_index(&headers, PROTEIN_COL)?;
    let fat_idx = column_index(&headers, FAT_COL)?;
    let carb_idx = column_index(&headers, CARB_COL)?;
    let description_idx = column_index(&headers, DESCRIPTION_COL)?;
    let image_idx = headers.iter().position(|h| h.trim() == IMAGE_COL);

    let mut recipes = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let title = field(title_idx).to_string();
        if title.is_empty() {
            log::debug!("Skipping catalog row {} with empty title", row_index);
            continue;
        }

        let id: RecipeId = field(id_idx)
            .parse()
            .with_context(|| format!("Invalid recipe id at row {}: {:?}", row_index, field(id_idx)))?;
        let diet_type: DietType = field(diet_idx)
            .parse()
            .map_err(|e| anyhow!("Row {}: {}", row_index, e))?;
        let meal_type: MealType = field(meal_idx)
            .parse()
            .map_err(|e| anyhow!("Row {}: {}", row_index, e))?;
        let calories_per_100g: i32 = field(kcal_idx)
            .parse()
            .with_context(|| format!("Invalid calories at row {}: {:?}", row_index, field(kcal_idx)))?;

        let image_ref = image_idx
            .map(|idx| field(idx).to_string())
            .filter(|s| !s.is_empty());

        recipes.push(Recipe {
            id,
            title,
            diet_type,
            meal_type,
            calories_per_100g,
            protein_per_100g: parse_optional_f64(field(protein_idx)).unwrap_or(0.0),
            fat_per_100g: parse_optional_f64(field(fat_idx)).unwrap_or(0.0),
            carbs_per_100g: parse_optional_f64(field(carb_idx)).unwrap_or(0.0),
            description: field(description_idx).to_string(),
            image_ref,
        });
    }

    if recipes.is_empty() {
        return Err(anyhow!("No valid recipes loaded from {:?}", csv_path));
    }

    log::info!("Loaded {} recipes from {:?}", recipes.len(), csv_path);
    Ok(recipes)
}
