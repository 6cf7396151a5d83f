//! Loads real workbooks written with `rust_xlsxwriter`.

use std::path::Path;

use pantry_audit::grid::{CellRef, CellValue};
use pantry_audit::{GridLoader, RecipeAnalyzer, SpreadsheetLoader};
use pretty_assertions::assert_eq;
use rust_xlsxwriter::{Workbook, XlsxError};

/// Write a costing sheet. Rows and columns here are 0-based.
fn write_recipe(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(2, 1, "Lemon Tart")?;
    sheet.write_string(3, 1, "Patisserie")?;
    sheet.write_string(3, 7, "French")?;
    sheet.write_number(5, 1, 8)?;
    sheet.write_string(13, 0, "Ingredients")?;
    sheet.write_string(14, 0, "Lemons")?;
    sheet.write_number(14, 4, 0.45)?;
    sheet.write_string(14, 5, "each")?;
    sheet.write_number(14, 6, 0.8)?;
    sheet.write_string(15, 0, "Caster sugar")?;
    sheet.write_string(15, 5, "kg")?;
    sheet.write_number(15, 6, 0)?;
    sheet.write_string(119, 0, "Method")?;
    sheet.write_string(120, 0, "Blind bake the pastry case.")?;
    workbook.save(path)
}

#[test]
fn reads_first_worksheet_with_one_based_coordinates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lemon-tart.xlsx");
    write_recipe(&path).unwrap();

    let grid = SpreadsheetLoader::new().load(&path).unwrap();
    assert_eq!(grid.get(CellRef::new(3, 2)), &CellValue::Text("Lemon Tart".into()));
    assert_eq!(grid.get(CellRef::new(6, 2)), &CellValue::Number(8.0));
    assert_eq!(grid.get(CellRef::new(15, 5)), &CellValue::Number(0.45));
    assert_eq!(grid.last_row(), 121);
}

#[test]
fn analyzes_a_workbook_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lemon-tart.xlsx");
    write_recipe(&path).unwrap();

    let analysis = RecipeAnalyzer::standard().analyze_path(&path).unwrap();
    let summary: Vec<(&str, &str)> = analysis
        .issues
        .iter()
        .map(|issue| (issue.field.as_str(), issue.location.as_str()))
        .collect();
    assert_eq!(summary, vec![("ap_cost", "E16"), ("yield_pct", "G16")]);
    assert_eq!(analysis.issues[0].ingredient.as_deref(), Some("Caster sugar"));
    assert_eq!(analysis.recipe_name, "lemon-tart");
}

#[test]
fn sheet_starting_below_row_one_keeps_positions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");
    let mut workbook = Workbook::new();
    workbook.add_worksheet().write_string(29, 3, "Whisk").unwrap();
    workbook.save(&path).unwrap();

    let grid = SpreadsheetLoader::new().load(&path).unwrap();
    assert_eq!(grid.get(CellRef::new(30, 4)), &CellValue::Text("Whisk".into()));
    assert_eq!(grid.filled_cells(), 1);
}
