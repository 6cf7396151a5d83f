//! JsonSchema validation tests for the audit output contract.
//!
//! Report consumers read `pantry audit` JSON, so the serialized shape must
//! satisfy the schemars-generated schema.

use pretty_assertions::assert_eq;
use schemars::schema_for;
use pantry_core::entities::{CatalogueEntry, Issue, Recipe, RecipeAnalysis, SchemaField};
use pantry_core::enums::{Section, Severity};
use pantry_core::responses::{AuditFailure, LibraryAuditSummary, SchemaResponse};

fn schema_errors<T: schemars::JsonSchema + serde::Serialize>(value: &T) -> Vec<String> {
    let schema = serde_json::to_value(schema_for!(T)).unwrap();
    let instance = serde_json::to_value(value).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(&instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn ingredient_issue() -> Issue {
    Issue {
        section: Section::Ingredients,
        field: "ap_cost".into(),
        label: "AP$ / Unit for Butter".into(),
        location: "E15".into(),
        severity: Severity::High,
        ingredient: Some("Butter".into()),
    }
}

fn header_issue() -> Issue {
    Issue {
        section: Section::Header,
        field: "concept".into(),
        label: "Concept".into(),
        location: "B4".into(),
        severity: Severity::Medium,
        ingredient: None,
    }
}

fn analysis() -> RecipeAnalysis {
    RecipeAnalysis {
        file_path: "/recipes/shortbread.xlsx".into(),
        recipe_name: "shortbread".into(),
        issues: vec![header_issue(), ingredient_issue()],
        warnings: vec!["Recipe not yet converted to canonical format".into()],
        completeness_score: 88.888_888_888_888_89,
    }
}

#[test]
fn summary_validates_against_schema() {
    let summary = LibraryAuditSummary {
        total_recipes: 2,
        analyses: vec![analysis()],
        failures: vec![AuditFailure {
            entry_id: "rcp-00ff00ff".into(),
            title: "Lost".into(),
            file_path: "/recipes/lost.xlsx".into(),
            error: "Recipe file not found: /recipes/lost.xlsx".into(),
        }],
        high_count: 1,
        medium_count: 1,
        low_count: 0,
        average_completeness: 44.444_444_444_444_44,
    };
    let errors = schema_errors(&summary);
    assert!(errors.is_empty(), "summary schema errors: {errors:?}");
}

#[test]
fn header_issue_omits_ingredient_key() {
    let json = serde_json::to_value(header_issue()).unwrap();
    assert!(json.get("ingredient").is_none());
    assert_eq!(json["section"], "header");
    assert_eq!(json["severity"], "medium");
}

#[test]
fn issue_without_ingredient_key_deserializes() {
    let json = r#"{"section":"method","field":"method_section","label":"Method section","location":"After ingredients","severity":"high"}"#;
    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.ingredient, None);
    assert_eq!(issue.section, Section::Method);
}

#[test]
fn analysis_severity_counts() {
    let analysis = analysis();
    assert_eq!(analysis.count_severity(Severity::High), 1);
    assert_eq!(analysis.count_severity(Severity::Medium), 1);
    assert_eq!(analysis.count_severity(Severity::Low), 0);
    assert!(!analysis.is_complete());
}

#[test]
fn catalogue_entry_from_recipe_keeps_identity() {
    let recipe = Recipe {
        id: "rcp-a3f8b2c1".into(),
        title: "Shortbread".into(),
        file_path: "/recipes/shortbread.xlsx".into(),
        file_type: "xlsx".into(),
        created_at: chrono::Utc::now(),
    };
    let entry = CatalogueEntry::from(recipe.clone());
    assert_eq!(entry.id, recipe.id);
    assert_eq!(entry.title, recipe.title);
    assert_eq!(entry.file_path, recipe.file_path);
    assert!(schema_errors(&recipe).is_empty());
}

#[test]
fn schema_response_validates() {
    let response = SchemaResponse {
        total_fields: 1,
        fields: vec![SchemaField::new(
            Section::Method,
            "instructions",
            "Method/Instructions",
        )],
    };
    assert!(schema_errors(&response).is_empty());
}
