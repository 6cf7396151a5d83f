//! Required-field registry for a complete recipe.
//!
//! The registry is plain data handed to the analyzer at construction. Its size
//! is the denominator of every completeness score.

use pantry_core::entities::SchemaField;
use pantry_core::enums::Section;

const HEADER_FIELDS: [(&str, &str); 8] = [
    ("recipe_name", "Recipe name"),
    ("concept", "Concept"),
    ("submitted_by", "Submitted by"),
    ("number_of_portions", "Number of Portions"),
    ("cuisine", "Cuisine"),
    ("category", "Category"),
    ("date", "Date"),
    ("serving_size", "Serving Size Per Person"),
];

const INGREDIENT_FIELDS: [(&str, &str); 9] = [
    ("ingredient_name", "Ingredient name"),
    ("quantity", "Quantity"),
    ("weight", "Weight"),
    ("volume", "Volume"),
    ("ap_cost", "AP$ / Unit"),
    ("unit", "Unit"),
    ("yield_pct", "Yield %"),
    ("ep_cost", "EP$ / Unit"),
    ("total_cost", "Cost"),
];

const METHOD_FIELDS: [(&str, &str); 1] = [("instructions", "Method/Instructions")];

/// The set of fields a complete recipe declares, grouped by section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletenessSchema {
    fields: Vec<SchemaField>,
}

impl CompletenessSchema {
    #[must_use]
    pub const fn new(fields: Vec<SchemaField>) -> Self {
        Self { fields }
    }

    /// The standard 18-field recipe schema.
    #[must_use]
    pub fn standard() -> Self {
        let sections: [(Section, &[(&str, &str)]); 3] = [
            (Section::Header, &HEADER_FIELDS),
            (Section::Ingredients, &INGREDIENT_FIELDS),
            (Section::Method, &METHOD_FIELDS),
        ];
        let fields = sections
            .iter()
            .flat_map(|(section, fields)| {
                fields
                    .iter()
                    .map(move |(key, label)| SchemaField::new(*section, *key, *label))
            })
            .collect();
        Self { fields }
    }

    /// Total number of required fields across all sections.
    #[must_use]
    pub fn total_fields(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Fields belonging to one section, in declaration order.
    pub fn section(&self, section: Section) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter().filter(move |field| field.section == section)
    }
}

impl Default for CompletenessSchema {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_schema_has_eighteen_fields() {
        let schema = CompletenessSchema::standard();
        assert_eq!(schema.total_fields(), 18);
        assert_eq!(schema.section(Section::Header).count(), 8);
        assert_eq!(schema.section(Section::Ingredients).count(), 9);
        assert_eq!(schema.section(Section::Method).count(), 1);
    }

    #[test]
    fn fields_are_in_section_order() {
        let schema = CompletenessSchema::standard();
        let first = &schema.fields()[0];
        let last = schema.fields().last().unwrap();
        assert_eq!(first.key, "recipe_name");
        assert_eq!(last.key, "instructions");
    }

    #[test]
    fn ingredient_section_carries_cost_labels() {
        let schema = CompletenessSchema::standard();
        let ap_cost = schema.section(Section::Ingredients).find(|f| f.key == "ap_cost");
        assert_eq!(ap_cost.map(|f| f.label.as_str()), Some("AP$ / Unit"));
        assert!(schema.section(Section::Header).all(|f| f.key != "ap_cost"));
    }

    #[test]
    fn custom_schema_is_accepted() {
        let schema = CompletenessSchema::new(vec![SchemaField::new(
            Section::Method,
            "instructions",
            "Method/Instructions",
        )]);
        assert_eq!(schema.total_fields(), 1);
    }
}
