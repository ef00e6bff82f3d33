use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::completion::fields::FieldKey;
use crate::completion::presence::is_complete;
use crate::models::profile::Profile;

/// Weights across a table must add up to exactly this many points.
pub const TOTAL_WEIGHT: u32 = 100;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("category table has no categories")]
    EmptyTable,

    #[error("category weights sum to {total}, expected 100")]
    WeightSum { total: u64 },

    #[error("category '{category}' has no fields")]
    EmptyCategory { category: String },

    #[error("category '{category}' lists the label '{label}' more than once")]
    DuplicateLabel { category: String, label: String },

    #[error("category key '{category}' is defined more than once")]
    DuplicateCategory { category: String },

    #[error("field '{field:?}' is assigned to more than one category")]
    FieldInMultipleCategories { field: FieldKey },

    #[error("invalid category table definition: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One scored field: what to read and what to call it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub label: String,
}

impl FieldSpec {
    pub fn new(key: FieldKey) -> Self {
        Self {
            key,
            label: key.default_label().to_string(),
        }
    }

    pub fn is_complete(&self, profile: &Profile) -> bool {
        is_complete(&self.key.read(profile))
    }
}

/// A named, weighted group of fields. Only obtainable from a validated
/// [`CategoryTable`], so `fields` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    key: String,
    name: String,
    weight: u32,
    fields: Vec<FieldSpec>,
}

impl Category {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Serialized form of a category, as read from a table file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDefinition {
    pub key: String,
    pub name: String,
    pub weight: u32,
    pub fields: Vec<FieldDefinition>,
}

/// A field entry is either a bare key (`"city"`) or a key with a custom
/// label (`{ "field": "city", "label": "Home Town" }`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldDefinition {
    Key(FieldKey),
    Labelled { field: FieldKey, label: String },
}

impl From<FieldDefinition> for FieldSpec {
    fn from(def: FieldDefinition) -> Self {
        match def {
            FieldDefinition::Key(key) => FieldSpec::new(key),
            FieldDefinition::Labelled { field, label } => FieldSpec { key: field, label },
        }
    }
}

/// The validated, read-only set of categories a profile is scored against.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Validates `definitions` and freezes them into a table.
    ///
    /// Fails when the table is empty, the weights do not sum to 100, a
    /// category has no fields or repeats a label, a category key repeats, or
    /// a field is claimed by two categories.
    pub fn new(definitions: Vec<CategoryDefinition>) -> Result<Self, TableError> {
        if definitions.is_empty() {
            return Err(TableError::EmptyTable);
        }

        let total: u64 = definitions.iter().map(|d| u64::from(d.weight)).sum();
        if total != u64::from(TOTAL_WEIGHT) {
            return Err(TableError::WeightSum { total });
        }

        let mut category_keys = HashSet::new();
        let mut claimed = HashSet::new();
        let mut categories = Vec::with_capacity(definitions.len());

        for def in definitions {
            if !category_keys.insert(def.key.clone()) {
                return Err(TableError::DuplicateCategory { category: def.key });
            }
            if def.fields.is_empty() {
                return Err(TableError::EmptyCategory { category: def.key });
            }

            let fields: Vec<FieldSpec> = def.fields.into_iter().map(FieldSpec::from).collect();

            {
                let mut labels = HashSet::new();
                for spec in &fields {
                    if !labels.insert(spec.label.as_str()) {
                        return Err(TableError::DuplicateLabel {
                            category: def.key,
                            label: spec.label.clone(),
                        });
                    }
                    if !claimed.insert(spec.key) {
                        return Err(TableError::FieldInMultipleCategories { field: spec.key });
                    }
                }
            }

            categories.push(Category {
                key: def.key,
                name: def.name,
                weight: def.weight,
                fields,
            });
        }

        Ok(Self { categories })
    }

    /// Parses a JSON array of [`CategoryDefinition`] and validates it.
    pub fn from_json(raw: &str) -> Result<Self, TableError> {
        let definitions: Vec<CategoryDefinition> = serde_json::from_str(raw)?;
        Self::new(definitions)
    }

    /// The built-in athlete profile table: core 40, personal 20,
    /// physical 15, experience 15, media 10.
    pub fn builtin() -> Result<Self, TableError> {
        Self::new(builtin_definitions())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn total_fields(&self) -> usize {
        self.categories.iter().map(|c| c.fields.len()).sum()
    }
}

fn builtin_definitions() -> Vec<CategoryDefinition> {
    use FieldKey::*;

    let category = |key: &str, name: &str, weight: u32, fields: &[FieldKey]| CategoryDefinition {
        key: key.to_string(),
        name: name.to_string(),
        weight,
        fields: fields.iter().copied().map(FieldDefinition::Key).collect(),
    };

    vec![
        category(
            "core",
            "Core Information",
            40,
            &[Name, PrimarySport, Position, Level, Bio, ProfilePicture],
        ),
        category(
            "personal",
            "Personal Details",
            20,
            &[DateOfBirth, Gender, Nationality, Country, City, Languages],
        ),
        category(
            "physical",
            "Physical Attributes",
            15,
            &[Height, Weight, PreferredFoot],
        ),
        category(
            "experience",
            "Experience & Career",
            15,
            &[YearsOfExperience, CurrentClub, PreviousClubs, Achievements],
        ),
        category("media", "Media & Showcase", 10, &[Photos, Videos]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(key: &str, weight: u32, fields: Vec<FieldDefinition>) -> CategoryDefinition {
        CategoryDefinition {
            key: key.to_string(),
            name: key.to_uppercase(),
            weight,
            fields,
        }
    }

    #[test]
    fn test_builtin_weights_sum_to_100() {
        let table = CategoryTable::builtin().unwrap();
        let total: u32 = table.categories().iter().map(|c| c.weight()).sum();
        assert_eq!(total, TOTAL_WEIGHT);
    }

    #[test]
    fn test_builtin_covers_every_field_once() {
        let table = CategoryTable::builtin().unwrap();
        assert_eq!(table.total_fields(), FieldKey::ALL.len());
        let order: Vec<_> = table.categories().iter().map(|c| c.key()).collect();
        assert_eq!(order, ["core", "personal", "physical", "experience", "media"]);
        assert_eq!(table.categories()[0].fields().len(), 6);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(
            CategoryTable::new(vec![]),
            Err(TableError::EmptyTable)
        ));
    }

    #[test]
    fn test_rejects_bad_weight_sum() {
        let err = CategoryTable::new(vec![
            def("a", 60, vec![FieldDefinition::Key(FieldKey::Name)]),
            def("b", 30, vec![FieldDefinition::Key(FieldKey::Bio)]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::WeightSum { total: 90 }));
    }

    #[test]
    fn test_rejects_empty_category() {
        let err = CategoryTable::new(vec![
            def("a", 50, vec![FieldDefinition::Key(FieldKey::Name)]),
            def("b", 50, vec![]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::EmptyCategory { ref category } if category == "b"));
    }

    #[test]
    fn test_rejects_duplicate_label_in_category() {
        let err = CategoryTable::new(vec![def(
            "a",
            100,
            vec![
                FieldDefinition::Key(FieldKey::Name),
                FieldDefinition::Labelled {
                    field: FieldKey::Bio,
                    label: "Full Name".to_string(),
                },
            ],
        )])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateLabel { ref label, .. } if label == "Full Name"));
    }

    #[test]
    fn test_same_label_in_different_categories_is_allowed() {
        let table = CategoryTable::new(vec![
            def(
                "a",
                50,
                vec![FieldDefinition::Labelled {
                    field: FieldKey::Photos,
                    label: "Media".to_string(),
                }],
            ),
            def(
                "b",
                50,
                vec![FieldDefinition::Labelled {
                    field: FieldKey::Videos,
                    label: "Media".to_string(),
                }],
            ),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_rejects_field_in_two_categories() {
        let err = CategoryTable::new(vec![
            def("a", 50, vec![FieldDefinition::Key(FieldKey::Name)]),
            def(
                "b",
                50,
                vec![FieldDefinition::Labelled {
                    field: FieldKey::Name,
                    label: "Display Name".to_string(),
                }],
            ),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::FieldInMultipleCategories {
                field: FieldKey::Name
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_category_key() {
        let err = CategoryTable::new(vec![
            def("a", 50, vec![FieldDefinition::Key(FieldKey::Name)]),
            def("a", 50, vec![FieldDefinition::Key(FieldKey::Bio)]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::DuplicateCategory { .. }));
    }

    #[test]
    fn test_from_json_accepts_bare_and_labelled_fields() {
        let raw = r#"[
            { "key": "basics", "name": "Basics", "weight": 70,
              "fields": ["name", { "field": "city", "label": "Home Town" }] },
            { "key": "career", "name": "Career", "weight": 30,
              "fields": ["years_of_experience"] }
        ]"#;
        let table = CategoryTable::from_json(raw).unwrap();
        let basics = &table.categories()[0];
        assert_eq!(basics.fields()[0].label, "Full Name");
        assert_eq!(basics.fields()[1].label, "Home Town");
        assert_eq!(basics.fields()[1].key, FieldKey::City);
    }

    #[test]
    fn test_from_json_rejects_unknown_field_key() {
        let raw = r#"[{ "key": "a", "name": "A", "weight": 100, "fields": ["shoe_size"] }]"#;
        assert!(matches!(
            CategoryTable::from_json(raw),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn test_table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CategoryTable>();
    }
}
