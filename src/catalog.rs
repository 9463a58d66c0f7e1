//! Section/option catalog
//!
//! The catalog is the fixed table the checklist is drawn from. It is built
//! once at startup (either the built-in table or a JSON file) and never
//! mutated afterwards; selection state refers to it by section name and
//! option value only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum::Display;

use crate::error::TickboxError;

/// Option classification used to scope the partial resets.
///
/// `Blue` options are the highlighted ones; everything else is `Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display)]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    Green,
    Blue,
}

impl Classification {
    /// Classification for an `is_blue` flag
    pub fn from_is_blue(is_blue: bool) -> Self {
        if is_blue { Self::Blue } else { Self::Green }
    }
}

/// Display colour tag of a section heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionTint {
    Red,
    Blue,
}

/// One selectable item within a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOption {
    /// Display string, e.g. `$50` or `Double`
    pub label: String,
    /// Identity of the option within its section
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_blue: bool,
}

impl PriceOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            is_blue: false,
        }
    }

    pub fn blue(label: &str, value: &str) -> Self {
        Self {
            is_blue: true,
            ..Self::new(label, value)
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::from_is_blue(self.is_blue)
    }

    /// Price labels (`$...`) are coloured by classification, the rest are not
    pub fn is_price(&self) -> bool {
        self.label.starts_with('$')
    }
}

/// A named, ordered group of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<SectionTint>,
    pub options: Vec<PriceOption>,
}

impl Section {
    pub fn new(name: &str, tint: Option<SectionTint>, options: Vec<PriceOption>) -> Self {
        Self {
            name: name.to_string(),
            tint,
            options,
        }
    }

    /// Look up an option by value
    pub fn option(&self, value: &str) -> Option<&PriceOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Values of the options carrying `class`
    pub fn values_of(&self, class: Classification) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(move |o| o.classification() == class)
            .map(|o| o.value.as_str())
    }
}

/// The immutable section table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Build a catalog from sections, checking it first
    pub fn new(sections: Vec<Section>) -> crate::error::Result<Self> {
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The table the checklist ships with
    pub fn builtin() -> Self {
        use PriceOption as O;

        Self {
            sections: vec![
                Section::new(
                    "AGC",
                    None,
                    vec![
                        O::new("$50", "50"),
                        O::new("$40", "40"),
                        O::new("$36", "36"),
                        O::new("$26", "26"),
                        O::new("$20", "20"),
                        O::new("$12", "12"),
                        O::new("$10", "10"),
                        O::new("$6", "6"),
                        O::new("$2", "2"),
                        O::new("Double", "double"),
                        O::new("Half", "half"),
                    ],
                ),
                Section::new(
                    "Busy",
                    Some(SectionTint::Red),
                    vec![
                        O::new("$40", "40"),
                        O::new("$32", "32"),
                        O::new("$30", "30"),
                        O::new("$22", "22"),
                        O::new("$18", "18"),
                        O::new("$12", "12"),
                        O::new("$10", "10"),
                        O::new("$4", "4"),
                        O::new("Double", "double"),
                        O::new("Delete", "delete"),
                    ],
                ),
                Section::new(
                    "Pepsi",
                    Some(SectionTint::Blue),
                    vec![
                        O::blue("$70", "70"),
                        O::new("$40", "40"),
                        O::new("$30", "30"),
                        O::new("$20", "20"),
                        O::new("$14", "14"),
                        O::new("$10", "10"),
                        O::new("$2", "2"),
                        O::new("Double", "double"),
                        O::new("Half", "half"),
                    ],
                ),
                Section::new(
                    "ElitShin",
                    None,
                    vec![
                        O::blue("$40", "40"),
                        O::new("$30", "30"),
                        O::blue("$20", "20"),
                        O::new("$20", "20-2"),
                        O::new("$10", "10"),
                        O::new("$1", "1"),
                    ],
                ),
            ],
        }
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog from {:?}", path.as_ref()))?;

        let catalog: Self =
            serde_json::from_str(&content).context("Failed to parse catalog JSON")?;

        catalog
            .validate()
            .with_context(|| format!("Invalid catalog in {:?}", path.as_ref()))?;

        Ok(catalog)
    }

    /// Check names and values are usable as storage keys
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.sections.is_empty() {
            return Err(TickboxError::catalog("catalog has no sections"));
        }

        let mut names = HashSet::new();
        for section in &self.sections {
            if section.name.trim().is_empty() {
                return Err(TickboxError::catalog("section name must not be empty"));
            }
            if !names.insert(section.name.as_str()) {
                return Err(TickboxError::catalog(format!(
                    "duplicate section '{}'",
                    section.name
                )));
            }
            if section.options.is_empty() {
                return Err(TickboxError::catalog(format!(
                    "section '{}' has no options",
                    section.name
                )));
            }

            let mut values = HashSet::new();
            for option in &section.options {
                if option.value.is_empty() {
                    return Err(TickboxError::catalog(format!(
                        "section '{}' has an option with an empty value",
                        section.name
                    )));
                }
                if !values.insert(option.value.as_str()) {
                    return Err(TickboxError::catalog(format!(
                        "duplicate value '{}' in section '{}'",
                        option.value, section.name
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Whether `value` is an option of section `name`
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.section(name)
            .is_some_and(|s| s.option(value).is_some())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        let names: Vec<&str> = catalog.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["AGC", "Busy", "Pepsi", "ElitShin"]);
    }

    #[test]
    fn test_builtin_blue_options() {
        let catalog = Catalog::builtin();
        let pepsi = catalog.section("Pepsi").unwrap();
        let blue: Vec<&str> = pepsi.values_of(Classification::Blue).collect();
        assert_eq!(blue, ["70"]);

        let elit = catalog.section("ElitShin").unwrap();
        let blue: Vec<&str> = elit.values_of(Classification::Blue).collect();
        assert_eq!(blue, ["40", "20"]);

        assert_eq!(catalog.section("AGC").unwrap().values_of(Classification::Blue).count(), 0);
    }

    #[test]
    fn test_section_tints() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.section("Busy").unwrap().tint, Some(SectionTint::Red));
        assert_eq!(catalog.section("Pepsi").unwrap().tint, Some(SectionTint::Blue));
        assert_eq!(catalog.section("AGC").unwrap().tint, None);
    }

    #[test]
    fn test_contains() {
        let catalog = Catalog::builtin();
        assert!(catalog.contains("ElitShin", "20-2"));
        assert!(!catalog.contains("AGC", "70"));
        assert!(!catalog.contains("Nope", "50"));
    }

    #[test]
    fn test_price_label_detection() {
        assert!(PriceOption::new("$50", "50").is_price());
        assert!(!PriceOption::new("Double", "double").is_price());
    }

    #[test]
    fn test_classification_parse() {
        assert_eq!(Classification::Blue.to_string(), "blue");
        assert_eq!(Classification::Green.to_string(), "green");
        assert_eq!(Classification::from_is_blue(true), Classification::Blue);
    }

    #[test]
    fn test_validate_rejects_duplicate_section() {
        let s = Section::new("A", None, vec![PriceOption::new("$1", "1")]);
        let err = Catalog::new(vec![s.clone(), s]).unwrap_err();
        assert!(err.to_string().contains("duplicate section 'A'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_value() {
        let s = Section::new(
            "A",
            None,
            vec![PriceOption::new("$1", "1"), PriceOption::blue("$1", "1")],
        );
        let err = Catalog::new(vec![s]).unwrap_err();
        assert!(err.to_string().contains("duplicate value '1'"));
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(Catalog::new(vec![]).is_err());
        assert!(Catalog::new(vec![Section::new("A", None, vec![])]).is_err());
        assert!(Catalog::new(vec![Section::new(" ", None, vec![PriceOption::new("$1", "1")])]).is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Tea","tint":"red","options":[{{"label":"$5","value":"5","is_blue":true}},{{"label":"Half","value":"half"}}]}}]"#
        )
        .unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        let tea = catalog.section("Tea").unwrap();
        assert_eq!(tea.tint, Some(SectionTint::Red));
        assert!(tea.option("5").unwrap().is_blue);
        assert!(!tea.option("half").unwrap().is_blue);
    }

    #[test]
    fn test_load_invalid_catalog_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(Catalog::load_from_file(file.path()).is_err());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Catalog::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_catalog_json_roundtrip_omits_defaults() {
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains(r#""tint":"red""#));
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Catalog::builtin());
    }
}
