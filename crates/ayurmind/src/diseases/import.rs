//! CSV import for the disease catalog.
//!
//! List columns hold `;`-separated values. Each treatment is encoded as
//! `type|description|ingredient,ingredient|source`; the last two parts may be empty.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{DietGuidance, Disease, DiseaseId, Treatment};

const SEED_CSV: &str = include_str!("../../data/diseases.csv");

#[derive(Debug)]
pub enum DiseaseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, message: String },
}

impl std::fmt::Display for DiseaseImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiseaseImportError::Io(err) => write!(f, "failed to read disease data: {}", err),
            DiseaseImportError::Csv(err) => write!(f, "invalid disease CSV data: {}", err),
            DiseaseImportError::Row { line, message } => {
                write!(f, "invalid disease record on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for DiseaseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiseaseImportError::Io(err) => Some(err),
            DiseaseImportError::Csv(err) => Some(err),
            DiseaseImportError::Row { .. } => None,
        }
    }
}

impl From<std::io::Error> for DiseaseImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DiseaseImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// The classical diseases bundled with the crate.
pub fn seed_diseases() -> Result<Vec<Disease>, DiseaseImportError> {
    from_reader(SEED_CSV.as_bytes())
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Disease>, DiseaseImportError> {
    let file = File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Disease>, DiseaseImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut diseases = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line())
            .unwrap_or_default();
        let row: DiseaseRow = record.deserialize(Some(&headers))?;
        diseases.push(row.into_disease(line)?);
    }

    Ok(diseases)
}

#[derive(Debug, Deserialize)]
struct DiseaseRow {
    disease_id: String,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    english_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sanskrit: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(default)]
    dosha: String,
    #[serde(default)]
    symptoms: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pathogenesis: Option<String>,
    #[serde(default)]
    treatments: String,
    #[serde(default)]
    herbs: String,
    #[serde(default)]
    precautions: String,
    #[serde(default)]
    diet_include: String,
    #[serde(default)]
    diet_avoid: String,
    #[serde(default)]
    lifestyle: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    modern_equivalent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    evidence_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    severity: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
}

impl DiseaseRow {
    fn into_disease(self, line: u64) -> Result<Disease, DiseaseImportError> {
        if self.disease_id.is_empty() {
            return Err(DiseaseImportError::Row {
                line,
                message: "disease_id is empty".to_string(),
            });
        }
        if self.name.is_empty() {
            return Err(DiseaseImportError::Row {
                line,
                message: format!("{} has no name", self.disease_id),
            });
        }

        let treatments = split_list(&self.treatments, ';')
            .into_iter()
            .map(|encoded| parse_treatment(&encoded))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| DiseaseImportError::Row {
                line,
                message: format!("{} has a malformed treatment", self.disease_id),
            })?;

        Ok(Disease {
            disease_id: DiseaseId(self.disease_id),
            name: self.name,
            english_name: self.english_name,
            sanskrit: self.sanskrit,
            category: self.category,
            source: self.source,
            dosha: split_list(&self.dosha, ';'),
            symptoms: split_list(&self.symptoms, ';'),
            pathogenesis: self.pathogenesis,
            treatments,
            herbs: split_list(&self.herbs, ';'),
            precautions: split_list(&self.precautions, ';'),
            diet: DietGuidance {
                include: split_list(&self.diet_include, ';'),
                avoid: split_list(&self.diet_avoid, ';'),
            },
            lifestyle: split_list(&self.lifestyle, ';'),
            modern_equivalent: self.modern_equivalent,
            evidence_level: self.evidence_level,
            severity: self.severity,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

fn split_list(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_treatment(encoded: &str) -> Option<Treatment> {
    let mut parts = encoded.splitn(4, '|').map(str::trim);
    let kind = parts.next().filter(|kind| !kind.is_empty())?;
    let description = parts.next().filter(|description| !description.is_empty())?;
    let ingredients = parts
        .next()
        .map(|ingredients| split_list(ingredients, ','))
        .unwrap_or_default();
    let source = parts
        .next()
        .filter(|source| !source.is_empty())
        .map(str::to_string);

    Some(Treatment {
        kind: kind.to_string(),
        description: description.to_string(),
        ingredients,
        source,
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "disease_id,name,english_name,sanskrit,category,source,dosha,symptoms,pathogenesis,treatments,herbs,precautions,diet_include,diet_avoid,lifestyle,modern_equivalent,evidence_level,severity,is_active";

    #[test]
    fn bundled_seed_parses() {
        let diseases = seed_diseases().expect("seed parses");
        assert_eq!(diseases.len(), 8);

        let jwara = diseases
            .iter()
            .find(|disease| disease.name == "Jwara")
            .expect("jwara seeded");
        assert_eq!(jwara.disease_id, DiseaseId("CHARAKA_001".to_string()));
        assert_eq!(jwara.dosha, vec!["Vata", "Pitta", "Kapha"]);
        assert_eq!(jwara.category.as_deref(), Some("General"));
        assert_eq!(jwara.severity.as_deref(), Some("Variable"));
        assert!(jwara.is_active);

        let panchakarma = &jwara.treatments[1];
        assert_eq!(panchakarma.kind, "Panchakarma");
        assert!(panchakarma.ingredients.is_empty());
        assert_eq!(panchakarma.source.as_deref(), Some("Charaka Samhita"));
    }

    #[test]
    fn optional_columns_become_none() {
        let csv = format!("{HEADER}\nTEST_001,Arochaka,,,,,Vata,Loss of taste,,,,,,,,,,,\n");
        let diseases = from_reader(csv.as_bytes()).expect("parses");
        let disease = &diseases[0];

        assert_eq!(disease.english_name, None);
        assert_eq!(disease.source, None);
        assert!(disease.treatments.is_empty());
        assert!(disease.diet.include.is_empty());
        assert!(disease.is_active);
    }

    #[test]
    fn inactive_flag_is_read() {
        let csv = format!("{HEADER}\nTEST_002,Shotha,,,,,Kapha,,,,,,,,,,,,false\n");
        let diseases = from_reader(csv.as_bytes()).expect("parses");
        assert!(!diseases[0].is_active);
    }

    #[test]
    fn malformed_treatment_reports_line() {
        let csv = format!("{HEADER}\nTEST_003,Shotha,,,,,Kapha,,,Herbal,,,,,,,,,\n");
        let error = from_reader(csv.as_bytes()).expect_err("treatment lacks description");
        match error {
            DiseaseImportError::Row { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("TEST_003"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_name_is_rejected() {
        let csv = format!("{HEADER}\nTEST_004,,,,,,Kapha,,,,,,,,,,,,\n");
        assert!(matches!(
            from_reader(csv.as_bytes()),
            Err(DiseaseImportError::Row { .. })
        ));
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let error = from_path("/nonexistent/diseases.csv").expect_err("no such file");
        assert!(matches!(error, DiseaseImportError::Io(_)));
    }
}
