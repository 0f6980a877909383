//! Catalog command

use crate::error::CliResult;
use crate::output::{print_structured, print_table, OutputFormat};
use materiality_core::Classifier;
use materiality_types::Catalog;
use serde::Serialize;
use tabled::Tabled;

/// One input field and its accepted values
#[derive(Debug, Serialize, Tabled)]
pub struct CatalogRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Accepted Values")]
    pub values: String,
}

/// Flatten a catalog into table rows
pub fn rows(catalog: &Catalog) -> Vec<CatalogRow> {
    let bands: Vec<&str> = catalog.bands.iter().map(|b| b.label()).collect();
    vec![
        CatalogRow {
            field: "sector".to_string(),
            values: catalog.sectors.join(", "),
        },
        CatalogRow {
            field: "geography".to_string(),
            values: catalog.geographies.join(", "),
        },
        CatalogRow {
            field: "size".to_string(),
            values: format!("{} ({})", catalog.sizes.join(", "), catalog.size_help),
        },
        CatalogRow {
            field: "score".to_string(),
            values: format!(
                "{}–{} ({})",
                catalog.scale_min, catalog.scale_max, catalog.policy
            ),
        },
        CatalogRow {
            field: "band".to_string(),
            values: bands.join(", "),
        },
    ]
}

/// Execute the catalog command
pub fn execute(classifier: &Classifier, format: OutputFormat) -> CliResult<()> {
    let catalog = classifier.catalog();
    match format {
        OutputFormat::Table => {
            print_table(rows(&catalog));
            Ok(())
        }
        _ => print_structured(&catalog, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use materiality_types::ScoringPolicy;

    #[test]
    fn test_rows_cover_every_field() {
        let catalog = Catalog::for_policy(ScoringPolicy::FivePoint);
        let rows = rows(&catalog);

        let fields: Vec<_> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, vec!["sector", "geography", "size", "score", "band"]);
        assert!(rows[0].values.contains("Financial Services"));
        assert_eq!(rows[3].values, "1–5 (five-point)");
        assert!(rows[4].values.contains("Medium–High"));
    }
}
