//! TOML chart documents.
//!
//! Every section is optional:
//!
//! ```toml
//! overlay = { parallel = [{ resistor = 1e3 }, { capacitor = 1e-6 }] }
//!
//! [chart]
//! major_columns = 6
//! spacing = { e_series = 6 }
//!
//! [page]
//! color = "#000000"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{ChartConfig, ReactanceChart};
use crate::circuits::Network;
use crate::errors::ChartError;
use crate::render::PageLayout;

/// Chart, page and overlay settings read from a TOML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartDocument {
    /// Chart geometry and stroke settings.
    pub chart: ChartConfig,
    /// SVG page setup.
    pub page: PageLayout,
    /// Network drawn over the chart, if any.
    pub overlay: Option<Network>,
}

impl ChartDocument {
    /// Parses a document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let document = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded chart document");
        Ok(document)
    }

    /// Builds the chart the document describes, overlay included.
    pub fn chart(&self) -> Result<ReactanceChart, ChartError> {
        let chart = ReactanceChart::new(self.chart.clone())?;
        match &self.overlay {
            Some(network) => chart.with_overlay(network.clone()),
            None => Ok(chart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpacing;

    #[test]
    fn empty_document_is_all_defaults() {
        let doc = ChartDocument::from_toml_str("").unwrap();
        assert_eq!(doc, ChartDocument::default());
        assert!(doc.overlay.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let doc = ChartDocument::from_toml_str(
            r##"
            overlay = { series = [{ inductor = 0.1 }, { series = [{ resistor = 50.0 }, { capacitor = 1e-7 }] }] }

            [chart]
            major_columns = 6
            spacing = { e_series = 3 }

            [chart.strokes]
            major = 0.02

            [page]
            color = "#000000"
            "##,
        )
        .unwrap();
        assert_eq!(doc.chart.major_columns, 6);
        assert_eq!(doc.chart.major_rows, 10);
        assert_eq!(doc.chart.spacing, GridSpacing::ESeries(3));
        assert_eq!(doc.chart.strokes.major, 0.02);
        assert_eq!(doc.page.color, "#000000");
        assert_eq!(doc.page.font_family, "Arial");
        assert_eq!(doc.overlay, Some(Network::reference_overlay()));

        let chart = doc.chart().unwrap();
        assert_eq!(chart.viewport().columns(), 6);
        assert!(chart.overlay().is_some());
    }

    #[test]
    fn malformed_documents_are_toml_errors() {
        let err = ChartDocument::from_toml_str("[chart]\nmajor_columns = \"eight\"").unwrap_err();
        assert!(matches!(err, ChartError::Toml(_)));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        for text in [
            "[chart]\nmajor_colums = 6",
            "[chart.strokes]\nmajr = 0.02",
            "[page]\ncolour = \"#000000\"",
            "[overlay]\nresistor = 50.0\n[charts]\nmajor_rows = 4",
        ] {
            let err = ChartDocument::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ChartError::Toml(_)), "{text}");
        }
    }

    #[test]
    fn unsupported_series_fails_when_building_the_chart() {
        let doc = ChartDocument::from_toml_str("[chart]\nspacing = { e_series = 5 }").unwrap();
        assert!(matches!(doc.chart(), Err(ChartError::Configuration(_))));
    }
}
