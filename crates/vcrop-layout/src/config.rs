//! Declarative layout documents.
//!
//! A [`LayoutSpec`] is the JSON form of a layout: the parent extent, the row
//! and column units, and the element list.
//!
//! ```json
//! {
//!   "parent": { "width": 640, "height": 480 },
//!   "rows": [{ "percent": { "ratio": 0.9, "relative_to": "parent" } }, 48],
//!   "columns": [{ "percent": { "ratio": 1.0, "relative_to": "parent" } }],
//!   "elements": [
//!     { "id": "video", "columns": 0, "rows": 0,
//!       "width": { "aspect": 1.7777 }, "height": { "percent": { "ratio": 1.0 } } }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vcrop_core::{LayoutError, Margins, Size, Span, Unit};

use crate::element::Element;
use crate::engine::LayoutEngine;

/// Errors raised while loading or building a layout document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read layout file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout document does not build: {0}")]
    Layout(#[from] LayoutError),
}

/// A complete layout document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub parent: Size,
    pub rows: Vec<Unit>,
    pub columns: Vec<Unit>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

/// One element entry in a [`LayoutSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    pub columns: Span,
    pub rows: Span,
    pub width: Unit,
    pub height: Unit,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_center")]
    pub center: bool,
}

fn default_center() -> bool {
    true
}

impl ElementSpec {
    /// Convert into a validated, unbound element.
    pub fn to_element(&self) -> Result<Element, LayoutError> {
        let element = Element::new(
            self.id.clone(),
            self.columns,
            self.rows,
            self.width,
            self.height,
        )?
        .with_margins(self.margins)
        .with_center(self.center);
        element.validate()?;
        Ok(element)
    }
}

impl LayoutSpec {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a document from disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let spec = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(elements = spec.elements.len(), "layout document loaded");
        Ok(spec)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a layout engine from the document.
    pub fn build(&self) -> Result<LayoutEngine, ConfigError> {
        let elements = self
            .elements
            .iter()
            .map(ElementSpec::to_element)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LayoutEngine::new(
            self.parent,
            self.rows.iter().copied(),
            self.columns.iter().copied(),
            elements,
        )?)
    }
}
