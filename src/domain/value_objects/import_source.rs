//! Import source tags and capabilities

use crate::shared::errors::BulkImportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported bulk-import sources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImportSource {
    /// CSV file reachable by URL
    #[serde(rename = "csv")]
    Csv,
    /// Google Docs spreadsheet shared as a CSV export
    #[serde(rename = "gdocs")]
    GoogleDocs,
    /// Flickr photo album
    #[serde(rename = "flickr")]
    Flickr,
    /// EpiCollect Plus mobile data-collection project
    #[serde(rename = "epicollect")]
    EpiCollect,
}

impl ImportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportSource::Csv => "csv",
            ImportSource::GoogleDocs => "gdocs",
            ImportSource::Flickr => "flickr",
            ImportSource::EpiCollect => "epicollect",
        }
    }
}

impl fmt::Display for ImportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImportSource {
    type Err = BulkImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ImportSource::Csv),
            "gdocs" => Ok(ImportSource::GoogleDocs),
            "flickr" => Ok(ImportSource::Flickr),
            "epicollect" => Ok(ImportSource::EpiCollect),
            other => Err(BulkImportError::UnknownSource(other.to_string())),
        }
    }
}
