use super::fields::{parse_taxon_id, FieldCursor};
use super::TaxonRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Line encodings understood by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Tab-separated dump with a header line. The id is column 0, the parent
    /// id column 5 and the name column 9.
    #[default]
    Raw,
    /// Comma-separated `id,parent,name` with no header. The name is the
    /// remainder of the line and may itself contain commas.
    Triples,
}

/// A line did not contain enough delimiters for its format
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected at least {required} {delimiter_name}s")]
pub struct DecodeError {
    pub required: usize,
    pub delimiter_name: &'static str,
}

impl RecordFormat {
    pub fn delimiter(self) -> char {
        match self {
            Self::Raw => '\t',
            Self::Triples => ',',
        }
    }

    pub fn has_header(self) -> bool {
        matches!(self, Self::Raw)
    }

    /// Decode one line (without its terminator) into a record.
    pub fn decode(self, line: &str) -> Result<TaxonRecord, DecodeError> {
        match self {
            Self::Raw => self.decode_raw(line),
            Self::Triples => self.decode_triples(line),
        }
    }

    fn decode_raw(self, line: &str) -> Result<TaxonRecord, DecodeError> {
        let mut fields = FieldCursor::new(line, self.delimiter());
        let id = fields.nth(0).ok_or(self.missing(1))?;
        fields.skip_delimiter();
        // Four columns past the one after the id
        let parent = fields.nth(4).ok_or(self.missing(6))?;
        fields.skip_delimiter();
        let name = fields.nth(3).ok_or(self.missing(10))?;

        Ok(TaxonRecord::new(
            parse_taxon_id(id),
            parse_taxon_id(parent),
            name,
        ))
    }

    fn decode_triples(self, line: &str) -> Result<TaxonRecord, DecodeError> {
        let mut fields = FieldCursor::new(line, self.delimiter());
        let id = fields.nth(0).ok_or(self.missing(1))?;
        fields.skip_delimiter();
        let parent = fields.nth(0).ok_or(self.missing(2))?;
        fields.skip_delimiter();

        Ok(TaxonRecord::new(
            parse_taxon_id(id),
            parse_taxon_id(parent),
            fields.rest(),
        ))
    }

    fn missing(self, required: usize) -> DecodeError {
        DecodeError {
            required,
            delimiter_name: match self {
                Self::Raw => "tab",
                Self::Triples => "comma",
            },
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Triples => write!(f, "triples"),
        }
    }
}

impl std::str::FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "tsv" => Ok(Self::Raw),
            "triples" | "csv" => Ok(Self::Triples),
            _ => Err(format!("Unknown record format: {}", s)),
        }
    }
}
