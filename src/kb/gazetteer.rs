//! City gazetteer with population, coordinates and country.
//!
//! Rows come from a GeoNames-style dump, one city per line, tab-separated.
//! Several cities may share a name; lookups return all of them in file order.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::read_lines;
use crate::{Error, Result};

/// Column layout of the city file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum GazetteerLayout {
    /// GeoNames columns prefixed by a sequential row id.
    #[default]
    WithIds,
    /// Raw GeoNames columns; the GeoNames id doubles as the row id.
    Geonames,
}

impl GazetteerLayout {
    /// Number of columns before the GeoNames id.
    const fn offset(self) -> usize {
        match self {
            GazetteerLayout::WithIds => 1,
            GazetteerLayout::Geonames => 0,
        }
    }
}

/// One gazetteer city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    /// Row id used to link mentions.
    pub id: u64,
    /// Id in the upstream dump.
    pub source_id: u64,
    /// Primary name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// ISO 3166 two-letter country code.
    pub country_code: String,
    /// Population; 0 when unknown upstream.
    pub population: u64,
}

impl Location {
    /// Parse one row in the given layout.
    pub fn parse_row(line: &str, layout: GazetteerLayout) -> std::result::Result<Self, String> {
        let cols: Vec<&str> = line.trim_end_matches(['\n', '\r']).split('\t').collect();
        let off = layout.offset();
        // population is the last column we need
        let needed = 15 + off;
        if cols.len() < needed {
            return Err(format!(
                "expected at least {needed} columns, found {}",
                cols.len()
            ));
        }

        fn num<T: std::str::FromStr>(cols: &[&str], at: usize, what: &str) -> std::result::Result<T, String> {
            cols[at]
                .trim()
                .parse()
                .map_err(|_| format!("bad {what} {:?} in column {at}", cols[at]))
        }

        let source_id: u64 = num(&cols, off, "source id")?;
        let id = match layout {
            GazetteerLayout::WithIds => num(&cols, 0, "row id")?,
            GazetteerLayout::Geonames => source_id,
        };
        Ok(Location {
            id,
            source_id,
            name: cols[off + 1].to_string(),
            lat: num(&cols, off + 4, "latitude")?,
            lon: num(&cols, off + 5, "longitude")?,
            country_code: cols[off + 8].to_string(),
            population: num(&cols, off + 14, "population")?,
        })
    }
}

/// Immutable name → cities multimap.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    by_name: HashMap<String, Vec<Location>>,
    len: usize,
}

impl Gazetteer {
    /// Build from locations; order within an ambiguity list follows input order.
    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut by_name: HashMap<String, Vec<Location>> = HashMap::new();
        let mut len = 0;
        for loc in locations {
            by_name.entry(loc.name.clone()).or_default().push(loc);
            len += 1;
        }
        Self { by_name, len }
    }

    /// Load a city file.
    pub fn load(path: &Path, layout: GazetteerLayout) -> Result<Self> {
        log::info!("loading gazetteer from {}", path.display());
        let mut locations = Vec::new();
        for (idx, line) in read_lines(path)?.enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let loc = Location::parse_row(&line, layout)
                .map_err(|msg| Error::knowledge_base(path, idx + 1, msg))?;
            locations.push(loc);
        }
        let gazetteer = Self::from_locations(locations);
        log::info!(
            "gazetteer: {} cities under {} names",
            gazetteer.len(),
            gazetteer.name_count()
        );
        Ok(gazetteer)
    }

    /// All cities with exactly this name; empty when none.
    #[must_use]
    pub fn lookup(&self, name: &str) -> &[Location] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no city was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct names.
    #[must_use]
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}
