//! Sample records out of GEO's SOFT text (`targ=gsm`, `view=brief`).
//!
//! ```text
//! ^SAMPLE = GSM1001
//! !Sample_title = liver control 1
//! !Sample_geo_accession = GSM1001
//! !Sample_characteristics_ch1 = tissue: liver
//! !Sample_characteristics_ch1 = treatment: none
//! ```

use crate::error::BioteaError;
use crate::geo::SeriesMetadata;
use std::collections::HashMap;

const SAMPLE_ENTITY: &str = "^SAMPLE";
const SAMPLE_ATTRIBUTE: &str = "!Sample_";
const CHARACTERISTICS: &str = "characteristics_ch";
const CHARACTERISTIC_PREFIX: &str = "characteristics.";

/// Where a column name came from. A characteristic label may repeat a field
/// name (`characteristics_ch1 = title: x`), and the two stay separate columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Origin {
    Field,
    Characteristic,
}

#[derive(Default)]
struct Columns {
    keys: Vec<(Origin, String)>,
    index: HashMap<(Origin, String), usize>,
}

impl Columns {
    fn position(&mut self, origin: Origin, name: &str) -> usize {
        let key = (origin, name.to_string());
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.keys.len();
        self.keys.push(key.clone());
        self.index.insert(key, idx);
        idx
    }

    /// Final header. Characteristics that clash with a field are prefixed.
    fn into_names(self) -> Vec<String> {
        let index = self.index;
        self.keys
            .into_iter()
            .map(|(origin, name)| match origin {
                Origin::Characteristic if index.contains_key(&(Origin::Field, name.clone())) => {
                    format!("{CHARACTERISTIC_PREFIX}{name}")
                }
                _ => name,
            })
            .collect()
    }
}

pub fn parse_samples(accession: &str, text: &str) -> Result<SeriesMetadata, BioteaError> {
    let mut columns = Columns::default();
    let mut samples: Vec<HashMap<usize, Vec<String>>> = Vec::new();
    let mut in_sample = false;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');

        if line.starts_with('^') {
            in_sample = entity_name(line) == SAMPLE_ENTITY;
            if in_sample {
                samples.push(HashMap::new());
            }
            continue;
        }

        if !in_sample {
            continue;
        }
        let Some(attribute) = line.strip_prefix(SAMPLE_ATTRIBUTE) else {
            continue;
        };
        let Some((key, value)) = attribute.split_once('=') else {
            continue;
        };

        let (origin, name, value) = column_for(key.trim(), value.trim());
        let idx = columns.position(origin, name);
        if let Some(sample) = samples.last_mut() {
            sample.entry(idx).or_default().push(value.to_string());
        }
    }

    if samples.is_empty() {
        return Err(BioteaError::SeriesNotFound(accession.to_string()));
    }

    let width = columns.keys.len();
    let rows: Vec<Vec<String>> = samples
        .into_iter()
        .map(|mut sample| {
            (0..width)
                .map(|idx| sample.remove(&idx).unwrap_or_default().join("; "))
                .collect()
        })
        .collect();

    Ok(SeriesMetadata {
        accession: accession.to_string(),
        columns: columns.into_names(),
        rows,
    })
}

fn entity_name(line: &str) -> &str {
    line.split_once('=').map_or(line, |(name, _)| name).trim()
}

/// `characteristics_chN = tissue: liver` becomes the column `tissue`.
fn column_for<'a>(key: &'a str, value: &'a str) -> (Origin, &'a str, &'a str) {
    if key.starts_with(CHARACTERISTICS)
        && let Some((name, inner)) = value.split_once(':')
        && !name.trim().is_empty()
    {
        return (Origin::Characteristic, name.trim(), inner.trim());
    }
    (Origin::Field, key, value)
}
