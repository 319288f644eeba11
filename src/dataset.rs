//! Training-set construction from a labelled ciphertext corpus.
//!
//! The corpus layout is `root/<label>/<file>`: every regular file in a
//! label directory is one sample of that label. Rows are written as CSV,
//! features first and label last, with no header, which is the format the
//! model training tooling consumes.

use crate::error::Result;
use crate::features::{FeatureAssembler, FeatureSet, FeatureVector};
use crate::io::{read_ciphertext, IOLimits};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One ciphertext file and its label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LabeledSample {
    pub label: String,
    pub path: PathBuf,
}

/// Extracted features for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub features: FeatureVector,
    pub label: String,
}

/// List every sample under `root`, sorted by label then file name.
pub fn discover_samples<P: AsRef<Path>>(root: P) -> Result<Vec<LabeledSample>> {
    let root = root.as_ref();
    let mut samples = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let label = entry.file_name().to_string_lossy().into_owned();
        for file in fs::read_dir(entry.path())? {
            let file = file?;
            if file.file_type()?.is_file() {
                samples.push(LabeledSample {
                    label: label.clone(),
                    path: file.path(),
                });
            }
        }
    }

    samples.sort();
    info!(root = %root.display(), samples = samples.len(), "discovered samples");
    Ok(samples)
}

/// Read and extract every sample in parallel. Output order follows input
/// order; the first read failure aborts the build.
pub fn build_feature_rows(
    samples: &[LabeledSample],
    feature_set: FeatureSet,
    limits: &IOLimits,
) -> Result<Vec<FeatureRow>> {
    let assembler = FeatureAssembler::new(feature_set);
    samples
        .par_iter()
        .map(|sample| -> Result<FeatureRow> {
            let data = read_ciphertext(&sample.path, limits)?;
            debug!(path = %sample.path.display(), bytes = data.len(), "extracting sample");
            Ok(FeatureRow {
                features: assembler.assemble(&data),
                label: sample.label.clone(),
            })
        })
        .collect()
}

/// Write a header line of feature names followed by `label`.
pub fn write_header<W: Write>(feature_set: FeatureSet, writer: &mut W) -> Result<()> {
    let mut names = feature_set.feature_names();
    names.push("label".to_string());
    writeln!(writer, "{}", names.join(","))?;
    Ok(())
}

/// Write rows as CSV. Floats use the shortest representation that parses
/// back to the same bits.
pub fn write_csv<W: Write>(rows: &[FeatureRow], writer: &mut W) -> Result<()> {
    for row in rows {
        let mut line = String::with_capacity(row.features.len() * 8);
        for value in row.features.values() {
            line.push_str(&value.to_string());
            line.push(',');
        }
        line.push_str(&csv_field(&row.label));
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
