use csv::ReaderBuilder;
use fpkm_lens_common::{FpkmLensError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Cell spellings read as "no value" rather than as bad data.
const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "#N/A", "NaN", "nan", "-nan", "null", "NULL", "None",
];

/// Header-keyed CSV contents, cells kept as text.
#[derive(Debug, Clone)]
pub struct GeneTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl GeneTable {
    /// Reads a header-keyed CSV. Short rows are kept and their trailing
    /// cells read as missing; rows longer than the header are rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FpkmLensError::InputNotFound(display.clone()),
            _ => FpkmLensError::InputUnreadable {
                path: display.clone(),
                source: e,
            },
        })?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b',')
            .flexible(true)
            .from_reader(file);
        let input_err = |e: csv::Error| match e.kind() {
            csv::ErrorKind::Io(io) => FpkmLensError::InputUnreadable {
                path: display.clone(),
                source: std::io::Error::new(io.kind(), io.to_string()),
            },
            _ => FpkmLensError::InputMalformed {
                path: display.clone(),
                source: e,
            },
        };
        let headers: Vec<String> = rdr
            .headers()
            .map_err(&input_err)?
            .iter()
            .map(|h| h.to_owned())
            .collect();
        let mut rows = Vec::new();
        let mut short_rows = 0usize;
        for record in rdr.records() {
            let record = record.map_err(&input_err)?;
            if record.len() > headers.len() {
                return Err(FpkmLensError::TooManyFields {
                    path: display.clone(),
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            if record.len() < headers.len() {
                short_rows += 1;
            }
            rows.push(record.iter().map(|c| c.to_owned()).collect());
        }
        if short_rows > 0 {
            debug!(path = %path.display(), short_rows, "rows shorter than header");
        }
        debug!(path = %path.display(), rows = rows.len(), columns = headers.len(), "loaded csv");
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Parses a column as floats, skipping missing cells.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| FpkmLensError::MissingColumn(name.to_owned()))?;
        let mut values = Vec::with_capacity(self.rows.len());
        let mut skipped = 0usize;
        for (row, record) in self.rows.iter().enumerate() {
            let cell = record.get(idx).map(|c| c.trim()).unwrap_or("");
            if MISSING_MARKERS.contains(&cell) {
                skipped += 1;
                continue;
            }
            let non_numeric = || FpkmLensError::NonNumeric {
                column: name.to_owned(),
                row,
                value: cell.to_owned(),
            };
            let v: f64 = cell.parse().map_err(|_| non_numeric())?;
            if v.is_nan() {
                skipped += 1;
                continue;
            }
            if v.is_infinite() {
                return Err(non_numeric());
            }
            values.push(v);
        }
        if skipped > 0 {
            warn!(column = name, skipped, "skipped missing cells");
        }
        Ok(values)
    }

    /// Pandas-style preview of the first `n` rows.
    pub fn format_preview(&self, n: usize) -> String {
        let head = self.head(n);
        let idx_width = head.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                head.iter()
                    .map(|r| preview_cell(r, i).chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let mut out = String::new();
        out.push_str(&" ".repeat(idx_width));
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("  {h:>w$}"));
        }
        out.push('\n');
        for (i, row) in head.iter().enumerate() {
            out.push_str(&format!("{i:<idx_width$}"));
            for (col, w) in widths.iter().enumerate() {
                out.push_str(&format!("  {:>w$}", preview_cell(row, col)));
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "\n[{} rows x {} columns]",
            self.row_count(),
            self.column_count()
        ));
        out
    }
}

fn preview_cell(row: &[String], col: usize) -> &str {
    row.get(col).map_or("NaN", |c| c.as_str())
}

pub fn summarize_column(column: &str, values: &[f64], total_rows: usize) -> ColumnSummary {
    let count = values.len();
    let (min, max, mean) = if count == 0 {
        (None, None, None)
    } else {
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / count as f64;
        (Some(min), Some(max), Some(mean))
    };
    ColumnSummary {
        column: column.to_owned(),
        count,
        missing: total_rows.saturating_sub(count),
        min,
        max,
        mean,
    }
}
