//! Record loading
//!
//! Finds the newest squad export in a folder and turns its first HTML table
//! into [`PlayerRecord`]s. This is the only part of the library that reads
//! export files; everything downstream works on in-memory records.

use crate::attributes;
use crate::error::{AnalysisError, Result};
use crate::normalize::PlayerRecord;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Columns whose presence marks a table as a squad export
const EXPORT_INDICATORS: &[&str] = &["Name", "Pac", "Acc", "Age", "Position", "Club"];

/// Minimum number of attribute columns for a usable table
const MIN_ATTRIBUTE_COLUMNS: usize = 2;

/// Generated ids (e.g. UUID file names) are longer than this
const GENERATED_STEM_LEN: usize = 20;

lazy_static::lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").unwrap();
    static ref ROW: Selector = Selector::parse("tr").unwrap();
    static ref HEADER_CELL: Selector = Selector::parse("th").unwrap();
    static ref CELL: Selector = Selector::parse("td").unwrap();
}

/// What a header column holds
#[derive(Debug, Clone, PartialEq)]
enum Column {
    Identity,
    Position,
    Attribute(&'static str),
    Info(String),
    Dropped,
}

fn classify_column(header: &str) -> Column {
    let h = header.trim();
    if h.eq_ignore_ascii_case("name") || h.eq_ignore_ascii_case("player") {
        Column::Identity
    } else if h.eq_ignore_ascii_case("position") {
        Column::Position
    } else if h.to_ascii_lowercase().contains("uid") {
        Column::Dropped
    } else if let Some(code) = attributes::canonical(h) {
        Column::Attribute(code)
    } else {
        Column::Info(h.to_string())
    }
}

/// Records parsed from one export table
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    /// Display-only columns, in source order
    pub info_columns: Vec<String>,
    /// Attribute codes present in the header, in source order
    pub attribute_columns: Vec<&'static str>,
    /// One record per data row, in squad order
    pub records: Vec<PlayerRecord>,
}

/// A parsed export and where it came from
#[derive(Debug, Clone)]
pub struct LoadedExport {
    pub path: PathBuf,
    pub table: ExportTable,
}

fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header labels of a table: its `th` cells, or the first row's `td` cells
/// when the export has no `th`.
fn header_labels(table: ElementRef) -> Option<(usize, Vec<String>)> {
    for (idx, row) in table.select(&ROW).enumerate() {
        let th: Vec<String> = row.select(&HEADER_CELL).map(cell_text).collect();
        if !th.is_empty() {
            return Some((idx, th));
        }
        let td: Vec<String> = row.select(&CELL).map(cell_text).collect();
        if !td.is_empty() {
            return Some((idx, td));
        }
    }
    None
}

/// Parse the first table of an HTML export.
///
/// The header must name the player column and at least two known
/// attributes. Columns containing `uid` are dropped. A data row whose cell
/// count differs from the header is a parse error, and so is a table with no
/// data rows.
pub fn parse_export_table(html: &str, origin: &str) -> Result<ExportTable> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| AnalysisError::parse(origin, "no table found"))?;

    let (header_row, labels) = header_labels(table)
        .ok_or_else(|| AnalysisError::parse(origin, "table has no header row"))?;
    let columns: Vec<Column> = labels.iter().map(|l| classify_column(l)).collect();

    if !columns.contains(&Column::Identity) {
        return Err(AnalysisError::parse(
            origin,
            format!("no 'Name' column in header [{}]", labels.join(", ")),
        ));
    }
    let attribute_columns: Vec<&'static str> = columns
        .iter()
        .filter_map(|c| match c {
            Column::Attribute(code) => Some(*code),
            _ => None,
        })
        .collect();
    if attribute_columns.len() < MIN_ATTRIBUTE_COLUMNS {
        return Err(AnalysisError::parse(
            origin,
            format!(
                "expected at least {} attribute columns, found {}",
                MIN_ATTRIBUTE_COLUMNS,
                attribute_columns.len()
            ),
        ));
    }
    let dropped = columns.iter().filter(|c| **c == Column::Dropped).count();
    if dropped > 0 {
        log::debug!("{}: dropping {} uid column(s)", origin, dropped);
    }
    let info_columns: Vec<String> = columns
        .iter()
        .filter_map(|c| match c {
            Column::Info(name) => Some(name.clone()),
            _ => None,
        })
        .collect();

    let mut records = Vec::new();
    for row in table.select(&ROW).skip(header_row + 1) {
        let cells: Vec<String> = row.select(&CELL).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        let row_no = records.len() + 1;
        if cells.len() != columns.len() {
            return Err(AnalysisError::parse_at(
                origin,
                row_no,
                format!("expected {} cells, found {}", columns.len(), cells.len()),
            ));
        }

        let mut record = PlayerRecord::new(row_no, "");
        for (column, value) in columns.iter().zip(cells) {
            match column {
                Column::Identity => record.name = value,
                Column::Position => record.position = value,
                Column::Attribute(code) => {
                    record.attributes.insert(code.to_string(), value);
                }
                Column::Info(name) => record.info.push((name.clone(), value)),
                Column::Dropped => {}
            }
        }
        records.push(record);
    }
    if records.is_empty() {
        return Err(AnalysisError::parse(origin, "table has no data rows"));
    }

    log::info!(
        "Parsed {} rows with {} attribute columns from {}",
        records.len(),
        attribute_columns.len(),
        origin
    );
    Ok(ExportTable {
        info_columns,
        attribute_columns,
        records,
    })
}

/// Whether a file name looks like something this tool wrote.
pub fn is_generated_output(path: &Path, output_prefix: &str) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if file_name.starts_with(output_prefix) {
        return true;
    }
    let stem = file_name.split('.').next().unwrap_or("");
    stem.len() > GENERATED_STEM_LEN && stem.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Whether the first table of an HTML file has a recognised squad column.
pub fn looks_like_export(path: &Path) -> bool {
    let Ok(bytes) = fs::read(path) else {
        return false;
    };
    let html = String::from_utf8_lossy(&bytes);
    let document = Html::parse_document(&html);
    let Some(table) = document.select(&TABLE).next() else {
        return false;
    };
    header_labels(table)
        .map(|(_, labels)| labels.iter().any(|l| EXPORT_INDICATORS.contains(&l.as_str())))
        .unwrap_or(false)
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

fn modified(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Pick the newest export in `folder`.
///
/// Only `.html`/`.htm` files are considered and our own reports are
/// skipped. Files whose first table looks like a squad export win; if none
/// does, the newest remaining HTML file is used. Equal timestamps are
/// broken by file name.
pub fn find_latest_export(folder: &Path, output_prefix: &str) -> Result<PathBuf> {
    let discovery = |reason: &str| AnalysisError::FileDiscovery {
        folder: folder.to_path_buf(),
        reason: reason.to_string(),
    };
    if !folder.is_dir() {
        return Err(discovery("folder does not exist"));
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_html(p))
        .collect();
    if candidates.is_empty() {
        return Err(discovery("no .html or .htm files"));
    }
    candidates.retain(|p| {
        let generated = is_generated_output(p, output_prefix);
        if generated {
            log::debug!("Skipping generated file {}", p.display());
        }
        !generated
    });
    if candidates.is_empty() {
        return Err(discovery("only previously generated reports were found"));
    }

    let newest = |paths: &[PathBuf]| -> Option<PathBuf> {
        paths
            .iter()
            .max_by(|a, b| modified(a).cmp(&modified(b)).then_with(|| a.cmp(b)))
            .cloned()
    };

    let exports: Vec<PathBuf> = candidates
        .iter()
        .filter(|p| looks_like_export(p))
        .cloned()
        .collect();
    if let Some(latest) = newest(&exports) {
        log::info!("Found export file: {}", latest.display());
        return Ok(latest);
    }
    let fallback = newest(&candidates).ok_or_else(|| discovery("no readable HTML files"))?;
    log::info!("Using fallback file: {}", fallback.display());
    Ok(fallback)
}

/// Read and parse one export file.
pub fn load_export(path: &Path) -> Result<LoadedExport> {
    let bytes = fs::read(path)?;
    let html = String::from_utf8_lossy(&bytes);
    let table = parse_export_table(&html, &path.display().to_string())?;
    Ok(LoadedExport {
        path: path.to_path_buf(),
        table,
    })
}

/// Find the newest export in `folder` and parse it.
pub fn load_latest(folder: &Path, output_prefix: &str) -> Result<LoadedExport> {
    let path = find_latest_export(folder, output_prefix)?;
    load_export(&path)
}
