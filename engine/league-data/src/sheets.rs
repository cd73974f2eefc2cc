//! Historical records spreadsheet

use crate::error::{FailureReason, SheetError};
use crate::outcome::Outcome;
use crate::table::{Cell, SheetDocument, Table};
use calamine::{Data, ExcelDateTime, Range, Reader, Xlsx};
use chrono::Timelike;
use league_cache::{CacheStats, Clock, SystemClock, TtlCache, DEFAULT_SHEETS_TTL_SECS};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Source of the multi-sheet records document
#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch_document(&self) -> Result<SheetDocument, SheetError>;
}

/// Google Sheets workbook downloaded as an `.xlsx` export
#[derive(Debug, Clone)]
pub struct XlsxExportSource {
    client: reqwest::Client,
    url: String,
}

impl XlsxExportSource {
    pub fn new(sheet_id: &str, timeout_secs: u64) -> Result<Self, SheetError> {
        Self::from_url(export_url(sheet_id), timeout_secs)
    }

    pub fn from_url(url: impl Into<String>, timeout_secs: u64) -> Result<Self, SheetError> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs)).build()?;
        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Export link for a Google Sheets document
pub fn export_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/export?format=xlsx")
}

#[async_trait::async_trait]
impl SheetSource for XlsxExportSource {
    async fn fetch_document(&self) -> Result<SheetDocument, SheetError> {
        debug!("Downloading workbook from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status { url: self.url.clone(), status: status.as_u16() });
        }

        let bytes = response.bytes().await?.to_vec();
        info!("Downloaded workbook ({} bytes)", bytes.len());

        // zip inflate and XML parsing are CPU-bound
        tokio::task::spawn_blocking(move || parse_workbook(bytes)).await?
    }
}

/// Parse every sheet of an `.xlsx` workbook; the first row is the header
pub fn parse_workbook(bytes: Vec<u8>) -> Result<SheetDocument, SheetError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let mut document = SheetDocument::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let table = range_to_table(&range);
        debug!("Parsed sheet {} ({} rows)", name, table.len());
        document.insert(name, table);
    }

    Ok(document)
}

/// Turn a worksheet range into a table, naming blank headers "Unnamed: <index>"
pub fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Table::default();
    };

    let columns = header
        .iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            Data::Empty => format!("Unnamed: {index}"),
            other => other.to_string(),
        })
        .collect();

    let body = rows.map(|row| row.iter().map(to_cell).collect()).collect();
    Table::new(columns, body)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) => Cell::Text(text.clone()),
        Data::Int(value) => Cell::Int(*value),
        Data::Float(value) => Cell::Float(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::DateTime(value) => date_cell(value),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::Text(text.clone()),
        other => Cell::Text(other.to_string()),
    }
}

/// Excel serial dates as `YYYY-MM-DD`, with the time only when it is not midnight
fn date_cell(value: &ExcelDateTime) -> Cell {
    if !value.is_datetime() {
        return Cell::Float(value.as_f64());
    }
    match value.as_datetime() {
        Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
            Cell::Text(datetime.format("%Y-%m-%d").to_string())
        }
        Some(datetime) => Cell::Text(datetime.format("%Y-%m-%d %H:%M:%S").to_string()),
        None => Cell::Float(value.as_f64()),
    }
}

/// Historical records loader with a very short-lived cache
pub struct HistoricalRecordsLoader {
    source: Arc<dyn SheetSource>,
    cache: TtlCache<Arc<SheetDocument>>,
}

impl HistoricalRecordsLoader {
    pub fn new(source: Arc<dyn SheetSource>) -> Self {
        Self::with_clock(source, DEFAULT_SHEETS_TTL_SECS, Arc::new(SystemClock))
    }

    pub fn with_clock(source: Arc<dyn SheetSource>, ttl_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        Self { source, cache: TtlCache::with_clock("historical_records", ttl_seconds, clock) }
    }

    /// The whole workbook, or the reason it could not be read
    pub async fn load(&self) -> Outcome<Arc<SheetDocument>> {
        let result = self
            .cache
            .get_or_refresh(move || async move {
                let document = self.source.fetch_document().await?;
                info!("Loaded {} sheets", document.len());
                Ok::<_, SheetError>(Arc::new(document))
            })
            .await;

        match result {
            Ok(document) => Outcome::Ready(document),
            Err(e) => {
                warn!("Historical records unavailable: {}", e);
                Outcome::Unavailable(FailureReason::from_sheet("historical_records", &e))
            }
        }
    }

    /// The whole workbook; empty when it cannot be fetched or parsed
    pub async fn get_sheets(&self) -> Arc<SheetDocument> {
        self.load().await.unwrap_or_empty()
    }

    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
