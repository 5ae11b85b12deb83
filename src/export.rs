//! Lead export serialization (JSON and CSV).

use crate::errors::AppError;
use crate::models::Lead;

/// Fixed CSV column order. This is an external contract; do not reorder.
pub const CSV_HEADERS: [&str; 13] = [
    "Company Name",
    "Industry",
    "Company Size",
    "Revenue Range",
    "Location",
    "Website",
    "Contact Name",
    "Contact Title",
    "Contact Email",
    "Contact Phone",
    "LinkedIn URL",
    "Lead Score",
    "Data Source",
];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Parse a format label. Anything but "json"/"csv" is rejected with
    /// [`AppError::UnsupportedFormat`].
    pub fn parse(format: &str) -> Result<Self, AppError> {
        match format {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Matching content type for HTTP responses.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

/// Serialize leads in the requested format.
///
/// JSON output is a pretty-printed array with the stored snake_case field
/// names. CSV fields are double-quote-wrapped but embedded quotes are NOT
/// escaped, so a value containing `"` corrupts its row; the format is kept
/// byte-compatible with previously produced exports.
pub fn export_leads(leads: &[Lead], format: &str) -> Result<String, AppError> {
    render(leads, ExportFormat::parse(format)?)
}

/// Serialize leads in an already-validated format.
pub fn render(leads: &[Lead], format: ExportFormat) -> Result<String, AppError> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(leads)
            .map_err(|e| AppError::InternalError(format!("JSON serialization failed: {}", e))),
        ExportFormat::Csv => Ok(to_csv(leads)),
    }
}

fn csv_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(",")
}

fn to_csv(leads: &[Lead]) -> String {
    let header: Vec<String> = CSV_HEADERS.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::with_capacity(leads.len() + 1);
    rows.push(csv_row(&header));

    for lead in leads {
        let fields = [
            lead.company_name.clone(),
            lead.industry.clone(),
            lead.company_size.clone(),
            lead.revenue_range.clone(),
            lead.location.clone(),
            lead.website.clone(),
            lead.contact_name.clone(),
            lead.contact_title.clone(),
            lead.contact_email.clone(),
            lead.contact_phone.clone(),
            lead.linkedin_url.clone(),
            lead.lead_score.to_string(),
            lead.data_source.clone(),
        ];
        rows.push(csv_row(&fields));
    }

    rows.join("\n")
}
