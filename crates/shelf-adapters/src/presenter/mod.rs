//! Presenters: use case output to wire bytes.
//!
//! Pure functions of the DTO. A single [`CategoryOutput`] can be rendered in
//! every format without running the use case again.

mod xml;

use shelf_core::{
    application::{ApplicationError, CategoryOutput},
    error::ShelfResult,
};

/// Supported delivery formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireFormat {
    Json,
    Xml,
}

impl WireFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

/// Renders one category output.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPresenter<'a> {
    output: &'a CategoryOutput,
}

impl<'a> CategoryPresenter<'a> {
    pub fn new(output: &'a CategoryOutput) -> Self {
        Self { output }
    }

    /// `{"id":1,"name":"Electronics"}`
    pub fn to_json(&self) -> ShelfResult<Vec<u8>> {
        serde_json::to_vec(self.output).map_err(|e| json_error(&e))
    }

    /// `<Category><ID>1</ID><Name>Electronics</Name></Category>`
    pub fn to_xml(&self) -> ShelfResult<Vec<u8>> {
        xml::category(self.output)
    }

    pub fn render(&self, format: WireFormat) -> ShelfResult<Vec<u8>> {
        match format {
            WireFormat::Json => self.to_json(),
            WireFormat::Xml => self.to_xml(),
        }
    }
}

/// Render a list: a JSON array, or `<Categories>` wrapping one `<Category>`
/// per entry.
pub fn present_many(outputs: &[CategoryOutput], format: WireFormat) -> ShelfResult<Vec<u8>> {
    match format {
        WireFormat::Json => serde_json::to_vec(outputs).map_err(|e| json_error(&e)),
        WireFormat::Xml => xml::categories(outputs),
    }
}

fn json_error(err: &serde_json::Error) -> shelf_core::error::ShelfError {
    ApplicationError::Presentation {
        format: WireFormat::Json.as_str(),
        reason: err.to_string(),
    }
    .into()
}
