//! Export-job request model
//!
//! The exporter backend accepts a JSON:API-style document describing the
//! export job to run. The shape is fixed; only the source system ID and
//! export type vary per deployment.

use crate::config::ExportJobConfig;
use serde::{Deserialize, Serialize};

/// JSONPath of the source-system identifier in the digital specimen model
pub const SOURCE_SYSTEM_FIELD: &str = "$['ods:sourceSystemID']";

/// DOI of the target type handle for digital specimens
pub const TARGET_TYPE: &str = "https://doi.org/21.T11148/894b1e6cad57e921764e";

/// JSON:API resource type for export jobs
const EXPORT_JOB_TYPE: &str = "export-job";

/// A single search parameter for the export query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParam {
    #[serde(rename = "inputField")]
    pub input_field: String,

    #[serde(rename = "inputValue")]
    pub input_value: String,
}

/// Attributes of an export job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportJobAttributes {
    #[serde(rename = "searchParams")]
    pub search_params: Vec<SearchParam>,

    #[serde(rename = "targetType")]
    pub target_type: String,

    #[serde(rename = "exportType")]
    pub export_type: String,

    /// The backend expects the string `"true"`, not a JSON boolean
    #[serde(rename = "isSourceSystemJob")]
    pub is_source_system_job: String,
}

/// JSON:API data wrapper for an export job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportJobData {
    #[serde(rename = "type")]
    pub resource_type: String,

    pub attributes: ExportJobAttributes,
}

/// Top-level export-job request document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportJobRequest {
    pub data: ExportJobData,
}

impl ExportJobRequest {
    /// Build the scheduling request for a source-system export job.
    ///
    /// Pure function of the configuration: for fixed inputs the produced
    /// document is identical across calls.
    pub fn for_source_system(config: &ExportJobConfig) -> Self {
        Self {
            data: ExportJobData {
                resource_type: EXPORT_JOB_TYPE.to_string(),
                attributes: ExportJobAttributes {
                    search_params: vec![SearchParam {
                        input_field: SOURCE_SYSTEM_FIELD.to_string(),
                        input_value: config.source_system_id.clone(),
                    }],
                    target_type: TARGET_TYPE.to_string(),
                    export_type: config.export_type.clone(),
                    is_source_system_job: "true".to_string(),
                },
            },
        }
    }
}
