//! Document models
//!
//! Files and folders from the customer's cloud-drive folder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file in a customer's document folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Drive item id
    pub id: String,
    /// File name including extension
    pub name: String,
    /// Browser link to the file
    pub web_url: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    /// Containing folder, `None` for the customer's root folder
    #[serde(default)]
    pub folder_id: Option<String>,
}

/// A sub-folder inside a customer's document folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFolder {
    pub id: String,
    pub name: String,
    pub web_url: String,
    /// Number of direct children reported by the drive
    #[serde(default)]
    pub child_count: u32,
}
