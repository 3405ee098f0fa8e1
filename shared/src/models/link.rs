//! Link types and resolved view payloads

use serde::{Deserialize, Serialize};

/// A single resolved link as shown on the customer landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    /// Catalog key, e.g. "order" or "whatsapp"
    pub key: String,
    /// Display label from the catalog
    pub label: String,
    /// Icon asset filename from the catalog, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Resolved destination URL
    pub url: String,
}

/// Everything the customer landing page needs for one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableViewData {
    /// Links in branch display order, overrides already applied,
    /// empty and unset entries dropped
    pub ordered_links: Vec<LinkItem>,
    /// Effective main QR destination for this table
    pub main_qr_link: String,
    /// Branch WhatsApp number for the floating contact button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_whatsapp_number: Option<String>,
}
