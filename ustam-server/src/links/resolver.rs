//! Link resolution
//!
//! Pure functions that turn branch settings plus a table row into the
//! payload the customer landing page renders. Precedence is a
//! short-circuiting lookup: the table's override map first, then the
//! branch defaults. Empty URLs count as unset.

use std::collections::{HashMap, HashSet};

use shared::models::{Branch, LinkItem, ManagedTable, TableViewData};

use super::catalog;
use crate::utils::{AppError, AppResult};

/// Canonical customer-facing URL for a table, baked into the QR code
pub fn canonical_table_link(base_url: &str, branch_slug: &str, table_number: i64) -> String {
    format!("{base_url}/musteri/sube/{branch_slug}/table/{table_number}")
}

/// Effective main QR destination: the table override wins when non-empty
pub fn resolve_main_link(table: &ManagedTable) -> String {
    match table.override_main_qr_link.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => table.link.clone(),
    }
}

/// Resolve the ordered link list for one table.
///
/// Iterates the branch's `link_order`; for each key the first non-empty
/// URL across `[table.overridden_links, branch.default_links]` wins. Keys
/// with no URL anywhere are dropped, not rendered blank.
pub fn resolve_links(branch: &Branch, table: &ManagedTable) -> Vec<LinkItem> {
    let layers: [&HashMap<String, String>; 2] = [&table.overridden_links, &branch.default_links];

    branch
        .link_order
        .iter()
        .filter_map(|key| {
            let url = layers
                .iter()
                .find_map(|layer| layer.get(key).filter(|u| !u.trim().is_empty()))?;
            let descriptor = catalog::describe(key);
            Some(LinkItem {
                key: key.clone(),
                label: descriptor.label.to_string(),
                icon: descriptor.icon.map(|i| i.to_string()),
                url: url.clone(),
            })
        })
        .collect()
}

/// Assemble the full customer view payload
pub fn resolve_view(branch: &Branch, table: &ManagedTable) -> TableViewData {
    TableViewData {
        ordered_links: resolve_links(branch, table),
        main_qr_link: resolve_main_link(table),
        display_whatsapp_number: branch.display_whatsapp_number.clone(),
    }
}

/// Drop entries whose value is empty after trimming.
///
/// Saving an empty URL means "unset this key", so pruning happens at
/// write time and the store never holds blank values.
pub fn normalize_links(links: &HashMap<String, String>) -> HashMap<String, String> {
    links
        .iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .map(|(k, v)| (k.clone(), v.trim().to_string()))
        .collect()
}

/// Swap a key with its neighbor in the ordering.
///
/// `Up` swaps with the previous entry, `Down` with the next one. Moving
/// the first entry up or the last entry down is a no-op, as is a key
/// that is not present at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

pub fn move_link(link_order: &[String], key: &str, direction: MoveDirection) -> Vec<String> {
    let mut order = link_order.to_vec();
    let Some(idx) = order.iter().position(|k| k == key) else {
        return order;
    };
    match direction {
        MoveDirection::Up if idx > 0 => order.swap(idx, idx - 1),
        MoveDirection::Down if idx + 1 < order.len() => order.swap(idx, idx + 1),
        _ => {}
    }
    order
}

/// Reject link maps containing keys outside the catalog
pub fn validate_link_keys(links: &HashMap<String, String>) -> AppResult<()> {
    for key in links.keys() {
        if !catalog::is_known_key(key) {
            return Err(AppError::new(crate::utils::ErrorCode::UnknownLinkType)
                .with_detail("key", key.as_str()));
        }
    }
    Ok(())
}

/// Reject orderings with unknown or repeated keys
pub fn validate_link_order(link_order: &[String]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for key in link_order {
        if !catalog::is_known_key(key) {
            return Err(AppError::new(crate::utils::ErrorCode::UnknownLinkType)
                .with_detail("key", key.as_str()));
        }
        if !seen.insert(key.as_str()) {
            return Err(AppError::new(crate::utils::ErrorCode::DuplicateLinkOrder)
                .with_detail("key", key.as_str()));
        }
    }
    Ok(())
}
