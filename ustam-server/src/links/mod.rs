//! Link catalog and resolution
//!
//! The catalog is the fixed set of link types a branch can expose on its
//! table landing pages. Resolution layers per-table overrides on top of
//! the branch defaults, in the branch's display order.

pub mod catalog;
pub mod resolver;

pub use catalog::{LinkTypeDescriptor, describe, is_known_key, link_types};
pub use resolver::{
    MoveDirection, canonical_table_link, move_link, normalize_links, resolve_links,
    resolve_main_link, resolve_view, validate_link_keys, validate_link_order,
};
