//! Link type catalog
//!
//! Fixed, code-defined set of link types. Labels and icons are what the
//! customer landing page renders; branches choose which keys to use and
//! in what order.

/// One entry of the link type catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTypeDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

/// Fallback descriptor for keys that are stored but no longer cataloged
const DEFAULT_DESCRIPTOR: LinkTypeDescriptor = LinkTypeDescriptor {
    key: "default",
    label: "Website",
    icon: Some("icons8-location-50.png"),
};

static LINK_TYPES: &[LinkTypeDescriptor] = &[
    LinkTypeDescriptor {
        key: "order",
        label: "Bir Tıkla Sipariş Ver!",
        icon: Some("icons8-buy-48.png"),
    },
    LinkTypeDescriptor {
        key: "feedback",
        label: "Yorum Bırak",
        icon: Some("icons8-review-50.png"),
    },
    LinkTypeDescriptor {
        key: "instagram",
        label: "Instagram",
        icon: Some("icons8-instagram-48.png"),
    },
    LinkTypeDescriptor {
        key: "whatsapp",
        label: "WhatsApp",
        icon: Some("icons8-whatsapp-48.png"),
    },
    LinkTypeDescriptor {
        key: "branchIstanbul",
        label: "İstanbul Şubemiz",
        icon: Some("icons8-location-50.png"),
    },
    LinkTypeDescriptor {
        key: "branchAnkara",
        label: "Ankara Şubemiz",
        icon: Some("icons8-location-50.png"),
    },
    LinkTypeDescriptor {
        key: "branchKurttepe",
        label: "Kurttepe Şubemiz",
        icon: Some("icons8-location-50.png"),
    },
    LinkTypeDescriptor {
        key: "branchBarajyolu",
        label: "Barajyolu Şubemiz",
        icon: Some("icons8-location-50.png"),
    },
    LinkTypeDescriptor {
        key: "threads",
        label: "Threads",
        icon: Some("icons8-threads-50.png"),
    },
    LinkTypeDescriptor {
        key: "twitter",
        label: "Twitter",
        icon: Some("icons8-twitter-50.png"),
    },
    LinkTypeDescriptor {
        key: "tiktok",
        label: "TikTok",
        icon: Some("icons8-tiktok-50.png"),
    },
];

/// The full catalog, in canonical order
pub fn link_types() -> &'static [LinkTypeDescriptor] {
    LINK_TYPES
}

/// Whether `key` is part of the catalog
pub fn is_known_key(key: &str) -> bool {
    LINK_TYPES.iter().any(|d| d.key == key)
}

/// Descriptor for `key`, falling back to a generic entry for stored keys
/// that have since been removed from the catalog
pub fn describe(key: &str) -> &'static LinkTypeDescriptor {
    LINK_TYPES
        .iter()
        .find(|d| d.key == key)
        .unwrap_or(&DEFAULT_DESCRIPTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert!(is_known_key("order"));
        assert!(is_known_key("branchKurttepe"));
        assert!(!is_known_key("myspace"));
        assert!(!is_known_key(""));
    }

    #[test]
    fn test_describe_fallback() {
        assert_eq!(describe("order").label, "Bir Tıkla Sipariş Ver!");
        assert_eq!(describe("unknown-key").label, "Website");
    }

    #[test]
    fn test_catalog_keys_unique() {
        let mut keys: Vec<_> = link_types().iter().map(|d| d.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), link_types().len());
    }
}
