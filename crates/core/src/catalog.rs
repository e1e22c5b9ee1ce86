//! The fixed catalog of birth control products the finder can recommend.
//!
//! The catalog is compiled in. Products carry their display label (icon
//! glyph included) and a one-sentence description; [`CATALOG`] lists them
//! in the order the results page shows the full reference list.

use serde::{Deserialize, Serialize};

/// Identifier for a product in the fixed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductId {
    /// Copper IUD.
    Paragard,
    /// Depo-Provera injection.
    Dmpa,
    /// Combined pill with drospirenone.
    Yaz,
    /// Combined pill.
    Aviane,
    /// Progestin-only pill.
    Micronor,
    /// Vaginal ring.
    NuvaRing,
    /// Transdermal patch.
    Xulane,
}

impl ProductId {
    /// All product ids, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Paragard,
        Self::Dmpa,
        Self::Yaz,
        Self::Aviane,
        Self::Micronor,
        Self::NuvaRing,
        Self::Xulane,
    ];

    /// Stable identifier used in serialized data and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragard => "paragard",
            Self::Dmpa => "dmpa",
            Self::Yaz => "yaz",
            Self::Aviane => "aviane",
            Self::Micronor => "micronor",
            Self::NuvaRing => "nuva-ring",
            Self::Xulane => "xulane",
        }
    }

    /// The catalog entry for this id.
    #[must_use]
    pub const fn product(self) -> &'static Product {
        match self {
            Self::Paragard => &PARAGARD,
            Self::Dmpa => &DMPA,
            Self::Yaz => &YAZ,
            Self::Aviane => &AVIANE,
            Self::Micronor => &MICRONOR,
            Self::NuvaRing => &NUVA_RING,
            Self::Xulane => &XULANE,
        }
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paragard" => Ok(Self::Paragard),
            "dmpa" => Ok(Self::Dmpa),
            "yaz" => Ok(Self::Yaz),
            "aviane" => Ok(Self::Aviane),
            "micronor" => Ok(Self::Micronor),
            "nuva-ring" => Ok(Self::NuvaRing),
            "xulane" => Ok(Self::Xulane),
            _ => Err(format!("invalid product id: {s}")),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Which product this is.
    pub id: ProductId,
    /// Display label, icon glyph included.
    pub label: &'static str,
    /// One-sentence description shown on the product card.
    pub description: &'static str,
}

const PARAGARD: Product = Product {
    id: ProductId::Paragard,
    label: "🧡 Paragard (Copper IUD)",
    description: "Non-hormonal IUD that lasts 10-12 years. Copper prevents fertilization.",
};

const DMPA: Product = Product {
    id: ProductId::Dmpa,
    label: "💉 DMPA (Depo-Provera Injection)",
    description: "Progestin-only injection given every 3 months.",
};

const YAZ: Product = Product {
    id: ProductId::Yaz,
    label: "💊 Yaz (Combined Pill)",
    description: "Daily pill containing estrogen and drospirenone. May help with acne and mood.",
};

const AVIANE: Product = Product {
    id: ProductId::Aviane,
    label: "💊 Aviane (Combined Pill)",
    description: "Daily pill containing estrogen and progestin. Helps regulate periods.",
};

const MICRONOR: Product = Product {
    id: ProductId::Micronor,
    label: "💊 Micronor (Progestin-Only Pill)",
    description: "Daily pill with only progestin.",
};

const NUVA_RING: Product = Product {
    id: ProductId::NuvaRing,
    label: "💍 NuvaRing",
    description: "Flexible ring inserted monthly. Contains estrogen and progestin.",
};

const XULANE: Product = Product {
    id: ProductId::Xulane,
    label: "🩹 Xulane Patch",
    description: "Weekly patch containing estrogen and progestin. Not recommended for BMI > 30.",
};

/// Every product we present, in reference-list display order.
pub const CATALOG: [Product; 7] = [
    PARAGARD, DMPA, YAZ, AVIANE, MICRONOR, NUVA_RING, XULANE,
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_product_ids() {
        let ids: Vec<ProductId> = CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids, ProductId::ALL);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_product_lookup() {
        for id in ProductId::ALL {
            assert_eq!(id.product().id, id);
        }
    }

    #[test]
    fn test_product_copy() {
        let yaz = ProductId::Yaz.product();
        assert_eq!(yaz.label, "💊 Yaz (Combined Pill)");
        assert!(yaz.description.contains("drospirenone"));

        let xulane = ProductId::Xulane.product();
        assert_eq!(xulane.label, "🩹 Xulane Patch");
        assert!(xulane.description.contains("BMI > 30"));
    }

    #[test]
    fn test_product_id_string_roundtrip() {
        for id in ProductId::ALL {
            let parsed: ProductId = id.as_str().parse().unwrap();
            assert_eq!(parsed, id);
        }
        assert!("ella".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_product_id_serde_matches_as_str() {
        for id in ProductId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }
}
