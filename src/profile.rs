//! # Document Kind Profiles
//!
//! The two business lines share one encoder; everything that differs
//! between them — header text, qualifier wording, whether discounts are
//! accepted — lives in a [`DocumentProfile`] selected by
//! [`DocumentKind`].
//!
//! ## Built-in Profiles
//!
//! | Kind | Subtitle | Discounts | Paper |
//! |------|----------|-----------|-------|
//! | Coffee | COFFEE ORDER | yes | 58mm (32 columns) |
//! | Carwash | CARWASH SERVICE | yes | 58mm (32 columns) |
//!
//! Discount acceptance is a capability flag, not a hard-coded rule, so
//! a deployment that turns discounts off for one business line only has
//! to flip the flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// # Paper Profile
///
/// Character-cell geometry of the target paper roll.
///
/// ## Physical Properties
///
/// - **columns**: characters per line in the normal 12-dot font
/// - **width_dots**: printable width in dots
/// - **dpi**: resolution, used for mm ↔ dot conversion
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// For 58mm paper:
///   printable width = 48mm = 384 dots
///   columns = 384 / 12 = 32
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperProfile {
    /// Descriptive name
    pub name: &'static str,

    /// Characters per line at normal size
    pub columns: usize,

    /// Printable width in dots
    pub width_dots: u16,

    /// Resolution in dots per inch
    pub dpi: u16,
}

impl PaperProfile {
    /// 58mm roll — the common Bluetooth handheld/counter printer.
    pub const MM58: Self = Self {
        name: "58mm",
        columns: 32,
        width_dots: 384,
        dpi: 203,
    };

    /// 80mm roll — full-size counter printer.
    pub const MM80: Self = Self {
        name: "80mm",
        columns: 48,
        width_dots: 576,
        dpi: 203,
    };

    /// Dots per millimeter at this resolution.
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }
}

impl Default for PaperProfile {
    fn default() -> Self {
        Self::MM58
    }
}

/// Which business line a receipt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Coffee,
    Carwash,
}

impl DocumentKind {
    /// The built-in profile for this kind.
    pub fn profile(&self) -> &'static DocumentProfile {
        match self {
            Self::Coffee => &DocumentProfile::COFFEE,
            Self::Carwash => &DocumentProfile::CARWASH,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coffee => write!(f, "coffee"),
            Self::Carwash => write!(f, "carwash"),
        }
    }
}

/// Everything the encoder needs to know about one document kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentProfile {
    /// Business name, printed double-size at the top.
    pub business: &'static str,

    /// Document-kind subtitle under the business name.
    pub subtitle: &'static str,

    /// Whether this kind accepts the flat-rate discounts.
    pub discounts: bool,

    /// Paper geometry receipts of this kind are laid out for.
    pub paper: PaperProfile,
}

impl DocumentProfile {
    /// Coffee-bar order slip.
    pub const COFFEE: Self = Self {
        business: "BREW & SHINE",
        subtitle: "COFFEE ORDER",
        discounts: true,
        paper: PaperProfile::MM58,
    };

    /// Carwash service slip.
    pub const CARWASH: Self = Self {
        business: "BREW & SHINE",
        subtitle: "CARWASH SERVICE",
        discounts: true,
        paper: PaperProfile::MM58,
    };

    /// Characters per line on this profile's paper.
    #[inline]
    pub fn columns(&self) -> usize {
        self.paper.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_58mm_geometry() {
        let paper = PaperProfile::MM58;
        assert_eq!(paper.columns, 32);
        assert_eq!(paper.width_dots, 384);
        // 384 dots / 12-dot cells = 32 columns
        assert_eq!(paper.width_dots as usize / 12, paper.columns);
    }

    #[test]
    fn test_80mm_geometry() {
        let paper = PaperProfile::MM80;
        assert_eq!(paper.columns, 48);
        assert_eq!(paper.width_dots as usize / 12, paper.columns);
    }

    #[test]
    fn test_dots_per_mm() {
        // 203 DPI ≈ 8 dots/mm
        assert!((PaperProfile::MM58.dots_per_mm() - 8.0).abs() < 0.1);
    }

    #[test]
    fn test_kind_selects_profile() {
        assert_eq!(DocumentKind::Coffee.profile().subtitle, "COFFEE ORDER");
        assert_eq!(DocumentKind::Carwash.profile().subtitle, "CARWASH SERVICE");
    }

    #[test]
    fn test_both_kinds_share_business_name() {
        assert_eq!(
            DocumentProfile::COFFEE.business,
            DocumentProfile::CARWASH.business
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DocumentKind::Coffee.to_string(), "coffee");
        assert_eq!(DocumentKind::Carwash.to_string(), "carwash");
    }

    #[test]
    fn test_default_paper_is_58mm() {
        assert_eq!(PaperProfile::default(), PaperProfile::MM58);
    }
}
