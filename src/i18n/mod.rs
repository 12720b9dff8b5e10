//! Bilingual label lookup and text direction.
//!
//! The site ships in English and Arabic with full RTL support. This layer
//! only supplies display strings and layout direction; it never participates
//! in filtering, which always runs against the underlying English content
//! fields.

use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Horizontal layout direction for the current language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Keys for the labels the locator UI needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Title,
    StoresFound,
    SearchPlaceholder,
    EmptyResults,
    StatusOpen,
    StatusComingSoon,
    StatusClosed,
    ActionDirections,
    ActionCall,
    ActionCopyPhone,
    FilterAll,
}

impl Language {
    /// Layout direction: Arabic renders right-to-left.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::Ar => TextDirection::Rtl,
        }
    }

    /// Resolves a label key to its translated string.
    #[must_use]
    pub const fn label(self, key: LabelKey) -> &'static str {
        match (self, key) {
            (Self::En, LabelKey::Title) => "Our Locations",
            (Self::En, LabelKey::StoresFound) => "stores found",
            (Self::En, LabelKey::SearchPlaceholder) => "Search city, district or street...",
            (Self::En, LabelKey::EmptyResults) => "No stores found matching your criteria.",
            (Self::En, LabelKey::StatusOpen) => "Open",
            (Self::En, LabelKey::StatusComingSoon) => "Coming Soon",
            (Self::En, LabelKey::StatusClosed) => "Closed",
            (Self::En, LabelKey::ActionDirections) => "Directions",
            (Self::En, LabelKey::ActionCall) => "Call",
            (Self::En, LabelKey::ActionCopyPhone) => "Copy number",
            (Self::En, LabelKey::FilterAll) => "All",

            (Self::Ar, LabelKey::Title) => "فروعنا",
            (Self::Ar, LabelKey::StoresFound) => "فرعاً",
            (Self::Ar, LabelKey::SearchPlaceholder) => "ابحث عن مدينة أو حي أو شارع...",
            (Self::Ar, LabelKey::EmptyResults) => "لا توجد فروع مطابقة لبحثك.",
            (Self::Ar, LabelKey::StatusOpen) => "مفتوح",
            (Self::Ar, LabelKey::StatusComingSoon) => "قريباً",
            (Self::Ar, LabelKey::StatusClosed) => "مغلق",
            (Self::Ar, LabelKey::ActionDirections) => "الاتجاهات",
            (Self::Ar, LabelKey::ActionCall) => "اتصال",
            (Self::Ar, LabelKey::ActionCopyPhone) => "نسخ الرقم",
            (Self::Ar, LabelKey::FilterAll) => "الكل",
        }
    }
}
