//! Storefront message catalog.
//!
//! Missing keys fall back to English and then to the key itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Locale code sent to the catalog API
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        // "en-US", "ar_SA" -> primary subtag
        let primary = normalized.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let text = match (language, key) {
        (Language::En, "storefront.title") => "Menu",
        (Language::En, "categories.loading") => "Loading categories...",
        (Language::En, "categories.failed") => "Could not load categories",
        (Language::En, "categories.retry") => "Retry",
        (Language::En, "subcategories.all") => "All",
        (Language::En, "search.placeholder") => "Search products...",
        (Language::En, "search.clear") => "Clear",
        (Language::En, "products.no_match") => "No products match your search",
        (Language::En, "products.empty_category") => "There are no products in this category",
        (Language::En, "products.select_category") => "Select a category to see its products",
        (Language::En, "location.warning") => {
            "Choose a delivery address or a branch to see accurate availability and prices"
        }
        (Language::En, "product.favourite") => "Favourite",

        (Language::Ar, "storefront.title") => "القائمة",
        (Language::Ar, "categories.loading") => "جاري تحميل الأقسام...",
        (Language::Ar, "categories.failed") => "تعذر تحميل الأقسام",
        (Language::Ar, "categories.retry") => "إعادة المحاولة",
        (Language::Ar, "subcategories.all") => "الكل",
        (Language::Ar, "search.placeholder") => "ابحث عن منتج...",
        (Language::Ar, "search.clear") => "مسح",
        (Language::Ar, "products.no_match") => "لا توجد منتجات مطابقة لبحثك",
        (Language::Ar, "products.empty_category") => "لا توجد منتجات في هذا القسم",
        (Language::Ar, "products.select_category") => "اختر قسماً لعرض منتجاته",
        (Language::Ar, "location.warning") => "اختر عنوان التوصيل أو الفرع لعرض التوفر والأسعار بدقة",
        (Language::Ar, "product.favourite") => "المفضلة",

        _ => return None,
    };
    Some(text)
}

/// Translate `key` for `language`
pub fn t(language: Language, key: &'static str) -> &'static str {
    lookup(language, key)
        .or_else(|| lookup(Language::En, key))
        .unwrap_or(key)
}
