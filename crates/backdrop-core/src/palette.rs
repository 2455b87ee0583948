//! Brand colors read from the page's style tokens.

pub const BRAND_TOKEN: &str = "--brand";
pub const BRAND_SECONDARY_TOKEN: &str = "--brand-secondary";
pub const ACCENT_TOKEN: &str = "--accent";

pub const BRAND_FALLBACK: &str = "#7c5cff";
pub const BRAND_SECONDARY_FALLBACK: &str = "#00d4ff";
pub const ACCENT_FALLBACK: &str = "#ff5c8a";

/// Which of the three tokens a wave or draw call uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Brand,
    BrandSecondary,
    Accent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub brand: String,
    pub brand_secondary: String,
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            brand: BRAND_FALLBACK.to_string(),
            brand_secondary: BRAND_SECONDARY_FALLBACK.to_string(),
            accent: ACCENT_FALLBACK.to_string(),
        }
    }
}

fn token_or(lookup: &impl Fn(&str) -> Option<String>, name: &str, fallback: &str) -> String {
    match lookup(name) {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => {
            log::debug!("[palette] {} missing, using {}", name, fallback);
            fallback.to_string()
        }
    }
}

impl Palette {
    /// Build from a token reader (e.g. computed style custom properties).
    /// Absent or blank tokens fall back to literal colors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            brand: token_or(&lookup, BRAND_TOKEN, BRAND_FALLBACK),
            brand_secondary: token_or(&lookup, BRAND_SECONDARY_TOKEN, BRAND_SECONDARY_FALLBACK),
            accent: token_or(&lookup, ACCENT_TOKEN, ACCENT_FALLBACK),
        }
    }

    pub fn color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Brand => &self.brand,
            Tone::BrandSecondary => &self.brand_secondary,
            Tone::Accent => &self.accent,
        }
    }
}
