//! App theme: colors and spacing.

/// Material Design 3-style palette. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#1565C0";
    pub const LIGHT_SURFACE: &'static str = "#FAFCFF";
    pub const LIGHT_ON_SURFACE: &'static str = "#1A1C1E";
    pub const LIGHT_SUCCESS: &'static str = "#2E7D32";
    pub const LIGHT_ERROR: &'static str = "#B3261E";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#9ECAFF";
    pub const DARK_SURFACE: &'static str = "#1A1C1E";
    pub const DARK_ON_SURFACE: &'static str = "#E2E2E6";
    pub const DARK_SUCCESS: &'static str = "#81C995";
    pub const DARK_ERROR: &'static str = "#F2B8B5";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    /// Text/icon color on top of `primary`.
    pub fn on_primary(is_dark: bool) -> &'static str {
        if is_dark {
            "#00325B"
        } else {
            "#FFFFFF"
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn success(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SUCCESS
        } else {
            Self::LIGHT_SUCCESS
        }
    }
    pub fn error(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ERROR
        } else {
            Self::LIGHT_ERROR
        }
    }
}

/// 8dp grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
}
