//! Design Tokens
//!
//! Centralized color, typography, spacing and shadow values. Components read
//! them either directly (`TOKENS.colors.primary`) or through the CSS custom
//! properties that [`DesignTokens::css_variables`] emits once at the app root.

/// The site-wide token set
pub const TOKENS: DesignTokens = DesignTokens {
    colors: Colors {
        primary: "#5b7fde",
        primary_light: "#dce6ff",
        primary_dark: "#33509e",
        secondary: "#7cc4a4",
        accent: "#f2a65a",
        background: "#f8f9fc",
        surface: "#ffffff",
        text: "#1f2937",
        text_muted: "#6b7280",
        border: "#e5e7eb",
        success: "#16a34a",
        error: "#dc2626",
    },
    font_sizes: FontSizes {
        xs: "0.75rem",
        sm: "0.875rem",
        base: "1rem",
        lg: "1.125rem",
        xl: "1.5rem",
        xxl: "2.25rem",
        display: "3.5rem",
    },
    spacing: Spacing {
        xs: "0.25rem",
        sm: "0.5rem",
        md: "1rem",
        lg: "1.5rem",
        xl: "2.5rem",
        xxl: "4rem",
    },
    shadows: Shadows {
        sm: "0 1px 2px rgba(15, 23, 42, 0.06)",
        md: "0 4px 12px rgba(15, 23, 42, 0.08)",
        lg: "0 12px 32px rgba(15, 23, 42, 0.12)",
        glow: "0 0 0 4px rgba(91, 127, 222, 0.25)",
    },
    radii: Radii {
        sm: "0.375rem",
        md: "0.75rem",
        lg: "1.25rem",
        full: "9999px",
    },
};

#[derive(Debug, Clone, Copy)]
pub struct DesignTokens {
    pub colors: Colors,
    pub font_sizes: FontSizes,
    pub spacing: Spacing,
    pub shadows: Shadows,
    pub radii: Radii,
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FontSizes {
    pub xs: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
    pub display: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Shadows {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub glow: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Radii {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub full: &'static str,
}

impl DesignTokens {
    /// Every token as `(css variable name, value)`
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let c = &self.colors;
        let f = &self.font_sizes;
        let s = &self.spacing;
        let sh = &self.shadows;
        let r = &self.radii;

        vec![
            ("--mb-color-primary", c.primary),
            ("--mb-color-primary-light", c.primary_light),
            ("--mb-color-primary-dark", c.primary_dark),
            ("--mb-color-secondary", c.secondary),
            ("--mb-color-accent", c.accent),
            ("--mb-color-background", c.background),
            ("--mb-color-surface", c.surface),
            ("--mb-color-text", c.text),
            ("--mb-color-text-muted", c.text_muted),
            ("--mb-color-border", c.border),
            ("--mb-color-success", c.success),
            ("--mb-color-error", c.error),
            ("--mb-font-xs", f.xs),
            ("--mb-font-sm", f.sm),
            ("--mb-font-base", f.base),
            ("--mb-font-lg", f.lg),
            ("--mb-font-xl", f.xl),
            ("--mb-font-xxl", f.xxl),
            ("--mb-font-display", f.display),
            ("--mb-space-xs", s.xs),
            ("--mb-space-sm", s.sm),
            ("--mb-space-md", s.md),
            ("--mb-space-lg", s.lg),
            ("--mb-space-xl", s.xl),
            ("--mb-space-xxl", s.xxl),
            ("--mb-shadow-sm", sh.sm),
            ("--mb-shadow-md", sh.md),
            ("--mb-shadow-lg", sh.lg),
            ("--mb-shadow-glow", sh.glow),
            ("--mb-radius-sm", r.sm),
            ("--mb-radius-md", r.md),
            ("--mb-radius-lg", r.lg),
            ("--mb-radius-full", r.full),
        ]
    }

    /// `:root { ... }` block declaring every token as a custom property
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.entries() {
            css.push_str(&format!("  {}: {};\n", name, value));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_variable_names_are_unique() {
        let entries = TOKENS.entries();
        let names: HashSet<_> = entries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_css_variables_block() {
        let css = TOKENS.css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.ends_with('}'));
        assert!(css.contains("--mb-color-primary: #5b7fde;"));
        assert!(css.contains("--mb-radius-full: 9999px;"));
        assert_eq!(css.lines().count(), TOKENS.entries().len() + 2);
    }

    #[test]
    fn test_no_empty_values() {
        assert!(TOKENS.entries().iter().all(|(_, v)| !v.trim().is_empty()));
    }
}
