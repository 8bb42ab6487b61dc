//! Theme configuration for `VidJalsa`.
//!
//! Night-sky dark mode: black surfaces, white meteors and progress, and a
//! warm gradient on the page headings.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#000000";
        /// Card surface behind thumbnails.
        pub const CARD: &str = "#111114";
        /// Unfilled part of the progress bar.
        pub const PROGRESS_BASE: &str = "#000000";
        /// Fade overlay at the carousel edges.
        pub const FADE: &str = "rgba(0, 0, 0, 1)";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#ffffff";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#a1a1aa";
        /// Text drawn on top of the white progress fill.
        pub const ON_PROGRESS: &str = "#09090b";
    }

    /// Accent colors.
    pub mod accent {
        /// Progress fill and meteor color.
        pub const PROGRESS: &str = "#ffffff";
        /// Selection checkbox and focus ring.
        pub const SELECTION: &str = "#f472b6";
        /// Error/empty state icon.
        pub const ERROR: &str = "#f87171";
    }

    /// Gradient definitions.
    pub mod gradient {
        /// Heading text gradient.
        pub const HEADING: &str = "linear-gradient(90deg, #fbbf24 0%, #f472b6 50%, #a78bfa 100%)";
        /// Create button background.
        pub const BUTTON: &str = "linear-gradient(135deg, #a78bfa 0%, #f472b6 100%)";
    }

    /// Shadows.
    pub mod shadow {
        /// Glow around the centered carousel item.
        pub const CENTERED: &str = "0 0 32px rgba(244, 114, 182, 0.35)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font family.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
    /// Display font for page titles.
    pub const FONT_FAMILY_TITLE: &str = "'Yeseva One', Georgia, serif";

    /// Font sizes.
    pub mod sizes {
        /// Small text.
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Page subtitle.
        pub const SUBTITLE: &str = "3rem";
        /// Page title.
        pub const TITLE: &str = "4.5rem";
    }
}

/// Layout sizes.
pub mod layout {
    /// Width of the loading progress bar.
    pub const PROGRESS_WIDTH: &str = "600px";
    /// Height of the loading progress bar.
    pub const PROGRESS_HEIGHT: &str = "20px";
    /// Corner radius of the loading progress bar.
    pub const PROGRESS_RADIUS: &str = "12px";
}

/// Animation/transition configuration.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Carousel emphasis and panel reveal.
    pub const SMOOTH: &str = "0.3s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Progress fill.
    pub const PROGRESS: &str = "1s linear";
}

/// Generate CSS custom properties for the theme.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-primary: {bg_primary};
  --bg-card: {bg_card};
  --bg-progress-base: {bg_progress_base};
  --bg-fade: {bg_fade};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-on-progress: {text_on_progress};

  /* Accent colors */
  --accent-progress: {accent_progress};
  --accent-selection: {accent_selection};
  --accent-error: {accent_error};

  /* Gradients */
  --gradient-heading: {gradient_heading};
  --gradient-button: {gradient_button};

  /* Shadows */
  --shadow-centered: {shadow_centered};

  /* Typography */
  --font-family: {font_family};
  --font-family-title: {font_family_title};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-subtitle: {font_subtitle};
  --font-size-title: {font_title};

  /* Layout */
  --progress-width: {progress_width};
  --progress-height: {progress_height};
  --progress-radius: {progress_radius};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-smooth: {transition_smooth};
  --transition-progress: {transition_progress};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_card = colors::background::CARD,
        bg_progress_base = colors::background::PROGRESS_BASE,
        bg_fade = colors::background::FADE,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_on_progress = colors::text::ON_PROGRESS,
        accent_progress = colors::accent::PROGRESS,
        accent_selection = colors::accent::SELECTION,
        accent_error = colors::accent::ERROR,
        gradient_heading = colors::gradient::HEADING,
        gradient_button = colors::gradient::BUTTON,
        shadow_centered = colors::shadow::CENTERED,
        font_family = typography::FONT_FAMILY,
        font_family_title = typography::FONT_FAMILY_TITLE,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_subtitle = typography::sizes::SUBTITLE,
        font_title = typography::sizes::TITLE,
        progress_width = layout::PROGRESS_WIDTH,
        progress_height = layout::PROGRESS_HEIGHT,
        progress_radius = layout::PROGRESS_RADIUS,
        transition_fast = animation::FAST,
        transition_smooth = animation::SMOOTH,
        transition_progress = animation::PROGRESS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("--bg-primary: #000000"));
        assert!(css.contains("--gradient-heading"));
        assert!(css.contains("--progress-width: 600px"));
    }

    #[test]
    fn test_color_values() {
        assert!(colors::background::PRIMARY.starts_with('#'));
        assert!(colors::accent::PROGRESS.starts_with('#'));
    }
}
