use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Busy/picking status
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Focused button
    pub fn highlight() -> Color {
        Color::LightCyan
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Section titles
    pub fn accent() -> Color {
        Color::LightBlue
    }

    /// Text on dark swatches
    pub fn on_dark() -> Color {
        Color::White
    }

    /// Text on light swatches
    pub fn on_light() -> Color {
        Color::Black
    }
}
