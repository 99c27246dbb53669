pub const TOP_SHADOW_PROPERTY: &str = "--top-shadow-opacity";
pub const BOTTOM_SHADOW_PROPERTY: &str = "--bottom-shadow-opacity";

/// Opacity flags (0 or 1) for the shadows above and below the company list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollShadow {
    pub top: u8,
    pub bottom: u8,
}

impl ScrollShadow {
    /// `top` once anything is scrolled out above, `bottom` while more than a
    /// pixel of content is still hidden below.
    pub fn from_metrics(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            top: u8::from(scroll_top > 0.0),
            bottom: u8::from(scroll_height - scroll_top > client_height + 1.0),
        }
    }

    /// CSS custom properties to set on the list element.
    pub fn properties(&self) -> [(&'static str, String); 2] {
        [
            (TOP_SHADOW_PROPERTY, self.top.to_string()),
            (BOTTOM_SHADOW_PROPERTY, self.bottom.to_string()),
        ]
    }
}
