//! Letter colors per pose label

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color string, e.g. `rgb(255, 140, 0)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Gray used for labels without an entry
pub const DEFAULT_COLOR: Rgb = Rgb::new(200, 200, 200);

/// Static label -> color lookup with a fallback
#[derive(Clone, Debug)]
pub struct ColorTable {
    entries: Vec<(String, Rgb)>,
    default: Rgb,
}

impl ColorTable {
    /// Empty table; every label resolves to `default`
    pub fn new(default: Rgb) -> Self {
        Self {
            entries: Vec::new(),
            default,
        }
    }

    pub fn with(mut self, label: impl Into<String>, color: Rgb) -> Self {
        self.entries.push((label.into(), color));
        self
    }

    /// Registered color, if any
    pub fn get(&self, label: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, color)| *color)
    }

    /// Registered color or the default
    pub fn resolve(&self, label: &str) -> Rgb {
        self.get(label).unwrap_or(self.default)
    }
}

impl Default for ColorTable {
    /// The YMCA palette
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
            .with("Y", Rgb::new(0, 191, 255)) // Electric blue
            .with("M", Rgb::new(255, 0, 255)) // Pink
            .with("C", Rgb::new(50, 205, 50)) // Lime green
            .with("A", Rgb::new(255, 140, 0)) // Bright orange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_colors() {
        let table = ColorTable::default();
        assert_eq!(table.resolve("A"), Rgb::new(255, 140, 0));
        assert_eq!(table.resolve("Y"), Rgb::new(0, 191, 255));
    }

    #[test]
    fn test_unknown_label_falls_back_to_gray() {
        let table = ColorTable::default();
        assert_eq!(table.get("Z"), None);
        assert_eq!(table.resolve("Z"), Rgb::new(200, 200, 200));
    }

    #[test]
    fn test_css() {
        assert_eq!(Rgb::new(255, 140, 0).to_css(), "rgb(255, 140, 0)");
    }
}
