use egui::Color32;

// `#rrggbb`, the `#` is optional
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Indigo,
    Amber,
    Red,
    Purple,
    Emerald,
}

impl Accent {
    fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#3b82f6",
            Accent::Indigo => "#6366f1",
            Accent::Amber => "#f59e0b",
            Accent::Red => "#ef4444",
            Accent::Purple => "#a855f7",
            Accent::Emerald => "#10b981",
        }
    }

    pub fn color(self) -> Color32 {
        parse_hex(self.hex()).unwrap_or(Color32::GRAY)
    }
}
