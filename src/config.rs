use derivative::Derivative;
use std::time::Duration;

#[derive(Derivative, Clone)]
#[derivative(Debug, Default)]
pub struct AppConfig {
    #[derivative(Default(value = "\"SkyVault\".to_string()"))]
    pub title: String,

    #[derivative(Default(value = "[1100.0, 760.0]"))]
    pub window_size: [f32; 2],

    #[derivative(Default(value = "[720.0, 560.0]"))]
    pub min_window_size: [f32; 2],

    #[derivative(Default(value = "Duration::from_millis(1200)"))]
    pub login_delay: Duration,

    #[derivative(Default(value = "\"Binary\".to_string()"))]
    pub unknown_type_label: String,
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: eframe::egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.title, "SkyVault");
        assert_eq!(config.login_delay, Duration::from_millis(1200));
        assert_eq!(config.unknown_type_label, "Binary");
    }
}
