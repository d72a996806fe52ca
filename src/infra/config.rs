#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Bounding box the preview is scaled to fit.
    pub preview_max_size: [u32; 2],
    pub toolbar_max_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Color Adjuster".to_string(),
            window_size: [900.0, 900.0],
            preview_max_size: [800, 600],
            toolbar_max_height: 256.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_reference_preview_box() {
        let config = AppConfig::default();
        assert_eq!(config.window_title, "Color Adjuster");
        assert_eq!(config.preview_max_size, [800, 600]);
        assert_eq!(config.toolbar_max_height, 256.0);
    }
}
