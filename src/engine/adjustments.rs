/// Maps the integer position of a range control to a multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub raw_min: u32,
    pub raw_max: u32,
    pub max_factor: f32,
    pub default_raw: u32,
}

impl ParameterSpec {
    pub const fn new(raw_max: u32, max_factor: f32, default_raw: u32) -> Self {
        Self {
            raw_min: 0,
            raw_max,
            max_factor,
            default_raw,
        }
    }

    pub fn clamp(&self, raw: u32) -> u32 {
        raw.clamp(self.raw_min, self.raw_max)
    }

    pub fn factor(&self, raw: u32) -> f32 {
        // Multiply before dividing so the default positions land on exactly 1.0.
        (self.clamp(raw) as f32 * self.max_factor) / self.raw_max as f32
    }
}

pub const SATURATION: ParameterSpec = ParameterSpec::new(100, 10.0, 10);
pub const EXPOSURE: ParameterSpec = ParameterSpec::new(100, 2.0, 50);
pub const CONTRAST: ParameterSpec = ParameterSpec::new(100, 10.0, 10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Contrast,
    Exposure,
    Saturation,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [Self::Contrast, Self::Exposure, Self::Saturation];

    pub fn spec(self) -> ParameterSpec {
        match self {
            Self::Contrast => CONTRAST,
            Self::Exposure => EXPOSURE,
            Self::Saturation => SATURATION,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contrast => "Contrast",
            Self::Exposure => "Exposure",
            Self::Saturation => "Saturation",
        }
    }
}

/// Factors handed to the enhancement pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhanceFactors {
    pub saturation: f32,
    pub contrast: f32,
    pub exposure: f32,
}

/// Raw slider positions for the three adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustments {
    contrast: u32,
    exposure: u32,
    saturation: u32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            contrast: CONTRAST.default_raw,
            exposure: EXPOSURE.default_raw,
            saturation: SATURATION.default_raw,
        }
    }
}

impl Adjustments {
    pub fn contrast(&self) -> u32 {
        self.contrast
    }

    pub fn exposure(&self) -> u32 {
        self.exposure
    }

    pub fn saturation(&self) -> u32 {
        self.saturation
    }

    pub fn set_contrast(&mut self, raw: u32) {
        self.contrast = CONTRAST.clamp(raw);
    }

    pub fn set_exposure(&mut self, raw: u32) {
        self.exposure = EXPOSURE.clamp(raw);
    }

    pub fn set_saturation(&mut self, raw: u32) {
        self.saturation = SATURATION.clamp(raw);
    }

    pub fn get(&self, parameter: Parameter) -> u32 {
        match parameter {
            Parameter::Contrast => self.contrast(),
            Parameter::Exposure => self.exposure(),
            Parameter::Saturation => self.saturation(),
        }
    }

    /// Returns true when the stored raw value actually changed.
    pub fn set(&mut self, parameter: Parameter, raw: u32) -> bool {
        let before = self.get(parameter);
        match parameter {
            Parameter::Contrast => self.set_contrast(raw),
            Parameter::Exposure => self.set_exposure(raw),
            Parameter::Saturation => self.set_saturation(raw),
        }
        before != self.get(parameter)
    }

    pub fn contrast_factor(&self) -> f32 {
        CONTRAST.factor(self.contrast)
    }

    pub fn exposure_factor(&self) -> f32 {
        EXPOSURE.factor(self.exposure)
    }

    pub fn saturation_factor(&self) -> f32 {
        SATURATION.factor(self.saturation)
    }

    pub fn factors(&self) -> EnhanceFactors {
        EnhanceFactors {
            saturation: self.saturation_factor(),
            contrast: self.contrast_factor(),
            exposure: self.exposure_factor(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_positions_are_neutral() {
        let adjustments = Adjustments::default();
        assert_eq!(adjustments.contrast(), 10);
        assert_eq!(adjustments.exposure(), 50);
        assert_eq!(adjustments.saturation(), 10);
        assert_eq!(
            adjustments.factors(),
            EnhanceFactors {
                saturation: 1.0,
                contrast: 1.0,
                exposure: 1.0,
            }
        );
    }

    #[test]
    fn factor_scales_match_control_range() {
        assert_eq!(SATURATION.factor(10), 1.0);
        assert_eq!(CONTRAST.factor(10), 1.0);
        assert_eq!(EXPOSURE.factor(50), 1.0);
        assert_eq!(SATURATION.factor(0), 0.0);
        assert_eq!(SATURATION.factor(100), 10.0);
        assert_eq!(CONTRAST.factor(100), 10.0);
        assert_eq!(EXPOSURE.factor(100), 2.0);
    }

    #[test]
    fn factors_are_monotonic_over_the_range() {
        for parameter in Parameter::ALL {
            let spec = parameter.spec();
            let mut previous = spec.factor(spec.raw_min);
            for raw in spec.raw_min..=spec.raw_max {
                let factor = spec.factor(raw);
                assert!(factor >= previous, "{} not monotonic at {raw}", parameter.label());
                previous = factor;
            }
        }
    }

    #[test]
    fn setters_clamp_to_bounds() {
        let mut adjustments = Adjustments::default();
        adjustments.set_contrast(250);
        adjustments.set_exposure(101);
        assert_eq!(adjustments.contrast(), 100);
        assert_eq!(adjustments.exposure(), 100);
        assert_eq!(adjustments.exposure_factor(), 2.0);
    }

    #[test]
    fn set_reports_whether_value_changed() {
        let mut adjustments = Adjustments::default();
        assert!(!adjustments.set(Parameter::Saturation, 10));
        assert!(adjustments.set(Parameter::Saturation, 0));
        assert_eq!(adjustments.saturation_factor(), 0.0);
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut adjustments = Adjustments::default();
        adjustments.set_contrast(77);
        adjustments.set_exposure(3);
        adjustments.set_saturation(100);
        adjustments.reset();
        assert_eq!(adjustments, Adjustments::default());
        assert_eq!(
            (adjustments.contrast(), adjustments.exposure(), adjustments.saturation()),
            (10, 50, 10)
        );
    }
}
