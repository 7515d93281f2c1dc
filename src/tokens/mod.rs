use serde::Deserialize;

use crate::error::ThemeError;

#[derive(Clone, Debug, PartialEq)]
pub struct SeedToken {
    pub color_primary: String,
    pub color_success: String,
    pub color_warning: String,
    pub color_error: String,
    pub color_info: String,
    pub color_text_base: Option<String>,
    pub color_bg_base: Option<String>,
    pub font_family: String,
    pub font_family_code: String,
    pub font_size: f64,
    pub line_width: f64,
    pub line_type: String,
    pub border_radius: f64,
    pub size_unit: f64,
    pub size_step: f64,
    pub size_popup_arrow: f64,
    pub control_height: f64,
    pub z_index_base: i32,
    pub z_index_popup_base: i32,
    pub opacity_image: f64,
    pub motion_unit: f64,
    pub motion_base: f64,
    pub motion_ease_in_out: String,
    pub motion_ease_out: String,
    pub motion_ease_out_circ: String,
    pub motion_ease_out_back: String,
}

impl Default for SeedToken {
    fn default() -> Self {
        Self {
            color_primary: "#1677ff".to_string(),
            color_success: "#52c41a".to_string(),
            color_warning: "#faad14".to_string(),
            color_error: "#ff4d4f".to_string(),
            color_info: "#1677ff".to_string(),
            color_text_base: None,
            color_bg_base: None,
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
                          'Helvetica Neue', Arial, 'Noto Sans', sans-serif"
                .to_string(),
            font_family_code: "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, \
                               Courier, monospace"
                .to_string(),
            font_size: 14.0,
            line_width: 1.0,
            line_type: "solid".to_string(),
            border_radius: 6.0,
            size_unit: 4.0,
            size_step: 4.0,
            size_popup_arrow: 16.0,
            control_height: 32.0,
            z_index_base: 0,
            z_index_popup_base: 1000,
            opacity_image: 1.0,
            motion_unit: 0.1,
            motion_base: 0.0,
            motion_ease_in_out: "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            motion_ease_out: "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
            motion_ease_out_circ: "cubic-bezier(0.08, 0.82, 0.17, 1)".to_string(),
            motion_ease_out_back: "cubic-bezier(0.12, 0.4, 0.29, 1.46)".to_string(),
        }
    }
}

impl SeedToken {
    pub fn merged(&self, overrides: &SeedOverrides) -> Self {
        let mut next = self.clone();
        if let Some(value) = &overrides.color_primary {
            next.color_primary = value.clone();
        }
        if let Some(value) = &overrides.color_success {
            next.color_success = value.clone();
        }
        if let Some(value) = &overrides.color_warning {
            next.color_warning = value.clone();
        }
        if let Some(value) = &overrides.color_error {
            next.color_error = value.clone();
        }
        if let Some(value) = &overrides.color_info {
            next.color_info = value.clone();
        }
        if let Some(value) = &overrides.color_text_base {
            next.color_text_base = Some(value.clone());
        }
        if let Some(value) = &overrides.color_bg_base {
            next.color_bg_base = Some(value.clone());
        }
        if let Some(value) = &overrides.font_family {
            next.font_family = value.clone();
        }
        if let Some(value) = &overrides.font_family_code {
            next.font_family_code = value.clone();
        }
        if let Some(value) = overrides.font_size {
            next.font_size = value;
        }
        if let Some(value) = overrides.line_width {
            next.line_width = value;
        }
        if let Some(value) = &overrides.line_type {
            next.line_type = value.clone();
        }
        if let Some(value) = overrides.border_radius {
            next.border_radius = value;
        }
        if let Some(value) = overrides.size_unit {
            next.size_unit = value;
        }
        if let Some(value) = overrides.size_step {
            next.size_step = value;
        }
        if let Some(value) = overrides.size_popup_arrow {
            next.size_popup_arrow = value;
        }
        if let Some(value) = overrides.control_height {
            next.control_height = value;
        }
        if let Some(value) = overrides.z_index_base {
            next.z_index_base = value;
        }
        if let Some(value) = overrides.z_index_popup_base {
            next.z_index_popup_base = value;
        }
        if let Some(value) = overrides.opacity_image {
            next.opacity_image = value;
        }
        if let Some(value) = overrides.motion_unit {
            next.motion_unit = value;
        }
        if let Some(value) = overrides.motion_base {
            next.motion_base = value;
        }
        if let Some(value) = &overrides.motion_ease_in_out {
            next.motion_ease_in_out = value.clone();
        }
        if let Some(value) = &overrides.motion_ease_out {
            next.motion_ease_out = value.clone();
        }
        if let Some(value) = &overrides.motion_ease_out_circ {
            next.motion_ease_out_circ = value.clone();
        }
        if let Some(value) = &overrides.motion_ease_out_back {
            next.motion_ease_out_back = value.clone();
        }
        next
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        let positive = [
            ("fontSize", self.font_size),
            ("sizeUnit", self.size_unit),
            ("sizeStep", self.size_step),
            ("controlHeight", self.control_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThemeError::invalid_dimension(field, value));
            }
        }
        let non_negative = [
            ("lineWidth", self.line_width),
            ("borderRadius", self.border_radius),
            ("sizePopupArrow", self.size_popup_arrow),
            ("motionUnit", self.motion_unit),
            ("motionBase", self.motion_base),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ThemeError::invalid_dimension(field, value));
            }
        }
        if !(0.0..=1.0).contains(&self.opacity_image) {
            return Err(ThemeError::invalid_dimension(
                "opacityImage",
                self.opacity_image,
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedOverrides {
    pub color_primary: Option<String>,
    pub color_success: Option<String>,
    pub color_warning: Option<String>,
    pub color_error: Option<String>,
    pub color_info: Option<String>,
    pub color_text_base: Option<String>,
    pub color_bg_base: Option<String>,
    pub font_family: Option<String>,
    pub font_family_code: Option<String>,
    pub font_size: Option<f64>,
    pub line_width: Option<f64>,
    pub line_type: Option<String>,
    pub border_radius: Option<f64>,
    pub size_unit: Option<f64>,
    pub size_step: Option<f64>,
    pub size_popup_arrow: Option<f64>,
    pub control_height: Option<f64>,
    pub z_index_base: Option<i32>,
    pub z_index_popup_base: Option<i32>,
    pub opacity_image: Option<f64>,
    pub motion_unit: Option<f64>,
    pub motion_base: Option<f64>,
    pub motion_ease_in_out: Option<String>,
    pub motion_ease_out: Option<String>,
    pub motion_ease_out_circ: Option<String>,
    pub motion_ease_out_back: Option<String>,
}

macro_rules! impl_seed_override_setters {
    ($($field:ident : $value:ty),* $(,)?) => {
        impl SeedOverrides {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $field(mut self, value: impl Into<$value>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

impl_seed_override_setters!(
    color_primary: String,
    color_success: String,
    color_warning: String,
    color_error: String,
    color_info: String,
    color_text_base: String,
    color_bg_base: String,
    font_family: String,
    font_family_code: String,
    font_size: f64,
    line_width: f64,
    line_type: String,
    border_radius: f64,
    size_unit: f64,
    size_step: f64,
    size_popup_arrow: f64,
    control_height: f64,
    z_index_base: i32,
    z_index_popup_base: i32,
    opacity_image: f64,
    motion_unit: f64,
    motion_base: f64,
    motion_ease_in_out: String,
    motion_ease_out: String,
    motion_ease_out_circ: String,
    motion_ease_out_back: String,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_passes_validation() {
        assert_eq!(SeedToken::default().validate(), Ok(()));
    }

    #[test]
    fn merged_overrides_only_provided_fields() {
        let seed = SeedToken::default().merged(
            &SeedOverrides::new()
                .color_primary("#00b96b")
                .control_height(40.0),
        );
        assert_eq!(seed.color_primary, "#00b96b");
        assert_eq!(seed.control_height, 40.0);
        assert_eq!(seed.font_size, 14.0);
        assert_eq!(seed.color_success, "#52c41a");
    }

    #[test]
    fn non_positive_dimensions_fail_validation() {
        let seed = SeedToken::default().merged(&SeedOverrides::new().font_size(-2.0));
        assert_eq!(
            seed.validate(),
            Err(ThemeError::invalid_dimension("fontSize", -2.0))
        );

        let seed = SeedToken::default().merged(&SeedOverrides::new().control_height(0.0));
        assert!(seed.validate().is_err());
    }

    #[test]
    fn overrides_deserialize_from_camel_case_and_ignore_unknown_keys() {
        let overrides: SeedOverrides = serde_json::from_str(
            r##"{"colorPrimary": "#00b96b", "borderRadius": 2, "somethingElse": true}"##,
        )
        .unwrap();
        assert_eq!(overrides.color_primary.as_deref(), Some("#00b96b"));
        assert_eq!(overrides.border_radius, Some(2.0));
    }
}
