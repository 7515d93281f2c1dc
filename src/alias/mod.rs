use serde::Deserialize;

use crate::color::Color;
use crate::derive::MapToken;
use crate::error::ThemeError;

#[derive(Clone, Debug, PartialEq)]
pub struct AliasToken {
    pub color_primary: String,
    pub color_primary_bg: String,
    pub color_primary_bg_hover: String,
    pub color_primary_border: String,
    pub color_primary_border_hover: String,
    pub color_primary_hover: String,
    pub color_primary_active: String,
    pub color_primary_text_hover: String,
    pub color_primary_text: String,
    pub color_primary_text_active: String,

    pub color_success: String,
    pub color_success_bg: String,
    pub color_success_bg_hover: String,
    pub color_success_border: String,
    pub color_success_border_hover: String,
    pub color_success_hover: String,
    pub color_success_active: String,
    pub color_success_text_hover: String,
    pub color_success_text: String,
    pub color_success_text_active: String,

    pub color_warning: String,
    pub color_warning_bg: String,
    pub color_warning_bg_hover: String,
    pub color_warning_border: String,
    pub color_warning_border_hover: String,
    pub color_warning_hover: String,
    pub color_warning_active: String,
    pub color_warning_text_hover: String,
    pub color_warning_text: String,
    pub color_warning_text_active: String,

    pub color_error: String,
    pub color_error_bg: String,
    pub color_error_bg_hover: String,
    pub color_error_border: String,
    pub color_error_border_hover: String,
    pub color_error_hover: String,
    pub color_error_active: String,
    pub color_error_text_hover: String,
    pub color_error_text: String,
    pub color_error_text_active: String,

    pub color_info: String,
    pub color_info_bg: String,
    pub color_info_bg_hover: String,
    pub color_info_border: String,
    pub color_info_border_hover: String,
    pub color_info_hover: String,
    pub color_info_active: String,
    pub color_info_text_hover: String,
    pub color_info_text: String,
    pub color_info_text_active: String,

    pub color_text: String,
    pub color_text_secondary: String,
    pub color_text_tertiary: String,
    pub color_text_quaternary: String,
    pub color_text_placeholder: String,
    pub color_text_disabled: String,
    pub color_text_heading: String,
    pub color_text_label: String,
    pub color_text_description: String,
    pub color_text_light_solid: String,

    pub color_fill: String,
    pub color_fill_secondary: String,
    pub color_fill_tertiary: String,
    pub color_fill_quaternary: String,
    pub color_fill_content: String,
    pub color_fill_content_hover: String,
    pub color_fill_alter: String,

    pub color_bg_container: String,
    pub color_bg_container_disabled: String,
    pub color_bg_elevated: String,
    pub color_bg_layout: String,
    pub color_bg_spotlight: String,
    pub color_bg_mask: String,
    pub color_bg_text_hover: String,
    pub color_bg_text_active: String,

    pub color_border: String,
    pub color_border_secondary: String,
    pub color_border_bg: String,
    pub color_split: String,

    pub color_link: String,
    pub color_link_hover: String,
    pub color_link_active: String,
    pub color_icon: String,
    pub color_icon_hover: String,
    pub color_highlight: String,

    pub control_outline: String,
    pub color_warning_outline: String,
    pub color_error_outline: String,
    pub control_outline_width: f64,
    pub control_interactive_size: f64,
    pub control_item_bg_hover: String,
    pub control_item_bg_active: String,
    pub control_item_bg_active_hover: String,
    pub control_item_bg_active_disabled: String,
    pub control_padding_horizontal: f64,
    pub control_padding_horizontal_sm: f64,

    pub font_family: String,
    pub font_family_code: String,
    pub font_size: f64,
    pub font_size_sm: f64,
    pub font_size_lg: f64,
    pub font_size_xl: f64,
    pub font_size_icon: f64,
    pub font_size_heading1: f64,
    pub font_size_heading2: f64,
    pub font_size_heading3: f64,
    pub font_size_heading4: f64,
    pub font_size_heading5: f64,
    pub font_weight_strong: u32,
    pub line_height: f64,
    pub line_height_sm: f64,
    pub line_height_lg: f64,
    pub line_height_heading1: f64,
    pub line_height_heading2: f64,
    pub line_height_heading3: f64,
    pub line_height_heading4: f64,
    pub line_height_heading5: f64,

    pub line_width: f64,
    pub line_width_bold: f64,
    pub line_type: String,
    pub border_radius: f64,
    pub border_radius_xs: f64,
    pub border_radius_sm: f64,
    pub border_radius_lg: f64,
    pub border_radius_outer: f64,

    pub size_xxl: f64,
    pub size_xl: f64,
    pub size_lg: f64,
    pub size_md: f64,
    pub size_ms: f64,
    pub size: f64,
    pub size_sm: f64,
    pub size_xs: f64,
    pub size_xxs: f64,
    pub size_popup_arrow: f64,

    pub control_height_xs: f64,
    pub control_height_sm: f64,
    pub control_height: f64,
    pub control_height_lg: f64,

    pub padding_xxs: f64,
    pub padding_xs: f64,
    pub padding_sm: f64,
    pub padding: f64,
    pub padding_md: f64,
    pub padding_lg: f64,
    pub padding_xl: f64,
    pub margin_xxs: f64,
    pub margin_xs: f64,
    pub margin_sm: f64,
    pub margin: f64,
    pub margin_md: f64,
    pub margin_lg: f64,
    pub margin_xl: f64,
    pub margin_xxl: f64,

    pub box_shadow: String,
    pub box_shadow_secondary: String,

    pub screen_xs: f64,
    pub screen_xs_min: f64,
    pub screen_xs_max: f64,
    pub screen_sm: f64,
    pub screen_sm_min: f64,
    pub screen_sm_max: f64,
    pub screen_md: f64,
    pub screen_md_min: f64,
    pub screen_md_max: f64,
    pub screen_lg: f64,
    pub screen_lg_min: f64,
    pub screen_lg_max: f64,
    pub screen_xl: f64,
    pub screen_xl_min: f64,
    pub screen_xl_max: f64,
    pub screen_xxl: f64,
    pub screen_xxl_min: f64,
    pub screen_xxl_max: f64,

    pub motion_duration_fast: String,
    pub motion_duration_mid: String,
    pub motion_duration_slow: String,
    pub motion_ease_in_out: String,
    pub motion_ease_out: String,
    pub motion_ease_out_circ: String,
    pub motion_ease_out_back: String,

    pub z_index_base: i32,
    pub z_index_popup_base: i32,
    pub opacity_image: f64,
    pub opacity_loading: f64,

    pub link_decoration: String,
    pub link_hover_decoration: String,
    pub link_focus_decoration: String,
}

const SCREEN_XS: f64 = 480.0;
const SCREEN_SM: f64 = 576.0;
const SCREEN_MD: f64 = 768.0;
const SCREEN_LG: f64 = 992.0;
const SCREEN_XL: f64 = 1200.0;
const SCREEN_XXL: f64 = 1600.0;

pub fn format_token(map: &MapToken, overrides: &AliasOverrides) -> AliasToken {
    let css = Color::to_css;

    let mut token = AliasToken {
        color_primary: css(map.primary.base),
        color_primary_bg: css(map.primary.bg),
        color_primary_bg_hover: css(map.primary.bg_hover),
        color_primary_border: css(map.primary.border),
        color_primary_border_hover: css(map.primary.border_hover),
        color_primary_hover: css(map.primary.hover),
        color_primary_active: css(map.primary.active),
        color_primary_text_hover: css(map.primary.text_hover),
        color_primary_text: css(map.primary.text),
        color_primary_text_active: css(map.primary.text_active),

        color_success: css(map.success.base),
        color_success_bg: css(map.success.bg),
        color_success_bg_hover: css(map.success.bg_hover),
        color_success_border: css(map.success.border),
        color_success_border_hover: css(map.success.border_hover),
        color_success_hover: css(map.success.hover),
        color_success_active: css(map.success.active),
        color_success_text_hover: css(map.success.text_hover),
        color_success_text: css(map.success.text),
        color_success_text_active: css(map.success.text_active),

        color_warning: css(map.warning.base),
        color_warning_bg: css(map.warning.bg),
        color_warning_bg_hover: css(map.warning.bg_hover),
        color_warning_border: css(map.warning.border),
        color_warning_border_hover: css(map.warning.border_hover),
        color_warning_hover: css(map.warning.hover),
        color_warning_active: css(map.warning.active),
        color_warning_text_hover: css(map.warning.text_hover),
        color_warning_text: css(map.warning.text),
        color_warning_text_active: css(map.warning.text_active),

        color_error: css(map.error.base),
        color_error_bg: css(map.error.bg),
        color_error_bg_hover: css(map.error.bg_hover),
        color_error_border: css(map.error.border),
        color_error_border_hover: css(map.error.border_hover),
        color_error_hover: css(map.error.hover),
        color_error_active: css(map.error.active),
        color_error_text_hover: css(map.error.text_hover),
        color_error_text: css(map.error.text),
        color_error_text_active: css(map.error.text_active),

        color_info: css(map.info.base),
        color_info_bg: css(map.info.bg),
        color_info_bg_hover: css(map.info.bg_hover),
        color_info_border: css(map.info.border),
        color_info_border_hover: css(map.info.border_hover),
        color_info_hover: css(map.info.hover),
        color_info_active: css(map.info.active),
        color_info_text_hover: css(map.info.text_hover),
        color_info_text: css(map.info.text),
        color_info_text_active: css(map.info.text_active),

        color_text: css(map.color_text),
        color_text_secondary: css(map.color_text_secondary),
        color_text_tertiary: css(map.color_text_tertiary),
        color_text_quaternary: css(map.color_text_quaternary),
        color_text_placeholder: css(map.color_text_quaternary),
        color_text_disabled: css(map.color_text_quaternary),
        color_text_heading: css(map.color_text),
        color_text_label: css(map.color_text_secondary),
        color_text_description: css(map.color_text_tertiary),
        color_text_light_solid: "#ffffff".to_string(),

        color_fill: css(map.color_fill),
        color_fill_secondary: css(map.color_fill_secondary),
        color_fill_tertiary: css(map.color_fill_tertiary),
        color_fill_quaternary: css(map.color_fill_quaternary),
        color_fill_content: css(map.color_fill_secondary),
        color_fill_content_hover: css(map.color_fill),
        color_fill_alter: css(map.color_fill_quaternary),

        color_bg_container: css(map.color_bg_container),
        color_bg_container_disabled: css(map.color_fill_tertiary),
        color_bg_elevated: css(map.color_bg_elevated),
        color_bg_layout: css(map.color_bg_layout),
        color_bg_spotlight: css(map.color_bg_spotlight),
        color_bg_mask: css(map.color_bg_mask),
        color_bg_text_hover: css(map.color_fill_secondary),
        color_bg_text_active: css(map.color_fill),

        color_border: css(map.color_border),
        color_border_secondary: css(map.color_border_secondary),
        color_border_bg: css(map.color_bg_container),
        color_split: css(map.color_fill_secondary),

        color_link: css(map.primary.base),
        color_link_hover: css(map.primary.hover),
        color_link_active: css(map.primary.active),
        color_icon: css(map.color_text_tertiary),
        color_icon_hover: css(map.color_text),
        color_highlight: css(map.error.base),

        control_outline: css(map.primary.bg),
        color_warning_outline: css(map.warning.bg),
        color_error_outline: css(map.error.bg),
        control_outline_width: map.line_width * 2.0,
        control_interactive_size: map.control_height / 2.0,
        control_item_bg_hover: css(map.color_fill_tertiary),
        control_item_bg_active: css(map.primary.bg),
        control_item_bg_active_hover: css(map.primary.bg_hover),
        control_item_bg_active_disabled: css(map.color_fill),
        control_padding_horizontal: 12.0,
        control_padding_horizontal_sm: 8.0,

        font_family: map.font_family.clone(),
        font_family_code: map.font_family_code.clone(),
        font_size: map.font_size,
        font_size_sm: map.font_size_sm,
        font_size_lg: map.font_size_lg,
        font_size_xl: map.font_size_xl,
        font_size_icon: map.font_size_sm,
        font_size_heading1: map.font_size_heading1,
        font_size_heading2: map.font_size_heading2,
        font_size_heading3: map.font_size_heading3,
        font_size_heading4: map.font_size_heading4,
        font_size_heading5: map.font_size_heading5,
        font_weight_strong: 600,
        line_height: map.line_height,
        line_height_sm: map.line_height_sm,
        line_height_lg: map.line_height_lg,
        line_height_heading1: map.line_height_heading1,
        line_height_heading2: map.line_height_heading2,
        line_height_heading3: map.line_height_heading3,
        line_height_heading4: map.line_height_heading4,
        line_height_heading5: map.line_height_heading5,

        line_width: map.line_width,
        line_width_bold: map.line_width_bold,
        line_type: map.line_type.clone(),
        border_radius: map.border_radius,
        border_radius_xs: map.border_radius_xs,
        border_radius_sm: map.border_radius_sm,
        border_radius_lg: map.border_radius_lg,
        border_radius_outer: map.border_radius_outer,

        size_xxl: map.size_xxl,
        size_xl: map.size_xl,
        size_lg: map.size_lg,
        size_md: map.size_md,
        size_ms: map.size_ms,
        size: map.size,
        size_sm: map.size_sm,
        size_xs: map.size_xs,
        size_xxs: map.size_xxs,
        size_popup_arrow: map.size_popup_arrow,

        control_height_xs: map.control_height_xs,
        control_height_sm: map.control_height_sm,
        control_height: map.control_height,
        control_height_lg: map.control_height_lg,

        padding_xxs: map.size_xxs,
        padding_xs: map.size_xs,
        padding_sm: map.size_sm,
        padding: map.size,
        padding_md: map.size_md,
        padding_lg: map.size_lg,
        padding_xl: map.size_xl,
        margin_xxs: map.size_xxs,
        margin_xs: map.size_xs,
        margin_sm: map.size_sm,
        margin: map.size,
        margin_md: map.size_md,
        margin_lg: map.size_lg,
        margin_xl: map.size_xl,
        margin_xxl: map.size_xxl,

        box_shadow: "0 3px 6px -4px rgba(0, 0, 0, 0.12), \
                     0 6px 16px 0 rgba(0, 0, 0, 0.08), \
                     0 9px 28px 8px rgba(0, 0, 0, 0.05)"
            .to_string(),
        box_shadow_secondary: "0 6px 16px 0 rgba(0, 0, 0, 0.08), \
                               0 3px 6px -4px rgba(0, 0, 0, 0.12), \
                               0 9px 28px 8px rgba(0, 0, 0, 0.05)"
            .to_string(),

        screen_xs: SCREEN_XS,
        screen_xs_min: SCREEN_XS,
        screen_xs_max: SCREEN_XS - 1.0,
        screen_sm: SCREEN_SM,
        screen_sm_min: SCREEN_SM,
        screen_sm_max: SCREEN_SM - 1.0,
        screen_md: SCREEN_MD,
        screen_md_min: SCREEN_MD,
        screen_md_max: SCREEN_MD - 1.0,
        screen_lg: SCREEN_LG,
        screen_lg_min: SCREEN_LG,
        screen_lg_max: SCREEN_LG - 1.0,
        screen_xl: SCREEN_XL,
        screen_xl_min: SCREEN_XL,
        screen_xl_max: SCREEN_XL - 1.0,
        screen_xxl: SCREEN_XXL,
        screen_xxl_min: SCREEN_XXL,
        screen_xxl_max: SCREEN_XXL - 1.0,

        motion_duration_fast: map.motion_duration_fast.clone(),
        motion_duration_mid: map.motion_duration_mid.clone(),
        motion_duration_slow: map.motion_duration_slow.clone(),
        motion_ease_in_out: map.motion_ease_in_out.clone(),
        motion_ease_out: map.motion_ease_out.clone(),
        motion_ease_out_circ: map.motion_ease_out_circ.clone(),
        motion_ease_out_back: map.motion_ease_out_back.clone(),

        z_index_base: map.z_index_base,
        z_index_popup_base: map.z_index_popup_base,
        opacity_image: map.opacity_image,
        opacity_loading: 0.65,

        link_decoration: "none".to_string(),
        link_hover_decoration: "none".to_string(),
        link_focus_decoration: "none".to_string(),
    };

    overrides.apply(&mut token);
    token
}

macro_rules! impl_alias_overrides {
    (
        colors { $($color:ident),* $(,)? }
        extras { $(($extra:ident, $ty:ty)),* $(,)? }
    ) => {
        #[derive(Clone, Debug, Default, PartialEq, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct AliasOverrides {
            $(pub $color: Option<String>,)*
            $(pub $extra: Option<$ty>,)*
        }

        impl AliasOverrides {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $color(mut self, value: impl Into<String>) -> Self {
                    self.$color = Some(value.into());
                    self
                }
            )*

            $(
                pub fn $extra(mut self, value: impl Into<$ty>) -> Self {
                    self.$extra = Some(value.into());
                    self
                }
            )*

            pub fn validate(&self) -> Result<(), ThemeError> {
                $(
                    if let Some(value) = &self.$color {
                        Color::parse(value).map_err(|source| {
                            ThemeError::invalid_color(stringify!($color), value, source)
                        })?;
                    }
                )*
                Ok(())
            }

            fn apply(&self, token: &mut AliasToken) {
                $(
                    if let Some(value) = &self.$color {
                        token.$color = value.clone();
                    }
                )*
                $(
                    if let Some(value) = &self.$extra {
                        token.$extra = value.clone();
                    }
                )*
            }
        }
    };
}

impl_alias_overrides! {
    colors {
        color_text,
        color_text_secondary,
        color_text_disabled,
        color_text_placeholder,
        color_text_heading,
        color_bg_container,
        color_bg_elevated,
        color_bg_layout,
        color_bg_mask,
        color_border,
        color_border_secondary,
        color_split,
        color_link,
        color_link_hover,
        color_link_active,
        color_icon,
        color_icon_hover,
        color_highlight,
        control_item_bg_hover,
        control_item_bg_active,
        control_item_bg_active_hover,
        control_outline,
    }
    extras {
        (font_weight_strong, u32),
        (opacity_loading, f64),
        (control_outline_width, f64),
        (control_interactive_size, f64),
        (control_padding_horizontal, f64),
        (control_padding_horizontal_sm, f64),
        (padding, f64),
        (margin, f64),
        (box_shadow, String),
        (box_shadow_secondary, String),
        (link_decoration, String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::{Algorithm, derive_chain};
    use crate::tokens::SeedToken;

    fn default_alias(overrides: &AliasOverrides) -> AliasToken {
        let map = derive_chain(&SeedToken::default(), &[Algorithm::Default]).unwrap();
        format_token(&map, overrides)
    }

    #[test]
    fn formatting_is_deterministic() {
        let first = default_alias(&AliasOverrides::new());
        let second = default_alias(&AliasOverrides::new());
        assert_eq!(first, second);
    }

    #[test]
    fn alias_override_wins_over_derived_values() {
        let token = default_alias(&AliasOverrides::new().color_link("#ff0000"));
        assert_eq!(token.color_link, "#ff0000");
        // Untouched aliases keep the derived mapping.
        assert_eq!(token.color_link_hover, token.color_primary_hover);
    }

    #[test]
    fn every_alias_resolves_to_a_concrete_value() {
        let token = default_alias(&AliasOverrides::new());
        assert_eq!(token.color_link, token.color_primary);
        assert_eq!(token.color_text_disabled, token.color_text_quaternary);
        assert_eq!(token.color_border_bg, token.color_bg_container);
        assert_eq!(token.font_size_icon, token.font_size_sm);
    }

    #[test]
    fn structural_constants_sit_between_derivation_and_overrides() {
        let plain = default_alias(&AliasOverrides::new());
        assert_eq!(plain.screen_xs, 480.0);
        assert_eq!(plain.control_padding_horizontal, 12.0);
        assert_eq!(plain.padding, plain.size);
        assert_eq!(plain.margin_xxl, plain.size_xxl);

        let padded = default_alias(&AliasOverrides::new().padding(20.0));
        assert_eq!(padded.padding, 20.0);
        assert_eq!(padded.size, plain.size);
    }

    #[test]
    fn font_scale_ordering_survives_formatting() {
        let token = default_alias(&AliasOverrides::new());
        assert!(token.font_size_sm < token.font_size);
        assert!(token.font_size < token.font_size_lg);
    }

    #[test]
    fn malformed_override_color_fails_validation() {
        let overrides = AliasOverrides::new().color_link("#zz0000");
        assert!(overrides.validate().is_err());
        assert!(AliasOverrides::new().color_link("#ff0000").validate().is_ok());
    }

    #[test]
    fn control_metrics_follow_the_map_token() {
        let token = default_alias(&AliasOverrides::new());
        assert_eq!(token.control_outline_width, 2.0);
        assert_eq!(token.control_interactive_size, 16.0);
    }
}
