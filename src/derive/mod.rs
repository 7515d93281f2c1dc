use log::debug;
use serde::Deserialize;

use crate::color::Color;
use crate::error::ThemeError;
use crate::tokens::SeedToken;

pub mod palette;
pub mod sizes;
pub mod typography;

use palette::{ColorRamp, tonal_ramp, tonal_ramp_on};
use sizes::{control_heights, motion_durations, radius_scale, size_scale};
use typography::{FontScale, font_scale};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Default,
    Dark,
    Compact,
}

impl Algorithm {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Compact => "compact",
        }
    }

    pub fn derive(self, seed: &SeedToken, base: Option<&MapToken>) -> Result<MapToken, ThemeError> {
        seed.validate()?;
        match self {
            Self::Default => derive_default(seed),
            Self::Dark => derive_dark(seed, base),
            Self::Compact => derive_compact(seed, base),
        }
    }
}

pub fn derive_chain(seed: &SeedToken, algorithms: &[Algorithm]) -> Result<MapToken, ThemeError> {
    let Some((first, rest)) = algorithms.split_first() else {
        return Algorithm::Default.derive(seed, None);
    };
    let mut token = first.derive(seed, None)?;
    for algorithm in rest {
        token = algorithm.derive(seed, Some(&token))?;
    }
    debug!(
        "derived token map through {:?}",
        algorithms.iter().map(|a| a.as_str()).collect::<Vec<_>>()
    );
    Ok(token)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemanticColorGroup {
    pub bg: Color,
    pub bg_hover: Color,
    pub border: Color,
    pub border_hover: Color,
    pub hover: Color,
    pub base: Color,
    pub active: Color,
    pub text_hover: Color,
    pub text: Color,
    pub text_active: Color,
}

impl SemanticColorGroup {
    fn on_light(ramp: &ColorRamp) -> Self {
        Self {
            bg: ramp[0],
            bg_hover: ramp[1],
            border: ramp[2],
            border_hover: ramp[3],
            hover: ramp[4],
            base: ramp[5],
            active: ramp[6],
            text_hover: ramp[4],
            text: ramp[5],
            text_active: ramp[6],
        }
    }

    // On dark surfaces hover must move towards light, so the hover/active
    // pair flips around the base entry.
    fn on_dark(ramp: &ColorRamp) -> Self {
        Self {
            bg: ramp[0],
            bg_hover: ramp[1],
            border: ramp[2],
            border_hover: ramp[3],
            hover: ramp[6],
            base: ramp[5],
            active: ramp[4],
            text_hover: ramp[6],
            text: ramp[5],
            text_active: ramp[4],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapToken {
    pub font_family: String,
    pub font_family_code: String,
    pub line_width: f64,
    pub line_width_bold: f64,
    pub line_type: String,
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
    pub size_popup_arrow: f64,

    pub primary: SemanticColorGroup,
    pub success: SemanticColorGroup,
    pub warning: SemanticColorGroup,
    pub error: SemanticColorGroup,
    pub info: SemanticColorGroup,

    pub color_text: Color,
    pub color_text_secondary: Color,
    pub color_text_tertiary: Color,
    pub color_text_quaternary: Color,
    pub color_fill: Color,
    pub color_fill_secondary: Color,
    pub color_fill_tertiary: Color,
    pub color_fill_quaternary: Color,
    pub color_bg_container: Color,
    pub color_bg_elevated: Color,
    pub color_bg_layout: Color,
    pub color_bg_spotlight: Color,
    pub color_bg_mask: Color,
    pub color_border: Color,
    pub color_border_secondary: Color,

    pub font_size: f64,
    pub font_size_sm: f64,
    pub font_size_lg: f64,
    pub font_size_xl: f64,
    pub font_size_heading1: f64,
    pub font_size_heading2: f64,
    pub font_size_heading3: f64,
    pub font_size_heading4: f64,
    pub font_size_heading5: f64,
    pub line_height: f64,
    pub line_height_sm: f64,
    pub line_height_lg: f64,
    pub line_height_heading1: f64,
    pub line_height_heading2: f64,
    pub line_height_heading3: f64,
    pub line_height_heading4: f64,
    pub line_height_heading5: f64,

    pub size_xxl: f64,
    pub size_xl: f64,
    pub size_lg: f64,
    pub size_md: f64,
    pub size_ms: f64,
    pub size: f64,
    pub size_sm: f64,
    pub size_xs: f64,
    pub size_xxs: f64,

    pub control_height_xs: f64,
    pub control_height_sm: f64,
    pub control_height: f64,
    pub control_height_lg: f64,

    pub border_radius: f64,
    pub border_radius_xs: f64,
    pub border_radius_sm: f64,
    pub border_radius_lg: f64,
    pub border_radius_outer: f64,
}

struct SeedColors {
    primary: Color,
    success: Color,
    warning: Color,
    error: Color,
    info: Color,
}

fn seed_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    Color::parse(value).map_err(|source| ThemeError::invalid_color(field, value, source))
}

fn seed_colors(seed: &SeedToken) -> Result<SeedColors, ThemeError> {
    Ok(SeedColors {
        primary: seed_color("colorPrimary", &seed.color_primary)?,
        success: seed_color("colorSuccess", &seed.color_success)?,
        warning: seed_color("colorWarning", &seed.color_warning)?,
        error: seed_color("colorError", &seed.color_error)?,
        info: seed_color("colorInfo", &seed.color_info)?,
    })
}

fn base_color(
    field: &'static str,
    value: &Option<String>,
    fallback: Color,
) -> Result<Color, ThemeError> {
    match value {
        Some(raw) => seed_color(field, raw),
        None => Ok(fallback),
    }
}

fn apply_font_scale(token: &mut MapToken, scale: &FontScale) {
    token.font_size_sm = scale.sizes[0];
    token.font_size = scale.sizes[1];
    token.font_size_lg = scale.sizes[2];
    token.font_size_xl = scale.sizes[3];
    token.font_size_heading1 = scale.sizes[6];
    token.font_size_heading2 = scale.sizes[5];
    token.font_size_heading3 = scale.sizes[4];
    token.font_size_heading4 = scale.sizes[3];
    token.font_size_heading5 = scale.sizes[2];
    token.line_height_sm = scale.line_heights[0];
    token.line_height = scale.line_heights[1];
    token.line_height_lg = scale.line_heights[2];
    token.line_height_heading1 = scale.line_heights[6];
    token.line_height_heading2 = scale.line_heights[5];
    token.line_height_heading3 = scale.line_heights[4];
    token.line_height_heading4 = scale.line_heights[3];
    token.line_height_heading5 = scale.line_heights[2];
}

fn apply_size_scale(token: &mut MapToken, scale: &sizes::SizeScale) {
    token.size_xxl = scale.xxl;
    token.size_xl = scale.xl;
    token.size_lg = scale.lg;
    token.size_md = scale.md;
    token.size_ms = scale.ms;
    token.size = scale.base;
    token.size_sm = scale.sm;
    token.size_xs = scale.xs;
    token.size_xxs = scale.xxs;
}

fn apply_control_heights(token: &mut MapToken, heights: &sizes::ControlHeights) {
    token.control_height_xs = heights.xs;
    token.control_height_sm = heights.sm;
    token.control_height = heights.base;
    token.control_height_lg = heights.lg;
}

fn derive_default(seed: &SeedToken) -> Result<MapToken, ThemeError> {
    let colors = seed_colors(seed)?;
    let text_base = base_color("colorTextBase", &seed.color_text_base, Color::BLACK)?;
    let bg_base = base_color("colorBgBase", &seed.color_bg_base, Color::WHITE)?;

    let durations = motion_durations(seed.motion_base, seed.motion_unit);
    let radii = radius_scale(seed.border_radius);
    let font = font_scale(seed.font_size);
    let scale = size_scale(seed.size_unit, seed.size_step);
    let heights = control_heights(seed.control_height);

    Ok(MapToken {
        font_family: seed.font_family.clone(),
        font_family_code: seed.font_family_code.clone(),
        line_width: seed.line_width,
        line_width_bold: seed.line_width + 2.0,
        line_type: seed.line_type.clone(),
        motion_duration_fast: durations.fast,
        motion_duration_mid: durations.mid,
        motion_duration_slow: durations.slow,
        motion_ease_in_out: seed.motion_ease_in_out.clone(),
        motion_ease_out: seed.motion_ease_out.clone(),
        motion_ease_out_circ: seed.motion_ease_out_circ.clone(),
        motion_ease_out_back: seed.motion_ease_out_back.clone(),
        z_index_base: seed.z_index_base,
        z_index_popup_base: seed.z_index_popup_base,
        opacity_image: seed.opacity_image,
        size_popup_arrow: seed.size_popup_arrow,

        primary: SemanticColorGroup::on_light(&tonal_ramp(colors.primary)),
        success: SemanticColorGroup::on_light(&tonal_ramp(colors.success)),
        warning: SemanticColorGroup::on_light(&tonal_ramp(colors.warning)),
        error: SemanticColorGroup::on_light(&tonal_ramp(colors.error)),
        info: SemanticColorGroup::on_light(&tonal_ramp(colors.info)),

        color_text: text_base.with_alpha(0.88),
        color_text_secondary: text_base.with_alpha(0.65),
        color_text_tertiary: text_base.with_alpha(0.45),
        color_text_quaternary: text_base.with_alpha(0.25),
        color_fill: text_base.with_alpha(0.15),
        color_fill_secondary: text_base.with_alpha(0.06),
        color_fill_tertiary: text_base.with_alpha(0.04),
        color_fill_quaternary: text_base.with_alpha(0.02),
        color_bg_container: bg_base,
        color_bg_elevated: bg_base,
        color_bg_layout: bg_base.darken(4.0),
        color_bg_spotlight: text_base.with_alpha(0.85),
        color_bg_mask: Color::BLACK.with_alpha(0.45),
        color_border: bg_base.darken(15.0),
        color_border_secondary: bg_base.darken(6.0),

        font_size: font.sizes[1],
        font_size_sm: font.sizes[0],
        font_size_lg: font.sizes[2],
        font_size_xl: font.sizes[3],
        font_size_heading1: font.sizes[6],
        font_size_heading2: font.sizes[5],
        font_size_heading3: font.sizes[4],
        font_size_heading4: font.sizes[3],
        font_size_heading5: font.sizes[2],
        line_height: font.line_heights[1],
        line_height_sm: font.line_heights[0],
        line_height_lg: font.line_heights[2],
        line_height_heading1: font.line_heights[6],
        line_height_heading2: font.line_heights[5],
        line_height_heading3: font.line_heights[4],
        line_height_heading4: font.line_heights[3],
        line_height_heading5: font.line_heights[2],

        size_xxl: scale.xxl,
        size_xl: scale.xl,
        size_lg: scale.lg,
        size_md: scale.md,
        size_ms: scale.ms,
        size: scale.base,
        size_sm: scale.sm,
        size_xs: scale.xs,
        size_xxs: scale.xxs,

        control_height_xs: heights.xs,
        control_height_sm: heights.sm,
        control_height: heights.base,
        control_height_lg: heights.lg,

        border_radius: radii.base,
        border_radius_xs: radii.xs,
        border_radius_sm: radii.sm,
        border_radius_lg: radii.lg,
        border_radius_outer: radii.outer,
    })
}

fn derive_dark(seed: &SeedToken, base: Option<&MapToken>) -> Result<MapToken, ThemeError> {
    let mut token = match base {
        Some(previous) => previous.clone(),
        None => derive_default(seed)?,
    };
    let colors = seed_colors(seed)?;
    let text_base = base_color("colorTextBase", &seed.color_text_base, Color::WHITE)?;
    let bg_base = base_color("colorBgBase", &seed.color_bg_base, Color::BLACK)?;

    token.color_bg_container = bg_base.lighten(8.0);
    token.color_bg_elevated = bg_base.lighten(12.0);
    token.color_bg_layout = bg_base;
    token.color_bg_spotlight = bg_base.lighten(26.0);
    token.color_bg_mask = Color::BLACK.with_alpha(0.45);
    token.color_border = bg_base.lighten(26.0);
    token.color_border_secondary = bg_base.lighten(19.0);

    token.color_text = text_base.with_alpha(0.85);
    token.color_text_secondary = text_base.with_alpha(0.65);
    token.color_text_tertiary = text_base.with_alpha(0.45);
    token.color_text_quaternary = text_base.with_alpha(0.25);
    token.color_fill = text_base.with_alpha(0.18);
    token.color_fill_secondary = text_base.with_alpha(0.12);
    token.color_fill_tertiary = text_base.with_alpha(0.08);
    token.color_fill_quaternary = text_base.with_alpha(0.04);

    let surface = token.color_bg_container;
    token.primary = SemanticColorGroup::on_dark(&tonal_ramp_on(colors.primary, surface));
    token.success = SemanticColorGroup::on_dark(&tonal_ramp_on(colors.success, surface));
    token.warning = SemanticColorGroup::on_dark(&tonal_ramp_on(colors.warning, surface));
    token.error = SemanticColorGroup::on_dark(&tonal_ramp_on(colors.error, surface));
    token.info = SemanticColorGroup::on_dark(&tonal_ramp_on(colors.info, surface));
    Ok(token)
}

fn derive_compact(seed: &SeedToken, base: Option<&MapToken>) -> Result<MapToken, ThemeError> {
    let mut token = match base {
        Some(previous) => previous.clone(),
        None => derive_default(seed)?,
    };
    let compact_font_size = token.font_size_sm;
    apply_font_scale(&mut token, &font_scale(compact_font_size));
    apply_size_scale(
        &mut token,
        &size_scale(seed.size_unit, seed.size_step - 2.0),
    );
    let height = (token.control_height - 4.0).max(0.0);
    apply_control_heights(&mut token, &control_heights(height));
    Ok(token)
}
