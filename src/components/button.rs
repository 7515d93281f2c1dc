use serde::Deserialize;

use crate::alias::AliasToken;
use crate::color::Color;
use crate::error::ThemeError;
use crate::style::{Declarations, Direction, Rule, RuleSet, num, px};
use crate::theme::ComponentOverrides;

use super::{ComponentStyle, StyleOrigin};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonOverrides {
    pub color_bg_text_hover: Option<String>,
    pub color_bg_text_active: Option<String>,
    pub font_weight: Option<u32>,
}

impl ButtonOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_bg_text_hover(mut self, value: impl Into<String>) -> Self {
        self.color_bg_text_hover = Some(value.into());
        self
    }

    pub fn color_bg_text_active(mut self, value: impl Into<String>) -> Self {
        self.color_bg_text_active = Some(value.into());
        self
    }

    pub fn font_weight(mut self, value: u32) -> Self {
        self.font_weight = Some(value);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonToken {
    pub alias: AliasToken,
    pub color_bg_text_hover: String,
    pub color_bg_text_active: String,
    pub font_weight: u32,
}

pub struct ButtonStyle;

impl ComponentStyle for ButtonStyle {
    const NAME: &'static str = "button";
    type Token = ButtonToken;

    fn component_token(
        alias: &AliasToken,
        overrides: &ComponentOverrides,
    ) -> Result<ButtonToken, ThemeError> {
        let text = Color::parse(&alias.color_text)
            .map_err(|source| ThemeError::invalid_color("colorText", &alias.color_text, source))?;
        let button = &overrides.button;
        Ok(ButtonToken {
            alias: alias.clone(),
            color_bg_text_hover: button
                .color_bg_text_hover
                .clone()
                .unwrap_or_else(|| text.with_alpha(text.a * 0.02).to_css()),
            color_bg_text_active: button
                .color_bg_text_active
                .clone()
                .unwrap_or_else(|| text.with_alpha(text.a * 0.03).to_css()),
            font_weight: button.font_weight.unwrap_or(400),
        })
    }

    fn rules(token: &ButtonToken, origin: &StyleOrigin) -> RuleSet {
        let btn = format!(".{}", origin.prefix);
        let mut set = RuleSet::new()
            .rule(shared_rule(token, &btn))
            .extend(size_rules(token, &btn))
            .extend(type_rules(token, &btn))
            .rule(narrow_screen_rule(token, &btn));
        if origin.direction == Direction::Rtl {
            set = set.rule(Rule::new(format!("{btn}-rtl")).decl("direction", "rtl"));
        }
        set
    }
}

fn shared_rule(token: &ButtonToken, btn: &str) -> Rule {
    let alias = &token.alias;
    Rule::new(btn)
        .decl("outline", "none")
        .decl("position", "relative")
        .decl("display", "inline-block")
        .decl("font-family", alias.font_family.clone())
        .decl("font-weight", token.font_weight.to_string())
        .decl("white-space", "nowrap")
        .decl("text-align", "center")
        .decl("background-image", "none")
        .decl("background-color", "transparent")
        .decl(
            "border",
            format!("{} {} transparent", px(alias.line_width), alias.line_type),
        )
        .decl("cursor", "pointer")
        .decl(
            "transition",
            format!(
                "all {} {}",
                alias.motion_duration_mid, alias.motion_ease_in_out
            ),
        )
        .decl("user-select", "none")
        .decl("touch-action", "manipulation")
        .decl("line-height", num(alias.line_height))
        .decl("color", alias.color_text.clone())
        .child(Rule::new("> span").decl("display", "inline-block"))
        .child(Rule::new("> span + span").decl("margin-inline-start", px(alias.margin_xs)))
        .child(Rule::new("&-block").decl("width", "100%"))
}

struct SizeMetrics {
    suffix: &'static str,
    height: f64,
    font_size: f64,
    line_height: f64,
    padding_horizontal: f64,
}

fn size_rules(token: &ButtonToken, btn: &str) -> RuleSet {
    let alias = &token.alias;
    let variants = [
        SizeMetrics {
            suffix: "",
            height: alias.control_height,
            font_size: alias.font_size,
            line_height: alias.line_height,
            padding_horizontal: alias.padding - alias.line_width,
        },
        SizeMetrics {
            suffix: "-sm",
            height: alias.control_height_sm,
            font_size: alias.font_size,
            line_height: alias.line_height,
            padding_horizontal: alias.padding_xs - alias.line_width,
        },
        SizeMetrics {
            suffix: "-lg",
            height: alias.control_height_lg,
            font_size: alias.font_size_lg,
            line_height: alias.line_height_lg,
            padding_horizontal: alias.padding - alias.line_width,
        },
    ];

    let mut set = RuleSet::new();
    for size in variants {
        set = set
            .rule(size_rule(token, btn, &size))
            .rule(circle_rule(btn, &size))
            .rule(round_rule(btn, &size));
    }
    set.rule(
        Rule::new(format!("{btn}-loading"))
            .decl("opacity", num(alias.opacity_loading))
            .decl("cursor", "default"),
    )
}

fn size_selector(btn: &str, shape: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        format!("{btn}{shape}")
    } else {
        format!("{btn}{shape}{btn}{suffix}")
    }
}

fn size_rule(token: &ButtonToken, btn: &str, size: &SizeMetrics) -> Rule {
    let alias = &token.alias;
    let content = size.font_size * size.line_height;
    let padding_vertical = (((size.height - content) / 2.0) - alias.line_width)
        .max(0.0)
        .floor();
    Rule::new(size_selector(btn, "", size.suffix))
        .decl("height", px(size.height))
        .decl("font-size", px(size.font_size))
        .decl(
            "padding",
            format!(
                "{} {}",
                px(padding_vertical),
                px(size.padding_horizontal.max(0.0))
            ),
        )
}

fn circle_rule(btn: &str, size: &SizeMetrics) -> Rule {
    Rule::new(size_selector(btn, "-circle", size.suffix))
        .decl("min-width", px(size.height))
        .decl("padding-inline-start", "0")
        .decl("padding-inline-end", "0")
        .decl("border-radius", "50%")
}

fn round_rule(btn: &str, size: &SizeMetrics) -> Rule {
    Rule::new(size_selector(btn, "-round", size.suffix))
        .decl("border-radius", px(size.height))
        .decl("padding-inline-start", px(size.height / 2.0))
        .decl("padding-inline-end", px(size.height / 2.0))
        .decl("width", "auto")
}

fn hover_active(hover: Declarations, active: Declarations) -> [Rule; 2] {
    [
        Rule::new("&:not(:disabled):hover, &:not(:disabled):focus").merge(hover),
        Rule::new("&:not(:disabled):active").merge(active),
    ]
}

fn solid_disabled(alias: &AliasToken) -> Rule {
    Rule::new("&:disabled")
        .decl("cursor", "not-allowed")
        .decl("border-color", alias.color_border.clone())
        .decl("color", alias.color_text_disabled.clone())
        .decl("background-color", alias.color_bg_container_disabled.clone())
        .decl("box-shadow", "none")
}

fn pure_disabled(alias: &AliasToken) -> Rule {
    Rule::new("&:disabled")
        .decl("cursor", "not-allowed")
        .decl("color", alias.color_text_disabled.clone())
}

fn ghost_rule(btn: &str, text_color: &str, border_color: &str, alias: &AliasToken) -> Rule {
    Rule::new(format!("&{btn}-background-ghost"))
        .decl("color", text_color.to_string())
        .decl("background-color", "transparent")
        .decl("border-color", border_color.to_string())
        .decl("box-shadow", "none")
        .child(
            Rule::new("&:disabled")
                .decl("cursor", "not-allowed")
                .decl("color", alias.color_text_disabled.clone())
                .decl("border-color", alias.color_border.clone()),
        )
}

fn solid_base(alias: &AliasToken) -> Declarations {
    Declarations::new().decl("border-radius", px(alias.border_radius))
}

fn default_type_rule(token: &ButtonToken, btn: &str, dashed: bool) -> Rule {
    let alias = &token.alias;
    let suffix = if dashed { "-dashed" } else { "-default" };
    let mut rule = Rule::new(format!("{btn}{suffix}"))
        .merge(solid_base(alias))
        .decl("background-color", alias.color_bg_container.clone())
        .decl("border-color", alias.color_border.clone())
        .decl(
            "box-shadow",
            format!(
                "0 {} 0 {}",
                px(alias.control_outline_width),
                alias.color_fill_quaternary
            ),
        );
    if dashed {
        rule = rule.decl("border-style", "dashed");
    }
    let [hover, active] = hover_active(
        Declarations::new()
            .decl("color", alias.color_primary_hover.clone())
            .decl("border-color", alias.color_primary_hover.clone()),
        Declarations::new()
            .decl("color", alias.color_primary_active.clone())
            .decl("border-color", alias.color_primary_active.clone()),
    );
    let [danger_hover, danger_active] = hover_active(
        Declarations::new()
            .decl("color", alias.color_error_hover.clone())
            .decl("border-color", alias.color_error_hover.clone()),
        Declarations::new()
            .decl("color", alias.color_error_active.clone())
            .decl("border-color", alias.color_error_active.clone()),
    );
    rule.child(hover)
        .child(active)
        .child(ghost_rule(
            btn,
            &alias.color_bg_container,
            &alias.color_bg_container,
            alias,
        ))
        .child(solid_disabled(alias))
        .child(
            Rule::new(format!("&{btn}-dangerous"))
                .decl("color", alias.color_error.clone())
                .decl("border-color", alias.color_error.clone())
                .child(danger_hover)
                .child(danger_active)
                .child(ghost_rule(btn, &alias.color_error, &alias.color_error, alias))
                .child(solid_disabled(alias)),
        )
}

fn primary_type_rule(token: &ButtonToken, btn: &str) -> Rule {
    let alias = &token.alias;
    let [hover, active] = hover_active(
        Declarations::new().decl("background-color", alias.color_primary_hover.clone()),
        Declarations::new().decl("background-color", alias.color_primary_active.clone()),
    );
    let [danger_hover, danger_active] = hover_active(
        Declarations::new().decl("background-color", alias.color_error_hover.clone()),
        Declarations::new().decl("background-color", alias.color_error_active.clone()),
    );
    Rule::new(format!("{btn}-primary"))
        .merge(solid_base(alias))
        .decl("color", alias.color_text_light_solid.clone())
        .decl("background-color", alias.color_primary.clone())
        .decl(
            "box-shadow",
            format!(
                "0 {} 0 {}",
                px(alias.control_outline_width),
                alias.control_outline
            ),
        )
        .child(hover)
        .child(active)
        .child(ghost_rule(btn, &alias.color_primary, &alias.color_primary, alias))
        .child(solid_disabled(alias))
        .child(
            Rule::new(format!("&{btn}-dangerous"))
                .decl("background-color", alias.color_error.clone())
                .decl(
                    "box-shadow",
                    format!(
                        "0 {} 0 {}",
                        px(alias.control_outline_width),
                        alias.color_error_outline
                    ),
                )
                .child(danger_hover)
                .child(danger_active)
                .child(ghost_rule(btn, &alias.color_error, &alias.color_error, alias))
                .child(solid_disabled(alias)),
        )
}

fn link_type_rule(token: &ButtonToken, btn: &str) -> Rule {
    let alias = &token.alias;
    let [hover, active] = hover_active(
        Declarations::new()
            .decl("color", alias.color_link_hover.clone())
            .decl("text-decoration", alias.link_hover_decoration.clone()),
        Declarations::new().decl("color", alias.color_link_active.clone()),
    );
    let [danger_hover, danger_active] = hover_active(
        Declarations::new().decl("color", alias.color_error_hover.clone()),
        Declarations::new().decl("color", alias.color_error_active.clone()),
    );
    Rule::new(format!("{btn}-link"))
        .decl("color", alias.color_link.clone())
        .decl("text-decoration", alias.link_decoration.clone())
        .child(hover)
        .child(active)
        .child(pure_disabled(alias))
        .child(
            Rule::new(format!("&{btn}-dangerous"))
                .decl("color", alias.color_error.clone())
                .child(danger_hover)
                .child(danger_active)
                .child(pure_disabled(alias)),
        )
}

fn text_type_rule(token: &ButtonToken, btn: &str) -> Rule {
    let alias = &token.alias;
    let [hover, active] = hover_active(
        Declarations::new().decl("background-color", token.color_bg_text_hover.clone()),
        Declarations::new().decl("background-color", token.color_bg_text_active.clone()),
    );
    Rule::new(format!("{btn}-text"))
        .child(hover)
        .child(active)
        .child(pure_disabled(alias))
        .child(
            Rule::new(format!("&{btn}-dangerous"))
                .decl("color", alias.color_error.clone())
                .child(pure_disabled(alias)),
        )
}

fn type_rules(token: &ButtonToken, btn: &str) -> RuleSet {
    RuleSet::new()
        .rule(default_type_rule(token, btn, false))
        .rule(primary_type_rule(token, btn))
        .rule(default_type_rule(token, btn, true))
        .rule(link_type_rule(token, btn))
        .rule(text_type_rule(token, btn))
}

// Large buttons fall back to the base control height on phone-width screens.
fn narrow_screen_rule(token: &ButtonToken, btn: &str) -> Rule {
    let alias = &token.alias;
    Rule::new(format!("@media (max-width: {}px)", num(alias.screen_xs_max))).child(
        Rule::new(format!("{btn}-lg"))
            .decl("height", px(alias.control_height))
            .decl("font-size", px(alias.font_size)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::{AliasOverrides, format_token};
    use crate::derive::{Algorithm, derive_chain};
    use crate::tokens::{SeedOverrides, SeedToken};

    fn alias() -> AliasToken {
        let map = derive_chain(&SeedToken::default(), &[Algorithm::Default]).unwrap();
        format_token(&map, &AliasOverrides::new())
    }

    fn button_token(overrides: &ComponentOverrides) -> ButtonToken {
        ButtonStyle::component_token(&alias(), overrides).unwrap()
    }

    #[test]
    fn text_background_tokens_come_from_the_text_color_alpha() {
        let token = button_token(&ComponentOverrides::default());
        assert_eq!(token.color_bg_text_hover, "rgba(0,0,0,0.02)");
        assert_eq!(token.color_bg_text_active, "rgba(0,0,0,0.03)");
        assert_eq!(token.font_weight, 400);
    }

    #[test]
    fn user_override_beats_the_computed_component_token() {
        let overrides = ComponentOverrides {
            button: ButtonOverrides::new()
                .color_bg_text_hover("#123456")
                .font_weight(500),
        };
        let token = button_token(&overrides);
        assert_eq!(token.color_bg_text_hover, "#123456");
        assert_eq!(token.color_bg_text_active, "rgba(0,0,0,0.03)");
        assert_eq!(token.font_weight, 500);
    }

    #[test]
    fn generated_css_covers_types_sizes_and_states() {
        let token = button_token(&ComponentOverrides::default());
        let css = ButtonStyle::rules(&token, &StyleOrigin::new("glz-btn")).to_css(None);

        for selector in [
            ".glz-btn {",
            ".glz-btn-default {",
            ".glz-btn-primary {",
            ".glz-btn-dashed {",
            ".glz-btn-link {",
            ".glz-btn-text:not(:disabled):hover",
            ".glz-btn-sm {",
            ".glz-btn-lg {",
            ".glz-btn-circle {",
            ".glz-btn-round.glz-btn-sm {",
            ".glz-btn-primary.glz-btn-dangerous {",
            ".glz-btn-primary.glz-btn-background-ghost {",
            "@media (max-width: 479px)",
        ] {
            assert!(css.contains(selector), "missing {selector}");
        }
        assert!(css.contains("height: 32px"));
        assert!(css.contains("padding: 4px 15px"));
    }

    #[test]
    fn vertical_padding_clamps_at_zero() {
        let seed = SeedToken::default().merged(&SeedOverrides::new().control_height(20.0));
        let map = derive_chain(&seed, &[Algorithm::Default]).unwrap();
        let alias = format_token(&map, &AliasOverrides::new());
        let token = ButtonStyle::component_token(&alias, &ComponentOverrides::default()).unwrap();
        let css = ButtonStyle::rules(&token, &StyleOrigin::new("glz-btn")).to_css(None);
        assert!(css.contains("padding: 0 15px"));
    }

    #[test]
    fn rtl_origin_adds_a_direction_rule() {
        let token = button_token(&ComponentOverrides::default());
        let ltr = ButtonStyle::rules(&token, &StyleOrigin::new("glz-btn")).to_css(None);
        let rtl = ButtonStyle::rules(
            &token,
            &StyleOrigin::new("glz-btn").direction(Direction::Rtl),
        )
        .to_css(None);
        assert!(!ltr.contains(".glz-btn-rtl"));
        assert!(rtl.contains(".glz-btn-rtl {"));
        assert!(rtl.contains("direction: rtl;"));
    }

    #[test]
    fn generation_is_a_pure_function_of_its_inputs() {
        let token = button_token(&ComponentOverrides::default());
        let origin = StyleOrigin::new("glz-btn");
        assert_eq!(
            ButtonStyle::rules(&token, &origin),
            ButtonStyle::rules(&token, &origin)
        );
    }
}
