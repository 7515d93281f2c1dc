use std::sync::atomic::{AtomicUsize, Ordering};

use glaze::ThemeProvider;
use glaze::alias::AliasOverrides;
use glaze::color::Color;
use glaze::components::ButtonStyle;
use glaze::derive::palette::tonal_ramp;
use glaze::derive::{Algorithm, derive_chain};
use glaze::registry::{StyleCacheKey, StyleRegistry};
use glaze::style::{Rule, RuleSet};
use glaze::theme::{Theme, ThemeConfig};
use glaze::tokens::{SeedOverrides, SeedToken};

fn seeded_config() -> ThemeConfig {
    ThemeConfig::new().token(
        SeedOverrides::new()
            .color_primary("#1677ff")
            .font_size(14.0)
            .control_height(32.0),
    )
}

#[test]
fn independent_resolutions_produce_structurally_equal_tokens() {
    let first = Theme::new(seeded_config()).unwrap();
    let second = Theme::new(seeded_config()).unwrap();
    assert_eq!(first.alias_token().as_ref(), second.alias_token().as_ref());
    assert_eq!(first.hash_id(), second.hash_id());
}

#[test]
fn semantic_ramps_are_monotonic_in_lightness() {
    for seed in ["#1677ff", "#52c41a", "#faad14", "#ff4d4f", "#722ed1"] {
        let ramp = tonal_ramp(Color::parse(seed).unwrap());
        let lightness: Vec<f32> = ramp.iter().map(|color| color.lightness()).collect();
        for pair in lightness.windows(2) {
            assert!(pair[0] > pair[1], "{seed} ramp is not monotonic");
        }
    }
}

#[test]
fn alias_override_wins_regardless_of_the_derived_default() {
    let config = seeded_config().alias(AliasOverrides::new().color_link("#ff0000"));
    let theme = Theme::new(config).unwrap();
    assert_eq!(theme.alias_token().color_link, "#ff0000");
    assert_ne!(
        theme.alias_token().color_link,
        theme.alias_token().color_primary
    );
}

#[test]
fn seeded_scenario_orders_fonts_and_places_hover_in_the_ramp() {
    let theme = Theme::new(seeded_config()).unwrap();
    let token = theme.alias_token();

    assert!(token.font_size_sm < token.font_size);
    assert!(token.font_size < token.font_size_lg);

    assert_ne!(token.color_primary_hover, token.color_primary);
    let ramp = tonal_ramp(Color::parse("#1677ff").unwrap());
    let hover = Color::parse(&token.color_primary_hover).unwrap();
    assert!(ramp.contains(hover));
}

#[test]
fn dark_algorithm_darkens_the_container_but_keeps_the_primary_hue() {
    let light = Theme::new(seeded_config()).unwrap();
    let dark = Theme::new(seeded_config().algorithm(Algorithm::Dark)).unwrap();

    let light_bg = Color::parse(&light.alias_token().color_bg_container).unwrap();
    let dark_bg = Color::parse(&dark.alias_token().color_bg_container).unwrap();
    assert!(dark_bg.lightness() < light_bg.lightness());

    let light_primary = Color::parse(&light.alias_token().color_primary).unwrap();
    let dark_primary = Color::parse(&dark.alias_token().color_primary).unwrap();
    assert!((light_primary.hue() - dark_primary.hue()).abs() < 2.0);
}

#[test]
fn cache_returns_the_same_scope_without_recomputing() {
    let registry = StyleRegistry::new();
    let calls = AtomicUsize::new(0);
    let compute = || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(RuleSet::new().rule(Rule::new(".glz-btn").decl("color", "#1677ff")))
    };

    let key = StyleCacheKey::new(42, "button", "glz-btn");
    let first = registry.get_or_create(key.clone(), compute).unwrap();
    let second = registry
        .get_or_create(key, || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(RuleSet::new())
        })
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.scope_class(), second.scope_class());
}

#[test]
fn style_survives_until_the_last_consumer_unmounts() {
    let provider = ThemeProvider::new(seeded_config()).unwrap();
    let first = provider.style::<ButtonStyle>("glz-btn").unwrap();
    let second = provider.style::<ButtonStyle>("glz-btn").unwrap();
    let scope = first.scope_class().to_string();

    drop(first);
    assert!(provider.registry().contains_scope(&scope));
    drop(second);
    assert!(!provider.registry().contains_scope(&scope));
}

#[test]
fn full_pipeline_emits_scoped_css_for_markup() {
    let provider = ThemeProvider::new(seeded_config()).unwrap();
    let lease = provider.style::<ButtonStyle>("glz-btn").unwrap();

    assert!(lease.scope_class().starts_with("glaze-"));
    assert!(lease.css().contains(&format!(
        ".glz-btn-primary.{} {{",
        lease.scope_class()
    )));
    assert!(lease.css().contains("background-color: #1677ff;"));

    let extracted = provider.extract();
    assert_eq!(extracted.css, lease.css());
    assert_eq!(
        extracted.scope_classes,
        vec![lease.scope_class().to_string()]
    );
}

#[test]
fn derivation_never_depends_on_call_order() {
    let seed = SeedToken::default();
    let chained = derive_chain(&seed, &[Algorithm::Default, Algorithm::Compact]).unwrap();
    let direct = derive_chain(&seed, &[Algorithm::Compact]).unwrap();
    assert_eq!(chained, direct);
}
