use crate::color::{Color, Hsv};

pub const RAMP_LEN: usize = 10;
pub const RAMP_BASE_INDEX: usize = 5;

const HUE_STEP: f32 = 2.0;
const SATURATION_STEP: f32 = 0.16;
const SATURATION_STEP2: f32 = 0.05;
const BRIGHTNESS_STEP1: f32 = 0.05;
const BRIGHTNESS_STEP2: f32 = 0.15;
const LIGHT_COLOR_COUNT: i32 = 5;
const DARK_COLOR_COUNT: i32 = 4;

// (source index, blend weight) pairs used to rebuild the ramp against a dark
// surface instead of white paper.
const DARK_BLEND: [(usize, f32); RAMP_LEN] = [
    (7, 0.15),
    (6, 0.25),
    (5, 0.3),
    (5, 0.45),
    (5, 0.65),
    (5, 0.85),
    (4, 0.9),
    (3, 0.95),
    (2, 0.97),
    (1, 0.98),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorRamp {
    steps: [Color; RAMP_LEN],
}

impl ColorRamp {
    pub fn get(&self, index: usize) -> Color {
        self.steps[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.steps.iter()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.steps.iter().any(|step| step.to_css() == color.to_css())
    }
}

impl std::ops::Index<usize> for ColorRamp {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.steps[index]
    }
}

pub fn tonal_ramp(seed: Color) -> ColorRamp {
    let mut steps = [Color::default(); RAMP_LEN];
    let hsv = seed.to_hsv();
    for i in 1..=LIGHT_COLOR_COUNT {
        steps[(LIGHT_COLOR_COUNT - i) as usize] = Color::from_hsv(Hsv {
            h: shift_hue(&hsv, i, true),
            s: shift_saturation(&hsv, i, true),
            v: shift_value(&hsv, i, true),
        });
    }
    steps[LIGHT_COLOR_COUNT as usize] = seed;
    for i in 1..=DARK_COLOR_COUNT {
        steps[(LIGHT_COLOR_COUNT + i) as usize] = Color::from_hsv(Hsv {
            h: shift_hue(&hsv, i, false),
            s: shift_saturation(&hsv, i, false),
            v: shift_value(&hsv, i, false),
        });
    }
    ColorRamp { steps }
}

pub fn tonal_ramp_on(seed: Color, background: Color) -> ColorRamp {
    let light = tonal_ramp(seed);
    let mut steps = [Color::default(); RAMP_LEN];
    for (slot, (index, weight)) in steps.iter_mut().zip(DARK_BLEND) {
        *slot = background.mix(light.get(index), weight);
    }
    ColorRamp { steps }
}

fn shift_hue(hsv: &Hsv, i: i32, light: bool) -> f32 {
    let rounded = hsv.h.round();
    let rotate_down = (60.0..=240.0).contains(&rounded) == light;
    let mut hue = if rotate_down {
        rounded - HUE_STEP * i as f32
    } else {
        rounded + HUE_STEP * i as f32
    };
    if hue < 0.0 {
        hue += 360.0;
    } else if hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}

fn shift_saturation(hsv: &Hsv, i: i32, light: bool) -> f32 {
    // Greys keep their (zero) saturation so neutral seeds stay neutral.
    if hsv.h == 0.0 && hsv.s == 0.0 {
        return hsv.s;
    }
    let mut saturation = if light {
        hsv.s - SATURATION_STEP * i as f32
    } else if i == DARK_COLOR_COUNT {
        hsv.s + SATURATION_STEP
    } else {
        hsv.s + SATURATION_STEP2 * i as f32
    };
    saturation = saturation.min(1.0);
    if light && i == LIGHT_COLOR_COUNT && saturation > 0.1 {
        saturation = 0.1;
    }
    saturation = saturation.max(0.06);
    round2(saturation)
}

fn shift_value(hsv: &Hsv, i: i32, light: bool) -> f32 {
    let value = if light {
        hsv.v + BRIGHTNESS_STEP1 * i as f32
    } else {
        hsv.v - BRIGHTNESS_STEP2 * i as f32
    };
    round2(value.min(1.0))
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_keeps_the_seed_at_the_base_index() {
        let seed = Color::parse("#1677ff").unwrap();
        let ramp = tonal_ramp(seed);
        assert_eq!(ramp.get(RAMP_BASE_INDEX).to_css(), "#1677ff");
    }

    #[test]
    fn ramp_lightness_is_strictly_decreasing() {
        for seed in ["#1677ff", "#52c41a", "#faad14", "#ff4d4f"] {
            let ramp = tonal_ramp(Color::parse(seed).unwrap());
            for pair in ramp.steps.windows(2) {
                assert!(
                    pair[0].lightness() > pair[1].lightness(),
                    "ramp for {seed} is not monotonic"
                );
            }
        }
    }

    #[test]
    fn dark_ramp_lightness_is_strictly_increasing() {
        let background = Color::parse("#141414").unwrap();
        let ramp = tonal_ramp_on(Color::parse("#1677ff").unwrap(), background);
        for pair in ramp.steps.windows(2) {
            assert!(pair[0].lightness() < pair[1].lightness());
        }
    }

    #[test]
    fn grey_seed_stays_grey_across_the_ramp() {
        let ramp = tonal_ramp(Color::parse("#808080").unwrap());
        for step in ramp.iter() {
            assert_eq!(step.to_hsv().s, 0.0);
        }
    }

    #[test]
    fn ramp_is_deterministic() {
        let seed = Color::parse("#1677ff").unwrap();
        let first: Vec<String> = tonal_ramp(seed).iter().map(|c| c.to_css()).collect();
        let second: Vec<String> = tonal_ramp(seed).iter().map(|c| c.to_css()).collect();
        assert_eq!(first, second);
    }
}
