use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("unsupported color syntax")]
    UnsupportedSyntax,
    #[error("invalid hex digit")]
    InvalidHexDigit,
    #[error("color component out of range")]
    ComponentOutOfRange,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let lowered = trimmed.to_ascii_lowercase();
        if let Some(body) = lowered
            .strip_prefix("rgba(")
            .or_else(|| lowered.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or(ColorParseError::UnsupportedSyntax)?;
            return Self::parse_components(body);
        }
        Err(ColorParseError::UnsupportedSyntax)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let nibble = |byte: u8| -> Result<u32, ColorParseError> {
            (byte as char)
                .to_digit(16)
                .ok_or(ColorParseError::InvalidHexDigit)
        };
        let bytes = hex.as_bytes();
        let channels: [u32; 4] = match bytes.len() {
            3 | 4 => {
                let mut out = [0u32; 4];
                out[3] = 0xff;
                for (slot, byte) in out.iter_mut().zip(bytes) {
                    let digit = nibble(*byte)?;
                    *slot = digit * 16 + digit;
                }
                out
            }
            6 | 8 => {
                let mut out = [0u32; 4];
                out[3] = 0xff;
                for (slot, pair) in out.iter_mut().zip(bytes.chunks(2)) {
                    *slot = nibble(pair[0])? * 16 + nibble(pair[1])?;
                }
                out
            }
            _ => return Err(ColorParseError::UnsupportedSyntax),
        };
        Ok(Self::rgba(
            channels[0] as f32 / 255.0,
            channels[1] as f32 / 255.0,
            channels[2] as f32 / 255.0,
            channels[3] as f32 / 255.0,
        ))
    }

    fn parse_components(body: &str) -> Result<Self, ColorParseError> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorParseError::UnsupportedSyntax);
        }
        let channel = |raw: &str| -> Result<f32, ColorParseError> {
            let value: f32 = raw
                .parse()
                .map_err(|_| ColorParseError::UnsupportedSyntax)?;
            if !(0.0..=255.0).contains(&value) {
                return Err(ColorParseError::ComponentOutOfRange);
            }
            Ok(value / 255.0)
        };
        let alpha = if parts.len() == 4 {
            let value: f32 = parts[3]
                .parse()
                .map_err(|_| ColorParseError::UnsupportedSyntax)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorParseError::ComponentOutOfRange);
            }
            value
        } else {
            1.0
        };
        Ok(Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn mix(self, other: Color, weight: f32) -> Color {
        let w = weight.clamp(0.0, 1.0);
        Color::rgb(
            self.r + (other.r - self.r) * w,
            self.g + (other.g - self.g) * w,
            self.b + (other.b - self.b) * w,
        )
    }

    pub fn lighten(self, percent: f32) -> Color {
        let mut hsl = self.to_hsl();
        hsl.l = (hsl.l + percent / 100.0).clamp(0.0, 1.0);
        Color::from_hsl(hsl).with_alpha(self.a)
    }

    pub fn darken(self, percent: f32) -> Color {
        self.lighten(-percent)
    }

    pub fn lightness(self) -> f32 {
        self.to_hsl().l
    }

    pub fn hue(self) -> f32 {
        self.to_hsv().h
    }

    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * (((self.g - self.b) / delta).rem_euclid(6.0))
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        Hsv { h, s, v }
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        let h = hsv.h.rem_euclid(360.0) / 60.0;
        let i = h.floor();
        let f = h - i;
        let p = hsv.v * (1.0 - hsv.s);
        let q = hsv.v * (1.0 - f * hsv.s);
        let t = hsv.v * (1.0 - (1.0 - f) * hsv.s);
        let (r, g, b) = match i as u32 % 6 {
            0 => (hsv.v, t, p),
            1 => (q, hsv.v, p),
            2 => (p, hsv.v, t),
            3 => (p, q, hsv.v),
            4 => (t, p, hsv.v),
            _ => (hsv.v, p, q),
        };
        Self::rgb(r, g, b)
    }

    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * (((self.g - self.b) / delta).rem_euclid(6.0))
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };
        Hsl { h, s, l }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = hsl.l - c / 2.0;
        let (r, g, b) = match (h / 60.0) as u32 % 6 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::rgb(r + m, g + m, b + m)
    }

    fn channel8(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn to_css(self) -> String {
        if self.a >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                Self::channel8(self.r),
                Self::channel8(self.g),
                Self::channel8(self.b)
            )
        } else {
            format!(
                "rgba({},{},{},{})",
                Self::channel8(self.r),
                Self::channel8(self.g),
                Self::channel8(self.b),
                format_alpha(self.a)
            )
        }
    }
}

fn format_alpha(alpha: f32) -> String {
    let rounded = (f64::from(alpha) * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
