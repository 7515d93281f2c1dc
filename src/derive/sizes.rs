#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeScale {
    pub xxl: f64,
    pub xl: f64,
    pub lg: f64,
    pub md: f64,
    pub ms: f64,
    pub base: f64,
    pub sm: f64,
    pub xs: f64,
    pub xxs: f64,
}

pub fn size_scale(unit: f64, step: f64) -> SizeScale {
    let at = |offset: f64| (unit * (step + offset)).max(0.0);
    SizeScale {
        xxl: at(8.0),
        xl: at(4.0),
        lg: at(2.0),
        md: at(1.0),
        ms: at(0.0),
        base: at(0.0),
        sm: at(-1.0),
        xs: at(-2.0),
        xxs: at(-3.0),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlHeights {
    pub xs: f64,
    pub sm: f64,
    pub base: f64,
    pub lg: f64,
}

pub fn control_heights(base: f64) -> ControlHeights {
    ControlHeights {
        xs: (base * 0.5).floor(),
        sm: (base * 0.75).floor(),
        base,
        lg: (base * 1.25).floor(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
    pub base: f64,
    pub xs: f64,
    pub sm: f64,
    pub lg: f64,
    pub outer: f64,
}

pub fn radius_scale(base: f64) -> RadiusScale {
    let lg = if base >= 16.0 {
        16.0
    } else if base >= 6.0 {
        base + 2.0
    } else if base >= 5.0 {
        base + 1.0
    } else {
        base
    };
    let sm = if base >= 16.0 {
        8.0
    } else if base >= 14.0 {
        7.0
    } else if base >= 8.0 {
        6.0
    } else if base >= 7.0 {
        5.0
    } else if base >= 5.0 {
        4.0
    } else {
        base
    };
    let xs = if base >= 6.0 {
        2.0
    } else if base >= 2.0 {
        1.0
    } else {
        base
    };
    let outer = if base >= 8.0 {
        6.0
    } else if base > 4.0 {
        4.0
    } else {
        base
    };
    RadiusScale {
        base,
        xs,
        sm,
        lg,
        outer,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotionDurations {
    pub fast: String,
    pub mid: String,
    pub slow: String,
}

pub fn motion_durations(base: f64, unit: f64) -> MotionDurations {
    let at = |steps: f64| format!("{:.1}s", base + unit * steps);
    MotionDurations {
        fast: at(1.0),
        mid: at(2.0),
        slow: at(3.0),
    }
}
