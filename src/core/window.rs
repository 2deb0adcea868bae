use std::ops::Range;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN: f64 = 1.0;

/// Closed interval used for one plot axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Range that covers every finite value, widened by `padding_ratio` of its span on each
    /// side. Empty or non-finite input falls back to `[0, 1]`.
    pub fn covering<I>(values: I, padding_ratio: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let bounds = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            });

        let Some((lo, hi)) = bounds else {
            return Self {
                min: 0.0,
                max: MIN_SPAN,
            };
        };

        let span = hi - lo;
        if span <= f64::EPSILON * lo.abs().max(1.0) {
            let half = (lo.abs() * padding_ratio).max(MIN_SPAN * 0.5);
            return Self {
                min: lo - half,
                max: hi + half,
            };
        }

        let pad = span * padding_ratio;
        Self {
            min: lo - pad,
            max: hi + pad,
        }
    }

    /// Grows the range so it contains zero; ground level stays visible.
    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` inside the range, 0 at `min` and 1 at `max`.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    pub fn as_range(&self) -> Range<f64> {
        self.min..self.max
    }
}

/// Horizontal and vertical ranges for one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl AxisWindow {
    pub fn covering(xs: &[f64], ys: &[f64]) -> Self {
        Self {
            x: AxisRange::covering(xs.iter().copied(), X_PADDING_RATIO),
            y: AxisRange::covering(ys.iter().copied(), Y_PADDING_RATIO),
        }
    }

    /// Window for several curves sharing one x axis, such as x(t) and y(t).
    pub fn covering_curves(xs: &[f64], curves: &[&[f64]]) -> Self {
        Self {
            x: AxisRange::covering(xs.iter().copied(), X_PADDING_RATIO),
            y: AxisRange::covering(
                curves.iter().flat_map(|c| c.iter().copied()),
                Y_PADDING_RATIO,
            ),
        }
    }

    pub fn including_origin(self) -> Self {
        Self {
            x: self.x.including_zero(),
            y: self.y.including_zero(),
        }
    }
}
