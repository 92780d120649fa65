use crate::config::PipelineConfig;
use crate::error::{LookupError, RampError, TableError, TableKind};
use crate::paint::{Color, ColorStop, ExtendMode};

/// Gradient ramp table: fixed-width rows of colors, one row per gradient.
///
/// Rows are addressed by the 7-bit ramp row carried in a gradient instance's
/// auxiliary field, so a frame holds at most 128 of them.
#[derive(Debug, Clone)]
pub struct GradientRamps {
    width: usize,
    max_rows: usize,
    texels: Vec<Color>,
}

/// Rows addressable by a 7-bit ramp address.
pub const MAX_RAMP_ROWS: usize = 128;

impl GradientRamps {
    pub fn new(width: usize, max_rows: usize) -> Result<Self, RampError> {
        if width < 2 {
            return Err(RampError::BadWidth { width });
        }
        Ok(Self {
            width,
            max_rows: max_rows.min(MAX_RAMP_ROWS),
            texels: Vec::new(),
        })
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self, RampError> {
        Self::new(config.ramp_width, config.ramp_rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.texels.len() / self.width
    }

    pub fn clear(&mut self) {
        self.texels.clear();
    }

    /// Bakes `stops` into a new row and returns its index.
    ///
    /// Stops must be in ascending offset order within `[0, 1]`. Colors are
    /// interpolated linearly between stops; the first and last stop colors are
    /// held outside their offsets.
    pub fn add(&mut self, stops: &[ColorStop]) -> Result<u32, RampError> {
        validate_stops(stops)?;
        let row = self.rows();
        if row >= self.max_rows {
            return Err(TableError::Full {
                table: TableKind::GradientRamp,
                capacity: self.max_rows,
            }
            .into());
        }

        let last = self.width - 1;
        self.texels
            .extend((0..self.width).map(|i| color_at(stops, i as f32 / last as f32)));
        Ok(row as u32)
    }

    pub fn row(&self, row: u32) -> Result<&[Color], LookupError> {
        let start = row as usize * self.width;
        self.texels
            .get(start..start + self.width)
            .ok_or(LookupError::OutOfRange {
                table: TableKind::GradientRamp,
                index: row,
                len: self.rows(),
            })
    }

    /// Looks up the color at gradient offset `t` in `row`.
    ///
    /// The extend mode first maps `t` into `[0, 1]`; the lookup then filters
    /// linearly between the two nearest texels.
    pub fn sample(&self, row: u32, t: f32, extend: ExtendMode) -> Result<Color, LookupError> {
        let texels = self.row(row)?;
        let last = self.width - 1;
        let x = extend.apply(t) * last as f32;
        let i0 = (x.floor().max(0.0) as usize).min(last);
        let i1 = (i0 + 1).min(last);
        Ok(texels[i0].lerp(texels[i1], x - i0 as f32))
    }
}

fn validate_stops(stops: &[ColorStop]) -> Result<(), RampError> {
    if stops.len() < 2 {
        return Err(RampError::TooFewStops { count: stops.len() });
    }
    let mut prev = 0.0;
    for (index, stop) in stops.iter().enumerate() {
        if !stop.offset.is_finite() || !stop.color.is_finite() {
            return Err(RampError::NonFinite { index });
        }
        if stop.offset < prev || stop.offset > 1.0 {
            return Err(RampError::BadStopOffset { index });
        }
        prev = stop.offset;
    }
    Ok(())
}

fn color_at(stops: &[ColorStop], u: f32) -> Color {
    let first = stops[0];
    if u <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if u <= b.offset {
            let du = b.offset - a.offset;
            return if du < 1e-9 { b.color } else { a.color.lerp(b.color, (u - a.offset) / du) };
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn white_to_black() -> Vec<ColorStop> {
        vec![ColorStop::new(0.0, Color::WHITE), ColorStop::new(1.0, Color::BLACK)]
    }

    #[test]
    fn ends_hold_stop_colors() {
        let mut ramps = GradientRamps::new(256, 4).unwrap();
        let row = ramps.add(&white_to_black()).unwrap();
        assert_eq!(ramps.sample(row, 0.0, ExtendMode::Clamp), Ok(Color::WHITE));
        assert_eq!(ramps.sample(row, 1.0, ExtendMode::Clamp), Ok(Color::BLACK));
        assert_eq!(ramps.sample(row, -4.0, ExtendMode::Clamp), Ok(Color::WHITE));
        assert_eq!(ramps.sample(row, 9.0, ExtendMode::Clamp), Ok(Color::BLACK));
    }

    #[test]
    fn midpoint_is_gray() {
        let mut ramps = GradientRamps::new(3, 1).unwrap();
        let row = ramps.add(&white_to_black()).unwrap();
        let mid = ramps.sample(row, 0.5, ExtendMode::Clamp).unwrap();
        assert_eq!(mid, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn stops_inside_the_domain_are_held_outside_them() {
        let stops = [ColorStop::new(0.25, Color::RED), ColorStop::new(0.75, Color::BLACK)];
        let mut ramps = GradientRamps::new(5, 1).unwrap();
        let row = ramps.add(&stops).unwrap();
        let texels = ramps.row(row).unwrap();
        assert_eq!(texels[0], Color::RED);
        assert_eq!(texels[4], Color::BLACK);
    }

    #[test]
    fn rejects_bad_stops() {
        let mut ramps = GradientRamps::new(16, 4).unwrap();
        assert_eq!(ramps.add(&[ColorStop::new(0.0, Color::WHITE)]), Err(RampError::TooFewStops { count: 1 }));
        let unsorted = [ColorStop::new(0.6, Color::WHITE), ColorStop::new(0.2, Color::BLACK)];
        assert_eq!(ramps.add(&unsorted), Err(RampError::BadStopOffset { index: 1 }));
    }

    #[test]
    fn full_table_is_reported() {
        let mut ramps = GradientRamps::new(4, 1).unwrap();
        ramps.add(&white_to_black()).unwrap();
        assert_eq!(
            ramps.add(&white_to_black()),
            Err(RampError::Table(TableError::Full { table: TableKind::GradientRamp, capacity: 1 }))
        );
    }

    #[test]
    fn missing_row_is_out_of_range() {
        let ramps = GradientRamps::new(4, 1).unwrap();
        assert!(ramps.sample(0, 0.5, ExtendMode::Clamp).is_err());
    }

    proptest! {
        #[test]
        fn clamp_sampling_is_idempotent(t in -2.0f32..3.0) {
            let mut ramps = GradientRamps::new(64, 1).unwrap();
            let row = ramps.add(&white_to_black()).unwrap();
            prop_assert_eq!(
                ramps.sample(row, t, ExtendMode::Clamp),
                ramps.sample(row, t, ExtendMode::Clamp)
            );
        }

        #[test]
        fn repeat_sampling_is_periodic(k in -256i32..256, period in -4i32..4) {
            let mut ramps = GradientRamps::new(64, 1).unwrap();
            let row = ramps.add(&white_to_black()).unwrap();
            // Multiples of 1/64 keep `t` and `t + period` exact in f32.
            let t = k as f32 / 64.0;
            prop_assert_eq!(
                ramps.sample(row, t, ExtendMode::Repeat),
                ramps.sample(row, t + period as f32, ExtendMode::Repeat)
            );
        }
    }
}
