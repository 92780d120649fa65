use crate::coords::Vec2;
use crate::tables::ClipRect;

/// Clip mask shared by every primitive type.
///
/// `1.0` when `world_position` lies inside `clip_in` and outside `clip_out`,
/// `0.0` otherwise. Rounded corners of either rectangle are honored.
#[inline]
pub fn clip_mask(world_position: Vec2, clip_in: &ClipRect, clip_out: &ClipRect) -> f32 {
    if clip_in.contains(world_position) && !clip_out.contains(world_position) {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};

    #[test]
    fn inside_in_and_outside_out_passes() {
        let clip_in = ClipRect::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(clip_mask(Vec2::new(50.0, 50.0), &clip_in, &ClipRect::EMPTY), 1.0);
    }

    #[test]
    fn clip_out_punches_a_hole() {
        let clip_in = ClipRect::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let clip_out = ClipRect::new(Rect::new(40.0, 40.0, 20.0, 20.0));
        assert_eq!(clip_mask(Vec2::new(50.0, 50.0), &clip_in, &clip_out), 0.0);
        assert_eq!(clip_mask(Vec2::new(10.0, 50.0), &clip_in, &clip_out), 1.0);
    }

    #[test]
    fn outside_clip_in_is_masked() {
        let clip_in = ClipRect::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(clip_mask(Vec2::new(15.0, 5.0), &clip_in, &ClipRect::EMPTY), 0.0);
    }

    #[test]
    fn rounded_clip_out_keeps_its_corners() {
        let clip_in = ClipRect::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let clip_out = ClipRect::rounded(Rect::new(0.0, 0.0, 40.0, 40.0), CornerRadii::all(20.0));
        assert_eq!(clip_mask(Vec2::new(1.0, 1.0), &clip_in, &clip_out), 1.0);
        assert_eq!(clip_mask(Vec2::new(20.0, 20.0), &clip_in, &clip_out), 0.0);
    }
}
