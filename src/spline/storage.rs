use super::{
    basis::{InterpolationStyle, SegmentMatrix},
    knot::Knot,
};
use std::mem::size_of;

/// Bytes needed to back a spline of the given style holding up to `max_knots` knots.
pub fn required_buffer_size(style: InterpolationStyle, max_knots: usize) -> usize {
    if max_knots == 0 {
        return 0;
    }

    max_knots * size_of::<Knot>() + style.segment_count(max_knots) * size_of::<SegmentMatrix>()
}

/// Caller-provided backing memory for a [`Spline`](super::Spline): one region of
/// knot slots and one region of segment slots. Both are sized once here and
/// never grown or shrunk afterwards.
#[derive(Clone, Debug)]
pub struct SplineStorage {
    pub(super) knots: Vec<Knot>,
    pub(super) segments: Vec<SegmentMatrix>,
}

impl SplineStorage {
    pub fn with_slots(knot_slots: usize, segment_slots: usize) -> Self {
        Self {
            knots: vec![Knot::default(); knot_slots],
            segments: vec![SegmentMatrix::zeros(); segment_slots],
        }
    }

    pub fn for_style(style: InterpolationStyle, max_knots: usize) -> Self {
        Self::with_slots(max_knots, style.segment_count(max_knots))
    }

    pub fn knot_slots(&self) -> usize {
        self.knots.len()
    }

    pub fn segment_slots(&self) -> usize {
        self.segments.len()
    }

    pub fn byte_size(&self) -> usize {
        self.knot_slots() * size_of::<Knot>() + self.segment_slots() * size_of::<SegmentMatrix>()
    }

    pub(super) fn fits(&self, style: InterpolationStyle, max_knots: usize) -> bool {
        self.byte_size() >= required_buffer_size(style, max_knots)
            && self.knot_slots() >= max_knots
            && self.segment_slots() >= style.segment_count(max_knots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [InterpolationStyle; 4] = [
        InterpolationStyle::Hermite,
        InterpolationStyle::Bezier,
        InterpolationStyle::Cardinal,
        InterpolationStyle::CentripetalCatmullRom,
    ];

    #[test]
    fn empty_capacity_needs_no_bytes() {
        for style in STYLES {
            assert_eq!(required_buffer_size(style, 0), 0);
        }
    }

    #[test]
    fn required_size_counts_both_regions() {
        let knot = size_of::<Knot>();
        let segment = size_of::<SegmentMatrix>();

        assert_eq!(required_buffer_size(InterpolationStyle::Hermite, 1), knot);
        assert_eq!(
            required_buffer_size(InterpolationStyle::Bezier, 10),
            10 * knot + 9 * segment
        );
        assert_eq!(
            required_buffer_size(InterpolationStyle::Cardinal, 3),
            3 * knot
        );
        assert_eq!(
            required_buffer_size(InterpolationStyle::CentripetalCatmullRom, 10),
            10 * knot + 7 * segment
        );
    }

    #[test]
    fn storage_for_style_is_exact() {
        for style in STYLES {
            for max_knots in 0..8 {
                let storage = SplineStorage::for_style(style, max_knots);
                assert_eq!(storage.byte_size(), required_buffer_size(style, max_knots));
                assert!(storage.fits(style, max_knots));
            }
        }
    }

    #[test]
    fn missing_slot_does_not_fit() {
        let style = InterpolationStyle::Hermite;
        assert!(!SplineStorage::with_slots(4, 2).fits(style, 4));
        assert!(!SplineStorage::with_slots(3, 3).fits(style, 4));
        // Enough bytes overall, but laid out in the wrong region.
        assert!(!SplineStorage::with_slots(3, 10).fits(style, 4));
    }
}
