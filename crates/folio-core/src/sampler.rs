use crate::geometry::PageGeometry;

/// One scroll reading together with the signed distance travelled since the
/// previous reading. Positive `delta` means the page moved down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f32,
    pub delta: f32,
}

/// The only piece of the core that reads the live scroll position.
///
/// Everything downstream works on [`ScrollSample`]s, so it can be driven with
/// synthetic values.
#[derive(Clone, Debug, Default)]
pub struct ScrollSampler {
    previous: f32,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a reading. The delta is computed against the stored offset
    /// before the stored offset is replaced.
    pub fn sample(&mut self, raw_offset: f32) -> ScrollSample {
        let offset = sanitize_offset(raw_offset);
        let delta = offset - self.previous;
        self.previous = offset;
        ScrollSample { offset, delta }
    }

    pub fn sample_geometry(&mut self, geometry: &dyn PageGeometry) -> ScrollSample {
        self.sample(geometry.scroll_offset())
    }
}

/// Overscroll can report negative offsets and a detached container can
/// report NaN; both read as the top of the page.
pub(crate) fn sanitize_offset(raw: f32) -> f32 {
    if raw.is_finite() {
        raw.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_measures_from_zero() {
        let mut sampler = ScrollSampler::new();
        let s = sampler.sample(120.0);
        assert_eq!(s, ScrollSample { offset: 120.0, delta: 120.0 });
    }

    #[test]
    fn delta_is_signed() {
        let mut sampler = ScrollSampler::new();
        sampler.sample(300.0);
        let up = sampler.sample(280.0);
        assert_eq!(up.delta, -20.0);
        let down = sampler.sample(295.0);
        assert_eq!(down.delta, 15.0);
    }

    #[test]
    fn negative_and_nan_offsets_read_as_top() {
        let mut sampler = ScrollSampler::new();
        sampler.sample(40.0);
        let s = sampler.sample(-12.0);
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.delta, -40.0);
        let s = sampler.sample(f32::NAN);
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.delta, 0.0);
    }
}
