use crate::config::NavConfig;
use crate::sampler::ScrollSample;

/// The part of the navbar state that scroll motion controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    /// Elevated style once the page has left the very top.
    pub scrolled: bool,
    /// Bar slid off-screen.
    pub hidden: bool,
    pub mobile_menu_open: bool,
}

/// Classify one scroll sample.
///
/// Rules are applied in order:
/// 1. `scrolled` is a plain threshold on the offset.
/// 2. Moving down by more than the hysteresis threshold hides the bar and
///    closes the mobile menu.
/// 3. Moving up by more than the threshold reveals the bar.
/// 4. Near the top of the page the bar is always revealed, overriding 2-3.
///
/// Deltas inside the dead band leave `hidden` as it was.
pub fn evaluate(prior: Visibility, sample: ScrollSample, config: &NavConfig) -> Visibility {
    let mut next = prior;
    next.scrolled = sample.offset > config.scrolled_threshold;

    if sample.delta > config.hysteresis_threshold {
        next.hidden = true;
        next.mobile_menu_open = false;
    } else if sample.delta < -config.hysteresis_threshold {
        next.hidden = false;
    }

    if sample.offset <= config.top_reveal_offset {
        next.hidden = false;
    }

    next
}
