//! Decorative effects. None of these carry state worth persisting; the
//! frontend drives them from fire-and-forget timers.

use std::time::Duration;

pub const REVEAL_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.2;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PARTICLE_LIMIT: usize = 15;
pub const PARTICLE_SPAWN_SPACING: Duration = Duration::from_millis(1_000);
pub const PARTICLE_TOP_UP_EVERY: Duration = Duration::from_millis(2_000);

pub const LOADING_MIN_VISIBLE: Duration = Duration::from_millis(2_000);
pub const LOADING_FALLBACK: Duration = Duration::from_millis(5_000);
pub const LOADING_FADE_OUT: Duration = Duration::from_millis(500);

pub const IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/300x400/8B4513/FFFFFF?text=Image+Not+Found";
pub const IMAGE_PLACEHOLDER_ALT: &str = "Image not available";

/// How long a filtered-out portfolio card fades before it leaves the grid.
pub const CARD_FADE_OUT: Duration = Duration::from_millis(300);

/// Inline style for a portfolio card. A hidden card holds its grid slot only
/// while it fades; once `collapsed` it is `display: none` and unreachable.
pub fn portfolio_card_style(visible: bool, delay_ms: Option<u32>, collapsed: bool) -> String {
    match (visible, delay_ms) {
        (true, Some(delay)) => format!(
            "display: block; opacity: 1; transform: translateY(0); transition-delay: {delay}ms;"
        ),
        (true, None) => "display: block; opacity: 1; transform: translateY(0);".to_string(),
        (false, _) if collapsed => {
            "display: none; opacity: 0; transform: translateY(20px);".to_string()
        }
        (false, _) => {
            "display: block; opacity: 0; transform: translateY(20px); pointer-events: none;"
                .to_string()
        }
    }
}

/// Inline style for a blog post; hidden posts drop out of the grid at once.
pub fn blog_post_style(visible: bool, delay_ms: Option<u32>) -> String {
    match (visible, delay_ms) {
        (true, Some(delay)) => format!("animation-delay: {:.1}s;", f64::from(delay) / 1_000.0),
        (true, None) => String::new(),
        (false, _) => "display: none;".to_string(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub size_px: f64,
    pub left_percent: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Particle {
    /// `random` yields values in `[0, 1)`.
    pub fn spawn(id: u64, mut random: impl FnMut() -> f64) -> Self {
        Self {
            id,
            size_px: random() * 6.0 + 2.0,
            left_percent: random() * 100.0,
            delay_s: random() * 20.0,
            duration_s: 20.0 + random() * 10.0,
        }
    }

    pub fn lifetime(&self) -> Duration {
        Duration::from_secs_f64(self.duration_s)
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s;",
            size = self.size_px,
            left = self.left_percent,
            delay = self.delay_s,
            duration = self.duration_s,
        )
    }
}

pub fn should_top_up_particles(live: usize) -> bool {
    live < PARTICLE_LIMIT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Visible,
    Hiding,
    Removed,
}

impl LoadingPhase {
    /// Hiding is one-way; a second trigger (load after fallback) is ignored.
    pub fn hide(self) -> Self {
        match self {
            Self::Visible => Self::Hiding,
            other => other,
        }
    }

    pub fn remove(self) -> Self {
        match self {
            Self::Hiding => Self::Removed,
            other => other,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Visible => "loading-screen",
            Self::Hiding | Self::Removed => "loading-screen hidden",
        }
    }
}

/// Random offset for a floating decoration, `random` in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
}

impl Jitter {
    pub fn book(mut random: impl FnMut() -> f64) -> Self {
        Self {
            x: (random() - 0.5) * 20.0,
            y: (random() - 0.5) * 20.0,
            rotate_deg: (random() - 0.5) * 10.0,
        }
    }

    pub fn quote(mut random: impl FnMut() -> f64) -> Self {
        Self {
            x: (random() - 0.5) * 30.0,
            y: (random() - 0.5) * 30.0,
            rotate_deg: 0.0,
        }
    }

    pub fn transform(&self) -> String {
        if self.rotate_deg == 0.0 {
            format!("transform: translate({:.2}px, {:.2}px);", self.x, self.y)
        } else {
            format!(
                "transform: translate({:.2}px, {:.2}px) rotate({:.2}deg);",
                self.x, self.y, self.rotate_deg
            )
        }
    }
}

pub fn book_jitter_period(index: usize) -> Duration {
    Duration::from_millis(3_000 + index as u64 * 1_000)
}

pub fn quote_jitter_period(index: usize) -> Duration {
    Duration::from_millis(4_000 + index as u64 * 1_500)
}

pub fn entrance_delay(index: usize) -> Duration {
    Duration::from_millis(200 + index as u64 * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_portfolio_card_leaves_layout_after_fade() {
        let fading = portfolio_card_style(false, None, false);
        assert_eq!(fading.contains("opacity: 0"), true);
        assert_eq!(fading.contains("pointer-events: none"), true);
        assert_eq!(fading.contains("display: none"), false);

        let collapsed = portfolio_card_style(false, None, true);
        assert_eq!(collapsed.starts_with("display: none;"), true);
        assert_eq!(CARD_FADE_OUT.as_millis(), 300);
    }

    #[test]
    fn visible_portfolio_card_is_laid_out_regardless_of_collapse_flag() {
        for collapsed in [false, true] {
            let style = portfolio_card_style(true, Some(200), collapsed);
            assert_eq!(style.contains("display: none"), false);
            assert_eq!(style.contains("transition-delay: 200ms;"), true);
        }
        assert_eq!(
            portfolio_card_style(true, None, true),
            "display: block; opacity: 1; transform: translateY(0);"
        );
    }

    #[test]
    fn blog_post_style_hides_filtered_posts() {
        assert_eq!(blog_post_style(false, None), "display: none;");
        assert_eq!(blog_post_style(true, Some(300)), "animation-delay: 0.3s;");
        assert_eq!(blog_post_style(true, None), "");
    }

    #[test]
    fn particle_ranges_follow_random_source() {
        let low = Particle::spawn(1, || 0.0);
        assert_eq!(low.size_px, 2.0);
        assert_eq!(low.left_percent, 0.0);
        assert_eq!(low.duration_s, 20.0);

        let high = Particle::spawn(2, || 0.999);
        assert!(high.size_px < 8.0);
        assert!(high.left_percent < 100.0);
        assert!(high.delay_s < 20.0);
        assert!(high.duration_s < 30.0);
        assert_eq!(high.lifetime().as_secs(), 29);
    }

    #[test]
    fn particle_top_up_stops_at_limit() {
        assert_eq!(should_top_up_particles(14), true);
        assert_eq!(should_top_up_particles(15), false);
    }

    #[test]
    fn loading_screen_hides_once() {
        let phase = LoadingPhase::Visible.hide();
        assert_eq!(phase, LoadingPhase::Hiding);
        assert_eq!(LoadingPhase::Removed.hide(), LoadingPhase::Removed);
        assert_eq!(phase.class(), "loading-screen hidden");
        assert_eq!(phase.remove(), LoadingPhase::Removed);
        assert_eq!(LoadingPhase::Visible.remove(), LoadingPhase::Visible);
    }

    #[test]
    fn jitter_bounds() {
        let book = Jitter::book(|| 0.0);
        assert_eq!((book.x, book.y, book.rotate_deg), (-10.0, -10.0, -5.0));

        let quote = Jitter::quote(|| 1.0);
        assert_eq!((quote.x, quote.y), (15.0, 15.0));
        assert_eq!(quote.transform(), "transform: translate(15.00px, 15.00px);");
    }

    #[test]
    fn timing_schedules() {
        assert_eq!(book_jitter_period(2).as_millis(), 5_000);
        assert_eq!(quote_jitter_period(2).as_millis(), 7_000);
        assert_eq!(entrance_delay(3).as_millis(), 500);
    }
}
