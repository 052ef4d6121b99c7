/// Expand/collapse transition curve for list panels
///
/// Pure computation of the CSS fragment the frontend applies while a panel
/// expands (t runs 0 -> 1) or collapses (1 -> 0). At t=0 the clip polygon
/// is collapsed to the origin and the negative margins swallow the full
/// element size; at t=1 the polygon covers the element and margins are 0.

/// Default transition duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Measured element bounds plus the transition duration
#[derive(Debug, Clone, Copy)]
pub struct CollapseTransition {
    pub width: f64,
    pub height: f64,
    pub duration_ms: u64,
}

impl CollapseTransition {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// CSS fragment at curve parameter `t` in [0, 1]
    pub fn css_at(&self, t: f64) -> String {
        let p = t * 100.0;
        let m = t - 1.0;

        format!(
            "clip-path: polygon(0 0, {p}% 0, {p}% {p}%, 0 {p}%);\n\
             margin-right: calc(({m})*{w}px);\n\
             margin-bottom: calc(({m})*{h}px);\n\
             overflow-y: hidden",
            p = p,
            m = m,
            w = self.width,
            h = self.height,
        )
    }
}
