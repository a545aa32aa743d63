use crate::config::WheelConfig;
use crate::random::RandomSource;
use crate::timer::Scheduler;
use std::fmt;
use std::time::{Duration, Instant};

/// Cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn sample_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Progress along the curve for an elapsed fraction `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection if the slope is too flat to trust.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return Self::sample(self.y1, self.y2, t);
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

/// Spin length and the easing curve it is tuned for. Kept together so they
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub duration: Duration,
    pub easing: CubicBezier,
}

pub const SPIN_ANIMATION: SpinAnimation = SpinAnimation {
    duration: Duration::from_millis(6000),
    easing: CubicBezier::new(0.25, 0.1, 0.25, 1.0),
};

const MIN_FULL_TURNS: usize = 5;
const EXTRA_TURN_CHOICES: usize = 4;
const JITTER_SPAN: f64 = 0.8;
const LABEL_RADIUS_FACTOR: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Point on a circle, with 0° at 12 o'clock and angles growing clockwise
    /// (screen coordinates, y pointing down).
    pub fn on_circle(center: f64, radius: f64, degrees: f64) -> Self {
        let radians = (degrees - 90.0).to_radians();
        Self {
            x: center + radius * radians.cos(),
            y: center + radius * radians.sin(),
        }
    }
}

/// Pie-slice outline: center, straight edge to `start`, arc to `end`, close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPath {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl fmt::Display for SectorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {},{} L {},{} A {},{} 0 {} 1 {},{} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelSegment {
    pub number: u32,
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub path: SectorPath,
    pub label: LabelAnchor,
    pub color_index: usize,
    pub active: bool,
}

impl WheelSegment {
    pub fn span_degrees(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }

    pub fn mid_degrees(&self) -> f64 {
        self.label.rotation_degrees
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WheelEffect {
    Settle { number: u32 },
}

#[derive(Debug, Clone, Copy)]
struct SpinInFlight {
    started_at: Instant,
    from_degrees: f64,
}

/// Numbered wheel that draws each segment at most once per initialization.
#[derive(Debug)]
pub struct SelectionWheel<R> {
    config: WheelConfig,
    segments: Vec<WheelSegment>,
    rotation_degrees: f64,
    spinning: bool,
    in_flight: Option<SpinInFlight>,
    last_drawn_number: Option<u32>,
    rng: R,
    timers: Scheduler<WheelEffect>,
}

impl<R: RandomSource> SelectionWheel<R> {
    pub fn new(config: WheelConfig, rng: R) -> Self {
        let mut wheel = Self {
            config,
            segments: Vec::new(),
            rotation_degrees: 0.0,
            spinning: false,
            in_flight: None,
            last_drawn_number: None,
            rng,
            timers: Scheduler::new(),
        };
        wheel.rebuild();
        wheel
    }

    /// Regenerate every segment from `config`, reviving eliminated ones and
    /// discarding any spin still in flight.
    pub fn initialize(&mut self, config: WheelConfig) {
        self.config = config;
        self.rebuild();
    }

    /// [`SelectionWheel::initialize`] with the current configuration.
    pub fn reinitialize(&mut self) {
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.timers.invalidate();
        self.segments = build_segments(&self.config);
        self.rotation_degrees = 0.0;
        self.spinning = false;
        self.in_flight = None;
        self.last_drawn_number = None;
        tracing::debug!(segments = self.segments.len(), "wheel initialized");
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn spinning(&self) -> bool {
        self.spinning
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn last_drawn_number(&self) -> Option<u32> {
        self.last_drawn_number
    }

    pub fn active_count(&self) -> usize {
        self.segments.iter().filter(|s| s.active).count()
    }

    pub fn all_segments_inactive(&self) -> bool {
        self.segments.iter().all(|s| !s.active)
    }

    pub fn segment_angle(&self) -> f64 {
        segment_angle(self.segments.len())
    }

    pub fn color_of(&self, segment: &WheelSegment) -> Option<&str> {
        self.config
            .palette
            .get(segment.color_index)
            .map(String::as_str)
    }

    /// Start a draw. Returns `false` (and changes nothing) while a spin is in
    /// flight or once every segment has been drawn.
    pub fn spin(&mut self, now: Instant) -> bool {
        if self.spinning {
            return false;
        }
        let active: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| i)
            .collect();
        if active.is_empty() {
            return false;
        }

        let segment_index = active[self.rng.next_index(active.len())];
        let number = self.segments[segment_index].number;
        let step = self.segment_angle();

        let full_turns = MIN_FULL_TURNS + self.rng.next_index(EXTRA_TURN_CHOICES);
        let correction = segment_index as f64 * step + step / 2.0;
        let jitter = (self.rng.next_unit() - 0.5) * step * JITTER_SPAN;
        let final_angle = (full_turns * 360) as f64 - correction + jitter;

        let from_degrees = self.rotation_degrees;
        self.rotation_degrees = from_degrees - from_degrees.rem_euclid(360.0) + final_angle;
        self.spinning = true;
        self.last_drawn_number = None;
        self.in_flight = Some(SpinInFlight {
            started_at: now,
            from_degrees,
        });
        self.timers.schedule(
            now,
            SPIN_ANIMATION.duration,
            WheelEffect::Settle { number },
        );

        tracing::info!(
            number,
            full_turns,
            target = self.rotation_degrees,
            remaining = active.len() - 1,
            "wheel spin started"
        );
        true
    }

    /// Settle a finished spin. Returns the drawn number when one lands.
    pub fn advance(&mut self, now: Instant) -> Option<u32> {
        let mut drawn = None;
        for effect in self.timers.drain_due(now) {
            match effect {
                WheelEffect::Settle { number } => {
                    self.spinning = false;
                    self.in_flight = None;
                    self.last_drawn_number = Some(number);
                    if let Some(segment) = self.segments.iter_mut().find(|s| s.number == number) {
                        segment.active = false;
                    }
                    tracing::info!(number, "wheel settled");
                    drawn = Some(number);
                }
            }
        }
        drawn
    }

    /// Rotation to draw at `now`, following the easing curve while spinning.
    pub fn displayed_rotation(&self, now: Instant) -> f64 {
        match self.in_flight {
            Some(spin) if self.spinning => {
                let elapsed = now.saturating_duration_since(spin.started_at);
                let fraction =
                    (elapsed.as_secs_f64() / SPIN_ANIMATION.duration.as_secs_f64()).min(1.0);
                let progress = SPIN_ANIMATION.easing.ease(fraction);
                spin.from_degrees + (self.rotation_degrees - spin.from_degrees) * progress
            }
            _ => self.rotation_degrees,
        }
    }

    /// Index of the segment under the fixed top pointer for a wheel turned by
    /// `rotation_degrees` clockwise.
    pub fn segment_under_pointer(&self, rotation_degrees: f64) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }
        let step = self.segment_angle();
        let angle = (-rotation_degrees).rem_euclid(360.0);
        Some(((angle / step).floor() as usize).min(self.segments.len() - 1))
    }
}

fn segment_angle(count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        360.0 / count as f64
    }
}

/// Split the full circle into `segment_count` equal sectors, numbered from 1.
pub fn build_segments(config: &WheelConfig) -> Vec<WheelSegment> {
    let count = config.segment_count;
    let step = segment_angle(count);
    let radius = config.radius;
    let center = config.center;
    let palette_len = config.palette.len().max(1);

    (0..count)
        .map(|i| {
            let start_degrees = i as f64 * step;
            let end_degrees = (i + 1) as f64 * step;
            let mid_degrees = start_degrees + step / 2.0;
            let label_point = Point::on_circle(center, radius * LABEL_RADIUS_FACTOR, mid_degrees);

            WheelSegment {
                number: (i + 1) as u32,
                start_degrees,
                end_degrees,
                path: SectorPath {
                    center: Point {
                        x: center,
                        y: center,
                    },
                    radius,
                    start: Point::on_circle(center, radius, start_degrees),
                    end: Point::on_circle(center, radius, end_degrees),
                    large_arc: step > 180.0,
                },
                label: LabelAnchor {
                    x: label_point.x,
                    y: label_point.y,
                    rotation_degrees: mid_degrees,
                },
                color_index: i % palette_len,
                active: true,
            }
        })
        .collect()
}
