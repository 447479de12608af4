use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn interpolate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::fade()
    }
}

impl AnimationSpec {
    pub fn tween(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Overlay cross-fade used between onboarding cards.
    pub fn fade() -> Self {
        Self {
            duration: Duration::from_millis(250),
            easing: Easing::EaseInOut,
        }
    }
}

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

pub trait Clock {
    fn now(&self) -> Instant;
}

pub type SharedClock = Rc<dyn Clock>;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock tests advance by hand. Clones share the same time.
#[derive(Clone)]
pub struct TestClock {
    t: Rc<Cell<Instant>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClock {
    pub fn new() -> Self {
        Self {
            t: Rc::new(Cell::new(Instant::now())),
        }
    }
    pub fn advance(&self, by: Duration) {
        self.t.set(self.t.get() + by);
    }
}

impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t.get()
    }
}

/// Value that moves towards a target over `spec.duration`.
///
/// Retargeting mid-flight restarts from the value currently shown, so the most
/// recent target always wins and nothing jumps.
#[derive(Debug, Clone)]
pub struct AnimatedValue<T: Interpolate + Clone> {
    current: T,
    target: T,
    start: T,
    spec: AnimationSpec,
    start_time: Option<Instant>,
}

impl<T: Interpolate + Clone + PartialEq> AnimatedValue<T> {
    pub fn new(initial: T, spec: AnimationSpec) -> Self {
        Self {
            current: initial.clone(),
            target: initial.clone(),
            start: initial,
            spec,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: T, now: Instant) {
        if target == self.target {
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        if self.spec.duration.is_zero() {
            self.current = self.target.clone();
            self.start_time = None;
        } else {
            self.start_time = Some(now);
        }
    }

    /// Advance to `now`; returns true while still animating.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.spec.duration {
            self.current = self.target.clone();
            self.start_time = None;
            return false;
        }
        let t = elapsed.as_secs_f32() / self.spec.duration.as_secs_f32();
        self.current = self.start.interpolate(&self.target, self.spec.easing.interpolate(t));
        true
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn is_animating(&self) -> bool {
        self.start_time.is_some()
    }
}
