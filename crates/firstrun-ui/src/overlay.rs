//! Opacity of each card's text overlay.

use firstrun_core::{AnimatedValue, AnimationSpec, Instant};

/// One alpha tween per card. At rest exactly one overlay is opaque.
#[derive(Debug, Clone)]
pub struct OverlayFader {
    alphas: Vec<AnimatedValue<f32>>,
}

impl OverlayFader {
    /// Overlay `visible` starts fully opaque, every other one hidden.
    pub fn new(count: usize, visible: usize, spec: AnimationSpec) -> Self {
        let alphas = (0..count)
            .map(|i| AnimatedValue::new(if i == visible { 1.0 } else { 0.0 }, spec))
            .collect();
        Self { alphas }
    }

    pub fn len(&self) -> usize {
        self.alphas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alphas.is_empty()
    }

    /// Fade `index` in and all others out. A call made while an earlier fade
    /// is still running retargets from the current alphas.
    pub fn show(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.alphas.len() {
            return false;
        }
        for (i, a) in self.alphas.iter_mut().enumerate() {
            a.set_target(if i == index { 1.0 } else { 0.0 }, now);
        }
        true
    }

    /// Whether `index` is the overlay currently being faded to (or resting at) full opacity.
    pub fn is_shown(&self, index: usize) -> bool {
        self.alphas.get(index).is_some_and(|a| *a.target() == 1.0)
    }

    /// Advance every tween; true while any is still running.
    pub fn update(&mut self, now: Instant) -> bool {
        self.alphas
            .iter_mut()
            .fold(false, |running, a| a.update(now) || running)
    }

    pub fn is_animating(&self) -> bool {
        self.alphas.iter().any(|a| a.is_animating())
    }

    pub fn alpha(&self, index: usize) -> f32 {
        self.alphas.get(index).map_or(0.0, |a| *a.get())
    }

    pub fn alphas(&self) -> Vec<f32> {
        self.alphas.iter().map(|a| *a.get()).collect()
    }
}
