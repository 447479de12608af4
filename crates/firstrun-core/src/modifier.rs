use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Alignment {
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub fill_max: bool,
    pub padding: Option<f32>,
    pub background: Option<Color>,
    pub alpha: Option<f32>,
    pub align: Option<Alignment>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    /// Opacity in `[0, 1]`.
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a.clamp(0.0, 1.0));
        self
    }
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Effective opacity, 1.0 when unset.
    pub fn opacity(&self) -> f32 {
        self.alpha.unwrap_or(1.0)
    }
}
