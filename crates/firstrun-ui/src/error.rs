#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("onboarding needs at least one card with a resolvable image")]
    NoCards,
    #[error("page width must be finite and positive, got {0}")]
    InvalidPageWidth(f32),
    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
}
