use crate::config::ConfigError;
use crate::feed::FeedError;
use crate::pipeline::PipelineError;
use crate::render::RenderError;
use crate::tokenize::TokenizeError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("feed unavailable: {0}")]
    Feed(#[from] FeedError),

    #[error("{0}")]
    Tokenize(#[from] TokenizeError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PipelineError> for AppError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Feed(e) => Self::Feed(e),
            PipelineError::Tokenize(e) => Self::Tokenize(e),
        }
    }
}

impl AppError {
    /// Network and feed problems exit with 2 so scripts can tell them apart
    /// from local failures.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Feed(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_errors_are_distinct() {
        let err = AppError::from(PipelineError::Feed(FeedError::Status(503)));
        assert!(matches!(err, AppError::Feed(_)));
        assert_eq!(err.exit_status(), 2);
        assert!(err.to_string().starts_with("feed unavailable"), "got: {err}");
    }

    #[test]
    fn local_errors_exit_with_failure() {
        let err = AppError::from(RenderError::Empty);
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn tokenizer_errors_pass_through() {
        let err = AppError::from(PipelineError::Tokenize(TokenizeError::Analyzer("boom".into())));
        assert!(matches!(err, AppError::Tokenize(_)));
        assert!(err.to_string().contains("boom"));
    }
}
