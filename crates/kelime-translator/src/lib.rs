use kelime_types::DetailedTranslationResult;

mod gemini;

pub use gemini::GeminiClient;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a word or phrase from source to target language.
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<DetailedTranslationResult, TranslateError>;

    /// Synthesize speech for `text`, returning base64-encoded audio.
    async fn synthesize_speech(&self, text: &str, lang_code: &str)
    -> Result<String, TranslateError>;

    /// Like [`translate`](Translator::translate) but normalizes every
    /// failure to `None` after logging it. Callers past this boundary only
    /// ever see "result or no result".
    async fn translate_or_none(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Option<DetailedTranslationResult> {
        match self.translate(text, from, to).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!("translation failed: {}", e);
                None
            }
        }
    }

    /// Failure-normalized variant of [`synthesize_speech`](Translator::synthesize_speech).
    async fn speech_or_none(&self, text: &str, lang_code: &str) -> Option<String> {
        match self.synthesize_speech(text, lang_code).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::error!("speech synthesis failed: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("empty input")]
    EmptyInput,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("response did not match the requested schema: {0}")]
    SchemaMismatch(String),

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("authentication error")]
    AuthenticationError,
}
