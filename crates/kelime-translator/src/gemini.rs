use async_trait::async_trait;
use kelime_types::{DetailedTranslationResult, Meaning};
use serde_json::{Value, json};

use crate::{TranslateError, Translator};

/// Part-of-speech label for the synthetic meaning group a phrase result is
/// collapsed into. Kept verbatim so exports stay compatible with existing
/// backup files.
pub const PHRASE_PART_OF_SPEECH: &str = "Cümle";

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    text_model: String,
    tts_model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String, text_model: String, tts_model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            text_model,
            tts_model,
        }
    }

    async fn generate(&self, model: &str, body: Value) -> Result<Value, TranslateError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(TranslateError::NetworkError)
    }
}

#[async_trait]
impl Translator for GeminiClient {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<DetailedTranslationResult, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let phrase = is_phrase(text);
        let (prompt, schema) = if phrase {
            (phrase_prompt(text, from, to), phrase_schema())
        } else {
            (word_prompt(text, from, to), word_schema())
        };

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        });

        let response = self.generate(&self.text_model, body).await?;
        let json_text = extract_text(&response)?;

        if phrase {
            parse_phrase_result(&json_text)
        } else {
            parse_word_result(&json_text)
        }
    }

    async fn synthesize_speech(
        &self,
        text: &str,
        lang_code: &str,
    ) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let body = json!({
            "contents": [{ "parts": [{ "text": text }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": {
                    "voiceConfig": {
                        "prebuiltVoiceConfig": { "voiceName": voice_for_lang(lang_code) }
                    }
                }
            }
        });

        let response = self.generate(&self.tts_model, body).await?;

        response["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].get(0))
            .and_then(|p| p["inlineData"]["data"].as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                TranslateError::SchemaMismatch("no inline audio payload in response".to_string())
            })
    }
}

/// Inputs containing a space are sent through the simplified phrase schema.
fn is_phrase(text: &str) -> bool {
    text.trim().contains(' ')
}

/// Prebuilt voice per language code, with a default for unmapped codes.
fn voice_for_lang(lang_code: &str) -> &'static str {
    match lang_code {
        "tr" => "Kore",
        _ => "Zephyr",
    }
}

fn word_prompt(text: &str, from: &str, to: &str) -> String {
    format!(
        "Translate the {from} word \"{text}\" into {to}. Provide the phonetic \
         pronunciation of the original word. List the top 3-5 most common \
         meanings, grouped by their part of speech (e.g., Noun, Verb). Format \
         the output strictly as JSON."
    )
}

fn phrase_prompt(text: &str, from: &str, to: &str) -> String {
    format!(
        "Translate the {from} phrase \"{text}\" into {to}. Provide the most \
         common translation. Format the output as a simple JSON object with a \
         single key \"translation\"."
    )
}

fn word_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "pronunciation": {
                "type": "STRING",
                "description": "The phonetic pronunciation of the original source word."
            },
            "meanings": {
                "type": "ARRAY",
                "description": "A list of the top 3-5 most common meanings, grouped by their part of speech.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "partOfSpeech": {
                            "type": "STRING",
                            "description": "The grammatical part of speech (e.g., Noun, Verb, Adjective)."
                        },
                        "translations": {
                            "type": "ARRAY",
                            "description": "A list of translated words for this part of speech.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["partOfSpeech", "translations"]
                }
            }
        },
        "required": ["pronunciation", "meanings"]
    })
}

fn phrase_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translation": {
                "type": "STRING",
                "description": "The most common translation of the phrase."
            }
        },
        "required": ["translation"]
    })
}

/// Pull the model's JSON text out of a generateContent response.
fn extract_text(response: &Value) -> Result<String, TranslateError> {
    response["candidates"]
        .get(0)
        .and_then(|c| c["content"]["parts"].get(0))
        .and_then(|p| p["text"].as_str())
        .map(|t| t.trim().to_string())
        .ok_or_else(|| TranslateError::SchemaMismatch("no text part in response".to_string()))
}

fn parse_word_result(json_text: &str) -> Result<DetailedTranslationResult, TranslateError> {
    serde_json::from_str(json_text).map_err(|e| TranslateError::SchemaMismatch(e.to_string()))
}

/// A phrase response carries a single translation; collapse it into the
/// shape word results use so downstream code handles one type.
fn parse_phrase_result(json_text: &str) -> Result<DetailedTranslationResult, TranslateError> {
    let value: Value =
        serde_json::from_str(json_text).map_err(|e| TranslateError::SchemaMismatch(e.to_string()))?;

    let translation = value["translation"]
        .as_str()
        .ok_or_else(|| TranslateError::SchemaMismatch("missing translation key".to_string()))?;

    Ok(DetailedTranslationResult {
        pronunciation: String::new(),
        meanings: vec![Meaning {
            part_of_speech: PHRASE_PART_OF_SPEECH.to_string(),
            translations: vec![translation.to_string()],
        }],
    })
}
