// Remote tagging service client.
//
// Posts text to an external linguistic service (a CoreNLP-style HTTP
// endpoint) and maps its JSON response onto TaggedToken. Wrapped behind
// the PosTagger trait so the rest of the engine never knows which backend
// is active. Calls are blocking by design — the generation core is
// synchronous and a templated strategy makes exactly one round trip.
//
// Wire contract: POST {"text": "..."} -> [{"token": "...", "tag": "..."}]
// with original token order preserved. Lemmatization stays local (it is a
// pure per-word function), so tagging is the only network call.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;

use super::rules::lemmatize_verb;
use super::traits::{PosClass, PosTagger, TaggedToken};

/// HTTP tagging service backend. Holds no mutable state — safe to share
/// across variants and threads.
pub struct RemoteTagger {
    client: Client,
    url: String,
}

impl RemoteTagger {
    /// Create a client for the tagging service at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

impl PosTagger for RemoteTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AnalysisError> {
        let request = TagRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .map_err(|e| AnalysisError::ServiceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(AnalysisError::BadResponse(format!(
                "tagging service returned {status}: {body}"
            )));
        }

        let analyses: Vec<TokenAnalysis> = response
            .json()
            .map_err(|e| AnalysisError::BadResponse(e.to_string()))?;

        if analyses.is_empty() {
            return Err(AnalysisError::UnprocessableInput(
                "tagging service produced no tokens".to_string(),
            ));
        }

        debug!(
            tokens = analyses.len(),
            text_preview = %crate::output::truncate_chars(text, 50),
            "Tagged text via remote service"
        );

        Ok(analyses
            .into_iter()
            .map(|a| TaggedToken::new(a.token, a.tag))
            .collect())
    }

    fn lemmatize(&self, word: &str, pos: PosClass) -> Result<String, AnalysisError> {
        match pos {
            PosClass::Verb => Ok(lemmatize_verb(word)),
        }
    }
}

// --- Tagging service request/response types ---

#[derive(Serialize)]
struct TagRequest {
    text: String,
}

#[derive(Deserialize)]
struct TokenAnalysis {
    token: String,
    tag: String,
}
