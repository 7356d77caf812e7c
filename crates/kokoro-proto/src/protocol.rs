use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful reply from the chat service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Reply from the prediction service. Fields the client does not use are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_analysis: Option<EmotionAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_recommendations: Option<MusicRecommendations>,
}

impl PredictResponse {
    pub fn emotion(&self) -> Option<&str> {
        self.emotion_analysis
            .as_ref()
            .map(|e| e.emotion.as_str())
            .filter(|e| !e.is_empty())
    }

    pub fn tracks(&self) -> Option<&[Track]> {
        self.music_recommendations
            .as_ref()
            .and_then(|m| m.tracks.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub emotion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MusicRecommendations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

/// A recommended track as returned by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    /// 0–100.
    #[serde(default)]
    pub popularity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_response_full() {
        let json = r#"{
            "success": true,
            "emotion_analysis": {"emotion": "sadness", "confidence": 0.91},
            "music_recommendations": {
                "emotion": "sadness",
                "tracks": [
                    {"name": "Holocene", "artist": "Bon Iver", "popularity": 71,
                     "image_url": "https://i.scdn.co/image/abc",
                     "external_url": "https://open.spotify.com/track/1",
                     "preview_url": null}
                ]
            }
        }"#;
        let resp: PredictResponse = serde_json::from_str(json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.emotion(), Some("sadness"));
        let tracks = resp.tracks().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].artist, "Bon Iver");
        assert_eq!(tracks[0].popularity, 71);
        assert!(tracks[0].preview_url.is_none());
    }

    #[test]
    fn test_predict_response_failure_shape() {
        let resp: PredictResponse =
            serde_json::from_str(r#"{"success": false, "error": "model offline"}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.emotion().is_none());
        assert!(resp.tracks().is_none());
    }

    #[test]
    fn test_chat_request_wire_format() {
        let body = serde_json::to_value(ChatRequest {
            message: "hello".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"message": "hello"}));

        let body = serde_json::to_value(PredictRequest { text: "hi".into() }).unwrap();
        assert_eq!(body, serde_json::json!({"text": "hi"}));
    }
}
