//! Expected-output shape declared to the model.

use serde_json::{Value, json};

/// Fields every generation result must carry, in declaration order.
pub(crate) const REQUIRED_FIELDS: [&str; 7] = [
    "titles",
    "description",
    "keywords",
    "hashtags",
    "category",
    "algorithmStrategy",
    "thumbnailIdeas",
];

/// Gemini `responseSchema` describing a generation result.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "titles": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5 high-CTR, click-worthy video titles optimized for YouTube search and recommendations."
            },
            "description": {
                "type": "STRING",
                "description": "A highly engaging, professionally formatted YouTube video description. It must include a strong hook in the first 2 lines, a 'Question of the Day' to drive comments, a clear 'Subscribe' CTA, and placeholders for timestamps and social links."
            },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 20-30 high-volume, low-competition tags/keywords separated by commas."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5-10 trending and relevant hashtags including the # symbol."
            },
            "category": {
                "type": "STRING",
                "description": "The most appropriate YouTube category for this video (e.g., Education, Entertainment, Tech)."
            },
            "algorithmStrategy": {
                "type": "STRING",
                "description": "A brief analysis of why this content works with the current algorithm (focus on retention, click-through rate, and engagement signals)."
            },
            "thumbnailIdeas": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "description": {
                            "type": "STRING",
                            "description": "Detailed visual description of the thumbnail image (scene, facial expression, colors, background)."
                        },
                        "text": {
                            "type": "STRING",
                            "description": "Short, punchy text overlay (max 3-5 words) to be placed on the image."
                        }
                    },
                    "required": ["description", "text"]
                },
                "description": "List of 3 distinct, high-click-through-rate thumbnail concepts that complement the titles."
            }
        },
        "required": REQUIRED_FIELDS,
    })
}
