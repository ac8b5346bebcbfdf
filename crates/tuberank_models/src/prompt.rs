//! Instruction payload sent to the model.

use tuberank_core::GenerationRequest;

/// Build the natural-language instruction for `request`.
///
/// Topic, category label and audience are embedded verbatim. The rest is
/// fixed guidance: Arabic output, AIDA-structured description with a hook,
/// an engagement question, a subscribe call-to-action and a timestamps
/// placeholder.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Act as a world-class YouTube SEO Expert and Content Strategist.
I need you to generate a publishing strategy and metadata for a NEW YouTube video idea based on the following:

- Video Idea: {topic}
- Niche/Category: {category}
- Target Audience: {audience}
- Language: Arabic (Output must be in Arabic)

Please strictly follow the latest YouTube Algorithm best practices (2024/2025):
1. Titles: Generate 5 click-worthy titles (under 60 chars) that evoke curiosity or promise value.
2. Description: Write a highly engaging, professional description optimized for retention and conversion.
   - **First 2 lines**: Must be a strong hook/summary for high CTR in search results.
   - **Body**: Explain the value of the video using the AIDA framework.
   - **Engagement**: Include a specific "Question of the Day" (سؤال الحلقة) to encourage comments.
   - **CTA**: Include a compelling call-to-action to subscribe and like the video.
   - **Structure**: Use emojis, bullet points, and clear spacing. Include a "Timestamps" (فواصل زمنية) placeholder.
3. Keywords: Mix broad and specific long-tail tags relevant to the specific Category.
4. Provide a strategy on how to classify this content for the algorithm.
5. Suggest 3 high-CTR thumbnail ideas with text overlays.

Output strictly in JSON format matching the schema provided."#,
        topic = request.topic(),
        category = request.category(),
        audience = request.audience(),
    )
}
