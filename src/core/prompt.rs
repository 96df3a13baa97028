/// Builds the fixed instruction template around the feedback corpus. The six
/// JSON keys named in the template are part of the client contract; the
/// results view breaks if they change.
pub fn build_analysis_prompt(feedback_texts: &[String]) -> String {
    let feedback_block = feedback_texts.join("\n");

    format!(
        r#"Analyze the following feedback and provide a structured response with:

1. **Positive Feedback**: List all positive comments and compliments
2. **Negative Feedback**: List all complaints, issues, and negative comments
3. **Suggestions**: List all improvement suggestions and recommendations
4. **Overall Sentiment**: Provide an overall sentiment score (0-1, where 0 is very negative and 1 is very positive)
5. **Key Themes**: Identify 3-5 recurring themes or topics
6. **Action Items**: Suggest 3-5 actionable improvements based on the feedback

Format your response as JSON with these exact keys: positiveFeedback, negativeFeedback, suggestions, sentimentScore, keyThemes, actionItems

Feedback to analyze:
{feedback_block}
"#
    )
}
