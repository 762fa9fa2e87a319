//! Response sentence and HTML page

use emodetect_core::EmotionResult;

/// Sentence shown whenever no scores are available
pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again!";

const RESULT_PLACEHOLDER: &str = "{{result}}";

/// Build the human-readable sentence for a detection result.
///
/// Scores are written as the shortest round-trip decimal, see [`format_score`].
pub fn format_response(result: &EmotionResult) -> String {
    let scores = match result {
        EmotionResult::Detected(scores) => scores,
        EmotionResult::Absent => return INVALID_TEXT_MESSAGE.to_string(),
    };

    format!(
        "For the given statement, the system response is 'anger': {}, 'disgust': {}, \
         'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
        format_score(scores.anger),
        format_score(scores.disgust),
        format_score(scores.fear),
        format_score(scores.joy),
        format_score(scores.sadness),
        scores.dominant(),
    )
}

/// Shortest round-trip form of a score.
///
/// Fixed notation with a fractional part (`0.9`, `0.0`) for decimal exponents
/// in `-4..16`; outside that range, exponent notation with an explicit sign
/// and at least two exponent digits (`1.2e-05`, `1e+16`).
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value:?}");
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return format!("{value:?}"),
    };

    if (-4..16).contains(&exponent) {
        format!("{value:?}")
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Embed a sentence in the page.
///
/// The sentence is inserted as-is; it only ever contains numbers, fixed
/// emotion names and the invalid-text message.
pub fn render_page(sentence: &str) -> String {
    PAGE_TEMPLATE.replace(RESULT_PLACEHOLDER, sentence)
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Emotion Detector</title>
    <style>
        body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
        textarea { width: 100%; min-height: 6rem; }
        #system_response { margin-top: 1.5rem; padding: 1rem; background: #f3f4f6; border-radius: 0.5rem; }
    </style>
</head>
<body>
    <h1>Emotion Detector</h1>
    <form method="post" action="/emotionDetector">
        <label for="text">Text to analyze</label>
        <textarea id="text" name="text"></textarea>
        <button type="submit">Run Sentiment Analysis</button>
    </form>
    <div id="system_response">{{result}}</div>
</body>
</html>
"#;
