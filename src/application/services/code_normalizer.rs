pub const FRAMEWORK_IMPORT: &str = "from manim import *";

const TAGGED_FENCE: &str = "```python";
const FENCE: &str = "```";

/// Reduces a model response to renderable source.
///
/// Takes the body of the first ```` ```python ```` block, else the first
/// generic fenced block, else the whole text; then makes sure the framework
/// import is present. Applying it to its own output is a no-op.
pub fn normalize_source(raw: &str) -> String {
    let body = extract_fenced_block(raw).unwrap_or(raw);

    if body.contains(FRAMEWORK_IMPORT) {
        body.to_string()
    } else {
        format!("{FRAMEWORK_IMPORT}\n\n{body}")
    }
}

fn extract_fenced_block(raw: &str) -> Option<&str> {
    if let Some(start) = raw.find(TAGGED_FENCE) {
        let rest = &raw[start + TAGGED_FENCE.len()..];
        return Some(until_fence(rest));
    }

    let start = raw.find(FENCE)?;
    let rest = until_fence(&raw[start + FENCE.len()..]);
    Some(strip_language_tag(rest))
}

fn until_fence(rest: &str) -> &str {
    match rest.find(FENCE) {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Drops a leading ```` ```py ```` style tag left on the fence line.
fn strip_language_tag(block: &str) -> &str {
    match block.split_once('\n') {
        Some((first, remainder))
            if !first.trim().is_empty()
                && first
                    .trim()
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+') =>
        {
            remainder
        }
        _ => block,
    }
}
