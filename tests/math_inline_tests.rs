use texspan::{to_html, to_html_with, DelimiterPair, FencedMarkup, MathConfig};

#[test]
fn test_inline_math_alone() {
    let html = to_html(r"\(x^2\)");
    assert_eq!(
        html,
        "<p><code class=\"language-math math-inline\">x^2</code></p>\n"
    );
}

#[test]
fn test_inline_math_in_running_text() {
    let html = to_html(r"before \(a+b\) after");
    assert_eq!(
        html,
        "<p>before <code class=\"language-math math-inline\">a+b</code> after</p>\n"
    );
}

#[test]
fn test_multiple_spans_in_one_line() {
    let html = to_html(r"\(a\) and \(b\)");
    assert!(html.contains("math-inline\">a</code>"), "Got: {html}");
    assert!(html.contains("math-inline\">b</code>"), "Got: {html}");
    assert!(html.contains(" and "), "Got: {html}");
}

#[test]
fn test_unclosed_opener_is_literal_text() {
    let html = to_html(r"a \(x no close");
    assert!(!html.contains("math-inline"), "Got: {html}");
    assert!(html.contains(r"a \(x no close"), "Got: {html}");
}

#[test]
fn test_opener_closed_on_next_line_is_literal() {
    // Inline spans never cross a newline; the paragraph joins the two
    // lines with \n, so the span must not match.
    let html = to_html("a \\(x\ny\\) b");
    assert!(!html.contains("math-inline"), "Got: {html}");
}

#[test]
fn test_display_pair_matched_inline() {
    // Display pairs are also tried by the inline scanner; the span
    // renders in display mode but stays within the paragraph.
    let html = to_html(r"see \[a+b\] here");
    assert!(html.starts_with("<p>see "), "Got: {html}");
    assert!(html.contains("math-display\">a+b</code>"), "Got: {html}");
}

#[test]
fn test_empty_inline_content() {
    let html = to_html(r"x \(\) y");
    assert!(
        html.contains("<code class=\"language-math math-inline\"></code>"),
        "Got: {html}"
    );
}

#[test]
fn test_content_is_escaped_by_engine() {
    let html = to_html(r"\(a<b & c\)");
    assert!(html.contains(">a&lt;b &amp; c</code>"), "Got: {html}");
}

#[test]
fn test_dollar_inline() {
    let html = to_html_with(r"price $x$ here", &MathConfig::dollars(), &FencedMarkup);
    assert!(html.contains("math-inline\">x</code>"), "Got: {html}");
}

#[test]
fn test_double_dollar_beats_single_inline() {
    let html = to_html_with("$$x$$", &MathConfig::dollars(), &FencedMarkup);
    // $$ declared first, so the display pair wins at the shared
    // starting position; the result is a same-line display block.
    assert!(html.contains("math-display\">x</code>"), "Got: {html}");
}

#[test]
fn test_failed_pair_falls_through_to_next_pair() {
    let config = MathConfig::new([
        DelimiterPair::new("{{", "}}", true).unwrap(),
        DelimiterPair::new("{{", ">", false).unwrap(),
    ]);
    let html = to_html_with("a {{x> b", &config, &FencedMarkup);
    assert!(html.contains("math-inline\">x</code>"), "Got: {html}");
}

#[test]
fn test_unconfigured_markers_stay_literal() {
    let html = to_html("$x$ and $$y$$");
    assert!(!html.contains("language-math"), "Got: {html}");
    assert!(html.contains("$x$ and $$y$$"), "Got: {html}");
}

#[test]
fn test_multibyte_text_around_span() {
    let html = to_html(r"π ≈ \(22/7\), roughly");
    assert!(html.contains("math-inline\">22/7</code>"), "Got: {html}");
    assert!(html.contains("π ≈ "), "Got: {html}");
}

#[test]
fn test_span_content_not_reparsed() {
    // Delimiter-like text inside a span belongs to the span.
    let html = to_html(r"\(f(x)\)");
    assert!(html.contains("math-inline\">f(x)</code>"), "Got: {html}");
}
