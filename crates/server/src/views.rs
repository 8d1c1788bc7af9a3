use askama::Template;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use models::Student;

/// Render a template into a response, 500 on render failure.
fn render_template<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template render error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", e),
            )
                .into_response()
        }
    }
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsPage<'a> {
    pub students: &'a [Student],
}

pub fn students_page(students: &[Student]) -> Response {
    render_template(&StudentsPage { students })
}

/// True when the `Accept` header weights `text/html` strictly above JSON.
/// `*/*` and `application/*` count as JSON, so ties and a missing header keep
/// the JSON default.
pub fn prefers_html(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mut html_q = 0.0_f32;
    let mut json_q = 0.0_f32;
    for range in accept.split(',') {
        let (media, q) = media_range(range);
        if media.eq_ignore_ascii_case("text/html") || media.eq_ignore_ascii_case("application/xhtml+xml") {
            html_q = html_q.max(q);
        } else if media.eq_ignore_ascii_case("application/json")
            || media == "*/*"
            || media.eq_ignore_ascii_case("application/*")
        {
            json_q = json_q.max(q);
        }
    }
    html_q > json_q
}

/// Split one media range into its type and `q` weight (default 1, malformed 0).
fn media_range(range: &str) -> (&str, f32) {
    let mut parts = range.split(';');
    let media = parts.next().unwrap_or("").trim();
    let q = parts
        .filter_map(|p| p.split_once('='))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("q"))
        .map(|(_, v)| v.trim().parse::<f32>().ok().filter(|q| (0.0..=1.0).contains(q)).unwrap_or(0.0))
        .unwrap_or(1.0);
    (media, q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(v: &'static str) -> HeaderMap {
        let mut h = HeaderMap::new();
        h.insert(header::ACCEPT, HeaderValue::from_static(v));
        h
    }

    #[test]
    fn accept_negotiation() {
        assert!(!prefers_html(&HeaderMap::new()));
        assert!(!prefers_html(&accept("*/*")));
        assert!(!prefers_html(&accept("application/json")));
        assert!(prefers_html(&accept("text/html,application/xhtml+xml,*/*;q=0.8")));
        assert!(!prefers_html(&accept("application/json, text/html")));
        assert!(prefers_html(&accept("text/html")));
    }

    #[test]
    fn accept_weights_decide() {
        assert!(!prefers_html(&accept("text/html;q=0.1, application/json;q=1.0")));
        assert!(prefers_html(&accept("application/json;q=0.5, text/html")));
        assert!(!prefers_html(&accept("text/html;q=0.8, */*;q=0.8")));
        assert!(!prefers_html(&accept("text/html;q=0")));
        assert!(!prefers_html(&accept("text/html;q=bogus")));
        assert_eq!(media_range(" text/html ; level=1 ; q=0.7"), ("text/html", 0.7));
    }

    #[test]
    fn page_escapes_names() {
        let students = vec![Student { id: 7, name: "<b>Bold</b>".into() }];
        let html = StudentsPage { students: &students }.render().expect("render");
        assert!(html.contains("Students (1)"));
        assert!(html.contains("&lt;b&gt;Bold"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn empty_page() {
        let html = StudentsPage { students: &[] }.render().expect("render");
        assert!(html.contains("No students yet."));
    }
}
