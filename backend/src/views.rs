//! Server-side HTML for the landing, add and listing pages.

use crate::models::{VideoRecord, MAX_NAME_CHARS, MAX_SEARCH_CHARS, MAX_URL_CHARS};
use crate::utils::video_count_message;

/// Submitted value and validation errors of one form field.
#[derive(Debug, Default, Clone)]
pub struct FieldState {
    pub value: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Default, Clone)]
pub struct VideoFormState {
    pub name: FieldState,
    pub url: FieldState,
    pub notes: FieldState,
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/add\">Add Video</a> | <a href=\"/videos\">Videos</a></nav>\n\
         {body}\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn render_home(app_name: &str) -> String {
    let body = format!("<h1>{}</h1>", escape_html(app_name));
    page(app_name, &body)
}

fn render_field_errors(out: &mut String, field: &FieldState) {
    for error in &field.errors {
        out.push_str(&format!(
            "<p class=\"field-error\">{}</p>\n",
            escape_html(error)
        ));
    }
}

fn render_text_input(out: &mut String, field: &FieldState, name: &str, label: &str, max: usize) {
    out.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" maxlength=\"{max}\" value=\"{}\">\n",
        escape_html(&field.value)
    ));
    render_field_errors(out, field);
}

pub fn render_add_form(form: &VideoFormState, messages: &[&str]) -> String {
    let mut body = String::from("<h2>Add Video</h2>\n");

    if !messages.is_empty() {
        body.push_str("<ul class=\"messages\">\n");
        for message in messages {
            body.push_str(&format!(
                "<li class=\"warning\">{}</li>\n",
                escape_html(message)
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<form method=\"post\" action=\"/add\">\n");
    render_text_input(&mut body, &form.name, "name", "Name", MAX_NAME_CHARS);
    render_text_input(&mut body, &form.url, "url", "URL", MAX_URL_CHARS);

    body.push_str(&format!(
        "<label for=\"notes\">Notes</label>\n\
         <textarea id=\"notes\" name=\"notes\">{}</textarea>\n",
        escape_html(&form.notes.value)
    ));
    render_field_errors(&mut body, &form.notes);

    body.push_str("<button type=\"submit\">Add</button>\n</form>");
    page("Add Video", &body)
}

fn render_video(video: &VideoRecord) -> String {
    let notes = video
        .notes
        .as_deref()
        .map(|notes| format!("<p>{}</p>\n", escape_html(notes)))
        .unwrap_or_default();

    format!(
        "<div class=\"video\">\n\
         <h3>{name}</h3>\n\
         {notes}\
         <a href=\"{url}\">{url}</a>\n\
         <iframe width=\"420\" height=\"315\" src=\"https://www.youtube.com/embed/{embed}\" allowfullscreen></iframe>\n\
         </div>\n",
        name = escape_html(&video.name),
        url = escape_html(&video.url),
        embed = urlencoding::encode(&video.video_id),
    )
}

pub fn render_video_list(videos: &[VideoRecord], search_term: Option<&str>) -> String {
    let mut body = format!(
        "<h2>Videos</h2>\n\
         <form method=\"get\" action=\"/videos\">\n\
         <input type=\"text\" name=\"search_term\" maxlength=\"{MAX_SEARCH_CHARS}\" value=\"{}\">\n\
         <button type=\"submit\">Search</button>\n\
         <a href=\"/videos\">Clear</a>\n</form>\n\
         <h3 class=\"video-count\">{}</h3>\n",
        escape_html(search_term.unwrap_or_default()),
        video_count_message(videos.len())
    );

    for video in videos {
        body.push_str(&render_video(video));
    }

    page("Videos", &body)
}
