//! HTML building blocks shared by the pages.

use crate::i18n::Language;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:#f5f7fb;color:#1f2937}\
header{display:flex;justify-content:space-between;align-items:center;padding:12px 24px;background:#1e3a8a;color:#fff}\
header a{color:#1e3a8a;background:#fff;padding:6px 14px;border-radius:8px;text-decoration:none}\
main{max-width:960px;margin:24px auto;padding:0 16px}\
section{background:#fff;border-radius:12px;padding:20px;margin-bottom:20px;box-shadow:0 1px 4px rgba(0,0,0,.08)}\
table{width:100%;border-collapse:collapse}td,th{padding:8px;border-bottom:1px solid #e5e7eb;text-align:left}\
label{display:block;font-weight:600;margin:12px 0 4px}\
input,select{width:100%;padding:8px;border:1px solid #d1d5db;border-radius:8px;box-sizing:border-box}\
input[type=checkbox]{width:auto}\
.invalid{border-color:#ef4444}.error{color:#ef4444;font-size:.875rem}\
.notice{padding:12px;border-radius:8px;background:#ecfdf5;color:#065f46}\
.alert{padding:12px;border-radius:8px;background:#fef2f2;color:#991b1b}\
.paid{color:#16a34a}.unpaid{color:#ef4444}";

/// Wrap page content in the shared document shell and navigation bar.
///
/// `current_path` is where the language switch returns to.
pub fn layout(language: Language, title: &str, current_path: &str, content: &str) -> String {
    let target = language.toggled();

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n\
<header><strong>{title}</strong>\
<a class=\"lang-switch\" href=\"/language?lang={target_code}&amp;redirect={redirect}\">{target_name}</a></header>\n\
<main>\n{content}\n</main>\n</body>\n</html>\n",
        lang = language.code(),
        title = escape_html(title),
        style = STYLE,
        target_code = target.code(),
        redirect = escape_html(&urlencoding::encode(current_path)),
        target_name = escape_html(target.native_name()),
        content = content,
    )
}
