//! HTML pages for the listing and the submission form.

use axum::response::Html;
use domain::{Comment, Flash, SubmissionForm};
use std::fmt::Write;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash_html = flash
        .map(|f| {
            format!(
                "<div class=\"flash {}\">{}</div>\n",
                f.level.as_str(),
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    Html(format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{flash_html}{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

pub fn show_all(comments: &[Comment], flash: Option<&Flash>) -> Html<String> {
    let mut body = String::from("<p><a href=\"/new\">Add a comment</a></p>\n");

    if comments.is_empty() {
        body.push_str("<p class=\"empty\">No comments yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Email</th><th>Comment</th><th>Published</th></tr></thead>\n<tbody>\n",
        );
        for c in comments {
            // writing into a String cannot fail
            let _ = writeln!(
                body,
                "<tr id=\"comment-{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                c.id,
                escape(&c.name),
                escape(&c.email),
                escape(&c.comment),
                c.pub_date.format(DATE_FORMAT),
            );
        }
        body.push_str("</tbody>\n</table>\n");
    }

    layout("Comments", flash, &body)
}

/// The submission form, pre-filled with whatever the visitor already typed.
pub fn new_form(flash: Option<&Flash>, values: &SubmissionForm) -> Html<String> {
    let value = |v: &Option<String>| escape(v.as_deref().unwrap_or_default());

    let body = format!(
        concat!(
            "<form action=\"/new\" method=\"post\">\n",
            "<label for=\"name\">Name</label>\n",
            "<input type=\"text\" name=\"name\" id=\"name\" maxlength=\"100\" value=\"{name}\">\n",
            "<label for=\"email\">Email</label>\n",
            "<input type=\"text\" name=\"email\" id=\"email\" maxlength=\"100\" value=\"{email}\">\n",
            "<label for=\"comment\">Comment</label>\n",
            "<textarea name=\"comment\" id=\"comment\" maxlength=\"200\">{comment}</textarea>\n",
            "<input type=\"submit\" value=\"Submit\">\n",
            "</form>\n",
            "<p><a href=\"/\">Back to comments</a></p>\n",
        ),
        name = value(&values.name),
        email = value(&values.email),
        comment = value(&values.comment),
    );

    layout("Add a comment", flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn listing_keeps_given_order() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        let comments = vec![
            Comment {
                id: 2,
                name: "newer".into(),
                email: "n@x.com".into(),
                comment: "second".into(),
                pub_date: at,
            },
            Comment {
                id: 1,
                name: "older".into(),
                email: "o@x.com".into(),
                comment: "first".into(),
                pub_date: at,
            },
        ];
        let Html(page) = show_all(&comments, None);
        let newer = page.find("comment-2").unwrap();
        let older = page.find("comment-1").unwrap();
        assert!(newer < older);
        assert!(page.contains("2024-01-02 03:04:05"));
    }

    #[test]
    fn empty_listing_says_so() {
        let Html(page) = show_all(&[], Some(&Flash::submitted()));
        assert!(page.contains("No comments yet."));
        assert!(page.contains("Comment was successfully submitted"));
    }

    #[test]
    fn form_prefills_and_escapes_values() {
        let form = SubmissionForm {
            name: None,
            email: Some("a@x.com".into()),
            comment: Some("<b>hi</b>".into()),
        };
        let Html(page) = new_form(Some(&Flash::error("Please enter all the fields")), &form);
        assert!(page.contains("value=\"\""));
        assert!(page.contains("value=\"a@x.com\""));
        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;</textarea>"));
        assert!(page.contains("<div class=\"flash error\">Please enter all the fields</div>"));
    }
}
