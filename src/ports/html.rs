// src/ports/html.rs
use crate::application::CardListView;
use crate::constants::EMPTY_LIST_TEXT;
use crate::domain::Card;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, card: &Card) -> String {
        let tags = card.tags_line();
        format!(
            r#"    <div class="card" id="card-{id_attr}">
        <img src="{src}" alt="{alt}">
        <h4>{name}</h4>
        <p><strong>Company:</strong> {company}</p>
        <p><strong>Title:</strong> {title}</p>
        <p><strong>Email:</strong> {email}</p>
        <p><strong>Phone:</strong> {phone}</p>
        <p><strong>Tags:</strong> {tags}</p>
        <p class="card-id">ID: {id}</p>
    </div>
"#,
            id_attr = encode_double_quoted_attribute(&card.id),
            src = encode_double_quoted_attribute(&card.image_url),
            alt = encode_double_quoted_attribute(&card.name),
            name = encode_text(&card.name),
            company = encode_text(&card.company),
            title = encode_text(&card.title),
            email = encode_text(&card.email),
            phone = encode_text(&card.phone),
            tags = encode_text(&tags),
            id = encode_text(&card.id),
        )
    }

    #[instrument(level = "debug", skip_all, fields(visible = view.visible.len(), total = view.total))]
    pub fn render(&self, view: &CardListView<'_>) -> String {
        let message = view
            .message
            .map(|m| format!("    <p class=\"message\">{}</p>\n", encode_text(&m.to_string())))
            .unwrap_or_default();

        let search = if view.search.is_empty() {
            String::new()
        } else {
            format!(
                "    <p class=\"search\">Search: {}</p>\n",
                encode_text(view.search)
            )
        };

        let body = if view.total == 0 {
            format!("    <p>{}</p>\n", EMPTY_LIST_TEXT)
        } else {
            view.visible
                .iter()
                .map(|card| self.render_card(card))
                .collect::<String>()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Uploaded Cards</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 500px;
            margin: auto;
            padding: 20px;
        }}
        .card {{
            border: 1px solid #ccc;
            border-radius: 8px;
            margin-bottom: 16px;
            padding: 12px;
        }}
        .card img {{
            width: 100%;
            max-height: 200px;
            object-fit: cover;
        }}
        .card-id {{
            font-size: 0.8em;
            color: #666;
        }}
    </style>
</head>
<body>
    <h3>Uploaded Cards</h3>
{message}{search}{body}</body>
</html>"#
        )
    }
}
