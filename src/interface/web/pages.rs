//! HTML page rendering
//!
//! Pages are built with plain string assembly; the markup is small enough
//! that a templating engine would be pure overhead.

use crate::interface::api::item_dto::ItemResponse;

/// Escape text for interpolation into HTML content and attribute values.
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{}</title></head>\n\
         <body>\n{}\n</body>\n\
         </html>\n",
        escape(title),
        body
    )
}

/// Landing page
pub fn render_index() -> String {
    page(
        "ItemStore",
        "<h1>ItemStore</h1>\n<p><a href=\"/items\">Manage items</a></p>",
    )
}

/// Item list page: one table row per item with inline update and delete
/// forms, plus an add form at the bottom.
pub fn render_items(items: &[ItemResponse]) -> String {
    let mut body = String::from("<h1>Items</h1>\n<table border=\"1\">\n");
    body.push_str("<tr><th>ID</th><th>Name</th><th>Description</th><th>Actions</th></tr>\n");

    for item in items {
        body.push_str(&format!(
            "<tr>\n\
             <td>{id}</td>\n\
             <td>{name}</td>\n\
             <td>{description}</td>\n\
             <td>\n\
             <form method=\"post\" action=\"/update-item/{id}\">\n\
             <input type=\"text\" name=\"name\" value=\"{name}\">\n\
             <input type=\"text\" name=\"description\" value=\"{description}\">\n\
             <button type=\"submit\">Update</button>\n\
             </form>\n\
             <form method=\"post\" action=\"/delete-item/{id}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </td>\n\
             </tr>\n",
            id = item.id,
            name = escape(&item.name),
            description = escape(&item.description),
        ));
    }

    body.push_str("</table>\n");
    body.push_str(
        "<h2>Add item</h2>\n\
         <form method=\"post\" action=\"/add-item\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\">\n\
         <input type=\"text\" name=\"description\" placeholder=\"Description\">\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <p><a href=\"/\">Home</a></p>",
    );

    page("Items", &body)
}
