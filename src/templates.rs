use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::{escape_attr, escape_html};

/// Fallback templates, used when the template directory is missing. They
/// keep the server functional from a bare working directory.
const FALLBACK_VIEW: &str = "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{{TITLE}}</title></head><body><h1>{{TITLE}}</h1>{{META}}<pre class=\"page-body\">{{BODY}}</pre><p><a href=\"/edit/{{TITLE}}\">Edit this page</a></p></body></html>";

const FALLBACK_EDIT: &str = "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>Editing {{TITLE}}</title></head><body><h1>Editing {{TITLE}}</h1><form action=\"/save/{{TITLE}}\" method=\"post\"><div><textarea name=\"body\" rows=\"20\" cols=\"80\">{{BODY}}</textarea></div><div><input type=\"submit\" value=\"Save\"></div></form></body></html>";

/// The HTML renderer: view/edit templates read once at startup.
///
/// Templates are plain HTML with `{{TITLE}}`, `{{BODY}}` and `{{META}}`
/// placeholders. Page fields are escaped at substitution time; the template
/// text itself is trusted.
pub struct Templates {
    view: String,
    edit: String,
}

impl Templates {
    /// Load templates from a directory, falling back to the compiled-in
    /// defaults for any file that cannot be read.
    pub fn load(dir: &Path) -> Self {
        Self {
            view: load_template(dir, "view.html", FALLBACK_VIEW),
            edit: load_template(dir, "edit.html", FALLBACK_EDIT),
        }
    }

    /// Render the read-only view of a page. `meta` is pre-built HTML (the
    /// last-modified line) and is substituted verbatim.
    pub fn render_view(&self, page: &Page, meta: &str) -> Result<String, WikiError> {
        render(&self.view, page, meta)
    }

    /// Render the edit form for a page
    pub fn render_edit(&self, page: &Page) -> Result<String, WikiError> {
        render(&self.edit, page, "")
    }
}

fn load_template(dir: &Path, name: &str, fallback: &str) -> String {
    let path = dir.join(name);
    match fs::read_to_string(&path) {
        Ok(tpl) => {
            debug!("Loaded template {:?}", path);
            tpl
        }
        Err(e) => {
            warn!("Template {:?} unavailable ({}), using built-in", path, e);
            fallback.to_string()
        }
    }
}

fn render(template: &str, page: &Page, meta: &str) -> Result<String, WikiError> {
    if !template.contains("{{TITLE}}") {
        return Err(WikiError::Template(
            "template has no {{TITLE}} placeholder".to_string(),
        ));
    }
    Ok(template
        .replace("{{TITLE}}", &escape_attr(&page.title))
        .replace("{{BODY}}", &escape_html(&page.body))
        .replace("{{META}}", meta))
}
