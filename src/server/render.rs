//! Server-side HTML rendering with minijinja. Templates are compiled into the binary.

use crate::error::DashError;
use axum::response::Html;
use chrono::Local;
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("notes.html", include_str!("../../templates/notes.html")),
    ("reminders.html", include_str!("../../templates/reminders.html")),
    ("alarms.html", include_str!("../../templates/alarms.html")),
    ("timers.html", include_str!("../../templates/timers.html")),
    ("quick_links.html", include_str!("../../templates/quick_links.html")),
    ("schoology.html", include_str!("../../templates/schoology.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

/// Variables every page gets, merged with the page's own context.
#[derive(Serialize)]
struct PageContext<'a, C> {
    title: &'a str,
    now: String,
    #[serde(flatten)]
    page: C,
}

impl Templates {
    pub fn load() -> Result<Self, DashError> {
        let mut env = Environment::new();
        env.add_filter("duration", format_duration);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render `name` with `page` plus the shared `title` and `now` variables.
    pub fn render<C: Serialize>(
        &self,
        name: &str,
        title: &str,
        page: C,
    ) -> Result<Html<String>, DashError> {
        let template = self.env.get_template(name)?;
        let ctx = PageContext {
            title,
            now: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            page,
        };
        Ok(Html(template.render(ctx)?))
    }
}

/// `90` -> `01:30`, `3725` -> `1:02:05`.
fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_render_compactly() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(90), "01:30");
        assert_eq!(format_duration(3725), "1:02:05");
        assert_eq!(format_duration(86_400), "24:00:00");
    }

    #[test]
    fn every_template_compiles_and_escapes_html() {
        #[derive(Serialize)]
        struct Notes {
            notes: Vec<serde_json::Value>,
        }

        let templates = Templates::load().unwrap();
        let html = templates
            .render(
                "notes.html",
                "Notes",
                Notes {
                    notes: vec![serde_json::json!({
                        "id": 1,
                        "title": "<script>x</script>",
                        "content": "",
                        "created_at": "2026-10-16T09:00"
                    })],
                },
            )
            .unwrap()
            .0;
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>x</script>"));
    }
}
