use chrono::{DateTime, Utc};
use tera::Tera;

use crate::config::{AppConfig, APP_TITLE, INDEX_TEMPLATE, STATUS_MESSAGE};

/// RFC 1123 date-time layout, always rendered in UTC
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S UTC";

/// Initialize the Tera template engine
///
/// The status page template is compiled into the binary, so a parse error here
/// is a build defect rather than a deployment problem.
pub fn init_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// Format a timestamp for display, e.g. `Mon, 02 Jan 2006 15:04:05 UTC`
pub fn format_rfc1123(timestamp: DateTime<Utc>) -> String {
    timestamp.format(RFC1123_FORMAT).to_string()
}

/// Render the status page for the given configuration and request time.
pub fn render_status_page(
    tera: &Tera,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<String, tera::Error> {
    let mut context = tera::Context::new();
    context.insert("config", config);
    context.insert("title", APP_TITLE);
    context.insert("status", STATUS_MESSAGE);
    context.insert("deployed", &format_rfc1123(now));

    tera.render(INDEX_TEMPLATE, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_format_rfc1123() {
        let ts = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_rfc1123(ts), "Mon, 02 Jan 2006 15:04:05 UTC");
    }

    #[test]
    fn test_format_rfc1123_parses_back() {
        let now = Utc::now();
        let formatted = format_rfc1123(now);
        let parsed = NaiveDateTime::parse_from_str(&formatted, RFC1123_FORMAT).unwrap();
        assert_eq!(parsed.and_utc().timestamp(), now.timestamp());
    }

    #[test]
    fn test_render_status_page() {
        let tera = init_templates().unwrap();
        let config = AppConfig::with_version("v1.2.3");
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();

        let html = render_status_page(&tera, &config, ts).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Talos Demo App</title>"));
        assert!(html.contains("Version: v1.2.3"));
        assert!(html.contains("Deployed: Fri, 15 Mar 2024 09:30:00 UTC"));
        assert!(html.contains("BGP LoadBalancer Working"));
    }

    #[test]
    fn test_render_shows_version_verbatim() {
        let tera = init_templates().unwrap();

        for version in ["release/1.2", "a&b"] {
            let config = AppConfig::with_version(version);
            let html = render_status_page(&tera, &config, Utc::now()).unwrap();
            assert!(html.contains(&format!("Version: {version}")));
        }
    }
}
