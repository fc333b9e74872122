use askama::Template;

use crate::config::Profile;
use crate::entry::EntrySummary;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub profile: &'a Profile,
    pub entries: &'a [EntrySummary],
    pub person_json: String,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(profile: &'a Profile, entries: &'a [EntrySummary]) -> Self {
        // `</` would close the surrounding <script> element early.
        let person_json = profile.json_ld().to_string().replace("</", "<\\/");
        Self {
            profile,
            entries,
            person_json,
        }
    }
}

/// Renders the homepage for `profile` with `entries` in the given order.
pub fn render(profile: &Profile, entries: &[EntrySummary]) -> Result<String, askama::Error> {
    IndexTemplate::new(profile, entries).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn profile() -> Profile {
        let content = r#"
            [profile]
            name = "Jane Doe"
            additional_name = "jdoe"
            image = "/profile.jpg"
            url = "https://jane.example.com"
            hometown = "Kushiro, Hokkaido"
            works_for = ["Acme </script> Corp"]

            [[profile.social_links]]
            label = "GitHub"
            url = "https://github.com/jdoe"
            icon = "/github.svg"

            [[profile.about]]
            heading = "About Jane"
            paragraphs = ["Engineer at Acme."]

            [profile.meta]
            title = "Jane Doe | jane.example.com"
            description = "Jane's homepage"
            cover_image = "https://jane.example.com/header.jpg"
        "#;
        Config::from_str(content).unwrap().profile
    }

    fn summary(title: &str, url: &str, domain: &str) -> EntrySummary {
        EntrySummary {
            title: title.to_string(),
            url: url.to_string(),
            domain: domain.to_string(),
            description: format!("About {}…", title),
        }
    }

    #[test]
    fn test_renders_profile() {
        let html = render(&profile(), &[]).unwrap();

        assert!(html.contains("<title>Jane Doe | jane.example.com</title>"));
        assert!(html.contains("jdoe"));
        assert!(html.contains("Kushiro, Hokkaido"));
        assert!(html.contains(r#"href="https://github.com/jdoe""#));
        assert!(html.contains(r#"src="/github.svg""#));
        assert!(html.contains("About Jane"));
        assert!(html.contains("Engineer at Acme."));
        assert!(html.contains("https://jane.example.com/header.jpg"));
    }

    #[test]
    fn test_empty_entries_render_no_articles() {
        let html = render(&profile(), &[]).unwrap();
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_entries_rendered_in_order() {
        let entries = vec![
            summary("First post", "https://zenn.dev/jdoe/1", "zenn.dev"),
            summary("Second post", "https://qiita.com/jdoe/2", "qiita.com"),
        ];
        let html = render(&profile(), &entries).unwrap();

        assert_eq!(html.matches("<article").count(), 2);
        let first = html.find("First post").unwrap();
        let second = html.find("Second post").unwrap();
        assert!(first < second);
        assert_eq!(html.matches(r#"href="https://zenn.dev/jdoe/1""#).count(), 2);
        assert!(html.contains("qiita.com</span>"));
        assert!(html.contains("About First post…"));
    }

    #[test]
    fn test_empty_domain_label_omitted() {
        let entries = vec![summary("Odd link", "::::", "")];
        let html = render(&profile(), &entries).unwrap();

        assert!(html.contains("Odd link"));
        assert!(!html.contains(r#"<span class="domain">"#));
    }

    #[test]
    fn test_entry_text_is_escaped() {
        let entries = vec![summary("<script>alert(1)</script>", "https://x.example.com/", "x.example.com")];
        let html = render(&profile(), &entries).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_person_json_ld_embedded() {
        let html = render(&profile(), &[]).unwrap();

        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#""@type":"Person""#));
        assert!(html.contains(r#"Acme <\/script> Corp"#));
    }
}
