use serde::Deserialize;
use std::collections::HashSet;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");
const DEFAULT_COLOR_TAG: &str = "tag-purple";

/// One card of the career timeline.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TimelineEntry {
    pub date_range: String,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(default = "default_color_tag")]
    pub color_tag: String,
}

fn default_color_tag() -> String {
    DEFAULT_COLOR_TAG.to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub category: String,
    #[serde(default)]
    pub external_url: Option<String>,
    /// Playable cut for the video overlay, when the project has one.
    #[serde(default)]
    pub video_ref: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SkillCard {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color_class: String,
    pub link: String,
}

/// Tool logo shown in a category page's icon strip.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TechBadge {
    pub name: String,
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoryPage {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub backdrop: String,
    #[serde(default)]
    pub tech_stack: Vec<TechBadge>,
    pub projects: Vec<ProjectEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NavLink {
    pub name: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HeroCopy {
    pub headline: Vec<String>,
    pub tagline: String,
    pub cta: String,
    pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub location: String,
    pub pitch: String,
    #[serde(default)]
    pub email_placeholder: String,
    #[serde(default)]
    pub reply_note: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub hero: HeroCopy,
    pub skills: Vec<SkillCard>,
    pub timeline: Vec<TimelineEntry>,
    pub pages: Vec<CategoryPage>,
    pub navigation: Vec<NavLink>,
    pub socials: Vec<SocialLink>,
    pub contact: ContactDetails,
}

impl SiteContent {
    /// Parses and validates the content bundled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(SITE_JSON)
    }

    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn page(&self, slug: &str) -> Option<&CategoryPage> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut slugs = HashSet::new();

        for page in &self.pages {
            if page.slug.trim().is_empty() {
                return Err(ContentError::EmptySlug(page.title.clone()));
            }

            if !slugs.insert(page.slug.as_str()) {
                return Err(ContentError::DuplicatePageSlug(page.slug.clone()));
            }

            let mut ids = HashSet::new();
            for project in &page.projects {
                if !ids.insert(project.id) {
                    return Err(ContentError::DuplicateProjectId {
                        page: page.slug.clone(),
                        id: project.id,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_site(pages: serde_json::Value) -> String {
        json!({
            "owner": "TEST",
            "hero": { "headline": ["A"], "tagline": "t", "cta": "c", "image": "/i.jpg" },
            "skills": [],
            "timeline": [
                { "date_range": "2020", "title": "Editor", "organization": "Studio", "description": "d" }
            ],
            "pages": pages,
            "navigation": [],
            "socials": [],
            "contact": { "email": "e", "location": "l", "pitch": "p" }
        })
        .to_string()
    }

    fn project(id: u32) -> serde_json::Value {
        json!({
            "id": id,
            "title": "t",
            "description": "d",
            "image_ref": "/p.jpg",
            "category": "c"
        })
    }

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::bundled().expect("bundled content parses");
        assert_eq!(content.timeline.len(), 8);
        assert!(content.page("video-editing").is_some());
        assert!(content.page("copywriting").is_some());
        assert!(content.page("missing").is_none());
    }

    #[test]
    fn bundled_category_pages_keep_every_project() {
        let content = SiteContent::bundled().expect("bundled content parses");

        let marketing = content.page("marketing").expect("marketing page");
        let titles: Vec<_> = marketing.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(marketing.projects.len(), 6);
        assert!(titles.contains(&"SEO Optimization"));
        assert!(titles.contains(&"Marketing Analytics Dashboard"));

        let frontend = content.page("frontend").expect("frontend page");
        let badges: Vec<_> = frontend.tech_stack.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(badges.len(), 8);
        assert!(badges.contains(&"Shopify"));
        assert!(badges.contains(&"Wix"));
    }

    #[test]
    fn bundled_contact_carries_form_copy() {
        let content = SiteContent::bundled().expect("bundled content parses");
        assert!(content.contact.email_placeholder.contains("Send your e-mail"));
        assert!(content.contact.reply_note.starts_with("I'll get back to you"));
    }

    #[test]
    fn tech_stack_defaults_to_empty() {
        let raw = minimal_site(json!([
            { "slug": "design", "title": "Design", "subtitle": "s", "backdrop": "b", "projects": [] }
        ]));
        let content = SiteContent::parse(&raw).expect("valid content");
        assert!(content.pages[0].tech_stack.is_empty());
    }

    #[test]
    fn timeline_color_tag_defaults_when_missing() {
        let raw = minimal_site(json!([]));
        let content = SiteContent::parse(&raw).expect("valid content");
        assert_eq!(content.timeline[0].color_tag, DEFAULT_COLOR_TAG);
    }

    #[test]
    fn optional_project_links_default_to_none() {
        let raw = minimal_site(json!([
            { "slug": "design", "title": "Design", "subtitle": "s", "backdrop": "b", "projects": [project(1)] }
        ]));
        let content = SiteContent::parse(&raw).expect("valid content");
        let entry = &content.pages[0].projects[0];
        assert_eq!(entry.external_url, None);
        assert_eq!(entry.video_ref, None);
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let raw = minimal_site(json!([
            { "slug": "design", "title": "Design", "subtitle": "s", "backdrop": "b", "projects": [project(1), project(1)] }
        ]));

        let error = SiteContent::parse(&raw).expect_err("duplicate ids must fail");
        assert!(matches!(
            error,
            ContentError::DuplicateProjectId { ref page, id: 1 } if page == "design"
        ));
    }

    #[test]
    fn same_project_id_on_different_pages_is_allowed() {
        let raw = minimal_site(json!([
            { "slug": "design", "title": "Design", "subtitle": "s", "backdrop": "b", "projects": [project(1)] },
            { "slug": "marketing", "title": "Marketing", "subtitle": "s", "backdrop": "b", "projects": [project(1)] }
        ]));

        assert!(SiteContent::parse(&raw).is_ok());
    }

    #[test]
    fn duplicate_or_empty_slugs_are_rejected() {
        let duplicate = minimal_site(json!([
            { "slug": "design", "title": "A", "subtitle": "s", "backdrop": "b", "projects": [] },
            { "slug": "design", "title": "B", "subtitle": "s", "backdrop": "b", "projects": [] }
        ]));
        assert!(matches!(
            SiteContent::parse(&duplicate),
            Err(ContentError::DuplicatePageSlug(_))
        ));

        let empty = minimal_site(json!([
            { "slug": " ", "title": "Blank", "subtitle": "s", "backdrop": "b", "projects": [] }
        ]));
        assert!(matches!(SiteContent::parse(&empty), Err(ContentError::EmptySlug(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SiteContent::parse("{"), Err(ContentError::Parse(_))));
    }
}
