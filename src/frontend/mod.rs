mod dom;
mod home;
mod hooks;
mod nav;
mod projects;
mod timeline;
mod video;

use serde_json::json;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::logging::{log_event, LogLevel};

use home::HomePage;
use nav::MainNav;
use projects::CategoryView;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:slug")]
    Category { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Loaded once in `run` and handed down through a `ContextProvider`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
    pub content: Rc<SiteContent>,
    pub reduced_motion: bool,
}

impl SiteContext {
    /// In-app route for an internal link, or `None` when it must stay a
    /// plain anchor (fragments, external URLs, unknown pages).
    pub fn route_for(&self, href: &str) -> Option<Route> {
        if href.contains('#') || !href.starts_with('/') {
            return None;
        }

        match Route::recognize(href)? {
            Route::Home => Some(Route::Home),
            Route::Category { slug } if self.content.page(&slug).is_some() => {
                Some(Route::Category { slug })
            }
            _ => None,
        }
    }

    pub fn log(&self, level: LogLevel, event: &str, fields: serde_json::Value) {
        log_event(self.config.log_level, level, event, fields);
    }
}

#[derive(Properties, PartialEq)]
struct SiteLinkProps {
    href: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
    #[prop_or_default]
    children: Html,
}

#[function_component(SiteLink)]
fn site_link(props: &SiteLinkProps) -> Html {
    let site = hooks::use_site();

    match site.route_for(&props.href) {
        Some(route) => html! {
            <span onclick={props.onclick.clone()}>
                <Link<Route> to={route} classes={props.class.clone()}>
                    {props.children.clone()}
                </Link<Route>>
            </span>
        },
        None => html! {
            <a class={props.class.clone()} href={props.href.clone()} onclick={props.onclick.clone()}>
                {props.children.clone()}
            </a>
        },
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    html! {
        <section class="not-found" aria-labelledby="not-found-heading">
            <h1 id="not-found-heading">{"404"}</h1>
            <p class="muted">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!("link")}>{"Back to home"}</Link<Route>>
        </section>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Category { slug } => html! { <CategoryView slug={slug} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: SiteContext,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<SiteContext> context={props.site.clone()}>
            <BrowserRouter>
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <MainNav />
                <main id="content">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<SiteContext>>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = SiteConfig::from_lookup(|key| root.get_attribute(&format!("data-{key}")));

    let content = match SiteContent::bundled() {
        Ok(content) => content,
        Err(err) => {
            log_event(
                config.log_level,
                LogLevel::Info,
                "content_invalid",
                json!({ "error": err.to_string() }),
            );
            root.set_text_content(Some("This site could not be loaded."));
            return;
        }
    };

    let site = SiteContext {
        reduced_motion: dom::prefers_reduced_motion(),
        config: Rc::new(config),
        content: Rc::new(content),
    };

    site.log(
        LogLevel::Info,
        "app_mounted",
        json!({
            "timeline_entries": site.content.timeline.len(),
            "pages": site.content.pages.len(),
            "reduced_motion": site.reduced_motion,
            "log_level": site.config.log_level.as_str(),
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { site }).render();
}
