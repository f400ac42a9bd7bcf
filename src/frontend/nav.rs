use yew::prelude::*;
use yew_router::prelude::*;

use super::hooks::use_site;
use super::{Route, SiteLink};

#[function_component(MainNav)]
pub fn main_nav() -> Html {
    let site = use_site();
    let open = use_state_eq(|| false);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_navigate = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let toggle_label = if *open { "Close menu" } else { "Open menu" };

    html! {
        <header class={classes!("site-header", open.then_some("is-open"))}>
            <Link<Route> to={Route::Home} classes={classes!("site-owner")}>
                {site.content.owner.clone()}
            </Link<Route>>
            <button
                class="menu-toggle"
                type="button"
                aria-label={toggle_label}
                aria-expanded={(*open).to_string()}
                aria-controls="site-menu"
                onclick={on_toggle}
            >
                <span class="menu-icon" aria-hidden="true" />
            </button>

            <nav id="site-menu" class="menu-overlay" aria-label="Main">
                <ul class="menu-links">
                    { for site.content.navigation.iter().map(|item| html! {
                        <li>
                            <SiteLink href={item.href.clone()} class={classes!("menu-link")} onclick={on_navigate.clone()}>
                                {item.name.clone()}
                            </SiteLink>
                        </li>
                    }) }
                </ul>
                <ul class="menu-socials inline-list">
                    { for site.content.socials.iter().map(|social| html! {
                        <li>
                            <a
                                class="link"
                                href={social.href.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                onclick={on_navigate.clone()}
                            >
                                {social.name.clone()}
                                <span class="sr-only">{" (opens in a new tab)"}</span>
                            </a>
                        </li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}
