// ============================================================================
// NAVBAR - Marca + links, drawer en pantallas estrechas
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_drawer;
use crate::router::Route;
use crate::utils::constants::BRAND_NAME;

#[derive(Properties, PartialEq)]
struct NavItemProps {
    to: Route,
    label: &'static str,
    active: bool,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let underline = classes!(
        "w-2/4", "h-[1.5px]", "bg-blue-600", "border-none",
        if props.active { "block" } else { "hidden group-hover:block" },
    );

    html! {
        <Link<Route> to={props.to.clone()} classes="nav-link flex flex-col items-center gap-1 group">
            <p class="transition duration-200 group-hover:-translate-y-0.5">{props.label}</p>
            <hr class={underline} />
        </Link<Route>>
    }
}

const NAV_LINKS: [(Route, &str); 2] = [
    (Route::JobListings, "All Job Listings"),
    (Route::Upload, "Jobs Recommendor"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let drawer = use_drawer();
    let current = use_route::<Route>();

    let links = |close_on_click: Option<Callback<MouseEvent>>| -> Html {
        NAV_LINKS
            .iter()
            .map(|(route, label)| {
                let active = current.as_ref() == Some(route);
                html! {
                    <li key={*label} onclick={close_on_click.clone()}>
                        <NavItem to={route.clone()} label={*label} active={active} />
                    </li>
                }
            })
            .collect()
    };

    let is_open = drawer.state.open;

    html! {
        <nav class="relative flex items-center justify-between py-5 px-10 bg-white shadow font-medium">
            <Link<Route> to={Route::Upload} classes="brand text-3xl font-bold text-blue-600">
                {BRAND_NAME}
            </Link<Route>>

            <ul class="hidden sm:flex gap-10 text-gray-700">
                {links(None)}
            </ul>

            <button
                type="button"
                class="menu-toggle sm:hidden text-2xl"
                aria-label="Open menu"
                aria-expanded={is_open.to_string()}
                onclick={drawer.toggle.clone()}
            >
                {"☰"}
            </button>

            if is_open {
                <div class="drawer-overlay fixed inset-0 bg-black/40 z-40 sm:hidden" onclick={drawer.close.clone()}></div>
                <aside class="drawer fixed top-0 right-0 h-full w-64 bg-white shadow-xl z-50 p-6 flex flex-col gap-6 sm:hidden">
                    <button
                        type="button"
                        class="drawer-close self-end text-2xl"
                        aria-label="Close menu"
                        onclick={drawer.close.clone()}
                    >
                        {"✕"}
                    </button>
                    <ul class="flex flex-col gap-6 text-gray-700">
                        {links(Some(drawer.close.clone()))}
                    </ul>
                </aside>
            }
        </nav>
    }
}
