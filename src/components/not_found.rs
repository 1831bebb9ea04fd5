use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="min-h-[60vh] flex flex-col items-center justify-center gap-4 text-center">
            <h1 class="text-6xl font-bold text-blue-600">{"404"}</h1>
            <p class="text-xl text-gray-600">{"Page not found"}</p>
            <Link<Route> to={Route::Upload} classes="text-blue-500 hover:underline">
                {"Back to home"}
            </Link<Route>>
        </section>
    }
}
