use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::hooks::RecommendationsProvider;
use crate::router::{switch, Route};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <RecommendationsProvider>
                <Navbar />
                <main>
                    <Switch<Route> render={switch} />
                </main>
            </RecommendationsProvider>
        </BrowserRouter>
    }
}
