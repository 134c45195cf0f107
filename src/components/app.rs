use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dashboard::AdminDashboard;
use crate::components::login::AdminLogin;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/admin")]
    Login,
    #[at("/admin/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <AdminLogin /> },
        Route::Dashboard => html! { <AdminDashboard /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
