use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    config::{DASHBOARD_PATH, LOGIN_PATH},
    pages::{DashboardPage, LoginPage},
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH, DASHBOARD_PATH];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[DASHBOARD_PATH];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Vacation Management"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomeRedirect/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
                    <Route path="/*any" view=HomeRedirect/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn HomeRedirect() -> impl IntoView {
    view! { <Redirect path=DASHBOARD_PATH/> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}
