use crate::components::guard::RequireAdmin;
use crate::config::LOGIN_PATH;
use crate::pages::calendar::CalendarPanel;
use crate::pages::dashboard::{
    components::{admin_panel::AdminPanel, balance::BalanceCards, quick_actions::QuickActions},
    layout::{DashboardHeader, SectionNav},
    utils::greeting,
    view_model::{active_section, refresh_counter, DashboardSection, DashboardState},
};
use crate::pages::users::UsersPanel;
use crate::pages::vacations::{VacationFormPanel, VacationListPanel};
use crate::state::session::{use_session, SessionContext};
use leptos::*;

pub fn sign_out(session: SessionContext) {
    session.logout();
    session.api().navigator().navigate(LOGIN_PATH);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let state = create_rw_signal(DashboardState::default());
    let is_admin = session.is_admin();

    let user = Signal::derive(move || session.user());
    let greeting_text =
        Signal::derive(move || user.with(|u| u.as_ref().map(greeting).unwrap_or_default()));
    let section = active_section(state);
    let refresh = refresh_counter(state);

    let open = Callback::new(move |target: DashboardSection| {
        state.update(|s| *s = std::mem::take(s).open(target, is_admin));
    });
    let open_form = Callback::new(move |_: ()| state.update(|s| *s = std::mem::take(s).open_form()));
    let close_form = Callback::new(move |_: ()| state.update(|s| *s = std::mem::take(s).close_form()));
    let submitted = Callback::new(move |_: ()| state.update(|s| *s = std::mem::take(s).submitted()));

    view! {
        <div class="min-h-screen bg-surface">
            <DashboardHeader greeting=greeting_text on_logout=Callback::new(move |_| sign_out(session)) />
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8 space-y-6">
                <SectionNav active=section is_admin=is_admin on_select=open />
                <Show when=move || state.with(|s| s.form_open)>
                    <VacationFormPanel on_success=submitted on_cancel=close_form />
                </Show>
                {move || match section.get() {
                    DashboardSection::Overview => view! {
                        <div class="space-y-6">
                            <BalanceCards user=user />
                            <QuickActions is_admin=is_admin on_new_request=open_form on_open=open />
                            {is_admin.then(|| view! { <AdminPanel on_open=open /> })}
                        </div>
                    }
                    .into_view(),
                    DashboardSection::Vacations => view! { <VacationListPanel refresh=refresh /> }.into_view(),
                    DashboardSection::Calendar => view! { <CalendarPanel /> }.into_view(),
                    DashboardSection::Users => view! { <RequireAdmin><UsersPanel /></RequireAdmin> }.into_view(),
                }}
            </main>
        </div>
    }
}
