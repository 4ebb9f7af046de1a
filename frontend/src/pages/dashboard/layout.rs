use crate::pages::dashboard::view_model::DashboardSection;
use leptos::*;

#[component]
pub fn DashboardHeader(#[prop(into)] greeting: Signal<String>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center py-6">
                <div>
                    <h1 class="text-3xl font-bold text-fg">{"Vacation Management"}</h1>
                    <p class="text-sm text-fg-muted">{move || greeting.get()}</p>
                </div>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover"
                    on:click=move |_| on_logout.call(())
                >
                    {"Log out"}
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn SectionNav(
    #[prop(into)] active: Signal<DashboardSection>,
    is_admin: bool,
    on_select: Callback<DashboardSection>,
) -> impl IntoView {
    view! {
        <nav class="flex gap-4 border-b border-border" aria-label="Sections">
            {DashboardSection::available(is_admin)
                .into_iter()
                .map(|section| {
                    let class = move || {
                        if active.get() == section {
                            "px-3 py-2 text-sm font-medium border-b-2 border-action-primary-bg text-fg"
                        } else {
                            "px-3 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                        }
                    };
                    view! {
                        <button type="button" class=class on:click=move |_| on_select.call(section)>
                            {section.label(is_admin)}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn nav_hides_users_for_employees() {
        let html = render_to_string(|| {
            let active = create_rw_signal(DashboardSection::Overview);
            view! { <SectionNav active=active is_admin=false on_select=Callback::new(|_| ()) /> }
        });
        assert!(html.contains("My requests"));
        assert!(!html.contains("Users"));
    }
}
