use crate::api::ApiError;
use leptos::*;

/// Inline error box. Unauthorized errors are handled by the client's
/// response hook and never rendered here.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    let visible = Signal::derive(move || error.get().filter(|err| !err.is_unauthorized()));
    view! {
        <Show when=move || visible.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                <div class="font-bold">{move || visible.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || visible.get().map(|e| {
                    if e.code == "VALIDATION_ERROR" || e.code == "UNKNOWN" || e.code.is_empty() {
                        ().into_view()
                    } else {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    }
                })}
            </div>
        </Show>
    }
}
