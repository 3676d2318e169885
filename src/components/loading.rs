use leptos::{component, view, IntoView};

use crate::dataset::LoadError;

#[component]
#[must_use]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-view">
            <div class="loading-spinner"></div>
            <p>"Loading timetable..."</p>
        </div>
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().reload() {
        leptos::logging::error!("Reload failed: {e:?}");
    }
}

/// Persistent error screen shown when the dataset could not be loaded
#[component]
#[must_use]
pub fn LoadErrorView(error: LoadError) -> impl IntoView {
    view! {
        <div class="load-error">
            <i class="fa-solid fa-circle-exclamation"></i>
            <h2>"Could not load the timetable"</h2>
            <p class="load-error-detail">{error.to_string()}</p>
            <button class="reload-button" on:click=move |_| reload_page()>
                <i class="fa-solid fa-rotate-right"></i>
                " Reload"
            </button>
        </div>
    }
}
