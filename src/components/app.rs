use std::rc::Rc;

use leptos::*;
use leptos_meta::*;

use crate::components::{
    day_tabs::DayTabs,
    filter_bar::FilterBar,
    loading::{LoadErrorView, LoadingView},
    my_timetable::MyTimetable,
    route_map::RouteMap,
    timetable_grid::TimetableGrid,
    toast::{Toast, ToastNotification},
};
use crate::config::AppConfig;
use crate::constants::FESTIVAL_DAYS;
use crate::dataset::fetch_timetable;
use crate::logging::log;
use crate::models::{StageFilter, TimetableData, ViewMode};
use crate::schedule::day_counts;
use crate::storage::{browser_store, BrowserSelection, SelectionStore};

#[component]
fn FestivalView(data: Rc<TimetableData>, selection: RwSignal<BrowserSelection>) -> impl IntoView {
    let festival_name = use_context::<AppConfig>().unwrap_or_default().festival_name;

    let (view_mode, set_view_mode) = create_signal(ViewMode::default());
    let (selected_day, set_selected_day) = create_signal(FESTIVAL_DAYS[0]);
    let (stage_filter, set_stage_filter) = create_signal(StageFilter::All);
    let (search_text, set_search_text) = create_signal(String::new());
    let (toast, set_toast) = create_signal(Toast::default());

    let selected_count = Signal::derive(move || selection.with(BrowserSelection::len));
    let counts_data = Rc::clone(&data);
    let counts = Signal::derive(move || selection.with(|s| day_counts(&counts_data, s.ids())));

    let panel = move || {
        let tabs_data = Rc::clone(&data);
        let data = Rc::clone(&data);
        match view_mode.get() {
            ViewMode::Timetable => {
                let stages = data.stages.clone();
                view! {
                    <DayTabs data=tabs_data selected_day=selected_day set_selected_day=set_selected_day />
                    <FilterBar
                        stages=stages
                        stage_filter=stage_filter
                        set_stage_filter=set_stage_filter
                        search_text=search_text
                        set_search_text=set_search_text
                    />
                    <TimetableGrid
                        data=data
                        selected_day=selected_day
                        stage_filter=stage_filter
                        search_text=search_text
                        selection=selection
                    />
                }.into_view()
            }
            ViewMode::MyTimetable => view! {
                <DayTabs data=tabs_data selected_day=selected_day set_selected_day=set_selected_day counts=counts />
                <MyTimetable data=data selected_day=selected_day selection=selection set_toast=set_toast />
            }.into_view(),
            ViewMode::Map => view! {
                <DayTabs data=tabs_data selected_day=selected_day set_selected_day=set_selected_day counts=counts />
                <RouteMap data=data selected_day=selected_day selection=selection />
            }.into_view(),
        }
    };

    view! {
        <header class="app-header">
            <h1>{festival_name}</h1>
            <nav class="view-tabs">
                {ViewMode::ALL.iter().map(|&mode| view! {
                    <button
                        class=move || if view_mode.get() == mode { "view-tab active" } else { "view-tab" }
                        on:click=move |_| set_view_mode.set(mode)
                    >
                        <i class=mode.icon_class()></i>
                        " " {mode.label()}
                        {(mode == ViewMode::MyTimetable).then(|| view! {
                            <span class="selection-count">{selected_count}</span>
                        })}
                    </button>
                }).collect::<Vec<_>>()}
            </nav>
        </header>
        <main class="app-main">
            {panel}
        </main>
        <ToastNotification toast=toast />
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    provide_context(config.clone());

    let selection = create_rw_signal(SelectionStore::load(browser_store(), config.storage_key.clone()));

    let dataset_url = config.dataset_url.clone();
    let timetable = create_local_resource(
        || (),
        move |()| {
            let url = dataset_url.clone();
            async move {
                let result = fetch_timetable(&url).await.map(Rc::new);
                if let Err(e) = &result {
                    leptos::logging::error!("Failed to load timetable from {url}: {e}");
                }
                result
            }
        },
    );

    // Stored ids from an older dataset are dropped once the current one is known
    create_effect(move |_| {
        if let Some(Ok(data)) = timetable.get() {
            let dropped = selection.try_update(|s| s.prune_unknown(&data)).unwrap_or_default();
            log!("Selection checked against dataset, {} stale", dropped);
        }
    });

    view! {
        <Title text=config.festival_name.clone()/>

        <div class="app">
            {move || match timetable.get() {
                None => view! { <LoadingView /> }.into_view(),
                Some(Err(error)) => view! { <LoadErrorView error=error /> }.into_view(),
                Some(Ok(data)) => view! { <FestivalView data=data selection=selection /> }.into_view(),
            }}
        </div>
    }
}
