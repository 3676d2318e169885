use std::rc::Rc;

use leptos::{component, view, IntoView, ReadSignal, Signal, SignalGet, SignalSet, WriteSignal};

use crate::constants::FESTIVAL_DAYS;
use crate::models::TimetableData;

#[component]
#[must_use]
pub fn DayTabs(
    data: Rc<TimetableData>,
    selected_day: ReadSignal<u8>,
    set_selected_day: WriteSignal<u8>,
    /// Per-day number of selected performances; tabs show a badge when given
    #[prop(optional, into)]
    counts: Option<Signal<Vec<(u8, usize)>>>,
) -> impl IntoView {
    view! {
        <div class="day-tabs">
            {FESTIVAL_DAYS.iter().map(|&day| {
                let label = data.day_label(day);
                let title = format!("Show {label}");
                view! {
                    <button
                        class=move || if selected_day.get() == day { "day-tab active" } else { "day-tab" }
                        on:click=move |_| set_selected_day.set(day)
                        title=title
                    >
                        {label}
                        {move || counts.map(|counts| {
                            let count = counts
                                .get()
                                .iter()
                                .find(|(d, _)| *d == day)
                                .map_or(0, |&(_, n)| n);
                            view! { <span class="day-count">{count}</span> }
                        })}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
