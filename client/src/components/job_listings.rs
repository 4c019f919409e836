//! Open positions with search, department and location filters.

use leptos::prelude::*;

use site::catalog::{JOBS, departments, filter_jobs, locations};

#[component]
pub fn JobListings(
    /// Receives the job title when "Jetzt bewerben" is clicked.
    on_apply: Callback<String>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let department = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        filter_jobs(JOBS, &search.get(), &department.get(), &location.get())
            .into_iter()
            .copied()
            .collect::<Vec<_>>()
    });

    let reset = move |_| {
        search.set(String::new());
        department.set(String::new());
        location.set(String::new());
    };

    let select = |label: &'static str, value: RwSignal<String>, options: Vec<&'static str>| {
        view! {
            <label class="job-filter__field">
                <span class="form__label">{label}</span>
                <select prop:value=move || value.get() on:change=move |ev| value.set(event_target_value(&ev))>
                    <option value="">"Alle"</option>
                    {options.into_iter().map(|o| view! { <option value=o>{o}</option> }).collect_view()}
                </select>
            </label>
        }
    };

    view! {
        <div class="job-listings">
            <div class="job-filter">
                <label class="job-filter__field">
                    <span class="form__label">"Suche"</span>
                    <input
                        type="search"
                        placeholder="Jobtitel oder Standort"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </label>
                {select("Abteilung", department, departments(JOBS))}
                {select("Standort", location, locations(JOBS))}
            </div>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <div class="job-listings__empty">
                            <p>"Keine passenden Stellen gefunden."</p>
                            <button type="button" class="button button--ghost" on:click=reset>
                                "Filter zurücksetzen"
                            </button>
                        </div>
                    }
                }
            >
                <ul class="job-listings__list">
                    <For each=move || visible.get() key=|job| job.id let:job>
                        <li class="job-card">
                            <div class="job-card__head">
                                <h3 class="job-card__title">{job.title}</h3>
                                <span class="job-card__type">{job.employment_type}</span>
                            </div>
                            <p class="job-card__meta">{format!("{} · {}", job.department, job.location)}</p>
                            <p class="job-card__summary">{job.summary}</p>
                            <button
                                type="button"
                                class="button button--primary"
                                on:click=move |_| on_apply.run(job.title.to_owned())
                            >
                                "Jetzt bewerben"
                            </button>
                        </li>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
