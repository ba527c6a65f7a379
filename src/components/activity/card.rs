use crate::components::activity::ParticipantsSection;
use crate::model::*;
use leptos::prelude::*;

#[component]
pub fn ActivityCard(activity: Activity, banner: RwSignal<MessageBanner>) -> impl IntoView {
    let name = activity.name.clone();
    let description = activity.details.description.clone();
    let schedule = activity.details.schedule.clone();
    let spots_left = activity.spots_left();
    let toggle = RwSignal::new(ParticipantToggle::new(activity.participant_count()));

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                <span class="badge">{format!("{} spots left", spots_left)}</span>
            </p>
            <button
                type="button"
                class="participants-toggle"
                aria-expanded=move || toggle.with(ParticipantToggle::aria_expanded)
                on:click=move |_| toggle.update(ParticipantToggle::toggle)
            >
                {move || toggle.with(ParticipantToggle::label)}
            </button>
            <ParticipantsSection
                activity
                hidden=Signal::derive(move || toggle.with(ParticipantToggle::is_hidden))
                banner
            />
        </div>
    }
}
