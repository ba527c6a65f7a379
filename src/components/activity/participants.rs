use crate::model::*;
use icondata::IoClose;
use leptos::{either::Either, ev, logging::*, prelude::*, task::spawn_local};

#[component]
pub fn ParticipantsSection(
    activity: Activity,
    #[prop(into)] hidden: Signal<bool>,
    banner: RwSignal<MessageBanner>,
) -> impl IntoView {
    // the list loses its bullets while any of its rows is being deleted
    let no_bullets = RwSignal::new(false);
    let name = activity.name.clone();

    let rows = activity
        .participant_entries()
        .into_iter()
        .map(|entry| match entry {
            ParticipantEntry::Member { email, initials } => Either::Left(view! {
                <ParticipantRow activity=name.clone() email initials no_bullets banner />
            }),
            ParticipantEntry::Placeholder => Either::Right(view! {
                <li class="participant-item no-one">{ParticipantEntry::PLACEHOLDER_TEXT}</li>
            }),
        })
        .collect_view();

    view! {
        <div class="participants" class:hidden=move || hidden.get()>
            <p class="participants-title">"Registered participants:"</p>
            <ul class="participants-list" class=("no-bullets", move || no_bullets.get())>
                {rows}
            </ul>
        </div>
    }
}

#[component]
pub fn ParticipantRow(
    activity: String,
    email: String,
    initials: String,
    no_bullets: RwSignal<bool>,
    banner: RwSignal<MessageBanner>,
) -> impl IntoView {
    let row = RwSignal::new(RowState::default());
    let aria_label = format!("Remove {}", email);

    let on_delete = {
        let email = email.clone();
        move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            no_bullets.set(true);
            row.update(RowState::begin);

            let activity = activity.clone();
            let email = email.clone();
            spawn_local(async move {
                log!("removing {} from {}", email, activity);
                let outcome = match HttpApi::from_window() {
                    Ok(api) => remove_participant(&api, &activity, &email).await,
                    Err(e) => {
                        error!("Error removing participant: {}", e);
                        RemovalOutcome::failed()
                    }
                };

                match row.try_update(|row| row.apply(outcome)) {
                    Some(AfterRemoval::Reload) => reload_page(),
                    Some(AfterRemoval::Notify(notice)) => {
                        banner.update(|banner| {
                            banner.show(notice);
                        });
                        no_bullets.set(false);
                    }
                    None => warn!("removal finished after the row was gone"),
                }
            });
        }
    };

    view! {
        <li class="participant-item" class:deleting=move || row.with(RowState::is_deleting)>
            <span class="avatar">{initials}</span>
            <span class="participant-label">{email}</span>
            <button type="button" class="delete-btn" aria-label=aria_label on:click=on_delete>
                <svg viewBox=IoClose.view_box inner_html=IoClose.data></svg>
            </button>
        </li>
    }
}
