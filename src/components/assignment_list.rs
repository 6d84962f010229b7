//! Assignment List Component
//!
//! Patient/helper pairings for the active role. Selecting a row fetches the
//! associated patient and helper detail records; a row without a patient id
//! is reported before any request is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::PatientPanel;
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::models::{Assignment, Helper, Patient};

/// Which detail fetches a selected row can issue; `None` marks an id that is
/// missing and must be reported instead of fetched.
fn detail_requests(assignment: &Assignment) -> (Option<u32>, Option<(String, u32)>) {
    let patient = assignment.patient_id;
    let helper = assignment
        .helper_id
        .map(|id| (assignment.helper_type.clone(), id));
    (patient, helper)
}

#[component]
pub fn AssignmentList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let alive = mount_flag();

    let (assignments, set_assignments) = signal(Vec::<Assignment>::new());
    let (selected, set_selected) = signal::<Option<u32>>(None);
    let (patient, set_patient) = signal::<Option<Patient>>(None);
    let (helper, set_helper) = signal::<Option<Helper>>(None);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let role = ctx.current_role.get();
        spawn_local(async move {
            match api::list_assignments(role).await {
                Ok(loaded) => {
                    if is_mounted(alive) {
                        set_assignments.set(loaded);
                        set_selected.set(None);
                        set_patient.set(None);
                        set_helper.set(None);
                    }
                }
                Err(err) => {
                    if is_mounted(alive) {
                        ctx.flash_error(format!("Failed to load assignments: {}", err));
                    }
                }
            }
        });
    });

    // The two detail fetches are independent: a row missing one id still
    // loads the other record, and only the missing one is reported.
    let on_select = move |assignment: Assignment| {
        set_selected.set(Some(assignment.id));
        set_patient.set(None);
        set_helper.set(None);

        let (patient_id, helper) = detail_requests(&assignment);

        match patient_id {
            Some(patient_id) => spawn_local(async move {
                match api::get_patient(patient_id).await {
                    Ok(record) => {
                        if is_mounted(alive) {
                            set_patient.set(Some(record));
                        }
                    }
                    Err(err) => {
                        if is_mounted(alive) {
                            ctx.flash_error(format!("Failed to load patient: {}", err));
                        }
                    }
                }
            }),
            None => ctx.flash_error(ApiError::MissingId("patient").to_string()),
        }

        match helper {
            Some((helper_type, helper_id)) => spawn_local(async move {
                match api::get_helper(&helper_type, helper_id).await {
                    Ok(record) => {
                        if is_mounted(alive) {
                            set_helper.set(Some(record));
                        }
                    }
                    Err(err) => {
                        if is_mounted(alive) {
                            ctx.flash_error(format!("Failed to load helper: {}", err));
                        }
                    }
                }
            }),
            None => ctx.flash_error(ApiError::MissingId("helper").to_string()),
        }
    };

    view! {
        <section class="panel assignment-panel">
            <div class="assignment-list">
                <div class="panel-header">
                    <h2>"Assignments"</h2>
                </div>

                <For
                    each=move || assignments.get()
                    key=|a| a.id
                    children=move |assignment: Assignment| {
                        let id = assignment.id;
                        let row = assignment.clone();
                        let is_selected = move || selected.get() == Some(id);
                        view! {
                            <div
                                class=move || {
                                    if is_selected() { "assignment-row selected" } else { "assignment-row" }
                                }
                                on:click=move |_| on_select(row.clone())
                            >
                                <span class="assignment-patient">{assignment.patient_name.clone()}</span>
                                <span class="assignment-helper-type">{assignment.helper_type.clone()}</span>
                                <span class="assignment-status">{assignment.status.clone()}</span>
                                <span class="assignment-date">{assignment.assigned_date.clone()}</span>
                            </div>
                        }
                    }
                />

                {move || if assignments.get().is_empty() {
                    view! { <div class="empty-message">"No assignments"</div> }.into_any()
                } else {
                    view! { <div></div> }.into_any()
                }}
            </div>

            <div class="assignment-detail">
                <PatientPanel patient=patient set_patient=set_patient />

                {move || helper.get().map(|h| view! {
                    <div class="helper-panel">
                        <h3>{h.name.clone()}</h3>
                        <span class="helper-type">{h.helper_type.clone()}</span>
                        {h.phone.clone().map(|phone| view! { <span class="helper-phone">{phone}</span> })}
                        {h.availability.clone().map(|a| view! { <span class="helper-availability">{a}</span> })}
                    </div>
                })}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_assignment(patient_id: Option<u32>, helper_id: Option<u32>) -> Assignment {
        Assignment {
            id: 1,
            patient_id,
            patient_name: "A. Patient".to_string(),
            helper_id,
            helper_type: "volunteer".to_string(),
            status: "active".to_string(),
            assigned_date: "2026-08-01".to_string(),
        }
    }

    #[test]
    fn test_missing_patient_id_still_requests_helper() {
        let assignment = make_assignment(None, Some(7));
        let (patient, helper) = detail_requests(&assignment);
        assert_eq!(patient, None);
        assert_eq!(helper, Some(("volunteer".to_string(), 7)));
    }

    #[test]
    fn test_missing_helper_id_still_requests_patient() {
        let assignment = make_assignment(Some(4), None);
        let (patient, helper) = detail_requests(&assignment);
        assert_eq!(patient, Some(4));
        assert_eq!(helper, None);
    }
}
