//! Patient Panel Component
//!
//! Detail view for one patient with editable health status, medical history
//! and notes. Each field saves independently through its PUT endpoint; a
//! failed save leaves the local record unchanged.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::{is_mounted, mount_flag, AppContext};
use crate::models::Patient;

/// Which PUT endpoint a field row saves through
#[derive(Clone, Copy, PartialEq)]
pub enum PatientField {
    HealthStatus,
    MedicalHistory,
    Notes,
}

impl PatientField {
    fn label(self) -> &'static str {
        match self {
            PatientField::HealthStatus => "Health status",
            PatientField::MedicalHistory => "Medical history",
            PatientField::Notes => "Notes",
        }
    }

    fn current(self, patient: &Patient) -> String {
        match self {
            PatientField::HealthStatus => patient.health_status.clone(),
            PatientField::MedicalHistory => patient.medical_history.clone(),
            PatientField::Notes => patient.notes.clone(),
        }
        .unwrap_or_default()
    }

    async fn save(self, patient_id: u32, value: &str) -> Result<(), ApiError> {
        match self {
            PatientField::HealthStatus => api::update_health_status(patient_id, value).await,
            PatientField::MedicalHistory => api::update_medical_history(patient_id, value).await,
            PatientField::Notes => api::update_patient_notes(patient_id, value).await,
        }
    }

    fn apply(self, patient: &mut Patient, value: String) {
        let slot = match self {
            PatientField::HealthStatus => &mut patient.health_status,
            PatientField::MedicalHistory => &mut patient.medical_history,
            PatientField::Notes => &mut patient.notes,
        };
        *slot = Some(value);
    }
}

#[component]
fn PatientFieldEditor(
    field: PatientField,
    patient: ReadSignal<Option<Patient>>,
    set_patient: WriteSignal<Option<Patient>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let alive = mount_flag();

    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Reset the draft whenever another patient is loaded
    Effect::new(move |_| {
        let current = patient
            .get()
            .map(|p| field.current(&p))
            .unwrap_or_default();
        set_draft.set(current);
    });

    let on_save = move |_| {
        // Pre-flight: refuse to send without a patient identifier
        let Some(id) = patient.get().map(|p| p.id) else {
            ctx.flash_error(ApiError::MissingId("patient").to_string());
            return;
        };
        let value = draft.get();
        set_saving.set(true);
        spawn_local(async move {
            let result = field.save(id, &value).await;
            if !is_mounted(alive) {
                return;
            }
            set_saving.set(false);
            match result {
                Ok(()) => set_patient.update(|p| {
                    if let Some(p) = p.as_mut() {
                        field.apply(p, value);
                    }
                }),
                Err(err) => {
                    ctx.flash_error(format!("Failed to save {}: {}", field.label(), err))
                }
            }
        });
    };

    view! {
        <div class="patient-field">
            <label>{field.label()}</label>
            <textarea
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            ></textarea>
            <button disabled=move || saving.get() on:click=on_save>
                {move || if saving.get() { "Saving…" } else { "Save" }}
            </button>
        </div>
    }
}

#[component]
pub fn PatientPanel(
    patient: ReadSignal<Option<Patient>>,
    set_patient: WriteSignal<Option<Patient>>,
) -> impl IntoView {
    view! {
        {move || match patient.get() {
            Some(p) => view! {
                <div class="patient-panel">
                    <h3>{p.name.clone()}</h3>
                    {p.age.map(|age| view! { <span class="patient-age">{format!("{} years", age)}</span> })}
                    {p.emergency_contact.clone().map(|c| view! {
                        <span class="patient-contact">{format!("Emergency contact: {}", c)}</span>
                    })}
                    <PatientFieldEditor field=PatientField::HealthStatus patient=patient set_patient=set_patient />
                    <PatientFieldEditor field=PatientField::MedicalHistory patient=patient set_patient=set_patient />
                    <PatientFieldEditor field=PatientField::Notes patient=patient set_patient=set_patient />
                </div>
            }.into_any(),
            None => view! { <div class="patient-panel empty">"No patient selected"</div> }.into_any(),
        }}
    }
}
