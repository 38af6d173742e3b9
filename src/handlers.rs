use crate::counter::ResetConfirmation;
use crate::errors::AppError;
use crate::models::{
    CountsResponse, IncrementRequest, IncrementResponse, ResetForm, ResetRequest, ResetResponse,
};
use crate::phrases::Phrase;
use crate::share::{share_links, ShareLinks};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.store.lock().await.snapshot();
    Html(render_index(&snapshot, &share_links(&state.public_url)))
}

pub async fn get_counts(State(state): State<AppState>) -> Json<CountsResponse> {
    let store = state.store.lock().await;
    Json(CountsResponse {
        snapshot: store.snapshot(),
        saved: store.is_durable(),
    })
}

pub async fn get_share(State(state): State<AppState>) -> Json<ShareLinks> {
    Json(share_links(&state.public_url))
}

pub async fn increment(
    State(state): State<AppState>,
    Json(payload): Json<IncrementRequest>,
) -> Json<IncrementResponse> {
    let phrase = Phrase::from_key(&payload.phrase);
    if phrase.is_none() {
        debug!("ignoring increment for unknown phrase {:?}", payload.phrase);
    }
    Json(apply_increment(&state, phrase).await)
}

pub async fn shortcut(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<IncrementResponse>, AppError> {
    let phrase = parse_shortcut(&key)?;
    Ok(Json(apply_increment(&state, phrase).await))
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Json<ResetResponse> {
    let confirmation = ResetConfirmation::from_answer(payload.confirm);
    Json(apply_reset(&state, confirmation).await)
}

pub async fn tap_form(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let phrase = parse_shortcut(&key)?;
    apply_increment(&state, phrase).await;
    Ok(Redirect::to("/"))
}

pub async fn reset_form(State(state): State<AppState>, Form(form): Form<ResetForm>) -> Redirect {
    let answer = form.confirm.as_deref().map(str::trim) == Some("yes");
    apply_reset(&state, ResetConfirmation::from_answer(answer)).await;
    Redirect::to("/")
}

fn parse_shortcut(key: &str) -> Result<Option<Phrase>, AppError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) => Ok(Phrase::from_shortcut(key)),
        _ => Err(AppError::bad_request("shortcut must be a single key")),
    }
}

async fn apply_increment(state: &AppState, phrase: Option<Phrase>) -> IncrementResponse {
    let (count, snapshot, saved) = {
        let mut store = state.store.lock().await;
        let count = phrase.map(|phrase| store.increment_phrase(phrase));
        (count, store.snapshot(), store.is_durable())
    };

    if let Some(phrase) = phrase {
        state.effects.counted(phrase, &snapshot);
    }

    IncrementResponse {
        phrase: phrase.map(|phrase| phrase.text().to_string()),
        count,
        snapshot,
        saved,
    }
}

async fn apply_reset(state: &AppState, confirmation: Option<ResetConfirmation>) -> ResetResponse {
    let reset = confirmation.is_some();
    let (snapshot, saved) = {
        let mut store = state.store.lock().await;
        if let Some(confirmation) = confirmation {
            store.reset_all(confirmation);
        }
        (store.snapshot(), store.is_durable())
    };

    if reset {
        state.effects.reset(&snapshot);
    } else {
        debug!("reset declined");
    }

    ResetResponse {
        reset,
        snapshot,
        saved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterStore;
    use crate::effects::Effects;
    use crate::models::Snapshot;
    use crate::storage::MemorySlot;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingEffects {
        events: Mutex<Vec<String>>,
    }

    impl RecordingEffects {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl Effects for RecordingEffects {
        fn counted(&self, phrase: Phrase, snapshot: &Snapshot) {
            self.events
                .lock()
                .unwrap()
                .push(format!("counted {} {}", phrase.slug(), snapshot.total));
        }

        fn reset(&self, snapshot: &Snapshot) {
            self.events
                .lock()
                .unwrap()
                .push(format!("reset {}", snapshot.total));
        }
    }

    fn test_state() -> (AppState, Arc<RecordingEffects>, MemorySlot) {
        let slot = MemorySlot::new();
        let effects = Arc::new(RecordingEffects::default());
        let store = CounterStore::load(Box::new(slot.clone()));
        let state = AppState::new(store, effects.clone(), "http://localhost:8080/");
        (state, effects, slot)
    }

    fn increment_request(phrase: &str) -> Json<IncrementRequest> {
        Json(IncrementRequest {
            phrase: phrase.to_string(),
        })
    }

    #[tokio::test]
    async fn increment_reports_count_and_fires_effect() {
        let (state, effects, _slot) = test_state();

        increment(State(state.clone()), increment_request("الله أكبر")).await;
        let Json(response) = increment(State(state.clone()), increment_request("allahu-akbar")).await;

        assert_eq!(response.phrase.as_deref(), Some("الله أكبر"));
        assert_eq!(response.count, Some(2));
        assert_eq!(response.snapshot.total, 2);
        assert!(response.saved);
        assert_eq!(effects.events(), vec!["counted allahu-akbar 1", "counted allahu-akbar 2"]);
    }

    #[tokio::test]
    async fn unknown_phrase_is_a_quiet_no_op() {
        let (state, effects, slot) = test_state();

        let Json(response) = increment(State(state), increment_request("not-a-real-phrase")).await;

        assert_eq!(response.phrase, None);
        assert_eq!(response.count, None);
        assert_eq!(response.snapshot.total, 0);
        assert!(effects.events().is_empty());
        assert!(slot.contents().is_none());
    }

    #[tokio::test]
    async fn shortcut_maps_digits_to_phrases() {
        let (state, _effects, _slot) = test_state();

        let Json(response) = shortcut(State(state.clone()), Path("2".to_string())).await.unwrap();
        assert_eq!(response.phrase.as_deref(), Some(Phrase::Alhamdulillah.text()));
        assert_eq!(response.count, Some(1));

        let Json(response) = shortcut(State(state.clone()), Path("9".to_string())).await.unwrap();
        assert_eq!(response.count, None);
        assert_eq!(response.snapshot.total, 1);

        let err = shortcut(State(state), Path("12".to_string())).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn declined_reset_keeps_counts() {
        let (state, effects, _slot) = test_state();
        increment(State(state.clone()), increment_request("الحمد لله")).await;

        let Json(response) = reset(State(state.clone()), Json(ResetRequest { confirm: false })).await;

        assert!(!response.reset);
        assert_eq!(response.snapshot.total, 1);
        assert_eq!(effects.events(), vec!["counted alhamdulillah 1"]);
    }

    #[tokio::test]
    async fn confirmed_reset_clears_and_fires_effect() {
        let (state, effects, slot) = test_state();
        increment(State(state.clone()), increment_request("الحمد لله")).await;

        let Json(response) = reset(State(state.clone()), Json(ResetRequest { confirm: true })).await;

        assert!(response.reset);
        assert_eq!(response.snapshot.total, 0);
        assert_eq!(effects.events().last().map(String::as_str), Some("reset 0"));
        assert_eq!(CounterStore::load(Box::new(slot)).total(), 0);
    }

    #[tokio::test]
    async fn reset_form_requires_yes() {
        let (state, _effects, _slot) = test_state();
        tap_form(State(state.clone()), Path("1".to_string())).await.unwrap();

        reset_form(State(state.clone()), Form(ResetForm { confirm: None })).await;
        assert_eq!(state.store.lock().await.total(), 1);

        reset_form(
            State(state.clone()),
            Form(ResetForm {
                confirm: Some("yes".to_string()),
            }),
        )
        .await;
        assert_eq!(state.store.lock().await.total(), 0);
    }

    #[tokio::test]
    async fn failed_write_is_reported_as_unsaved() {
        let (state, _effects, slot) = test_state();
        slot.reject_writes(true);

        let Json(response) = increment(State(state.clone()), increment_request("اللهم ارفع درجته")).await;
        assert_eq!(response.count, Some(1));
        assert!(!response.saved);

        let Json(counts) = get_counts(State(state)).await;
        assert_eq!(counts.snapshot.total, 1);
        assert!(!counts.saved);
    }

    #[tokio::test]
    async fn index_renders_current_counts() {
        let (state, _effects, _slot) = test_state();
        for _ in 0..7 {
            increment(State(state.clone()), increment_request("subhan-allah-wa-bihamdih")).await;
        }

        let Html(page) = index(State(state)).await;
        assert!(page.contains(r#"id="total-count">7<"#));
        assert!(page.contains("سبحان الله وبحمده"));
    }
}
