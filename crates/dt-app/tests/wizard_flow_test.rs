use std::sync::Arc;

use dt_app::{GetProfileDraft, UpdateDraft, WizardOrchestrator};
use dt_core::form::{FieldName, StepOneInput, StepTwoInput, ValidationPolicy};
use dt_core::ports::DraftStorePort;
use dt_core::profile::{IncompleteDraft, PageOneSlice, PageTwoSlice};
use dt_core::wizard::{Route, StepId, WizardFlow, WizardStateMachine};
use dt_infra::{ChannelNavigator, InMemoryDraftStore, WatchWizardEventPort};
use tokio::sync::mpsc::UnboundedReceiver;

const SEDENTARY_LABEL: &str = "Sedentário (pouco ou nenhuma atividade física)";

struct Harness {
    orchestrator: WizardOrchestrator,
    store: Arc<InMemoryDraftStore>,
    routes: UnboundedReceiver<Route>,
}

impl Harness {
    fn drain_routes(&mut self) -> Vec<Route> {
        let mut routes = Vec::new();
        while let Ok(route) = self.routes.try_recv() {
            routes.push(route);
        }
        routes
    }
}

fn build(policy: ValidationPolicy) -> Harness {
    let store = Arc::new(InMemoryDraftStore::new());
    let (navigator, routes) = ChannelNavigator::channel();
    let (events, _rx) = WatchWizardEventPort::channel();

    let orchestrator = WizardOrchestrator::new(
        WizardStateMachine::new(WizardFlow::standard(), policy),
        Arc::new(UpdateDraft::new(store.clone())),
        Arc::new(navigator),
        Arc::new(events),
    );

    Harness {
        orchestrator,
        store,
        routes,
    }
}

fn ana() -> StepOneInput {
    StepOneInput::new("Ana", "60", "30", "1.70")
}

fn preferences() -> StepTwoInput {
    StepTwoInput::new("masculino", SEDENTARY_LABEL, "emagrecer")
}

#[tokio::test]
async fn wizard_flow_test_step_one_writes_height_as_weight_and_navigates_to_create() {
    let mut h = build(ValidationPolicy::default());

    let state = h.orchestrator.submit_biometrics(ana()).await;

    assert_eq!(state.step, StepId::Preferences);
    assert_eq!(h.drain_routes(), vec![Route::new("/create")]);
    assert_eq!(
        h.store.snapshot().await.page_one(),
        Some(&PageOneSlice {
            name: "Ana".into(),
            weight: "1.70".into(),
            age: "30".into(),
            height: "1.70".into(),
        })
    );
}

#[tokio::test]
async fn wizard_flow_test_step_one_single_empty_field_blocks_submit() {
    for field in [
        FieldName::Name,
        FieldName::Weight,
        FieldName::Age,
        FieldName::Height,
    ] {
        let mut h = build(ValidationPolicy::default());
        let mut input = ana();
        match field {
            FieldName::Name => input.name = Some(String::new()),
            FieldName::Weight => input.weight = Some(String::new()),
            FieldName::Age => input.age = Some(String::new()),
            _ => input.height = Some(String::new()),
        }

        let state = h.orchestrator.submit_biometrics(input).await;

        assert_eq!(state.step, StepId::Biometrics);
        assert_eq!(state.errors.fields(), vec![field]);
        assert!(h.drain_routes().is_empty(), "no navigation for {field}");
        assert!(h.store.snapshot().await.is_empty(), "no write for {field}");
    }
}

#[tokio::test]
async fn wizard_flow_test_step_two_single_missing_selection_blocks_submit() {
    for field in [FieldName::Gender, FieldName::Level, FieldName::Objective] {
        let mut h = build(ValidationPolicy::default());
        h.orchestrator.submit_biometrics(ana()).await;
        h.drain_routes();

        let mut input = preferences();
        match field {
            FieldName::Gender => input.gender = None,
            FieldName::Level => input.level = None,
            _ => input.objective = None,
        }

        let state = h.orchestrator.submit_preferences(input).await;

        assert_eq!(state.step, StepId::Preferences);
        assert_eq!(state.errors.fields(), vec![field]);
        assert!(h.drain_routes().is_empty());
        assert!(h.store.snapshot().await.page_two().is_none());
    }
}

#[tokio::test]
async fn wizard_flow_test_step_two_writes_values_verbatim_and_navigates_to_nutrition() {
    let mut h = build(ValidationPolicy::default());
    h.orchestrator.submit_biometrics(ana()).await;

    let state = h.orchestrator.submit_preferences(preferences()).await;

    assert!(state.is_finished());
    assert_eq!(
        h.drain_routes(),
        vec![Route::new("/create"), Route::new("/nutrition")]
    );
    assert_eq!(
        h.store.snapshot().await.page_two(),
        Some(&PageTwoSlice {
            gender: "masculino".into(),
            level: SEDENTARY_LABEL.into(),
            objective: "emagrecer".into(),
        })
    );

    let profile = GetProfileDraft::new(h.store.clone())
        .completed()
        .await
        .expect("both slices written");
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.level, SEDENTARY_LABEL);
}

#[tokio::test]
async fn wizard_flow_test_resubmitting_step_one_is_not_deduplicated() {
    let mut h = build(ValidationPolicy::default());

    h.orchestrator.submit_biometrics(ana()).await;
    let first = h.store.snapshot().await;
    h.orchestrator.submit_biometrics(ana()).await;
    let second = h.store.snapshot().await;

    assert_eq!(first, second);
    assert_eq!(
        h.drain_routes(),
        vec![Route::new("/create"), Route::new("/create")]
    );
}

#[tokio::test]
async fn wizard_flow_test_invalid_step_one_resubmit_keeps_step_two_reachable() {
    let mut h = build(ValidationPolicy::default());

    h.orchestrator.submit_biometrics(ana()).await;
    let mut blank_name = ana();
    blank_name.name = Some(String::new());
    let rejected = h.orchestrator.submit_biometrics(blank_name).await;

    assert_eq!(rejected.step, StepId::Preferences);
    assert_eq!(
        rejected.errors_on(StepId::Biometrics).map(|e| e.fields()),
        Some(vec![FieldName::Name])
    );

    let state = h.orchestrator.submit_preferences(preferences()).await;

    assert!(state.is_finished());
    assert_eq!(
        h.drain_routes(),
        vec![Route::new("/create"), Route::new("/nutrition")]
    );
    let draft = h.store.snapshot().await;
    assert_eq!(draft.page_one().map(|s| s.name.as_str()), Some("Ana"));
    assert_eq!(
        draft.page_two().map(|s| s.objective.as_str()),
        Some("emagrecer")
    );
}

#[tokio::test]
async fn wizard_flow_test_preferences_before_biometrics_is_ignored() {
    let mut h = build(ValidationPolicy::default());

    let state = h.orchestrator.submit_preferences(preferences()).await;

    assert_eq!(state.step, StepId::Biometrics);
    assert!(h.drain_routes().is_empty());
    assert_eq!(
        GetProfileDraft::new(h.store.clone()).completed().await,
        Err(IncompleteDraft::Empty)
    );
}

#[tokio::test]
async fn wizard_flow_test_unknown_option_passes_unless_sets_are_enforced() {
    let outside = StepTwoInput::new("feminino", "Atleta", "Manter");

    let open = build(ValidationPolicy::default());
    open.orchestrator.submit_biometrics(ana()).await;
    let state = open.orchestrator.submit_preferences(outside.clone()).await;
    assert!(state.is_finished());

    let closed_policy = ValidationPolicy {
        enforce_option_sets: true,
        ..Default::default()
    };
    let mut closed = build(closed_policy);
    closed.orchestrator.submit_biometrics(ana()).await;
    closed.drain_routes();
    let state = closed.orchestrator.submit_preferences(outside).await;
    assert_eq!(
        state.errors.fields(),
        vec![FieldName::Objective, FieldName::Level]
    );
    assert!(closed.drain_routes().is_empty());
}

#[tokio::test]
async fn wizard_flow_test_restart_discards_draft() {
    let mut h = build(ValidationPolicy::default());
    h.orchestrator.submit_biometrics(ana()).await;
    h.orchestrator.submit_preferences(preferences()).await;

    let state = h.orchestrator.restart().await;

    assert_eq!(state.step, StepId::Biometrics);
    assert!(h.store.snapshot().await.is_empty());
    assert_eq!(h.drain_routes().len(), 2);
}
