//! Screen host: shows the screen for the current route and forwards
//! submits to the orchestrator until the flow reaches the nutrition step.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};

use dt_core::form::layout::ScreenLayout;
use dt_core::form::{FormState, StepForm, StepOneInput, StepTwoInput};
use dt_core::profile::UserProfile;
use dt_core::wizard::{Route, StepId, WizardState};

use crate::bootstrap::WizardRuntime;
use crate::terminal::{fill_form, show_profile, Terminal};

pub async fn run<R: BufRead, W: Write>(
    runtime: &mut WizardRuntime,
    term: &mut Terminal<R, W>,
) -> anyhow::Result<UserProfile> {
    let session_id = runtime.orchestrator.session_id().await;
    info!(session_id = %session_id, "wizard started");

    let mut step = runtime.orchestrator.get_state().await.step;
    loop {
        let route = match step {
            StepId::Biometrics => {
                run_screen::<StepOneInput, _, _>(runtime, term, StepId::Biometrics).await?
            }
            StepId::Preferences => {
                run_screen::<StepTwoInput, _, _>(runtime, term, StepId::Preferences).await?
            }
            StepId::Nutrition => {
                let profile = runtime
                    .get_profile
                    .completed()
                    .await
                    .context("nutrition step reached with an incomplete draft")?;
                show_profile(term, &profile)?;
                info!(session_id = %session_id, "wizard finished");
                return Ok(profile);
            }
        };

        step = StepId::from_route(&route)
            .with_context(|| format!("no screen registered for route {route}"))?;
    }
}

/// Keeps the screen mounted until a submit navigates away.
async fn run_screen<F, R, W>(
    runtime: &mut WizardRuntime,
    term: &mut Terminal<R, W>,
    step: StepId,
) -> anyhow::Result<Route>
where
    F: StepForm + IntoSubmit,
    R: BufRead,
    W: Write,
{
    let layout: &ScreenLayout = step
        .layout()
        .with_context(|| format!("step {step:?} has no form"))?;
    let mut form = FormState::<F>::new(runtime.policy);

    loop {
        fill_form(term, layout, &mut form)?;
        let state = form.values().clone().submit(runtime).await;

        if let Ok(route) = runtime.routes.try_recv() {
            return Ok(route);
        }
        let Some(errors) = state.errors_on(step) else {
            warn!(?step, current = ?state.step, "submit produced no navigation");
            anyhow::bail!("screen {step:?} was submitted but the wizard did not advance");
        };
        form.show_errors(errors.clone());
    }
}

/// Routes a step's raw input to the matching orchestrator call.
trait IntoSubmit {
    async fn submit(self, runtime: &WizardRuntime) -> WizardState;
}

impl IntoSubmit for StepOneInput {
    async fn submit(self, runtime: &WizardRuntime) -> WizardState {
        runtime.orchestrator.submit_biometrics(self).await
    }
}

impl IntoSubmit for StepTwoInput {
    async fn submit(self, runtime: &WizardRuntime) -> WizardState {
        runtime.orchestrator.submit_preferences(self).await
    }
}
