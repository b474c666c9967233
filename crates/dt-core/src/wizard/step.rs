use serde::{Deserialize, Serialize};

use crate::form::layout::{ScreenLayout, BIOMETRICS_SCREEN, PREFERENCES_SCREEN};

/// Navigation target understood by the router.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Screens of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepId {
    /// Name, weight, height and age.
    Biometrics,
    /// Gender, activity level and objective.
    Preferences,
    /// Plan generation; consumes the finished draft.
    Nutrition,
}

impl StepId {
    pub fn path(&self) -> &'static str {
        match self {
            StepId::Biometrics => "/step",
            StepId::Preferences => "/create",
            StepId::Nutrition => "/nutrition",
        }
    }

    pub fn route(&self) -> Route {
        Route::new(self.path())
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        match route.as_str() {
            "/step" => Some(StepId::Biometrics),
            "/create" => Some(StepId::Preferences),
            "/nutrition" => Some(StepId::Nutrition),
            _ => None,
        }
    }

    /// Whether the screen collects input.
    pub fn is_form(&self) -> bool {
        self.layout().is_some()
    }

    pub fn layout(&self) -> Option<&'static ScreenLayout> {
        match self {
            StepId::Biometrics => Some(&BIOMETRICS_SCREEN),
            StepId::Preferences => Some(&PREFERENCES_SCREEN),
            StepId::Nutrition => None,
        }
    }
}
