//! Screen layout descriptors consumed by input and select widgets.

use super::field::FieldName;
use super::options::{OptionSet, GENDER_OPTIONS, LEVEL_OPTIONS, OBJECTIVE_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardType {
    Default,
    Numeric,
}

/// One widget bound to a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub field: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub keyboard: KeyboardType,
    /// Present for select widgets.
    pub options: Option<&'static OptionSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub step_label: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldLayout],
    pub submit_label: &'static str,
}

pub static BIOMETRICS_SCREEN: ScreenLayout = ScreenLayout {
    step_label: "Passo 1",
    title: "Vamos começar",
    fields: &[
        FieldLayout {
            field: FieldName::Name,
            label: "Nome:",
            placeholder: "Digite seu nome",
            keyboard: KeyboardType::Default,
            options: None,
        },
        FieldLayout {
            field: FieldName::Weight,
            label: "Peso:",
            placeholder: "Ex: 75",
            keyboard: KeyboardType::Numeric,
            options: None,
        },
        FieldLayout {
            field: FieldName::Height,
            label: "Altura:",
            placeholder: "Ex: 1,80",
            keyboard: KeyboardType::Numeric,
            options: None,
        },
        FieldLayout {
            field: FieldName::Age,
            label: "Idade:",
            placeholder: "Digite sua idade",
            keyboard: KeyboardType::Numeric,
            options: None,
        },
    ],
    submit_label: "Avançar",
};

pub static PREFERENCES_SCREEN: ScreenLayout = ScreenLayout {
    step_label: "Passo 2",
    title: "Finalizando dieta",
    fields: &[
        FieldLayout {
            field: FieldName::Gender,
            label: "Sexo:",
            placeholder: "Selecione o Sexo",
            keyboard: KeyboardType::Default,
            options: Some(&GENDER_OPTIONS),
        },
        FieldLayout {
            field: FieldName::Level,
            label: "Selecione nível de atividade física:",
            placeholder: "Selecione o nível de atividade física",
            keyboard: KeyboardType::Default,
            options: Some(&LEVEL_OPTIONS),
        },
        FieldLayout {
            field: FieldName::Objective,
            label: "Selecione seu objetivo:",
            // Shares the level select's placeholder text.
            placeholder: "Selecione o nível de atividade física",
            keyboard: KeyboardType::Default,
            options: Some(&OBJECTIVE_OPTIONS),
        },
    ],
    submit_label: "Avançar",
};
