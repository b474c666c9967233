//! Fixed option sets of the preference step.
//!
//! Labels are what the user sees, values are what gets written to the draft.
//! They differ for a few entries (`Sedentário`, `Hipertrofia e Definição`).

use super::field::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSet {
    pub field: FieldName,
    options: &'static [SelectOption],
}

impl OptionSet {
    pub fn options(&self) -> &'static [SelectOption] {
        self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&'static SelectOption> {
        self.options.get(index)
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn for_field(field: FieldName) -> Option<&'static OptionSet> {
        match field {
            FieldName::Gender => Some(&GENDER_OPTIONS),
            FieldName::Level => Some(&LEVEL_OPTIONS),
            FieldName::Objective => Some(&OBJECTIVE_OPTIONS),
            _ => None,
        }
    }
}

pub static GENDER_OPTIONS: OptionSet = OptionSet {
    field: FieldName::Gender,
    options: &[
        SelectOption {
            label: "Masculino",
            value: "masculino",
        },
        SelectOption {
            label: "Feminino",
            value: "feminino",
        },
    ],
};

pub static LEVEL_OPTIONS: OptionSet = OptionSet {
    field: FieldName::Level,
    options: &[
        SelectOption {
            label: "Sedentário (pouco ou nenhuma atividade física)",
            value: "Sedentário",
        },
        SelectOption {
            label: "Levemente ativo (exercícios 1 a 3 vezes na semana)",
            value: "Levemente ativo (exercícios 1 a 3 vezes na semana)",
        },
        SelectOption {
            label: "Moderadamente ativo (exercícios 3 a 5 vezes na semana)",
            value: "Moderadamente ativo (exercícios 3 a 5 vezes na semana)",
        },
        SelectOption {
            label: "Altamente ativo (exercícios 5 a 7 dia por semana)",
            value: "Altamente ativo (exercícios 5 a 7 dia por semana)",
        },
    ],
};

pub static OBJECTIVE_OPTIONS: OptionSet = OptionSet {
    field: FieldName::Objective,
    options: &[
        SelectOption {
            label: "Emagrecer",
            value: "emagrecer",
        },
        SelectOption {
            label: "Hipertrofia",
            value: "Hipertrofia",
        },
        SelectOption {
            label: "Hipertrofia + Definição",
            value: "Hipertrofia e Definição",
        },
        SelectOption {
            label: "Definição",
            value: "Definição",
        },
    ],
};
