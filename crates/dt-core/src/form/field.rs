use serde::{Deserialize, Serialize};

/// Every field the wizard collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Weight,
    Age,
    Height,
    Gender,
    Level,
    Objective,
}

impl FieldName {
    /// Key used by widgets to bind the field.
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Weight => "weight",
            FieldName::Age => "age",
            FieldName::Height => "height",
            FieldName::Gender => "gender",
            FieldName::Level => "level",
            FieldName::Objective => "objective",
        }
    }

    /// Localized message shown when the field is left empty.
    pub fn required_message(&self) -> &'static str {
        match self {
            FieldName::Name => "Nome é obrigatório",
            FieldName::Weight => "Peso é obrigatório",
            FieldName::Age => "Idade é obrigatório",
            FieldName::Height => "Altura é obrigatório",
            FieldName::Gender => "Sexo é obrigatório",
            FieldName::Level => "Selecione seu level",
            FieldName::Objective => "Objetivo é obrigatório",
        }
    }

}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
