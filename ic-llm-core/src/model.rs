/// Models served by the LLM canister.
///
/// Displays as the identifier the canister expects, e.g. `llama3.1:8b`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
pub enum Model {
    #[strum(serialize = "llama3.1:8b")]
    Llama3_1_8B,
    #[strum(serialize = "qwen3:32b")]
    Qwen3_32B,
    #[strum(serialize = "llama4-scout")]
    Llama4Scout,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl From<Model> for String {
    fn from(model: Model) -> Self {
        model.to_string()
    }
}
