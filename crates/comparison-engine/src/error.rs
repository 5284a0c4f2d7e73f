use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The caller handed over more text than the engine is sized for.
    #[error("input '{label}' exceeds the maximum size ({size} > {max} bytes)")]
    InputTooLarge {
        label: String,
        size: usize,
        max: usize,
    },
}
