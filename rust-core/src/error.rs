use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{left}` and `{right}` must have the same length ({left_len} vs {right_len})")]
    ShapeMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
    #[error("junction width must be between 1 and i32::MAX, got {0}")]
    InvalidWidth(usize),
    #[error("eigen-solver did not converge at k = {k}")]
    Diagonalization { k: f64 },
}
