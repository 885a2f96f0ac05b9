pub mod annotations;
pub mod info;
pub mod pipeline;
pub mod prepare;
pub mod retrieve;

/// What a command handler did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The command parsed its arguments but has no implementation yet.
    NotImplemented(&'static str),
}
