// Evidence-gated inclusion decisions. The matcher says what looks
// relevant; this layer says what may actually be added.

pub mod evaluator;

pub use evaluator::{evaluate, evaluate_batch, EvidenceDecision, Outcome};
