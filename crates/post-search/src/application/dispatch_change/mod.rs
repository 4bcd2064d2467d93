mod dispatch_change_use_case;

pub use dispatch_change_use_case::{DispatchChangeUseCase, DispatchOutcome};
