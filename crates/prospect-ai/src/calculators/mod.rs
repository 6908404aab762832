pub mod coefficients;
pub mod currency;
pub mod delivery;
pub mod domain;
pub mod estimator;
pub mod intake;
pub mod narrative;
pub mod roi;

mod router;
mod service;

pub use router::calculator_router;
pub use service::{
    CalculatorOutcome, CalculatorService, EnrichmentError, LeadCaptureError, LeadId, LeadReceipt,
};
