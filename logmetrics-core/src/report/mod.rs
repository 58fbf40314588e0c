mod duration;
mod observation;
mod reporter;

pub use duration::DurationResolver;
pub use observation::MetricObservation;
pub use reporter::Reporter;
