mod form;
mod result;

pub use form::PredictionPanel;
