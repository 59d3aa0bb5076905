pub mod bundle;
pub mod health;
pub mod proxy;
