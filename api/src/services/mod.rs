// Business logic service implementations

pub mod canonical;
pub mod transaction_engine;
pub mod wallet_service;
