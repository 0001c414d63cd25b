pub mod quote;
pub mod transactions;
