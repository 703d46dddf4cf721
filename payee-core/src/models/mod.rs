mod payee;

pub use payee::TaxPayee;
