mod purchase_engine;

pub use purchase_engine::PurchaseEngine;
