use super::{id_table, IdTable};

/// The 16 stock market goods, by ticker, in listing order. The market
/// sub-format emits one record per good in this order.
pub static GOODS: IdTable = id_table!(
    "market good",
    &[
        "CRL", "CHC", "BTR", "SUG", "NUT", "SLT", "VNL", "EGG", "CNM", "CRM", "JAM", "WCH",
        "HNY", "CKI", "RCP", "SBD",
    ]
);
