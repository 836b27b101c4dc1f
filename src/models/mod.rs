pub mod bill;
pub mod field;
pub mod request;
pub mod scan_result;

pub use bill::{BillPayment, BillService, Provider};
pub use field::{Field, MAX_VALUE_LEN};
pub use request::{InitiationMethod, PaymentRequest};
pub use scan_result::{PAYMENT_CODE_NOTICE, ScanAction, ScanKind, ScanResult};
