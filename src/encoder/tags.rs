//! Tag numbers and fixed values of the VietQR merchant-presented profile

/// Payload format indicator
pub const PAYLOAD_FORMAT: &str = "00";
/// Point of initiation method
pub const INITIATION_METHOD: &str = "01";
/// Merchant account information (beneficiary account template)
pub const ACCOUNT_TEMPLATE: &str = "38";
/// Transaction currency
pub const CURRENCY: &str = "53";
/// Transaction amount
pub const AMOUNT: &str = "54";
/// Country code
pub const COUNTRY: &str = "58";
/// Additional data field template
pub const ADDITIONAL_DATA: &str = "62";
/// CRC
pub const CRC: &str = "63";

/// Inside the account template: globally unique identifier
pub const TEMPLATE_GUID: &str = "00";
/// Inside the account template: beneficiary organization
pub const TEMPLATE_BENEFICIARY: &str = "01";
/// Inside the beneficiary organization: bank BIN
pub const BENEFICIARY_BANK: &str = "00";
/// Inside the beneficiary organization: account number
pub const BENEFICIARY_ACCOUNT: &str = "01";
/// Inside additional data: purpose of transaction
pub const PURPOSE: &str = "08";

/// Payload format version
pub const PAYLOAD_FORMAT_VERSION: &str = "01";
/// Application identifier of the NAPAS VietQR scheme
pub const VIETQR_GUID: &str = "A000000727";
/// ISO 4217 numeric code for VND
pub const CURRENCY_VND: &str = "704";
/// ISO 3166 alpha-2 code for Viet Nam
pub const COUNTRY_VN: &str = "VN";

/// Leading `00` + `02` + `01`: every conforming payload starts with it
pub const PAYLOAD_PREFIX: &str = "000201";
/// CRC tag and length with the value still missing
pub const CRC_PLACEHOLDER: &str = "6304";
