use crate::encoder::field::encode_field;
use crate::encoder::tags::{
    ACCOUNT_TEMPLATE, BENEFICIARY_ACCOUNT, BENEFICIARY_BANK, TEMPLATE_BENEFICIARY, TEMPLATE_GUID,
    VIETQR_GUID,
};
use crate::error::EncodingError;

/// Value of the beneficiary account template (the part inside tag `38`)
///
/// `00 GUID` followed by `01 [00 bank][01 account]`. The bank identifier is
/// not checked against any registry; unknown BINs are encoded as given.
pub fn account_template_value(bank_id: &str, account_number: &str) -> Result<String, EncodingError> {
    let mut beneficiary = encode_field(BENEFICIARY_BANK, bank_id)?;
    beneficiary.push_str(&encode_field(BENEFICIARY_ACCOUNT, account_number)?);

    let mut template = encode_field(TEMPLATE_GUID, VIETQR_GUID)?;
    template.push_str(&encode_field(TEMPLATE_BENEFICIARY, &beneficiary)?);
    Ok(template)
}

/// Complete tag `38` field
pub fn encode_account_template(bank_id: &str, account_number: &str) -> Result<String, EncodingError> {
    encode_field(ACCOUNT_TEMPLATE, &account_template_value(bank_id, account_number)?)
}
