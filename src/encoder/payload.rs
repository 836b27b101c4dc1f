use tracing::debug;

use crate::encoder::account::account_template_value;
use crate::encoder::crc::seal;
use crate::encoder::field::{encode_field, push_field};
use crate::encoder::tags::{
    ACCOUNT_TEMPLATE, ADDITIONAL_DATA, AMOUNT, COUNTRY, COUNTRY_VN, CRC_PLACEHOLDER, CURRENCY,
    CURRENCY_VND, INITIATION_METHOD, PAYLOAD_FORMAT, PAYLOAD_FORMAT_VERSION, PURPOSE,
};
use crate::error::EncodingError;
use crate::models::PaymentRequest;

/// Assemble the full payload for `request`, checksum included
///
/// Field order is fixed: `00` version, `01` initiation method, `38` account
/// template, `53` currency, `54` amount (only for a positive integer amount),
/// `58` country, `62` additional data (only with purpose text), `63` CRC.
///
/// Pure: the same request always yields the same string. Any field that cannot
/// be encoded aborts the whole payload.
pub fn assemble(request: &PaymentRequest) -> Result<String, EncodingError> {
    let mut frame = String::with_capacity(128);

    push_field(&mut frame, PAYLOAD_FORMAT, PAYLOAD_FORMAT_VERSION)?;
    push_field(&mut frame, INITIATION_METHOD, request.initiation.code())?;
    push_field(
        &mut frame,
        ACCOUNT_TEMPLATE,
        &account_template_value(&request.bank_id, &request.account_number)?,
    )?;
    push_field(&mut frame, CURRENCY, CURRENCY_VND)?;

    let amount = request.normalized_amount();
    if let Some(amount) = &amount {
        push_field(&mut frame, AMOUNT, amount)?;
    }

    push_field(&mut frame, COUNTRY, COUNTRY_VN)?;

    if let Some(purpose) = request.purpose_text() {
        push_field(&mut frame, ADDITIONAL_DATA, &encode_field(PURPOSE, purpose)?)?;
    }

    frame.push_str(CRC_PLACEHOLDER);
    let payload = seal(frame);

    debug!(
        bank_id = %request.bank_id,
        has_amount = amount.is_some(),
        has_purpose = request.purpose_text().is_some(),
        len = payload.len(),
        "assembled payment payload"
    );

    Ok(payload)
}
