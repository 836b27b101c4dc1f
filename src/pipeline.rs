//! Batch generation and classification across threads
//!
//! Every call into the encoder and classifier owns its inputs, so batches are
//! split across the rayon pool without any locking. Results come back in input
//! order.

use rayon::prelude::*;
use tracing::debug;

use crate::encoder::deeplink::WalletTarget;
use crate::error::EncodingError;
use crate::models::{PaymentRequest, ScanResult};
use crate::scanner::ScanClassifier;
use crate::{GeneratedCode, generate};

/// Assemble a VietQR payload for every request in parallel
pub fn generate_all(requests: &[PaymentRequest]) -> Vec<Result<String, EncodingError>> {
    debug!(count = requests.len(), "generating payload batch");
    requests.par_iter().map(crate::encoder::assemble).collect()
}

/// Generate codes for `(request, target)` pairs in parallel
pub fn generate_all_for(
    jobs: &[(PaymentRequest, WalletTarget)],
) -> Vec<Result<GeneratedCode, EncodingError>> {
    jobs.par_iter()
        .map(|(request, target)| generate(request, *target))
        .collect()
}

/// Classify many decoded texts in parallel
pub fn classify_all<S>(texts: &[S]) -> Vec<ScanResult>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| ScanClassifier::classify(text.as_ref()))
        .collect()
}
