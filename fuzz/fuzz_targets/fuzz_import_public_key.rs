#![no_main]

use libfuzzer_sys::fuzz_target;
use sealed_envelope::{EnvelopePrivateKey, EnvelopePublicKey};

fuzz_target!(|data: &str| {
    // PEM and DER import should never panic
    let _ = EnvelopePublicKey::from_pem(data);
    let _ = EnvelopePrivateKey::from_pem(data);
    let _ = EnvelopePublicKey::from_spki_der(data.as_bytes());
});
