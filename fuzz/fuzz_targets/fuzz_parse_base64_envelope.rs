#![no_main]

use libfuzzer_sys::fuzz_target;
use sealed_envelope::Envelope;

fuzz_target!(|data: &str| {
    if let Ok(envelope) = Envelope::from_base64(data) {
        let _ = Envelope::from_base64(&envelope.to_base64());
    }
});
