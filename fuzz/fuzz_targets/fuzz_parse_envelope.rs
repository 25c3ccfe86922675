#![no_main]

use libfuzzer_sys::fuzz_target;
use sealed_envelope::Envelope;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary bytes should never panic
    if let Ok(envelope) = Envelope::try_from(data) {
        assert_eq!(envelope.encoded_len(), data.len());
        assert_eq!(envelope.to_bytes(), data);
    }
});
