#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Normalization is idempotent
        if let Ok(email) = hotelier::EmailAddress::new(input) {
            let again = hotelier::EmailAddress::new(email.as_str()).unwrap();
            assert_eq!(again, email);
        }
    }
});
