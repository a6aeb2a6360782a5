#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Accepted amounts must survive a display round-trip
        if let Ok(money) = hotelier::Money::new(input) {
            let again = hotelier::Money::new(&money.to_string()).unwrap();
            assert_eq!(again, money);
        }
    }
});
