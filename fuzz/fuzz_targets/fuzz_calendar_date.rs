#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(date) = input.parse::<hotelier::CalendarDate>() {
            let again: hotelier::CalendarDate = date.to_string().parse().unwrap();
            assert_eq!(again, date);
        }
    }
});
