#![no_main]
use libfuzzer_sys::fuzz_target;
use solidcolor::Color;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Anything that parses must survive a hex round trip.
    if let Ok(color) = Color::from_hex(text) {
        let again = Color::from_hex(&color.to_hex(true)).unwrap();
        assert_eq!(again, color);
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }
});
