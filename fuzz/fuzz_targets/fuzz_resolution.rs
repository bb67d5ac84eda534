#![no_main]
use libfuzzer_sys::fuzz_target;
use solidcolor::Resolution;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(resolution) = text.parse::<Resolution>() {
        assert!(Resolution::is_valid(resolution.width(), resolution.height()));
        assert_eq!(resolution.to_string().parse::<Resolution>().unwrap(), resolution);
    }
});
