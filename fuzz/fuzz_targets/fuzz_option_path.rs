#![no_main]

use libfuzzer_sys::fuzz_target;
use option_tree::OptionPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz option path parsing - parsed paths must print back to the same text
        if let Ok(path) = s.parse::<OptionPath>() {
            let again: OptionPath = path.to_string().parse().expect("printed path parses");
            assert_eq!(path, again);
        }
    }
});
