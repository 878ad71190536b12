#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use srm::config::{parse_with_warnings, ConfigFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and importing must never panic
        if let Ok((config, _)) =
            parse_with_warnings(content, ConfigFormat::Toml, Path::new("srm_config.toml"))
        {
            let _ = srm::import_menu_from_config(config).to_string();
        }
    }
});
