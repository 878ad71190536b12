//! Property tests for config parsing.

use std::path::Path;

use proptest::prelude::*;

use srm::config::{parse_with_warnings, ConfigFormat};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary text never panics the parsers.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        for format in [ConfigFormat::Yaml, ConfigFormat::Json, ConfigFormat::Toml] {
            let _ = parse_with_warnings(&content, format, Path::new("fuzz"));
        }
    }

    /// PROPERTY: plain YAML scalars come through as the item's name and command.
    #[test]
    fn property_yaml_items_parse(name in "item[A-Za-z0-9]{0,8}", start in -1000i64..1000) {
        let content = format!(
            "index_start: {start}\ngroups:\n- items:\n  - name: {name}\n    command: run-{name}\n"
        );
        let (config, warnings) =
            parse_with_warnings(&content, ConfigFormat::Yaml, Path::new("p.yaml")).unwrap();

        prop_assert!(warnings.is_empty());
        prop_assert_eq!(config.index_start, start);
        prop_assert_eq!(&config.groups[0].items[0].name, &name);
        prop_assert_eq!(&config.groups[0].items[0].command, &format!("run-{name}"));
    }
}
