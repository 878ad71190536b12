//! Test fixtures - reusable config content for tests.

#![allow(dead_code)]

/// Numbered session/power menu, 1-based with `N: name` lines
pub const POWER_MENU_YAML: &str = r#"
separator: "----"
index_start: 1
index_format: "{item_index}: {item_name}"
numbered: true
groups:
- items:
  - name: Lock screen
    command: i3lock
  - name: Logout
    command: i3-msg exit
- items:
  - name: Switch user
    command: gdmflexiserver
  - name: Reboot
    command: systemctl reboot
  - name: Shutdown
    command: systemctl poweroff
"#;

/// Expected stdout for [`POWER_MENU_YAML`]
pub const POWER_MENU_OUTPUT: &str = "\
1: Lock screen
2: Logout
----
3: Switch user
4: Reboot
5: Shutdown
";

/// Unnumbered two-group menu with default layout
pub const PLAIN_MENU_JSON: &str = r#"{
    "groups": [
        { "items": [ { "name": "Terminal", "command": "alacritty" } ] },
        { "items": [ { "name": "Browser", "command": "firefox --new-window" } ] }
    ]
}"#;

/// Expected stdout for [`PLAIN_MENU_JSON`]
pub const PLAIN_MENU_OUTPUT: &str = "Terminal\n---\nBrowser\n";

pub const PLAIN_MENU_TOML: &str = r#"
separator = "==="

[[groups]]
items = [ { name = "Terminal", command = "alacritty" } ]

[[groups]]
items = [ { name = "Browser", command = "firefox --new-window" } ]
"#;

/// Config with a misspelled top-level key
pub const TYPO_YAML: &str = "seperator: '==='\ngroups:\n- items:\n  - name: Terminal\n    command: alacritty\n";
