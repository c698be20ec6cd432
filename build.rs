use std::fs;

/// Sections of `default_config.toml` and the keys each may hold.
const SECTIONS: &[(&str, &[&str])] = &[
    ("answer", &["mode"]),
    ("images", &["class", "alt", "self_closing"]),
    ("output", &["directory", "prefix", "extension", "id_length"]),
];

const MODES: &[&str] = &["markup", "links", "line-breaks", "images"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (section, value) in &table {
        let Some((_, keys)) = SECTIONS.iter().find(|(name, _)| *name == section.as_str()) else {
            panic!("default_config.toml: unknown section [{}]", section);
        };
        let Some(entries) = value.as_table() else {
            panic!("default_config.toml: [{}] must be a table", section);
        };
        for key in entries.keys() {
            if !keys.contains(&key.as_str()) {
                panic!("default_config.toml: unknown key {}.{}", section, key);
            }
        }
    }

    if let Some(mode) = table.get("answer").and_then(|answer| answer.get("mode")) {
        match mode.as_str() {
            Some(mode) if MODES.contains(&mode) => {}
            _ => panic!("default_config.toml: answer.mode must be one of {:?}", MODES),
        }
    }
}
