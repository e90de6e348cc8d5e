//! Standard lake layouts, smallest first.

pub static MAPS: [(&str, &[&str]); 4] = [
    ("4x4", &["SFFF", "FHFH", "FFFH", "HFFG"]),
    (
        "8x8",
        &[
            "SFFFFFFF", "FFFFFFFF", "FFFHFFFF", "FFFFFHFF", "FFFHFFFF", "FHHFFFHF", "FHFFHFHF",
            "FFFHFFFG",
        ],
    ),
    (
        "15x15",
        &[
            "SFFFFFHFFFFFFFF",
            "FFFFFFFFFFFFHFF",
            "FFHFFFFFHFFFFFF",
            "FFFFHFFFFFFFHFF",
            "FFFFFFFFFFFFHFF",
            "FFFFHFFHFFFFHFF",
            "FFFFHFFFFFFFHFF",
            "FFFFFFFFHHHHHFF",
            "HHHFHFFFFFFFHFF",
            "FFFFHFFHHFFFHFF",
            "FFFFFFFFFFFFHFF",
            "FFFFHFFFHFFFHFF",
            "FFFFFFFFFFFFFFF",
            "FHFHFHFFFFFFFFF",
            "FFHFFFFFFFHHHFG",
        ],
    ),
    (
        "20x20",
        &[
            "SFFFFFFHHHFFFFFFFFFF",
            "FFFFFFFFFFFFFFFFHHFF",
            "FFFHFFFFFFFHHFFFFFFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFFFFHFFFFFFFHHFF",
            "FFFFFHFFFFHHFFFFHHFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFFFFFFFHHHHHHHFF",
            "HHHHFHFFFFFFFFFFHHFF",
            "FFFFFHFFFFHHHFFFHHFF",
            "FFFFFFFFFFFFFFFFHHFF",
            "FFFFFHFFFFFFHFFFHHFF",
            "FFFFFHFFFFFFFFFFHHFF",
            "FFFFFFFFFFFHFFFFFFFF",
            "FHHFFFHFFFFHFFFFFHFF",
            "FHHFHFHFFFFFFFFFFFFF",
            "FFFHFFFFFHFFFFHHFHFG",
        ],
    ),
];

pub fn get(name: &str) -> Option<&'static [&'static str]> {
    MAPS.iter().find(|(n, _)| *n == name).map(|(_, rows)| *rows)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    MAPS.iter().map(|(n, _)| *n)
}
