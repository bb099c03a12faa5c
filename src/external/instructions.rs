//! Turn-by-turn instruction text from OSRM maneuver codes.

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn maneuver_word(maneuver_type: &str) -> String {
    match maneuver_type {
        "depart" => "Mulai".into(),
        "arrive" => "Tiba".into(),
        "turn" => "Belok".into(),
        "merge" => "Gabung".into(),
        "roundabout" | "rotary" | "roundabout turn" => "Bundaran".into(),
        "continue" | "new name" => "Lanjut".into(),
        "fork" => "Ambil cabang".into(),
        "end of road" => "Ujung jalan".into(),
        "on ramp" => "Masuk".into(),
        "off ramp" => "Keluar".into(),
        other => capitalize(other),
    }
}

fn modifier_words(modifier: &str) -> &str {
    match modifier {
        "left" => "kiri",
        "right" => "kanan",
        "slight left" => "sedikit ke kiri",
        "slight right" => "sedikit ke kanan",
        "sharp left" => "tajam ke kiri",
        "sharp right" => "tajam ke kanan",
        "straight" => "lurus",
        "uturn" => "putar balik",
        other => other,
    }
}

/// Builds e.g. "Belok kiri ke Jalan Thamrin" from `turn`, `left` and the road name.
///
/// A missing maneuver type is read as `continue`.
pub fn synthesize(maneuver_type: Option<&str>, modifier: Option<&str>, road: Option<&str>) -> String {
    let mut parts = vec![maneuver_word(maneuver_type.unwrap_or("continue"))];

    if let Some(modifier) = modifier.filter(|m| !m.is_empty()) {
        parts.push(modifier_words(modifier).to_string());
    }

    if let Some(road) = road.filter(|r| !r.is_empty()) {
        parts.push(format!("ke {}", road));
    }

    parts.join(" ")
}
