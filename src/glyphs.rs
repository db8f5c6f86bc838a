//! Presentation lookup tables for terminal output.
//!
//! Pure display concerns: the engine never reads these.

use orrery_zodiac::to_sign;

/// Planet glyphs indexed by provider planet id. Ids 10, 12, and 13 have
/// no Unicode glyph and keep their numeric labels.
const PLANET_GLYPHS: [&str; 15] = [
    "\u{2609}", // Sun
    "\u{263E}", // Moon
    "\u{263F}", // Mercury
    "\u{2640}", // Venus
    "\u{2642}", // Mars
    "\u{2643}", // Jupiter
    "\u{2644}", // Saturn
    "\u{2645}", // Uranus
    "\u{2646}", // Neptune
    "\u{2647}", // Pluto
    "10",
    "\u{260A}", // ascending node
    "12",
    "13",
    "\u{2295}", // Earth
];

/// Zodiac sign glyphs, Aries first.
const SIGN_GLYPHS: [&str; 12] = [
    "\u{2648}", "\u{2649}", "\u{264A}", "\u{264B}", "\u{264C}", "\u{264D}", "\u{264E}",
    "\u{264F}", "\u{2650}", "\u{2651}", "\u{2652}", "\u{2653}",
];

/// Returns the glyph for a provider planet id, or `?` for ids beyond the
/// table.
pub fn planet_glyph(id: u32) -> &'static str {
    PLANET_GLYPHS.get(id as usize).copied().unwrap_or("?")
}

/// Returns the glyph for a matched aspect angle, if it has one.
pub fn aspect_glyph(angle: f64) -> Option<&'static str> {
    const GLYPHS: [(f64, &str); 4] = [
        (0.0, "\u{260C}"),   // conjunction
        (90.0, "\u{25A1}"),  // square
        (120.0, "\u{25B3}"), // trine
        (180.0, "\u{260D}"), // opposition
    ];
    GLYPHS.iter().find(|(a, _)| *a == angle).map(|(_, g)| *g)
}

/// Formats a longitude as degrees-into-sign plus the sign glyph, e.g.
/// `5.50 ♋`. Unusable longitudes format as `x`.
pub fn degree_as_sign(longitude: f64) -> String {
    match to_sign(longitude) {
        Some(pos) => format!("{:.2} {}", pos.degrees(), SIGN_GLYPHS[pos.sign() as usize]),
        None => "x".to_string(),
    }
}
