use crate::models::DayLog;

pub const MESSAGES: [&str; 6] = [
    "Ajmo jakoo 🔥 Danas uzmi svojih 10–20 minuta.",
    "Nema filozofije — samo kreni. Prvih 5 minuta otključava ostatak.",
    "Jedan trening = jedna pobjeda. Ajmo jakoo 💪",
    "Ako nemaš volje: napravi minimum. Minimum se računa.",
    "Ne traži motivaciju — napravi akciju. Motivacija dođe poslije.",
    "Danas radiš za sebe. Ajmo jakoo — sad.",
];

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Stable message for `seed`: 32-bit FNV-1a over the seed bytes, absolute
/// value modulo the list length.
///
/// Once a byte has been mixed in the hash is a signed 32-bit value; an empty
/// seed leaves the unsigned offset basis untouched.
pub fn pick(seed: &str) -> &'static str {
    let index = if seed.is_empty() {
        FNV_OFFSET as usize
    } else {
        let hash = seed
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME));
        (hash as i32).unsigned_abs() as usize
    };
    MESSAGES[index % MESSAGES.len()]
}

/// The two messages shown for a day.
pub fn daily_messages(date: &str) -> [&'static str; 2] {
    [pick(&format!("{date}-a")), pick(&format!("{date}-b"))]
}

pub fn workout_hint(day: &DayLog) -> &'static str {
    if day.workouts.is_empty() {
        "💥 Mini cilj: 10 minuta kretanja. Ajmo jakoo."
    } else {
        "✅ Trening upisan — drži momentum!"
    }
}

pub fn food_hint(day: &DayLog) -> &'static str {
    if day.foods.is_empty() {
        "🥗 Mini cilj: upiši barem jedan obrok."
    } else {
        "✅ Prehrana upisana — bravo!"
    }
}
