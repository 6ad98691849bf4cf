use crate::config::FLOOR_DELAY_MS;

/// Returns the tick interval after one more food item has been eaten.
///
/// Steps shrink as the delay approaches the floor, so early food gives a
/// noticeable speed-up and late food only nudges it. At or below the floor
/// the delay is returned unchanged.
#[must_use]
pub fn next_delay(current_ms: u64) -> u64 {
    let step = match current_ms {
        d if d > 100 => 5,
        d if d > 75 => 3,
        d if d > 50 => 2,
        d if d > FLOOR_DELAY_MS => 1,
        _ => 0,
    };

    current_ms - step
}
