//! Pure combat math: type effectiveness and damage. No side effects, no I/O;
//! referentially transparent given the type chart.

use schema::{PokemonType, TypeChart};

/// Combined effectiveness of an attacking type against a defender with one or
/// two types: the product of the chart lookups. Multiplication makes the
/// composition order-independent for dual-typed defenders.
pub fn effectiveness(
    chart: &TypeChart,
    attacking: PokemonType,
    defending: &[PokemonType],
) -> f32 {
    defending
        .iter()
        .map(|&defending| chart.multiplier(attacking, defending))
        .product()
}

/// Damage dealt by a move: base power scaled by effectiveness, truncated to a
/// whole number. A power of 0 (status moves) always deals 0.
pub fn damage(power: u16, effectiveness: f32) -> u16 {
    (power as f32 * effectiveness) as u16
}
