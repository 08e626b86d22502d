//! Plurality tally with tie detection.
//!
//! A winner only has to strictly exceed every other answer's count; it does
//! not need a majority of the voters. When several answers share the highest
//! count the outcome is undecidable, which includes a question nobody voted
//! on (every answer ties at zero).

/// Outcome of tallying a stopped question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Index of the single answer holding the highest count.
    Winner(usize),
    /// Two or more answers share the highest count.
    Undecidable,
}

/// Picks the unique leader out of per-answer vote counts.
///
/// `counts[a]` is the number of voters whose recorded choice is answer `a`.
pub fn tally(counts: &[u64]) -> Outcome {
    let Some(&max) = counts.iter().max() else {
        return Outcome::Undecidable;
    };

    let mut leaders = counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count == max)
        .map(|(answer, _)| answer);

    match (leaders.next(), leaders.next()) {
        (Some(winner), None) => Outcome::Winner(winner),
        _ => Outcome::Undecidable,
    }
}
