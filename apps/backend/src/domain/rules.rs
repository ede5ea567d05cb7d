/// Seats per room.
pub const PLAYERS: usize = 2;
/// Cards dealt to each player at the start of a match.
pub const HAND_SIZE: usize = 6;
/// Size of the short deck: four suits, six through ace.
pub const DECK_SIZE: usize = 36;

/// Cards left in the draw pile right after the initial deal.
pub const fn deck_after_deal() -> usize {
    DECK_SIZE - PLAYERS * HAND_SIZE
}
