//! Built-in card set, used when no catalog is supplied or loading fails.

use super::card::Card;

const DEFAULT_CARDS: &[(&str, [&str; 5])] = &[
    ("Birthday", ["Cake", "Party", "Gift", "Candles", "Celebrate"]),
    ("Pizza", ["Cheese", "Slice", "Sauce", "Italy", "Toppings"]),
    ("Laptop", ["Computer", "Keyboard", "Screen", "Portable", "Work"]),
    ("Doctor", ["Hospital", "Medicine", "Patient", "Nurse", "Treatment"]),
    ("Cricket", ["Bat", "Ball", "Wicket", "India", "Sport"]),
    ("Guitar", ["Music", "Strings", "Instrument", "Play", "Rock"]),
    ("Coffee", ["Caffeine", "Morning", "Beans", "Cup", "Latte"]),
    ("Airplane", ["Fly", "Pilot", "Airport", "Wings", "Jet"]),
    ("Library", ["Books", "Read", "Borrow", "Quiet", "Shelf"]),
    ("Dinosaur", ["Fossil", "Jurassic", "Extinct", "Reptile", "T-Rex"]),
    ("Robot", ["AI", "Metal", "Machine", "Program", "Automation"]),
    ("Camera", ["Photo", "Lens", "Click", "Zoom", "Picture"]),
    ("Beach", ["Sand", "Sea", "Waves", "Sun", "Shell"]),
    ("Football", ["Goal", "Kick", "Team", "Stadium", "Referee"]),
    ("Chocolate", ["Sweet", "Cocoa", "Candy", "Brown", "Bar"]),
];

/// The built-in cards, in catalog order.
pub fn default_cards() -> Vec<Card> {
    DEFAULT_CARDS
        .iter()
        .map(|(word, forbidden)| Card::new(*word, forbidden.iter().copied()))
        .collect()
}
