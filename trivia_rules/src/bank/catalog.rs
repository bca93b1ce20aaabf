//! Built-in question catalog.

use std::collections::HashMap;

use super::{BankEntry, Category};

pub(super) fn builtin_categories() -> HashMap<Category, Vec<BankEntry>> {
    HashMap::from([
        (Category::Math, math()),
        (Category::Science, science()),
        (Category::History, history()),
        (Category::Programming, programming()),
        (Category::General, general()),
    ])
}

fn math() -> Vec<BankEntry> {
    vec![
        BankEntry::new("What is 7 + 5?", ["10", "11", "12", "13"], 2, 1),
        BankEntry::new("What is 9 x 6?", ["54", "56", "45", "63"], 0, 1),
        BankEntry::new("What is the square root of 144?", ["10", "12", "14", "16"], 1, 2),
        BankEntry::new("What is 15% of 200?", ["15", "20", "30", "35"], 2, 3),
        BankEntry::new(
            "What is the derivative of x^2?",
            ["x", "2x", "x^2", "2"],
            1,
            4,
        ),
        BankEntry::new(
            "What is the sum of the interior angles of a hexagon?",
            ["540", "620", "720", "900"],
            2,
            5,
        ),
    ]
}

fn science() -> Vec<BankEntry> {
    vec![
        BankEntry::new(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Mercury"],
            1,
            1,
        ),
        BankEntry::new("What is the chemical symbol for water?", ["O2", "CO2", "H2O", "NaCl"], 2, 1),
        BankEntry::new(
            "What gas do plants absorb for photosynthesis?",
            ["Oxygen", "Nitrogen", "Carbon dioxide", "Helium"],
            2,
            2,
        ),
        BankEntry::new(
            "What is the powerhouse of the cell?",
            ["Nucleus", "Ribosome", "Mitochondria", "Golgi apparatus"],
            2,
            3,
        ),
        BankEntry::new(
            "What particle carries a negative charge?",
            ["Proton", "Neutron", "Electron", "Photon"],
            2,
            3,
        ),
        BankEntry::new(
            "What is the approximate speed of light in vacuum (km/s)?",
            ["3,000", "30,000", "300,000", "3,000,000"],
            2,
            5,
        ),
    ]
}

fn history() -> Vec<BankEntry> {
    vec![
        BankEntry::new(
            "Who was the first President of the United States?",
            ["Thomas Jefferson", "George Washington", "John Adams", "Abraham Lincoln"],
            1,
            1,
        ),
        BankEntry::new("In which year did World War II end?", ["1943", "1944", "1945", "1946"], 2, 2),
        BankEntry::new(
            "Which ancient civilization built Machu Picchu?",
            ["Aztec", "Maya", "Inca", "Olmec"],
            2,
            3,
        ),
        BankEntry::new("In which year did the Berlin Wall fall?", ["1987", "1989", "1991", "1993"], 1, 3),
        BankEntry::new(
            "Which empire was ruled by Suleiman the Magnificent?",
            ["Ottoman", "Mughal", "Byzantine", "Persian"],
            0,
            4,
        ),
        BankEntry::new(
            "Which treaty ended the Thirty Years' War?",
            ["Treaty of Utrecht", "Peace of Westphalia", "Treaty of Paris", "Congress of Vienna"],
            1,
            5,
        ),
    ]
}

fn programming() -> Vec<BankEntry> {
    vec![
        BankEntry::new(
            "Which data structure works on a last-in, first-out basis?",
            ["Queue", "Stack", "Heap", "Tree"],
            1,
            2,
        ),
        BankEntry::new(
            "What does HTTP status code 404 mean?",
            ["Server error", "Redirect", "Not found", "Unauthorized"],
            2,
            2,
        ),
        BankEntry::new(
            "What is the average time complexity of binary search?",
            ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
            1,
            3,
        ),
        BankEntry::new(
            "Which keyword declares an immutable binding in Rust?",
            ["var", "mut", "let", "static mut"],
            2,
            3,
        ),
        BankEntry::new(
            "Which sorting algorithm has the best worst-case complexity?",
            ["Quicksort", "Merge sort", "Bubble sort", "Insertion sort"],
            1,
            4,
        ),
        BankEntry::new(
            "What problem does a mutex primarily prevent?",
            ["Deadlock", "Data races", "Stack overflow", "Memory leaks"],
            1,
            5,
        ),
    ]
}

fn general() -> Vec<BankEntry> {
    vec![
        BankEntry::new(
            "How many days are there in a leap year?",
            ["364", "365", "366", "367"],
            2,
            1,
        ),
        BankEntry::new(
            "Which colour do you get by mixing blue and yellow?",
            ["Green", "Purple", "Orange", "Brown"],
            0,
            1,
        ),
        BankEntry::new(
            "What is the largest ocean on Earth?",
            ["Atlantic", "Indian", "Arctic", "Pacific"],
            3,
            2,
        ),
        BankEntry::new(
            "How many continents are there?",
            ["5", "6", "7", "8"],
            2,
            2,
        ),
        BankEntry::new(
            "What is the capital of Australia?",
            ["Sydney", "Melbourne", "Canberra", "Perth"],
            2,
            3,
        ),
    ]
}
