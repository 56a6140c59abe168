pub mod fruit_and_veg;
pub mod reading_quiz;
pub mod starter;

// Re-export fruit_and_veg forms
pub use fruit_and_veg::{FRUITS, VEG, fruit_and_veg};

// Re-export reading_quiz forms
pub use reading_quiz::reading_quiz;

// Re-export starter forms
pub use starter::{mismatched_cloze, starter_form};
