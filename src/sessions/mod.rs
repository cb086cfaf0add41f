mod recipe;
mod search;

pub use recipe::{cook_time_minutes, RecipeSession, ServingsChange};
pub use search::SearchSession;
