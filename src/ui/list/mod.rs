mod intent;
mod reducer;

pub use intent::ListIntent;
pub use reducer::{sort_by_display_name, ListReducer};
