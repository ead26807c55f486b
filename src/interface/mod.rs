pub mod prompts;
pub mod render;

pub use prompts::{collect_user_stats, prompt_recipe, prompt_yes_no};
pub use render::{
    display_instructions, display_macro_targets, display_meal_plan, display_shopping_list,
};
