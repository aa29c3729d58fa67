//! Per-menu form state

/// Parse an amount or level field. Anything not a positive integer is 1.
pub fn parse_count(text: &str) -> u32 {
    match text.trim().parse::<i32>() {
        Ok(value) if value >= 1 => value as u32,
        _ => 1,
    }
}

/// Search, filter and spawn options as typed into the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnForm {
    pub search_text: String,
    pub favourites_only: bool,
    pub amount_text: String,
    pub level_text: String,
    pub pickup: bool,
    pub ignore_stack_size: bool,
}

impl Default for SpawnForm {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            favourites_only: false,
            amount_text: "1".to_string(),
            level_text: "1".to_string(),
            pickup: false,
            ignore_stack_size: false,
        }
    }
}

impl SpawnForm {
    pub fn amount(&self) -> u32 {
        parse_count(&self.amount_text)
    }

    pub fn level(&self) -> u32 {
        parse_count(&self.level_text)
    }
}
