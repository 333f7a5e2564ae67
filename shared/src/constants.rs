pub const STORAGE_KEY: &str = "wheel-of-names-storage";
pub const TEAMS_STORAGE_KEY: &str = "wheel-of-names-teams";

pub const DEFAULT_TITLE: &str = "Wheel of Names";
pub const EMPTY_WHEEL_MESSAGE: &str = "Add names to spin!";
pub const ADHOC_PLACEHOLDER: &str = "Enter names separated by commas, enter to spin";
pub const WINNER_HEADING: &str = "We have a winner!";

pub const ADHOC_ID_PREFIX: &str = "adhoc-";
pub const MIN_SEGMENTS: usize = 2;
pub const MAX_LABEL_CHARS: usize = 15;
pub const MAX_NAME_LENGTH: u64 = 50;

pub const INVALID_NAME_ERROR: &str = "Name must be between 1 and 50 characters";
pub const INVALID_AVATAR_URL_ERROR: &str = "Avatar must be an http(s) URL";
