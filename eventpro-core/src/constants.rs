/// Key the event collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "events";

/// en-US style "Thu, Jan 1, 2099".
pub const DEFAULT_DATE_FORMAT: &str = "%a, %b %-d, %Y";

pub const NOTIFY_PREFIX: &str = "[EventPro]";

pub const CREATED_MESSAGE: &str = "Event successfully deployed with allocated budget.";

pub const DELETE_PROMPT: &str = "Are you sure you want to remove this event?";
