pub struct Collections;

impl Collections {
    // Course content service collections
    pub const CONTENT: &'static str = "content";
    pub const USER_STATS: &'static str = "user_stats";
    pub const USER_PROGRESS: &'static str = "user_progress";
}
