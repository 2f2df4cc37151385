//! Database schema definitions

/// SQL to create the users table
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    email           TEXT UNIQUE,
    password        TEXT
)
"#;

/// SQL to create the journals table
pub const CREATE_JOURNALS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS journals (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    userId          INTEGER,
    image           TEXT,
    description     TEXT,
    date            TEXT,
    category        TEXT,
    rating          INTEGER DEFAULT 3,
    FOREIGN KEY(userId) REFERENCES users(id)
)
"#;

/// SQL to create the per-user listing index
pub const CREATE_JOURNALS_USER_DATE_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_journals_user_date ON journals(userId, date)
"#;

/// All table creation statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_USERS_TABLE,
    CREATE_JOURNALS_TABLE,
];

/// Index statements, run after tables and upgrades
pub const CREATE_ALL_INDEXES: &[&str] = &[CREATE_JOURNALS_USER_DATE_INDEX];

/// Tables owned by the schema manager
pub const TABLE_NAMES: &[&str] = &["users", "journals"];
