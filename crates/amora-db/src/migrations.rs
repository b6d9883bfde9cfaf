use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            user_id     INTEGER PRIMARY KEY,
            username    TEXT NOT NULL,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL DEFAULT '',
            language    TEXT NOT NULL DEFAULT 'english',
            phone       TEXT,
            age         INTEGER,
            gender      TEXT,
            religion    TEXT,
            city        TEXT,
            latitude    REAL,
            longitude   REAL,
            bio         TEXT,
            photos      TEXT NOT NULL DEFAULT '[]',
            is_active   INTEGER NOT NULL DEFAULT 1,
            coins       INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_users_active  ON users(is_active);
        CREATE INDEX IF NOT EXISTS idx_users_gender  ON users(gender);
        CREATE INDEX IF NOT EXISTS idx_users_city    ON users(city);
        CREATE INDEX IF NOT EXISTS idx_users_created ON users(created_at);

        CREATE TABLE IF NOT EXISTS likes (
            liker_id    INTEGER NOT NULL,
            liked_id    INTEGER NOT NULL,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (liker_id, liked_id)
        );

        CREATE INDEX IF NOT EXISTS idx_likes_liked   ON likes(liked_id);
        CREATE INDEX IF NOT EXISTS idx_likes_created ON likes(created_at);

        CREATE TABLE IF NOT EXISTS messages (
            id            TEXT PRIMARY KEY,
            from_user_id  INTEGER NOT NULL,
            to_user_id    INTEGER NOT NULL,
            message_text  TEXT NOT NULL,
            message_type  TEXT NOT NULL DEFAULT 'text',
            media_file_id TEXT,
            is_read       INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_messages_pair    ON messages(from_user_id, to_user_id);
        CREATE INDEX IF NOT EXISTS idx_messages_to      ON messages(to_user_id);
        CREATE INDEX IF NOT EXISTS idx_messages_created ON messages(created_at);

        CREATE TABLE IF NOT EXISTS blocks (
            user_id          INTEGER NOT NULL,
            blocked_user_id  INTEGER NOT NULL,
            created_at       TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (user_id, blocked_user_id)
        );

        CREATE TABLE IF NOT EXISTS complaints (
            id                TEXT PRIMARY KEY,
            user_id           INTEGER NOT NULL,
            reported_user_id  INTEGER,
            complaint_type    TEXT NOT NULL,
            complaint_text    TEXT NOT NULL,
            status            TEXT NOT NULL DEFAULT 'pending',
            created_at        TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_complaints_user    ON complaints(user_id);
        CREATE INDEX IF NOT EXISTS idx_complaints_status  ON complaints(status);
        CREATE INDEX IF NOT EXISTS idx_complaints_created ON complaints(created_at);

        CREATE TABLE IF NOT EXISTS payments (
            id                  TEXT PRIMARY KEY,
            user_id             INTEGER NOT NULL,
            package_name        TEXT NOT NULL,
            coins_amount        INTEGER NOT NULL,
            price               REAL NOT NULL,
            status              TEXT NOT NULL DEFAULT 'pending',
            screenshot_file_id  TEXT NOT NULL,
            admin_notes         TEXT,
            created_at          TEXT NOT NULL DEFAULT (datetime('now')),
            processed_at        TEXT,
            processed_by        INTEGER
        );

        CREATE INDEX IF NOT EXISTS idx_payments_user    ON payments(user_id);
        CREATE INDEX IF NOT EXISTS idx_payments_status  ON payments(status);
        CREATE INDEX IF NOT EXISTS idx_payments_created ON payments(created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
