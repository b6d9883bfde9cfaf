use crate::models::{ComplaintRow, PaymentRow, UserRow};
use crate::{Database, format_ts};
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use rusqlite::{Row, types::ToSql};

/// Columns an operator may change through the user update endpoint.
/// Anything else in the request body is dropped.
const USER_UPDATE_COLUMNS: &[&str] = &[
    "username",
    "first_name",
    "last_name",
    "language",
    "phone",
    "age",
    "gender",
    "religion",
    "city",
    "latitude",
    "longitude",
    "bio",
    "photos",
    "is_active",
    "coins",
];

impl Database {
    // -- Users --

    pub fn list_users(&self, skip: u32, limit: u32, search: Option<&str>) -> Result<Vec<UserRow>> {
        let pattern = search.map(|s| format!("%{}%", s));
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, username, first_name, last_name, language, phone, age,
                        gender, religion, city, latitude, longitude, bio, photos,
                        is_active, coins, created_at
                 FROM users
                 WHERE ?1 IS NULL
                    OR username LIKE ?1 OR first_name LIKE ?1 OR last_name LIKE ?1
                 ORDER BY created_at DESC
                 LIMIT ?2 OFFSET ?3",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![pattern, limit, skip], map_user_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_user(&self, user_id: i64) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, username, first_name, last_name, language, phone, age,
                        gender, religion, city, latitude, longitude, bio, photos,
                        is_active, coins, created_at
                 FROM users WHERE user_id = ?1",
            )?;
            stmt.query_row([user_id], map_user_row).optional()
        })
    }

    /// Partial update from a JSON object. Unknown keys are ignored;
    /// returns false when no recognized field is present or no row matched.
    pub fn update_user(
        &self,
        user_id: i64,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<bool> {
        let mut sets: Vec<String> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();
        for (col, value) in fields {
            if !USER_UPDATE_COLUMNS.contains(&col.as_str()) {
                continue;
            }
            params.push(json_param(value)?);
            sets.push(format!("{} = ?{}", col, params.len()));
        }
        if sets.is_empty() {
            return Ok(false);
        }
        params.push(Box::new(user_id));
        let sql = format!(
            "UPDATE users SET {} WHERE user_id = ?{}",
            sets.join(", "),
            params.len()
        );

        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                &sql,
                rusqlite::params_from_iter(params.iter().map(|p| p.as_ref())),
            )?;
            Ok(changed > 0)
        })
    }

    /// Remove a user together with every record that references them:
    /// likes, messages and blocks in either direction, their complaints
    /// and their payments. Runs in a single transaction.
    pub fn delete_user_cascade(&self, user_id: i64) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let deleted = tx.execute("DELETE FROM users WHERE user_id = ?1", [user_id])?;
            if deleted == 0 {
                return Ok(false);
            }
            tx.execute(
                "DELETE FROM likes WHERE liker_id = ?1 OR liked_id = ?1",
                [user_id],
            )?;
            tx.execute(
                "DELETE FROM messages WHERE from_user_id = ?1 OR to_user_id = ?1",
                [user_id],
            )?;
            tx.execute(
                "DELETE FROM blocks WHERE user_id = ?1 OR blocked_user_id = ?1",
                [user_id],
            )?;
            tx.execute("DELETE FROM complaints WHERE user_id = ?1", [user_id])?;
            tx.execute("DELETE FROM payments WHERE user_id = ?1", [user_id])?;
            tx.commit()?;
            Ok(true)
        })
    }

    // -- Payments --

    pub fn list_payments(
        &self,
        skip: u32,
        limit: u32,
        status: Option<&str>,
    ) -> Result<Vec<PaymentRow>> {
        self.with_conn(|conn| {
            // JOIN users to carry the payer's name in a single query
            let mut stmt = conn.prepare(
                "SELECT p.id, p.user_id, p.package_name, p.coins_amount, p.price, p.status,
                        p.screenshot_file_id, p.admin_notes, p.created_at, p.processed_at,
                        p.processed_by, u.username, u.first_name
                 FROM payments p
                 LEFT JOIN users u ON p.user_id = u.user_id
                 WHERE ?1 IS NULL OR p.status = ?1
                 ORDER BY p.created_at DESC
                 LIMIT ?2 OFFSET ?3",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![status, limit, skip], map_payment_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_payment(&self, id: &str) -> Result<Option<PaymentRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT p.id, p.user_id, p.package_name, p.coins_amount, p.price, p.status,
                        p.screenshot_file_id, p.admin_notes, p.created_at, p.processed_at,
                        p.processed_by, u.username, u.first_name
                 FROM payments p
                 LEFT JOIN users u ON p.user_id = u.user_id
                 WHERE p.id = ?1",
            )?;
            stmt.query_row([id], map_payment_row).optional()
        })
    }

    pub fn update_payment_status(
        &self,
        id: &str,
        status: &str,
        admin_id: i64,
        notes: Option<&str>,
    ) -> Result<bool> {
        let processed_at = format_ts(Utc::now());
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "UPDATE payments
                 SET status = ?1, processed_at = ?2, processed_by = ?3, admin_notes = ?4
                 WHERE id = ?5",
                rusqlite::params![status, processed_at, admin_id, notes, id],
            )?;
            Ok(changed > 0)
        })
    }

    // -- Complaints --

    pub fn list_complaints(
        &self,
        skip: u32,
        limit: u32,
        status: Option<&str>,
    ) -> Result<Vec<ComplaintRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, reported_user_id, complaint_type, complaint_text,
                        status, created_at
                 FROM complaints
                 WHERE ?1 IS NULL OR status = ?1
                 ORDER BY created_at DESC
                 LIMIT ?2 OFFSET ?3",
            )?;
            let rows = stmt
                .query_map(rusqlite::params![status, limit, skip], map_complaint_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn update_complaint_status(&self, id: &str, status: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let changed = conn.execute(
                "UPDATE complaints SET status = ?1 WHERE id = ?2",
                rusqlite::params![status, id],
            )?;
            Ok(changed > 0)
        })
    }

    // -- Dashboard counts and aggregates --

    pub fn count_users(&self) -> Result<i64> {
        self.with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?))
    }

    pub fn count_active_users(&self) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM users WHERE is_active = 1",
                [],
                |r| r.get(0),
            )?)
        })
    }

    pub fn count_users_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM users WHERE created_at >= ?1 AND created_at <= ?2",
                [format_ts(start), format_ts(end)],
                |r| r.get(0),
            )?)
        })
    }

    pub fn count_active_users_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM users
                 WHERE is_active = 1 AND created_at >= ?1 AND created_at <= ?2",
                [format_ts(start), format_ts(end)],
                |r| r.get(0),
            )?)
        })
    }

    pub fn count_payments_with_status(&self, status: &str) -> Result<i64> {
        self.with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM payments WHERE status = ?1",
                [status],
                |r| r.get(0),
            )?)
        })
    }

    /// Every like edge as (liker, liked). The mutual-match fold happens
    /// in memory; the likes table is small relative to messages.
    pub fn like_edges(&self) -> Result<Vec<(i64, i64)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT liker_id, liked_id FROM likes")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn gender_counts(&self) -> Result<Vec<(Option<String>, i64)>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT gender, COUNT(*) FROM users GROUP BY gender")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Registrations grouped by calendar day, as (`YYYY-MM-DD`, count),
    /// ascending. Days with no registrations yield no row; the chart
    /// layer zero-fills.
    pub fn registrations_per_day(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<(String, i64)>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT date(created_at) AS day, COUNT(*)
                 FROM users
                 WHERE created_at >= ?1 AND created_at <= ?2
                 GROUP BY day
                 ORDER BY day",
            )?;
            let rows = stmt
                .query_map([format_ts(start), format_ts(end)], |row| {
                    Ok((row.get(0)?, row.get(1)?))
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}

fn map_user_row(row: &Row<'_>) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        user_id: row.get(0)?,
        username: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        language: row.get(4)?,
        phone: row.get(5)?,
        age: row.get(6)?,
        gender: row.get(7)?,
        religion: row.get(8)?,
        city: row.get(9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        bio: row.get(12)?,
        photos: row.get(13)?,
        is_active: row.get(14)?,
        coins: row.get(15)?,
        created_at: row.get(16)?,
    })
}

fn map_payment_row(row: &Row<'_>) -> rusqlite::Result<PaymentRow> {
    Ok(PaymentRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        package_name: row.get(2)?,
        coins_amount: row.get(3)?,
        price: row.get(4)?,
        status: row.get(5)?,
        screenshot_file_id: row.get(6)?,
        admin_notes: row.get(7)?,
        created_at: row.get(8)?,
        processed_at: row.get(9)?,
        processed_by: row.get(10)?,
        username: row.get(11)?,
        first_name: row.get(12)?,
    })
}

fn map_complaint_row(row: &Row<'_>) -> rusqlite::Result<ComplaintRow> {
    Ok(ComplaintRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        reported_user_id: row.get(2)?,
        complaint_type: row.get(3)?,
        complaint_text: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
    })
}

fn json_param(value: &serde_json::Value) -> Result<Box<dyn ToSql>> {
    use serde_json::Value;
    Ok(match value {
        Value::Null => Box::new(rusqlite::types::Null),
        Value::Bool(b) => Box::new(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Box::new(i)
            } else if let Some(f) = n.as_f64() {
                Box::new(f)
            } else {
                return Err(anyhow!("unrepresentable number: {}", n));
            }
        }
        Value::String(s) => Box::new(s.clone()),
        // photos and any future structured field land as JSON text
        other => Box::new(serde_json::to_string(other)?),
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn db() -> Database {
        Database::open_in_memory().expect("in-memory db")
    }

    fn seed_user(db: &Database, user_id: i64, username: &str, first_name: &str) {
        db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (user_id, username, first_name) VALUES (?1, ?2, ?3)",
                rusqlite::params![user_id, username, first_name],
            )?;
            Ok(())
        })
        .expect("seed user");
    }

    fn seed_user_full(
        db: &Database,
        user_id: i64,
        gender: Option<&str>,
        active: bool,
        created_at: &str,
    ) {
        db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (user_id, username, first_name, gender, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    user_id,
                    format!("user{}", user_id),
                    format!("User {}", user_id),
                    gender,
                    active,
                    created_at
                ],
            )?;
            Ok(())
        })
        .expect("seed user");
    }

    fn seed_payment(db: &Database, id: &str, user_id: i64, status: &str) {
        db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO payments (id, user_id, package_name, coins_amount, price,
                                       status, screenshot_file_id)
                 VALUES (?1, ?2, 'starter', 100, 4.99, ?3, 'file-1')",
                rusqlite::params![id, user_id, status],
            )?;
            Ok(())
        })
        .expect("seed payment");
    }

    fn table_count(db: &Database, sql: &str, user_id: i64) -> i64 {
        db.with_conn(|conn| Ok(conn.query_row(sql, [user_id], |r| r.get(0))?))
            .expect("count query")
    }

    #[test]
    fn search_matches_any_name_field_case_insensitively() {
        let db = db();
        seed_user(&db, 1, "alice_w", "Alice");
        seed_user(&db, 2, "bob99", "Robert");
        seed_user(&db, 3, "carol", "Alicia");

        let hits = db.list_users(0, 100, Some("ali")).unwrap();
        let ids: Vec<i64> = hits.iter().map(|u| u.user_id).collect();
        assert!(ids.contains(&1));
        assert!(ids.contains(&3));
        assert!(!ids.contains(&2));

        assert_eq!(db.list_users(0, 100, None).unwrap().len(), 3);
    }

    #[test]
    fn listing_paginates_newest_first() {
        let db = db();
        seed_user_full(&db, 1, None, true, "2026-01-01 10:00:00");
        seed_user_full(&db, 2, None, true, "2026-01-02 10:00:00");
        seed_user_full(&db, 3, None, true, "2026-01-03 10:00:00");

        let page = db.list_users(0, 2, None).unwrap();
        assert_eq!(page.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![3, 2]);

        let rest = db.list_users(2, 2, None).unwrap();
        assert_eq!(rest.iter().map(|u| u.user_id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn update_user_applies_known_fields_only() {
        let db = db();
        seed_user(&db, 7, "dana", "Dana");

        let mut fields = serde_json::Map::new();
        fields.insert("city".into(), serde_json::json!("Lisbon"));
        fields.insert("coins".into(), serde_json::json!(250));
        fields.insert("photos".into(), serde_json::json!(["a.jpg", "b.jpg"]));
        fields.insert("password".into(), serde_json::json!("ignored"));

        assert!(db.update_user(7, &fields).unwrap());

        let user = db.get_user(7).unwrap().unwrap();
        assert_eq!(user.city.as_deref(), Some("Lisbon"));
        assert_eq!(user.coins, 250);
        assert_eq!(user.photos, r#"["a.jpg","b.jpg"]"#);

        // nothing recognized -> nothing changed
        let mut junk = serde_json::Map::new();
        junk.insert("password".into(), serde_json::json!("x"));
        assert!(!db.update_user(7, &junk).unwrap());

        // unknown user -> nothing changed
        assert!(!db.update_user(999, &fields).unwrap());
    }

    #[test]
    fn cascade_delete_leaves_no_dependent_rows() {
        let db = db();
        seed_user(&db, 1, "target", "Target");
        seed_user(&db, 2, "other", "Other");
        db.with_conn_mut(|conn| {
            conn.execute_batch(
                "INSERT INTO likes (liker_id, liked_id) VALUES (1, 2), (2, 1), (2, 3);
                 INSERT INTO messages (id, from_user_id, to_user_id, message_text)
                     VALUES ('m1', 1, 2, 'hi'), ('m2', 2, 1, 'hey'), ('m3', 2, 3, 'yo');
                 INSERT INTO blocks (user_id, blocked_user_id) VALUES (1, 3), (3, 1);
                 INSERT INTO complaints (id, user_id, complaint_type, complaint_text)
                     VALUES ('c1', 1, 'spam', 'spamming'), ('c2', 2, 'abuse', 'rude');
                 INSERT INTO payments (id, user_id, package_name, coins_amount, price,
                                       status, screenshot_file_id)
                     VALUES ('p1', 1, 'starter', 100, 4.99, 'pending', 'f1'),
                            ('p2', 2, 'starter', 100, 4.99, 'pending', 'f2');",
            )?;
            Ok(())
        })
        .unwrap();

        assert!(db.delete_user_cascade(1).unwrap());

        assert!(db.get_user(1).unwrap().is_none());
        assert_eq!(
            table_count(&db, "SELECT COUNT(*) FROM likes WHERE liker_id = ?1 OR liked_id = ?1", 1),
            0
        );
        assert_eq!(
            table_count(
                &db,
                "SELECT COUNT(*) FROM messages WHERE from_user_id = ?1 OR to_user_id = ?1",
                1
            ),
            0
        );
        assert_eq!(
            table_count(
                &db,
                "SELECT COUNT(*) FROM blocks WHERE user_id = ?1 OR blocked_user_id = ?1",
                1
            ),
            0
        );
        assert_eq!(table_count(&db, "SELECT COUNT(*) FROM complaints WHERE user_id = ?1", 1), 0);
        assert_eq!(table_count(&db, "SELECT COUNT(*) FROM payments WHERE user_id = ?1", 1), 0);

        // unrelated records survive
        assert!(db.get_user(2).unwrap().is_some());
        assert_eq!(table_count(&db, "SELECT COUNT(*) FROM likes WHERE liker_id = ?1", 2), 1);
        assert_eq!(table_count(&db, "SELECT COUNT(*) FROM complaints WHERE user_id = ?1", 2), 1);
        assert_eq!(table_count(&db, "SELECT COUNT(*) FROM payments WHERE user_id = ?1", 2), 1);

        assert!(!db.delete_user_cascade(42).unwrap());
    }

    #[test]
    fn payment_listing_joins_payer_and_filters_status() {
        let db = db();
        seed_user(&db, 5, "eve", "Eve");
        seed_payment(&db, "p1", 5, "pending");
        seed_payment(&db, "p2", 5, "approved");
        seed_payment(&db, "p3", 99, "pending"); // payer record missing

        let pending = db.list_payments(0, 100, Some("pending")).unwrap();
        assert_eq!(pending.len(), 2);
        let p1 = pending.iter().find(|p| p.id == "p1").unwrap();
        assert_eq!(p1.username.as_deref(), Some("eve"));
        assert_eq!(p1.first_name.as_deref(), Some("Eve"));
        let p3 = pending.iter().find(|p| p.id == "p3").unwrap();
        assert!(p3.username.is_none());

        assert_eq!(db.list_payments(0, 100, None).unwrap().len(), 3);
    }

    #[test]
    fn payment_status_update_stamps_processing_fields() {
        let db = db();
        seed_user(&db, 5, "eve", "Eve");
        seed_payment(&db, "p1", 5, "pending");

        assert!(db.update_payment_status("p1", "approved", 1, Some("looks fine")).unwrap());

        let payment = db.get_payment("p1").unwrap().unwrap();
        assert_eq!(payment.status, "approved");
        assert_eq!(payment.processed_by, Some(1));
        assert_eq!(payment.admin_notes.as_deref(), Some("looks fine"));
        assert!(payment.processed_at.is_some());

        assert!(!db.update_payment_status("nope", "approved", 1, None).unwrap());
    }

    #[test]
    fn complaint_status_update_reports_misses() {
        let db = db();
        db.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO complaints (id, user_id, complaint_type, complaint_text)
                 VALUES ('c1', 1, 'spam', 'spamming')",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        assert!(db.update_complaint_status("c1", "resolved").unwrap());
        let complaints = db.list_complaints(0, 100, Some("resolved")).unwrap();
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].status, "resolved");

        assert!(!db.update_complaint_status("missing", "resolved").unwrap());
    }

    #[test]
    fn window_counts_use_inclusive_bounds() {
        let db = db();
        seed_user_full(&db, 1, None, true, "2026-01-10 00:00:00");
        seed_user_full(&db, 2, None, false, "2026-01-15 12:00:00");
        seed_user_full(&db, 3, None, true, "2026-01-20 00:00:00");
        seed_user_full(&db, 4, None, true, "2026-02-01 00:00:00");

        let start = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 1, 20, 0, 0, 0).unwrap();

        assert_eq!(db.count_users().unwrap(), 4);
        assert_eq!(db.count_active_users().unwrap(), 3);
        assert_eq!(db.count_users_created_between(start, end).unwrap(), 3);
        assert_eq!(db.count_active_users_created_between(start, end).unwrap(), 2);
        assert_eq!(
            db.count_users_created_between(start, end - Duration::seconds(1)).unwrap(),
            2
        );
    }

    #[test]
    fn gender_and_registration_aggregates() {
        let db = db();
        seed_user_full(&db, 1, Some("male"), true, "2026-03-01 08:00:00");
        seed_user_full(&db, 2, Some("female"), true, "2026-03-01 09:00:00");
        seed_user_full(&db, 3, None, true, "2026-03-03 09:00:00");

        let mut genders = db.gender_counts().unwrap();
        genders.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            genders,
            vec![
                (None, 1),
                (Some("female".to_string()), 1),
                (Some("male".to_string()), 1)
            ]
        );

        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap();
        let per_day = db.registrations_per_day(start, end).unwrap();
        assert_eq!(
            per_day,
            vec![("2026-03-01".to_string(), 2), ("2026-03-03".to_string(), 1)]
        );
    }

    #[test]
    fn like_edges_round_trip() {
        let db = db();
        db.with_conn_mut(|conn| {
            conn.execute_batch(
                "INSERT INTO likes (liker_id, liked_id) VALUES (1, 2), (2, 1), (1, 3);",
            )?;
            Ok(())
        })
        .unwrap();

        let mut edges = db.like_edges().unwrap();
        edges.sort();
        assert_eq!(edges, vec![(1, 2), (1, 3), (2, 1)]);
    }
}
