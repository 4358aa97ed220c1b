// File: usermgmt-core/src/db/seed.rs

use chrono::NaiveDate;
use tracing::info;

use crate::db::Database;
use crate::Error;
use usermgmt_common::models::User;

const SAMPLE_USERS: [(i64, &str, &str, (i32, u32, u32), &str, bool); 11] = [
    (1, "Peter", "Loew", (1975, 5, 14), "ploew@example.com", true),
    (2, "Benjamin Franklin", "Gates", (1964, 3, 15), "bfgates@example.com", true),
    (3, "Castor", "Troy", (1971, 8, 22), "ctroy@example.com", false),
    (4, "Memphis", "Raines", (1969, 11, 3), "mraines@example.com", true),
    (5, "Stanley", "Goodspeed", (1976, 6, 9), "sgodspeed@example.com", true),
    (6, "H.I.", "McDunnough", (1958, 1, 19), "himcdunnough@example.com", true),
    (7, "Cameron", "Poe", (1970, 7, 1), "cpoe@example.com", false),
    (8, "Edward", "Malus", (1965, 10, 31), "emalus@example.com", false),
    (9, "Damon", "Macready", (1960, 9, 25), "dmacready@example.com", false),
    (10, "Johnny", "Blaze", (1981, 2, 17), "jblaze@example.com", true),
    (11, "Robin", "Feld", (1950, 4, 28), "rfeld@example.com", true),
];

impl Database {
    /// Loads the fixed sample users (ids 1 through 11).
    pub async fn seed(&self) -> Result<(), Error> {
        let mut tables = self.write().await;
        for (id, forename, surname, (y, m, d), email, is_active) in SAMPLE_USERS {
            let date_of_birth = NaiveDate::from_ymd_opt(y, m, d)
                .ok_or_else(|| Error::Parse(format!("invalid seed date {}-{}-{}", y, m, d)))?;
            let mut user = User::new(forename, surname, date_of_birth, email, is_active);
            user.id = id;
            tables.users.insert(&user)?;
        }
        info!("Seeded {} sample users", SAMPLE_USERS.len());
        Ok(())
    }
}
