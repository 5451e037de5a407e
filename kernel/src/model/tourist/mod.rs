use chrono::{DateTime, NaiveDate, Utc};

use crate::model::id::{TouristId, UserId};

pub mod event;

/// Extended profile every user must complete before making a booking.
#[derive(Debug)]
pub struct Tourist {
    pub tourist_id: TouristId,
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String,
    pub nationality: String,
    pub residence: String,
    pub companions_12: i32,
    pub companions_below_12: i32,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub accommodation: String,
    pub created_at: DateTime<Utc>,
}
