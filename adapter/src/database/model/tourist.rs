use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use kernel::model::{
    id::{TouristId, UserId},
    tourist::Tourist,
};

#[derive(FromRow)]
pub struct TouristRow {
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

impl From<TouristRow> for Tourist {
    fn from(value: TouristRow) -> Self {
        let TouristRow {
            tourist_id,
            user_id,
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
            created_at,
        } = value;
        Tourist {
            tourist_id,
            user_id,
            first_name,
            last_name,
            email,
            phone,
            age,
            gender,
            nationality,
            residence,
            companions_12,
            companions_below_12,
            arrival_date,
            departure_date,
            accommodation,
            created_at,
        }
    }
}
