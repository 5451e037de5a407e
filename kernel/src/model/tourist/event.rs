use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::UserId;

#[derive(new)]
pub struct RegisterTourist {
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
}
